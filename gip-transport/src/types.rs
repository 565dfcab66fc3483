//! Shared client and battery types

use serde::{Deserialize, Serialize};

use crate::protocol::battery;

/// Identifies one connected client on the protocol bus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(pub u8);

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "gip{}", self.0)
    }
}

/// Hardware identity reported by the client during announce
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareInfo {
    pub vendor: u16,
    pub product: u16,
    pub version: u16,
}

/// Per-client descriptor handed to the device facades at attach
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInfo {
    pub id: ClientId,
    /// Host-side device name (e.g. "gip0.2")
    pub dev_name: String,
    pub hardware: HardwareInfo,
}

impl ClientInfo {
    pub fn new(id: ClientId, dev_name: impl Into<String>, hardware: HardwareInfo) -> Self {
        Self {
            id,
            dev_name: dev_name.into(),
            hardware,
        }
    }
}

/// Power source type from a STATUS packet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BatteryType {
    /// No battery present (wired, or accessory without one)
    None,
    Standard,
    Rechargeable,
    ChargeKit,
    /// Raw value outside the known set
    Unknown,
}

impl BatteryType {
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            battery::TYPE_NONE => Self::None,
            battery::TYPE_STANDARD => Self::Standard,
            battery::TYPE_RECHARGEABLE => Self::Rechargeable,
            battery::TYPE_CHARGE_KIT => Self::ChargeKit,
            _ => Self::Unknown,
        }
    }
}

/// Coarse charge level from a STATUS packet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BatteryLevel {
    Low,
    Normal,
    High,
    Full,
    /// Raw value outside the known set
    Unknown,
}

impl BatteryLevel {
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            battery::LEVEL_LOW => Self::Low,
            battery::LEVEL_NORMAL => Self::Normal,
            battery::LEVEL_HIGH => Self::High,
            battery::LEVEL_FULL => Self::Full,
            _ => Self::Unknown,
        }
    }
}
