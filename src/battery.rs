//! Battery status facade
//!
//! Maps raw battery events from the bus to a host power-supply status and
//! capacity pair. Every report triggers a change notification - the host
//! deduplicates if it cares, we do not.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use gip_transport::{BatteryLevel, BatteryType, ClientInfo};

use crate::error::InitError;
use crate::hal::{PowerSubsystem, PowerSupplyDesc, PowerSupplyHandle, PowerSupplyScope};

/// Power supply status values (host power-supply vocabulary)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerSupplyStatus {
    Unknown,
    Charging,
    Discharging,
    NotCharging,
    Full,
}

impl PowerSupplyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Charging => "Charging",
            Self::Discharging => "Discharging",
            Self::NotCharging => "Not charging",
            Self::Full => "Full",
        }
    }
}

/// Coarse capacity level reported to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityLevel {
    Unknown,
    Low,
    Normal,
    High,
    Full,
}

impl CapacityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Low => "Low",
            Self::Normal => "Normal",
            Self::High => "High",
            Self::Full => "Full",
        }
    }
}

/// Map one raw battery event to a status/capacity pair
///
/// Pure function of its inputs. A client without a battery reports
/// "not charging" and an unknown capacity; anything with a battery is
/// treated as discharging (charge state is not carried by the event).
pub fn map_battery(ty: BatteryType, level: BatteryLevel) -> (PowerSupplyStatus, CapacityLevel) {
    if ty == BatteryType::None {
        return (PowerSupplyStatus::NotCharging, CapacityLevel::Unknown);
    }

    let capacity = match level {
        BatteryLevel::Low => CapacityLevel::Low,
        BatteryLevel::Normal => CapacityLevel::Normal,
        BatteryLevel::High => CapacityLevel::High,
        BatteryLevel::Full => CapacityLevel::Full,
        BatteryLevel::Unknown => CapacityLevel::Unknown,
    };

    (PowerSupplyStatus::Discharging, capacity)
}

#[derive(Debug, Clone, Copy)]
struct ChargeState {
    status: PowerSupplyStatus,
    capacity: CapacityLevel,
}

/// Battery status facade for one client
pub struct BatteryReporter {
    power: Arc<dyn PowerSubsystem>,
    handle: PowerSupplyHandle,
    name: String,
    state: Mutex<ChargeState>,
}

impl std::fmt::Debug for BatteryReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatteryReporter")
            .field("handle", &self.handle)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl BatteryReporter {
    /// Register a battery provider for a client
    ///
    /// Fails if the host cannot allocate the provider; the caller aborts
    /// this facade only.
    pub fn init(
        power: Arc<dyn PowerSubsystem>,
        client: &ClientInfo,
        display_name: &str,
    ) -> Result<Self, InitError> {
        let handle = power
            .register(PowerSupplyDesc {
                name: client.dev_name.clone(),
                model_name: display_name.to_string(),
                scope: PowerSupplyScope::Device,
            })
            .map_err(|source| InitError::Register {
                facade: "battery",
                source,
            })?;

        Ok(Self {
            power,
            handle,
            name: display_name.to_string(),
            state: Mutex::new(ChargeState {
                status: PowerSupplyStatus::Unknown,
                capacity: CapacityLevel::Unknown,
            }),
        })
    }

    /// Apply one battery event and notify the host
    ///
    /// The notification is unconditional - two identical reports produce
    /// two notifications.
    pub fn report(&self, ty: BatteryType, level: BatteryLevel) {
        let (status, capacity) = map_battery(ty, level);

        debug!(name = %self.name, ?status, ?capacity, "battery report");

        {
            let mut state = self.state.lock();
            state.status = status;
            state.capacity = capacity;
        }

        self.power.notify_changed(self.handle);
    }

    /// Current status, for the host provider callback
    pub fn status(&self) -> PowerSupplyStatus {
        self.state.lock().status
    }

    /// Current capacity level, for the host provider callback
    pub fn capacity(&self) -> CapacityLevel {
        self.state.lock().capacity
    }

    /// User-facing model name
    pub fn name(&self) -> &str {
        &self.name
    }
}
