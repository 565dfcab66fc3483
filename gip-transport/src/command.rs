//! Type-safe command builders for the GIP wire contract
//!
//! Payload layouts are fixed by the firmware; each builder owns its opcode
//! and byte layout so callers never assemble raw buffers.

use tracing::trace;
use zerocopy::{Immutable, IntoBytes, KnownLayout};

use crate::error::ProtocolError;
use crate::protocol::cmd;
use crate::types::ClientId;
use crate::ProtocolBus;

/// A command that can be serialized and sent to a client
pub trait GipCommand {
    /// Command opcode (e.g. 0x0A for LED)
    const OPCODE: u8;

    /// Serialize to payload bytes (excluding the opcode)
    fn to_data(&self) -> Vec<u8>;

    /// Send this command over the given bus
    fn send_via(&self, bus: &dyn ProtocolBus, client: ClientId) -> Result<(), ProtocolError> {
        trace!(client = %client, command = cmd::name(Self::OPCODE), "send");
        bus.send(client, Self::OPCODE, &self.to_data())
    }
}

/// Indicator light mode + brightness
///
/// Wire layout: `[reserved=0, mode, brightness]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetLedMode {
    pub mode: u8,
    pub brightness: u8,
}

#[derive(IntoBytes, Immutable, KnownLayout)]
#[repr(C)]
struct LedPayload {
    reserved: u8,
    mode: u8,
    brightness: u8,
}

impl GipCommand for SetLedMode {
    const OPCODE: u8 = cmd::LED;

    fn to_data(&self) -> Vec<u8> {
        LedPayload {
            reserved: 0,
            mode: self.mode,
            brightness: self.brightness,
        }
        .as_bytes()
        .to_vec()
    }
}

/// Per-channel color for multi-color indicator lights
///
/// Wire layout: `[red, green, blue]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetLedColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

#[derive(IntoBytes, Immutable, KnownLayout)]
#[repr(C)]
struct RgbPayload {
    red: u8,
    green: u8,
    blue: u8,
}

impl GipCommand for SetLedColor {
    const OPCODE: u8 = cmd::RGB_LED;

    fn to_data(&self) -> Vec<u8> {
        RgbPayload {
            red: self.red,
            green: self.green,
            blue: self.blue,
        }
        .as_bytes()
        .to_vec()
    }
}
