//! Protocol bus contract for GIP game controller clients
//!
//! The wire framing itself belongs to the bus implementation; this crate
//! defines what client-side facades are allowed to assume: synchronous,
//! bounded command delivery plus the shared client/battery vocabulary.

pub mod command;
pub mod error;
pub mod protocol;
pub mod types;

pub use command::{GipCommand, SetLedColor, SetLedMode};
pub use error::ProtocolError;
pub use protocol::{battery, cmd, led_mode};
pub use types::{BatteryLevel, BatteryType, ClientId, ClientInfo, HardwareInfo};

/// The core bus trait - the one contract facades hold against the transport
///
/// Commands are synchronous and bounded by the bus's own timeout. No retry
/// or backoff happens at this level.
pub trait ProtocolBus: Send + Sync {
    /// Send a command to a client
    ///
    /// # Arguments
    /// * `client` - Target client on the bus
    /// * `opcode` - Command opcode (e.g. `cmd::LED`)
    /// * `payload` - Command payload (without the opcode)
    fn send(&self, client: ClientId, opcode: u8, payload: &[u8]) -> Result<(), ProtocolError>;
}
