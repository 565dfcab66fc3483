//! Protocol bus error types

use thiserror::Error;

/// Errors returned by the protocol bus when a command cannot be delivered
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Client disconnected")]
    Disconnected,

    #[error("Command timed out")]
    Timeout,

    #[error("Client does not support command 0x{0:02X}")]
    UnsupportedCommand(u8),

    #[error("Bus error: {0}")]
    Bus(String),
}
