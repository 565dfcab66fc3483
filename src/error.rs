//! Facade error types
//!
//! Three categories, handled differently: `InitError` is fatal to the one
//! facade being brought up and propagates to the attach orchestrator;
//! `ValidationError` rejects an attribute write locally with state
//! unchanged; `ProtocolError` (from `gip-transport`) is logged and swallowed
//! on best-effort paths, returned where the caller asked for the command.
//! Nothing in this crate retries.

use gip_transport::ProtocolError;
use thiserror::Error;

use crate::hal::RegisterError;

/// Bring-up failure - fatal to this one facade
#[derive(Error, Debug)]
pub enum InitError {
    #[error("{facade} registration failed: {source}")]
    Register {
        facade: &'static str,
        #[source]
        source: RegisterError,
    },

    #[error("Attribute node '{name}' creation failed: {source}")]
    Node {
        name: &'static str,
        #[source]
        source: RegisterError,
    },
}

/// Malformed or out-of-range attribute write - rejected, state unchanged
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Not an unsigned decimal in 0-255: {input:?}")]
    Parse { input: String },

    #[error("Unknown binding: {0:?}")]
    UnknownBinding(String),

    #[error("{what} index {value} out of range (max {max})")]
    IndexOutOfRange {
        what: &'static str,
        value: u8,
        max: u8,
    },
}

/// Failure of the LED-mode text endpoint: either the text was bad or the
/// bus rejected the resulting command
#[derive(Error, Debug)]
pub enum ModeWriteError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}
