//! Virtual input device identity
//!
//! Builds the immutable identity metadata for a client's virtual input
//! device. Event injection belongs to the input collaborator; nothing here
//! moves after construction.

use std::sync::Arc;

use gip_transport::ClientInfo;

use crate::error::InitError;
use crate::hal::{InputHandle, InputSubsystem};

/// Bus type reported on the input device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusType {
    Virtual,
}

/// Immutable identity of a virtual input device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputIdentity {
    pub name: String,
    /// Physical path, "{dev_name}/input0"
    pub phys: String,
    pub bus_type: BusType,
    pub vendor: u16,
    pub product: u16,
    pub version: u16,
}

/// Allocated virtual input device plus its identity
///
/// Lifetime is the owning client's lifetime; the handle is released by the
/// host when the client detaches.
#[derive(Debug)]
pub struct VirtualInput {
    handle: InputHandle,
    identity: InputIdentity,
}

impl VirtualInput {
    /// Allocate a device and build its identity from the client descriptor
    pub fn init(
        input: Arc<dyn InputSubsystem>,
        client: &ClientInfo,
        name: &str,
    ) -> Result<Self, InitError> {
        let handle = input.allocate().map_err(|source| InitError::Register {
            facade: "input",
            source,
        })?;

        Ok(Self {
            handle,
            identity: InputIdentity {
                name: name.to_string(),
                phys: format!("{}/input0", client.dev_name),
                bus_type: BusType::Virtual,
                vendor: client.hardware.vendor,
                product: client.hardware.product,
                version: client.hardware.version,
            },
        })
    }

    pub fn identity(&self) -> &InputIdentity {
        &self.identity
    }

    pub fn handle(&self) -> InputHandle {
        self.handle
    }
}
