// Host subsystem contracts - descriptors, handles and registration traits

use thiserror::Error;

/// Registration failure reported by a host subsystem
#[derive(Error, Debug)]
pub enum RegisterError {
    #[error("Out of resources")]
    Exhausted,

    #[error("Registration rejected: {0}")]
    Rejected(String),
}

/// Opaque handle to a registered power supply provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PowerSupplyHandle(pub u64);

/// Opaque handle to a registered LED device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LedHandle(pub u64);

/// Opaque handle to an allocated input device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputHandle(pub u64);

/// Opaque handle to an attribute node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(pub u64);

/// Opaque handle to an attribute group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupHandle(pub u64);

/// Visibility scope of a power supply provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerSupplyScope {
    /// Powers the whole system
    System,
    /// Powers one device only
    Device,
}

/// Descriptor for registering a battery provider
#[derive(Debug, Clone)]
pub struct PowerSupplyDesc {
    /// Provider name, conventionally the client's device name
    pub name: String,
    /// User-facing model name
    pub model_name: String,
    pub scope: PowerSupplyScope,
}

/// Color identity of one sub-channel of a multi-color LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedColorId {
    Red,
    Green,
    Blue,
}

/// One sub-channel of a multi-color LED device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedChannelDesc {
    pub color: LedColorId,
    /// Hardware channel index; must be distinct per channel
    pub channel: u8,
}

/// Channel layout of an LED device
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedChannels {
    /// Single white channel
    Single,
    /// Three-channel multi-color device
    Multi([LedChannelDesc; 3]),
}

/// Descriptor for registering an LED device
#[derive(Debug, Clone)]
pub struct LedDeviceDesc {
    /// Device name, e.g. "gip0.2:rgb:status"
    pub name: String,
    pub brightness: u8,
    pub max_brightness: u8,
    pub channels: LedChannels,
}

/// Host power-reporting subsystem
pub trait PowerSubsystem: Send + Sync {
    /// Register a battery provider for a client
    fn register(&self, desc: PowerSupplyDesc) -> Result<PowerSupplyHandle, RegisterError>;

    /// Notify the host that the provider's values changed (fire-and-forget)
    fn notify_changed(&self, handle: PowerSupplyHandle);
}

/// Host LED-class subsystem
pub trait LedSubsystem: Send + Sync {
    /// Register an LED device (single- or multi-channel per the descriptor)
    fn register(&self, desc: LedDeviceDesc) -> Result<LedHandle, RegisterError>;
}

/// Host input-device subsystem
pub trait InputSubsystem: Send + Sync {
    /// Allocate a virtual input device
    fn allocate(&self) -> Result<InputHandle, RegisterError>;
}

/// Host attribute filesystem
pub trait AttributeTree: Send + Sync {
    /// Create one addressable attribute node under the client's namespace
    fn create_node(&self, name: &'static str) -> Result<NodeHandle, RegisterError>;

    /// Create a group collecting previously created nodes
    fn create_group(&self, name: &str, nodes: &[NodeHandle]) -> Result<GroupHandle, RegisterError>;

    fn release_node(&self, handle: NodeHandle);

    fn release_group(&self, handle: GroupHandle);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_channel_layout() {
        let channels = LedChannels::Multi([
            LedChannelDesc {
                color: LedColorId::Red,
                channel: 0,
            },
            LedChannelDesc {
                color: LedColorId::Green,
                channel: 1,
            },
            LedChannelDesc {
                color: LedColorId::Blue,
                channel: 2,
            },
        ]);

        if let LedChannels::Multi(descs) = &channels {
            let mut indices: Vec<u8> = descs.iter().map(|c| c.channel).collect();
            indices.dedup();
            assert_eq!(indices, vec![0, 1, 2]);
        } else {
            unreachable!();
        }
    }
}
