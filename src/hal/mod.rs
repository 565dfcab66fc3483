// Host abstraction layer for the kernel-facing subsystems
//
// Facades never talk to the power-supply core, the LED class, the input
// core or the attribute filesystem directly; everything goes through these
// contracts so the host side stays swappable (and mockable in tests).

pub mod interface;

pub use interface::{
    AttributeTree, GroupHandle, InputHandle, InputSubsystem, LedChannelDesc, LedChannels,
    LedColorId, LedDeviceDesc, LedHandle, LedSubsystem, NodeHandle, PowerSubsystem,
    PowerSupplyDesc, PowerSupplyHandle, PowerSupplyScope, RegisterError,
};
