// GIP client device facades
//
// Per-client facades a GIP controller driver hands to the host: battery
// status reporting, indicator-light control, remappable button profiles,
// and virtual input device identity. The wire transport and the host
// subsystems stay behind the `gip-transport` and `hal` contracts.

pub mod battery;
pub mod error;
pub mod hal;
pub mod input;
pub mod led;
pub mod profile;

pub use battery::{map_battery, BatteryReporter, CapacityLevel, PowerSupplyStatus};
pub use error::{InitError, ModeWriteError, ValidationError};
pub use input::{BusType, InputIdentity, VirtualInput};
pub use led::{IndicatorController, LedCapability, BRIGHTNESS_DEFAULT, BRIGHTNESS_MAX};
pub use profile::{codes, Binding, Layer, Profile, ProfileSet, ProfileStore};

// Re-export the transport vocabulary consumers need at the facade boundary
pub use gip_transport::{
    BatteryLevel, BatteryType, ClientId, ClientInfo, HardwareInfo, ProtocolBus, ProtocolError,
};
