//! Indicator light facade
//!
//! Owns the display mode and brightness for one client's status light and
//! reflects changes onto the bus. State is persisted optimistically: a
//! failed command leaves the stored value ahead of the physical light
//! until the next successful write.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, error};

use gip_transport::{led_mode, ClientId, ClientInfo, GipCommand, ProtocolBus, ProtocolError,
    SetLedColor, SetLedMode};

use crate::error::{InitError, ModeWriteError, ValidationError};
use crate::hal::{LedChannelDesc, LedChannels, LedColorId, LedDeviceDesc, LedHandle, LedSubsystem};

/// Brightness applied at attach
pub const BRIGHTNESS_DEFAULT: u8 = 20;

/// Upper bound of the brightness scale
pub const BRIGHTNESS_MAX: u8 = 50;

/// Shape of the indicator light hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedCapability {
    /// Three-channel multi-color light
    Rgb,
    /// Single white light
    White,
}

#[derive(Debug)]
struct IndicatorState {
    mode: u8,
    brightness: u8,
    /// Full-brightness intensity per (red, green, blue) channel;
    /// present iff the light is multi-color
    intensities: Option<[u8; 3]>,
}

impl IndicatorState {
    /// Scale each channel's intensity by the global brightness
    ///
    /// Monotonic in `brightness`: at 0 every channel is off, at
    /// `BRIGHTNESS_MAX` each channel reaches its full intensity.
    fn color_components(&self, brightness: u8) -> Option<(u8, u8, u8)> {
        let intensities = self.intensities.as_ref()?;
        let scale =
            |i: u8| -> u8 { (i as u16 * brightness as u16 / BRIGHTNESS_MAX as u16) as u8 };
        Some((
            scale(intensities[0]),
            scale(intensities[1]),
            scale(intensities[2]),
        ))
    }
}

/// Indicator light facade for one client
pub struct IndicatorController {
    bus: Arc<dyn ProtocolBus>,
    client: ClientId,
    handle: LedHandle,
    state: Mutex<IndicatorState>,
    unregistering: AtomicBool,
}

impl std::fmt::Debug for IndicatorController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndicatorController")
            .field("client", &self.client)
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}

impl IndicatorController {
    /// Bring up the indicator light and register it with the host
    ///
    /// Issues the initial mode command; if the bus rejects it the light may
    /// start in an unknown physical state, which is logged but not fatal.
    /// Host registration failure is fatal to this facade.
    pub fn init(
        bus: Arc<dyn ProtocolBus>,
        leds: Arc<dyn LedSubsystem>,
        client: &ClientInfo,
        capability: LedCapability,
    ) -> Result<Self, InitError> {
        let initial = SetLedMode {
            mode: led_mode::ON,
            brightness: BRIGHTNESS_DEFAULT,
        };
        if let Err(err) = initial.send_via(bus.as_ref(), client.id) {
            error!(client = %client.id, %err, "initial LED mode failed");
        }

        let (name, channels, intensities) = match capability {
            LedCapability::Rgb => {
                let descs = [
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
                ];
                (
                    format!("{}:rgb:status", client.dev_name),
                    LedChannels::Multi(descs),
                    Some([u8::MAX; 3]),
                )
            }
            LedCapability::White => (
                format!("{}:white:status", client.dev_name),
                LedChannels::Single,
                None,
            ),
        };

        let handle = leds
            .register(LedDeviceDesc {
                name,
                brightness: BRIGHTNESS_DEFAULT,
                max_brightness: BRIGHTNESS_MAX,
                channels,
            })
            .map_err(|source| InitError::Register {
                facade: "led",
                source,
            })?;

        Ok(Self {
            bus,
            client: client.id,
            handle,
            state: Mutex::new(IndicatorState {
                mode: led_mode::ON,
                brightness: BRIGHTNESS_DEFAULT,
                intensities,
            }),
            unregistering: AtomicBool::new(false),
        })
    }

    /// Set the display mode
    ///
    /// The mode is persisted before the command goes out; on failure the
    /// stored mode is not rolled back, leaving a known inconsistency window
    /// between stored and device-actual state.
    pub fn set_mode(&self, mode: u8) -> Result<(), ProtocolError> {
        let brightness = {
            let mut state = self.state.lock();
            state.mode = mode;
            state.brightness
        };

        debug!(client = %self.client, mode, "set LED mode");

        SetLedMode { mode, brightness }
            .send_via(self.bus.as_ref(), self.client)
            .map_err(|err| {
                error!(client = %self.client, %err, "set LED mode failed");
                err
            })
    }

    /// Host brightness-change hook
    ///
    /// No-op once teardown has begun. Otherwise persists the new brightness,
    /// reissues the mode command, and for multi-color lights recomputes the
    /// per-channel values and sends one color command. Both sends are
    /// best-effort; failures are logged only.
    pub fn on_brightness_change(&self, brightness: u8) {
        if self.unregistering.load(Ordering::SeqCst) {
            return;
        }

        let brightness = brightness.min(BRIGHTNESS_MAX);
        debug!(client = %self.client, brightness, "brightness change");

        let (mode, color) = {
            let mut state = self.state.lock();
            state.brightness = brightness;
            (state.mode, state.color_components(brightness))
        };

        if let Err(err) =
            (SetLedMode { mode, brightness }).send_via(self.bus.as_ref(), self.client)
        {
            error!(client = %self.client, %err, "set LED mode failed");
        }

        if let Some((red, green, blue)) = color {
            if let Err(err) =
                (SetLedColor { red, green, blue }).send_via(self.bus.as_ref(), self.client)
            {
                error!(client = %self.client, %err, "set LED color failed");
            }
        }
    }

    /// Mark the device as mid-teardown; later brightness callbacks no-op
    pub fn begin_teardown(&self) {
        self.unregistering.store(true, Ordering::SeqCst);
    }

    /// Current mode as decimal text, for the mode attribute
    pub fn mode_show(&self) -> String {
        self.state.lock().mode.to_string()
    }

    /// Parse and apply a decimal mode written to the mode attribute
    pub fn mode_store(&self, text: &str) -> Result<(), ModeWriteError> {
        let mode: u8 = text
            .trim()
            .parse()
            .map_err(|_| ValidationError::Parse {
                input: text.to_string(),
            })?;
        self.set_mode(mode)?;
        Ok(())
    }

    pub fn mode(&self) -> u8 {
        self.state.lock().mode
    }

    pub fn brightness(&self) -> u8 {
        self.state.lock().brightness
    }

    pub fn handle(&self) -> LedHandle {
        self.handle
    }
}
