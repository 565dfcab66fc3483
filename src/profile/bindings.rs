//! Binding descriptors for remappable controller layers
//!
//! One ordered enum drives everything: attribute node names, the default
//! table, and storage offsets. Adding a field means adding one variant and
//! two match arms; no parallel tables to keep in step.

use serde::{Deserialize, Serialize};

/// Physical-control codes carried in button bindings
pub mod codes {
    /// Paddle not mapped to anything
    pub const UNMAPPED: u8 = 0x00;
    /// Trigger bound to itself
    pub const TRIGGER_DEFAULT: u8 = 0x00;

    pub const A: u8 = 0x01;
    pub const B: u8 = 0x02;
    pub const X: u8 = 0x03;
    pub const Y: u8 = 0x04;
    pub const DPAD_UP: u8 = 0x05;
    pub const DPAD_DOWN: u8 = 0x06;
    pub const DPAD_LEFT: u8 = 0x07;
    pub const DPAD_RIGHT: u8 = 0x08;
    pub const LB: u8 = 0x09;
    pub const RB: u8 = 0x0A;
    pub const LS_CLICK: u8 = 0x0B;
    pub const RS_CLICK: u8 = 0x0C;
}

/// One remappable binding within a layer
///
/// Discriminants double as storage offsets; the declaration order is the
/// attribute registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Binding {
    RightTopPaddle = 0,
    RightBottomPaddle,
    LeftTopPaddle,
    LeftBottomPaddle,
    A,
    B,
    X,
    Y,
    DpadUp,
    DpadDown,
    DpadLeft,
    DpadRight,
    Lb,
    Rb,
    LsClick,
    RsClick,
    Lt,
    Rt,
    LeftMainVibration,
    RightMainVibration,
    LeftTriggerVibration,
    RightTriggerVibration,
    LtDeadzoneMax,
    LtDeadzoneMin,
    RtDeadzoneMax,
    RtDeadzoneMin,
    GuideRed,
    GuideGreen,
    GuideBlue,
}

impl Binding {
    /// Number of bindings per layer
    pub const COUNT: usize = 29;

    /// Every binding, in attribute registration order
    pub const ALL: [Binding; Self::COUNT] = [
        Binding::RightTopPaddle,
        Binding::RightBottomPaddle,
        Binding::LeftTopPaddle,
        Binding::LeftBottomPaddle,
        Binding::A,
        Binding::B,
        Binding::X,
        Binding::Y,
        Binding::DpadUp,
        Binding::DpadDown,
        Binding::DpadLeft,
        Binding::DpadRight,
        Binding::Lb,
        Binding::Rb,
        Binding::LsClick,
        Binding::RsClick,
        Binding::Lt,
        Binding::Rt,
        Binding::LeftMainVibration,
        Binding::RightMainVibration,
        Binding::LeftTriggerVibration,
        Binding::RightTriggerVibration,
        Binding::LtDeadzoneMax,
        Binding::LtDeadzoneMin,
        Binding::RtDeadzoneMax,
        Binding::RtDeadzoneMin,
        Binding::GuideRed,
        Binding::GuideGreen,
        Binding::GuideBlue,
    ];

    /// Attribute node name
    pub fn name(self) -> &'static str {
        match self {
            Self::RightTopPaddle => "right_top_paddle",
            Self::RightBottomPaddle => "right_bottom_paddle",
            Self::LeftTopPaddle => "left_top_paddle",
            Self::LeftBottomPaddle => "left_bottom_paddle",
            Self::A => "a",
            Self::B => "b",
            Self::X => "x",
            Self::Y => "y",
            Self::DpadUp => "dpad_up",
            Self::DpadDown => "dpad_down",
            Self::DpadLeft => "dpad_left",
            Self::DpadRight => "dpad_right",
            Self::Lb => "lb",
            Self::Rb => "rb",
            Self::LsClick => "ls_click",
            Self::RsClick => "rs_click",
            Self::Lt => "lt",
            Self::Rt => "rt",
            Self::LeftMainVibration => "left_main_vibration",
            Self::RightMainVibration => "right_main_vibration",
            Self::LeftTriggerVibration => "left_trigger_vibration",
            Self::RightTriggerVibration => "right_trigger_vibration",
            Self::LtDeadzoneMax => "lt_deadzone_max",
            Self::LtDeadzoneMin => "lt_deadzone_min",
            Self::RtDeadzoneMax => "rt_deadzone_max",
            Self::RtDeadzoneMin => "rt_deadzone_min",
            Self::GuideRed => "guide_red",
            Self::GuideGreen => "guide_green",
            Self::GuideBlue => "guide_blue",
        }
    }

    /// Look up a binding by attribute name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }

    /// Value a freshly attached layer holds for this binding
    pub fn default_value(self) -> u8 {
        match self {
            Self::RightTopPaddle
            | Self::RightBottomPaddle
            | Self::LeftTopPaddle
            | Self::LeftBottomPaddle => codes::UNMAPPED,
            Self::A => codes::A,
            Self::B => codes::B,
            Self::X => codes::X,
            Self::Y => codes::Y,
            Self::DpadUp => codes::DPAD_UP,
            Self::DpadDown => codes::DPAD_DOWN,
            Self::DpadLeft => codes::DPAD_LEFT,
            Self::DpadRight => codes::DPAD_RIGHT,
            Self::Lb => codes::LB,
            Self::Rb => codes::RB,
            Self::LsClick => codes::LS_CLICK,
            Self::RsClick => codes::RS_CLICK,
            Self::Lt | Self::Rt => codes::TRIGGER_DEFAULT,
            Self::LeftMainVibration
            | Self::RightMainVibration
            | Self::LeftTriggerVibration
            | Self::RightTriggerVibration => 0xFF,
            Self::LtDeadzoneMax | Self::RtDeadzoneMax => 0xFF,
            Self::LtDeadzoneMin | Self::RtDeadzoneMin => 0x00,
            Self::GuideRed | Self::GuideGreen | Self::GuideBlue => 0xFF,
        }
    }
}
