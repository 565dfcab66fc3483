//! Protocol constants for GIP client communication

/// GIP command opcodes
pub mod cmd {
    pub const ACKNOWLEDGE: u8 = 0x01;
    pub const ANNOUNCE: u8 = 0x02;
    pub const STATUS: u8 = 0x03;
    pub const IDENTIFY: u8 = 0x04;
    pub const POWER: u8 = 0x05;
    pub const GUIDE_BUTTON: u8 = 0x07;
    pub const AUDIO_CONTROL: u8 = 0x08;
    pub const LED: u8 = 0x0A;
    pub const HID_DESCRIPTOR: u8 = 0x0B;
    pub const FIRMWARE: u8 = 0x0C;
    pub const RGB_LED: u8 = 0x0E;
    pub const INPUT: u8 = 0x20;

    /// Get human-readable name for a command opcode
    pub fn name(opcode: u8) -> &'static str {
        match opcode {
            ACKNOWLEDGE => "ACKNOWLEDGE",
            ANNOUNCE => "ANNOUNCE",
            STATUS => "STATUS",
            IDENTIFY => "IDENTIFY",
            POWER => "POWER",
            GUIDE_BUTTON => "GUIDE_BUTTON",
            AUDIO_CONTROL => "AUDIO_CONTROL",
            LED => "LED",
            HID_DESCRIPTOR => "HID_DESCRIPTOR",
            FIRMWARE => "FIRMWARE",
            RGB_LED => "RGB_LED",
            INPUT => "INPUT",
            _ => "UNKNOWN",
        }
    }
}

/// Indicator light modes carried in the LED command
///
/// The mode byte is not validated by clients; anything in 0-255 goes on the
/// wire. These are the values the firmware is known to act on.
pub mod led_mode {
    pub const OFF: u8 = 0x00;
    pub const ON: u8 = 0x01;
    pub const BLINK_FAST: u8 = 0x02;
    pub const BLINK_NORMAL: u8 = 0x03;
    pub const BLINK_SLOW: u8 = 0x04;
    pub const FADE_SLOW: u8 = 0x05;
    pub const FADE_FAST: u8 = 0x06;
}

/// Raw battery bytes carried in STATUS packets
pub mod battery {
    pub const TYPE_NONE: u8 = 0x00;
    pub const TYPE_STANDARD: u8 = 0x01;
    pub const TYPE_RECHARGEABLE: u8 = 0x02;
    pub const TYPE_CHARGE_KIT: u8 = 0x03;

    pub const LEVEL_LOW: u8 = 0x00;
    pub const LEVEL_NORMAL: u8 = 0x01;
    pub const LEVEL_HIGH: u8 = 0x02;
    pub const LEVEL_FULL: u8 = 0x03;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmd_names() {
        assert_eq!(cmd::name(cmd::LED), "LED");
        assert_eq!(cmd::name(cmd::RGB_LED), "RGB_LED");
        assert_eq!(cmd::name(0x7F), "UNKNOWN");
    }
}
