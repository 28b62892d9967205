//! Control frame encoding for the ITE 8295 backlight protocol.
//!
//! The controller accepts a single fixed-size feature report:
//!
//! | Offset | Bytes | Field                          |
//! |--------|-------|--------------------------------|
//! | 0–1    | 2     | Header `CC 16`                 |
//! | 2      | 1     | Effect code                    |
//! | 3      | 1     | Speed (1–4)                    |
//! | 4      | 1     | Brightness (1–2)               |
//! | 5–16   | 12    | Zone colors, 4 × `R G B`       |
//! | 17     | 1     | Reserved                       |
//! | 18     | 1     | Wave right-to-left flag        |
//! | 19     | 1     | Wave left-to-right flag        |
//! | 20–31  | 12    | Reserved                       |
//!
//! Protocol reference: l5p_kbl (MIT).

use crate::effect::{ColorSet, Effect, Speed, WaveDirection};

/// Control frame length in bytes.
pub const FRAME_LEN: usize = 32;

/// Fixed frame header.
pub const HEADER: [u8; 2] = [0xCC, 0x16];

/// Number of independently colorable zones.
pub const ZONE_COUNT: usize = 4;

/// Firmware effect codes.
///
/// The mapping is fixed by the firmware; codes 2 and 5 are not assigned.
pub mod codes {
    pub const STATIC: u8 = 1;
    pub const BREATH: u8 = 3;
    pub const WAVE: u8 = 4;
    pub const HUE: u8 = 6;
}

// Byte offsets within the frame.
const EFFECT: usize = 2;
const SPEED: usize = 3;
const BRIGHTNESS: usize = 4;
const ZONES: usize = 5;
const WAVE_RTL: usize = 18;
const WAVE_LTR: usize = 19;

/// The 32-byte payload sent to the controller.
///
/// Produced once per invocation by [`encode`] and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlFrame([u8; FRAME_LEN]);

impl ControlFrame {
    /// Raw frame bytes, ready for a feature report write.
    pub fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.0
    }
}

/// Encode an effect into the frame the firmware expects.
///
/// Pure and total: every validated [`Effect`] has exactly one encoding, and
/// the fixed-size buffer makes the 32-byte length structural.
pub fn encode(effect: &Effect) -> ControlFrame {
    let mut buf = [0u8; FRAME_LEN];
    buf[..2].copy_from_slice(&HEADER);

    match effect {
        // "Off" is not a distinct firmware state: it is the static effect
        // with every remaining byte zeroed.
        Effect::Off => {
            buf[EFFECT] = codes::STATIC;
        }
        Effect::Static { colors, brightness } => {
            buf[EFFECT] = codes::STATIC;
            buf[SPEED] = Speed::default().get();
            buf[BRIGHTNESS] = brightness.get();
            fill_zones(&mut buf, colors);
        }
        Effect::Breath {
            colors,
            speed,
            brightness,
        } => {
            buf[EFFECT] = codes::BREATH;
            buf[SPEED] = speed.get();
            buf[BRIGHTNESS] = brightness.get();
            fill_zones(&mut buf, colors);
        }
        // Wave and hue leave the zone bytes zero; the firmware generates
        // the colors itself.
        Effect::Wave {
            direction,
            speed,
            brightness,
        } => {
            buf[EFFECT] = codes::WAVE;
            buf[SPEED] = speed.get();
            buf[BRIGHTNESS] = brightness.get();
            match direction {
                WaveDirection::RightToLeft => buf[WAVE_RTL] = 1,
                WaveDirection::LeftToRight => buf[WAVE_LTR] = 1,
            }
        }
        Effect::Hue { speed, brightness } => {
            buf[EFFECT] = codes::HUE;
            buf[SPEED] = speed.get();
            buf[BRIGHTNESS] = brightness.get();
        }
    }

    ControlFrame(buf)
}

fn fill_zones(buf: &mut [u8; FRAME_LEN], colors: &ColorSet) {
    for zone in 0..ZONE_COUNT {
        let color = colors.zone_color(zone);
        let at = ZONES + zone * 3;
        buf[at] = color.r;
        buf[at + 1] = color.g;
        buf[at + 2] = color.b;
    }
}
