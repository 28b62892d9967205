//! Effect descriptors: validated user intent for the backlight.
//!
//! Every parameter is range-checked at construction, so an [`Effect`] value
//! is always encodable. Each variant carries only the parameters the
//! firmware consults for that effect; combinations like a wave direction on
//! a static effect are unrepresentable.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// RGB color for one backlight zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl FromStr for Rgb {
    type Err = Error;

    /// Parse a 6-hex-digit `RRGGBB` string. Anything else is rejected,
    /// never coerced.
    fn from_str(s: &str) -> Result<Rgb> {
        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(s.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&s[range], 16).map_err(|_| Error::InvalidColor(s.to_string()))
        };

        Ok(Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Animation speed, 1 (slowest) to 4 (fastest).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Speed(u8);

impl Speed {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    pub fn new(value: u8) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(Error::OutOfRange {
                field: "speed",
                value: value as u32,
                min: Self::MIN as u32,
                max: Self::MAX as u32,
            });
        }
        Ok(Self(value))
    }

    /// Raw wire value.
    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

/// Backlight brightness, 1 (dim) or 2 (bright).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brightness(u8);

impl Brightness {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 2;

    pub fn new(value: u8) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(Error::OutOfRange {
                field: "brightness",
                value: value as u32,
                min: Self::MIN as u32,
                max: Self::MAX as u32,
            });
        }
        Ok(Self(value))
    }

    /// Raw wire value.
    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

/// Between 1 and 4 colors, distributed across the 4 zones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSet(Vec<Rgb>);

impl ColorSet {
    /// Maximum colors in a set, one per zone.
    pub const MAX: usize = 4;

    pub fn new(colors: Vec<Rgb>) -> Result<Self> {
        if colors.is_empty() || colors.len() > Self::MAX {
            return Err(Error::OutOfRange {
                field: "colors",
                value: colors.len() as u32,
                min: 1,
                max: Self::MAX as u32,
            });
        }
        Ok(Self(colors))
    }

    /// Color for a zone index. A single color fills every zone, two colors
    /// alternate, and so on (`zone mod color count`).
    pub fn zone_color(&self, zone: usize) -> Rgb {
        self.0[zone % self.0.len()]
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.0
    }
}

/// Travel direction of the wave effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveDirection {
    LeftToRight,
    RightToLeft,
}

/// A validated lighting effect with its firmware-relevant parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fixed per-zone colors.
    Static {
        colors: ColorSet,
        brightness: Brightness,
    },
    /// Fade the configured colors in and out.
    Breath {
        colors: ColorSet,
        speed: Speed,
        brightness: Brightness,
    },
    /// Rainbow wave; colors are generated by the firmware.
    Wave {
        direction: WaveDirection,
        speed: Speed,
        brightness: Brightness,
    },
    /// Cycle all zones through the hue circle.
    Hue {
        speed: Speed,
        brightness: Brightness,
    },
    /// Backlight off.
    Off,
}

impl Effect {
    /// Effect name as used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Static { .. } => "static",
            Self::Breath { .. } => "breath",
            Self::Wave { .. } => "wave",
            Self::Hue { .. } => "hue",
            Self::Off => "off",
        }
    }
}
