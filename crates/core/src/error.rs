//! Error types for legion-kbl-core.

use thiserror::Error;

/// Core library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// HID device communication failure.
    #[error("HID error: {0}")]
    Hid(String),

    /// No attached device matches any known backlight controller.
    #[error("device not found: {0}")]
    DeviceNotFound(String),

    /// Value out of the range the firmware accepts.
    #[error("value out of range: {field} = {value} (allowed {min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    /// Malformed hexadecimal color string.
    #[error("invalid color {0:?}: expected 6 hex digits (RRGGBB)")]
    InvalidColor(String),
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, Error>;
