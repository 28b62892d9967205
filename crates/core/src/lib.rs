//! legion-kbl-core: control frame encoding and device discovery.
//!
//! This crate provides the core logic for driving the 4-zone RGB keyboard
//! backlight found in Lenovo Legion, IdeaPad and LOQ laptops (ITE 8295
//! controller) via USB HID feature reports.

pub mod device;
pub mod effect;
pub mod error;
pub mod frame;
#[cfg(test)]
mod integration_tests;
pub mod transport;

/// Integrated Technology Express (ITE) USB Vendor ID.
pub const ITE_VID: u16 = 0x048D;

/// Known backlight controller product IDs.
pub mod pids {
    /// 2023 Legion.
    pub const LEGION_2023: u16 = 0xC985;
    /// 2023 Legion, second revision.
    pub const LEGION_2023_ALT: u16 = 0xC984;
    /// 2023 LOQ.
    pub const LOQ_2023: u16 = 0xC983;
    /// 2022 Legion (16ARH7H).
    pub const LEGION_2022: u16 = 0xC975;
    /// 2022 IdeaPad.
    pub const IDEAPAD_2022: u16 = 0xC973;
    /// 2021 Legion.
    pub const LEGION_2021: u16 = 0xC965;
    /// 2021 IdeaPad.
    pub const IDEAPAD_2021: u16 = 0xC963;
    /// 2020 Legion.
    pub const LEGION_2020: u16 = 0xC955;
}
