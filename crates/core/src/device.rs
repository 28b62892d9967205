//! Device model: known hardware revisions and backlight controller discovery.

use crate::error::{Error, Result};
use crate::{pids, ITE_VID};
use tracing::{debug, info};

/// Supported keyboard backlight controller revisions.
///
/// All revisions share the ITE vendor ID and speak the same 32-byte control
/// frame protocol; only the product ID differs between model years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardModel {
    Legion2023,
    Legion2023Alt,
    Loq2023,
    Legion2022,
    Ideapad2022,
    Legion2021,
    Ideapad2021,
    Legion2020,
}

impl KeyboardModel {
    /// All known revisions, in match priority order.
    ///
    /// New hardware goes at the front. When more than one candidate is
    /// attached, [`pick`] returns the earliest entry of this list.
    pub const ALL: &'static [KeyboardModel] = &[
        KeyboardModel::Legion2023,
        KeyboardModel::Legion2023Alt,
        KeyboardModel::Loq2023,
        KeyboardModel::Legion2022,
        KeyboardModel::Ideapad2022,
        KeyboardModel::Legion2021,
        KeyboardModel::Ideapad2021,
        KeyboardModel::Legion2020,
    ];

    /// Look up model from USB product ID.
    pub fn from_pid(pid: u16) -> Option<Self> {
        match pid {
            pids::LEGION_2023 => Some(Self::Legion2023),
            pids::LEGION_2023_ALT => Some(Self::Legion2023Alt),
            pids::LOQ_2023 => Some(Self::Loq2023),
            pids::LEGION_2022 => Some(Self::Legion2022),
            pids::IDEAPAD_2022 => Some(Self::Ideapad2022),
            pids::LEGION_2021 => Some(Self::Legion2021),
            pids::IDEAPAD_2021 => Some(Self::Ideapad2021),
            pids::LEGION_2020 => Some(Self::Legion2020),
            _ => None,
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Legion2023 => "Legion keyboard (2023)",
            Self::Legion2023Alt => "Legion keyboard (2023, rev. 2)",
            Self::Loq2023 => "LOQ keyboard (2023)",
            Self::Legion2022 => "Legion keyboard (2022, 16ARH7H)",
            Self::Ideapad2022 => "IdeaPad keyboard (2022)",
            Self::Legion2021 => "Legion keyboard (2021)",
            Self::Ideapad2021 => "IdeaPad keyboard (2021)",
            Self::Legion2020 => "Legion keyboard (2020)",
        }
    }

    /// USB Product ID.
    pub fn pid(&self) -> u16 {
        match self {
            Self::Legion2023 => pids::LEGION_2023,
            Self::Legion2023Alt => pids::LEGION_2023_ALT,
            Self::Loq2023 => pids::LOQ_2023,
            Self::Legion2022 => pids::LEGION_2022,
            Self::Ideapad2022 => pids::IDEAPAD_2022,
            Self::Legion2021 => pids::LEGION_2021,
            Self::Ideapad2021 => pids::IDEAPAD_2021,
            Self::Legion2020 => pids::LEGION_2020,
        }
    }
}

/// Information about a discovered backlight controller.
#[derive(Debug, Clone)]
pub struct DeviceInfo {
    pub model: KeyboardModel,
    pub vid: u16,
    pub pid: u16,
    pub path: String,
    pub serial: Option<String>,
}

/// Select the highest-priority known model among attached (VID, PID) pairs.
///
/// The input is taken in bus enumeration order; the result follows
/// [`KeyboardModel::ALL`] order instead. Pure and deterministic for a given
/// bus state, so the result is cacheable for the process lifetime.
pub fn pick<I>(attached: I) -> Option<KeyboardModel>
where
    I: IntoIterator<Item = (u16, u16)>,
{
    let attached: Vec<(u16, u16)> = attached.into_iter().collect();

    KeyboardModel::ALL
        .iter()
        .copied()
        .find(|model| attached.contains(&(ITE_VID, model.pid())))
}

/// Discover all attached known backlight controllers, in priority order.
pub fn discover() -> Result<Vec<DeviceInfo>> {
    debug!("Starting HID device enumeration");
    let api = hidapi::HidApi::new().map_err(|e| Error::Hid(e.to_string()))?;

    let mut devices = Vec::new();
    for model in KeyboardModel::ALL {
        let found = api
            .device_list()
            .find(|info| info.vendor_id() == ITE_VID && info.product_id() == model.pid());

        if let Some(info) = found {
            info!(
                model = model.name(),
                vid = format_args!("0x{:04X}", info.vendor_id()),
                pid = format_args!("0x{:04X}", info.product_id()),
                path = %info.path().to_string_lossy(),
                "Found backlight controller"
            );
            devices.push(DeviceInfo {
                model: *model,
                vid: info.vendor_id(),
                pid: info.product_id(),
                path: info.path().to_string_lossy().into_owned(),
                serial: info.serial_number().map(|s| s.to_string()),
            });
        }
    }

    debug!(count = devices.len(), "Device enumeration complete");
    Ok(devices)
}

/// Locate the backlight controller to drive.
///
/// Returns the first attached device in [`KeyboardModel::ALL`] order, or
/// [`Error::DeviceNotFound`] if nothing on the bus matches a known identity.
/// Callers resolve once at startup and pass the result down; hardware does
/// not change mid-run.
pub fn locate() -> Result<DeviceInfo> {
    discover()?.into_iter().next().ok_or_else(|| {
        Error::DeviceNotFound("no supported keyboard backlight controller attached".into())
    })
}
