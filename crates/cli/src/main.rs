//! legion-kbl CLI: keyboard backlight control from the command line.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use legion_kbl_core::device::{self, DeviceInfo};
use legion_kbl_core::effect::{Brightness, ColorSet, Effect, Rgb, Speed, WaveDirection};
use legion_kbl_core::frame::ControlFrame;
use legion_kbl_core::transport::{apply_effect, ControlTransport};

struct CliControlTransport {
    device: hidapi::HidDevice,
}

impl CliControlTransport {
    fn open(info: &DeviceInfo) -> Result<Self> {
        let api = hidapi::HidApi::new().map_err(|e| anyhow::anyhow!("hidapi init: {e}"))?;
        let device = api.open(info.vid, info.pid).map_err(|e| {
            anyhow::anyhow!(
                "open HID device (VID=0x{:04X} PID=0x{:04X}): {e} (udev rule or root required)",
                info.vid,
                info.pid
            )
        })?;

        Ok(Self { device })
    }
}

impl ControlTransport for CliControlTransport {
    fn send_frame(&self, frame: &ControlFrame) -> legion_kbl_core::error::Result<()> {
        // send_feature_report issues the SET_REPORT control transfer the
        // firmware expects (bmRequestType 0x21, bRequest 0x09, wValue
        // 0x03CC, wIndex 0); report ID 0xCC is the frame's first byte.
        self.device
            .send_feature_report(frame.as_bytes())
            .map_err(|e| legion_kbl_core::error::Error::Hid(format!("send_feature_report: {e}")))
    }
}

/// Travel direction for the wave effect.
#[derive(ValueEnum, Clone, Copy)]
enum Direction {
    /// Left to right.
    Ltr,
    /// Right to left.
    Rtl,
}

impl From<Direction> for WaveDirection {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Ltr => WaveDirection::LeftToRight,
            Direction::Rtl => WaveDirection::RightToLeft,
        }
    }
}

#[derive(Parser)]
#[command(
    name = "legion-kbl",
    version,
    about = "Lenovo Legion/IdeaPad/LOQ keyboard backlight control"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List attached backlight controllers.
    ListDevices,
    /// Static per-zone colors.
    Static {
        /// Hexadecimal RRGGBB colors, up to 4, one per zone.
        #[arg(num_args = 1..=4, required = true)]
        colors: Vec<String>,
        /// Light brightness.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=2))]
        brightness: u8,
    },
    /// Fade the configured colors in and out.
    Breath {
        /// Hexadecimal RRGGBB colors, up to 4, one per zone.
        #[arg(num_args = 1..=4, required = true)]
        colors: Vec<String>,
        /// Animation speed.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=4))]
        speed: u8,
        /// Light brightness.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=2))]
        brightness: u8,
    },
    /// Rainbow wave across the keyboard.
    Wave {
        /// Direction of the wave.
        direction: Direction,
        /// Animation speed.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=4))]
        speed: u8,
        /// Light brightness.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=2))]
        brightness: u8,
    },
    /// Transition all zones across the hue circle.
    Hue {
        /// Animation speed.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=4))]
        speed: u8,
        /// Light brightness.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=2))]
        brightness: u8,
    },
    /// Turn the backlight off.
    Off,
}

fn parse_colors(raw: &[String]) -> Result<ColorSet> {
    let colors = raw
        .iter()
        .map(|s| s.parse::<Rgb>())
        .collect::<legion_kbl_core::error::Result<Vec<_>>>()?;

    Ok(ColorSet::new(colors)?)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let effect = match cli.command {
        Commands::ListDevices => {
            let devices = device::discover()?;
            if devices.is_empty() {
                println!("No supported keyboard backlight controller found.");
                println!("Ensure the laptop model is supported and udev permissions are set up.");
            } else {
                for dev in &devices {
                    println!(
                        "{} (VID: 0x{:04X}, PID: 0x{:04X}, path: {})",
                        dev.model.name(),
                        dev.vid,
                        dev.pid,
                        dev.path
                    );
                }
            }
            return Ok(());
        }
        Commands::Static { colors, brightness } => Effect::Static {
            colors: parse_colors(&colors)?,
            brightness: Brightness::new(brightness)?,
        },
        Commands::Breath {
            colors,
            speed,
            brightness,
        } => Effect::Breath {
            colors: parse_colors(&colors)?,
            speed: Speed::new(speed)?,
            brightness: Brightness::new(brightness)?,
        },
        Commands::Wave {
            direction,
            speed,
            brightness,
        } => Effect::Wave {
            direction: direction.into(),
            speed: Speed::new(speed)?,
            brightness: Brightness::new(brightness)?,
        },
        Commands::Hue { speed, brightness } => Effect::Hue {
            speed: Speed::new(speed)?,
            brightness: Brightness::new(brightness)?,
        },
        Commands::Off => Effect::Off,
    };

    // Resolve the device once and drive it for the rest of the invocation.
    let info = device::locate()?;
    tracing::debug!(
        model = info.model.name(),
        effect = effect.name(),
        "applying effect"
    );
    let transport = CliControlTransport::open(&info)?;
    apply_effect(&transport, &effect)?;

    println!("Applied '{}' to {}.", effect.name(), info.model.name());
    Ok(())
}
