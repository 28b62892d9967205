//! Transport seam for delivering control frames to the device.
//!
//! A trait-based layer so that the real HID device and mock devices share
//! the same interface. The protocol is write-only and fire-and-forget:
//! there is no response to read, no retry, and no partial success — either
//! the full frame is sent or the error is surfaced to the caller as-is.

use crate::effect::Effect;
use crate::error::Result;
use crate::frame::{self, ControlFrame};
use tracing::trace;

/// Abstraction over the single control-transfer write the protocol needs.
pub trait ControlTransport: Send {
    /// Send one 32-byte control frame to the device.
    fn send_frame(&self, frame: &ControlFrame) -> Result<()>;
}

/// Encode an effect and send it as a single frame.
pub fn apply_effect(transport: &dyn ControlTransport, effect: &Effect) -> Result<()> {
    let encoded = frame::encode(effect);
    trace!(
        effect = effect.name(),
        payload_hex = format_args!("{:02X?}", encoded.as_bytes()),
        "control frame TX"
    );
    transport.send_frame(&encoded)
}
