//! Integration tests: exercise the full descriptor → frame → transport flow
//! against a mock device, plus bus-selection scenarios.

#[cfg(test)]
mod tests {
    use crate::device::{self, KeyboardModel};
    use crate::effect::{Brightness, ColorSet, Effect, Rgb, Speed, WaveDirection};
    use crate::error::Error;
    use crate::frame::FRAME_LEN;
    use crate::transport::apply_effect;
    use crate::transport::mock::{FailingTransport, MockTransport};
    use crate::ITE_VID;

    fn color_set(strs: &[&str]) -> ColorSet {
        ColorSet::new(strs.iter().map(|s| s.parse::<Rgb>().unwrap()).collect()).unwrap()
    }

    /// A two-color static config travels byte-exact from parsed hex strings
    /// to the frame on the wire.
    #[test]
    fn static_flow_produces_exact_wire_bytes() {
        let transport = MockTransport::new();
        let effect = Effect::Static {
            colors: color_set(&["FF0000", "00FF00"]),
            brightness: Brightness::new(2).unwrap(),
        };

        apply_effect(&transport, &effect).unwrap();

        let mut expected = [0u8; FRAME_LEN];
        expected[0] = 0xCC;
        expected[1] = 0x16;
        expected[2] = 1; // static
        expected[3] = 1; // default speed slot
        expected[4] = 2;
        expected[5..17].copy_from_slice(&[
            0xFF, 0x00, 0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0x00, 0x00, 0xFF, 0x00,
        ]);
        assert_eq!(transport.sent(), vec![expected]);
    }

    /// Wave config reaches the wire with direction flags and empty zones.
    #[test]
    fn wave_flow_produces_exact_wire_bytes() {
        let transport = MockTransport::new();
        let effect = Effect::Wave {
            direction: WaveDirection::RightToLeft,
            speed: Speed::new(3).unwrap(),
            brightness: Brightness::new(1).unwrap(),
        };

        apply_effect(&transport, &effect).unwrap();

        let mut expected = [0u8; FRAME_LEN];
        expected[0] = 0xCC;
        expected[1] = 0x16;
        expected[2] = 4; // wave
        expected[3] = 3;
        expected[4] = 1;
        expected[18] = 1; // right-to-left
        assert_eq!(transport.sent(), vec![expected]);
    }

    /// Consecutive invocations are independent full frames; turning the
    /// light off never reuses state from the previous effect.
    #[test]
    fn effect_switch_sends_independent_frames() {
        let transport = MockTransport::new();

        let breath = Effect::Breath {
            colors: color_set(&["ABCDEF"]),
            speed: Speed::new(2).unwrap(),
            brightness: Brightness::new(2).unwrap(),
        };
        apply_effect(&transport, &breath).unwrap();
        apply_effect(&transport, &Effect::Off).unwrap();

        let sent = transport.sent();
        assert_eq!(sent.len(), 2);

        // Breath frame carries the color in every zone.
        assert_eq!(sent[0][2], 3);
        assert_eq!(&sent[0][5..8], &[0xAB, 0xCD, 0xEF]);
        assert_eq!(&sent[0][14..17], &[0xAB, 0xCD, 0xEF]);

        // Off frame is static with everything zeroed.
        assert_eq!(sent[1][2], 1);
        assert!(sent[1][3..].iter().all(|&b| b == 0));
    }

    /// A transport failure is terminal: one attempt, error surfaced as-is.
    #[test]
    fn transport_failure_is_terminal() {
        let transport = FailingTransport::new();
        let effect = Effect::Hue {
            speed: Speed::default(),
            brightness: Brightness::default(),
        };

        let result = apply_effect(&transport, &effect);

        assert!(matches!(result, Err(Error::Hid(_))));
        assert_eq!(transport.attempts(), 1);
    }

    /// Device selection on a crowded bus: foreign devices are skipped and
    /// priority follows the known-model list, not enumeration order.
    #[test]
    fn selection_on_crowded_bus() {
        let bus = [
            (0x046D, 0xC08D),      // unrelated mouse
            (ITE_VID, 0x0001),     // same vendor, unknown product
            (ITE_VID, 0xC955),     // 2020 Legion, enumerates first
            (ITE_VID, 0xC975),     // 2022 Legion, higher priority
        ];

        assert_eq!(device::pick(bus), Some(KeyboardModel::Legion2022));
        // Resolving again for the same bus state yields the same device.
        assert_eq!(device::pick(bus), Some(KeyboardModel::Legion2022));
    }
}
