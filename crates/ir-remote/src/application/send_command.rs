//! SendCommandUseCase: sends a labelled command from the preset catalog.
//!
//! Resolves brand → device → command label, encodes the payload and hands
//! the result to [`IrTransmitter::transmit_raw`].  A device may pin its own
//! carrier frequency (`frequency_override_hz`); it replaces the protocol
//! default for encoded payloads.  Raw payloads always keep their own
//! frequency.

use std::sync::Arc;

use ir_core::{preset::find_brand, BrandPreset, DevicePreset, Payload};
use tracing::debug;

use crate::application::transmit::{IrResult, IrTransmitter, TransmitError};

/// The send-preset use case.
pub struct SendCommandUseCase {
    transmitter: Arc<IrTransmitter>,
    brands: Vec<BrandPreset>,
}

impl SendCommandUseCase {
    /// Creates the use case over a catalog of brands.
    pub fn new(transmitter: Arc<IrTransmitter>, brands: Vec<BrandPreset>) -> Self {
        Self {
            transmitter,
            brands,
        }
    }

    /// The catalog this use case resolves commands against.
    pub fn brands(&self) -> &[BrandPreset] {
        &self.brands
    }

    /// Sends `label` on `model` of `brand`.  All lookups ignore ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`TransmitError::Invalid`] if the brand, device or label is
    /// unknown, otherwise whatever [`IrTransmitter::transmit_raw`] returns.
    pub fn send(&self, brand: &str, model: &str, label: &str) -> IrResult {
        let brand_preset = find_brand(&self.brands, brand)
            .ok_or_else(|| TransmitError::Invalid(format!("unknown brand: {brand}")))?;
        let device = brand_preset.device(model).ok_or_else(|| {
            TransmitError::Invalid(format!("unknown device {model:?} for brand {}", brand_preset.name))
        })?;
        send_device_command(&self.transmitter, device, label)
    }
}

/// Sends the command labelled `label` on `device`.
///
/// # Errors
///
/// Returns [`TransmitError::Invalid`] if `device` has no such command,
/// otherwise whatever [`IrTransmitter::transmit_raw`] returns.
pub fn send_device_command(transmitter: &IrTransmitter, device: &DevicePreset, label: &str) -> IrResult {
    let command = device.command(label).ok_or_else(|| {
        TransmitError::Invalid(format!(
            "unknown command {label:?} on {}",
            device.display_name()
        ))
    })?;

    let transmission = command.payload.encode();
    let frequency_hz = match (&command.payload, device.frequency_override_hz) {
        (Payload::Raw { .. }, _) | (_, None) => transmission.frequency_hz,
        (_, Some(override_hz)) => override_hz,
    };

    debug!(
        device = device.display_name(),
        command = %command.label,
        frequency_hz,
        "sending preset command"
    );
    transmitter.transmit_raw(frequency_hz, transmission.pattern.as_slice())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::emitter::mock::MockEmitter;
    use ir_core::{default_brands, IrCommand};

    fn setup() -> (Arc<MockEmitter>, SendCommandUseCase) {
        let emitter = Arc::new(MockEmitter::new());
        let transmitter = Arc::new(IrTransmitter::new(emitter.clone()));
        (emitter, SendCommandUseCase::new(transmitter, default_brands()))
    }

    #[test]
    fn test_send_resolves_catalog_command() {
        // Arrange
        let (emitter, use_case) = setup();

        // Act
        let report = use_case
            .send("sony", "sony bravia", "POWER")
            .expect("send must succeed");

        // Assert
        let sent = emitter.transmissions.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, 40_000);
        assert_eq!(report.frequency_hz, 40_000);
    }

    #[test]
    fn test_unknown_brand_device_or_label_is_invalid() {
        let (emitter, use_case) = setup();

        for (brand, model, label) in [
            ("Acme", "TV", "Power"),
            ("Sony", "Walkman", "Power"),
            ("Sony", "Sony Bravia", "Eject"),
        ] {
            assert!(matches!(
                use_case.send(brand, model, label),
                Err(TransmitError::Invalid(_))
            ));
        }
        assert!(emitter.transmissions.lock().unwrap().is_empty());
    }

    #[test]
    fn test_frequency_override_replaces_protocol_default() {
        // Arrange
        let emitter = Arc::new(MockEmitter::new());
        let transmitter = IrTransmitter::new(emitter.clone());
        let mut device = DevicePreset::new(
            "Custom TV",
            vec![IrCommand::new("Power", Payload::nec(0x04, 0x08))],
        );
        device.frequency_override_hz = Some(36_000);

        // Act
        send_device_command(&transmitter, &device, "Power").expect("send");

        // Assert
        assert_eq!(emitter.transmissions.lock().unwrap()[0].0, 36_000);
    }

    #[test]
    fn test_frequency_override_does_not_apply_to_raw_payloads() {
        let emitter = Arc::new(MockEmitter::new());
        let transmitter = IrTransmitter::new(emitter.clone());
        let mut device = DevicePreset::new(
            "Learned",
            vec![IrCommand::new("Power", Payload::raw(56_000, vec![500, 500]))],
        );
        device.frequency_override_hz = Some(36_000);

        send_device_command(&transmitter, &device, "power").expect("send");

        let sent = emitter.transmissions.lock().unwrap();
        assert_eq!(sent[0], (56_000, vec![500, 500]));
    }
}
