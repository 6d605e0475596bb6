//! Mock IR emitter for unit and integration testing.
//!
//! Records every transmission in a `Mutex<Vec<...>>` so test assertions can
//! inspect exactly what was sent and in what order, without IR hardware.
//!
//! # Usage in tests
//!
//! ```ignore
//! let emitter = Arc::new(MockEmitter::new());
//! let transmitter = IrTransmitter::new(emitter.clone());
//!
//! transmitter.transmit(&Payload::nec(0x04, 0x08)).unwrap();
//!
//! let sent = emitter.transmissions.lock().unwrap();
//! assert_eq!(sent[0].0, 38_000);
//! ```
//!
//! # Simulating platforms
//!
//! - [`MockEmitter::without_emitter`] behaves like a phone with no IR LED.
//! - [`MockEmitter::failing`] accepts requests but fails every transmission.

use std::sync::Mutex;

use crate::application::transmit::{EmitterError, IrEmitter};

/// An emitter that records transmissions instead of driving hardware.
pub struct MockEmitter {
    /// Each `(frequency_hz, pattern)` passed to `transmit`.
    pub transmissions: Mutex<Vec<(u32, Vec<u32>)>>,
    /// Value returned by `has_ir_emitter`.
    pub available: bool,
    /// When `true`, `transmit` returns `EmitterError::Platform`.
    pub should_fail: bool,
}

impl MockEmitter {
    /// A present, working emitter.
    pub fn new() -> Self {
        Self {
            transmissions: Mutex::new(Vec::new()),
            available: true,
            should_fail: false,
        }
    }

    /// A device without an IR emitter.
    pub fn without_emitter() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    /// An emitter whose transmissions always fail.
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    /// Number of recorded transmissions.
    pub fn transmission_count(&self) -> usize {
        self.transmissions.lock().map(|t| t.len()).unwrap_or(0)
    }
}

impl Default for MockEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl IrEmitter for MockEmitter {
    fn has_ir_emitter(&self) -> bool {
        self.available
    }

    /// Records the transmission, or returns an error if `should_fail` is set.
    fn transmit(&self, frequency_hz: u32, pattern: &[u32]) -> Result<(), EmitterError> {
        if self.should_fail {
            return Err(EmitterError::Platform("mock failure".into()));
        }
        self.transmissions
            .lock()
            .map_err(|_| EmitterError::Platform("mock recorder poisoned".into()))?
            .push((frequency_hz, pattern.to_vec()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_mock_records_transmissions_in_order() {
        // Arrange
        let emitter = MockEmitter::new();

        // Act
        emitter.transmit(38_000, &[9000, 4500]).unwrap();
        emitter.transmit(36_000, &[889, 889]).unwrap();

        // Assert
        let sent = emitter.transmissions.lock().unwrap();
        assert_eq!(sent[0], (38_000, vec![9000, 4500]));
        assert_eq!(sent[1], (36_000, vec![889, 889]));
    }

    #[test]
    fn test_failing_mock_records_nothing() {
        let emitter = MockEmitter::failing();
        assert!(emitter.transmit(38_000, &[1, 1]).is_err());
        assert_eq!(emitter.transmission_count(), 0);
    }

    #[test]
    fn test_default_mock_has_emitter() {
        assert!(MockEmitter::default().has_ir_emitter());
        assert!(!MockEmitter::without_emitter().has_ir_emitter());
    }
}
