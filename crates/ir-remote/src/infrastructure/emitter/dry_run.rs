//! Emitter backend that logs instead of switching an LED.
//!
//! Useful on machines without IR hardware: every accepted transmission is
//! written to the `tracing` log at `info` level with its full pattern.

use tracing::info;

use crate::application::transmit::{EmitterError, IrEmitter};

/// Logs each transmission it is asked to perform.
#[derive(Debug, Clone)]
pub struct DryRunEmitter {
    available: bool,
    fail_transmissions: bool,
}

impl DryRunEmitter {
    /// A present emitter.  With `fail_transmissions` every send reports a
    /// platform error.
    pub fn new(fail_transmissions: bool) -> Self {
        Self {
            available: true,
            fail_transmissions,
        }
    }

    /// Simulates a device without an IR emitter.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            fail_transmissions: false,
        }
    }
}

impl IrEmitter for DryRunEmitter {
    fn has_ir_emitter(&self) -> bool {
        self.available
    }

    fn transmit(&self, frequency_hz: u32, pattern: &[u32]) -> Result<(), EmitterError> {
        if self.fail_transmissions {
            return Err(EmitterError::Platform(
                "dry-run emitter configured to fail".to_string(),
            ));
        }
        info!(frequency_hz, entries = pattern.len(), ?pattern, "dry-run transmit");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_emitter_is_available_and_succeeds() {
        let emitter = DryRunEmitter::new(false);
        assert!(emitter.has_ir_emitter());
        assert!(emitter.transmit(38_000, &[560, 560]).is_ok());
    }

    #[test]
    fn test_failing_emitter_returns_platform_error() {
        let emitter = DryRunEmitter::new(true);
        let result = emitter.transmit(38_000, &[560, 560]);
        assert!(matches!(result, Err(EmitterError::Platform(_))));
    }

    #[test]
    fn test_unavailable_emitter_reports_absence() {
        assert!(!DryRunEmitter::unavailable().has_ir_emitter());
    }
}
