//! IrTransmitter: bridges protocol payloads to the platform IR emitter.
//!
//! This use case sits at the application layer and delegates to an
//! [`IrEmitter`] trait object for the actual hardware call.  Emitter
//! implementations live in the infrastructure layer.
//!
//! # Validation order
//!
//! [`IrTransmitter::transmit_raw`] checks, in order:
//!
//! 1. an emitter is present → otherwise [`TransmitError::NoEmitter`];
//! 2. the pattern is non-empty → otherwise [`TransmitError::Invalid`];
//! 3. every duration is positive → otherwise [`TransmitError::Invalid`];
//! 4. the carrier lies in `[1 kHz, 200 kHz]` → otherwise [`TransmitError::Invalid`].
//!
//! Only then is the emitter called.  An emitter error is reported as
//! [`TransmitError::Failure`] with the emitter error as its source.  Nothing
//! is retried here; retry policy belongs to the caller.

use std::sync::Arc;

use ir_core::Payload;
use thiserror::Error;
use tracing::{error, info, warn};

/// Lowest carrier frequency accepted for transmission.
pub const MIN_FREQUENCY_HZ: u32 = 1_000;

/// Highest carrier frequency accepted for transmission.
pub const MAX_FREQUENCY_HZ: u32 = 200_000;

/// Error raised by a platform emitter while transmitting.
#[derive(Debug, Error)]
pub enum EmitterError {
    #[error("platform error: {0}")]
    Platform(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Platform-agnostic IR emitter.
///
/// Each supported backend provides an implementation in the infrastructure
/// layer.
#[cfg_attr(test, mockall::automock)]
pub trait IrEmitter: Send + Sync {
    /// Returns `true` if the device has an IR emitter that can be used.
    fn has_ir_emitter(&self) -> bool;

    /// Emits `pattern` (alternating mark/space microseconds, starting with a
    /// mark) at `frequency_hz`.
    fn transmit(&self, frequency_hz: u32, pattern: &[u32]) -> Result<(), EmitterError>;
}

/// Why a transmission did not happen.
#[derive(Debug, Error)]
pub enum TransmitError {
    /// No emitter is available.  Permanent for the session.
    #[error("no IR emitter: {0}")]
    NoEmitter(String),

    /// The request itself is malformed; the caller must fix it.
    #[error("invalid transmission: {0}")]
    Invalid(String),

    /// The emitter accepted the request but failed to send it.
    #[error("transmission failed: {0}")]
    Failure(#[source] EmitterError),
}

/// Details of a successful transmission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransmitReport {
    pub info: String,
    pub frequency_hz: u32,
    /// How long the emitter was kept busy, in microseconds.
    pub duration_us: u64,
}

/// Result of every transmit call.
pub type IrResult = Result<TransmitReport, TransmitError>;

/// The transmit use case.
pub struct IrTransmitter {
    emitter: Arc<dyn IrEmitter>,
}

impl IrTransmitter {
    /// Creates a transmitter that sends through `emitter`.
    pub fn new(emitter: Arc<dyn IrEmitter>) -> Self {
        Self { emitter }
    }

    /// Returns `true` if the platform reports a usable IR emitter.
    pub fn has_emitter(&self) -> bool {
        self.emitter.has_ir_emitter()
    }

    /// Encodes `payload` with its protocol's default carrier and sends it.
    ///
    /// Raw payloads are sent with their own frequency and pattern.
    ///
    /// # Errors
    ///
    /// See [`IrTransmitter::transmit_raw`].
    pub fn transmit(&self, payload: &Payload) -> IrResult {
        let transmission = payload.encode();
        self.transmit_raw(transmission.frequency_hz, transmission.pattern.as_slice())
    }

    /// Validates and sends a pre-built pattern.
    ///
    /// # Errors
    ///
    /// Returns [`TransmitError::NoEmitter`] when no emitter is present,
    /// [`TransmitError::Invalid`] for an empty pattern, a zero duration or an
    /// out-of-range frequency, and [`TransmitError::Failure`] when the emitter
    /// itself fails.
    pub fn transmit_raw(&self, frequency_hz: u32, pattern: &[u32]) -> IrResult {
        if !self.has_emitter() {
            warn!("transmit requested but no IR emitter is available");
            return Err(TransmitError::NoEmitter(
                "IR emitter not available on this device".to_string(),
            ));
        }

        validate(frequency_hz, pattern).map_err(|reason| {
            warn!(frequency_hz, entries = pattern.len(), "rejected transmission: {reason}");
            TransmitError::Invalid(reason)
        })?;

        match self.emitter.transmit(frequency_hz, pattern) {
            Ok(()) => {
                let duration_us: u64 = pattern.iter().map(|&d| u64::from(d)).sum();
                info!(frequency_hz, entries = pattern.len(), duration_us, "transmitted");
                Ok(TransmitReport {
                    info: "Transmitted successfully".to_string(),
                    frequency_hz,
                    duration_us,
                })
            }
            Err(e) => {
                error!(frequency_hz, "IR emitter failed: {e}");
                Err(TransmitError::Failure(e))
            }
        }
    }
}

fn validate(frequency_hz: u32, pattern: &[u32]) -> Result<(), String> {
    if pattern.is_empty() {
        return Err("pattern cannot be empty".to_string());
    }
    if let Some(idx) = pattern.iter().position(|&d| d == 0) {
        return Err(format!("pattern duration at index {idx} must be positive"));
    }
    if !(MIN_FREQUENCY_HZ..=MAX_FREQUENCY_HZ).contains(&frequency_hz) {
        return Err(format!(
            "frequency {frequency_hz} Hz outside {MIN_FREQUENCY_HZ}..={MAX_FREQUENCY_HZ} Hz"
        ));
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
