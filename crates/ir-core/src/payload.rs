//! Protocol payloads and encoded transmissions.
//!
//! A [`Payload`] is everything needed to reproduce one button press: the
//! protocol plus its command fields.  [`Payload::encode`] turns it into a
//! [`Transmission`] (carrier frequency + pulse pattern).
//!
//! Payloads serialise with an internal `protocol` tag so they read naturally
//! in TOML and JSON preset files:
//!
//! ```json
//! { "protocol": "NEC", "address": 57568, "command": 3315 }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::pattern::PulsePattern;
use crate::protocol::{nec, panasonic, rc5, rc6, sharp, sirc, Protocol};

pub use crate::protocol::sirc::SircBits;

/// Errors raised while interpreting payload fields from text.
///
/// Encoding itself never fails: out-of-range fields are masked.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PayloadError {
    /// The protocol name is not one of the supported protocols.
    #[error("unknown protocol: {0:?}")]
    UnknownProtocol(String),

    /// SIRC only exists in 12, 15 and 20-bit variants.
    #[error("unsupported SIRC bit width: {0} (expected 12, 15 or 20)")]
    InvalidSircBits(u32),
}

fn default_rc6_bits() -> u8 {
    rc6::PAYLOAD_BITS
}

/// Command parameters for one supported protocol, or a raw pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "protocol", rename_all = "UPPERCASE")]
pub enum Payload {
    /// NEC: 8-bit address and command.
    Nec { address: u32, command: u32 },

    /// Sony SIRC: 7-bit command, device code sized by the frame width.
    Sirc {
        command: u32,
        device: u32,
        #[serde(default)]
        bits: SircBits,
    },

    /// Philips RC5: 5-bit address, 6-bit command, toggle bit.
    Rc5 {
        address: u32,
        command: u32,
        #[serde(default)]
        toggle: u32,
    },

    /// Philips RC6: 3-bit mode, 8-bit address and command, toggle bit,
    /// payload bit ceiling (at most 20).
    Rc6 {
        #[serde(default)]
        mode: u32,
        address: u32,
        command: u32,
        #[serde(default)]
        toggle: u32,
        #[serde(default = "default_rc6_bits")]
        bits: u8,
    },

    /// Panasonic/Kaseikyo: 16-bit vendor, address and command.
    Panasonic {
        vendor: u32,
        address: u32,
        command: u32,
    },

    /// Sharp: 7-bit address, 8-bit command, optional repeat frame.
    Sharp {
        address: u32,
        command: u32,
        #[serde(default)]
        repeat: bool,
    },

    /// A pre-recorded pattern sent as-is at its own carrier frequency.
    Raw {
        frequency_hz: u32,
        pattern: Vec<u32>,
    },
}

impl Payload {
    /// NEC payload.
    pub fn nec(address: u32, command: u32) -> Self {
        Payload::Nec { address, command }
    }

    /// SIRC payload.
    pub fn sirc(command: u32, device: u32, bits: SircBits) -> Self {
        Payload::Sirc {
            command,
            device,
            bits,
        }
    }

    /// RC5 payload with the toggle bit cleared.
    pub fn rc5(address: u32, command: u32) -> Self {
        Payload::Rc5 {
            address,
            command,
            toggle: 0,
        }
    }

    /// RC6 payload with toggle cleared and the full 20-bit payload.
    pub fn rc6(mode: u32, address: u32, command: u32) -> Self {
        Payload::Rc6 {
            mode,
            address,
            command,
            toggle: 0,
            bits: rc6::PAYLOAD_BITS,
        }
    }

    /// Panasonic payload.
    pub fn panasonic(vendor: u32, address: u32, command: u32) -> Self {
        Payload::Panasonic {
            vendor,
            address,
            command,
        }
    }

    /// Sharp payload without the repeat frame.
    pub fn sharp(address: u32, command: u32) -> Self {
        Payload::Sharp {
            address,
            command,
            repeat: false,
        }
    }

    /// Raw payload.
    pub fn raw(frequency_hz: u32, pattern: Vec<u32>) -> Self {
        Payload::Raw {
            frequency_hz,
            pattern,
        }
    }

    /// The protocol this payload is encoded with.
    pub fn protocol(&self) -> Protocol {
        match self {
            Payload::Nec { .. } => Protocol::Nec,
            Payload::Sirc { .. } => Protocol::Sirc,
            Payload::Rc5 { .. } => Protocol::Rc5,
            Payload::Rc6 { .. } => Protocol::Rc6,
            Payload::Panasonic { .. } => Protocol::Panasonic,
            Payload::Sharp { .. } => Protocol::Sharp,
            Payload::Raw { .. } => Protocol::Raw,
        }
    }

    /// Carrier frequency: the protocol default, or the raw payload's own.
    pub fn frequency_hz(&self) -> u32 {
        match self {
            Payload::Raw { frequency_hz, .. } => *frequency_hz,
            other => other.protocol().default_frequency_hz(),
        }
    }

    /// Builds the pulse pattern for this payload.
    ///
    /// Raw payloads are passed through untouched; validating them is the
    /// transmitter's job.
    pub fn pattern(&self) -> PulsePattern {
        match *self {
            Payload::Nec { address, command } => nec::encode(address, command),
            Payload::Sirc {
                command,
                device,
                bits,
            } => sirc::encode(command, device, bits),
            Payload::Rc5 {
                address,
                command,
                toggle,
            } => rc5::encode(address, command, toggle),
            Payload::Rc6 {
                mode,
                address,
                command,
                toggle,
                bits,
            } => rc6::encode(mode, address, command, toggle, bits),
            Payload::Panasonic {
                vendor,
                address,
                command,
            } => panasonic::encode(vendor, address, command),
            Payload::Sharp {
                address,
                command,
                repeat,
            } => sharp::encode(address, command, repeat),
            Payload::Raw { ref pattern, .. } => PulsePattern::from_raw(pattern.clone()),
        }
    }

    /// Encodes the payload into a ready-to-send [`Transmission`].
    pub fn encode(&self) -> Transmission {
        let transmission = Transmission {
            frequency_hz: self.frequency_hz(),
            pattern: self.pattern(),
        };
        debug!(
            protocol = %self.protocol(),
            frequency_hz = transmission.frequency_hz,
            entries = transmission.pattern.len(),
            "encoded payload"
        );
        transmission
    }
}

/// Carrier frequency plus the mark/space pattern to emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transmission {
    pub frequency_hz: u32,
    pub pattern: PulsePattern,
}

impl Transmission {
    /// How long the emitter is busy sending this transmission.
    pub fn total_duration_us(&self) -> u64 {
        self.pattern.total_duration_us()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
