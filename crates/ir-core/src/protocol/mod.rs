//! Infrared protocol encoders.
//!
//! Every encoder is a pure function from command fields to a
//! [`PulsePattern`](crate::PulsePattern) and exports the carrier frequency the
//! protocol is normally sent at as `DEFAULT_FREQUENCY_HZ`.
//!
//! | Protocol  | Carrier | Bit coding      | Frame bits |
//! |-----------|---------|-----------------|------------|
//! | NEC       | 38 kHz  | pulse distance  | 32         |
//! | SIRC      | 40 kHz  | pulse width     | 12/15/20   |
//! | RC5       | 36 kHz  | Manchester      | 14         |
//! | RC6       | 36 kHz  | Manchester      | ≤ 20       |
//! | Panasonic | 37 kHz  | pulse distance  | 48         |
//! | Sharp     | 38 kHz  | pulse distance  | 15         |
//!
//! Field values wider than the protocol allows are masked, never rejected.

pub mod nec;
pub mod panasonic;
pub mod rc5;
pub mod rc6;
pub mod sharp;
pub mod sirc;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::payload::PayloadError;

/// Carrier frequency assumed for raw patterns that do not state their own.
pub const RAW_DEFAULT_FREQUENCY_HZ: u32 = 38_000;

/// Identifies an IR protocol (or a raw, pre-encoded pattern).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Protocol {
    Nec,
    Sirc,
    Rc5,
    Rc6,
    Panasonic,
    Sharp,
    Raw,
}

impl Protocol {
    /// All protocols, in catalog order.
    pub const ALL: [Protocol; 7] = [
        Protocol::Nec,
        Protocol::Sirc,
        Protocol::Rc5,
        Protocol::Rc6,
        Protocol::Panasonic,
        Protocol::Sharp,
        Protocol::Raw,
    ];

    /// Carrier frequency the protocol is normally transmitted at.
    pub fn default_frequency_hz(self) -> u32 {
        match self {
            Protocol::Nec => nec::DEFAULT_FREQUENCY_HZ,
            Protocol::Sirc => sirc::DEFAULT_FREQUENCY_HZ,
            Protocol::Rc5 => rc5::DEFAULT_FREQUENCY_HZ,
            Protocol::Rc6 => rc6::DEFAULT_FREQUENCY_HZ,
            Protocol::Panasonic => panasonic::DEFAULT_FREQUENCY_HZ,
            Protocol::Sharp => sharp::DEFAULT_FREQUENCY_HZ,
            Protocol::Raw => RAW_DEFAULT_FREQUENCY_HZ,
        }
    }

    /// Upper-case name used in preset files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Protocol::Nec => "NEC",
            Protocol::Sirc => "SIRC",
            Protocol::Rc5 => "RC5",
            Protocol::Rc6 => "RC6",
            Protocol::Panasonic => "PANASONIC",
            Protocol::Sharp => "SHARP",
            Protocol::Raw => "RAW",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Protocol {
    type Err = PayloadError;

    /// Parses a protocol name case-insensitively, ignoring surrounding
    /// whitespace (`"nec"`, `" Rc6 "`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Protocol::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PayloadError::UnknownProtocol(wanted.to_string()))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
