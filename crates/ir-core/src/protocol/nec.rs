//! NEC protocol encoder.
//!
//! Frame layout (pulse-distance coding, LSB first within each byte):
//!
//! ```text
//! [leader 9000/4500][address:8][!address:8][command:8][!command:8][trailer 560/560]
//! ```
//!
//! The inverted copies let a receiver detect corrupted frames.

use crate::pattern::{PatternBuilder, PulsePattern};

/// Carrier frequency for NEC transmissions.
pub const DEFAULT_FREQUENCY_HZ: u32 = 38_000;

const LEADER_MARK: u32 = 9000;
const LEADER_SPACE: u32 = 4500;
const BIT_MARK: u32 = 560;
const ZERO_SPACE: u32 = 560;
const ONE_SPACE: u32 = 1690;
const TRAILER_MARK: u32 = 560;
const TRAILER_SPACE: u32 = 560;

/// Encodes an 8-bit address and 8-bit command.  Wider values are masked.
pub fn encode(address: u32, command: u32) -> PulsePattern {
    let addr = (address & 0xFF) as u8;
    let cmd = (command & 0xFF) as u8;

    let mut builder = PatternBuilder::with_capacity(68);
    builder.mark(LEADER_MARK).space(LEADER_SPACE);

    for byte in [addr, !addr, cmd, !cmd] {
        encode_byte(&mut builder, byte);
    }

    builder.mark(TRAILER_MARK).space(TRAILER_SPACE);
    builder.ensure_trailing_space(TRAILER_SPACE);
    builder.build()
}

fn encode_byte(builder: &mut PatternBuilder, byte: u8) {
    for i in 0..8 {
        builder.mark(BIT_MARK);
        if (byte >> i) & 1 == 1 {
            builder.space(ONE_SPACE);
        } else {
            builder.space(ZERO_SPACE);
        }
    }
}
