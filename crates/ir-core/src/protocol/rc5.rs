//! Philips RC5 encoder (14-bit, Manchester coded).
//!
//! Frame: two start bits (always 1), toggle, 5-bit address, 6-bit command,
//! all MSB first.  A `1` is sent as half-bit mark then half-bit space, a `0`
//! as half-bit space then half-bit mark.  There is no leader.

use crate::pattern::{PatternBuilder, PulsePattern};

/// Carrier frequency for RC5 transmissions.
pub const DEFAULT_FREQUENCY_HZ: u32 = 36_000;

const HALF_BIT: u32 = 889;

/// Total frame length in bits.
pub const FRAME_BITS: usize = 14;

/// Encodes an RC5 frame.  `address` is masked to 5 bits, `command` to 6 bits
/// and `toggle` to 1 bit.
pub fn encode(address: u32, command: u32, toggle: u32) -> PulsePattern {
    let mut builder = PatternBuilder::with_capacity(2 * FRAME_BITS);

    for bit in frame_bits(address, command, toggle) {
        if bit {
            builder.mark(HALF_BIT).space(HALF_BIT);
        } else {
            builder.space(HALF_BIT).mark(HALF_BIT);
        }
    }

    builder.ensure_trailing_space(HALF_BIT);
    builder.build()
}

fn frame_bits(address: u32, command: u32, toggle: u32) -> [bool; FRAME_BITS] {
    let address = address & 0x1F;
    let command = command & 0x3F;

    let mut bits = [true; FRAME_BITS];
    bits[2] = toggle & 1 == 1;
    for i in 0..5 {
        bits[3 + i] = (address >> (4 - i)) & 1 == 1;
    }
    for i in 0..6 {
        bits[8 + i] = (command >> (5 - i)) & 1 == 1;
    }
    bits
}
