//! Panasonic (Kaseikyo) encoder, 48-bit frame.
//!
//! The frame is assembled big-endian as `vendor:16 address:16 command:16`
//! and sent MSB first with pulse-distance coding, followed by a single
//! trailer mark.

use crate::pattern::{PatternBuilder, PulsePattern};

/// Carrier frequency for Panasonic transmissions.
pub const DEFAULT_FREQUENCY_HZ: u32 = 37_000;

/// Vendor code used by Panasonic-branded equipment.
pub const PANASONIC_VENDOR: u32 = 0x2002;

const FRAME_BITS: u32 = 48;
const LEADER_MARK: u32 = 3504;
const LEADER_SPACE: u32 = 1752;
const BIT_MARK: u32 = 438;
const ZERO_SPACE: u32 = 438;
const ONE_SPACE: u32 = 1314;
const TRAILER_MARK: u32 = 438;

/// Encodes a 48-bit Kaseikyo frame.  Each field is masked to 16 bits.
pub fn encode(vendor: u32, address: u32, command: u32) -> PulsePattern {
    let frame = frame_value(vendor, address, command);

    let mut builder = PatternBuilder::with_capacity(2 + 2 * FRAME_BITS as usize + 2);
    builder.mark(LEADER_MARK).space(LEADER_SPACE);

    for i in (0..FRAME_BITS).rev() {
        builder.mark(BIT_MARK);
        if (frame >> i) & 1 == 1 {
            builder.space(ONE_SPACE);
        } else {
            builder.space(ZERO_SPACE);
        }
    }

    builder.mark(TRAILER_MARK);
    builder.ensure_trailing_space(ZERO_SPACE);
    builder.build()
}

fn frame_value(vendor: u32, address: u32, command: u32) -> u64 {
    (u64::from(vendor & 0xFFFF) << 32)
        | (u64::from(address & 0xFFFF) << 16)
        | u64::from(command & 0xFFFF)
}
