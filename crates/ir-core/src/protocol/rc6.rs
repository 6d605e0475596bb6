//! Philips RC6 encoder (mode 0 by default).
//!
//! Frame: leader (2666 mark / 889 space), a double-width start bit, then the
//! Manchester-coded payload `mode:3 toggle:1 address:8 command:8`, MSB first.
//! Callers may truncate the payload with a bit-width ceiling; the ceiling
//! never extends past the 20 natural payload bits.

use crate::pattern::{PatternBuilder, PulsePattern};

/// Carrier frequency for RC6 transmissions.
pub const DEFAULT_FREQUENCY_HZ: u32 = 36_000;

/// Number of payload bits after the start bit.
pub const PAYLOAD_BITS: u8 = 20;

const LEADER_MARK: u32 = 2666;
const LEADER_SPACE: u32 = 889;
const HALF_BIT: u32 = 444;

/// Encodes an RC6 frame, sending at most `bits` payload bits.
pub fn encode(mode: u32, address: u32, command: u32, toggle: u32, bits: u8) -> PulsePattern {
    let payload = payload_bits(mode, address, command, toggle);
    let effective = usize::from(bits.min(PAYLOAD_BITS));

    let mut builder = PatternBuilder::with_capacity(4 + 2 * effective);
    builder.mark(LEADER_MARK).space(LEADER_SPACE);
    builder.mark(2 * HALF_BIT).space(2 * HALF_BIT);

    for &bit in &payload[..effective] {
        if bit {
            builder.mark(HALF_BIT).space(HALF_BIT);
        } else {
            builder.space(HALF_BIT).mark(HALF_BIT);
        }
    }

    builder.ensure_trailing_space(HALF_BIT);
    builder.build()
}

fn payload_bits(mode: u32, address: u32, command: u32, toggle: u32) -> [bool; PAYLOAD_BITS as usize] {
    let mut bits = [false; PAYLOAD_BITS as usize];
    let mut idx = 0;
    let mut push = |value: u32, width: u32| {
        for i in (0..width).rev() {
            bits[idx] = (value >> i) & 1 == 1;
            idx += 1;
        }
    };

    push(mode & 0x7, 3);
    push(toggle & 0x1, 1);
    push(address & 0xFF, 8);
    push(command & 0xFF, 8);
    bits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_starts_with_leader_and_double_width_start_bit() {
        // Mode 4 makes the first payload bit a 1 (mark first), so nothing
        // merges into the start bit's space.
        let pattern = encode(4, 0xFF, 0xFF, 1, PAYLOAD_BITS);
        assert_eq!(&pattern.as_slice()[..4], &[2666, 889, 888, 888]);
    }

    #[test]
    fn test_all_ones_payload_has_one_entry_per_half_bit() {
        // Mode 7, toggle 1, address/command 0xFF: every bit is a 1.
        let pattern = encode(7, 0xFF, 0xFF, 1, PAYLOAD_BITS);
        assert_eq!(pattern.len(), 4 + 40);
        assert!(pattern.as_slice()[4..].iter().all(|&d| d == HALF_BIT));
    }

    #[test]
    fn test_leading_zero_merges_into_start_bit_space() {
        // Mode 0 starts with a 0 bit (space, mark).
        let pattern = encode(0, 0, 0, 0, 1);
        assert_eq!(pattern.as_slice(), &[2666, 889, 888, 888 + 444, 444, 444]);
    }

    #[test]
    fn test_bit_width_is_clamped_to_payload_size() {
        assert_eq!(encode(0, 0x12, 0x34, 0, 64), encode(0, 0x12, 0x34, 0, 20));
    }

    #[test]
    fn test_truncation_shortens_the_frame() {
        let full = encode(7, 0xFF, 0xFF, 1, 20);
        let truncated = encode(7, 0xFF, 0xFF, 1, 8);
        assert_eq!(truncated.len(), 4 + 16);
        assert!(truncated.len() < full.len());
    }

    #[test]
    fn test_zero_bits_sends_only_leader_and_start_bit() {
        let pattern = encode(0, 0x80, 0x0C, 0, 0);
        assert_eq!(pattern.as_slice(), &[2666, 889, 888, 888]);
    }

    #[test]
    fn test_payload_bits_order_is_mode_toggle_address_command() {
        let bits = payload_bits(0b101, 0x80, 0x01, 1);
        assert_eq!(&bits[..4], &[true, false, true, true]);
        assert!(bits[4]);
        assert!(bits[5..19].iter().all(|b| !b));
        assert!(bits[19]);
    }
}
