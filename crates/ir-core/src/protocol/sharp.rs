//! Sharp encoder (15-bit frame, pulse-distance coding, LSB first).
//!
//! The frame value is `address:7` above `command:8`.  When `repeat` is set a
//! second leader is appended after a leader-length gap.

use crate::pattern::{PatternBuilder, PulsePattern};

/// Carrier frequency for Sharp transmissions.
pub const DEFAULT_FREQUENCY_HZ: u32 = 38_000;

const FRAME_BITS: u32 = 15;
const LEADER_MARK: u32 = 3200;
const LEADER_SPACE: u32 = 960;
const BIT_MARK: u32 = 320;
const ZERO_SPACE: u32 = 960;
const ONE_SPACE: u32 = 1920;

/// Encodes a Sharp frame.  `address` is masked to 7 bits, `command` to 8.
pub fn encode(address: u32, command: u32, repeat: bool) -> PulsePattern {
    let value = ((address & 0x7F) << 8) | (command & 0xFF);

    let mut builder = PatternBuilder::with_capacity(2 + 2 * FRAME_BITS as usize + 2);
    builder.mark(LEADER_MARK).space(LEADER_SPACE);

    for i in 0..FRAME_BITS {
        builder.mark(BIT_MARK);
        if (value >> i) & 1 == 1 {
            builder.space(ONE_SPACE);
        } else {
            builder.space(ZERO_SPACE);
        }
    }

    if repeat {
        builder.space(LEADER_SPACE);
        builder.mark(LEADER_MARK).space(LEADER_SPACE);
    }

    builder.ensure_trailing_space(ZERO_SPACE);
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_frame_layout() {
        let pattern = encode(0x02, 0x02, false);
        let p = pattern.as_slice();
        assert_eq!(p.len(), 2 + 30);
        assert_eq!(&p[..2], &[3200, 960]);
    }

    #[test]
    fn test_bits_are_lsb_first_command_then_address() {
        // command 0x01 → first data bit is 1, the rest of the command is 0.
        let pattern = encode(0x00, 0x01, false);
        let spaces: Vec<u32> = pattern.as_slice()[3..].iter().step_by(2).copied().collect();
        assert_eq!(spaces[0], ONE_SPACE);
        assert!(spaces[1..].iter().all(|&s| s == ZERO_SPACE));
    }

    #[test]
    fn test_repeat_appends_gap_and_second_leader() {
        // Arrange
        let single = encode(0x02, 0x10, false);

        // Act
        let repeated = encode(0x02, 0x10, true);

        // Assert – last bit space grows by the gap, then leader mark/space.
        let s = single.as_slice();
        let r = repeated.as_slice();
        assert_eq!(r.len(), s.len() + 2);
        assert_eq!(r[s.len() - 1], s[s.len() - 1] + LEADER_SPACE);
        assert_eq!(&r[s.len()..], &[LEADER_MARK, LEADER_SPACE]);
    }

    #[test]
    fn test_address_is_masked_to_seven_bits() {
        assert_eq!(encode(0x82, 0x110, false), encode(0x02, 0x10, false));
    }
}
