//! Property-based tests for the decoder.
//!
//! These tests verify invariants that should hold for all inputs:
//! - Decoding never panics on arbitrary bytes
//! - Decoded instruction length is within valid bounds
//! - Sweeping a buffer always terminates and accounts for every byte
//! - Deterministic decoding (same input → same output)

use proptest::prelude::*;

use oxdec_x86::{Bitness, Decoder, MAX_INSTRUCTION_LEN};

const MODES: [Bitness; 3] = [Bitness::Bits16, Bitness::Bits32, Bitness::Bits64];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10000))]

    /// Decoding arbitrary bytes should never panic, in any mode.
    #[test]
    fn decode_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..32)) {
        for mode in MODES {
            let mut decoder = Decoder::new(mode, &bytes);
            while decoder.can_decode() {
                let _ = decoder.decode();
            }
        }
    }

    /// Successfully decoded instructions have a valid length.
    #[test]
    fn decoded_length_is_valid(bytes in prop::collection::vec(any::<u8>(), 1..32)) {
        for mode in MODES {
            let mut decoder = Decoder::new(mode, &bytes);
            if let Ok(instr) = decoder.decode() {
                prop_assert!(instr.byte_length >= 1, "length must be at least 1");
                prop_assert!(
                    instr.byte_length as usize <= MAX_INSTRUCTION_LEN,
                    "length must be at most {}", MAX_INSTRUCTION_LEN
                );
                prop_assert!(
                    instr.byte_length as usize <= bytes.len(),
                    "length cannot exceed input length"
                );
            }
        }
    }

    /// Sweeping a buffer consumes every byte exactly once.
    #[test]
    fn sweep_accounts_for_every_byte(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        for mode in MODES {
            let mut decoder = Decoder::new(mode, &bytes);
            let mut consumed = 0usize;
            let mut steps = 0usize;
            while decoder.can_decode() {
                let before = decoder.position();
                let _ = decoder.decode();
                let after = decoder.position();
                prop_assert!(after > before, "decode must always make progress");
                consumed += after - before;
                steps += 1;
                prop_assert!(steps <= bytes.len(), "sweep must terminate");
            }
            prop_assert_eq!(consumed, bytes.len(), "sweep must consume the whole buffer");
        }
    }

    /// Decoding is deterministic: same input always produces same output.
    #[test]
    fn decode_is_deterministic(bytes in prop::collection::vec(any::<u8>(), 1..32)) {
        for mode in MODES {
            let result1 = Decoder::with_ip(mode, &bytes, 0x1000).decode();
            let result2 = Decoder::with_ip(mode, &bytes, 0x1000).decode();

            match (&result1, &result2) {
                (Ok(i1), Ok(i2)) => {
                    prop_assert_eq!(i1.code, i2.code, "codes should match");
                    prop_assert_eq!(i1.byte_length, i2.byte_length, "lengths should match");
                    prop_assert_eq!(i1.op_count, i2.op_count, "operand counts should match");
                }
                (Err(_), Err(_)) => {
                    // Both failed - this is consistent
                }
                _ => {
                    prop_assert!(
                        false,
                        "decode results should be consistent: got {:?} and {:?}",
                        result1, result2
                    );
                }
            }
        }
    }

    /// ip/next_ip bookkeeping matches the consumed byte count.
    #[test]
    fn next_ip_matches_length(bytes in prop::collection::vec(any::<u8>(), 1..32), ip in any::<u64>()) {
        for mode in MODES {
            let mut decoder = Decoder::with_ip(mode, &bytes, ip);
            if let Ok(instr) = decoder.decode() {
                prop_assert_eq!(instr.ip, ip, "instruction keeps its start ip");
                prop_assert_eq!(
                    instr.next_ip,
                    ip.wrapping_add(u64::from(instr.byte_length)),
                    "next_ip must follow the instruction"
                );
            }
        }
    }
}
