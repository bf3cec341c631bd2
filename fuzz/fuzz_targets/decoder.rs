#![no_main]

use libfuzzer_sys::fuzz_target;
use oxdec_x86::{Bitness, Decoder};

fuzz_target!(|data: &[u8]| {
    // Decode the whole buffer in every mode - should never panic.
    // Errors and invalid sentinels are fine.
    for bitness in [Bitness::Bits16, Bitness::Bits32, Bitness::Bits64] {
        let mut decoder = Decoder::with_ip(bitness, data, 0x1000);
        let mut count = 0;
        while decoder.can_decode() && count < 1000 {
            match decoder.decode() {
                Ok(instr) => {
                    assert!(instr.byte_length >= 1);
                    assert!(instr.byte_length <= 15);
                }
                Err(_) => break,
            }
            count += 1;
        }
    }
});
