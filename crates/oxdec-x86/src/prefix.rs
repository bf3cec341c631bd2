//! Legacy prefix scanning and per-instruction decode state.

use oxdec_core::{Bitness, Instruction, Register};

use crate::cursor::Cursor;
use crate::error::DecodeError;

/// Which family of encoding carries the instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EncodingKind {
    Legacy,
    Vex,
    Xop,
    Evex,
}

/// Mandatory prefix as seen by the opcode tables. For legacy maps this is
/// the last 66/F2/F3 prefix; for VEX/XOP/EVEX it is the `pp` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MandatoryPrefix {
    None,
    P66,
    PF3,
    PF2,
}

/// Effective operand or address size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum OpSize {
    Size16 = 0,
    Size32 = 1,
    Size64 = 2,
}

/// Transient state for a single `decode()` call.
#[derive(Debug, Clone)]
pub(crate) struct PrefixState {
    pub bitness: Bitness,
    pub encoding: EncodingKind,
    pub mandatory_prefix: MandatoryPrefix,
    pub operand_size: OpSize,
    pub address_size: OpSize,
    /// A REX byte immediately precedes the opcode.
    pub has_rex: bool,
    /// REX.W / VEX.W / EVEX.W.
    pub w: bool,
    /// REX.R / VEX.R shifted into place (0 or 8).
    pub extra_register_base: u32,
    /// REX.X / VEX.X shifted into place (0 or 8).
    pub extra_index_register_base: u32,
    /// REX.B / VEX.B shifted into place (0 or 8).
    pub extra_base_register_base: u32,
    /// EVEX.R' shifted into place (0 or 16).
    pub extra_register_base_evex: u32,
    /// EVEX.X' reused as bit 4 of a register `rm` field (0 or 16).
    pub extra_base_register_base_evex: u32,
    /// VEX/XOP/EVEX.vvvv, inverted and extended, 0..=31. Masked to 3 bits
    /// outside 64-bit mode.
    pub vvvv: u32,
    /// Unmasked inverted vvvv (plus V'), used to reject a nonzero field on
    /// instructions that take no vvvv operand.
    pub vvvv_check: u32,
    /// Raw L'L bits: 0 = 128, 1 = 256, 2 = 512, 3 = reserved.
    pub vector_length: u32,
    /// EVEX.aaa opmask selector.
    pub aaa: u32,
    /// EVEX.z bit.
    pub zeroing: bool,
    /// EVEX.b bit: broadcast, rounding control or SAE depending on context.
    pub broadcast: bool,
    /// Malformed encoding seen; the result collapses to the invalid sentinel.
    pub invalid: bool,
    // ModRM fields (valid once `has_modrm` is set).
    pub has_modrm: bool,
    pub mod_: u32,
    pub reg: u32,
    pub rm: u32,
}

impl PrefixState {
    pub(crate) fn new(bitness: Bitness) -> Self {
        let default_size = match bitness {
            Bitness::Bits16 => OpSize::Size16,
            Bitness::Bits32 | Bitness::Bits64 => OpSize::Size32,
        };
        let address_size = match bitness {
            Bitness::Bits16 => OpSize::Size16,
            Bitness::Bits32 => OpSize::Size32,
            Bitness::Bits64 => OpSize::Size64,
        };
        Self {
            bitness,
            encoding: EncodingKind::Legacy,
            mandatory_prefix: MandatoryPrefix::None,
            operand_size: default_size,
            address_size,
            has_rex: false,
            w: false,
            extra_register_base: 0,
            extra_index_register_base: 0,
            extra_base_register_base: 0,
            extra_register_base_evex: 0,
            extra_base_register_base_evex: 0,
            vvvv: 0,
            vvvv_check: 0,
            vector_length: 0,
            aaa: 0,
            zeroing: false,
            broadcast: false,
            invalid: false,
            has_modrm: false,
            mod_: 0,
            reg: 0,
            rm: 0,
        }
    }

    /// Default operand size for the current mode, ignoring prefixes.
    pub(crate) fn default_operand_size(&self) -> OpSize {
        match self.bitness {
            Bitness::Bits16 => OpSize::Size16,
            Bitness::Bits32 | Bitness::Bits64 => OpSize::Size32,
        }
    }
}

/// Consumes all legacy prefixes and a trailing REX byte (64-bit mode only),
/// returning the first non-prefix byte. Repeated prefixes from the same
/// group are legal; the last one wins.
pub(crate) fn scan(
    cursor: &mut Cursor<'_>,
    state: &mut PrefixState,
    instr: &mut Instruction,
) -> Result<u8, DecodeError> {
    let is_64 = state.bitness.is_64();
    // A REX byte only counts if it is the last prefix before the opcode.
    let mut rex = 0u8;
    loop {
        let b = cursor.read_u8()?;
        match b {
            0x26 => {
                set_segment(state, instr, Register::ES);
                rex = 0;
            }
            0x2E => {
                set_segment(state, instr, Register::CS);
                rex = 0;
            }
            0x36 => {
                set_segment(state, instr, Register::SS);
                rex = 0;
            }
            0x3E => {
                set_segment(state, instr, Register::DS);
                rex = 0;
            }
            0x64 => {
                instr.segment_prefix = Register::FS;
                rex = 0;
            }
            0x65 => {
                instr.segment_prefix = Register::GS;
                rex = 0;
            }
            0x66 => {
                state.operand_size = match state.default_operand_size() {
                    OpSize::Size16 => OpSize::Size32,
                    _ => OpSize::Size16,
                };
                if state.mandatory_prefix == MandatoryPrefix::None {
                    state.mandatory_prefix = MandatoryPrefix::P66;
                }
                rex = 0;
            }
            0x67 => {
                state.address_size = match state.bitness {
                    Bitness::Bits16 => OpSize::Size32,
                    Bitness::Bits32 => OpSize::Size16,
                    Bitness::Bits64 => OpSize::Size32,
                };
                rex = 0;
            }
            0xF0 => {
                instr.has_lock_prefix = true;
                rex = 0;
            }
            0xF2 => {
                instr.has_repne_prefix = true;
                instr.has_rep_prefix = false;
                state.mandatory_prefix = MandatoryPrefix::PF2;
                rex = 0;
            }
            0xF3 => {
                instr.has_rep_prefix = true;
                instr.has_repne_prefix = false;
                state.mandatory_prefix = MandatoryPrefix::PF3;
                rex = 0;
            }
            _ if is_64 && (b & 0xF0) == 0x40 => rex = b,
            _ => {
                if rex != 0 {
                    state.has_rex = true;
                    if rex & 0x08 != 0 {
                        state.w = true;
                        state.operand_size = OpSize::Size64;
                    }
                    state.extra_register_base = ((rex as u32) & 0x04) << 1;
                    state.extra_index_register_base = ((rex as u32) & 0x02) << 2;
                    state.extra_base_register_base = ((rex as u32) & 0x01) << 3;
                }
                return Ok(b);
            }
        }
    }
}

fn set_segment(state: &PrefixState, instr: &mut Instruction, seg: Register) {
    // In 64-bit mode ES/CS/SS/DS overrides are ignored for address
    // formation, and in particular never displace an earlier FS/GS.
    if state.bitness.is_64()
        && matches!(instr.segment_prefix, Register::FS | Register::GS)
    {
        return;
    }
    instr.segment_prefix = seg;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_bytes(bitness: Bitness, bytes: &[u8]) -> (PrefixState, Instruction, u8) {
        let mut cursor = Cursor::new(bytes, 0);
        let mut state = PrefixState::new(bitness);
        let mut instr = Instruction::default();
        let b = scan(&mut cursor, &mut state, &mut instr).unwrap();
        (state, instr, b)
    }

    #[test]
    fn rex_applies_only_before_opcode() {
        let (state, _, b) = scan_bytes(Bitness::Bits64, &[0x48, 0x89]);
        assert!(state.w);
        assert_eq!(b, 0x89);

        // A later prefix cancels the REX byte.
        let (state, _, b) = scan_bytes(Bitness::Bits64, &[0x48, 0x66, 0x89]);
        assert!(!state.w);
        assert!(!state.has_rex);
        assert_eq!(state.operand_size, OpSize::Size16);
        assert_eq!(b, 0x89);
    }

    #[test]
    fn rex_is_not_a_prefix_outside_64_bit() {
        let (state, _, b) = scan_bytes(Bitness::Bits32, &[0x48]);
        assert!(!state.has_rex);
        assert_eq!(b, 0x48);
        assert_eq!(state.operand_size, OpSize::Size32);
    }

    #[test]
    fn last_segment_override_wins() {
        let (_, instr, _) = scan_bytes(Bitness::Bits32, &[0x2E, 0x3E, 0x90]);
        assert_eq!(instr.segment_prefix, Register::DS);
    }

    #[test]
    fn legacy_segment_cannot_displace_fs_gs_in_64_bit() {
        let (_, instr, _) = scan_bytes(Bitness::Bits64, &[0x64, 0x2E, 0x90]);
        assert_eq!(instr.segment_prefix, Register::FS);

        let (_, instr, _) = scan_bytes(Bitness::Bits32, &[0x64, 0x2E, 0x90]);
        assert_eq!(instr.segment_prefix, Register::CS);
    }

    #[test]
    fn f2_and_f3_displace_each_other() {
        let (state, instr, _) = scan_bytes(Bitness::Bits32, &[0xF2, 0xF3, 0x90]);
        assert!(instr.has_rep_prefix);
        assert!(!instr.has_repne_prefix);
        assert_eq!(state.mandatory_prefix, MandatoryPrefix::PF3);
    }

    #[test]
    fn operand_size_toggles_from_mode_default() {
        let (state, _, _) = scan_bytes(Bitness::Bits16, &[0x66, 0x90]);
        assert_eq!(state.operand_size, OpSize::Size32);
        let (state, _, _) = scan_bytes(Bitness::Bits64, &[0x66, 0x90]);
        assert_eq!(state.operand_size, OpSize::Size16);
    }

    #[test]
    fn p66_does_not_displace_rep_mandatory_prefix() {
        let (state, _, _) = scan_bytes(Bitness::Bits32, &[0xF3, 0x66, 0x90]);
        // 66 only claims the mandatory slot when it is empty.
        assert_eq!(state.mandatory_prefix, MandatoryPrefix::PF3);
        assert_eq!(state.operand_size, OpSize::Size16);
    }
}
