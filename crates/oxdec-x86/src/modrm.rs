//! ModRM, SIB and displacement parsing for all three address sizes.

use oxdec_core::{Instruction, Register};

use crate::cursor::Cursor;
use crate::error::DecodeError;
use crate::prefix::{OpSize, PrefixState};
use crate::table::TupleType;

pub(crate) fn read_modrm(
    cursor: &mut Cursor<'_>,
    state: &mut PrefixState,
) -> Result<(), DecodeError> {
    let m = cursor.read_u8()?;
    state.mod_ = (m >> 6) as u32;
    state.reg = ((m >> 3) & 7) as u32;
    state.rm = (m & 7) as u32;
    state.has_modrm = true;
    Ok(())
}

/// Scale factor for a compressed 8-bit displacement. Always 1 outside EVEX.
pub(crate) fn disp8_scale(state: &PrefixState, tuple: TupleType) -> u32 {
    let broadcast_elem = || if state.w { 8 } else { 4 };
    match tuple {
        TupleType::None => 1,
        TupleType::Full128 => {
            if state.broadcast {
                broadcast_elem()
            } else {
                16
            }
        }
        TupleType::Full256 => {
            if state.broadcast {
                broadcast_elem()
            } else {
                32
            }
        }
        TupleType::Full512 => {
            if state.broadcast {
                broadcast_elem()
            } else {
                64
            }
        }
        TupleType::FullMem128 => 16,
        TupleType::FullMem256 => 32,
        TupleType::FullMem512 => 64,
        TupleType::Tuple1Scalar => broadcast_elem(),
    }
}

/// Decodes the memory form of a ModRM r/m operand into the instruction's
/// memory fields. The caller has established `mod != 3`.
pub(crate) fn read_op_mem(
    cursor: &mut Cursor<'_>,
    state: &PrefixState,
    instr: &mut Instruction,
    tuple: TupleType,
) -> Result<(), DecodeError> {
    match state.address_size {
        OpSize::Size16 => read_op_mem_16(cursor, state, instr, tuple),
        OpSize::Size32 => read_op_mem_32_64(cursor, state, instr, tuple, false),
        OpSize::Size64 => read_op_mem_32_64(cursor, state, instr, tuple, true),
    }
}

/// 16-bit addressing: base and index come from a fixed table, there is no
/// SIB byte and no scale.
fn read_op_mem_16(
    cursor: &mut Cursor<'_>,
    state: &PrefixState,
    instr: &mut Instruction,
    tuple: TupleType,
) -> Result<(), DecodeError> {
    const BASE_INDEX: [(Register, Register); 8] = [
        (Register::BX, Register::SI),
        (Register::BX, Register::DI),
        (Register::BP, Register::SI),
        (Register::BP, Register::DI),
        (Register::SI, Register::None),
        (Register::DI, Register::None),
        (Register::BP, Register::None),
        (Register::BX, Register::None),
    ];
    match state.mod_ {
        0 => {
            if state.rm == 6 {
                instr.memory_displacement = cursor.read_u16()? as u64;
                instr.memory_displ_size = 2;
            } else {
                let (base, index) = BASE_INDEX[state.rm as usize];
                instr.memory_base = base;
                instr.memory_index = index;
            }
        }
        1 => {
            let (base, index) = BASE_INDEX[state.rm as usize];
            instr.memory_base = base;
            instr.memory_index = index;
            let n = disp8_scale(state, tuple);
            let d = n.wrapping_mul(cursor.read_u8()? as i8 as u32);
            instr.memory_displacement = d as u16 as u64;
            instr.memory_displ_size = 1;
        }
        _ => {
            let (base, index) = BASE_INDEX[state.rm as usize];
            instr.memory_base = base;
            instr.memory_index = index;
            instr.memory_displacement = cursor.read_u16()? as u64;
            instr.memory_displ_size = 2;
        }
    }
    Ok(())
}

/// 32- and 64-bit addressing share one shape: optional SIB byte, optional
/// disp8/disp32, RIP/EIP-relative form at mod=0 rm=5 in 64-bit mode.
fn read_op_mem_32_64(
    cursor: &mut Cursor<'_>,
    state: &PrefixState,
    instr: &mut Instruction,
    tuple: TupleType,
    addr64: bool,
) -> Result<(), DecodeError> {
    let gpr = |n: u32| {
        if addr64 {
            Register::gpr64(n)
        } else {
            Register::gpr32(n)
        }
    };
    let store_disp32 = |instr: &mut Instruction, d: u32| {
        instr.memory_displacement = if addr64 { d as i32 as i64 as u64 } else { d as u64 };
        instr.memory_displ_size = 4;
    };

    let mut need_disp8 = false;
    let mut need_disp32 = false;
    match state.mod_ {
        0 => {
            if state.rm == 5 {
                if state.bitness.is_64() {
                    instr.memory_base = if addr64 { Register::RIP } else { Register::EIP };
                }
                store_disp32(instr, cursor.read_u32()?);
                return Ok(());
            } else if state.rm != 4 {
                instr.memory_base = gpr(state.rm + state.extra_base_register_base);
                return Ok(());
            }
        }
        1 => need_disp8 = true,
        _ => need_disp32 = true,
    }

    if state.rm == 4 {
        let sib = cursor.read_u8()? as u32;
        instr.memory_index_scale = 1 << (sib >> 6);
        let index = ((sib >> 3) & 7) + state.extra_index_register_base;
        if index != 4 {
            instr.memory_index = gpr(index);
        }
        let base = sib & 7;
        if base == 5 && state.mod_ == 0 {
            store_disp32(instr, cursor.read_u32()?);
            return Ok(());
        }
        instr.memory_base = gpr(base + state.extra_base_register_base);
    } else {
        instr.memory_base = gpr(state.rm + state.extra_base_register_base);
    }

    if need_disp8 {
        let n = disp8_scale(state, tuple);
        let d = n.wrapping_mul(cursor.read_u8()? as i8 as u32);
        instr.memory_displacement = if addr64 { d as i32 as i64 as u64 } else { d as u64 };
        instr.memory_displ_size = 1;
    } else if need_disp32 {
        store_disp32(instr, cursor.read_u32()?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxdec_core::Bitness;

    fn decode_mem(bitness: Bitness, bytes: &[u8]) -> Instruction {
        let mut cursor = Cursor::new(bytes, 0);
        let mut state = PrefixState::new(bitness);
        read_modrm(&mut cursor, &mut state).unwrap();
        let mut instr = Instruction::default();
        read_op_mem(&mut cursor, &state, &mut instr, TupleType::None).unwrap();
        instr
    }

    #[test]
    fn mem16_base_index_table() {
        let instr = decode_mem(Bitness::Bits16, &[0x00]);
        assert_eq!(instr.memory_base, Register::BX);
        assert_eq!(instr.memory_index, Register::SI);

        let instr = decode_mem(Bitness::Bits16, &[0x03]);
        assert_eq!(instr.memory_base, Register::BP);
        assert_eq!(instr.memory_index, Register::DI);

        let instr = decode_mem(Bitness::Bits16, &[0x07]);
        assert_eq!(instr.memory_base, Register::BX);
        assert_eq!(instr.memory_index, Register::None);
    }

    #[test]
    fn mem16_disp16_form() {
        let instr = decode_mem(Bitness::Bits16, &[0x06, 0x34, 0x12]);
        assert_eq!(instr.memory_base, Register::None);
        assert_eq!(instr.memory_displacement, 0x1234);
        assert_eq!(instr.memory_displ_size, 2);
    }

    #[test]
    fn mem16_disp8_wraps_to_16_bits() {
        // mod=1 rm=4: [SI-1]
        let instr = decode_mem(Bitness::Bits16, &[0x44, 0xFF]);
        assert_eq!(instr.memory_base, Register::SI);
        assert_eq!(instr.memory_displacement, 0xFFFF);
        assert_eq!(instr.memory_displ_size, 1);
    }

    #[test]
    fn mem32_sib_scaled_index() {
        // mod=1 rm=4, sib = scale 4, index ECX, base EDX, disp8 = -8.
        let instr = decode_mem(Bitness::Bits32, &[0x44, 0x8A, 0xF8]);
        assert_eq!(instr.memory_base, Register::EDX);
        assert_eq!(instr.memory_index, Register::ECX);
        assert_eq!(instr.memory_index_scale, 4);
        assert_eq!(instr.memory_displacement, 0xFFFF_FFF8);
    }

    #[test]
    fn mem32_no_index_when_sib_index_is_4() {
        // mod=0 rm=4, sib = index 100 (none), base EBX.
        let instr = decode_mem(Bitness::Bits32, &[0x04, 0x23]);
        assert_eq!(instr.memory_base, Register::EBX);
        assert_eq!(instr.memory_index, Register::None);
    }

    #[test]
    fn mem64_rip_relative() {
        let instr = decode_mem(Bitness::Bits64, &[0x05, 0x10, 0x00, 0x00, 0x00]);
        assert_eq!(instr.memory_base, Register::RIP);
        assert_eq!(instr.memory_displacement, 0x10);
        assert_eq!(instr.memory_displ_size, 4);
    }

    #[test]
    fn mem32_mod0_rm5_is_absolute_outside_64_bit() {
        let instr = decode_mem(Bitness::Bits32, &[0x05, 0x10, 0x00, 0x00, 0x00]);
        assert_eq!(instr.memory_base, Register::None);
        assert_eq!(instr.memory_displacement, 0x10);
    }

    #[test]
    fn mem64_sib_base_5_mod0_is_disp32() {
        // mod=0 rm=4, sib base=101: disp32, index ESI*1.
        let instr = decode_mem(Bitness::Bits64, &[0x04, 0x35, 0xF0, 0xFF, 0xFF, 0xFF]);
        assert_eq!(instr.memory_base, Register::None);
        assert_eq!(instr.memory_index, Register::RSI);
        assert_eq!(instr.memory_displacement, 0xFFFF_FFFF_FFFF_FFF0);
    }

    #[test]
    fn compressed_disp8_scaling() {
        let mut state = PrefixState::new(Bitness::Bits64);
        assert_eq!(disp8_scale(&state, TupleType::Full128), 16);
        assert_eq!(disp8_scale(&state, TupleType::FullMem512), 64);
        state.broadcast = true;
        assert_eq!(disp8_scale(&state, TupleType::Full128), 4);
        state.w = true;
        assert_eq!(disp8_scale(&state, TupleType::Full128), 8);
        assert_eq!(disp8_scale(&state, TupleType::Tuple1Scalar), 8);
        assert_eq!(disp8_scale(&state, TupleType::None), 1);
    }
}
