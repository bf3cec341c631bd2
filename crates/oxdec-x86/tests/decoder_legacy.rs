//! Legacy-encoded instruction decoding across all three modes: prefixes,
//! groups, immediates, branches and the mode-dependent opcode overlaps.

use oxdec_core::{Bitness, Code, Instruction, MemorySize, OpKind, Register};
use oxdec_x86::Decoder;

fn decode(bitness: Bitness, bytes: &[u8]) -> Instruction {
    let mut decoder = Decoder::new(bitness, bytes);
    let instr = decoder.decode().expect("enough bytes");
    assert_eq!(
        instr.byte_length as usize,
        bytes.len(),
        "expected the whole input to be one instruction"
    );
    instr
}

#[test]
fn operand_size_follows_mode_and_66() {
    let instr = decode(Bitness::Bits16, &[0x01, 0xD8]);
    assert_eq!(instr.code, Code::Add_rm16_r16);
    assert_eq!(instr.op_register(0), Register::AX);
    assert_eq!(instr.op_register(1), Register::BX);

    let instr = decode(Bitness::Bits32, &[0x01, 0xD8]);
    assert_eq!(instr.code, Code::Add_rm32_r32);
    assert_eq!(instr.op_register(0), Register::EAX);

    let instr = decode(Bitness::Bits64, &[0x66, 0x01, 0xD8]);
    assert_eq!(instr.code, Code::Add_rm16_r16);
    assert_eq!(instr.op_register(0), Register::AX);
}

#[test]
fn rex_extends_and_renames_byte_registers() {
    // REX.R and REX.B lift reg/rm into r8..r15.
    let instr = decode(Bitness::Bits64, &[0x45, 0x00, 0xF7]);
    assert_eq!(instr.code, Code::Add_rm8_r8);
    assert_eq!(instr.op_register(0), Register::R15L);
    assert_eq!(instr.op_register(1), Register::R14L);

    // Any REX at all renames AH..BH to SPL..DIL.
    let instr = decode(Bitness::Bits64, &[0x40, 0x00, 0xE6]);
    assert_eq!(instr.op_register(0), Register::SIL);
    assert_eq!(instr.op_register(1), Register::SPL);

    let instr = decode(Bitness::Bits64, &[0x00, 0xE6]);
    assert_eq!(instr.op_register(0), Register::DH);
    assert_eq!(instr.op_register(1), Register::AH);
}

#[test]
fn group_opcodes_select_by_modrm_reg() {
    let instr = decode(Bitness::Bits32, &[0xF7, 0xD8]);
    assert_eq!(instr.code, Code::Neg_rm32);
    assert_eq!(instr.op_register(0), Register::EAX);

    let instr = decode(Bitness::Bits32, &[0xF6, 0x15, 0x44, 0x33, 0x22, 0x11]);
    assert_eq!(instr.code, Code::Not_rm8);
    assert_eq!(instr.op_kind(0), OpKind::Memory);
    assert_eq!(instr.memory_displacement, 0x1122_3344);
    assert_eq!(instr.memory_size, MemorySize::UInt8);
}

#[test]
fn shift_forms() {
    let instr = decode(Bitness::Bits32, &[0xD1, 0xE0]);
    assert_eq!(instr.code, Code::Shl_rm32_1);
    assert_eq!(instr.op_kind(1), OpKind::Immediate8);
    assert_eq!(instr.immediate, 1);

    let instr = decode(Bitness::Bits32, &[0xD3, 0xE0]);
    assert_eq!(instr.code, Code::Shl_rm32_CL);
    assert_eq!(instr.op_register(1), Register::CL);

    let instr = decode(Bitness::Bits32, &[0xC1, 0xE0, 0x05]);
    assert_eq!(instr.code, Code::Shl_rm32_imm8);
    assert_eq!(instr.immediate, 5);
}

#[test]
fn sign_extended_immediates() {
    let instr = decode(Bitness::Bits32, &[0x83, 0xC0, 0xF0]);
    assert_eq!(instr.code, Code::Add_rm32_imm8);
    assert_eq!(instr.op_kind(1), OpKind::Immediate8to32);
    assert_eq!(instr.immediate_i64(1), -16);

    // PUSH imm8 defaults to a 64-bit operand in long mode.
    let instr = decode(Bitness::Bits64, &[0x6A, 0xFF]);
    assert_eq!(instr.code, Code::Pushq_imm8);
    assert_eq!(instr.op_kind(0), OpKind::Immediate8to64);
    assert_eq!(instr.immediate_i64(0), -1);
}

#[test]
fn mov_r64_imm64_is_ten_bytes() {
    let instr = decode(
        Bitness::Bits64,
        &[0x48, 0xB8, 0xEF, 0xCD, 0xAB, 0x89, 0x67, 0x45, 0x23, 0x01],
    );
    assert_eq!(instr.code, Code::Mov_r64_imm64);
    assert_eq!(instr.op_kind(1), OpKind::Immediate64);
    assert_eq!(instr.immediate, 0x0123_4567_89AB_CDEF);
}

#[test]
fn moffs_width_follows_address_size() {
    let instr = decode(Bitness::Bits32, &[0xA1, 0x44, 0x33, 0x22, 0x11]);
    assert_eq!(instr.code, Code::Mov_EAX_moffs32);
    assert_eq!(instr.op_register(0), Register::EAX);
    assert_eq!(instr.op_kind(1), OpKind::Memory);
    assert_eq!(instr.memory_displacement, 0x1122_3344);
    assert_eq!(instr.memory_displ_size, 4);

    let instr = decode(
        Bitness::Bits64,
        &[0xA1, 0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11],
    );
    assert_eq!(instr.code, Code::Mov_EAX_moffs32);
    assert_eq!(instr.memory_displacement, 0x1122_3344_5566_7788);
    assert_eq!(instr.memory_displ_size, 8);
}

#[test]
fn segment_overrides() {
    let instr = decode(
        Bitness::Bits64,
        &[0x64, 0x8B, 0x04, 0x25, 0x10, 0x00, 0x00, 0x00],
    );
    assert_eq!(instr.code, Code::Mov_r32_rm32);
    assert_eq!(instr.op_register(0), Register::EAX);
    assert_eq!(instr.memory_base, Register::None);
    assert_eq!(instr.memory_displacement, 0x10);
    assert_eq!(instr.memory_segment(), Register::FS);

    let instr = decode(Bitness::Bits64, &[0x2E, 0x8B, 0x00]);
    assert_eq!(instr.segment_prefix, Register::CS);
}

#[test]
fn string_ops_and_rep() {
    let instr = decode(Bitness::Bits64, &[0xF3, 0xAA]);
    assert_eq!(instr.code, Code::Stosb_m8_AL);
    assert!(instr.has_rep_prefix);
    assert_eq!(instr.op_kind(0), OpKind::MemoryESRDI);
    assert_eq!(instr.op_register(1), Register::AL);

    // 67 shrinks the address size used by the implicit operand.
    let instr = decode(Bitness::Bits64, &[0x67, 0xAA]);
    assert_eq!(instr.op_kind(0), OpKind::MemoryESEDI);
}

#[test]
fn ret_keeps_66_in_long_mode() {
    assert_eq!(decode(Bitness::Bits64, &[0xC3]).code, Code::Retnq);
    assert_eq!(decode(Bitness::Bits64, &[0x66, 0xC3]).code, Code::Retnw);

    let instr = decode(Bitness::Bits64, &[0xC2, 0x10, 0x00]);
    assert_eq!(instr.code, Code::Retnq_imm16);
    assert_eq!(instr.op_kind(0), OpKind::Immediate16);
    assert_eq!(instr.immediate, 0x10);
}

#[test]
fn branch_targets_wrap_to_operand_size() {
    let mut decoder = Decoder::with_ip(Bitness::Bits16, &[0xEB, 0xFE], 0x1234);
    let instr = decoder.decode().unwrap();
    assert_eq!(instr.code, Code::Jmp_rel8_16);
    assert_eq!(instr.op_kind(0), OpKind::NearBranch16);
    assert_eq!(instr.near_branch, 0x1234);

    // Backwards past zero wraps within 16 bits.
    let mut decoder = Decoder::with_ip(Bitness::Bits16, &[0x71, 0x80], 0x10);
    let instr = decoder.decode().unwrap();
    assert_eq!(instr.code, Code::Jno_rel8_16);
    assert_eq!(instr.near_branch, 0xFF92);

    let instr = decode(Bitness::Bits32, &[0xE9, 0x00, 0x10, 0x00, 0x00]);
    assert_eq!(instr.code, Code::Jmp_rel32_32);
    assert_eq!(instr.op_kind(0), OpKind::NearBranch32);
    assert_eq!(instr.near_branch, 0x1005);

    // Near branches are always 64-bit in long mode.
    let mut decoder = Decoder::with_ip(Bitness::Bits64, &[0x75, 0xF0], 0x1000);
    let instr = decoder.decode().unwrap();
    assert_eq!(instr.code, Code::Jne_rel8_64);
    assert_eq!(instr.op_kind(0), OpKind::NearBranch64);
    assert_eq!(instr.near_branch, 0xFF2);

    let mut decoder = Decoder::with_ip(Bitness::Bits64, &[0xE8, 0xFB, 0xFF, 0xFF, 0xFF], 0x100);
    let instr = decoder.decode().unwrap();
    assert_eq!(instr.code, Code::Call_rel32_64);
    assert_eq!(instr.near_branch, 0x100);
}

#[test]
fn jcxz_counter_follows_address_size() {
    assert_eq!(decode(Bitness::Bits16, &[0xE3, 0x10]).code, Code::Jcxz_rel8);
    assert_eq!(decode(Bitness::Bits16, &[0x67, 0xE3, 0x10]).code, Code::Jecxz_rel8);
    assert_eq!(decode(Bitness::Bits32, &[0xE3, 0x10]).code, Code::Jecxz_rel8);
    assert_eq!(decode(Bitness::Bits32, &[0x67, 0xE3, 0x10]).code, Code::Jcxz_rel8);
    assert_eq!(decode(Bitness::Bits64, &[0xE3, 0x10]).code, Code::Jrcxz_rel8);
    assert_eq!(decode(Bitness::Bits64, &[0x67, 0xE3, 0x10]).code, Code::Jecxz_rel8);
}

#[test]
fn opcode_63_differs_by_mode() {
    let instr = decode(Bitness::Bits32, &[0x63, 0xC8]);
    assert_eq!(instr.code, Code::Arpl_rm16_r16);
    assert_eq!(instr.op_register(0), Register::AX);
    assert_eq!(instr.op_register(1), Register::CX);

    let instr = decode(Bitness::Bits64, &[0x63, 0xC8]);
    assert_eq!(instr.code, Code::Movsxd_r32_rm32);

    let instr = decode(Bitness::Bits64, &[0x48, 0x63, 0xC1]);
    assert_eq!(instr.code, Code::Movsxd_r64_rm32);
    assert_eq!(instr.op_register(0), Register::RAX);
    assert_eq!(instr.op_register(1), Register::ECX);
}

#[test]
fn bound_requires_memory() {
    let instr = decode(Bitness::Bits32, &[0x62, 0x08]);
    assert_eq!(instr.code, Code::Bound_r32_m3232);
    assert_eq!(instr.op_register(0), Register::ECX);
    assert_eq!(instr.memory_size, MemorySize::Bound32_DwordDword);

    assert!(decode(Bitness::Bits32, &[0x62, 0xC8]).is_invalid());
}

#[test]
fn lea_rejects_register_forms() {
    let instr = decode(Bitness::Bits64, &[0x8D, 0x00]);
    assert_eq!(instr.code, Code::Lea_r32_m);
    assert_eq!(instr.memory_base, Register::RAX);

    assert!(decode(Bitness::Bits64, &[0x8D, 0xC0]).is_invalid());
}

#[test]
fn mov_segment_forms() {
    let instr = decode(Bitness::Bits32, &[0x8E, 0xE0]);
    assert_eq!(instr.code, Code::Mov_Sreg_rm32);
    assert_eq!(instr.op_register(0), Register::FS);
    assert_eq!(instr.op_register(1), Register::EAX);

    // CS cannot be a destination, and encodings 6/7 are reserved.
    assert!(decode(Bitness::Bits32, &[0x8E, 0xC8]).is_invalid());
    assert!(decode(Bitness::Bits32, &[0x8C, 0xF0]).is_invalid());
}

#[test]
fn enter_has_two_immediates() {
    let instr = decode(Bitness::Bits32, &[0xC8, 0x20, 0x00, 0x01]);
    assert_eq!(instr.code, Code::Enterd_imm16_imm8);
    assert_eq!(instr.op_kind(0), OpKind::Immediate16);
    assert_eq!(instr.immediate, 0x20);
    assert_eq!(instr.op_kind(1), OpKind::Immediate8_2nd);
    assert_eq!(instr.immediate2, 1);
}

#[test]
fn sse_rows_consume_their_selecting_prefix() {
    let instr = decode(Bitness::Bits32, &[0x0F, 0x10, 0x08]);
    assert_eq!(instr.code, Code::Movups_xmm_xmmm128);
    assert_eq!(instr.op_register(0), Register::XMM1);
    assert_eq!(instr.memory_base, Register::EAX);

    let instr = decode(Bitness::Bits32, &[0xF3, 0x0F, 0x10, 0xC1]);
    assert_eq!(instr.code, Code::Movss_xmm_xmmm32);
    assert_eq!(instr.op_register(1), Register::XMM1);
    assert!(!instr.has_rep_prefix);

    let instr = decode(Bitness::Bits32, &[0xF2, 0x0F, 0x10, 0xC1]);
    assert_eq!(instr.code, Code::Movsd_xmm_xmmm64);
    assert!(!instr.has_repne_prefix);

    let instr = decode(Bitness::Bits32, &[0xF3, 0x0F, 0xB8, 0xC1]);
    assert_eq!(instr.code, Code::Popcnt_r32_rm32);
    assert!(!instr.has_rep_prefix);
}

#[test]
fn pmuldq_in_16_bit_mode() {
    // 66 selects the row; the operands stay 128-bit vectors.
    let instr = decode(Bitness::Bits16, &[0x66, 0x0F, 0x38, 0x28, 0xCD]);
    assert_eq!(instr.code, Code::Pmuldq_xmm_xmmm128);
    assert_eq!(instr.op_register(0), Register::XMM1);
    assert_eq!(instr.op_register(1), Register::XMM5);

    let instr = decode(Bitness::Bits16, &[0x66, 0x0F, 0x38, 0x28, 0x08]);
    assert_eq!(instr.op_register(0), Register::XMM1);
    assert_eq!(instr.op_kind(1), OpKind::Memory);
    assert_eq!(instr.memory_base, Register::BX);
    assert_eq!(instr.memory_index, Register::SI);
    assert_eq!(instr.memory_size, MemorySize::Packed128_Int32);
}

#[test]
fn movbe_keeps_66_as_operand_size() {
    let instr = decode(Bitness::Bits64, &[0x66, 0x0F, 0x38, 0xF0, 0x00]);
    assert_eq!(instr.code, Code::Movbe_r16_m16);
    assert_eq!(instr.op_register(0), Register::AX);
}

#[test]
fn cmpxchg8b_widens_with_rex_w() {
    let instr = decode(Bitness::Bits32, &[0x0F, 0xC7, 0x08]);
    assert_eq!(instr.code, Code::Cmpxchg8b_m64);
    assert_eq!(instr.memory_base, Register::EAX);

    let instr = decode(Bitness::Bits64, &[0x48, 0x0F, 0xC7, 0x08]);
    assert_eq!(instr.code, Code::Cmpxchg16b_m128);
}

#[test]
fn amd_3dnow_trailing_opcode() {
    let instr = decode(Bitness::Bits32, &[0x0F, 0x0F, 0xC1, 0xB4]);
    assert_eq!(instr.code, Code::D3NOW_Pfmul_mm_mmm64);
    assert_eq!(instr.op_register(0), Register::MM0);
    assert_eq!(instr.op_register(1), Register::MM1);

    let instr = decode(Bitness::Bits32, &[0x0F, 0x0F, 0x00, 0x9E]);
    assert_eq!(instr.code, Code::D3NOW_Pfadd_mm_mmm64);
    assert_eq!(instr.memory_base, Register::EAX);
    assert_eq!(instr.memory_size, MemorySize::Packed64_Float32);

    // Unassigned selector bytes decode to the sentinel with full length.
    let instr = decode(Bitness::Bits32, &[0x0F, 0x0F, 0xC1, 0x00]);
    assert!(instr.is_invalid());
    assert_eq!(instr.byte_length, 4);
}

#[test]
fn lock_prefix_is_reported() {
    let instr = decode(Bitness::Bits64, &[0xF0, 0x01, 0x18]);
    assert_eq!(instr.code, Code::Add_rm32_r32);
    assert!(instr.has_lock_prefix);
    assert_eq!(instr.memory_base, Register::RAX);
}

#[test]
fn far_call_encodings_are_undefined_here() {
    let instr = decode(Bitness::Bits32, &[0x9A]);
    assert!(instr.is_invalid());
    assert_eq!(instr.byte_length, 1);
}

#[test]
fn in_out_fixed_operands() {
    let instr = decode(Bitness::Bits32, &[0xE4, 0x60]);
    assert_eq!(instr.code, Code::In_AL_imm8);
    assert_eq!(instr.op_register(0), Register::AL);
    assert_eq!(instr.immediate, 0x60);

    let instr = decode(Bitness::Bits32, &[0xEC]);
    assert_eq!(instr.code, Code::In_AL_DX);
    assert_eq!(instr.op_register(1), Register::DX);
}
