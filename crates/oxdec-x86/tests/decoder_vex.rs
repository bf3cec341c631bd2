//! VEX- and XOP-encoded instruction decoding: both prefix forms, vvvv
//! operands, L-bit selection and the mode-dependent C4/C5 ambiguity.

use oxdec_core::{Bitness, Code, Instruction, OpKind, Register};
use oxdec_x86::Decoder;

fn decode(bitness: Bitness, bytes: &[u8]) -> Instruction {
    let mut decoder = Decoder::new(bitness, bytes);
    let instr = decoder.decode().expect("enough bytes");
    assert_eq!(instr.byte_length as usize, bytes.len());
    instr
}

#[test]
fn three_byte_vex_with_vvvv() {
    let instr = decode(Bitness::Bits64, &[0xC4, 0xE2, 0x49, 0x28, 0x10]);
    assert_eq!(instr.code, Code::VEX_Vpmuldq_xmm_xmm_xmmm128);
    assert_eq!(instr.op_register(0), Register::XMM2);
    assert_eq!(instr.op_register(1), Register::XMM6);
    assert_eq!(instr.op_kind(2), OpKind::Memory);
    assert_eq!(instr.memory_base, Register::RAX);

    // W is ignored for this opcode.
    let instr = decode(Bitness::Bits64, &[0xC4, 0xE2, 0xC9, 0x28, 0x10]);
    assert_eq!(instr.code, Code::VEX_Vpmuldq_xmm_xmm_xmmm128);
}

#[test]
fn three_byte_vex_in_16_bit_mode() {
    // C4 is a VEX prefix here because the following byte has mod == 3;
    // the memory operand then uses 16-bit addressing.
    let instr = decode(Bitness::Bits16, &[0xC4, 0xE2, 0x49, 0x28, 0x10]);
    assert_eq!(instr.code, Code::VEX_Vpmuldq_xmm_xmm_xmmm128);
    assert_eq!(instr.op_register(0), Register::XMM2);
    assert_eq!(instr.op_register(1), Register::XMM6);
    assert_eq!(instr.op_kind(2), OpKind::Memory);
    assert_eq!(instr.memory_base, Register::BX);
    assert_eq!(instr.memory_index, Register::SI);
    assert_eq!(instr.memory_segment(), Register::DS);
    assert_eq!(instr.memory_displ_size, 0);
}

#[test]
fn two_byte_vex() {
    let instr = decode(
        Bitness::Bits64,
        &[0xC5, 0xF9, 0x6F, 0x04, 0x25, 0x44, 0x33, 0x22, 0x11],
    );
    assert_eq!(instr.code, Code::VEX_Vmovdqa_xmm_xmmm128);
    assert_eq!(instr.op_register(0), Register::XMM0);
    assert_eq!(instr.memory_base, Register::None);
    assert_eq!(instr.memory_displacement, 0x1122_3344);
}

#[test]
fn l_bit_splits_zeroupper_and_zeroall() {
    let instr = decode(Bitness::Bits64, &[0xC5, 0xF8, 0x77]);
    assert_eq!(instr.code, Code::VEX_Vzeroupper);
    assert_eq!(instr.op_count, 0);

    let instr = decode(Bitness::Bits64, &[0xC5, 0xFC, 0x77]);
    assert_eq!(instr.code, Code::VEX_Vzeroall);
}

#[test]
fn bmi_gpr_operands_through_vvvv() {
    let instr = decode(Bitness::Bits64, &[0xC4, 0xE2, 0x71, 0xF7, 0xC2]);
    assert_eq!(instr.code, Code::Shlx_r32_rm32_r32);
    assert_eq!(instr.op_register(0), Register::EAX);
    assert_eq!(instr.op_register(1), Register::EDX);
    assert_eq!(instr.op_register(2), Register::ECX);
}

#[test]
fn c4_is_les_outside_long_mode() {
    // modrm.mod != 3, so this is LES, not a VEX prefix.
    let instr = decode(Bitness::Bits32, &[0xC4, 0x10]);
    assert_eq!(instr.code, Code::Les_r32_m1632);
    assert_eq!(instr.op_register(0), Register::EDX);
    assert_eq!(instr.memory_base, Register::EAX);
}

#[test]
fn legacy_prefix_before_vex_is_invalid() {
    let instr = decode(Bitness::Bits64, &[0x66, 0xC5, 0xF9, 0x6F, 0xC0]);
    assert!(instr.is_invalid());
    assert_eq!(instr.byte_length, 5);
}

#[test]
fn is4_fourth_register_operand() {
    let instr = decode(Bitness::Bits64, &[0xC4, 0xE3, 0x69, 0x4A, 0xCB, 0x40]);
    assert_eq!(instr.code, Code::VEX_Vblendvps_xmm_xmm_xmmm128_xmm);
    assert_eq!(instr.op_register(0), Register::XMM1);
    assert_eq!(instr.op_register(1), Register::XMM2);
    assert_eq!(instr.op_register(2), Register::XMM3);
    assert_eq!(instr.op_register(3), Register::XMM4);
}

#[test]
fn mixed_width_insert_extract() {
    let instr = decode(Bitness::Bits64, &[0xC4, 0xE3, 0x6D, 0x18, 0xCB, 0x01]);
    assert_eq!(instr.code, Code::VEX_Vinsertf128_ymm_ymm_xmmm128_imm8);
    assert_eq!(instr.op_register(0), Register::YMM1);
    assert_eq!(instr.op_register(1), Register::YMM2);
    assert_eq!(instr.op_register(2), Register::XMM3);
    assert_eq!(instr.immediate, 1);
}

#[test]
fn xop_prefix_decodes() {
    let instr = decode(Bitness::Bits64, &[0x8F, 0xE9, 0x78, 0x01, 0xCA]);
    assert_eq!(instr.code, Code::Blcfill_r32_rm32);
    assert_eq!(instr.op_register(0), Register::EAX);
    assert_eq!(instr.op_register(1), Register::EDX);
}

#[test]
fn xop_map_numbers_below_8_stay_pop() {
    // 8F with modrm.reg selecting map < 8 is still POP r/m.
    let instr = decode(Bitness::Bits64, &[0x8F, 0xC0]);
    assert_eq!(instr.code, Code::Pop_rm64);
    assert_eq!(instr.op_register(0), Register::RAX);
}
