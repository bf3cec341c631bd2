//! EVEX-encoded instruction decoding: masking, zeroing, broadcast,
//! compressed displacements, embedded rounding and SAE.

use oxdec_core::{Bitness, Code, Instruction, MemorySize, Register, RoundingControl};
use oxdec_x86::Decoder;

fn decode_in(bitness: Bitness, bytes: &[u8]) -> Instruction {
    let mut decoder = Decoder::new(bitness, bytes);
    let instr = decoder.decode().expect("enough bytes");
    assert_eq!(instr.byte_length as usize, bytes.len());
    instr
}

fn decode(bytes: &[u8]) -> Instruction {
    decode_in(Bitness::Bits64, bytes)
}

#[test]
fn masked_op_with_compressed_disp8() {
    let instr = decode(&[0x62, 0xF2, 0xCD, 0x0B, 0x28, 0x50, 0x01]);
    assert_eq!(instr.code, Code::EVEX_Vpmuldq_xmm_k1z_xmm_xmmm128b64);
    assert_eq!(instr.op_register(0), Register::XMM2);
    assert_eq!(instr.op_register(1), Register::XMM6);
    assert_eq!(instr.op_mask, Register::K3);
    assert!(!instr.zeroing_masking);
    assert!(!instr.is_broadcast);
    assert_eq!(instr.memory_base, Register::RAX);
    // disp8 * 16 for a full 128-bit tuple.
    assert_eq!(instr.memory_displacement, 16);
    assert_eq!(instr.memory_displ_size, 1);
    assert_eq!(instr.memory_size, MemorySize::Packed128_Int32);
}

#[test]
fn evex_in_16_bit_mode_uses_16_bit_addressing() {
    // 62 is an EVEX prefix here because the following byte has mod == 3;
    // the compressed disp8 then applies to a 16-bit address form.
    let instr = decode_in(Bitness::Bits16, &[0x62, 0xF2, 0xCD, 0x0B, 0x28, 0x50, 0x01]);
    assert_eq!(instr.code, Code::EVEX_Vpmuldq_xmm_k1z_xmm_xmmm128b64);
    assert_eq!(instr.op_register(0), Register::XMM2);
    assert_eq!(instr.op_register(1), Register::XMM6);
    assert_eq!(instr.op_mask, Register::K3);
    assert_eq!(instr.memory_base, Register::BX);
    assert_eq!(instr.memory_index, Register::SI);
    assert_eq!(instr.memory_segment(), Register::DS);
    assert_eq!(instr.memory_displacement, 16);
    assert_eq!(instr.memory_displ_size, 1);
}

#[test]
fn broadcast_changes_disp8_scale_and_memory_size() {
    let instr = decode(&[0x62, 0xF2, 0xCD, 0x9D, 0x28, 0x50, 0x01]);
    assert_eq!(instr.code, Code::EVEX_Vpmuldq_xmm_k1z_xmm_xmmm128b64);
    assert_eq!(instr.op_mask, Register::K5);
    assert!(instr.zeroing_masking);
    assert!(instr.is_broadcast);
    assert_eq!(instr.memory_size, MemorySize::Broadcast128_2xInt32);
    // broadcast element is 8 bytes with W=1.
    assert_eq!(instr.memory_displacement, 8);
}

#[test]
fn embedded_rounding_forces_512_bit_form() {
    let instr = decode(&[0x62, 0xF2, 0x4D, 0xDB, 0x2C, 0xD3]);
    assert_eq!(instr.code, Code::EVEX_Vscalefps_zmm_k1z_zmm_zmmm512b32_er);
    assert_eq!(instr.op_register(0), Register::ZMM2);
    assert_eq!(instr.op_register(1), Register::ZMM6);
    assert_eq!(instr.op_register(2), Register::ZMM3);
    assert_eq!(instr.op_mask, Register::K3);
    assert!(instr.zeroing_masking);
    assert_eq!(instr.rounding_control, RoundingControl::RoundUp);

    let instr = decode(&[0x62, 0xF2, 0x4D, 0x1B, 0x2C, 0xD3]);
    assert_eq!(instr.rounding_control, RoundingControl::RoundToNearest);
}

#[test]
fn register_form_without_b_keeps_declared_length() {
    let instr = decode(&[0x62, 0xF2, 0x4D, 0x8B, 0x2C, 0xD3]);
    assert_eq!(instr.code, Code::EVEX_Vscalefps_xmm_k1z_xmm_xmmm128b32);
    assert_eq!(instr.op_register(0), Register::XMM2);
    assert_eq!(instr.rounding_control, RoundingControl::None);
}

#[test]
fn sae_without_rounding_control() {
    let instr = decode(&[0x62, 0xF3, 0x7D, 0x18, 0x08, 0xD3, 0x20]);
    assert_eq!(instr.code, Code::EVEX_Vrndscaleps_zmm_k1z_zmmm512b32_imm8_sae);
    assert!(instr.suppress_all_exceptions);
    assert_eq!(instr.rounding_control, RoundingControl::None);
    assert_eq!(instr.op_register(0), Register::ZMM2);
    assert_eq!(instr.op_register(1), Register::ZMM3);
    assert_eq!(instr.immediate, 0x20);
}

#[test]
fn zeroing_without_mask_is_invalid() {
    let instr = decode(&[0x62, 0xF1, 0x4C, 0x88, 0x58, 0xD3]);
    assert!(instr.is_invalid());
    assert_eq!(instr.byte_length, 6);
}

#[test]
fn rex_before_evex_is_invalid() {
    let instr = decode(&[0x48, 0x62, 0xF1, 0x4C, 0x08, 0x58, 0xD3]);
    assert!(instr.is_invalid());
    assert_eq!(instr.byte_length, 7);
}

#[test]
fn broadcast_bit_rejected_where_unsupported() {
    // VMOVUPS does not allow broadcast on its memory form.
    let instr = decode(&[0x62, 0xF1, 0x7C, 0x18, 0x10, 0x00]);
    assert!(instr.is_invalid());
    assert_eq!(instr.byte_length, 6);
}

#[test]
fn full_mem_tuple_scales_disp8_by_vector_width() {
    let instr = decode(&[0x62, 0xF1, 0x7C, 0x48, 0x10, 0x40, 0x01]);
    assert_eq!(instr.code, Code::EVEX_Vmovups_zmm_k1z_zmmm512);
    assert_eq!(instr.op_register(0), Register::ZMM0);
    assert_eq!(instr.memory_displacement, 64);
}

#[test]
fn nonzero_vvvv_rejected_for_two_operand_forms() {
    let instr = decode(&[0x62, 0xF1, 0x74, 0x48, 0x10, 0x40, 0x01]);
    assert!(instr.is_invalid());
    assert_eq!(instr.byte_length, 7);
}
