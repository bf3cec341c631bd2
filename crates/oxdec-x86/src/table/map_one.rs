//! The one-byte opcode map.

use oxdec_core::Code::*;
use oxdec_core::MemorySize;

use super::entry_flags::{D64, F64, MEM_ONLY, NOT64, ONLY64};
use super::OpSpec::{self, *};
use super::Row;

const NO_OPS: &[OpSpec] = &[];
const EB_GB: &[OpSpec] = &[Eb, Gb];
const EV_GV: &[OpSpec] = &[Ev, Gv];
const GB_EB: &[OpSpec] = &[Gb, Eb];
const GV_EV: &[OpSpec] = &[Gv, Ev];
const AL_IB: &[OpSpec] = &[AccB, Ib];
const AV_IZ: &[OpSpec] = &[AccV, Iz];
const EB_IB: &[OpSpec] = &[Eb, Ib];
const EV_IZ: &[OpSpec] = &[Ev, Iz];
const EV_IBS: &[OpSpec] = &[Ev, IbS];

const MEM_B: MemorySize = MemorySize::UInt8;
const MEM_V: [MemorySize; 3] = [MemorySize::UInt16, MemorySize::UInt32, MemorySize::UInt64];

pub(crate) static ROWS: &[Row] = &[
    // ADD
    Row::one(0x00, Add_rm8_r8, EB_GB).mem(MEM_B),
    Row::sized(0x01, [Add_rm16_r16, Add_rm32_r32, Add_rm64_r64], EV_GV).mem_sized(MEM_V),
    Row::one(0x02, Add_r8_rm8, GB_EB).mem(MEM_B),
    Row::sized(0x03, [Add_r16_rm16, Add_r32_rm32, Add_r64_rm64], GV_EV).mem_sized(MEM_V),
    Row::one(0x04, Add_AL_imm8, AL_IB),
    Row::sized(0x05, [Add_AX_imm16, Add_EAX_imm32, Add_RAX_imm32], AV_IZ),
    Row::sized(0x06, [Pushw_ES, Pushd_ES, Pushd_ES], &[Seg(oxdec_core::Register::ES)])
        .flag(NOT64),
    Row::sized(0x07, [Popw_ES, Popd_ES, Popd_ES], &[Seg(oxdec_core::Register::ES)]).flag(NOT64),
    // OR
    Row::one(0x08, Or_rm8_r8, EB_GB).mem(MEM_B),
    Row::sized(0x09, [Or_rm16_r16, Or_rm32_r32, Or_rm64_r64], EV_GV).mem_sized(MEM_V),
    Row::one(0x0A, Or_r8_rm8, GB_EB).mem(MEM_B),
    Row::sized(0x0B, [Or_r16_rm16, Or_r32_rm32, Or_r64_rm64], GV_EV).mem_sized(MEM_V),
    Row::one(0x0C, Or_AL_imm8, AL_IB),
    Row::sized(0x0D, [Or_AX_imm16, Or_EAX_imm32, Or_RAX_imm32], AV_IZ),
    Row::sized(0x0E, [Pushw_CS, Pushd_CS, Pushd_CS], &[Seg(oxdec_core::Register::CS)])
        .flag(NOT64),
    // ADC
    Row::one(0x10, Adc_rm8_r8, EB_GB).mem(MEM_B),
    Row::sized(0x11, [Adc_rm16_r16, Adc_rm32_r32, Adc_rm64_r64], EV_GV).mem_sized(MEM_V),
    Row::one(0x12, Adc_r8_rm8, GB_EB).mem(MEM_B),
    Row::sized(0x13, [Adc_r16_rm16, Adc_r32_rm32, Adc_r64_rm64], GV_EV).mem_sized(MEM_V),
    Row::one(0x14, Adc_AL_imm8, AL_IB),
    Row::sized(0x15, [Adc_AX_imm16, Adc_EAX_imm32, Adc_RAX_imm32], AV_IZ),
    Row::sized(0x16, [Pushw_SS, Pushd_SS, Pushd_SS], &[Seg(oxdec_core::Register::SS)])
        .flag(NOT64),
    Row::sized(0x17, [Popw_SS, Popd_SS, Popd_SS], &[Seg(oxdec_core::Register::SS)]).flag(NOT64),
    // SBB
    Row::one(0x18, Sbb_rm8_r8, EB_GB).mem(MEM_B),
    Row::sized(0x19, [Sbb_rm16_r16, Sbb_rm32_r32, Sbb_rm64_r64], EV_GV).mem_sized(MEM_V),
    Row::one(0x1A, Sbb_r8_rm8, GB_EB).mem(MEM_B),
    Row::sized(0x1B, [Sbb_r16_rm16, Sbb_r32_rm32, Sbb_r64_rm64], GV_EV).mem_sized(MEM_V),
    Row::one(0x1C, Sbb_AL_imm8, AL_IB),
    Row::sized(0x1D, [Sbb_AX_imm16, Sbb_EAX_imm32, Sbb_RAX_imm32], AV_IZ),
    Row::sized(0x1E, [Pushw_DS, Pushd_DS, Pushd_DS], &[Seg(oxdec_core::Register::DS)])
        .flag(NOT64),
    Row::sized(0x1F, [Popw_DS, Popd_DS, Popd_DS], &[Seg(oxdec_core::Register::DS)]).flag(NOT64),
    // AND
    Row::one(0x20, And_rm8_r8, EB_GB).mem(MEM_B),
    Row::sized(0x21, [And_rm16_r16, And_rm32_r32, And_rm64_r64], EV_GV).mem_sized(MEM_V),
    Row::one(0x22, And_r8_rm8, GB_EB).mem(MEM_B),
    Row::sized(0x23, [And_r16_rm16, And_r32_rm32, And_r64_rm64], GV_EV).mem_sized(MEM_V),
    Row::one(0x24, And_AL_imm8, AL_IB),
    Row::sized(0x25, [And_AX_imm16, And_EAX_imm32, And_RAX_imm32], AV_IZ),
    Row::one(0x27, Daa, NO_OPS).flag(NOT64),
    // SUB
    Row::one(0x28, Sub_rm8_r8, EB_GB).mem(MEM_B),
    Row::sized(0x29, [Sub_rm16_r16, Sub_rm32_r32, Sub_rm64_r64], EV_GV).mem_sized(MEM_V),
    Row::one(0x2A, Sub_r8_rm8, GB_EB).mem(MEM_B),
    Row::sized(0x2B, [Sub_r16_rm16, Sub_r32_rm32, Sub_r64_rm64], GV_EV).mem_sized(MEM_V),
    Row::one(0x2C, Sub_AL_imm8, AL_IB),
    Row::sized(0x2D, [Sub_AX_imm16, Sub_EAX_imm32, Sub_RAX_imm32], AV_IZ),
    Row::one(0x2F, Das, NO_OPS).flag(NOT64),
    // XOR
    Row::one(0x30, Xor_rm8_r8, EB_GB).mem(MEM_B),
    Row::sized(0x31, [Xor_rm16_r16, Xor_rm32_r32, Xor_rm64_r64], EV_GV).mem_sized(MEM_V),
    Row::one(0x32, Xor_r8_rm8, GB_EB).mem(MEM_B),
    Row::sized(0x33, [Xor_r16_rm16, Xor_r32_rm32, Xor_r64_rm64], GV_EV).mem_sized(MEM_V),
    Row::one(0x34, Xor_AL_imm8, AL_IB),
    Row::sized(0x35, [Xor_AX_imm16, Xor_EAX_imm32, Xor_RAX_imm32], AV_IZ),
    Row::one(0x37, Aaa, NO_OPS).flag(NOT64),
    // CMP
    Row::one(0x38, Cmp_rm8_r8, EB_GB).mem(MEM_B),
    Row::sized(0x39, [Cmp_rm16_r16, Cmp_rm32_r32, Cmp_rm64_r64], EV_GV).mem_sized(MEM_V),
    Row::one(0x3A, Cmp_r8_rm8, GB_EB).mem(MEM_B),
    Row::sized(0x3B, [Cmp_r16_rm16, Cmp_r32_rm32, Cmp_r64_rm64], GV_EV).mem_sized(MEM_V),
    Row::one(0x3C, Cmp_AL_imm8, AL_IB),
    Row::sized(0x3D, [Cmp_AX_imm16, Cmp_EAX_imm32, Cmp_RAX_imm32], AV_IZ),
    Row::one(0x3F, Aas, NO_OPS).flag(NOT64),
    // INC/DEC r: REX prefixes in 64-bit mode.
    Row::sized(0x40, [Inc_r16, Inc_r32, Inc_r32], &[OpRegV]).flag(NOT64),
    Row::sized(0x41, [Inc_r16, Inc_r32, Inc_r32], &[OpRegV]).flag(NOT64),
    Row::sized(0x42, [Inc_r16, Inc_r32, Inc_r32], &[OpRegV]).flag(NOT64),
    Row::sized(0x43, [Inc_r16, Inc_r32, Inc_r32], &[OpRegV]).flag(NOT64),
    Row::sized(0x44, [Inc_r16, Inc_r32, Inc_r32], &[OpRegV]).flag(NOT64),
    Row::sized(0x45, [Inc_r16, Inc_r32, Inc_r32], &[OpRegV]).flag(NOT64),
    Row::sized(0x46, [Inc_r16, Inc_r32, Inc_r32], &[OpRegV]).flag(NOT64),
    Row::sized(0x47, [Inc_r16, Inc_r32, Inc_r32], &[OpRegV]).flag(NOT64),
    Row::sized(0x48, [Dec_r16, Dec_r32, Dec_r32], &[OpRegV]).flag(NOT64),
    Row::sized(0x49, [Dec_r16, Dec_r32, Dec_r32], &[OpRegV]).flag(NOT64),
    Row::sized(0x4A, [Dec_r16, Dec_r32, Dec_r32], &[OpRegV]).flag(NOT64),
    Row::sized(0x4B, [Dec_r16, Dec_r32, Dec_r32], &[OpRegV]).flag(NOT64),
    Row::sized(0x4C, [Dec_r16, Dec_r32, Dec_r32], &[OpRegV]).flag(NOT64),
    Row::sized(0x4D, [Dec_r16, Dec_r32, Dec_r32], &[OpRegV]).flag(NOT64),
    Row::sized(0x4E, [Dec_r16, Dec_r32, Dec_r32], &[OpRegV]).flag(NOT64),
    Row::sized(0x4F, [Dec_r16, Dec_r32, Dec_r32], &[OpRegV]).flag(NOT64),
    // PUSH/POP r
    Row::sized(0x50, [Push_r16, Push_r32, Push_r64], &[OpRegV]).flag(D64),
    Row::sized(0x51, [Push_r16, Push_r32, Push_r64], &[OpRegV]).flag(D64),
    Row::sized(0x52, [Push_r16, Push_r32, Push_r64], &[OpRegV]).flag(D64),
    Row::sized(0x53, [Push_r16, Push_r32, Push_r64], &[OpRegV]).flag(D64),
    Row::sized(0x54, [Push_r16, Push_r32, Push_r64], &[OpRegV]).flag(D64),
    Row::sized(0x55, [Push_r16, Push_r32, Push_r64], &[OpRegV]).flag(D64),
    Row::sized(0x56, [Push_r16, Push_r32, Push_r64], &[OpRegV]).flag(D64),
    Row::sized(0x57, [Push_r16, Push_r32, Push_r64], &[OpRegV]).flag(D64),
    Row::sized(0x58, [Pop_r16, Pop_r32, Pop_r64], &[OpRegV]).flag(D64),
    Row::sized(0x59, [Pop_r16, Pop_r32, Pop_r64], &[OpRegV]).flag(D64),
    Row::sized(0x5A, [Pop_r16, Pop_r32, Pop_r64], &[OpRegV]).flag(D64),
    Row::sized(0x5B, [Pop_r16, Pop_r32, Pop_r64], &[OpRegV]).flag(D64),
    Row::sized(0x5C, [Pop_r16, Pop_r32, Pop_r64], &[OpRegV]).flag(D64),
    Row::sized(0x5D, [Pop_r16, Pop_r32, Pop_r64], &[OpRegV]).flag(D64),
    Row::sized(0x5E, [Pop_r16, Pop_r32, Pop_r64], &[OpRegV]).flag(D64),
    Row::sized(0x5F, [Pop_r16, Pop_r32, Pop_r64], &[OpRegV]).flag(D64),
    Row::sized(0x60, [Pushaw, Pushad, Pushad], NO_OPS).flag(NOT64),
    Row::sized(0x61, [Popaw, Popad, Popad], NO_OPS).flag(NOT64),
    Row::sized(0x62, [Bound_r16_m1616, Bound_r32_m3232, Bound_r32_m3232], GV_EV)
        .mem_sized([
            MemorySize::Bound16_WordWord,
            MemorySize::Bound32_DwordDword,
            MemorySize::Bound32_DwordDword,
        ])
        .flag(NOT64 | MEM_ONLY),
    Row::one(0x63, Arpl_rm16_r16, &[Ew, Gw]).mem(MemorySize::UInt16).flag(NOT64),
    Row::sized(0x63, [Movsxd_r16_rm16, Movsxd_r32_rm32, Movsxd_r64_rm32], &[Gv, Ed])
        .mem_sized([MemorySize::UInt16, MemorySize::UInt32, MemorySize::Int32])
        .flag(ONLY64),
    Row::sized(0x68, [Push_imm16, Pushd_imm32, Pushq_imm32], &[Iz]).flag(D64),
    Row::sized(0x69, [Imul_r16_rm16_imm16, Imul_r32_rm32_imm32, Imul_r64_rm64_imm32], &[Gv, Ev, Iz])
        .mem_sized(MEM_V),
    Row::sized(0x6A, [Pushw_imm8, Pushd_imm8, Pushq_imm8], &[IbS]).flag(D64),
    Row::sized(0x6B, [Imul_r16_rm16_imm8, Imul_r32_rm32_imm8, Imul_r64_rm64_imm8], &[Gv, Ev, IbS])
        .mem_sized(MEM_V),
    Row::one(0x6C, Insb_m8_DX, &[DstDI, Dx]).mem(MEM_B),
    Row::sized(0x6D, [Insw_m16_DX, Insd_m32_DX, Insd_m32_DX], &[DstDI, Dx]).mem_sized(MEM_V),
    Row::one(0x6E, Outsb_DX_m8, &[Dx, SrcSI]).mem(MEM_B),
    Row::sized(0x6F, [Outsw_DX_m16, Outsd_DX_m32, Outsd_DX_m32], &[Dx, SrcSI]).mem_sized(MEM_V),
    // Jcc rel8
    Row::sized(0x70, [Jo_rel8_16, Jo_rel8_32, Jo_rel8_64], &[Jb]).flag(F64),
    Row::sized(0x71, [Jno_rel8_16, Jno_rel8_32, Jno_rel8_64], &[Jb]).flag(F64),
    Row::sized(0x72, [Jb_rel8_16, Jb_rel8_32, Jb_rel8_64], &[Jb]).flag(F64),
    Row::sized(0x73, [Jae_rel8_16, Jae_rel8_32, Jae_rel8_64], &[Jb]).flag(F64),
    Row::sized(0x74, [Je_rel8_16, Je_rel8_32, Je_rel8_64], &[Jb]).flag(F64),
    Row::sized(0x75, [Jne_rel8_16, Jne_rel8_32, Jne_rel8_64], &[Jb]).flag(F64),
    Row::sized(0x76, [Jbe_rel8_16, Jbe_rel8_32, Jbe_rel8_64], &[Jb]).flag(F64),
    Row::sized(0x77, [Ja_rel8_16, Ja_rel8_32, Ja_rel8_64], &[Jb]).flag(F64),
    Row::sized(0x78, [Js_rel8_16, Js_rel8_32, Js_rel8_64], &[Jb]).flag(F64),
    Row::sized(0x79, [Jns_rel8_16, Jns_rel8_32, Jns_rel8_64], &[Jb]).flag(F64),
    Row::sized(0x7A, [Jp_rel8_16, Jp_rel8_32, Jp_rel8_64], &[Jb]).flag(F64),
    Row::sized(0x7B, [Jnp_rel8_16, Jnp_rel8_32, Jnp_rel8_64], &[Jb]).flag(F64),
    Row::sized(0x7C, [Jl_rel8_16, Jl_rel8_32, Jl_rel8_64], &[Jb]).flag(F64),
    Row::sized(0x7D, [Jge_rel8_16, Jge_rel8_32, Jge_rel8_64], &[Jb]).flag(F64),
    Row::sized(0x7E, [Jle_rel8_16, Jle_rel8_32, Jle_rel8_64], &[Jb]).flag(F64),
    Row::sized(0x7F, [Jg_rel8_16, Jg_rel8_32, Jg_rel8_64], &[Jb]).flag(F64),
    // Group 1
    Row::one(0x80, Add_rm8_imm8, EB_IB).reg(0).mem(MEM_B),
    Row::one(0x80, Or_rm8_imm8, EB_IB).reg(1).mem(MEM_B),
    Row::one(0x80, Adc_rm8_imm8, EB_IB).reg(2).mem(MEM_B),
    Row::one(0x80, Sbb_rm8_imm8, EB_IB).reg(3).mem(MEM_B),
    Row::one(0x80, And_rm8_imm8, EB_IB).reg(4).mem(MEM_B),
    Row::one(0x80, Sub_rm8_imm8, EB_IB).reg(5).mem(MEM_B),
    Row::one(0x80, Xor_rm8_imm8, EB_IB).reg(6).mem(MEM_B),
    Row::one(0x80, Cmp_rm8_imm8, EB_IB).reg(7).mem(MEM_B),
    Row::sized(0x81, [Add_rm16_imm16, Add_rm32_imm32, Add_rm64_imm32], EV_IZ)
        .reg(0)
        .mem_sized(MEM_V),
    Row::sized(0x81, [Or_rm16_imm16, Or_rm32_imm32, Or_rm64_imm32], EV_IZ)
        .reg(1)
        .mem_sized(MEM_V),
    Row::sized(0x81, [Adc_rm16_imm16, Adc_rm32_imm32, Adc_rm64_imm32], EV_IZ)
        .reg(2)
        .mem_sized(MEM_V),
    Row::sized(0x81, [Sbb_rm16_imm16, Sbb_rm32_imm32, Sbb_rm64_imm32], EV_IZ)
        .reg(3)
        .mem_sized(MEM_V),
    Row::sized(0x81, [And_rm16_imm16, And_rm32_imm32, And_rm64_imm32], EV_IZ)
        .reg(4)
        .mem_sized(MEM_V),
    Row::sized(0x81, [Sub_rm16_imm16, Sub_rm32_imm32, Sub_rm64_imm32], EV_IZ)
        .reg(5)
        .mem_sized(MEM_V),
    Row::sized(0x81, [Xor_rm16_imm16, Xor_rm32_imm32, Xor_rm64_imm32], EV_IZ)
        .reg(6)
        .mem_sized(MEM_V),
    Row::sized(0x81, [Cmp_rm16_imm16, Cmp_rm32_imm32, Cmp_rm64_imm32], EV_IZ)
        .reg(7)
        .mem_sized(MEM_V),
    // 82 aliases group 1 outside 64-bit mode.
    Row::one(0x82, Add_rm8_imm8, EB_IB).reg(0).mem(MEM_B).flag(NOT64),
    Row::one(0x82, Or_rm8_imm8, EB_IB).reg(1).mem(MEM_B).flag(NOT64),
    Row::one(0x82, Adc_rm8_imm8, EB_IB).reg(2).mem(MEM_B).flag(NOT64),
    Row::one(0x82, Sbb_rm8_imm8, EB_IB).reg(3).mem(MEM_B).flag(NOT64),
    Row::one(0x82, And_rm8_imm8, EB_IB).reg(4).mem(MEM_B).flag(NOT64),
    Row::one(0x82, Sub_rm8_imm8, EB_IB).reg(5).mem(MEM_B).flag(NOT64),
    Row::one(0x82, Xor_rm8_imm8, EB_IB).reg(6).mem(MEM_B).flag(NOT64),
    Row::one(0x82, Cmp_rm8_imm8, EB_IB).reg(7).mem(MEM_B).flag(NOT64),
    Row::sized(0x83, [Add_rm16_imm8, Add_rm32_imm8, Add_rm64_imm8], EV_IBS)
        .reg(0)
        .mem_sized(MEM_V),
    Row::sized(0x83, [Or_rm16_imm8, Or_rm32_imm8, Or_rm64_imm8], EV_IBS)
        .reg(1)
        .mem_sized(MEM_V),
    Row::sized(0x83, [Adc_rm16_imm8, Adc_rm32_imm8, Adc_rm64_imm8], EV_IBS)
        .reg(2)
        .mem_sized(MEM_V),
    Row::sized(0x83, [Sbb_rm16_imm8, Sbb_rm32_imm8, Sbb_rm64_imm8], EV_IBS)
        .reg(3)
        .mem_sized(MEM_V),
    Row::sized(0x83, [And_rm16_imm8, And_rm32_imm8, And_rm64_imm8], EV_IBS)
        .reg(4)
        .mem_sized(MEM_V),
    Row::sized(0x83, [Sub_rm16_imm8, Sub_rm32_imm8, Sub_rm64_imm8], EV_IBS)
        .reg(5)
        .mem_sized(MEM_V),
    Row::sized(0x83, [Xor_rm16_imm8, Xor_rm32_imm8, Xor_rm64_imm8], EV_IBS)
        .reg(6)
        .mem_sized(MEM_V),
    Row::sized(0x83, [Cmp_rm16_imm8, Cmp_rm32_imm8, Cmp_rm64_imm8], EV_IBS)
        .reg(7)
        .mem_sized(MEM_V),
    Row::one(0x84, Test_rm8_r8, EB_GB).mem(MEM_B),
    Row::sized(0x85, [Test_rm16_r16, Test_rm32_r32, Test_rm64_r64], EV_GV).mem_sized(MEM_V),
    Row::one(0x86, Xchg_rm8_r8, EB_GB).mem(MEM_B),
    Row::sized(0x87, [Xchg_rm16_r16, Xchg_rm32_r32, Xchg_rm64_r64], EV_GV).mem_sized(MEM_V),
    // MOV
    Row::one(0x88, Mov_rm8_r8, EB_GB).mem(MEM_B),
    Row::sized(0x89, [Mov_rm16_r16, Mov_rm32_r32, Mov_rm64_r64], EV_GV).mem_sized(MEM_V),
    Row::one(0x8A, Mov_r8_rm8, GB_EB).mem(MEM_B),
    Row::sized(0x8B, [Mov_r16_rm16, Mov_r32_rm32, Mov_r64_rm64], GV_EV).mem_sized(MEM_V),
    Row::sized(0x8C, [Mov_rm16_Sreg, Mov_rm32_Sreg, Mov_rm64_Sreg], &[Ev, Sw])
        .mem(MemorySize::UInt16),
    Row::sized(0x8D, [Lea_r16_m, Lea_r32_m, Lea_r64_m], &[Gv, M]).flag(MEM_ONLY),
    Row::sized(0x8E, [Mov_Sreg_rm16, Mov_Sreg_rm32, Mov_Sreg_rm64], &[Sw, Ev])
        .mem(MemorySize::UInt16),
    Row::sized(0x8F, [Pop_rm16, Pop_rm32, Pop_rm64], &[Ev])
        .reg(0)
        .mem_sized(MEM_V)
        .flag(D64),
    // 90 is NOP (or PAUSE under F3); XCHG r8,rAX when REX.B picks R8.
    Row::sized(0x90, [Nopw, Nopd, Nopq], NO_OPS),
    Row::one(0x90, Pause, NO_OPS).pp_f3(),
    Row::sized(0x91, [Xchg_r16_AX, Xchg_r32_EAX, Xchg_r64_RAX], &[OpRegV, AccV]),
    Row::sized(0x92, [Xchg_r16_AX, Xchg_r32_EAX, Xchg_r64_RAX], &[OpRegV, AccV]),
    Row::sized(0x93, [Xchg_r16_AX, Xchg_r32_EAX, Xchg_r64_RAX], &[OpRegV, AccV]),
    Row::sized(0x94, [Xchg_r16_AX, Xchg_r32_EAX, Xchg_r64_RAX], &[OpRegV, AccV]),
    Row::sized(0x95, [Xchg_r16_AX, Xchg_r32_EAX, Xchg_r64_RAX], &[OpRegV, AccV]),
    Row::sized(0x96, [Xchg_r16_AX, Xchg_r32_EAX, Xchg_r64_RAX], &[OpRegV, AccV]),
    Row::sized(0x97, [Xchg_r16_AX, Xchg_r32_EAX, Xchg_r64_RAX], &[OpRegV, AccV]),
    Row::sized(0x98, [Cbw, Cwde, Cdqe], NO_OPS),
    Row::sized(0x99, [Cwd, Cdq, Cqo], NO_OPS),
    Row::one(0x9B, Wait, NO_OPS),
    Row::sized(0x9C, [Pushfw, Pushfd, Pushfq], NO_OPS).flag(D64),
    Row::sized(0x9D, [Popfw, Popfd, Popfq], NO_OPS).flag(D64),
    Row::one(0x9E, Sahf, NO_OPS),
    Row::one(0x9F, Lahf, NO_OPS),
    // MOV moffs
    Row::one(0xA0, Mov_AL_moffs8, &[AccB, MOffs]).mem(MEM_B),
    Row::sized(0xA1, [Mov_AX_moffs16, Mov_EAX_moffs32, Mov_RAX_moffs64], &[AccV, MOffs])
        .mem_sized(MEM_V),
    Row::one(0xA2, Mov_moffs8_AL, &[MOffs, AccB]).mem(MEM_B),
    Row::sized(0xA3, [Mov_moffs16_AX, Mov_moffs32_EAX, Mov_moffs64_RAX], &[MOffs, AccV])
        .mem_sized(MEM_V),
    // String ops
    Row::one(0xA4, Movsb_m8_m8, &[DstDI, SrcSI]).mem(MEM_B),
    Row::sized(0xA5, [Movsw_m16_m16, Movsd_m32_m32, Movsq_m64_m64], &[DstDI, SrcSI])
        .mem_sized(MEM_V),
    Row::one(0xA6, Cmpsb_m8_m8, &[SrcSI, DstDI]).mem(MEM_B),
    Row::sized(0xA7, [Cmpsw_m16_m16, Cmpsd_m32_m32, Cmpsq_m64_m64], &[SrcSI, DstDI])
        .mem_sized(MEM_V),
    Row::one(0xA8, Test_AL_imm8, AL_IB),
    Row::sized(0xA9, [Test_AX_imm16, Test_EAX_imm32, Test_RAX_imm32], AV_IZ),
    Row::one(0xAA, Stosb_m8_AL, &[DstDI, AccB]).mem(MEM_B),
    Row::sized(0xAB, [Stosw_m16_AX, Stosd_m32_EAX, Stosq_m64_RAX], &[DstDI, AccV])
        .mem_sized(MEM_V),
    Row::one(0xAC, Lodsb_AL_m8, &[AccB, SrcSI]).mem(MEM_B),
    Row::sized(0xAD, [Lodsw_AX_m16, Lodsd_EAX_m32, Lodsq_RAX_m64], &[AccV, SrcSI])
        .mem_sized(MEM_V),
    Row::one(0xAE, Scasb_AL_m8, &[AccB, DstDI]).mem(MEM_B),
    Row::sized(0xAF, [Scasw_AX_m16, Scasd_EAX_m32, Scasq_RAX_m64], &[AccV, DstDI])
        .mem_sized(MEM_V),
    // MOV r, imm
    Row::one(0xB0, Mov_r8_imm8, &[OpRegB, Ib]),
    Row::one(0xB1, Mov_r8_imm8, &[OpRegB, Ib]),
    Row::one(0xB2, Mov_r8_imm8, &[OpRegB, Ib]),
    Row::one(0xB3, Mov_r8_imm8, &[OpRegB, Ib]),
    Row::one(0xB4, Mov_r8_imm8, &[OpRegB, Ib]),
    Row::one(0xB5, Mov_r8_imm8, &[OpRegB, Ib]),
    Row::one(0xB6, Mov_r8_imm8, &[OpRegB, Ib]),
    Row::one(0xB7, Mov_r8_imm8, &[OpRegB, Ib]),
    Row::sized(0xB8, [Mov_r16_imm16, Mov_r32_imm32, Mov_r64_imm64], &[OpRegV, Iv]),
    Row::sized(0xB9, [Mov_r16_imm16, Mov_r32_imm32, Mov_r64_imm64], &[OpRegV, Iv]),
    Row::sized(0xBA, [Mov_r16_imm16, Mov_r32_imm32, Mov_r64_imm64], &[OpRegV, Iv]),
    Row::sized(0xBB, [Mov_r16_imm16, Mov_r32_imm32, Mov_r64_imm64], &[OpRegV, Iv]),
    Row::sized(0xBC, [Mov_r16_imm16, Mov_r32_imm32, Mov_r64_imm64], &[OpRegV, Iv]),
    Row::sized(0xBD, [Mov_r16_imm16, Mov_r32_imm32, Mov_r64_imm64], &[OpRegV, Iv]),
    Row::sized(0xBE, [Mov_r16_imm16, Mov_r32_imm32, Mov_r64_imm64], &[OpRegV, Iv]),
    Row::sized(0xBF, [Mov_r16_imm16, Mov_r32_imm32, Mov_r64_imm64], &[OpRegV, Iv]),
    // Group 2, imm8 count
    Row::one(0xC0, Rol_rm8_imm8, EB_IB).reg(0).mem(MEM_B),
    Row::one(0xC0, Ror_rm8_imm8, EB_IB).reg(1).mem(MEM_B),
    Row::one(0xC0, Rcl_rm8_imm8, EB_IB).reg(2).mem(MEM_B),
    Row::one(0xC0, Rcr_rm8_imm8, EB_IB).reg(3).mem(MEM_B),
    Row::one(0xC0, Shl_rm8_imm8, EB_IB).reg(4).mem(MEM_B),
    Row::one(0xC0, Shr_rm8_imm8, EB_IB).reg(5).mem(MEM_B),
    Row::one(0xC0, Shl_rm8_imm8, EB_IB).reg(6).mem(MEM_B),
    Row::one(0xC0, Sar_rm8_imm8, EB_IB).reg(7).mem(MEM_B),
    Row::sized(0xC1, [Rol_rm16_imm8, Rol_rm32_imm8, Rol_rm64_imm8], &[Ev, Ib])
        .reg(0)
        .mem_sized(MEM_V),
    Row::sized(0xC1, [Ror_rm16_imm8, Ror_rm32_imm8, Ror_rm64_imm8], &[Ev, Ib])
        .reg(1)
        .mem_sized(MEM_V),
    Row::sized(0xC1, [Rcl_rm16_imm8, Rcl_rm32_imm8, Rcl_rm64_imm8], &[Ev, Ib])
        .reg(2)
        .mem_sized(MEM_V),
    Row::sized(0xC1, [Rcr_rm16_imm8, Rcr_rm32_imm8, Rcr_rm64_imm8], &[Ev, Ib])
        .reg(3)
        .mem_sized(MEM_V),
    Row::sized(0xC1, [Shl_rm16_imm8, Shl_rm32_imm8, Shl_rm64_imm8], &[Ev, Ib])
        .reg(4)
        .mem_sized(MEM_V),
    Row::sized(0xC1, [Shr_rm16_imm8, Shr_rm32_imm8, Shr_rm64_imm8], &[Ev, Ib])
        .reg(5)
        .mem_sized(MEM_V),
    Row::sized(0xC1, [Shl_rm16_imm8, Shl_rm32_imm8, Shl_rm64_imm8], &[Ev, Ib])
        .reg(6)
        .mem_sized(MEM_V),
    Row::sized(0xC1, [Sar_rm16_imm8, Sar_rm32_imm8, Sar_rm64_imm8], &[Ev, Ib])
        .reg(7)
        .mem_sized(MEM_V),
    Row::sized(0xC2, [Retnw_imm16, Retnd_imm16, Retnq_imm16], &[Iw]).flag(D64),
    Row::sized(0xC3, [Retnw, Retnd, Retnq], NO_OPS).flag(D64),
    // C4/C5 are LES/LDS only when ModRM.mod != 3; the decoder has already
    // routed register forms to the VEX parser.
    Row::sized(0xC4, [Les_r16_m1616, Les_r32_m1632, Les_r32_m1632], &[Gv, M])
        .mem_sized([MemorySize::SegPtr16, MemorySize::SegPtr32, MemorySize::SegPtr32])
        .flag(NOT64 | MEM_ONLY),
    Row::sized(0xC5, [Lds_r16_m1616, Lds_r32_m1632, Lds_r32_m1632], &[Gv, M])
        .mem_sized([MemorySize::SegPtr16, MemorySize::SegPtr32, MemorySize::SegPtr32])
        .flag(NOT64 | MEM_ONLY),
    // Group 11
    Row::one(0xC6, Mov_rm8_imm8, EB_IB).reg(0).mem(MEM_B),
    Row::sized(0xC7, [Mov_rm16_imm16, Mov_rm32_imm32, Mov_rm64_imm32], EV_IZ)
        .reg(0)
        .mem_sized(MEM_V),
    Row::sized(0xC8, [Enterw_imm16_imm8, Enterd_imm16_imm8, Enterq_imm16_imm8], &[Iw, Ib2])
        .flag(D64),
    Row::sized(0xC9, [Leavew, Leaved, Leaveq], NO_OPS).flag(D64),
    Row::one(0xCC, Int3, NO_OPS),
    Row::one(0xCD, Int_imm8, &[Ib]),
    Row::one(0xCE, Into, NO_OPS).flag(NOT64),
    Row::sized(0xCF, [Iretw, Iretd, Iretq], NO_OPS).flag(D64),
    // Group 2, shift by 1 / by CL
    Row::one(0xD0, Rol_rm8_1, &[Eb, One]).reg(0).mem(MEM_B),
    Row::one(0xD0, Ror_rm8_1, &[Eb, One]).reg(1).mem(MEM_B),
    Row::one(0xD0, Rcl_rm8_1, &[Eb, One]).reg(2).mem(MEM_B),
    Row::one(0xD0, Rcr_rm8_1, &[Eb, One]).reg(3).mem(MEM_B),
    Row::one(0xD0, Shl_rm8_1, &[Eb, One]).reg(4).mem(MEM_B),
    Row::one(0xD0, Shr_rm8_1, &[Eb, One]).reg(5).mem(MEM_B),
    Row::one(0xD0, Shl_rm8_1, &[Eb, One]).reg(6).mem(MEM_B),
    Row::one(0xD0, Sar_rm8_1, &[Eb, One]).reg(7).mem(MEM_B),
    Row::sized(0xD1, [Rol_rm16_1, Rol_rm32_1, Rol_rm64_1], &[Ev, One]).reg(0).mem_sized(MEM_V),
    Row::sized(0xD1, [Ror_rm16_1, Ror_rm32_1, Ror_rm64_1], &[Ev, One]).reg(1).mem_sized(MEM_V),
    Row::sized(0xD1, [Rcl_rm16_1, Rcl_rm32_1, Rcl_rm64_1], &[Ev, One]).reg(2).mem_sized(MEM_V),
    Row::sized(0xD1, [Rcr_rm16_1, Rcr_rm32_1, Rcr_rm64_1], &[Ev, One]).reg(3).mem_sized(MEM_V),
    Row::sized(0xD1, [Shl_rm16_1, Shl_rm32_1, Shl_rm64_1], &[Ev, One]).reg(4).mem_sized(MEM_V),
    Row::sized(0xD1, [Shr_rm16_1, Shr_rm32_1, Shr_rm64_1], &[Ev, One]).reg(5).mem_sized(MEM_V),
    Row::sized(0xD1, [Shl_rm16_1, Shl_rm32_1, Shl_rm64_1], &[Ev, One]).reg(6).mem_sized(MEM_V),
    Row::sized(0xD1, [Sar_rm16_1, Sar_rm32_1, Sar_rm64_1], &[Ev, One]).reg(7).mem_sized(MEM_V),
    Row::one(0xD2, Rol_rm8_CL, &[Eb, Cl]).reg(0).mem(MEM_B),
    Row::one(0xD2, Ror_rm8_CL, &[Eb, Cl]).reg(1).mem(MEM_B),
    Row::one(0xD2, Rcl_rm8_CL, &[Eb, Cl]).reg(2).mem(MEM_B),
    Row::one(0xD2, Rcr_rm8_CL, &[Eb, Cl]).reg(3).mem(MEM_B),
    Row::one(0xD2, Shl_rm8_CL, &[Eb, Cl]).reg(4).mem(MEM_B),
    Row::one(0xD2, Shr_rm8_CL, &[Eb, Cl]).reg(5).mem(MEM_B),
    Row::one(0xD2, Shl_rm8_CL, &[Eb, Cl]).reg(6).mem(MEM_B),
    Row::one(0xD2, Sar_rm8_CL, &[Eb, Cl]).reg(7).mem(MEM_B),
    Row::sized(0xD3, [Rol_rm16_CL, Rol_rm32_CL, Rol_rm64_CL], &[Ev, Cl])
        .reg(0)
        .mem_sized(MEM_V),
    Row::sized(0xD3, [Ror_rm16_CL, Ror_rm32_CL, Ror_rm64_CL], &[Ev, Cl])
        .reg(1)
        .mem_sized(MEM_V),
    Row::sized(0xD3, [Rcl_rm16_CL, Rcl_rm32_CL, Rcl_rm64_CL], &[Ev, Cl])
        .reg(2)
        .mem_sized(MEM_V),
    Row::sized(0xD3, [Rcr_rm16_CL, Rcr_rm32_CL, Rcr_rm64_CL], &[Ev, Cl])
        .reg(3)
        .mem_sized(MEM_V),
    Row::sized(0xD3, [Shl_rm16_CL, Shl_rm32_CL, Shl_rm64_CL], &[Ev, Cl])
        .reg(4)
        .mem_sized(MEM_V),
    Row::sized(0xD3, [Shr_rm16_CL, Shr_rm32_CL, Shr_rm64_CL], &[Ev, Cl])
        .reg(5)
        .mem_sized(MEM_V),
    Row::sized(0xD3, [Shl_rm16_CL, Shl_rm32_CL, Shl_rm64_CL], &[Ev, Cl])
        .reg(6)
        .mem_sized(MEM_V),
    Row::sized(0xD3, [Sar_rm16_CL, Sar_rm32_CL, Sar_rm64_CL], &[Ev, Cl])
        .reg(7)
        .mem_sized(MEM_V),
    Row::one(0xD4, Aam_imm8, &[Ib]).flag(NOT64),
    Row::one(0xD5, Aad_imm8, &[Ib]).flag(NOT64),
    // LOOP family; the counter register follows the address size, which the
    // identity does not track.
    Row::one(0xE0, Loopne_rel8, &[Jb]).flag(F64),
    Row::one(0xE1, Loope_rel8, &[Jb]).flag(F64),
    Row::one(0xE2, Loop_rel8, &[Jb]).flag(F64),
    Row::one(0xE3, Jcxz_rel8, &[Jb]).flag(F64),
    Row::one(0xE4, In_AL_imm8, AL_IB),
    Row::sized(0xE5, [In_AX_imm8, In_EAX_imm8, In_EAX_imm8], &[AccV, Ib]),
    Row::one(0xE6, Out_imm8_AL, &[Ib, AccB]),
    Row::sized(0xE7, [Out_imm8_AX, Out_imm8_EAX, Out_imm8_EAX], &[Ib, AccV]),
    Row::sized(0xE8, [Call_rel16, Call_rel32_32, Call_rel32_64], &[Jz]).flag(F64),
    Row::sized(0xE9, [Jmp_rel16, Jmp_rel32_32, Jmp_rel32_64], &[Jz]).flag(F64),
    Row::sized(0xEB, [Jmp_rel8_16, Jmp_rel8_32, Jmp_rel8_64], &[Jb]).flag(F64),
    Row::one(0xEC, In_AL_DX, &[AccB, Dx]),
    Row::sized(0xED, [In_AX_DX, In_EAX_DX, In_EAX_DX], &[AccV, Dx]),
    Row::one(0xEE, Out_DX_AL, &[Dx, AccB]),
    Row::sized(0xEF, [Out_DX_AX, Out_DX_EAX, Out_DX_EAX], &[Dx, AccV]),
    Row::one(0xF4, Hlt, NO_OPS),
    Row::one(0xF5, Cmc, NO_OPS),
    // Group 3
    Row::one(0xF6, Test_rm8_imm8, EB_IB).reg(0).mem(MEM_B),
    Row::one(0xF6, Test_rm8_imm8, EB_IB).reg(1).mem(MEM_B),
    Row::one(0xF6, Not_rm8, &[Eb]).reg(2).mem(MEM_B),
    Row::one(0xF6, Neg_rm8, &[Eb]).reg(3).mem(MEM_B),
    Row::one(0xF6, Mul_rm8, &[Eb]).reg(4).mem(MEM_B),
    Row::one(0xF6, Imul_rm8, &[Eb]).reg(5).mem(MEM_B),
    Row::one(0xF6, Div_rm8, &[Eb]).reg(6).mem(MEM_B),
    Row::one(0xF6, Idiv_rm8, &[Eb]).reg(7).mem(MEM_B),
    Row::sized(0xF7, [Test_rm16_imm16, Test_rm32_imm32, Test_rm64_imm32], EV_IZ)
        .reg(0)
        .mem_sized(MEM_V),
    Row::sized(0xF7, [Test_rm16_imm16, Test_rm32_imm32, Test_rm64_imm32], EV_IZ)
        .reg(1)
        .mem_sized(MEM_V),
    Row::sized(0xF7, [Not_rm16, Not_rm32, Not_rm64], &[Ev]).reg(2).mem_sized(MEM_V),
    Row::sized(0xF7, [Neg_rm16, Neg_rm32, Neg_rm64], &[Ev]).reg(3).mem_sized(MEM_V),
    Row::sized(0xF7, [Mul_rm16, Mul_rm32, Mul_rm64], &[Ev]).reg(4).mem_sized(MEM_V),
    Row::sized(0xF7, [Imul_rm16, Imul_rm32, Imul_rm64], &[Ev]).reg(5).mem_sized(MEM_V),
    Row::sized(0xF7, [Div_rm16, Div_rm32, Div_rm64], &[Ev]).reg(6).mem_sized(MEM_V),
    Row::sized(0xF7, [Idiv_rm16, Idiv_rm32, Idiv_rm64], &[Ev]).reg(7).mem_sized(MEM_V),
    Row::one(0xF8, Clc, NO_OPS),
    Row::one(0xF9, Stc, NO_OPS),
    Row::one(0xFA, Cli, NO_OPS),
    Row::one(0xFB, Sti, NO_OPS),
    Row::one(0xFC, Cld, NO_OPS),
    Row::one(0xFD, Std, NO_OPS),
    // Group 4
    Row::one(0xFE, Inc_rm8, &[Eb]).reg(0).mem(MEM_B),
    Row::one(0xFE, Dec_rm8, &[Eb]).reg(1).mem(MEM_B),
    // Group 5
    Row::sized(0xFF, [Inc_rm16, Inc_rm32, Inc_rm64], &[Ev]).reg(0).mem_sized(MEM_V),
    Row::sized(0xFF, [Dec_rm16, Dec_rm32, Dec_rm64], &[Ev]).reg(1).mem_sized(MEM_V),
    Row::sized(0xFF, [Call_rm16, Call_rm32, Call_rm64], &[Ev])
        .reg(2)
        .mem_sized(MEM_V)
        .flag(F64),
    Row::sized(0xFF, [Jmp_rm16, Jmp_rm32, Jmp_rm64], &[Ev])
        .reg(4)
        .mem_sized(MEM_V)
        .flag(F64),
    Row::sized(0xFF, [Push_rm16, Push_rm32, Push_rm64], &[Ev])
        .reg(6)
        .mem_sized(MEM_V)
        .flag(D64),
];
