//! The VEX-encoded opcode maps (C5 / C4 prefixes).
//!
//! Rows are split by vector length where the identity depends on it; LIG
//! instructions use a length-agnostic row and XMM registers.

use oxdec_core::Code::*;
use oxdec_core::MemorySize::*;

use super::OpSpec::{self, *};
use super::Row;

const V_W: &[OpSpec] = &[V, W];
const W_V: &[OpSpec] = &[W, V];
const V_H_W: &[OpSpec] = &[V, H, W];
const V_W_IB: &[OpSpec] = &[V, W, Ib];
const V_H_W_IB: &[OpSpec] = &[V, H, W, Ib];
const V_H_W_IS4: &[OpSpec] = &[V, H, W, Is4];

pub(crate) static ROWS_0F: &[Row] = &[
    Row::one(0x10, VEX_Vmovups_xmm_xmmm128, V_W).pp_none().l128().mem(Packed128_Float32),
    Row::one(0x10, VEX_Vmovups_ymm_ymmm256, V_W).pp_none().l256().mem(Packed256_Float32),
    Row::one(0x10, VEX_Vmovupd_xmm_xmmm128, V_W).pp_66().l128().mem(Packed128_Float64),
    Row::one(0x10, VEX_Vmovupd_ymm_ymmm256, V_W).pp_66().l256().mem(Packed256_Float64),
    Row::one(0x11, VEX_Vmovups_xmmm128_xmm, W_V).pp_none().l128().mem(Packed128_Float32),
    Row::one(0x11, VEX_Vmovups_ymmm256_ymm, W_V).pp_none().l256().mem(Packed256_Float32),
    Row::one(0x11, VEX_Vmovupd_xmmm128_xmm, W_V).pp_66().l128().mem(Packed128_Float64),
    Row::one(0x11, VEX_Vmovupd_ymmm256_ymm, W_V).pp_66().l256().mem(Packed256_Float64),
    Row::one(0x28, VEX_Vmovaps_xmm_xmmm128, V_W).pp_none().l128().mem(Packed128_Float32),
    Row::one(0x28, VEX_Vmovaps_ymm_ymmm256, V_W).pp_none().l256().mem(Packed256_Float32),
    Row::one(0x28, VEX_Vmovapd_xmm_xmmm128, V_W).pp_66().l128().mem(Packed128_Float64),
    Row::one(0x28, VEX_Vmovapd_ymm_ymmm256, V_W).pp_66().l256().mem(Packed256_Float64),
    Row::one(0x29, VEX_Vmovaps_xmmm128_xmm, W_V).pp_none().l128().mem(Packed128_Float32),
    Row::one(0x29, VEX_Vmovaps_ymmm256_ymm, W_V).pp_none().l256().mem(Packed256_Float32),
    Row::one(0x29, VEX_Vmovapd_xmmm128_xmm, W_V).pp_66().l128().mem(Packed128_Float64),
    Row::one(0x29, VEX_Vmovapd_ymmm256_ymm, W_V).pp_66().l256().mem(Packed256_Float64),
    Row::one(0x54, VEX_Vandps_xmm_xmm_xmmm128, V_H_W).pp_none().l128().mem(Packed128_Float32),
    Row::one(0x54, VEX_Vandps_ymm_ymm_ymmm256, V_H_W).pp_none().l256().mem(Packed256_Float32),
    Row::one(0x54, VEX_Vandpd_xmm_xmm_xmmm128, V_H_W).pp_66().l128().mem(Packed128_Float64),
    Row::one(0x54, VEX_Vandpd_ymm_ymm_ymmm256, V_H_W).pp_66().l256().mem(Packed256_Float64),
    Row::one(0x57, VEX_Vxorps_xmm_xmm_xmmm128, V_H_W).pp_none().l128().mem(Packed128_Float32),
    Row::one(0x57, VEX_Vxorps_ymm_ymm_ymmm256, V_H_W).pp_none().l256().mem(Packed256_Float32),
    Row::one(0x57, VEX_Vxorpd_xmm_xmm_xmmm128, V_H_W).pp_66().l128().mem(Packed128_Float64),
    Row::one(0x57, VEX_Vxorpd_ymm_ymm_ymmm256, V_H_W).pp_66().l256().mem(Packed256_Float64),
    Row::one(0x58, VEX_Vaddps_xmm_xmm_xmmm128, V_H_W).pp_none().l128().mem(Packed128_Float32),
    Row::one(0x58, VEX_Vaddps_ymm_ymm_ymmm256, V_H_W).pp_none().l256().mem(Packed256_Float32),
    Row::one(0x58, VEX_Vaddpd_xmm_xmm_xmmm128, V_H_W).pp_66().l128().mem(Packed128_Float64),
    Row::one(0x58, VEX_Vaddpd_ymm_ymm_ymmm256, V_H_W).pp_66().l256().mem(Packed256_Float64),
    Row::one(0x58, VEX_Vaddss_xmm_xmm_xmmm32, V_H_W).pp_f3().mem(Float32),
    Row::one(0x58, VEX_Vaddsd_xmm_xmm_xmmm64, V_H_W).pp_f2().mem(Float64),
    Row::one(0x59, VEX_Vmulps_xmm_xmm_xmmm128, V_H_W).pp_none().l128().mem(Packed128_Float32),
    Row::one(0x59, VEX_Vmulps_ymm_ymm_ymmm256, V_H_W).pp_none().l256().mem(Packed256_Float32),
    Row::one(0x59, VEX_Vmulpd_xmm_xmm_xmmm128, V_H_W).pp_66().l128().mem(Packed128_Float64),
    Row::one(0x59, VEX_Vmulpd_ymm_ymm_ymmm256, V_H_W).pp_66().l256().mem(Packed256_Float64),
    Row::one(0x59, VEX_Vmulss_xmm_xmm_xmmm32, V_H_W).pp_f3().mem(Float32),
    Row::one(0x59, VEX_Vmulsd_xmm_xmm_xmmm64, V_H_W).pp_f2().mem(Float64),
    Row::one(0x5C, VEX_Vsubps_xmm_xmm_xmmm128, V_H_W).pp_none().l128().mem(Packed128_Float32),
    Row::one(0x5C, VEX_Vsubps_ymm_ymm_ymmm256, V_H_W).pp_none().l256().mem(Packed256_Float32),
    Row::one(0x5C, VEX_Vsubpd_xmm_xmm_xmmm128, V_H_W).pp_66().l128().mem(Packed128_Float64),
    Row::one(0x5C, VEX_Vsubpd_ymm_ymm_ymmm256, V_H_W).pp_66().l256().mem(Packed256_Float64),
    Row::one(0x5C, VEX_Vsubss_xmm_xmm_xmmm32, V_H_W).pp_f3().mem(Float32),
    Row::one(0x5C, VEX_Vsubsd_xmm_xmm_xmmm64, V_H_W).pp_f2().mem(Float64),
    Row::one(0x5E, VEX_Vdivps_xmm_xmm_xmmm128, V_H_W).pp_none().l128().mem(Packed128_Float32),
    Row::one(0x5E, VEX_Vdivps_ymm_ymm_ymmm256, V_H_W).pp_none().l256().mem(Packed256_Float32),
    Row::one(0x5E, VEX_Vdivpd_xmm_xmm_xmmm128, V_H_W).pp_66().l128().mem(Packed128_Float64),
    Row::one(0x5E, VEX_Vdivpd_ymm_ymm_ymmm256, V_H_W).pp_66().l256().mem(Packed256_Float64),
    Row::one(0x5E, VEX_Vdivss_xmm_xmm_xmmm32, V_H_W).pp_f3().mem(Float32),
    Row::one(0x5E, VEX_Vdivsd_xmm_xmm_xmmm64, V_H_W).pp_f2().mem(Float64),
    Row::one(0x6F, VEX_Vmovdqa_xmm_xmmm128, V_W).pp_66().l128().mem(UInt128),
    Row::one(0x6F, VEX_Vmovdqa_ymm_ymmm256, V_W).pp_66().l256().mem(UInt256),
    Row::one(0x6F, VEX_Vmovdqu_xmm_xmmm128, V_W).pp_f3().l128().mem(UInt128),
    Row::one(0x6F, VEX_Vmovdqu_ymm_ymmm256, V_W).pp_f3().l256().mem(UInt256),
    Row::one(0x70, VEX_Vpshufd_xmm_xmmm128_imm8, V_W_IB).pp_66().l128().mem(Packed128_Int32),
    Row::one(0x70, VEX_Vpshufd_ymm_ymmm256_imm8, V_W_IB).pp_66().l256().mem(Packed256_Int32),
    Row::one(0x70, VEX_Vpshufhw_xmm_xmmm128_imm8, V_W_IB).pp_f3().l128().mem(Packed128_Int16),
    Row::one(0x70, VEX_Vpshufhw_ymm_ymmm256_imm8, V_W_IB).pp_f3().l256().mem(Packed256_Int16),
    Row::one(0x70, VEX_Vpshuflw_xmm_xmmm128_imm8, V_W_IB).pp_f2().l128().mem(Packed128_Int16),
    Row::one(0x70, VEX_Vpshuflw_ymm_ymmm256_imm8, V_W_IB).pp_f2().l256().mem(Packed256_Int16),
    Row::one(0x74, VEX_Vpcmpeqb_xmm_xmm_xmmm128, V_H_W).pp_66().l128().mem(Packed128_Int8),
    Row::one(0x74, VEX_Vpcmpeqb_ymm_ymm_ymmm256, V_H_W).pp_66().l256().mem(Packed256_Int8),
    Row::one(0x77, VEX_Vzeroupper, &[]).pp_none().l128(),
    Row::one(0x77, VEX_Vzeroall, &[]).pp_none().l256(),
    Row::one(0x7E, VEX_Vmovq_xmm_xmmm64, V_W).pp_f3().mem(UInt64),
    Row::one(0x7F, VEX_Vmovdqa_xmmm128_xmm, W_V).pp_66().l128().mem(UInt128),
    Row::one(0x7F, VEX_Vmovdqa_ymmm256_ymm, W_V).pp_66().l256().mem(UInt256),
    Row::one(0x7F, VEX_Vmovdqu_xmmm128_xmm, W_V).pp_f3().l128().mem(UInt128),
    Row::one(0x7F, VEX_Vmovdqu_ymmm256_ymm, W_V).pp_f3().l256().mem(UInt256),
    Row::one(0xD6, VEX_Vmovq_xmmm64_xmm, W_V).pp_66().l128().mem(UInt64),
    Row::one(0xEF, VEX_Vpxor_xmm_xmm_xmmm128, V_H_W).pp_66().l128().mem(UInt128),
    Row::one(0xEF, VEX_Vpxor_ymm_ymm_ymmm256, V_H_W).pp_66().l256().mem(UInt256),
];

pub(crate) static ROWS_0F38: &[Row] = &[
    Row::one(0x00, VEX_Vpshufb_xmm_xmm_xmmm128, V_H_W).pp_66().l128().mem(Packed128_Int8),
    Row::one(0x00, VEX_Vpshufb_ymm_ymm_ymmm256, V_H_W).pp_66().l256().mem(Packed256_Int8),
    Row::one(0x28, VEX_Vpmuldq_xmm_xmm_xmmm128, V_H_W).pp_66().l128().mem(Packed128_Int32),
    Row::one(0x28, VEX_Vpmuldq_ymm_ymm_ymmm256, V_H_W).pp_66().l256().mem(Packed256_Int32),
    Row::one(0x29, VEX_Vpcmpeqq_xmm_xmm_xmmm128, V_H_W).pp_66().l128().mem(Packed128_Int64),
    Row::one(0x29, VEX_Vpcmpeqq_ymm_ymm_ymmm256, V_H_W).pp_66().l256().mem(Packed256_Int64),
    // FMA
    Row::one(0x98, VEX_Vfmadd132ps_xmm_xmm_xmmm128, V_H_W)
        .pp_66()
        .w0()
        .l128()
        .mem(Packed128_Float32),
    Row::one(0x98, VEX_Vfmadd132ps_ymm_ymm_ymmm256, V_H_W)
        .pp_66()
        .w0()
        .l256()
        .mem(Packed256_Float32),
    Row::one(0x98, VEX_Vfmadd132pd_xmm_xmm_xmmm128, V_H_W)
        .pp_66()
        .w1()
        .l128()
        .mem(Packed128_Float64),
    Row::one(0x98, VEX_Vfmadd132pd_ymm_ymm_ymmm256, V_H_W)
        .pp_66()
        .w1()
        .l256()
        .mem(Packed256_Float64),
    Row::one(0xA8, VEX_Vfmadd213ps_xmm_xmm_xmmm128, V_H_W)
        .pp_66()
        .w0()
        .l128()
        .mem(Packed128_Float32),
    Row::one(0xA8, VEX_Vfmadd213ps_ymm_ymm_ymmm256, V_H_W)
        .pp_66()
        .w0()
        .l256()
        .mem(Packed256_Float32),
    Row::one(0xA8, VEX_Vfmadd213pd_xmm_xmm_xmmm128, V_H_W)
        .pp_66()
        .w1()
        .l128()
        .mem(Packed128_Float64),
    Row::one(0xA8, VEX_Vfmadd213pd_ymm_ymm_ymmm256, V_H_W)
        .pp_66()
        .w1()
        .l256()
        .mem(Packed256_Float64),
    Row::one(0xB8, VEX_Vfmadd231ps_xmm_xmm_xmmm128, V_H_W)
        .pp_66()
        .w0()
        .l128()
        .mem(Packed128_Float32),
    Row::one(0xB8, VEX_Vfmadd231ps_ymm_ymm_ymmm256, V_H_W)
        .pp_66()
        .w0()
        .l256()
        .mem(Packed256_Float32),
    Row::one(0xB8, VEX_Vfmadd231pd_xmm_xmm_xmmm128, V_H_W)
        .pp_66()
        .w1()
        .l128()
        .mem(Packed128_Float64),
    Row::one(0xB8, VEX_Vfmadd231pd_ymm_ymm_ymmm256, V_H_W)
        .pp_66()
        .w1()
        .l256()
        .mem(Packed256_Float64),
    // BMI1/BMI2, all VEX.L=0 with GPR operands.
    Row::sized(0xF2, [Andn_r32_r32_rm32, Andn_r32_r32_rm32, Andn_r64_r64_rm64], &[Gv, Hv, Ev])
        .pp_none()
        .l128()
        .mem_sized([UInt32, UInt32, UInt64]),
    Row::sized(0xF3, [Blsr_r32_rm32, Blsr_r32_rm32, Blsr_r64_rm64], &[Hv, Ev])
        .pp_none()
        .reg(1)
        .l128()
        .mem_sized([UInt32, UInt32, UInt64]),
    Row::sized(0xF3, [Blsmsk_r32_rm32, Blsmsk_r32_rm32, Blsmsk_r64_rm64], &[Hv, Ev])
        .pp_none()
        .reg(2)
        .l128()
        .mem_sized([UInt32, UInt32, UInt64]),
    Row::sized(0xF3, [Blsi_r32_rm32, Blsi_r32_rm32, Blsi_r64_rm64], &[Hv, Ev])
        .pp_none()
        .reg(3)
        .l128()
        .mem_sized([UInt32, UInt32, UInt64]),
    Row::sized(0xF5, [Bzhi_r32_rm32_r32, Bzhi_r32_rm32_r32, Bzhi_r64_rm64_r64], &[Gv, Ev, Hv])
        .pp_none()
        .l128()
        .mem_sized([UInt32, UInt32, UInt64]),
    Row::sized(0xF5, [Pext_r32_r32_rm32, Pext_r32_r32_rm32, Pext_r64_r64_rm64], &[Gv, Hv, Ev])
        .pp_f3()
        .l128()
        .mem_sized([UInt32, UInt32, UInt64]),
    Row::sized(0xF5, [Pdep_r32_r32_rm32, Pdep_r32_r32_rm32, Pdep_r64_r64_rm64], &[Gv, Hv, Ev])
        .pp_f2()
        .l128()
        .mem_sized([UInt32, UInt32, UInt64]),
    Row::sized(0xF6, [Mulx_r32_r32_rm32, Mulx_r32_r32_rm32, Mulx_r64_r64_rm64], &[Gv, Hv, Ev])
        .pp_f2()
        .l128()
        .mem_sized([UInt32, UInt32, UInt64]),
    Row::sized(0xF7, [Bextr_r32_rm32_r32, Bextr_r32_rm32_r32, Bextr_r64_rm64_r64], &[Gv, Ev, Hv])
        .pp_none()
        .l128()
        .mem_sized([UInt32, UInt32, UInt64]),
    Row::sized(0xF7, [Shlx_r32_rm32_r32, Shlx_r32_rm32_r32, Shlx_r64_rm64_r64], &[Gv, Ev, Hv])
        .pp_66()
        .l128()
        .mem_sized([UInt32, UInt32, UInt64]),
    Row::sized(0xF7, [Sarx_r32_rm32_r32, Sarx_r32_rm32_r32, Sarx_r64_rm64_r64], &[Gv, Ev, Hv])
        .pp_f3()
        .l128()
        .mem_sized([UInt32, UInt32, UInt64]),
    Row::sized(0xF7, [Shrx_r32_rm32_r32, Shrx_r32_rm32_r32, Shrx_r64_rm64_r64], &[Gv, Ev, Hv])
        .pp_f2()
        .l128()
        .mem_sized([UInt32, UInt32, UInt64]),
];

pub(crate) static ROWS_0F3A: &[Row] = &[
    Row::one(0x0C, VEX_Vblendps_xmm_xmm_xmmm128_imm8, V_H_W_IB)
        .pp_66()
        .l128()
        .mem(Packed128_Float32),
    Row::one(0x0C, VEX_Vblendps_ymm_ymm_ymmm256_imm8, V_H_W_IB)
        .pp_66()
        .l256()
        .mem(Packed256_Float32),
    Row::one(0x0F, VEX_Vpalignr_xmm_xmm_xmmm128_imm8, V_H_W_IB)
        .pp_66()
        .l128()
        .mem(Packed128_Int8),
    Row::one(0x0F, VEX_Vpalignr_ymm_ymm_ymmm256_imm8, V_H_W_IB)
        .pp_66()
        .l256()
        .mem(Packed256_Int8),
    Row::one(0x18, VEX_Vinsertf128_ymm_ymm_xmmm128_imm8, &[V, H, W128, Ib])
        .pp_66()
        .w0()
        .l256()
        .mem(UInt128),
    Row::one(0x19, VEX_Vextractf128_xmmm128_ymm_imm8, &[W128, V, Ib])
        .pp_66()
        .w0()
        .l256()
        .mem(UInt128),
    Row::one(0x44, VEX_Vpclmulqdq_xmm_xmm_xmmm128_imm8, V_H_W_IB)
        .pp_66()
        .l128()
        .mem(Packed128_Int64),
    Row::one(0x4A, VEX_Vblendvps_xmm_xmm_xmmm128_xmm, V_H_W_IS4)
        .pp_66()
        .w0()
        .l128()
        .mem(Packed128_Float32),
    Row::one(0x4A, VEX_Vblendvps_ymm_ymm_ymmm256_ymm, V_H_W_IS4)
        .pp_66()
        .w0()
        .l256()
        .mem(Packed256_Float32),
    Row::one(0x4B, VEX_Vblendvpd_xmm_xmm_xmmm128_xmm, V_H_W_IS4)
        .pp_66()
        .w0()
        .l128()
        .mem(Packed128_Float64),
    Row::one(0x4B, VEX_Vblendvpd_ymm_ymm_ymmm256_ymm, V_H_W_IS4)
        .pp_66()
        .w0()
        .l256()
        .mem(Packed256_Float64),
    Row::one(0x4C, VEX_Vpblendvb_xmm_xmm_xmmm128_xmm, V_H_W_IS4)
        .pp_66()
        .w0()
        .l128()
        .mem(Packed128_Int8),
    Row::one(0x4C, VEX_Vpblendvb_ymm_ymm_ymmm256_ymm, V_H_W_IS4)
        .pp_66()
        .w0()
        .l256()
        .mem(Packed256_Int8),
];
