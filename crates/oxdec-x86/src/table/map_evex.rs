//! The EVEX-encoded opcode maps (62 prefix).
//!
//! When the b bit is set on a register form, the decoder retries the lookup
//! against the 512-bit row carrying the `ER`/`SAE` flag, so only those rows
//! mark rounding support.

use oxdec_core::Code::*;
use oxdec_core::MemorySize::*;

use super::entry_flags::{ER, MASK, SAE};
use super::OpSpec::{self, *};
use super::Row;
use super::TupleType;

const V_W: &[OpSpec] = &[V, W];
const W_V: &[OpSpec] = &[W, V];
const V_H_W: &[OpSpec] = &[V, H, W];
const V_W_IB: &[OpSpec] = &[V, W, Ib];
const V_H_W_IB: &[OpSpec] = &[V, H, W, Ib];

pub(crate) static ROWS_0F: &[Row] = &[
    Row::one(0x10, EVEX_Vmovups_xmm_k1z_xmmm128, V_W)
        .pp_none()
        .w0()
        .l128()
        .mem(Packed128_Float32)
        .tuple(TupleType::FullMem128)
        .flag(MASK),
    Row::one(0x10, EVEX_Vmovups_ymm_k1z_ymmm256, V_W)
        .pp_none()
        .w0()
        .l256()
        .mem(Packed256_Float32)
        .tuple(TupleType::FullMem256)
        .flag(MASK),
    Row::one(0x10, EVEX_Vmovups_zmm_k1z_zmmm512, V_W)
        .pp_none()
        .w0()
        .l512()
        .mem(Packed512_Float32)
        .tuple(TupleType::FullMem512)
        .flag(MASK),
    Row::one(0x11, EVEX_Vmovups_xmmm128_k1z_xmm, W_V)
        .pp_none()
        .w0()
        .l128()
        .mem(Packed128_Float32)
        .tuple(TupleType::FullMem128)
        .flag(MASK),
    Row::one(0x11, EVEX_Vmovups_ymmm256_k1z_ymm, W_V)
        .pp_none()
        .w0()
        .l256()
        .mem(Packed256_Float32)
        .tuple(TupleType::FullMem256)
        .flag(MASK),
    Row::one(0x11, EVEX_Vmovups_zmmm512_k1z_zmm, W_V)
        .pp_none()
        .w0()
        .l512()
        .mem(Packed512_Float32)
        .tuple(TupleType::FullMem512)
        .flag(MASK),
    Row::one(0x58, EVEX_Vaddps_xmm_k1z_xmm_xmmm128b32, V_H_W)
        .pp_none()
        .w0()
        .l128()
        .mem(Packed128_Float32)
        .bcst(Broadcast128_Float32)
        .tuple(TupleType::Full128)
        .flag(MASK),
    Row::one(0x58, EVEX_Vaddps_ymm_k1z_ymm_ymmm256b32, V_H_W)
        .pp_none()
        .w0()
        .l256()
        .mem(Packed256_Float32)
        .bcst(Broadcast256_Float32)
        .tuple(TupleType::Full256)
        .flag(MASK),
    Row::one(0x58, EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er, V_H_W)
        .pp_none()
        .w0()
        .l512()
        .mem(Packed512_Float32)
        .bcst(Broadcast512_Float32)
        .tuple(TupleType::Full512)
        .flag(MASK | ER),
    Row::one(0x58, EVEX_Vaddpd_xmm_k1z_xmm_xmmm128b64, V_H_W)
        .pp_66()
        .w1()
        .l128()
        .mem(Packed128_Float64)
        .bcst(Broadcast128_Float64)
        .tuple(TupleType::Full128)
        .flag(MASK),
    Row::one(0x58, EVEX_Vaddpd_ymm_k1z_ymm_ymmm256b64, V_H_W)
        .pp_66()
        .w1()
        .l256()
        .mem(Packed256_Float64)
        .bcst(Broadcast256_Float64)
        .tuple(TupleType::Full256)
        .flag(MASK),
    Row::one(0x58, EVEX_Vaddpd_zmm_k1z_zmm_zmmm512b64_er, V_H_W)
        .pp_66()
        .w1()
        .l512()
        .mem(Packed512_Float64)
        .bcst(Broadcast512_Float64)
        .tuple(TupleType::Full512)
        .flag(MASK | ER),
    Row::one(0x59, EVEX_Vmulps_xmm_k1z_xmm_xmmm128b32, V_H_W)
        .pp_none()
        .w0()
        .l128()
        .mem(Packed128_Float32)
        .bcst(Broadcast128_Float32)
        .tuple(TupleType::Full128)
        .flag(MASK),
    Row::one(0x59, EVEX_Vmulps_ymm_k1z_ymm_ymmm256b32, V_H_W)
        .pp_none()
        .w0()
        .l256()
        .mem(Packed256_Float32)
        .bcst(Broadcast256_Float32)
        .tuple(TupleType::Full256)
        .flag(MASK),
    Row::one(0x59, EVEX_Vmulps_zmm_k1z_zmm_zmmm512b32_er, V_H_W)
        .pp_none()
        .w0()
        .l512()
        .mem(Packed512_Float32)
        .bcst(Broadcast512_Float32)
        .tuple(TupleType::Full512)
        .flag(MASK | ER),
    Row::one(0x59, EVEX_Vmulpd_xmm_k1z_xmm_xmmm128b64, V_H_W)
        .pp_66()
        .w1()
        .l128()
        .mem(Packed128_Float64)
        .bcst(Broadcast128_Float64)
        .tuple(TupleType::Full128)
        .flag(MASK),
    Row::one(0x59, EVEX_Vmulpd_ymm_k1z_ymm_ymmm256b64, V_H_W)
        .pp_66()
        .w1()
        .l256()
        .mem(Packed256_Float64)
        .bcst(Broadcast256_Float64)
        .tuple(TupleType::Full256)
        .flag(MASK),
    Row::one(0x59, EVEX_Vmulpd_zmm_k1z_zmm_zmmm512b64_er, V_H_W)
        .pp_66()
        .w1()
        .l512()
        .mem(Packed512_Float64)
        .bcst(Broadcast512_Float64)
        .tuple(TupleType::Full512)
        .flag(MASK | ER),
    // VMOVDQA32/64 and VMOVDQU32/64
    Row::one(0x6F, EVEX_Vmovdqa32_xmm_k1z_xmmm128, V_W)
        .pp_66()
        .w0()
        .l128()
        .mem(Packed128_Int32)
        .tuple(TupleType::FullMem128)
        .flag(MASK),
    Row::one(0x6F, EVEX_Vmovdqa32_ymm_k1z_ymmm256, V_W)
        .pp_66()
        .w0()
        .l256()
        .mem(Packed256_Int32)
        .tuple(TupleType::FullMem256)
        .flag(MASK),
    Row::one(0x6F, EVEX_Vmovdqa32_zmm_k1z_zmmm512, V_W)
        .pp_66()
        .w0()
        .l512()
        .mem(Packed512_Int32)
        .tuple(TupleType::FullMem512)
        .flag(MASK),
    Row::one(0x6F, EVEX_Vmovdqa64_xmm_k1z_xmmm128, V_W)
        .pp_66()
        .w1()
        .l128()
        .mem(Packed128_Int64)
        .tuple(TupleType::FullMem128)
        .flag(MASK),
    Row::one(0x6F, EVEX_Vmovdqa64_ymm_k1z_ymmm256, V_W)
        .pp_66()
        .w1()
        .l256()
        .mem(Packed256_Int64)
        .tuple(TupleType::FullMem256)
        .flag(MASK),
    Row::one(0x6F, EVEX_Vmovdqa64_zmm_k1z_zmmm512, V_W)
        .pp_66()
        .w1()
        .l512()
        .mem(Packed512_Int64)
        .tuple(TupleType::FullMem512)
        .flag(MASK),
    Row::one(0x6F, EVEX_Vmovdqu32_xmm_k1z_xmmm128, V_W)
        .pp_f3()
        .w0()
        .l128()
        .mem(Packed128_Int32)
        .tuple(TupleType::FullMem128)
        .flag(MASK),
    Row::one(0x6F, EVEX_Vmovdqu32_ymm_k1z_ymmm256, V_W)
        .pp_f3()
        .w0()
        .l256()
        .mem(Packed256_Int32)
        .tuple(TupleType::FullMem256)
        .flag(MASK),
    Row::one(0x6F, EVEX_Vmovdqu32_zmm_k1z_zmmm512, V_W)
        .pp_f3()
        .w0()
        .l512()
        .mem(Packed512_Int32)
        .tuple(TupleType::FullMem512)
        .flag(MASK),
    Row::one(0x6F, EVEX_Vmovdqu64_xmm_k1z_xmmm128, V_W)
        .pp_f3()
        .w1()
        .l128()
        .mem(Packed128_Int64)
        .tuple(TupleType::FullMem128)
        .flag(MASK),
    Row::one(0x6F, EVEX_Vmovdqu64_ymm_k1z_ymmm256, V_W)
        .pp_f3()
        .w1()
        .l256()
        .mem(Packed256_Int64)
        .tuple(TupleType::FullMem256)
        .flag(MASK),
    Row::one(0x6F, EVEX_Vmovdqu64_zmm_k1z_zmmm512, V_W)
        .pp_f3()
        .w1()
        .l512()
        .mem(Packed512_Int64)
        .tuple(TupleType::FullMem512)
        .flag(MASK),
    Row::one(0x7F, EVEX_Vmovdqa32_xmmm128_k1z_xmm, W_V)
        .pp_66()
        .w0()
        .l128()
        .mem(Packed128_Int32)
        .tuple(TupleType::FullMem128)
        .flag(MASK),
    Row::one(0x7F, EVEX_Vmovdqa32_ymmm256_k1z_ymm, W_V)
        .pp_66()
        .w0()
        .l256()
        .mem(Packed256_Int32)
        .tuple(TupleType::FullMem256)
        .flag(MASK),
    Row::one(0x7F, EVEX_Vmovdqa32_zmmm512_k1z_zmm, W_V)
        .pp_66()
        .w0()
        .l512()
        .mem(Packed512_Int32)
        .tuple(TupleType::FullMem512)
        .flag(MASK),
    Row::one(0x7F, EVEX_Vmovdqa64_xmmm128_k1z_xmm, W_V)
        .pp_66()
        .w1()
        .l128()
        .mem(Packed128_Int64)
        .tuple(TupleType::FullMem128)
        .flag(MASK),
    Row::one(0x7F, EVEX_Vmovdqa64_ymmm256_k1z_ymm, W_V)
        .pp_66()
        .w1()
        .l256()
        .mem(Packed256_Int64)
        .tuple(TupleType::FullMem256)
        .flag(MASK),
    Row::one(0x7F, EVEX_Vmovdqa64_zmmm512_k1z_zmm, W_V)
        .pp_66()
        .w1()
        .l512()
        .mem(Packed512_Int64)
        .tuple(TupleType::FullMem512)
        .flag(MASK),
    Row::one(0xEF, EVEX_Vpxord_xmm_k1z_xmm_xmmm128b32, V_H_W)
        .pp_66()
        .w0()
        .l128()
        .mem(Packed128_Int32)
        .bcst(Broadcast128_Int32)
        .tuple(TupleType::Full128)
        .flag(MASK),
    Row::one(0xEF, EVEX_Vpxord_ymm_k1z_ymm_ymmm256b32, V_H_W)
        .pp_66()
        .w0()
        .l256()
        .mem(Packed256_Int32)
        .bcst(Broadcast256_Int32)
        .tuple(TupleType::Full256)
        .flag(MASK),
    Row::one(0xEF, EVEX_Vpxord_zmm_k1z_zmm_zmmm512b32, V_H_W)
        .pp_66()
        .w0()
        .l512()
        .mem(Packed512_Int32)
        .bcst(Broadcast512_Int32)
        .tuple(TupleType::Full512)
        .flag(MASK),
    Row::one(0xEF, EVEX_Vpxorq_xmm_k1z_xmm_xmmm128b64, V_H_W)
        .pp_66()
        .w1()
        .l128()
        .mem(Packed128_Int64)
        .bcst(Broadcast128_Int64)
        .tuple(TupleType::Full128)
        .flag(MASK),
    Row::one(0xEF, EVEX_Vpxorq_ymm_k1z_ymm_ymmm256b64, V_H_W)
        .pp_66()
        .w1()
        .l256()
        .mem(Packed256_Int64)
        .bcst(Broadcast256_Int64)
        .tuple(TupleType::Full256)
        .flag(MASK),
    Row::one(0xEF, EVEX_Vpxorq_zmm_k1z_zmm_zmmm512b64, V_H_W)
        .pp_66()
        .w1()
        .l512()
        .mem(Packed512_Int64)
        .bcst(Broadcast512_Int64)
        .tuple(TupleType::Full512)
        .flag(MASK),
];

pub(crate) static ROWS_0F38: &[Row] = &[
    Row::one(0x28, EVEX_Vpmuldq_xmm_k1z_xmm_xmmm128b64, V_H_W)
        .pp_66()
        .w1()
        .l128()
        .mem(Packed128_Int32)
        .bcst(Broadcast128_2xInt32)
        .tuple(TupleType::Full128)
        .flag(MASK),
    Row::one(0x28, EVEX_Vpmuldq_ymm_k1z_ymm_ymmm256b64, V_H_W)
        .pp_66()
        .w1()
        .l256()
        .mem(Packed256_Int32)
        .bcst(Broadcast256_2xInt32)
        .tuple(TupleType::Full256)
        .flag(MASK),
    Row::one(0x28, EVEX_Vpmuldq_zmm_k1z_zmm_zmmm512b64, V_H_W)
        .pp_66()
        .w1()
        .l512()
        .mem(Packed512_Int32)
        .bcst(Broadcast512_2xInt32)
        .tuple(TupleType::Full512)
        .flag(MASK),
    Row::one(0x2C, EVEX_Vscalefps_xmm_k1z_xmm_xmmm128b32, V_H_W)
        .pp_66()
        .w0()
        .l128()
        .mem(Packed128_Float32)
        .bcst(Broadcast128_Float32)
        .tuple(TupleType::Full128)
        .flag(MASK),
    Row::one(0x2C, EVEX_Vscalefps_ymm_k1z_ymm_ymmm256b32, V_H_W)
        .pp_66()
        .w0()
        .l256()
        .mem(Packed256_Float32)
        .bcst(Broadcast256_Float32)
        .tuple(TupleType::Full256)
        .flag(MASK),
    Row::one(0x2C, EVEX_Vscalefps_zmm_k1z_zmm_zmmm512b32_er, V_H_W)
        .pp_66()
        .w0()
        .l512()
        .mem(Packed512_Float32)
        .bcst(Broadcast512_Float32)
        .tuple(TupleType::Full512)
        .flag(MASK | ER),
    Row::one(0x2C, EVEX_Vscalefpd_xmm_k1z_xmm_xmmm128b64, V_H_W)
        .pp_66()
        .w1()
        .l128()
        .mem(Packed128_Float64)
        .bcst(Broadcast128_Float64)
        .tuple(TupleType::Full128)
        .flag(MASK),
    Row::one(0x2C, EVEX_Vscalefpd_ymm_k1z_ymm_ymmm256b64, V_H_W)
        .pp_66()
        .w1()
        .l256()
        .mem(Packed256_Float64)
        .bcst(Broadcast256_Float64)
        .tuple(TupleType::Full256)
        .flag(MASK),
    Row::one(0x2C, EVEX_Vscalefpd_zmm_k1z_zmm_zmmm512b64_er, V_H_W)
        .pp_66()
        .w1()
        .l512()
        .mem(Packed512_Float64)
        .bcst(Broadcast512_Float64)
        .tuple(TupleType::Full512)
        .flag(MASK | ER),
];

pub(crate) static ROWS_0F3A: &[Row] = &[
    Row::one(0x03, EVEX_Valignd_xmm_k1z_xmm_xmmm128b32_imm8, V_H_W_IB)
        .pp_66()
        .w0()
        .l128()
        .mem(Packed128_Int32)
        .bcst(Broadcast128_Int32)
        .tuple(TupleType::Full128)
        .flag(MASK),
    Row::one(0x03, EVEX_Valignd_ymm_k1z_ymm_ymmm256b32_imm8, V_H_W_IB)
        .pp_66()
        .w0()
        .l256()
        .mem(Packed256_Int32)
        .bcst(Broadcast256_Int32)
        .tuple(TupleType::Full256)
        .flag(MASK),
    Row::one(0x03, EVEX_Valignd_zmm_k1z_zmm_zmmm512b32_imm8, V_H_W_IB)
        .pp_66()
        .w0()
        .l512()
        .mem(Packed512_Int32)
        .bcst(Broadcast512_Int32)
        .tuple(TupleType::Full512)
        .flag(MASK),
    Row::one(0x03, EVEX_Valignq_xmm_k1z_xmm_xmmm128b64_imm8, V_H_W_IB)
        .pp_66()
        .w1()
        .l128()
        .mem(Packed128_Int64)
        .bcst(Broadcast128_Int64)
        .tuple(TupleType::Full128)
        .flag(MASK),
    Row::one(0x03, EVEX_Valignq_ymm_k1z_ymm_ymmm256b64_imm8, V_H_W_IB)
        .pp_66()
        .w1()
        .l256()
        .mem(Packed256_Int64)
        .bcst(Broadcast256_Int64)
        .tuple(TupleType::Full256)
        .flag(MASK),
    Row::one(0x03, EVEX_Valignq_zmm_k1z_zmm_zmmm512b64_imm8, V_H_W_IB)
        .pp_66()
        .w1()
        .l512()
        .mem(Packed512_Int64)
        .bcst(Broadcast512_Int64)
        .tuple(TupleType::Full512)
        .flag(MASK),
    Row::one(0x08, EVEX_Vrndscaleps_xmm_k1z_xmmm128b32_imm8, V_W_IB)
        .pp_66()
        .w0()
        .l128()
        .mem(Packed128_Float32)
        .bcst(Broadcast128_Float32)
        .tuple(TupleType::Full128)
        .flag(MASK),
    Row::one(0x08, EVEX_Vrndscaleps_ymm_k1z_ymmm256b32_imm8, V_W_IB)
        .pp_66()
        .w0()
        .l256()
        .mem(Packed256_Float32)
        .bcst(Broadcast256_Float32)
        .tuple(TupleType::Full256)
        .flag(MASK),
    Row::one(0x08, EVEX_Vrndscaleps_zmm_k1z_zmmm512b32_imm8_sae, V_W_IB)
        .pp_66()
        .w0()
        .l512()
        .mem(Packed512_Float32)
        .bcst(Broadcast512_Float32)
        .tuple(TupleType::Full512)
        .flag(MASK | SAE),
];
