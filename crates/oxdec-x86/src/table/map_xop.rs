//! The XOP opcode maps (8F prefix, map selectors 8-10).

use oxdec_core::Code::*;
use oxdec_core::MemorySize::*;

use super::OpSpec::{self, *};
use super::Row;

const V_H_W_IS4: &[OpSpec] = &[V, H, W, Is4];

pub(crate) static ROWS_8: &[Row] = &[
    Row::one(0x85, XOP_Vpmacssww_xmm_xmm_xmmm128_xmm, V_H_W_IS4)
        .pp_none()
        .w0()
        .l128()
        .mem(Packed128_Int16),
    Row::one(0x86, XOP_Vpmacsswd_xmm_xmm_xmmm128_xmm, V_H_W_IS4)
        .pp_none()
        .w0()
        .l128()
        .mem(Packed128_Int16),
    Row::one(0xA2, XOP_Vpcmov_xmm_xmm_xmmm128_xmm, V_H_W_IS4)
        .pp_none()
        .w0()
        .l128()
        .mem(UInt128),
    Row::one(0xA2, XOP_Vpcmov_ymm_ymm_ymmm256_ymm, V_H_W_IS4)
        .pp_none()
        .w0()
        .l256()
        .mem(UInt256),
];

pub(crate) static ROWS_9: &[Row] = &[
    // TBM group
    Row::sized(0x01, [Blcfill_r32_rm32, Blcfill_r32_rm32, Blcfill_r64_rm64], &[Hv, Ev])
        .pp_none()
        .reg(1)
        .l128()
        .mem_sized([UInt32, UInt32, UInt64]),
    Row::sized(0x01, [Blsfill_r32_rm32, Blsfill_r32_rm32, Blsfill_r64_rm64], &[Hv, Ev])
        .pp_none()
        .reg(2)
        .l128()
        .mem_sized([UInt32, UInt32, UInt64]),
    Row::one(0x90, XOP_Vprotb_xmm_xmmm128_xmm, &[V, W, H])
        .pp_none()
        .w0()
        .l128()
        .mem(Packed128_Int8),
];

pub(crate) static ROWS_A: &[Row] = &[
    Row::sized(0x10, [Bextr_r32_rm32_imm32, Bextr_r32_rm32_imm32, Bextr_r64_rm64_imm32], &[
        Gv, Ev, Iz,
    ])
    .pp_none()
    .l128()
    .mem_sized([UInt32, UInt32, UInt64]),
];
