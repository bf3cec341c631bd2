//! The 0F, 0F 38 and 0F 3A escape maps.
//!
//! SSE rows match on the mandatory prefix; when such a row wins, the
//! decoder undoes the prefix's legacy meaning (operand size or REP flag).

use oxdec_core::Code::*;
use oxdec_core::MemorySize::{self, *};

use super::entry_flags::{D64, F64, MEM_ONLY, ONLY64, REG_ONLY};
use super::OpSpec::{self, *};
use super::Row;

const NO_OPS: &[OpSpec] = &[];
const V_W: &[OpSpec] = &[V, W];
const W_V: &[OpSpec] = &[W, V];
const V_W_IB: &[OpSpec] = &[V, W, Ib];
const P_Q: &[OpSpec] = &[P, Q];
const P_Q_IB: &[OpSpec] = &[P, Q, Ib];
const GV_EV: &[OpSpec] = &[Gv, Ev];
const EV_GV: &[OpSpec] = &[Ev, Gv];

const MEM_V: [MemorySize; 3] = [UInt16, UInt32, UInt64];

pub(crate) static ROWS_0F: &[Row] = &[
    Row::one(0x05, Syscall, NO_OPS).flag(ONLY64),
    Row::one(0x0B, Ud2, NO_OPS),
    // MOVUPS/MOVUPD/MOVSS/MOVSD
    Row::one(0x10, Movups_xmm_xmmm128, V_W).pp_none().mem(Packed128_Float32),
    Row::one(0x10, Movupd_xmm_xmmm128, V_W).pp_66().mem(Packed128_Float64),
    Row::one(0x10, Movss_xmm_xmmm32, V_W).pp_f3().mem(Float32),
    Row::one(0x10, Movsd_xmm_xmmm64, V_W).pp_f2().mem(Float64),
    Row::one(0x11, Movups_xmmm128_xmm, W_V).pp_none().mem(Packed128_Float32),
    Row::one(0x11, Movupd_xmmm128_xmm, W_V).pp_66().mem(Packed128_Float64),
    Row::one(0x11, Movss_xmmm32_xmm, W_V).pp_f3().mem(Float32),
    Row::one(0x11, Movsd_xmmm64_xmm, W_V).pp_f2().mem(Float64),
    // Reserved NOP; all reg values decode the same way.
    Row::sized(0x1F, [Nop_rm16, Nop_rm32, Nop_rm64], &[Ev]).mem_sized(MEM_V),
    // MOVAPS/MOVAPD
    Row::one(0x28, Movaps_xmm_xmmm128, V_W).pp_none().mem(Packed128_Float32),
    Row::one(0x28, Movapd_xmm_xmmm128, V_W).pp_66().mem(Packed128_Float64),
    Row::one(0x29, Movaps_xmmm128_xmm, W_V).pp_none().mem(Packed128_Float32),
    Row::one(0x29, Movapd_xmmm128_xmm, W_V).pp_66().mem(Packed128_Float64),
    Row::one(0x2E, Ucomiss_xmm_xmmm32, V_W).pp_none().mem(Float32),
    Row::one(0x2E, Ucomisd_xmm_xmmm64, V_W).pp_66().mem(Float64),
    Row::one(0x2F, Comiss_xmm_xmmm32, V_W).pp_none().mem(Float32),
    Row::one(0x2F, Comisd_xmm_xmmm64, V_W).pp_66().mem(Float64),
    Row::one(0x31, Rdtsc, NO_OPS),
    // CMOVcc
    Row::sized(0x40, [Cmovo_r16_rm16, Cmovo_r32_rm32, Cmovo_r64_rm64], GV_EV).mem_sized(MEM_V),
    Row::sized(0x41, [Cmovno_r16_rm16, Cmovno_r32_rm32, Cmovno_r64_rm64], GV_EV)
        .mem_sized(MEM_V),
    Row::sized(0x42, [Cmovb_r16_rm16, Cmovb_r32_rm32, Cmovb_r64_rm64], GV_EV).mem_sized(MEM_V),
    Row::sized(0x43, [Cmovae_r16_rm16, Cmovae_r32_rm32, Cmovae_r64_rm64], GV_EV)
        .mem_sized(MEM_V),
    Row::sized(0x44, [Cmove_r16_rm16, Cmove_r32_rm32, Cmove_r64_rm64], GV_EV).mem_sized(MEM_V),
    Row::sized(0x45, [Cmovne_r16_rm16, Cmovne_r32_rm32, Cmovne_r64_rm64], GV_EV)
        .mem_sized(MEM_V),
    Row::sized(0x46, [Cmovbe_r16_rm16, Cmovbe_r32_rm32, Cmovbe_r64_rm64], GV_EV)
        .mem_sized(MEM_V),
    Row::sized(0x47, [Cmova_r16_rm16, Cmova_r32_rm32, Cmova_r64_rm64], GV_EV).mem_sized(MEM_V),
    Row::sized(0x48, [Cmovs_r16_rm16, Cmovs_r32_rm32, Cmovs_r64_rm64], GV_EV).mem_sized(MEM_V),
    Row::sized(0x49, [Cmovns_r16_rm16, Cmovns_r32_rm32, Cmovns_r64_rm64], GV_EV)
        .mem_sized(MEM_V),
    Row::sized(0x4A, [Cmovp_r16_rm16, Cmovp_r32_rm32, Cmovp_r64_rm64], GV_EV).mem_sized(MEM_V),
    Row::sized(0x4B, [Cmovnp_r16_rm16, Cmovnp_r32_rm32, Cmovnp_r64_rm64], GV_EV)
        .mem_sized(MEM_V),
    Row::sized(0x4C, [Cmovl_r16_rm16, Cmovl_r32_rm32, Cmovl_r64_rm64], GV_EV).mem_sized(MEM_V),
    Row::sized(0x4D, [Cmovge_r16_rm16, Cmovge_r32_rm32, Cmovge_r64_rm64], GV_EV)
        .mem_sized(MEM_V),
    Row::sized(0x4E, [Cmovle_r16_rm16, Cmovle_r32_rm32, Cmovle_r64_rm64], GV_EV)
        .mem_sized(MEM_V),
    Row::sized(0x4F, [Cmovg_r16_rm16, Cmovg_r32_rm32, Cmovg_r64_rm64], GV_EV).mem_sized(MEM_V),
    // Packed/scalar float arithmetic
    Row::one(0x51, Sqrtps_xmm_xmmm128, V_W).pp_none().mem(Packed128_Float32),
    Row::one(0x51, Sqrtpd_xmm_xmmm128, V_W).pp_66().mem(Packed128_Float64),
    Row::one(0x51, Sqrtss_xmm_xmmm32, V_W).pp_f3().mem(Float32),
    Row::one(0x51, Sqrtsd_xmm_xmmm64, V_W).pp_f2().mem(Float64),
    Row::one(0x54, Andps_xmm_xmmm128, V_W).pp_none().mem(Packed128_Float32),
    Row::one(0x54, Andpd_xmm_xmmm128, V_W).pp_66().mem(Packed128_Float64),
    Row::one(0x55, Andnps_xmm_xmmm128, V_W).pp_none().mem(Packed128_Float32),
    Row::one(0x55, Andnpd_xmm_xmmm128, V_W).pp_66().mem(Packed128_Float64),
    Row::one(0x56, Orps_xmm_xmmm128, V_W).pp_none().mem(Packed128_Float32),
    Row::one(0x56, Orpd_xmm_xmmm128, V_W).pp_66().mem(Packed128_Float64),
    Row::one(0x57, Xorps_xmm_xmmm128, V_W).pp_none().mem(Packed128_Float32),
    Row::one(0x57, Xorpd_xmm_xmmm128, V_W).pp_66().mem(Packed128_Float64),
    Row::one(0x58, Addps_xmm_xmmm128, V_W).pp_none().mem(Packed128_Float32),
    Row::one(0x58, Addpd_xmm_xmmm128, V_W).pp_66().mem(Packed128_Float64),
    Row::one(0x58, Addss_xmm_xmmm32, V_W).pp_f3().mem(Float32),
    Row::one(0x58, Addsd_xmm_xmmm64, V_W).pp_f2().mem(Float64),
    Row::one(0x59, Mulps_xmm_xmmm128, V_W).pp_none().mem(Packed128_Float32),
    Row::one(0x59, Mulpd_xmm_xmmm128, V_W).pp_66().mem(Packed128_Float64),
    Row::one(0x59, Mulss_xmm_xmmm32, V_W).pp_f3().mem(Float32),
    Row::one(0x59, Mulsd_xmm_xmmm64, V_W).pp_f2().mem(Float64),
    Row::one(0x5C, Subps_xmm_xmmm128, V_W).pp_none().mem(Packed128_Float32),
    Row::one(0x5C, Subpd_xmm_xmmm128, V_W).pp_66().mem(Packed128_Float64),
    Row::one(0x5C, Subss_xmm_xmmm32, V_W).pp_f3().mem(Float32),
    Row::one(0x5C, Subsd_xmm_xmmm64, V_W).pp_f2().mem(Float64),
    Row::one(0x5D, Minps_xmm_xmmm128, V_W).pp_none().mem(Packed128_Float32),
    Row::one(0x5D, Minpd_xmm_xmmm128, V_W).pp_66().mem(Packed128_Float64),
    Row::one(0x5D, Minss_xmm_xmmm32, V_W).pp_f3().mem(Float32),
    Row::one(0x5D, Minsd_xmm_xmmm64, V_W).pp_f2().mem(Float64),
    Row::one(0x5E, Divps_xmm_xmmm128, V_W).pp_none().mem(Packed128_Float32),
    Row::one(0x5E, Divpd_xmm_xmmm128, V_W).pp_66().mem(Packed128_Float64),
    Row::one(0x5E, Divss_xmm_xmmm32, V_W).pp_f3().mem(Float32),
    Row::one(0x5E, Divsd_xmm_xmmm64, V_W).pp_f2().mem(Float64),
    Row::one(0x5F, Maxps_xmm_xmmm128, V_W).pp_none().mem(Packed128_Float32),
    Row::one(0x5F, Maxpd_xmm_xmmm128, V_W).pp_66().mem(Packed128_Float64),
    Row::one(0x5F, Maxss_xmm_xmmm32, V_W).pp_f3().mem(Float32),
    Row::one(0x5F, Maxsd_xmm_xmmm64, V_W).pp_f2().mem(Float64),
    // MOVD/MOVQ between GPRs and MMX/XMM
    Row::one(0x6E, Movd_mm_rm32, &[P, Ed]).pp_none().w0().mem(UInt32),
    Row::one(0x6E, Movq_mm_rm64, &[P, Eq]).pp_none().w1().mem(UInt64).flag(ONLY64),
    Row::one(0x6E, Movd_xmm_rm32, &[V, Ed]).pp_66().w0().mem(UInt32),
    Row::one(0x6E, Movq_xmm_rm64, &[V, Eq]).pp_66().w1().mem(UInt64).flag(ONLY64),
    Row::one(0x6F, Movq_mm_mmm64, P_Q).pp_none().mem(UInt64),
    Row::one(0x6F, Movdqa_xmm_xmmm128, V_W).pp_66().mem(UInt128),
    Row::one(0x6F, Movdqu_xmm_xmmm128, V_W).pp_f3().mem(UInt128),
    Row::one(0x70, Pshufw_mm_mmm64_imm8, P_Q_IB).pp_none().mem(Packed64_Int16),
    Row::one(0x70, Pshufd_xmm_xmmm128_imm8, V_W_IB).pp_66().mem(Packed128_Int32),
    Row::one(0x70, Pshufhw_xmm_xmmm128_imm8, V_W_IB).pp_f3().mem(Packed128_Int16),
    Row::one(0x70, Pshuflw_xmm_xmmm128_imm8, V_W_IB).pp_f2().mem(Packed128_Int16),
    Row::one(0x74, Pcmpeqb_mm_mmm64, P_Q).pp_none().mem(Packed64_Int8),
    Row::one(0x74, Pcmpeqb_xmm_xmmm128, V_W).pp_66().mem(Packed128_Int8),
    Row::one(0x77, Emms, NO_OPS).pp_none(),
    Row::one(0x7E, Movd_rm32_mm, &[Ed, P]).pp_none().w0().mem(UInt32),
    Row::one(0x7E, Movq_rm64_mm, &[Eq, P]).pp_none().w1().mem(UInt64).flag(ONLY64),
    Row::one(0x7E, Movd_rm32_xmm, &[Ed, V]).pp_66().w0().mem(UInt32),
    Row::one(0x7E, Movq_rm64_xmm, &[Eq, V]).pp_66().w1().mem(UInt64).flag(ONLY64),
    Row::one(0x7E, Movq_xmm_xmmm64, V_W).pp_f3().mem(UInt64),
    Row::one(0x7F, Movq_mmm64_mm, &[Q, P]).pp_none().mem(UInt64),
    Row::one(0x7F, Movdqa_xmmm128_xmm, W_V).pp_66().mem(UInt128),
    Row::one(0x7F, Movdqu_xmmm128_xmm, W_V).pp_f3().mem(UInt128),
    // Jcc rel16/32
    Row::sized(0x80, [Jo_rel16, Jo_rel32_32, Jo_rel32_64], &[Jz]).flag(F64),
    Row::sized(0x81, [Jno_rel16, Jno_rel32_32, Jno_rel32_64], &[Jz]).flag(F64),
    Row::sized(0x82, [Jb_rel16, Jb_rel32_32, Jb_rel32_64], &[Jz]).flag(F64),
    Row::sized(0x83, [Jae_rel16, Jae_rel32_32, Jae_rel32_64], &[Jz]).flag(F64),
    Row::sized(0x84, [Je_rel16, Je_rel32_32, Je_rel32_64], &[Jz]).flag(F64),
    Row::sized(0x85, [Jne_rel16, Jne_rel32_32, Jne_rel32_64], &[Jz]).flag(F64),
    Row::sized(0x86, [Jbe_rel16, Jbe_rel32_32, Jbe_rel32_64], &[Jz]).flag(F64),
    Row::sized(0x87, [Ja_rel16, Ja_rel32_32, Ja_rel32_64], &[Jz]).flag(F64),
    Row::sized(0x88, [Js_rel16, Js_rel32_32, Js_rel32_64], &[Jz]).flag(F64),
    Row::sized(0x89, [Jns_rel16, Jns_rel32_32, Jns_rel32_64], &[Jz]).flag(F64),
    Row::sized(0x8A, [Jp_rel16, Jp_rel32_32, Jp_rel32_64], &[Jz]).flag(F64),
    Row::sized(0x8B, [Jnp_rel16, Jnp_rel32_32, Jnp_rel32_64], &[Jz]).flag(F64),
    Row::sized(0x8C, [Jl_rel16, Jl_rel32_32, Jl_rel32_64], &[Jz]).flag(F64),
    Row::sized(0x8D, [Jge_rel16, Jge_rel32_32, Jge_rel32_64], &[Jz]).flag(F64),
    Row::sized(0x8E, [Jle_rel16, Jle_rel32_32, Jle_rel32_64], &[Jz]).flag(F64),
    Row::sized(0x8F, [Jg_rel16, Jg_rel32_32, Jg_rel32_64], &[Jz]).flag(F64),
    // SETcc
    Row::one(0x90, Seto_rm8, &[Eb]).mem(UInt8),
    Row::one(0x91, Setno_rm8, &[Eb]).mem(UInt8),
    Row::one(0x92, Setb_rm8, &[Eb]).mem(UInt8),
    Row::one(0x93, Setae_rm8, &[Eb]).mem(UInt8),
    Row::one(0x94, Sete_rm8, &[Eb]).mem(UInt8),
    Row::one(0x95, Setne_rm8, &[Eb]).mem(UInt8),
    Row::one(0x96, Setbe_rm8, &[Eb]).mem(UInt8),
    Row::one(0x97, Seta_rm8, &[Eb]).mem(UInt8),
    Row::one(0x98, Sets_rm8, &[Eb]).mem(UInt8),
    Row::one(0x99, Setns_rm8, &[Eb]).mem(UInt8),
    Row::one(0x9A, Setp_rm8, &[Eb]).mem(UInt8),
    Row::one(0x9B, Setnp_rm8, &[Eb]).mem(UInt8),
    Row::one(0x9C, Setl_rm8, &[Eb]).mem(UInt8),
    Row::one(0x9D, Setge_rm8, &[Eb]).mem(UInt8),
    Row::one(0x9E, Setle_rm8, &[Eb]).mem(UInt8),
    Row::one(0x9F, Setg_rm8, &[Eb]).mem(UInt8),
    Row::sized(0xA0, [Pushw_FS, Pushd_FS, Pushq_FS], &[Seg(oxdec_core::Register::FS)])
        .flag(D64),
    Row::sized(0xA1, [Popw_FS, Popd_FS, Popq_FS], &[Seg(oxdec_core::Register::FS)]).flag(D64),
    Row::one(0xA2, Cpuid, NO_OPS),
    Row::sized(0xA3, [Bt_rm16_r16, Bt_rm32_r32, Bt_rm64_r64], EV_GV).mem_sized(MEM_V),
    Row::sized(0xA4, [Shld_rm16_r16_imm8, Shld_rm32_r32_imm8, Shld_rm64_r64_imm8], &[Ev, Gv, Ib])
        .mem_sized(MEM_V),
    Row::sized(0xA5, [Shld_rm16_r16_CL, Shld_rm32_r32_CL, Shld_rm64_r64_CL], &[Ev, Gv, Cl])
        .mem_sized(MEM_V),
    Row::sized(0xA8, [Pushw_GS, Pushd_GS, Pushq_GS], &[Seg(oxdec_core::Register::GS)])
        .flag(D64),
    Row::sized(0xA9, [Popw_GS, Popd_GS, Popq_GS], &[Seg(oxdec_core::Register::GS)]).flag(D64),
    Row::sized(0xAB, [Bts_rm16_r16, Bts_rm32_r32, Bts_rm64_r64], EV_GV).mem_sized(MEM_V),
    Row::sized(0xAC, [Shrd_rm16_r16_imm8, Shrd_rm32_r32_imm8, Shrd_rm64_r64_imm8], &[Ev, Gv, Ib])
        .mem_sized(MEM_V),
    Row::sized(0xAD, [Shrd_rm16_r16_CL, Shrd_rm32_r32_CL, Shrd_rm64_r64_CL], &[Ev, Gv, Cl])
        .mem_sized(MEM_V),
    // Group 15: MXCSR loads/stores and fences.
    Row::one(0xAE, Ldmxcsr_m32, &[M]).pp_none().reg(2).mem(UInt32).flag(MEM_ONLY),
    Row::one(0xAE, Stmxcsr_m32, &[M]).pp_none().reg(3).mem(UInt32).flag(MEM_ONLY),
    Row::one(0xAE, Lfence, NO_OPS).pp_none().reg(5).flag(REG_ONLY),
    Row::one(0xAE, Mfence, NO_OPS).pp_none().reg(6).flag(REG_ONLY),
    Row::one(0xAE, Sfence, NO_OPS).pp_none().reg(7).flag(REG_ONLY),
    Row::sized(0xAF, [Imul_r16_rm16, Imul_r32_rm32, Imul_r64_rm64], GV_EV).mem_sized(MEM_V),
    Row::one(0xB0, Cmpxchg_rm8_r8, &[Eb, Gb]).mem(UInt8),
    Row::sized(0xB1, [Cmpxchg_rm16_r16, Cmpxchg_rm32_r32, Cmpxchg_rm64_r64], EV_GV)
        .mem_sized(MEM_V),
    Row::sized(0xB6, [Movzx_r16_rm8, Movzx_r32_rm8, Movzx_r64_rm8], &[Gv, Eb]).mem(UInt8),
    Row::sized(0xB7, [Movzx_r16_rm16, Movzx_r32_rm16, Movzx_r64_rm16], &[Gv, Ew]).mem(UInt16),
    Row::sized(0xB8, [Popcnt_r16_rm16, Popcnt_r32_rm32, Popcnt_r64_rm64], GV_EV)
        .pp_f3()
        .mem_sized(MEM_V),
    // Group 8
    Row::sized(0xBA, [Bt_rm16_imm8, Bt_rm32_imm8, Bt_rm64_imm8], &[Ev, Ib])
        .reg(4)
        .mem_sized(MEM_V),
    Row::sized(0xBA, [Bts_rm16_imm8, Bts_rm32_imm8, Bts_rm64_imm8], &[Ev, Ib])
        .reg(5)
        .mem_sized(MEM_V),
    Row::sized(0xBA, [Btr_rm16_imm8, Btr_rm32_imm8, Btr_rm64_imm8], &[Ev, Ib])
        .reg(6)
        .mem_sized(MEM_V),
    Row::sized(0xBA, [Btc_rm16_imm8, Btc_rm32_imm8, Btc_rm64_imm8], &[Ev, Ib])
        .reg(7)
        .mem_sized(MEM_V),
    Row::sized(0xB3, [Btr_rm16_r16, Btr_rm32_r32, Btr_rm64_r64], EV_GV).mem_sized(MEM_V),
    Row::sized(0xBB, [Btc_rm16_r16, Btc_rm32_r32, Btc_rm64_r64], EV_GV).mem_sized(MEM_V),
    Row::sized(0xBC, [Bsf_r16_rm16, Bsf_r32_rm32, Bsf_r64_rm64], GV_EV).mem_sized(MEM_V),
    Row::sized(0xBC, [Tzcnt_r16_rm16, Tzcnt_r32_rm32, Tzcnt_r64_rm64], GV_EV)
        .pp_f3()
        .mem_sized(MEM_V),
    Row::sized(0xBD, [Bsr_r16_rm16, Bsr_r32_rm32, Bsr_r64_rm64], GV_EV).mem_sized(MEM_V),
    Row::sized(0xBD, [Lzcnt_r16_rm16, Lzcnt_r32_rm32, Lzcnt_r64_rm64], GV_EV)
        .pp_f3()
        .mem_sized(MEM_V),
    Row::sized(0xBE, [Movsx_r16_rm8, Movsx_r32_rm8, Movsx_r64_rm8], &[Gv, Eb]).mem(Int8),
    Row::sized(0xBF, [Movsx_r16_rm16, Movsx_r32_rm16, Movsx_r64_rm16], &[Gv, Ew]).mem(Int16),
    Row::one(0xC0, Xadd_rm8_r8, &[Eb, Gb]).mem(UInt8),
    Row::sized(0xC1, [Xadd_rm16_r16, Xadd_rm32_r32, Xadd_rm64_r64], EV_GV).mem_sized(MEM_V),
    Row::one(0xC2, Cmpps_xmm_xmmm128_imm8, V_W_IB).pp_none().mem(Packed128_Float32),
    Row::one(0xC2, Cmppd_xmm_xmmm128_imm8, V_W_IB).pp_66().mem(Packed128_Float64),
    Row::one(0xC2, Cmpss_xmm_xmmm32_imm8, V_W_IB).pp_f3().mem(Float32),
    Row::one(0xC2, Cmpsd_xmm_xmmm64_imm8, V_W_IB).pp_f2().mem(Float64),
    Row::one(0xC6, Shufps_xmm_xmmm128_imm8, V_W_IB).pp_none().mem(Packed128_Float32),
    Row::one(0xC6, Shufpd_xmm_xmmm128_imm8, V_W_IB).pp_66().mem(Packed128_Float64),
    // Group 9
    Row::one(0xC7, Cmpxchg8b_m64, &[M]).reg(1).w0().mem(UInt64).flag(MEM_ONLY),
    Row::one(0xC7, Cmpxchg16b_m128, &[M])
        .reg(1)
        .w1()
        .mem(UInt128)
        .flag(MEM_ONLY | ONLY64),
    Row::sized(0xC7, [Rdrand_r16, Rdrand_r32, Rdrand_r64], &[Ev]).reg(6).flag(REG_ONLY),
    Row::sized(0xC7, [Rdseed_r16, Rdseed_r32, Rdseed_r64], &[Ev]).reg(7).flag(REG_ONLY),
    // BSWAP
    Row::sized(0xC8, [Bswap_r16, Bswap_r32, Bswap_r64], &[OpRegV]),
    Row::sized(0xC9, [Bswap_r16, Bswap_r32, Bswap_r64], &[OpRegV]),
    Row::sized(0xCA, [Bswap_r16, Bswap_r32, Bswap_r64], &[OpRegV]),
    Row::sized(0xCB, [Bswap_r16, Bswap_r32, Bswap_r64], &[OpRegV]),
    Row::sized(0xCC, [Bswap_r16, Bswap_r32, Bswap_r64], &[OpRegV]),
    Row::sized(0xCD, [Bswap_r16, Bswap_r32, Bswap_r64], &[OpRegV]),
    Row::sized(0xCE, [Bswap_r16, Bswap_r32, Bswap_r64], &[OpRegV]),
    Row::sized(0xCF, [Bswap_r16, Bswap_r32, Bswap_r64], &[OpRegV]),
    Row::one(0xD6, Movq_xmmm64_xmm, W_V).pp_66().mem(UInt64),
    Row::one(0xEF, Pxor_mm_mmm64, P_Q).pp_none().mem(UInt64),
    Row::one(0xEF, Pxor_xmm_xmmm128, V_W).pp_66().mem(UInt128),
];

pub(crate) static ROWS_0F38: &[Row] = &[
    Row::one(0x00, Pshufb_mm_mmm64, P_Q).pp_none().mem(Packed64_Int8),
    Row::one(0x00, Pshufb_xmm_xmmm128, V_W).pp_66().mem(Packed128_Int8),
    Row::one(0x28, Pmuldq_xmm_xmmm128, V_W).pp_66().mem(Packed128_Int32),
    Row::one(0x29, Pcmpeqq_xmm_xmmm128, V_W).pp_66().mem(Packed128_Int64),
    Row::sized(0xF0, [Movbe_r16_m16, Movbe_r32_m32, Movbe_r64_m64], GV_EV)
        .mem_sized(MEM_V)
        .flag(MEM_ONLY),
    Row::sized(0xF1, [Movbe_m16_r16, Movbe_m32_r32, Movbe_m64_r64], EV_GV)
        .mem_sized(MEM_V)
        .flag(MEM_ONLY),
];

pub(crate) static ROWS_0F3A: &[Row] = &[
    Row::one(0x0C, Blendps_xmm_xmmm128_imm8, V_W_IB).pp_66().mem(Packed128_Float32),
    Row::one(0x0D, Blendpd_xmm_xmmm128_imm8, V_W_IB).pp_66().mem(Packed128_Float64),
    Row::one(0x0F, Palignr_mm_mmm64_imm8, P_Q_IB).pp_none().mem(Packed64_Int8),
    Row::one(0x0F, Palignr_xmm_xmmm128_imm8, V_W_IB).pp_66().mem(Packed128_Int8),
    Row::one(0x44, Pclmulqdq_xmm_xmmm128_imm8, V_W_IB).pp_66().mem(Packed128_Int64),
];
