//! Instruction identities.

/// Identity of a decoded instruction.
///
/// One variant per encoding form: register width, operand shape and
/// encoding family (legacy/VEX/XOP/EVEX/3DNow!) all distinguish variants,
/// mirroring how the opcode tables are keyed. `INVALID` is the sentinel
/// for undefined or malformed encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
#[allow(non_camel_case_types)]
#[allow(missing_docs)]
pub enum Code {
    /// Not a valid instruction.
    #[default]
    INVALID = 0,


    // Legacy, SSE and BMI encodings
    Aaa,
    Aad_imm8,
    Aam_imm8,
    Aas,
    Adc_AL_imm8,
    Adc_AX_imm16,
    Adc_EAX_imm32,
    Adc_r16_rm16,
    Adc_r32_rm32,
    Adc_r64_rm64,
    Adc_r8_rm8,
    Adc_RAX_imm32,
    Adc_rm16_imm16,
    Adc_rm16_imm8,
    Adc_rm16_r16,
    Adc_rm32_imm32,
    Adc_rm32_imm8,
    Adc_rm32_r32,
    Adc_rm64_imm32,
    Adc_rm64_imm8,
    Adc_rm64_r64,
    Adc_rm8_imm8,
    Adc_rm8_r8,
    Add_AL_imm8,
    Add_AX_imm16,
    Add_EAX_imm32,
    Add_r16_rm16,
    Add_r32_rm32,
    Add_r64_rm64,
    Add_r8_rm8,
    Add_RAX_imm32,
    Add_rm16_imm16,
    Add_rm16_imm8,
    Add_rm16_r16,
    Add_rm32_imm32,
    Add_rm32_imm8,
    Add_rm32_r32,
    Add_rm64_imm32,
    Add_rm64_imm8,
    Add_rm64_r64,
    Add_rm8_imm8,
    Add_rm8_r8,
    Addpd_xmm_xmmm128,
    Addps_xmm_xmmm128,
    Addsd_xmm_xmmm64,
    Addss_xmm_xmmm32,
    And_AL_imm8,
    And_AX_imm16,
    And_EAX_imm32,
    And_r16_rm16,
    And_r32_rm32,
    And_r64_rm64,
    And_r8_rm8,
    And_RAX_imm32,
    And_rm16_imm16,
    And_rm16_imm8,
    And_rm16_r16,
    And_rm32_imm32,
    And_rm32_imm8,
    And_rm32_r32,
    And_rm64_imm32,
    And_rm64_imm8,
    And_rm64_r64,
    And_rm8_imm8,
    And_rm8_r8,
    Andn_r32_r32_rm32,
    Andn_r64_r64_rm64,
    Andnpd_xmm_xmmm128,
    Andnps_xmm_xmmm128,
    Andpd_xmm_xmmm128,
    Andps_xmm_xmmm128,
    Arpl_rm16_r16,
    Bextr_r32_rm32_imm32,
    Bextr_r32_rm32_r32,
    Bextr_r64_rm64_imm32,
    Bextr_r64_rm64_r64,
    Blcfill_r32_rm32,
    Blcfill_r64_rm64,
    Blendpd_xmm_xmmm128_imm8,
    Blendps_xmm_xmmm128_imm8,
    Blsfill_r32_rm32,
    Blsfill_r64_rm64,
    Blsi_r32_rm32,
    Blsi_r64_rm64,
    Blsmsk_r32_rm32,
    Blsmsk_r64_rm64,
    Blsr_r32_rm32,
    Blsr_r64_rm64,
    Bound_r16_m1616,
    Bound_r32_m3232,
    Bsf_r16_rm16,
    Bsf_r32_rm32,
    Bsf_r64_rm64,
    Bsr_r16_rm16,
    Bsr_r32_rm32,
    Bsr_r64_rm64,
    Bswap_r16,
    Bswap_r32,
    Bswap_r64,
    Bt_rm16_imm8,
    Bt_rm16_r16,
    Bt_rm32_imm8,
    Bt_rm32_r32,
    Bt_rm64_imm8,
    Bt_rm64_r64,
    Btc_rm16_imm8,
    Btc_rm16_r16,
    Btc_rm32_imm8,
    Btc_rm32_r32,
    Btc_rm64_imm8,
    Btc_rm64_r64,
    Btr_rm16_imm8,
    Btr_rm16_r16,
    Btr_rm32_imm8,
    Btr_rm32_r32,
    Btr_rm64_imm8,
    Btr_rm64_r64,
    Bts_rm16_imm8,
    Bts_rm16_r16,
    Bts_rm32_imm8,
    Bts_rm32_r32,
    Bts_rm64_imm8,
    Bts_rm64_r64,
    Bzhi_r32_rm32_r32,
    Bzhi_r64_rm64_r64,
    Call_rel16,
    Call_rel32_32,
    Call_rel32_64,
    Call_rm16,
    Call_rm32,
    Call_rm64,
    Cbw,
    Cdq,
    Cdqe,
    Clc,
    Cld,
    Cli,
    Cmc,
    Cmova_r16_rm16,
    Cmova_r32_rm32,
    Cmova_r64_rm64,
    Cmovae_r16_rm16,
    Cmovae_r32_rm32,
    Cmovae_r64_rm64,
    Cmovb_r16_rm16,
    Cmovb_r32_rm32,
    Cmovb_r64_rm64,
    Cmovbe_r16_rm16,
    Cmovbe_r32_rm32,
    Cmovbe_r64_rm64,
    Cmove_r16_rm16,
    Cmove_r32_rm32,
    Cmove_r64_rm64,
    Cmovg_r16_rm16,
    Cmovg_r32_rm32,
    Cmovg_r64_rm64,
    Cmovge_r16_rm16,
    Cmovge_r32_rm32,
    Cmovge_r64_rm64,
    Cmovl_r16_rm16,
    Cmovl_r32_rm32,
    Cmovl_r64_rm64,
    Cmovle_r16_rm16,
    Cmovle_r32_rm32,
    Cmovle_r64_rm64,
    Cmovne_r16_rm16,
    Cmovne_r32_rm32,
    Cmovne_r64_rm64,
    Cmovno_r16_rm16,
    Cmovno_r32_rm32,
    Cmovno_r64_rm64,
    Cmovnp_r16_rm16,
    Cmovnp_r32_rm32,
    Cmovnp_r64_rm64,
    Cmovns_r16_rm16,
    Cmovns_r32_rm32,
    Cmovns_r64_rm64,
    Cmovo_r16_rm16,
    Cmovo_r32_rm32,
    Cmovo_r64_rm64,
    Cmovp_r16_rm16,
    Cmovp_r32_rm32,
    Cmovp_r64_rm64,
    Cmovs_r16_rm16,
    Cmovs_r32_rm32,
    Cmovs_r64_rm64,
    Cmp_AL_imm8,
    Cmp_AX_imm16,
    Cmp_EAX_imm32,
    Cmp_r16_rm16,
    Cmp_r32_rm32,
    Cmp_r64_rm64,
    Cmp_r8_rm8,
    Cmp_RAX_imm32,
    Cmp_rm16_imm16,
    Cmp_rm16_imm8,
    Cmp_rm16_r16,
    Cmp_rm32_imm32,
    Cmp_rm32_imm8,
    Cmp_rm32_r32,
    Cmp_rm64_imm32,
    Cmp_rm64_imm8,
    Cmp_rm64_r64,
    Cmp_rm8_imm8,
    Cmp_rm8_r8,
    Cmppd_xmm_xmmm128_imm8,
    Cmpps_xmm_xmmm128_imm8,
    Cmpsb_m8_m8,
    Cmpsd_m32_m32,
    Cmpsd_xmm_xmmm64_imm8,
    Cmpsq_m64_m64,
    Cmpss_xmm_xmmm32_imm8,
    Cmpsw_m16_m16,
    Cmpxchg16b_m128,
    Cmpxchg8b_m64,
    Cmpxchg_rm16_r16,
    Cmpxchg_rm32_r32,
    Cmpxchg_rm64_r64,
    Cmpxchg_rm8_r8,
    Comisd_xmm_xmmm64,
    Comiss_xmm_xmmm32,
    Cpuid,
    Cqo,
    Cwd,
    Cwde,
    Daa,
    Das,
    Dec_r16,
    Dec_r32,
    Dec_rm16,
    Dec_rm32,
    Dec_rm64,
    Dec_rm8,
    Div_rm16,
    Div_rm32,
    Div_rm64,
    Div_rm8,
    Divpd_xmm_xmmm128,
    Divps_xmm_xmmm128,
    Divsd_xmm_xmmm64,
    Divss_xmm_xmmm32,
    Emms,
    Enterd_imm16_imm8,
    Enterq_imm16_imm8,
    Enterw_imm16_imm8,
    Hlt,
    Idiv_rm16,
    Idiv_rm32,
    Idiv_rm64,
    Idiv_rm8,
    Imul_r16_rm16,
    Imul_r16_rm16_imm16,
    Imul_r16_rm16_imm8,
    Imul_r32_rm32,
    Imul_r32_rm32_imm32,
    Imul_r32_rm32_imm8,
    Imul_r64_rm64,
    Imul_r64_rm64_imm32,
    Imul_r64_rm64_imm8,
    Imul_rm16,
    Imul_rm32,
    Imul_rm64,
    Imul_rm8,
    In_AL_DX,
    In_AL_imm8,
    In_AX_DX,
    In_AX_imm8,
    In_EAX_DX,
    In_EAX_imm8,
    Inc_r16,
    Inc_r32,
    Inc_rm16,
    Inc_rm32,
    Inc_rm64,
    Inc_rm8,
    Insb_m8_DX,
    Insd_m32_DX,
    Insw_m16_DX,
    Int3,
    Int_imm8,
    Into,
    Iretd,
    Iretq,
    Iretw,
    Ja_rel16,
    Ja_rel32_32,
    Ja_rel32_64,
    Ja_rel8_16,
    Ja_rel8_32,
    Ja_rel8_64,
    Jae_rel16,
    Jae_rel32_32,
    Jae_rel32_64,
    Jae_rel8_16,
    Jae_rel8_32,
    Jae_rel8_64,
    Jb_rel16,
    Jb_rel32_32,
    Jb_rel32_64,
    Jb_rel8_16,
    Jb_rel8_32,
    Jb_rel8_64,
    Jbe_rel16,
    Jbe_rel32_32,
    Jbe_rel32_64,
    Jbe_rel8_16,
    Jbe_rel8_32,
    Jbe_rel8_64,
    Jcxz_rel8,
    Je_rel16,
    Je_rel32_32,
    Je_rel32_64,
    Je_rel8_16,
    Je_rel8_32,
    Je_rel8_64,
    Jecxz_rel8,
    Jg_rel16,
    Jg_rel32_32,
    Jg_rel32_64,
    Jg_rel8_16,
    Jg_rel8_32,
    Jg_rel8_64,
    Jge_rel16,
    Jge_rel32_32,
    Jge_rel32_64,
    Jge_rel8_16,
    Jge_rel8_32,
    Jge_rel8_64,
    Jl_rel16,
    Jl_rel32_32,
    Jl_rel32_64,
    Jl_rel8_16,
    Jl_rel8_32,
    Jl_rel8_64,
    Jle_rel16,
    Jle_rel32_32,
    Jle_rel32_64,
    Jle_rel8_16,
    Jle_rel8_32,
    Jle_rel8_64,
    Jmp_rel16,
    Jmp_rel32_32,
    Jmp_rel32_64,
    Jmp_rel8_16,
    Jmp_rel8_32,
    Jmp_rel8_64,
    Jmp_rm16,
    Jmp_rm32,
    Jmp_rm64,
    Jne_rel16,
    Jne_rel32_32,
    Jne_rel32_64,
    Jne_rel8_16,
    Jne_rel8_32,
    Jne_rel8_64,
    Jno_rel16,
    Jno_rel32_32,
    Jno_rel32_64,
    Jno_rel8_16,
    Jno_rel8_32,
    Jno_rel8_64,
    Jnp_rel16,
    Jnp_rel32_32,
    Jnp_rel32_64,
    Jnp_rel8_16,
    Jnp_rel8_32,
    Jnp_rel8_64,
    Jns_rel16,
    Jns_rel32_32,
    Jns_rel32_64,
    Jns_rel8_16,
    Jns_rel8_32,
    Jns_rel8_64,
    Jo_rel16,
    Jo_rel32_32,
    Jo_rel32_64,
    Jo_rel8_16,
    Jo_rel8_32,
    Jo_rel8_64,
    Jp_rel16,
    Jp_rel32_32,
    Jp_rel32_64,
    Jp_rel8_16,
    Jp_rel8_32,
    Jp_rel8_64,
    Jrcxz_rel8,
    Js_rel16,
    Js_rel32_32,
    Js_rel32_64,
    Js_rel8_16,
    Js_rel8_32,
    Js_rel8_64,
    Lahf,
    Ldmxcsr_m32,
    Lds_r16_m1616,
    Lds_r32_m1632,
    Lea_r16_m,
    Lea_r32_m,
    Lea_r64_m,
    Leaved,
    Leaveq,
    Leavew,
    Les_r16_m1616,
    Les_r32_m1632,
    Lfence,
    Lodsb_AL_m8,
    Lodsd_EAX_m32,
    Lodsq_RAX_m64,
    Lodsw_AX_m16,
    Loop_rel8,
    Loope_rel8,
    Loopne_rel8,
    Lzcnt_r16_rm16,
    Lzcnt_r32_rm32,
    Lzcnt_r64_rm64,
    Maxpd_xmm_xmmm128,
    Maxps_xmm_xmmm128,
    Maxsd_xmm_xmmm64,
    Maxss_xmm_xmmm32,
    Mfence,
    Minpd_xmm_xmmm128,
    Minps_xmm_xmmm128,
    Minsd_xmm_xmmm64,
    Minss_xmm_xmmm32,
    Mov_AL_moffs8,
    Mov_AX_moffs16,
    Mov_EAX_moffs32,
    Mov_moffs16_AX,
    Mov_moffs32_EAX,
    Mov_moffs64_RAX,
    Mov_moffs8_AL,
    Mov_r16_imm16,
    Mov_r16_rm16,
    Mov_r32_imm32,
    Mov_r32_rm32,
    Mov_r64_imm64,
    Mov_r64_rm64,
    Mov_r8_imm8,
    Mov_r8_rm8,
    Mov_RAX_moffs64,
    Mov_rm16_imm16,
    Mov_rm16_r16,
    Mov_rm16_Sreg,
    Mov_rm32_imm32,
    Mov_rm32_r32,
    Mov_rm32_Sreg,
    Mov_rm64_imm32,
    Mov_rm64_r64,
    Mov_rm64_Sreg,
    Mov_rm8_imm8,
    Mov_rm8_r8,
    Mov_Sreg_rm16,
    Mov_Sreg_rm32,
    Mov_Sreg_rm64,
    Movapd_xmm_xmmm128,
    Movapd_xmmm128_xmm,
    Movaps_xmm_xmmm128,
    Movaps_xmmm128_xmm,
    Movbe_m16_r16,
    Movbe_m32_r32,
    Movbe_m64_r64,
    Movbe_r16_m16,
    Movbe_r32_m32,
    Movbe_r64_m64,
    Movd_mm_rm32,
    Movd_rm32_mm,
    Movd_rm32_xmm,
    Movd_xmm_rm32,
    Movdqa_xmm_xmmm128,
    Movdqa_xmmm128_xmm,
    Movdqu_xmm_xmmm128,
    Movdqu_xmmm128_xmm,
    Movq_mm_mmm64,
    Movq_mm_rm64,
    Movq_mmm64_mm,
    Movq_rm64_mm,
    Movq_rm64_xmm,
    Movq_xmm_rm64,
    Movq_xmm_xmmm64,
    Movq_xmmm64_xmm,
    Movsb_m8_m8,
    Movsd_m32_m32,
    Movsd_xmm_xmmm64,
    Movsd_xmmm64_xmm,
    Movsq_m64_m64,
    Movss_xmm_xmmm32,
    Movss_xmmm32_xmm,
    Movsw_m16_m16,
    Movsx_r16_rm16,
    Movsx_r16_rm8,
    Movsx_r32_rm16,
    Movsx_r32_rm8,
    Movsx_r64_rm16,
    Movsx_r64_rm8,
    Movsxd_r16_rm16,
    Movsxd_r32_rm32,
    Movsxd_r64_rm32,
    Movupd_xmm_xmmm128,
    Movupd_xmmm128_xmm,
    Movups_xmm_xmmm128,
    Movups_xmmm128_xmm,
    Movzx_r16_rm16,
    Movzx_r16_rm8,
    Movzx_r32_rm16,
    Movzx_r32_rm8,
    Movzx_r64_rm16,
    Movzx_r64_rm8,
    Mul_rm16,
    Mul_rm32,
    Mul_rm64,
    Mul_rm8,
    Mulpd_xmm_xmmm128,
    Mulps_xmm_xmmm128,
    Mulsd_xmm_xmmm64,
    Mulss_xmm_xmmm32,
    Mulx_r32_r32_rm32,
    Mulx_r64_r64_rm64,
    Neg_rm16,
    Neg_rm32,
    Neg_rm64,
    Neg_rm8,
    Nop_rm16,
    Nop_rm32,
    Nop_rm64,
    Nopd,
    Nopq,
    Nopw,
    Not_rm16,
    Not_rm32,
    Not_rm64,
    Not_rm8,
    Or_AL_imm8,
    Or_AX_imm16,
    Or_EAX_imm32,
    Or_r16_rm16,
    Or_r32_rm32,
    Or_r64_rm64,
    Or_r8_rm8,
    Or_RAX_imm32,
    Or_rm16_imm16,
    Or_rm16_imm8,
    Or_rm16_r16,
    Or_rm32_imm32,
    Or_rm32_imm8,
    Or_rm32_r32,
    Or_rm64_imm32,
    Or_rm64_imm8,
    Or_rm64_r64,
    Or_rm8_imm8,
    Or_rm8_r8,
    Orpd_xmm_xmmm128,
    Orps_xmm_xmmm128,
    Out_DX_AL,
    Out_DX_AX,
    Out_DX_EAX,
    Out_imm8_AL,
    Out_imm8_AX,
    Out_imm8_EAX,
    Outsb_DX_m8,
    Outsd_DX_m32,
    Outsw_DX_m16,
    Palignr_mm_mmm64_imm8,
    Palignr_xmm_xmmm128_imm8,
    Pause,
    Pclmulqdq_xmm_xmmm128_imm8,
    Pcmpeqb_mm_mmm64,
    Pcmpeqb_xmm_xmmm128,
    Pcmpeqq_xmm_xmmm128,
    Pdep_r32_r32_rm32,
    Pdep_r64_r64_rm64,
    Pext_r32_r32_rm32,
    Pext_r64_r64_rm64,
    Pmuldq_xmm_xmmm128,
    Pop_r16,
    Pop_r32,
    Pop_r64,
    Pop_rm16,
    Pop_rm32,
    Pop_rm64,
    Popad,
    Popaw,
    Popcnt_r16_rm16,
    Popcnt_r32_rm32,
    Popcnt_r64_rm64,
    Popd_DS,
    Popd_ES,
    Popd_FS,
    Popd_GS,
    Popd_SS,
    Popfd,
    Popfq,
    Popfw,
    Popq_FS,
    Popq_GS,
    Popw_DS,
    Popw_ES,
    Popw_FS,
    Popw_GS,
    Popw_SS,
    Pshufb_mm_mmm64,
    Pshufb_xmm_xmmm128,
    Pshufd_xmm_xmmm128_imm8,
    Pshufhw_xmm_xmmm128_imm8,
    Pshuflw_xmm_xmmm128_imm8,
    Pshufw_mm_mmm64_imm8,
    Push_imm16,
    Push_r16,
    Push_r32,
    Push_r64,
    Push_rm16,
    Push_rm32,
    Push_rm64,
    Pushad,
    Pushaw,
    Pushd_CS,
    Pushd_DS,
    Pushd_ES,
    Pushd_FS,
    Pushd_GS,
    Pushd_imm32,
    Pushd_imm8,
    Pushd_SS,
    Pushfd,
    Pushfq,
    Pushfw,
    Pushq_FS,
    Pushq_GS,
    Pushq_imm32,
    Pushq_imm8,
    Pushw_CS,
    Pushw_DS,
    Pushw_ES,
    Pushw_FS,
    Pushw_GS,
    Pushw_imm8,
    Pushw_SS,
    Pxor_mm_mmm64,
    Pxor_xmm_xmmm128,
    Rcl_rm16_1,
    Rcl_rm16_CL,
    Rcl_rm16_imm8,
    Rcl_rm32_1,
    Rcl_rm32_CL,
    Rcl_rm32_imm8,
    Rcl_rm64_1,
    Rcl_rm64_CL,
    Rcl_rm64_imm8,
    Rcl_rm8_1,
    Rcl_rm8_CL,
    Rcl_rm8_imm8,
    Rcr_rm16_1,
    Rcr_rm16_CL,
    Rcr_rm16_imm8,
    Rcr_rm32_1,
    Rcr_rm32_CL,
    Rcr_rm32_imm8,
    Rcr_rm64_1,
    Rcr_rm64_CL,
    Rcr_rm64_imm8,
    Rcr_rm8_1,
    Rcr_rm8_CL,
    Rcr_rm8_imm8,
    Rdrand_r16,
    Rdrand_r32,
    Rdrand_r64,
    Rdseed_r16,
    Rdseed_r32,
    Rdseed_r64,
    Rdtsc,
    Retnd,
    Retnd_imm16,
    Retnq,
    Retnq_imm16,
    Retnw,
    Retnw_imm16,
    Rol_rm16_1,
    Rol_rm16_CL,
    Rol_rm16_imm8,
    Rol_rm32_1,
    Rol_rm32_CL,
    Rol_rm32_imm8,
    Rol_rm64_1,
    Rol_rm64_CL,
    Rol_rm64_imm8,
    Rol_rm8_1,
    Rol_rm8_CL,
    Rol_rm8_imm8,
    Ror_rm16_1,
    Ror_rm16_CL,
    Ror_rm16_imm8,
    Ror_rm32_1,
    Ror_rm32_CL,
    Ror_rm32_imm8,
    Ror_rm64_1,
    Ror_rm64_CL,
    Ror_rm64_imm8,
    Ror_rm8_1,
    Ror_rm8_CL,
    Ror_rm8_imm8,
    Sahf,
    Sar_rm16_1,
    Sar_rm16_CL,
    Sar_rm16_imm8,
    Sar_rm32_1,
    Sar_rm32_CL,
    Sar_rm32_imm8,
    Sar_rm64_1,
    Sar_rm64_CL,
    Sar_rm64_imm8,
    Sar_rm8_1,
    Sar_rm8_CL,
    Sar_rm8_imm8,
    Sarx_r32_rm32_r32,
    Sarx_r64_rm64_r64,
    Sbb_AL_imm8,
    Sbb_AX_imm16,
    Sbb_EAX_imm32,
    Sbb_r16_rm16,
    Sbb_r32_rm32,
    Sbb_r64_rm64,
    Sbb_r8_rm8,
    Sbb_RAX_imm32,
    Sbb_rm16_imm16,
    Sbb_rm16_imm8,
    Sbb_rm16_r16,
    Sbb_rm32_imm32,
    Sbb_rm32_imm8,
    Sbb_rm32_r32,
    Sbb_rm64_imm32,
    Sbb_rm64_imm8,
    Sbb_rm64_r64,
    Sbb_rm8_imm8,
    Sbb_rm8_r8,
    Scasb_AL_m8,
    Scasd_EAX_m32,
    Scasq_RAX_m64,
    Scasw_AX_m16,
    Seta_rm8,
    Setae_rm8,
    Setb_rm8,
    Setbe_rm8,
    Sete_rm8,
    Setg_rm8,
    Setge_rm8,
    Setl_rm8,
    Setle_rm8,
    Setne_rm8,
    Setno_rm8,
    Setnp_rm8,
    Setns_rm8,
    Seto_rm8,
    Setp_rm8,
    Sets_rm8,
    Sfence,
    Shl_rm16_1,
    Shl_rm16_CL,
    Shl_rm16_imm8,
    Shl_rm32_1,
    Shl_rm32_CL,
    Shl_rm32_imm8,
    Shl_rm64_1,
    Shl_rm64_CL,
    Shl_rm64_imm8,
    Shl_rm8_1,
    Shl_rm8_CL,
    Shl_rm8_imm8,
    Shld_rm16_r16_CL,
    Shld_rm16_r16_imm8,
    Shld_rm32_r32_CL,
    Shld_rm32_r32_imm8,
    Shld_rm64_r64_CL,
    Shld_rm64_r64_imm8,
    Shlx_r32_rm32_r32,
    Shlx_r64_rm64_r64,
    Shr_rm16_1,
    Shr_rm16_CL,
    Shr_rm16_imm8,
    Shr_rm32_1,
    Shr_rm32_CL,
    Shr_rm32_imm8,
    Shr_rm64_1,
    Shr_rm64_CL,
    Shr_rm64_imm8,
    Shr_rm8_1,
    Shr_rm8_CL,
    Shr_rm8_imm8,
    Shrd_rm16_r16_CL,
    Shrd_rm16_r16_imm8,
    Shrd_rm32_r32_CL,
    Shrd_rm32_r32_imm8,
    Shrd_rm64_r64_CL,
    Shrd_rm64_r64_imm8,
    Shrx_r32_rm32_r32,
    Shrx_r64_rm64_r64,
    Shufpd_xmm_xmmm128_imm8,
    Shufps_xmm_xmmm128_imm8,
    Sqrtpd_xmm_xmmm128,
    Sqrtps_xmm_xmmm128,
    Sqrtsd_xmm_xmmm64,
    Sqrtss_xmm_xmmm32,
    Stc,
    Std,
    Sti,
    Stmxcsr_m32,
    Stosb_m8_AL,
    Stosd_m32_EAX,
    Stosq_m64_RAX,
    Stosw_m16_AX,
    Sub_AL_imm8,
    Sub_AX_imm16,
    Sub_EAX_imm32,
    Sub_r16_rm16,
    Sub_r32_rm32,
    Sub_r64_rm64,
    Sub_r8_rm8,
    Sub_RAX_imm32,
    Sub_rm16_imm16,
    Sub_rm16_imm8,
    Sub_rm16_r16,
    Sub_rm32_imm32,
    Sub_rm32_imm8,
    Sub_rm32_r32,
    Sub_rm64_imm32,
    Sub_rm64_imm8,
    Sub_rm64_r64,
    Sub_rm8_imm8,
    Sub_rm8_r8,
    Subpd_xmm_xmmm128,
    Subps_xmm_xmmm128,
    Subsd_xmm_xmmm64,
    Subss_xmm_xmmm32,
    Syscall,
    Test_AL_imm8,
    Test_AX_imm16,
    Test_EAX_imm32,
    Test_RAX_imm32,
    Test_rm16_imm16,
    Test_rm16_r16,
    Test_rm32_imm32,
    Test_rm32_r32,
    Test_rm64_imm32,
    Test_rm64_r64,
    Test_rm8_imm8,
    Test_rm8_r8,
    Tzcnt_r16_rm16,
    Tzcnt_r32_rm32,
    Tzcnt_r64_rm64,
    Ucomisd_xmm_xmmm64,
    Ucomiss_xmm_xmmm32,
    Ud2,
    Wait,
    Xadd_rm16_r16,
    Xadd_rm32_r32,
    Xadd_rm64_r64,
    Xadd_rm8_r8,
    Xchg_r16_AX,
    Xchg_r32_EAX,
    Xchg_r64_RAX,
    Xchg_rm16_r16,
    Xchg_rm32_r32,
    Xchg_rm64_r64,
    Xchg_rm8_r8,
    Xor_AL_imm8,
    Xor_AX_imm16,
    Xor_EAX_imm32,
    Xor_r16_rm16,
    Xor_r32_rm32,
    Xor_r64_rm64,
    Xor_r8_rm8,
    Xor_RAX_imm32,
    Xor_rm16_imm16,
    Xor_rm16_imm8,
    Xor_rm16_r16,
    Xor_rm32_imm32,
    Xor_rm32_imm8,
    Xor_rm32_r32,
    Xor_rm64_imm32,
    Xor_rm64_imm8,
    Xor_rm64_r64,
    Xor_rm8_imm8,
    Xor_rm8_r8,
    Xorpd_xmm_xmmm128,
    Xorps_xmm_xmmm128,

    // VEX encodings
    VEX_Vaddpd_xmm_xmm_xmmm128,
    VEX_Vaddpd_ymm_ymm_ymmm256,
    VEX_Vaddps_xmm_xmm_xmmm128,
    VEX_Vaddps_ymm_ymm_ymmm256,
    VEX_Vaddsd_xmm_xmm_xmmm64,
    VEX_Vaddss_xmm_xmm_xmmm32,
    VEX_Vandpd_xmm_xmm_xmmm128,
    VEX_Vandpd_ymm_ymm_ymmm256,
    VEX_Vandps_xmm_xmm_xmmm128,
    VEX_Vandps_ymm_ymm_ymmm256,
    VEX_Vblendps_xmm_xmm_xmmm128_imm8,
    VEX_Vblendps_ymm_ymm_ymmm256_imm8,
    VEX_Vblendvpd_xmm_xmm_xmmm128_xmm,
    VEX_Vblendvpd_ymm_ymm_ymmm256_ymm,
    VEX_Vblendvps_xmm_xmm_xmmm128_xmm,
    VEX_Vblendvps_ymm_ymm_ymmm256_ymm,
    VEX_Vdivpd_xmm_xmm_xmmm128,
    VEX_Vdivpd_ymm_ymm_ymmm256,
    VEX_Vdivps_xmm_xmm_xmmm128,
    VEX_Vdivps_ymm_ymm_ymmm256,
    VEX_Vdivsd_xmm_xmm_xmmm64,
    VEX_Vdivss_xmm_xmm_xmmm32,
    VEX_Vextractf128_xmmm128_ymm_imm8,
    VEX_Vfmadd132pd_xmm_xmm_xmmm128,
    VEX_Vfmadd132pd_ymm_ymm_ymmm256,
    VEX_Vfmadd132ps_xmm_xmm_xmmm128,
    VEX_Vfmadd132ps_ymm_ymm_ymmm256,
    VEX_Vfmadd213pd_xmm_xmm_xmmm128,
    VEX_Vfmadd213pd_ymm_ymm_ymmm256,
    VEX_Vfmadd213ps_xmm_xmm_xmmm128,
    VEX_Vfmadd213ps_ymm_ymm_ymmm256,
    VEX_Vfmadd231pd_xmm_xmm_xmmm128,
    VEX_Vfmadd231pd_ymm_ymm_ymmm256,
    VEX_Vfmadd231ps_xmm_xmm_xmmm128,
    VEX_Vfmadd231ps_ymm_ymm_ymmm256,
    VEX_Vinsertf128_ymm_ymm_xmmm128_imm8,
    VEX_Vmovapd_xmm_xmmm128,
    VEX_Vmovapd_xmmm128_xmm,
    VEX_Vmovapd_ymm_ymmm256,
    VEX_Vmovapd_ymmm256_ymm,
    VEX_Vmovaps_xmm_xmmm128,
    VEX_Vmovaps_xmmm128_xmm,
    VEX_Vmovaps_ymm_ymmm256,
    VEX_Vmovaps_ymmm256_ymm,
    VEX_Vmovdqa_xmm_xmmm128,
    VEX_Vmovdqa_xmmm128_xmm,
    VEX_Vmovdqa_ymm_ymmm256,
    VEX_Vmovdqa_ymmm256_ymm,
    VEX_Vmovdqu_xmm_xmmm128,
    VEX_Vmovdqu_xmmm128_xmm,
    VEX_Vmovdqu_ymm_ymmm256,
    VEX_Vmovdqu_ymmm256_ymm,
    VEX_Vmovq_xmm_xmmm64,
    VEX_Vmovq_xmmm64_xmm,
    VEX_Vmovupd_xmm_xmmm128,
    VEX_Vmovupd_xmmm128_xmm,
    VEX_Vmovupd_ymm_ymmm256,
    VEX_Vmovupd_ymmm256_ymm,
    VEX_Vmovups_xmm_xmmm128,
    VEX_Vmovups_xmmm128_xmm,
    VEX_Vmovups_ymm_ymmm256,
    VEX_Vmovups_ymmm256_ymm,
    VEX_Vmulpd_xmm_xmm_xmmm128,
    VEX_Vmulpd_ymm_ymm_ymmm256,
    VEX_Vmulps_xmm_xmm_xmmm128,
    VEX_Vmulps_ymm_ymm_ymmm256,
    VEX_Vmulsd_xmm_xmm_xmmm64,
    VEX_Vmulss_xmm_xmm_xmmm32,
    VEX_Vpalignr_xmm_xmm_xmmm128_imm8,
    VEX_Vpalignr_ymm_ymm_ymmm256_imm8,
    VEX_Vpblendvb_xmm_xmm_xmmm128_xmm,
    VEX_Vpblendvb_ymm_ymm_ymmm256_ymm,
    VEX_Vpclmulqdq_xmm_xmm_xmmm128_imm8,
    VEX_Vpcmpeqb_xmm_xmm_xmmm128,
    VEX_Vpcmpeqb_ymm_ymm_ymmm256,
    VEX_Vpcmpeqq_xmm_xmm_xmmm128,
    VEX_Vpcmpeqq_ymm_ymm_ymmm256,
    VEX_Vpmuldq_xmm_xmm_xmmm128,
    VEX_Vpmuldq_ymm_ymm_ymmm256,
    VEX_Vpshufb_xmm_xmm_xmmm128,
    VEX_Vpshufb_ymm_ymm_ymmm256,
    VEX_Vpshufd_xmm_xmmm128_imm8,
    VEX_Vpshufd_ymm_ymmm256_imm8,
    VEX_Vpshufhw_xmm_xmmm128_imm8,
    VEX_Vpshufhw_ymm_ymmm256_imm8,
    VEX_Vpshuflw_xmm_xmmm128_imm8,
    VEX_Vpshuflw_ymm_ymmm256_imm8,
    VEX_Vpxor_xmm_xmm_xmmm128,
    VEX_Vpxor_ymm_ymm_ymmm256,
    VEX_Vsubpd_xmm_xmm_xmmm128,
    VEX_Vsubpd_ymm_ymm_ymmm256,
    VEX_Vsubps_xmm_xmm_xmmm128,
    VEX_Vsubps_ymm_ymm_ymmm256,
    VEX_Vsubsd_xmm_xmm_xmmm64,
    VEX_Vsubss_xmm_xmm_xmmm32,
    VEX_Vxorpd_xmm_xmm_xmmm128,
    VEX_Vxorpd_ymm_ymm_ymmm256,
    VEX_Vxorps_xmm_xmm_xmmm128,
    VEX_Vxorps_ymm_ymm_ymmm256,
    VEX_Vzeroall,
    VEX_Vzeroupper,

    // XOP encodings
    XOP_Vpcmov_xmm_xmm_xmmm128_xmm,
    XOP_Vpcmov_ymm_ymm_ymmm256_ymm,
    XOP_Vpmacsswd_xmm_xmm_xmmm128_xmm,
    XOP_Vpmacssww_xmm_xmm_xmmm128_xmm,
    XOP_Vprotb_xmm_xmmm128_xmm,

    // EVEX encodings
    EVEX_Vaddpd_xmm_k1z_xmm_xmmm128b64,
    EVEX_Vaddpd_ymm_k1z_ymm_ymmm256b64,
    EVEX_Vaddpd_zmm_k1z_zmm_zmmm512b64_er,
    EVEX_Vaddps_xmm_k1z_xmm_xmmm128b32,
    EVEX_Vaddps_ymm_k1z_ymm_ymmm256b32,
    EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er,
    EVEX_Valignd_xmm_k1z_xmm_xmmm128b32_imm8,
    EVEX_Valignd_ymm_k1z_ymm_ymmm256b32_imm8,
    EVEX_Valignd_zmm_k1z_zmm_zmmm512b32_imm8,
    EVEX_Valignq_xmm_k1z_xmm_xmmm128b64_imm8,
    EVEX_Valignq_ymm_k1z_ymm_ymmm256b64_imm8,
    EVEX_Valignq_zmm_k1z_zmm_zmmm512b64_imm8,
    EVEX_Vmovdqa32_xmm_k1z_xmmm128,
    EVEX_Vmovdqa32_xmmm128_k1z_xmm,
    EVEX_Vmovdqa32_ymm_k1z_ymmm256,
    EVEX_Vmovdqa32_ymmm256_k1z_ymm,
    EVEX_Vmovdqa32_zmm_k1z_zmmm512,
    EVEX_Vmovdqa32_zmmm512_k1z_zmm,
    EVEX_Vmovdqa64_xmm_k1z_xmmm128,
    EVEX_Vmovdqa64_xmmm128_k1z_xmm,
    EVEX_Vmovdqa64_ymm_k1z_ymmm256,
    EVEX_Vmovdqa64_ymmm256_k1z_ymm,
    EVEX_Vmovdqa64_zmm_k1z_zmmm512,
    EVEX_Vmovdqa64_zmmm512_k1z_zmm,
    EVEX_Vmovdqu32_xmm_k1z_xmmm128,
    EVEX_Vmovdqu32_ymm_k1z_ymmm256,
    EVEX_Vmovdqu32_zmm_k1z_zmmm512,
    EVEX_Vmovdqu64_xmm_k1z_xmmm128,
    EVEX_Vmovdqu64_ymm_k1z_ymmm256,
    EVEX_Vmovdqu64_zmm_k1z_zmmm512,
    EVEX_Vmovups_xmm_k1z_xmmm128,
    EVEX_Vmovups_xmmm128_k1z_xmm,
    EVEX_Vmovups_ymm_k1z_ymmm256,
    EVEX_Vmovups_ymmm256_k1z_ymm,
    EVEX_Vmovups_zmm_k1z_zmmm512,
    EVEX_Vmovups_zmmm512_k1z_zmm,
    EVEX_Vmulpd_xmm_k1z_xmm_xmmm128b64,
    EVEX_Vmulpd_ymm_k1z_ymm_ymmm256b64,
    EVEX_Vmulpd_zmm_k1z_zmm_zmmm512b64_er,
    EVEX_Vmulps_xmm_k1z_xmm_xmmm128b32,
    EVEX_Vmulps_ymm_k1z_ymm_ymmm256b32,
    EVEX_Vmulps_zmm_k1z_zmm_zmmm512b32_er,
    EVEX_Vpmuldq_xmm_k1z_xmm_xmmm128b64,
    EVEX_Vpmuldq_ymm_k1z_ymm_ymmm256b64,
    EVEX_Vpmuldq_zmm_k1z_zmm_zmmm512b64,
    EVEX_Vpxord_xmm_k1z_xmm_xmmm128b32,
    EVEX_Vpxord_ymm_k1z_ymm_ymmm256b32,
    EVEX_Vpxord_zmm_k1z_zmm_zmmm512b32,
    EVEX_Vpxorq_xmm_k1z_xmm_xmmm128b64,
    EVEX_Vpxorq_ymm_k1z_ymm_ymmm256b64,
    EVEX_Vpxorq_zmm_k1z_zmm_zmmm512b64,
    EVEX_Vrndscaleps_xmm_k1z_xmmm128b32_imm8,
    EVEX_Vrndscaleps_ymm_k1z_ymmm256b32_imm8,
    EVEX_Vrndscaleps_zmm_k1z_zmmm512b32_imm8_sae,
    EVEX_Vscalefpd_xmm_k1z_xmm_xmmm128b64,
    EVEX_Vscalefpd_ymm_k1z_ymm_ymmm256b64,
    EVEX_Vscalefpd_zmm_k1z_zmm_zmmm512b64_er,
    EVEX_Vscalefps_xmm_k1z_xmm_xmmm128b32,
    EVEX_Vscalefps_ymm_k1z_ymm_ymmm256b32,
    EVEX_Vscalefps_zmm_k1z_zmm_zmmm512b32_er,

    // 3DNow! encodings
    D3NOW_Pavgusb_mm_mmm64,
    D3NOW_Pf2id_mm_mmm64,
    D3NOW_Pf2iw_mm_mmm64,
    D3NOW_Pfacc_mm_mmm64,
    D3NOW_Pfadd_mm_mmm64,
    D3NOW_Pfcmpeq_mm_mmm64,
    D3NOW_Pfcmpge_mm_mmm64,
    D3NOW_Pfcmpgt_mm_mmm64,
    D3NOW_Pfmax_mm_mmm64,
    D3NOW_Pfmin_mm_mmm64,
    D3NOW_Pfmul_mm_mmm64,
    D3NOW_Pfnacc_mm_mmm64,
    D3NOW_Pfpnacc_mm_mmm64,
    D3NOW_Pfrcp_mm_mmm64,
    D3NOW_Pfrcpit1_mm_mmm64,
    D3NOW_Pfrcpit2_mm_mmm64,
    D3NOW_Pfrsqit1_mm_mmm64,
    D3NOW_Pfrsqrt_mm_mmm64,
    D3NOW_Pfsub_mm_mmm64,
    D3NOW_Pfsubr_mm_mmm64,
    D3NOW_Pi2fd_mm_mmm64,
    D3NOW_Pi2fw_mm_mmm64,
    D3NOW_Pmulhrw_mm_mmm64,
    D3NOW_Pswapd_mm_mmm64,
}

impl Code {
    /// True for the invalid-instruction sentinel.
    pub fn is_invalid(self) -> bool {
        self == Code::INVALID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_invalid() {
        assert!(Code::default().is_invalid());
        assert!(!Code::Nopd.is_invalid());
    }
}
