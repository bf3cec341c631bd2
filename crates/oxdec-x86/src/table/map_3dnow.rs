//! 3DNow! (0F 0F): the real opcode byte trails the operands.

use oxdec_core::Code::{self, *};

/// Maps the trailing opcode byte to an instruction identity. Both operands
/// are fixed: mm from ModRM.reg, mm/m64 from ModRM.rm.
pub(crate) fn lookup_3dnow(opcode: u8) -> Option<Code> {
    Some(match opcode {
        0x0C => D3NOW_Pi2fw_mm_mmm64,
        0x0D => D3NOW_Pi2fd_mm_mmm64,
        0x1C => D3NOW_Pf2iw_mm_mmm64,
        0x1D => D3NOW_Pf2id_mm_mmm64,
        0x8A => D3NOW_Pfnacc_mm_mmm64,
        0x8E => D3NOW_Pfpnacc_mm_mmm64,
        0x90 => D3NOW_Pfcmpge_mm_mmm64,
        0x94 => D3NOW_Pfmin_mm_mmm64,
        0x96 => D3NOW_Pfrcp_mm_mmm64,
        0x97 => D3NOW_Pfrsqrt_mm_mmm64,
        0x9A => D3NOW_Pfsub_mm_mmm64,
        0x9E => D3NOW_Pfadd_mm_mmm64,
        0xA0 => D3NOW_Pfcmpgt_mm_mmm64,
        0xA4 => D3NOW_Pfmax_mm_mmm64,
        0xA6 => D3NOW_Pfrcpit1_mm_mmm64,
        0xA7 => D3NOW_Pfrsqit1_mm_mmm64,
        0xAA => D3NOW_Pfsubr_mm_mmm64,
        0xAE => D3NOW_Pfacc_mm_mmm64,
        0xB0 => D3NOW_Pfcmpeq_mm_mmm64,
        0xB4 => D3NOW_Pfmul_mm_mmm64,
        0xB6 => D3NOW_Pfrcpit2_mm_mmm64,
        0xB7 => D3NOW_Pmulhrw_mm_mmm64,
        0xBB => D3NOW_Pswapd_mm_mmm64,
        0xBF => D3NOW_Pavgusb_mm_mmm64,
        _ => return None,
    })
}
