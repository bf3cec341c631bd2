//! x86/x64 register set.

/// An x86/x64 register.
///
/// This is the full register file reachable from decoding: general purpose
/// registers in all four widths, the instruction pointer, segment registers,
/// XMM/YMM/ZMM 0-31, opmask registers and the MMX registers. `None` marks an
/// absent register (no base, no index, no segment override, no opmask).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
#[allow(missing_docs)]
pub enum Register {
    #[default]
    None = 0,

    // 8-bit GPRs. AH..BH are only encodable without a REX prefix,
    // SPL..DIL only with one.
    AL,
    CL,
    DL,
    BL,
    AH,
    CH,
    DH,
    BH,
    SPL,
    BPL,
    SIL,
    DIL,
    R8L,
    R9L,
    R10L,
    R11L,
    R12L,
    R13L,
    R14L,
    R15L,

    // 16-bit GPRs
    AX,
    CX,
    DX,
    BX,
    SP,
    BP,
    SI,
    DI,
    R8W,
    R9W,
    R10W,
    R11W,
    R12W,
    R13W,
    R14W,
    R15W,

    // 32-bit GPRs
    EAX,
    ECX,
    EDX,
    EBX,
    ESP,
    EBP,
    ESI,
    EDI,
    R8D,
    R9D,
    R10D,
    R11D,
    R12D,
    R13D,
    R14D,
    R15D,

    // 64-bit GPRs
    RAX,
    RCX,
    RDX,
    RBX,
    RSP,
    RBP,
    RSI,
    RDI,
    R8,
    R9,
    R10,
    R11,
    R12,
    R13,
    R14,
    R15,

    // Instruction pointer (as a memory base for IP-relative operands)
    EIP,
    RIP,

    // Segment registers, in modrm.reg encoding order
    ES,
    CS,
    SS,
    DS,
    FS,
    GS,

    // Vector registers
    XMM0,
    XMM1,
    XMM2,
    XMM3,
    XMM4,
    XMM5,
    XMM6,
    XMM7,
    XMM8,
    XMM9,
    XMM10,
    XMM11,
    XMM12,
    XMM13,
    XMM14,
    XMM15,
    XMM16,
    XMM17,
    XMM18,
    XMM19,
    XMM20,
    XMM21,
    XMM22,
    XMM23,
    XMM24,
    XMM25,
    XMM26,
    XMM27,
    XMM28,
    XMM29,
    XMM30,
    XMM31,

    YMM0,
    YMM1,
    YMM2,
    YMM3,
    YMM4,
    YMM5,
    YMM6,
    YMM7,
    YMM8,
    YMM9,
    YMM10,
    YMM11,
    YMM12,
    YMM13,
    YMM14,
    YMM15,
    YMM16,
    YMM17,
    YMM18,
    YMM19,
    YMM20,
    YMM21,
    YMM22,
    YMM23,
    YMM24,
    YMM25,
    YMM26,
    YMM27,
    YMM28,
    YMM29,
    YMM30,
    YMM31,

    ZMM0,
    ZMM1,
    ZMM2,
    ZMM3,
    ZMM4,
    ZMM5,
    ZMM6,
    ZMM7,
    ZMM8,
    ZMM9,
    ZMM10,
    ZMM11,
    ZMM12,
    ZMM13,
    ZMM14,
    ZMM15,
    ZMM16,
    ZMM17,
    ZMM18,
    ZMM19,
    ZMM20,
    ZMM21,
    ZMM22,
    ZMM23,
    ZMM24,
    ZMM25,
    ZMM26,
    ZMM27,
    ZMM28,
    ZMM29,
    ZMM30,
    ZMM31,

    // Opmask registers
    K0,
    K1,
    K2,
    K3,
    K4,
    K5,
    K6,
    K7,

    // MMX registers
    MM0,
    MM1,
    MM2,
    MM3,
    MM4,
    MM5,
    MM6,
    MM7,
}

macro_rules! reg_table {
    ($name:ident, $len:literal, [$($reg:ident),+ $(,)?]) => {
        const $name: [Register; $len] = [$(Register::$reg),+];
    };
}

reg_table!(GPR8_LEGACY, 8, [AL, CL, DL, BL, AH, CH, DH, BH]);
reg_table!(
    GPR8_REX,
    16,
    [AL, CL, DL, BL, SPL, BPL, SIL, DIL, R8L, R9L, R10L, R11L, R12L, R13L, R14L, R15L]
);
reg_table!(
    GPR16,
    16,
    [AX, CX, DX, BX, SP, BP, SI, DI, R8W, R9W, R10W, R11W, R12W, R13W, R14W, R15W]
);
reg_table!(
    GPR32,
    16,
    [EAX, ECX, EDX, EBX, ESP, EBP, ESI, EDI, R8D, R9D, R10D, R11D, R12D, R13D, R14D, R15D]
);
reg_table!(
    GPR64,
    16,
    [RAX, RCX, RDX, RBX, RSP, RBP, RSI, RDI, R8, R9, R10, R11, R12, R13, R14, R15]
);
reg_table!(SEGMENTS, 6, [ES, CS, SS, DS, FS, GS]);
reg_table!(
    XMMREGS,
    32,
    [
        XMM0, XMM1, XMM2, XMM3, XMM4, XMM5, XMM6, XMM7, XMM8, XMM9, XMM10, XMM11, XMM12, XMM13,
        XMM14, XMM15, XMM16, XMM17, XMM18, XMM19, XMM20, XMM21, XMM22, XMM23, XMM24, XMM25, XMM26,
        XMM27, XMM28, XMM29, XMM30, XMM31,
    ]
);
reg_table!(
    YMMREGS,
    32,
    [
        YMM0, YMM1, YMM2, YMM3, YMM4, YMM5, YMM6, YMM7, YMM8, YMM9, YMM10, YMM11, YMM12, YMM13,
        YMM14, YMM15, YMM16, YMM17, YMM18, YMM19, YMM20, YMM21, YMM22, YMM23, YMM24, YMM25, YMM26,
        YMM27, YMM28, YMM29, YMM30, YMM31,
    ]
);
reg_table!(
    ZMMREGS,
    32,
    [
        ZMM0, ZMM1, ZMM2, ZMM3, ZMM4, ZMM5, ZMM6, ZMM7, ZMM8, ZMM9, ZMM10, ZMM11, ZMM12, ZMM13,
        ZMM14, ZMM15, ZMM16, ZMM17, ZMM18, ZMM19, ZMM20, ZMM21, ZMM22, ZMM23, ZMM24, ZMM25, ZMM26,
        ZMM27, ZMM28, ZMM29, ZMM30, ZMM31,
    ]
);
reg_table!(KREGS, 8, [K0, K1, K2, K3, K4, K5, K6, K7]);
reg_table!(MMREGS, 8, [MM0, MM1, MM2, MM3, MM4, MM5, MM6, MM7]);

impl Register {
    /// 8-bit GPR for register number `n`. With a REX prefix the numbers
    /// 4..=7 name SPL..DIL instead of AH..BH and 8..=15 become available.
    #[inline]
    pub fn gpr8(n: u32, rex: bool) -> Register {
        if rex {
            GPR8_REX[(n & 15) as usize]
        } else {
            GPR8_LEGACY[(n & 7) as usize]
        }
    }

    /// 16-bit GPR for register number `n` (0..=15).
    #[inline]
    pub fn gpr16(n: u32) -> Register {
        GPR16[(n & 15) as usize]
    }

    /// 32-bit GPR for register number `n` (0..=15).
    #[inline]
    pub fn gpr32(n: u32) -> Register {
        GPR32[(n & 15) as usize]
    }

    /// 64-bit GPR for register number `n` (0..=15).
    #[inline]
    pub fn gpr64(n: u32) -> Register {
        GPR64[(n & 15) as usize]
    }

    /// XMM register for register number `n` (0..=31).
    #[inline]
    pub fn xmm(n: u32) -> Register {
        XMMREGS[(n & 31) as usize]
    }

    /// YMM register for register number `n` (0..=31).
    #[inline]
    pub fn ymm(n: u32) -> Register {
        YMMREGS[(n & 31) as usize]
    }

    /// ZMM register for register number `n` (0..=31).
    #[inline]
    pub fn zmm(n: u32) -> Register {
        ZMMREGS[(n & 31) as usize]
    }

    /// Opmask register K0..K7.
    #[inline]
    pub fn k(n: u32) -> Register {
        KREGS[(n & 7) as usize]
    }

    /// MMX register MM0..MM7.
    #[inline]
    pub fn mm(n: u32) -> Register {
        MMREGS[(n & 7) as usize]
    }

    /// Segment register for the modrm.reg encoding 0..=5, or `None` for
    /// the reserved encodings 6 and 7.
    #[inline]
    pub fn segment(n: u32) -> Register {
        if n < 6 {
            SEGMENTS[n as usize]
        } else {
            Register::None
        }
    }

    /// True for any general purpose register of any width.
    pub fn is_gpr(self) -> bool {
        self >= Register::AL && self <= Register::R15
    }

    /// True for XMM0..=XMM31.
    pub fn is_xmm(self) -> bool {
        self >= Register::XMM0 && self <= Register::XMM31
    }

    /// True for YMM0..=YMM31.
    pub fn is_ymm(self) -> bool {
        self >= Register::YMM0 && self <= Register::YMM31
    }

    /// True for ZMM0..=ZMM31.
    pub fn is_zmm(self) -> bool {
        self >= Register::ZMM0 && self <= Register::ZMM31
    }

    /// True for any vector register (XMM/YMM/ZMM).
    pub fn is_vector(self) -> bool {
        self >= Register::XMM0 && self <= Register::ZMM31
    }

    /// True for ES..=GS.
    pub fn is_segment(self) -> bool {
        self >= Register::ES && self <= Register::GS
    }

    /// True for K0..=K7.
    pub fn is_opmask(self) -> bool {
        self >= Register::K0 && self <= Register::K7
    }

    /// Register number within its file (RDX -> 2, XMM19 -> 19, K3 -> 3).
    /// `None`, EIP and RIP map to 0.
    pub fn number(self) -> u32 {
        let raw = self as u16;
        let base = if self >= Register::AL && self <= Register::BH {
            Register::AL as u16
        } else if self >= Register::SPL && self <= Register::DIL {
            Register::SPL as u16 - 4
        } else if self >= Register::R8L && self <= Register::R15L {
            Register::R8L as u16 - 8
        } else if self >= Register::AX && self <= Register::R15W {
            Register::AX as u16
        } else if self >= Register::EAX && self <= Register::R15D {
            Register::EAX as u16
        } else if self >= Register::RAX && self <= Register::R15 {
            Register::RAX as u16
        } else if self.is_segment() {
            Register::ES as u16
        } else if self.is_xmm() {
            Register::XMM0 as u16
        } else if self.is_ymm() {
            Register::YMM0 as u16
        } else if self.is_zmm() {
            Register::ZMM0 as u16
        } else if self.is_opmask() {
            Register::K0 as u16
        } else if self >= Register::MM0 && self <= Register::MM7 {
            Register::MM0 as u16
        } else {
            return 0;
        };
        (raw - base) as u32
    }

    /// Lower-case register name ("rax", "xmm13", "k3"). `None` yields "".
    pub fn name(self) -> &'static str {
        REGISTER_NAMES[self as usize]
    }
}

impl core::fmt::Display for Register {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

static REGISTER_NAMES: [&str; 189] = [
    "",
    "al", "cl", "dl", "bl", "ah", "ch", "dh", "bh",
    "spl", "bpl", "sil", "dil",
    "r8b", "r9b", "r10b", "r11b", "r12b", "r13b", "r14b", "r15b",
    "ax", "cx", "dx", "bx", "sp", "bp", "si", "di",
    "r8w", "r9w", "r10w", "r11w", "r12w", "r13w", "r14w", "r15w",
    "eax", "ecx", "edx", "ebx", "esp", "ebp", "esi", "edi",
    "r8d", "r9d", "r10d", "r11d", "r12d", "r13d", "r14d", "r15d",
    "rax", "rcx", "rdx", "rbx", "rsp", "rbp", "rsi", "rdi",
    "r8", "r9", "r10", "r11", "r12", "r13", "r14", "r15",
    "eip", "rip",
    "es", "cs", "ss", "ds", "fs", "gs",
    "xmm0", "xmm1", "xmm2", "xmm3", "xmm4", "xmm5", "xmm6", "xmm7",
    "xmm8", "xmm9", "xmm10", "xmm11", "xmm12", "xmm13", "xmm14", "xmm15",
    "xmm16", "xmm17", "xmm18", "xmm19", "xmm20", "xmm21", "xmm22", "xmm23",
    "xmm24", "xmm25", "xmm26", "xmm27", "xmm28", "xmm29", "xmm30", "xmm31",
    "ymm0", "ymm1", "ymm2", "ymm3", "ymm4", "ymm5", "ymm6", "ymm7",
    "ymm8", "ymm9", "ymm10", "ymm11", "ymm12", "ymm13", "ymm14", "ymm15",
    "ymm16", "ymm17", "ymm18", "ymm19", "ymm20", "ymm21", "ymm22", "ymm23",
    "ymm24", "ymm25", "ymm26", "ymm27", "ymm28", "ymm29", "ymm30", "ymm31",
    "zmm0", "zmm1", "zmm2", "zmm3", "zmm4", "zmm5", "zmm6", "zmm7",
    "zmm8", "zmm9", "zmm10", "zmm11", "zmm12", "zmm13", "zmm14", "zmm15",
    "zmm16", "zmm17", "zmm18", "zmm19", "zmm20", "zmm21", "zmm22", "zmm23",
    "zmm24", "zmm25", "zmm26", "zmm27", "zmm28", "zmm29", "zmm30", "zmm31",
    "k0", "k1", "k2", "k3", "k4", "k5", "k6", "k7",
    "mm0", "mm1", "mm2", "mm3", "mm4", "mm5", "mm6", "mm7",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gpr8_rex_switches_high_byte_names() {
        assert_eq!(Register::gpr8(4, false), Register::AH);
        assert_eq!(Register::gpr8(4, true), Register::SPL);
        assert_eq!(Register::gpr8(12, true), Register::R12L);
    }

    #[test]
    fn vector_constructors_cover_upper_bank() {
        assert_eq!(Register::xmm(0), Register::XMM0);
        assert_eq!(Register::xmm(31), Register::XMM31);
        assert_eq!(Register::ymm(17), Register::YMM17);
        assert_eq!(Register::zmm(5), Register::ZMM5);
        assert_eq!(Register::zmm(31), Register::ZMM31);
        // Register numbers are 5-bit; anything wider is masked.
        assert_eq!(Register::xmm(32), Register::XMM0);
    }

    #[test]
    fn names_line_up_with_discriminants() {
        assert_eq!(Register::RAX.name(), "rax");
        assert_eq!(Register::R15.name(), "r15");
        assert_eq!(Register::EIP.name(), "eip");
        assert_eq!(Register::XMM31.name(), "xmm31");
        assert_eq!(Register::YMM0.name(), "ymm0");
        assert_eq!(Register::ZMM31.name(), "zmm31");
        assert_eq!(Register::K7.name(), "k7");
        assert_eq!(Register::MM7.name(), "mm7");
        assert_eq!(Register::GS.name(), "gs");
    }

    #[test]
    fn number_strips_the_file_base() {
        assert_eq!(Register::XMM19.number(), 19);
        assert_eq!(Register::K3.number(), 3);
        assert_eq!(Register::RDX.number(), 2);
        assert_eq!(Register::R10D.number(), 10);
    }
}
