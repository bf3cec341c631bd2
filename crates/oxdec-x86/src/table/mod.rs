//! Opcode tables and table lookup.
//!
//! Each opcode map is a flat list of [`Row`]s. A row matches on the opcode
//! byte plus whatever the encoding refines on: mandatory prefix, W bit,
//! vector length, ModRM.reg for group opcodes, and CPU mode. Rows with an
//! exact mandatory-prefix condition win over prefix-agnostic rows so that
//! e.g. `F3 0F 10` finds MOVSS while `0F 10` finds MOVUPS.

pub(crate) mod map_0f;
pub(crate) mod map_3dnow;
pub(crate) mod map_evex;
pub(crate) mod map_one;
pub(crate) mod map_vex;
pub(crate) mod map_xop;

use oxdec_core::{Code, MemorySize};

use crate::prefix::MandatoryPrefix;

/// Opcode map selected by escape bytes or by an extension prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OpcodeMap {
    One,
    Map0F,
    Map0F38,
    Map0F3A,
    Vex0F,
    Vex0F38,
    Vex0F3A,
    Xop8,
    Xop9,
    XopA,
    Evex0F,
    Evex0F38,
    Evex0F3A,
}

impl OpcodeMap {
    pub(crate) fn rows(self) -> &'static [Row] {
        match self {
            OpcodeMap::One => map_one::ROWS,
            OpcodeMap::Map0F => map_0f::ROWS_0F,
            OpcodeMap::Map0F38 => map_0f::ROWS_0F38,
            OpcodeMap::Map0F3A => map_0f::ROWS_0F3A,
            OpcodeMap::Vex0F => map_vex::ROWS_0F,
            OpcodeMap::Vex0F38 => map_vex::ROWS_0F38,
            OpcodeMap::Vex0F3A => map_vex::ROWS_0F3A,
            OpcodeMap::Xop8 => map_xop::ROWS_8,
            OpcodeMap::Xop9 => map_xop::ROWS_9,
            OpcodeMap::XopA => map_xop::ROWS_A,
            OpcodeMap::Evex0F => map_evex::ROWS_0F,
            OpcodeMap::Evex0F38 => map_evex::ROWS_0F38,
            OpcodeMap::Evex0F3A => map_evex::ROWS_0F3A,
        }
    }

    pub(crate) fn is_evex(self) -> bool {
        matches!(self, OpcodeMap::Evex0F | OpcodeMap::Evex0F38 | OpcodeMap::Evex0F3A)
    }
}

/// EVEX memory-operand tuple: decides the scale applied to an 8-bit
/// displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum TupleType {
    #[default]
    None,
    Full128,
    Full256,
    Full512,
    FullMem128,
    FullMem256,
    FullMem512,
    Tuple1Scalar,
}

/// How a template slot sources its operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OpSpec {
    /// 8-bit GPR or memory via ModRM r/m.
    Eb,
    /// Operand-sized GPR or memory via ModRM r/m.
    Ev,
    /// 16-bit GPR or memory via ModRM r/m, regardless of operand size.
    Ew,
    /// 32-bit GPR or memory via ModRM r/m, regardless of operand size.
    Ed,
    /// 64-bit GPR or memory via ModRM r/m (REX.W forms of MOVD/MOVQ).
    Eq,
    /// 8-bit GPR from ModRM reg.
    Gb,
    /// Operand-sized GPR from ModRM reg.
    Gv,
    /// 16-bit GPR from ModRM reg, regardless of operand size.
    Gw,
    /// Memory via ModRM r/m; register form is rejected per entry flags.
    M,
    /// Segment register from ModRM reg.
    Sw,
    /// AL.
    AccB,
    /// AX/EAX/RAX by operand size.
    AccV,
    /// DX, for IN/OUT.
    Dx,
    /// Fixed segment register operand (PUSH ES and friends).
    Seg(oxdec_core::Register),
    /// 8-bit GPR from the opcode's low three bits.
    OpRegB,
    /// Operand-sized GPR from the opcode's low three bits.
    OpRegV,
    /// 8-bit immediate.
    Ib,
    /// 8-bit immediate sign-extended to the operand size.
    IbS,
    /// 16-bit immediate.
    Iw,
    /// 16- or 32-bit immediate by operand size (32-bit sign-extended in
    /// 64-bit operand size).
    Iz,
    /// Full-width immediate: 16, 32 or 64 bits by operand size.
    Iv,
    /// Second 8-bit immediate (ENTER).
    Ib2,
    /// Constant 1 (shift-by-one forms).
    One,
    /// CL (shift-by-CL forms).
    Cl,
    /// 8-bit relative branch.
    Jb,
    /// 16- or 32-bit relative branch by operand size.
    Jz,
    /// String source, DS:[SI/ESI/RSI].
    SrcSI,
    /// String destination, ES:[DI/EDI/RDI].
    DstDI,
    /// Direct memory offset of address-size width (MOV moffs forms).
    MOffs,
    /// Vector register from ModRM reg; width from the row's vector length.
    V,
    /// Vector register from vvvv.
    H,
    /// Vector register or memory via ModRM r/m.
    W,
    /// XMM register or memory via ModRM r/m even on wider rows
    /// (VINSERTF128 and friends).
    W128,
    /// Operand-sized GPR from vvvv (BMI).
    Hv,
    /// MMX register from ModRM reg.
    P,
    /// MMX register or memory via ModRM r/m.
    Q,
    /// Vector register from bits 7:4 of a trailing immediate byte.
    Is4,
}

/// Row condition on the mandatory prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PpCond {
    /// Matches regardless of 66/F2/F3 (the one-byte map, where 66 is just
    /// the operand-size override).
    Any,
    Exact(MandatoryPrefix),
}

/// Row condition on the W bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WCond {
    Any,
    W0,
    W1,
}

/// Row condition on the vector length. Also fixes the register width used
/// by the row's vector operands; `Any` rows (LIG and legacy SSE) use XMM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LCond {
    Any,
    L128,
    L256,
    L512,
}

pub(crate) mod entry_flags {
    /// Not encodable in 64-bit mode.
    pub const NOT64: u32 = 1;
    /// Only encodable in 64-bit mode.
    pub const ONLY64: u32 = 1 << 1;
    /// Operand size defaults to 64 in 64-bit mode but 66 can shrink it.
    pub const D64: u32 = 1 << 2;
    /// Operand size is forced to 64 in 64-bit mode.
    pub const F64: u32 = 1 << 3;
    /// ModRM must encode a memory operand.
    pub const MEM_ONLY: u32 = 1 << 4;
    /// ModRM must encode a register operand.
    pub const REG_ONLY: u32 = 1 << 5;
    /// EVEX: opmask/zeroing allowed.
    pub const MASK: u32 = 1 << 6;
    /// EVEX: b bit on a memory operand selects broadcast.
    pub const BCST: u32 = 1 << 7;
    /// EVEX: b bit on a register operand selects static rounding.
    pub const ER: u32 = 1 << 8;
    /// EVEX: b bit on a register operand suppresses all exceptions.
    pub const SAE: u32 = 1 << 9;
}

/// One decode template: instruction identity, operand recipe and sizing.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Row {
    pub opcode: u8,
    /// Required ModRM.reg value for group opcodes, or -1.
    pub reg: i8,
    pub pp: PpCond,
    pub w: WCond,
    pub l: LCond,
    /// Instruction identity indexed by effective operand size 16/32/64.
    pub codes: [Code; 3],
    pub ops: &'static [OpSpec],
    /// Memory operand size indexed by effective operand size.
    pub mem_size: [MemorySize; 3],
    /// Memory operand size when broadcasting.
    pub bcst_size: MemorySize,
    pub tuple: TupleType,
    pub flags: u32,
}

impl Row {
    /// Row whose identity does not depend on the operand size.
    pub(crate) const fn one(opcode: u8, code: Code, ops: &'static [OpSpec]) -> Self {
        Self::sized(opcode, [code, code, code], ops)
    }

    /// Row with distinct identities for 16/32/64-bit operand size.
    pub(crate) const fn sized(opcode: u8, codes: [Code; 3], ops: &'static [OpSpec]) -> Self {
        Self {
            opcode,
            reg: -1,
            pp: PpCond::Any,
            w: WCond::Any,
            l: LCond::Any,
            codes,
            ops,
            mem_size: [MemorySize::Unknown; 3],
            bcst_size: MemorySize::Unknown,
            tuple: TupleType::None,
            flags: 0,
        }
    }

    pub(crate) const fn reg(mut self, reg: i8) -> Self {
        self.reg = reg;
        self
    }

    pub(crate) const fn pp_none(mut self) -> Self {
        self.pp = PpCond::Exact(MandatoryPrefix::None);
        self
    }

    pub(crate) const fn pp_66(mut self) -> Self {
        self.pp = PpCond::Exact(MandatoryPrefix::P66);
        self
    }

    pub(crate) const fn pp_f3(mut self) -> Self {
        self.pp = PpCond::Exact(MandatoryPrefix::PF3);
        self
    }

    pub(crate) const fn pp_f2(mut self) -> Self {
        self.pp = PpCond::Exact(MandatoryPrefix::PF2);
        self
    }

    pub(crate) const fn w0(mut self) -> Self {
        self.w = WCond::W0;
        self
    }

    pub(crate) const fn w1(mut self) -> Self {
        self.w = WCond::W1;
        self
    }

    pub(crate) const fn l128(mut self) -> Self {
        self.l = LCond::L128;
        self
    }

    pub(crate) const fn l256(mut self) -> Self {
        self.l = LCond::L256;
        self
    }

    pub(crate) const fn l512(mut self) -> Self {
        self.l = LCond::L512;
        self
    }

    /// Memory operand size independent of operand size.
    pub(crate) const fn mem(mut self, size: MemorySize) -> Self {
        self.mem_size = [size, size, size];
        self
    }

    pub(crate) const fn mem_sized(mut self, sizes: [MemorySize; 3]) -> Self {
        self.mem_size = sizes;
        self
    }

    pub(crate) const fn bcst(mut self, size: MemorySize) -> Self {
        self.bcst_size = size;
        self.flags |= entry_flags::BCST;
        self
    }

    pub(crate) const fn tuple(mut self, tuple: TupleType) -> Self {
        self.tuple = tuple;
        self
    }

    pub(crate) const fn flag(mut self, flags: u32) -> Self {
        self.flags |= flags;
        self
    }
}

/// Everything the matcher refines on besides the opcode byte.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MatchCtx {
    pub is_64: bool,
    pub pp: MandatoryPrefix,
    pub w: bool,
    pub l: LCond,
    /// ModRM.reg if the ModRM byte has been read.
    pub reg: Option<u32>,
    /// Restrict to rows carrying static-rounding/SAE support (EVEX register
    /// forms with the b bit set).
    pub require_er_sae: bool,
}

pub(crate) enum Lookup {
    Found(&'static Row),
    /// A group opcode: the ModRM byte is needed to finish the match.
    NeedModRm,
    None,
}

pub(crate) fn lookup(rows: &'static [Row], opcode: u8, ctx: &MatchCtx) -> Lookup {
    let mut fallback: Option<&'static Row> = None;
    for row in rows {
        if row.opcode != opcode {
            continue;
        }
        if ctx.is_64 && row.flags & entry_flags::NOT64 != 0 {
            continue;
        }
        if !ctx.is_64 && row.flags & entry_flags::ONLY64 != 0 {
            continue;
        }
        match row.w {
            WCond::Any => {}
            WCond::W0 if !ctx.w => {}
            WCond::W1 if ctx.w => {}
            _ => continue,
        }
        match row.l {
            LCond::Any => {}
            l if l == ctx.l => {}
            _ => continue,
        }
        if ctx.require_er_sae && row.flags & (entry_flags::ER | entry_flags::SAE) == 0 {
            continue;
        }
        let exact_pp = match row.pp {
            PpCond::Any => false,
            PpCond::Exact(pp) if pp == ctx.pp => true,
            PpCond::Exact(_) => continue,
        };
        if row.reg >= 0 {
            match ctx.reg {
                None => return Lookup::NeedModRm,
                Some(r) if r == row.reg as u32 => {}
                Some(_) => continue,
            }
        }
        if exact_pp {
            return Lookup::Found(row);
        }
        if fallback.is_none() {
            fallback = Some(row);
        }
    }
    match fallback {
        Some(row) => Lookup::Found(row),
        None => Lookup::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> MatchCtx {
        MatchCtx {
            is_64: true,
            pp: MandatoryPrefix::None,
            w: false,
            l: LCond::L128,
            reg: None,
            require_er_sae: false,
        }
    }

    #[test]
    fn exact_prefix_row_beats_any_row() {
        // 0F 10: MOVUPS without a prefix, MOVSS under F3.
        let c = MatchCtx { pp: MandatoryPrefix::PF3, ..ctx() };
        match lookup(map_0f::ROWS_0F, 0x10, &c) {
            Lookup::Found(row) => assert_eq!(row.codes[0], Code::Movss_xmm_xmmm32),
            _ => panic!("expected a match"),
        }
        match lookup(map_0f::ROWS_0F, 0x10, &ctx()) {
            Lookup::Found(row) => assert_eq!(row.codes[0], Code::Movups_xmm_xmmm128),
            _ => panic!("expected a match"),
        }
    }

    #[test]
    fn group_opcode_requires_modrm() {
        assert!(matches!(lookup(map_one::ROWS, 0xF7, &ctx()), Lookup::NeedModRm));
        match lookup(map_one::ROWS, 0xF7, &MatchCtx { reg: Some(2), ..ctx() }) {
            Lookup::Found(row) => assert_eq!(row.codes[1], Code::Not_rm32),
            _ => panic!("expected a match"),
        }
    }

    #[test]
    fn mode_filtering() {
        // 40-4F are REX prefixes in 64-bit mode, INC/DEC elsewhere.
        assert!(matches!(lookup(map_one::ROWS, 0x40, &ctx()), Lookup::None));
        let c = MatchCtx { is_64: false, ..ctx() };
        assert!(matches!(lookup(map_one::ROWS, 0x40, &c), Lookup::Found(_)));
    }
}
