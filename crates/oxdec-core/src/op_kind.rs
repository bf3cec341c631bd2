//! Operand kinds.

/// The kind of one instruction operand.
///
/// `Register` and `Memory` operands carry their payload in the
/// [`Instruction`](crate::Instruction) register slots / memory descriptor;
/// immediate and branch kinds carry theirs in the immediate/branch fields,
/// with the `8toN` kinds marking sign-extension of a one-byte immediate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OpKind {
    /// Unused operand slot.
    #[default]
    None,
    /// A register operand.
    Register,
    /// 16-bit near branch target.
    NearBranch16,
    /// 32-bit near branch target.
    NearBranch32,
    /// 64-bit near branch target.
    NearBranch64,
    /// 8-bit immediate.
    Immediate8,
    /// Second 8-bit immediate (ENTER).
    Immediate8_2nd,
    /// 16-bit immediate.
    Immediate16,
    /// 32-bit immediate.
    Immediate32,
    /// 64-bit immediate.
    Immediate64,
    /// 8-bit immediate sign-extended to 16 bits.
    Immediate8to16,
    /// 8-bit immediate sign-extended to 32 bits.
    Immediate8to32,
    /// 8-bit immediate sign-extended to 64 bits.
    Immediate8to64,
    /// 32-bit immediate sign-extended to 64 bits.
    Immediate32to64,
    /// `seg:[si]` string source.
    MemorySegSI,
    /// `seg:[esi]` string source.
    MemorySegESI,
    /// `seg:[rsi]` string source.
    MemorySegRSI,
    /// `es:[di]` string destination.
    MemoryESDI,
    /// `es:[edi]` string destination.
    MemoryESEDI,
    /// `es:[rdi]` string destination.
    MemoryESRDI,
    /// A memory operand described by the instruction's memory fields.
    Memory,
}

impl OpKind {
    /// True for any of the immediate kinds.
    pub fn is_immediate(self) -> bool {
        matches!(
            self,
            OpKind::Immediate8
                | OpKind::Immediate8_2nd
                | OpKind::Immediate16
                | OpKind::Immediate32
                | OpKind::Immediate64
                | OpKind::Immediate8to16
                | OpKind::Immediate8to32
                | OpKind::Immediate8to64
                | OpKind::Immediate32to64
        )
    }

    /// True for any of the near branch kinds.
    pub fn is_near_branch(self) -> bool {
        matches!(
            self,
            OpKind::NearBranch16 | OpKind::NearBranch32 | OpKind::NearBranch64
        )
    }
}
