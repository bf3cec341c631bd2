//! The decoded instruction value.

use crate::{Code, MemorySize, OpKind, Register};

/// Rounding control for EVEX instructions with embedded rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundingControl {
    /// No embedded rounding.
    #[default]
    None,
    /// Round to nearest even.
    RoundToNearest,
    /// Round toward negative infinity.
    RoundDown,
    /// Round toward positive infinity.
    RoundUp,
    /// Truncate.
    RoundTowardZero,
}

/// One decoded instruction.
///
/// Constructed by a single `decode()` call and immutable afterwards. All
/// fields are plain values; clones are independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instruction {
    /// Instruction identity, `Code::INVALID` for undefined encodings.
    pub code: Code,
    /// Number of bytes this instruction occupies (1..=15).
    pub byte_length: u8,
    /// Number of operands (0..=5).
    pub op_count: u8,
    /// Operand kinds, in operand order; unused slots are `OpKind::None`.
    pub op_kinds: [OpKind; 5],
    /// Operand registers for `OpKind::Register` slots.
    pub op_registers: [Register; 5],

    /// Memory operand: base register, `None` if absent.
    pub memory_base: Register,
    /// Memory operand: index register, `None` if absent.
    pub memory_index: Register,
    /// Memory operand: index scale (1, 2, 4 or 8; 1 when no SIB byte).
    pub memory_index_scale: u8,
    /// Memory operand: displacement, sign-extended to the address width
    /// and zero-extended into the field.
    pub memory_displacement: u64,
    /// Memory operand: encoded displacement size in bytes (0, 1, 2, 4, 8).
    pub memory_displ_size: u8,
    /// Memory operand: operand size/layout in memory.
    pub memory_size: MemorySize,
    /// Segment override prefix register, `None` if absent.
    pub segment_prefix: Register,

    /// Immediate operand bits, zero-extended.
    pub immediate: u64,
    /// Second immediate (ENTER's one-byte operand).
    pub immediate2: u8,
    /// Near branch target for `NearBranchNN` operands.
    pub near_branch: u64,

    /// EVEX opmask register, `None` when unmasked (aaa == 0).
    pub op_mask: Register,
    /// EVEX zeroing-masking (z bit).
    pub zeroing_masking: bool,
    /// EVEX embedded rounding mode.
    pub rounding_control: RoundingControl,
    /// EVEX suppress-all-exceptions (SAE-only templates).
    pub suppress_all_exceptions: bool,
    /// EVEX embedded broadcast is active on the memory operand.
    pub is_broadcast: bool,

    /// LOCK prefix present.
    pub has_lock_prefix: bool,
    /// REP/REPE prefix present.
    pub has_rep_prefix: bool,
    /// REPNE prefix present.
    pub has_repne_prefix: bool,

    /// Address of the first byte of this instruction.
    pub ip: u64,
    /// Address of the byte after this instruction.
    pub next_ip: u64,
}

impl Default for Instruction {
    fn default() -> Self {
        Self {
            code: Code::INVALID,
            byte_length: 0,
            op_count: 0,
            op_kinds: [OpKind::None; 5],
            op_registers: [Register::None; 5],
            memory_base: Register::None,
            memory_index: Register::None,
            memory_index_scale: 1,
            memory_displacement: 0,
            memory_displ_size: 0,
            memory_size: MemorySize::Unknown,
            segment_prefix: Register::None,
            immediate: 0,
            immediate2: 0,
            near_branch: 0,
            op_mask: Register::None,
            zeroing_masking: false,
            rounding_control: RoundingControl::None,
            suppress_all_exceptions: false,
            is_broadcast: false,
            has_lock_prefix: false,
            has_rep_prefix: false,
            has_repne_prefix: false,
            ip: 0,
            next_ip: 0,
        }
    }
}

impl Instruction {
    /// Kind of operand `n` (`OpKind::None` past `op_count`).
    pub fn op_kind(&self, n: usize) -> OpKind {
        self.op_kinds.get(n).copied().unwrap_or(OpKind::None)
    }

    /// Register of operand `n` (`Register::None` unless that operand is
    /// `OpKind::Register`).
    pub fn op_register(&self, n: usize) -> Register {
        self.op_registers.get(n).copied().unwrap_or(Register::None)
    }

    /// True if this is the invalid-instruction sentinel.
    pub fn is_invalid(&self) -> bool {
        self.code == Code::INVALID
    }

    /// Effective segment of the memory operand: the override prefix if one
    /// is present, otherwise SS for BP/SP-based addressing and DS for
    /// everything else.
    pub fn memory_segment(&self) -> Register {
        if self.segment_prefix != Register::None {
            return self.segment_prefix;
        }
        match self.memory_base {
            Register::BP
            | Register::SP
            | Register::EBP
            | Register::ESP
            | Register::RBP
            | Register::RSP => Register::SS,
            _ => Register::DS,
        }
    }

    /// The immediate of operand `n`, sign-extended to 64 bits according to
    /// its kind. Returns 0 for non-immediate operands.
    pub fn immediate_i64(&self, n: usize) -> i64 {
        match self.op_kind(n) {
            OpKind::Immediate8 => self.immediate as u8 as i64,
            OpKind::Immediate8_2nd => self.immediate2 as i64,
            OpKind::Immediate16 => self.immediate as u16 as i64,
            OpKind::Immediate32 => self.immediate as u32 as i64,
            OpKind::Immediate64 => self.immediate as i64,
            OpKind::Immediate8to16 => self.immediate as u8 as i8 as i64,
            OpKind::Immediate8to32 => self.immediate as u8 as i8 as i64,
            OpKind::Immediate8to64 => self.immediate as u8 as i8 as i64,
            OpKind::Immediate32to64 => self.immediate as u32 as i32 as i64,
            _ => 0,
        }
    }

    /// RIP/EIP-relative memory target, if the memory base is the
    /// instruction pointer.
    pub fn ip_rel_memory_address(&self) -> Option<u64> {
        match self.memory_base {
            Register::RIP => Some(self.next_ip.wrapping_add(self.memory_displacement as u32 as i32 as i64 as u64)),
            Register::EIP => {
                Some((self.next_ip as u32).wrapping_add(self.memory_displacement as u32) as u64)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_invalid_with_scale_one() {
        let instr = Instruction::default();
        assert!(instr.is_invalid());
        assert_eq!(instr.memory_index_scale, 1);
        assert_eq!(instr.op_kind(0), OpKind::None);
        assert_eq!(instr.op_kind(17), OpKind::None);
    }

    #[test]
    fn memory_segment_defaults() {
        let mut instr = Instruction::default();
        instr.memory_base = Register::BX;
        assert_eq!(instr.memory_segment(), Register::DS);
        instr.memory_base = Register::EBP;
        assert_eq!(instr.memory_segment(), Register::SS);
        instr.segment_prefix = Register::GS;
        assert_eq!(instr.memory_segment(), Register::GS);
    }

    #[test]
    fn immediate_sign_extension_follows_kind() {
        let mut instr = Instruction::default();
        instr.op_count = 1;
        instr.op_kinds[0] = OpKind::Immediate8to32;
        instr.immediate = 0xF0;
        assert_eq!(instr.immediate_i64(0), -16);
        instr.op_kinds[0] = OpKind::Immediate8;
        assert_eq!(instr.immediate_i64(0), 0xF0);
    }
}
