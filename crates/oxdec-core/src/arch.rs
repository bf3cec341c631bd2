//! Processor mode.

/// Code bitness the decoder operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bitness {
    /// 16-bit real/protected mode code.
    Bits16,
    /// 32-bit protected mode code.
    Bits32,
    /// 64-bit long mode code.
    Bits64,
}

impl Bitness {
    /// Numeric bit width (16, 32 or 64).
    pub fn bits(self) -> u32 {
        match self {
            Bitness::Bits16 => 16,
            Bitness::Bits32 => 32,
            Bitness::Bits64 => 64,
        }
    }

    /// True in 64-bit long mode.
    pub fn is_64(self) -> bool {
        self == Bitness::Bits64
    }
}

impl core::fmt::Display for Bitness {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}
