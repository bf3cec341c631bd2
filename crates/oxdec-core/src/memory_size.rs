//! Memory operand sizes and layouts.

/// Size and element layout of a memory operand.
///
/// Scalar variants name the element type directly. `PackedN_*` variants
/// are N-bit vectors of the given element; `BroadcastN_*` variants mean a
/// single memory element is replicated to an N-bit vector. `Unknown` marks
/// instructions without a sized memory operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(non_camel_case_types)]
#[allow(missing_docs)]
pub enum MemorySize {
    #[default]
    Unknown,

    UInt8,
    UInt16,
    UInt32,
    UInt64,
    UInt128,
    UInt256,
    UInt512,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,

    /// 16:16 far pointer (LES/LDS with a 16-bit operand size).
    SegPtr16,
    /// 16:32 far pointer.
    SegPtr32,
    /// Pair of 16-bit bounds for BOUND.
    Bound16_WordWord,
    /// Pair of 32-bit bounds for BOUND.
    Bound32_DwordDword,

    Packed64_Int8,
    Packed64_Int16,
    Packed64_Float32,
    Packed128_Int8,
    Packed128_Int16,
    Packed128_Int32,
    Packed128_Int64,
    Packed128_Float32,
    Packed128_Float64,
    Packed256_Int8,
    Packed256_Int16,
    Packed256_Int32,
    Packed256_Int64,
    Packed256_Float32,
    Packed256_Float64,
    Packed512_Int32,
    Packed512_Int64,
    Packed512_Float32,
    Packed512_Float64,

    Broadcast128_Int32,
    Broadcast128_Int64,
    Broadcast128_Float32,
    Broadcast128_Float64,
    /// One 64-bit element read as two packed dwords (VPMULDQ forms).
    Broadcast128_2xInt32,
    Broadcast256_Int32,
    Broadcast256_Int64,
    Broadcast256_Float32,
    Broadcast256_Float64,
    Broadcast256_2xInt32,
    Broadcast512_Int32,
    Broadcast512_Int64,
    Broadcast512_Float32,
    Broadcast512_Float64,
    Broadcast512_2xInt32,
}

impl MemorySize {
    /// Number of bytes actually read or written at the memory operand.
    /// Broadcast forms count only the element in memory.
    pub fn size(self) -> u32 {
        use MemorySize::*;
        match self {
            Unknown => 0,
            UInt8 | Int8 => 1,
            UInt16 | Int16 => 2,
            UInt32 | Int32 | Float32 => 4,
            UInt64 | Int64 | Float64 => 8,
            UInt128 => 16,
            UInt256 => 32,
            UInt512 => 64,
            SegPtr16 | Bound16_WordWord => 4,
            SegPtr32 => 6,
            Bound32_DwordDword => 8,
            Packed64_Int8 | Packed64_Int16 | Packed64_Float32 => 8,
            Packed128_Int8 | Packed128_Int16 | Packed128_Int32 | Packed128_Int64
            | Packed128_Float32 | Packed128_Float64 => 16,
            Packed256_Int8 | Packed256_Int16 | Packed256_Int32 | Packed256_Int64
            | Packed256_Float32 | Packed256_Float64 => 32,
            Packed512_Int32 | Packed512_Int64 | Packed512_Float32 | Packed512_Float64 => 64,
            Broadcast128_Int32 | Broadcast256_Int32 | Broadcast512_Int32
            | Broadcast128_Float32 | Broadcast256_Float32 | Broadcast512_Float32 => 4,
            Broadcast128_Int64 | Broadcast256_Int64 | Broadcast512_Int64
            | Broadcast128_Float64 | Broadcast256_Float64 | Broadcast512_Float64
            | Broadcast128_2xInt32 | Broadcast256_2xInt32 | Broadcast512_2xInt32 => 8,
        }
    }

    /// True for the broadcast layouts.
    pub fn is_broadcast(self) -> bool {
        use MemorySize::*;
        matches!(
            self,
            Broadcast128_Int32
                | Broadcast128_Int64
                | Broadcast128_Float32
                | Broadcast128_Float64
                | Broadcast128_2xInt32
                | Broadcast256_Int32
                | Broadcast256_Int64
                | Broadcast256_Float32
                | Broadcast256_Float64
                | Broadcast256_2xInt32
                | Broadcast512_Int32
                | Broadcast512_Int64
                | Broadcast512_Float32
                | Broadcast512_Float64
                | Broadcast512_2xInt32
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broadcast_reads_one_element() {
        assert_eq!(MemorySize::Broadcast512_Float32.size(), 4);
        assert_eq!(MemorySize::Broadcast128_2xInt32.size(), 8);
        assert!(MemorySize::Broadcast128_2xInt32.is_broadcast());
        assert!(!MemorySize::Packed128_Int32.is_broadcast());
    }

    #[test]
    fn packed_sizes() {
        assert_eq!(MemorySize::Packed512_Float64.size(), 64);
        assert_eq!(MemorySize::Packed64_Int8.size(), 8);
        assert_eq!(MemorySize::SegPtr32.size(), 6);
    }
}
