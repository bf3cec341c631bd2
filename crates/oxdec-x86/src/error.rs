//! Decode error types.

use thiserror::Error;

/// Error type for instruction decoding.
///
/// Malformed encodings (reserved bits, unmapped opcodes, misuse of EVEX
/// fields) are not errors: they decode to an invalid-instruction sentinel
/// so a linear sweep can keep going. The only hard failure is running out
/// of input bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The byte stream ended in the middle of an instruction.
    #[error("unexpected end of input at {position:#x}: need {needed} more byte(s)")]
    UnexpectedEnd { position: usize, needed: usize },
}

impl DecodeError {
    /// Creates a new UnexpectedEnd error.
    pub fn unexpected_end(position: usize, needed: usize) -> Self {
        Self::UnexpectedEnd { position, needed }
    }
}
