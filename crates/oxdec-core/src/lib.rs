//! # oxdec-core
//!
//! Value types shared by the oxdec x86/x64 decoder and its consumers:
//! the [`Instruction`] decode result and the closed enumerations it is
//! built from ([`Code`], [`Register`], [`OpKind`], [`MemorySize`]).
//!
//! This crate contains no decoding logic; see `oxdec-x86`.

pub mod arch;
pub mod code;
pub mod instruction;
pub mod memory_size;
pub mod op_kind;
pub mod register;

pub use arch::Bitness;
pub use code::Code;
pub use instruction::{Instruction, RoundingControl};
pub use memory_size::MemorySize;
pub use op_kind::OpKind;
pub use register::Register;
