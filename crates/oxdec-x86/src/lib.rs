//! x86 and x86-64 instruction decoder.
//!
//! Decodes 16-, 32- and 64-bit mode machine code into [`Instruction`]
//! values: legacy, VEX, XOP, EVEX and 3DNow! encodings, with full prefix,
//! ModRM/SIB and immediate handling.
//!
//! ```
//! use oxdec_core::{Bitness, OpKind};
//! use oxdec_x86::Decoder;
//!
//! // mov rax, [rip+0x1000]
//! let bytes = [0x48, 0x8B, 0x05, 0x00, 0x10, 0x00, 0x00];
//! let mut decoder = Decoder::with_ip(Bitness::Bits64, &bytes, 0x7FFF_0000);
//! let instr = decoder.decode().unwrap();
//! assert_eq!(instr.op_kind(1), OpKind::Memory);
//! assert_eq!(instr.ip_rel_memory_address(), Some(0x7FFF_1007));
//! ```

mod cursor;
mod decoder;
mod error;
mod modrm;
mod prefix;
mod table;
mod vex;

pub use cursor::MAX_INSTRUCTION_LEN;
pub use decoder::Decoder;
pub use error::DecodeError;

pub use oxdec_core::{
    Bitness, Code, Instruction, MemorySize, OpKind, Register, RoundingControl,
};
