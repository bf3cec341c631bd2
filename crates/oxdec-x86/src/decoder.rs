//! The decoder: prefix scanning, table lookup and operand assembly.
//!
//! [`Decoder`] walks a byte slice and produces one [`Instruction`] per
//! `decode()` call. Undefined encodings become the invalid-instruction
//! sentinel covering the bytes consumed, so a linear sweep never stalls;
//! running out of input is the only hard error.

use oxdec_core::{
    Bitness, Code, Instruction, MemorySize, OpKind, Register, RoundingControl,
};

use crate::cursor::Cursor;
use crate::error::DecodeError;
use crate::modrm;
use crate::prefix::{self, EncodingKind, MandatoryPrefix, OpSize, PrefixState};
use crate::table::{
    self, entry_flags, LCond, Lookup, MatchCtx, OpSpec, OpcodeMap, PpCond, Row, TupleType,
};
use crate::vex;

/// Streaming x86 instruction decoder.
///
/// ```
/// use oxdec_core::Bitness;
/// use oxdec_x86::Decoder;
///
/// let bytes = [0x48, 0x01, 0xD8]; // add rax, rbx
/// let mut decoder = Decoder::new(Bitness::Bits64, &bytes);
/// let instr = decoder.decode().unwrap();
/// assert_eq!(instr.byte_length, 3);
/// ```
#[derive(Debug)]
pub struct Decoder<'a> {
    data: &'a [u8],
    bitness: Bitness,
    position: usize,
    ip: u64,
}

impl<'a> Decoder<'a> {
    /// Creates a decoder over `data` with instruction pointer 0.
    pub fn new(bitness: Bitness, data: &'a [u8]) -> Self {
        Self::with_ip(bitness, data, 0)
    }

    /// Creates a decoder whose first instruction is at address `ip`.
    pub fn with_ip(bitness: Bitness, data: &'a [u8], ip: u64) -> Self {
        Self {
            data,
            bitness,
            position: 0,
            ip,
        }
    }

    /// Code bitness this decoder was created with.
    pub fn bitness(&self) -> Bitness {
        self.bitness
    }

    /// Address of the next instruction to decode.
    pub fn ip(&self) -> u64 {
        self.ip
    }

    /// Byte offset of the next instruction within the input slice.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves the decoder to a new byte offset. The instruction pointer is
    /// not adjusted; use [`set_ip`](Self::set_ip) alongside when needed.
    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    /// Sets the address reported for the next instruction.
    pub fn set_ip(&mut self, ip: u64) {
        self.ip = ip;
    }

    /// True while input bytes remain.
    pub fn can_decode(&self) -> bool {
        self.position < self.data.len()
    }

    /// Decodes the instruction at the current position.
    ///
    /// On success the decoder advances past the instruction, which may be
    /// the invalid sentinel for undefined encodings. If the input ends
    /// mid-instruction the decoder consumes the remaining bytes and
    /// returns [`DecodeError::UnexpectedEnd`].
    pub fn decode(&mut self) -> Result<Instruction, DecodeError> {
        let mut cursor = Cursor::new(self.data, self.position);
        let mut state = PrefixState::new(self.bitness);
        let mut instr = Instruction::default();
        instr.ip = self.ip;

        if let Err(e) = decode_instr(&mut cursor, &mut state, &mut instr) {
            let remaining = self.data.len() - self.position;
            self.position = self.data.len();
            self.ip = self.ip.wrapping_add(remaining as u64);
            return Err(e);
        }

        let len = cursor.consumed();
        if state.invalid || cursor.too_long() {
            let mut sentinel = Instruction::default();
            sentinel.ip = instr.ip;
            instr = sentinel;
        }
        instr.byte_length = len as u8;
        instr.next_ip = instr.ip.wrapping_add(len as u64);
        self.position = cursor.position();
        self.ip = self.ip.wrapping_add(len as u64);
        Ok(instr)
    }
}

impl<'a> Iterator for Decoder<'a> {
    type Item = Result<Instruction, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.can_decode() {
            Some(self.decode())
        } else {
            None
        }
    }
}

/// C4/C5/62 introduce an extension prefix in 64-bit mode unconditionally;
/// elsewhere only when the next byte's mod field is 3, which no
/// LES/LDS/BOUND encoding can produce.
fn is_ext_prefix(cursor: &Cursor<'_>, state: &PrefixState) -> bool {
    state.bitness.is_64()
        || matches!(cursor.peek_u8(), Some(p) if p & 0xC0 == 0xC0)
}

/// 8F is XOP when the map selector in the next byte is 8 or more; lower
/// values leave the reg field of POP r/m intact.
fn is_xop_prefix(cursor: &Cursor<'_>) -> bool {
    matches!(cursor.peek_u8(), Some(p) if p & 0x1F >= 8)
}

fn decode_instr(
    cursor: &mut Cursor<'_>,
    state: &mut PrefixState,
    instr: &mut Instruction,
) -> Result<(), DecodeError> {
    let b = prefix::scan(cursor, state, instr)?;
    let is_64 = state.bitness.is_64();

    let (map, opcode) = match b {
        0x0F => {
            let b2 = cursor.read_u8()?;
            match b2 {
                0x38 => (OpcodeMap::Map0F38, cursor.read_u8()?),
                0x3A => (OpcodeMap::Map0F3A, cursor.read_u8()?),
                0x0F => return decode_3dnow(cursor, state, instr),
                _ => (OpcodeMap::Map0F, b2),
            }
        }
        0xC5 if is_ext_prefix(cursor, state) => match vex::vex2(cursor, state)? {
            Some(map) => (map, cursor.read_u8()?),
            None => return Ok(()),
        },
        0xC4 if is_ext_prefix(cursor, state) => match vex::vex3(cursor, state)? {
            Some(map) => (map, cursor.read_u8()?),
            None => return Ok(()),
        },
        0x62 if is_ext_prefix(cursor, state) => match vex::evex(cursor, state)? {
            Some(map) => (map, cursor.read_u8()?),
            None => return Ok(()),
        },
        0x8F if is_xop_prefix(cursor) => match vex::xop(cursor, state)? {
            Some(map) => (map, cursor.read_u8()?),
            None => return Ok(()),
        },
        _ => (OpcodeMap::One, b),
    };

    // EVEX needs the ModRM byte before the lookup: the b bit changes
    // meaning (and the row to match) depending on the mod field.
    if map.is_evex() {
        modrm::read_modrm(cursor, state)?;
    }

    let mut ctx = MatchCtx {
        is_64,
        pp: state.mandatory_prefix,
        w: state.w,
        l: match state.vector_length {
            1 => LCond::L256,
            2 => LCond::L512,
            _ => LCond::L128,
        },
        reg: if state.has_modrm { Some(state.reg) } else { None },
        require_er_sae: false,
    };

    // The b bit on an EVEX register form requests static rounding or SAE,
    // which only the 512-bit rows offer; L'L then carries the rounding
    // mode instead of a length.
    let evex_reg_b = map.is_evex() && state.broadcast && state.mod_ == 3;
    if evex_reg_b {
        ctx.l = LCond::L512;
        ctx.require_er_sae = true;
    } else if state.vector_length == 3 {
        state.invalid = true;
        return Ok(());
    }

    // REX.B turns NOP into XCHG R8,rAX; the F3 form stays PAUSE only
    // without it.
    let lookup_opcode =
        if map == OpcodeMap::One && opcode == 0x90 && state.extra_base_register_base != 0 {
            0x91
        } else {
            opcode
        };

    let row = match table::lookup(map.rows(), lookup_opcode, &ctx) {
        Lookup::Found(row) => row,
        Lookup::NeedModRm => {
            modrm::read_modrm(cursor, state)?;
            ctx.reg = Some(state.reg);
            match table::lookup(map.rows(), lookup_opcode, &ctx) {
                Lookup::Found(row) => row,
                _ => {
                    state.invalid = true;
                    return Ok(());
                }
            }
        }
        Lookup::None => {
            state.invalid = true;
            return Ok(());
        }
    };

    // A 66/F2/F3 that selected the row is part of the encoding, not a
    // size override or REP prefix.
    if state.encoding == EncodingKind::Legacy {
        if let PpCond::Exact(pp) = row.pp {
            match pp {
                MandatoryPrefix::P66 => {
                    state.operand_size = if state.w {
                        OpSize::Size64
                    } else {
                        state.default_operand_size()
                    };
                }
                MandatoryPrefix::PF3 => instr.has_rep_prefix = false,
                MandatoryPrefix::PF2 => instr.has_repne_prefix = false,
                MandatoryPrefix::None => {}
            }
        }
    }

    if map.is_evex() {
        if state.aaa != 0 {
            instr.op_mask = Register::k(state.aaa);
            instr.zeroing_masking = state.zeroing;
            if row.flags & entry_flags::MASK == 0 {
                state.invalid = true;
            }
        }
        if evex_reg_b {
            if row.flags & entry_flags::ER != 0 {
                instr.rounding_control = match state.vector_length {
                    0 => RoundingControl::RoundToNearest,
                    1 => RoundingControl::RoundDown,
                    2 => RoundingControl::RoundUp,
                    _ => RoundingControl::RoundTowardZero,
                };
            } else {
                instr.suppress_all_exceptions = true;
            }
        } else if state.broadcast {
            if row.flags & entry_flags::BCST != 0 {
                instr.is_broadcast = true;
            } else {
                state.invalid = true;
            }
        }
    }

    // A nonzero vvvv (or EVEX V') must be consumed by an operand.
    let uses_vvvv = row.ops.iter().any(|op| matches!(op, OpSpec::H | OpSpec::Hv));
    if !uses_vvvv && state.vvvv_check != 0 {
        state.invalid = true;
    }

    let size = effective_op_size(state, row);
    instr.code = row.codes[size as usize];

    // E3 tests CX/ECX/RCX per the effective address size, which no other
    // part of the row key captures.
    if instr.code == Code::Jcxz_rel8 {
        instr.code = match state.address_size {
            OpSize::Size16 => Code::Jcxz_rel8,
            OpSize::Size32 => Code::Jecxz_rel8,
            OpSize::Size64 => Code::Jrcxz_rel8,
        };
    }

    if !state.has_modrm && needs_modrm(row.ops) {
        modrm::read_modrm(cursor, state)?;
    }
    if state.has_modrm {
        if row.flags & entry_flags::MEM_ONLY != 0 && state.mod_ == 3 {
            state.invalid = true;
        }
        if row.flags & entry_flags::REG_ONLY != 0 && state.mod_ != 3 {
            state.invalid = true;
        }
    }

    assemble_operands(cursor, state, instr, row, size, opcode)
}

/// 3DNow! places the actual opcode byte after the operands: 0F 0F then
/// ModRM, addressing bytes and a trailing selector.
fn decode_3dnow(
    cursor: &mut Cursor<'_>,
    state: &mut PrefixState,
    instr: &mut Instruction,
) -> Result<(), DecodeError> {
    modrm::read_modrm(cursor, state)?;
    instr.op_count = 2;
    instr.op_kinds[0] = OpKind::Register;
    instr.op_registers[0] = Register::mm(state.reg);
    if state.mod_ == 3 {
        instr.op_kinds[1] = OpKind::Register;
        instr.op_registers[1] = Register::mm(state.rm);
    } else {
        instr.op_kinds[1] = OpKind::Memory;
        instr.memory_size = MemorySize::Packed64_Float32;
        modrm::read_op_mem(cursor, state, instr, TupleType::None)?;
    }
    let selector = cursor.read_u8()?;
    match table::map_3dnow::lookup_3dnow(selector) {
        Some(code) => instr.code = code,
        None => state.invalid = true,
    }
    Ok(())
}

/// Applies the D64/F64 mode rules and the 32-bit floor for vector
/// encodings (VEX.W0 BMI in 16-bit mode still operates on 32 bits).
fn effective_op_size(state: &PrefixState, row: &Row) -> OpSize {
    let mut size = state.operand_size;
    if state.bitness.is_64() {
        if row.flags & entry_flags::F64 != 0 {
            size = OpSize::Size64;
        } else if row.flags & entry_flags::D64 != 0 && size != OpSize::Size16 {
            size = OpSize::Size64;
        }
    }
    if state.encoding != EncodingKind::Legacy && size < OpSize::Size32 {
        size = OpSize::Size32;
    }
    size
}

fn needs_modrm(ops: &[OpSpec]) -> bool {
    ops.iter().any(|op| {
        matches!(
            op,
            OpSpec::Eb
                | OpSpec::Ev
                | OpSpec::Ew
                | OpSpec::Ed
                | OpSpec::Eq
                | OpSpec::Gb
                | OpSpec::Gv
                | OpSpec::Gw
                | OpSpec::M
                | OpSpec::Sw
                | OpSpec::V
                | OpSpec::W
                | OpSpec::W128
                | OpSpec::P
                | OpSpec::Q
        )
    })
}

fn gpr_sized(size: OpSize, n: u32) -> Register {
    match size {
        OpSize::Size16 => Register::gpr16(n),
        OpSize::Size32 => Register::gpr32(n),
        OpSize::Size64 => Register::gpr64(n),
    }
}

/// Vector register width is fixed by the matched row, so forced-L512
/// rounding forms still name ZMM registers.
fn vec_sized(l: LCond, n: u32) -> Register {
    match l {
        LCond::L256 => Register::ymm(n),
        LCond::L512 => Register::zmm(n),
        _ => Register::xmm(n),
    }
}

fn set_reg(instr: &mut Instruction, i: usize, reg: Register) {
    instr.op_kinds[i] = OpKind::Register;
    instr.op_registers[i] = reg;
}

fn set_mem(
    cursor: &mut Cursor<'_>,
    state: &PrefixState,
    instr: &mut Instruction,
    row: &Row,
    size: OpSize,
    i: usize,
) -> Result<(), DecodeError> {
    instr.op_kinds[i] = OpKind::Memory;
    instr.memory_size = if instr.is_broadcast {
        row.bcst_size
    } else {
        row.mem_size[size as usize]
    };
    modrm::read_op_mem(cursor, state, instr, row.tuple)
}

/// Branch targets are relative to the end of the instruction; the
/// displacement bytes are always the last bytes, so the cursor already
/// sits there. 16- and 32-bit targets wrap within their width.
fn set_branch(instr: &mut Instruction, i: usize, size: OpSize, consumed: usize, rel: i64) {
    let next = instr.ip.wrapping_add(consumed as u64);
    let target = next.wrapping_add(rel as u64);
    match size {
        OpSize::Size16 => {
            instr.op_kinds[i] = OpKind::NearBranch16;
            instr.near_branch = target & 0xFFFF;
        }
        OpSize::Size32 => {
            instr.op_kinds[i] = OpKind::NearBranch32;
            instr.near_branch = target & 0xFFFF_FFFF;
        }
        OpSize::Size64 => {
            instr.op_kinds[i] = OpKind::NearBranch64;
            instr.near_branch = target;
        }
    }
}

fn assemble_operands(
    cursor: &mut Cursor<'_>,
    state: &mut PrefixState,
    instr: &mut Instruction,
    row: &Row,
    size: OpSize,
    opcode: u8,
) -> Result<(), DecodeError> {
    instr.op_count = row.ops.len() as u8;
    for (i, &op) in row.ops.iter().enumerate() {
        match op {
            OpSpec::Eb => {
                if state.mod_ == 3 {
                    let n = state.rm + state.extra_base_register_base;
                    set_reg(instr, i, Register::gpr8(n, state.has_rex));
                } else {
                    set_mem(cursor, state, instr, row, size, i)?;
                }
            }
            OpSpec::Ev => {
                if state.mod_ == 3 {
                    let n = state.rm + state.extra_base_register_base;
                    set_reg(instr, i, gpr_sized(size, n));
                } else {
                    set_mem(cursor, state, instr, row, size, i)?;
                }
            }
            OpSpec::Ew => {
                if state.mod_ == 3 {
                    set_reg(instr, i, Register::gpr16(state.rm + state.extra_base_register_base));
                } else {
                    set_mem(cursor, state, instr, row, size, i)?;
                }
            }
            OpSpec::Ed => {
                if state.mod_ == 3 {
                    set_reg(instr, i, Register::gpr32(state.rm + state.extra_base_register_base));
                } else {
                    set_mem(cursor, state, instr, row, size, i)?;
                }
            }
            OpSpec::Eq => {
                if state.mod_ == 3 {
                    set_reg(instr, i, Register::gpr64(state.rm + state.extra_base_register_base));
                } else {
                    set_mem(cursor, state, instr, row, size, i)?;
                }
            }
            OpSpec::Gb => {
                let n = state.reg + state.extra_register_base;
                set_reg(instr, i, Register::gpr8(n, state.has_rex));
            }
            OpSpec::Gv => {
                set_reg(instr, i, gpr_sized(size, state.reg + state.extra_register_base));
            }
            OpSpec::Gw => {
                set_reg(instr, i, Register::gpr16(state.reg + state.extra_register_base));
            }
            OpSpec::M => {
                if state.mod_ == 3 {
                    state.invalid = true;
                } else {
                    set_mem(cursor, state, instr, row, size, i)?;
                }
            }
            OpSpec::Sw => {
                // Reserved encodings, and CS as a destination, do not exist.
                let seg = Register::segment(state.reg);
                if seg == Register::None || (i == 0 && state.reg == 1) {
                    state.invalid = true;
                }
                set_reg(instr, i, seg);
            }
            OpSpec::AccB => set_reg(instr, i, Register::AL),
            OpSpec::AccV => set_reg(instr, i, gpr_sized(size, 0)),
            OpSpec::Dx => set_reg(instr, i, Register::DX),
            OpSpec::Seg(seg) => set_reg(instr, i, seg),
            OpSpec::OpRegB => {
                let n = (opcode & 7) as u32 + state.extra_base_register_base;
                set_reg(instr, i, Register::gpr8(n, state.has_rex));
            }
            OpSpec::OpRegV => {
                let n = (opcode & 7) as u32 + state.extra_base_register_base;
                set_reg(instr, i, gpr_sized(size, n));
            }
            OpSpec::Ib => {
                instr.immediate = cursor.read_u8()? as u64;
                instr.op_kinds[i] = OpKind::Immediate8;
            }
            OpSpec::IbS => {
                instr.immediate = cursor.read_u8()? as u64;
                instr.op_kinds[i] = match size {
                    OpSize::Size16 => OpKind::Immediate8to16,
                    OpSize::Size32 => OpKind::Immediate8to32,
                    OpSize::Size64 => OpKind::Immediate8to64,
                };
            }
            OpSpec::Iw => {
                instr.immediate = cursor.read_u16()? as u64;
                instr.op_kinds[i] = OpKind::Immediate16;
            }
            OpSpec::Iz => match size {
                OpSize::Size16 => {
                    instr.immediate = cursor.read_u16()? as u64;
                    instr.op_kinds[i] = OpKind::Immediate16;
                }
                OpSize::Size32 => {
                    instr.immediate = cursor.read_u32()? as u64;
                    instr.op_kinds[i] = OpKind::Immediate32;
                }
                OpSize::Size64 => {
                    instr.immediate = cursor.read_u32()? as u64;
                    instr.op_kinds[i] = OpKind::Immediate32to64;
                }
            },
            OpSpec::Iv => match size {
                OpSize::Size16 => {
                    instr.immediate = cursor.read_u16()? as u64;
                    instr.op_kinds[i] = OpKind::Immediate16;
                }
                OpSize::Size32 => {
                    instr.immediate = cursor.read_u32()? as u64;
                    instr.op_kinds[i] = OpKind::Immediate32;
                }
                OpSize::Size64 => {
                    instr.immediate = cursor.read_u64()?;
                    instr.op_kinds[i] = OpKind::Immediate64;
                }
            },
            OpSpec::Ib2 => {
                instr.immediate2 = cursor.read_u8()?;
                instr.op_kinds[i] = OpKind::Immediate8_2nd;
            }
            OpSpec::One => {
                instr.immediate = 1;
                instr.op_kinds[i] = OpKind::Immediate8;
            }
            OpSpec::Cl => set_reg(instr, i, Register::CL),
            OpSpec::Jb => {
                let rel = cursor.read_u8()? as i8 as i64;
                set_branch(instr, i, size, cursor.consumed(), rel);
            }
            OpSpec::Jz => {
                let rel = if size == OpSize::Size16 {
                    cursor.read_u16()? as i16 as i64
                } else {
                    cursor.read_u32()? as i32 as i64
                };
                set_branch(instr, i, size, cursor.consumed(), rel);
            }
            OpSpec::SrcSI => {
                instr.op_kinds[i] = match state.address_size {
                    OpSize::Size16 => OpKind::MemorySegSI,
                    OpSize::Size32 => OpKind::MemorySegESI,
                    OpSize::Size64 => OpKind::MemorySegRSI,
                };
                instr.memory_size = row.mem_size[size as usize];
            }
            OpSpec::DstDI => {
                instr.op_kinds[i] = match state.address_size {
                    OpSize::Size16 => OpKind::MemoryESDI,
                    OpSize::Size32 => OpKind::MemoryESEDI,
                    OpSize::Size64 => OpKind::MemoryESRDI,
                };
                instr.memory_size = row.mem_size[size as usize];
            }
            OpSpec::MOffs => {
                instr.op_kinds[i] = OpKind::Memory;
                instr.memory_size = row.mem_size[size as usize];
                match state.address_size {
                    OpSize::Size16 => {
                        instr.memory_displacement = cursor.read_u16()? as u64;
                        instr.memory_displ_size = 2;
                    }
                    OpSize::Size32 => {
                        instr.memory_displacement = cursor.read_u32()? as u64;
                        instr.memory_displ_size = 4;
                    }
                    OpSize::Size64 => {
                        instr.memory_displacement = cursor.read_u64()?;
                        instr.memory_displ_size = 8;
                    }
                }
            }
            OpSpec::V => {
                let n = state.reg
                    + state.extra_register_base
                    + state.extra_register_base_evex;
                set_reg(instr, i, vec_sized(row.l, n));
            }
            OpSpec::H => set_reg(instr, i, vec_sized(row.l, state.vvvv)),
            OpSpec::W => {
                if state.mod_ == 3 {
                    let n = state.rm
                        + state.extra_base_register_base
                        + state.extra_base_register_base_evex;
                    set_reg(instr, i, vec_sized(row.l, n));
                } else {
                    set_mem(cursor, state, instr, row, size, i)?;
                }
            }
            OpSpec::W128 => {
                if state.mod_ == 3 {
                    let n = state.rm
                        + state.extra_base_register_base
                        + state.extra_base_register_base_evex;
                    set_reg(instr, i, Register::xmm(n));
                } else {
                    set_mem(cursor, state, instr, row, size, i)?;
                }
            }
            OpSpec::Hv => set_reg(instr, i, gpr_sized(size, state.vvvv)),
            OpSpec::P => set_reg(instr, i, Register::mm(state.reg)),
            OpSpec::Q => {
                if state.mod_ == 3 {
                    set_reg(instr, i, Register::mm(state.rm));
                } else {
                    set_mem(cursor, state, instr, row, size, i)?;
                }
            }
            OpSpec::Is4 => {
                let v = cursor.read_u8()? as u32;
                let n = if state.bitness.is_64() {
                    (v >> 4) & 0xF
                } else {
                    (v >> 4) & 7
                };
                set_reg(instr, i, vec_sized(row.l, n));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode64(bytes: &[u8]) -> Instruction {
        Decoder::new(Bitness::Bits64, bytes).decode().unwrap()
    }

    #[test]
    fn add_rax_rbx() {
        let instr = decode64(&[0x48, 0x01, 0xD8]);
        assert_eq!(instr.code, Code::Add_rm64_r64);
        assert_eq!(instr.byte_length, 3);
        assert_eq!(instr.op_register(0), Register::RAX);
        assert_eq!(instr.op_register(1), Register::RBX);
    }

    #[test]
    fn nop_pause_and_xchg_r8() {
        assert_eq!(decode64(&[0x90]).code, Code::Nopd);
        assert_eq!(decode64(&[0xF3, 0x90]).code, Code::Pause);
        let instr = decode64(&[0x41, 0x90]);
        assert_eq!(instr.code, Code::Xchg_r64_RAX);
        assert_eq!(instr.op_register(0), Register::R8);

        // REX.B wins over F3.
        let instr = decode64(&[0xF3, 0x41, 0x90]);
        assert_eq!(instr.code, Code::Xchg_r64_RAX);
        assert!(instr.has_rep_prefix);
    }

    #[test]
    fn undefined_opcode_is_sentinel_not_error() {
        let instr = decode64(&[0xF1]);
        assert!(instr.is_invalid());
        assert_eq!(instr.byte_length, 1);
    }

    #[test]
    fn truncated_instruction_is_an_error() {
        let mut decoder = Decoder::new(Bitness::Bits64, &[0x48, 0x01]);
        assert!(matches!(
            decoder.decode(),
            Err(DecodeError::UnexpectedEnd { .. })
        ));
        // The error consumes the rest of the input.
        assert!(!decoder.can_decode());
    }

    #[test]
    fn fifteen_byte_cap() {
        // 14 segment overrides followed by what would be ADD r/m32, r32.
        let mut bytes = vec![0x2E; 14];
        bytes.extend_from_slice(&[0x01, 0xD8]);
        let instr = Decoder::new(Bitness::Bits64, &bytes).decode().unwrap();
        assert!(instr.is_invalid());
        assert_eq!(instr.byte_length, 15);
    }

    #[test]
    fn iterator_sweeps_and_terminates() {
        let bytes = [0x90, 0x48, 0x01, 0xD8, 0x90];
        let decoded: Vec<_> = Decoder::new(Bitness::Bits64, &bytes)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(decoded.len(), 3);
        assert_eq!(decoded[1].ip, 1);
        assert_eq!(decoded[2].next_ip, 5);
    }
}
