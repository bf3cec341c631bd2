//! Byte cursor over the input stream.
//!
//! Reads are bounded two ways: running off the end of the buffer is a hard
//! [`DecodeError::UnexpectedEnd`], while crossing the architectural 15-byte
//! instruction limit latches the `too_long` flag and yields zero bytes so
//! the caller can finish parsing and report an invalid instruction of
//! length 15.

use crate::error::DecodeError;

/// Architectural maximum instruction length in bytes.
pub const MAX_INSTRUCTION_LEN: usize = 15;

pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    position: usize,
    /// Offset of the first byte of the current instruction.
    start: usize,
    too_long: bool,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(data: &'a [u8], position: usize) -> Self {
        Self {
            data,
            position,
            start: position,
            too_long: false,
        }
    }

    /// Bytes consumed since the instruction start, capped at the limit.
    pub(crate) fn consumed(&self) -> usize {
        self.position - self.start
    }

    pub(crate) fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn too_long(&self) -> bool {
        self.too_long
    }

    /// Looks at the next byte without consuming it.
    pub(crate) fn peek_u8(&self) -> Option<u8> {
        self.data.get(self.position).copied()
    }

    pub(crate) fn read_u8(&mut self) -> Result<u8, DecodeError> {
        if self.consumed() >= MAX_INSTRUCTION_LEN {
            self.too_long = true;
            return Ok(0);
        }
        match self.data.get(self.position) {
            Some(&b) => {
                self.position += 1;
                Ok(b)
            }
            None => Err(DecodeError::unexpected_end(self.position, 1)),
        }
    }

    pub(crate) fn read_u16(&mut self) -> Result<u16, DecodeError> {
        let lo = self.read_u8()? as u16;
        let hi = self.read_u8()? as u16;
        Ok(lo | (hi << 8))
    }

    pub(crate) fn read_u32(&mut self) -> Result<u32, DecodeError> {
        let mut v = 0u32;
        for shift in [0, 8, 16, 24] {
            v |= (self.read_u8()? as u32) << shift;
        }
        Ok(v)
    }

    pub(crate) fn read_u64(&mut self) -> Result<u64, DecodeError> {
        let lo = self.read_u32()? as u64;
        let hi = self.read_u32()? as u64;
        Ok(lo | (hi << 32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian() {
        let mut c = Cursor::new(&[0x78, 0x56, 0x34, 0x12], 0);
        assert_eq!(c.read_u32().unwrap(), 0x1234_5678);
        assert_eq!(c.consumed(), 4);
    }

    #[test]
    fn end_of_buffer_is_an_error() {
        let mut c = Cursor::new(&[0x90], 0);
        assert_eq!(c.read_u8().unwrap(), 0x90);
        assert_eq!(
            c.read_u8(),
            Err(DecodeError::UnexpectedEnd {
                position: 1,
                needed: 1
            })
        );
    }

    #[test]
    fn length_cap_latches_and_reads_zero() {
        let data = [0x66u8; 32];
        let mut c = Cursor::new(&data, 0);
        for _ in 0..MAX_INSTRUCTION_LEN {
            assert_eq!(c.read_u8().unwrap(), 0x66);
        }
        assert!(!c.too_long());
        assert_eq!(c.read_u8().unwrap(), 0);
        assert!(c.too_long());
        assert_eq!(c.consumed(), MAX_INSTRUCTION_LEN);
    }

    #[test]
    fn cap_is_relative_to_instruction_start() {
        let data = [0u8; 40];
        let mut c = Cursor::new(&data, 20);
        for _ in 0..MAX_INSTRUCTION_LEN {
            c.read_u8().unwrap();
        }
        c.read_u8().unwrap();
        assert!(c.too_long());
        assert_eq!(c.position(), 20 + MAX_INSTRUCTION_LEN);
    }
}
