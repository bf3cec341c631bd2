//! VEX, XOP and EVEX extension prefix parsing.
//!
//! The introducer byte (C5/C4/8F/62) has already been consumed and, outside
//! 64-bit mode, the caller has already decided that the byte sequence is an
//! extension prefix rather than LDS/LES/BOUND/POP. These routines consume
//! the payload bytes and fill in the decode state.
//!
//! `Ok(None)` means the payload selected a nonexistent opcode map (or hit a
//! reserved bit pattern that ends parsing): the caller reports an invalid
//! instruction covering the bytes consumed so far.

use crate::cursor::Cursor;
use crate::error::DecodeError;
use crate::prefix::{EncodingKind, MandatoryPrefix, PrefixState};
use crate::table::OpcodeMap;

fn pp_to_prefix(pp: u32) -> MandatoryPrefix {
    match pp {
        1 => MandatoryPrefix::P66,
        2 => MandatoryPrefix::PF3,
        3 => MandatoryPrefix::PF2,
        _ => MandatoryPrefix::None,
    }
}

/// An extension prefix may not follow REX or a 66/F2/F3 prefix.
fn check_preceding_prefixes(state: &mut PrefixState) {
    if state.has_rex || state.mandatory_prefix != MandatoryPrefix::None {
        state.invalid = true;
    }
}

fn set_vvvv(state: &mut PrefixState, check: u32) {
    state.vvvv_check = check;
    state.vvvv = if state.bitness.is_64() { check } else { check & 0x07 };
}

/// Two-byte VEX, introduced by C5: one payload byte `RvvvvLpp`.
pub(crate) fn vex2(
    cursor: &mut Cursor<'_>,
    state: &mut PrefixState,
) -> Result<Option<OpcodeMap>, DecodeError> {
    check_preceding_prefixes(state);
    let b = cursor.read_u8()? as u32;
    state.encoding = EncodingKind::Vex;
    if state.bitness.is_64() {
        state.extra_register_base = (!b >> 4) & 8;
    }
    set_vvvv(state, (!b >> 3) & 0x0F);
    state.vector_length = (b >> 2) & 1;
    state.mandatory_prefix = pp_to_prefix(b & 3);
    Ok(Some(OpcodeMap::Vex0F))
}

/// Three-byte VEX, introduced by C4: payload `RXBmmmmm`, `WvvvvLpp`.
pub(crate) fn vex3(
    cursor: &mut Cursor<'_>,
    state: &mut PrefixState,
) -> Result<Option<OpcodeMap>, DecodeError> {
    check_preceding_prefixes(state);
    let b1 = cursor.read_u8()? as u32;
    let b2 = cursor.read_u8()? as u32;
    state.encoding = EncodingKind::Vex;
    let map = match b1 & 0x1F {
        1 => OpcodeMap::Vex0F,
        2 => OpcodeMap::Vex0F38,
        3 => OpcodeMap::Vex0F3A,
        _ => {
            state.invalid = true;
            return Ok(None);
        }
    };
    if state.bitness.is_64() {
        state.extra_register_base = (!b1 >> 4) & 8;
        state.extra_index_register_base = (!b1 >> 3) & 8;
        state.extra_base_register_base = (!b1 >> 2) & 8;
        if b2 & 0x80 != 0 {
            state.w = true;
            state.operand_size = crate::prefix::OpSize::Size64;
        }
    } else if b2 & 0x80 != 0 {
        state.w = true;
    }
    set_vvvv(state, (!b2 >> 3) & 0x0F);
    state.vector_length = (b2 >> 2) & 1;
    state.mandatory_prefix = pp_to_prefix(b2 & 3);
    Ok(Some(map))
}

/// XOP, introduced by 8F: same payload layout as three-byte VEX, with the
/// map selector starting at 8.
pub(crate) fn xop(
    cursor: &mut Cursor<'_>,
    state: &mut PrefixState,
) -> Result<Option<OpcodeMap>, DecodeError> {
    check_preceding_prefixes(state);
    let b1 = cursor.read_u8()? as u32;
    let b2 = cursor.read_u8()? as u32;
    state.encoding = EncodingKind::Xop;
    let map = match b1 & 0x1F {
        8 => OpcodeMap::Xop8,
        9 => OpcodeMap::Xop9,
        10 => OpcodeMap::XopA,
        _ => {
            state.invalid = true;
            return Ok(None);
        }
    };
    if state.bitness.is_64() {
        state.extra_register_base = (!b1 >> 4) & 8;
        state.extra_index_register_base = (!b1 >> 3) & 8;
        state.extra_base_register_base = (!b1 >> 2) & 8;
        if b2 & 0x80 != 0 {
            state.w = true;
            state.operand_size = crate::prefix::OpSize::Size64;
        }
    } else if b2 & 0x80 != 0 {
        state.w = true;
    }
    set_vvvv(state, (!b2 >> 3) & 0x0F);
    state.vector_length = (b2 >> 2) & 1;
    state.mandatory_prefix = pp_to_prefix(b2 & 3);
    Ok(Some(map))
}

/// EVEX, introduced by 62: payload `RXBR'00mm`, `Wvvvv1pp`, `zL'Lb V'aaa`.
pub(crate) fn evex(
    cursor: &mut Cursor<'_>,
    state: &mut PrefixState,
) -> Result<Option<OpcodeMap>, DecodeError> {
    check_preceding_prefixes(state);
    let p0 = cursor.read_u8()? as u32;
    let p1 = cursor.read_u8()? as u32;
    let p2 = cursor.read_u8()? as u32;
    state.encoding = EncodingKind::Evex;
    // Bits 2-3 of p0 are reserved and bit 2 of p1 must be set; anything
    // else is MVEX or garbage.
    if p0 & 0x0C != 0 || p1 & 0x04 == 0 {
        state.invalid = true;
        return Ok(None);
    }
    let map = match p0 & 0x03 {
        1 => OpcodeMap::Evex0F,
        2 => OpcodeMap::Evex0F38,
        3 => OpcodeMap::Evex0F3A,
        _ => {
            state.invalid = true;
            return Ok(None);
        }
    };
    if state.bitness.is_64() {
        state.extra_register_base = (!p0 >> 4) & 8;
        state.extra_register_base_evex = !p0 & 0x10;
        state.extra_index_register_base = (!p0 >> 3) & 8;
        state.extra_base_register_base = (!p0 >> 2) & 8;
        state.extra_base_register_base_evex = (!p0 & 0x40) >> 2;
        if p1 & 0x80 != 0 {
            state.w = true;
            state.operand_size = crate::prefix::OpSize::Size64;
        }
    } else if p1 & 0x80 != 0 {
        state.w = true;
    }
    let v_prime = (!p2 >> 3) & 1;
    set_vvvv(state, ((!p1 >> 3) & 0x0F) | (v_prime << 4));
    state.mandatory_prefix = pp_to_prefix(p1 & 3);
    state.zeroing = p2 & 0x80 != 0;
    state.vector_length = (p2 >> 5) & 3;
    state.broadcast = p2 & 0x10 != 0;
    state.aaa = p2 & 7;
    if state.aaa == 0 && state.zeroing {
        // Zeroing with no mask register selected.
        state.invalid = true;
    }
    Ok(Some(map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxdec_core::Bitness;

    fn state64() -> PrefixState {
        PrefixState::new(Bitness::Bits64)
    }

    #[test]
    fn vex2_fields() {
        // C5 F9 = VEX.128.66.0F, vvvv=0b1111 means "unused".
        let mut c = Cursor::new(&[0xF9], 0);
        let mut s = state64();
        let map = vex2(&mut c, &mut s).unwrap();
        assert_eq!(map, Some(OpcodeMap::Vex0F));
        assert_eq!(s.vvvv, 0);
        assert_eq!(s.vvvv_check, 0);
        assert_eq!(s.vector_length, 0);
        assert_eq!(s.mandatory_prefix, MandatoryPrefix::P66);
        assert_eq!(s.extra_register_base, 0);
    }

    #[test]
    fn vex3_map_and_w() {
        // C4 E2 C9: map 0F38, W=1, vvvv=6 -> register 6, pp=01.
        let mut c = Cursor::new(&[0xE2, 0xC9], 0);
        let mut s = state64();
        let map = vex3(&mut c, &mut s).unwrap();
        assert_eq!(map, Some(OpcodeMap::Vex0F38));
        assert!(s.w);
        assert_eq!(s.vvvv, 6);
        assert_eq!(s.mandatory_prefix, MandatoryPrefix::P66);
    }

    #[test]
    fn vex3_bad_map_is_invalid() {
        let mut c = Cursor::new(&[0xE4, 0xC9], 0);
        let mut s = state64();
        assert_eq!(vex3(&mut c, &mut s).unwrap(), None);
        assert!(s.invalid);
    }

    #[test]
    fn vex_after_rex_is_invalid() {
        let mut c = Cursor::new(&[0xF9], 0);
        let mut s = state64();
        s.has_rex = true;
        vex2(&mut c, &mut s).unwrap();
        assert!(s.invalid);
    }

    #[test]
    fn evex_fields() {
        // 62 F2 CD 0B: map 0F38, W=1, vvvv=6, pp=01, L'L=0, aaa=3.
        let mut c = Cursor::new(&[0xF2, 0xCD, 0x0B], 0);
        let mut s = state64();
        let map = evex(&mut c, &mut s).unwrap();
        assert_eq!(map, Some(OpcodeMap::Evex0F38));
        assert!(s.w);
        assert_eq!(s.vvvv, 6);
        assert_eq!(s.aaa, 3);
        assert_eq!(s.vector_length, 0);
        assert!(!s.zeroing);
        assert!(!s.broadcast);
    }

    #[test]
    fn evex_reserved_bits_are_invalid() {
        // p0 bit 2 set.
        let mut c = Cursor::new(&[0xF6, 0xCD, 0x0B], 0);
        let mut s = state64();
        assert_eq!(evex(&mut c, &mut s).unwrap(), None);
        assert!(s.invalid);

        // p1 bit 2 clear.
        let mut c = Cursor::new(&[0xF2, 0xC9, 0x0B], 0);
        let mut s = state64();
        assert_eq!(evex(&mut c, &mut s).unwrap(), None);
        assert!(s.invalid);
    }

    #[test]
    fn evex_zeroing_without_mask_is_invalid() {
        // p2 = 0x98: z=1, aaa=0.
        let mut c = Cursor::new(&[0xF2, 0xCD, 0x98], 0);
        let mut s = state64();
        assert!(evex(&mut c, &mut s).unwrap().is_some());
        assert!(s.invalid);
    }

    #[test]
    fn evex_v_prime_extends_vvvv_in_64_bit() {
        // p1 vvvv=0b1111 inverted -> 0; p2 V'=0 (inverted -> 1) adds 16.
        let mut c = Cursor::new(&[0xF2, 0xFD, 0x03], 0);
        let mut s = state64();
        evex(&mut c, &mut s).unwrap();
        assert_eq!(s.vvvv, 16);

        let mut c = Cursor::new(&[0xF2, 0xFD, 0x03], 0);
        let mut s = PrefixState::new(Bitness::Bits32);
        evex(&mut c, &mut s).unwrap();
        assert_eq!(s.vvvv, 0);
        assert_eq!(s.vvvv_check, 16);
    }
}
