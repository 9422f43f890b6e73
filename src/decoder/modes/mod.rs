//! Data Matrix encodation mode decoders
//!
//! One decoder per encodation scheme of ISO/IEC 16022:2006, 5.2:
//! - ASCII: single codewords, digit pairs, latches and markers
//! - C40 / Text: base 40 triples with shift sets
//! - ANSI X12: base 40 triples without shifts
//! - EDIFACT: 6-bit packed values
//! - Base 256: randomized raw bytes

pub mod ascii;
pub mod base256;
pub mod c40;
pub mod edifact;
pub mod x12;

use crate::decoder::bitstream::BitSource;
use crate::decoder::tables::TRIPLE_UNLATCH;
use crate::error::FormatError;

/// Read the next codeword pair of a C40, Text or X12 segment.
///
/// Returns `None` when the segment is over: either the unlatch codeword
/// was read, or a single codeword is left (that one is ASCII encoded).
pub(crate) fn read_triple(bits: &mut BitSource) -> Result<Option<[i32; 3]>, FormatError> {
    if bits.available() == 8 {
        return Ok(None);
    }
    let first = bits.read_codeword()?;
    if first == TRIPLE_UNLATCH {
        return Ok(None);
    }
    let second = bits.read_codeword()?;
    Ok(Some(unpack_triple(first, second)))
}

/// Split a codeword pair into three values: `(1600 * c1) + (40 * c2) + c3 + 1`.
///
/// The all-zero pair packs -1, which truncating division splits into
/// `[0, 0, -1]`.
pub(crate) fn unpack_triple(first: u8, second: u8) -> [i32; 3] {
    let full = ((first as i32) << 8) + second as i32 - 1;
    let c1 = full / 1600;
    let rest = full - c1 * 1600;
    let c2 = rest / 40;
    let c3 = rest - c2 * 40;
    [c1, c2, c3]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpack_triple() {
        // 1600 * 3 + 40 * 14 + 15 + 1 = 5376 = 0x1500
        assert_eq!(unpack_triple(0x15, 0x00), [3, 14, 15]);
        assert_eq!(unpack_triple(0x00, 0x01), [0, 0, 0]);
        assert_eq!(unpack_triple(0x00, 0x00), [0, 0, -1]);
        // 65534 / 1600 = 40, past every table
        assert_eq!(unpack_triple(0xFF, 0xFF), [40, 38, 14]);
    }

    #[test]
    fn test_read_triple_stops_on_last_codeword() {
        let bytes = [0x15];
        let mut bits = BitSource::new(&bytes);
        assert_eq!(read_triple(&mut bits), Ok(None));
        assert_eq!(bits.available(), 8);
    }

    #[test]
    fn test_read_triple_stops_on_unlatch() {
        let bytes = [254, 0x15, 0x00];
        let mut bits = BitSource::new(&bytes);
        assert_eq!(read_triple(&mut bits), Ok(None));
        assert_eq!(bits.available(), 16);
    }
}
