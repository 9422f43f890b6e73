/// ANSI X12 encodation decoder (ISO/IEC 16022:2006, 5.2.7)
use crate::decoder::bitstream::BitSource;
use crate::decoder::modes::read_triple;
use crate::decoder::output::DecodeOutput;
use crate::error::FormatError;
use crate::models::Mode;

/// Decode an X12 segment. Same triple packing as C40, no shifts.
pub struct X12Decoder;

impl X12Decoder {
    pub fn decode(bits: &mut BitSource, out: &mut DecodeOutput) -> Result<(), FormatError> {
        while bits.available() > 0 {
            let Some(values) = read_triple(bits)? else {
                return Ok(());
            };
            for value in values {
                out.push(Self::character(value)?);
            }
        }
        Ok(())
    }

    fn character(value: i32) -> Result<char, FormatError> {
        let c = match value {
            // Segment terminator
            0 => '\r',
            // Segment separator
            1 => '*',
            // Sub-element separator
            2 => '>',
            3 => ' ',
            4..=13 => char::from((value + 44) as u8),
            14..=39 => char::from((value + 51) as u8),
            _ => {
                return Err(FormatError::InvalidCharacterValue {
                    mode: Mode::AnsiX12,
                    shift: 0,
                    value,
                });
            }
        };
        Ok(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(codewords: &[u8]) -> Result<(String, usize), FormatError> {
        let mut bits = BitSource::new(codewords);
        let mut out = DecodeOutput::new();
        X12Decoder::decode(&mut bits, &mut out)?;
        Ok((out.text().to_string(), bits.available()))
    }

    fn pair(c1: u16, c2: u16, c3: u16) -> [u8; 2] {
        let v = 1600 * c1 + 40 * c2 + c3 + 1;
        [(v >> 8) as u8, (v & 0xFF) as u8]
    }

    #[test]
    fn test_x12_character_set() {
        let [a, b] = pair(0, 1, 2);
        let [c, d] = pair(3, 4, 13);
        let [e, f] = pair(14, 39, 3);
        let (text, left) = run(&[a, b, c, d, e, f]).unwrap();
        assert_eq!(text, "\r*> 09AZ ");
        assert_eq!(left, 0);
    }

    #[test]
    fn test_x12_single_codeword_left_for_ascii() {
        let [a, b] = pair(14, 15, 16);
        let (text, left) = run(&[a, b, 66]).unwrap();
        assert_eq!(text, "ABC");
        assert_eq!(left, 8);
    }

    #[test]
    fn test_x12_unlatch() {
        let (text, left) = run(&[254, 66]).unwrap();
        assert_eq!(text, "");
        assert_eq!(left, 8);
    }

    #[test]
    fn test_x12_zero_pair_fails() {
        // Packs [0, 0, -1]; -1 has no X12 character
        assert_eq!(
            run(&[0, 0]),
            Err(FormatError::InvalidCharacterValue {
                mode: Mode::AnsiX12,
                shift: 0,
                value: -1
            })
        );
    }

    #[test]
    fn test_x12_value_40_fails() {
        assert_eq!(
            run(&[0xFF, 0xFF]),
            Err(FormatError::InvalidCharacterValue {
                mode: Mode::AnsiX12,
                shift: 0,
                value: 40
            })
        );
    }
}
