/// EDIFACT encodation decoder (ISO/IEC 16022:2006, 5.2.8 and Table C.3)
use crate::decoder::bitstream::BitSource;
use crate::decoder::output::DecodeOutput;
use crate::decoder::tables::EDIFACT_UNLATCH;
use crate::error::FormatError;

/// Decode an EDIFACT segment: groups of four 6-bit values in three codewords.
pub struct EdifactDecoder;

impl EdifactDecoder {
    pub fn decode(bits: &mut BitSource, out: &mut DecodeOutput) -> Result<(), FormatError> {
        let mut unlatch = false;
        while !unlatch && bits.available() > 0 {
            // Two or fewer codewords left are ASCII encoded
            if bits.available() <= 16 {
                return Ok(());
            }

            for _ in 0..4 {
                let value = bits.read_bits(6)?;
                // The rest of the group after an unlatch is zero padding,
                // still read so the cursor lands on a codeword boundary
                if value == EDIFACT_UNLATCH {
                    unlatch = true;
                }
                if !unlatch {
                    out.push(Self::character(value));
                }
            }
        }
        Ok(())
    }

    fn character(value: u32) -> char {
        // Values without bit 6 set stand for 0x40-0x5E
        let code = if value & 0x20 == 0 { value | 0x40 } else { value };
        char::from(code as u8)
    }
}
