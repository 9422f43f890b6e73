/// Base 256 encodation decoder (ISO/IEC 16022:2006, 5.2.9 and Annex B.2)
use crate::decoder::bitstream::BitSource;
use crate::decoder::output::DecodeOutput;
use crate::decoder::randomize::derandomize_255;
use crate::error::{Error, FormatError};

/// Decode a base 256 segment: a length field followed by raw bytes,
/// all randomized by codeword position.
pub struct Base256Decoder;

impl Base256Decoder {
    pub fn decode(bits: &mut BitSource, out: &mut DecodeOutput) -> Result<(), Error> {
        let count = Self::segment_length(bits)?;

        let mut bytes = Vec::with_capacity(count);
        for _ in 0..count {
            // Some encoders in the wild declare more bytes than they write
            let available = bits.available();
            if available < 8 {
                return Err(FormatError::UnexpectedEnd {
                    requested: 8,
                    available,
                }
                .into());
            }
            let position = bits.codeword_position();
            bytes.push(derandomize_255(bits.read_codeword()?, position));
        }

        let text = latin1_text(&bytes)?;
        tracing::trace!(len = bytes.len(), "base 256 segment");
        out.push_str(&text);
        out.push_segment(bytes);
        Ok(())
    }

    /// Read the length field: one codeword for 1-249, two for longer
    /// segments, 0 for "rest of the symbol".
    fn segment_length(bits: &mut BitSource) -> Result<usize, FormatError> {
        let position = bits.codeword_position();
        let d1 = derandomize_255(bits.read_codeword()?, position) as i32;
        let count = match d1 {
            0 => (bits.available() / 8) as i32,
            1..=249 => d1,
            _ => {
                let d2 = derandomize_255(bits.read_codeword()?, position + 1) as i32;
                250 * (d1 - 249) + d2
            }
        };
        usize::try_from(count).map_err(|_| FormatError::InvalidSegmentLength(count))
    }
}

/// Interpret bytes as ISO-8859-1, one character per byte.
fn latin1_text(bytes: &[u8]) -> Result<String, Error> {
    bytes
        .iter()
        .map(|&b| char::from_u32(b as u32).ok_or(Error::Encoding(b)))
        .collect()
}
