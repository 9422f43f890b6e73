/// Codeword stream parser: runs the encodation mode state machine
use crate::decoder::bitstream::BitSource;
use crate::decoder::config::max_codewords;
use crate::decoder::modes::{
    ascii::AsciiDecoder,
    base256::Base256Decoder,
    c40::{C40Decoder, TextDecoder},
    edifact::EdifactDecoder,
    x12::X12Decoder,
};
use crate::decoder::output::DecodeOutput;
use crate::error::{FormatError, Result};
use crate::models::{DecoderResult, Mode};

/// Decodes error-corrected data codewords into text and byte segments
pub struct BitStreamParser;

impl BitStreamParser {
    /// Decode a full symbol.
    ///
    /// Any error aborts the whole decode; no partial result is returned.
    pub fn decode(codewords: &[u8]) -> Result<DecoderResult> {
        if let Some(max) = max_codewords() {
            if codewords.len() > max {
                return Err(FormatError::TooManyCodewords {
                    len: codewords.len(),
                    max,
                }
                .into());
            }
        }

        let mut bits = BitSource::new(codewords);
        let mut out = DecodeOutput::new();

        if let Err(err) = Self::run(&mut bits, &mut out) {
            tracing::debug!(
                error = %err,
                byte_offset = bits.byte_offset(),
                "data matrix payload rejected"
            );
            return Err(err);
        }

        Ok(out.finish(codewords))
    }

    fn run(bits: &mut BitSource, out: &mut DecodeOutput) -> Result<()> {
        let mut mode = Mode::Ascii;
        // Segments always hand control back to ASCII
        while !mode.is_terminal() && bits.available() > 0 {
            mode = match mode {
                Mode::Ascii => {
                    let next = AsciiDecoder::decode(bits, out)?;
                    if next != Mode::Ascii {
                        tracing::trace!(
                            mode = %next,
                            position = bits.codeword_position(),
                            "latch"
                        );
                    }
                    next
                }
                Mode::C40 => {
                    C40Decoder::decode(bits, out)?;
                    Mode::Ascii
                }
                Mode::Text => {
                    TextDecoder::decode(bits, out)?;
                    Mode::Ascii
                }
                Mode::AnsiX12 => {
                    X12Decoder::decode(bits, out)?;
                    Mode::Ascii
                }
                Mode::Edifact => {
                    EdifactDecoder::decode(bits, out)?;
                    Mode::Ascii
                }
                Mode::Base256 => {
                    Base256Decoder::decode(bits, out)?;
                    Mode::Ascii
                }
                Mode::Pad => break,
            };
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn text(codewords: &[u8]) -> String {
        BitStreamParser::decode(codewords).unwrap().into_text()
    }

    #[test]
    fn test_empty_input() {
        let result = BitStreamParser::decode(&[]).unwrap();
        assert_eq!(result.text(), "");
        assert!(result.byte_segments().is_none());
    }

    #[test]
    fn test_ascii_literals_and_pad() {
        // "Hi", pad, then pad filler that is never read
        assert_eq!(text(&[b'H' + 1, b'i' + 1, 129, 175, 70]), "Hi");
    }

    #[test]
    fn test_c40_then_back_to_ascii() {
        // C40 " AB", unlatch, ASCII 'C'
        assert_eq!(text(&[230, 0x15, 0x00, 254, b'C' + 1]), " ABC");
    }

    #[test]
    fn test_segment_without_unlatch_ends_at_last_codeword() {
        // The single codeword left after C40 triples is ASCII
        assert_eq!(text(&[230, 0x15, 0x00, b'C' + 1]), " ABC");
    }

    #[test]
    fn test_macro_trailer_is_appended_once() {
        let result = text(&[236, b'A' + 1, 130]);
        assert_eq!(result, "[)>\u{1e}05\u{1d}A00\u{1e}\u{04}");
    }

    #[test]
    fn test_both_macros_stack_trailers() {
        let result = text(&[237, 236]);
        assert_eq!(
            result,
            "[)>\u{1e}06\u{1d}[)>\u{1e}05\u{1d}\u{1e}\u{04}\u{1e}\u{04}"
        );
    }

    #[test]
    fn test_error_discards_partial_text() {
        let err = BitStreamParser::decode(&[b'A' + 1, 0]).unwrap_err();
        assert_eq!(
            err,
            Error::Format(FormatError::InvalidCodeword {
                mode: Mode::Ascii,
                value: 0
            })
        );
    }

    #[test]
    fn test_latch_as_last_codeword() {
        // Latch with nothing after it ends the loop
        assert_eq!(text(&[b'A' + 1, 240]), "A");
    }
}
