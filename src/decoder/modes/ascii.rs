/// ASCII encodation decoder (ISO/IEC 16022:2006, 5.2.3 and Table C.2)
use crate::decoder::bitstream::BitSource;
use crate::decoder::output::DecodeOutput;
use crate::decoder::tables::{FNC1_CHAR, MACRO_05_HEADER, MACRO_06_HEADER, MACRO_TRAILER};
use crate::error::FormatError;
use crate::models::Mode;

/// Decode ASCII codewords until something hands control elsewhere.
pub struct AsciiDecoder;

impl AsciiDecoder {
    /// Consume codewords and return the mode to continue in.
    ///
    /// Returns after a single literal character, on a latch or pad
    /// codeword, or with `Mode::Ascii` once the bits run out.
    pub fn decode(bits: &mut BitSource, out: &mut DecodeOutput) -> Result<Mode, FormatError> {
        let mut upper_shift = false;

        while bits.available() > 0 {
            let codeword = bits.read_codeword()?;
            match codeword {
                0 => {
                    return Err(FormatError::InvalidCodeword {
                        mode: Mode::Ascii,
                        value: codeword,
                    });
                }
                1..=128 => {
                    // ASCII value + 1, upper shift selects the extended half
                    let mut code = codeword as u32 - 1;
                    if upper_shift {
                        code += 128;
                    }
                    out.push(latin1(code));
                    return Ok(Mode::Ascii);
                }
                129 => return Ok(Mode::Pad),
                130..=229 => {
                    // Digit pair 00-99
                    let value = codeword - 130;
                    out.push(char::from(b'0' + value / 10));
                    out.push(char::from(b'0' + value % 10));
                }
                232 => out.push(FNC1_CHAR),
                // Structured append, reader programming
                233 | 234 => {}
                235 => upper_shift = true,
                236 => {
                    out.push_str(MACRO_05_HEADER);
                    out.prepend_trailer(MACRO_TRAILER);
                }
                237 => {
                    out.push_str(MACRO_06_HEADER);
                    out.prepend_trailer(MACRO_TRAILER);
                }
                // ECI
                241 => {}
                254 if bits.available() == 0 => {
                    // Some encoders finish with an unlatch while already in ASCII
                    tracing::debug!("ignoring trailing unlatch codeword in ASCII");
                }
                230 | 231 | 238 | 239 | 240 => {
                    return Mode::from_latch(codeword).ok_or(FormatError::InvalidCodeword {
                        mode: Mode::Ascii,
                        value: codeword,
                    });
                }
                242..=255 => {
                    return Err(FormatError::InvalidCodeword {
                        mode: Mode::Ascii,
                        value: codeword,
                    });
                }
            }
        }

        Ok(Mode::Ascii)
    }
}

fn latin1(code: u32) -> char {
    // Every value below 256 is a Latin-1 code point
    char::from(code as u8)
}
