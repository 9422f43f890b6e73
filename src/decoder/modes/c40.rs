/// C40 and Text encodation decoders (ISO/IEC 16022:2006, 5.2.5, 5.2.6, Annex C)
///
/// Both pack three values into two codewords and share the shift 1 and
/// shift 2 sets. They differ in the basic set and in shift 3.
use crate::decoder::bitstream::BitSource;
use crate::decoder::modes::read_triple;
use crate::decoder::output::DecodeOutput;
use crate::decoder::tables::{
    C40_BASIC_SET, FNC1_CHAR, SHIFT2_FNC1, SHIFT2_SET, SHIFT2_UPPER_SHIFT, TEXT_BASIC_SET,
    TEXT_SHIFT3_SET,
};
use crate::error::FormatError;
use crate::models::Mode;

enum Shift3 {
    /// Character code is `value + offset`
    Offset(i32),
    Table(&'static [char]),
}

struct CharacterSet {
    mode: Mode,
    basic: &'static [char; 40],
    shift3: Shift3,
}

const C40: CharacterSet = CharacterSet {
    mode: Mode::C40,
    basic: &C40_BASIC_SET,
    shift3: Shift3::Offset(96),
};

const TEXT: CharacterSet = CharacterSet {
    mode: Mode::Text,
    basic: &TEXT_BASIC_SET,
    shift3: Shift3::Table(&TEXT_SHIFT3_SET),
};

/// Decode a C40 segment
pub struct C40Decoder;

impl C40Decoder {
    pub fn decode(bits: &mut BitSource, out: &mut DecodeOutput) -> Result<(), FormatError> {
        decode_segment(bits, out, &C40)
    }
}

/// Decode a Text segment
pub struct TextDecoder;

impl TextDecoder {
    pub fn decode(bits: &mut BitSource, out: &mut DecodeOutput) -> Result<(), FormatError> {
        decode_segment(bits, out, &TEXT)
    }
}

/// Shift state and upper shift flag of one segment
struct ShiftState<'a> {
    set: &'a CharacterSet,
    shift: u8,
    upper_shift: bool,
}

impl ShiftState<'_> {
    fn emit(&mut self, out: &mut DecodeOutput, code: i32, value: i32) -> Result<(), FormatError> {
        let code = if self.upper_shift {
            self.upper_shift = false;
            code + 128
        } else {
            code
        };
        // Character codes are 16-bit, so -1 wraps to U+FFFF
        let c = char::from_u32(code as u16 as u32).ok_or_else(|| self.invalid(value))?;
        out.push(c);
        Ok(())
    }

    fn invalid(&self, value: i32) -> FormatError {
        FormatError::InvalidCharacterValue {
            mode: self.set.mode,
            shift: self.shift,
            value,
        }
    }

    fn apply(&mut self, out: &mut DecodeOutput, value: i32) -> Result<(), FormatError> {
        match self.shift {
            0 => {
                // -1 from an all-zero pair leaves the shift state at 0
                if value < 3 {
                    self.shift = (value + 1) as u8;
                    return Ok(());
                }
                let c = *lookup(self.set.basic, value).ok_or_else(|| self.invalid(value))?;
                self.emit(out, c as i32, value)?;
            }
            1 => self.emit(out, value, value)?,
            2 => {
                if let Some(&c) = lookup(&SHIFT2_SET, value) {
                    self.emit(out, c as i32, value)?;
                } else if value == SHIFT2_FNC1 {
                    out.push(FNC1_CHAR);
                } else if value == SHIFT2_UPPER_SHIFT {
                    self.upper_shift = true;
                } else {
                    return Err(self.invalid(value));
                }
            }
            _ => match self.set.shift3 {
                Shift3::Offset(offset) => self.emit(out, value + offset, value)?,
                Shift3::Table(table) => {
                    let c = *lookup(table, value).ok_or_else(|| self.invalid(value))?;
                    self.emit(out, c as i32, value)?;
                }
            },
        }
        self.shift = 0;
        Ok(())
    }
}

fn lookup(table: &[char], value: i32) -> Option<&char> {
    usize::try_from(value).ok().and_then(|i| table.get(i))
}

// TODO: upper shift followed by a shift value split across two triples
// does not always decode as encoders intend.
fn decode_segment(
    bits: &mut BitSource,
    out: &mut DecodeOutput,
    set: &CharacterSet,
) -> Result<(), FormatError> {
    let mut state = ShiftState {
        set,
        shift: 0,
        upper_shift: false,
    };

    while bits.available() > 0 {
        let Some(values) = read_triple(bits)? else {
            return Ok(());
        };
        for value in values {
            state.apply(out, value)?;
        }
    }

    Ok(())
}
