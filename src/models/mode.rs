use std::fmt;

/// Data Matrix encodation mode (ISO/IEC 16022:2006, 5.2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// ASCII encodation, the initial mode of every symbol
    Ascii,
    /// C40: upper-case oriented base 40 triples
    C40,
    /// Text: lower-case oriented base 40 triples
    Text,
    /// ANSI X12 EDI triples
    AnsiX12,
    /// EDIFACT: four 6-bit values per three codewords
    Edifact,
    /// Base 256: randomized raw bytes
    Base256,
    /// Pad codeword seen. Not a real encodation, it ends decoding.
    Pad,
}

impl Mode {
    /// Mode selected by an ASCII latch codeword, if `codeword` is one.
    pub fn from_latch(codeword: u8) -> Option<Self> {
        match codeword {
            230 => Some(Mode::C40),
            231 => Some(Mode::Base256),
            238 => Some(Mode::AnsiX12),
            239 => Some(Mode::Text),
            240 => Some(Mode::Edifact),
            _ => None,
        }
    }

    /// Whether this mode ends the decode loop.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Mode::Pad)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Ascii => "ASCII",
            Mode::C40 => "C40",
            Mode::Text => "Text",
            Mode::AnsiX12 => "ANSI X12",
            Mode::Edifact => "EDIFACT",
            Mode::Base256 => "Base 256",
            Mode::Pad => "pad",
        };
        f.write_str(name)
    }
}
