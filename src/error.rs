//! Error types for codeword decoding

use crate::models::Mode;
use thiserror::Error;

/// Why a codeword stream was rejected.
///
/// Every variant means the same thing to a caller: the symbol could not be
/// decoded. The tag only exists for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("codeword {value} is not valid in {mode} encodation")]
    InvalidCodeword { mode: Mode, value: u8 },

    #[error("needed {requested} bits but only {available} remain")]
    UnexpectedEnd { requested: usize, available: usize },

    #[error("value {value} has no character in {mode} encodation (shift {shift})")]
    InvalidCharacterValue { mode: Mode, shift: u8, value: i32 },

    #[error("base 256 segment length {0} is invalid")]
    InvalidSegmentLength(i32),

    #[error("{len} codewords exceeds the limit of {max}")]
    TooManyCodewords { len: usize, max: usize },
}

/// Error returned by [`crate::decode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The codewords do not form a valid Data Matrix message.
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// A base 256 byte could not be mapped to an ISO-8859-1 character.
    #[error("no ISO-8859-1 mapping for byte {0:#04x}")]
    Encoding(u8),
}

impl Error {
    /// `true` for data errors, `false` for environment failures.
    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format(_))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
