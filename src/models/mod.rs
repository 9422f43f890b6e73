/// Decoded payload returned to callers
pub mod decoder_result;
/// Encodation modes
pub mod mode;

pub use decoder_result::{DecoderResult, StructuredAppend};
pub use mode::Mode;
