//! dm_decode - Data Matrix payload decoding
//!
//! Decodes the data codewords of an ECC 200 Data Matrix symbol
//! (ISO/IEC 16022) into text and raw byte segments. Codewords must already
//! be error corrected; locating and sampling the symbol happens upstream.
//!
//! ```
//! // "Hi" in ASCII encodation, then a pad codeword
//! let result = dm_decode::decode(&[73, 106, 129]).unwrap();
//! assert_eq!(result.text(), "Hi");
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Codeword decoding (bit reader, mode decoders, dispatch loop)
#[allow(missing_docs)]
pub mod decoder;
/// Error types
#[allow(missing_docs)]
pub mod error;
/// Core data structures (DecoderResult, Mode)
pub mod models;

pub use decoder::bitstream::BitSource;
pub use decoder::randomize::{derandomize_255, randomize_255};
pub use error::{Error, FormatError, Result};
pub use models::{DecoderResult, Mode, StructuredAppend};

use decoder::config::parallel_min_batch;
use decoder::parser::BitStreamParser;
use rayon::prelude::*;

/// Decode the error-corrected data codewords of one symbol.
///
/// # Arguments
/// * `codewords` - Data codewords, error correction codewords removed
///
/// # Returns
/// The decoded text and byte segments, or an error if any codeword is
/// invalid. A [`FormatError`] means the symbol cannot be decoded.
pub fn decode(codewords: &[u8]) -> Result<DecoderResult> {
    BitStreamParser::decode(codewords)
}

/// Decode several independent symbols.
///
/// Large batches are spread across the rayon thread pool; results come
/// back in input order.
pub fn decode_batch(symbols: &[&[u8]]) -> Vec<Result<DecoderResult>> {
    if symbols.len() < parallel_min_batch() {
        symbols.iter().map(|codewords| decode(codewords)).collect()
    } else {
        symbols.par_iter().map(|codewords| decode(codewords)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_batch_keeps_order() {
        let symbols: Vec<Vec<u8>> = (0..32u8).map(|i| vec![b'A' + 1 + (i % 26)]).collect();
        let refs: Vec<&[u8]> = symbols.iter().map(|s| s.as_slice()).collect();
        let results = decode_batch(&refs);
        assert_eq!(results.len(), 32);
        for (i, result) in results.iter().enumerate() {
            let expected = char::from(b'A' + (i as u8 % 26)).to_string();
            assert_eq!(result.as_ref().unwrap().text(), expected);
        }
    }

    #[test]
    fn test_decode_batch_isolates_failures() {
        let good: &[u8] = &[66];
        let bad: &[u8] = &[0];
        let results = decode_batch(&[good, bad, good]);
        assert!(results[0].is_ok());
        assert!(results[1].as_ref().unwrap_err().is_format());
        assert_eq!(results[2].as_ref().unwrap().text(), "A");
    }
}
