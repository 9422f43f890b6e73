//! Data Matrix payload decoding modules
//!
//! This module turns error-corrected data codewords into text:
//! - Bit-level reading of the codeword buffer
//! - The encodation mode state machine
//! - Per-mode decoders (ASCII, C40, Text, X12, EDIFACT, Base 256)
//! - Base 256 de-randomization

/// Bit reader over the codeword buffer
pub mod bitstream;
/// Environment tunables: batch threshold and optional input limit
pub mod config;
/// Encodation mode decoders
pub mod modes;
/// Decode output accumulator and result assembly
pub mod output;
/// Mode dispatch loop
pub mod parser;
/// 255-state randomizing algorithm
pub mod randomize;
/// Character sets and special values (ISO/IEC 16022 Annex C)
pub mod tables;
