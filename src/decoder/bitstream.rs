/// Bit-level reader over a codeword buffer
use crate::error::FormatError;

/// Reads codewords MSB first as a stream of bits.
///
/// The cursor only moves forward. A read that asks for more bits than
/// remain fails and leaves the cursor untouched.
#[derive(Debug, Clone)]
pub struct BitSource<'a> {
    bytes: &'a [u8],
    byte_offset: usize,
    bit_offset: usize,
}

impl<'a> BitSource<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            byte_offset: 0,
            bit_offset: 0,
        }
    }

    /// Index of the byte the next bit comes from
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Bits already consumed from the current byte (0-7)
    pub fn bit_offset(&self) -> usize {
        self.bit_offset
    }

    /// 1-indexed position of the next whole codeword, as used by the
    /// base 256 randomizing algorithm.
    pub fn codeword_position(&self) -> usize {
        self.byte_offset + 1
    }

    /// Number of bits left to read
    pub fn available(&self) -> usize {
        8 * (self.bytes.len() - self.byte_offset) - self.bit_offset
    }

    /// Read `num_bits` (1-32) bits as an unsigned integer, MSB first.
    pub fn read_bits(&mut self, num_bits: usize) -> Result<u32, FormatError> {
        let available = self.available();
        if num_bits == 0 || num_bits > 32 || num_bits > available {
            return Err(FormatError::UnexpectedEnd {
                requested: num_bits,
                available,
            });
        }

        let mut remaining = num_bits;
        let mut result = 0u32;

        // Finish the partially consumed byte first
        if self.bit_offset > 0 {
            let bits_left = 8 - self.bit_offset;
            let to_read = remaining.min(bits_left);
            let shift = bits_left - to_read;
            let mask = (0xFFu32 >> (8 - to_read)) << shift;
            result = (self.bytes[self.byte_offset] as u32 & mask) >> shift;
            remaining -= to_read;
            self.bit_offset += to_read;
            if self.bit_offset == 8 {
                self.bit_offset = 0;
                self.byte_offset += 1;
            }
        }

        // Whole bytes
        while remaining >= 8 {
            result = (result << 8) | self.bytes[self.byte_offset] as u32;
            self.byte_offset += 1;
            remaining -= 8;
        }

        // Leading bits of the next byte
        if remaining > 0 {
            let shift = 8 - remaining;
            let mask = (0xFFu32 >> shift) << shift;
            result = (result << remaining)
                | ((self.bytes[self.byte_offset] as u32 & mask) >> shift);
            self.bit_offset += remaining;
        }

        Ok(result)
    }

    /// Read one full 8-bit codeword.
    pub fn read_codeword(&mut self) -> Result<u8, FormatError> {
        self.read_bits(8).map(|v| v as u8)
    }
}
