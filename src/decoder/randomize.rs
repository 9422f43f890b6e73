//! 255-state randomizing algorithm for base 256 codewords
//! (ISO/IEC 16022:2006, Annex B.1 and B.2).

fn pseudo_random(position: usize) -> i32 {
    ((149 * position) % 255) as i32 + 1
}

/// Restore a base 256 byte from the codeword at 1-indexed `position`.
pub fn derandomize_255(value: u8, position: usize) -> u8 {
    let temp = value as i32 - pseudo_random(position);
    if temp >= 0 {
        temp as u8
    } else {
        (temp + 256) as u8
    }
}

/// Randomize a base 256 byte for placement at 1-indexed `position`.
pub fn randomize_255(value: u8, position: usize) -> u8 {
    ((value as i32 + pseudo_random(position)) % 256) as u8
}
