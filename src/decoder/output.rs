use crate::models::DecoderResult;

/// Text and byte segments collected while decoding one symbol
#[derive(Debug, Default)]
pub struct DecodeOutput {
    text: String,
    trailer: String,
    byte_segments: Vec<Vec<u8>>,
}

impl DecodeOutput {
    pub fn new() -> Self {
        Self {
            text: String::with_capacity(100),
            trailer: String::new(),
            byte_segments: Vec::new(),
        }
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    /// Insert `s` at the front of the trailer emitted after all other text.
    pub fn prepend_trailer(&mut self, s: &str) {
        self.trailer.insert_str(0, s);
    }

    pub fn push_segment(&mut self, bytes: Vec<u8>) {
        self.byte_segments.push(bytes);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Append the trailer once and package the result.
    pub fn finish(mut self, codewords: &[u8]) -> DecoderResult {
        if !self.trailer.is_empty() {
            self.text.push_str(&self.trailer);
        }
        DecoderResult::new(codewords.to_vec(), self.text, self.byte_segments)
    }
}
