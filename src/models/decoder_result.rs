/// Structured append header (ISO/IEC 16022:2006, 5.6).
///
/// Reassembly across symbols is not supported, so a decoded result never
/// carries one. The type keeps the result shape stable for callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuredAppend {
    /// Position of this symbol in the sequence (1-based)
    pub position: u8,
    /// Total symbols in the sequence
    pub total: u8,
    /// File identification pair
    pub file_id: (u8, u8),
}

/// Decoded Data Matrix payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderResult {
    raw_bytes: Vec<u8>,
    text: String,
    byte_segments: Vec<Vec<u8>>,
    structured_append: Option<StructuredAppend>,
}

impl DecoderResult {
    /// Create a result from the input codewords, assembled text and any
    /// base 256 segments in extraction order.
    pub fn new(raw_bytes: Vec<u8>, text: String, byte_segments: Vec<Vec<u8>>) -> Self {
        Self {
            raw_bytes,
            text,
            byte_segments,
            structured_append: None,
        }
    }

    /// The codewords the result was decoded from
    pub fn raw_bytes(&self) -> &[u8] {
        &self.raw_bytes
    }

    /// Decoded text, including any macro header and trailer
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Raw bytes of each base 256 segment, or `None` if there were none
    pub fn byte_segments(&self) -> Option<&[Vec<u8>]> {
        if self.byte_segments.is_empty() {
            None
        } else {
            Some(&self.byte_segments)
        }
    }

    /// Always `None`; structured append markers are skipped.
    pub fn structured_append(&self) -> Option<&StructuredAppend> {
        self.structured_append.as_ref()
    }

    /// Consume the result, keeping only the text
    pub fn into_text(self) -> String {
        self.text
    }
}
