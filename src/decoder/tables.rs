// Character sets from ISO/IEC 16022:2006, Annex C.
// Entries 0-2 of the basic sets are shift values and never looked up.

/// C40 basic set (Table C.1)
pub const C40_BASIC_SET: [char; 40] = [
    '*', '*', '*', ' ', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E',
    'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X',
    'Y', 'Z',
];

/// Text basic set (Table C.2)
pub const TEXT_BASIC_SET: [char; 40] = [
    '*', '*', '*', ' ', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e',
    'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x',
    'y', 'z',
];

/// Shift 2 punctuation, shared by C40 and Text
pub const SHIFT2_SET: [char; 27] = [
    '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/', ':', ';', '<', '=',
    '>', '?', '@', '[', '\\', ']', '^', '_',
];

/// Text shift 3 set
pub const TEXT_SHIFT3_SET: [char; 32] = [
    '\'', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '{', '|', '}', '~', '\u{7f}',
];

/// Shift 2 value for FNC1
pub const SHIFT2_FNC1: i32 = 27;
/// Shift 2 value for upper shift
pub const SHIFT2_UPPER_SHIFT: i32 = 30;

/// GS, emitted for FNC1 in every mode
pub const FNC1_CHAR: char = '\u{1d}';

/// Header emitted for the 05 macro codeword (236)
pub const MACRO_05_HEADER: &str = "[)>\u{1e}05\u{1d}";
/// Header emitted for the 06 macro codeword (237)
pub const MACRO_06_HEADER: &str = "[)>\u{1e}06\u{1d}";
/// Trailer closing either macro
pub const MACRO_TRAILER: &str = "\u{1e}\u{04}";

/// Unlatch codeword for the C40, Text and X12 triple modes
pub const TRIPLE_UNLATCH: u8 = 254;
/// Unlatch value inside an EDIFACT group
pub const EDIFACT_UNLATCH: u32 = 0x1F;
