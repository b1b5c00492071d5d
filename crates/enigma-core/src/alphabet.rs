//! Letters are `u8` indices in `0..26` (A = 0) everywhere inside the
//! crate. Conversion to and from text happens here and nowhere else.

pub const ALPHABET_LEN: usize = 26;

/// Uppercases `text`, drops everything outside A-Z, and maps the
/// survivors to letter indices.
pub fn clean(text: &str) -> Vec<u8> {
    text.bytes()
        .filter_map(|b| match b {
            b'A'..=b'Z' => Some(b - b'A'),
            b'a'..=b'z' => Some(b - b'a'),
            _ => None,
        })
        .collect()
}

/// Renders letter indices back into an A-Z string.
pub fn to_string(letters: &[u8]) -> String {
    letters.iter().map(|&l| (b'A' + l) as char).collect()
}

/// Decodes a 26-character wiring string into a lookup table.
pub(crate) fn decode_wiring(s: &str) -> [u8; ALPHABET_LEN] {
    debug_assert_eq!(s.len(), ALPHABET_LEN);
    let mut table = [0u8; ALPHABET_LEN];
    for (slot, b) in table.iter_mut().zip(s.bytes()) {
        *slot = b - b'A';
    }
    table
}
