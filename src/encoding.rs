use encoding_rs::SHIFT_JIS;
use serde::{Deserialize, Serialize};

/// Text encodings that appear in PMD-family model files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextEncoding {
    /// Legacy fixed-width Japanese encoding used by all PMD string fields.
    ShiftJis,
    Utf8,
}

/// Decodes a fixed-width name buffer into an owned string.
///
/// The buffer is bounded to `max_units` bytes, cut at the first NUL
/// (fields are zero-padded, not necessarily NUL-terminated), and decoded
/// lossily: malformed or truncated sequences become U+FFFD instead of an
/// error. Always returns a string, possibly empty.
pub fn decode_fixed(bytes: &[u8], encoding: TextEncoding, max_units: usize) -> String {
    let bounded = &bytes[..bytes.len().min(max_units)];
    let bounded = match bounded.iter().position(|&b| b == 0) {
        Some(n) => &bounded[..n],
        None => bounded,
    };
    match encoding {
        TextEncoding::ShiftJis => SHIFT_JIS
            .decode_without_bom_handling(bounded)
            .0
            .into_owned(),
        TextEncoding::Utf8 => String::from_utf8_lossy(bounded).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_zero_padded() {
        let mut raw = [0u8; 50];
        raw[..4].copy_from_slice(b"Root");
        assert_eq!(decode_fixed(&raw, TextEncoding::ShiftJis, 50), "Root");
    }

    #[test]
    fn shift_jis_double_byte() {
        // "センター" in Shift-JIS
        let raw = [0x83, 0x5A, 0x83, 0x93, 0x83, 0x5E, 0x81, 0x5B, 0x00, 0x00];
        assert_eq!(
            decode_fixed(&raw, TextEncoding::ShiftJis, 50),
            "\u{30BB}\u{30F3}\u{30BF}\u{30FC}"
        );
    }

    #[test]
    fn malformed_sequence_never_fails() {
        // Lone lead byte at the end of the field
        let raw = [b'A', 0x83];
        let s = decode_fixed(&raw, TextEncoding::ShiftJis, 50);
        assert!(s.starts_with('A'));
        assert!(s.contains('\u{FFFD}'));
    }

    #[test]
    fn input_longer_than_bound_is_truncated() {
        let raw = [b'x'; 80];
        assert_eq!(decode_fixed(&raw, TextEncoding::ShiftJis, 50).len(), 50);
    }

    #[test]
    fn all_zero_buffer_is_empty() {
        assert_eq!(decode_fixed(&[0u8; 50], TextEncoding::ShiftJis, 50), "");
    }

    #[test]
    fn bound_may_split_a_pair() {
        // Second half of the pair falls outside the bound; the lead byte
        // must degrade to a replacement character, not panic.
        let raw = [0x83, 0x5A, 0x83, 0x93];
        let s = decode_fixed(&raw, TextEncoding::ShiftJis, 3);
        assert_eq!(s, "\u{30BB}\u{FFFD}");
    }
}
