//! Line splitting and Shift-JIS decoding for text charts.

use std::borrow::Cow;

use encoding_rs::SHIFT_JIS;

/// Split raw bytes into lines.
///
/// Lines end at `\n`; a trailing `\r` is dropped. A final line without a
/// newline is still returned.
pub fn split_lines(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let empty = bytes.is_empty();
    body.split(|&b| b == b'\n')
        .filter(move |_| !empty)
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
}

/// Decode one line of Shift-JIS bytes.
///
/// Returns `None` when the bytes contain a sequence that is not valid
/// Shift-JIS instead of substituting replacement characters.
pub fn decode_shift_jis(bytes: &[u8]) -> Option<Cow<'_, str>> {
    SHIFT_JIS.decode_without_bom_handling_and_without_replacement(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_handles_crlf() {
        let lines: Vec<_> = split_lines(b"#TITLE a\r\n#ARTIST b\r\n").collect();
        assert_eq!(lines, [&b"#TITLE a"[..], &b"#ARTIST b"[..]]);
    }

    #[test]
    fn test_split_lines_keeps_unterminated_last_line() {
        let lines: Vec<_> = split_lines(b"one\n\ntwo").collect();
        assert_eq!(lines, [&b"one"[..], &b""[..], &b"two"[..]]);
    }

    #[test]
    fn test_split_lines_empty_input() {
        assert_eq!(split_lines(b"").count(), 0);
    }

    #[test]
    fn test_decode_shift_jis() {
        let (encoded, _, _) = SHIFT_JIS.encode("#TITLE テスト曲");
        assert_eq!(decode_shift_jis(&encoded).as_deref(), Some("#TITLE テスト曲"));
        assert_eq!(decode_shift_jis(b"ascii").as_deref(), Some("ascii"));
    }

    #[test]
    fn test_decode_rejects_invalid_bytes() {
        // 0x81 is a lead byte and 0x20 is not a valid trail byte
        assert!(decode_shift_jis(&[0x81, 0x20]).is_none());
        // truncated double-byte sequence
        assert!(decode_shift_jis(&[b'a', 0x82]).is_none());
    }
}
