// src/decoder/quoted_printable.rs

/// Decodes quoted-printable text into a UTF-8 string.
///
/// Never fails: malformed `=XY` escapes are passed through literally and any
/// invalid UTF-8 in the decoded bytes becomes U+FFFD.
pub fn decode_quoted_printable(encoded: &str) -> String {
    let decoded = decode_quoted_printable_bytes(encoded.as_bytes());
    String::from_utf8_lossy(&decoded).into_owned()
}

/// Byte-level quoted-printable scan.
///
/// - `=` followed by `\n`, `\r\n` or a bare `\r` is a soft line break and emits nothing.
/// - `=XY` with two hex digits emits the byte `0xXY`.
/// - `=` followed by two non-hex bytes emits all three bytes unchanged.
/// - A trailing `=` with fewer than two bytes after it is dropped.
pub fn decode_quoted_printable_bytes(src: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(src.len());
    let mut pos = 0;

    while pos < src.len() {
        let ch = src[pos];
        if ch != b'=' {
            result.push(ch);
            pos += 1;
            continue;
        }

        match src.get(pos + 1) {
            Some(b'\r') => {
                // "=\r\n" or a lone "=\r"
                pos += if src.get(pos + 2) == Some(&b'\n') { 3 } else { 2 };
            }
            Some(b'\n') => pos += 2,
            Some(&hi) if pos + 2 < src.len() => {
                let lo = src[pos + 2];
                match (hex_value(hi), hex_value(lo)) {
                    (Some(hi), Some(lo)) => result.push((hi << 4) | lo),
                    _ => {
                        tracing::trace!("Passing through malformed escape at offset {}", pos);
                        result.extend_from_slice(&[b'=', hi, lo]);
                    }
                }
                pos += 3;
            }
            _ => {
                // Truncated escape at end of input
                pos += 1;
            }
        }
    }

    result
}

fn hex_value(ch: u8) -> Option<u8> {
    match ch {
        b'0'..=b'9' => Some(ch - b'0'),
        b'a'..=b'f' => Some(ch - b'a' + 10),
        b'A'..=b'F' => Some(ch - b'A' + 10),
        _ => None,
    }
}
