//! Text encodings and small string helpers shared by the decoders
use crate::error::{Result, TagError};

/// The text encoding used by ID3v2 frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TextEncoding {
    /// ISO-8859-1
    Latin1 = 0,
    /// UTF-16 with a byte order mark
    Utf16 = 1,
    /// UTF-16 big endian
    Utf16Be = 2,
    /// UTF-8
    Utf8 = 3,
}

impl TextEncoding {
    /// Get a `TextEncoding` from a u8, must be 0-3 inclusive
    pub fn from_u8(byte: u8) -> Result<Self> {
        match byte {
            0 => Ok(Self::Latin1),
            1 => Ok(Self::Utf16),
            2 => Ok(Self::Utf16Be),
            3 => Ok(Self::Utf8),
            _ => Err(TagError::InvalidEncoding(byte)),
        }
    }

    /// Width of the null terminator in bytes
    pub fn terminator_len(self) -> usize {
        match self {
            Self::Latin1 | Self::Utf8 => 1,
            Self::Utf16 | Self::Utf16Be => 2,
        }
    }
}

/// Decode `data` with the given encoding.
///
/// Invalid UTF-8 and unpaired surrogates become U+FFFD. A dangling odd byte of a
/// UTF-16 string is ignored.
pub fn decode_text(encoding: TextEncoding, data: &[u8]) -> Result<String> {
    match encoding {
        TextEncoding::Latin1 => Ok(data.iter().map(|&b| char::from(b)).collect()),
        TextEncoding::Utf16 => {
            if data.len() < 2 {
                return Ok(String::new());
            }

            match (data[0], data[1]) {
                (0xFE, 0xFF) => Ok(utf16_decode(&data[2..], u16::from_be_bytes)),
                (0xFF, 0xFE) => Ok(utf16_decode(&data[2..], u16::from_le_bytes)),
                (a, b) => Err(TagError::InvalidBom(a, b)),
            }
        }
        TextEncoding::Utf16Be => Ok(utf16_decode(data, u16::from_be_bytes)),
        TextEncoding::Utf8 => Ok(String::from_utf8_lossy(data).into_owned()),
    }
}

fn utf16_decode(data: &[u8], endianness: fn([u8; 2]) -> u16) -> String {
    let units = data.chunks_exact(2).map(|c| endianness([c[0], c[1]]));

    char::decode_utf16(units)
        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

/// Split `data` into the part before the encoding's null terminator and the part after it.
///
/// 16-bit terminators are only searched at even offsets. A zero byte directly after an
/// 8-bit terminator is treated as part of a doubled terminator and dropped.
pub fn split_terminated(data: &[u8], encoding: TextEncoding) -> (&[u8], &[u8]) {
    if encoding.terminator_len() == 1 {
        return match data.iter().position(|&b| b == 0) {
            Some(pos) => {
                let rest = &data[pos + 1..];
                match rest.first() {
                    Some(0) => (&data[..pos], &rest[1..]),
                    _ => (&data[..pos], rest),
                }
            }
            None => (data, &[]),
        };
    }

    match data.chunks_exact(2).position(|c| c == [0, 0]) {
        Some(unit) => (&data[..unit * 2], &data[unit * 2 + 2..]),
        None => (data, &[]),
    }
}

/// Parse an "x of n" value such as `3/12`
pub fn parse_x_of_n(s: &str) -> (u32, u32) {
    let parts: Vec<&str> = s.split('/').collect();

    if let [x, n] = parts.as_slice() {
        return (parse_number(x), parse_number(n));
    }

    (parse_number(s), 0)
}

fn parse_number(s: &str) -> u32 {
    s.trim().parse().unwrap_or(0)
}

/// Parse the leading four digits of a date, `2004-05-01` gives `2004`
pub fn leading_year(s: &str) -> u32 {
    let s = s.trim();
    match s.get(..4) {
        Some(year) if year.bytes().all(|b| b.is_ascii_digit()) => year.parse().unwrap_or(0),
        _ => 0,
    }
}

/// Trim whitespace and NUL padding from both ends
pub fn trim_padding(s: &str) -> &str {
    s.trim_matches(|c: char| c == '\0' || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_text() {
        assert_eq!(decode_text(TextEncoding::Latin1, &[0x6C, 0xF8]).unwrap(), "lø");
        assert_eq!(
            decode_text(TextEncoding::Utf16, &[0xFF, 0xFE, 0x6C, 0x00, 0xF8, 0x00]).unwrap(),
            "lø"
        );
        assert_eq!(
            decode_text(TextEncoding::Utf16, &[0xFE, 0xFF, 0x00, 0x6C, 0x00, 0xF8]).unwrap(),
            "lø"
        );
        assert_eq!(
            decode_text(TextEncoding::Utf16Be, &[0x00, 0x6C, 0x00, 0xF8, 0x00]).unwrap(),
            "lø"
        );
        assert_eq!(
            decode_text(TextEncoding::Utf8, "løft".as_bytes()).unwrap(),
            "løft"
        );
    }

    #[test]
    fn test_decode_text_edges() {
        assert_eq!(decode_text(TextEncoding::Utf16, &[]).unwrap(), "");
        assert_eq!(decode_text(TextEncoding::Utf16, &[0xFF]).unwrap(), "");
        assert_eq!(decode_text(TextEncoding::Utf16Be, &[0x00]).unwrap(), "");
        assert!(matches!(
            decode_text(TextEncoding::Utf16, &[0x00, 0x6C]),
            Err(TagError::InvalidBom(0x00, 0x6C))
        ));
        // lone high surrogate
        assert_eq!(
            decode_text(TextEncoding::Utf16Be, &[0xD8, 0x00]).unwrap(),
            "\u{FFFD}"
        );
        assert_eq!(decode_text(TextEncoding::Utf8, &[0x61, 0xFF]).unwrap(), "a\u{FFFD}");
        assert!(matches!(
            TextEncoding::from_u8(4),
            Err(TagError::InvalidEncoding(4))
        ));
    }

    #[test]
    fn test_split_terminated() {
        assert_eq!(
            split_terminated(b"desc\0text", TextEncoding::Latin1),
            (&b"desc"[..], &b"text"[..])
        );
        // doubled 8-bit terminator
        assert_eq!(
            split_terminated(b"desc\0\0text", TextEncoding::Utf8),
            (&b"desc"[..], &b"text"[..])
        );
        assert_eq!(
            split_terminated(b"no terminator", TextEncoding::Latin1),
            (&b"no terminator"[..], &b""[..])
        );

        // "A" in UTF-16LE ends in a zero byte, the terminator must not start there
        let data = [0x41, 0x00, 0x00, 0x00, 0x42, 0x00];
        assert_eq!(
            split_terminated(&data, TextEncoding::Utf16),
            (&data[..2], &data[4..])
        );

        // UTF-16BE text after the terminator keeps its leading zero
        let data = [0x00, 0x41, 0x00, 0x00, 0x00, 0x42];
        assert_eq!(
            split_terminated(&data, TextEncoding::Utf16Be),
            (&data[..2], &data[4..])
        );
    }

    #[test]
    fn test_parse_x_of_n() {
        assert_eq!(parse_x_of_n(""), (0, 0));
        assert_eq!(parse_x_of_n("1"), (1, 0));
        assert_eq!(parse_x_of_n("0/2"), (0, 2));
        assert_eq!(parse_x_of_n("1/2"), (1, 2));
        assert_eq!(parse_x_of_n("1 / 2"), (1, 2));
        assert_eq!(parse_x_of_n("/2"), (0, 2));
        assert_eq!(parse_x_of_n("1/"), (1, 0));
        assert_eq!(parse_x_of_n("1/2/3"), (0, 0));
    }

    #[test]
    fn test_leading_year() {
        assert_eq!(leading_year("2004-05-01"), 2004);
        assert_eq!(leading_year("1999"), 1999);
        assert_eq!(leading_year("99"), 0);
        assert_eq!(leading_year("abcd"), 0);
        assert_eq!(leading_year(""), 0);
    }
}
