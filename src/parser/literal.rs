//! Go string literal decoding and encoding

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LiteralError {
    #[error("not a string literal: {0}")]
    NotALiteral(String),

    #[error("invalid escape sequence at byte {0}")]
    InvalidEscape(usize),

    #[error("byte escapes do not form valid UTF-8")]
    InvalidUtf8,
}

/// Decode the text of an interpreted (`"..."`) or raw (`` `...` ``) literal
pub fn unquote(raw: &str) -> Result<String, LiteralError> {
    if let Some(body) = raw
        .strip_prefix('`')
        .and_then(|rest| rest.strip_suffix('`'))
    {
        // carriage returns are discarded from raw strings
        return Ok(body.replace('\r', ""));
    }

    let body = raw
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(|| LiteralError::NotALiteral(raw.to_string()))?;

    // `\x` and octal escapes are single bytes, so decode into bytes first
    let mut out = Vec::with_capacity(body.len());
    let mut chars = body.char_indices();
    while let Some((pos, c)) = chars.next() {
        if c != '\\' {
            push_char(&mut out, c);
            continue;
        }
        let Some((_, esc)) = chars.next() else {
            return Err(LiteralError::InvalidEscape(pos));
        };
        match esc {
            'a' => out.push(0x07),
            'b' => out.push(0x08),
            'f' => out.push(0x0c),
            'n' => out.push(b'\n'),
            'r' => out.push(b'\r'),
            't' => out.push(b'\t'),
            'v' => out.push(0x0b),
            '\\' => out.push(b'\\'),
            '"' => out.push(b'"'),
            '\'' => out.push(b'\''),
            'x' => out.push(take_byte(&mut chars, None, 2, 16, pos)?),
            '0'..='7' => out.push(take_byte(&mut chars, esc.to_digit(8), 2, 8, pos)?),
            'u' => push_char(&mut out, take_code_point(&mut chars, 4, pos)?),
            'U' => push_char(&mut out, take_code_point(&mut chars, 8, pos)?),
            _ => return Err(LiteralError::InvalidEscape(pos)),
        }
    }
    String::from_utf8(out).map_err(|_| LiteralError::InvalidUtf8)
}

fn push_char(out: &mut Vec<u8>, c: char) {
    let mut buf = [0u8; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}

fn take_digits(
    chars: &mut impl Iterator<Item = (usize, char)>,
    first: Option<u32>,
    digits: usize,
    radix: u32,
    pos: usize,
) -> Result<u32, LiteralError> {
    let mut value = first.unwrap_or_default();
    for _ in 0..digits {
        let digit = chars
            .next()
            .and_then(|(_, d)| d.to_digit(radix))
            .ok_or(LiteralError::InvalidEscape(pos))?;
        value = value * radix + digit;
    }
    Ok(value)
}

fn take_byte(
    chars: &mut impl Iterator<Item = (usize, char)>,
    first: Option<u32>,
    digits: usize,
    radix: u32,
    pos: usize,
) -> Result<u8, LiteralError> {
    let value = take_digits(chars, first, digits, radix, pos)?;
    u8::try_from(value).map_err(|_| LiteralError::InvalidEscape(pos))
}

fn take_code_point(
    chars: &mut impl Iterator<Item = (usize, char)>,
    digits: usize,
    pos: usize,
) -> Result<char, LiteralError> {
    let value = take_digits(chars, None, digits, 16, pos)?;
    char::from_u32(value).ok_or(LiteralError::InvalidEscape(pos))
}

/// Encode `value` as an interpreted Go string literal
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r#""0.1.2""#, "0.1.2")]
    #[case("`0.1.2`", "0.1.2")]
    #[case("`1.0\r.0`", "1.0.0")]
    #[case(r#""v1.2.3-beta.1""#, "v1.2.3-beta.1")]
    #[case(r#""\x31.\060.0""#, "1.0.0")]
    #[case(r#""a\"b\\c""#, r#"a"b\c"#)]
    #[case(r#""\xc3\xa9""#, "é")]
    #[case(r#""\303\251""#, "é")]
    #[case(r#""\u00e9""#, "é")]
    #[case(r#""""#, "")]
    fn unquote_decodes_literals(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(unquote(raw).unwrap(), expected);
    }

    #[rstest]
    #[case(r#""\q""#)]
    #[case(r#""\x1""#)]
    #[case(r#""trailing\""#)]
    #[case(r#""\400""#)]
    #[case(r#""\ud800""#)]
    fn unquote_rejects_bad_escapes(#[case] raw: &str) {
        assert!(matches!(unquote(raw), Err(LiteralError::InvalidEscape(_))));
    }

    #[test]
    fn unquote_rejects_invalid_utf8_bytes() {
        assert_eq!(unquote(r#""\xff""#), Err(LiteralError::InvalidUtf8));
    }

    #[test]
    fn unquote_rejects_non_literals() {
        assert_eq!(
            unquote("version"),
            Err(LiteralError::NotALiteral("version".to_string()))
        );
        assert!(unquote("\"").is_err());
    }

    #[test]
    fn quote_escapes_specials() {
        assert_eq!(quote("1.2.3"), r#""1.2.3""#);
        assert_eq!(quote("a\"b"), r#""a\"b""#);
    }
}
