//! Byte-literal parsing for the interactive harness
//!
//! Accepts `b'...'`/`b"..."` bytes literals and `[..]`/`(..)` integer lists.
//! Nothing is evaluated.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LiteralError {
    #[error("empty input")]
    Empty,

    #[error("unterminated bytes literal")]
    Unterminated,

    #[error("bad escape sequence: {0}")]
    BadEscape(String),

    #[error("non-ascii character {0:?} in bytes literal")]
    NonAscii(char),

    #[error("not an integer: {0}")]
    BadInteger(String),

    #[error("{0} does not fit in a byte")]
    OutOfRange(String),

    #[error("expected b'..', [..] or (..), got {0}")]
    Unsupported(String),
}

pub fn parse_literal(input: &str) -> Result<Vec<u8>, LiteralError> {
    let input = input.trim();
    let first = input.chars().next().ok_or(LiteralError::Empty)?;
    match first {
        'b' | 'B' => parse_bytes(&input[1..]),
        '[' => parse_list(input, ']'),
        '(' => parse_list(input, ')'),
        _ => Err(LiteralError::Unsupported(input.to_string())),
    }
}

fn parse_bytes(quoted: &str) -> Result<Vec<u8>, LiteralError> {
    let quote = match quoted.chars().next() {
        Some(q @ ('\'' | '"')) => q,
        _ => return Err(LiteralError::Unsupported(format!("b{}", quoted))),
    };
    if quoted.len() < 2 || !quoted.ends_with(quote) {
        return Err(LiteralError::Unterminated);
    }
    let body = &quoted[1..quoted.len() - 1];

    let mut out = Vec::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        if c == quote {
            return Err(LiteralError::Unterminated);
        }
        if !c.is_ascii() {
            return Err(LiteralError::NonAscii(c));
        }
        if c != '\\' {
            out.push(c as u8);
            continue;
        }

        let escaped = chars.next().ok_or_else(|| LiteralError::BadEscape("\\".into()))?;
        match escaped {
            '\\' => out.push(b'\\'),
            '\'' => out.push(b'\''),
            '"' => out.push(b'"'),
            'n' => out.push(b'\n'),
            'r' => out.push(b'\r'),
            't' => out.push(b'\t'),
            'a' => out.push(0x07),
            'b' => out.push(0x08),
            'f' => out.push(0x0C),
            'v' => out.push(0x0B),
            'x' => {
                let hex: String = chars.by_ref().take(2).collect();
                if hex.len() != 2 {
                    return Err(LiteralError::BadEscape(format!("\\x{}", hex)));
                }
                let value = u8::from_str_radix(&hex, 16).map_err(|_| LiteralError::BadEscape(format!("\\x{}", hex)))?;
                out.push(value);
            }
            '0'..='7' => {
                let mut digits = String::from(escaped);
                while digits.len() < 3 {
                    match chars.peek() {
                        Some(&d) if ('0'..='7').contains(&d) => {
                            digits.push(d);
                            chars.next();
                        }
                        _ => break,
                    }
                }
                let value = u16::from_str_radix(&digits, 8).map_err(|_| LiteralError::BadEscape(format!("\\{}", digits)))?;
                out.push(u8::try_from(value).map_err(|_| LiteralError::OutOfRange(format!("\\{}", digits)))?);
            }
            other if other.is_ascii() => {
                // unknown escapes stay as written
                out.push(b'\\');
                out.push(other as u8);
            }
            other => return Err(LiteralError::NonAscii(other)),
        }
    }
    Ok(out)
}

fn parse_list(input: &str, close: char) -> Result<Vec<u8>, LiteralError> {
    if input.len() < 2 || !input.ends_with(close) {
        return Err(LiteralError::Unterminated);
    }
    let body = input[1..input.len() - 1].trim();
    if body.is_empty() {
        return Ok(Vec::new());
    }

    let mut items: Vec<&str> = body.split(',').map(str::trim).collect();
    if items.last() == Some(&"") {
        items.pop();
    }
    items.into_iter().map(parse_byte).collect()
}

fn parse_byte(item: &str) -> Result<u8, LiteralError> {
    let bad = || LiteralError::BadInteger(item.to_string());
    let cleaned = item.replace('_', "");
    let (negative, digits) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.as_str()),
    };

    let lower = digits.to_ascii_lowercase();
    let value = if let Some(hex) = lower.strip_prefix("0x") {
        u64::from_str_radix(hex, 16)
    } else if let Some(oct) = lower.strip_prefix("0o") {
        u64::from_str_radix(oct, 8)
    } else if let Some(bin) = lower.strip_prefix("0b") {
        u64::from_str_radix(bin, 2)
    } else {
        lower.parse::<u64>()
    }
    .map_err(|_| bad())?;

    if negative && value != 0 {
        return Err(LiteralError::OutOfRange(item.to_string()));
    }
    u8::try_from(value).map_err(|_| LiteralError::OutOfRange(item.to_string()))
}
