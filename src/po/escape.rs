//! PO string quoting.
//!
//! Escaping is lossless: `unescape(escape(s)) == s` for any message text,
//! which is what keeps render→parse→render round-trips byte-stable.

use anyhow::{Result, bail};

/// Escape a message text for inclusion inside a quoted PO string.
///
/// Every ASCII control character is escaped: the common ones by their C
/// escape name, the rest as three-digit octal so a raw control byte never
/// reaches the catalog file.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\x07' => out.push_str("\\a"),
            '\x08' => out.push_str("\\b"),
            '\x0b' => out.push_str("\\v"),
            '\x0c' => out.push_str("\\f"),
            c if c.is_ascii_control() => out.push_str(&format!("\\{:03o}", c as u32)),
            _ => out.push(ch),
        }
    }
    out
}

/// Reverse of [`escape`]. Fails on a dangling backslash or an escape
/// sequence this tool never emits.
pub fn unescape(text: &str) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('a') => out.push('\x07'),
            Some('b') => out.push('\x08'),
            Some('v') => out.push('\x0b'),
            Some('f') => out.push('\x0c'),
            Some(digit @ '0'..='7') => {
                // Octal escape, one to three digits
                let mut value = digit as u32 - '0' as u32;
                for _ in 0..2 {
                    match chars.peek().and_then(|c| c.to_digit(8)) {
                        Some(next) => {
                            value = value * 8 + next;
                            chars.next();
                        }
                        None => break,
                    }
                }
                match char::from_u32(value) {
                    Some(c) => out.push(c),
                    None => bail!("invalid octal escape '\\{:o}'", value),
                }
            }
            Some(other) => bail!("unsupported escape sequence '\\{}'", other),
            None => bail!("dangling backslash at end of string"),
        }
    }
    Ok(out)
}
