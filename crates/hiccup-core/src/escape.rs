//! Quoted string literals
//!
//! Text nodes and attribute values are written as double-quoted literals using
//! the escape sequences of the Clojure/EDN reader.

use std::fmt::Write;

use crate::{Error, Result};

/// Escape `s` for use inside a double-quoted literal (quotes not included)
pub fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    push_escaped(s, &mut out);
    out
}

/// Write `s` as a complete quoted literal, including the surrounding quotes
pub fn push_quoted(s: &str, out: &mut String) {
    out.push('"');
    push_escaped(s, out);
    out.push('"');
}

pub(crate) fn push_escaped(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            c if c.is_control() => {
                // writing into a String cannot fail
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            _ => out.push(c),
        }
    }
}

/// Reverse [`escape_string`]
///
/// `s` is the literal body without the surrounding quotes.
pub fn unescape_string(s: &str) -> Result<String> {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.char_indices();

    while let Some((offset, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        let invalid = |sequence: &str| Error::InvalidEscape {
            offset,
            sequence: sequence.to_string(),
        };

        let Some((_, escaped)) = chars.next() else {
            return Err(invalid("\\"));
        };

        match escaped {
            '"' => out.push('"'),
            '\\' => out.push('\\'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'b' => out.push('\u{08}'),
            'f' => out.push('\u{0c}'),
            'u' => {
                let hex: String = chars.by_ref().take(4).map(|(_, c)| c).collect();
                let decoded = if hex.len() == 4 {
                    u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32)
                } else {
                    None
                };
                match decoded {
                    Some(c) => out.push(c),
                    None => return Err(invalid(&format!("\\u{}", hex))),
                }
            }
            other => return Err(invalid(&format!("\\{}", other))),
        }
    }

    Ok(out)
}
