//! Entity encoding for text content and double-quoted attribute values.
//!
//! Delegates to `html-escape`, which emits named entities (`&amp;`, `&lt;`,
//! `&quot;`, ...) rather than numeric character references - that's the
//! encoding real browsers and most hand-written HTML use, and it's what
//! keeps round-tripped output human-readable in a diff.

use std::fmt::Write as _;

/// Which escaping rules to apply: text nodes need fewer characters escaped
/// than a double-quoted attribute value does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Text,
    Attr,
}

/// Encodes `s` according to `mode`, appending the escaped bytes to `buf`.
pub fn encode(s: &str, mode: Mode, buf: &mut String) {
    match mode {
        Mode::Text => {
            html_escape::encode_text_to_string(s, buf);
        }
        Mode::Attr => {
            html_escape::encode_double_quoted_attribute_to_string(s, buf);
        }
    }
}

/// Encodes a number the same way a text node's `toString` would: no
/// trailing `.0` for integral values.
pub fn encode_number(n: f64, buf: &mut String) {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        let _ = write!(buf, "{}", n as i64);
    } else {
        let _ = write!(buf, "{n}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_escapes_ampersand_and_angle_brackets() {
        let mut buf = String::new();
        encode("<a> & </a>", Mode::Text, &mut buf);
        assert_eq!(buf, "&lt;a&gt; &amp; &lt;/a&gt;");
    }

    #[test]
    fn attr_escapes_double_quote() {
        let mut buf = String::new();
        encode(r#"say "hi""#, Mode::Attr, &mut buf);
        assert_eq!(buf, "say &quot;hi&quot;");
    }

    #[test]
    fn integral_number_has_no_decimal_point() {
        let mut buf = String::new();
        encode_number(0.0, &mut buf);
        assert_eq!(buf, "0");
    }

    #[test]
    fn fractional_number_keeps_decimal_point() {
        let mut buf = String::new();
        encode_number(1.5, &mut buf);
        assert_eq!(buf, "1.5");
    }
}
