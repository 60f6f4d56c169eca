//! # HTML Attribute Escaping
//!
//! Escaping helpers for values interpolated into HTML attribute positions.
//!
//! Every user-controlled value this crate writes into markup (alt text,
//! format names, rendition URLs) passes through [`escape_attribute`].
//! Skipping it is an output-injection defect, so callers never get an
//! unescaped composition path.
//!
//! [`unescape_attribute`] is the inverse, used when reading attribute
//! values back out of stored markup.
//!
//! # Example
//! ```rust
//! use richtext_embeds::html::escape::{escape_attribute, unescape_attribute};
//!
//! let escaped = escape_attribute("Arthur \"two sheds\" Jackson");
//! assert_eq!(escaped, "Arthur &quot;two sheds&quot; Jackson");
//! assert_eq!(unescape_attribute(&escaped), "Arthur \"two sheds\" Jackson");
//! ```

/// Escapes a string for safe use inside a double-quoted HTML attribute.
///
/// Replaces `&`, `<`, `>` and `"` with their entity forms. Callers escape
/// exactly once, at composition time; the function itself is a plain
/// character rewrite.
pub fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Reverses [`escape_attribute`], mapping the four entity forms back to
/// their literal characters. Unknown entities are left untouched.
pub fn unescape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        let replaced = [
            ("&amp;", '&'),
            ("&lt;", '<'),
            ("&gt;", '>'),
            ("&quot;", '"'),
        ]
        .iter()
        .find(|(entity, _)| rest.starts_with(entity));
        match replaced {
            Some((entity, ch)) => {
                out.push(*ch);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
