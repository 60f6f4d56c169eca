//! # Tag Attribute Access
//!
//! Defines [`TagAttributes`], the named-attribute lookup interface the
//! embed codec extracts from, plus [`Tag`], a minimal scanner for a single
//! HTML tag fragment.
//!
//! The codec does not care where a tag comes from — a full HTML parser, a
//! sanitizer pass, or a test fixture — only that it can answer
//! "what is the value of `data-id`?". Anything offering that lookup can
//! implement [`TagAttributes`]; `HashMap<String, String>` works out of the
//! box.
//!
//! # Example
//! ```rust
//! use richtext_embeds::html::tag::{Tag, TagAttributes};
//!
//! let tag = Tag::parse(r#"<b data-id="42" data-alt="a photo">foo</b>"#).unwrap();
//! assert_eq!(tag.name(), "b");
//! assert_eq!(tag.attribute("data-id"), Some("42"));
//! assert_eq!(tag.attribute("data-format"), None);
//! ```

use std::collections::HashMap;

use thiserror::Error;

use crate::html::escape::unescape_attribute;

/// Named-attribute lookup over a tag-like structure.
///
/// Returns the attribute value as stored (already entity-decoded), or
/// `None` when the attribute is absent. Absence is never an error at this
/// layer; the codec decides what missing attributes mean.
pub trait TagAttributes {
    /// Returns the value of the attribute `name`, if present.
    fn attribute(&self, name: &str) -> Option<&str>;
}

impl TagAttributes for HashMap<String, String> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// Error raised when a fragment cannot be scanned as a single tag.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TagParseError {
    /// The fragment does not start with `<` followed by a tag name.
    #[error("fragment does not start with a tag")]
    NotATag,
    /// The opening tag is never closed by `>`.
    #[error("unterminated tag")]
    Unterminated,
    /// An attribute has no name, e.g. a stray `=value`.
    #[error("malformed attribute")]
    MalformedAttribute,
}

/// A single scanned HTML tag: its name plus an attribute map.
///
/// This is deliberately not an HTML parser. It reads exactly one opening
/// tag from the front of a fragment — enough to lift `data-*` attributes
/// off stored rich-text markup — and ignores everything after the closing
/// `>`. Attribute values are entity-decoded so a value written through
/// [`crate::html::escape::escape_attribute`] reads back verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    name: String,
    attrs: HashMap<String, String>,
}

impl Tag {
    /// Scans the opening tag at the front of `fragment`.
    ///
    /// Attribute names are lowercased; values may be double-quoted,
    /// single-quoted, or unquoted, and bare attributes map to the empty
    /// string.
    ///
    /// # Errors
    /// [`TagParseError::NotATag`] if the fragment does not begin with an
    /// opening tag, [`TagParseError::Unterminated`] if `>` never arrives,
    /// [`TagParseError::MalformedAttribute`] on a nameless attribute.
    pub fn parse(fragment: &str) -> Result<Self, TagParseError> {
        let mut chars = fragment.trim_start().char_indices().peekable();
        let rest = fragment.trim_start();

        match chars.next() {
            Some((_, '<')) => {}
            _ => return Err(TagParseError::NotATag),
        }

        let name_start = 1;
        let mut name_end = name_start;
        while let Some(&(i, c)) = chars.peek() {
            if c.is_ascii_alphanumeric() || c == '-' {
                chars.next();
                name_end = i + c.len_utf8();
            } else {
                break;
            }
        }
        if name_end == name_start {
            return Err(TagParseError::NotATag);
        }
        let name = rest[name_start..name_end].to_ascii_lowercase();

        let mut attrs = HashMap::new();
        loop {
            // Skip whitespace and self-closing slashes between attributes.
            while matches!(chars.peek(), Some(&(_, c)) if c.is_whitespace() || c == '/') {
                chars.next();
            }
            match chars.peek() {
                None => return Err(TagParseError::Unterminated),
                Some(&(_, '>')) => break,
                Some(_) => {}
            }

            let attr_start = chars.peek().map(|&(i, _)| i).unwrap_or_default();
            let mut attr_end = attr_start;
            while let Some(&(i, c)) = chars.peek() {
                if c.is_whitespace() || c == '=' || c == '>' || c == '/' {
                    break;
                }
                chars.next();
                attr_end = i + c.len_utf8();
            }
            let attr_name = rest[attr_start..attr_end].to_ascii_lowercase();
            if attr_name.is_empty() {
                return Err(TagParseError::MalformedAttribute);
            }

            let value = if matches!(chars.peek(), Some(&(_, '='))) {
                chars.next();
                match chars.peek() {
                    Some(&(_, quote)) if quote == '"' || quote == '\'' => {
                        chars.next();
                        let val_start = chars.peek().map(|&(i, _)| i).unwrap_or(rest.len());
                        let mut val_end = val_start;
                        let mut closed = false;
                        while let Some((i, c)) = chars.next() {
                            if c == quote {
                                closed = true;
                                break;
                            }
                            val_end = i + c.len_utf8();
                        }
                        if !closed {
                            return Err(TagParseError::Unterminated);
                        }
                        rest[val_start..val_end].to_string()
                    }
                    _ => {
                        let val_start = chars.peek().map(|&(i, _)| i).unwrap_or(rest.len());
                        let mut val_end = val_start;
                        while let Some(&(i, c)) = chars.peek() {
                            if c.is_whitespace() || c == '>' {
                                break;
                            }
                            chars.next();
                            val_end = i + c.len_utf8();
                        }
                        rest[val_start..val_end].to_string()
                    }
                }
            } else {
                String::new()
            };

            attrs.insert(attr_name, unescape_attribute(&value));
        }

        Ok(Self { name, attrs })
    }

    /// The lowercased tag name (`"b"`, `"img"`, ...).
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TagAttributes for Tag {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tag_name_and_data_attributes() {
        let tag =
            Tag::parse(r#"<b data-id="test-id" data-format="test-format" data-alt="test-alt">foo</b>"#)
                .unwrap();

        assert_eq!(tag.name(), "b");
        assert_eq!(tag.attribute("data-id"), Some("test-id"));
        assert_eq!(tag.attribute("data-format"), Some("test-format"));
        assert_eq!(tag.attribute("data-alt"), Some("test-alt"));
    }

    #[test]
    fn missing_attribute_is_none() {
        let tag = Tag::parse(r#"<img src="a.png">"#).unwrap();
        assert_eq!(tag.attribute("data-id"), None);
    }

    #[test]
    fn attribute_values_are_entity_decoded() {
        let tag = Tag::parse(r#"<b data-alt="Arthur &quot;two sheds&quot; Jackson">"#).unwrap();
        assert_eq!(
            tag.attribute("data-alt"),
            Some("Arthur \"two sheds\" Jackson")
        );
    }

    #[test]
    fn supports_single_quoted_unquoted_and_bare_attributes() {
        let tag = Tag::parse("<input type='text' value=abc disabled>").unwrap();
        assert_eq!(tag.attribute("type"), Some("text"));
        assert_eq!(tag.attribute("value"), Some("abc"));
        assert_eq!(tag.attribute("disabled"), Some(""));
    }

    #[test]
    fn attribute_names_are_case_insensitive() {
        let tag = Tag::parse(r#"<IMG DATA-ID="7">"#).unwrap();
        assert_eq!(tag.name(), "img");
        assert_eq!(tag.attribute("data-id"), Some("7"));
    }

    #[test]
    fn self_closing_tag_parses() {
        let tag = Tag::parse(r#"<img data-id="3" />"#).unwrap();
        assert_eq!(tag.attribute("data-id"), Some("3"));
    }

    #[test]
    fn rejects_non_tag_input() {
        assert_eq!(Tag::parse("plain text").unwrap_err(), TagParseError::NotATag);
        assert_eq!(Tag::parse("").unwrap_err(), TagParseError::NotATag);
        assert_eq!(Tag::parse("<>").unwrap_err(), TagParseError::NotATag);
    }

    #[test]
    fn rejects_nameless_attribute() {
        assert_eq!(
            Tag::parse("<b =x>").unwrap_err(),
            TagParseError::MalformedAttribute
        );
        assert_eq!(
            Tag::parse(r#"<b ="value">"#).unwrap_err(),
            TagParseError::MalformedAttribute
        );
    }

    #[test]
    fn rejects_unterminated_tag() {
        assert_eq!(
            Tag::parse(r#"<b data-id="1""#).unwrap_err(),
            TagParseError::Unterminated
        );
        assert_eq!(
            Tag::parse(r#"<b data-id="1"#).unwrap_err(),
            TagParseError::Unterminated
        );
    }

    #[test]
    fn hashmap_implements_tag_attributes() {
        let mut map = HashMap::new();
        map.insert("data-id".to_string(), "9".to_string());

        assert_eq!(map.attribute("data-id"), Some("9"));
        assert_eq!(map.attribute("data-alt"), None);
    }
}
