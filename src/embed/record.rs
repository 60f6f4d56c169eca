//! # Embed Records
//!
//! [`EmbedRecord`] is the normalized `{id, format, alt}` triple describing
//! one embedded image reference — the shape a rich-text field stores and
//! the shape expansion consumes.
//!
//! Records are ephemeral values: built from a tag on extraction or from a
//! persisted field on expansion, with no identity beyond the image id they
//! point at.

use serde::{Deserialize, Serialize};

use crate::html::tag::TagAttributes;

/// The stored attributes of one image embed.
///
/// `id` is structurally required; an id of `0` (or any id the repository
/// cannot resolve) degrades to a bare `<img>` at expansion rather than
/// failing. `format` and `alt` are genuinely optional and render as empty
/// strings when absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedRecord {
    /// Referenced image id.
    pub id: u64,
    /// Named rendering style, e.g. `"left"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Alternate text for the rendered tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl EmbedRecord {
    /// Creates a record with neither format nor alt text.
    pub fn new(id: u64) -> Self {
        Self {
            id,
            format: None,
            alt: None,
        }
    }

    /// Sets the format name.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Sets the alt text.
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    /// Builds a record from a tag's `data-id` / `data-format` / `data-alt`
    /// attributes.
    ///
    /// Missing attributes map to absent values; a missing or non-numeric
    /// `data-id` maps to `0`, which never resolves and therefore expands
    /// to the degraded `<img>`. Pure; never errors.
    ///
    /// # Example
    /// ```
    /// use richtext_embeds::embed::record::EmbedRecord;
    /// use richtext_embeds::html::tag::Tag;
    ///
    /// let tag = Tag::parse(r#"<b data-id="42" data-format="left" data-alt="a boat">x</b>"#).unwrap();
    /// let record = EmbedRecord::from_tag(&tag);
    /// assert_eq!(record.id, 42);
    /// assert_eq!(record.format.as_deref(), Some("left"));
    /// assert_eq!(record.alt.as_deref(), Some("a boat"));
    /// ```
    pub fn from_tag<T: TagAttributes>(tag: &T) -> Self {
        Self {
            id: tag
                .attribute("data-id")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(0),
            format: tag.attribute("data-format").map(str::to_owned),
            alt: tag.attribute("data-alt").map(str::to_owned),
        }
    }

    /// The alt text, or the empty string when absent.
    pub fn alt_or_default(&self) -> &str {
        self.alt.as_deref().unwrap_or("")
    }
}
