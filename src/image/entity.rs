//! # Image Entity
//!
//! The image row as the embed codec sees it. Storage, upload handling and
//! the actual pixel data all live elsewhere; this type carries only what
//! rendition generation needs — an identity, a file name, and the original
//! dimensions.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A stored image referenced by rich-text embeds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntity {
    /// Primary identifier, referenced by `EmbedRecord::id`.
    pub id: u64,
    /// Human-readable title.
    pub title: String,
    /// Stored file name (e.g. `"test.png"`), relative to the media root.
    pub file: String,
    /// Original width in pixels.
    pub width: u32,
    /// Original height in pixels.
    pub height: u32,
    /// Upload timestamp, if known.
    pub uploaded_at: Option<NaiveDateTime>,
}

impl ImageEntity {
    /// Creates a new [`ImageEntity`] without an upload timestamp.
    ///
    /// # Example
    /// ```
    /// use richtext_embeds::image::entity::ImageEntity;
    ///
    /// let img = ImageEntity::new(1, "Test", "test.png", 640, 480);
    /// assert_eq!(img.id, 1);
    /// assert_eq!(img.file, "test.png");
    /// ```
    pub fn new(
        id: u64,
        title: impl Into<String>,
        file: impl Into<String>,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            file: file.into(),
            width,
            height,
            uploaded_at: None,
        }
    }

    /// Sets the upload timestamp.
    pub fn with_uploaded_at(mut self, at: NaiveDateTime) -> Self {
        self.uploaded_at = Some(at);
        self
    }
}
