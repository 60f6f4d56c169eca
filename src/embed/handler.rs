//! # Image Embed Handler
//!
//! The codec tying the pieces together: extraction of [`EmbedRecord`]s
//! from stored tags, and expansion of records back into `<img>` markup
//! for either the published page or the WYSIWYG editor surface.
//!
//! Both operations are stateless; the handler holds only read-only
//! collaborators and is safe to share across threads.
//!
//! # Example
//! ```rust
//! use std::sync::Arc;
//! use richtext_embeds::embed::handler::ImageEmbedHandler;
//! use richtext_embeds::html::tag::Tag;
//! use richtext_embeds::image::entity::ImageEntity;
//! use richtext_embeds::image::memory::InMemoryImageRepository;
//!
//! let mut repo = InMemoryImageRepository::new();
//! repo.insert(ImageEntity::new(1, "Test", "test.png", 640, 480));
//! let handler = ImageEmbedHandler::new(Arc::new(repo));
//!
//! let tag = Tag::parse(r#"<b data-id="1" data-format="left" data-alt="a boat">x</b>"#).unwrap();
//! let record = ImageEmbedHandler::extract_attributes(&tag);
//!
//! let html = handler.expand_attributes(&record, false).unwrap();
//! assert!(html.contains(r#"class="richtext-image left""#));
//! ```

use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::embed::record::EmbedRecord;
use crate::format::registry::FormatRegistry;
use crate::html::tag::TagAttributes;
use crate::image::repository::ImageRepository;

/// Degraded output for embeds whose image no longer resolves. Deliberate
/// and non-fatal: stored documents keep rendering around deleted images.
const UNRESOLVED_IMG: &str = "<img>";

/// Extracts and expands image embed attributes.
#[derive(Clone)]
pub struct ImageEmbedHandler {
    repository: Arc<dyn ImageRepository>,
    formats: FormatRegistry,
}

impl ImageEmbedHandler {
    /// Creates a handler over `repository` with the stock format registry.
    pub fn new(repository: Arc<dyn ImageRepository>) -> Self {
        Self::with_registry(repository, FormatRegistry::with_defaults())
    }

    /// Creates a handler with a caller-supplied format registry.
    pub fn with_registry(repository: Arc<dyn ImageRepository>, formats: FormatRegistry) -> Self {
        Self {
            repository,
            formats,
        }
    }

    /// Normalizes a tag's `data-id` / `data-format` / `data-alt`
    /// attributes into an [`EmbedRecord`].
    ///
    /// Pure mapping, no side effects; missing attributes become absent
    /// values, never errors.
    pub fn extract_attributes<T: TagAttributes>(tag: &T) -> EmbedRecord {
        EmbedRecord::from_tag(tag)
    }

    /// Expands a stored record into a single `<img>` fragment.
    ///
    /// When `editor_mode` is true the tag additionally carries the
    /// machine-readable `data-*` attributes the editor needs to rebuild
    /// the record; the published-page output carries none.
    ///
    /// An id the repository cannot resolve (including `0`) yields the
    /// literal `<img>` — degraded output, not a failure. Alt text and
    /// every other interpolated value are attribute-escaped in both modes.
    ///
    /// # Errors
    /// Only infrastructure failures from the repository (lookup or
    /// rendition generation) surface as errors.
    pub fn expand_attributes(&self, record: &EmbedRecord, editor_mode: bool) -> Result<String> {
        let Some(image) = self.repository.find_by_id(record.id)? else {
            debug!(id = record.id, "embedded image not found, emitting bare tag");
            return Ok(UNRESOLVED_IMG.to_string());
        };

        let format = self.formats.resolve(record.format.as_deref());
        let rendition = self.repository.render(&image, &format.filter_spec)?;
        let alt = record.alt_or_default();

        let html = if editor_mode {
            format.to_editor_html(record.id, &rendition, alt)
        } else {
            format.to_html(&rendition, alt)
        };
        Ok(html)
    }
}
