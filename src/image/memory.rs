//! # In-Memory Image Repository
//!
//! A HashMap-backed [`ImageRepository`] adapter. Used by unit tests and by
//! hosts that have no persistence layer (previews, static site builds).
//!
//! Renditions are computed, not generated: the target size comes from
//! [`FilterSpec`] arithmetic and the URL is derived from the stored file
//! name, e.g. `test.png` + `width-500` -> `/media/images/test.width-500.png`.
//!
//! # Example
//! ```rust
//! use richtext_embeds::image::entity::ImageEntity;
//! use richtext_embeds::image::memory::InMemoryImageRepository;
//! use richtext_embeds::image::repository::ImageRepository;
//!
//! let mut repo = InMemoryImageRepository::new();
//! repo.insert(ImageEntity::new(1, "Test", "test.png", 640, 480));
//!
//! let img = repo.find_by_id(1).unwrap().unwrap();
//! let r = repo.render(&img, "width-500").unwrap();
//! assert_eq!(r.src, "/media/images/test.width-500.png");
//! assert_eq!((r.width, r.height), (500, 375));
//! ```

use std::collections::HashMap;

use anyhow::Result;
use tracing::warn;

use crate::config::embed::EmbedConfig;
use crate::image::entity::ImageEntity;
use crate::image::filter::FilterSpec;
use crate::image::repository::{ImageRepository, Rendition};

/// In-memory [`ImageRepository`] implementation.
#[derive(Debug)]
pub struct InMemoryImageRepository {
    images: HashMap<u64, ImageEntity>,
    media_url_prefix: String,
}

impl Default for InMemoryImageRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryImageRepository {
    /// Creates an empty repository with the default media URL prefix.
    pub fn new() -> Self {
        Self::with_config(&EmbedConfig::default())
    }

    /// Creates an empty repository using the prefix from `config`.
    pub fn with_config(config: &EmbedConfig) -> Self {
        Self {
            images: HashMap::new(),
            media_url_prefix: config.media_url_prefix.clone(),
        }
    }

    /// Inserts an image, replacing any existing image with the same id.
    pub fn insert(&mut self, image: ImageEntity) {
        self.images.insert(image.id, image);
    }

    /// Number of stored images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the repository holds no images.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    fn rendition_url(&self, file: &str, spec_label: &str) -> String {
        let prefix = self.media_url_prefix.trim_end_matches('/');
        match file.rsplit_once('.') {
            Some((stem, ext)) => format!("{prefix}/{stem}.{spec_label}.{ext}"),
            None => format!("{prefix}/{file}.{spec_label}"),
        }
    }
}

impl ImageRepository for InMemoryImageRepository {
    fn find_by_id(&self, id: u64) -> Result<Option<ImageEntity>> {
        Ok(self.images.get(&id).cloned())
    }

    fn render(&self, image: &ImageEntity, filter_spec: &str) -> Result<Rendition> {
        // Filter specs arrive as caller input; unknown ones fall back to
        // the original size instead of failing the render.
        let (spec, label) = match filter_spec.parse::<FilterSpec>() {
            Ok(spec) => (spec, filter_spec),
            Err(e) => {
                warn!(filter_spec, error = %e, "falling back to original rendition");
                (FilterSpec::Original, "original")
            }
        };
        let (width, height) = spec.scale(image.width, image.height);
        Ok(Rendition::new(self.rendition_url(&image.file, label), width, height))
    }
}
