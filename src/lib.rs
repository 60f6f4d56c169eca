//! # richtext_embeds
//!
//! Image embed handling for rich-text content fields.
//!
//! A rich-text document persists embedded images as tags carrying
//! `data-id` / `data-format` / `data-alt` attributes. This crate provides
//! the two halves of that contract:
//!
//! - extraction: normalize such a tag into a typed [`embed::record::EmbedRecord`]
//! - expansion: turn a stored record back into a renderable `<img>` fragment,
//!   with editor-only `data-*` attributes when targeting a WYSIWYG surface
//!
//! Image lookup and rendition generation sit behind the
//! [`image::repository::ImageRepository`] port, so the codec stays independent
//! of any particular database or web framework.
//!
//! ## Example usage (in another crate)
//!
//! ```rust
//! use std::sync::Arc;
//! use richtext_embeds::embed::handler::ImageEmbedHandler;
//! use richtext_embeds::embed::record::EmbedRecord;
//! use richtext_embeds::image::entity::ImageEntity;
//! use richtext_embeds::image::memory::InMemoryImageRepository;
//!
//! let mut repo = InMemoryImageRepository::new();
//! repo.insert(ImageEntity::new(1, "Test", "test.png", 640, 480));
//!
//! let handler = ImageEmbedHandler::new(Arc::new(repo));
//! let record = EmbedRecord::new(1).with_format("left");
//! let html = handler.expand_attributes(&record, false).unwrap();
//! assert!(html.contains("class=\"richtext-image left\""));
//! ```
// ===============================
// Re-exports of external crates
// ===============================

pub use anyhow;
pub use chrono;
pub use serde;
pub use serde_json;
pub use thiserror;
pub use tracing;

// ===============================
// Public modules
// ===============================
pub mod config;
pub mod embed;
pub mod format;
pub mod html;
pub mod image;
