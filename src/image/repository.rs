//! # Image Repository Port
//!
//! Defines the abstract image capability the embed codec depends on:
//! look an image up by id, and produce a [`Rendition`] of it for a filter
//! spec. Implementations decide where images live (SQL, object storage,
//! an in-memory map for tests) and how renditions are materialized.
//!
//! # Example
//! ```rust
//! use anyhow::Result;
//! use richtext_embeds::image::entity::ImageEntity;
//! use richtext_embeds::image::repository::{ImageRepository, Rendition};
//!
//! struct SingleImage(ImageEntity);
//!
//! impl ImageRepository for SingleImage {
//!     fn find_by_id(&self, id: u64) -> Result<Option<ImageEntity>> {
//!         Ok((self.0.id == id).then(|| self.0.clone()))
//!     }
//!
//!     fn render(&self, image: &ImageEntity, _filter_spec: &str) -> Result<Rendition> {
//!         Ok(Rendition::new(format!("/media/{}", image.file), image.width, image.height))
//!     }
//! }
//!
//! let repo = SingleImage(ImageEntity::new(1, "Test", "test.png", 640, 480));
//! assert!(repo.find_by_id(1).unwrap().is_some());
//! assert!(repo.find_by_id(2).unwrap().is_none());
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::html::escape::escape_attribute;
use crate::image::entity::ImageEntity;

/// A repository-produced, format-specific rendering of an image.
///
/// Contributes the base `<img>` attributes (`src`, `width`, `height`) to
/// composed markup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendition {
    /// URL of the rendered image.
    pub src: String,
    /// Rendered width in pixels.
    pub width: u32,
    /// Rendered height in pixels.
    pub height: u32,
}

impl Rendition {
    /// Creates a new [`Rendition`].
    pub fn new(src: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            src: src.into(),
            width,
            height,
        }
    }

    /// Renders this rendition's contribution to an `<img>` tag, with the
    /// URL attribute-escaped.
    ///
    /// # Example
    /// ```
    /// use richtext_embeds::image::repository::Rendition;
    ///
    /// let r = Rendition::new("/media/a.png", 500, 375);
    /// assert_eq!(r.html_attributes(), r#"src="/media/a.png" width="500" height="375""#);
    /// ```
    pub fn html_attributes(&self) -> String {
        format!(
            r#"src="{}" width="{}" height="{}""#,
            escape_attribute(&self.src),
            self.width,
            self.height
        )
    }
}

/// Abstract image lookup and rendition generation.
///
/// The codec treats not-found as a normal outcome (`Ok(None)`), reserving
/// `Err` for infrastructure failures. Unknown filter specs are the
/// implementation's business: it picks the fallback rather than the
/// caller guessing one.
pub trait ImageRepository: Send + Sync {
    /// Looks up an image by its identifier.
    fn find_by_id(&self, id: u64) -> Result<Option<ImageEntity>>;

    /// Produces a rendition of `image` for the given filter spec.
    fn render(&self, image: &ImageEntity, filter_spec: &str) -> Result<Rendition>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use std::sync::Mutex;

    /// Recording mock used to verify call flow through the port.
    #[derive(Default)]
    struct MockRepo {
        images: Vec<ImageEntity>,
        render_calls: Mutex<Vec<(u64, String)>>,
        fail_renders: bool,
    }

    impl ImageRepository for MockRepo {
        fn find_by_id(&self, id: u64) -> Result<Option<ImageEntity>> {
            Ok(self.images.iter().find(|i| i.id == id).cloned())
        }

        fn render(&self, image: &ImageEntity, filter_spec: &str) -> Result<Rendition> {
            if self.fail_renders {
                bail!("rendition backend unavailable");
            }
            self.render_calls
                .lock()
                .unwrap()
                .push((image.id, filter_spec.to_string()));
            Ok(Rendition::new(format!("/media/{}", image.file), image.width, image.height))
        }
    }

    #[test]
    fn rendition_html_attributes_escapes_src() {
        let r = Rendition::new(r#"/media/a"b.png"#, 10, 20);
        assert_eq!(
            r.html_attributes(),
            r#"src="/media/a&quot;b.png" width="10" height="20""#
        );
    }

    #[test]
    fn mock_repository_finds_and_renders() {
        let repo = MockRepo {
            images: vec![ImageEntity::new(1, "Test", "test.png", 640, 480)],
            ..Default::default()
        };

        let img = repo.find_by_id(1).unwrap().expect("image exists");
        assert!(repo.find_by_id(2).unwrap().is_none());

        let rendition = repo.render(&img, "width-500").unwrap();
        assert_eq!(rendition.src, "/media/test.png");

        let calls = repo.render_calls.lock().unwrap();
        assert_eq!(calls.as_slice(), &[(1, "width-500".to_string())]);
    }

    #[test]
    fn render_errors_propagate() {
        let repo = MockRepo {
            images: vec![ImageEntity::new(1, "Test", "test.png", 640, 480)],
            fail_renders: true,
            ..Default::default()
        };
        let img = repo.find_by_id(1).unwrap().unwrap();
        let err = repo.render(&img, "width-500").unwrap_err();
        assert!(err.to_string().contains("unavailable"));
    }

    fn assert_send_sync<T: ?Sized + Send + Sync>() {}
    #[test]
    fn dyn_image_repository_is_send_sync() {
        assert_send_sync::<dyn ImageRepository>();
    }

    fn assert_full_eq<T: Eq>() {}
    #[test]
    fn rendition_is_fully_comparable() {
        assert_full_eq::<Rendition>();
    }
}
