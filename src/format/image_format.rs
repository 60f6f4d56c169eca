//! # Image Formats
//!
//! An [`ImageFormat`] is a named rendering style for embedded images — the
//! "left" in `data-format="left"`. It carries the class list written onto
//! the final `<img>` tag and the filter spec handed to the repository, and
//! it owns the markup composition for both render targets.
//!
//! # Example
//! ```rust
//! use richtext_embeds::format::image_format::ImageFormat;
//! use richtext_embeds::image::repository::Rendition;
//!
//! let left = ImageFormat::new("left", "Left-aligned", "richtext-image left", "width-500");
//! let rendition = Rendition::new("/media/images/test.width-500.png", 500, 375);
//!
//! let html = left.to_html(&rendition, "A boat");
//! assert!(html.starts_with("<img class=\"richtext-image left\""));
//! assert!(html.contains("alt=\"A boat\""));
//! ```

use serde::{Deserialize, Serialize};

use crate::html::escape::escape_attribute;
use crate::image::repository::Rendition;

/// A named rendering style for embedded images.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageFormat {
    /// Machine name stored in `data-format` (e.g. `"left"`).
    pub name: String,
    /// Human-readable label shown in format choosers.
    pub label: String,
    /// Space-separated class list for the output tag. May be empty, in
    /// which case no `class` attribute is emitted.
    pub classnames: String,
    /// Filter spec requested from the repository for this style.
    pub filter_spec: String,
}

impl ImageFormat {
    /// Creates a new [`ImageFormat`].
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        classnames: impl Into<String>,
        filter_spec: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            classnames: classnames.into(),
            filter_spec: filter_spec.into(),
        }
    }

    /// Composes the published-page `<img>` tag for a rendition.
    ///
    /// The alt text and every other interpolated value are
    /// attribute-escaped here, unconditionally.
    pub fn to_html(&self, rendition: &Rendition, alt: &str) -> String {
        format!(
            r#"<img {}{} alt="{}">"#,
            self.class_attribute(),
            rendition.html_attributes(),
            escape_attribute(alt)
        )
    }

    /// Composes the editor-surface `<img>` tag for a rendition.
    ///
    /// Identical to [`Self::to_html`] plus the leading machine-readable
    /// `data-*` attributes the editor round-trips on, in the fixed order
    /// `data-embedtype`, `data-id`, `data-format`, `data-alt`. The
    /// `data-alt` and `alt` attributes render from the same escaped value.
    pub fn to_editor_html(&self, id: u64, rendition: &Rendition, alt: &str) -> String {
        let escaped_alt = escape_attribute(alt);
        format!(
            r#"<img data-embedtype="image" data-id="{}" data-format="{}" data-alt="{}" {}{} alt="{}">"#,
            id,
            escape_attribute(&self.name),
            escaped_alt,
            self.class_attribute(),
            rendition.html_attributes(),
            escaped_alt
        )
    }

    fn class_attribute(&self) -> String {
        if self.classnames.is_empty() {
            String::new()
        } else {
            format!(r#"class="{}" "#, escape_attribute(&self.classnames))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn left() -> ImageFormat {
        ImageFormat::new("left", "Left-aligned", "richtext-image left", "width-500")
    }

    fn rendition() -> Rendition {
        Rendition::new("/media/images/test.width-500.png", 500, 375)
    }

    #[test]
    fn to_html_composes_published_tag() {
        let html = left().to_html(&rendition(), "test-alt");
        assert_eq!(
            html,
            r#"<img class="richtext-image left" src="/media/images/test.width-500.png" width="500" height="375" alt="test-alt">"#
        );
    }

    #[test]
    fn to_editor_html_prepends_data_attributes_in_order() {
        let html = left().to_editor_html(1, &rendition(), "test-alt");
        assert!(html.starts_with(
            r#"<img data-embedtype="image" data-id="1" data-format="left" data-alt="test-alt" class="richtext-image left""#
        ));
        assert!(html.ends_with(r#"alt="test-alt">"#));
    }

    #[test]
    fn alt_text_is_escaped_in_both_targets() {
        let alt = r#"Arthur "two sheds" Jackson"#;

        let page = left().to_html(&rendition(), alt);
        assert!(page.contains(r#"alt="Arthur &quot;two sheds&quot; Jackson""#));

        let editor = left().to_editor_html(1, &rendition(), alt);
        assert!(editor.contains(r#"data-alt="Arthur &quot;two sheds&quot; Jackson""#));
        assert!(editor.contains(r#"alt="Arthur &quot;two sheds&quot; Jackson""#));
    }

    #[test]
    fn empty_classnames_omit_class_attribute() {
        let bare = ImageFormat::new("", "", "", "original");
        let html = bare.to_html(&rendition(), "x");
        assert!(!html.contains("class="));
        assert!(html.starts_with("<img src=\""));
    }

    #[test]
    fn format_name_is_escaped_in_editor_output() {
        let odd = ImageFormat::new(r#"we"ird"#, "Odd", "richtext-image", "original");
        let html = odd.to_editor_html(2, &rendition(), "");
        assert!(html.contains(r#"data-format="we&quot;ird""#));
    }

    #[test]
    fn serializes_round_trip() {
        let f = left();
        let json = serde_json::to_string(&f).unwrap();
        let back: ImageFormat = serde_json::from_str(&json).unwrap();
        assert_eq!(f, back);
    }
}
