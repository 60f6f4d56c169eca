//! # Format Registry
//!
//! Maps format names to [`ImageFormat`] definitions. Ships with the stock
//! styles (`fullwidth`, `left`, `right`); hosts register their own on top.
//!
//! Resolution never fails: an unregistered name synthesizes a format that
//! keeps the name as a class token and uses the configured default filter
//! spec, so stored documents referencing retired formats still render.
//!
//! # Example
//! ```rust
//! use richtext_embeds::format::registry::FormatRegistry;
//!
//! let registry = FormatRegistry::with_defaults();
//! assert_eq!(registry.get("left").unwrap().classnames, "richtext-image left");
//!
//! let fallback = registry.resolve(Some("banner"));
//! assert_eq!(fallback.classnames, "richtext-image banner");
//! ```

use std::collections::HashMap;

use crate::config::embed::EmbedConfig;
use crate::format::image_format::ImageFormat;

/// Registry of named image formats.
#[derive(Clone, Debug)]
pub struct FormatRegistry {
    formats: HashMap<String, ImageFormat>,
    default_filter_spec: String,
}

impl FormatRegistry {
    /// Creates an empty registry using the default configuration.
    pub fn new() -> Self {
        Self::with_config(&EmbedConfig::default())
    }

    /// Creates an empty registry with the fallback filter spec taken from
    /// `config`.
    pub fn with_config(config: &EmbedConfig) -> Self {
        Self {
            formats: HashMap::new(),
            default_filter_spec: config.default_filter_spec.clone(),
        }
    }

    /// Creates a registry pre-populated with the stock formats:
    ///
    /// | name        | class list                  | filter spec |
    /// |-------------|-----------------------------|-------------|
    /// | `fullwidth` | `richtext-image full-width` | `width-800` |
    /// | `left`      | `richtext-image left`       | `width-500` |
    /// | `right`     | `richtext-image right`      | `width-500` |
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(ImageFormat::new(
            "fullwidth",
            "Full width",
            "richtext-image full-width",
            "width-800",
        ));
        registry.register(ImageFormat::new(
            "left",
            "Left-aligned",
            "richtext-image left",
            "width-500",
        ));
        registry.register(ImageFormat::new(
            "right",
            "Right-aligned",
            "richtext-image right",
            "width-500",
        ));
        registry
    }

    /// Registers a format, replacing any existing format with the same name.
    pub fn register(&mut self, format: ImageFormat) {
        self.formats.insert(format.name.clone(), format);
    }

    /// Returns the registered format with the given name, if any.
    pub fn get(&self, name: &str) -> Option<&ImageFormat> {
        self.formats.get(name)
    }

    /// Resolves a stored format name to a renderable format.
    ///
    /// - Registered name: that format.
    /// - Unregistered name: synthesized format whose class list is
    ///   `richtext-image <name>` and whose filter spec is the configured
    ///   default.
    /// - Absent, empty, or all-whitespace name: synthesized format with
    ///   the bare `richtext-image` class list and no trailing token.
    ///   Editor output stores a format-less record as `data-format=""`,
    ///   so re-extracted markup arrives here as `Some("")` and must
    ///   render identically to `None`.
    pub fn resolve(&self, name: Option<&str>) -> ImageFormat {
        match name.filter(|n| !n.trim().is_empty()) {
            Some(n) => {
                if let Some(found) = self.formats.get(n) {
                    return found.clone();
                }
                ImageFormat::new(
                    n,
                    n,
                    format!("richtext-image {n}"),
                    self.default_filter_spec.clone(),
                )
            }
            None => ImageFormat::new(
                "",
                "",
                "richtext-image",
                self.default_filter_spec.clone(),
            ),
        }
    }
}
