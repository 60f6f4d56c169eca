//! # Embed Configuration
//!
//! Host-tunable knobs for embed expansion: the filter spec applied when a
//! record names a format nobody registered, and the URL prefix the
//! in-memory repository serves renditions under.
//!
//! # Example
//! ```rust
//! use richtext_embeds::config::embed::EmbedConfig;
//!
//! let cfg = EmbedConfig::default();
//! assert_eq!(cfg.default_filter_spec, "width-500");
//! assert_eq!(cfg.media_url_prefix, "/media/images");
//! ```

use crate::config::env::read_str;

/// Configuration for embed expansion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmbedConfig {
    /// Filter spec used for formats with no registry entry.
    pub default_filter_spec: String,
    /// URL prefix for renditions served by the in-memory repository.
    pub media_url_prefix: String,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            default_filter_spec: "width-500".into(),
            media_url_prefix: "/media/images".into(),
        }
    }
}

impl EmbedConfig {
    /// Loads the configuration from environment variables, falling back to
    /// the defaults above:
    ///
    /// - `RICHTEXT_DEFAULT_FILTER_SPEC`
    /// - `RICHTEXT_MEDIA_URL_PREFIX`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_filter_spec: read_str(
                "RICHTEXT_DEFAULT_FILTER_SPEC",
                &defaults.default_filter_spec,
            ),
            media_url_prefix: read_str("RICHTEXT_MEDIA_URL_PREFIX", &defaults.media_url_prefix),
        }
    }
}
