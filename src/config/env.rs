//! # Environment Variable Utilities
//!
//! Helpers for reading configuration values from environment variables
//! with fallback defaults. Used by [`crate::config::embed::EmbedConfig`].
//!
//! # Examples
//! ```rust,no_run
//! use richtext_embeds::config::env::read_str;
//!
//! let prefix = read_str("RICHTEXT_MEDIA_URL_PREFIX", "/media/images");
//! ```

/// Reads a string from an environment variable, returning `default` when
/// the variable is unset or empty after trimming.
pub fn read_str(name: &str, default: &str) -> String {
    read_str_from(|k| std::env::var(k).ok(), name, default)
}

/// Reads a string using a custom provider function.
///
/// Useful for testing or mocking environment sources.
///
/// # Example
/// ```rust
/// use richtext_embeds::config::env::read_str_from;
///
/// let got = read_str_from(|_| Some(" width-300 ".into()), "SPEC", "width-500");
/// assert_eq!(got, "width-300");
/// ```
pub fn read_str_from<F>(provider: F, name: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    match provider(name) {
        Some(v) => {
            let s = v.trim().trim_matches(|c| c == '"' || c == '\'').trim();
            if s.is_empty() {
                default.to_string()
            } else {
                s.to_string()
            }
        }
        None => default.to_string(),
    }
}
