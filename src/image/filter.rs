//! # Filter Specs
//!
//! A filter spec is the compact string a format uses to ask the repository
//! for a particular rendition, e.g. `"width-500"` or `"max-800x600"`.
//! [`FilterSpec`] parses those strings and computes the resulting target
//! dimensions from an image's original size.
//!
//! Dimension math only — no decoding or resampling happens here.
//! Repositories use the computed size to label the rendition they serve.
//!
//! # Example
//! ```rust
//! use richtext_embeds::image::filter::FilterSpec;
//!
//! let spec: FilterSpec = "width-500".parse().unwrap();
//! assert_eq!(spec.scale(1000, 750), (500, 375));
//! ```

use std::str::FromStr;

use thiserror::Error;

/// Error raised when a filter spec string cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized filter spec `{spec}`")]
pub struct FilterSpecError {
    /// The offending spec string.
    pub spec: String,
}

/// A parsed rendition recipe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterSpec {
    /// Serve the image at its stored dimensions.
    Original,
    /// Scale to the given width, preserving aspect ratio. Never upscales.
    Width(u32),
    /// Fit within the given bounding box, preserving aspect ratio.
    /// Never upscales.
    Max { width: u32, height: u32 },
}

impl FilterSpec {
    /// Computes the rendition dimensions for an original of
    /// `width` x `height` pixels.
    ///
    /// Heights are rounded to the nearest pixel. An original already
    /// inside the constraint is returned unchanged.
    pub fn scale(&self, width: u32, height: u32) -> (u32, u32) {
        if width == 0 || height == 0 {
            return (width, height);
        }
        match *self {
            FilterSpec::Original => (width, height),
            FilterSpec::Width(target) => scale_to_width(width, height, target),
            FilterSpec::Max {
                width: max_w,
                height: max_h,
            } => {
                if width <= max_w && height <= max_h {
                    return (width, height);
                }
                // Pick the tighter of the two constraints.
                let by_width = scale_to_width(width, height, max_w);
                if by_width.1 <= max_h {
                    by_width
                } else {
                    let w = (max_h as u64 * width as u64 + height as u64 / 2) / height as u64;
                    ((w as u32).max(1), max_h)
                }
            }
        }
    }
}

fn scale_to_width(width: u32, height: u32, target: u32) -> (u32, u32) {
    if target >= width {
        return (width, height);
    }
    let h = (target as u64 * height as u64 + width as u64 / 2) / width as u64;
    (target, (h as u32).max(1))
}

impl FromStr for FilterSpec {
    type Err = FilterSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || FilterSpecError { spec: s.to_string() };

        if s == "original" {
            return Ok(FilterSpec::Original);
        }
        if let Some(rest) = s.strip_prefix("width-") {
            let w: u32 = rest.parse().map_err(|_| err())?;
            if w == 0 {
                return Err(err());
            }
            return Ok(FilterSpec::Width(w));
        }
        if let Some(rest) = s.strip_prefix("max-") {
            let (w, h) = rest.split_once('x').ok_or_else(|| err())?;
            let w: u32 = w.parse().map_err(|_| err())?;
            let h: u32 = h.parse().map_err(|_| err())?;
            if w == 0 || h == 0 {
                return Err(err());
            }
            return Ok(FilterSpec::Max { width: w, height: h });
        }
        Err(err())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_spec_forms() {
        assert_eq!("original".parse::<FilterSpec>().unwrap(), FilterSpec::Original);
        assert_eq!("width-500".parse::<FilterSpec>().unwrap(), FilterSpec::Width(500));
        assert_eq!(
            "max-800x600".parse::<FilterSpec>().unwrap(),
            FilterSpec::Max {
                width: 800,
                height: 600
            }
        );
    }

    #[test]
    fn rejects_malformed_specs() {
        for bad in ["", "width-", "width-abc", "width-0", "max-800", "max-0x600", "crop-5"] {
            let err = bad.parse::<FilterSpec>().unwrap_err();
            assert_eq!(err.spec, bad);
            assert!(err.to_string().contains(bad));
        }
    }

    #[test]
    fn width_spec_scales_preserving_aspect_ratio() {
        let spec = FilterSpec::Width(500);
        assert_eq!(spec.scale(1000, 750), (500, 375));
        assert_eq!(spec.scale(640, 480), (500, 375));
    }

    #[test]
    fn width_spec_never_upscales() {
        let spec = FilterSpec::Width(500);
        assert_eq!(spec.scale(300, 200), (300, 200));
        assert_eq!(spec.scale(500, 100), (500, 100));
    }

    #[test]
    fn max_spec_fits_within_bounding_box() {
        let spec = FilterSpec::Max {
            width: 800,
            height: 600,
        };
        // Width-bound.
        assert_eq!(spec.scale(1600, 1000), (800, 500));
        // Height-bound.
        assert_eq!(spec.scale(1000, 2000), (300, 600));
        // Already fits.
        assert_eq!(spec.scale(400, 300), (400, 300));
    }

    #[test]
    fn original_spec_keeps_stored_dimensions() {
        assert_eq!(FilterSpec::Original.scale(123, 456), (123, 456));
    }

    #[test]
    fn degenerate_dimensions_pass_through() {
        assert_eq!(FilterSpec::Width(500).scale(0, 100), (0, 100));
        assert_eq!(FilterSpec::Width(1).scale(10000, 1), (1, 1));
    }
}
