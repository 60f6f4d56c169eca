pub mod image_format;
pub mod registry;
