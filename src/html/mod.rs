pub mod escape;
pub mod tag;
