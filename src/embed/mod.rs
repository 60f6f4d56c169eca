pub mod handler;
pub mod record;
