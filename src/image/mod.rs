pub mod entity;
pub mod filter;
pub mod memory;
pub mod repository;
