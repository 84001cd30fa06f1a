//! Data models for receipt extraction.

pub mod config;
pub mod product;

pub use config::ParserConfig;
pub use product::ProductFields;
