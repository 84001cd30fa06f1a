//! Receipt field extraction module.

pub mod parser;
pub mod positional;
pub mod rules;
pub mod text;

pub use parser::{ReceiptParser, ScanResult};
pub use positional::PositionalExtractor;
pub use text::TextExtractor;
