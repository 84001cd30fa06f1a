//! Core library for warehouse receipt OCR processing.
//!
//! This crate provides:
//! - OCR word/box data contracts and row grouping
//! - Positional field extraction (column-aligned header/value lookup)
//! - Text fallback extraction for when box data is unusable
//! - The hybrid merge policy producing a `ProductFields` record
//!
//! The OCR engine itself, image capture, and preprocessing are external
//! collaborators: this crate consumes their output (recognized words with
//! bounding boxes, or a flat text blob) and never performs I/O.

pub mod error;
pub mod models;
pub mod ocr;
pub mod receipt;

pub use error::{Result, StocktakeError};
pub use models::config::ParserConfig;
pub use models::product::ProductFields;
pub use ocr::rows::{group_rows, Row};
pub use ocr::{BoundingBox, Word};
pub use receipt::parser::{ReceiptParser, ScanResult};
pub use receipt::positional::PositionalExtractor;
pub use receipt::text::TextExtractor;
