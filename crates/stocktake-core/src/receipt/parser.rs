//! Hybrid receipt parser combining positional and text extraction.

use std::time::Instant;

use tracing::{debug, info};

use crate::models::config::ParserConfig;
use crate::models::product::ProductFields;
use crate::ocr::{mean_confidence, Word};

use super::positional::PositionalExtractor;
use super::text::TextExtractor;

/// Result of one receipt parse.
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// Extracted product fields, confidence attached.
    pub fields: ProductFields,
    /// Whether the text fallback contributed to the result.
    pub used_fallback: bool,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Merge policy over the two extraction strategies.
///
/// The positional extractor runs when enough word boxes are available;
/// if it recovers too few fields, the text fallback runs on the raw
/// text and fills the gaps, with positional values winning on overlap.
pub struct ReceiptParser {
    positional: PositionalExtractor,
    text: TextExtractor,
    min_words_for_positional: usize,
    min_fields_before_fallback: usize,
}

impl ReceiptParser {
    /// Create a parser with the default configuration.
    pub fn new() -> Self {
        Self::from_config(&ParserConfig::default())
    }

    /// Create a parser from a configuration.
    pub fn from_config(config: &ParserConfig) -> Self {
        Self {
            positional: PositionalExtractor::new()
                .with_vertical_threshold(config.vertical_threshold)
                .with_max_x_dist(config.max_x_dist),
            text: TextExtractor::new(),
            min_words_for_positional: config.min_words_for_positional,
            min_fields_before_fallback: config.min_fields_before_fallback,
        }
    }

    /// Set the minimum word count required for the positional path.
    pub fn with_min_words_for_positional(mut self, count: usize) -> Self {
        self.min_words_for_positional = count;
        self
    }

    /// Set the field count below which the fallback runs.
    pub fn with_min_fields_before_fallback(mut self, count: usize) -> Self {
        self.min_fields_before_fallback = count;
        self
    }

    /// Parse one receipt from its recognized words and flattened text.
    ///
    /// One-shot and deterministic; never fails. A receipt the heuristics
    /// cannot read simply produces an empty record (the caller decides
    /// whether to re-capture or fall back to manual entry).
    pub fn parse(&self, words: &[Word], raw_text: &str) -> ScanResult {
        let start = Instant::now();

        info!(
            "parsing receipt: {} words, {} chars of raw text",
            words.len(),
            raw_text.len()
        );

        let mut fields = if words.len() >= self.min_words_for_positional {
            self.positional.extract(words)
        } else {
            debug!(
                "only {} words (< {}), skipping positional extraction",
                words.len(),
                self.min_words_for_positional
            );
            ProductFields::default()
        };

        let mut used_fallback = false;
        if fields.populated_count() < self.min_fields_before_fallback {
            debug!(
                "{} fields after positional pass, running text fallback",
                fields.populated_count()
            );
            used_fallback = true;
            fields = fields.merged_over(self.text.extract(raw_text));
        }

        fields.confidence = Some(mean_confidence(words));

        let processing_time_ms = start.elapsed().as_millis() as u64;
        debug!(
            "receipt parse finished: {} fields in {} ms",
            fields.populated_count(),
            processing_time_ms
        );

        ScanResult {
            fields,
            used_fallback,
            processing_time_ms,
        }
    }
}

impl Default for ReceiptParser {
    fn default() -> Self {
        Self::new()
    }
}
