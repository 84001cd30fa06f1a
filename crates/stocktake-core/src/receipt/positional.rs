//! Positional field extraction from grouped word rows.
//!
//! Receipt labels lay fields out as a loose grid: a row of header
//! keywords with the values printed on the row below. This extractor
//! groups words into rows, finds header keywords per row, and reads
//! each value from the next row by horizontal-midpoint alignment.

use tracing::debug;

use crate::models::product::ProductFields;
use crate::ocr::rows::{group_rows, Row};
use crate::ocr::Word;

use super::rules::dates::parse_production_date;
use super::rules::fuzzy::{fuzzy_includes, DEFAULT_MIN_MATCH};
use super::rules::numbers::first_number;
use super::rules::patterns::CAPACITY;

/// Number of leading rows searched for the title line.
const TITLE_ROWS: usize = 5;

/// Column-aligned field extractor over recognized word boxes.
pub struct PositionalExtractor {
    vertical_threshold: f32,
    max_x_dist: f32,
}

impl PositionalExtractor {
    /// Create an extractor with the default pixel thresholds.
    pub fn new() -> Self {
        Self {
            vertical_threshold: 20.0,
            max_x_dist: 300.0,
        }
    }

    /// Set the row-grouping vertical threshold in pixels.
    pub fn with_vertical_threshold(mut self, px: f32) -> Self {
        self.vertical_threshold = px;
        self
    }

    /// Set the maximum header/value horizontal distance in pixels.
    pub fn with_max_x_dist(mut self, px: f32) -> Self {
        self.max_x_dist = px;
        self
    }

    /// Extract product fields from a flat word list.
    ///
    /// Pure and deterministic: identical input always yields an
    /// identical record. Fields that cannot be located stay unset, and
    /// the first (topmost) match wins per field.
    pub fn extract(&self, words: &[Word]) -> ProductFields {
        let rows = group_rows(words, self.vertical_threshold);

        let mut fields = self.title_fields(&rows);

        // Fold row-pair updates into the accumulator; merged_over keeps
        // already-set fields, which is exactly first-match-wins.
        for pair in rows.windows(2) {
            let update = self.row_fields(&pair[0], &pair[1]);
            fields = fields.merged_over(update);
        }

        debug!(
            "positional extraction over {} rows populated {} fields",
            rows.len(),
            fields.populated_count()
        );
        fields
    }

    /// Scan the first rows for the title line ("Jar Cortas 325 ML").
    fn title_fields(&self, rows: &[Row]) -> ProductFields {
        let mut fields = ProductFields::default();

        for row in rows.iter().take(TITLE_ROWS) {
            let text = row.text();
            if let Some(caps) = CAPACITY.captures(&text) {
                fields.capacity = Some(format!("{} {}", &caps[1], caps[2].to_uppercase()));

                if let Some(full) = caps.get(0) {
                    let prefix = text[..full.start()].trim();
                    if !prefix.is_empty() {
                        fields.product_type = Some(prefix.to_string());
                    }
                }
                break;
            }
        }

        fields
    }

    /// Fields recoverable from one header row and the row below it.
    fn row_fields(&self, row: &Row, next: &Row) -> ProductFields {
        let text = row.upper_text();
        let hit = |needle: &str| fuzzy_includes(&text, needle, DEFAULT_MIN_MATCH);

        let has_quantity = hit("QUANTITY") || hit("QTY");
        let has_piece = hit("PIECE") || hit("PCS");

        let mut update = ProductFields::default();

        if hit("BATCH") {
            update.batch_number = self.value_below_keyword(row, next, &["BATCH"]);
        }
        if hit("ITEM") || hit("ALT") {
            update.item_no = self.value_below_keyword(row, next, &["ITEM", "ALT"]);
        }
        if hit("COLOR") {
            update.color = self.value_below_keyword(row, next, &["COLOR"]);
        }
        if has_quantity && hit("LAYER") {
            // Multi-word header: values line up with the phrase's right
            // edge, so anchor on its rightmost word.
            update.qty_per_layer = self
                .value_below_multi(row, next, &["QUANTITY", "QTY", "PER", "LAYER"])
                .and_then(|v| first_number(&v));
        }
        if hit("DATE") {
            update.date_of_production = self
                .value_below_keyword(row, next, &["DATE"])
                .and_then(|v| parse_production_date(&v));
        }
        if hit("CAPAC") {
            update.capacity = self.value_below_keyword(row, next, &["CAPAC"]);
        }
        if hit("FINISH") {
            update.finish_type = self
                .find_header_word(row, &["FINISH"])
                .and_then(|header| self.finish_value(header, next));
        }
        if !has_quantity && hit("LAYER") {
            update.number_of_layers = self
                .value_below_keyword(row, next, &["LAYER"])
                .and_then(|v| first_number(&v));
        }
        // Pieces-per-pallet and pallet-count columns sit at the right
        // margin of the label regardless of header width, so alignment
        // is skipped and the rightmost word below is taken as-is.
        if has_piece {
            update.pieces_per_pallet = next.rightmost().and_then(|w| first_number(&w.text));
        }
        if hit("PALLET") && !has_piece {
            update.number_of_pallet = next.rightmost().and_then(|w| first_number(&w.text));
        }

        update
    }

    /// First word in the row fuzzy-matching any of the keywords.
    fn find_header_word<'a>(&self, row: &'a Row, keywords: &[&str]) -> Option<&'a Word> {
        row.words.iter().find(|w| {
            keywords
                .iter()
                .any(|k| fuzzy_includes(&w.text, k, DEFAULT_MIN_MATCH))
        })
    }

    /// Value below a single-keyword header, or `None` when no word in
    /// the next row aligns within `max_x_dist`.
    fn value_below_keyword(&self, row: &Row, next: &Row, keywords: &[&str]) -> Option<String> {
        self.find_header_word(row, keywords)
            .and_then(|header| self.value_below(header, next))
    }

    /// Value below a multi-word header phrase, anchored on the phrase's
    /// rightmost word.
    fn value_below_multi(&self, row: &Row, next: &Row, keywords: &[&str]) -> Option<String> {
        let anchor = row
            .words
            .iter()
            .filter(|w| {
                keywords
                    .iter()
                    .any(|k| fuzzy_includes(&w.text, k, DEFAULT_MIN_MATCH))
            })
            .max_by(|a, b| {
                a.bbox
                    .x0
                    .partial_cmp(&b.bbox.x0)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })?;

        self.value_below(anchor, next)
    }

    /// Text of the word in `next` whose horizontal midpoint is closest
    /// to the header's, within `max_x_dist`.
    fn value_below(&self, header: &Word, next: &Row) -> Option<String> {
        self.nearest_below(header, next)
            .map(|(_, word)| word.text.trim().to_string())
            .filter(|t| !t.is_empty())
    }

    /// Finish types can span two words ("TO 63"): take the aligned word
    /// plus the immediately following word when it also falls within
    /// range of the header midpoint.
    fn finish_value(&self, header: &Word, next: &Row) -> Option<String> {
        let (index, word) = self.nearest_below(header, next)?;
        let mut value = word.text.trim().to_string();

        if let Some(follow) = next.words.get(index + 1) {
            if (follow.center_x() - header.center_x()).abs() <= self.max_x_dist {
                value.push(' ');
                value.push_str(follow.text.trim());
            }
        }

        Some(value).filter(|v| !v.is_empty())
    }

    fn nearest_below<'a>(&self, header: &Word, next: &'a Row) -> Option<(usize, &'a Word)> {
        let target = header.center_x();
        let mut best: Option<(f32, usize)> = None;

        for (i, word) in next.words.iter().enumerate() {
            let dist = (word.center_x() - target).abs();
            if dist <= self.max_x_dist && best.is_none_or(|(d, _)| dist < d) {
                best = Some((dist, i));
            }
        }

        best.map(|(_, i)| (i, &next.words[i]))
    }
}

impl Default for PositionalExtractor {
    fn default() -> Self {
        Self::new()
    }
}
