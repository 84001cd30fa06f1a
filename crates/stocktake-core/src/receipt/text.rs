//! Text fallback extraction for when word-box data is unusable.
//!
//! Works on the OCR engine's flattened text output alone: scans
//! line-by-line for header keywords and takes best-effort guesses at
//! the value on the following line. Lower accuracy than the positional
//! path; every heuristic yields nothing silently on mismatch.

use tracing::debug;

use crate::models::product::ProductFields;

use super::rules::dates::parse_production_date;
use super::rules::fuzzy::{fuzzy_includes, DEFAULT_MIN_MATCH};
use super::rules::numbers::{first_number, is_numeric_token, last_number};
use super::rules::patterns::{BATCH_TOKEN, CAPACITY, CAPACITY_UNITS, ITEM_TOKEN};

/// Line-oriented fallback extractor over raw recognized text.
pub struct TextExtractor;

impl TextExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract product fields from a flat text blob.
    ///
    /// Fields are set at most once; later lines never overwrite earlier
    /// finds.
    pub fn extract(&self, raw_text: &str) -> ProductFields {
        // Receipts carry an Arabic mirror of each label; lines without
        // Latin letters or digits contribute nothing here.
        let lines: Vec<&str> = raw_text
            .lines()
            .map(str::trim)
            .filter(|l| l.chars().any(|c| c.is_ascii_alphanumeric()))
            .collect();

        let mut fields = ProductFields::default();

        for (i, line) in lines.iter().enumerate() {
            let upper = line.to_uppercase();
            let hit = |needle: &str| fuzzy_includes(&upper, needle, DEFAULT_MIN_MATCH);

            if fields.capacity.is_none() {
                self.scan_title(line, &mut fields);
            }

            if hit("BATCH") {
                self.scan_batch_line(next_non_blank(&lines, i), &mut fields);
            }

            if hit("DATE") {
                self.scan_date_line(next_non_blank(&lines, i), &mut fields);
            }

            let has_piece = hit("PIECE") || hit("PCS");
            if has_piece && fields.pieces_per_pallet.is_none() {
                fields.pieces_per_pallet = first_number(next_non_blank(&lines, i));
            }
            if hit("PALLET") && !has_piece && fields.number_of_pallet.is_none() {
                fields.number_of_pallet = first_number(next_non_blank(&lines, i));
            }
        }

        debug!(
            "text fallback over {} lines populated {} fields",
            lines.len(),
            fields.populated_count()
        );
        fields
    }

    fn scan_title(&self, line: &str, fields: &mut ProductFields) {
        if let Some(caps) = CAPACITY.captures(line) {
            fields.capacity = Some(format!("{} {}", &caps[1], caps[2].to_uppercase()));

            if let Some(full) = caps.get(0) {
                let prefix = line[..full.start()].trim();
                if !prefix.is_empty() && fields.product_type.is_none() {
                    fields.product_type = Some(prefix.to_string());
                }
            }
        }
    }

    /// Pick batch number, item number, color, and per-layer quantity out
    /// of the value line below a BATCH header.
    fn scan_batch_line(&self, line: &str, fields: &mut ProductFields) {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        if fields.batch_number.is_none() {
            fields.batch_number = tokens
                .iter()
                .find(|t| BATCH_TOKEN.is_match(t))
                .map(|t| t.to_string());
        }
        if fields.item_no.is_none() {
            fields.item_no = tokens
                .iter()
                .find(|t| ITEM_TOKEN.is_match(t) && Some(**t) != fields.batch_number.as_deref())
                .map(|t| t.to_string());
        }
        if fields.color.is_none() {
            fields.color = tokens
                .iter()
                .find(|t| t.len() > 2 && t.chars().all(|c| c.is_ascii_alphabetic()))
                .map(|t| t.to_string());
        }
        if fields.qty_per_layer.is_none() {
            fields.qty_per_layer = tokens
                .iter()
                .rev()
                .find(|t| is_numeric_token(t))
                .and_then(|t| first_number(t));
        }
    }

    /// The line below a DATE header carries the production date and,
    /// on some label variants, the capacity, finish type, and layer
    /// count as well.
    fn scan_date_line(&self, line: &str, fields: &mut ProductFields) {
        if fields.date_of_production.is_none() {
            fields.date_of_production = parse_production_date(line);
        }
        if fields.capacity.is_none() {
            if let Some(caps) = CAPACITY.captures(line) {
                fields.capacity = Some(format!("{} {}", &caps[1], caps[2].to_uppercase()));
            }
        }
        if fields.finish_type.is_none() {
            fields.finish_type = line
                .split_whitespace()
                .find(|t| is_finish_word(t))
                .map(|t| t.to_string());
        }
        if fields.number_of_layers.is_none() {
            fields.number_of_layers = last_number(line);
        }
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Next line after `i` with content, or empty when none remains.
fn next_non_blank<'a>(lines: &[&'a str], i: usize) -> &'a str {
    lines
        .iter()
        .skip(i + 1)
        .find(|l| !l.trim().is_empty())
        .copied()
        .unwrap_or("")
}

/// All-caps alphabetic word of 3+ characters that is not a capacity
/// unit: a plausible finish-type label ("CROWN").
fn is_finish_word(token: &str) -> bool {
    token.len() >= 3
        && token.chars().all(|c| c.is_ascii_uppercase())
        && !CAPACITY_UNITS.contains(&token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const SAMPLE: &str = "\
Jar Cortas 325 ML
BATCH NO ITEM COLOR QTY
320-004 45 FLINT 231
DATE OF PRODUCTION
12/05/2023 CROWN 14
PIECES PER PALLET
3696
NUMBER OF PALLET
670";

    #[test]
    fn test_full_receipt_text() {
        let fields = TextExtractor::new().extract(SAMPLE);

        assert_eq!(fields.product_type.as_deref(), Some("Jar Cortas"));
        assert_eq!(fields.capacity.as_deref(), Some("325 ML"));
        assert_eq!(fields.batch_number.as_deref(), Some("320-004"));
        assert_eq!(fields.item_no.as_deref(), Some("45"));
        assert_eq!(fields.color.as_deref(), Some("FLINT"));
        assert_eq!(fields.qty_per_layer, Some(231));
        assert_eq!(
            fields.date_of_production,
            NaiveDate::from_ymd_opt(2023, 5, 12)
        );
        assert_eq!(fields.finish_type.as_deref(), Some("CROWN"));
        assert_eq!(fields.number_of_layers, Some(14));
        assert_eq!(fields.pieces_per_pallet, Some(3696));
        assert_eq!(fields.number_of_pallet, Some(670));
    }

    #[test]
    fn test_non_latin_lines_discarded() {
        let text = "دفعة الإنتاج\nBATCH\nرقم\n320-004 FLINT";
        let fields = TextExtractor::new().extract(text);

        assert_eq!(fields.batch_number.as_deref(), Some("320-004"));
        assert_eq!(fields.color.as_deref(), Some("FLINT"));
    }

    #[test]
    fn test_keyword_on_last_line_is_silent() {
        let fields = TextExtractor::new().extract("something\nBATCH");
        assert!(fields.batch_number.is_none());
    }

    #[test]
    fn test_item_must_differ_from_batch() {
        // "450" is both a valid batch token and a valid item token; the
        // item pick must skip it and take nothing else here.
        let fields = TextExtractor::new().extract("BATCH\n450 FLINT");

        assert_eq!(fields.batch_number.as_deref(), Some("450"));
        assert!(fields.item_no.is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let text = "BATCH\n320-004\nBATCH\n555-777";
        let fields = TextExtractor::new().extract(text);

        assert_eq!(fields.batch_number.as_deref(), Some("320-004"));
    }

    #[test]
    fn test_pallet_not_taken_from_pieces_line() {
        let text = "PIECES PER PALLET\n3696\nPALLET COUNT\n670";
        let fields = TextExtractor::new().extract(text);

        assert_eq!(fields.pieces_per_pallet, Some(3696));
        assert_eq!(fields.number_of_pallet, Some(670));
    }

    #[test]
    fn test_empty_input() {
        assert!(TextExtractor::new().extract("").is_empty());
    }
}
