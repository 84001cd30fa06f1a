//! WASM bindings for warehouse receipt OCR field extraction.
//!
//! This crate provides WebAssembly bindings for the mobile/web client:
//! the browser-side OCR layer feeds recognized words (with bounding
//! boxes) or a flat text blob into a [`ReceiptScanner`], which returns
//! the extracted product fields as a plain JS object.

use wasm_bindgen::prelude::*;

use stocktake_core::{ProductFields, ReceiptParser, TextExtractor, Word};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Extract product fields from recognized text alone.
///
/// Uses only the text fallback path; when word boxes are available,
/// prefer [`ReceiptScanner`] for the column-aligned extraction.
#[wasm_bindgen]
pub fn extract_fields_from_text(text: &str) -> Result<JsValue, JsValue> {
    let fields = TextExtractor::new().extract(text);
    serde_wasm_bindgen::to_value(&fields).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Receipt scanner class for browser use.
///
/// Accumulates the OCR layer's word boxes and raw text, then runs the
/// full positional-with-fallback merge policy.
#[wasm_bindgen]
pub struct ReceiptScanner {
    parser: ReceiptParser,
    words: Vec<Word>,
    text: String,
}

#[wasm_bindgen]
impl ReceiptScanner {
    /// Create a new scanner with the default parser configuration.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            parser: ReceiptParser::new(),
            words: Vec::new(),
            text: String::new(),
        }
    }

    /// Add a recognized word with its bounding box and confidence.
    #[wasm_bindgen]
    pub fn add_word(&mut self, text: &str, x0: f32, y0: f32, x1: f32, y1: f32, confidence: f32) {
        self.words.push(Word::new(text, x0, y0, x1, y1, confidence));
    }

    /// Set the flattened recognized text used by the fallback path.
    #[wasm_bindgen]
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    /// Number of words accumulated so far.
    #[wasm_bindgen]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Clear accumulated words and text for the next capture.
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.words.clear();
        self.text.clear();
    }

    /// Extract product fields from the accumulated OCR data.
    #[wasm_bindgen]
    pub fn extract(&self) -> Result<JsValue, JsValue> {
        let result = self.parser.parse(&self.words, &self.text);
        serde_wasm_bindgen::to_value(&result.fields)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Extract with scan metadata alongside the fields.
    #[wasm_bindgen]
    pub fn extract_with_metadata(&self) -> Result<JsValue, JsValue> {
        let result = self.parser.parse(&self.words, &self.text);

        #[derive(serde::Serialize)]
        struct ScanOutput {
            fields: ProductFields,
            used_fallback: bool,
            processing_time_ms: u64,
        }

        let output = ScanOutput {
            fields: result.fields,
            used_fallback: result.used_fallback,
            processing_time_ms: result.processing_time_ms,
        };

        serde_wasm_bindgen::to_value(&output).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for ReceiptScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[wasm_bindgen_test]
    fn test_extract_from_text() {
        let value = extract_fields_from_text("BATCH\n320-004 FLINT").unwrap();
        assert!(value.is_object());
    }

    #[wasm_bindgen_test]
    fn test_scanner_accumulates_and_extracts() {
        let mut scanner = ReceiptScanner::new();
        scanner.add_word("COLOR", 500.0, 10.0, 600.0, 30.0, 95.0);
        scanner.add_word("FLINT", 520.0, 60.0, 580.0, 80.0, 95.0);
        scanner.set_text("COLOR\nFLINT");

        assert_eq!(scanner.word_count(), 2);
        assert!(scanner.extract().is_ok());

        scanner.reset();
        assert_eq!(scanner.word_count(), 0);
    }
}
