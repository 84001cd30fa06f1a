//! OCR data contracts consumed by the extraction pipeline.
//!
//! The recognition engine itself lives outside this crate; it hands us
//! words with axis-aligned boxes in the preprocessed image's coordinate
//! space, plus a flattened text blob for the fallback path.

pub mod rows;

pub use rows::{group_rows, Row};

use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl BoundingBox {
    /// Create a box from its corner coordinates.
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Horizontal midpoint.
    pub fn center_x(&self) -> f32 {
        (self.x0 + self.x1) / 2.0
    }

    /// Vertical midpoint.
    pub fn center_y(&self) -> f32 {
        (self.y0 + self.y1) / 2.0
    }

    /// Box width.
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    /// Box height.
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }
}

/// A single recognized word with its position and confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// Recognized text content.
    pub text: String,

    /// Bounding box of the word.
    pub bbox: BoundingBox,

    /// Recognition confidence score (0-100).
    pub confidence: f32,
}

impl Word {
    /// Create a word from text, corner coordinates, and confidence.
    pub fn new(text: impl Into<String>, x0: f32, y0: f32, x1: f32, y1: f32, confidence: f32) -> Self {
        Self {
            text: text.into(),
            bbox: BoundingBox::new(x0, y0, x1, y1),
            confidence,
        }
    }

    /// Horizontal midpoint of the word box.
    pub fn center_x(&self) -> f32 {
        self.bbox.center_x()
    }

    /// Vertical midpoint of the word box.
    pub fn center_y(&self) -> f32 {
        self.bbox.center_y()
    }
}

/// Arithmetic mean of word confidences, or 0 for an empty list.
pub fn mean_confidence(words: &[Word]) -> f32 {
    if words.is_empty() {
        return 0.0;
    }
    words.iter().map(|w| w.confidence).sum::<f32>() / words.len() as f32
}
