//! Product field record extracted from a production receipt.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fields recovered from one receipt parse.
///
/// Every field is independently optional: absence means "not found on
/// this receipt", never zero. The record carries no identity beyond a
/// single parse call; the caller decides how to apply it (typically by
/// merging present fields into an editable product form).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFields {
    /// Product type, e.g. "Jar Cortas" (title text before the capacity).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    /// Capacity, e.g. "325 ML".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<String>,

    /// Item (article) number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_no: Option<String>,

    /// Production batch number, e.g. "320-004".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_number: Option<String>,

    /// Glass color, e.g. "FLINT".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Finish (neck) type, e.g. "TO 63".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_type: Option<String>,

    /// Quantity of pieces per pallet layer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qty_per_layer: Option<u32>,

    /// Number of layers on a pallet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_layers: Option<u32>,

    /// Total pieces per pallet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pieces_per_pallet: Option<u32>,

    /// Number of pallets in the delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_pallet: Option<u32>,

    /// Production date (no time component).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_production: Option<NaiveDate>,

    /// Mean OCR confidence (0-100) of the words the parse consumed.
    /// Attached by the merge policy, never by the extractors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

impl ProductFields {
    /// Count how many receipt fields are populated.
    ///
    /// `confidence` is metadata about the parse, not a receipt field,
    /// and is excluded.
    pub fn populated_count(&self) -> usize {
        let mut count = 0;
        count += self.product_type.is_some() as usize;
        count += self.capacity.is_some() as usize;
        count += self.item_no.is_some() as usize;
        count += self.batch_number.is_some() as usize;
        count += self.color.is_some() as usize;
        count += self.finish_type.is_some() as usize;
        count += self.qty_per_layer.is_some() as usize;
        count += self.number_of_layers.is_some() as usize;
        count += self.pieces_per_pallet.is_some() as usize;
        count += self.number_of_pallet.is_some() as usize;
        count += self.date_of_production.is_some() as usize;
        count
    }

    /// Check whether no receipt field was recovered.
    pub fn is_empty(&self) -> bool {
        self.populated_count() == 0
    }

    /// Merge this record over a fallback record.
    ///
    /// Field-wise precedence: a value present in `self` wins, a field
    /// absent in `self` is taken from `fallback`. Merging a record over
    /// itself is a no-op.
    pub fn merged_over(self, fallback: ProductFields) -> ProductFields {
        ProductFields {
            product_type: self.product_type.or(fallback.product_type),
            capacity: self.capacity.or(fallback.capacity),
            item_no: self.item_no.or(fallback.item_no),
            batch_number: self.batch_number.or(fallback.batch_number),
            color: self.color.or(fallback.color),
            finish_type: self.finish_type.or(fallback.finish_type),
            qty_per_layer: self.qty_per_layer.or(fallback.qty_per_layer),
            number_of_layers: self.number_of_layers.or(fallback.number_of_layers),
            pieces_per_pallet: self.pieces_per_pallet.or(fallback.pieces_per_pallet),
            number_of_pallet: self.number_of_pallet.or(fallback.number_of_pallet),
            date_of_production: self.date_of_production.or(fallback.date_of_production),
            confidence: self.confidence.or(fallback.confidence),
        }
    }
}
