//! Common regex patterns for receipt field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Capacity: "325 ML", "32.5 CL", "1 L". Also matches with the unit
    // glued to the number, which happens when OCR merges the two words.
    pub static ref CAPACITY: Regex = Regex::new(
        r"(?i)\b(\d+(?:\.\d+)?)\s*(ML|CC|CL|L)\b"
    ).unwrap();

    // Production date: day-first, "12/05/2023", "12.05.23", "12-05-2023".
    pub static ref DATE_DMY: Regex = Regex::new(
        r"\b(\d{1,2})[./\-](\d{1,2})[./\-](\d{2,4})\b"
    ).unwrap();

    // Batch number token: "320-004" or a bare run of 3+ digits.
    pub static ref BATCH_TOKEN: Regex = Regex::new(
        r"^(?:\d+-\d+|\d{3,})$"
    ).unwrap();

    // Item number token: standalone 2-4 digit code.
    pub static ref ITEM_TOKEN: Regex = Regex::new(
        r"^\d{2,4}$"
    ).unwrap();
}

/// Capacity unit labels, used to keep units out of finish-type guesses.
pub const CAPACITY_UNITS: [&str; 4] = ["ML", "CC", "CL", "L"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_pattern() {
        let caps = CAPACITY.captures("Jar Cortas 325 ML").unwrap();
        assert_eq!(&caps[1], "325");
        assert_eq!(&caps[2], "ML");

        assert!(CAPACITY.is_match("32.5 cl"));
        assert!(CAPACITY.is_match("750ML"));
        assert!(!CAPACITY.is_match("FLINT"));
        assert!(!CAPACITY.is_match("325"));
    }

    #[test]
    fn test_batch_token() {
        assert!(BATCH_TOKEN.is_match("320-004"));
        assert!(BATCH_TOKEN.is_match("12345"));
        assert!(!BATCH_TOKEN.is_match("32"));
        assert!(!BATCH_TOKEN.is_match("FLINT"));
        assert!(!BATCH_TOKEN.is_match("320-004X"));
    }

    #[test]
    fn test_item_token() {
        assert!(ITEM_TOKEN.is_match("45"));
        assert!(ITEM_TOKEN.is_match("4521"));
        assert!(!ITEM_TOKEN.is_match("45217"));
        assert!(!ITEM_TOKEN.is_match("4"));
    }
}
