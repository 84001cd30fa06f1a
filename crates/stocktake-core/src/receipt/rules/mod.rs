//! Shared rule helpers for receipt field extraction.

pub mod dates;
pub mod fuzzy;
pub mod numbers;
pub mod patterns;

pub use dates::parse_production_date;
pub use fuzzy::{fuzzy_includes, DEFAULT_MIN_MATCH};
pub use numbers::{first_number, is_numeric_token, last_number};
pub use patterns::*;
