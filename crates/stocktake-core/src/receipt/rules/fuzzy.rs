//! Fuzzy keyword matching tolerant of single-character OCR misreads.

/// Minimum window length for the sliding-window comparison.
pub const DEFAULT_MIN_MATCH: usize = 4;

/// Check whether `haystack` contains `needle`, allowing OCR noise.
///
/// Exact (uppercased) containment always matches. For needles of at
/// least `min_match` characters, any `min_match`-length contiguous
/// window of the needle found anywhere in the haystack also matches, so
/// a single misread inside a long keyword ("BATCK" for "BATCH") still
/// hits. Needles shorter than `min_match` require the exact substring,
/// which keeps short keywords from false-matching everywhere.
pub fn fuzzy_includes(haystack: &str, needle: &str, min_match: usize) -> bool {
    let haystack = haystack.to_uppercase();
    let needle = needle.to_uppercase();

    if haystack.contains(&needle) {
        return true;
    }
    if needle.len() < min_match || min_match == 0 {
        return false;
    }

    // Keywords are ASCII; byte windows line up with characters.
    let haystack = haystack.as_bytes();
    needle
        .as_bytes()
        .windows(min_match)
        .any(|window| haystack.windows(min_match).any(|candidate| candidate == window))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_containment() {
        assert!(fuzzy_includes("BATCH NUMBER", "BATCH", DEFAULT_MIN_MATCH));
        assert!(fuzzy_includes("batch number", "BATCH", DEFAULT_MIN_MATCH));
    }

    #[test]
    fn test_single_misread_tolerated() {
        // "BATCK" still contains the window "BATC" of "BATCH".
        assert!(fuzzy_includes("BATCK NUMBER", "BATCH", DEFAULT_MIN_MATCH));
        assert!(fuzzy_includes("QUANTITV PER LAYER", "QUANTITY", DEFAULT_MIN_MATCH));
    }

    #[test]
    fn test_short_needle_requires_exact() {
        assert!(!fuzzy_includes("BA", "BATCH", DEFAULT_MIN_MATCH));
        assert!(fuzzy_includes("PCS / PALLET", "PCS", DEFAULT_MIN_MATCH));
        assert!(!fuzzy_includes("PC / PALLET", "PCS", DEFAULT_MIN_MATCH));
    }

    #[test]
    fn test_no_match() {
        assert!(!fuzzy_includes("COLOR", "BATCH", DEFAULT_MIN_MATCH));
        assert!(!fuzzy_includes("", "BATCH", DEFAULT_MIN_MATCH));
    }
}
