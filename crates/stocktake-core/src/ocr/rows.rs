//! Row grouping: clustering recognized words into horizontal text lines.

use super::Word;

/// A horizontal cluster of words assumed to share one visual text line.
///
/// Rows are a derived, per-parse grouping and are never persisted.
#[derive(Debug, Clone)]
pub struct Row {
    /// Words in the row, sorted left-to-right by `x0`.
    pub words: Vec<Word>,
}

impl Row {
    /// Concatenated row text, words joined with single spaces.
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Uppercased row text, for keyword scans.
    pub fn upper_text(&self) -> String {
        self.text().to_uppercase()
    }

    /// Rightmost word in the row, if any.
    pub fn rightmost(&self) -> Option<&Word> {
        self.words.last()
    }
}

/// Group words into text rows by vertical-center proximity.
///
/// Single-pass greedy clustering: each word joins the first existing row
/// whose anchor (first-assigned word) vertical midpoint is within
/// `vertical_threshold` pixels, otherwise it starts a new row. The
/// anchor fixes a row's Y for all later comparisons, so membership is
/// sensitive to input order; the OCR engine emits words roughly in
/// reading order and the rest of the pipeline relies on this behavior
/// staying as-is.
///
/// Rows are returned sorted top-to-bottom by anchor midpoint, words
/// within each row left-to-right by `x0`. Every input word lands in
/// exactly one row.
pub fn group_rows(words: &[Word], vertical_threshold: f32) -> Vec<Row> {
    let mut clusters: Vec<(f32, Vec<Word>)> = Vec::new();

    for word in words {
        let mid_y = word.center_y();

        let existing = clusters
            .iter()
            .position(|(anchor_y, _)| (mid_y - anchor_y).abs() <= vertical_threshold);

        match existing {
            Some(i) => clusters[i].1.push(word.clone()),
            None => clusters.push((mid_y, vec![word.clone()])),
        }
    }

    clusters.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    clusters
        .into_iter()
        .map(|(_, mut members)| {
            members.sort_by(|a, b| {
                a.bbox
                    .x0
                    .partial_cmp(&b.bbox.x0)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            Row { words: members }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, x0: f32, y0: f32, x1: f32, y1: f32) -> Word {
        Word::new(text, x0, y0, x1, y1, 90.0)
    }

    #[test]
    fn test_empty_input() {
        assert!(group_rows(&[], 20.0).is_empty());
    }

    #[test]
    fn test_singleton_row() {
        let rows = group_rows(&[word("stray", 10.0, 10.0, 50.0, 30.0)], 20.0);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].text(), "stray");
    }

    #[test]
    fn test_no_word_lost_or_duplicated() {
        let words = vec![
            word("a", 0.0, 0.0, 10.0, 20.0),
            word("b", 20.0, 2.0, 30.0, 22.0),
            word("c", 0.0, 100.0, 10.0, 120.0),
            word("d", 20.0, 104.0, 30.0, 124.0),
            word("e", 0.0, 200.0, 10.0, 220.0),
        ];

        let rows = group_rows(&words, 20.0);
        let total: usize = rows.iter().map(|r| r.words.len()).sum();

        assert_eq!(total, words.len());
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_rows_sorted_top_to_bottom() {
        let words = vec![
            word("bottom", 0.0, 200.0, 50.0, 220.0),
            word("top", 0.0, 10.0, 50.0, 30.0),
            word("middle", 0.0, 100.0, 50.0, 120.0),
        ];

        let rows = group_rows(&words, 20.0);

        assert_eq!(rows[0].text(), "top");
        assert_eq!(rows[1].text(), "middle");
        assert_eq!(rows[2].text(), "bottom");
    }

    #[test]
    fn test_words_sorted_left_to_right() {
        let words = vec![
            word("ML", 220.0, 10.0, 260.0, 30.0),
            word("Jar", 10.0, 12.0, 60.0, 32.0),
            word("325", 160.0, 11.0, 210.0, 31.0),
            word("Cortas", 70.0, 10.0, 150.0, 30.0),
        ];

        let rows = group_rows(&words, 20.0);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].text(), "Jar Cortas 325 ML");
    }

    #[test]
    fn test_anchor_is_first_seen_word() {
        // The second word is within the threshold of the first (anchor),
        // the third is within the threshold of the second but not the
        // anchor, so it starts a new row. Greedy, by design.
        let words = vec![
            word("a", 0.0, 0.0, 10.0, 20.0),   // mid 10
            word("b", 20.0, 18.0, 30.0, 38.0), // mid 28, joins anchor 10
            word("c", 40.0, 36.0, 50.0, 56.0), // mid 46, too far from 10
        ];

        let rows = group_rows(&words, 20.0);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].text(), "a b");
        assert_eq!(rows[1].text(), "c");
    }
}
