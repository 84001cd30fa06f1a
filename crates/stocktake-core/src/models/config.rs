//! Configuration for the receipt parsing pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StocktakeError};

/// Tunable parameters for row grouping, column alignment, and the
/// positional/fallback merge policy.
///
/// The pixel thresholds are tuned to the preprocessing scale the app's
/// capture step produces (images upscaled to at least 1200px width). If
/// preprocessing changes, they must be re-derived empirically.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Maximum vertical-midpoint distance (px) for a word to join an
    /// existing row.
    pub vertical_threshold: f32,

    /// Maximum horizontal-midpoint distance (px) between a header word
    /// and its value in the row below.
    pub max_x_dist: f32,

    /// Minimum number of recognized words required to attempt the
    /// positional extractor at all.
    pub min_words_for_positional: usize,

    /// If the positional extractor populates fewer fields than this,
    /// the text fallback runs and its results fill the gaps.
    pub min_fields_before_fallback: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            vertical_threshold: 20.0,
            max_x_dist: 300.0,
            min_words_for_positional: 6,
            min_fields_before_fallback: 4,
        }
    }
}

impl ParserConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check the parameters for internally consistent values.
    pub fn validate(&self) -> Result<()> {
        if self.vertical_threshold <= 0.0 {
            return Err(StocktakeError::Config(format!(
                "vertical_threshold must be positive, got {}",
                self.vertical_threshold
            )));
        }
        if self.max_x_dist <= 0.0 {
            return Err(StocktakeError::Config(format!(
                "max_x_dist must be positive, got {}",
                self.max_x_dist
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ParserConfig::default();

        assert_eq!(config.vertical_threshold, 20.0);
        assert_eq!(config.max_x_dist, 300.0);
        assert_eq!(config.min_words_for_positional, 6);
        assert_eq!(config.min_fields_before_fallback, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ParserConfig = serde_json::from_str(r#"{"max_x_dist": 150.0}"#).unwrap();

        assert_eq!(config.max_x_dist, 150.0);
        assert_eq!(config.vertical_threshold, 20.0);
    }

    #[test]
    fn test_validate_rejects_non_positive_thresholds() {
        let config = ParserConfig {
            vertical_threshold: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ParserConfig {
            max_x_dist: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
