//! Recognizer configuration.
//!
//! All fields have defaults, so a host can deserialize a partial document
//! (`{"threshold": 0.8}`) from whatever serde format it already uses.

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, NumericError};
use crate::recognize::defaults;
use crate::types::Confidence;

/// What happens to the raw ink when the user rejects a proposed shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectPolicy {
    /// Keep the stroke as freehand ink
    #[default]
    RecommitInk,
    /// Drop the stroke entirely
    Discard,
}

/// Whether finished strokes go through the recognizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InkMode {
    #[default]
    Freehand,
    ShapeRecognition,
}

/// Tunables for [`Recognizer`](crate::Recognizer) and [`Session`](crate::Session)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognizerConfig {
    /// A candidate must score strictly above this
    pub threshold: f64,
    /// Strokes with fewer samples are never recognized
    pub min_points: usize,
    /// Strokes whose box is at most this in both dimensions are taps
    pub min_box_size: f64,
    pub reject_policy: RejectPolicy,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        RecognizerConfig {
            threshold: defaults::THRESHOLD,
            min_points: defaults::MIN_POINTS,
            min_box_size: defaults::MIN_BOX_SIZE,
            reject_policy: RejectPolicy::default(),
        }
    }
}

impl RecognizerConfig {
    /// Default config with a different threshold
    pub fn with_threshold(threshold: f64) -> Self {
        RecognizerConfig { threshold, ..Self::default() }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        Confidence::try_new(self.threshold).map_err(ConfigError::Threshold)?;
        if self.min_points < 3 {
            return Err(ConfigError::MinPoints { value: self.min_points });
        }
        if self.min_box_size.is_nan() {
            return Err(ConfigError::MinBoxSize(NumericError::NaN));
        }
        if self.min_box_size.is_infinite() {
            return Err(ConfigError::MinBoxSize(NumericError::Infinite));
        }
        if self.min_box_size < 0.0 {
            return Err(ConfigError::MinBoxSize(NumericError::OutOfRange {
                value: self.min_box_size,
                min: 0.0,
                max: f64::INFINITY,
            }));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = RecognizerConfig::default();
        assert_eq!(config.threshold, 0.75);
        assert_eq!(config.min_points, 10);
        assert_eq!(config.min_box_size, 10.0);
        assert_eq!(config.reject_policy, RejectPolicy::RecommitInk);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_bad_values() {
        let bad_threshold = RecognizerConfig::with_threshold(1.5);
        assert!(matches!(bad_threshold.validate(), Err(ConfigError::Threshold(_))));

        let few_points = RecognizerConfig { min_points: 2, ..Default::default() };
        assert_eq!(few_points.validate(), Err(ConfigError::MinPoints { value: 2 }));

        let negative_box = RecognizerConfig { min_box_size: -1.0, ..Default::default() };
        assert!(matches!(negative_box.validate(), Err(ConfigError::MinBoxSize(_))));

        let nan_box = RecognizerConfig { min_box_size: f64::NAN, ..Default::default() };
        assert_eq!(nan_box.validate(), Err(ConfigError::MinBoxSize(NumericError::NaN)));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: RecognizerConfig =
            serde_json::from_str(r#"{"threshold": 0.8, "reject_policy": "discard"}"#).unwrap();
        assert_eq!(config.threshold, 0.8);
        assert_eq!(config.min_points, 10);
        assert_eq!(config.reject_policy, RejectPolicy::Discard);
    }
}
