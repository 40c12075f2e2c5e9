//! Error types shared by the classifier, feature pipeline and JS bridge
//!
//! "No gesture" is never an error: it is `GestureLabel::Unknown` with
//! confidence 0.0. Only malformed input and bad configuration end up here.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Why a landmark payload was rejected before any geometry ran
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputKind {
    #[error("expected {expected} landmarks, got {actual}")]
    LandmarkCount { expected: usize, actual: usize },

    #[error("flat landmark buffer must hold {expected} floats (21 x 3), got {actual}")]
    FlatLength { expected: usize, actual: usize },

    #[error("landmark {index} has non-finite {axis} coordinate ({value})")]
    NonFinite {
        index: usize,
        axis: char,
        value: f32,
    },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GestureError {
    /// Wrong landmark count or non-finite coordinates
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputKind),

    #[error("invalid config field '{field}': {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// Feature vector handed to the scaler has the wrong width
    #[error("feature width mismatch: expected {expected}, got {actual}")]
    FeatureWidth { expected: usize, actual: usize },

    #[error("feature scaler has not been fitted")]
    ScalerNotFitted,

    #[error("cannot fit a feature scaler on an empty corpus")]
    EmptyCorpus,

    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl GestureError {
    /// True for errors caused by the landmark payload itself
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, GestureError::InvalidInput(_))
    }
}

impl From<serde_json::Error> for GestureError {
    fn from(err: serde_json::Error) -> Self {
        GestureError::Serialization(err.to_string())
    }
}

impl From<GestureError> for JsValue {
    fn from(err: GestureError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GestureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = GestureError::from(InvalidInputKind::LandmarkCount {
            expected: 21,
            actual: 20,
        });
        assert!(err.is_invalid_input());
        assert_eq!(err.to_string(), "invalid input: expected 21 landmarks, got 20");
    }

    #[test]
    fn test_non_finite_message_names_axis() {
        let err = GestureError::from(InvalidInputKind::NonFinite {
            index: 8,
            axis: 'y',
            value: f32::NAN,
        });
        assert!(err.to_string().contains("landmark 8"));
        assert!(err.to_string().contains("y coordinate"));
    }

    #[test]
    fn test_config_error_is_not_input_error() {
        let err = GestureError::InvalidConfig {
            field: "finger_extension_deg",
            reason: "must be in (0, 180]".to_string(),
        };
        assert!(!err.is_invalid_input());
    }
}
