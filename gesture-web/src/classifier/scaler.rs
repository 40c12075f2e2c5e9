//! Feature standardization with persisted parameters
//!
//! Mean and scale are fit once over a training corpus and stored as JSON next
//! to the model. Inference only applies them; it never refits.

use serde::{Deserialize, Serialize};

use super::features::FEATURE_COUNT;
use crate::error::{GestureError, Result};

/// Per-feature zero-mean / unit-variance transform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureScaler {
    mean: Vec<f32>,
    scale: Vec<f32>,
    /// Samples the parameters were fit on
    samples: usize,
}

impl FeatureScaler {
    /// Fit mean and population standard deviation over `corpus`
    ///
    /// Features with zero variance get a scale of 1.0 so they map to 0.0
    /// instead of dividing by zero.
    pub fn fit(corpus: &[[f32; FEATURE_COUNT]]) -> Result<Self> {
        if corpus.is_empty() {
            return Err(GestureError::EmptyCorpus);
        }

        let n = corpus.len() as f64;
        let mut mean = vec![0.0f64; FEATURE_COUNT];
        for sample in corpus {
            for (m, v) in mean.iter_mut().zip(sample.iter()) {
                *m += *v as f64;
            }
        }
        mean.iter_mut().for_each(|m| *m /= n);

        let mut variance = vec![0.0f64; FEATURE_COUNT];
        for sample in corpus {
            for ((var, m), v) in variance.iter_mut().zip(&mean).zip(sample.iter()) {
                let d = *v as f64 - m;
                *var += d * d;
            }
        }

        let scale = variance
            .iter()
            .map(|var| {
                let std = (var / n).sqrt();
                if std > f64::EPSILON {
                    std as f32
                } else {
                    1.0
                }
            })
            .collect();

        let scaler = Self {
            mean: mean.into_iter().map(|m| m as f32).collect(),
            scale,
            samples: corpus.len(),
        };
        scaler.validate()?;
        Ok(scaler)
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Standardize one feature vector
    pub fn transform(&self, features: &[f32]) -> Result<[f32; FEATURE_COUNT]> {
        if features.len() != FEATURE_COUNT {
            return Err(GestureError::FeatureWidth {
                expected: FEATURE_COUNT,
                actual: features.len(),
            });
        }

        let mut scaled = [0.0; FEATURE_COUNT];
        for (i, out) in scaled.iter_mut().enumerate() {
            *out = (features[i] - self.mean[i]) / self.scale[i];
        }
        Ok(scaled)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let scaler: FeatureScaler = serde_json::from_str(json)?;
        scaler.validate()?;
        Ok(scaler)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn validate(&self) -> Result<()> {
        for len in [self.mean.len(), self.scale.len()] {
            if len != FEATURE_COUNT {
                return Err(GestureError::FeatureWidth {
                    expected: FEATURE_COUNT,
                    actual: len,
                });
            }
        }
        if self.mean.iter().any(|m| !m.is_finite()) {
            return Err(GestureError::InvalidConfig {
                field: "mean",
                reason: "contains a non-finite value".to_string(),
            });
        }
        if self.scale.iter().any(|s| !s.is_finite() || *s <= 0.0) {
            return Err(GestureError::InvalidConfig {
                field: "scale",
                reason: "every scale must be positive and finite".to_string(),
            });
        }
        Ok(())
    }
}
