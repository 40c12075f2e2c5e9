//! Classifier thresholds
//!
//! Defaults reproduce the reference rule set. JS may override any subset by
//! passing a JSON object; missing keys keep their default.

use serde::{Deserialize, Serialize};

use crate::error::{GestureError, Result};

/// Geometric thresholds used by the rule-based classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Thumb counts as extended above this MCP angle (degrees)
    pub thumb_extension_deg: f32,
    /// Other fingers count as extended above this PIP angle (degrees)
    pub finger_extension_deg: f32,
    /// |orientation component| above which the palm is considered facing an axis
    pub orientation_threshold: f32,
    /// Exclusive lower bound of the index/middle V angle for scissors (degrees)
    pub scissors_min_angle_deg: f32,
    /// Exclusive upper bound of the index/middle V angle for scissors (degrees)
    pub scissors_max_angle_deg: f32,
    /// Index/middle tip distance multiplier, capped at 1.0
    pub scissors_separation_gain: f32,
    /// Mean adjacent tip distance multiplier, capped at 1.0
    pub paper_separation_gain: f32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            thumb_extension_deg: 150.0,
            finger_extension_deg: 160.0,
            orientation_threshold: 0.7,
            scissors_min_angle_deg: 10.0,
            scissors_max_angle_deg: 40.0,
            scissors_separation_gain: 5.0,
            paper_separation_gain: 8.0,
        }
    }
}

impl ClassifierConfig {
    /// Parse and validate a JSON override document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ClassifierConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        check_angle("thumb_extension_deg", self.thumb_extension_deg)?;
        check_angle("finger_extension_deg", self.finger_extension_deg)?;
        check_angle("scissors_min_angle_deg", self.scissors_min_angle_deg)?;
        check_angle("scissors_max_angle_deg", self.scissors_max_angle_deg)?;

        if self.scissors_min_angle_deg >= self.scissors_max_angle_deg {
            return Err(GestureError::InvalidConfig {
                field: "scissors_max_angle_deg",
                reason: format!(
                    "window ({}, {}) is empty",
                    self.scissors_min_angle_deg, self.scissors_max_angle_deg
                ),
            });
        }

        check_positive("orientation_threshold", self.orientation_threshold)?;
        check_positive("scissors_separation_gain", self.scissors_separation_gain)?;
        check_positive("paper_separation_gain", self.paper_separation_gain)?;
        Ok(())
    }
}

fn check_angle(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 && value <= 180.0 {
        Ok(())
    } else {
        Err(GestureError::InvalidConfig {
            field,
            reason: format!("{} is not an angle in (0, 180]", value),
        })
    }
}

fn check_positive(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GestureError::InvalidConfig {
            field,
            reason: format!("{} must be a positive finite number", value),
        })
    }
}
