//! Gesture labels and the classification result handed back to JS

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::error::Result;

/// A non-Unknown label is only reported when its confidence exceeds this
pub const ACCEPTANCE_THRESHOLD: f32 = 0.7;

/// Gesture labels (order matches the learned-model class indices)
pub const GESTURE_LABELS: [&str; 3] = ["rock", "paper", "scissors"];

/// Gesture label enum for type-safe handling
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureLabel {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
    Unknown = 3,
}

impl GestureLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            GestureLabel::Rock => "rock",
            GestureLabel::Paper => "paper",
            GestureLabel::Scissors => "scissors",
            GestureLabel::Unknown => "unknown",
        }
    }

    /// Prompt shown to the player for this gesture
    pub fn hint(&self) -> &'static str {
        match self {
            GestureLabel::Rock => "Make a fist",
            GestureLabel::Paper => "Show open palm",
            GestureLabel::Scissors => "Show peace sign",
            GestureLabel::Unknown => "Show rock, paper or scissors",
        }
    }

    /// Game rule: rock > scissors > paper > rock. Unknown beats nothing.
    pub fn beats(&self, other: GestureLabel) -> bool {
        matches!(
            (self, other),
            (GestureLabel::Rock, GestureLabel::Scissors)
                | (GestureLabel::Scissors, GestureLabel::Paper)
                | (GestureLabel::Paper, GestureLabel::Rock)
        )
    }

    pub fn is_known(&self) -> bool {
        *self != GestureLabel::Unknown
    }
}

/// Label plus confidence for one classified hand
///
/// Fields are private so the acceptance invariant holds for every value:
/// Unknown carries 0.0, anything else carries more than 0.7.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GestureResult {
    label: GestureLabel,
    confidence: f32,
}

impl GestureResult {
    pub fn unknown() -> Self {
        Self {
            label: GestureLabel::Unknown,
            confidence: 0.0,
        }
    }

    /// Accept `label` if `confidence` clears the bar, otherwise Unknown/0.0
    pub fn from_score(label: GestureLabel, confidence: f32) -> Self {
        if label.is_known() && confidence.is_finite() && confidence > ACCEPTANCE_THRESHOLD {
            Self {
                label,
                confidence: confidence.min(1.0),
            }
        } else {
            Self::unknown()
        }
    }

    pub fn json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[wasm_bindgen]
impl GestureResult {
    #[wasm_bindgen(getter)]
    pub fn label(&self) -> GestureLabel {
        self.label
    }

    #[wasm_bindgen(getter)]
    pub fn confidence(&self) -> f32 {
        self.confidence
    }

    #[wasm_bindgen(getter, js_name = labelName)]
    pub fn label_name(&self) -> String {
        self.label.as_str().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn hint(&self) -> String {
        self.label.hint().to_string()
    }

    /// True if this hand wins a round against `other`
    pub fn beats(&self, other: &GestureResult) -> bool {
        self.label.beats(other.label)
    }

    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> std::result::Result<String, JsValue> {
        Ok(self.json()?)
    }
}

impl Default for GestureResult {
    fn default() -> Self {
        Self::unknown()
    }
}
