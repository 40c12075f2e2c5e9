//! Rule-based classifier - finger states + orientation → scored gesture

use serde::Serialize;

use super::finger_state::{extract_finger_states, FingerStates};
use super::model::GestureResult;
use super::orientation::{estimate_orientation, HandOrientation};
use super::scorer::{evaluate_rules, score_gesture, RuleOutcome, ScoringInput};
use super::strategy::Classifier;
use crate::config::ClassifierConfig;
use crate::error::Result;
use crate::hand::HandLandmarkSet;

/// Canonical geometric classifier
#[derive(Clone, Debug, Default)]
pub struct RuleBasedClassifier {
    config: ClassifierConfig,
}

/// Intermediate values of one classification, for debugging overlays
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Analysis {
    pub result: GestureResult,
    pub finger_states: FingerStates,
    pub orientation: HandOrientation,
    pub rules: [RuleOutcome; 3],
}

impl RuleBasedClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ClassifierConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn finger_states(&self, hand: &HandLandmarkSet) -> FingerStates {
        extract_finger_states(hand, &self.config)
    }

    pub fn orientation(&self, hand: &HandLandmarkSet) -> HandOrientation {
        estimate_orientation(hand)
    }

    fn scoring_input<'a>(&self, hand: &'a HandLandmarkSet) -> ScoringInput<'a> {
        ScoringInput {
            hand,
            states: self.finger_states(hand),
            orientation: self.orientation(hand),
        }
    }

    /// Classify and keep every intermediate value
    pub fn analyze(&self, hand: &HandLandmarkSet) -> Analysis {
        let input = self.scoring_input(hand);
        Analysis {
            result: score_gesture(&input, &self.config),
            finger_states: input.states,
            orientation: input.orientation,
            rules: evaluate_rules(&input, &self.config),
        }
    }
}

impl Classifier for RuleBasedClassifier {
    fn name(&self) -> &'static str {
        "rule-based"
    }

    fn classify(&self, hand: &HandLandmarkSet) -> GestureResult {
        score_gesture(&self.scoring_input(hand), &self.config)
    }
}
