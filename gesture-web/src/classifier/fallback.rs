//! Tip-height fallback - degenerate three-point comparison
//!
//! Compares only the image-plane heights of the thumb, index and middle
//! fingertips (y grows downwards). It ignores finger curl and palm facing,
//! so it is much weaker than `RuleBasedClassifier`; it exists for hosts that
//! only receive a partial or very noisy skeleton.

use super::model::{GestureLabel, GestureResult};
use super::strategy::Classifier;
use crate::hand::{HandLandmarkSet, INDEX_TIP, MIDDLE_TIP, THUMB_TIP};

/// Fixed confidence reported for any tip-height match
pub const FALLBACK_CONFIDENCE: f32 = 0.9;

#[derive(Clone, Copy, Debug, Default)]
pub struct TipHeightClassifier;

impl TipHeightClassifier {
    pub fn new() -> Self {
        Self
    }

    fn label_for(hand: &HandLandmarkSet) -> GestureLabel {
        let thumb_y = hand.landmarks()[THUMB_TIP].y;
        let index_y = hand.landmarks()[INDEX_TIP].y;
        let middle_y = hand.landmarks()[MIDDLE_TIP].y;

        let thumb_above = thumb_y < middle_y;
        let index_above = index_y < middle_y;
        let index_below = index_y > middle_y;
        let thumb_below = thumb_y > middle_y;

        if thumb_above && index_below {
            GestureLabel::Rock
        } else if thumb_below && index_above {
            GestureLabel::Paper
        } else if thumb_above && index_above {
            GestureLabel::Scissors
        } else {
            GestureLabel::Unknown
        }
    }
}

impl Classifier for TipHeightClassifier {
    fn name(&self) -> &'static str {
        "tip-height"
    }

    fn classify(&self, hand: &HandLandmarkSet) -> GestureResult {
        GestureResult::from_score(Self::label_for(hand), FALLBACK_CONFIDENCE)
    }
}
