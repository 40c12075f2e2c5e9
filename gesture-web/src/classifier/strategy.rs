//! Classifier capability shared by the rule-based scorer and the fallback

use super::model::GestureResult;
use crate::error::Result;
use crate::hand::HandLandmarkSet;

/// Maps one validated hand skeleton to a gesture
///
/// Implementations are stateless between calls, so one instance can be
/// shared across threads without locking.
pub trait Classifier: Send + Sync {
    /// Short identifier for logs and diagnostics
    fn name(&self) -> &'static str;

    /// Total over validated input: never fails, returns Unknown/0.0 when unsure
    fn classify(&self, hand: &HandLandmarkSet) -> GestureResult;

    /// Validate a flat 63-float buffer, then classify it
    fn classify_flat(&self, flat_data: &[f32]) -> Result<GestureResult> {
        let hand = HandLandmarkSet::from_flat(flat_data)?;
        Ok(self.classify(&hand))
    }
}
