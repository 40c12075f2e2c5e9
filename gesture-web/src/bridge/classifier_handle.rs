//! Classifier handle - the JS-owned object that classifies landmark frames
//!
//! JS constructs one handle and passes every MediaPipe hand (flat
//! Float32Array of 63 values) through it. The handle holds configuration
//! only; each call is independent of the previous one.

use log::info;
use wasm_bindgen::prelude::*;

use crate::classifier::{
    Classifier, GestureLabel, GestureResult, RuleBasedClassifier, TipHeightClassifier,
};
use crate::config::ClassifierConfig;
use crate::error::Result;
use crate::hand::{HandLandmarkSet, HAND_CONNECTIONS};

#[wasm_bindgen]
pub struct GestureClassifier {
    rules: RuleBasedClassifier,
    fallback: TipHeightClassifier,
    use_fallback: bool,
}

impl GestureClassifier {
    pub fn try_with_config(json: &str) -> Result<Self> {
        let config = ClassifierConfig::from_json(json)?;
        info!("Gesture classifier configured: {:?}", config);
        Ok(Self {
            rules: RuleBasedClassifier::with_config(config)?,
            fallback: TipHeightClassifier::new(),
            use_fallback: false,
        })
    }

    fn active(&self) -> &dyn Classifier {
        if self.use_fallback {
            &self.fallback
        } else {
            &self.rules
        }
    }

    pub fn try_classify(&self, flat_data: &[f32]) -> Result<GestureResult> {
        self.active().classify_flat(flat_data)
    }

    pub fn try_analyze_json(&self, flat_data: &[f32]) -> Result<String> {
        let hand = HandLandmarkSet::from_flat(flat_data)?;
        Ok(serde_json::to_string(&self.rules.analyze(&hand))?)
    }

    pub fn try_finger_states(&self, flat_data: &[f32]) -> Result<Vec<u8>> {
        let hand = HandLandmarkSet::from_flat(flat_data)?;
        Ok(self.rules.finger_states(&hand).to_bytes())
    }

    pub fn try_orientation(&self, flat_data: &[f32]) -> Result<Vec<f32>> {
        let hand = HandLandmarkSet::from_flat(flat_data)?;
        let o = self.rules.orientation(&hand);
        Ok(vec![o.x, o.y, o.z])
    }
}

#[wasm_bindgen]
impl GestureClassifier {
    /// Classifier with the default thresholds
    #[wasm_bindgen(constructor)]
    pub fn new() -> GestureClassifier {
        GestureClassifier {
            rules: RuleBasedClassifier::new(),
            fallback: TipHeightClassifier::new(),
            use_fallback: false,
        }
    }

    /// Classifier with thresholds overridden from a JSON object
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> std::result::Result<GestureClassifier, JsValue> {
        Ok(Self::try_with_config(json)?)
    }

    /// Classify one hand. Throws only for malformed landmark data.
    pub fn classify(&self, flat_data: &[f32]) -> std::result::Result<GestureResult, JsValue> {
        Ok(self.try_classify(flat_data)?)
    }

    /// Same as `classify`, serialized as `{"label": ..., "confidence": ...}`
    #[wasm_bindgen(js_name = classifyJson)]
    pub fn classify_json(&self, flat_data: &[f32]) -> std::result::Result<String, JsValue> {
        Ok(self.try_classify(flat_data)?.json()?)
    }

    /// Result plus finger states, orientation and every rule's score
    #[wasm_bindgen(js_name = analyzeJson)]
    pub fn analyze_json(&self, flat_data: &[f32]) -> std::result::Result<String, JsValue> {
        Ok(self.try_analyze_json(flat_data)?)
    }

    /// Extended flags as 0/1 bytes: thumb, index, middle, ring, pinky
    #[wasm_bindgen(js_name = fingerStates)]
    pub fn finger_states(&self, flat_data: &[f32]) -> std::result::Result<Vec<u8>, JsValue> {
        Ok(self.try_finger_states(flat_data)?)
    }

    /// Palm normal as [x, y, z]
    pub fn orientation(&self, flat_data: &[f32]) -> std::result::Result<Vec<f32>, JsValue> {
        Ok(self.try_orientation(flat_data)?)
    }

    /// Switch to the tip-height fallback (or back to the rule-based scorer)
    #[wasm_bindgen(js_name = useFallback)]
    pub fn use_fallback(&mut self, enabled: bool) {
        self.use_fallback = enabled;
        info!("Gesture strategy: {}", self.active().name());
    }

    #[wasm_bindgen(getter)]
    pub fn strategy(&self) -> String {
        self.active().name().to_string()
    }

    #[wasm_bindgen(js_name = configJson)]
    pub fn config_json(&self) -> std::result::Result<String, JsValue> {
        Ok(self.rules.config().to_json()?)
    }
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Skeleton edges as a flat [a0, b0, a1, b1, ...] list for overlay drawing
#[wasm_bindgen(js_name = handConnections)]
pub fn hand_connections() -> Vec<u32> {
    HAND_CONNECTIONS
        .iter()
        .flat_map(|(a, b)| [*a as u32, *b as u32])
        .collect()
}

/// Round outcome between two labels (Unknown never wins)
#[wasm_bindgen(js_name = gestureBeats)]
pub fn gesture_beats(player: GestureLabel, opponent: GestureLabel) -> bool {
    player.beats(opponent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::{fixtures, INDEX_TIP, THUMB_TIP};

    #[test]
    fn test_classify_flat_frames() {
        let handle = GestureClassifier::new();
        let fist = fixtures::fist().build().to_flat();
        let palm = fixtures::open_palm().build().to_flat();
        assert_eq!(handle.try_classify(&fist).unwrap().label(), GestureLabel::Rock);
        assert_eq!(handle.try_classify(&palm).unwrap().label(), GestureLabel::Paper);
    }

    #[test]
    fn test_malformed_frame_is_an_error() {
        let handle = GestureClassifier::new();
        assert!(handle.try_classify(&[0.5; 60]).unwrap_err().is_invalid_input());
        assert!(handle.try_finger_states(&[]).is_err());
    }

    #[test]
    fn test_strategy_switch() {
        let mut handle = GestureClassifier::new();
        assert_eq!(handle.strategy(), "rule-based");
        handle.use_fallback(true);
        assert_eq!(handle.strategy(), "tip-height");

        // Thumb and index tips above the middle tip (y grows downwards)
        let mut flat = vec![0.5; 63];
        flat[THUMB_TIP * 3 + 1] = 0.3;
        flat[INDEX_TIP * 3 + 1] = 0.3;
        let result = handle.try_classify(&flat).unwrap();
        assert_eq!(result.label(), GestureLabel::Scissors);

        // The rule-based scorer sees a collapsed hand
        handle.use_fallback(false);
        assert_eq!(handle.try_classify(&flat).unwrap(), GestureResult::unknown());
    }

    #[test]
    fn test_config_override() {
        let handle = GestureClassifier::try_with_config(r#"{"paper_separation_gain": 2.0}"#).unwrap();
        assert!(handle.rules.config().paper_separation_gain == 2.0);
        assert!(GestureClassifier::try_with_config(r#"{"thumb_extension_deg": 0}"#).is_err());
    }

    #[test]
    fn test_diagnostics() {
        let handle = GestureClassifier::new();
        let flat = fixtures::scissors().build().to_flat();
        assert_eq!(handle.try_finger_states(&flat).unwrap(), vec![0, 1, 1, 0, 0]);
        assert_eq!(handle.try_orientation(&flat).unwrap().len(), 3);

        let json = handle.try_analyze_json(&flat).unwrap();
        assert!(json.contains(r#""label":"scissors""#));
        assert!(json.contains("finger_states"));
    }

    #[test]
    fn test_hand_connections_pairs() {
        let edges = hand_connections();
        assert_eq!(edges.len(), HAND_CONNECTIONS.len() * 2);
        assert!(edges.iter().all(|i| *i < 21));
    }

    #[test]
    fn test_gesture_beats() {
        assert!(gesture_beats(GestureLabel::Paper, GestureLabel::Rock));
        assert!(!gesture_beats(GestureLabel::Rock, GestureLabel::Paper));
        assert!(!gesture_beats(GestureLabel::Unknown, GestureLabel::Paper));
    }
}
