//! Gesture Web - rock/paper/scissors recognition from MediaPipe hand landmarks
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - Re-exports of the public API
//! - The module start hook

mod bridge;
mod classifier;
mod config;
mod error;
pub mod geometry;
pub mod hand;

use log::{info, LevelFilter};
use wasm_bindgen::prelude::*;

pub use bridge::{
    gesture_beats, hand_connections, init_logging, set_log_level, FeaturePipeline,
    GestureClassifier,
};
pub use classifier::{
    estimate_orientation, extract_features, extract_finger_states, finger_angle, joint_angles,
    Analysis, Classifier, FeatureScaler, FingerStates, GestureLabel, GestureResult,
    HandOrientation, RuleBasedClassifier, RuleOutcome, TipHeightClassifier,
    ACCEPTANCE_THRESHOLD, FALLBACK_CONFIDENCE, FEATURE_COUNT, GESTURE_LABELS,
    JOINT_ANGLE_COUNT, JOINT_ANGLE_TRIPLETS, RULE_PRIORITY,
};
pub use config::ClassifierConfig;
pub use error::{GestureError, InvalidInputKind, Result};

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    init_logging(LevelFilter::Info);
    info!("Gesture classifier module loaded");
}
