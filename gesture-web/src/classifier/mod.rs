//! Classifier module - rule-based rock/paper/scissors classification
//!
//! Pipeline: landmarks → finger states + orientation → ordered rule scoring.
//! The learned-model path only shares feature extraction and scaling with
//! JS; inference for it runs in JavaScript.

mod fallback;
mod features;
mod finger_state;
mod model;
mod orientation;
mod rules;
mod scaler;
mod scorer;
mod strategy;

pub use fallback::{TipHeightClassifier, FALLBACK_CONFIDENCE};
pub use features::{
    extract_features, joint_angles, FEATURE_COUNT, JOINT_ANGLE_COUNT, JOINT_ANGLE_TRIPLETS,
};
pub use finger_state::{extract_finger_states, finger_angle, FingerStates};
pub use model::{GestureLabel, GestureResult, ACCEPTANCE_THRESHOLD, GESTURE_LABELS};
pub use orientation::{estimate_orientation, HandOrientation};
pub use rules::{Analysis, RuleBasedClassifier};
pub use scaler::FeatureScaler;
pub use scorer::{RuleOutcome, RULE_PRIORITY};
pub use strategy::Classifier;
