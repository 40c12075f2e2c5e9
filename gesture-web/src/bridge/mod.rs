//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] handles live here.
//! Re-exports only in mod.rs, logic in submodules.

mod classifier_handle;
mod feature_pipeline;
mod logger;

pub use classifier_handle::{gesture_beats, hand_connections, GestureClassifier};
pub use feature_pipeline::FeaturePipeline;
pub use logger::{init_logging, set_log_level};
