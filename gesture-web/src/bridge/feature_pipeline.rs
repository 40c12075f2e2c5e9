//! Feature pipeline handle - model input vectors for a learned classifier
//!
//! The pipeline never fits during inference. A scaler is either loaded from
//! JSON produced offline or fit once over a corpus with `fitScaler`.

use log::{info, warn};
use wasm_bindgen::prelude::*;

use crate::classifier::{extract_features, joint_angles, FeatureScaler, FEATURE_COUNT};
use crate::error::{GestureError, Result};
use crate::hand::HandLandmarkSet;

#[wasm_bindgen]
#[derive(Default)]
pub struct FeaturePipeline {
    scaler: Option<FeatureScaler>,
}

impl FeaturePipeline {
    pub fn try_load_scaler(&mut self, json: &str) -> Result<()> {
        let scaler = FeatureScaler::from_json(json)?;
        info!("Feature scaler loaded ({} samples)", scaler.samples());
        self.scaler = Some(scaler);
        Ok(())
    }

    pub fn try_features(&self, flat_data: &[f32]) -> Result<Vec<f32>> {
        let hand = HandLandmarkSet::from_flat(flat_data)?;
        Ok(extract_features(&hand).to_vec())
    }

    pub fn try_scaled_features(&self, flat_data: &[f32]) -> Result<Vec<f32>> {
        let scaler = self.scaler.as_ref().ok_or(GestureError::ScalerNotFitted)?;
        let hand = HandLandmarkSet::from_flat(flat_data)?;
        Ok(scaler.transform(&extract_features(&hand))?.to_vec())
    }

    pub fn try_joint_angles(&self, flat_data: &[f32]) -> Result<Vec<f32>> {
        let hand = HandLandmarkSet::from_flat(flat_data)?;
        Ok(joint_angles(&hand).to_vec())
    }

    /// Fit over frames concatenated back to back, keep the scaler and return
    /// its JSON for storage
    pub fn try_fit_scaler(&mut self, flat_corpus: &[f32]) -> Result<String> {
        if flat_corpus.is_empty() {
            return Err(GestureError::EmptyCorpus);
        }
        if flat_corpus.len() % FEATURE_COUNT != 0 {
            warn!("Corpus length {} is not a whole number of frames", flat_corpus.len());
            return Err(GestureError::FeatureWidth {
                expected: FEATURE_COUNT,
                actual: flat_corpus.len() % FEATURE_COUNT,
            });
        }

        let corpus = flat_corpus
            .chunks_exact(FEATURE_COUNT)
            .map(|frame| HandLandmarkSet::from_flat(frame).map(|hand| extract_features(&hand)))
            .collect::<Result<Vec<_>>>()?;

        let scaler = FeatureScaler::fit(&corpus)?;
        let json = scaler.to_json()?;
        info!("Feature scaler fit on {} frames", corpus.len());
        self.scaler = Some(scaler);
        Ok(json)
    }
}

#[wasm_bindgen]
impl FeaturePipeline {
    #[wasm_bindgen(constructor)]
    pub fn new() -> FeaturePipeline {
        FeaturePipeline::default()
    }

    /// Load mean/scale parameters saved alongside the model
    #[wasm_bindgen(js_name = loadScaler)]
    pub fn load_scaler(&mut self, json: &str) -> std::result::Result<(), JsValue> {
        Ok(self.try_load_scaler(json)?)
    }

    #[wasm_bindgen(getter, js_name = isScalerLoaded)]
    pub fn is_scaler_loaded(&self) -> bool {
        self.scaler.is_some()
    }

    /// Raw 63-value model input
    pub fn features(&self, flat_data: &[f32]) -> std::result::Result<Vec<f32>, JsValue> {
        Ok(self.try_features(flat_data)?)
    }

    /// Standardized 63-value model input. Throws if no scaler is loaded.
    #[wasm_bindgen(js_name = scaledFeatures)]
    pub fn scaled_features(&self, flat_data: &[f32]) -> std::result::Result<Vec<f32>, JsValue> {
        Ok(self.try_scaled_features(flat_data)?)
    }

    /// 15 image-plane joint angles in degrees
    #[wasm_bindgen(js_name = jointAngles)]
    pub fn joint_angles(&self, flat_data: &[f32]) -> std::result::Result<Vec<f32>, JsValue> {
        Ok(self.try_joint_angles(flat_data)?)
    }

    #[wasm_bindgen(js_name = fitScaler)]
    pub fn fit_scaler(&mut self, flat_corpus: &[f32]) -> std::result::Result<String, JsValue> {
        Ok(self.try_fit_scaler(flat_corpus)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::fixtures;

    fn corpus() -> Vec<f32> {
        [fixtures::fist(), fixtures::scissors(), fixtures::open_palm()]
            .iter()
            .flat_map(|pose| pose.build().to_flat())
            .collect()
    }

    #[test]
    fn test_features_are_raw_coordinates() {
        let pipeline = FeaturePipeline::new();
        let flat = fixtures::open_palm().build().to_flat();
        assert_eq!(pipeline.try_features(&flat).unwrap(), flat);
        assert_eq!(pipeline.try_joint_angles(&flat).unwrap().len(), 15);
    }

    #[test]
    fn test_scaled_features_require_scaler() {
        let pipeline = FeaturePipeline::new();
        let flat = fixtures::fist().build().to_flat();
        assert!(!pipeline.is_scaler_loaded());
        assert_eq!(
            pipeline.try_scaled_features(&flat).unwrap_err(),
            GestureError::ScalerNotFitted
        );
    }

    #[test]
    fn test_fit_then_load_gives_same_output() {
        let mut trained = FeaturePipeline::new();
        let json = trained.try_fit_scaler(&corpus()).unwrap();
        assert!(trained.is_scaler_loaded());

        let mut loaded = FeaturePipeline::new();
        loaded.try_load_scaler(&json).unwrap();

        let flat = fixtures::scissors().build().to_flat();
        let a = trained.try_scaled_features(&flat).unwrap();
        let b = loaded.try_scaled_features(&flat).unwrap();
        assert_eq!(a.len(), FEATURE_COUNT);
        assert_eq!(a, b);
    }

    #[test]
    fn test_fit_rejects_bad_corpus() {
        let mut pipeline = FeaturePipeline::new();
        assert_eq!(pipeline.try_fit_scaler(&[]).unwrap_err(), GestureError::EmptyCorpus);

        let mut ragged = corpus();
        ragged.pop();
        assert!(matches!(
            pipeline.try_fit_scaler(&ragged),
            Err(GestureError::FeatureWidth { .. })
        ));

        let mut nan = corpus();
        nan[70] = f32::NAN;
        assert!(pipeline.try_fit_scaler(&nan).unwrap_err().is_invalid_input());
        assert!(!pipeline.is_scaler_loaded());
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let mut pipeline = FeaturePipeline::new();
        assert!(pipeline.try_load_scaler("{not json").is_err());
        assert!(!pipeline.is_scaler_loaded());
    }
}
