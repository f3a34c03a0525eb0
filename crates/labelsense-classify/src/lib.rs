//! LabelSense Classify — dietary-compatibility scoring adapter.
//!
//! Provides the `ClassifierBackend` trait: one batched call from a list of
//! phrases to per-phrase, per-label scores. When the `onnx` feature is
//! enabled and model files are present, `OnnxClassifier` runs a fine-tuned
//! multi-label text classifier. Without it, `UnavailableClassifier` is used
//! and every scoring request fails with a distinguishable error — an absent
//! model must never read as "nothing is compatible".

pub mod backend;
pub mod onnx_classifier;

pub use backend::{
    classify_batch, ClassifierBackend, LabelScores, ScriptedClassifier, UnavailableClassifier,
    SCORE_THRESHOLD,
};

#[cfg(feature = "onnx")]
pub use onnx_classifier::OnnxClassifier;

use std::path::Path;
use std::sync::Arc;

/// Create the best available classifier for the given model directory.
///
/// Tries ONNX first (if feature enabled and model files present), falls back
/// to `UnavailableClassifier` so callers get a per-request
/// `Error::ClassifierUnavailable` instead of a fabricated verdict.
pub fn create_classifier(model_dir: &Path) -> Arc<dyn ClassifierBackend> {
    #[cfg(feature = "onnx")]
    {
        match OnnxClassifier::load(model_dir) {
            Ok(classifier) => {
                tracing::info!("Using ONNX classifier from {}", model_dir.display());
                return Arc::new(classifier);
            }
            Err(e) => {
                tracing::warn!("ONNX classifier unavailable: {}", e);
                return Arc::new(UnavailableClassifier::new(e));
            }
        }
    }

    #[cfg(not(feature = "onnx"))]
    {
        tracing::info!(
            "ONNX feature disabled; classification requests will report unavailable (model dir: {})",
            model_dir.display()
        );
        Arc::new(UnavailableClassifier::new(
            "onnx feature disabled at build time".to_string(),
        ))
    }
}
