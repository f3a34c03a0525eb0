//! Shared application state.

use std::sync::Arc;

use labelsense_classify::ClassifierBackend;
use labelsense_core::LabelSenseConfig;
use labelsense_gcloud::{api_key_from_env, TranslateClient, VisionOcrClient};
use labelsense_pipeline::Analyzer;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: LabelSenseConfig,
    pub analyzer: Analyzer,
    /// OCR client; `None` without a `GOOGLE_API_KEY`.
    pub ocr: Option<VisionOcrClient>,
    /// Translation client; `None` without a `GOOGLE_API_KEY`.
    pub translate: Option<TranslateClient>,
}

impl AppState {
    pub fn new(config: LabelSenseConfig, classifier: Arc<dyn ClassifierBackend>) -> Self {
        let analyzer = Analyzer::new(classifier);

        let (ocr, translate) = match api_key_from_env() {
            Some(key) => {
                let client = reqwest::Client::new();
                (
                    Some(VisionOcrClient::new(client.clone(), key.clone())),
                    Some(TranslateClient::new(client, key)),
                )
            }
            None => (None, None),
        };

        Self {
            config,
            analyzer,
            ocr,
            translate,
        }
    }
}
