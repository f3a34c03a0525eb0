//! End-to-end analysis: translated text in, product report out.

use std::sync::Arc;

use tracing::debug;

use labelsense_classify::ClassifierBackend;
use labelsense_core::{ProductReport, Result};
use labelsense_ingest::{AllergenDetector, Segmenter};

/// Composes segmentation, allergen detection, and aggregation for one
/// translated label text. Segmentation and detection are independent passes
/// over the same input; their combined output is scored in a single
/// classifier batch.
pub struct Analyzer {
    segmenter: Segmenter,
    detector: AllergenDetector,
    backend: Arc<dyn ClassifierBackend>,
}

impl Analyzer {
    /// Build an analyzer with default reference tables.
    pub fn new(backend: Arc<dyn ClassifierBackend>) -> Self {
        Self::with_components(Segmenter::default(), AllergenDetector::default(), backend)
    }

    /// Build an analyzer with injected segmenter and detector (custom word
    /// lists).
    pub fn with_components(
        segmenter: Segmenter,
        detector: AllergenDetector,
        backend: Arc<dyn ClassifierBackend>,
    ) -> Self {
        Self {
            segmenter,
            detector,
            backend,
        }
    }

    /// Analyze one translated label text.
    pub fn analyze(&self, text: &str) -> Result<ProductReport> {
        let ingredients = self.segmenter.segment(text);
        let allergens = self.detector.detect(text);

        debug!(
            ingredients = ingredients.len(),
            allergens = allergens.len(),
            "segmented label text"
        );

        crate::aggregate(self.backend.as_ref(), &ingredients, &allergens)
    }

    /// Whether the underlying classifier can score requests.
    pub fn classifier_available(&self) -> bool {
        self.backend.is_available()
    }
}
