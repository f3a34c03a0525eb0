//! Classifier backend trait and threshold policy.
//!
//! The backend contract is deliberately narrow: one batched call, scores in
//! input order, one score per label in canonical order. Everything above the
//! raw scores (thresholding, verdict aggregation) lives in this crate and the
//! pipeline so it can be tested against a deterministic stub.

use std::collections::HashMap;

use labelsense_core::{Compatibility, DietLabel, Error, Result};

/// A label is compatible when its score reaches this value. Ties round up:
/// exactly 0.5 means compatible.
pub const SCORE_THRESHOLD: f32 = 0.5;

/// Per-phrase scores, one per label in canonical order.
pub type LabelScores = [f32; 4];

/// Trait for batch scoring backends.
pub trait ClassifierBackend: Send + Sync {
    /// Score a batch of phrases. The result has the same length and order as
    /// the input. Implementations may assume a non-empty batch; callers go
    /// through [`classify_batch`], which short-circuits empty input.
    fn score_batch(&self, phrases: &[&str]) -> Result<Vec<LabelScores>>;

    /// Whether the underlying model is loaded and scoring can succeed.
    fn is_available(&self) -> bool;
}

/// Classify a batch of phrases into boolean compatibility vectors.
///
/// Empty input yields empty output without touching the backend. Otherwise
/// the backend is invoked exactly once and each score is thresholded
/// independently per label.
pub fn classify_batch(
    backend: &dyn ClassifierBackend,
    phrases: &[&str],
) -> Result<Vec<Compatibility>> {
    if phrases.is_empty() {
        return Ok(Vec::new());
    }

    let scores = backend.score_batch(phrases)?;
    if scores.len() != phrases.len() {
        return Err(Error::Inference(format!(
            "backend returned {} score rows for {} phrases",
            scores.len(),
            phrases.len()
        )));
    }

    Ok(scores.iter().map(threshold).collect())
}

/// Threshold one score row at [`SCORE_THRESHOLD`], independently per label.
pub fn threshold(scores: &LabelScores) -> Compatibility {
    let mut compat = Compatibility::default();
    for (label, score) in DietLabel::ALL.iter().zip(scores.iter()) {
        compat.set(*label, *score >= SCORE_THRESHOLD);
    }
    compat
}

/// Backend used when no model could be loaded. Every request fails with
/// `Error::ClassifierUnavailable`, keeping "model missing" distinguishable
/// from a genuine all-false verdict.
pub struct UnavailableClassifier {
    reason: String,
}

impl UnavailableClassifier {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl ClassifierBackend for UnavailableClassifier {
    fn score_batch(&self, _phrases: &[&str]) -> Result<Vec<LabelScores>> {
        Err(Error::ClassifierUnavailable(self.reason.clone()))
    }

    fn is_available(&self) -> bool {
        false
    }
}

/// Deterministic backend with a fixed score table, for tests and demos.
pub struct ScriptedClassifier {
    scores: HashMap<String, LabelScores>,
    fallback: LabelScores,
}

impl ScriptedClassifier {
    /// Phrases not in the table score `fallback`.
    pub fn new(fallback: LabelScores) -> Self {
        Self {
            scores: HashMap::new(),
            fallback,
        }
    }

    pub fn with_score(mut self, phrase: impl Into<String>, scores: LabelScores) -> Self {
        self.scores.insert(phrase.into(), scores);
        self
    }
}

impl ClassifierBackend for ScriptedClassifier {
    fn score_batch(&self, phrases: &[&str]) -> Result<Vec<LabelScores>> {
        Ok(phrases
            .iter()
            .map(|p| self.scores.get(*p).copied().unwrap_or(self.fallback))
            .collect())
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingBackend {
        calls: AtomicUsize,
    }

    impl ClassifierBackend for CountingBackend {
        fn score_batch(&self, phrases: &[&str]) -> Result<Vec<LabelScores>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![[1.0, 1.0, 1.0, 1.0]; phrases.len()])
        }

        fn is_available(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_empty_batch_never_calls_backend() {
        let backend = CountingBackend {
            calls: AtomicUsize::new(0),
        };
        let result = classify_batch(&backend, &[]).unwrap();
        assert!(result.is_empty());
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_threshold_ties_round_up() {
        let compat = threshold(&[0.5, 0.49999, 0.50001, 0.0]);
        assert!(compat.vegan);
        assert!(!compat.vegetarian);
        assert!(compat.halal);
        assert!(!compat.kosher);
    }

    #[test]
    fn test_labels_threshold_independently() {
        let backend = ScriptedClassifier::new([0.9, 0.1, 0.9, 0.1]);
        let result = classify_batch(&backend, &["anything"]).unwrap();
        assert_eq!(
            result[0],
            Compatibility {
                vegan: true,
                vegetarian: false,
                halal: true,
                kosher: false,
            }
        );
    }

    #[test]
    fn test_scripted_table_and_fallback() {
        let backend = ScriptedClassifier::new([1.0, 1.0, 1.0, 1.0])
            .with_score("pork", [0.0, 0.0, 0.0, 0.0]);
        let result = classify_batch(&backend, &["salt", "pork"]).unwrap();
        assert_eq!(result[0], Compatibility::uniform(true));
        assert_eq!(result[1], Compatibility::uniform(false));
    }

    #[test]
    fn test_unavailable_is_a_distinct_error() {
        let backend = UnavailableClassifier::new("no model");
        let err = classify_batch(&backend, &["salt"]).unwrap_err();
        assert!(matches!(err, Error::ClassifierUnavailable(_)));
        assert!(!backend.is_available());
    }

    #[test]
    fn test_length_mismatch_is_an_inference_error() {
        struct ShortBackend;
        impl ClassifierBackend for ShortBackend {
            fn score_batch(&self, _phrases: &[&str]) -> Result<Vec<LabelScores>> {
                Ok(vec![[1.0; 4]])
            }
            fn is_available(&self) -> bool {
                true
            }
        }
        let err = classify_batch(&ShortBackend, &["a b", "c d"]).unwrap_err();
        assert!(matches!(err, Error::Inference(_)));
    }
}
