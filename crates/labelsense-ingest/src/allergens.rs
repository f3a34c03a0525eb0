//! Allergen detection against the fixed reference table.

use labelsense_core::reference::ALLERGEN_REFERENCE;

/// Scans translated label text for declared allergens.
///
/// Matching is case-insensitive substring containment, intentionally
/// permissive: "crab" matches inside "crab extract" and also inside
/// "crabapple". Over-reporting an allergen is the safe direction, so the
/// false positives are accepted rather than fixed.
pub struct AllergenDetector {
    reference: Vec<String>,
}

impl Default for AllergenDetector {
    fn default() -> Self {
        Self::new(&ALLERGEN_REFERENCE)
    }
}

impl AllergenDetector {
    /// Build a detector with an injected reference table.
    pub fn new(reference: &[&str]) -> Self {
        Self {
            reference: reference.iter().map(|a| a.to_lowercase()).collect(),
        }
    }

    /// Return the reference entries found in `text`, deduplicated and sorted
    /// lexicographically for stable output.
    pub fn detect(&self, text: &str) -> Vec<String> {
        let text = text.to_lowercase();
        let mut found: Vec<String> = self
            .reference
            .iter()
            .filter(|a| text.contains(a.as_str()))
            .cloned()
            .collect();
        found.sort();
        found.dedup();
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_sorted_without_duplicates() {
        let det = AllergenDetector::default();
        let found = det.detect("Contains: Wheat flour, milk powder, wheat starch, MILK solids");
        assert_eq!(found, vec!["milk", "wheat"]);
    }

    #[test]
    fn test_substring_match_inside_longer_words() {
        let det = AllergenDetector::default();
        // "crab" inside "crabapple" is a documented false positive
        assert_eq!(det.detect("crabapple puree"), vec!["crab"]);
    }

    #[test]
    fn test_no_allergens() {
        let det = AllergenDetector::default();
        assert!(det.detect("water, salt, citric acid").is_empty());
        assert!(det.detect("").is_empty());
    }

    #[test]
    fn test_injected_reference_table() {
        let det = AllergenDetector::new(&["sesame", "celery"]);
        assert_eq!(det.detect("roasted sesame oil"), vec!["sesame"]);
    }
}
