//! Product-level aggregation.
//!
//! Ingredients and allergens are scored together in one classifier batch
//! (one model invocation per request, never per item), split back by
//! position, and AND-folded into the product verdict: one non-compatible
//! item disqualifies the whole product for that label.

use labelsense_classify::{classify_batch, ClassifierBackend};
use labelsense_core::{Compatibility, ItemRecord, ProductReport, Result};

/// Summary when the combined batch is empty.
pub const NO_INGREDIENTS_SUMMARY: &str = "No ingredients detected";

/// Summary when no label survives the AND-fold.
pub const NO_MATCH_SUMMARY: &str = "This product does not meet any specific dietary requirements";

/// Classify all items and fold them into a [`ProductReport`].
///
/// An empty combined batch short-circuits without touching the backend:
/// empty record lists, an all-false verdict, and the fixed sentinel summary.
/// Classifier failure propagates; a missing model must never be reported as
/// a negative verdict.
pub fn aggregate(
    backend: &dyn ClassifierBackend,
    ingredients: &[String],
    allergens: &[String],
) -> Result<ProductReport> {
    let batch: Vec<&str> = ingredients
        .iter()
        .chain(allergens.iter())
        .map(|s| s.as_str())
        .collect();

    if batch.is_empty() {
        return Ok(ProductReport {
            ingredients: Vec::new(),
            allergens: Vec::new(),
            product_classification: Compatibility::uniform(false),
            friendly_summary: NO_INGREDIENTS_SUMMARY.to_string(),
        });
    }

    let classifications = classify_batch(backend, &batch)?;

    let ingredient_records: Vec<ItemRecord> = ingredients
        .iter()
        .zip(&classifications[..ingredients.len()])
        .map(|(name, compat)| ItemRecord::new(name.clone(), *compat))
        .collect();

    let allergen_records: Vec<ItemRecord> = allergens
        .iter()
        .zip(&classifications[ingredients.len()..])
        .map(|(name, compat)| ItemRecord::new(name.clone(), *compat))
        .collect();

    // Conjunction across the full batch, initialized all-true.
    let mut verdict = Compatibility::uniform(true);
    for compat in &classifications {
        verdict.vegan &= compat.vegan;
        verdict.vegetarian &= compat.vegetarian;
        verdict.halal &= compat.halal;
        verdict.kosher &= compat.kosher;
    }

    Ok(ProductReport {
        ingredients: ingredient_records,
        allergens: allergen_records,
        friendly_summary: render_summary(&verdict),
        product_classification: verdict,
    })
}

/// Render the verdict as prose, naming the surviving labels in canonical
/// order.
fn render_summary(verdict: &Compatibility) -> String {
    let friendly: Vec<&str> = verdict.true_labels().iter().map(|l| l.as_str()).collect();
    if friendly.is_empty() {
        NO_MATCH_SUMMARY.to_string()
    } else {
        format!("This product is {} friendly", friendly.join(", "))
    }
}
