//! End-to-end analysis flow over translated label text, using a scripted
//! classifier in place of the ONNX model.

use std::sync::Arc;

use labelsense_classify::ScriptedClassifier;
use labelsense_pipeline::{Analyzer, NO_INGREDIENTS_SUMMARY};

#[test]
fn test_label_text_to_report() {
    let backend = ScriptedClassifier::new([0.9, 0.9, 0.9, 0.9])
        .with_score("milk", [0.1, 0.9, 0.9, 0.9])
        .with_score("milk powder", [0.1, 0.9, 0.9, 0.9]);
    let analyzer = Analyzer::new(Arc::new(backend));

    let report = analyzer
        .analyze("Ingredients: wheat flour, sugar, milk powder. Manufactured in USA.")
        .unwrap();

    let ingredients: Vec<&str> = report.ingredients.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(ingredients, vec!["wheat flour", "sugar", "milk powder"]);

    // allergen pass runs over the raw text: "wheat" and "milk" both declared
    let allergens: Vec<&str> = report.allergens.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(allergens, vec!["milk", "wheat"]);

    // milk drags vegan down for the whole product
    assert!(!report.product_classification.vegan);
    assert!(report.product_classification.vegetarian);
    assert_eq!(
        report.friendly_summary,
        "This product is vegetarian, halal, kosher friendly"
    );
}

#[test]
fn test_allergen_detected_outside_ingredient_section() {
    // "contains" truncates the ingredient window, but the allergen pass
    // still sees the declaration after it.
    let backend = ScriptedClassifier::new([1.0; 4]);
    let analyzer = Analyzer::new(Arc::new(backend));

    let report = analyzer
        .analyze("ingredients: rice, salt. contains traces of peanuts")
        .unwrap();

    let ingredients: Vec<&str> = report.ingredients.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(ingredients, vec!["rice", "salt"]);
    assert_eq!(report.allergens.len(), 1);
    assert_eq!(report.allergens[0].name, "peanuts");
}

#[test]
fn test_empty_text_yields_sentinel_report() {
    let backend = ScriptedClassifier::new([1.0; 4]);
    let analyzer = Analyzer::new(Arc::new(backend));

    let report = analyzer.analyze("").unwrap();
    assert!(report.ingredients.is_empty());
    assert!(report.allergens.is_empty());
    assert!(!report.product_classification.vegan);
    assert!(!report.product_classification.vegetarian);
    assert!(!report.product_classification.halal);
    assert!(!report.product_classification.kosher);
    assert_eq!(report.friendly_summary, NO_INGREDIENTS_SUMMARY);
}

#[test]
fn test_summary_names_exactly_the_true_labels() {
    let backend = ScriptedClassifier::new([0.9, 0.9, 0.1, 0.9]);
    let analyzer = Analyzer::new(Arc::new(backend));

    let report = analyzer.analyze("ingredients: seaweed").unwrap();
    assert_eq!(
        report.friendly_summary,
        "This product is vegan, vegetarian, kosher friendly"
    );
    assert!(report.product_classification.vegan);
    assert!(!report.product_classification.halal);
}

#[test]
fn test_report_json_shape() {
    let backend = ScriptedClassifier::new([1.0; 4]);
    let analyzer = Analyzer::new(Arc::new(backend));

    let report = analyzer.analyze("ingredients: salt, shrimp paste").unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert!(json["ingredients"].is_array());
    assert!(json["allergens"].is_array());
    let first = &json["ingredients"][0];
    assert!(first["name"].is_string());
    for label in ["vegan", "vegetarian", "halal", "kosher"] {
        assert!(first[label].is_boolean());
        assert!(json["product_classification"][label].is_boolean());
    }
    assert!(json["friendly_summary"].is_string());
}
