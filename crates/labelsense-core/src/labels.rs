//! Diet labels and classification result records.
//!
//! The four compatibility axes are independent: an item can be vegan and
//! halal and kosher at once. Canonical order (vegan, vegetarian, halal,
//! kosher) is fixed and used everywhere a vector of per-label values is
//! exchanged or rendered.

use serde::{Deserialize, Serialize};

/// One dietary-compatibility axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietLabel {
    Vegan,
    Vegetarian,
    Halal,
    Kosher,
}

impl DietLabel {
    /// All labels in canonical order.
    pub const ALL: [DietLabel; 4] = [
        DietLabel::Vegan,
        DietLabel::Vegetarian,
        DietLabel::Halal,
        DietLabel::Kosher,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DietLabel::Vegan => "vegan",
            DietLabel::Vegetarian => "vegetarian",
            DietLabel::Halal => "halal",
            DietLabel::Kosher => "kosher",
        }
    }
}

/// Boolean compatibility on all four labels for one item (or one product).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compatibility {
    pub vegan: bool,
    pub vegetarian: bool,
    pub halal: bool,
    pub kosher: bool,
}

impl Compatibility {
    /// Every label set to the same value.
    pub fn uniform(value: bool) -> Self {
        Self {
            vegan: value,
            vegetarian: value,
            halal: value,
            kosher: value,
        }
    }

    pub fn get(&self, label: DietLabel) -> bool {
        match label {
            DietLabel::Vegan => self.vegan,
            DietLabel::Vegetarian => self.vegetarian,
            DietLabel::Halal => self.halal,
            DietLabel::Kosher => self.kosher,
        }
    }

    pub fn set(&mut self, label: DietLabel, value: bool) {
        match label {
            DietLabel::Vegan => self.vegan = value,
            DietLabel::Vegetarian => self.vegetarian = value,
            DietLabel::Halal => self.halal = value,
            DietLabel::Kosher => self.kosher = value,
        }
    }

    /// Labels set to true, in canonical order.
    pub fn true_labels(&self) -> Vec<DietLabel> {
        DietLabel::ALL
            .iter()
            .copied()
            .filter(|l| self.get(*l))
            .collect()
    }
}

/// One classified ingredient or allergen.
///
/// Serializes flat: `{"name": ..., "vegan": ..., "vegetarian": ..., ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    #[serde(flatten)]
    pub compatibility: Compatibility,
}

impl ItemRecord {
    pub fn new(name: impl Into<String>, compatibility: Compatibility) -> Self {
        Self {
            name: name.into(),
            compatibility,
        }
    }
}

/// Full analysis output for one product label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductReport {
    pub ingredients: Vec<ItemRecord>,
    pub allergens: Vec<ItemRecord>,
    pub product_classification: Compatibility,
    pub friendly_summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_record_serializes_flat() {
        let record = ItemRecord::new(
            "wheat flour",
            Compatibility {
                vegan: true,
                vegetarian: true,
                halal: true,
                kosher: false,
            },
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["name"], "wheat flour");
        assert_eq!(json["vegan"], true);
        assert_eq!(json["kosher"], false);
        // flat, not nested under "compatibility"
        assert!(json.get("compatibility").is_none());
    }

    #[test]
    fn test_true_labels_canonical_order() {
        let c = Compatibility {
            vegan: true,
            vegetarian: false,
            halal: true,
            kosher: true,
        };
        let names: Vec<&str> = c.true_labels().iter().map(|l| l.as_str()).collect();
        assert_eq!(names, vec!["vegan", "halal", "kosher"]);
    }

    #[test]
    fn test_uniform_get_set() {
        let mut c = Compatibility::uniform(true);
        assert!(DietLabel::ALL.iter().all(|l| c.get(*l)));
        c.set(DietLabel::Halal, false);
        assert!(!c.halal);
        assert!(c.vegan && c.vegetarian && c.kosher);
    }
}
