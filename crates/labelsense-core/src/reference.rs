//! Fixed reference data: the allergen table and label-noise word list.
//!
//! Both lists are defaults. The segmenter and detector take their lists at
//! construction, so localized or extended tables can be injected without
//! touching this module.

/// Regulatory allergen reference list (South Korean labeling standard,
/// translated names). Matched by substring against translated label text.
pub const ALLERGEN_REFERENCE: [&str; 22] = [
    "eggs",
    "milk",
    "buckwheat",
    "peanuts",
    "soybeans",
    "wheat",
    "mackerel",
    "crab",
    "shrimp",
    "pork",
    "peach",
    "tomato",
    "sulfurous acid",
    "walnuts",
    "chicken",
    "beef",
    "squid",
    "clams",
    "oyster",
    "abalone",
    "mussels",
    "pine nut",
];

/// Words that mark a token as packaging/origin/company noise rather than an
/// ingredient. Matched as whole words within a token (single-letter entries
/// like "g" would otherwise swallow ordinary ingredients such as "sugar").
pub const BLOCKED_WORDS: [&str; 23] = [
    "usa",
    "america",
    "australia",
    "canada",
    "china",
    "japan",
    "france",
    "imported",
    "origin",
    "country",
    "etc",
    "jinmi",
    "food",
    "co",
    "ltd",
    "report",
    "exchange",
    "storage",
    "address",
    "ml",
    "g",
    "pe",
    "company",
];
