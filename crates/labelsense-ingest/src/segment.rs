//! Ingredient segmentation — extracts a clean phrase list from noisy
//! translated label text.
//!
//! The input has no fixed grammar: OCR residue, multi-line entries, company
//! addresses and origin notes all share the string with the actual ingredient
//! list. Segmentation is an ordered chain of heuristic stages, each operating
//! on the previous stage's output:
//!
//! 1. lowercase
//! 2. locate the ingredient section (drop everything up to the header)
//! 3. truncate at the first trailing-section marker
//! 4. collapse newline runs into comma separators
//! 5. split on delimiter runs
//! 6. drop empty, too-short, and noise tokens
//! 7. merge known split multi-word ingredients
//! 8. dedup preserving first-seen order
//!
//! Stages never fail; missing headers or markers just widen or keep the text
//! window, and pathological input degrades to an empty list.

use once_cell::sync::Lazy;
use regex::Regex;

use labelsense_core::reference::BLOCKED_WORDS;

/// Section headers that introduce the ingredient list. Alternation order
/// matters: "raw material" must come before its longer variants so the
/// shortest header wins at a given position, leaving the tail to tokenize.
static HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?s)(ingredients|raw material|raw materials|raw material name|raw material name and content)[:\s]*(.*)",
    )
    .expect("header regex")
});

/// Markers that open a trailing non-ingredient section.
static STOP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        "expiration|manufacturer|storage|return|exchange|packaging|report|nutritional|nutrition|contains",
    )
    .expect("stop-marker regex")
});

static NEWLINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\n\r]+").expect("newline regex"));

/// Delimiters between list entries: punctuation, bullets, slashes, hyphens.
static SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.,;:/()•·\-\n]+").expect("delimiter regex"));

/// Ordered heuristic pipeline turning translated label text into an
/// ingredient phrase list.
pub struct Segmenter {
    /// Whole-word matcher over the blocked noise list; `None` when the list
    /// is empty.
    blocked_re: Option<Regex>,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(&BLOCKED_WORDS)
    }
}

impl Segmenter {
    /// Build a segmenter with an injected noise-word list.
    ///
    /// Blocked words match as whole words inside a token. Substring matching
    /// would be wrong here: the default list carries unit fragments like "g"
    /// and "ml" that occur inside ordinary ingredient names ("sugar",
    /// "eggs").
    pub fn new(blocked_words: &[&str]) -> Self {
        let blocked_re = if blocked_words.is_empty() {
            None
        } else {
            let alternation = blocked_words
                .iter()
                .map(|w| regex::escape(w))
                .collect::<Vec<_>>()
                .join("|");
            Some(Regex::new(&format!(r"\b(?:{})\b", alternation)).expect("blocked-word regex"))
        };
        Self { blocked_re }
    }

    /// Extract the ordered, deduplicated ingredient phrase list.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let text = text.to_lowercase();
        let text = locate_section(&text);
        let text = truncate_at_stop(text);
        let text = normalize_lines(text);
        let tokens = tokenize(&text);
        let kept = self.filter(tokens);
        let merged = merge_known_pairs(kept);
        let phrases = dedup_preserving_order(merged);
        tracing::trace!(phrases = phrases.len(), "segmented ingredient list");
        phrases
    }

    /// Stage 6: drop empty, too-short (≤ 2 chars), and noise tokens.
    fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter_map(|t| {
                let trimmed = t.trim();
                if trimmed.chars().count() <= 2 {
                    return None;
                }
                if let Some(re) = &self.blocked_re {
                    if re.is_match(trimmed) {
                        return None;
                    }
                }
                Some(trimmed.to_string())
            })
            .collect()
    }
}

/// Stage 2: keep only the text after the first ingredient-section header.
/// No header means the whole text is the candidate window.
fn locate_section(text: &str) -> &str {
    match HEADER_RE.captures(text) {
        Some(caps) => caps.get(2).map(|m| m.as_str()).unwrap_or(text),
        None => text,
    }
}

/// Stage 3: cut the text just before the first trailing-section marker.
fn truncate_at_stop(text: &str) -> &str {
    match STOP_RE.find(text) {
        Some(m) => &text[..m.start()],
        None => text,
    }
}

/// Stage 4: multi-line entries behave like comma-separated lists.
fn normalize_lines(text: &str) -> String {
    NEWLINE_RE.replace_all(text, ", ").into_owned()
}

/// Stage 5: split on delimiter runs into raw candidate tokens.
fn tokenize(text: &str) -> Vec<String> {
    SPLIT_RE.split(text).map(|t| t.to_string()).collect()
}

/// Stage 7: re-join multi-word ingredients the delimiter split tears apart.
/// The only known case is "enzyme-treated stevia", whose hyphen is a split
/// delimiter.
fn merge_known_pairs(tokens: Vec<String>) -> Vec<String> {
    let mut merged = Vec::with_capacity(tokens.len());
    let mut skip_next = false;
    for i in 0..tokens.len() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if tokens[i] == "enzyme"
            && tokens.get(i + 1).is_some_and(|next| next.contains("stevia"))
        {
            merged.push("enzyme-treated stevia".to_string());
            skip_next = true;
        } else {
            merged.push(tokens[i].clone());
        }
    }
    merged
}

/// Stage 8: first occurrence wins, later repeats drop.
fn dedup_preserving_order(phrases: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    phrases
        .into_iter()
        .filter(|p| seen.insert(p.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_and_noise_filtering() {
        let seg = Segmenter::default();
        let phrases = seg.segment("Ingredients: wheat flour, sugar, eggs. Manufactured in USA.");
        assert_eq!(phrases, vec!["wheat flour", "sugar", "eggs"]);
    }

    #[test]
    fn test_no_header_falls_back_to_full_text() {
        let seg = Segmenter::default();
        let phrases = seg.segment("purified water, citric acid");
        assert_eq!(phrases, vec!["purified water", "citric acid"]);
    }

    #[test]
    fn test_truncates_at_stop_marker() {
        let seg = Segmenter::default();
        let phrases =
            seg.segment("ingredients: salt, pepper. nutritional information: 30 kcal per serving");
        assert_eq!(phrases, vec!["salt", "pepper"]);
    }

    #[test]
    fn test_newlines_behave_like_commas() {
        let seg = Segmenter::default();
        let phrases = seg.segment("raw materials: rice syrup\nsea salt\r\npalm oil");
        assert_eq!(phrases, vec!["rice syrup", "sea salt", "palm oil"]);
    }

    #[test]
    fn test_enzyme_stevia_merge() {
        let seg = Segmenter::default();
        let phrases = seg.segment("ingredients: enzyme-stevia extract, cocoa butter");
        assert_eq!(phrases, vec!["enzyme-treated stevia", "cocoa butter"]);
    }

    #[test]
    fn test_short_and_blocked_tokens_drop() {
        let seg = Segmenter::default();
        // "30 g" hits the unit word, "co" is too short anyway, origin line is noise
        let phrases = seg.segment("ingredients: corn starch, 30 g, co, country of origin china");
        assert_eq!(phrases, vec!["corn starch"]);
    }

    #[test]
    fn test_duplicates_keep_first_occurrence() {
        let seg = Segmenter::default();
        let phrases = seg.segment("ingredients: salt, sugar, salt, sugar, salt");
        assert_eq!(phrases, vec!["salt", "sugar"]);
    }

    #[test]
    fn test_empty_input_degrades_to_empty_list() {
        let seg = Segmenter::default();
        assert!(seg.segment("").is_empty());
        // header present but section fully consumed by truncation
        assert!(seg.segment("ingredients: storage instructions").is_empty());
    }

    #[test]
    fn test_segmentation_is_deterministic() {
        let seg = Segmenter::default();
        let text = "raw material name: dried seaweed · sesame oil / salt (refined)";
        assert_eq!(seg.segment(text), seg.segment(text));
    }
}
