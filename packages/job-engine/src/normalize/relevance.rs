//! Electronics relevance predicate and function-keyword extraction.

use regex::Regex;
use std::sync::OnceLock;

use crate::util::uniq_preserve_order;

/// Practical include keywords for electronics/electrical/hardware roles.
pub const INCLUDE_KEYWORDS: &[&str] = &[
    "electronics",
    "electronic",
    "electrical",
    "hardware",
    "embedded",
    "firmware",
    "pcb",
    "schematic",
    "analog",
    "mixed-signal",
    "mixed signal",
    "power electronics",
    "power supply",
    "dc-dc",
    "buck",
    "boost",
    "rf",
    "antenna",
    "signal integrity",
    "emi",
    "emc",
    "verification",
    "validation",
    "test engineer",
    "lab engineer",
    "board bring-up",
    "board bring up",
    "fpga",
    "microcontroller",
    "stm32",
    "esp32",
    "fae",
    "field application engineer",
];

/// Obvious exclusions to reduce noise.
pub const EXCLUDE_KEYWORDS: &[&str] = &[
    "marketing",
    "sales",
    "account executive",
    "recruiter",
    "talent acquisition",
    "hr",
    "human resources",
    "product marketing",
];

/// Whole-word match so short keywords like "rf" or "hr" do not fire inside
/// unrelated words ("performance", "through").
fn keyword_regex(keyword: &str) -> Regex {
    Regex::new(&format!(r"\b{}\b", regex::escape(keyword))).unwrap()
}

fn include_patterns() -> &'static [(&'static str, Regex)] {
    static PATTERNS: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        INCLUDE_KEYWORDS
            .iter()
            .map(|kw| (*kw, keyword_regex(kw)))
            .collect()
    })
}

fn exclude_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| EXCLUDE_KEYWORDS.iter().map(|kw| keyword_regex(kw)).collect())
}

/// Heuristic filter: include electronics-related roles, exclude obvious
/// noise. Exclusions are checked first. Case-insensitive over
/// title + description.
pub fn is_electronics_role(title: &str, description: &str) -> bool {
    let blob = format!("{}\n{}", title, description).to_lowercase();

    if exclude_patterns().iter().any(|re| re.is_match(&blob)) {
        return false;
    }

    include_patterns().iter().any(|(_, re)| re.is_match(&blob))
}

/// Extract the set of include keywords present in the text, first-seen
/// order, with spelling variants collapsed for downstream consistency.
pub fn extract_function_keywords(text: &str) -> Vec<String> {
    let t = text.to_lowercase();
    let hits = include_patterns()
        .iter()
        .filter(|(_, re)| re.is_match(&t))
        .map(|(kw, _)| normalize_variant(kw));
    uniq_preserve_order(hits)
}

fn normalize_variant(keyword: &str) -> String {
    match keyword {
        "mixed signal" => "mixed-signal".to_string(),
        "board bring up" => "board bring-up".to_string(),
        other => other.to_string(),
    }
}
