//! Seniority inference from job titles.

use regex::Regex;
use std::sync::OnceLock;

use crate::types::Seniority;

/// Conservative patterns, checked in order; first match wins.
fn patterns() -> &'static [(Regex, Seniority)] {
    static PATTERNS: OnceLock<Vec<(Regex, Seniority)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            (r"\bintern\b", Seniority::Intern),
            (r"\b(entry\s*level|junior|jr\.?|associate)\b", Seniority::Junior),
            (r"\b(mid\s*level|intermediate)\b", Seniority::Mid),
            (r"\b(senior|sr\.?|lead)\b", Seniority::Senior),
            (r"\bstaff\b", Seniority::Staff),
            (r"\b(principal|architect)\b", Seniority::Principal),
            (r"\b(manager|engineering manager)\b", Seniority::Manager),
            (r"\bdirector\b", Seniority::Director),
            (r"\b(vice president|vp)\b", Seniority::Vp),
            (r"\b(chief|cxo|cto|ceo|cpo|cfo)\b", Seniority::Cxo),
        ]
        .into_iter()
        .map(|(pat, level)| (Regex::new(pat).unwrap(), level))
        .collect()
    })
}

/// Infer seniority from the job title. Returns `Unknown` when no pattern
/// matches.
pub fn infer_seniority(title: &str) -> Seniority {
    let t = title.to_lowercase();
    for (re, level) in patterns() {
        if re.is_match(&t) {
            return *level;
        }
    }
    Seniority::Unknown
}
