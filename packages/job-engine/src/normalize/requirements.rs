//! Requirements extraction from job descriptions.

use regex::Regex;
use std::sync::OnceLock;

use crate::util::uniq_preserve_order;

const MAX_ITEMS: usize = 12;

fn bullet_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*(?:[-*•]|\d+\.)\s+(.*)$").unwrap())
}

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// Extract bullet-like lines from a description as a naive requirements
/// list. Lines following a bullet are treated as continuations of it.
///
/// Works reasonably well for posts that include bullet lists; section
/// detection ("Requirements", "What you'll do") would be the next step up,
/// but this is a good deterministic baseline.
pub fn extract_requirements(description: &str) -> Vec<String> {
    if description.trim().is_empty() {
        return Vec::new();
    }

    let cleaned = description.replace('\r', "");
    let mut items: Vec<String> = Vec::new();
    let mut current: Option<String> = None;

    for line in cleaned.lines() {
        if let Some(cap) = bullet_re().captures(line) {
            if let Some(done) = current.take() {
                items.push(done);
            }
            current = Some(cap[1].to_string());
        } else if let Some(cur) = current.as_mut() {
            cur.push(' ');
            cur.push_str(line.trim());
        }
    }
    if let Some(done) = current.take() {
        items.push(done);
    }

    // Keep items short and readable.
    let readable = items
        .into_iter()
        .map(|it| whitespace_re().replace_all(it.trim(), " ").to_string())
        .filter(|it| (3..=220).contains(&it.len()));

    let mut out = uniq_preserve_order(readable);
    out.truncate(MAX_ITEMS);
    out
}
