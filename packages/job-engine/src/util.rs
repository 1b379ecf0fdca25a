//! Small helpers shared across the engine.

use sha2::{Digest, Sha256};

/// Deterministic identifier from string parts: sha256 over entries joined
/// with `|`, trimmed. Same parts always yield the same id.
pub fn stable_id(parts: &[&str]) -> String {
    let joined = parts
        .iter()
        .map(|p| p.trim())
        .collect::<Vec<_>>()
        .join("|");

    let mut hasher = Sha256::new();
    hasher.update(joined.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Deduplicate while preserving first-seen order. Comparison is
/// trimmed + lowercased; empty entries are dropped.
pub fn uniq_preserve_order<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for item in items {
        let item = item.into();
        let key = item.trim().to_lowercase();
        if key.is_empty() || !seen.insert(key) {
            continue;
        }
        out.push(item);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_id_is_deterministic() {
        let a = stable_id(&["remotive", "https://example.com/j/1"]);
        let b = stable_id(&["remotive", "https://example.com/j/1"]);
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn stable_id_trims_parts() {
        let a = stable_id(&["remotive ", " https://example.com/j/1"]);
        let b = stable_id(&["remotive", "https://example.com/j/1"]);
        assert_eq!(a, b);
    }

    #[test]
    fn stable_id_differs_per_source() {
        let a = stable_id(&["remotive", "https://example.com/j/1"]);
        let b = stable_id(&["arbeitnow", "https://example.com/j/1"]);
        assert_ne!(a, b);
    }

    #[test]
    fn uniq_preserves_first_seen() {
        let out = uniq_preserve_order(vec!["FPGA", "fpga ", "embedded", "", "FPGA"]);
        assert_eq!(out, vec!["FPGA", "embedded"]);
    }
}
