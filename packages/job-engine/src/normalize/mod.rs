//! Normalization heuristics.
//!
//! Deterministic parsing logic: the electronics relevance predicate,
//! seniority inference, function-keyword extraction, and requirements
//! extraction. Centralizing the heuristics keeps the pipeline predictable
//! and testable; any of them could later be replaced by a learned model
//! without touching the sources.

pub mod relevance;
pub mod requirements;
pub mod seniority;

pub use relevance::{extract_function_keywords, is_electronics_role, INCLUDE_KEYWORDS};
pub use requirements::extract_requirements;
pub use seniority::infer_seniority;
