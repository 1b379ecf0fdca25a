//! Core data types: the normalized record and the fetch configuration.

pub mod config;
pub mod opportunity;

pub use config::FetchConfig;
pub use opportunity::{JobOpportunity, Seniority};
