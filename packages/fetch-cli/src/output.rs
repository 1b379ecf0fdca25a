//! Output writer: serialize the final record list to a JSON file.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use job_engine::JobOpportunity;

/// Write records as a pretty-printed UTF-8 JSON array, creating parent
/// directories as needed. Any failure here is fatal for the run.
pub fn write_jobs(path: &Path, jobs: &[JobOpportunity]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let data = serde_json::to_string_pretty(jobs).context("Failed to serialize jobs")?;
    fs::write(path, data).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}
