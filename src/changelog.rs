//! Changelog entries consumed by the renderer.
//!
//! Retrieving the changelog from source-control history is an external
//! concern; this crate consumes it as an already-ordered sequence. The CLI
//! accepts it as a JSON array so that whatever produced it (a history diff
//! between two refs) stays outside the pipeline.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One changelog entry, in source-control history order.
///
/// Ordering is render-significant: entries appear in the document in the
/// order they were supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangelogEntry {
    /// PR or commit title, capitalized at render time.
    pub title: String,
    /// PR number referenced by the rendered bullet.
    pub number: u64,
    /// Link target for the PR reference.
    pub url: String,
    /// Free-form release note body. May span multiple lines; blank lines
    /// are skipped when rendering.
    #[serde(default)]
    pub note: String,
}

/// Load a changelog from a JSON file containing an array of entries.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array of
/// changelog entries.
pub fn load_changelog(path: &Path) -> Result<Vec<ChangelogEntry>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read changelog file: {}", path.display()))?;
    let entries: Vec<ChangelogEntry> = serde_json::from_str(&raw)
        .with_context(|| format!("invalid changelog JSON in {}", path.display()))?;
    Ok(entries)
}
