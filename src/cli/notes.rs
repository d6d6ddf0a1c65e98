//! The `notes` subcommand: generate a release notes document.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use crate::changelog;
use crate::core::Distribution;
use crate::fetch::TextFetcher;
use crate::notes;

/// Generate release notes for a distribution milestone.
///
/// The changelog is supplied as a JSON file (an array of
/// `{title, number, url, note}` objects) produced by whatever diffs the
/// source-control history between the two milestones; retrieving it is not
/// this tool's job.
#[derive(Args, Debug)]
pub struct NotesCommand {
    /// Distribution to render notes for.
    #[arg(value_enum)]
    distribution: Distribution,

    /// Target milestone, e.g. `v1.25.3+k3s1`. May carry an `-rcN` suffix;
    /// upstream files are read at this exact ref while the document shows
    /// the stripped form.
    #[arg(short, long)]
    milestone: String,

    /// Previous milestone the changelog window starts at.
    #[arg(short, long)]
    prev_milestone: String,

    /// Path to the changelog JSON file.
    #[arg(short, long)]
    changelog: PathBuf,

    /// Write the document here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl NotesCommand {
    /// Run the full resolution and rendering pipeline.
    pub async fn execute(self) -> Result<()> {
        let changes = changelog::load_changelog(&self.changelog)?;
        info!(
            "generating {} release notes for {} ({} changelog entries)",
            self.distribution,
            self.milestone,
            changes.len()
        );

        let fetcher = TextFetcher::new().context("failed to construct HTTP client")?;
        let document = notes::generate_release_notes(
            &fetcher,
            self.distribution,
            &self.milestone,
            &self.prev_milestone,
            changes,
        )
        .await?;

        match self.output {
            Some(path) => {
                std::fs::write(&path, &document)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                info!("wrote release notes to {}", path.display());
            }
            None => print!("{document}"),
        }

        Ok(())
    }
}
