//! Command-line interface for distro-release.
//!
//! Thin wiring only: each subcommand parses its arguments, builds the
//! clients it needs, and calls into the library. The pipeline and asset
//! logic live in [`crate::notes`] and [`crate::assets`].
//!
//! # Available Commands
//!
//! - `notes` - Generate a release notes document for a milestone
//! - `check-upstream` - Check tags for release existence
//! - `verify-assets` - Verify release asset counts against the expected table
//! - `list-assets` - List assets attached to one release
//! - `delete-assets` - Delete a release's assets, or one asset by id

mod assets;
mod notes;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

pub use assets::{
    CheckUpstreamCommand, DeleteAssetsCommand, ListAssetsCommand, VerifyAssetsCommand,
};
pub use notes::NotesCommand;

/// Release notes and release asset tooling for K3s and RKE2.
#[derive(Parser)]
#[command(name = "distro-release", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging, including swallowed fetch failures.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors.
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a release notes document for a milestone.
    Notes(NotesCommand),
    /// Check whether tags exist as upstream releases.
    CheckUpstream(CheckUpstreamCommand),
    /// Verify release asset counts.
    VerifyAssets(VerifyAssetsCommand),
    /// List all assets of a release.
    ListAssets(ListAssetsCommand),
    /// Delete all assets of a release, or one asset by id.
    DeleteAssets(DeleteAssetsCommand),
}

impl Cli {
    /// Initialize logging and run the selected subcommand.
    pub async fn execute(self) -> Result<()> {
        self.init_tracing();

        match self.command {
            Commands::Notes(cmd) => cmd.execute().await,
            Commands::CheckUpstream(cmd) => cmd.execute().await,
            Commands::VerifyAssets(cmd) => cmd.execute().await,
            Commands::ListAssets(cmd) => cmd.execute().await,
            Commands::DeleteAssets(cmd) => cmd.execute().await,
        }
    }

    fn init_tracing(&self) {
        let filter = if self.verbose {
            EnvFilter::new("distro_release=debug")
        } else if self.quiet {
            EnvFilter::new("error")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        };
        let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
    }
}
