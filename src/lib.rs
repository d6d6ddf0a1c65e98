//! distro-release - release notes and version metadata tooling for the K3s
//! and RKE2 Kubernetes distributions.
//!
//! The core of this crate is the version-resolution and note-rendering
//! pipeline: scrapers that pull component versions out of loosely
//! structured upstream text artifacts, a context builder that folds those
//! versions into one complete set of named values, and a template engine
//! that turns the context plus a changelog into a publishable Markdown
//! document. A failed scrape is never fatal: the field renders blank and
//! publication proceeds.
//!
//! # Pipeline
//!
//! ```text
//! milestone + previous milestone + distribution
//!   └── resolvers (one fetch + extract round trip each, sequential)
//!         └── ComponentVersions
//!               └── ReleaseNotesContext (+ changelog entries)
//!                     └── NotesRenderer → Markdown document
//! ```
//!
//! # Core Modules
//!
//! - [`fetch`] - Single-shot HTTP text fetching with a bounded timeout
//! - [`extract`] - Marker-plus-regex line extraction, first match wins
//! - [`resolvers`] - One resolver per upstream artifact kind
//! - [`notes`] - Context assembly and pipeline orchestration
//! - [`templating`] - Tera renderer, custom filters, embedded templates
//!
//! # Supporting Modules
//!
//! - [`assets`] - GitHub release asset checks, verification, and deletion
//! - [`github`] - Thin GitHub REST client shared by the asset operations
//! - [`changelog`] - The externally supplied changelog input
//! - [`cli`] - Command-line wiring
//! - [`core`] - Error taxonomy and the [`Distribution`] enum
//!
//! # Example
//!
//! ```rust,no_run
//! use distro_release::core::Distribution;
//! use distro_release::fetch::TextFetcher;
//! use distro_release::notes;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let fetcher = TextFetcher::new()?;
//! let document = notes::generate_release_notes(
//!     &fetcher,
//!     Distribution::K3s,
//!     "v1.25.3+k3s1",
//!     "v1.25.2+k3s1",
//!     Vec::new(),
//! )
//! .await?;
//! println!("{document}");
//! # Ok(())
//! # }
//! ```
//!
//! [`Distribution`]: crate::core::Distribution

pub mod assets;
pub mod changelog;
pub mod cli;
pub mod constants;
pub mod core;
pub mod extract;
pub mod fetch;
pub mod github;
pub mod notes;
pub mod resolvers;
pub mod templating;

pub use crate::core::{Distribution, ReleaseError, Result};
