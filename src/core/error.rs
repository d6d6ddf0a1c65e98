//! Error handling for distro-release.
//!
//! The error taxonomy follows one rule: an upstream text source being
//! unavailable is never an error. Fetch failures, non-200 responses, and
//! extraction misses all degrade to an empty version field and are logged at
//! debug level where they occur. Everything in this module is the other kind
//! of failure (bad input, a GitHub API error that isn't a plain 404, or a
//! structural template problem) and propagates to the caller as a typed
//! [`ReleaseError`].

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ReleaseError>;

/// The main error type for distro-release operations.
///
/// # Error Categories
///
/// - **Input validation**: [`InvalidTag`], [`NoTagsProvided`], [`UnknownOrg`],
///   reported before any network call is made.
/// - **GitHub API**: [`GitHubStatus`], [`Http`]; any non-404 failure talking
///   to the release platform aborts the current operation.
/// - **Template-fatal**: [`Template`], [`InvalidSemver`]; a template parse
///   error at startup or an unparseable semantic version fed to the
///   major-minor helper aborts the whole render.
///
/// [`InvalidTag`]: ReleaseError::InvalidTag
/// [`NoTagsProvided`]: ReleaseError::NoTagsProvided
/// [`UnknownOrg`]: ReleaseError::UnknownOrg
/// [`GitHubStatus`]: ReleaseError::GitHubStatus
/// [`Http`]: ReleaseError::Http
/// [`Template`]: ReleaseError::Template
/// [`InvalidSemver`]: ReleaseError::InvalidSemver
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// An empty or otherwise unusable release tag was supplied.
    #[error("invalid tag provided")]
    InvalidTag,

    /// A batch asset operation was invoked with an empty tag list.
    #[error("no tags provided")]
    NoTagsProvided,

    /// The repository name does not map to a known GitHub organization.
    ///
    /// Only the k3s and rke2 repository families are recognized; anything
    /// else cannot be resolved to an owner for API calls.
    #[error("cannot determine organization for repository '{repo}'")]
    UnknownOrg {
        /// The repository name that failed to resolve.
        repo: String,
    },

    /// The GitHub API returned a non-success status that is not a 404.
    ///
    /// A 404 for a release tag is a valid "does not exist" result and is
    /// never surfaced through this variant.
    #[error("GitHub API request failed with status {status}: {url}")]
    GitHubStatus {
        /// HTTP status code of the failed response.
        status: u16,
        /// The request URL, for troubleshooting.
        url: String,
    },

    /// A network-level failure while talking to the GitHub API.
    #[error("GitHub API request failed")]
    Http(#[from] reqwest::Error),

    /// A version string could not be parsed as a semantic version.
    ///
    /// Raised by the major-minor template helper, the one hard failure
    /// point in the rendering pipeline. During a render it is carried
    /// inside the resulting [`Template`] error's message.
    ///
    /// [`Template`]: ReleaseError::Template
    #[error("'{version}' is not a valid semantic version")]
    InvalidSemver {
        /// The offending version string.
        version: String,
    },

    /// Template parsing or rendering failed.
    #[error("template error")]
    Template(#[from] tera::Error),
}
