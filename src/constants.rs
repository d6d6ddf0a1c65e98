//! Global constants used throughout the distro-release codebase.

use std::time::Duration;

/// Timeout applied to every outbound HTTP request.
///
/// Both the raw-text fetcher and the GitHub API client use this value.
/// There are no retries; a request that times out is treated the same as
/// any other fetch failure.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(15);

/// User-Agent header sent with every HTTP request.
///
/// GitHub rejects API requests without one.
pub const USER_AGENT: &str = concat!("distro-release/", env!("CARGO_PKG_VERSION"));

/// Base URL for raw file content on GitHub.
pub const RAW_CONTENT_ROOT: &str = "https://raw.githubusercontent.com";

/// Base URL for the GitHub REST API.
pub const GITHUB_API_ROOT: &str = "https://api.github.com";
