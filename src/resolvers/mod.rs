//! Source-specific version resolvers.
//!
//! Each resolver extracts one version field from one well-known upstream
//! text artifact, addressed by (distribution, branch ref, name):
//!
//! - [`gomod_version`] - the dependency manifest (`go.mod`), preferring
//!   `replace` directives over `require` entries
//! - [`build_script_version`] - `VAR="vX.Y.Z"` lines in `scripts/version.sh`
//! - [`dockerfile_version`] - hardened chart/image pins in the RKE2
//!   `Dockerfile`; not applicable to k3s
//! - [`image_tag_version`] - `name:version` lines in the packaged image list
//! - [`sqlite_binding_version`] - the `SQLITE_VERSION` literal embedded in
//!   the go-sqlite3 binding header
//!
//! A resolver never targets more than one upstream file and never fails:
//! any fetch or extraction miss yields `None`, which the context builder
//! renders as an empty field.

mod gomod;

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::constants::RAW_CONTENT_ROOT;
use crate::core::Distribution;
use crate::extract;
use crate::fetch::TextFetcher;

/// One resolver invocation: which distribution's upstream repository to
/// read, at which branch, tag, or milestone ref, and which library,
/// variable, or image name to look for.
///
/// Constructed per call; a query never spans multiple upstream files.
#[derive(Debug, Clone)]
pub struct VersionQuery {
    /// Distribution whose upstream repository is scraped.
    pub distribution: Distribution,
    /// Branch, tag, or milestone ref to read the repository at. For a
    /// release-candidate milestone this is the original, un-stripped ref.
    pub branch_ref: String,
    /// Library path, shell variable, chart, or image name to search for.
    pub name: String,
}

impl VersionQuery {
    /// Build a query for the given distribution, ref, and name.
    pub fn new(
        distribution: Distribution,
        branch_ref: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self { distribution, branch_ref: branch_ref.into(), name: name.into() }
    }

    /// Raw-content URL for `path` at this query's repository and ref.
    fn raw_url(&self, path: &str) -> String {
        format!(
            "{RAW_CONTENT_ROOT}/{repo}/{branch}/{path}",
            repo = self.distribution.upstream_repo(),
            branch = self.branch_ref
        )
    }
}

static BUILD_SCRIPT_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<version>v[\d\.]+(-k3s.\w*)?)").unwrap());

static DOCKERFILE_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:FROM|RUN)\s(?:CHART_VERSION="|[\w-]+/[\w-]+:)(?P<version>.*?)([0-9][0-9])?(-build.*)?"?\s"#)
        .unwrap()
});

static IMAGE_TAG_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":(.*)(-build.*)?").unwrap());

static QUOTED_VALUE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""(.*)""#).unwrap());

/// Resolve a library version from the distribution's `go.mod` at the
/// queried ref. `replace` directives win over `require` entries.
pub async fn gomod_version(fetcher: &TextFetcher, query: &VersionQuery) -> Option<String> {
    let url = query.raw_url("go.mod");
    let body = fetcher.fetch_text(&url).await?;
    let version = gomod::module_version(&body, &query.name);
    if version.is_none() {
        debug!("library {} not found in {url}", query.name);
    }
    version
}

/// Resolve a version from `VAR="vX.Y.Z"`-shaped lines in the
/// distribution's `scripts/version.sh`.
pub async fn build_script_version(fetcher: &TextFetcher, query: &VersionQuery) -> Option<String> {
    let url = query.raw_url("scripts/version.sh");
    let body = fetcher.fetch_text(&url).await?;
    extract::first_capture(&body, &query.name, &BUILD_SCRIPT_VERSION)
}

/// Resolve a hardened chart or image version pinned in the RKE2
/// `Dockerfile`.
///
/// The artifact does not exist for the k3s family, so a k3s query resolves
/// to `None` immediately without a network round trip. This is a no-op by
/// design, not a failure.
pub async fn dockerfile_version(fetcher: &TextFetcher, query: &VersionQuery) -> Option<String> {
    if query.distribution == Distribution::K3s {
        return None;
    }
    let url = query.raw_url("Dockerfile");
    let body = fetcher.fetch_text(&url).await?;
    extract::first_capture(&body, &query.name, &DOCKERFILE_VERSION)
}

/// Resolve an image version from the distribution's packaged image list
/// (`scripts/airgap/image-list.txt` for k3s, `scripts/build-images` for
/// RKE2), stripping any `-build...` suffix down to the upstream version.
pub async fn image_tag_version(fetcher: &TextFetcher, query: &VersionQuery) -> Option<String> {
    let path = match query.distribution {
        Distribution::K3s => "scripts/airgap/image-list.txt",
        Distribution::Rke2 => "scripts/build-images",
    };
    let url = query.raw_url(path);
    let body = fetcher.fetch_text(&url).await?;
    extract_image_tag(&body, &query.name)
}

/// Resolve the SQLite version embedded in the go-sqlite3 binding header at
/// the given go-sqlite3 tag.
///
/// This is the one resolver keyed off another resolver's output: the tag is
/// the version `gomod_version` reported for `go-sqlite3`. An empty tag
/// resolves to `None` without a fetch.
pub async fn sqlite_binding_version(fetcher: &TextFetcher, sqlite_tag: &str) -> Option<String> {
    if sqlite_tag.is_empty() {
        return None;
    }
    let url = format!("{RAW_CONTENT_ROOT}/mattn/go-sqlite3/{sqlite_tag}/sqlite3-binding.h");
    let body = fetcher.fetch_text(&url).await?;
    extract::first_capture(&body, "SQLITE_VERSION", &QUOTED_VALUE)
}

/// Pull `image:version` out of an image-list line, stripping internal build
/// metadata: a captured version carrying a `-build` marker is cut at the
/// first hyphen, leaving the upstream-facing version.
fn extract_image_tag(body: &str, image: &str) -> Option<String> {
    let captured = extract::first_capture(body, image, &IMAGE_TAG_VERSION)?;
    if captured.contains("-build") {
        return captured.split('-').next().map(str::to_string);
    }
    Some(captured)
}
