//! Thin GitHub REST API client for release and asset operations.
//!
//! Only what the asset manager needs: fetch one release by tag and delete
//! one asset by id. No pagination, no rate-limit handling; authentication
//! is a bearer token if one is supplied. A 404 on a release lookup is a
//! first-class "does not exist" result, not an error.

use serde::Deserialize;
use tracing::debug;

use crate::constants::{GITHUB_API_ROOT, HTTP_TIMEOUT, USER_AGENT};
use crate::core::{ReleaseError, Result};

/// A GitHub release, reduced to the fields the asset manager reads.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// The git tag the release was published under.
    pub tag_name: String,
    /// Assets attached to the release.
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

/// One release asset.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    /// Asset identifier used for deletion.
    pub id: u64,
    /// File name of the asset.
    pub name: String,
    /// Size in bytes.
    #[serde(default)]
    pub size: u64,
}

/// Client for the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    token: Option<String>,
    api_root: String,
}

impl GitHubClient {
    /// Create a client with the crate-wide timeout and User-Agent.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(token: Option<String>) -> Result<Self> {
        let http =
            reqwest::Client::builder().timeout(HTTP_TIMEOUT).user_agent(USER_AGENT).build()?;
        Ok(Self { http, token, api_root: GITHUB_API_ROOT.to_string() })
    }

    /// Fetch the release published under `tag`, or `None` if no release
    /// with that tag exists.
    ///
    /// # Errors
    ///
    /// Any non-404 failure (network error or unexpected status) is
    /// surfaced unchanged; callers abort their current batch on it.
    pub async fn release_by_tag(
        &self,
        org: &str,
        repo: &str,
        tag: &str,
    ) -> Result<Option<Release>> {
        let url = format!("{}/repos/{org}/{repo}/releases/tags/{tag}", self.api_root);
        let response = self.request(reqwest::Method::GET, &url).send().await?;

        match response.status() {
            reqwest::StatusCode::OK => Ok(Some(response.json::<Release>().await?)),
            reqwest::StatusCode::NOT_FOUND => {
                debug!("no release for tag {tag} in {org}/{repo}");
                Ok(None)
            }
            status => Err(ReleaseError::GitHubStatus { status: status.as_u16(), url }),
        }
    }

    /// Delete a single release asset by its identifier.
    ///
    /// # Errors
    ///
    /// Any non-success status is an error; deleting an asset that does not
    /// exist is not a valid no-op.
    pub async fn delete_asset(&self, org: &str, repo: &str, asset_id: u64) -> Result<()> {
        let url = format!("{}/repos/{org}/{repo}/releases/assets/{asset_id}", self.api_root);
        let response = self.request(reqwest::Method::DELETE, &url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReleaseError::GitHubStatus { status: status.as_u16(), url });
        }
        Ok(())
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        let mut builder = self.http.request(method, url);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_deserializes_with_missing_assets() {
        let release: Release = serde_json::from_str(r#"{"tag_name": "v1.25.3+rke2r1"}"#).unwrap();
        assert_eq!(release.tag_name, "v1.25.3+rke2r1");
        assert!(release.assets.is_empty());
    }

    #[test]
    fn release_deserializes_assets() {
        let raw = r#"{
            "tag_name": "v1.25.3+k3s1",
            "assets": [
                {"id": 1, "name": "k3s", "size": 65011712},
                {"id": 2, "name": "k3s-airgap-images-amd64.tar"}
            ]
        }"#;
        let release: Release = serde_json::from_str(raw).unwrap();
        assert_eq!(release.assets.len(), 2);
        assert_eq!(release.assets[0].id, 1);
        assert_eq!(release.assets[1].size, 0);
    }
}
