//! Release asset management.
//!
//! Existence checks, asset-count verification, listing, and deletion for
//! GitHub releases, keyed by (organization, repository, tag). Independent
//! of the rendering pipeline; shares only the GitHub client and the
//! organization-resolution helper.
//!
//! Batch operations iterate their input sequentially and abort on the
//! first non-404 error, leaving later tags unprocessed. A 404 for a tag is
//! always a valid `false`/empty result, never an abort.

use std::collections::BTreeMap;

use tracing::debug;

use crate::core::{ReleaseError, Result};
use crate::github::{GitHubClient, Release, ReleaseAsset};

/// Expected asset counts per repository family.
///
/// A complete release of each family publishes exactly this many assets;
/// any other count means the release pipeline is still running or failed
/// partway. Extending verification to a new repository means adding a row
/// here, not a branch in the control flow.
const EXPECTED_ASSET_COUNTS: &[(&str, usize)] =
    &[("rke2", 50), ("k3s", 18), ("rke2-packaging", 23)];

/// The expected asset count for `repo`, or `None` for repositories with no
/// verification table entry.
pub fn expected_asset_count(repo: &str) -> Option<usize> {
    EXPECTED_ASSET_COUNTS.iter().find(|(name, _)| *name == repo).map(|(_, count)| *count)
}

/// Resolve the GitHub organization owning `repo`.
///
/// The k3s repository lives under `k3s-io`; everything in the rke2 family
/// lives under `rancher`.
///
/// # Errors
///
/// Returns [`ReleaseError::UnknownOrg`] for repositories outside the two
/// known families.
pub fn org_from_repo(repo: &str) -> Result<&'static str> {
    if repo == "k3s" {
        Ok("k3s-io")
    } else if repo.starts_with("rke2") {
        Ok("rancher")
    } else {
        Err(ReleaseError::UnknownOrg { repo: repo.to_string() })
    }
}

/// Check whether each tag exists as a release in `org/repo`.
///
/// A missing release is a valid `false` result. Any other API failure
/// aborts the whole batch.
///
/// # Errors
///
/// Returns the first non-404 API error encountered.
pub async fn check_upstream_releases(
    client: &GitHubClient,
    org: &str,
    repo: &str,
    tags: &[String],
) -> Result<BTreeMap<String, bool>> {
    let mut releases = BTreeMap::new();

    for tag in tags {
        let exists = client.release_by_tag(org, repo, tag).await?.is_some();
        releases.insert(tag.clone(), exists);
    }

    Ok(releases)
}

/// Verify that each tag's release carries the expected number of assets
/// for the repository family.
///
/// Every non-empty input tag gets an explicit boolean: `true` only when
/// the release exists and its asset count matches the table exactly;
/// `false` for a missing release, a count mismatch, or a repository with
/// no table entry. Empty tags are skipped.
///
/// # Errors
///
/// Returns [`ReleaseError::NoTagsProvided`] for an empty tag list,
/// [`ReleaseError::UnknownOrg`] for an unresolvable repository, or the
/// first non-404 API error.
pub async fn verify_assets(
    client: &GitHubClient,
    repo: &str,
    tags: &[String],
) -> Result<BTreeMap<String, bool>> {
    if tags.is_empty() {
        return Err(ReleaseError::NoTagsProvided);
    }
    let org = org_from_repo(repo)?;
    let expected = expected_asset_count(repo);

    let mut results = BTreeMap::new();

    for tag in tags {
        if tag.is_empty() {
            continue;
        }

        let release = client.release_by_tag(org, repo, tag).await?;
        let verified = release_verified(release.as_ref(), expected);
        if !verified {
            let count = release.as_ref().map(|release| release.assets.len());
            debug!("release {tag} failed verification: {count:?} assets, expected {expected:?}");
        }
        results.insert(tag.clone(), verified);
    }

    Ok(results)
}

/// The verification verdict for one release: it exists and its asset count
/// matches the expected count exactly. A missing release, a count
/// mismatch, and a repository with no table entry all verify as `false`.
fn release_verified(release: Option<&Release>, expected: Option<usize>) -> bool {
    match release {
        Some(release) => expected == Some(release.assets.len()),
        None => false,
    }
}

/// List all assets attached to the release for `tag`.
///
/// A tag with no release yields an empty list.
///
/// # Errors
///
/// Returns [`ReleaseError::InvalidTag`] for an empty tag,
/// [`ReleaseError::UnknownOrg`] for an unresolvable repository, or any
/// non-404 API error.
pub async fn list_assets(
    client: &GitHubClient,
    repo: &str,
    tag: &str,
) -> Result<Vec<ReleaseAsset>> {
    let org = org_from_repo(repo)?;
    if tag.is_empty() {
        return Err(ReleaseError::InvalidTag);
    }

    Ok(client
        .release_by_tag(org, repo, tag)
        .await?
        .map(|release| release.assets)
        .unwrap_or_default())
}

/// Delete every asset attached to the release for `tag`, returning the
/// number deleted.
///
/// Deletion is not transactional: a failure partway through leaves prior
/// deletions applied and aborts the remainder. A tag with no release
/// deletes nothing.
///
/// # Errors
///
/// Returns [`ReleaseError::InvalidTag`] for an empty tag,
/// [`ReleaseError::UnknownOrg`] for an unresolvable repository, or the
/// first API error during lookup or deletion.
pub async fn delete_assets_by_release(
    client: &GitHubClient,
    repo: &str,
    tag: &str,
) -> Result<usize> {
    let org = org_from_repo(repo)?;
    if tag.is_empty() {
        return Err(ReleaseError::InvalidTag);
    }

    let Some(release) = client.release_by_tag(org, repo, tag).await? else {
        return Ok(0);
    };

    let mut deleted = 0;
    for asset in &release.assets {
        client.delete_asset(org, repo, asset.id).await?;
        debug!("deleted asset {} ({})", asset.name, asset.id);
        deleted += 1;
    }

    Ok(deleted)
}

/// Delete a single release asset by its identifier.
///
/// The tag is required for symmetry with the other operations and
/// validated even though the deletion endpoint is keyed by asset id alone.
///
/// # Errors
///
/// Returns [`ReleaseError::InvalidTag`] for an empty tag,
/// [`ReleaseError::UnknownOrg`] for an unresolvable repository, or any
/// API error.
pub async fn delete_asset_by_id(
    client: &GitHubClient,
    repo: &str,
    tag: &str,
    asset_id: u64,
) -> Result<()> {
    let org = org_from_repo(repo)?;
    if tag.is_empty() {
        return Err(ReleaseError::InvalidTag);
    }

    client.delete_asset(org, repo, asset_id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_counts_cover_the_three_families() {
        assert_eq!(expected_asset_count("rke2"), Some(50));
        assert_eq!(expected_asset_count("k3s"), Some(18));
        assert_eq!(expected_asset_count("rke2-packaging"), Some(23));
        assert_eq!(expected_asset_count("k3d"), None);
    }

    fn release_with_assets(count: u64) -> Release {
        let assets = (0..count)
            .map(|id| ReleaseAsset { id, name: format!("asset-{id}"), size: 0 })
            .collect();
        Release { tag_name: "v1.25.3+rke2r1".into(), assets }
    }

    #[test]
    fn verification_requires_exact_asset_count() {
        // 50 assets verifies an rke2 release; 49 or 51 does not.
        let expected = expected_asset_count("rke2");
        assert!(release_verified(Some(&release_with_assets(50)), expected));
        assert!(!release_verified(Some(&release_with_assets(49)), expected));
        assert!(!release_verified(Some(&release_with_assets(51)), expected));
    }

    #[test]
    fn missing_release_fails_verification() {
        assert!(!release_verified(None, expected_asset_count("rke2")));
    }

    #[test]
    fn repo_without_table_entry_fails_verification() {
        assert!(!release_verified(Some(&release_with_assets(10)), expected_asset_count("k3d")));
    }

    #[test]
    fn org_resolution() {
        assert_eq!(org_from_repo("k3s").unwrap(), "k3s-io");
        assert_eq!(org_from_repo("rke2").unwrap(), "rancher");
        assert_eq!(org_from_repo("rke2-packaging").unwrap(), "rancher");
        assert!(matches!(
            org_from_repo("unknown"),
            Err(ReleaseError::UnknownOrg { repo }) if repo == "unknown"
        ));
    }

    #[tokio::test]
    async fn verify_assets_rejects_empty_tag_list() {
        let client = GitHubClient::new(None).unwrap();
        let result = verify_assets(&client, "rke2", &[]).await;
        assert!(matches!(result, Err(ReleaseError::NoTagsProvided)));
    }

    #[tokio::test]
    async fn list_assets_rejects_empty_tag() {
        let client = GitHubClient::new(None).unwrap();
        let result = list_assets(&client, "rke2", "").await;
        assert!(matches!(result, Err(ReleaseError::InvalidTag)));
    }

    #[tokio::test]
    async fn delete_assets_rejects_unknown_repo() {
        let client = GitHubClient::new(None).unwrap();
        let result = delete_assets_by_release(&client, "not-a-repo", "v1.0.0").await;
        assert!(matches!(result, Err(ReleaseError::UnknownOrg { .. })));
    }
}
