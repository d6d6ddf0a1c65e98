//! Release notes assembly.
//!
//! This module orchestrates the version-resolution and note-rendering
//! pipeline: fan out to every source-specific resolver for the target
//! distribution, fold the results into a [`ReleaseNotesContext`], and hand
//! that plus the changelog to the template renderer.
//!
//! Resolvers run sequentially; the operation is interactive and the simple
//! sum-of-latencies model is an accepted trade-off. A resolver miss never
//! blocks note publication; the field renders blank.

pub mod context;

pub use context::{ComponentVersions, ReleaseNotesContext, build_context, strip_rc_suffix};

use crate::changelog::ChangelogEntry;
use crate::core::{Distribution, Result};
use crate::fetch::TextFetcher;
use crate::resolvers::{
    self, VersionQuery, build_script_version, dockerfile_version, gomod_version, image_tag_version,
};
use crate::templating::NotesRenderer;

/// Scrape every component version for `distribution` at `branch_ref`.
///
/// The ref is used exactly as supplied: for a release-candidate milestone
/// that means the suffixed form, since the upstream repository is tagged
/// with it. Any individual miss yields an empty string.
pub async fn resolve_components(
    fetcher: &TextFetcher,
    distribution: Distribution,
    branch_ref: &str,
) -> ComponentVersions {
    let query = |name: &str| VersionQuery::new(distribution, branch_ref, name);

    let sqlite_tag =
        gomod_version(fetcher, &query("go-sqlite3")).await.unwrap_or_default();
    let sqlite = resolvers::sqlite_binding_version(fetcher, &sqlite_tag).await.unwrap_or_default();

    ComponentVersions {
        etcd_rke2: build_script_version(fetcher, &query("ETCD_VERSION")).await.unwrap_or_default(),
        etcd_k3s: gomod_version(fetcher, &query("etcd/api/v3")).await.unwrap_or_default(),
        containerd_k3s: build_script_version(fetcher, &query("VERSION_CONTAINERD"))
            .await
            .unwrap_or_default(),
        containerd_gomod: gomod_version(fetcher, &query("containerd/containerd"))
            .await
            .unwrap_or_default(),
        containerd_rke2: dockerfile_version(fetcher, &query("hardened-containerd"))
            .await
            .unwrap_or_default(),
        runc_gomod: gomod_version(fetcher, &query("runc")).await.unwrap_or_default(),
        runc_buildscript: build_script_version(fetcher, &query("VERSION_RUNC"))
            .await
            .unwrap_or_default(),
        runc_rke2: dockerfile_version(fetcher, &query("hardened-runc")).await.unwrap_or_default(),
        cni_plugins: image_tag_version(fetcher, &query("cni-plugins")).await.unwrap_or_default(),
        metrics_server: image_tag_version(fetcher, &query("metrics-server"))
            .await
            .unwrap_or_default(),
        traefik: image_tag_version(fetcher, &query("traefik")).await.unwrap_or_default(),
        coredns: image_tag_version(fetcher, &query("coredns")).await.unwrap_or_default(),
        ingress_nginx: dockerfile_version(fetcher, &query("rke2-ingress-nginx"))
            .await
            .unwrap_or_default(),
        helm_controller: gomod_version(fetcher, &query("helm-controller"))
            .await
            .unwrap_or_default(),
        flannel_rke2: image_tag_version(fetcher, &query("flannel")).await.unwrap_or_default(),
        flannel_k3s: gomod_version(fetcher, &query("flannel")).await.unwrap_or_default(),
        calico: image_tag_version(fetcher, &query("calico-node")).await.unwrap_or_default(),
        canal_calico: image_tag_version(fetcher, &query("hardened-calico"))
            .await
            .unwrap_or_default(),
        cilium: image_tag_version(fetcher, &query("cilium-cilium")).await.unwrap_or_default(),
        multus: image_tag_version(fetcher, &query("multus-cni")).await.unwrap_or_default(),
        kine: gomod_version(fetcher, &query("kine")).await.unwrap_or_default(),
        sqlite,
        local_path_provisioner: image_tag_version(fetcher, &query("local-path-provisioner"))
            .await
            .unwrap_or_default(),
    }
}

/// Generate the release notes document for one distribution and milestone.
///
/// `milestone` may carry a release-candidate suffix; resolvers scrape the
/// upstream repository at that exact ref while the rendered document shows
/// the stripped form. `changes` is the externally retrieved changelog,
/// rendered in the order given.
///
/// # Errors
///
/// Fails only on structural problems: template parse errors or an
/// unparseable semantic version reaching the major-minor helper. Resolver
/// misses degrade to blank fields.
pub async fn generate_release_notes(
    fetcher: &TextFetcher,
    distribution: Distribution,
    milestone: &str,
    prev_milestone: &str,
    changes: Vec<ChangelogEntry>,
) -> Result<String> {
    let renderer = NotesRenderer::new()?;
    let components = resolve_components(fetcher, distribution, milestone).await;
    let context = build_context(milestone, prev_milestone, components, changes);
    renderer.render(distribution, &context)
}
