//! The render context and its derivation rules.
//!
//! Everything the document templates can reference is declared here as an
//! explicit field. Field presence is total: a version the resolvers could
//! not find is an empty string, never a missing key, so a template lookup
//! can never fail on absence.

use serde::Serialize;

use crate::changelog::ChangelogEntry;

/// Raw component versions scraped from the upstream artifacts.
///
/// Every field is an already-resolved version string; empty means the
/// resolver reported "not found". `Default` gives the all-unavailable state.
#[derive(Debug, Clone, Default)]
pub struct ComponentVersions {
    pub etcd_rke2: String,
    pub etcd_k3s: String,
    pub containerd_k3s: String,
    pub containerd_gomod: String,
    pub containerd_rke2: String,
    pub runc_gomod: String,
    pub runc_buildscript: String,
    pub runc_rke2: String,
    pub cni_plugins: String,
    pub metrics_server: String,
    pub traefik: String,
    pub coredns: String,
    pub ingress_nginx: String,
    pub helm_controller: String,
    pub flannel_rke2: String,
    pub flannel_k3s: String,
    pub calico: String,
    pub canal_calico: String,
    pub cilium: String,
    pub multus: String,
    pub kine: String,
    pub sqlite: String,
    pub local_path_provisioner: String,
}

/// The complete, strongly-typed context handed to the template renderer.
///
/// One context serves both document templates; each template references the
/// subset of fields it needs. All version fields may be empty and render as
/// blank link targets.
#[derive(Debug, Clone, Serialize)]
pub struct ReleaseNotesContext {
    /// Display milestone, with any release-candidate suffix removed.
    pub milestone: String,
    /// Previous milestone, exactly as supplied.
    pub prev_milestone: String,
    /// Changelog-window anchor: previous milestone's bare version with
    /// separators stripped (`v1.25.2+k3s1` -> `v1252`).
    pub changelog_since: String,
    /// Bare Kubernetes version: display milestone without build metadata.
    pub k8s_version: String,
    /// Markdown anchor form of the Kubernetes version (`v1.25.3` -> `v1253`).
    pub changelog_version: String,
    /// `major.minor` of the Kubernetes version, without the `v` prefix.
    pub major_minor: String,

    pub etcd_version_rke2: String,
    pub etcd_version_k3s: String,
    pub containerd_version_k3s: String,
    pub containerd_version_gomod: String,
    pub containerd_version_rke2: String,
    pub runc_version_gomod: String,
    pub runc_version_buildscript: String,
    pub runc_version_rke2: String,
    pub cni_plugins_version: String,
    pub metrics_server_version: String,
    pub traefik_version: String,
    pub coredns_version: String,
    pub ingress_nginx_version: String,
    pub helm_controller_version: String,
    pub flannel_version_rke2: String,
    pub flannel_version_k3s: String,
    pub calico_version: String,
    pub canal_calico_version: String,
    pub cilium_version: String,
    pub multus_version: String,
    pub kine_version: String,
    pub sqlite_version: String,
    /// SQLite version with periods replaced by underscores, for the
    /// sqlite.org release-log URL scheme.
    pub sqlite_version_slug: String,
    pub local_path_provisioner_version: String,

    /// Ordered changelog entries, rendered one bullet per entry.
    pub changes: Vec<ChangelogEntry>,
}

/// Assemble the complete render context from a milestone pair, the scraped
/// component versions, and the externally supplied changelog.
///
/// The milestone may carry a release-candidate suffix; the display fields
/// use the stripped form while callers are expected to have scraped the
/// components at the original, un-stripped ref.
pub fn build_context(
    milestone: &str,
    prev_milestone: &str,
    components: ComponentVersions,
    changes: Vec<ChangelogEntry>,
) -> ReleaseNotesContext {
    let display_milestone = strip_rc_suffix(milestone);
    let k8s_version = strip_build_metadata(&display_milestone).to_string();
    let changelog_version = k8s_version.replace('.', "");
    let major_minor = major_minor(&k8s_version);
    let changelog_since = strip_build_metadata(prev_milestone).replace('.', "");
    let sqlite_version_slug = components.sqlite.replace('.', "_");

    ReleaseNotesContext {
        milestone: display_milestone,
        prev_milestone: prev_milestone.to_string(),
        changelog_since,
        k8s_version,
        changelog_version,
        major_minor,
        etcd_version_rke2: components.etcd_rke2,
        etcd_version_k3s: components.etcd_k3s,
        containerd_version_k3s: components.containerd_k3s,
        containerd_version_gomod: components.containerd_gomod,
        containerd_version_rke2: components.containerd_rke2,
        runc_version_gomod: components.runc_gomod,
        runc_version_buildscript: components.runc_buildscript,
        runc_version_rke2: components.runc_rke2,
        cni_plugins_version: components.cni_plugins,
        metrics_server_version: components.metrics_server,
        traefik_version: components.traefik,
        coredns_version: components.coredns,
        ingress_nginx_version: components.ingress_nginx,
        helm_controller_version: components.helm_controller,
        flannel_version_rke2: components.flannel_rke2,
        flannel_version_k3s: components.flannel_k3s,
        calico_version: components.calico,
        canal_calico_version: components.canal_calico,
        cilium_version: components.cilium,
        multus_version: components.multus,
        kine_version: components.kine,
        sqlite_version: components.sqlite,
        sqlite_version_slug,
        local_path_provisioner_version: components.local_path_provisioner,
        changes,
    }
}

/// Remove a release-candidate suffix from a milestone string.
///
/// `-rc` plus all immediately following ASCII digits is removed; everything
/// after the digits (such as `+k3s1` build metadata) is kept. A milestone
/// without the suffix is returned unchanged.
pub fn strip_rc_suffix(milestone: &str) -> String {
    let Some(idx) = milestone.find("-rc") else {
        return milestone.to_string();
    };
    let after = &milestone[idx + 3..];
    let digits = after.chars().take_while(char::is_ascii_digit).count();
    format!("{}{}", &milestone[..idx], &after[digits..])
}

/// Drop the `+`-delimited build metadata suffix, if any.
fn strip_build_metadata(version: &str) -> &str {
    version.split('+').next().unwrap_or(version)
}

/// `major.minor` of a version string, tolerating a leading `v`.
///
/// Malformed versions with fewer than two dot-separated parts come back
/// unchanged (minus the `v`); the context builder never hard-fails.
fn major_minor(version: &str) -> String {
    let bare = version.trim_start_matches('v');
    let mut parts = bare.split('.');
    match (parts.next(), parts.next()) {
        (Some(major), Some(minor)) => format!("{major}.{minor}"),
        _ => bare.to_string(),
    }
}
