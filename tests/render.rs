//! End-to-end rendering scenarios driven through the public library API,
//! with resolver results supplied directly so no network is involved.

use distro_release::changelog::ChangelogEntry;
use distro_release::core::Distribution;
use distro_release::notes::{ComponentVersions, build_context};
use distro_release::templating::NotesRenderer;

/// Every resolver missing except the dependency-manifest resolver for
/// kine: the Kine row is populated, every other version row renders as an
/// empty link target, and no render error is raised.
#[test]
fn k3s_document_with_only_kine_resolved() {
    let components = ComponentVersions { kine: "v0.9.0".into(), ..Default::default() };
    let context =
        build_context("v1.25.3+k3s1", "v1.25.2+k3s1", components, Vec::new());

    let renderer = NotesRenderer::new().unwrap();
    let document = renderer.render(Distribution::K3s, &context).unwrap();

    assert!(document.contains("| Kine | [v0.9.0](https://github.com/k3s-io/kine/releases/tag/v0.9.0) |"));
    assert!(document.contains("| Etcd | [](https://github.com/k3s-io/etcd/releases/tag/) |"));
    assert!(document.contains("| Flannel | [](https://github.com/flannel-io/flannel/releases/tag/) |"));
    assert!(document.contains("| SQLite | [](https://sqlite.org/releaselog/.html) |"));
}

/// An RC milestone renders the stripped display form everywhere while the
/// changelog window still starts at the previous milestone.
#[test]
fn rc_milestone_displays_stripped_form() {
    let context = build_context(
        "v1.25.3-rc1+k3s1",
        "v1.25.2+k3s1",
        ComponentVersions::default(),
        Vec::new(),
    );

    let renderer = NotesRenderer::new().unwrap();
    let document = renderer.render(Distribution::K3s, &context).unwrap();

    assert!(document.contains("<!-- v1.25.3+k3s1 -->"));
    assert!(!document.contains("rc1"));
    assert!(document.contains("## Changes since v1.25.2+k3s1:"));
}

/// A fully populated RKE2 context renders the component table, the CNI
/// table with derived calico anchors, and the manual placeholder.
#[test]
fn rke2_document_full_context() {
    let components = ComponentVersions {
        etcd_rke2: "v3.5.4-k3s1".into(),
        containerd_rke2: "v1.6.8-k3s1".into(),
        containerd_gomod: "v1.5.13-k3s1".into(),
        runc_rke2: "v1.1.4".into(),
        metrics_server: "v0.6.1".into(),
        coredns: "v1.9.3".into(),
        ingress_nginx: "4.1.0".into(),
        helm_controller: "v0.12.3".into(),
        flannel_rke2: "v0.19.1".into(),
        calico: "v3.24.1".into(),
        canal_calico: "v3.23.3".into(),
        cilium: "v1.12.1".into(),
        multus: "v3.9.1".into(),
        ..Default::default()
    };

    let changes = vec![
        ChangelogEntry {
            title: "upgrade containerd".into(),
            number: 3210,
            url: "https://github.com/rancher/rke2/pull/3210".into(),
            note: String::new(),
        },
        ChangelogEntry {
            title: "-fix cloud provider path".into(),
            number: 3222,
            url: "https://github.com/rancher/rke2/pull/3222".into(),
            note: "requires a node restart\n\nsee the linked issue".into(),
        },
    ];

    let context = build_context("v1.25.3+rke2r1", "v1.25.2+rke2r1", components, changes);

    let renderer = NotesRenderer::new().unwrap();
    let document = renderer.render(Distribution::Rke2, &context).unwrap();

    assert!(document.contains("This release ... <FILL ME OUT!>"));
    assert!(document.contains("| Containerd      | [v1.6.8-k3s1]"));
    assert!(document.contains(
        "projectcalico.docs.tigera.io/archive/v3.23/release-notes/#v3233"
    ));
    assert!(document.contains(
        "projectcalico.docs.tigera.io/archive/v3.24/release-notes/#v3241"
    ));
    // Changelog ordering follows the input sequence.
    let first = document.find("#3210").unwrap();
    let second = document.find("#3222").unwrap();
    assert!(first < second);
    // Leading punctuation survives capitalization.
    assert!(document.contains("* -Fix cloud provider path"));
    assert!(document.contains("  * Requires a node restart"));
    assert!(document.contains("  * See the linked issue"));
}

/// The 1.23 release line sources containerd from the dependency manifest
/// instead of the Dockerfile pin.
#[test]
fn rke2_123_line_sources_gomod_containerd() {
    let components = ComponentVersions {
        containerd_rke2: "v1.6.8-k3s1".into(),
        containerd_gomod: "v1.5.13-k3s1".into(),
        calico: "v3.24.1".into(),
        canal_calico: "v3.23.3".into(),
        ..Default::default()
    };
    let context = build_context("v1.23.14+rke2r1", "v1.23.13+rke2r1", components, Vec::new());

    let renderer = NotesRenderer::new().unwrap();
    let document = renderer.render(Distribution::Rke2, &context).unwrap();

    assert!(document.contains("| Containerd      | [v1.5.13-k3s1]"));
    assert!(!document.contains("| Containerd      | [v1.6.8-k3s1]"));
}
