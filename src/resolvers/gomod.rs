//! Minimal go.mod dependency-manifest parsing.
//!
//! Only the subset the version resolvers need: given the text of a `go.mod`
//! file and a library name, find the version the build actually vendors.
//! `replace` directives win over `require` entries for the same module path,
//! because a replacement reflects the fork that really ships.

/// A single `require` entry: module path and version.
#[derive(Debug, PartialEq, Eq)]
struct Require {
    path: String,
    version: String,
}

/// A single `replace` entry: the replaced path and the replacement version.
#[derive(Debug, PartialEq, Eq)]
struct Replace {
    old_path: String,
    new_version: String,
}

/// Find the vendored version of `library` in the given `go.mod` text.
///
/// `library` is matched as a substring of the module path, so
/// `"kine"` matches `github.com/k3s-io/kine`. Replace directives are
/// consulted first; if none mentions the library, require entries are
/// searched. Returns `None` when the library appears in neither section or
/// the manifest cannot be parsed into anything useful.
pub fn module_version(gomod: &str, library: &str) -> Option<String> {
    let (replaces, requires) = parse(gomod);

    for replace in &replaces {
        if replace.old_path.contains(library) {
            return Some(replace.new_version.clone());
        }
    }

    for require in &requires {
        if require.path.contains(library) {
            return Some(require.version.clone());
        }
    }

    None
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    None,
    Require,
    Replace,
}

fn parse(gomod: &str) -> (Vec<Replace>, Vec<Require>) {
    let mut replaces = Vec::new();
    let mut requires = Vec::new();
    let mut block = Block::None;

    for raw_line in gomod.lines() {
        // Strip trailing comments such as "// indirect".
        let line = match raw_line.split_once("//") {
            Some((head, _)) => head.trim(),
            None => raw_line.trim(),
        };
        if line.is_empty() {
            continue;
        }

        match block {
            Block::None => {
                if line == "require (" {
                    block = Block::Require;
                } else if line == "replace (" {
                    block = Block::Replace;
                } else if let Some(rest) = line.strip_prefix("require ") {
                    if let Some(require) = parse_require(rest) {
                        requires.push(require);
                    }
                } else if let Some(rest) = line.strip_prefix("replace ") {
                    if let Some(replace) = parse_replace(rest) {
                        replaces.push(replace);
                    }
                }
            }
            Block::Require => {
                if line == ")" {
                    block = Block::None;
                } else if let Some(require) = parse_require(line) {
                    requires.push(require);
                }
            }
            Block::Replace => {
                if line == ")" {
                    block = Block::None;
                } else if let Some(replace) = parse_replace(line) {
                    replaces.push(replace);
                }
            }
        }
    }

    (replaces, requires)
}

fn parse_require(line: &str) -> Option<Require> {
    let mut tokens = line.split_whitespace();
    let path = tokens.next()?;
    let version = tokens.next()?;
    version.starts_with('v').then(|| Require {
        path: path.to_string(),
        version: version.to_string(),
    })
}

fn parse_replace(line: &str) -> Option<Replace> {
    let (old, new) = line.split_once("=>")?;
    let old_path = old.split_whitespace().next()?;
    // Replacement is "path vX.Y.Z" or a local filesystem path with no
    // version; only versioned replacements are useful here.
    let new_version = new.split_whitespace().last()?;
    new_version.starts_with('v').then(|| Replace {
        old_path: old_path.to_string(),
        new_version: new_version.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const GO_MOD: &str = r#"
module github.com/k3s-io/k3s

go 1.19

replace (
    github.com/containerd/containerd => github.com/k3s-io/containerd v1.6.8-k3s1
    github.com/opencontainers/runc => github.com/opencontainers/runc v1.1.4
    github.com/some/local => ../local
)

require (
    github.com/containerd/containerd v1.6.6 // indirect
    github.com/k3s-io/kine v0.9.6
    github.com/mattn/go-sqlite3 v1.14.15
    go.etcd.io/etcd/api/v3 v3.5.4
)

require github.com/k3s-io/helm-controller v0.12.3
"#;

    #[test]
    fn replace_wins_over_require() {
        // containerd appears in both sections; the replace version ships.
        assert_eq!(module_version(GO_MOD, "containerd/containerd"), Some("v1.6.8-k3s1".into()));
    }

    #[test]
    fn require_is_used_when_no_replace_matches() {
        assert_eq!(module_version(GO_MOD, "kine"), Some("v0.9.6".into()));
        assert_eq!(module_version(GO_MOD, "etcd/api/v3"), Some("v3.5.4".into()));
    }

    #[test]
    fn single_line_require_is_parsed() {
        assert_eq!(module_version(GO_MOD, "helm-controller"), Some("v0.12.3".into()));
    }

    #[test]
    fn unversioned_replace_is_ignored() {
        // A filesystem replacement has no version to report.
        assert_eq!(module_version(GO_MOD, "some/local"), None);
    }

    #[test]
    fn unknown_library_returns_none() {
        assert_eq!(module_version(GO_MOD, "traefik"), None);
    }

    #[test]
    fn substring_matching_on_module_path() {
        assert_eq!(module_version(GO_MOD, "go-sqlite3"), Some("v1.14.15".into()));
    }

    #[test]
    fn empty_manifest_returns_none() {
        assert_eq!(module_version("", "kine"), None);
    }
}
