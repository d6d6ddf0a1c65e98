//! The two supported Kubernetes distribution targets.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A Kubernetes distribution whose release notes this crate renders.
///
/// The distribution selects which upstream repository the resolvers read
/// from and which document template the renderer uses. Exactly two targets
/// exist; anything else is rejected at the CLI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Distribution {
    /// The lightweight K3s distribution (`k3s-io/k3s`).
    K3s,
    /// The hardened RKE2 distribution (`rancher/rke2`).
    Rke2,
}

impl Distribution {
    /// The `owner/name` slug of the upstream repository scraped for
    /// version artifacts.
    pub const fn upstream_repo(self) -> &'static str {
        match self {
            Self::K3s => "k3s-io/k3s",
            Self::Rke2 => "rancher/rke2",
        }
    }

    /// The name of the document template for this distribution.
    pub const fn template_name(self) -> &'static str {
        match self {
            Self::K3s => "k3s.md",
            Self::Rke2 => "rke2.md",
        }
    }

    /// Short lowercase identifier, matching the repository name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::K3s => "k3s",
            Self::Rke2 => "rke2",
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Distribution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "k3s" => Ok(Self::K3s),
            "rke2" => Ok(Self::Rke2),
            other => Err(format!("unknown distribution '{other}', expected 'k3s' or 'rke2'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_repos() {
        assert_eq!(Distribution::K3s.upstream_repo(), "k3s-io/k3s");
        assert_eq!(Distribution::Rke2.upstream_repo(), "rancher/rke2");
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("K3S".parse::<Distribution>().unwrap(), Distribution::K3s);
        assert_eq!("rke2".parse::<Distribution>().unwrap(), Distribution::Rke2);
        assert!("rke".parse::<Distribution>().is_err());
    }

    #[test]
    fn display_matches_repo_name() {
        assert_eq!(Distribution::K3s.to_string(), "k3s");
        assert_eq!(Distribution::Rke2.to_string(), "rke2");
    }
}
