//! Release asset subcommands: existence checks, verification, listing,
//! and deletion.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::assets;
use crate::github::GitHubClient;

/// Check whether tags exist as releases in an upstream repository.
#[derive(Args, Debug)]
pub struct CheckUpstreamCommand {
    /// Repository name, e.g. `k3s` or `rke2`.
    #[arg(short, long)]
    repo: String,

    /// Organization owning the repository; derived from the repository
    /// name when omitted.
    #[arg(short, long)]
    org: Option<String>,

    /// Release tags to check.
    #[arg(required = true)]
    tags: Vec<String>,

    /// GitHub API token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

impl CheckUpstreamCommand {
    pub async fn execute(self) -> Result<()> {
        let client = GitHubClient::new(self.token)?;
        let org = match &self.org {
            Some(org) => org.clone(),
            None => assets::org_from_repo(&self.repo)?.to_string(),
        };

        let releases =
            assets::check_upstream_releases(&client, &org, &self.repo, &self.tags).await?;
        print_tag_results(&releases);
        Ok(())
    }
}

/// Verify release asset counts against the expected-count table.
#[derive(Args, Debug)]
pub struct VerifyAssetsCommand {
    /// Repository name; must belong to a known repository family.
    #[arg(short, long)]
    repo: String,

    /// Release tags to verify.
    #[arg(required = true)]
    tags: Vec<String>,

    /// GitHub API token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

impl VerifyAssetsCommand {
    pub async fn execute(self) -> Result<()> {
        let client = GitHubClient::new(self.token)?;
        let results = assets::verify_assets(&client, &self.repo, &self.tags).await?;
        print_tag_results(&results);
        Ok(())
    }
}

/// List all assets attached to one release.
#[derive(Args, Debug)]
pub struct ListAssetsCommand {
    /// Repository name.
    #[arg(short, long)]
    repo: String,

    /// Release tag.
    #[arg(short, long)]
    tag: String,

    /// GitHub API token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

impl ListAssetsCommand {
    pub async fn execute(self) -> Result<()> {
        let client = GitHubClient::new(self.token)?;
        let found = assets::list_assets(&client, &self.repo, &self.tag).await?;

        if found.is_empty() {
            println!("no assets for {}", self.tag);
            return Ok(());
        }
        for asset in found {
            println!("{:>12}  {:>12}  {}", asset.id, asset.size, asset.name);
        }
        Ok(())
    }
}

/// Delete release assets: all of a tag's assets, or one by id.
#[derive(Args, Debug)]
pub struct DeleteAssetsCommand {
    /// Repository name.
    #[arg(short, long)]
    repo: String,

    /// Release tag.
    #[arg(short, long)]
    tag: String,

    /// Delete only the asset with this id instead of every asset.
    #[arg(long)]
    asset_id: Option<u64>,

    /// GitHub API token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

impl DeleteAssetsCommand {
    pub async fn execute(self) -> Result<()> {
        let client = GitHubClient::new(self.token)?;

        match self.asset_id {
            Some(id) => {
                assets::delete_asset_by_id(&client, &self.repo, &self.tag, id).await?;
                println!("{} asset {id} from {}", "deleted".red(), self.tag);
            }
            None => {
                let count =
                    assets::delete_assets_by_release(&client, &self.repo, &self.tag).await?;
                println!("{} {count} asset(s) from {}", "deleted".red(), self.tag);
            }
        }
        Ok(())
    }
}

fn print_tag_results(results: &std::collections::BTreeMap<String, bool>) {
    for (tag, ok) in results {
        let verdict = if *ok { "true".green() } else { "false".red() };
        println!("{tag}: {verdict}");
    }
}
