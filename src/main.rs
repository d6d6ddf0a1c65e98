//! distro-release CLI entry point.

use clap::Parser;
use colored::Colorize;
use distro_release::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    if let Err(err) = cli.execute().await {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
