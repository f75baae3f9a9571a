use std::sync::Arc;

use clap::{Parser, Subcommand};

mod commands;
mod errors;
mod report;

use commands::branches_cmd::BranchesArgs;
use commands::labels_cmd::LabelsArgs;
use commands::repos_cmd::ReposArgs;
use commands::teams_cmd::TeamsArgs;
use errors::Error;
use github_client::GitHubClient;
use repo_sweep_core::BatchReport;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

/// RepoSweep CLI: apply configuration across a GitHub organization en masse
#[derive(Parser)]
#[command(name = "repo-sweep")]
#[command(about = "Apply configuration across a GitHub organization en masse", long_about = None)]
struct Cli {
    /// GitHub token used for authentication; falls back to the GITHUB_TOKEN
    /// environment variable when omitted
    #[arg(long, global = true)]
    token: Option<String>,

    /// Organization to use for all requests
    #[arg(long, short = 'o')]
    org: String,

    /// Set output to be verbose
    #[arg(long, global = true)]
    verbose: bool,

    /// Path to log file
    #[arg(long, global = true)]
    log_file: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Update repository settings across the organization
    Repos(ReposArgs),

    /// Update branch protection rules across repositories
    Branches(BranchesArgs),

    /// Grant a team access to repositories
    Teams(TeamsArgs),

    /// Add or remove a label across repositories
    Labels(LabelsArgs),
}

/// Picks the token from the command line or the environment.
fn resolve_token(argument: Option<String>) -> Result<String, Error> {
    argument
        .or_else(|| std::env::var("GITHUB_TOKEN").ok())
        .filter(|token| !token.trim().is_empty())
        .ok_or_else(|| {
            Error::Auth(
                "no GitHub token provided; pass --token or set GITHUB_TOKEN".to_string(),
            )
        })
}

/// Installs the tracing subscriber for this process.
fn init_logging(cli: &Cli) -> Result<(), std::io::Error> {
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_env("REPO_SWEEP_LOG")
    };

    let file_layer = match &cli.log_file {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            Some(fmt::layer().with_ansi(false).with_writer(Arc::new(file)))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    Ok(())
}

async fn run(cli: &Cli) -> Result<BatchReport, Error> {
    let token = resolve_token(cli.token.clone())?;
    let octocrab = github_client::create_token_client(&token)?;
    let client = GitHubClient::new(octocrab);

    match &cli.command {
        Commands::Repos(args) => commands::repos_cmd::execute(&client, &cli.org, args).await,
        Commands::Branches(args) => commands::branches_cmd::execute(&client, &cli.org, args).await,
        Commands::Teams(args) => commands::teams_cmd::execute(&client, &cli.org, args).await,
        Commands::Labels(args) => commands::labels_cmd::execute(&client, &cli.org, args).await,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli) {
        eprintln!("Failed to initialise logging: {e}");
        std::process::exit(2);
    }

    match run(&cli).await {
        Ok(report) => {
            report::render(&report);
            if report.is_success() {
                std::process::exit(0);
            } else {
                std::process::exit(1);
            }
        }
        Err(e) => {
            error!("Error: {e}");
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    }
}
