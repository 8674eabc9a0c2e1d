//! CLI for gitlair.
//!
//! Serves a page listing the dependency bump pull requests opened by
//! Dependabot, or prints the same list once and exits.

use clap::Parser;
use gitlair::{AppState, BumpReport, BumpTracker, ConfigError, PageRenderer, Settings};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// gitlair - List Dependabot bump pull requests across GitHub repositories.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML settings file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Repository owner; overrides the settings file.
    #[arg(long)]
    owner: Option<String>,

    /// Repository to scan; may be repeated and overrides the settings file.
    #[arg(long = "repository", value_name = "NAME")]
    repositories: Vec<String>,

    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Address to serve the page on.
    #[arg(long, default_value = "127.0.0.1:8000")]
    listen: SocketAddr,

    /// Fetch bumps once, print them and exit instead of serving.
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(Some(report)) => {
            print_report(&report);

            if report.has_failures() {
                ExitCode::from(1)
            } else {
                ExitCode::from(0)
            }
        }
        Ok(None) => ExitCode::from(0),
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Resolves settings from the settings file and command line overrides.
fn load_settings(args: &Args) -> Result<Settings, ConfigError> {
    let mut settings = match (&args.config, &args.owner) {
        (Some(path), _) => Settings::load(path)?,
        (None, Some(owner)) => Settings::new(owner.clone()).with_env_overrides(),
        (None, None) => {
            return Err(ConfigError::ValidationError {
                path: "command line".to_string(),
                message: "either --config or --owner is required".to_string(),
            })
        }
    };

    if let Some(owner) = &args.owner {
        settings.owner = owner.clone();
    }
    if !args.repositories.is_empty() {
        settings = settings.with_repositories(args.repositories.clone());
    }

    Ok(settings)
}

/// Main execution logic. Returns the report in one-shot mode.
async fn run(args: Args) -> Result<Option<BumpReport>, Box<dyn std::error::Error>> {
    let settings = load_settings(&args)?;
    let tracker = BumpTracker::new(settings, args.token.as_deref())?;

    if args.once {
        let report = tracker.run().await?;
        return Ok(Some(report));
    }

    let renderer = PageRenderer::new()?;
    let listener = tokio::net::TcpListener::bind(args.listen).await?;
    gitlair::serve(listener, AppState::new(tracker, renderer)).await?;
    Ok(None)
}

/// Prints the bump list.
fn print_report(report: &BumpReport) {
    println!("\nStatus: {}", report.status().as_str());
    println!("  Repositories checked: {}", report.repositories_checked);
    println!("  Bumps: {}", report.bumps.len());

    for bump in &report.bumps {
        println!(
            "    {}: {} {} -> {}",
            bump.repository, bump.library, bump.version_from, bump.version_to
        );
    }

    if !report.failures.is_empty() {
        println!("  Failed repositories: {}", report.failures.len());
        for failure in &report.failures {
            println!("    {}: {}", failure.repository, failure.error);
        }
    }

    if !report.skipped.is_empty() {
        println!("  Skipped lines: {}", report.skipped.len());
        for skipped in &report.skipped {
            println!("    {}: {}", skipped.repository, skipped.error);
        }
    }
}
