use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use bumper::cli::orchestration::{self, BumpOutcome};
use bumper::config;
use bumper::git::Git2Repository;
use bumper::tracker::HttpTrackerClient;
use bumper::ui;

#[derive(clap::Parser)]
#[command(
    name = "bumper",
    version,
    about = "Find the newest commit in a range whose tracker stories are all accepted"
)]
struct Args {
    #[arg(
        long,
        help = "Commit range to consider bumping [default: master..release-elect]"
    )]
    commit_range: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        short = 'C',
        long,
        default_value = ".",
        help = "Path inside the git repository"
    )]
    repo: PathBuf,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if args.verbose {
            EnvFilter::new("bumper=debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

fn run(args: Args) -> Result<()> {
    let config = config::load_with_env(args.config.as_deref()).context("Error loading config")?;
    let settings = config.tracker_settings()?;
    let range = args.commit_range.unwrap_or(config.commit_range);

    ui::display_range(&range);

    let repo = Git2Repository::open(&args.repo)?;
    let tracker = HttpTrackerClient::new(&settings).context("Cannot build tracker client")?;

    let report = orchestration::run_bump_workflow(&repo, &tracker, &range)
        .with_context(|| format!("Failed to inspect commit range '{}'", range))?;

    if !report.commits.is_empty() {
        ui::display_commits(&report.commits);
    }

    match &report.outcome {
        BumpOutcome::BumpTo(hash) => ui::display_bump(hash),
        BumpOutcome::Empty(outcome) => ui::display_empty_outcome(outcome),
    }

    Ok(())
}
