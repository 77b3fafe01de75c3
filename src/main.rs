mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cmd::checkin::{self, CheckinCommandArgs};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::domain::commit::CommitRef;
use crate::error::{AppError, AppResult};
use crate::infra::clipboard::Xclip;
use crate::infra::git::GitCli;
use crate::infra::terminal::TerminalPrompt;

/// Exit status when the operator aborts the prompt (EOF or Ctrl-C); nothing is written.
const INTERRUPTED_EXIT_CODE: i32 = 130;

#[derive(Parser)]
#[command(
    name = "git-code-checkin",
    author,
    version,
    about = "Build a code check-in email for a commit and copy it to the clipboard",
    after_help = "Aborting the prompts with Ctrl-C or end of input exits with status 130 without writing the document."
)]
struct Cli {
    /// Hash or hash prefix of the commit to summarize, as shown by `git log`.
    #[arg(short, long)]
    commit: CommitRef,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    setup_logging();

    match run(cli).await {
        Ok(()) => {}
        Err(AppError::Cancelled) => std::process::exit(INTERRUPTED_EXIT_CODE),
        Err(error) => {
            eprintln!("Error: {error}");
            std::process::exit(1);
        }
    }
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> AppResult<()> {
    let cwd = std::env::current_dir()?;
    let config = AppConfig::load(&cwd)?;

    let git = Arc::new(GitCli::new(config.workspace_root.clone()));
    let context = AppContext::new(
        config,
        git,
        Arc::new(TerminalPrompt::new()),
        Arc::new(Xclip::new()),
    );

    let outcome = checkin::run(&context, CheckinCommandArgs { commit: cli.commit }).await?;

    println!(
        "Check-in for {} written to {} and copied to the clipboard.",
        outcome.commit.hash,
        outcome.output_path.display()
    );
    println!(
        "{} file(s) listed{}",
        outcome.files_listed,
        match outcome.files_skipped {
            0 => String::new(),
            skipped => format!(", {skipped} with unrecognized status left out"),
        }
    );

    Ok(())
}
