use crate::report::{render_digest, render_scores, DigestArgs, ScoresArgs};
use child_signals::config::AppConfig;
use child_signals::error::AppError;
use child_signals::telemetry;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "signals",
    about = "Summarize a child's classified online activity into caregiver-facing scores",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print composite scores for one or more subjects as JSON
    Scores(ScoresArgs),
    /// Print week-by-week digests for a subject as JSON
    Digest(DigestArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(?config.environment, data_dir = %config.source.data_dir.display(), "configuration loaded");

    let rendered = match cli.command {
        Command::Scores(args) => render_scores(&config, args)?,
        Command::Digest(args) => render_digest(&config, args)?,
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    Ok(())
}
