use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;
use matrix_shapes::matrix_ops::{report, run_session, MatrixOutcome};
use matrix_shapes::prompt::Prompter;

#[derive(Parser)]
#[command(name = "matrix-ops")]
#[command(about = "Add, subtract or multiply two matrices entered at the prompt")]
#[command(version)]
struct Cli {
    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Print the outcome as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    info!("Starting matrix-ops v{}", matrix_shapes::VERSION);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    let outcome = run_session(&mut prompter).context("Matrix entry failed")?;
    if let MatrixOutcome::Computed { operation, .. } = &outcome {
        info!("Computed {}", operation);
    }

    let rendered = if cli.json {
        report::render_json(&outcome).context("Failed to serialise result")?
    } else {
        report::render_text(&outcome)
    };
    writeln!(prompter.writer(), "{}", rendered)?;

    Ok(())
}
