//! tryoutscore CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "tryoutscore",
    version,
    about = "English tryout scoring and study-priority ranking"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score an exam attempt and rank study priorities
    Score {
        /// Path to the .toml question bank
        #[arg(long)]
        bank: PathBuf,

        /// Path to the .json answer sheet
        #[arg(long)]
        answers: PathBuf,

        /// Locale for display strings: id, en
        #[arg(long, default_value = "id")]
        locale: String,

        /// Weight overrides, e.g. "cloze=0.3,grammar=0.25,reading=0.25,vocab=0.2"
        #[arg(long)]
        weights: Option<String>,

        /// Output directory
        #[arg(long, default_value = "./tryout-results")]
        output: PathBuf,

        /// Output format: json, html, all
        #[arg(long, default_value = "json")]
        format: String,
    },

    /// Validate question bank TOML files
    Validate {
        /// Path to a bank file or directory
        #[arg(long)]
        bank: PathBuf,
    },

    /// Compare two exam reports
    Compare {
        /// Baseline report JSON
        #[arg(long)]
        baseline: PathBuf,

        /// Current report JSON
        #[arg(long)]
        current: PathBuf,

        /// Point threshold below which a category counts as unchanged
        #[arg(long, default_value = "5")]
        threshold: u8,

        /// Exit code 1 if any category declined
        #[arg(long)]
        fail_on_decline: bool,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Create a starter bank and answer sheet
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tryoutscore=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Score {
            bank,
            answers,
            locale,
            weights,
            output,
            format,
        } => commands::score::execute(bank, answers, locale, weights, output, format),
        Commands::Validate { bank } => commands::validate::execute(bank),
        Commands::Compare {
            baseline,
            current,
            threshold,
            fail_on_decline,
            format,
        } => commands::compare::execute(baseline, current, threshold, fail_on_decline, format),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
