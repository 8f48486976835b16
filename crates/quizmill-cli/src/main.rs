//! quizmill CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "quizmill", version, about = "Quiz file converter and scorer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a quiz file (JSON, CSV, or Markdown) to canonical JSON
    Convert {
        /// Input quiz file; the extension picks the parser, unknown
        /// extensions are sniffed
        #[arg(long)]
        input: PathBuf,

        /// Session mode to apply: "random40" or "marathon"
        #[arg(long)]
        mode: Option<String>,

        /// Output JSON file (prints to stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Score collected answers against a quiz
    Score {
        /// Quiz file in any supported format
        #[arg(long)]
        quiz: PathBuf,

        /// Answers JSON file: {"<question position>": [<option index>, ...]}
        #[arg(long)]
        answers: PathBuf,

        /// Write the CSV score report here
        #[arg(long)]
        report: Option<PathBuf>,

        /// Write the normalized quiz JSON here
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Parse a quiz file and report what it contains
    Validate {
        /// Quiz file in any supported format
        #[arg(long)]
        input: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizmill=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            input,
            mode,
            output,
        } => commands::convert::execute(input, mode, output),
        Commands::Score {
            quiz,
            answers,
            report,
            json,
        } => commands::score::execute(quiz, answers, report, json),
        Commands::Validate { input } => commands::validate::execute(input),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
