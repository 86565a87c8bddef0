//! Wordle Board Assistant - CLI
//!
//! Interactive letter board (default) plus a one-shot `filter` subcommand for
//! running the constraint filter straight from flags.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_board::{
    commands::{FilterRequest, run_filter},
    interactive::{App, run_tui},
    output::print_filter_report,
};

#[derive(Parser)]
#[command(
    name = "wordle_board",
    about = "Drag-and-drop letter board for narrowing down the daily five-letter word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a word list file (one five-letter word per line);
    /// the embedded list is used when omitted
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive board mode (default)
    Board,

    /// Filter the word list once from constraint flags
    Filter {
        /// Letters known to be absent, as one run (e.g. `-e qzx`)
        #[arg(short, long)]
        exclude: Option<String>,

        /// Letter confirmed at a slot, as letter@slot (e.g. `-c a@0`); repeatable
        #[arg(short, long)]
        correct: Vec<String>,

        /// Letter in the word but not at a slot, as letter@slot; repeatable
        #[arg(short, long)]
        present: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to the interactive board if no command given
    let command = cli.command.unwrap_or(Commands::Board);

    match command {
        Commands::Board => run_board_command(cli.wordlist),
        Commands::Filter {
            exclude,
            correct,
            present,
        } => run_filter_command(exclude.as_deref(), &correct, &present, cli.wordlist),
    }
}

fn run_board_command(wordlist: Option<PathBuf>) -> Result<()> {
    let app = App::new(wordlist);
    run_tui(app)
}

fn run_filter_command(
    exclude: Option<&str>,
    correct: &[String],
    present: &[String],
    wordlist: Option<PathBuf>,
) -> Result<()> {
    let request = FilterRequest::parse(exclude, correct, present, wordlist)
        .map_err(|e| anyhow::anyhow!(e))?;
    let report = run_filter(&request).map_err(|e| anyhow::anyhow!(e))?;

    print_filter_report(&request, &report);
    Ok(())
}
