//! Alphagram Quiz - CLI
//!
//! Loads a word list and quizzes the player on alphagrams until they quit.

use alphagram_quiz::{
    output::{print_error, print_file_echo, print_prompt},
    quiz::Session,
    wordlists::load_word_store,
};
use anyhow::{Context, Result};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "alphagram_quiz",
    about = "Anagram quiz: guess the word behind each alphagram ('C' shows the definition, empty gives up, 'Q' quits)",
    version,
    author
)]
struct Cli {
    /// Word file (one `WORD definition` per line); prompted for when omitted
    #[arg(short = 'w', long)]
    wordlist: Option<PathBuf>,

    /// Seed for word selection, for repeatable sessions
    #[arg(long)]
    seed: Option<u64>,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Prompt for the word file path and read it, dropping the line terminator
fn read_path(input: &mut impl BufRead, output: &mut impl Write) -> Result<PathBuf> {
    print_prompt(output, "Word file: ")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read word file path")?;
    Ok(PathBuf::from(line.trim_end_matches(['\n', '\r'])))
}

fn run<R: BufRead, W: Write>(cli: Cli, mut input: R, mut output: W) -> Result<()> {
    let path = match cli.wordlist {
        Some(path) => path,
        None => read_path(&mut input, &mut output)?,
    };
    print_file_echo(&mut output, &path)?;

    let store = load_word_store(&path)?;

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut session = Session::new(&store, input, output, rng);
    session.run().context("quiz session failed")?;
    Ok(())
}

/// 0 on a normal end of session, 1 on any failure
fn exit_status(result: &Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            print_error(&format!("{err:#}"));
            1
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = run(cli, io::stdin().lock(), io::stdout().lock());
    ExitCode::from(exit_status(&result))
}
