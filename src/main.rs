//! Huarong Path Puzzle Solver
//!
//! Solves a sliding-block puzzle where pieces slide one cell at a time until
//! the 2x2 piece reaches the bottom-center of the board. Finds a shortest
//! solution by breadth-first search, treating same-shaped pieces as
//! interchangeable, and prints every step.

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use huarong::pieces;
use huarong::solver::DEFAULT_PROGRESS_INTERVAL;
use huarong::{format_solution, split_rows, Board, Error, LogProgress, OverflowPolicy, Solver};

/// Failures reported by the command line front end.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
enum CliError {
    #[error("unknown preset '{0}'")]
    UnknownPreset(String),

    #[error(transparent)]
    Board(#[from] Error),
}

/// Solves a Huarong Path sliding-block puzzle.
#[derive(Parser, Debug)]
#[command(name = "huarong")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:
  huarong --preset 1
  huarong --board \"ABBC,ABBC,DEEX,DYZX,K..I\"")]
struct Cli {
    /// Preset board to solve.
    #[arg(long, value_parser = ["1", "2", "3"], default_value = "1")]
    preset: String,

    /// Custom board as comma- or newline-separated rows; overrides --preset.
    #[arg(long)]
    board: Option<String>,

    /// Reject boards with more same-shaped pieces than canonical labels.
    #[arg(long)]
    strict: bool,

    /// Log search progress every N expanded states (0 disables).
    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    progress_every: usize,

    /// Also print the canonical form of the initial board.
    #[arg(long)]
    canonical: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Rows of the board selected on the command line.
fn initial_rows(cli: &Cli) -> Result<Vec<String>, CliError> {
    match &cli.board {
        Some(text) => Ok(split_rows(text)),
        None => pieces::preset(&cli.preset)
            .map(|rows| rows.iter().map(|row| row.to_string()).collect())
            .ok_or_else(|| CliError::UnknownPreset(cli.preset.clone())),
    }
}

/// Solves the selected board and prints the solution.
///
/// Returns whether a solution was found.
fn run(cli: &Cli) -> Result<bool, CliError> {
    let policy = if cli.strict {
        OverflowPolicy::Reject
    } else {
        OverflowPolicy::Share
    };
    let initial = Board::from_rows_with(&initial_rows(cli)?, policy)?;
    let rule = "=".repeat(50);

    println!("Initial Board:\n{initial}\n");
    println!("{rule}\n");
    if cli.canonical {
        println!("Canonical form:\n{}\n", initial.signature());
    }

    let result = Solver::new()
        .with_progress_interval(cli.progress_every)
        .solve_with(&initial, &mut LogProgress);
    info!(
        "explored {} states, {} unique canonical states visited",
        result.stats.expanded, result.stats.discovered
    );

    match result.path {
        Some(steps) => {
            println!("Solution found in {} moves!\n", steps.len());
            println!("{rule}\n");
            print!("{}", format_solution(&initial, &steps));
            println!("{rule}\nGOAL REACHED!\n{rule}");
            Ok(true)
        }
        None => {
            println!("No solution found!");
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use huarong::pieces::PRESET_1;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_first_preset() {
        let cli = Cli::try_parse_from(["huarong"]).unwrap();
        assert_eq!(cli.preset, "1");
        assert_eq!(cli.progress_every, DEFAULT_PROGRESS_INTERVAL);
        assert!(!cli.strict);
        assert_eq!(initial_rows(&cli).unwrap(), PRESET_1);
    }

    #[test]
    fn test_board_overrides_preset() {
        let cli = Cli::try_parse_from(["huarong", "--preset", "2", "--board", "AA.,AA.,..."]).unwrap();
        assert_eq!(initial_rows(&cli).unwrap(), vec!["AA.", "AA.", "..."]);
    }

    #[test]
    fn test_unknown_preset_name_is_an_error() {
        let cli = Cli {
            preset: "9".to_string(),
            board: None,
            strict: false,
            progress_every: 0,
            canonical: false,
        };
        assert_eq!(
            initial_rows(&cli),
            Err(CliError::UnknownPreset("9".to_string()))
        );
        assert_eq!(run(&cli), Err(CliError::UnknownPreset("9".to_string())));
    }

    #[test]
    fn test_unknown_preset_is_rejected() {
        assert!(Cli::try_parse_from(["huarong", "--preset", "9"]).is_err());
    }

    #[test]
    fn test_run_reports_outcome() {
        let solvable = Cli::try_parse_from(["huarong", "--board", "AA.,AA.,..."]).unwrap();
        assert_eq!(run(&solvable), Ok(true));

        let stuck = Cli::try_parse_from(["huarong", "--board", "GAA,HAA,IJK"]).unwrap();
        assert_eq!(run(&stuck), Ok(false));

        let strict = Cli::try_parse_from(["huarong", "--strict", "--preset", "3"]).unwrap();
        assert!(matches!(run(&strict), Err(CliError::Board(Error::MalformedBoard(_)))));
    }
}
