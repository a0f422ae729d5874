//! CLI entry point for the eight-puzzle solver.
//!
//! Usage:
//!   eight-puzzle solve <grid.json> [options]
//!   eight-puzzle solve --stdin [options]
//!   eight-puzzle solve --grid 1,2,3,4,5,6,7,0,8 [options]
//!   eight-puzzle shuffle [--moves <n>] [--seed <n>]
//!
//! Options:
//!   --max-expansions <n>  Give up after this many node expansions
//!   --timeout <seconds>   Give up after this much search time
//!
//! Set `RUST_LOG=debug` for search diagnostics on stderr.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use log::debug;
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;

use eight_puzzle::{
    shuffle, solve_with_config, Board, PuzzleError, Solution, SolverConfig,
    DEFAULT_SHUFFLE_MOVES,
};

#[derive(Parser)]
#[command(name = "eight-puzzle")]
#[command(about = "Optimal A* solver for the 3x3 sliding tile puzzle")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a shortest slide sequence to the solved board
    Solve {
        /// Path to a JSON grid such as [[1,2,3],[4,5,6],[7,0,8]]
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read the JSON grid from stdin instead of a file
        #[arg(long)]
        stdin: bool,

        /// Grid as nine comma-separated values in row-major order (0 = blank)
        #[arg(long, conflicts_with_all = ["file", "stdin"])]
        grid: Option<String>,

        /// Maximum node expansions before giving up
        #[arg(long)]
        max_expansions: Option<usize>,

        /// Maximum search time in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Print a random solvable board as JSON
    Shuffle {
        /// Number of random slides applied to the solved board
        #[arg(long, default_value_t = DEFAULT_SHUFFLE_MOVES)]
        moves: usize,

        /// Seed for a reproducible scramble
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Output format for a solve attempt
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    solved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    move_count: Option<usize>,
    moves: Vec<String>,
    steps: Vec<StepOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expanded: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generated: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    time_elapsed_ms: Option<u64>,
}

#[derive(Debug, Serialize)]
struct StepOutput {
    #[serde(rename = "move")]
    move_label: String,
    grid: Board,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            file,
            stdin,
            grid,
            max_expansions,
            timeout,
        } => {
            let board = match read_board(file, stdin, grid) {
                Ok(board) => board,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return ExitCode::FAILURE;
                }
            };

            let config = SolverConfig {
                max_expansions,
                timeout: timeout.map(Duration::from_secs),
            };
            debug!("solver config: {:?}", config);

            let result = solve_with_config(&board, &config);
            let solved = result.is_ok();
            if !print_json(&format_result(result)) || !solved {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Commands::Shuffle { moves, seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let board = shuffle(moves, &mut rng);
            debug!("shuffled with {} moves:\n{}", moves, board);

            if print_json(&board) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

/// Load the initial board from `--grid`, stdin, or a file, validating it
fn read_board(
    file: Option<PathBuf>,
    stdin: bool,
    grid: Option<String>,
) -> Result<Board, String> {
    if let Some(list) = grid {
        return parse_grid_list(&list).map_err(|e| e.to_string());
    }

    let json_content = if stdin {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| format!("failed to read from stdin: {}", e))?;
        buffer
    } else if let Some(path) = file {
        fs::read_to_string(&path).map_err(|e| format!("failed to read file {:?}: {}", path, e))?
    } else {
        return Err("must provide a file path, --stdin, or --grid".to_string());
    };

    serde_json::from_str(&json_content).map_err(|e| format!("invalid grid JSON: {}", e))
}

/// Parse "1,2,3,4,5,6,7,0,8" into a board
fn parse_grid_list(list: &str) -> Result<Board, PuzzleError> {
    let values = list
        .split(',')
        .map(|s| s.trim().parse::<u8>())
        .collect::<Result<Vec<u8>, _>>()
        .map_err(|e| PuzzleError::MalformedInput {
            reason: format!("bad cell value: {}", e),
        })?;

    let cells: [u8; 9] = values
        .as_slice()
        .try_into()
        .map_err(|_| PuzzleError::MalformedInput {
            reason: format!("expected 9 values, got {}", values.len()),
        })?;

    Board::from_cells(cells)
}

fn format_result(result: Result<Solution, PuzzleError>) -> SolveOutput {
    match result {
        Ok(solution) => SolveOutput {
            solved: true,
            error: None,
            reason: None,
            move_count: Some(solution.move_count()),
            moves: solution.moves().iter().map(|d| d.to_string()).collect(),
            steps: solution
                .steps
                .iter()
                .map(|step| StepOutput {
                    move_label: step.label().to_string(),
                    grid: step.board,
                })
                .collect(),
            expanded: Some(solution.stats.expanded),
            generated: Some(solution.stats.generated),
            time_elapsed_ms: Some(solution.stats.time_elapsed_ms),
        },
        Err(e) => SolveOutput {
            solved: false,
            error: Some(e.kind()),
            reason: Some(e.to_string()),
            move_count: None,
            moves: Vec::new(),
            steps: Vec::new(),
            expanded: None,
            generated: None,
            time_elapsed_ms: None,
        },
    }
}

fn print_json<T: Serialize>(value: &T) -> bool {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            true
        }
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            false
        }
    }
}
