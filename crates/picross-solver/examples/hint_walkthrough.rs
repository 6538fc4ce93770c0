//! Example that walks a puzzle hint by hint.
//!
//! This example shows how to:
//! - Build a `Board` from a solution grid
//! - Request hints from a `HintSolver` one at a time
//! - Display the board and statistics after each hint
//!
//! # Usage
//!
//! ```sh
//! cargo run --example hint_walkthrough
//! ```
//!
//! Load a solution grid from a file (`#` filled, `.` empty, one row per line):
//!
//! ```sh
//! cargo run --example hint_walkthrough -- --grid puzzle.txt
//! ```
//!
//! Enable solver logging:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example hint_walkthrough
//! ```

use std::{fs, path::PathBuf, process};

use clap::Parser;
use picross_core::{Board, CellGrid};
use picross_solver::HintSolver;

const SAMPLE: &str = "
    ..###..
    .#####.
    ##.#.##
    #######
    .#...#.
    ..###..
";

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Solution grid file. Uses a built-in sample when omitted.
    #[arg(long, value_name = "FILE")]
    grid: Option<PathBuf>,

    /// Maximum number of hints to request.
    #[arg(long, value_name = "COUNT", default_value_t = 1000)]
    max_hints: usize,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let text = match &args.grid {
        Some(path) => fs::read_to_string(path).unwrap_or_else(|err| {
            eprintln!("Failed to read {}: {err}", path.display());
            process::exit(2);
        }),
        None => SAMPLE.to_owned(),
    };
    let mut board = text
        .parse::<CellGrid>()
        .and_then(|solution| Board::from_solution(&solution))
        .unwrap_or_else(|err| {
            eprintln!("Invalid puzzle: {err}");
            process::exit(2);
        });

    print_clues(&board);

    let solver = HintSolver::new();
    let mut stats = solver.new_stats(&board);
    for _ in 0..args.max_hints {
        let step = match solver.find_step(&board) {
            Ok(Some(step)) => step,
            Ok(None) => break,
            Err(err) => {
                eprintln!("Hint failed: {err}");
                process::exit(1);
            }
        };
        if let Err(err) = solver.step(&mut board, &mut stats) {
            eprintln!("Hint failed: {err}");
            process::exit(1);
        }
        println!(
            "Hint {} ({}, {} cell(s)):",
            stats.total_steps(),
            step.kind(),
            step.changes().len()
        );
        println!("{board}");
        println!();
    }

    println!("Result:");
    if board.is_solved() {
        println!("  solved");
    } else {
        println!("  stuck");
    }
    println!("  hints: {}", stats.total_steps());
    println!("  cells forced: {}", stats.cells_forced());
}

fn print_clues(board: &Board) {
    println!("Columns:");
    for x in 0..board.width() {
        if let Some(clue) = board.column_clue(x) {
            println!("  {x}: {clue}");
        }
    }
    println!("Rows:");
    for y in 0..board.height() {
        if let Some(clue) = board.row_clue(y) {
            println!("  {y}: {clue}");
        }
    }
    println!();
}
