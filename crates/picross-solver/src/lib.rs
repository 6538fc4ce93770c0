//! Line-based deduction for picross puzzles.
//!
//! This crate deduces forced cells by constraint propagation on single lines,
//! without guessing or backtracking.
//!
//! # Overview
//!
//! - [`permutation`]: multiset next-permutation and a lazy arrangement sequence
//! - [`candidate`]: expansion of token arrangements into candidate lines
//! - [`LineSolver`]: filters the candidates of one line against its known
//!   cells and intersects the survivors
//! - [`HintSolver`]: applies the line solver to each line in board order and
//!   stops at the first line that changes
//!
//! # Examples
//!
//! ```
//! use picross_core::{Board, Cell, CellGrid, Position};
//! use picross_solver::HintSolver;
//!
//! let solution: CellGrid = "
//!     .#.
//!     ####
//!     .#.
//! ".parse()?;
//! let mut board = Board::from_solution(&solution)?;
//! let solver = HintSolver::new();
//! let mut stats = solver.new_stats(&board);
//!
//! while solver.step(&mut board, &mut stats)? {}
//! assert_eq!(board.cell(Position::new(1, 1)), Some(Cell::On));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{error::*, hint_solver::*, line_solver::*};

pub mod candidate;
mod error;
mod hint_solver;
mod line_solver;
pub mod permutation;

#[cfg(test)]
mod testing;
