//! Core data structures for picross (nonogram) puzzles.
//!
//! This crate provides the board model shared by the solver and game crates.
//!
//! # Overview
//!
//! - [`Cell`]: tri-state cell value (off, undetermined, on)
//! - [`Position`]: `(x, y)` board coordinate
//! - [`Clue`]: ordered block lengths of a line, including derivation from a
//!   concrete line with [`Clue::from_cells`]
//! - [`Line`] and [`LineKind`]: a row or column viewed as indices into the
//!   board's cell store, together with its clue
//! - [`CellGrid`]: rectangular cell grid with a text format, used for
//!   ground-truth solutions
//! - [`Board`]: owns the cell store and all lines of one puzzle
//!
//! # Examples
//!
//! ```
//! use picross_core::{Board, Cell, CellGrid, LineKind};
//!
//! let solution: CellGrid = "
//!     ###.
//!     .##
//! ".parse()?;
//! let board = Board::from_solution(&solution)?;
//!
//! // Columns come first, then rows.
//! let first = &board.lines()[0];
//! assert_eq!(first.kind(), LineKind::Column { x: 0 });
//! assert_eq!(first.clue().blocks(), &[1]);
//! assert!(board.cells().all(|(_, cell)| cell == Cell::Undetermined));
//! # Ok::<(), picross_core::BoardError>(())
//! ```

pub mod board;
pub mod cell;
pub mod cell_grid;
pub mod clue;
mod error;
pub mod line;
pub mod position;

pub use self::{
    board::Board,
    cell::Cell,
    cell_grid::CellGrid,
    clue::Clue,
    error::BoardError,
    line::{Line, LineKind},
    position::Position,
};
