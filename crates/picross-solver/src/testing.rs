//! Test utilities for the line solver.
//!
//! This module provides [`LineTester`], a testing harness for verifying the
//! deductions made on a single line.
//!
//! # Example
//!
//! ```ignore
//! LineTester::new("3", "?????")
//!     .apply_once()
//!     .assert_forced(2, Cell::On)
//!     .assert_no_change(0);
//! ```

use picross_core::{Board, Cell, Clue};

use crate::{LineSolver, LineStep};

/// A test harness for verifying line deductions.
///
/// The line under test is placed as the only row of a one-row [`Board`], so
/// writes go through the same shared cell store the hint driver uses.
/// `LineTester` tracks the initial, previous and current line states.
///
/// # Method Chaining
///
/// All methods return `self`, enabling fluent method chaining for readable tests.
///
/// # Panics
///
/// All assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location.
#[derive(Debug)]
pub struct LineTester {
    board: Board,
    line_index: usize,
    initial: Vec<Cell>,
    previous: Vec<Cell>,
}

impl LineTester {
    /// Creates a new tester from clue text and line text.
    ///
    /// The clue format matches [`Clue::from_str`](std::str::FromStr) and the line uses
    /// `#`, `.` and `?` for on, off and undetermined cells.
    ///
    /// # Panics
    ///
    /// Panics if the clue or line cannot be parsed, or if the clue does not
    /// fit the line.
    #[track_caller]
    pub fn new(clue: &str, line: &str) -> Self {
        let clue = clue.parse::<Clue>().unwrap();
        let cells = line
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .map(|ch| Cell::from_char(ch).unwrap())
            .collect::<Vec<_>>();
        let width = cells.len();

        let mut board =
            Board::from_clues(width, 1, vec![Clue::empty(); width], vec![clue]).unwrap();
        let line_index = width;
        for (i, &cell) in cells.iter().enumerate() {
            board.set_line_cell(line_index, i, cell);
        }

        Self {
            board,
            line_index,
            initial: cells.clone(),
            previous: cells,
        }
    }

    fn current(&self) -> Vec<Cell> {
        self.board.line_cells(&self.board.lines()[self.line_index])
    }

    /// Applies the line solver once and returns self for chaining.
    ///
    /// Also asserts that `find_step` and `apply` agree.
    ///
    /// # Panics
    ///
    /// Panics if the solver returns an error.
    #[track_caller]
    pub fn apply_once(mut self) -> Self {
        let solver = LineSolver::new();
        self.previous = self.current();
        let step = solver.find_step(&self.board, self.line_index).unwrap();
        let changed = solver.apply(&mut self.board, self.line_index).unwrap();
        Self::assert_step_consistent(&self.previous, &self.current(), step.as_ref(), changed);
        self
    }

    #[track_caller]
    fn assert_step_consistent(
        before: &[Cell],
        after: &[Cell],
        step: Option<&LineStep>,
        changed: bool,
    ) {
        match step {
            None => {
                assert!(
                    !changed,
                    "Expected apply to report no change when find_step returned None"
                );
                assert_eq!(before, after, "Expected line to remain unchanged");
            }
            Some(step) => {
                assert!(
                    changed,
                    "Expected apply to report a change when find_step returned a step"
                );
                assert!(!step.changes().is_empty(), "Expected a non-empty step");
                for change in step.changes() {
                    assert_eq!(
                        after[change.cell_index], change.cell,
                        "Expected cell {} to be {:?} after applying the step",
                        change.cell_index, change.cell
                    );
                }
            }
        }
    }

    /// Asserts that an initially undetermined cell is now forced to `cell`.
    ///
    /// # Panics
    ///
    /// Panics if the cell was already determined or has a different value.
    #[track_caller]
    pub fn assert_forced(self, i: usize, cell: Cell) -> Self {
        let initial = self.initial[i];
        let current = self.current()[i];
        assert!(
            !initial.is_determined(),
            "Expected initial cell {i} to be undetermined, but was {initial:?}"
        );
        assert_eq!(
            current, cell,
            "Expected cell {i} to be forced to {cell:?}, but is {current:?}"
        );
        self
    }

    /// Asserts that a cell has not changed since the tester was created.
    ///
    /// # Panics
    ///
    /// Panics if the cell differs from its initial state.
    #[track_caller]
    pub fn assert_no_change(self, i: usize) -> Self {
        let initial = self.initial[i];
        let current = self.current()[i];
        assert_eq!(
            initial, current,
            "Expected no change at cell {i}, but it changed from {initial:?} to {current:?}"
        );
        self
    }

    /// Asserts that the whole line equals its initial state.
    ///
    /// # Panics
    ///
    /// Panics if any cell changed.
    #[track_caller]
    pub fn assert_unchanged_line(self) -> Self {
        let current = self.current();
        assert_eq!(
            self.initial, current,
            "Expected line to be unchanged, but it is {current:?}"
        );
        self
    }

    /// Asserts that the most recent application changed nothing.
    ///
    /// # Panics
    ///
    /// Panics if the line differs from its state before the last application.
    #[track_caller]
    pub fn assert_unchanged_since_last(self) -> Self {
        let current = self.current();
        assert_eq!(
            self.previous, current,
            "Expected the last application to change nothing"
        );
        self
    }

    /// Asserts that the whole line equals `line` (`#`, `.`, `?`).
    ///
    /// # Panics
    ///
    /// Panics if the line differs.
    #[track_caller]
    pub fn assert_line(self, line: &str) -> Self {
        let expected = line
            .chars()
            .filter_map(Cell::from_char)
            .collect::<Vec<_>>();
        let current = self.current();
        assert_eq!(current, expected, "Expected line to be {line:?}");
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_places_line_on_single_row_board() {
        let tester = LineTester::new("2", "#?.?");
        assert_eq!(tester.board.height(), 1);
        assert_eq!(tester.board.width(), 4);
        assert_eq!(tester.line_index, 4);
        assert_eq!(
            tester.current(),
            [Cell::On, Cell::Undetermined, Cell::Off, Cell::Undetermined]
        );
    }

    #[test]
    fn test_apply_once_tracks_previous_state() {
        LineTester::new("2", "#?.?")
            .apply_once()
            .assert_line("##..")
            .apply_once()
            .assert_unchanged_since_last();
    }

    #[test]
    #[should_panic(expected = "Expected cell 0 to be forced")]
    fn test_assert_forced_fails_on_wrong_value() {
        LineTester::new("3", "?????")
            .apply_once()
            .assert_forced(0, Cell::On);
    }

    #[test]
    #[should_panic(expected = "Expected no change at cell 2")]
    fn test_assert_no_change_fails_on_forced_cell() {
        LineTester::new("3", "?????")
            .apply_once()
            .assert_no_change(2);
    }
}
