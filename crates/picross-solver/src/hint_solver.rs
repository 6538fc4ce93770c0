use picross_core::Board;

use crate::{LineSolver, LineStep, SolverError};

/// Statistics collected while producing hints.
///
/// Tracks how many times each line produced a hint, how many hints were
/// produced in total and how many cells they forced.
///
/// # Examples
///
/// ```
/// use picross_core::Board;
/// use picross_solver::HintSolver;
///
/// let board = Board::from_solution(&"#.\n##".parse()?)?;
/// let solver = HintSolver::new();
/// let stats = solver.new_stats(&board);
/// assert_eq!(stats.applications().len(), 4);
/// assert_eq!(stats.total_steps(), 0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintStats {
    applications: Vec<usize>,
    total_steps: usize,
    cells_forced: usize,
}

impl HintStats {
    /// Returns per-line hint counts in board line order (columns, then rows).
    ///
    /// Includes lines that never produced a hint with a count of `0`.
    #[must_use]
    pub fn applications(&self) -> &[usize] {
        &self.applications
    }

    /// Returns the total number of hints applied.
    ///
    /// This is the sum of all line applications.
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    /// Returns the total number of cells written by hints.
    #[must_use]
    pub fn cells_forced(&self) -> usize {
        self.cells_forced
    }

    /// Returns `true` if any hint was applied at least once.
    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.total_steps > 0
    }
}

/// Produces one incremental deduction per call.
///
/// `HintSolver` runs the [`LineSolver`] on each line in board order (all
/// columns, then all rows) and stops at the first line whose cells change.
/// It does not sweep to a global fixed point: a call either applies one
/// line's worth of forced cells or, if no line changes, does nothing.
///
/// # Examples
///
/// ```
/// use picross_core::{Board, Cell, Position};
/// use picross_solver::HintSolver;
///
/// let solution = "
///     ####
///     #.#
/// ".parse()?;
/// let mut board = Board::from_solution(&solution)?;
/// let solver = HintSolver::new();
/// let mut stats = solver.new_stats(&board);
///
/// // Column 0 has clue `2` in two cells, so both cells are forced.
/// assert!(solver.step(&mut board, &mut stats)?);
/// assert_eq!(board.cell(Position::new(0, 0)), Some(Cell::On));
/// assert_eq!(board.cell(Position::new(0, 1)), Some(Cell::On));
/// assert_eq!(stats.applications()[0], 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct HintSolver {
    line_solver: LineSolver,
}

impl HintSolver {
    /// Creates a new hint solver.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            line_solver: LineSolver::new(),
        }
    }

    /// Creates a statistics object aligned with `board`'s line order.
    #[must_use]
    pub fn new_stats(&self, board: &Board) -> HintStats {
        HintStats {
            applications: vec![0; board.lines().len()],
            total_steps: 0,
            cells_forced: 0,
        }
    }

    /// Applies the first line deduction that changes the board.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - A line was updated
    /// * `Ok(false)` - No line could be updated; the board is untouched
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::NoValidCandidate`] for the first contradictory
    /// line if some line contradicts its clue and no other line can be
    /// updated. Nothing is written in that case.
    pub fn step(&self, board: &mut Board, stats: &mut HintStats) -> Result<bool, SolverError> {
        debug_assert_eq!(board.lines().len(), stats.applications.len());

        let Some(step) = self.find_step(board)? else {
            log::debug!("no line can be updated");
            return Ok(false);
        };
        let changed = step.apply_to(board);
        debug_assert!(changed);

        stats.applications[step.line_index()] += 1;
        stats.total_steps += 1;
        stats.cells_forced += step.changes().len();
        log::debug!(
            "hint on {}: forced {} cell(s)",
            step.kind(),
            step.changes().len()
        );
        Ok(changed)
    }

    /// Finds the next hint without mutating the board.
    ///
    /// Lines whose known cells contradict their clue are logged and skipped,
    /// so a wrong toggle on one line does not block hints on the others.
    /// Returns `Ok(None)` when no line can be updated.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::NoValidCandidate`] for the first contradictory
    /// line if no other line can be updated.
    pub fn find_step(&self, board: &Board) -> Result<Option<LineStep>, SolverError> {
        let mut contradiction = None;
        for (index, line) in board.lines().iter().enumerate() {
            match self.line_solver.find_step(board, index) {
                Ok(Some(step)) => return Ok(Some(step)),
                Ok(None) => log::trace!("no deduction on {}", line.kind()),
                Err(err @ SolverError::NoValidCandidate { .. }) => {
                    log::warn!("skipping {}: {err}", line.kind());
                    contradiction.get_or_insert(err);
                }
                Err(err) => return Err(err),
            }
        }
        contradiction.map_or(Ok(None), Err)
    }
}
