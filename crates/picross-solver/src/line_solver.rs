use picross_core::{Board, Cell, Clue, LineKind, Position};

use crate::{SolverError, candidate::Candidates};

/// The outcome of intersecting every candidate line that agrees with the
/// known cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDeduction {
    forced: Vec<Cell>,
    valid_candidates: usize,
    changes: Vec<(usize, Cell)>,
}

impl LineDeduction {
    /// Returns the per-position result of the intersection.
    ///
    /// A determined value means every valid candidate agrees on it.
    /// [`Cell::Undetermined`] means the candidates disagree. When there is no
    /// valid candidate this is a copy of the input line.
    #[must_use]
    pub fn forced(&self) -> &[Cell] {
        &self.forced
    }

    /// Returns the number of candidate lines that agree with the known cells.
    #[must_use]
    pub fn valid_candidates(&self) -> usize {
        self.valid_candidates
    }

    /// Returns `true` if no candidate agrees with the known cells.
    #[must_use]
    pub fn is_contradiction(&self) -> bool {
        self.valid_candidates == 0
    }

    /// Returns `(cell index, forced value)` for every position whose forced
    /// value differs from the input line.
    #[must_use]
    pub fn changes(&self) -> &[(usize, Cell)] {
        &self.changes
    }
}

/// A single forced cell within a [`LineStep`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineChange {
    /// Index of the cell within the line.
    pub cell_index: usize,
    /// Absolute board position of the cell.
    pub position: Position,
    /// The value the cell is forced to.
    pub cell: Cell,
}

/// The changes deduced for one line of a board, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineStep {
    line_index: usize,
    kind: LineKind,
    changes: Vec<LineChange>,
}

impl LineStep {
    /// Returns the index of the line in board line order.
    #[must_use]
    pub fn line_index(&self) -> usize {
        self.line_index
    }

    /// Returns which row or column the step applies to.
    #[must_use]
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Returns the forced cells. Never empty.
    #[must_use]
    pub fn changes(&self) -> &[LineChange] {
        &self.changes
    }

    /// Writes the forced cells into `board`.
    ///
    /// Returns `true` if any cell changed.
    pub fn apply_to(&self, board: &mut Board) -> bool {
        let mut changed = false;
        for change in &self.changes {
            changed |= board.set_line_cell(self.line_index, change.cell_index, change.cell);
        }
        changed
    }
}

/// Deduces forced cells of a single line by exhaustive candidate
/// intersection.
///
/// Every arrangement of the line's clue is enumerated. Arrangements that
/// contradict a known cell are discarded, and the positions on which all
/// remaining arrangements agree are forced. Filtering and intersection are
/// folded over the lazy candidate sequence, so only one candidate buffer and
/// one accumulator are live at a time.
///
/// The solver is stateless: each call recomputes from the current cells, so
/// calling it twice without intervening changes reports no change the second
/// time.
///
/// # Examples
///
/// ```
/// use picross_core::{Cell, Clue};
/// use picross_solver::LineSolver;
///
/// let clue = Clue::new([3])?;
/// let deduction = LineSolver::new().deduce(&clue, &[Cell::Undetermined; 5])?;
/// assert_eq!(deduction.valid_candidates(), 3);
/// assert_eq!(deduction.changes(), &[(2, Cell::On)]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct LineSolver;

impl LineSolver {
    /// Creates a new `LineSolver`.
    #[must_use]
    pub const fn new() -> Self {
        LineSolver
    }

    /// Intersects all candidates of `clue` that agree with `cells`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::ClueDoesNotFit`] if the clue needs more cells
    /// than `cells` has.
    pub fn deduce(&self, clue: &Clue, cells: &[Cell]) -> Result<LineDeduction, SolverError> {
        let mut candidates = Candidates::new(clue, cells.len())?;
        let mut consensus: Option<Vec<Cell>> = None;
        let mut valid_candidates = 0;

        while let Some(candidate) = candidates.next_candidate() {
            let agrees = cells
                .iter()
                .zip(candidate)
                .all(|(known, &value)| known.admits(value));
            if !agrees {
                continue;
            }
            valid_candidates += 1;
            if let Some(acc) = consensus.as_mut() {
                for (acc, &value) in acc.iter_mut().zip(candidate) {
                    if *acc != value {
                        *acc = Cell::Undetermined;
                    }
                }
            } else {
                consensus = Some(candidate.to_vec());
            }
        }

        let forced = consensus.unwrap_or_else(|| cells.to_vec());
        let changes = forced
            .iter()
            .zip(cells)
            .enumerate()
            .filter(|(_, (forced, current))| forced != current)
            .map(|(i, (&forced, _))| (i, forced))
            .collect();
        Ok(LineDeduction {
            forced,
            valid_candidates,
            changes,
        })
    }

    /// Finds the cells of a board line that can be forced, without writing
    /// them.
    ///
    /// Returns `Ok(None)` if nothing new can be deduced for the line.
    ///
    /// # Errors
    ///
    /// - [`SolverError::LineIndexOutOfRange`] if `line_index` is not a line of
    ///   `board`.
    /// - [`SolverError::NoValidCandidate`] if the line's known cells
    ///   contradict its clue.
    pub fn find_step(
        &self,
        board: &Board,
        line_index: usize,
    ) -> Result<Option<LineStep>, SolverError> {
        let line = board
            .line(line_index)
            .ok_or(SolverError::LineIndexOutOfRange { index: line_index })?;
        let cells = board.line_cells(line);
        let deduction = self.deduce(line.clue(), &cells)?;
        if deduction.is_contradiction() {
            return Err(SolverError::NoValidCandidate { line: line.kind() });
        }
        if deduction.changes.is_empty() {
            return Ok(None);
        }

        let kind = line.kind();
        let changes = deduction
            .changes
            .iter()
            .map(|&(cell_index, cell)| LineChange {
                cell_index,
                position: kind.position_from_cell_index(cell_index),
                cell,
            })
            .collect();
        Ok(Some(LineStep {
            line_index,
            kind,
            changes,
        }))
    }

    /// Deduces and writes the forced cells of a board line.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - At least one cell was written
    /// * `Ok(false)` - Nothing new could be deduced for the line
    ///
    /// # Errors
    ///
    /// Same as [`find_step`](Self::find_step). Nothing is written on error.
    pub fn apply(&self, board: &mut Board, line_index: usize) -> Result<bool, SolverError> {
        match self.find_step(board, line_index)? {
            Some(step) => Ok(step.apply_to(board)),
            None => Ok(false),
        }
    }
}
