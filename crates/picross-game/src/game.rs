use picross_core::{Board, Cell, CellGrid, Position};
use picross_solver::{HintSolver, HintStats, LineStep};

use crate::GameError;

/// A picross game session.
///
/// Owns the board of the current puzzle and exposes the operations an input
/// or rendering layer needs: cell queries, cell toggling, and hints.
///
/// # Example
///
/// ```
/// use picross_core::{Cell, Position};
/// use picross_game::Game;
///
/// let mut game = Game::from_solution(&"
///     ###
///     #.
/// ".parse()?)?;
///
/// // Column 0 has clue `2` in two cells.
/// assert!(game.hint()?);
/// assert_eq!(game.cell(Position::new(0, 0)), Some(Cell::On));
/// assert_eq!(game.cell(Position::new(0, 1)), Some(Cell::On));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    solver: HintSolver,
    stats: HintStats,
}

impl Game {
    /// Creates a new game for `board`.
    ///
    /// The board is used as is; cells that are already determined stay so.
    #[must_use]
    pub fn new(board: Board) -> Self {
        let solver = HintSolver::new();
        let stats = solver.new_stats(&board);
        Self {
            board,
            solver,
            stats,
        }
    }

    /// Creates a new game whose clues are derived from a ground-truth solution.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Board`] if the solution is not a valid puzzle.
    pub fn from_solution(solution: &CellGrid) -> Result<Self, GameError> {
        Ok(Self::new(Board::from_solution(solution)?))
    }

    /// Replaces the current puzzle with `board` and resets hint statistics.
    pub fn load(&mut self, board: Board) {
        log::debug!("loading {}x{} puzzle", board.width(), board.height());
        self.stats = self.solver.new_stats(&board);
        self.board = board;
    }

    /// Returns the board of the current puzzle.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the state of the cell at `pos`, or `None` if it is out of
    /// bounds.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.board.cell(pos)
    }

    /// Cycles the cell at `pos` through `Off → Undetermined → On → Off`.
    ///
    /// Returns `false` if `pos` is out of bounds.
    pub fn toggle(&mut self, pos: Position) -> bool {
        let valid = self.board.toggle(pos);
        if !valid {
            log::debug!("ignored toggle outside the board at {pos}");
        }
        valid
    }

    /// Applies one hint.
    ///
    /// Runs the line solver over the columns, then the rows, and applies the
    /// first line that changes. Returns `Ok(false)` when no line can be
    /// updated; the board is left untouched in that case.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Solver`] if the known cells of some line
    /// contradict its clue, for example after a wrong toggle, and no other
    /// line can be updated.
    pub fn hint(&mut self) -> Result<bool, GameError> {
        Ok(self.solver.step(&mut self.board, &mut self.stats)?)
    }

    /// Finds the next hint without applying it.
    ///
    /// # Errors
    ///
    /// Same as [`hint`](Self::hint).
    pub fn find_hint(&self) -> Result<Option<LineStep>, GameError> {
        Ok(self.solver.find_step(&self.board)?)
    }

    /// Returns statistics about the hints applied to the current puzzle.
    #[must_use]
    pub fn hint_stats(&self) -> &HintStats {
        &self.stats
    }

    /// Reverts the last change.
    ///
    /// Solving history is not recorded, so this always fails.
    ///
    /// # Errors
    ///
    /// Always returns [`GameError::UndoUnsupported`].
    pub fn undo(&mut self) -> Result<(), GameError> {
        Err(GameError::UndoUnsupported)
    }

    /// Checks if the puzzle is solved.
    ///
    /// Any arrangement that satisfies every clue counts, not only the stored
    /// solution.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.board.is_solved()
    }
}

#[cfg(test)]
mod tests {
    use picross_core::{BoardError, Clue, LineKind};
    use picross_solver::SolverError;

    use super::*;

    const TEST_SOLUTION: &str = "
        .#.
        ###
        .#.
    ";

    fn test_game() -> Game {
        Game::from_solution(&TEST_SOLUTION.parse().unwrap()).unwrap()
    }

    #[test]
    fn test_new_game_starts_undetermined() {
        let game = test_game();
        assert!(
            game.board()
                .cells()
                .all(|(_, cell)| cell == Cell::Undetermined)
        );
        assert!(!game.is_solved());
        assert!(!game.hint_stats().has_progress());
    }

    #[test]
    fn test_toggle_cycles_and_rejects_out_of_bounds() {
        let mut game = test_game();
        let pos = Position::new(2, 2);
        assert!(game.toggle(pos));
        assert_eq!(game.cell(pos), Some(Cell::On));
        assert!(game.toggle(pos));
        assert_eq!(game.cell(pos), Some(Cell::Off));
        assert!(game.toggle(pos));
        assert_eq!(game.cell(pos), Some(Cell::Undetermined));

        assert!(!game.toggle(Position::new(3, 0)));
        assert_eq!(game.cell(Position::new(3, 0)), None);
    }

    #[test]
    fn test_hints_solve_line_solvable_puzzle() {
        let mut game = test_game();
        while game.hint().unwrap() {}
        assert!(game.is_solved());
        assert_eq!(game.hint_stats().cells_forced(), 9);
        // Once solved, a hint is a silent no-op.
        assert!(!game.hint().unwrap());
    }

    #[test]
    fn test_find_hint_does_not_mutate() {
        let game = test_game();
        let step = game.find_hint().unwrap().unwrap();
        assert_eq!(step.kind(), LineKind::Column { x: 1 });
        assert!(
            game.board()
                .cells()
                .all(|(_, cell)| cell == Cell::Undetermined)
        );
    }

    #[test]
    fn test_hint_after_wrong_toggle_reports_contradiction() {
        let mut game = test_game();
        // Column 0 has clue `1`; filling two of its cells contradicts it.
        game.toggle(Position::new(0, 0));
        game.toggle(Position::new(0, 2));

        // Other lines keep producing hints until only contradictions remain.
        let mut hints = 0;
        let err = loop {
            match game.hint() {
                Ok(true) => hints += 1,
                Ok(false) => panic!("expected a contradiction once hints run out"),
                Err(err) => break err,
            }
        };
        assert_eq!(hints, 3);
        assert_eq!(game.cell(Position::new(1, 1)), Some(Cell::On));
        assert_eq!(game.cell(Position::new(2, 0)), Some(Cell::Off));
        assert_eq!(
            err,
            GameError::Solver(SolverError::NoValidCandidate {
                line: LineKind::Column { x: 0 }
            })
        );
    }

    #[test]
    fn test_undo_is_unsupported() {
        let mut game = test_game();
        game.toggle(Position::new(0, 0));
        assert_eq!(game.undo(), Err(GameError::UndoUnsupported));
        assert_eq!(game.cell(Position::new(0, 0)), Some(Cell::On));
    }

    #[test]
    fn test_load_replaces_board_and_stats() {
        let mut game = test_game();
        assert!(game.hint().unwrap());
        assert!(game.hint_stats().has_progress());

        let board = Board::from_clues(
            2,
            1,
            vec![Clue::new([1]).unwrap(), Clue::empty()],
            vec![Clue::new([1]).unwrap()],
        )
        .unwrap();
        game.load(board);
        assert_eq!(game.board().width(), 2);
        assert_eq!(game.hint_stats().applications().len(), 3);
        assert!(!game.hint_stats().has_progress());
        assert!(game.board().solution().is_none());
    }

    #[test]
    fn test_invalid_solution_is_rejected() {
        let grid: CellGrid = "#?".parse().unwrap();
        assert_eq!(
            Game::from_solution(&grid).map(|_| ()),
            Err(GameError::Board(BoardError::UndeterminedSolutionCell {
                position: Position::new(1, 0)
            }))
        );
    }
}
