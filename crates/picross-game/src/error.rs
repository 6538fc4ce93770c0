use picross_core::BoardError;
use picross_solver::SolverError;

/// Errors returned by [`Game`](crate::Game) operations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GameError {
    /// The puzzle could not be built.
    #[display("invalid puzzle: {_0}")]
    Board(#[from] BoardError),
    /// The hint solver failed on the current board.
    #[display("hint failed: {_0}")]
    Solver(#[from] SolverError),
    /// Undo is not implemented.
    #[display("undo is not supported")]
    UndoUnsupported,
}
