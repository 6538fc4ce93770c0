use picross_core::{Clue, LineKind};

/// Errors that can occur while deducing cells.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolverError {
    /// A clue needs more cells than the line has.
    ///
    /// Boards reject such clues at construction, so this only surfaces when
    /// the line solver is called on a free-standing clue.
    #[display("clue `{clue}` does not fit in a line of length {len}")]
    ClueDoesNotFit {
        /// The clue that does not fit.
        clue: Clue,
        /// The line length.
        len: usize,
    },
    /// No arrangement of the clue agrees with the line's known cells.
    #[display("no arrangement of the clue of {line} matches its known cells")]
    NoValidCandidate {
        /// The contradictory line.
        line: LineKind,
    },
    /// A line index is outside the board's line list.
    #[display("line index {index} is out of range")]
    LineIndexOutOfRange {
        /// The requested index.
        index: usize,
    },
}
