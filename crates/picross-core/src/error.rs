use crate::{Clue, LineKind, Position};

/// Errors raised while building a board or parsing puzzle text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// A clue needs more cells than its line has.
    #[display("clue `{clue}` does not fit in {line} of length {len}")]
    MalformedClue {
        /// The offending line.
        line: LineKind,
        /// The clue that does not fit.
        clue: Clue,
        /// The line length.
        len: usize,
    },
    /// A clue contains a block of length zero.
    #[display("clue block {index} has zero length")]
    ZeroLengthBlock {
        /// Index of the zero-length block within the clue.
        index: usize,
    },
    /// A clue could not be parsed from text.
    #[display("invalid clue text: {text:?}")]
    InvalidClueText {
        /// The rejected text.
        text: String,
    },
    /// The number of supplied clues does not match the board dimension.
    #[display("expected {expected} clues, got {actual}")]
    ClueCountMismatch {
        /// Expected number of clues.
        expected: usize,
        /// Supplied number of clues.
        actual: usize,
    },
    /// A grid has no cells.
    #[display("grid is empty")]
    EmptyGrid,
    /// A grid row has a different width from the first row.
    #[display("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        /// Row index.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of this row.
        actual: usize,
    },
    /// Grid text contains a character that is not a cell.
    #[display("invalid cell character {ch:?}")]
    InvalidCellChar {
        /// The rejected character.
        ch: char,
    },
    /// A solution grid contains an undetermined cell.
    #[display("solution cell at {position} is undetermined")]
    UndeterminedSolutionCell {
        /// Position of the undetermined cell.
        position: Position,
    },
}
