//! Rows and columns of a board.

use std::fmt::{self, Display};

use crate::{Clue, Position};

/// Identifies a picross line (row or column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// A column identified by its x coordinate.
    Column {
        /// Column index.
        x: usize,
    },
    /// A row identified by its y coordinate.
    Row {
        /// Row index.
        y: usize,
    },
}

impl LineKind {
    /// Converts a cell index within the line into an absolute [`Position`].
    ///
    /// Cell indices run top to bottom for columns and left to right for rows.
    #[must_use]
    #[inline]
    pub const fn position_from_cell_index(self, i: usize) -> Position {
        match self {
            Self::Column { x } => Position::new(x, i),
            Self::Row { y } => Position::new(i, y),
        }
    }
}

impl Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Column { x } => write!(f, "column {x}"),
            Self::Row { y } => write!(f, "row {y}"),
        }
    }
}

/// A row or column of a [`Board`](crate::Board) together with its clue.
///
/// A line does not own its cells. It holds indices into the board's flat cell
/// store, so a cell written through one line is visible through the crossing
/// line immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    kind: LineKind,
    cells: Vec<usize>,
    clue: Clue,
}

impl Line {
    pub(crate) fn new(kind: LineKind, cells: Vec<usize>, clue: Clue) -> Self {
        Self { kind, cells, clue }
    }

    /// Returns which row or column this line is.
    #[must_use]
    #[inline]
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Returns the line's clue.
    #[must_use]
    #[inline]
    pub fn clue(&self) -> &Clue {
        &self.clue
    }

    /// Returns the board cell-store indices of the line, in line order.
    #[must_use]
    #[inline]
    pub fn cell_indices(&self) -> &[usize] {
        &self.cells
    }

    /// Returns the number of cells in the line.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the line has no cells.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns an iterator over the absolute positions of the line's cells.
    pub fn positions(&self) -> impl ExactSizeIterator<Item = Position> + '_ {
        let kind = self.kind;
        (0..self.cells.len()).map(move |i| kind.position_from_cell_index(i))
    }
}
