//! Board position type.

use std::fmt::{self, Display};

/// A cell coordinate on a picross board.
///
/// `x` is the column index (left to right) and `y` is the row index
/// (top to bottom). Positions are not bound to a board size; use
/// [`Board::contains`](crate::Board::contains) to check bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: usize,
    y: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the column index.
    #[must_use]
    #[inline]
    pub const fn x(self) -> usize {
        self.x
    }

    /// Returns the row index.
    #[must_use]
    #[inline]
    pub const fn y(self) -> usize {
        self.y
    }

    /// Returns the row-major index of this position on a board of `width` columns.
    #[must_use]
    #[inline]
    pub const fn index(self, width: usize) -> usize {
        self.y * width + self.x
    }

    /// Builds a position from a row-major index on a board of `width` columns.
    #[must_use]
    #[inline]
    pub const fn from_index(index: usize, width: usize) -> Self {
        Self::new(index % width, index / width)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
