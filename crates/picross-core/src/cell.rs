//! Tri-state cell representation.

use std::fmt::{self, Display};

/// The state of a single picross cell.
///
/// A cell is either known to be filled ([`Cell::On`]), known to be empty
/// ([`Cell::Off`]), or not yet deduced ([`Cell::Undetermined`]).
///
/// # Examples
///
/// ```
/// use picross_core::Cell;
///
/// let cell = Cell::Undetermined;
/// assert!(!cell.is_determined());
/// assert_eq!(cell.toggled(), Cell::On);
/// assert_eq!(Cell::On.to_string(), "#");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// The cell is known to be empty.
    Off,
    /// The cell has not been deduced yet.
    #[default]
    Undetermined,
    /// The cell is known to be filled.
    On,
}

impl Cell {
    /// Array containing all cell states in toggle order.
    pub const ALL: [Self; 3] = [Self::Off, Self::Undetermined, Self::On];

    /// Returns `true` if the cell is [`Cell::On`] or [`Cell::Off`].
    #[must_use]
    #[inline]
    pub const fn is_determined(self) -> bool {
        !matches!(self, Self::Undetermined)
    }

    /// Returns `true` if the cell is [`Cell::On`].
    #[must_use]
    #[inline]
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    /// Returns the next state in the user toggle cycle.
    ///
    /// The cycle is `Off → Undetermined → On → Off`.
    #[must_use]
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Off => Self::Undetermined,
            Self::Undetermined => Self::On,
            Self::On => Self::Off,
        }
    }

    /// Returns `true` if a known cell state does not contradict `candidate`.
    ///
    /// An undetermined cell agrees with every candidate value.
    #[must_use]
    #[inline]
    pub const fn admits(self, candidate: Self) -> bool {
        match self {
            Self::Undetermined => true,
            Self::Off => matches!(candidate, Self::Off),
            Self::On => matches!(candidate, Self::On),
        }
    }

    /// Parses a cell from its text representation.
    ///
    /// `#` is on, `.` is off, `?` and `_` are undetermined.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Self::On),
            '.' => Some(Self::Off),
            '?' | '_' => Some(Self::Undetermined),
            _ => None,
        }
    }

    /// Returns the text representation of the cell.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Off => '.',
            Self::Undetermined => '?',
            Self::On => '#',
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
