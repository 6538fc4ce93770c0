//! Line clues and clue derivation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use tinyvec::TinyVec;

use crate::{BoardError, Cell};

type Blocks = TinyVec<[usize; 8]>;

/// The ordered block lengths of a single row or column.
///
/// Every block length is positive. The empty clue describes a line with no
/// filled cells.
///
/// # Examples
///
/// ```
/// use picross_core::{Cell, Clue};
///
/// let clue = Clue::new([3, 1])?;
/// assert_eq!(clue.blocks(), &[3, 1]);
/// assert_eq!(clue.min_len(), Some(5));
/// assert!(clue.fits(5));
/// assert!(!clue.fits(4));
///
/// let derived = Clue::from_cells(&[Cell::On, Cell::Off, Cell::On, Cell::On]);
/// assert_eq!(derived.blocks(), &[1, 2]);
/// # Ok::<(), picross_core::BoardError>(())
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Clue {
    blocks: Blocks,
}

impl Clue {
    /// Returns the clue of a line without filled cells.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a clue from block lengths.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ZeroLengthBlock`] if any block length is zero.
    pub fn new<I>(blocks: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = usize>,
    {
        let blocks = blocks.into_iter().collect::<Blocks>();
        if let Some(index) = blocks.iter().position(|&len| len == 0) {
            return Err(BoardError::ZeroLengthBlock { index });
        }
        Ok(Self { blocks })
    }

    /// Derives the clue of a concrete line.
    ///
    /// Each maximal run of [`Cell::On`] becomes one block, in left-to-right
    /// order. Any other cell state ends a run.
    #[must_use]
    pub fn from_cells(cells: &[Cell]) -> Self {
        let mut blocks = Blocks::new();
        let mut run = 0;
        for &cell in cells {
            if cell.is_on() {
                run += 1;
            } else if run > 0 {
                blocks.push(run);
                run = 0;
            }
        }
        if run > 0 {
            blocks.push(run);
        }
        Self { blocks }
    }

    /// Returns the block lengths in order.
    #[must_use]
    #[inline]
    pub fn blocks(&self) -> &[usize] {
        &self.blocks
    }

    /// Returns the number of blocks.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns `true` if the clue has no blocks.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Returns the total number of filled cells the clue describes.
    ///
    /// Returns `None` if the sum overflows `usize`.
    #[must_use]
    pub fn filled_count(&self) -> Option<usize> {
        self.blocks
            .iter()
            .try_fold(0usize, |sum, &len| sum.checked_add(len))
    }

    /// Returns the shortest line length that can hold this clue.
    ///
    /// This is the sum of the block lengths plus one mandatory gap between
    /// each pair of adjacent blocks. Returns `None` if it overflows `usize`.
    #[must_use]
    pub fn min_len(&self) -> Option<usize> {
        self.filled_count()?
            .checked_add(self.blocks.len().saturating_sub(1))
    }

    /// Returns `true` if the clue can be placed in a line of `len` cells.
    #[must_use]
    pub fn fits(&self, len: usize) -> bool {
        self.min_len().is_some_and(|min_len| min_len <= len)
    }

    /// Returns the number of off cells free to move between blocks.
    ///
    /// Returns `None` if the clue does not fit in `len` cells.
    #[must_use]
    pub fn floating_off_count(&self, len: usize) -> Option<usize> {
        len.checked_sub(self.min_len()?)
    }
}

impl Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.blocks.is_empty() {
            return write!(f, "0");
        }
        for (i, len) in self.blocks.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{len}")?;
        }
        Ok(())
    }
}

impl FromStr for Clue {
    type Err = BoardError;

    /// Parses whitespace- or comma-separated block lengths.
    ///
    /// A lone `0` or an empty string is the empty clue.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>();
        if tokens == ["0"] {
            return Ok(Self::empty());
        }
        let blocks = tokens
            .iter()
            .map(|t| {
                t.parse::<usize>().map_err(|_| BoardError::InvalidClueText {
                    text: s.to_owned(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(blocks)
    }
}
