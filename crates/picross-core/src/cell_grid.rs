//! Rectangular grids of cells with a text format.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{BoardError, Cell, Position};

/// A rectangular grid of [`Cell`]s stored in row-major order.
///
/// `CellGrid` is used for ground-truth solutions and test fixtures. It has a
/// text format with one grid row per text line:
///
/// - `#` is a filled cell
/// - `.` is an empty cell
/// - `?` or `_` is an undetermined cell
/// - spaces and blank lines are ignored
///
/// # Examples
///
/// ```
/// use picross_core::{Cell, CellGrid, Position};
///
/// let grid: CellGrid = "
///     .#.
///     ####
/// ".parse()?;
/// assert_eq!(grid.width(), 3);
/// assert_eq!(grid.height(), 2);
/// assert_eq!(grid[Position::new(1, 0)], Cell::On);
/// assert_eq!(grid.column(0), vec![Cell::Off, Cell::On]);
/// # Ok::<(), picross_core::BoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl CellGrid {
    /// Creates a grid with every cell undetermined.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyGrid`] if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::EmptyGrid);
        }
        Ok(Self::from_parts(
            width,
            height,
            vec![Cell::Undetermined; width * height],
        ))
    }

    /// Wraps row-major `cells` whose dimensions are already known to be
    /// non-zero.
    pub(crate) fn from_parts(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        debug_assert!(width > 0 && height > 0);
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    /// Builds a grid from rows of cells.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyGrid`] if there are no cells, or
    /// [`BoardError::RaggedRow`] if the rows have different widths.
    pub fn from_rows<R>(rows: R) -> Result<Self, BoardError>
    where
        R: IntoIterator<Item = Vec<Cell>>,
    {
        let mut width = None;
        let mut height = 0;
        let mut cells = Vec::new();
        for (row, row_cells) in rows.into_iter().enumerate() {
            let expected = *width.get_or_insert(row_cells.len());
            if row_cells.len() != expected {
                return Err(BoardError::RaggedRow {
                    row,
                    expected,
                    actual: row_cells.len(),
                });
            }
            cells.extend(row_cells);
            height += 1;
        }
        let width = width.unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(BoardError::EmptyGrid);
        }
        Ok(Self::from_parts(width, height, cells))
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the cell at `pos`, or `None` if it is out of bounds.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.contains(pos).then(|| self.cells[pos.index(self.width)])
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x() < self.width && pos.y() < self.height
    }

    /// Returns the cells of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y` is out of bounds.
    #[must_use]
    pub fn row(&self, y: usize) -> &[Cell] {
        assert!(y < self.height, "row {y} out of bounds");
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    /// Returns the cells of column `x`, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `x` is out of bounds.
    #[must_use]
    pub fn column(&self, x: usize) -> Vec<Cell> {
        assert!(x < self.width, "column {x} out of bounds");
        self.cells
            .iter()
            .skip(x)
            .step_by(self.width)
            .copied()
            .collect()
    }

    /// Returns all cells in row-major order.
    #[must_use]
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the first undetermined cell position, if any.
    #[must_use]
    pub fn first_undetermined(&self) -> Option<Position> {
        self.cells
            .iter()
            .position(|cell| !cell.is_determined())
            .map(|i| Position::from_index(i, self.width))
    }
}

impl Index<Position> for CellGrid {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Self::Output {
        assert!(self.contains(pos), "position {pos} out of bounds");
        &self.cells[pos.index(self.width)]
    }
}

impl IndexMut<Position> for CellGrid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        assert!(self.contains(pos), "position {pos} out of bounds");
        &mut self.cells[pos.index(self.width)]
    }
}

impl FromStr for CellGrid {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(|line| {
                line.chars()
                    .filter(|ch| !ch.is_whitespace())
                    .map(|ch| Cell::from_char(ch).ok_or(BoardError::InvalidCellChar { ch }))
                    .collect::<Result<Vec<_>, _>>()
            })
            .filter(|row| !matches!(row, Ok(cells) if cells.is_empty()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }
}

impl Display for CellGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.width).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let text = "#.#\n.?.\n_##";
        let grid: CellGrid = text.parse().unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid[Position::new(1, 1)], Cell::Undetermined);
        assert_eq!(grid[Position::new(0, 2)], Cell::Undetermined);
        assert_eq!(grid.to_string(), "#.#\n.?.\n?##");
    }

    #[test]
    fn test_parse_ignores_blank_lines_and_spaces() {
        let grid: CellGrid = "\n  # . #\n\n  . # .\n".parse().unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.row(1), &[Cell::Off, Cell::On, Cell::Off]);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "##\n#".parse::<CellGrid>(),
            Err(BoardError::RaggedRow {
                row: 1,
                expected: 2,
                actual: 1
            })
        ));
        assert!(matches!(
            "#x".parse::<CellGrid>(),
            Err(BoardError::InvalidCellChar { ch: 'x' })
        ));
        assert!(matches!(
            "  \n".parse::<CellGrid>(),
            Err(BoardError::EmptyGrid)
        ));
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert_eq!(CellGrid::new(0, 2), Err(BoardError::EmptyGrid));
        assert_eq!(CellGrid::new(2, 0), Err(BoardError::EmptyGrid));

        let grid = CellGrid::new(2, 1).unwrap();
        assert_eq!(grid.to_string(), "??");
    }

    #[test]
    fn test_column_and_bounds() {
        let grid: CellGrid = "#.\n.#\n##".parse().unwrap();
        assert_eq!(grid.column(1), vec![Cell::Off, Cell::On, Cell::On]);
        assert_eq!(grid.get(Position::new(2, 0)), None);
        assert_eq!(grid.get(Position::new(1, 2)), Some(Cell::On));
        assert_eq!(grid.first_undetermined(), None);
        assert_eq!(
            CellGrid::new(2, 2).unwrap().first_undetermined(),
            Some(Position::new(0, 0))
        );
    }
}
