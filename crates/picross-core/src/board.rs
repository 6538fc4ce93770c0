//! The puzzle board: cell storage, clues and lines.

use std::fmt::{self, Display};

use crate::{BoardError, Cell, CellGrid, Clue, Line, LineKind, Position};

/// A picross board.
///
/// The board owns the authoritative cell store (a flat row-major vector), the
/// optional ground-truth solution and every [`Line`] with its [`Clue`].
/// Lines are ordered all columns (left to right) followed by all rows (top to
/// bottom), and reference cells by store index.
///
/// Clues are validated when the board is built, so every line on a board is
/// known to be satisfiable on its own.
///
/// # Examples
///
/// ```
/// use picross_core::{Board, Cell, CellGrid, Position};
///
/// let solution: CellGrid = "
///     .#.
///     ####
///     .#.
/// ".parse()?;
/// let mut board = Board::from_solution(&solution)?;
///
/// assert_eq!(board.row_clue(1).map(ToString::to_string).as_deref(), Some("3"));
/// assert_eq!(board.cell(Position::new(0, 0)), Some(Cell::Undetermined));
///
/// assert!(board.toggle(Position::new(0, 0)));
/// assert_eq!(board.cell(Position::new(0, 0)), Some(Cell::On));
/// assert!(!board.toggle(Position::new(3, 0)));
/// # Ok::<(), picross_core::BoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    solution: Option<CellGrid>,
    lines: Vec<Line>,
}

impl Board {
    /// Builds a board from a ground-truth solution.
    ///
    /// Clues are derived for every column and row. All cells start
    /// undetermined.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UndeterminedSolutionCell`] if the solution has an
    /// undetermined cell.
    pub fn from_solution(solution: &CellGrid) -> Result<Self, BoardError> {
        if let Some(position) = solution.first_undetermined() {
            return Err(BoardError::UndeterminedSolutionCell { position });
        }
        let columns = (0..solution.width())
            .map(|x| Clue::from_cells(&solution.column(x)))
            .collect();
        let rows = (0..solution.height())
            .map(|y| Clue::from_cells(solution.row(y)))
            .collect();
        let mut board = Self::from_clues(solution.width(), solution.height(), columns, rows)?;
        board.solution = Some(solution.clone());
        Ok(board)
    }

    /// Builds a board from directly supplied clues.
    ///
    /// `columns` holds one clue per column (left to right) and `rows` one clue
    /// per row (top to bottom). All cells start undetermined.
    ///
    /// # Errors
    ///
    /// - [`BoardError::EmptyGrid`] if either dimension is zero.
    /// - [`BoardError::ClueCountMismatch`] if the clue counts do not match the
    ///   dimensions.
    /// - [`BoardError::MalformedClue`] if a clue needs more cells than its
    ///   line has.
    pub fn from_clues(
        width: usize,
        height: usize,
        columns: Vec<Clue>,
        rows: Vec<Clue>,
    ) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::EmptyGrid);
        }
        for (expected, actual) in [(width, columns.len()), (height, rows.len())] {
            if expected != actual {
                return Err(BoardError::ClueCountMismatch { expected, actual });
            }
        }

        let mut lines = Vec::with_capacity(width + height);
        for (x, clue) in columns.into_iter().enumerate() {
            let cells = (0..height).map(|y| Position::new(x, y).index(width));
            lines.push(Self::checked_line(LineKind::Column { x }, cells.collect(), clue)?);
        }
        for (y, clue) in rows.into_iter().enumerate() {
            let cells = (0..width).map(|x| Position::new(x, y).index(width));
            lines.push(Self::checked_line(LineKind::Row { y }, cells.collect(), clue)?);
        }

        log::debug!(
            "built {width}x{height} board with {} lines",
            lines.len()
        );
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Undetermined; width * height],
            solution: None,
            lines,
        })
    }

    fn checked_line(kind: LineKind, cells: Vec<usize>, clue: Clue) -> Result<Line, BoardError> {
        if !clue.fits(cells.len()) {
            return Err(BoardError::MalformedClue {
                line: kind,
                clue,
                len: cells.len(),
            });
        }
        Ok(Line::new(kind, cells, clue))
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

    /// Returns `true` if `pos` lies on the board.
    #[must_use]
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x() < self.width && pos.y() < self.height
    }

    /// Returns the current state of the cell at `pos`, or `None` if it is out
    /// of bounds.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.contains(pos)
            .then(|| self.cells[pos.index(self.width)])
    }

    /// Returns an iterator over every position and its current cell state in
    /// row-major order.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = (Position, Cell)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (Position::from_index(i, width), cell))
    }

    /// Overwrites the cell at `pos`.
    ///
    /// Returns `false` if `pos` is out of bounds.
    pub fn set_cell(&mut self, pos: Position, cell: Cell) -> bool {
        if !self.contains(pos) {
            return false;
        }
        self.cells[pos.index(self.width)] = cell;
        true
    }

    /// Cycles the cell at `pos` through `Off → Undetermined → On → Off`.
    ///
    /// Returns `false` if `pos` is out of bounds.
    pub fn toggle(&mut self, pos: Position) -> bool {
        if !self.contains(pos) {
            return false;
        }
        let cell = &mut self.cells[pos.index(self.width)];
        *cell = cell.toggled();
        true
    }

    /// Resets every cell to [`Cell::Undetermined`].
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Undetermined);
    }

    /// Returns all lines, columns first then rows.
    #[must_use]
    #[inline]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Returns the line at `index` in board line order.
    #[must_use]
    #[inline]
    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    /// Returns the board line index of a row or column.
    ///
    /// Returns `None` if the line is out of bounds.
    #[must_use]
    pub fn line_index(&self, kind: LineKind) -> Option<usize> {
        match kind {
            LineKind::Column { x } => (x < self.width).then_some(x),
            LineKind::Row { y } => (y < self.height).then_some(self.width + y),
        }
    }

    /// Returns the clue of column `x`.
    #[must_use]
    pub fn column_clue(&self, x: usize) -> Option<&Clue> {
        let index = self.line_index(LineKind::Column { x })?;
        Some(self.lines[index].clue())
    }

    /// Returns the clue of row `y`.
    #[must_use]
    pub fn row_clue(&self, y: usize) -> Option<&Clue> {
        let index = self.line_index(LineKind::Row { y })?;
        Some(self.lines[index].clue())
    }

    /// Returns a copy of the current cell states of `line`, in line order.
    #[must_use]
    pub fn line_cells(&self, line: &Line) -> Vec<Cell> {
        line.cell_indices().iter().map(|&i| self.cells[i]).collect()
    }

    /// Writes `cell` into the `cell_index`-th cell of the line at
    /// `line_index`.
    ///
    /// The write goes to the shared cell store, so it is visible through the
    /// crossing line as well. Returns `true` if the stored value changed.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn set_line_cell(&mut self, line_index: usize, cell_index: usize, cell: Cell) -> bool {
        let store_index = self.lines[line_index].cell_indices()[cell_index];
        let slot = &mut self.cells[store_index];
        if *slot == cell {
            return false;
        }
        *slot = cell;
        true
    }

    /// Returns the ground-truth solution, if the board was built from one.
    #[must_use]
    #[inline]
    pub fn solution(&self) -> Option<&CellGrid> {
        self.solution.as_ref()
    }

    /// Returns a snapshot of the current cell states.
    #[must_use]
    pub fn to_cell_grid(&self) -> CellGrid {
        CellGrid::from_parts(self.width, self.height, self.cells.clone())
    }

    /// Returns `true` if every cell is determined and every line matches its
    /// clue.
    ///
    /// Any arrangement satisfying all clues counts, not only the stored
    /// solution.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_determined())
            && self
                .lines
                .iter()
                .all(|line| Clue::from_cells(&self.line_cells(line)) == *line.clue())
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.to_cell_grid(), f)
    }
}
