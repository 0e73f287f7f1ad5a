use crate::{Cell, Cells, Direction};
use itertools::iproduct;

/// Owns the fixed coordinate space of a square board and implements neighbour and slice
/// lookups over it. Stores no values. Created from [SquareBoard::new].
///
/// Cells are kept in row-major order, so the cell at (`i`, `j`) lives at index
/// `(i - 1) * width + (j - 1)` and every lookup is a bounds check plus an index.
#[derive(Debug)]
pub struct SquareBoard {
    /// The number of rows and columns on the board.
    width: usize,
    /// Every cell on the board in row-major order.
    cells: Vec<Cell>,
}

/// Describes the reason why a strict cell lookup failed.
///
/// # See Also
///
/// * [SquareBoard::cell]
/// * [GameBoard::get](crate::GameBoard::get)
/// * [Game::get](crate::Game::get)
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct InvalidCoordinatesError {
    /// The requested `1`-based row.
    pub row: usize,
    /// The requested `1`-based column.
    pub column: usize,
    /// The width of the board which rejected the request.
    pub width: usize,
}

impl SquareBoard {
    /// Creates every cell on the board, row by row. A board of width `0` has no cells, and
    /// every lookup on it misses.
    ///
    /// # Arguments
    ///
    /// * `width`: The number of rows and columns on the board.
    ///
    /// # Returns
    ///
    /// A [`SquareBoard`] owning `width * width` distinct cells.
    pub fn new(width: usize) -> SquareBoard {
        let cells = iproduct!(1..=width, 1..=width)
            .map(|(row, column)| Cell::new(row, column))
            .collect();

        SquareBoard { width, cells }
    }

    /// The number of rows and columns on the board.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// # Arguments
    ///
    /// * `i`: The `1`-based row of the requested cell.
    /// * `j`: The `1`-based column of the requested cell.
    ///
    /// # Returns
    ///
    /// The cell at (`i`, `j`), or [None] when either coordinate falls outside
    /// `1..=width`. Never fails.
    pub fn cell_or_none(&self, i: usize, j: usize) -> Option<Cell> {
        if (1..=self.width).contains(&i) && (1..=self.width).contains(&j) {
            Some(self.cells[(i - 1) * self.width + (j - 1)])
        } else {
            None
        }
    }

    /// # Arguments
    ///
    /// * `i`: The `1`-based row of the requested cell.
    /// * `j`: The `1`-based column of the requested cell.
    ///
    /// # Errors
    ///
    /// * [`InvalidCoordinatesError`] when either coordinate falls outside `1..=width`.
    ///
    /// # Returns
    ///
    /// The cell at (`i`, `j`).
    pub fn cell(&self, i: usize, j: usize) -> Result<Cell, InvalidCoordinatesError> {
        self.cell_or_none(i, j).ok_or(InvalidCoordinatesError {
            row: i,
            column: j,
            width: self.width,
        })
    }

    /// # Returns
    ///
    /// Every cell on the board in row-major order. The order is stable across calls for
    /// a given board.
    #[inline]
    pub fn all_cells(&self) -> &[Cell] {
        &self.cells
    }

    /// # Arguments
    ///
    /// * `i`: The `1`-based row to slice.
    /// * `j_iter`: The columns to visit in order, such as `1..=4` or `(1..=4).rev()`.
    ///
    /// # Returns
    ///
    /// The cells at row `i` for each column of `j_iter` in traversal order, silently
    /// skipping out-of-range columns.
    pub fn row(&self, i: usize, j_iter: impl IntoIterator<Item = usize>) -> Cells {
        j_iter
            .into_iter()
            .filter_map(|j| self.cell_or_none(i, j))
            .collect()
    }

    /// # Arguments
    ///
    /// * `i_iter`: The rows to visit in order, such as `1..=4` or `(1..=4).rev()`.
    /// * `j`: The `1`-based column to slice.
    ///
    /// # Returns
    ///
    /// The cells at column `j` for each row of `i_iter` in traversal order, silently
    /// skipping out-of-range rows.
    pub fn column(&self, i_iter: impl IntoIterator<Item = usize>, j: usize) -> Cells {
        i_iter
            .into_iter()
            .filter_map(|i| self.cell_or_none(i, j))
            .collect()
    }

    /// # Arguments
    ///
    /// * `cell`: The cell whose neighbour is requested.
    /// * `direction`: [Up](Direction::Up) decreases the row, [Down](Direction::Down)
    /// increases the row, [Right](Direction::Right) increases the column, and
    /// [Left](Direction::Left) decreases the column.
    ///
    /// # Returns
    ///
    /// The adjacent cell in `direction`, or [None] at the edge of the board.
    pub fn neighbour(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        let (i, j) = (cell.row(), cell.column());
        match direction {
            Direction::Up => i.checked_sub(1).and_then(|i| self.cell_or_none(i, j)),
            Direction::Right => self.cell_or_none(i, j + 1),
            Direction::Down => self.cell_or_none(i + 1, j),
            Direction::Left => j.checked_sub(1).and_then(|j| self.cell_or_none(i, j)),
        }
    }
}
