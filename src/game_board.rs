use crate::{Cell, Cells, Direction, InvalidCoordinatesError, SquareBoard};

/// Owns a [`SquareBoard`] plus one stored value per cell and implements query and
/// transform methods over the values. Created from [GameBoard::new].
///
/// Values live in a vector parallel to the board's row-major cell order, so the entry
/// for a cell at (`i`, `j`) lives at index `(i - 1) * width + (j - 1)`. Every cell has
/// exactly one entry at all times. The key set never changes after construction; only
/// values change, and only through [`GameBoard::set`].
#[derive(Debug)]
pub struct GameBoard<T> {
    /// The coordinate space holding the canonical cell set.
    board: SquareBoard,
    /// One stored value per cell in row-major order, where [None] is the empty sentinel.
    values: Vec<Option<T>>,
}

impl<T> GameBoard<T> {
    /// Creates the coordinate space and maps every cell to the empty sentinel.
    ///
    /// # Arguments
    ///
    /// * `width`: The number of rows and columns on the board.
    ///
    /// # Returns
    ///
    /// A [`GameBoard`] with `width * width` entries, all empty.
    pub fn new(width: usize) -> GameBoard<T> {
        let board = SquareBoard::new(width);
        let mut values = Vec::with_capacity(width * width);
        values.resize_with(width * width, || None);

        GameBoard { board, values }
    }

    /// The number of rows and columns on the board.
    #[inline]
    pub fn width(&self) -> usize {
        self.board.width()
    }

    /// The cell at (`i`, `j`), or [None] when either coordinate falls outside
    /// `1..=width`. Never fails.
    ///
    /// # See Also
    ///
    /// * [SquareBoard::cell_or_none]
    #[inline]
    pub fn cell_or_none(&self, i: usize, j: usize) -> Option<Cell> {
        self.board.cell_or_none(i, j)
    }

    /// The cell at (`i`, `j`).
    ///
    /// # Errors
    ///
    /// * [`InvalidCoordinatesError`] when either coordinate falls outside `1..=width`.
    ///
    /// # See Also
    ///
    /// * [SquareBoard::cell]
    #[inline]
    pub fn cell(&self, i: usize, j: usize) -> Result<Cell, InvalidCoordinatesError> {
        self.board.cell(i, j)
    }

    /// Every cell on the board in row-major order, consistent with the key set of the
    /// value mapping. The order is stable across calls for a given board.
    ///
    /// # See Also
    ///
    /// * [SquareBoard::all_cells]
    #[inline]
    pub fn all_cells(&self) -> &[Cell] {
        self.board.all_cells()
    }

    /// The cells at row `i` for each column of `j_iter` in traversal order, silently
    /// skipping out-of-range columns.
    ///
    /// # See Also
    ///
    /// * [SquareBoard::row]
    #[inline]
    pub fn row(&self, i: usize, j_iter: impl IntoIterator<Item = usize>) -> Cells {
        self.board.row(i, j_iter)
    }

    /// The cells at column `j` for each row of `i_iter` in traversal order, silently
    /// skipping out-of-range rows.
    ///
    /// # See Also
    ///
    /// * [SquareBoard::column]
    #[inline]
    pub fn column(&self, i_iter: impl IntoIterator<Item = usize>, j: usize) -> Cells {
        self.board.column(i_iter, j)
    }

    /// The adjacent cell in `direction`, or [None] at the edge of the board.
    ///
    /// # See Also
    ///
    /// * [SquareBoard::neighbour]
    #[inline]
    pub fn neighbour(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        self.board.neighbour(cell, direction)
    }

    /// # Arguments
    ///
    /// * `cell`: A cell handed out by this board.
    ///
    /// # Errors
    ///
    /// * [`InvalidCoordinatesError`] when `cell` does not belong to this board. Since only
    /// boards create cells, such a cell came from a wider board.
    ///
    /// # Returns
    ///
    /// The stored value at `cell`, or [None] for the empty sentinel.
    pub fn get(&self, cell: Cell) -> Result<Option<&T>, InvalidCoordinatesError> {
        self.index(cell).map(|index| self.values[index].as_ref())
    }

    /// Overwrites the single entry at `cell` with `value`. No other entry changes, and
    /// on failure the board is untouched.
    ///
    /// # Arguments
    ///
    /// * `cell`: A cell handed out by this board.
    /// * `value`: The stored value, or [None] for the empty sentinel.
    ///
    /// # Errors
    ///
    /// * [`InvalidCoordinatesError`] when `cell` does not belong to this board.
    pub fn set(&mut self, cell: Cell, value: Option<T>) -> Result<(), InvalidCoordinatesError> {
        let index = self.index(cell)?;
        self.values[index] = value;

        Ok(())
    }

    /// # Returns
    ///
    /// Every stored value in [all_cells](GameBoard::all_cells) order.
    #[inline]
    pub fn values(&self) -> impl Iterator<Item = Option<&T>> + '_ {
        self.values.iter().map(Option::as_ref)
    }

    /// # Arguments
    ///
    /// * `predicate`: Tests one stored value, where [None] is the empty sentinel.
    ///
    /// # Returns
    ///
    /// Whether `predicate` holds for every stored value.
    pub fn all(&self, predicate: impl FnMut(Option<&T>) -> bool) -> bool {
        self.values().all(predicate)
    }

    /// # Arguments
    ///
    /// * `predicate`: Tests one stored value, where [None] is the empty sentinel.
    ///
    /// # Returns
    ///
    /// Whether `predicate` holds for at least one stored value.
    pub fn any(&self, predicate: impl FnMut(Option<&T>) -> bool) -> bool {
        self.values().any(predicate)
    }

    /// # Arguments
    ///
    /// * `predicate`: Tests one stored value, where [None] is the empty sentinel.
    ///
    /// # Returns
    ///
    /// The first cell in [all_cells](GameBoard::all_cells) order whose stored value
    /// satisfies `predicate`, or [None] when no value does.
    pub fn find(&self, mut predicate: impl FnMut(Option<&T>) -> bool) -> Option<Cell> {
        self.all_cells()
            .iter()
            .zip(self.values.iter())
            .find(|(_, value)| predicate(value.as_ref()))
            .map(|(&cell, _)| cell)
    }

    /// # Arguments
    ///
    /// * `predicate`: Tests one stored value, where [None] is the empty sentinel.
    ///
    /// # Returns
    ///
    /// Every cell in [all_cells](GameBoard::all_cells) order whose stored value
    /// satisfies `predicate`.
    pub fn filter(&self, mut predicate: impl FnMut(Option<&T>) -> bool) -> Cells {
        self.all_cells()
            .iter()
            .zip(self.values.iter())
            .filter(|(_, value)| predicate(value.as_ref()))
            .map(|(&cell, _)| cell)
            .collect()
    }

    /// # Arguments
    ///
    /// * `cell`: A cell handed out by some board.
    ///
    /// # Errors
    ///
    /// * [`InvalidCoordinatesError`] when the cell's coordinates fall outside `1..=width`.
    ///
    /// # Returns
    ///
    /// The row-major index of `cell` into the value vector.
    fn index(&self, cell: Cell) -> Result<usize, InvalidCoordinatesError> {
        let width = self.board.width();
        if (1..=width).contains(&cell.row()) && (1..=width).contains(&cell.column()) {
            Ok((cell.row() - 1) * width + (cell.column() - 1))
        } else {
            Err(InvalidCoordinatesError {
                row: cell.row(),
                column: cell.column(),
                width,
            })
        }
    }
}
