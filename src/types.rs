use crate::{Cell, CELL_CAPACITY, PERMUTATION_LEN};
use smallvec::SmallVec;

/// An ordered sequence of distinct tile values from `1` to [PERMUTATION_LEN].
///
/// # See Also
///
/// * [PERMUTATION_LEN]
/// * [is_even](crate::is_even)
/// * [GameInitializer](crate::GameInitializer)
/// * [GameOfFifteen::new](crate::GameOfFifteen::new)
pub type Permutation = SmallVec<[usize; PERMUTATION_LEN]>;
/// An ordered collection of [cells](Cell) taken from one board.
///
/// # See Also
///
/// * [CELL_CAPACITY]
/// * [SquareBoard::row](crate::SquareBoard::row)
/// * [SquareBoard::column](crate::SquareBoard::column)
/// * [GameBoard::filter](crate::GameBoard::filter)
pub type Cells = SmallVec<[Cell; CELL_CAPACITY]>;
