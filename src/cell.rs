use num_derive::FromPrimitive;
use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// Describes one position on a board with a `1`-based row and column. Two cells are equal
/// iff both coordinates match. Cells are immutable once created, and a board owns
/// the canonical set of cells for its lifetime, so every cell held by client code was
/// handed out by some board lookup.
///
/// # See Also
///
/// * [SquareBoard::cell](crate::SquareBoard::cell)
/// * [SquareBoard::all_cells](crate::SquareBoard::all_cells)
/// * [GameBoard::get](crate::GameBoard::get)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Cell {
    /// The `1`-based row of the cell.
    row: usize,
    /// The `1`-based column of the cell.
    column: usize,
}

impl Cell {
    /// # Arguments
    ///
    /// * `row`: The `1`-based row of the cell.
    /// * `column`: The `1`-based column of the cell.
    ///
    /// # Returns
    ///
    /// A [`Cell`] at (`row`, `column`).
    #[inline]
    pub(crate) fn new(row: usize, column: usize) -> Cell {
        Cell { row, column }
    }

    /// The `1`-based row of the cell.
    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    /// The `1`-based column of the cell.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }
}

/// Describes the four compass directions used for neighbour lookup and moves.
///
/// # See Also
///
/// * [SquareBoard::neighbour](crate::SquareBoard::neighbour)
/// * [Game::process_move](crate::Game::process_move)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, FromPrimitive)]
pub enum Direction {
    /// `0`. Towards smaller rows.
    Up = 0,
    /// `1`. Towards larger columns.
    Right = 1,
    /// `2`. Towards larger rows.
    Down = 2,
    /// `3`. Towards smaller columns.
    Left = 3,
}

impl Direction {
    /// The number of [`Direction`] variants. 4 directions.
    pub const DIRECTIONS_LEN: usize = 4;

    /// # Returns
    ///
    /// An array of all [`Direction`] variants in clockwise order from [`Direction::Up`].
    #[inline]
    pub fn directions() -> [Direction; Direction::DIRECTIONS_LEN] {
        [
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
        ]
    }

    /// # Returns
    ///
    /// The [`Direction`] pointing the opposite way.
    #[inline]
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }
}

impl Distribution<Direction> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        let index = rng.gen_range(0..Direction::DIRECTIONS_LEN);
        num::FromPrimitive::from_usize(index).unwrap_or_else(|| {
            dbg!(index, Direction::DIRECTIONS_LEN);
            unreachable!(
                "index ({:?}) should be matched since directions cover all indexes \
                in range 0..Direction::DIRECTIONS_LEN (0..{:?}).",
                index,
                Direction::DIRECTIONS_LEN
            );
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn cell_coordinates() {
        let cell = Cell::new(2, 3);
        assert_eq!(2, cell.row());
        assert_eq!(3, cell.column());
    }

    #[test]
    fn cell_equality() {
        assert_eq!(Cell::new(1, 2), Cell::new(1, 2));
        assert_ne!(Cell::new(1, 2), Cell::new(2, 1));
    }

    #[test]
    fn directions() {
        assert_eq!(Direction::DIRECTIONS_LEN, Direction::directions().len());
    }

    #[test]
    fn directions_no_duplicates() {
        assert_eq!(0, Direction::directions().into_iter().duplicates().count());
    }

    #[test]
    fn direction_as_usize() {
        for (index, direction) in Direction::directions().into_iter().enumerate() {
            assert_eq!(index, direction as usize);
        }
    }

    #[test]
    fn opposite_is_an_involution() {
        for direction in Direction::directions() {
            assert_ne!(direction, direction.opposite());
            assert_eq!(direction, direction.opposite().opposite());
        }
    }
}
