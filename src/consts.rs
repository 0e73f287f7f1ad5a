use konst::primitive::parse_usize;
use konst::{option, result};

/// The width of the board in the Game of Fifteen. `4` rows and `4` columns.
///
/// # See Also
///
/// * [PERMUTATION_LEN]
/// * [GameOfFifteen](crate::GameOfFifteen)
pub const GAME_BOARD_WIDTH: usize = 4;
const _: () = assert!(GAME_BOARD_WIDTH >= 2);
/// The number of values in an [initial permutation](crate::GameInitializer). Every cell on
/// the board except the single empty cell holds a tile, so `15` values on
/// a [4 by 4](GAME_BOARD_WIDTH) board.
///
/// # See Also
///
/// * [GAME_BOARD_WIDTH]
/// * [Permutation](crate::Permutation)
/// * [GameOfFifteen::new](crate::GameOfFifteen::new)
pub const PERMUTATION_LEN: usize = GAME_BOARD_WIDTH * GAME_BOARD_WIDTH - 1;
/// All small, dynamically allocated collections of [cells](crate::Cell) will be stored on
/// the stack until the number of [cells](crate::Cell) becomes greater than `CELL_CAPACITY`.
/// When there are more than `CELL_CAPACITY` [cells](crate::Cell), the collection will be
/// heap allocated. If the environment variable named `CELL_CAPACITY` is present at compile
/// time and is able to be parsed into a `usize`, set to the value of the environment
/// variable. Otherwise, it is set to the [number of cells](GAME_BOARD_WIDTH) on
/// the Game of Fifteen board.
///
/// # See Also
///
/// * [Cells](crate::Cells)
/// * [SquareBoard::row](crate::SquareBoard::row)
/// * [SquareBoard::column](crate::SquareBoard::column)
/// * [GameBoard::filter](crate::GameBoard::filter)
pub const CELL_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("CELL_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    GAME_BOARD_WIDTH * GAME_BOARD_WIDTH
);
const _: () = assert!(CELL_CAPACITY > 0);
