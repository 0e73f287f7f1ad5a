//! Concrete structs to represent and protect the state of the
//! [Game of Fifteen](https://en.wikipedia.org/wiki/15_puzzle) with methods to apply moves
//! and detect a win.
//!
//! ## Summary
//!
//! Implemented in layers, leaves first. A [SquareBoard] owns the fixed coordinate space
//! of a board and answers [neighbour](SquareBoard::neighbour) and
//! [slice](SquareBoard::row) queries over its [cells](Cell). A [GameBoard] adds one
//! stored value per cell with query and transform methods
//! ([get](GameBoard::get), [set](GameBoard::set), [all](GameBoard::all),
//! [any](GameBoard::any), [find](GameBoard::find), [filter](GameBoard::filter)).
//! A [GameOfFifteen] composes a [GameBoard] of width [GAME_BOARD_WIDTH], fills it from
//! a [GameInitializer] at construction, and implements the [Game] contract consumed by
//! an interactive driver loop. The driver, rendering, and input handling are external
//! collaborators which only need [Game].
//!
//! ## How is the game created?
//!
//! [GameOfFifteen::new] consumes a [GameInitializer] and fills every cell except the
//! last with the initializer's permutation of `1..=`[PERMUTATION_LEN]; the last cell in
//! [all_cells](GameBoard::all_cells) order starts empty. [GameOfFifteen::new_random]
//! draws the permutation from a fresh [RandomInitializer].
//!
//! ## Why must the permutation be even?
//!
//! Sliding moves preserve the solvability class of the arrangement, so a game started
//! from an odd permutation can never reach the solved board. [is_even] classifies a
//! permutation by counting inversions, and [RandomInitializer] redraws random
//! permutations until one passes. Exactly half of all permutations are even, so the
//! redraw loop is expected to finish after `2` draws. Alternate initializers such as
//! [PresetInitializer] take on the parity obligation themselves.
//!
//! ## How is the game advanced?
//!
//! [Game::process_move] slides a tile into the empty cell. The moved tile comes from
//! the side *opposite* the requested [Direction]: requesting [Up](Direction::Up) lifts
//! the tile below the empty cell upward. Requests towards the edge of the board are
//! silent no-ops, never errors. [Game::can_move] is always `true` since every
//! arrangement permits a move in some direction.
//!
//! ## How is the game won?
//!
//! [Game::has_won] scans the board in row-major order and checks that the `k`-th
//! non-empty value equals `k`, which on the full board reads `1, 2, ..., 15` with the
//! empty cell trailing.
//!
//! ## How are errors reported?
//!
//! Strict lookups ([SquareBoard::cell], [GameBoard::get], [Game::get]) fail with
//! [InvalidCoordinatesError] outside `1..=width`, while the lenient
//! [SquareBoard::cell_or_none] yields an explicit absence. [GameOfFifteen::new] fails
//! with [NewGameError] when the permutation length is wrong. Every failing operation
//! leaves the board unmodified.

// Document!
#![forbid(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]
// Don't leave a build in a half finished state!
#![deny(
    warnings,
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    unused,
    single_use_lifetimes,
    unreachable_pub,
    missing_debug_implementations,
    unsafe_code
)]

pub use cell::*;
pub use consts::*;
pub use game::*;
pub use game_board::*;
pub use initializer::*;
pub use parity::*;
#[cfg(test)]
pub use random::*;
pub use square_board::*;
pub use types::*;

mod cell;
mod consts;
mod game;
mod game_board;
mod initializer;
mod parity;
#[cfg(test)]
mod random;
mod square_board;
mod types;
