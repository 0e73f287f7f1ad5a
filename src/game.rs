use crate::{
    Cell, Direction, GameBoard, GameInitializer, InvalidCoordinatesError, RandomInitializer,
    GAME_BOARD_WIDTH, PERMUTATION_LEN,
};

/// The capability set consumed by an interactive driver loop. The driver calls
/// [process_move](Game::process_move), [has_won](Game::has_won), and [get](Game::get)
/// sequentially between turns; rendering and input handling live entirely on the
/// driver's side of this boundary.
pub trait Game {
    /// Prepares the game for play. Implementations whose state is established at
    /// construction may do nothing.
    fn initialize(&mut self);

    /// # Returns
    ///
    /// Whether the current state permits a move in some direction.
    fn can_move(&self) -> bool;

    /// # Returns
    ///
    /// Whether the current state is a winning state.
    fn has_won(&self) -> bool;

    /// Applies one directional move. Moves that the current state does not permit are
    /// silent no-ops.
    ///
    /// # Arguments
    ///
    /// * `direction`: The requested move.
    fn process_move(&mut self, direction: Direction);

    /// # Arguments
    ///
    /// * `i`: The `1`-based row of the requested cell.
    /// * `j`: The `1`-based column of the requested cell.
    ///
    /// # Errors
    ///
    /// * [`InvalidCoordinatesError`] when either coordinate falls outside the board.
    ///
    /// # Returns
    ///
    /// The current value at (`i`, `j`), or [None] for the empty cell.
    fn get(&self, i: usize, j: usize) -> Result<Option<usize>, InvalidCoordinatesError>;
}

/// Owns the board of the [Game of Fifteen](https://en.wikipedia.org/wiki/15_puzzle) and
/// implements the [`Game`] contract over it. Created from [GameOfFifteen::new] or
/// [GameOfFifteen::new_random].
///
/// The board is [GAME_BOARD_WIDTH] cells wide. After construction exactly one cell is
/// empty and the other [PERMUTATION_LEN] cells hold the initializer's permutation of
/// `1..=`[PERMUTATION_LEN]; the permutation's even parity is the
/// [initializer's obligation](GameInitializer), not re-validated here.
#[derive(Debug)]
pub struct GameOfFifteen {
    /// The current arrangement of tiles, where [None] marks the empty cell.
    board: GameBoard<usize>,
}

/// Describes the reason why [GameOfFifteen] could not be created.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum NewGameError {
    /// Attempting [to start](GameOfFifteen::new) with the wrong number of tiles.
    PermutationLen {
        /// The required number of tiles, [PERMUTATION_LEN].
        expected: usize,
        /// The number of tiles the initializer supplied.
        actual: usize,
    },
}

impl GameOfFifteen {
    /// Checks that the initializer supplies exactly [PERMUTATION_LEN] values, designates
    /// the last cell in [all_cells](GameBoard::all_cells) order as the empty cell, and
    /// assigns the permutation values to the remaining cells in that same order.
    ///
    /// # Arguments
    ///
    /// * `initializer`: Supplies the initial arrangement of tiles.
    ///
    /// # Errors
    ///
    /// * [NewGameError::PermutationLen] Attempting to start with the wrong number
    /// of tiles. No game state is built when construction fails.
    ///
    /// # See Also
    ///
    /// * [GameOfFifteen::new_random]
    pub fn new(initializer: &impl GameInitializer) -> Result<GameOfFifteen, NewGameError> {
        let permutation = initializer.initial_permutation();
        if permutation.len() != PERMUTATION_LEN {
            return Err(NewGameError::PermutationLen {
                expected: PERMUTATION_LEN,
                actual: permutation.len(),
            });
        }

        let mut board: GameBoard<usize> = GameBoard::new(GAME_BOARD_WIDTH);
        // every entry starts empty, so only the tile cells need assignments
        let cells = board.all_cells().to_vec();
        let (_, tile_cells) = cells.split_last().unwrap_or_else(|| {
            unreachable!(
                "the board should have cells since GAME_BOARD_WIDTH ({:?}) is at least 2.",
                GAME_BOARD_WIDTH
            )
        });

        for (&cell, &value) in tile_cells.iter().zip(permutation) {
            board.set(cell, Some(value)).unwrap_or_else(|_| {
                unreachable!("cells from all_cells should belong to their own board.")
            });
        }

        Ok(GameOfFifteen { board })
    }

    /// Starts from a fresh [`RandomInitializer`], like the interactive game does.
    ///
    /// # Returns
    ///
    /// A [`GameOfFifteen`] over a random even permutation.
    ///
    /// # See Also
    ///
    /// * [GameOfFifteen::new]
    pub fn new_random() -> GameOfFifteen {
        GameOfFifteen::new(&RandomInitializer::new()).unwrap_or_else(|_| {
            unreachable!(
                "RandomInitializer should supply PERMUTATION_LEN ({:?}) values.",
                PERMUTATION_LEN
            )
        })
    }

    /// # Returns
    ///
    /// The cell currently holding the empty sentinel.
    fn empty_cell(&self) -> Option<Cell> {
        self.board.find(|value| value.is_none())
    }
}

impl Game for GameOfFifteen {
    /// Does nothing. The state was established at construction.
    fn initialize(&mut self) {}

    /// # Returns
    ///
    /// Always `true`. Every board state permits a move in some direction, though a move
    /// towards an edge is silently ignored.
    fn can_move(&self) -> bool {
        true
    }

    /// Scans the values in row-major order. The game is won iff the `k`-th non-empty
    /// value equals `k`, which on a full board reads `1, 2, ..., 15` with the empty
    /// cell trailing.
    fn has_won(&self) -> bool {
        let mut position = 0;

        for value in self.board.values() {
            if let Some(&value) = value {
                position += 1;
                if value != position {
                    return false;
                }
            }
        }

        true
    }

    /// Slides a tile into the empty cell. The moved tile comes from the side *opposite*
    /// the requested direction: [Up](Direction::Up) lifts the tile below the empty cell,
    /// so it swaps the empty cell with (`row + 1`, `column`); [Right](Direction::Right)
    /// swaps with (`row`, `column - 1`); [Down](Direction::Down) swaps with
    /// (`row - 1`, `column`); [Left](Direction::Left) swaps with (`row`, `column + 1`).
    /// When that neighbour is off the board, nothing changes.
    fn process_move(&mut self, direction: Direction) {
        let Some(empty_cell) = self.empty_cell() else {
            return;
        };
        let (i, j) = (empty_cell.row(), empty_cell.column());

        let target = match direction {
            Direction::Up => self.board.cell_or_none(i + 1, j),
            Direction::Right => j.checked_sub(1).and_then(|j| self.board.cell_or_none(i, j)),
            Direction::Down => i.checked_sub(1).and_then(|i| self.board.cell_or_none(i, j)),
            Direction::Left => self.board.cell_or_none(i, j + 1),
        };

        if let Some(target) = target {
            let value = self
                .board
                .get(target)
                .unwrap_or_else(|_| {
                    unreachable!("cells from cell_or_none should belong to their own board.")
                })
                .copied();
            self.board.set(empty_cell, value).unwrap_or_else(|_| {
                unreachable!("cells from find should belong to their own board.")
            });
            self.board.set(target, None).unwrap_or_else(|_| {
                unreachable!("cells from cell_or_none should belong to their own board.")
            });
        }
    }

    /// # Arguments
    ///
    /// * `i`: The `1`-based row of the requested cell.
    /// * `j`: The `1`-based column of the requested cell.
    ///
    /// # Errors
    ///
    /// * [`InvalidCoordinatesError`] when either coordinate falls outside
    /// `1..=`[GAME_BOARD_WIDTH].
    ///
    /// # Returns
    ///
    /// The current value at (`i`, `j`), or [None] for the empty cell.
    fn get(&self, i: usize, j: usize) -> Result<Option<usize>, InvalidCoordinatesError> {
        let cell = self.board.cell(i, j)?;
        let value = self.board.get(cell).unwrap_or_else(|_| {
            unreachable!("cells from cell should belong to their own board.")
        });

        Ok(value.copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{random_even_permutation, random_permutation};
    use crate::{is_even, PresetInitializer};
    use itertools::Itertools;
    use rand::Rng;
    use tap::Tap;

    fn solved_game() -> GameOfFifteen {
        GameOfFifteen::new(&PresetInitializer::new(1..=PERMUTATION_LEN))
            .expect("new should return Ok for a permutation of PERMUTATION_LEN values")
    }

    fn snapshot(game: &GameOfFifteen) -> Vec<Option<usize>> {
        game.board.values().map(|value| value.copied()).collect()
    }

    #[test]
    fn new_places_permutation_in_all_cells_order() {
        let permutation = random_even_permutation(&mut rand::thread_rng());
        let game = GameOfFifteen::new(&PresetInitializer::new(permutation.iter().copied()))
            .expect("new should return Ok for a permutation of PERMUTATION_LEN values");

        itertools::assert_equal(
            permutation.iter().copied().map(Some).chain([None]),
            snapshot(&game),
        );
    }

    #[test]
    fn new_designates_last_cell_empty() {
        let game = GameOfFifteen::new_random();

        assert_eq!(
            Some((GAME_BOARD_WIDTH, GAME_BOARD_WIDTH)),
            game.empty_cell().map(|cell| (cell.row(), cell.column())),
        );
    }

    #[test]
    fn new_rejects_wrong_permutation_len() {
        for actual in [0, PERMUTATION_LEN - 1, PERMUTATION_LEN + 1] {
            let initializer = PresetInitializer::new(1..=actual);

            assert_eq!(
                NewGameError::PermutationLen {
                    expected: PERMUTATION_LEN,
                    actual,
                },
                GameOfFifteen::new(&initializer)
                    .expect_err("new should return Err for a wrong permutation length"),
            );
        }
    }

    #[test]
    fn new_random_satisfies_invariants() {
        let game = GameOfFifteen::new_random();

        assert_eq!(1, game.board.filter(|value| value.is_none()).len());
        let values = game
            .board
            .values()
            .flatten()
            .copied()
            .sorted()
            .collect::<Vec<_>>();
        itertools::assert_equal(1..=PERMUTATION_LEN, values);
    }

    #[test]
    fn initialize_is_a_no_op() {
        let mut game = GameOfFifteen::new_random();
        let before = snapshot(&game);

        game.initialize();

        assert_eq!(before, snapshot(&game));
    }

    #[test]
    fn can_move_always() {
        let mut game = GameOfFifteen::new_random();

        assert!(game.can_move());
        for direction in Direction::directions() {
            game.process_move(direction);
            assert!(game.can_move());
        }
    }

    #[test]
    fn has_won_solved_board() {
        assert!(solved_game().has_won());
    }

    #[test]
    fn has_won_false_after_adjacent_swap() {
        let mut game = solved_game();
        let first = game.board.cell(1, 1).expect("cell should return Ok in range");
        let second = game.board.cell(1, 2).expect("cell should return Ok in range");
        game.board
            .set(first, Some(2))
            .expect("set should return Ok for a cell from this board");
        game.board
            .set(second, Some(1))
            .expect("set should return Ok for a cell from this board");

        assert!(!game.has_won());
    }

    #[test]
    fn has_won_rarely_at_a_random_start() {
        let permutation = random_permutation(&mut rand::thread_rng());
        let solved = permutation.iter().copied().eq(1..=PERMUTATION_LEN);
        let game = GameOfFifteen::new(&PresetInitializer::new(permutation))
            .expect("new should return Ok for a permutation of PERMUTATION_LEN values");

        assert_eq!(solved, game.has_won());
    }

    #[test]
    fn process_move_swaps_with_the_opposite_side() {
        // the empty cell starts at (4, 4)
        let game = solved_game().tap_mut(|game| game.process_move(Direction::Down));
        assert_eq!(Some(Some(12)), game.get(4, 4).ok());
        assert_eq!(Some(None), game.get(3, 4).ok());

        let game = solved_game().tap_mut(|game| game.process_move(Direction::Right));
        assert_eq!(Some(Some(15)), game.get(4, 4).ok());
        assert_eq!(Some(None), game.get(4, 3).ok());
    }

    #[test]
    fn process_move_at_an_edge_is_a_no_op() {
        // the empty cell starts at (4, 4), so Up wants (5, 4) and Left wants (4, 5)
        let mut game = solved_game();
        let before = snapshot(&game);

        game.process_move(Direction::Up);
        assert_eq!(before, snapshot(&game));

        game.process_move(Direction::Left);
        assert_eq!(before, snapshot(&game));
    }

    #[test]
    fn process_move_then_opposite_restores() {
        // walk the empty cell to (3, 3) so every direction has a neighbour
        let mut game = solved_game();
        game.process_move(Direction::Down);
        game.process_move(Direction::Right);

        for direction in Direction::directions() {
            let before = snapshot(&game);

            game.process_move(direction);
            assert_ne!(before, snapshot(&game));

            game.process_move(direction.opposite());
            assert_eq!(before, snapshot(&game));
        }
    }

    #[test]
    fn process_move_keeps_invariants_under_random_play() {
        let mut rng = rand::thread_rng();
        let mut game = GameOfFifteen::new_random();

        for _ in 0..100 {
            game.process_move(rng.gen());
        }

        assert_eq!(1, game.board.filter(|value| value.is_none()).len());
        let values = game
            .board
            .values()
            .flatten()
            .copied()
            .sorted()
            .collect::<Vec<_>>();
        itertools::assert_equal(1..=PERMUTATION_LEN, values);
    }

    #[test]
    fn get_matches_the_board() {
        let game = solved_game();

        for i in 1..=GAME_BOARD_WIDTH {
            for j in 1..=GAME_BOARD_WIDTH {
                let expected = if (i, j) == (GAME_BOARD_WIDTH, GAME_BOARD_WIDTH) {
                    None
                } else {
                    Some((i - 1) * GAME_BOARD_WIDTH + j)
                };
                assert_eq!(
                    expected,
                    game.get(i, j).expect("get should return Ok in range"),
                );
            }
        }
    }

    #[test]
    fn get_out_of_range_fails() {
        let game = solved_game();

        for (i, j) in [(0, 1), (1, 0), (GAME_BOARD_WIDTH + 1, 1), (1, GAME_BOARD_WIDTH + 1)] {
            assert_eq!(
                InvalidCoordinatesError {
                    row: i,
                    column: j,
                    width: GAME_BOARD_WIDTH,
                },
                game.get(i, j).expect_err("get should return Err out of range"),
            );
        }
    }

    #[test]
    fn even_start_never_verified_beyond_length() {
        // an odd permutation still constructs; parity is the initializer's contract
        let mut permutation = (1..=PERMUTATION_LEN).collect::<Vec<_>>();
        permutation.swap(0, 1);
        assert!(!is_even(&permutation));

        let game = GameOfFifteen::new(&PresetInitializer::new(permutation))
            .expect("new should return Ok for a permutation of PERMUTATION_LEN values");
        assert!(!game.has_won());
    }
}
