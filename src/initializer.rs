use crate::{is_even, Permutation, PERMUTATION_LEN};
use rand::seq::SliceRandom;
use rand::Rng;

/// Supplies the initial arrangement of tiles for a [GameOfFifteen](crate::GameOfFifteen).
///
/// The contract: exactly [PERMUTATION_LEN] distinct integers from `1` to [PERMUTATION_LEN]
/// whose inversion count [is even](is_even). The game checks the length at construction
/// but trusts the parity; an initializer handing out an odd permutation voids the
/// solvability guarantee.
pub trait GameInitializer {
    /// # Returns
    ///
    /// An even permutation of `1..=`[PERMUTATION_LEN] used to fill the first
    /// [PERMUTATION_LEN] cells on a board in [all_cells](crate::GameBoard::all_cells)
    /// order. The last cell is empty.
    fn initial_permutation(&self) -> &Permutation;
}

/// Draws uniformly random permutations of `1..=`[PERMUTATION_LEN] until one
/// [is even](is_even). Created from [RandomInitializer::new] or
/// [RandomInitializer::with_rng].
///
/// Exactly half of all permutations are even, so each draw succeeds with probability
/// `1/2` and the loop is expected to finish after `2` draws. The permutation is computed
/// once at construction rather than lazily.
#[derive(Debug)]
pub struct RandomInitializer {
    /// An even permutation of `1..=`[PERMUTATION_LEN].
    initial_permutation: Permutation,
}

impl RandomInitializer {
    /// Draws from [thread_rng](rand::thread_rng).
    ///
    /// # Returns
    ///
    /// A [`RandomInitializer`] holding an even permutation of `1..=`[PERMUTATION_LEN].
    pub fn new() -> RandomInitializer {
        RandomInitializer::with_rng(&mut rand::thread_rng())
    }

    /// Draws from `rng`, so a seeded generator reproduces the same permutation.
    ///
    /// # Arguments
    ///
    /// * `rng`: The source of shuffles.
    ///
    /// # Returns
    ///
    /// A [`RandomInitializer`] holding an even permutation of `1..=`[PERMUTATION_LEN].
    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> RandomInitializer {
        let mut initial_permutation: Permutation = (1..=PERMUTATION_LEN).collect();

        loop {
            initial_permutation.shuffle(rng);
            if is_even(&initial_permutation) {
                break;
            }
        }

        RandomInitializer {
            initial_permutation,
        }
    }
}

impl Default for RandomInitializer {
    #[inline]
    fn default() -> RandomInitializer {
        RandomInitializer::new()
    }
}

impl GameInitializer for RandomInitializer {
    #[inline]
    fn initial_permutation(&self) -> &Permutation {
        &self.initial_permutation
    }
}

/// Wraps a caller-supplied permutation, for deterministic games and tests. Created from
/// [PresetInitializer::new].
///
/// The caller is responsible for the [GameInitializer] contract: the permutation must be
/// even, or the resulting game cannot be solved.
#[derive(Debug)]
pub struct PresetInitializer {
    /// The caller-supplied permutation.
    initial_permutation: Permutation,
}

impl PresetInitializer {
    /// # Arguments
    ///
    /// * `initial_permutation`: An even permutation of `1..=`[PERMUTATION_LEN].
    ///
    /// # Returns
    ///
    /// A [`PresetInitializer`] holding `initial_permutation`.
    pub fn new(initial_permutation: impl IntoIterator<Item = usize>) -> PresetInitializer {
        PresetInitializer {
            initial_permutation: initial_permutation.into_iter().collect(),
        }
    }
}

impl GameInitializer for PresetInitializer {
    #[inline]
    fn initial_permutation(&self) -> &Permutation {
        &self.initial_permutation
    }
}
