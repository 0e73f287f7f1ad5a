use crate::{is_even, Permutation, PERMUTATION_LEN};
use rand::seq::SliceRandom;
use rand::Rng;

/// A random, small, non-zero board width.
///
/// # Returns
///
/// A width between `2` and `8`.
pub fn random_width<R: Rng + ?Sized>(rng: &mut R) -> usize {
    rng.gen_range(2..=8)
}

/// A uniformly random permutation of `1..=`[PERMUTATION_LEN] of either parity.
///
/// # Returns
///
/// The shuffled permutation.
pub fn random_permutation<R: Rng + ?Sized>(rng: &mut R) -> Permutation {
    let mut permutation: Permutation = (1..=PERMUTATION_LEN).collect();
    permutation.shuffle(rng);

    permutation
}

/// A uniformly random [even](is_even) permutation of `1..=`[PERMUTATION_LEN]. An odd draw
/// becomes even by swapping its first two values, which flips exactly one inversion pair.
///
/// # Returns
///
/// The shuffled even permutation.
pub fn random_even_permutation<R: Rng + ?Sized>(rng: &mut R) -> Permutation {
    let mut permutation = random_permutation(rng);
    if !is_even(&permutation) {
        permutation.swap(0, 1);
    }

    permutation
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn random_permutation_covers_all_values() {
        let permutation = random_permutation(&mut rand::thread_rng());

        assert_eq!(PERMUTATION_LEN, permutation.len());
        assert_eq!(0, permutation.iter().duplicates().count());
        itertools::assert_equal(1..=PERMUTATION_LEN, permutation.iter().copied().sorted());
    }

    #[test]
    fn random_even_permutation_is_even() {
        let permutation = random_even_permutation(&mut rand::thread_rng());

        assert!(is_even(&permutation));
        itertools::assert_equal(1..=PERMUTATION_LEN, permutation.iter().copied().sorted());
    }
}
