/// Classifies a permutation as even or odd by counting inversions, the pairs of positions
/// (`p`, `q`) with `p < q` and `permutation[p] > permutation[q]`. The quadratic scan is
/// fine at [PERMUTATION_LEN](crate::PERMUTATION_LEN) items.
///
/// A Game of Fifteen started from an odd permutation can never reach the solved board,
/// so initializers must only hand out even permutations.
///
/// # Arguments
///
/// * `permutation`: An ordered sequence of distinct integers.
///
/// # See Also
///
/// * [RandomInitializer](crate::RandomInitializer)
/// * [GameOfFifteen::new](crate::GameOfFifteen::new)
///
/// # Returns
///
/// Whether the number of inversions in `permutation` is even.
pub fn is_even(permutation: &[usize]) -> bool {
    let mut inversions = 0;

    for p in 0..permutation.len() {
        for q in (p + 1)..permutation.len() {
            if permutation[p] > permutation[q] {
                inversions += 1;
            }
        }
    }

    inversions % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::random_permutation;
    use rand::Rng;

    #[test]
    fn sorted_is_even() {
        assert!(is_even(&[1, 2, 3, 4]));
        assert!(is_even(&[1, 2, 3]));
    }

    #[test]
    fn one_inversion_is_odd() {
        assert!(!is_even(&[2, 1, 3, 4]));
    }

    #[test]
    fn three_inversions_is_odd() {
        // pairs (3, 2), (3, 1) and (2, 1)
        assert!(!is_even(&[3, 2, 1]));
    }

    #[test]
    fn trivial_sequences_are_even() {
        assert!(is_even(&[]));
        assert!(is_even(&[1]));
    }

    #[test]
    fn swapping_two_values_flips_parity() {
        let mut rng = rand::thread_rng();
        let mut permutation = random_permutation(&mut rng);
        let before = is_even(&permutation);

        let p = rng.gen_range(0..permutation.len());
        let q = (p + rng.gen_range(1..permutation.len())) % permutation.len();
        permutation.swap(p, q);

        assert_eq!(!before, is_even(&permutation));
    }

    #[test]
    fn deterministic_for_a_given_sequence() {
        let permutation = random_permutation(&mut rand::thread_rng());

        assert_eq!(is_even(&permutation), is_even(&permutation));
    }
}
