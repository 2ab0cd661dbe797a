//! In-place Fisher–Yates shuffle.

use rand::Rng;

/// Shuffle `items` in place into a uniformly random permutation.
///
/// Walks from the last index down to 1, swapping each slot with a uniformly
/// chosen slot in `0..=i`. Empty and single-element slices are left as is.
/// Given a seeded `rng` the result is reproducible.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
