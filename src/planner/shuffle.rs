use rand::Rng;

/// In-place Fisher–Yates shuffle.
///
/// Every permutation of `items` is equally likely given a uniform `rng`.
/// The RNG is passed in by the caller so tests can seed it.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
