use rand::Rng;

/// Pick one element uniformly at random ("Surprends-moi !").
///
/// Returns `None` on an empty slice — not an error, callers check emptiness
/// when they need a result. Repeated calls are independent: "pick another"
/// may return the same element with probability 1/N.
pub fn pick_random<T>(candidates: &[T]) -> Option<&T> {
    pick_with(&mut rand::rng(), candidates)
}

/// Same as [`pick_random`] but with a caller-supplied RNG, so tests can be
/// deterministic.
pub fn pick_with<'a, T, R: Rng + ?Sized>(rng: &mut R, candidates: &'a [T]) -> Option<&'a T> {
    if candidates.is_empty() {
        return None;
    }
    let index = rng.random_range(0..candidates.len());
    candidates.get(index)
}
