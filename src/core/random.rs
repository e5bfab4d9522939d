use rand::seq::SliceRandom;

/// Picks one element uniformly at random; `None` only for an empty slice.
///
/// Kept synchronous so the thread-local RNG never lives across an `.await`.
pub(crate) fn pick<T>(items: &[T]) -> Option<&T> {
    items.choose(&mut rand::thread_rng())
}
