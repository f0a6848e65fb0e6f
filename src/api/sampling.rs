//! Uniform sampling without replacement for category selection.

use anyhow::Result;
use rand::Rng;

/// Draws `count` items from `pool` uniformly without replacement,
/// returning them in selection order.
///
/// Each draw picks a uniform index into the shrinking pool, so every
/// subset of size `count` is equally likely and no item repeats.
///
/// # Errors
///
/// Returns an error if `count` exceeds the pool size.
pub fn sample_without_replacement<T, R>(mut pool: Vec<T>, count: usize, rng: &mut R) -> Result<Vec<T>>
where
    R: Rng + ?Sized,
{
    if count > pool.len() {
        anyhow::bail!(
            "Requested {count} categories but only {} candidates are available",
            pool.len()
        );
    }

    let mut drawn = Vec::with_capacity(count);
    for _ in 0..count {
        let index = rng.gen_range(0..pool.len());
        drawn.push(pool.swap_remove(index));
    }

    Ok(drawn)
}
