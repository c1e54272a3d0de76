//! Categorical samplers.

use rand::Rng;

/// Uniform pick from a non-empty slice. One draw.
///
/// # Panics
///
/// Panics if `items` is empty.
pub fn choose<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// Weighted pick from a non-empty slice. One draw.
///
/// Walks the cumulative weights; any floating point remainder at the top
/// of the range lands on the last item.
///
/// # Panics
///
/// Panics if `items` is empty.
pub fn choose_weighted<'a, T, R: Rng>(
    rng: &mut R,
    items: &'a [T],
    weight: impl Fn(&T) -> f64,
) -> &'a T {
    let total: f64 = items.iter().map(&weight).sum();
    let target = rng.gen::<f64>() * total;

    let mut cumulative = 0.0;
    for item in items {
        cumulative += weight(item);
        if target < cumulative {
            return item;
        }
    }
    &items[items.len() - 1]
}
