//! Shared sampling helpers
//!
//! All weighted tables in the generator (star types, planet categories,
//! item pools) go through the one `weighted_choice` utility so the draw
//! semantics can never drift apart between tables.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Pick an item from ordered `(item, weight)` pairs with one uniform draw.
///
/// Entries with zero weight are never picked. Panics on an empty slice or
/// an all-zero table; every table in this crate is a non-empty constant.
pub fn weighted_choice<'a, T>(rng: &mut ChaCha8Rng, entries: &'a [(T, u32)]) -> &'a T {
    let total: u32 = entries.iter().map(|(_, weight)| weight).sum();
    let mut roll = rng.gen_range(0..total);
    for (item, weight) in entries {
        if roll < *weight {
            return item;
        }
        roll -= weight;
    }
    // The roll is below the total, so the walk always lands in a bucket.
    &entries[entries.len() - 1].0
}

/// Box-Muller gaussian draw. Consumes exactly two uniform draws.
pub fn gaussian(rng: &mut ChaCha8Rng, mean: f64, std_dev: f64) -> f64 {
    let u1: f64 = rng.gen();
    let u2: f64 = rng.gen();
    let z = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
    mean + std_dev * z
}

/// Uniform integer in `[lo, hi]`, both ends inclusive.
pub fn randint(rng: &mut ChaCha8Rng, lo: i64, hi: i64) -> i64 {
    rng.gen_range(lo..=hi)
}

/// Uniform integer in `[0, n)`.
pub fn randrange(rng: &mut ChaCha8Rng, n: i64) -> i64 {
    rng.gen_range(0..n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_weighted_choice_single_entry() {
        let mut rng = test_rng();
        let table = [("only", 7u32)];
        for _ in 0..20 {
            assert_eq!(*weighted_choice(&mut rng, &table), "only");
        }
    }

    #[test]
    fn test_weighted_choice_skips_zero_weights() {
        let mut rng = test_rng();
        let table = [("never", 0u32), ("always", 1)];
        for _ in 0..50 {
            assert_eq!(*weighted_choice(&mut rng, &table), "always");
        }
    }

    #[test]
    fn test_weighted_choice_rough_proportions() {
        let mut rng = test_rng();
        let table = [("a", 3u32), ("b", 1)];
        let hits = (0..4000)
            .filter(|_| *weighted_choice(&mut rng, &table) == "a")
            .count();
        // Expect ~3000 of 4000.
        assert!(hits > 2700 && hits < 3300, "hits = {hits}");
    }

    #[test]
    fn test_gaussian_rough_moments() {
        let mut rng = test_rng();
        let n = 5000;
        let samples: Vec<f64> = (0..n).map(|_| gaussian(&mut rng, 7.0, 2.0)).collect();
        let mean = samples.iter().sum::<f64>() / n as f64;
        assert!((mean - 7.0).abs() < 0.2, "mean = {mean}");
    }

    #[test]
    fn test_randint_inclusive_bounds() {
        let mut rng = test_rng();
        let mut saw_lo = false;
        let mut saw_hi = false;
        for _ in 0..500 {
            let v = randint(&mut rng, -1, 1);
            assert!((-1..=1).contains(&v));
            saw_lo |= v == -1;
            saw_hi |= v == 1;
        }
        assert!(saw_lo && saw_hi);
    }

    #[test]
    fn test_randrange_excludes_upper_bound() {
        let mut rng = test_rng();
        for _ in 0..500 {
            let v = randrange(&mut rng, 360);
            assert!((0..360).contains(&v));
        }
    }
}
