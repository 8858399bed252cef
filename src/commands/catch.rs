//! Catch mechanic
//!
//! `p = 0.5^(E/B)` where `E` is the creature's base experience and `B` the
//! benchmark. At `E == B` the chance is exactly one half.

use rand::Rng;

/// Difficulty constant. Raising it makes every creature easier to catch.
pub const DEFAULT_BENCHMARK: u32 = 200;

/// Probability of catching a creature with the given base experience.
pub fn catch_probability(base_experience: u32, benchmark: u32) -> f64 {
    let exponent = f64::from(base_experience) / f64::from(benchmark.max(1));
    0.5f64.powf(exponent)
}

/// Rolls once against `probability`.
///
/// Draws `r` uniformly from `[0, 1)`; the catch succeeds iff `r > 1 - p`.
pub fn roll_catch<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> bool {
    let roll: f64 = rng.gen();
    roll > 1.0 - probability
}
