//! Numeric samplers.

use rand::Rng;
use std::f64::consts::TAU;

/// Round to 2 decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Restrict `value` to `lo..=hi`.
pub fn clamp<T: PartialOrd>(value: T, lo: T, hi: T) -> T {
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

/// Uniform integer in the given range (inclusive). One draw.
pub fn uniform_int<R: Rng>(rng: &mut R, min: u32, max: u32) -> u32 {
    rng.gen_range(min..=max)
}

/// Uniform float in the given range (inclusive), rounded to 2 decimal places. One draw.
pub fn uniform_price<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    round2(rng.gen_range(min..=max))
}

/// `true` with the given probability. One draw.
pub fn bernoulli<R: Rng>(rng: &mut R, probability: f64) -> bool {
    rng.gen_bool(probability)
}

/// Normal sample via Box-Muller. Always consumes exactly two draws.
pub fn gaussian<R: Rng>(rng: &mut R, mean: f64, stddev: f64) -> f64 {
    // gen::<f64>() is in [0, 1); shift to (0, 1] so ln never sees zero
    let u1 = 1.0 - rng.gen::<f64>();
    let u2 = rng.gen::<f64>();
    let z = (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos();
    mean + stddev * z
}

/// Gaussian sample rounded to the nearest integer and clamped to `lo..=hi`.
pub fn rounded_gaussian<R: Rng>(rng: &mut R, mean: f64, stddev: f64, lo: i64, hi: i64) -> i64 {
    let value = gaussian(rng, mean, stddev).round() as i64;
    clamp(value, lo, hi)
}
