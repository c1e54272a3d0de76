//! Bounded samplers used by the row generator.
//!
//! Each sampler consumes a fixed number of draws from the RNG it is given,
//! so the sequence of calls in the row generator fully determines the
//! output for a given seed.

pub mod calendar;
pub mod choice;
pub mod numeric;

pub use calendar::{add_days, days_between, random_date};
pub use choice::{choose, choose_weighted};
pub use numeric::{bernoulli, clamp, gaussian, rounded_gaussian, round2, uniform_int, uniform_price};
