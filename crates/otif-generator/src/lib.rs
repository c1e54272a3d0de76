//! Deterministic order-fulfillment simulator.
//!
//! This crate turns a fixed seed into a sequence of internally consistent
//! order lifecycles (order, ship, deliver) and derives the On-Time-In-Full
//! metrics from the sampled primitives.
//!
//! # Architecture
//!
//! ```text
//! SimulationConfig
//!        │
//!        ▼
//! ┌──────────────────┐
//! │  OrderGenerator  │
//! │                  │
//! │  - config        │
//! │  - rng (StdRng)  │
//! │  - index         │
//! └────────┬─────────┘
//!          │  assemble(n): reseed, then n × next_record()
//!          ▼
//!    Vec<OrderRecord>
//! ```
//!
//! # Example
//!
//! ```rust
//! use otif_generator::{OrderGenerator, SimulationConfig};
//!
//! let mut generator = OrderGenerator::new(SimulationConfig::default());
//! let small = generator.assemble(50);
//! let medium = generator.assemble(500);
//!
//! // Every assemble call reseeds, so the larger dataset starts with the smaller one.
//! assert_eq!(&medium[..50], &small[..]);
//! assert!(small.iter().all(|r| r.otif_flag == (r.on_time_flag && r.in_full_flag)));
//! ```

pub mod config;
pub mod generator;
pub mod generators;
pub mod record;

// Re-exports for convenience
pub use config::{SimulationConfig, DEFAULT_SEED};
pub use generator::{generate_dataset, OrderGenerator, OrderRecordIterator};
pub use record::{Category, OrderRecord, Region, ShippingMethod};
