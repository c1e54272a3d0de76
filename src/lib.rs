//! OTIF Synth Library
//!
//! Produces synthetic order-fulfillment datasets for exercising
//! On-Time-In-Full analytics.
//!
//! # Crates
//!
//! - `otif_generator` - seeded order simulator and dataset assembler
//! - `otif_populate_csv` - CSV output with write metrics and fulfillment summaries
//!
//! # CLI Usage
//!
//! ```bash
//! # Write synthetic_small.csv and synthetic_medium.csv to the current directory
//! otif-synth
//!
//! # Same files, different location; RUST_LOG=info shows per-dataset summaries
//! RUST_LOG=info otif-synth --output-dir data
//! ```

pub mod generate;

pub use generate::{
    run_generate, run_generate_targets, DatasetTarget, GeneratedFile, COMPLETION_MESSAGE, DATASETS,
};
