//! CSV output for synthetic OTIF datasets.
//!
//! Writes records produced by `otif-generator` as a header row followed by
//! one row per record, in generation order.
//!
//! # Example
//!
//! ```ignore
//! use otif_generator::{generate_dataset, SimulationConfig};
//! use otif_populate_csv::CsvPopulator;
//!
//! let records = generate_dataset(SimulationConfig::default(), 5000);
//! let metrics = CsvPopulator::new().write_dataset("synthetic_small.csv", &records)?;
//! ```

pub mod args;
mod error;
mod populator;
mod summary;

pub use args::CsvOutputArgs;
pub use error::CsvPopulatorError;
pub use populator::{CsvPopulator, PopulateMetrics, DEFAULT_BUFFER_SIZE};
pub use summary::FulfillmentSummary;
