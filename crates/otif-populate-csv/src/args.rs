//! CLI argument definitions for the CSV writer.

use clap::Args;
use std::path::PathBuf;

/// Where the dataset files are written.
#[derive(Args, Clone, Debug)]
pub struct CsvOutputArgs {
    /// Output directory for the CSV files
    #[arg(long, short = 'o', default_value = ".")]
    pub output_dir: PathBuf,
}
