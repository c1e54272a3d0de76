//! Dataset generation command handler.

use anyhow::Context;
use otif_generator::{OrderGenerator, SimulationConfig};
use otif_populate_csv::{CsvOutputArgs, CsvPopulator, FulfillmentSummary, PopulateMetrics};
use std::path::PathBuf;

/// One output file of a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetTarget {
    pub file_name: &'static str,
    pub rows: usize,
}

/// Datasets produced by every run, in generation order.
pub const DATASETS: [DatasetTarget; 2] = [
    DatasetTarget {
        file_name: "synthetic_small.csv",
        rows: 5_000,
    },
    DatasetTarget {
        file_name: "synthetic_medium.csv",
        rows: 50_000,
    },
];

/// Line printed once both files are on disk.
pub const COMPLETION_MESSAGE: &str =
    "Wrote synthetic_small.csv (~5k) and synthetic_medium.csv (~50k).";

/// A dataset file that was written.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub metrics: Option<PopulateMetrics>,
    pub summary: FulfillmentSummary,
}

/// Generate every dataset in [`DATASETS`] and write it under `args.output_dir`.
///
/// Each dataset is assembled from a fresh reseed, so the medium file starts
/// with the rows of the small one.
pub fn run_generate(args: &CsvOutputArgs) -> anyhow::Result<Vec<GeneratedFile>> {
    run_generate_targets(args, &DATASETS)
}

/// Generate the given datasets in order.
pub fn run_generate_targets(
    args: &CsvOutputArgs,
    targets: &[DatasetTarget],
) -> anyhow::Result<Vec<GeneratedFile>> {
    let mut generator = OrderGenerator::new(SimulationConfig::default());
    let populator = CsvPopulator::new();
    let mut written = Vec::with_capacity(targets.len());

    for target in targets {
        let path = args.output_dir.join(target.file_name);
        tracing::info!(
            "Generating {} rows for {} (seed={})",
            target.rows,
            target.file_name,
            generator.config().seed
        );

        let records = generator.assemble(target.rows);
        let metrics = populator
            .write_dataset(&path, &records)
            .with_context(|| format!("Failed to write dataset to {path:?}"))?;

        let summary = FulfillmentSummary::from_records(&records);
        tracing::info!(
            "{}: OTIF {:.1}%, on-time {:.1}%, in-full {:.1}%, defects {}, returns {}, revenue {:.2}",
            target.file_name,
            summary.otif_rate() * 100.0,
            summary.on_time_rate() * 100.0,
            summary.in_full_rate() * 100.0,
            summary.defects,
            summary.returns,
            summary.revenue
        );

        written.push(GeneratedFile {
            path,
            metrics,
            summary,
        });
    }

    Ok(written)
}
