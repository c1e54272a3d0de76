//! CSV writer for order datasets.

use crate::error::CsvPopulatorError;
use csv::Writer;
use otif_generator::OrderRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from a write operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of data rows written (header excluded).
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Writes assembled datasets to CSV files.
#[derive(Debug, Clone)]
pub struct CsvPopulator {
    buffer_size: usize,
}

impl Default for CsvPopulator {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvPopulator {
    pub fn new() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }

    /// Set the size of the write buffer wrapped around the output file.
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    /// Write `records` to `output_path` as a header row plus one row per record.
    ///
    /// An empty dataset is a no-op: no file is created and `Ok(None)` is
    /// returned. An existing file at `output_path` is truncated.
    pub fn write_dataset<P: AsRef<Path>>(
        &self,
        output_path: P,
        records: &[OrderRecord],
    ) -> Result<Option<PopulateMetrics>, CsvPopulatorError> {
        let output_path = output_path.as_ref();
        if records.is_empty() {
            debug!(
                "No records for '{}', skipping file creation",
                output_path.display()
            );
            return Ok(None);
        }

        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();

        info!(
            "Writing CSV file '{}' with {} rows",
            output_path.display(),
            records.len()
        );

        let file = File::create(output_path)?;
        let buf_writer = BufWriter::with_capacity(self.buffer_size, file);
        let mut writer = Writer::from_writer(buf_writer);

        writer.write_record(OrderRecord::COLUMNS)?;

        for record in records {
            writer.write_record(record.to_csv_record())?;
            metrics.rows_written += 1;

            if metrics.rows_written % 10000 == 0 {
                debug!("Written {} rows", metrics.rows_written);
            }
        }

        // Flush both the csv buffer and the BufWriter so errors surface here
        let mut inner = writer.into_inner().map_err(|e| e.into_error())?;
        inner.flush()?;
        drop(inner);

        metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
        metrics.total_duration = start_time.elapsed();

        info!(
            "CSV write complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(Some(metrics))
    }
}
