//! Write-bandwidth telemetry from PCM memory CSV exports
//!
//! `pcm-memory` writes two header rows of descriptors followed by one row per
//! sampling interval. Only a single numeric column is needed from each file;
//! header rows and any row whose cell does not parse as a number are skipped.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// 1-based column holding fast-tier (DRAM) write bandwidth
pub const FAST_TIER_WRITE_COLUMN: usize = 70;

/// 1-based column holding slow-tier (persistent memory) write bandwidth
pub const SLOW_TIER_WRITE_COLUMN: usize = 72;

/// Aligned write-bandwidth series for both tiers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BandwidthTelemetry {
    pub fast: Vec<f64>,
    pub slow: Vec<f64>,
}

/// Extract every numeric value of 1-based `column` from CSV data
pub fn extract_column<R: Read>(reader: R, column: usize) -> Result<Vec<f64>> {
    let index = column
        .checked_sub(1)
        .ok_or_else(|| Error::InvalidColumn("columns are numbered from 1".to_string()))?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut values = Vec::new();
    let mut skipped = 0usize;
    for (row, record) in csv_reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => {
                warn!(row, %err, "Skipping unreadable CSV row");
                skipped += 1;
                continue;
            }
        };
        match record.get(index).map(|cell| cell.trim().parse::<f64>()) {
            Some(Ok(value)) => values.push(value),
            _ => skipped += 1,
        }
    }

    debug!(column, values = values.len(), skipped, "Extracted CSV column");
    Ok(values)
}

/// Extract 1-based `column` from the CSV file at `path`
pub fn read_column(path: &Path, column: usize) -> Result<Vec<f64>> {
    let file = File::open(path).map_err(|err| Error::file(path, err))?;
    extract_column(file, column)
}

/// Read both tiers' write bandwidth from their PCM exports
pub fn read_bandwidth(slow_tier_csv: &Path, fast_tier_csv: &Path) -> Result<BandwidthTelemetry> {
    let slow = read_column(slow_tier_csv, SLOW_TIER_WRITE_COLUMN)?;
    let fast = read_column(fast_tier_csv, FAST_TIER_WRITE_COLUMN)?;
    if slow.len() != fast.len() {
        warn!(
            slow = slow.len(),
            fast = fast.len(),
            "Bandwidth series differ in length; analysis uses the shorter"
        );
    }
    Ok(BandwidthTelemetry { fast, slow })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_headers_and_short_rows() {
        let data = "Date,Time,Write\n\
                    ,,MB/s\n\
                    2024-01-01,10:00:00, 12.5\n\
                    2024-01-01,10:00:01\n\
                    2024-01-01,10:00:02,7\n";
        let values = extract_column(data.as_bytes(), 3).unwrap();
        assert_eq!(values, vec![12.5, 7.0]);
    }

    #[test]
    fn test_column_zero_is_rejected() {
        assert!(matches!(
            extract_column("1,2".as_bytes(), 0),
            Err(Error::InvalidColumn(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = read_column(Path::new("/definitely/not/here.csv"), 1).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.csv"));
    }
}
