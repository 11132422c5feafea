//! Allocator log parsing
//!
//! The tiered allocator's monitor thread logs one line per sampling period:
//!
//! ```text
//! Allocated: 4096 bytes (second 0.25) (objects alive = 12)
//! ```
//!
//! Only lines starting with that record are used; everything else is ignored.
//! Both extracted series begin with an implicit zero sample for time zero.

use crate::error::{Error, Result};
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

const RECORD_PATTERN: &str =
    r"^Allocated: (\d+) bytes \(second [\d.]+\) \(objects alive = (\d+)\)";

/// Per-sample allocation telemetry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationLog {
    /// Bytes allocated during each sampling period
    pub allocated_bytes: Vec<u64>,
    /// Live objects at the end of each sampling period
    pub objects_alive: Vec<u64>,
}

impl AllocationLog {
    /// Number of samples, including the implicit zero
    pub fn len(&self) -> usize {
        self.allocated_bytes.len()
    }

    /// Whether the log held no records beyond the implicit zero
    pub fn is_empty(&self) -> bool {
        self.allocated_bytes.len() <= 1
    }
}

impl Default for AllocationLog {
    fn default() -> Self {
        Self {
            allocated_bytes: vec![0],
            objects_alive: vec![0],
        }
    }
}

/// Parse an allocator log from any buffered reader
pub fn parse_allocation_log<R: BufRead>(reader: R) -> Result<AllocationLog> {
    let pattern = Regex::new(RECORD_PATTERN)?;
    let mut log = AllocationLog::default();
    let mut ignored = 0usize;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let Some(captures) = pattern.captures(&line) else {
            ignored += 1;
            continue;
        };
        match (captures[1].parse::<u64>(), captures[2].parse::<u64>()) {
            (Ok(bytes), Ok(objects)) => {
                log.allocated_bytes.push(bytes);
                log.objects_alive.push(objects);
            }
            _ => {
                warn!(line = line_no + 1, "Skipping record with out-of-range counter");
                ignored += 1;
            }
        }
    }

    debug!(records = log.len() - 1, ignored, "Parsed allocation log");
    Ok(log)
}

/// Parse the allocator log at `path`
pub fn read_allocation_log(path: &Path) -> Result<AllocationLog> {
    let file = File::open(path).map_err(|err| Error::file(path, err))?;
    parse_allocation_log(BufReader::new(file))
}
