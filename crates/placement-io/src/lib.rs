//! File collaborators of the placement pipeline
//!
//! - [`telemetry`]: fast/slow tier write-bandwidth columns from PCM memory CSVs
//! - [`alloc_log`]: allocated bytes and live-object counts from allocator logs
//! - [`plan_file`]: the flat text plan consumed by the tiered allocator
//! - [`paths`]: file names derived from a benchmark name
//!
//! Readers are lenient about content (rows or lines they cannot use are
//! skipped) but strict about access: a missing file is an error.

pub mod alloc_log;
pub mod error;
pub mod paths;
pub mod plan_file;
pub mod telemetry;

pub use alloc_log::{parse_allocation_log, read_allocation_log, AllocationLog};
pub use error::{Error, Result};
pub use paths::BenchmarkPaths;
pub use plan_file::{parse_plan, read_plan, save_plan, write_plan};
pub use telemetry::{extract_column, read_bandwidth, read_column, BandwidthTelemetry};
