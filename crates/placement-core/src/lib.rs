//! Core types for tiered-memory placement analysis
//!
//! This crate holds the vocabulary shared by every stage of the placement
//! pipeline:
//!
//! - **Sampling clocks** mapping series indices to time and back
//! - **Time intervals** produced by the spike detectors
//! - **Series math** (means, consecutive differences, clipped range sums)
//! - **Errors** used for parameter validation and I/O
//!
//! # Example
//!
//! ```rust
//! use placement_core::{SamplingClock, TimeInterval};
//!
//! let clock = SamplingClock::new(0.25).unwrap();
//! let interval = TimeInterval::new(clock.time_of(4), clock.time_of(8)).unwrap();
//!
//! assert_eq!(clock.index_range(&interval), (4, 8));
//! ```

pub mod error;
pub mod interval;
pub mod math;
pub mod series;

pub use error::{Error, Result};
pub use interval::{BwSpike, TimeInterval};
pub use series::SamplingClock;
