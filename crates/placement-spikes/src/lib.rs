//! Spike detection over placement telemetry
//!
//! This crate provides the two detectors that feed the placement selector:
//!
//! - **AO spikes** ([`AoSpikeDetector`]): sharp, sustained increases in the
//!   number of live heap objects, found by thresholding consecutive differences
//!   and merging nearby hits with [`IntervalMerger`]
//! - **BW spikes** ([`BwSpikeDetector`]): windows where fast-tier write
//!   bandwidth dominates a centered moving average of slow-tier write bandwidth
//!
//! Both detectors are fail soft: degenerate input yields an empty result, never
//! an error. Errors only come from invalid parameters at construction time.
//!
//! ## Usage
//!
//! ```rust
//! use placement_spikes::{AoSpikeDetector, AoParameters, SingleSeriesDetector};
//!
//! // Objects alive: flat, then a sharp ramp, then flat again
//! let mut counts = vec![0u64; 20];
//! counts.extend((1..=8).map(|i| i * 100));
//! counts.extend(vec![800u64; 20]);
//!
//! let detector = AoSpikeDetector::new(AoParameters::default()).unwrap();
//! let result = detector.detect(&counts);
//!
//! println!("Detected AO spikes: {:?}", result.spikes());
//! ```

pub mod ao;
pub mod bw;
pub mod kernel;
pub mod merge;
pub mod traits;
pub mod types;

pub use ao::{AoParameters, AoSpikeDetector};
pub use bw::{BwParameters, BwSpikeDetector};
pub use kernel::CenteredWindowKernel;
pub use merge::{IndexRun, IntervalMerger};
pub use traits::{
    ConfigurableDetector, DualSeriesDetector, SingleSeriesDetector, SpikeDetectorProperties,
};
pub use types::SpikeResult;
