//! Core traits for spike detection
//!
//! Detectors are split by the shape of their input: live-object counts are a
//! single series, bandwidth dominance compares two aligned series. Both share
//! the same properties and configuration traits.

use crate::types::SpikeResult;
use num_traits::ToPrimitive;
use placement_core::{BwSpike, TimeInterval};

/// Properties of a spike detector that don't depend on its input
pub trait SpikeDetectorProperties {
    /// Get the name of the detection algorithm
    fn algorithm_name(&self) -> &'static str;

    /// Minimum number of samples for which a detector can report anything.
    ///
    /// Shorter input is not an error; it simply yields no spikes.
    fn minimum_sample_size(&self) -> usize;
}

/// Detector over one fixed-cadence series
pub trait SingleSeriesDetector<T: ToPrimitive>: SpikeDetectorProperties {
    fn detect(&self, series: &[T]) -> SpikeResult<TimeInterval>;
}

/// Detector comparing a fast-tier series against a slow-tier series
pub trait DualSeriesDetector<T: ToPrimitive>: SpikeDetectorProperties {
    /// Detect windows where `fast` dominates `slow`.
    ///
    /// The two series are aligned by index; the longer one is truncated.
    fn detect(&self, fast: &[T], slow: &[T]) -> SpikeResult<BwSpike>;
}

/// Access to a detector's parameters
pub trait ConfigurableDetector: Sized {
    type Parameters;

    /// Build a detector, validating the parameters
    fn with_parameters(params: Self::Parameters) -> placement_core::Result<Self>;
    fn parameters(&self) -> &Self::Parameters;
}
