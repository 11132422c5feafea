//! Index/time mapping for fixed-cadence sample series
//!
//! Telemetry series never store timestamps: sample `i` was taken at
//! `i * period`. Every stage that converts between the two representations goes
//! through [`SamplingClock`] so the rounding rule is the same everywhere.

use crate::error::{ensure_positive, Result};
use crate::interval::TimeInterval;

/// Relative slack used when snapping a time back onto the sample grid.
const GRID_TOLERANCE: f64 = 1e-9;

/// Maps sample indices to times and back for a fixed sampling period
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingClock {
    period: f64,
}

impl SamplingClock {
    /// Create a clock for samples taken every `period` time units
    pub fn new(period: f64) -> Result<Self> {
        Ok(Self {
            period: ensure_positive("sampling period", period)?,
        })
    }

    /// Time units between two consecutive samples
    pub fn period(&self) -> f64 {
        self.period
    }

    /// Number of samples per time unit
    pub fn samples_per_unit(&self) -> f64 {
        1.0 / self.period
    }

    /// Time at which sample `index` was taken
    pub fn time_of(&self, index: usize) -> f64 {
        index as f64 * self.period
    }

    /// Sample index covering `time`.
    ///
    /// Truncates towards zero like an integer cast, but first snaps values that
    /// sit within floating-point noise of a grid point onto it, so that
    /// `index_of(time_of(i)) == i` for every period. Negative and NaN times map
    /// to index 0.
    pub fn index_of(&self, time: f64) -> usize {
        let raw = time * self.samples_per_unit();
        if !(raw > 0.0) {
            return 0;
        }
        let nearest = raw.round();
        let snapped = if (raw - nearest).abs() <= GRID_TOLERANCE * nearest.max(1.0) {
            nearest
        } else {
            raw.floor()
        };
        snapped as usize
    }

    /// Start and end sample indices of an interval
    pub fn index_range(&self, interval: &TimeInterval) -> (usize, usize) {
        (self.index_of(interval.start()), self.index_of(interval.end()))
    }

    /// Interval covering `count` samples starting at `start_index`
    pub fn span(&self, start_index: usize, count: usize) -> Result<TimeInterval> {
        let start = self.time_of(start_index);
        TimeInterval::new(start, start + count as f64 * self.period)
    }
}

impl Default for SamplingClock {
    fn default() -> Self {
        Self { period: 1.0 }
    }
}
