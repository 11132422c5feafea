//! Active-object (AO) spike detection
//!
//! Finds regions where the number of live heap objects changes sharply:
//!
//! 1. Consecutive absolute differences `d[i] = |a[i + 1] - a[i]|`
//! 2. Threshold `tf * mean(d)`; every `i` with `d[i]` strictly above it is a hit
//! 3. Hits closer than the merge gap are joined into runs ([`IntervalMerger`])
//! 4. Runs are converted to time on the object-count sampling clock
//! 5. Runs without a single increase in the underlying series (pure decay)
//!    are discarded
//!
//! The strict comparison makes constant series spike-free: their threshold is
//! zero and no difference exceeds it.

use crate::merge::{IndexRun, IntervalMerger};
use crate::traits::{ConfigurableDetector, SingleSeriesDetector, SpikeDetectorProperties};
use crate::types::SpikeResult;
use num_traits::ToPrimitive;
use placement_core::error::{ensure_non_negative, ensure_positive};
use placement_core::math::{abs_diffs, as_f64, mean};
use placement_core::{Result, SamplingClock, TimeInterval};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// AO detector parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AoParameters {
    /// Multiple of the mean consecutive difference a difference must exceed
    pub threshold_factor: f64,
    /// Largest index distance between two hits that still joins them
    pub merge_gap: usize,
    /// Time units between object-count samples
    pub sampling_period: f64,
}

impl Default for AoParameters {
    fn default() -> Self {
        Self {
            threshold_factor: 2.0,
            merge_gap: 5,
            sampling_period: 0.25,
        }
    }
}

impl AoParameters {
    pub fn threshold_factor(mut self, threshold_factor: f64) -> Self {
        self.threshold_factor = threshold_factor;
        self
    }

    pub fn merge_gap(mut self, merge_gap: usize) -> Self {
        self.merge_gap = merge_gap;
        self
    }

    pub fn sampling_period(mut self, sampling_period: f64) -> Self {
        self.sampling_period = sampling_period;
        self
    }
}

/// Detector for surges in the live-object count
#[derive(Debug, Clone)]
pub struct AoSpikeDetector {
    params: AoParameters,
    clock: SamplingClock,
    merger: IntervalMerger,
}

impl AoSpikeDetector {
    pub fn new(params: AoParameters) -> Result<Self> {
        ensure_non_negative("threshold_factor", params.threshold_factor)?;
        ensure_positive("sampling_period", params.sampling_period)?;
        Ok(Self {
            clock: SamplingClock::new(params.sampling_period)?,
            merger: IntervalMerger::new(params.merge_gap),
            params,
        })
    }

    pub fn clock(&self) -> SamplingClock {
        self.clock
    }

    /// Indices `i` whose consecutive difference strictly exceeds the threshold
    fn raw_spike_indices(diffs: &[f64], threshold: f64) -> Vec<usize> {
        diffs
            .iter()
            .enumerate()
            .filter(|&(_, &d)| d > threshold)
            .map(|(i, _)| i)
            .collect()
    }

    /// Whether the series increases at least once between the run's first
    /// sample and the sample after its last difference.
    fn has_increase<T: ToPrimitive>(series: &[T], run: &IndexRun) -> bool {
        let end = run.end().min(series.len().saturating_sub(1));
        series
            .get(run.start..=end)
            .map(|window| window.windows(2).any(|pair| as_f64(&pair[0]) < as_f64(&pair[1])))
            .unwrap_or(false)
    }
}

impl SpikeDetectorProperties for AoSpikeDetector {
    fn algorithm_name(&self) -> &'static str {
        "AO"
    }

    fn minimum_sample_size(&self) -> usize {
        2
    }
}

impl<T: ToPrimitive> SingleSeriesDetector<T> for AoSpikeDetector {
    #[instrument(skip(self, series), fields(samples = series.len()))]
    fn detect(&self, series: &[T]) -> SpikeResult<TimeInterval> {
        if series.len() < self.minimum_sample_size() {
            return SpikeResult::empty(self.algorithm_name(), series.len());
        }

        let diffs = abs_diffs(series);
        let average_change = mean(&diffs).unwrap_or(0.0);
        let threshold = self.params.threshold_factor * average_change;

        let raw = Self::raw_spike_indices(&diffs, threshold);
        let runs = self.merger.merge(&raw);
        debug!(
            threshold,
            raw_hits = raw.len(),
            candidates = runs.len(),
            "Thresholded consecutive differences"
        );

        let mut spikes = Vec::with_capacity(runs.len());
        for run in &runs {
            if !Self::has_increase(series, run) {
                debug!(start = run.start, len = run.len, "Dropping candidate without increase");
                continue;
            }
            match self.clock.span(run.start, run.len) {
                Ok(interval) => spikes.push(interval),
                Err(err) => debug!(%err, "Dropping degenerate candidate"),
            }
        }

        debug!(spikes = spikes.len(), "AO detection finished");
        SpikeResult::new(spikes, self.algorithm_name(), series.len(), Some(threshold))
    }
}

impl ConfigurableDetector for AoSpikeDetector {
    type Parameters = AoParameters;

    fn with_parameters(params: Self::Parameters) -> Result<Self> {
        Self::new(params)
    }

    fn parameters(&self) -> &Self::Parameters {
        &self.params
    }
}
