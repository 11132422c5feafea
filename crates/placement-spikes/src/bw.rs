//! Write-bandwidth (BW) spike detection
//!
//! Compares fast-tier write bandwidth at every sample with the centered moving
//! average of slow-tier write bandwidth around it. A spike opens when the fast
//! tier exceeds `multiplier * average` and closes when it drops below it;
//! windows shorter than the minimum duration are discarded.
//!
//! Traces whose fast tier is not dominant overall (mean fast bandwidth at most
//! `gate_ratio` times the mean slow bandwidth) are skipped entirely.

use crate::kernel::CenteredWindowKernel;
use crate::traits::{ConfigurableDetector, DualSeriesDetector, SpikeDetectorProperties};
use crate::types::SpikeResult;
use num_traits::ToPrimitive;
use placement_core::error::{ensure_non_negative, ensure_positive};
use placement_core::math::{as_f64, mean};
use placement_core::{BwSpike, Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// BW detector parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BwParameters {
    /// Number of slow-tier samples averaged around each index
    pub window_size: usize,
    /// Time units between bandwidth samples
    pub sampling_interval: f64,
    /// Shortest spike, in time units, that is reported
    pub min_duration: f64,
    /// Fast tier mean must exceed this multiple of the slow tier mean
    pub gate_ratio: f64,
    /// Fast tier must exceed this multiple of the local slow-tier average
    pub dominance_multiplier: f64,
}

impl Default for BwParameters {
    fn default() -> Self {
        Self {
            window_size: 5,
            sampling_interval: 1.0,
            min_duration: 4.0,
            gate_ratio: 1.3,
            dominance_multiplier: 3.0,
        }
    }
}

impl BwParameters {
    pub fn window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn sampling_interval(mut self, sampling_interval: f64) -> Self {
        self.sampling_interval = sampling_interval;
        self
    }

    pub fn min_duration(mut self, min_duration: f64) -> Self {
        self.min_duration = min_duration;
        self
    }

    pub fn gate_ratio(mut self, gate_ratio: f64) -> Self {
        self.gate_ratio = gate_ratio;
        self
    }

    pub fn dominance_multiplier(mut self, dominance_multiplier: f64) -> Self {
        self.dominance_multiplier = dominance_multiplier;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum SpikeState {
    Outside,
    Inside { start: f64 },
}

/// Detector for fast-tier write bandwidth dominance
#[derive(Debug, Clone)]
pub struct BwSpikeDetector {
    params: BwParameters,
    kernel: CenteredWindowKernel,
}

impl BwSpikeDetector {
    pub fn new(params: BwParameters) -> Result<Self> {
        if params.window_size == 0 {
            return Err(Error::InvalidParameter(
                "window_size must be at least 1".to_string(),
            ));
        }
        ensure_positive("sampling_interval", params.sampling_interval)?;
        ensure_non_negative("min_duration", params.min_duration)?;
        ensure_non_negative("gate_ratio", params.gate_ratio)?;
        ensure_non_negative("dominance_multiplier", params.dominance_multiplier)?;

        Ok(Self {
            kernel: CenteredWindowKernel::new(params.window_size),
            params,
        })
    }

    /// Emit `[start, end]` if it lasts long enough
    fn close(&self, start: f64, end: f64, spikes: &mut Vec<BwSpike>) {
        if end - start >= self.params.min_duration {
            spikes.push(BwSpike::new(start, end));
        } else {
            debug!(start, end, "Dropping short bandwidth excursion");
        }
    }
}

impl SpikeDetectorProperties for BwSpikeDetector {
    fn algorithm_name(&self) -> &'static str {
        "BW"
    }

    fn minimum_sample_size(&self) -> usize {
        1
    }
}

impl<T: ToPrimitive> DualSeriesDetector<T> for BwSpikeDetector {
    #[instrument(skip(self, fast, slow), fields(fast_samples = fast.len(), slow_samples = slow.len()))]
    fn detect(&self, fast: &[T], slow: &[T]) -> SpikeResult<BwSpike> {
        let (Some(fast_mean), Some(slow_mean)) = (mean(fast), mean(slow)) else {
            return SpikeResult::empty(self.algorithm_name(), 0);
        };

        let sample_size = fast.len().min(slow.len());
        if fast_mean <= self.params.gate_ratio * slow_mean {
            debug!(fast_mean, slow_mean, "Fast tier not dominant, skipping trace");
            return SpikeResult::empty(self.algorithm_name(), sample_size);
        }

        let references = self.kernel.compute_window_means(slow, sample_size);
        let interval = self.params.sampling_interval;
        let multiplier = self.params.dominance_multiplier;

        let mut spikes = Vec::new();
        let mut state = SpikeState::Outside;

        for (i, (value, reference)) in fast.iter().zip(&references).enumerate() {
            let Some(reference) = *reference else {
                continue;
            };
            let current = as_f64(value);
            let threshold = multiplier * reference;

            state = match state {
                SpikeState::Outside if current > threshold => SpikeState::Inside {
                    start: i as f64 * interval,
                },
                SpikeState::Inside { start } if current < threshold => {
                    self.close(start, i as f64 * interval, &mut spikes);
                    SpikeState::Outside
                }
                unchanged => unchanged,
            };
        }

        if let SpikeState::Inside { start } = state {
            self.close(start, sample_size as f64 * interval, &mut spikes);
        }

        debug!(spikes = spikes.len(), "BW detection finished");
        SpikeResult::new(spikes, self.algorithm_name(), sample_size, None)
    }
}

impl ConfigurableDetector for BwSpikeDetector {
    type Parameters = BwParameters;

    fn with_parameters(params: Self::Parameters) -> Result<Self> {
        Self::new(params)
    }

    fn parameters(&self) -> &Self::Parameters {
        &self.params
    }
}
