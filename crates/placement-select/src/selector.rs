//! Top-K AO spike selection per bandwidth window
//!
//! AO spikes that start between two bandwidth spikes are the allocation bursts
//! most likely responsible for the second one. For every BW spike `j` the
//! selector considers AO spikes whose start lies in the open window
//! `(end[j - 1], end[j])` (or before `end[0]` for the first spike), weighs them
//! by the bytes allocated across their sample range and keeps the `K`
//! heaviest.
//!
//! Since the windows partition the time axis, no AO spike is chosen twice. The
//! chosen intervals may still overlap in time when a spike chosen for window
//! `j` extends past `end[j]`; they are reported as-is.

use crate::interval_index::IntervalIndex;
use crate::top_k::BoundedTopK;
use placement_core::math::inclusive_range_sum;
use placement_core::{BwSpike, SamplingClock, TimeInterval};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use tracing::{debug, instrument, trace};

/// Selection parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionParameters {
    /// AO spikes kept per bandwidth window
    pub top_k: usize,
}

impl Default for SelectionParameters {
    fn default() -> Self {
        Self { top_k: 1 }
    }
}

/// An AO spike chosen for a bandwidth window
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SelectedSpike {
    pub interval: TimeInterval,
    /// Position of the spike in the AO detector output
    pub ao_index: usize,
    /// Position of the bandwidth spike whose window selected it
    pub bw_index: usize,
    /// Bytes allocated across the spike's sample range
    pub weight: u64,
}

/// Interval-indexed top-K selector
#[derive(Debug, Clone, Copy)]
pub struct TopKSpikeSelector {
    top_k: usize,
    clock: SamplingClock,
}

impl TopKSpikeSelector {
    /// `clock` is the sampling clock of the allocated-bytes series
    pub fn new(top_k: usize, clock: SamplingClock) -> Self {
        Self { top_k, clock }
    }

    pub fn with_parameters(params: SelectionParameters, clock: SamplingClock) -> Self {
        Self::new(params.top_k, clock)
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Bytes allocated over an interval, end sample included
    pub fn weight(&self, interval: &TimeInterval, allocated_bytes: &[u64]) -> u64 {
        let (start, end) = self.clock.index_range(interval);
        inclusive_range_sum(allocated_bytes, start, end)
    }

    /// Run the selection.
    ///
    /// `bw_spikes` must be in time order, as produced by the BW detector. The
    /// result holds each window's group, heaviest first, with groups in
    /// bandwidth-spike order. On equal weight the spike discovered first wins.
    #[instrument(skip_all, fields(ao = ao_spikes.len(), bw = bw_spikes.len(), k = self.top_k))]
    pub fn select(
        &self,
        ao_spikes: &[TimeInterval],
        allocated_bytes: &[u64],
        bw_spikes: &[BwSpike],
    ) -> Vec<SelectedSpike> {
        if ao_spikes.is_empty() || bw_spikes.is_empty() || self.top_k == 0 {
            return Vec::new();
        }

        let index = IntervalIndex::build(ao_spikes.iter().copied().enumerate().map(|(i, s)| (s, i)));
        let mut selected = Vec::new();

        for (bw_index, bw_spike) in bw_spikes.iter().enumerate() {
            let previous_end = bw_index
                .checked_sub(1)
                .map(|prev| bw_spikes[prev].end);
            let window_end = bw_spike.end;

            let mut top = BoundedTopK::new(self.top_k);
            let mut considered = 0usize;
            for entry in index.query(previous_end, window_end) {
                let start = entry.interval.start();
                let inside = previous_end.map_or(true, |lo| lo < start && start < window_end);
                if !inside {
                    continue;
                }
                considered += 1;
                let weight = self.weight(&entry.interval, allocated_bytes);
                trace!(ao_index = entry.value, weight, "Candidate AO spike");
                top.push((weight, Reverse(entry.value)), entry.interval);
            }

            debug!(
                bw_index,
                ?previous_end,
                window_end,
                considered,
                kept = top.len(),
                "Selected AO spikes for bandwidth window"
            );

            selected.extend(top.into_sorted_vec().into_iter().map(
                |((weight, Reverse(ao_index)), interval)| SelectedSpike {
                    interval,
                    ao_index,
                    bw_index,
                    weight,
                },
            ));
        }

        selected
    }

    /// Run the selection and keep only the intervals
    pub fn select_intervals(
        &self,
        ao_spikes: &[TimeInterval],
        allocated_bytes: &[u64],
        bw_spikes: &[BwSpike],
    ) -> Vec<TimeInterval> {
        self.select(ao_spikes, allocated_bytes, bw_spikes)
            .into_iter()
            .map(|spike| spike.interval)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock() -> SamplingClock {
        SamplingClock::new(0.25).unwrap()
    }

    fn interval(start: f64, end: f64) -> TimeInterval {
        TimeInterval::new(start, end).unwrap()
    }

    #[test]
    fn test_weight_includes_end_sample() {
        let selector = TopKSpikeSelector::new(1, clock());
        let bytes = [0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
        assert_eq!(selector.weight(&interval(1.0, 2.0), &bytes), 5);
        // clipped at the end of the series
        assert_eq!(selector.weight(&interval(2.0, 5.0), &bytes), 3);
    }

    #[test]
    fn test_no_bw_spikes_selects_nothing() {
        let selector = TopKSpikeSelector::new(3, clock());
        let selected = selector.select(&[interval(0.0, 1.0)], &[1; 8], &[]);
        assert!(selected.is_empty());
    }

    #[test]
    fn test_zero_k_selects_nothing() {
        let selector = TopKSpikeSelector::new(0, clock());
        let selected = selector.select(&[interval(0.0, 1.0)], &[1; 8], &[BwSpike::new(0.0, 5.0)]);
        assert!(selected.is_empty());
    }

    #[test]
    fn test_keeps_heaviest_per_window() {
        // one byte per sample, so weight grows with length
        let bytes = vec![1u64; 200];
        let ao = vec![
            interval(1.0, 2.0),   // 5 samples
            interval(3.0, 6.0),   // 13 samples
            interval(12.0, 13.0), // 5 samples
            interval(14.0, 15.0), // 5 samples
            interval(16.0, 18.0), // 9 samples
        ];
        let bw = vec![BwSpike::new(6.0, 10.0), BwSpike::new(15.0, 20.0)];

        let selector = TopKSpikeSelector::new(1, clock());
        let selected = selector.select(&ao, &bytes, &bw);

        let picks: Vec<(usize, usize, u64)> =
            selected.iter().map(|s| (s.bw_index, s.ao_index, s.weight)).collect();
        assert_eq!(picks, vec![(0, 1, 13), (1, 4, 9)]);
    }

    #[test]
    fn test_window_lower_bound_is_strict() {
        let bytes = vec![1u64; 200];
        // starts exactly at the previous BW end: belongs to neither window
        let ao = vec![interval(2.0, 3.0), interval(10.0, 11.0), interval(10.5, 11.0)];
        let bw = vec![BwSpike::new(4.0, 10.0), BwSpike::new(15.0, 20.0)];

        let selector = TopKSpikeSelector::new(5, clock());
        let chosen: Vec<usize> = selector
            .select(&ao, &bytes, &bw)
            .iter()
            .map(|s| s.ao_index)
            .collect();
        assert_eq!(chosen, vec![0, 2]);
    }

    #[test]
    fn test_ties_prefer_earlier_spike() {
        let bytes = vec![1u64; 200];
        let ao = vec![interval(1.0, 2.0), interval(3.0, 4.0), interval(5.0, 6.0)];
        let bw = vec![BwSpike::new(6.0, 10.0)];

        let selector = TopKSpikeSelector::new(2, clock());
        let chosen: Vec<usize> = selector
            .select(&ao, &bytes, &bw)
            .iter()
            .map(|s| s.ao_index)
            .collect();
        assert_eq!(chosen, vec![0, 1]);
    }

    #[test]
    fn test_selections_may_overlap_across_windows() {
        let bytes = vec![1u64; 200];
        // spike 0 starts before the first BW end but runs past it; spike 1
        // starts in the second window inside spike 0
        let ao = vec![interval(4.0, 12.0), interval(8.0, 9.0)];
        let bw = vec![BwSpike::new(2.0, 6.0), BwSpike::new(9.0, 14.0)];

        let selector = TopKSpikeSelector::new(1, clock());
        let selected = selector.select_intervals(&ao, &bytes, &bw);
        assert_eq!(selected, vec![interval(4.0, 12.0), interval(8.0, 9.0)]);
    }
}
