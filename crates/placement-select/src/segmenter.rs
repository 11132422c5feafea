//! Translation of selected intervals into allocation segments
//!
//! The allocator consumes a list of byte counts and alternates tiers after
//! each one: slow, fast, slow, ... Segment `2k` is the allocation volume
//! before (or between) selected intervals and goes to the slow tier; segment
//! `2k + 1` is the volume inside the `k`-th interval and goes to the fast tier.

use placement_core::math::{inclusive_range_sum, range_sum};
use placement_core::{SamplingClock, TimeInterval};
use serde::Serialize;
use std::fmt;
use tracing::{debug, instrument};

/// Memory tier a segment is placed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// High-capacity tier (e.g. persistent memory)
    Slow,
    /// Fast tier (e.g. DRAM)
    Fast,
}

impl Tier {
    /// Tier of the segment at `position`
    pub fn of_segment(position: usize) -> Self {
        if position % 2 == 0 {
            Tier::Slow
        } else {
            Tier::Fast
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Slow => write!(f, "slow"),
            Tier::Fast => write!(f, "fast"),
        }
    }
}

/// Alternating slow/fast byte counts, starting on the slow tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationPlan {
    segments: Vec<u64>,
}

impl AllocationPlan {
    pub fn new(segments: Vec<u64>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[u64] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<u64> {
        self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments paired with the tier they are placed on
    pub fn iter(&self) -> impl Iterator<Item = (Tier, u64)> + '_ {
        self.segments
            .iter()
            .enumerate()
            .map(|(i, &bytes)| (Tier::of_segment(i), bytes))
    }

    /// Total bytes placed on `tier`
    pub fn bytes_on(&self, tier: Tier) -> u64 {
        self.iter()
            .filter(|(t, _)| *t == tier)
            .fold(0u64, |acc, (_, bytes)| acc.saturating_add(bytes))
    }
}

impl fmt::Display for AllocationPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Allocation Plan:")?;
        writeln!(f, "  Segments: {}", self.len())?;
        writeln!(f, "  Slow tier bytes: {}", self.bytes_on(Tier::Slow))?;
        writeln!(f, "  Fast tier bytes: {}", self.bytes_on(Tier::Fast))?;
        for (i, (tier, bytes)) in self.iter().enumerate() {
            writeln!(f, "    #{i} {tier}: {bytes}")?;
        }
        Ok(())
    }
}

/// Splits an allocated-bytes series at the selected intervals
#[derive(Debug, Clone, Copy)]
pub struct AllocationSegmenter {
    clock: SamplingClock,
}

impl AllocationSegmenter {
    /// `clock` is the sampling clock of the allocated-bytes series
    pub fn new(clock: SamplingClock) -> Self {
        Self { clock }
    }

    /// Build the plan for time-sorted `intervals`.
    ///
    /// Returns `None` when there is nothing to place, so callers can tell
    /// "no spikes" apart from a plan whose segments happen to be zero. Ranges
    /// are clipped to the series; overlapping neighbours yield an empty (zero)
    /// segment between them.
    #[instrument(skip_all, fields(intervals = intervals.len(), samples = allocated_bytes.len()))]
    pub fn segment(
        &self,
        intervals: &[TimeInterval],
        allocated_bytes: &[u64],
    ) -> Option<AllocationPlan> {
        let ranges: Vec<(usize, usize)> = intervals
            .iter()
            .map(|interval| self.clock.index_range(interval))
            .collect();
        let (first_start, _) = *ranges.first()?;

        let mut segments = Vec::with_capacity(2 * ranges.len());
        segments.push(range_sum(allocated_bytes, 0, first_start));

        for (k, &(start, end)) in ranges.iter().enumerate() {
            segments.push(inclusive_range_sum(allocated_bytes, start, end));
            if let Some(&(next_start, _)) = ranges.get(k + 1) {
                segments.push(range_sum(allocated_bytes, end.saturating_add(1), next_start));
            }
        }

        debug!(segments = segments.len(), "Built allocation plan");
        Some(AllocationPlan::new(segments))
    }
}
