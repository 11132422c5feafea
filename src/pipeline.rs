//! The placement pipeline
//!
//! ```text
//! objects alive ──> AO detector ─┐
//!                                ├─> top-K selector ─> sort ─> segmenter ─> plan
//! fast/slow BW ──> BW detector ──┘         ^                      ^
//! allocated bytes ─────────────────────────┴──────────────────────┘
//! ```

use crate::config::PlacementConfig;
use crate::error::Result;
use placement_core::{BwSpike, SamplingClock, TimeInterval};
use placement_io::{read_allocation_log, read_bandwidth, BenchmarkPaths};
use placement_select::{AllocationPlan, AllocationSegmenter, SelectedSpike, TopKSpikeSelector};
use placement_spikes::{
    AoSpikeDetector, BwSpikeDetector, DualSeriesDetector, SingleSeriesDetector,
};
use tracing::{info, instrument};

/// Everything the pipeline found, stage by stage
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    /// Live-object surges, in discovery order
    pub ao_spikes: Vec<TimeInterval>,
    /// Bandwidth-dominance windows, in time order
    pub bw_spikes: Vec<BwSpike>,
    /// Selected AO spikes sorted by (start, end)
    pub selected: Vec<SelectedSpike>,
    /// `None` when no AO spike was selected
    pub plan: Option<AllocationPlan>,
}

impl PipelineOutcome {
    /// Selected intervals in plan order
    pub fn selected_intervals(&self) -> Vec<TimeInterval> {
        self.selected.iter().map(|spike| spike.interval).collect()
    }
}

/// Detectors, selector and segmenter built from one configuration
#[derive(Debug, Clone)]
pub struct PlacementPipeline {
    ao: AoSpikeDetector,
    bw: BwSpikeDetector,
    selector: TopKSpikeSelector,
    segmenter: AllocationSegmenter,
}

impl PlacementPipeline {
    pub fn new(config: PlacementConfig) -> Result<Self> {
        let ao = AoSpikeDetector::new(config.ao)?;
        let bw = BwSpikeDetector::new(config.bw)?;
        // allocated bytes share the object-count clock
        let clock: SamplingClock = ao.clock();
        Ok(Self {
            ao,
            bw,
            selector: TopKSpikeSelector::with_parameters(config.selection, clock),
            segmenter: AllocationSegmenter::new(clock),
        })
    }

    /// Run every stage over in-memory series
    #[instrument(skip_all, fields(
        samples = objects_alive.len(),
        bw_samples = fast_tier.len().min(slow_tier.len()),
    ))]
    pub fn run(
        &self,
        objects_alive: &[u64],
        allocated_bytes: &[u64],
        fast_tier: &[f64],
        slow_tier: &[f64],
    ) -> PipelineOutcome {
        let ao_spikes = self.ao.detect(objects_alive).into_spikes();
        let bw_spikes = self.bw.detect(fast_tier, slow_tier).into_spikes();
        info!(
            ao_spikes = ao_spikes.len(),
            bw_spikes = bw_spikes.len(),
            "Spike detection finished"
        );

        let mut selected = self.selector.select(&ao_spikes, allocated_bytes, &bw_spikes);
        selected.sort_by_key(|spike| spike.interval.sort_key());

        let intervals: Vec<TimeInterval> = selected.iter().map(|spike| spike.interval).collect();
        let plan = self.segmenter.segment(&intervals, allocated_bytes);
        info!(
            selected = selected.len(),
            segments = plan.as_ref().map_or(0, AllocationPlan::len),
            "Placement plan ready"
        );

        PipelineOutcome {
            ao_spikes,
            bw_spikes,
            selected,
            plan,
        }
    }

    /// Read a benchmark's telemetry files and run every stage
    pub fn run_benchmark(&self, paths: &BenchmarkPaths) -> Result<PipelineOutcome> {
        let log = read_allocation_log(&paths.log)?;
        let bandwidth = read_bandwidth(&paths.slow_tier_csv, &paths.fast_tier_csv)?;
        info!(
            log = %paths.log.display(),
            samples = log.len(),
            bw_samples = bandwidth.fast.len().min(bandwidth.slow.len()),
            "Loaded telemetry"
        );
        Ok(self.run(
            &log.objects_alive,
            &log.allocated_bytes,
            &bandwidth.fast,
            &bandwidth.slow,
        ))
    }
}
