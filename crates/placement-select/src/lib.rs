//! Correlation of spike sets and translation into placement segments
//!
//! The selector answers "which live-object surges matter?" by looking, for
//! every bandwidth-dominance window, at the AO spikes that started since the
//! previous window and keeping the K that allocated the most bytes. The
//! segmenter then turns the chosen time intervals into the alternating
//! slow/fast byte counts consumed by the tiered allocator.
//!
//! ## Components
//!
//! - [`IntervalIndex`]: static augmented interval tree for overlap queries
//! - [`BoundedTopK`]: fixed-capacity min-heap keeping the K largest keys
//! - [`TopKSpikeSelector`]: the per-window selection loop
//! - [`AllocationSegmenter`]: byte sums outside and inside selected intervals
//!
//! ## Usage
//!
//! ```rust
//! use placement_core::{BwSpike, SamplingClock, TimeInterval};
//! use placement_select::{AllocationSegmenter, TopKSpikeSelector};
//!
//! let clock = SamplingClock::new(0.25).unwrap();
//! let ao_spikes = vec![TimeInterval::new(1.0, 2.0).unwrap()];
//! let bw_spikes = vec![BwSpike::new(0.0, 5.0)];
//! let allocated = vec![0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
//!
//! let selector = TopKSpikeSelector::new(1, clock);
//! let selected = selector.select_intervals(&ao_spikes, &allocated, &bw_spikes);
//!
//! let plan = AllocationSegmenter::new(clock).segment(&selected, &allocated).unwrap();
//! assert_eq!(plan.segments(), &[4, 5]);
//! ```

pub mod interval_index;
pub mod segmenter;
pub mod selector;
pub mod top_k;

pub use interval_index::{IndexedInterval, IntervalIndex};
pub use segmenter::{AllocationPlan, AllocationSegmenter, Tier};
pub use selector::{SelectedSpike, SelectionParameters, TopKSpikeSelector};
pub use top_k::BoundedTopK;
