//! # Tier Placement
//!
//! Decides which phases of a program's execution should allocate from the fast
//! memory tier and which from the slow, high-capacity tier.
//!
//! Two telemetry streams drive the decision:
//!
//! - the allocator log, giving bytes allocated and objects alive per period
//! - PCM write-bandwidth exports for both tiers
//!
//! Surges in live objects ([`placement_spikes::AoSpikeDetector`]) are matched
//! against windows of fast-tier bandwidth dominance
//! ([`placement_spikes::BwSpikeDetector`]); the heaviest surges per window
//! ([`placement_select::TopKSpikeSelector`]) become fast-tier segments of the
//! plan ([`placement_select::AllocationSegmenter`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use tier_placement::{PlacementConfig, PlacementPipeline};
//!
//! let pipeline = PlacementPipeline::new(PlacementConfig::default()).unwrap();
//!
//! // Nothing interesting happens in a flat trace
//! let objects = vec![10u64; 32];
//! let bytes = vec![0u64; 32];
//! let fast = vec![5.0; 8];
//! let slow = vec![5.0; 8];
//!
//! let outcome = pipeline.run(&objects, &bytes, &fast, &slow);
//! assert!(outcome.plan.is_none());
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;

pub use config::PlacementConfig;
pub use error::{Error, Result};
pub use pipeline::{PipelineOutcome, PlacementPipeline};

// Re-export the stage crates
pub use placement_core as core;
pub use placement_io as io;
pub use placement_select as select;
pub use placement_spikes as spikes;
