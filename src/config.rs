//! Pipeline configuration
//!
//! Every field has a default, so a JSON file only needs the values it changes:
//!
//! ```json
//! { "bw": { "window_size": 7 }, "selection": { "top_k": 2 } }
//! ```

use crate::error::{Error, Result};
use placement_select::SelectionParameters;
use placement_spikes::{AoParameters, AoSpikeDetector, BwParameters, BwSpikeDetector};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Parameters for every stage of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Live-object detector; its sampling period also clocks allocated bytes
    pub ao: AoParameters,
    /// Write-bandwidth detector
    pub bw: BwParameters,
    /// Per-window selection
    pub selection: SelectionParameters,
}

impl PlacementConfig {
    /// Parse a configuration from JSON text
    pub fn from_json_str(text: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Load and validate a configuration file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigFile {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json_str(&text).map_err(|source| Error::Config {
            path: path.display().to_string(),
            source,
        })?;
        config.validate()?;
        debug!(path = %path.display(), ?config, "Loaded configuration");
        Ok(config)
    }

    /// Keep this many AO spikes per bandwidth window
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.selection.top_k = top_k;
        self
    }

    /// Average this many slow-tier samples around each index
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.bw.window_size = window_size;
        self
    }

    /// Reject parameters the detectors cannot work with
    pub fn validate(&self) -> Result<()> {
        AoSpikeDetector::new(self.ao)?;
        BwSpikeDetector::new(self.bw)?;
        Ok(())
    }
}
