//! Types used for spike detection

use std::fmt;

/// Result of a spike detection pass
#[derive(Debug, Clone)]
pub struct SpikeResult<S> {
    /// Detected spikes, in discovery order
    spikes: Vec<S>,
    /// Algorithm used for detection
    algorithm: &'static str,
    /// Number of samples analyzed
    sample_size: usize,
    /// Threshold the detector compared against, if a global one applies
    threshold: Option<f64>,
}

impl<S> SpikeResult<S> {
    pub fn new(
        spikes: Vec<S>,
        algorithm: &'static str,
        sample_size: usize,
        threshold: Option<f64>,
    ) -> Self {
        Self {
            spikes,
            algorithm,
            sample_size,
            threshold,
        }
    }

    /// A result with no spikes
    pub fn empty(algorithm: &'static str, sample_size: usize) -> Self {
        Self::new(Vec::new(), algorithm, sample_size, None)
    }

    /// Get the detected spikes
    pub fn spikes(&self) -> &[S] {
        &self.spikes
    }

    /// Consume the result, keeping only the spikes
    pub fn into_spikes(self) -> Vec<S> {
        self.spikes
    }

    pub fn count(&self) -> usize {
        self.spikes.len()
    }

    pub fn has_spikes(&self) -> bool {
        !self.spikes.is_empty()
    }

    pub fn algorithm(&self) -> &str {
        self.algorithm
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    pub fn threshold(&self) -> Option<f64> {
        self.threshold
    }
}

impl<S: fmt::Display> fmt::Display for SpikeResult<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Spike Detection Result:")?;
        writeln!(f, "  Algorithm: {}", self.algorithm)?;
        writeln!(f, "  Sample size: {}", self.sample_size)?;
        if let Some(threshold) = self.threshold {
            writeln!(f, "  Threshold: {threshold:.3}")?;
        }
        writeln!(f, "  Spikes detected: {}", self.count())?;

        for spike in &self.spikes {
            writeln!(f, "    {spike}")?;
        }

        Ok(())
    }
}
