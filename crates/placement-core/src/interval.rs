//! Time intervals produced by the spike detectors

use crate::error::{Error, Result};
use ordered_float::OrderedFloat;
use serde::Serialize;
use std::fmt;

/// A half-open span of time `[start, end)` with `start < end`
///
/// Times are expressed in the unit of the sampling periods (seconds for the
/// default telemetry cadence), regardless of which series produced them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeInterval {
    start: f64,
    end: f64,
}

impl TimeInterval {
    /// Create a new interval, rejecting non-finite or inverted bounds
    pub fn new(start: f64, end: f64) -> Result<Self> {
        if start.is_finite() && end.is_finite() && start < end {
            Ok(Self { start, end })
        } else {
            Err(Error::inverted_interval(start, end))
        }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Whether this interval shares any time with `[lo, hi)`.
    ///
    /// `lo = None` means the window is unbounded below.
    pub fn overlaps(&self, lo: Option<f64>, hi: f64) -> bool {
        self.start < hi && lo.map_or(true, |lo| self.end > lo)
    }

    /// Total order key: start time first, end time second
    pub fn sort_key(&self) -> (OrderedFloat<f64>, OrderedFloat<f64>) {
        (OrderedFloat(self.start), OrderedFloat(self.end))
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.3}, {:.3})", self.start, self.end)
    }
}

/// A window in which fast-tier write bandwidth dominated the slow tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BwSpike {
    /// Time the fast tier first exceeded the dominance threshold
    pub start: f64,
    /// Time the fast tier dropped back below it (or the end of the trace)
    pub end: f64,
    /// Midpoint of the window
    pub mid: f64,
}

impl BwSpike {
    /// Create a spike spanning `[start, end]`; the midpoint is derived
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            mid: (start + end) / 2.0,
        }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

impl fmt::Display for BwSpike {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BwSpike {{ start: {:.3}, end: {:.3}, mid: {:.3} }}",
            self.start, self.end, self.mid
        )
    }
}
