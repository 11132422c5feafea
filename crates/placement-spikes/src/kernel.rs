//! Windowed averaging kernel for bandwidth dominance detection

use num_traits::ToPrimitive;
use placement_core::math::as_f64;

/// Centered moving average with boundary clipping
///
/// For index `i` the window covers `[i - w/2, i + w/2)` when the window size
/// `w` is even and `[i - w/2, i + w/2 + 1)` when it is odd, clipped to the
/// series. Means are computed from prefix sums, so building all of them is
/// linear in the series length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CenteredWindowKernel {
    window_size: usize,
}

impl CenteredWindowKernel {
    pub fn new(window_size: usize) -> Self {
        Self { window_size }
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Clipped `[start, end)` bounds of the window around `index`
    pub fn window_bounds(&self, index: usize, len: usize) -> (usize, usize) {
        let half = self.window_size / 2;
        let trailing = if self.window_size % 2 == 0 { half } else { half + 1 };
        let start = index.saturating_sub(half);
        let end = index.saturating_add(trailing).min(len);
        (start, end)
    }

    /// Window means for the first `count` indices of `data`.
    ///
    /// Windows are clipped against the whole of `data`, not against `count`.
    /// An index whose clipped window is empty gets `None`.
    pub fn compute_window_means<T: ToPrimitive>(
        &self,
        data: &[T],
        count: usize,
    ) -> Vec<Option<f64>> {
        let mut prefix = Vec::with_capacity(data.len() + 1);
        prefix.push(0.0);
        let mut running = 0.0;
        for value in data {
            running += as_f64(value);
            prefix.push(running);
        }

        (0..count.min(data.len()))
            .map(|i| {
                let (start, end) = self.window_bounds(i, data.len());
                (end > start).then(|| (prefix[end] - prefix[start]) / (end - start) as f64)
            })
            .collect()
    }
}
