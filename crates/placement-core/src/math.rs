//! Series arithmetic shared by the detectors and the segmenter

use num_traits::ToPrimitive;

#[inline]
pub fn as_f64<T: ToPrimitive>(value: &T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Arithmetic mean, or `None` for an empty slice
pub fn mean<T: ToPrimitive>(values: &[T]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().map(as_f64).sum();
    Some(sum / values.len() as f64)
}

/// Absolute consecutive differences `|a[i + 1] - a[i]|`
///
/// Returns an empty vector for series shorter than two samples.
pub fn abs_diffs<T: ToPrimitive>(values: &[T]) -> Vec<f64> {
    values
        .windows(2)
        .map(|pair| (as_f64(&pair[1]) - as_f64(&pair[0])).abs())
        .collect()
}

/// Sum of `values[start..end]` with both bounds clipped to the slice.
///
/// An empty or inverted range sums to zero.
pub fn range_sum(values: &[u64], start: usize, end: usize) -> u64 {
    let end = end.min(values.len());
    if start >= end {
        return 0;
    }
    values[start..end]
        .iter()
        .fold(0u64, |acc, &v| acc.saturating_add(v))
}

/// Sum of `values[start..=end]`, clipped to the slice
pub fn inclusive_range_sum(values: &[u64], start: usize, end: usize) -> u64 {
    range_sum(values, start, end.saturating_add(1))
}
