//! Static interval tree over time intervals
//!
//! Entries are sorted by start time and laid out as an implicit balanced
//! binary tree: the root of `entries[lo..hi]` is the middle element, and every
//! node records the largest end time in its subtree. An overlap query prunes
//! subtrees that end before the window and stops descending right once starts
//! pass the window, giving `O(log n + k)` per query.

use placement_core::TimeInterval;

/// An indexed interval and the value it was tagged with
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedInterval<V> {
    pub interval: TimeInterval,
    pub value: V,
}

/// Immutable interval index answering "which intervals overlap `[lo, hi)`?"
#[derive(Debug, Clone)]
pub struct IntervalIndex<V> {
    entries: Vec<IndexedInterval<V>>,
    /// `max_end[mid]` is the largest end in the subtree rooted at `mid`
    max_end: Vec<f64>,
}

impl<V> IntervalIndex<V> {
    /// Build the index from `(interval, value)` pairs
    pub fn build<I>(items: I) -> Self
    where
        I: IntoIterator<Item = (TimeInterval, V)>,
    {
        let mut entries: Vec<IndexedInterval<V>> = items
            .into_iter()
            .map(|(interval, value)| IndexedInterval { interval, value })
            .collect();
        // stable, so equal intervals keep insertion order
        entries.sort_by_key(|entry| entry.interval.sort_key());

        let mut max_end = vec![f64::NEG_INFINITY; entries.len()];
        Self::fill_max_end(&entries, &mut max_end, 0, entries.len());

        Self { entries, max_end }
    }

    fn fill_max_end(
        entries: &[IndexedInterval<V>],
        max_end: &mut [f64],
        lo: usize,
        hi: usize,
    ) -> f64 {
        if lo >= hi {
            return f64::NEG_INFINITY;
        }
        let mid = lo + (hi - lo) / 2;
        let left = Self::fill_max_end(entries, max_end, lo, mid);
        let right = Self::fill_max_end(entries, max_end, mid + 1, hi);
        let subtree = entries[mid].interval.end().max(left).max(right);
        max_end[mid] = subtree;
        subtree
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, ordered by start time
    pub fn iter(&self) -> impl Iterator<Item = &IndexedInterval<V>> {
        self.entries.iter()
    }

    /// Entries overlapping the half-open window `[lo, hi)`, ordered by start.
    ///
    /// `lo = None` leaves the window unbounded below. An entry overlaps when
    /// `start < hi` and `end > lo`; touching an edge does not count.
    pub fn query(&self, lo: Option<f64>, hi: f64) -> Vec<&IndexedInterval<V>> {
        let mut found = Vec::new();
        self.collect(0, self.entries.len(), lo, hi, &mut found);
        found
    }

    fn collect<'a>(
        &'a self,
        from: usize,
        to: usize,
        lo: Option<f64>,
        hi: f64,
        found: &mut Vec<&'a IndexedInterval<V>>,
    ) {
        if from >= to {
            return;
        }
        let mid = from + (to - from) / 2;
        if lo.is_some_and(|lo| self.max_end[mid] <= lo) {
            return;
        }

        self.collect(from, mid, lo, hi, found);

        let entry = &self.entries[mid];
        if entry.interval.start() >= hi {
            // everything to the right starts even later
            return;
        }
        if entry.interval.overlaps(lo, hi) {
            found.push(entry);
        }

        self.collect(mid + 1, to, lo, hi, found);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(start: f64, end: f64) -> TimeInterval {
        TimeInterval::new(start, end).unwrap()
    }

    fn sample_index() -> IntervalIndex<usize> {
        let intervals = [
            interval(5.0, 6.0),
            interval(0.0, 10.0),
            interval(1.0, 2.0),
            interval(7.0, 9.0),
            interval(3.0, 4.5),
            interval(12.0, 13.0),
        ];
        IntervalIndex::build(intervals.into_iter().enumerate().map(|(i, iv)| (iv, i)))
    }

    fn values(found: Vec<&IndexedInterval<usize>>) -> Vec<usize> {
        found.into_iter().map(|e| e.value).collect()
    }

    #[test]
    fn test_empty_index() {
        let index: IntervalIndex<usize> = IntervalIndex::build(Vec::new());
        assert!(index.is_empty());
        assert!(index.query(None, 100.0).is_empty());
    }

    #[test]
    fn test_iter_is_start_ordered() {
        let index = sample_index();
        let starts: Vec<f64> = index.iter().map(|e| e.interval.start()).collect();
        assert_eq!(starts, vec![0.0, 1.0, 3.0, 5.0, 7.0, 12.0]);
        assert_eq!(index.len(), 6);
    }

    #[test]
    fn test_bounded_query() {
        let index = sample_index();
        assert_eq!(values(index.query(Some(4.0), 7.5)), vec![1, 4, 0, 3]);
        assert_eq!(values(index.query(Some(10.0), 12.0)), Vec::<usize>::new());
    }

    #[test]
    fn test_unbounded_query() {
        let index = sample_index();
        assert_eq!(values(index.query(None, 3.0)), vec![1, 2]);
        assert_eq!(values(index.query(None, 100.0)), vec![1, 2, 4, 0, 3, 5]);
    }

    #[test]
    fn test_edges_do_not_overlap() {
        let index = sample_index();
        // [6, 7) touches 5..6 and 7..9 only at their edges
        assert_eq!(values(index.query(Some(6.0), 7.0)), vec![1]);
    }

    #[test]
    fn test_matches_linear_scan() {
        let intervals: Vec<TimeInterval> = (0..200)
            .map(|i| {
                let start = ((i * 37) % 101) as f64 * 0.5;
                interval(start, start + ((i * 13) % 17 + 1) as f64 * 0.25)
            })
            .collect();
        let index = IntervalIndex::build(intervals.iter().copied().enumerate().map(|(i, iv)| (iv, i)));

        for lo in (0..60).map(|x| x as f64) {
            for width in [0.5, 1.0, 3.0, 10.0] {
                let hi = lo + width;
                let mut got = values(index.query(Some(lo), hi));
                got.sort_unstable();
                let expected: Vec<usize> = intervals
                    .iter()
                    .enumerate()
                    .filter(|(_, iv)| iv.overlaps(Some(lo), hi))
                    .map(|(i, _)| i)
                    .collect();
                assert_eq!(got, expected, "window [{lo}, {hi})");
            }
        }
    }
}
