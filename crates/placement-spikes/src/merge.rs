//! Merging of raw spike indices into contiguous regions
//!
//! Thresholding produces isolated hits. Hits that sit close to each other
//! belong to the same surge, so the merger fills the gaps between them and
//! reports maximal runs of consecutive indices.

/// A run of consecutive indices `[start, start + len)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRun {
    pub start: usize,
    pub len: usize,
}

impl IndexRun {
    /// One past the last index of the run
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn last(&self) -> usize {
        self.end() - 1
    }
}

/// Joins raw indices whose distance is at most `max_gap`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalMerger {
    max_gap: usize,
}

impl IntervalMerger {
    /// `max_gap` is the largest distance `next - current` between two raw
    /// indices that still joins them; `5` joins hits separated by up to four
    /// quiet samples.
    pub fn new(max_gap: usize) -> Self {
        Self { max_gap }
    }

    pub fn max_gap(&self) -> usize {
        self.max_gap
    }

    /// Merge raw indices into maximal runs.
    ///
    /// Input order does not matter and duplicates are ignored. Adjacent indices
    /// always belong to the same run, even with `max_gap == 0`.
    pub fn merge(&self, raw: &[usize]) -> Vec<IndexRun> {
        let mut sorted = raw.to_vec();
        sorted.sort_unstable();
        sorted.dedup();

        let join_distance = self.max_gap.max(1);
        let mut runs = Vec::new();
        let mut iter = sorted.into_iter();
        let Some(first) = iter.next() else {
            return runs;
        };

        let (mut start, mut last) = (first, first);
        for index in iter {
            if index - last <= join_distance {
                last = index;
            } else {
                runs.push(IndexRun { start, len: last - start + 1 });
                start = index;
                last = index;
            }
        }
        runs.push(IndexRun { start, len: last - start + 1 });

        runs
    }
}

impl Default for IntervalMerger {
    fn default() -> Self {
        Self::new(5)
    }
}
