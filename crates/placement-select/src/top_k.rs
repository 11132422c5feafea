//! Bounded top-K selection

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Heap slot ordered by key only
#[derive(Debug)]
struct Ranked<K, T> {
    key: K,
    item: T,
}

impl<K: Ord, T> PartialEq for Ranked<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Ord, T> Eq for Ranked<K, T> {}

impl<K: Ord, T> PartialOrd for Ranked<K, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, T> Ord for Ranked<K, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Keeps the `capacity` items with the largest keys seen so far
///
/// Backed by a min-heap of at most `capacity` entries: each push is
/// `O(log K)` and evicts the current minimum once the heap is full. Keys
/// must be totally ordered; make them unique if ties need a deterministic
/// winner.
#[derive(Debug)]
pub struct BoundedTopK<K: Ord, T> {
    capacity: usize,
    heap: BinaryHeap<Reverse<Ranked<K, T>>>,
}

impl<K: Ord, T> BoundedTopK<K, T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity.saturating_add(1)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Smallest key currently retained
    pub fn min_key(&self) -> Option<&K> {
        self.heap.peek().map(|Reverse(ranked)| &ranked.key)
    }

    /// Offer an item; returns whichever item fell out, if any
    pub fn push(&mut self, key: K, item: T) -> Option<(K, T)> {
        if self.capacity == 0 {
            return Some((key, item));
        }
        self.heap.push(Reverse(Ranked { key, item }));
        if self.heap.len() > self.capacity {
            self.heap
                .pop()
                .map(|Reverse(ranked)| (ranked.key, ranked.item))
        } else {
            None
        }
    }

    /// Retained items, largest key first
    pub fn into_sorted_vec(self) -> Vec<(K, T)> {
        // ascending order of Reverse is descending order of key
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(ranked)| (ranked.key, ranked.item))
            .collect()
    }
}
