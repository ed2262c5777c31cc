//! Binary min-heap with in-place rescoring.
//!
//! Items are dense `usize` handles (search-node indices) keyed by an `f64`
//! score. Each queued handle's slot in the heap array is tracked, so a key
//! change re-establishes heap order in `O(log n)` without a scan or a
//! remove/reinsert.

const NOT_QUEUED: usize = usize::MAX;

/// A min-heap of handles with tracked positions.
#[derive(Debug, Clone, Default)]
pub struct IndexedHeap {
    heap: Vec<(usize, f64)>,
    // Slot of each handle in `heap`, or NOT_QUEUED.
    slots: Vec<usize>,
}

impl IndexedHeap {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty heap with room for `n` queued items.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            heap: Vec::with_capacity(n),
            slots: Vec::with_capacity(n),
        }
    }

    /// Number of queued items.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether nothing is queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether `handle` is currently queued.
    #[inline]
    pub fn contains(&self, handle: usize) -> bool {
        self.slot(handle).is_some()
    }

    /// The key of a queued handle.
    pub fn key(&self, handle: usize) -> Option<f64> {
        self.slot(handle).map(|i| self.heap[i].1)
    }

    /// The minimum item without removing it.
    #[inline]
    pub fn peek(&self) -> Option<(usize, f64)> {
        self.heap.first().copied()
    }

    /// Queue `handle` with `key`. Pushing a handle that is already queued
    /// rescores it instead.
    pub fn push(&mut self, handle: usize, key: f64) {
        if self.contains(handle) {
            self.rescore(handle, key);
            return;
        }
        if handle >= self.slots.len() {
            self.slots.resize(handle + 1, NOT_QUEUED);
        }
        let i = self.heap.len();
        self.heap.push((handle, key));
        self.slots[handle] = i;
        self.sift_up(i);
    }

    /// Remove and return the item with the smallest key, or `None` when the
    /// heap is empty.
    pub fn pop_min(&mut self) -> Option<(usize, f64)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let top = self.heap.pop()?;
        self.slots[top.0] = NOT_QUEUED;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(top)
    }

    /// Change the key of a queued handle and restore heap order from its
    /// current slot. Returns `false` if the handle is not queued.
    pub fn rescore(&mut self, handle: usize, key: f64) -> bool {
        let Some(i) = self.slot(handle) else {
            return false;
        };
        self.heap[i].1 = key;
        let i = self.sift_up(i);
        self.sift_down(i);
        true
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    #[inline]
    fn slot(&self, handle: usize) -> Option<usize> {
        match self.slots.get(handle) {
            Some(&i) if i != NOT_QUEUED => Some(i),
            _ => None,
        }
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.slots[self.heap[a].0] = a;
        self.slots[self.heap[b].0] = b;
    }

    /// Move the item at `i` towards the root; returns its final slot.
    fn sift_up(&mut self, mut i: usize) -> usize {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[i].1 < self.heap[parent].1 {
                self.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
        i
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.heap.len();
        loop {
            let l = 2 * i + 1;
            let r = l + 1;
            let mut smallest = i;
            if l < n && self.heap[l].1 < self.heap[smallest].1 {
                smallest = l;
            }
            if r < n && self.heap[r].1 < self.heap[smallest].1 {
                smallest = r;
            }
            if smallest == i {
                break;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }

    #[cfg(test)]
    fn is_heap(&self) -> bool {
        let n = self.heap.len();
        (1..n).all(|i| self.heap[(i - 1) / 2].1 <= self.heap[i].1)
            && self
                .heap
                .iter()
                .enumerate()
                .all(|(i, &(h, _))| self.slots[h] == i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    #[test]
    fn pops_in_key_order() {
        let mut h = IndexedHeap::new();
        h.push(0, 5.0);
        h.push(1, 1.0);
        h.push(2, 3.0);
        h.push(3, 2.0);
        assert_eq!(h.len(), 4);
        assert_eq!(h.peek(), Some((1, 1.0)));

        let order: Vec<_> = std::iter::from_fn(|| h.pop_min()).map(|(i, _)| i).collect();
        assert_eq!(order, vec![1, 3, 2, 0]);
        assert!(h.is_empty());
    }

    #[test]
    fn pop_empty_signals_none() {
        let mut h = IndexedHeap::new();
        assert_eq!(h.pop_min(), None);
        h.push(7, 1.0);
        assert_eq!(h.pop_min(), Some((7, 1.0)));
        assert_eq!(h.pop_min(), None);
        assert_eq!(h.len(), 0);
    }

    #[test]
    fn rescore_decrease_moves_to_root() {
        let mut h = IndexedHeap::new();
        for i in 0..10 {
            h.push(i, 10.0 + i as f64);
        }
        assert!(h.rescore(9, 0.5));
        assert!(h.is_heap());
        assert_eq!(h.peek(), Some((9, 0.5)));
        assert_eq!(h.len(), 10);
    }

    #[test]
    fn rescore_increase_sinks() {
        let mut h = IndexedHeap::new();
        for i in 0..6 {
            h.push(i, i as f64);
        }
        assert!(h.rescore(0, 100.0));
        assert!(h.is_heap());
        assert_eq!(h.peek(), Some((1, 1.0)));
        assert_eq!(h.key(0), Some(100.0));
    }

    #[test]
    fn rescore_unknown_handle() {
        let mut h = IndexedHeap::new();
        h.push(0, 1.0);
        assert!(!h.rescore(5, 0.0));
        h.pop_min();
        assert!(!h.rescore(0, 0.0));
        assert!(!h.contains(0));
    }

    #[test]
    fn push_of_queued_handle_rescores() {
        let mut h = IndexedHeap::new();
        h.push(0, 4.0);
        h.push(1, 3.0);
        h.push(0, 1.0);
        assert_eq!(h.len(), 2);
        assert_eq!(h.pop_min(), Some((0, 1.0)));
    }

    #[test]
    fn preallocated_heap_grows_past_capacity() {
        let mut h = IndexedHeap::with_capacity(2);
        assert!(h.is_empty());
        assert_eq!(h.peek(), None);
        for i in (0..8).rev() {
            h.push(i, i as f64);
        }
        assert_eq!(h.len(), 8);
        assert!(h.is_heap());
        assert_eq!(h.pop_min(), Some((0, 0.0)));
        assert_eq!(h.key(7), Some(7.0));
    }

    #[test]
    fn random_decreases_keep_invariant() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut h = IndexedHeap::new();
        let mut keys = vec![0.0; 200];
        for (i, k) in keys.iter_mut().enumerate() {
            *k = rng.random_range(0.0..1000.0);
            h.push(i, *k);
        }
        for _ in 0..500 {
            let i = rng.random_range(0..keys.len());
            keys[i] -= rng.random_range(0.0..50.0);
            assert!(h.rescore(i, keys[i]));
            assert!(h.is_heap());
        }

        let mut expected: Vec<_> = keys.iter().copied().enumerate().collect();
        expected.sort_by(|a, b| a.1.total_cmp(&b.1));
        let mut prev = f64::NEG_INFINITY;
        let mut count = 0;
        while let Some((i, k)) = h.pop_min() {
            assert!(k >= prev);
            assert_eq!(k, keys[i]);
            prev = k;
            count += 1;
        }
        assert_eq!(count, expected.len());
    }
}
