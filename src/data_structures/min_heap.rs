use std::fmt::Debug;

use crate::{Error, Result};

/// An entry of the frontier: a tentative priority paired with a vertex ID.
///
/// Entries are ordered by priority first, then by vertex ID, so equal
/// priorities break ties deterministically toward the lower vertex.
/// Priorities must not be NaN; callers use an `Ord` weight type such as
/// `ordered_float::OrderedFloat<f64>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HeapEntry<W> {
    pub priority: W,
    pub vertex: usize,
}

impl<W> HeapEntry<W> {
    pub fn new(priority: W, vertex: usize) -> Self {
        HeapEntry { priority, vertex }
    }
}

/// An array-backed binary min-heap over [`HeapEntry`] values.
///
/// The backing array grows by doubling when full. There is no decrease-key:
/// a vertex may have several live entries at once, and whoever consumes the
/// heap is responsible for discarding the stale ones on extraction.
#[derive(Debug, Clone)]
pub struct MinHeap<W> {
    entries: Vec<HeapEntry<W>>,
}

impl<W> MinHeap<W>
where
    W: Ord + Copy + Debug,
{
    /// Creates a new empty heap
    pub fn new() -> Self {
        MinHeap {
            entries: Vec::new(),
        }
    }

    /// Creates an empty heap with room for `capacity` entries before the
    /// first reallocation
    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns true if the heap contains no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries in the heap
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Inserts an entry, restoring the heap order by sifting it upward
    pub fn insert(&mut self, entry: HeapEntry<W>) {
        self.entries.push(entry);
        self.sift_up(self.entries.len() - 1);
    }

    /// Returns the minimum entry without removing it
    pub fn peek_min(&self) -> Result<&HeapEntry<W>> {
        self.entries.first().ok_or(Error::EmptyContainer("Heap"))
    }

    /// Removes and returns the minimum entry.
    ///
    /// The last entry is swapped into the root and sifted downward, always
    /// descending into the smaller child.
    pub fn extract_min(&mut self) -> Result<HeapEntry<W>> {
        if self.entries.is_empty() {
            return Err(Error::EmptyContainer("Heap"));
        }
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let min = self.entries.pop().ok_or(Error::EmptyContainer("Heap"))?;
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[index] < self.entries[parent] {
                self.entries.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            if left >= self.entries.len() {
                break;
            }
            let right = left + 1;
            let mut smaller = left;
            if right < self.entries.len() && self.entries[right] < self.entries[left] {
                smaller = right;
            }
            if self.entries[smaller] < self.entries[index] {
                self.entries.swap(index, smaller);
                index = smaller;
            } else {
                break;
            }
        }
    }
}

impl<W> Default for MinHeap<W>
where
    W: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn entry(priority: f64, vertex: usize) -> HeapEntry<OrderedFloat<f64>> {
        HeapEntry::new(OrderedFloat(priority), vertex)
    }

    fn assert_heap_ordered(heap: &MinHeap<OrderedFloat<f64>>) {
        for (i, e) in heap.entries.iter().enumerate() {
            for child in [2 * i + 1, 2 * i + 2] {
                if child < heap.entries.len() {
                    assert!(
                        e.priority <= heap.entries[child].priority,
                        "heap order violated at index {}: {:?} > {:?}",
                        i,
                        e,
                        heap.entries[child]
                    );
                }
            }
        }
    }

    #[test]
    fn extracts_in_ascending_order() {
        let mut heap = MinHeap::new();
        for (p, v) in [(5.0, 0), (1.0, 1), (3.0, 2), (2.0, 3), (4.0, 4)] {
            heap.insert(entry(p, v));
        }

        let mut order = Vec::new();
        while !heap.is_empty() {
            order.push(heap.extract_min().unwrap().priority.into_inner());
        }
        assert_eq!(order, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn peek_does_not_remove() {
        let mut heap = MinHeap::new();
        heap.insert(entry(2.0, 0));
        heap.insert(entry(1.0, 1));

        assert_eq!(heap.peek_min().unwrap().vertex, 1);
        assert_eq!(heap.len(), 2);
    }

    #[test]
    fn empty_heap_fails() {
        let mut heap: MinHeap<OrderedFloat<f64>> = MinHeap::new();
        assert_eq!(heap.extract_min(), Err(Error::EmptyContainer("Heap")));
        assert!(heap.peek_min().is_err());
    }

    #[test]
    fn duplicate_vertices_are_allowed() {
        // Lazy deletion relies on several live entries per vertex
        let mut heap = MinHeap::new();
        heap.insert(entry(4.0, 7));
        heap.insert(entry(2.0, 7));
        heap.insert(entry(3.0, 7));

        assert_eq!(heap.extract_min().unwrap().priority.into_inner(), 2.0);
        assert_eq!(heap.len(), 2);
    }

    #[test]
    fn equal_priorities_break_ties_by_vertex() {
        let mut heap = MinHeap::new();
        heap.insert(entry(1.0, 9));
        heap.insert(entry(1.0, 2));
        heap.insert(entry(1.0, 5));

        assert_eq!(heap.extract_min().unwrap().vertex, 2);
        assert_eq!(heap.extract_min().unwrap().vertex, 5);
        assert_eq!(heap.extract_min().unwrap().vertex, 9);
    }

    #[test]
    fn heap_order_holds_under_random_interleaving() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut heap = MinHeap::new();
        let mut last_extracted: Option<f64> = None;

        for step in 0..2_000 {
            if heap.is_empty() || rng.gen_bool(0.6) {
                heap.insert(entry(rng.gen_range(0.0..100.0), step % 50));
                last_extracted = None;
            } else {
                let min = heap.extract_min().unwrap();
                if let Some(prev) = last_extracted {
                    assert!(min.priority.into_inner() >= prev);
                }
                last_extracted = Some(min.priority.into_inner());
            }
            assert_heap_ordered(&heap);
        }
    }
}
