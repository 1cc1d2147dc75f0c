use std::fmt::Debug;

use crate::data_structures::min_heap::{HeapEntry, MinHeap};
use crate::Result;

/// A min-priority queue for shortest-path frontiers.
///
/// Thin delegation over [`MinHeap`]; entries come back in ascending
/// `(priority, vertex)` order. Carries no algorithmic policy of its own.
#[derive(Debug, Clone, Default)]
pub struct PriorityQueue<W>
where
    W: Ord + Copy + Debug,
{
    heap: MinHeap<W>,
}

impl<W> PriorityQueue<W>
where
    W: Ord + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        PriorityQueue {
            heap: MinHeap::new(),
        }
    }

    /// Creates an empty queue pre-sized for roughly `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        PriorityQueue {
            heap: MinHeap::with_capacity(capacity),
        }
    }

    /// Adds an entry to the queue
    pub fn add(&mut self, entry: HeapEntry<W>) {
        self.heap.insert(entry);
    }

    /// Removes and returns the entry with the smallest priority
    pub fn poll(&mut self) -> Result<HeapEntry<W>> {
        self.heap.extract_min()
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek(&self) -> Result<&HeapEntry<W>> {
        self.heap.peek_min()
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of queued entries
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
