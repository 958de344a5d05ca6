use std::fmt;

use crate::error::{GraphError, Result};
use crate::pq::{lowest_slot, parent, HeapMode, QElement};

/// A min- or max-ordered binary heap priority queue.
///
/// Elements are opaque; equal priorities leave no ordering guarantee.
#[derive(Debug, Clone)]
pub struct BinaryHeapPQ<T, P = f64> {
    mode: HeapMode,
    heap: Vec<QElement<T, P>>,
}

impl<T, P: PartialOrd> BinaryHeapPQ<T, P> {
    pub fn new(mode: HeapMode) -> Self {
        Self {
            mode,
            heap: Vec::new(),
        }
    }

    /// Smallest priority served first
    pub fn min() -> Self {
        Self::new(HeapMode::Min)
    }

    /// Largest priority served first
    pub fn max() -> Self {
        Self::new(HeapMode::Max)
    }

    pub fn mode(&self) -> HeapMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Add an element with a priority. O(log n).
    pub fn enqueue(&mut self, element: T, priority: P) {
        self.heap.push(QElement::new(element, priority));
        self.swim(self.heap.len());
    }

    /// Remove and return the highest-ranked element. O(log n).
    pub fn dequeue(&mut self) -> Result<QElement<T, P>> {
        let last = self.heap.len();
        if last == 0 {
            return Err(GraphError::EmptyCollection);
        }
        self.swap(1, last);
        let item = self.heap.pop().ok_or(GraphError::EmptyCollection)?;
        self.sink(1);
        Ok(item)
    }

    /// The highest-ranked element, left in place
    pub fn front(&self) -> Result<&QElement<T, P>> {
        self.heap.first().ok_or(GraphError::EmptyCollection)
    }

    /// The lowest-ranked element, left in place
    pub fn rear(&self) -> Result<&QElement<T, P>> {
        let slot = lowest_slot(self.mode, &self.heap).ok_or(GraphError::EmptyCollection)?;
        Ok(self.at(slot))
    }

    /// Elements in heap slot order
    pub fn iter(&self) -> impl Iterator<Item = &QElement<T, P>> + '_ {
        self.heap.iter()
    }

    fn at(&self, slot: usize) -> &QElement<T, P> {
        &self.heap[slot - 1]
    }

    fn higher(&self, a: usize, b: usize) -> bool {
        self.mode.higher(&self.at(a).priority, &self.at(b).priority)
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a - 1, b - 1);
    }

    fn swim(&mut self, mut slot: usize) {
        while slot > 1 && self.higher(slot, parent(slot)) {
            self.swap(slot, parent(slot));
            slot = parent(slot);
        }
    }

    fn sink(&mut self, mut slot: usize) {
        let size = self.heap.len();
        while slot * 2 <= size {
            let mut child = slot * 2;
            if child < size && self.higher(child + 1, child) {
                child += 1;
            }
            if !self.higher(child, slot) {
                break;
            }
            self.swap(slot, child);
            slot = child;
        }
    }
}

impl<T, P: PartialOrd> Default for BinaryHeapPQ<T, P> {
    fn default() -> Self {
        Self::min()
    }
}

impl<T: fmt::Display, P> fmt::Display for BinaryHeapPQ<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = self.heap.iter().map(|q| q.element.to_string()).collect();
        write!(f, "[{}]", items.join(", "))
    }
}
