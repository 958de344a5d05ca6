use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::error::{GraphError, Result};
use crate::pq::{lowest_slot, parent, HeapMode, QElement};

/// A binary heap priority queue addressable by element identity.
///
/// An index maps every enqueued element to its current heap slot, giving
/// O(1) membership tests and O(log n) in-place priority updates. Each
/// element can be enqueued at most once at a time.
#[derive(Debug, Clone)]
pub struct IndexedBinaryHeapPQ<T, P = f64>
where
    T: Eq + Hash,
{
    mode: HeapMode,
    heap: Vec<QElement<T, P>>,
    index: HashMap<T, usize>,
}

impl<T, P> IndexedBinaryHeapPQ<T, P>
where
    T: Eq + Hash + Clone + fmt::Debug,
    P: PartialOrd,
{
    pub fn new(mode: HeapMode) -> Self {
        Self {
            mode,
            heap: Vec::new(),
            index: HashMap::new(),
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

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether `element` is currently enqueued. O(1).
    pub fn contains(&self, element: &T) -> bool {
        self.index.contains_key(element)
    }

    /// Current priority of `element`, if enqueued
    pub fn priority_of(&self, element: &T) -> Option<&P> {
        self.index
            .get(element)
            .map(|&slot| &self.heap[slot - 1].priority)
    }

    /// Add an element with a priority. O(log n).
    ///
    /// Fails with `InvalidArgument` if the element is already enqueued;
    /// use [`IndexedBinaryHeapPQ::update`] to change its priority.
    pub fn enqueue(&mut self, element: T, priority: P) -> Result<()> {
        if self.contains(&element) {
            return Err(GraphError::invalid_argument(
                "element",
                format!("{:?} is already enqueued", element),
            ));
        }
        self.heap.push(QElement::new(element.clone(), priority));
        let slot = self.heap.len();
        self.index.insert(element, slot);
        self.swim(slot);
        Ok(())
    }

    /// Remove and return the highest-ranked element. O(log n).
    pub fn dequeue(&mut self) -> Result<QElement<T, P>> {
        let last = self.heap.len();
        if last == 0 {
            return Err(GraphError::EmptyCollection);
        }
        self.swap(1, last);
        let item = self.heap.pop().ok_or(GraphError::EmptyCollection)?;
        self.index.remove(&item.element);
        self.sink(1);
        Ok(item)
    }

    /// Replace the priority of an enqueued element and restore heap order.
    ///
    /// The element swims when the new priority ranks above the old one and
    /// sinks otherwise. Fails with `UnknownElement` if it is not enqueued.
    pub fn update(&mut self, element: &T, priority: P) -> Result<()> {
        let slot = *self
            .index
            .get(element)
            .ok_or_else(|| GraphError::unknown_element(element))?;

        let rises = self.mode.higher(&priority, &self.heap[slot - 1].priority);
        self.heap[slot - 1].priority = priority;

        if rises {
            self.swim(slot);
        } else {
            self.sink(slot);
        }
        Ok(())
    }

    /// The highest-ranked element, left in place
    pub fn front(&self) -> Result<&QElement<T, P>> {
        self.heap.first().ok_or(GraphError::EmptyCollection)
    }

    /// The lowest-ranked element, left in place
    pub fn rear(&self) -> Result<&QElement<T, P>> {
        let slot = lowest_slot(self.mode, &self.heap).ok_or(GraphError::EmptyCollection)?;
        Ok(&self.heap[slot - 1])
    }

    fn higher(&self, a: usize, b: usize) -> bool {
        self.mode
            .higher(&self.heap[a - 1].priority, &self.heap[b - 1].priority)
    }

    /// Swap two slots, keeping the index in step with the heap
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a - 1, b - 1);
        if let Some(slot) = self.index.get_mut(&self.heap[a - 1].element) {
            *slot = a;
        }
        if let Some(slot) = self.index.get_mut(&self.heap[b - 1].element) {
            *slot = b;
        }
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

    #[cfg(test)]
    fn index_consistent(&self) -> bool {
        self.index.len() == self.heap.len()
            && self
                .heap
                .iter()
                .enumerate()
                .all(|(i, q)| self.index.get(&q.element) == Some(&(i + 1)))
    }
}

impl<T, P> Default for IndexedBinaryHeapPQ<T, P>
where
    T: Eq + Hash + Clone + fmt::Debug,
    P: PartialOrd,
{
    fn default() -> Self {
        Self::min()
    }
}

impl<T, P> fmt::Display for IndexedBinaryHeapPQ<T, P>
where
    T: Eq + Hash + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = self.heap.iter().map(|q| q.element.to_string()).collect();
        write!(f, "[{}]", items.join(", "))
    }
}
