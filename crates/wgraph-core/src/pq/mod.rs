//! Array-backed binary heap priority queues
//!
//! Both queues store their elements in a 1-indexed heap: slot `k` has
//! children `2k` and `2k + 1`, and the ordering relation selected by
//! [`HeapMode`] holds between every non-root slot and its parent.
//! - [`BinaryHeapPQ`]: plain queue over opaque elements
//! - [`IndexedBinaryHeapPQ`]: adds membership tests and in-place priority
//!   updates through an element-to-slot index

pub mod binary_heap;
pub mod indexed;

use serde::Serialize;

pub use binary_heap::BinaryHeapPQ;
pub use indexed::IndexedBinaryHeapPQ;

/// An element stored in a priority queue along with its priority
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QElement<T, P = f64> {
    pub element: T,
    pub priority: P,
}

impl<T, P> QElement<T, P> {
    pub fn new(element: T, priority: P) -> Self {
        Self { element, priority }
    }
}

/// Which end of the priority range is served first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeapMode {
    /// Smallest priority first
    #[default]
    Min,
    /// Largest priority first
    Max,
}

impl HeapMode {
    /// Whether priority `a` ranks strictly above priority `b`
    pub fn higher<P: PartialOrd>(&self, a: &P, b: &P) -> bool {
        match self {
            HeapMode::Min => a < b,
            HeapMode::Max => a > b,
        }
    }
}

/// 1-indexed parent slot
#[inline]
pub(crate) fn parent(slot: usize) -> usize {
    slot / 2
}

/// 1-indexed slot of the lowest-ranked element.
/// Only leaves (slots `n/2 + 1 ..= n`) can hold it.
pub(crate) fn lowest_slot<T, P: PartialOrd>(
    mode: HeapMode,
    heap: &[QElement<T, P>],
) -> Option<usize> {
    let n = heap.len();
    if n == 0 {
        return None;
    }
    let mut lowest = n / 2;
    for i in (n / 2 + 1)..n {
        if mode.higher(&heap[lowest].priority, &heap[i].priority) {
            lowest = i;
        }
    }
    Some(lowest + 1)
}

#[cfg(test)]
pub(crate) fn is_heap_ordered<T, P: PartialOrd>(mode: HeapMode, heap: &[QElement<T, P>]) -> bool {
    (2..=heap.len()).all(|slot| {
        !mode.higher(&heap[slot - 1].priority, &heap[parent(slot) - 1].priority)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_ordering() {
        assert!(HeapMode::Min.higher(&1.0, &2.0));
        assert!(!HeapMode::Min.higher(&2.0, &2.0));
        assert!(HeapMode::Max.higher(&3, &2));
        assert!(!HeapMode::Max.higher(&2, &3));
    }

    #[test]
    fn test_lowest_slot_scans_leaves() {
        let heap = vec![
            QElement::new('a', 1),
            QElement::new('b', 3),
            QElement::new('c', 2),
            QElement::new('d', 10),
            QElement::new('e', 4),
        ];
        assert_eq!(lowest_slot(HeapMode::Min, &heap), Some(4));
        assert_eq!(lowest_slot::<char, i32>(HeapMode::Min, &[]), None);
    }
}
