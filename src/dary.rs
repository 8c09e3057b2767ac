//! Plain D-ary min-heap implementation
//!
//! A packed-array min-heap without key tracking, implementing only the base
//! [`Heap`] trait. This is the strictly simpler specialization of the
//! indexed heap: it drops the position and inverse maps and operates
//! directly on a `Vec` of priorities.
//!
//! Use this when you only ever need push/peek/pop. If you need to change or
//! remove a priority that is already inside the heap (as relaxation-style
//! algorithms do), use [`IndexedDaryHeap`](crate::IndexedDaryHeap) instead.
//!
//! # Example
//!
//! ```rust
//! use indexed_dary_heap::{DaryHeap, Heap};
//!
//! let mut heap = DaryHeap::with_degree(4);
//! heap.push(3);
//! heap.push(1);
//! heap.push(2);
//!
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), Some(2));
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.pop(), None);
//! ```

use crate::traits::Heap;

/// A plain D-ary min-heap over a packed array of priorities
///
/// Unlike [`IndexedDaryHeap`](crate::IndexedDaryHeap) this heap is growable:
/// without the key-indexed maps there is no fixed key range to preserve.
#[derive(Debug)]
pub struct DaryHeap<P: Ord> {
    /// Maximum number of children per node, at least 2
    degree: usize,
    /// The heap data; slot `i`'s children start at `i * degree + 1`
    data: Vec<P>,
}

impl<P: Ord> DaryHeap<P> {
    /// Creates an empty heap with the given degree (clamped to a minimum of 2)
    pub fn with_degree(degree: usize) -> Self {
        Self {
            degree: degree.max(2),
            data: Vec::new(),
        }
    }

    /// Creates an empty binary heap (degree 2)
    pub fn binary() -> Self {
        Self::with_degree(2)
    }

    /// Returns the degree of the heap
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Move the element at `index` up until its parent is no larger
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / self.degree;
            if self.data[index] < self.data[parent] {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move the element at `index` down until no child is smaller.
    /// Ties break toward the earliest minimal child in the scan.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let from = index * self.degree + 1;
            let to = len.min(from + self.degree);
            let mut smallest = index;

            for child in from..to {
                if self.data[child] < self.data[smallest] {
                    smallest = child;
                }
            }

            if smallest != index {
                self.data.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }
}

impl<P: Ord> Heap<P> for DaryHeap<P> {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, priority: P) {
        self.data.push(priority);
        self.sift_up(self.data.len() - 1);
    }

    fn peek(&self) -> Option<&P> {
        self.data.first()
    }

    fn pop(&mut self) -> Option<P> {
        if self.data.is_empty() {
            return None;
        }

        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let result = self.data.pop();

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        result
    }
}

impl<P: Ord> Default for DaryHeap<P> {
    fn default() -> Self {
        Self::binary()
    }
}
