//! Common trait and error type for the heaps in this crate
//!
//! This module provides:
//!
//! - [`HeapError`]: the error taxonomy shared by every fallible heap operation
//! - [`Heap`]: base trait for plain min-heaps without key tracking
//!
//! The base [`Heap`] trait is compatible with Rust's standard heap API
//! patterns (push/peek/pop returning `Option`), while the indexed heap in
//! [`indexed_dary`](crate::indexed_dary) exposes a keyed, `Result`-based API
//! because every one of its operations has preconditions a caller can
//! violate.

use std::fmt;

/// Error type for heap operations
///
/// Every variant is an immediate, local precondition failure: validation
/// happens before any mutation, so a returned error guarantees the heap is
/// unchanged. Callers should treat these as programming errors to prevent
/// (e.g. check `contains` before `update`), not as conditions to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The key index is outside the heap's fixed key range `[0, capacity)`
    KeyOutOfRange { ki: usize, capacity: usize },
    /// An insert was attempted for a key that is already present
    DuplicateKey(usize),
    /// The operation referenced a key with no live value
    KeyNotFound(usize),
    /// A peek or poll was attempted on an empty heap
    Empty,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::KeyOutOfRange { ki, capacity } => {
                write!(f, "key index out of bounds; received: {ki}, capacity: {capacity}")
            }
            HeapError::DuplicateKey(ki) => {
                write!(f, "key index already exists; received: {ki}")
            }
            HeapError::KeyNotFound(ki) => {
                write!(f, "key index does not exist; received: {ki}")
            }
            HeapError::Empty => write!(f, "priority queue underflow"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for plain min-heap/priority queue data structures
///
/// This trait covers heaps that store bare priorities in a packed array and
/// identify elements only by heap order, like [`DaryHeap`](crate::DaryHeap):
/// - `push` inserts a priority
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// Heaps implementing only this trait cannot update or delete an arbitrary
/// element; for that, use [`IndexedDaryHeap`](crate::IndexedDaryHeap), which
/// addresses every element by a stable key index.
///
/// # Example
///
/// ```rust
/// use indexed_dary_heap::{DaryHeap, Heap};
///
/// let mut heap = DaryHeap::binary();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// ```
pub trait Heap<P: Ord> {
    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts a priority
    ///
    /// # Time Complexity
    /// O(log_D n)
    fn push(&mut self, priority: P);

    /// Returns the minimum priority without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&P>;

    /// Removes and returns the minimum priority
    ///
    /// # Time Complexity
    /// O(log_D n)
    fn pop(&mut self) -> Option<P>;
}
