//! Indexed D-ary min-heap priority queues for Rust
//!
//! This crate provides a fixed-capacity indexed priority queue that associates
//! stable integer key indexes in `[0, N)` with mutable, comparable priority
//! values, plus a plain (non-indexed) D-ary heap as a simpler alternative.
//!
//! # Features
//!
//! - **Indexed D-ary Heap**: O(log_D n) insert, delete, update, decrease and
//!   increase, all addressable by a stable external key rather than by heap
//!   position
//! - **D-ary Heap**: a packed-array min-heap without key tracking, for when
//!   you only need push/pop/peek
//! - **Dijkstra shortest paths**: decrease-key relaxation driven by the
//!   indexed heap, with a dense-key interner for non-integer node labels
//!
//! The indexed heap maintains a position map (key → heap slot) and its exact
//! inverse (slot → key) alongside the heap-order invariant, so a caller can
//! change the priority of any live key in logarithmic time without knowing
//! where that key currently sits in the heap array. This is the structure
//! behind Dijkstra's and Prim's algorithms with decrease-key.
//!
//! # Example
//!
//! ```rust
//! use indexed_dary_heap::IndexedDaryHeap;
//!
//! // A binary (degree 2) indexed heap holding up to 10 keys.
//! let mut heap: IndexedDaryHeap<i32> = IndexedDaryHeap::new(2, 10);
//! heap.insert(3, 50).unwrap();
//! heap.insert(7, 20).unwrap();
//!
//! // Key 3 is still key 3, wherever the heap moved it.
//! heap.decrease(3, 10).unwrap();
//! assert_eq!(heap.peek_min_key_index(), Ok(3));
//! assert_eq!(heap.poll_min_value(), Ok(10));
//! ```

pub mod dary;
pub mod indexed_dary;
pub mod pathfinding;
pub mod traits;

// Re-export the main types for convenience
pub use dary::DaryHeap;
pub use indexed_dary::IndexedDaryHeap;
pub use traits::{Heap, HeapError};
