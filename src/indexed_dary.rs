//! Indexed D-ary min-heap implementation
//!
//! An indexed priority queue that maps stable external key indexes in
//! `[0, N)` to mutable comparable values, supporting arbitrary-position
//! priority changes and deletion by key in O(log_D n).
//!
//! To use arbitrary keys (such as strings or other objects), first map them
//! to the integer domain `[0, N)` where `N` is the number of keys, then use
//! the mapping with this queue; see
//! [`Indexer`](crate::pathfinding::Indexer) for a ready-made translation
//! table. As convention, `ki` denotes the key index associated with a key.
//!
//! # Time Complexity
//!
//! | Operation        | Complexity   |
//! |------------------|--------------|
//! | `insert`         | O(log_D n)   |
//! | `delete`         | O(log_D n)   |
//! | `update`         | O(log_D n)   |
//! | `decrease`       | O(log_D n)   |
//! | `increase`       | O(log_D n)   |
//! | `poll_min_*`     | O(log_D n)   |
//! | `peek_min_*`     | O(1)         |
//! | `contains`       | O(1)         |
//! | `value_of`       | O(1)         |
//!
//! # Example
//!
//! ```rust
//! use indexed_dary_heap::IndexedDaryHeap;
//!
//! let mut heap: IndexedDaryHeap<&str> = IndexedDaryHeap::new(4, 16);
//! heap.insert(5, "banana").unwrap();
//! heap.insert(9, "apple").unwrap();
//! heap.insert(2, "cherry").unwrap();
//!
//! assert_eq!(heap.peek_min_value(), Ok(&"apple"));
//! assert_eq!(heap.poll_min_key_index(), Ok(9));
//! assert_eq!(heap.delete(5), Ok("banana"));
//! assert_eq!(heap.poll_min_value(), Ok("cherry"));
//! assert!(heap.is_empty());
//! ```

use crate::traits::HeapError;

/// Sentinel marking an unused entry in the position and inverse maps.
///
/// Plays the role a null pointer would in a node-based structure; both maps
/// hold plain `usize` slots and never allocate per element.
const ABSENT: usize = usize::MAX;

/// An indexed min D-ary heap priority queue
///
/// The heap owns five same-length arrays, all allocated once at construction:
/// the values (indexed by key), the position map (key → heap slot), the
/// inverse map (heap slot → key), and precomputed child/parent slot tables.
/// The two maps are exact inverses over the occupied range, which is what
/// lets every operation address an element by its stable key index rather
/// than by its current heap position.
///
/// The heap is fixed-capacity for its lifetime and is not thread-safe;
/// concurrent callers must serialize access externally.
#[derive(Debug)]
pub struct IndexedDaryHeap<P: Ord> {
    /// Current number of elements in the heap
    size: usize,

    /// Maximum number of elements, and the exclusive upper bound on key indexes
    capacity: usize,

    /// The degree of every node in the heap
    degree: usize,

    /// Lookup arrays for the first-child/parent slot of each slot
    child: Vec<usize>,
    parent: Vec<usize>,

    /// The position map: key index → slot currently holding that key, or ABSENT
    position: Vec<usize>,

    /// The inverse map: slot → key index occupying it; `position` and
    /// `inverse` are inverses of each other over `[0, size)`:
    /// `position[inverse[i]] == inverse[position[i]] == i`
    inverse: Vec<usize>,

    /// The values associated with the keys, indexed by key index (not slot)
    values: Vec<Option<P>>,
}

impl<P: Ord> IndexedDaryHeap<P> {
    /// Creates a D-ary heap with a maximum capacity of `max_size`.
    ///
    /// `degree` is clamped to a minimum of 2 and `max_size` to a minimum of
    /// `degree + 1`. Key indexes for this heap live in `[0, capacity())`.
    ///
    /// # Panics
    ///
    /// Panics if `max_size` is zero.
    pub fn new(degree: usize, max_size: usize) -> Self {
        assert!(max_size > 0, "max_size must be positive");
        let d = degree.max(2);
        let n = max_size.max(d + 1);

        let mut child = Vec::with_capacity(n);
        let mut parent = Vec::with_capacity(n);
        for i in 0..n {
            child.push(i * d + 1);
            parent.push(i.saturating_sub(1) / d);
        }

        Self {
            size: 0,
            capacity: n,
            degree: d,
            child,
            parent,
            position: vec![ABSENT; n],
            inverse: vec![ABSENT; n],
            values: (0..n).map(|_| None).collect(),
        }
    }

    /// Creates an indexed binary heap (degree 2) with the given capacity.
    ///
    /// # Panics
    ///
    /// Panics if `max_size` is zero.
    pub fn binary(max_size: usize) -> Self {
        Self::new(2, max_size)
    }

    /// Returns the number of elements currently in the heap
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the fixed capacity, i.e. the exclusive upper bound on key indexes
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the degree (maximum children per node) of the heap
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Returns true if the key index has a live value in the heap.
    ///
    /// # Errors
    ///
    /// [`HeapError::KeyOutOfRange`] if `ki >= capacity()`.
    pub fn contains(&self, ki: usize) -> Result<bool, HeapError> {
        self.key_in_bounds(ki)?;
        Ok(self.position[ki] != ABSENT)
    }

    /// Inserts `value` under the key index `ki`.
    ///
    /// The key stays valid until deleted, no matter how the heap reorders
    /// internally. A previously deleted key may be inserted again.
    ///
    /// # Errors
    ///
    /// [`HeapError::KeyOutOfRange`] if `ki >= capacity()`,
    /// [`HeapError::DuplicateKey`] if `ki` is already present. The heap is
    /// unchanged on error.
    pub fn insert(&mut self, ki: usize, value: P) -> Result<(), HeapError> {
        if self.contains(ki)? {
            return Err(HeapError::DuplicateKey(ki));
        }
        self.position[ki] = self.size;
        self.inverse[self.size] = ki;
        self.values[ki] = Some(value);
        self.swim(self.size);
        self.size += 1;
        Ok(())
    }

    /// Returns a reference to the value associated with `ki`.
    ///
    /// # Errors
    ///
    /// [`HeapError::KeyOutOfRange`] / [`HeapError::KeyNotFound`].
    pub fn value_of(&self, ki: usize) -> Result<&P, HeapError> {
        self.key_exists(ki)?;
        Ok(self.values[ki].as_ref().unwrap())
    }

    /// Returns the key index of the minimum value without removing it.
    ///
    /// # Errors
    ///
    /// [`HeapError::Empty`] if the heap has no elements.
    pub fn peek_min_key_index(&self) -> Result<usize, HeapError> {
        if self.is_empty() {
            return Err(HeapError::Empty);
        }
        Ok(self.inverse[0])
    }

    /// Returns a reference to the minimum value without removing it.
    ///
    /// # Errors
    ///
    /// [`HeapError::Empty`] if the heap has no elements.
    pub fn peek_min_value(&self) -> Result<&P, HeapError> {
        if self.is_empty() {
            return Err(HeapError::Empty);
        }
        Ok(self.values[self.inverse[0]].as_ref().unwrap())
    }

    /// Removes the minimum element and returns its key index.
    ///
    /// # Errors
    ///
    /// [`HeapError::Empty`] if the heap has no elements.
    pub fn poll_min_key_index(&mut self) -> Result<usize, HeapError> {
        let min_ki = self.peek_min_key_index()?;
        self.delete(min_ki)?;
        Ok(min_ki)
    }

    /// Removes the minimum element and returns its value.
    ///
    /// # Errors
    ///
    /// [`HeapError::Empty`] if the heap has no elements.
    pub fn poll_min_value(&mut self) -> Result<P, HeapError> {
        let min_ki = self.peek_min_key_index()?;
        self.delete(min_ki)
    }

    /// Deletes the key index `ki` and returns the value it held.
    ///
    /// The vacated slot is filled by swapping in the last occupied slot and
    /// then sinking and swimming it; after a single swap at most one of the
    /// two can move anything, so both are attempted unconditionally.
    ///
    /// # Errors
    ///
    /// [`HeapError::KeyOutOfRange`] / [`HeapError::KeyNotFound`]. The heap
    /// is unchanged on error.
    pub fn delete(&mut self, ki: usize) -> Result<P, HeapError> {
        self.key_exists(ki)?;
        let i = self.position[ki];
        self.size -= 1;
        self.swap_slots(i, self.size);
        self.sink(i);
        self.swim(i);
        let value = self.values[ki].take().unwrap();
        self.position[ki] = ABSENT;
        self.inverse[self.size] = ABSENT;
        Ok(value)
    }

    /// Replaces the value associated with `ki` and returns the previous one.
    ///
    /// Restores heap order whether the new value is smaller or larger than
    /// the old; for the one-directional variants see [`decrease`](Self::decrease)
    /// and [`increase`](Self::increase).
    ///
    /// # Errors
    ///
    /// [`HeapError::KeyOutOfRange`] / [`HeapError::KeyNotFound`]. The heap
    /// is unchanged on error.
    pub fn update(&mut self, ki: usize, value: P) -> Result<P, HeapError> {
        self.key_exists(ki)?;
        let i = self.position[ki];
        let old_value = self.values[ki].replace(value).unwrap();
        self.sink(i);
        self.swim(i);
        Ok(old_value)
    }

    /// Strictly decreases the value associated with `ki` to `value`.
    ///
    /// Takes effect only if `value` is strictly less than the stored value;
    /// otherwise the heap is untouched. Returns whether the value was
    /// replaced. This one-directional contract is what relaxation loops
    /// (Dijkstra, Prim) rely on: unlike [`update`](Self::update), a larger
    /// value is silently ignored rather than applied.
    ///
    /// # Errors
    ///
    /// [`HeapError::KeyOutOfRange`] / [`HeapError::KeyNotFound`].
    pub fn decrease(&mut self, ki: usize, value: P) -> Result<bool, HeapError> {
        self.key_exists(ki)?;
        if value < *self.values[ki].as_ref().unwrap() {
            self.values[ki] = Some(value);
            self.swim(self.position[ki]);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Strictly increases the value associated with `ki` to `value`.
    ///
    /// Symmetric to [`decrease`](Self::decrease): takes effect only if
    /// `value` is strictly greater than the stored value. Returns whether
    /// the value was replaced.
    ///
    /// # Errors
    ///
    /// [`HeapError::KeyOutOfRange`] / [`HeapError::KeyNotFound`].
    pub fn increase(&mut self, ki: usize, value: P) -> Result<bool, HeapError> {
        self.key_exists(ki)?;
        if *self.values[ki].as_ref().unwrap() < value {
            self.values[ki] = Some(value);
            self.sink(self.position[ki]);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Recursively checks that every occupied slot is no greater than its
    /// children. Used by tests to validate the heap-order invariant.
    pub fn is_min_heap(&self) -> bool {
        self.is_min_heap_from(0)
    }

    fn is_min_heap_from(&self, i: usize) -> bool {
        let from = self.child[i];
        let to = self.size.min(from + self.degree);
        for j in from..to {
            if self.less(j, i) || !self.is_min_heap_from(j) {
                return false;
            }
        }
        true
    }

    /* Internal helpers */

    fn sink(&mut self, mut i: usize) {
        while let Some(j) = self.min_child(i) {
            self.swap_slots(i, j);
            i = j;
        }
    }

    fn swim(&mut self, mut i: usize) {
        // parent[0] == 0, so the comparison fails at the root and stops
        while self.less(i, self.parent[i]) {
            let p = self.parent[i];
            self.swap_slots(i, p);
            i = p;
        }
    }

    /// Finds the minimum child of slot `i`, or `None` when no child is
    /// smaller. Ties break toward the earliest minimal child in the
    /// left-to-right scan.
    fn min_child(&self, i: usize) -> Option<usize> {
        let from = self.child[i];
        let to = self.size.min(from + self.degree);
        let mut best = i;
        let mut found = None;
        for j in from..to {
            if self.less(j, best) {
                best = j;
                found = Some(j);
            }
        }
        found
    }

    /// Exchanges the keys held by slots `i` and `j`, rewiring both maps in
    /// one step so their inverse relationship is never observably broken.
    /// Values never move; they stay indexed by key.
    fn swap_slots(&mut self, i: usize, j: usize) {
        self.position[self.inverse[j]] = i;
        self.position[self.inverse[i]] = j;
        self.inverse.swap(i, j);
    }

    /// Tests if the value at slot `i` is strictly less than the one at slot `j`
    fn less(&self, i: usize, j: usize) -> bool {
        self.values[self.inverse[i]].as_ref().unwrap()
            < self.values[self.inverse[j]].as_ref().unwrap()
    }

    fn key_in_bounds(&self, ki: usize) -> Result<(), HeapError> {
        if ki >= self.capacity {
            return Err(HeapError::KeyOutOfRange {
                ki,
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    fn key_exists(&self, ki: usize) -> Result<(), HeapError> {
        if !self.contains(ki)? {
            return Err(HeapError::KeyNotFound(ki));
        }
        Ok(())
    }
}
