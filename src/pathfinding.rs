//! Dijkstra's shortest path algorithm using the indexed heap
//!
//! This module is the canonical consumer of [`IndexedDaryHeap`]: graph nodes
//! are the heap's key indexes, tentative distances are the priorities, and
//! edge relaxation is a [`decrease`](IndexedDaryHeap::decrease) call, where
//! strictly improving updates take effect and everything else is a no-op.
//!
//! Graphs are adjacency lists over dense node indexes `[0, n)`. For graphs
//! whose nodes are strings or other non-integer keys, [`Indexer`] provides
//! the key → dense-index translation table the heap expects.
//!
//! The heap degree is chosen as `max(2, edges / nodes)`, which balances the
//! cost of sinks during polls against the cost of swims during relaxations
//! on dense graphs.
//!
//! # Example
//!
//! ```rust
//! use indexed_dary_heap::pathfinding::dijkstra;
//!
//! // 0 --1--> 1 --1--> 2, plus a direct 0 --5--> 2 edge
//! let adjacency = vec![
//!     vec![(1, 1u32), (2, 5)],
//!     vec![(2, 1)],
//!     vec![],
//! ];
//!
//! let dist = dijkstra(&adjacency, 0);
//! assert_eq!(dist, vec![Some(0), Some(1), Some(2)]);
//! ```

use crate::indexed_dary::IndexedDaryHeap;
use rustc_hash::FxHashMap;
use std::hash::Hash;
use std::ops::Add;

/// Trait for types usable as edge weights and path costs.
///
/// Requires a total order, copying, addition, and a zero value (`Default`)
/// for the source distance. Weights must be non-negative under that order
/// for Dijkstra's settled-node argument to hold.
pub trait Cost: Ord + Copy + Add<Output = Self> + Default {}

impl<T> Cost for T where T: Ord + Copy + Add<Output = Self> + Default {}

/// Computes shortest distances from `source` to every node.
///
/// `adjacency[v]` lists the outgoing edges of node `v` as `(target, weight)`
/// pairs. Returns one entry per node: `Some(distance)` if reachable from
/// `source`, `None` otherwise.
///
/// # Panics
///
/// Panics if `source` or any edge target is out of range for `adjacency`.
pub fn dijkstra<C: Cost>(adjacency: &[Vec<(usize, C)>], source: usize) -> Vec<Option<C>> {
    search(adjacency, source, None).0
}

/// Computes a shortest path from `source` to `target`.
///
/// Returns the node sequence (source and target inclusive) and its total
/// cost, or `None` if `target` is unreachable. The search stops as soon as
/// `target` is settled rather than exhausting the graph.
///
/// # Panics
///
/// Panics if `source`, `target`, or any edge target is out of range for
/// `adjacency`.
pub fn shortest_path<C: Cost>(
    adjacency: &[Vec<(usize, C)>],
    source: usize,
    target: usize,
) -> Option<(Vec<usize>, C)> {
    assert!(target < adjacency.len(), "target node out of range");
    let (dist, prev) = search(adjacency, source, Some(target));
    let cost = dist[target]?;

    let mut path = Vec::new();
    let mut current = target;
    loop {
        path.push(current);
        match prev[current] {
            Some(p) => current = p,
            None => break,
        }
    }
    path.reverse();
    Some((path, cost))
}

/// Shared relaxation loop. Tracks predecessors for path reconstruction and
/// optionally stops early once `target` is settled.
fn search<C: Cost>(
    adjacency: &[Vec<(usize, C)>],
    source: usize,
    target: Option<usize>,
) -> (Vec<Option<C>>, Vec<Option<usize>>) {
    let n = adjacency.len();
    assert!(source < n, "source node out of range");

    let edges: usize = adjacency.iter().map(Vec::len).sum();
    let degree = (edges / n).max(2);

    let mut heap: IndexedDaryHeap<C> = IndexedDaryHeap::new(degree, n);
    let mut dist: Vec<Option<C>> = vec![None; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];

    dist[source] = Some(C::default());
    heap.insert(source, C::default()).unwrap();

    while let Ok(node) = heap.poll_min_key_index() {
        if target == Some(node) {
            break;
        }
        let node_dist = dist[node].unwrap();
        for &(to, weight) in &adjacency[node] {
            let candidate = node_dist + weight;
            match dist[to] {
                None => {
                    dist[to] = Some(candidate);
                    prev[to] = Some(node);
                    heap.insert(to, candidate).unwrap();
                }
                Some(best) if candidate < best => {
                    // still in the heap: settled nodes are final under
                    // non-negative weights
                    dist[to] = Some(candidate);
                    prev[to] = Some(node);
                    heap.decrease(to, candidate).unwrap();
                }
                _ => {}
            }
        }
    }

    (dist, prev)
}

/// Dense-key translation table for non-integer node keys.
///
/// Interns arbitrary hashable keys into the contiguous range `[0, len)`, in
/// first-seen order, so they can be used as key indexes with
/// [`IndexedDaryHeap`] or as node indexes with [`dijkstra`].
///
/// # Example
///
/// ```rust
/// use indexed_dary_heap::pathfinding::Indexer;
///
/// let mut indexer = Indexer::new();
/// assert_eq!(indexer.index_of("london"), 0);
/// assert_eq!(indexer.index_of("paris"), 1);
/// assert_eq!(indexer.index_of("london"), 0);
/// assert_eq!(indexer.key_of(1), Some(&"paris"));
/// ```
#[derive(Debug)]
pub struct Indexer<K> {
    /// Key → dense index lookup
    indexes: FxHashMap<K, usize>,
    /// Dense index → key lookup, in interning order
    keys: Vec<K>,
}

impl<K: Hash + Eq + Clone> Indexer<K> {
    /// Creates an empty indexer
    pub fn new() -> Self {
        Self {
            indexes: FxHashMap::default(),
            keys: Vec::new(),
        }
    }

    /// Returns the number of interned keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if no keys have been interned
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the dense index for `key`, interning it if unseen
    pub fn index_of(&mut self, key: K) -> usize {
        if let Some(&index) = self.indexes.get(&key) {
            return index;
        }
        let index = self.keys.len();
        self.indexes.insert(key.clone(), index);
        self.keys.push(key);
        index
    }

    /// Returns the dense index for `key` without interning
    pub fn get(&self, key: &K) -> Option<usize> {
        self.indexes.get(key).copied()
    }

    /// Returns the key interned at `index`
    pub fn key_of(&self, index: usize) -> Option<&K> {
        self.keys.get(index)
    }
}

impl<K: Hash + Eq + Clone> Default for Indexer<K> {
    fn default() -> Self {
        Self::new()
    }
}
