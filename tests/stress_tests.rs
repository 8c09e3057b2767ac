//! Stress tests that push the indexed heap through large workloads
//!
//! These perform large numbers of operations in various patterns to catch
//! edge cases the scenario tests miss: deep sink/swim chains, heavy churn
//! on a small key range, and full-capacity occupancy.

use indexed_dary_heap::IndexedDaryHeap;

/// Test massive numbers of inserts and polls
#[test]
fn test_massive_insert_poll() {
    let n = 10_000;
    for degree in [2, 4, 16] {
        let mut heap = IndexedDaryHeap::new(degree, n);

        // Insert in descending value order to maximize swim work
        for ki in 0..n {
            heap.insert(ki, (n - ki) as u64).unwrap();
        }
        assert_eq!(heap.len(), n);

        // Poll everything back in ascending order
        for expected in 1..=n as u64 {
            assert_eq!(heap.poll_min_value(), Ok(expected));
        }
        assert!(heap.is_empty());
    }
}

/// Test many decrease operations followed by a full drain
#[test]
fn test_many_decreases() {
    let n = 5_000;
    let mut heap = IndexedDaryHeap::new(4, n);

    for ki in 0..n {
        heap.insert(ki, 1_000_000 + ki as u64).unwrap();
    }

    // Drop every key to a small value, reversing the order
    for ki in 0..n {
        assert_eq!(heap.decrease(ki, (n - ki) as u64), Ok(true));
    }
    assert!(heap.is_min_heap());

    for ki in (0..n).rev() {
        assert_eq!(heap.poll_min_key_index(), Ok(ki));
    }
}

/// Test alternating insert and poll on a small key range
#[test]
fn test_alternating_ops() {
    let mut heap = IndexedDaryHeap::binary(8);

    for round in 0..2_000u64 {
        let ki = (round % 8) as usize;
        if heap.contains(ki).unwrap() {
            heap.delete(ki).unwrap();
        }
        heap.insert(ki, round).unwrap();

        if round % 3 == 0 {
            heap.poll_min_key_index().unwrap();
        }
        assert!(heap.is_min_heap());
    }

    while !heap.is_empty() {
        heap.poll_min_value().unwrap();
    }
}

/// Test churning updates at full capacity
#[test]
fn test_full_capacity_update_churn() {
    let n = 1_000;
    let mut heap = IndexedDaryHeap::new(3, n);

    for ki in 0..n {
        heap.insert(ki, ki as i64).unwrap();
    }

    // Every key stays present the whole time; only priorities move
    for round in 0..10 {
        for ki in 0..n {
            heap.update(ki, ((ki as i64) * 31 + round * 17) % 1009).unwrap();
        }
        assert!(heap.is_min_heap());
        assert_eq!(heap.len(), n);
    }

    let mut previous = i64::MIN;
    while let Ok(value) = heap.poll_min_value() {
        assert!(value >= previous);
        previous = value;
    }
}

/// Test delete of every key in insertion order, worst case for the
/// swap-with-last repair
#[test]
fn test_sequential_deletes() {
    let n = 2_000;
    let mut heap = IndexedDaryHeap::new(2, n);

    for ki in 0..n {
        heap.insert(ki, ((ki as u64) * 2_654_435_761) % 1_000_003).unwrap();
    }

    for ki in 0..n {
        heap.delete(ki).unwrap();
        if ki % 100 == 0 {
            assert!(heap.is_min_heap());
        }
    }
    assert!(heap.is_empty());
}
