use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A vertex waiting in the frontier together with its tentative distance
#[derive(Debug, Clone)]
struct PriorityEntry<V, P> {
    priority: P,
    /// Insertion counter, breaks ties between equal priorities
    seq: u64,
    vertex: V,
}

impl<V, P: Ord> PartialEq for PriorityEntry<V, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V, P: Ord> Eq for PriorityEntry<V, P> {}

impl<V, P: Ord> PartialOrd for PriorityEntry<V, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, P: Ord> Ord for PriorityEntry<V, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Min-priority queue used as the Dijkstra frontier.
///
/// Entries with equal priority pop in insertion order. Entries are never
/// updated in place; callers push a fresh entry and skip stale ones on pop.
#[derive(Debug)]
pub struct Frontier<V, P>
where
    V: Debug,
    P: Ord + Copy + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<PriorityEntry<V, P>>>,
    next_seq: u64,
}

impl<V, P> Frontier<V, P>
where
    V: Debug,
    P: Ord + Copy + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a vertex with the given priority
    pub fn push(&mut self, vertex: V, priority: P) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(PriorityEntry { priority, seq, vertex }));
    }

    /// Removes the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.vertex, entry.priority))
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek(&self) -> Option<(&V, P)> {
        self.heap
            .peek()
            .map(|Reverse(entry)| (&entry.vertex, entry.priority))
    }
}

impl<V, P> Default for Frontier<V, P>
where
    V: Debug,
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
