/*!
Single-source shortest paths via Dijkstra's algorithm.

The solver runs in priority-queue form: popped entries whose distance exceeds
the recorded best for their vertex are stale leftovers of earlier relaxations
and are discarded (lazy deletion, same pattern as in
[`mst`](crate::algo::mst)). The algorithm terminates when the queue empties;
vertices in other components are never reached and keep an infinite distance.

The result is a [`ShortestPathTree`] holding the distance and predecessor
tables over *all* vertices, from which concrete paths are reconstructed.
*/

use std::{cmp::Ordering, collections::BinaryHeap};

use crate::{edge::*, node::*, ops::*};

/// A `(distance, vertex)` entry in the Dijkstra queue.
///
/// Ordering is reversed so that `BinaryHeap` pops the smallest tentative
/// distance first; the vertex breaks ties deterministically.
#[derive(Copy, Clone, PartialEq)]
struct QueueEntry {
    dist: Weight,
    node: Node,
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .partial_cmp(&self.dist)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Distances and predecessors of all vertices relative to a fixed source.
///
/// Unreachable vertices carry [`INFINITE_WEIGHT`] and no predecessor; the
/// source carries distance `0` and no predecessor.
#[derive(Clone, Debug)]
pub struct ShortestPathTree {
    source: Node,
    dist: Vec<Weight>,
    pred: Vec<Option<OptionalNode>>,
    discarded_stale: usize,
}

impl ShortestPathTree {
    /// The source vertex all distances refer to
    pub fn source(&self) -> Node {
        self.source
    }

    /// Returns the shortest-path distance from the source to `u`,
    /// [`INFINITE_WEIGHT`] if `u` is unreachable.
    /// ** Panics if `u >= n` **
    pub fn distance(&self, u: Node) -> Weight {
        self.dist[u as usize]
    }

    /// Returns the predecessor of `u` on a shortest path from the source.
    /// The source itself and unreachable vertices have none.
    /// ** Panics if `u >= n` **
    pub fn predecessor(&self, u: Node) -> Option<Node> {
        self.pred[u as usize].map(|p| p.get())
    }

    /// Returns *true* if `u` can be reached from the source
    /// ** Panics if `u >= n` **
    pub fn is_reachable(&self, u: Node) -> bool {
        self.dist[u as usize].is_finite()
    }

    /// The full distance table, indexed by node
    pub fn distances(&self) -> &[Weight] {
        &self.dist
    }

    /// Number of popped queue entries that were discarded as stale
    pub fn discarded_stale(&self) -> usize {
        self.discarded_stale
    }

    /// Reconstructs the shortest path from the source to `destination` by
    /// walking the predecessor links backwards.
    ///
    /// Returns the ordered vertex list starting at the source and ending at
    /// `destination`, or an empty list if `destination` is unreachable. The
    /// walk is only trusted if it actually terminates at the source.
    /// ** Panics if `destination >= n` **
    pub fn path_to(&self, destination: Node) -> Vec<Node> {
        let mut path = Vec::new();

        let mut current = Some(destination);
        while let Some(u) = current {
            path.push(u);
            current = self.predecessor(u);
        }
        path.reverse();

        if path.first() == Some(&self.source) {
            path
        } else {
            Vec::new()
        }
    }
}

/// Provides Dijkstra's algorithm directly as a method on graphs.
pub trait ShortestPaths: WeightedAdjacencyList + Sized {
    /// Computes shortest-path distances and predecessors from `source` to
    /// every vertex of the graph. Requires non-negative edge weights, which
    /// the graph builders enforce.
    /// ** Panics if `source >= n` **
    fn shortest_paths(&self, source: Node) -> ShortestPathTree {
        assert!(source < self.number_of_nodes());

        let n = self.len();
        let mut dist = vec![INFINITE_WEIGHT; n];
        let mut pred: Vec<Option<OptionalNode>> = vec![None; n];
        let mut discarded_stale = 0;

        dist[source as usize] = 0.0;

        let mut heap = BinaryHeap::new();
        heap.push(QueueEntry {
            dist: 0.0,
            node: source,
        });

        while let Some(QueueEntry { dist: d, node: u }) = heap.pop() {
            if d > dist[u as usize] {
                discarded_stale += 1;
                continue;
            }

            for (v, w) in self.neighbors_of(u) {
                let candidate = d + w;
                if candidate < dist[v as usize] {
                    dist[v as usize] = candidate;
                    pred[v as usize] = OptionalNode::new(u);
                    heap.push(QueueEntry {
                        dist: candidate,
                        node: v,
                    });
                }
            }
        }

        ShortestPathTree {
            source,
            dist,
            pred,
            discarded_stale,
        }
    }
}

impl<G> ShortestPaths for G where G: WeightedAdjacencyList + Sized {}
