/*!
Minimum spanning trees via Prim's algorithm.

Prim grows the tree from a starting vertex along minimum-weight frontier
edges, so it naturally stays inside the starting vertex's connected component:
the candidate heap runs empty once the component is spanned, which is the sole
termination condition. Callers wanting a spanning forest of a disconnected
graph run one Prim per component (see
[`Connectivity`](crate::algo::Connectivity)).

Superseded heap entries are handled by lazy deletion: a popped candidate whose
target already joined the tree is discarded. The number of such discards is
recorded on the result, mainly so tests can pin the pattern down.
*/

use std::{cmp::Ordering, collections::BinaryHeap};

use crate::{edge::*, node::*, ops::*, utils::*};

/// A candidate frontier edge `(from, to)` waiting in the priority queue.
///
/// Ordering is reversed so that `BinaryHeap` behaves as a min-heap on weight;
/// endpoints break ties, making extraction deterministic for a fixed
/// edge-enumeration order.
#[derive(Copy, Clone, PartialEq)]
struct Candidate {
    weight: Weight,
    from: Node,
    to: Node,
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .partial_cmp(&self.weight)
            .unwrap_or(Ordering::Equal)
            .then_with(|| (other.from, other.to).cmp(&(self.from, self.to)))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A minimum spanning tree of one connected component.
#[derive(Clone, Debug)]
pub struct SpanningTree {
    edges: Vec<WeightedEdge>,
    total_weight: Weight,
    discarded_stale: usize,
}

impl SpanningTree {
    /// The selected tree edges in the order Prim accepted them
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    /// Sum of the selected edge weights
    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }

    /// Number of vertices spanned, i.e. the size of the component
    pub fn number_of_vertices(&self) -> NumNodes {
        self.edges.len() as NumNodes + 1
    }

    /// Number of popped candidates that were discarded as stale
    pub fn discarded_stale(&self) -> usize {
        self.discarded_stale
    }
}

/// Provides Prim's algorithm directly as a method on graphs.
pub trait MinimumSpanningTree: WeightedAdjacencyList + Sized {
    /// Computes a minimum spanning tree of the connected component containing
    /// `start`. Other components are never entered.
    /// ** Panics if `start >= n` **
    fn minimum_spanning_tree(&self, start: Node) -> SpanningTree {
        assert!(start < self.number_of_nodes());

        let mut in_tree = NodeSet::new(self.number_of_nodes());
        in_tree.insert(start);

        let mut heap: BinaryHeap<Candidate> = self
            .neighbors_of(start)
            .map(|(v, w)| Candidate {
                weight: w,
                from: start,
                to: v,
            })
            .collect();

        let mut edges = Vec::new();
        let mut total_weight = 0.0;
        let mut discarded_stale = 0;

        while let Some(Candidate { weight, from, to }) = heap.pop() {
            if in_tree.insert(to) {
                discarded_stale += 1;
                continue;
            }

            edges.push(WeightedEdge(from, to, weight));
            total_weight += weight;

            for (v, w) in self.neighbors_of(to) {
                if !in_tree.contains(&v) {
                    heap.push(Candidate {
                        weight: w,
                        from: to,
                        to: v,
                    });
                }
            }
        }

        SpanningTree {
            edges,
            total_weight,
            discarded_stale,
        }
    }
}

impl<G> MinimumSpanningTree for G where G: WeightedAdjacencyList + Sized {}
