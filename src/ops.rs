/*!
# Graph Operations

Trait contracts separating the algorithms from any concrete storage layout.
Every algorithm in [`algo`](crate::algo) is written against these traits only,
so adding another representation does not touch algorithmic code.
*/

use std::ops::Range;

use itertools::Itertools;

use crate::{edge::*, node::*};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    ///
    /// The range does not borrow self and hence may be used where additional
    /// mutable references of self are needed.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Getters for weighted neighborhoods & edges
pub trait WeightedAdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex
    /// together with the weight of the connecting edge.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_;

    /// Returns the number of neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over all vertices with non-zero degree
    fn vertices_with_neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(|&u| self.degree_of(u) > 0)
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.vertices().map(|u| self.degree_of(u)).max().unwrap_or(0)
    }

    /// Returns an iterator over weighted edges incident to a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(
        &self,
        u: Node,
        only_normalized: bool,
    ) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.neighbors_of(u)
            .map(move |(v, w)| WeightedEdge(u, v, w))
            .filter(move |e| !only_normalized || e.edge().is_normalized())
    }

    /// Returns an iterator over all weighted edges in the graph.
    /// If `only_normalized`, each undirected edge appears exactly once.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns all weighted edges `(u, v)` with `u <= v` in sorted endpoint order.
    fn ordered_edges(&self) -> Vec<WeightedEdge> {
        let mut edges = self.edges(true).collect_vec();
        edges.sort_by_key(|e| e.edge());
        edges
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns the weight of the edge `{u, v}` or `None` if it does not exist.
    /// ** Panics if `u >= n || v >= n` **
    fn weight_of(&self, u: Node, v: Node) -> Option<Weight>;

    /// Returns *true* if the edge `{u, v}` exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.weight_of(u, v).is_some()
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert edges while keeping the graph simple
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the edge `{u, v}` with weight `w` to the graph.
    /// ** Panics if `u >= n || v >= n`, on self-loops, or if the edge was already present **
    fn add_edge(&mut self, u: Node, v: Node, w: Weight) {
        assert!(!self.try_add_edge(u, v, w));
    }

    /// Adds the edge `{u, v}` with weight `w` to the graph. If the edge is
    /// already present, its weight is lowered to `w` when `w` is smaller and
    /// *true* is returned; parallel edges thus collapse to the minimum weight.
    /// ** Panics if `u >= n || v >= n` or on self-loops **
    fn try_add_edge(&mut self, u: Node, v: Node, w: Weight) -> bool;

    /// Adds all edges in the collection
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) {
        for WeightedEdge(u, v, w) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v, w);
        }
    }
}

/// A super trait for creating a graph from scratch from a set of weighted
/// edges and a number of nodes
pub trait GraphFromScratch {
    /// Create a graph from a number of nodes and an iterator over weighted edges
    fn from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge>>,
    ) -> Self;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge>>,
    ) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }
}
