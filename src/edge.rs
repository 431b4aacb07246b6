use std::fmt::{Debug, Display};

use crate::node::Node;

/// Edge weights are real-valued distances (e.g. kilometers between airports).
/// Algorithms require them to be non-negative and finite; the
/// [`network`](crate::network) builder enforces this at ingestion.
pub type Weight = f64;

/// Distance of an unreachable vertex
pub const INFINITE_WEIGHT: Weight = Weight::INFINITY;

/// An edge is defined by its two endpoints. All graphs in this crate are
/// undirected, so `Edge(u, v)` and `Edge(v, u)` denote the same edge; most
/// code normalizes before comparing.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

/// An edge together with its weight
#[derive(Copy, Clone, PartialEq)]
pub struct WeightedEdge(pub Node, pub Node, pub Weight);

impl Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{};{})", self.0, self.1, self.2)
    }
}

impl Debug for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl WeightedEdge {
    /// The endpoints without the weight
    pub fn edge(&self) -> Edge {
        Edge(self.0, self.1)
    }

    /// The weight of the edge
    pub fn weight(&self) -> Weight {
        self.2
    }

    /// Normalizes the endpoints such that the smaller value comes first.
    /// The weight is unaffected.
    pub fn normalized(&self) -> Self {
        WeightedEdge(self.0.min(self.1), self.0.max(self.1), self.2)
    }
}

impl From<(Node, Node, Weight)> for WeightedEdge {
    fn from(value: (Node, Node, Weight)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}
