use crate::{edge::*, node::*, ops::*};

/// A weighted undirected graph stored as one `(neighbor, weight)` list per
/// node. Every edge `{u, v}` is recorded in both endpoint lists, so incident
/// edges of a vertex are enumerated in amortized constant time per edge.
///
/// The representation is intended to be built once and queried afterwards;
/// there is deliberately no edge removal.
#[derive(Clone, Default)]
pub struct AdjArrayWeighted {
    nbs: Vec<Vec<(Node, Weight)>>,
    num_edges: NumEdges,
}

impl GraphNodeOrder for AdjArrayWeighted {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for AdjArrayWeighted {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl WeightedAdjacencyList for AdjArrayWeighted {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl AdjacencyTest for AdjArrayWeighted {
    fn weight_of(&self, u: Node, v: Node) -> Option<Weight> {
        assert!((v as usize) < self.nbs.len());
        self.nbs[u as usize]
            .iter()
            .find_map(|&(x, w)| (x == v).then_some(w))
    }
}

impl GraphNew for AdjArrayWeighted {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Vec::new(); n as usize],
            num_edges: 0,
        }
    }
}

impl GraphEdgeEditing for AdjArrayWeighted {
    fn try_add_edge(&mut self, u: Node, v: Node, w: Weight) -> bool {
        assert!(u != v, "self-loops are not supported");
        assert!((v as usize) < self.nbs.len());

        if let Some(slot) = self.nbs[u as usize].iter_mut().find(|(x, _)| *x == v) {
            if w < slot.1 {
                slot.1 = w;
                let rev = self.nbs[v as usize]
                    .iter_mut()
                    .find(|(x, _)| *x == u)
                    .unwrap();
                rev.1 = w;
            }
            return true;
        }

        self.nbs[u as usize].push((v, w));
        self.nbs[v as usize].push((u, w));
        self.num_edges += 1;

        false
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn build_and_query() {
        let graph = AdjArrayWeighted::from_edges(4, [(0, 1, 1.0), (1, 2, 2.0), (0, 2, 10.0)]);

        assert_eq!(graph.number_of_nodes(), 4);
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.degree_of(0), 2);
        assert_eq!(graph.degree_of(3), 0);

        assert_eq!(graph.weight_of(0, 1), Some(1.0));
        assert_eq!(graph.weight_of(1, 0), Some(1.0));
        assert_eq!(graph.weight_of(0, 3), None);
        assert!(graph.has_edge(1, 2));
        assert!(!graph.has_edge(2, 3));

        let mut nbs = graph.neighbors_of(0).collect_vec();
        nbs.sort_by_key(|&(v, _)| v);
        assert_eq!(nbs, vec![(1, 1.0), (2, 10.0)]);
    }

    #[test]
    fn parallel_edges_collapse_to_minimum() {
        let mut graph = AdjArrayWeighted::new(3);
        assert!(!graph.try_add_edge(0, 1, 5.0));
        assert!(graph.try_add_edge(1, 0, 3.0));
        assert!(graph.try_add_edge(0, 1, 7.0));

        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.weight_of(0, 1), Some(3.0));
        assert_eq!(graph.weight_of(1, 0), Some(3.0));
    }

    #[test]
    #[should_panic]
    fn self_loops_are_rejected() {
        let mut graph = AdjArrayWeighted::new(2);
        graph.try_add_edge(1, 1, 1.0);
    }

    #[test]
    fn empty_graph() {
        let graph = AdjArrayWeighted::new(0);
        assert!(graph.is_empty());
        assert!(graph.is_singleton_graph());
        assert_eq!(graph.vertices().count(), 0);
        assert_eq!(graph.edges(true).count(), 0);
    }

    #[test]
    fn edge_enumeration() {
        let graph = AdjArrayWeighted::from_edges(4, [(2, 1, 2.0), (0, 1, 1.0), (3, 0, 4.0)]);

        let edges = graph.ordered_edges();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[0].edge(), Edge(0, 1));
        assert_eq!(edges[1].edge(), Edge(0, 3));
        assert_eq!(edges[2].edge(), Edge(1, 2));

        // each edge shows up twice when not normalizing
        assert_eq!(graph.edges(false).count(), 6);
    }
}
