use itertools::Itertools;

use crate::{algo::traversal::*, node::*, ops::*};

/// Provides connected-component enumeration directly as methods on graphs.
pub trait Connectivity: WeightedAdjacencyList + Sized {
    /// Returns an iterator over the connected components of the graph, each
    /// emitted as the list of its vertices in BFS visitation order.
    ///
    /// Components appear in the order their first vertex (the BFS root) is
    /// discovered when scanning `0..n`; together they partition the vertex
    /// set. An empty graph yields no components.
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }

    /// Returns the number of connected components
    fn number_of_components(&self) -> usize {
        self.connected_components().count()
    }

    /// Returns *true* if all vertices belong to a single component.
    /// An empty graph counts as connected.
    fn is_connected(&self) -> bool {
        self.number_of_components() <= 1
    }
}

impl<G> Connectivity for G where G: WeightedAdjacencyList + Sized {}

/// Iterator over the connected components of a graph.
///
/// Internally a single [`Bfs`] whose visitation state is carried across
/// components: after one component is exhausted, the search restarts at the
/// first vertex the state has not seen yet.
pub struct ConnectedComponents<'a, G>
where
    G: WeightedAdjacencyList,
{
    bfs: Option<Bfs<'a, G>>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: WeightedAdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            bfs: (!graph.is_empty()).then(|| graph.bfs(0)),
        }
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: WeightedAdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let bfs = self.bfs.as_mut()?;

        loop {
            let cc = bfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !bfs.try_restart_at_unvisited() {
                return None;
            }
        }
    }
}

/// Sorts the nodes in each component increasingly and then the components
/// themselves lexicographically. Useful for deterministic reporting and tests.
pub fn sort_components(mut components: Vec<Vec<Node>>) -> Vec<Vec<Node>> {
    components.iter_mut().for_each(|comp| comp.sort_unstable());
    components.sort_by(|a, b| a[0].cmp(&b[0]));
    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::AdjArrayWeighted;

    #[test]
    fn components_partition_the_vertex_set() {
        let graph = AdjArrayWeighted::from_edges(
            7,
            [(1, 2, 1.0), (2, 3, 2.0), (4, 5, 0.5)],
        );

        let ccs = graph.connected_components().collect_vec();
        assert_eq!(ccs.len(), 4);

        // disjoint and exhaustive
        let mut all = ccs.iter().flatten().copied().collect_vec();
        all.sort_unstable();
        assert_eq!(all, (0..7).collect_vec());

        let sorted = sort_components(ccs);
        assert_eq!(sorted[0], vec![0]);
        assert_eq!(sorted[1], vec![1, 2, 3]);
        assert_eq!(sorted[2], vec![4, 5]);
        assert_eq!(sorted[3], vec![6]);
    }

    #[test]
    fn components_in_discovery_order() {
        let graph = AdjArrayWeighted::from_edges(5, [(3, 1, 1.0), (2, 4, 1.0)]);

        let ccs = graph.connected_components().collect_vec();
        // roots are discovered scanning 0..n: 0, then 1, then 2
        assert_eq!(ccs[0], vec![0]);
        assert_eq!(ccs[1][0], 1);
        assert_eq!(ccs[2][0], 2);
    }

    #[test]
    fn each_component_is_internally_connected() {
        let graph = AdjArrayWeighted::from_edges(
            8,
            [
                (0, 1, 1.0),
                (1, 2, 1.0),
                (2, 0, 1.0),
                (3, 4, 1.0),
                (5, 6, 1.0),
                (6, 7, 1.0),
            ],
        );

        for cc in graph.connected_components() {
            for (&u, &v) in cc.iter().tuple_combinations() {
                assert!(graph.bfs(u).is_node_reachable(v));
                assert!(graph.bfs(v).is_node_reachable(u));
            }
        }
    }

    #[test]
    fn empty_graph_has_no_components() {
        let graph = AdjArrayWeighted::new(0);
        assert_eq!(graph.connected_components().count(), 0);
        assert!(graph.is_connected());
    }

    #[test]
    fn connectivity_checks() {
        let connected = AdjArrayWeighted::from_edges(3, [(0, 1, 1.0), (1, 2, 1.0)]);
        assert!(connected.is_connected());
        assert_eq!(connected.number_of_components(), 1);

        let split = AdjArrayWeighted::from_edges(4, [(0, 1, 1.0), (2, 3, 1.0)]);
        assert!(!split.is_connected());
        assert_eq!(split.number_of_components(), 2);
    }
}
