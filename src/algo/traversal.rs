/*!
Breadth-first traversal over weighted graphs.

Edge weights play no role during traversal; BFS only follows adjacency. The
iterator owns its visitation state explicitly, which makes two usage patterns
possible:

- one-shot traversal of everything reachable from a root ([`Bfs::new`]),
- enumerating a disconnected graph component by component, either by
  restarting in place ([`Bfs::try_restart_at_unvisited`]) or by extracting the
  state with [`Bfs::into_visited`] and resuming later with [`Bfs::resume`].

The state is always an explicit value handed back to the caller, never shared
mutable data behind the scenes.
*/

use std::collections::VecDeque;

use crate::{node::*, ops::*, utils::*};

/// A breadth-first traversal iterator yielding the vertices reachable from a
/// starting node in visitation order (the start itself first).
///
/// Parameterized by the [`Set`] used as visitation state; the dense
/// [`NodeSet`] is the default.
pub struct Bfs<'a, G, V = NodeSet>
where
    G: WeightedAdjacencyList,
    V: Set<Node>,
{
    graph: &'a G,
    visited: V,
    queue: VecDeque<Node>,
}

impl<'a, G, V> Bfs<'a, G, V>
where
    G: WeightedAdjacencyList,
    V: Set<Node> + FromCapacity,
{
    /// Creates a new traversal starting from `start` with fresh state.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let visited = V::with_node_capacity(graph.number_of_nodes());
        Self::resume(graph, start, visited)
    }
}

impl<'a, G, V> Bfs<'a, G, V>
where
    G: WeightedAdjacencyList,
    V: Set<Node>,
{
    /// Resumes a traversal from `start` reusing the visitation state of an
    /// earlier traversal. Vertices already in `visited` are skipped, which is
    /// exactly what component enumeration needs; this includes `start`
    /// itself, so resuming at an already-visited vertex yields nothing.
    /// ** Panics if `start >= n` **
    pub fn resume(graph: &'a G, start: Node, mut visited: V) -> Self {
        assert!(start < graph.number_of_nodes());
        let queue = if visited.insert(start) {
            VecDeque::new()
        } else {
            VecDeque::from(vec![start])
        };
        Self {
            graph,
            visited,
            queue,
        }
    }

    /// Returns the visitation state accumulated so far.
    pub fn visited(&self) -> &V {
        &self.visited
    }

    /// Consumes the traversal and hands the visitation state back to the
    /// caller for threading into a later [`Bfs::resume`].
    pub fn into_visited(self) -> V {
        self.visited
    }

    /// Tries to restart the search at a yet unvisited node and returns
    /// true iff successful. Requires that the search came to a hold earlier,
    /// i.e. `self.next()` returned `None`.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert!(self.queue.is_empty());
        match self.graph.vertices().find(|u| !self.visited.contains(u)) {
            None => false,
            Some(u) => {
                self.visited.insert(u);
                self.queue.push_back(u);
                true
            }
        }
    }

    /// Consumes the traversal and returns true iff `u` is reachable from the
    /// start node.
    pub fn is_node_reachable(mut self, u: Node) -> bool {
        self.any(|v| v == u)
    }
}

impl<G, V> Iterator for Bfs<'_, G, V>
where
    G: WeightedAdjacencyList,
    V: Set<Node>,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for (v, _weight) in self.graph.neighbors_of(u) {
            if !self.visited.insert(v) {
                self.queue.push_back(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.queue.len(),
            Some(self.graph.len() - self.visited.len() + self.queue.len()),
        )
    }
}

/// Provides breadth-first traversal directly as methods on graphs.
pub trait Traversal: WeightedAdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in breadth-first order.
    fn bfs(&self, start: Node) -> Bfs<'_, Self> {
        Bfs::new(self, start)
    }
}

impl<G> Traversal for G where G: WeightedAdjacencyList + Sized {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::repr::AdjArrayWeighted;

    fn diamond() -> AdjArrayWeighted {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        AdjArrayWeighted::from_edges(
            6,
            [
                (1, 2, 1.0),
                (1, 0, 1.0),
                (4, 3, 1.0),
                (0, 5, 1.0),
                (2, 4, 1.0),
                (5, 4, 1.0),
            ],
        )
    }

    #[test]
    fn bfs_order() {
        let graph = diamond();

        let order = graph.bfs(1).collect_vec();
        assert_eq!(order.len(), 6);

        assert_eq!(order[0], 1);
        assert!((order[1] == 0 && order[2] == 2) || (order[2] == 0 && order[1] == 2));
        assert!((order[3] == 4 && order[4] == 5) || (order[4] == 4 && order[3] == 5));
        assert_eq!(order[5], 3);
    }

    #[test]
    fn bfs_visits_reachable_only() {
        let graph = AdjArrayWeighted::from_edges(5, [(0, 1, 1.0), (1, 2, 1.0), (3, 4, 2.0)]);

        let order = graph.bfs(0).collect_vec();
        assert_eq!(order, vec![0, 1, 2]);

        assert!(graph.bfs(0).is_node_reachable(2));
        assert!(!graph.bfs(0).is_node_reachable(3));
    }

    #[test]
    fn resume_skips_visited() {
        let graph = AdjArrayWeighted::from_edges(5, [(0, 1, 1.0), (1, 2, 1.0), (3, 4, 2.0)]);

        let mut bfs = graph.bfs(0);
        let first = bfs.by_ref().collect_vec();
        assert_eq!(first, vec![0, 1, 2]);

        let visited = bfs.into_visited();
        assert_eq!(visited.len(), 3);

        let mut resumed = Bfs::resume(&graph, 3, visited);
        let second = resumed.by_ref().collect_vec();
        assert_eq!(second, vec![3, 4]);
        assert_eq!(resumed.visited().len(), 5);
    }

    #[test]
    fn resume_at_visited_start_yields_nothing() {
        let graph = AdjArrayWeighted::from_edges(4, [(0, 1, 1.0), (1, 2, 1.0)]);

        let mut bfs = graph.bfs(0);
        assert_eq!(bfs.by_ref().count(), 3);
        let visited = bfs.into_visited();

        // vertex 1 was already visited, so nothing is re-yielded and the
        // state stays intact
        let mut resumed = Bfs::resume(&graph, 1, visited);
        assert!(resumed.next().is_none());
        assert_eq!(resumed.visited().len(), 3);

        let onward = Bfs::resume(&graph, 3, resumed.into_visited()).collect_vec();
        assert_eq!(onward, vec![3]);
    }

    #[test]
    fn restart_at_unvisited() {
        let graph = AdjArrayWeighted::from_edges(4, [(0, 1, 1.0)]);

        let mut bfs = graph.bfs(0);
        assert_eq!(bfs.by_ref().count(), 2);

        assert!(bfs.try_restart_at_unvisited());
        assert_eq!(bfs.next(), Some(2));
        assert!(bfs.next().is_none());

        assert!(bfs.try_restart_at_unvisited());
        assert_eq!(bfs.next(), Some(3));

        assert!(!bfs.try_restart_at_unvisited());
    }

    #[test]
    fn singleton_start() {
        let graph = AdjArrayWeighted::new(3);
        assert_eq!(graph.bfs(1).collect_vec(), vec![1]);
    }
}
