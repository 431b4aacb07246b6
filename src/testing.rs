use rand::Rng;

use crate::{node::*, ops::*, repr::*};

/// Gnp-style random weighted graph for tests: every pair `{u, v}` becomes an
/// edge with probability `p`, weights drawn uniformly from `[1, 100)`.
pub fn random_weighted_graph<R: Rng>(rng: &mut R, n: NumNodes, p: f64) -> AdjArrayWeighted {
    let mut graph = AdjArrayWeighted::new(n);

    for u in 0..n {
        for v in (u + 1)..n {
            if rng.random_bool(p) {
                graph.add_edge(u, v, rng.random_range(1.0..100.0));
            }
        }
    }

    graph
}
