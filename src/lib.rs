/*!
`airgraphs` is a weighted, undirected graph algorithms toolkit built for
air-route networks: airports are vertices, direct routes are edges weighted by
a non-negative distance. The crate covers the algorithmic core of such a
system and nothing else; CSV ingestion, haversine computation, map rendering
and interactive shells are left to the surrounding application.

# Representation

Internally, **nodes** are `u32` indices in `0..n` where `n` is the number of
vertices, which keeps all per-node tables dense and cheap. **Edges** carry an
`f64` weight and are stored in a weighted adjacency array. On top of this
dense core, the [`network`] layer maps string airport codes to node indices
and carries per-airport attributes (name, city, country, coordinates).

The graph is built once and is read-only afterwards; every algorithm takes
`&self` and never mutates the graph.

# Algorithms

- Breadth-first traversal with explicit, resumable visitation state
  ([`algo::traversal`])
- Connected-component enumeration ([`algo::connectivity`])
- Minimum spanning trees per component via Prim's algorithm ([`algo::mst`])
- Single-source shortest paths via Dijkstra, plus path reconstruction from
  predecessors ([`algo::shortest_paths`])

All algorithms are provided as extension traits implemented for every type
that satisfies the operation contracts in [`ops`], so they work unchanged for
any storage backend.

# Usage

There are three submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations,
  and the standard graph representation,
- [`algo`] includes the algorithm traits implemented on graphs themselves,
  such as BFS (`graph.bfs(start)`), connected components, MST and shortest
  paths,
- [`network`] includes the code-keyed [`RouteNetwork`](network::RouteNetwork)
  with its builder and error handling.

In most use-cases, `use airgraphs::{prelude::*, algo::*};` suffices for the
dense layer, with `airgraphs::network` on top when vertices are addressed by
code.

# When to use

This library fits when graphs are undirected, weights are non-negative, the
graph is static after construction, and sizes stay within a few tens of
thousands of nodes. For mutable, directed or very large graphs, reach for a
general-purpose graph library instead.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod network;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

/// `airgraphs::prelude` includes definitions for nodes, edges and weights,
/// all basic graph operation traits as well as the standard representation.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
