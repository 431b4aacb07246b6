/*!
# Graph Representations

Storage backends for weighted undirected graphs. Currently a single backend
exists, the weighted adjacency array [`AdjArrayWeighted`]. Algorithms only
ever see the traits from [`ops`](crate::ops), so further backends (CSR for
static graphs, adjacency matrix for dense ones) can be added without touching
them.
*/

mod adj_array;

pub use adj_array::*;
