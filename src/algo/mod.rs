/*!
# Graph Algorithms

The algorithmic core of the crate, built on top of the trait contracts in
[`ops`](crate::ops):

- [`traversal`]: breadth-first search with explicit, reusable visitation state
- [`connectivity`]: connected-component enumeration
- [`mst`]: minimum spanning trees via Prim's algorithm
- [`shortest_paths`]: Dijkstra shortest paths and path reconstruction

All algorithms are re-exported at the top level of this module and, where it
makes sense, exposed as iterators so results can be consumed lazily:
```rust
use airgraphs::{prelude::*, algo::*};
```
*/

pub mod connectivity;
pub mod mst;
pub mod shortest_paths;
pub mod traversal;

pub use connectivity::*;
pub use mst::*;
pub use shortest_paths::*;
pub use traversal::*;
