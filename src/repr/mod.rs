/*!
# Graph Representations

One concrete type per variant, all sharing the same label-addressed storage:

- [`DirectedGraph`]: edges are one-way.
- [`UndirectedGraph`]: every insertion stores the edge on both endpoints.
- [`WeightedGraph`]: weighted edges, directed or undirected per insertion.

All variants are append-only: nodes and edges live for the graph's lifetime.
Capabilities beyond plain adjacency (cycle detection, transposition) are
implemented per variant via the traits in [`crate::ops`].
*/

mod directed;
mod storage;
mod undirected;
mod weighted;

pub use directed::*;
pub use undirected::*;
pub use weighted::*;
