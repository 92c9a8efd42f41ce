/*!
`lgraphs` is a graph data structure & algorithms library designed for graphs that are
- **l**abelled : Nodes are addressed by unique string labels
- **l**ightweight : Everything lives in memory, in flat `Vec`-indexed storage
- **l**ocal : All operations are synchronous and single-process

# Representation

Externally, a node *is* its label: you build graphs with `add_node("api")` and
`add_edge("api", "db")`, and every algorithm reports its result in terms of
labels. Internally, each label is mapped to a dense id (`Node = u32`) in
insertion order, so algorithms operate on plain `Vec`-indexed state instead of
hashing labels in their inner loops.

### Variants

Three concrete graph types share one capability contract:

- [`DirectedGraph`](crate::repr::DirectedGraph): one-way edges.
- [`UndirectedGraph`](crate::repr::UndirectedGraph): every insertion stores the edge on both endpoints.
- [`WeightedGraph`](crate::repr::WeightedGraph): weighted edges, directed or undirected per insertion.

Capabilities that are only meaningful for some variants (cycle detection,
transposition) are separate traits in [`ops`], implemented exactly where they
make sense; there is no base type with unimplemented stubs.

# Algorithms

The [`algo`] module provides the classic suite as extension traits on the
graph types: depth/breadth-first search, cycle detection, topological sort,
strongly connected components (Kosaraju), bridges and articulation points
(Tarjan low-link), Dijkstra shortest distances, and Kruskal minimum spanning
trees backed by the [`utils::UnionFind`] disjoint-set structure.

Traversal state is never stored on the graph itself: every algorithm call
builds its own three-color state map and drops it on return, so concurrent
read-only algorithm calls on a shared graph are safe.

# Usage

```
use lgraphs::{prelude::*, algo::*};

let mut g = DirectedGraph::new();
for label in ["a", "b", "c"] {
    g.add_node(label);
}
g.add_edge("a", "b").unwrap();
g.add_edge("b", "c").unwrap();

assert_eq!(g.bfs("a").unwrap(), vec!["a", "b", "c"]);
assert!(!g.detect_cycle());
assert_eq!(g.topological_sort().unwrap(), vec!["a", "b", "c"]);
```

In most use-cases, `use lgraphs::{prelude::*, algo::*};` suffices for your needs.

# When to use

You should only use this library if the following apply:
- Your nodes carry natural string identities (service names, hostnames, usernames)
- Your graphs fit comfortably in memory
- You require the classic traversal & structural algorithms, not a graph database

If your graphs are unlabelled and performance-critical, a dense unlabelled
library will serve you better; if you need persistence or queries, you want a
graph database rather than this crate.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod node;
pub mod ops;
pub mod repr;
pub mod utils;

/// `lgraphs::prelude` includes definitions for nodes, edges and errors, all basic graph
/// operation traits as well as the three graph variants.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
