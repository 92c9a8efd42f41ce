/*!
# Graph Algorithms

This module provides the classic traversal & structural algorithms on top of
the graph variants in this crate. All algorithms are re-exported at the top
level of this module, so you can simply do:
```rust
use lgraphs::algo::*;
```
and gain access to DFS/BFS, cycle detection, topological sorting, strongly
connected components, bridges, articulation points, shortest distances and
minimum spanning trees as methods on the graph types.

Every algorithm call builds its own [`TraversalStates`] map and drops it on
return; no traversal state survives a call or is shared between calls.
*/

mod articulation;
mod bridges;
mod cycle;
mod dijkstra;
mod mst;
mod scc;
mod states;
mod toposort;
mod traversal;

use crate::prelude::*;

pub use articulation::*;
pub use bridges::*;
pub use dijkstra::*;
pub use mst::*;
pub use scc::*;
pub use states::*;
pub use toposort::*;
pub use traversal::*;
