/*!
# Node Representation

Labels are the public identity of a node; internally every label is assigned a
dense id in insertion order. We choose `Node = u32` for these ids as almost all
use-cases involve less than `2^32` nodes, which keeps per-node algorithm state
(`Vec`-indexed discovery times, low-links, distances) compact.

Ids are an implementation detail: they never appear in public results, which
always report labels. The id of a label is stable for the lifetime of the
graph, and a transposed graph assigns the same ids as its source.
*/

/// Dense node id, assigned by the owning graph in insertion order.
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;
