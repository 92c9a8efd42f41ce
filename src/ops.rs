use crate::{edge::*, error::*, node::*};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over V in insertion order.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        0..self.number_of_nodes()
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of stored arcs of the graph.
    ///
    /// An undirected edge is stored on both endpoints and thus contributes two.
    fn number_of_edges(&self) -> NumEdges;
}

/// The label ↔ node mapping every graph variant carries.
///
/// Labels are the public identity of nodes; ids exist so per-node algorithm
/// state can live in flat `Vec`s. `label_of` panics on an id the graph never
/// handed out; ids only originate here, so that is a caller bug, not a
/// runtime condition.
pub trait Labeled {
    /// Returns the label of a node.
    /// ** Panics if `u >= n` **
    fn label_of(&self, u: Node) -> &str;

    /// Returns the id bound to `label`, or `None` if no such node exists.
    fn node_by_label(&self, label: &str) -> Option<Node>;

    /// Returns an iterator over all labels in insertion order.
    fn labels(&self) -> impl Iterator<Item = &str> + '_;

    /// Resolves `label` or fails with [`GraphError::NodeNotFound`].
    fn require_node(&self, label: &str) -> Result<Node> {
        self.node_by_label(label)
            .ok_or_else(|| GraphError::NodeNotFound(label.to_owned()))
    }

    /// Maps a sequence of ids back to their labels.
    fn labels_of<'a>(&'a self, nodes: &[Node]) -> Vec<&'a str> {
        nodes.iter().map(|&u| self.label_of(u)).collect()
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Labeled + Sized {
    /// Returns an iterator over the (out-)neighborhood of a given vertex,
    /// in edge-insertion order.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of (outgoing) neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;
}

/// Indexed access into adjacency lists.
///
/// Every variant stores its neighborhoods as `Vec`s, so positional access is
/// free. The explicit-stack traversals depend on this: a suspended DFS frame
/// remembers how far into `u`'s neighborhood it got as a plain index.
pub trait IndexedAdjacencyList: AdjacencyList {
    /// Returns the ith neighbor (0-indexed) of a given vertex
    /// ** Panics if `u >= n || i >= deg(u)` **
    fn ith_neighbor(&self, u: Node, i: NumNodes) -> Node;
}

/// Access to weighted arcs, including both endpoints and the weight.
pub trait WeightedAdjacencyList: AdjacencyList {
    /// Returns an iterator over the weighted out-arcs of a given vertex,
    /// in edge-insertion order.
    /// ** Panics if `u >= n` **
    fn weighted_edges_of(&self, u: Node) -> impl Iterator<Item = WeightedEdge> + '_;

    /// Returns an iterator over all stored arcs, vertices in insertion order.
    ///
    /// An undirected edge appears once per endpoint.
    fn weighted_edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices().flat_map(move |u| self.weighted_edges_of(u))
    }
}

/// Capability: the variant can decide whether it contains a cycle.
///
/// Implemented by [`DirectedGraph`](crate::repr::DirectedGraph) (back edge to
/// a node on the active DFS path) and
/// [`UndirectedGraph`](crate::repr::UndirectedGraph) (same, with the arc back
/// to the DFS parent excluded). [`WeightedGraph`](crate::repr::WeightedGraph)
/// may hold a mix of directed and undirected edges, so neither rule applies
/// and it does not implement this trait.
pub trait CycleDetectable {
    /// Returns *true* if the graph contains at least one cycle.
    fn detect_cycle(&self) -> bool;
}

/// Capability: the variant can produce its transpose.
///
/// The transpose holds the same labels, added in the same order, so ids are
/// identical in both graphs, and every arc is reversed. Weighted
/// variants keep each arc's weight.
pub trait Transposable {
    /// Builds the transpose graph (every edge u→v becomes v→u).
    fn create_transpose(&self) -> Self;
}
