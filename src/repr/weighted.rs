use super::storage::{impl_storage_ops, AdjacencyStorage};
use crate::{edge::*, error::*, node::*, ops::*};

/// A graph with weighted edges, directed or undirected per insertion.
///
/// Weights must be non-negative finite numbers; this is a precondition of
/// every algorithm consuming this type and is checked only in debug builds.
///
/// Because directed and undirected weighted edges may be mixed freely, the
/// variant has no single cycle notion and does not implement
/// [`CycleDetectable`](crate::ops::CycleDetectable). It does implement
/// [`Transposable`](crate::ops::Transposable): reversing every stored arc
/// keeps undirected edges intact and flips directed ones, weights preserved.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    storage: AdjacencyStorage<WeightedEdge>,
}

impl WeightedGraph {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self {
            storage: AdjacencyStorage::new(),
        }
    }

    /// Adds a node for `label` and returns its id.
    ///
    /// Adding a label twice is an idempotent no-op: the existing node keeps
    /// its id and its edges.
    pub fn add_node(&mut self, label: &str) -> Node {
        self.storage.insert_node(label)
    }

    /// Adds the one-way weighted edge `from → to`.
    ///
    /// Fails with [`GraphError::NodeNotFound`] if either endpoint has not
    /// been added; nothing is inserted in that case.
    pub fn add_directed_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<()> {
        debug_assert!(weight >= 0.0 && weight.is_finite());

        let u = self.storage.require(from)?;
        let v = self.storage.require(to)?;
        self.storage.push_arc(u, WeightedEdge::new(u, v, weight));
        Ok(())
    }

    /// Adds the weighted edge `a - b`, stored as one arc per endpoint.
    ///
    /// Both endpoints are resolved before either arc is written, so a failed
    /// insertion leaves the graph unchanged.
    pub fn add_undirected_edge(&mut self, a: &str, b: &str, weight: f64) -> Result<()> {
        debug_assert!(weight >= 0.0 && weight.is_finite());

        let u = self.storage.require(a)?;
        let v = self.storage.require(b)?;
        self.storage.push_arc(u, WeightedEdge::new(u, v, weight));
        self.storage.push_arc(v, WeightedEdge::new(v, u, weight));
        Ok(())
    }

    /// Adds the weighted edge `a - b`.
    ///
    /// Alias for [`add_undirected_edge`](WeightedGraph::add_undirected_edge),
    /// matching the `add_edge` surface of the unweighted variants.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: f64) -> Result<()> {
        self.add_undirected_edge(a, b, weight)
    }
}

impl_storage_ops!(WeightedGraph);

impl AdjacencyList for WeightedGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.storage.arcs_of(u).iter().map(|arc| arc.to)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.storage.arcs_of(u).len() as NumNodes
    }
}

impl IndexedAdjacencyList for WeightedGraph {
    fn ith_neighbor(&self, u: Node, i: NumNodes) -> Node {
        self.storage.arcs_of(u)[i as usize].to
    }
}

impl WeightedAdjacencyList for WeightedGraph {
    fn weighted_edges_of(&self, u: Node) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.storage.arcs_of(u).iter().copied()
    }
}

impl Transposable for WeightedGraph {
    fn create_transpose(&self) -> Self {
        let mut transpose = Self::new();
        for label in self.labels() {
            transpose.storage.insert_node(label);
        }
        // same insertion order, hence identical ids: arcs can be copied raw
        for u in self.vertices() {
            for arc in self.storage.arcs_of(u) {
                transpose.storage.push_arc(arc.to, arc.reverse());
            }
        }
        transpose
    }
}
