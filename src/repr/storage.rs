use fxhash::FxHashMap;

use crate::{error::*, node::*};

/// Label-addressed adjacency arena shared by all graph variants.
///
/// Nodes are assigned dense ids in insertion order; `adj[u]` holds the
/// out-arcs of node `u`, generic over the arc payload (`Node` for the
/// unweighted variants, [`WeightedEdge`](crate::edge::WeightedEdge) for the
/// weighted one). Arcs reference existing ids only: both endpoints are
/// resolved before anything is inserted, so no arc can dangle.
#[derive(Debug, Clone)]
pub(crate) struct AdjacencyStorage<E> {
    labels: Vec<String>,
    index: FxHashMap<String, Node>,
    adj: Vec<Vec<E>>,
}

// manual impl: the derive would needlessly demand `E: Default`
impl<E> Default for AdjacencyStorage<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> AdjacencyStorage<E> {
    pub(crate) fn new() -> Self {
        Self {
            labels: Vec::new(),
            index: FxHashMap::default(),
            adj: Vec::new(),
        }
    }

    /// Inserts a node for `label` and returns its id.
    ///
    /// Idempotent: if the label is already present, the existing id is
    /// returned and nothing changes.
    pub(crate) fn insert_node(&mut self, label: &str) -> Node {
        if let Some(&u) = self.index.get(label) {
            return u;
        }
        let u = self.labels.len() as Node;
        self.labels.push(label.to_owned());
        self.index.insert(label.to_owned(), u);
        self.adj.push(Vec::new());
        u
    }

    pub(crate) fn node_by_label(&self, label: &str) -> Option<Node> {
        self.index.get(label).copied()
    }

    /// Resolves `label` or fails with [`GraphError::NodeNotFound`].
    pub(crate) fn require(&self, label: &str) -> Result<Node> {
        self.node_by_label(label)
            .ok_or_else(|| GraphError::NodeNotFound(label.to_owned()))
    }

    pub(crate) fn label_of(&self, u: Node) -> &str {
        &self.labels[u as usize]
    }

    pub(crate) fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }

    pub(crate) fn number_of_nodes(&self) -> NumNodes {
        self.labels.len() as NumNodes
    }

    pub(crate) fn arcs_of(&self, u: Node) -> &[E] {
        &self.adj[u as usize]
    }

    pub(crate) fn push_arc(&mut self, u: Node, arc: E) {
        self.adj[u as usize].push(arc);
    }

    pub(crate) fn arc_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }
}

/// Implements the label/order traits for a variant by delegating to its
/// `storage` field.
macro_rules! impl_storage_ops {
    ($graph:ident) => {
        impl $crate::ops::GraphNodeOrder for $graph {
            fn number_of_nodes(&self) -> $crate::node::NumNodes {
                self.storage.number_of_nodes()
            }
        }

        impl $crate::ops::GraphEdgeOrder for $graph {
            fn number_of_edges(&self) -> $crate::edge::NumEdges {
                self.storage.arc_count() as $crate::edge::NumEdges
            }
        }

        impl $crate::ops::Labeled for $graph {
            fn label_of(&self, u: $crate::node::Node) -> &str {
                self.storage.label_of(u)
            }

            fn node_by_label(&self, label: &str) -> Option<$crate::node::Node> {
                self.storage.node_by_label(label)
            }

            fn labels(&self) -> impl Iterator<Item = &str> + '_ {
                self.storage.labels()
            }
        }
    };
}

pub(crate) use impl_storage_ops;
