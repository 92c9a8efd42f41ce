use super::storage::{impl_storage_ops, AdjacencyStorage};
use crate::{error::*, node::*, ops::*};

/// A graph whose edges are one-way.
///
/// # Example
/// ```
/// use lgraphs::prelude::*;
///
/// let mut g = DirectedGraph::new();
/// g.add_node("a");
/// g.add_node("b");
/// g.add_edge("a", "b").unwrap();
///
/// assert_eq!(g.neighbors_of(0).collect::<Vec<_>>(), vec![1]);
/// assert_eq!(g.degree_of(1), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph {
    storage: AdjacencyStorage<Node>,
}

impl DirectedGraph {
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

    /// Adds the edge `from → to`.
    ///
    /// Fails with [`GraphError::NodeNotFound`] if either endpoint has not
    /// been added; nothing is inserted in that case.
    pub fn add_edge(&mut self, from: &str, to: &str) -> Result<()> {
        let u = self.storage.require(from)?;
        let v = self.storage.require(to)?;
        self.storage.push_arc(u, v);
        Ok(())
    }
}

impl_storage_ops!(DirectedGraph);

impl AdjacencyList for DirectedGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.storage.arcs_of(u).iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.storage.arcs_of(u).len() as NumNodes
    }
}

impl IndexedAdjacencyList for DirectedGraph {
    fn ith_neighbor(&self, u: Node, i: NumNodes) -> Node {
        self.storage.arcs_of(u)[i as usize]
    }
}

impl Transposable for DirectedGraph {
    fn create_transpose(&self) -> Self {
        let mut transpose = Self::new();
        for label in self.labels() {
            transpose.storage.insert_node(label);
        }
        // same insertion order, hence identical ids: arcs can be copied raw
        for u in self.vertices() {
            for &v in self.storage.arcs_of(u) {
                transpose.storage.push_arc(v, u);
            }
        }
        transpose
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn graph_with_nodes(labels: &[&str]) -> DirectedGraph {
        let mut g = DirectedGraph::new();
        for label in labels {
            g.add_node(label);
        }
        g
    }

    #[test]
    fn add_node_is_idempotent() {
        let mut g = graph_with_nodes(&["a", "b"]);
        g.add_edge("a", "b").unwrap();

        assert_eq!(g.add_node("a"), 0);
        assert_eq!(g.number_of_nodes(), 2);
        assert_eq!(g.degree_of(0), 1);
    }

    #[test]
    fn add_edge_unknown_endpoint() {
        let mut g = graph_with_nodes(&["a"]);

        assert_eq!(
            g.add_edge("a", "b"),
            Err(GraphError::NodeNotFound("b".to_owned()))
        );
        assert_eq!(
            g.add_edge("x", "a"),
            Err(GraphError::NodeNotFound("x".to_owned()))
        );
        assert_eq!(g.number_of_edges(), 0);
    }

    #[test]
    fn label_lookup() {
        let g = graph_with_nodes(&["a", "b", "c"]);

        assert_eq!(g.node_by_label("b"), Some(1));
        assert_eq!(g.node_by_label("z"), None);
        assert_eq!(g.label_of(2), "c");
        assert_eq!(g.labels().collect_vec(), vec!["a", "b", "c"]);
    }

    #[test]
    fn transpose_reverses_all_edges() {
        let mut g = graph_with_nodes(&["a", "b", "c"]);
        g.add_edge("a", "b").unwrap();
        g.add_edge("a", "c").unwrap();
        g.add_edge("b", "c").unwrap();

        let t = g.create_transpose();

        assert_eq!(t.labels().collect_vec(), g.labels().collect_vec());
        assert_eq!(t.number_of_edges(), 3);
        assert_eq!(t.neighbors_of(2).sorted().collect_vec(), vec![0, 1]);
        assert_eq!(t.neighbors_of(1).collect_vec(), vec![0]);
        assert_eq!(t.degree_of(0), 0);
    }
}
