use super::storage::{impl_storage_ops, AdjacencyStorage};
use crate::{error::*, node::*, ops::*};

/// A graph whose edges have no orientation.
///
/// Every [`add_edge`](UndirectedGraph::add_edge) stores the edge on both
/// endpoints, and insertion is atomic: both endpoints are resolved before
/// either arc is written, so a failed insertion leaves the graph unchanged.
#[derive(Debug, Clone, Default)]
pub struct UndirectedGraph {
    storage: AdjacencyStorage<Node>,
}

impl UndirectedGraph {
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

    /// Adds the edge `a - b`, stored on both endpoints.
    ///
    /// Fails with [`GraphError::NodeNotFound`] if either endpoint has not
    /// been added; nothing is inserted in that case.
    pub fn add_edge(&mut self, a: &str, b: &str) -> Result<()> {
        let u = self.storage.require(a)?;
        let v = self.storage.require(b)?;
        self.storage.push_arc(u, v);
        self.storage.push_arc(v, u);
        Ok(())
    }
}

impl_storage_ops!(UndirectedGraph);

impl AdjacencyList for UndirectedGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.storage.arcs_of(u).iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.storage.arcs_of(u).len() as NumNodes
    }
}

impl IndexedAdjacencyList for UndirectedGraph {
    fn ith_neighbor(&self, u: Node, i: NumNodes) -> Node {
        self.storage.arcs_of(u)[i as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn edges_are_stored_symmetrically() {
        let mut g = UndirectedGraph::new();
        g.add_node("a");
        g.add_node("b");
        g.add_edge("a", "b").unwrap();

        assert_eq!(g.number_of_edges(), 2);
        assert_eq!(g.neighbors_of(0).collect_vec(), vec![1]);
        assert_eq!(g.neighbors_of(1).collect_vec(), vec![0]);
    }

    #[test]
    fn failed_insertion_leaves_no_half_edge() {
        let mut g = UndirectedGraph::new();
        g.add_node("a");

        assert_eq!(
            g.add_edge("a", "missing"),
            Err(GraphError::NodeNotFound("missing".to_owned()))
        );
        assert_eq!(g.number_of_edges(), 0);
        assert_eq!(g.degree_of(0), 0);
    }

    #[test]
    fn parallel_edges_are_kept() {
        let mut g = UndirectedGraph::new();
        g.add_node("a");
        g.add_node("b");
        g.add_edge("a", "b").unwrap();
        g.add_edge("a", "b").unwrap();

        assert_eq!(g.degree_of(0), 2);
        assert_eq!(g.degree_of(1), 2);
    }
}
