use log::debug;

use super::{traversal::dfs_finish_order, *};

/// Topological ordering of a directed acyclic graph.
pub trait TopologicalSort: CycleDetectable + IndexedAdjacencyList {
    /// Returns an ordering of all nodes in which every edge `u → v` has `u`
    /// before `v`.
    ///
    /// The ordering is the reverse DFS finish order: a node is appended to
    /// the finish list only once everything reachable from it has finished,
    /// so reversing that list puts every node ahead of its successors.
    ///
    /// Fails with [`GraphError::CycleDetected`] if the graph has a cycle;
    /// no partial ordering is produced.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = DirectedGraph::new();
    /// for label in ["build", "test", "deploy"] {
    ///     g.add_node(label);
    /// }
    /// g.add_edge("build", "test").unwrap();
    /// g.add_edge("test", "deploy").unwrap();
    ///
    /// assert_eq!(
    ///     g.topological_sort().unwrap(),
    ///     vec!["build", "test", "deploy"]
    /// );
    /// ```
    fn topological_sort(&self) -> Result<Vec<&str>> {
        if self.detect_cycle() {
            debug!("refusing topological sort: graph contains a cycle");
            return Err(GraphError::CycleDetected);
        }

        let mut finish = dfs_finish_order(self);
        finish.reverse();
        Ok(self.labels_of(&finish))
    }
}

impl TopologicalSort for DirectedGraph {}
