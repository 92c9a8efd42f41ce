/*!
Depth-first and breadth-first traversal over whole graphs.

Both traversals are exposed through the [`Traversal`] extension trait on every
graph variant. DFS runs on an explicit stack of [`Frame`]s instead of the call
stack, so traversal depth is bounded by heap memory rather than stack size;
a path graph of tens of thousands of nodes is fine. The same frame machinery
backs cycle detection, topological sorting and SCC computation.
*/

use std::collections::VecDeque;

use super::*;

/// A suspended DFS visit: `node`'s neighborhood has been explored up to
/// (excluding) position `next`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame {
    pub(crate) node: Node,
    pub(crate) next: NumNodes,
}

impl Frame {
    pub(crate) fn start(node: Node) -> Self {
        Self { node, next: 0 }
    }
}

/// Computes the DFS finish order of the whole graph: every node appears
/// exactly once, pushed at the moment its neighborhood is fully explored.
///
/// Components are entered in insertion order of their first `NotStarted`
/// node. The *reverse* of this order is a topological order on DAGs; the
/// order as-is seeds Kosaraju's second pass.
pub(crate) fn dfs_finish_order<G: IndexedAdjacencyList>(graph: &G) -> Vec<Node> {
    let mut states = TraversalStates::new(graph.number_of_nodes());
    let mut finish = Vec::with_capacity(graph.len());
    let mut stack: Vec<Frame> = Vec::new();

    for root in graph.vertices() {
        if !states.is_not_started(root) {
            continue;
        }

        states.mark_visiting(root);
        stack.push(Frame::start(root));

        while let Some(frame) = stack.last_mut() {
            let u = frame.node;
            if frame.next < graph.degree_of(u) {
                let v = graph.ith_neighbor(u, frame.next);
                frame.next += 1;

                if states.is_not_started(v) {
                    states.mark_visiting(v);
                    stack.push(Frame::start(v));
                }
            } else {
                states.mark_visited(u);
                finish.push(u);
                stack.pop();
            }
        }
    }

    finish
}

/// Provides whole-graph depth-first and breadth-first traversal.
pub trait Traversal: IndexedAdjacencyList {
    /// Visits **every** node of the graph in depth-first preorder.
    ///
    /// Traversal restarts from the next `NotStarted` node in insertion order
    /// whenever a component is exhausted, so disconnected graphs are covered
    /// completely. Within a component, neighbors are taken in edge-insertion
    /// order.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = DirectedGraph::new();
    /// for label in ["a", "b", "c"] {
    ///     g.add_node(label);
    /// }
    /// g.add_edge("a", "c").unwrap();
    ///
    /// assert_eq!(g.dfs(), vec!["a", "c", "b"]);
    /// ```
    fn dfs(&self) -> Vec<&str> {
        let mut states = TraversalStates::new(self.number_of_nodes());
        let mut order = Vec::with_capacity(self.len());
        let mut stack: Vec<Frame> = Vec::new();

        for root in self.vertices() {
            if !states.is_not_started(root) {
                continue;
            }

            states.mark_visiting(root);
            order.push(root);
            stack.push(Frame::start(root));

            while let Some(frame) = stack.last_mut() {
                let u = frame.node;
                if frame.next < self.degree_of(u) {
                    let v = self.ith_neighbor(u, frame.next);
                    frame.next += 1;

                    if states.is_not_started(v) {
                        states.mark_visiting(v);
                        order.push(v);
                        stack.push(Frame::start(v));
                    }
                } else {
                    states.mark_visited(u);
                    stack.pop();
                }
            }
        }

        self.labels_of(&order)
    }

    /// Visits the nodes reachable from `start` in breadth-first order.
    ///
    /// Nodes are marked `Visiting` when enqueued (preventing duplicate
    /// enqueues) and `Visited` when dequeued; the returned order is the
    /// dequeue order.
    ///
    /// Fails with [`GraphError::NodeNotFound`] if `start` is absent.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = UndirectedGraph::new();
    /// for label in ["a", "b", "c"] {
    ///     g.add_node(label);
    /// }
    /// g.add_edge("a", "b").unwrap();
    /// g.add_edge("a", "c").unwrap();
    ///
    /// assert_eq!(g.bfs("a").unwrap(), vec!["a", "b", "c"]);
    /// assert!(g.bfs("z").is_err());
    /// ```
    fn bfs(&self, start: &str) -> Result<Vec<&str>> {
        let source = self.require_node(start)?;

        let mut states = TraversalStates::new(self.number_of_nodes());
        let mut order = Vec::new();
        let mut queue = VecDeque::new();

        states.mark_visiting(source);
        queue.push_back(source);

        while let Some(u) = queue.pop_front() {
            order.push(u);
            states.mark_visited(u);

            for v in self.neighbors_of(u) {
                if states.is_not_started(v) {
                    states.mark_visiting(v);
                    queue.push_back(v);
                }
            }
        }

        Ok(self.labels_of(&order))
    }
}

impl<G: IndexedAdjacencyList> Traversal for G {}
