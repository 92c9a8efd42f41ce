use fxhash::FxHashSet;
use itertools::Itertools;

use super::*;

/// Articulation point detection on undirected graphs.
pub trait ArticulationPoints {
    /// Returns every articulation point (a node whose removal disconnects
    /// its component) in node insertion order, each exactly once.
    fn articulation_points(&self) -> Vec<&str>;
}

impl ArticulationPoints for UndirectedGraph {
    fn articulation_points(&self) -> Vec<&str> {
        ArticulationPointSearch::new(self)
            .compute()
            .into_iter()
            .sorted()
            .map(|u| self.label_of(u))
            .collect()
    }
}

/// Tarjan low-link DFS flagging cut vertices.
///
/// A DFS root is a cut vertex iff it has more than one tree child; any other
/// node `u` is one iff some child `v` satisfies `low[v] >= disc[u]`. A node
/// can be flagged through several children, hence the set.
///
/// As in [`BridgeSearch`](super::bridges), `time` is one counter shared by
/// the whole traversal and bumped once per first visit.
struct ArticulationPointSearch<'a> {
    graph: &'a UndirectedGraph,
    states: TraversalStates,
    disc: Vec<Node>,
    low: Vec<Node>,
    time: Node,
    points: FxHashSet<Node>,
}

impl<'a> ArticulationPointSearch<'a> {
    fn new(graph: &'a UndirectedGraph) -> Self {
        let n = graph.number_of_nodes();
        Self {
            graph,
            states: TraversalStates::new(n),
            disc: vec![0; n as usize],
            low: vec![0; n as usize],
            time: 0,
            points: FxHashSet::default(),
        }
    }

    fn compute(mut self) -> FxHashSet<Node> {
        for u in self.graph.vertices() {
            if self.states.is_not_started(u) {
                self.visit(u, None);
            }
        }

        self.points
    }

    fn visit(&mut self, u: Node, parent: Option<Node>) {
        self.states.mark_visiting(u);
        self.time += 1;
        self.disc[u as usize] = self.time;
        self.low[u as usize] = self.time;

        let graph = self.graph;
        let mut children = 0;
        let mut parent_skipped = false;

        for v in graph.neighbors_of(u) {
            if parent == Some(v) && !parent_skipped {
                parent_skipped = true;
                continue;
            }

            if self.states.is_not_started(v) {
                children += 1;
                self.visit(v, Some(u));
                self.low[u as usize] = self.low[u as usize].min(self.low[v as usize]);

                if parent.is_some() && self.low[v as usize] >= self.disc[u as usize] {
                    self.points.insert(u);
                }
            } else {
                self.low[u as usize] = self.low[u as usize].min(self.disc[v as usize]);
            }
        }

        if parent.is_none() && children > 1 {
            self.points.insert(u);
        }

        self.states.mark_visited(u);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn undirected(edges: &[(&str, &str)]) -> UndirectedGraph {
        let mut g = UndirectedGraph::new();
        for &(u, v) in edges {
            g.add_node(u);
            g.add_node(v);
        }
        for &(u, v) in edges {
            g.add_edge(u, v).unwrap();
        }
        g
    }

    #[test]
    fn inner_path_nodes_are_articulation_points() {
        let g = undirected(&[("a", "b"), ("b", "c"), ("c", "d")]);
        assert_eq!(g.articulation_points(), vec!["b", "c"]);
    }

    #[test]
    fn cycle_has_no_articulation_points() {
        let g = undirected(&[("a", "b"), ("b", "c"), ("c", "a")]);
        assert!(g.articulation_points().is_empty());
    }

    #[test]
    fn root_with_two_subtrees() {
        // star center: removal separates all leaves
        let g = undirected(&[("hub", "a"), ("hub", "b"), ("hub", "c")]);
        assert_eq!(g.articulation_points(), vec!["hub"]);
    }

    #[test]
    fn flagged_once_despite_multiple_children() {
        //    a - cut - b
        //          |
        //          c
        let g = undirected(&[("a", "cut"), ("cut", "b"), ("cut", "c")]);
        assert_eq!(g.articulation_points(), vec!["cut"]);
    }

    #[test]
    fn bridge_endpoint_between_cycles() {
        let g = undirected(&[
            ("a", "b"),
            ("b", "c"),
            ("c", "a"),
            ("b", "d"),
            ("d", "e"),
            ("e", "f"),
            ("f", "d"),
        ]);

        assert_eq!(g.articulation_points(), vec!["b", "d"]);
    }
}
