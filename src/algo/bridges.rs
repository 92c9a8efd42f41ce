use super::*;

/// Bridge detection on undirected graphs.
pub trait Bridges {
    /// Returns every bridge (an edge whose removal disconnects its
    /// component) as a `(parent, child)` label pair in DFS tree orientation.
    fn bridges(&self) -> Vec<(&str, &str)>;
}

impl Bridges for UndirectedGraph {
    fn bridges(&self) -> Vec<(&str, &str)> {
        BridgeSearch::new(self)
            .compute()
            .into_iter()
            .map(|Edge(u, v)| (self.label_of(u), self.label_of(v)))
            .collect()
    }
}

/// Tarjan low-link DFS collecting tree edges `(u, v)` with `low[v] > disc[u]`.
///
/// `time` is the single discovery counter shared by the entire traversal: it
/// is bumped exactly once per first visit, never derived from recursion
/// depth, so discovery times stay distinct across sibling subtrees and
/// low-link comparisons remain valid between branches.
struct BridgeSearch<'a> {
    graph: &'a UndirectedGraph,
    states: TraversalStates,
    disc: Vec<Node>,
    low: Vec<Node>,
    time: Node,
    bridges: Vec<Edge>,
}

impl<'a> BridgeSearch<'a> {
    fn new(graph: &'a UndirectedGraph) -> Self {
        let n = graph.number_of_nodes();
        Self {
            graph,
            states: TraversalStates::new(n),
            disc: vec![0; n as usize],
            low: vec![0; n as usize],
            time: 0,
            bridges: Vec::new(),
        }
    }

    fn compute(mut self) -> Vec<Edge> {
        for u in self.graph.vertices() {
            if self.states.is_not_started(u) {
                self.visit(u, None);
            }
        }

        self.bridges
    }

    fn visit(&mut self, u: Node, parent: Option<Node>) {
        self.states.mark_visiting(u);
        self.time += 1;
        self.disc[u as usize] = self.time;
        self.low[u as usize] = self.time;

        let graph = self.graph;
        let mut parent_skipped = false;

        for v in graph.neighbors_of(u) {
            // skip only the arc we entered through; a parallel arc to the
            // parent is an ordinary back edge
            if parent == Some(v) && !parent_skipped {
                parent_skipped = true;
                continue;
            }

            if self.states.is_not_started(v) {
                self.visit(v, Some(u));
                self.low[u as usize] = self.low[u as usize].min(self.low[v as usize]);

                if self.low[v as usize] > self.disc[u as usize] {
                    self.bridges.push(Edge(u, v));
                }
            } else {
                self.low[u as usize] = self.low[u as usize].min(self.disc[v as usize]);
            }
        }

        self.states.mark_visited(u);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

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
    fn every_path_edge_is_a_bridge() {
        let g = undirected(&[("a", "b"), ("b", "c"), ("c", "d")]);

        let bridges = g.bridges().into_iter().sorted().collect_vec();
        assert_eq!(bridges, vec![("a", "b"), ("b", "c"), ("c", "d")]);
    }

    #[test]
    fn cycle_has_no_bridges() {
        let g = undirected(&[("a", "b"), ("b", "c"), ("c", "a")]);
        assert!(g.bridges().is_empty());
    }

    #[test]
    fn bridge_between_two_cycles() {
        //  a - b       d - e
        //   \ /   and   \ /   joined by b - d
        //    c           f
        let g = undirected(&[
            ("a", "b"),
            ("b", "c"),
            ("c", "a"),
            ("b", "d"),
            ("d", "e"),
            ("e", "f"),
            ("f", "d"),
        ]);

        assert_eq!(g.bridges(), vec![("b", "d")]);
    }

    #[test]
    fn parallel_edges_are_never_bridges() {
        let g = undirected(&[("a", "b"), ("a", "b"), ("b", "c")]);
        assert_eq!(g.bridges(), vec![("b", "c")]);
    }

    #[test]
    fn disconnected_components_are_all_searched() {
        let g = undirected(&[("a", "b"), ("x", "y")]);

        let bridges = g.bridges().into_iter().sorted().collect_vec();
        assert_eq!(bridges, vec![("a", "b"), ("x", "y")]);
    }
}
