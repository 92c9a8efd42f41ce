/*!
Strongly connected components via Kosaraju's two-pass algorithm.

Pass one records the DFS finish order of the original graph. Pass two walks
the transpose, launching one DFS per still-`NotStarted` node in **reverse**
finish order; each launch collects exactly the members of one SCC. Since the
transpose holds the same labels in the same insertion order, node ids carry
over between the two passes unchanged.

Available on every variant that is [`Transposable`]: the directed and
weighted graphs.
*/

use super::{
    traversal::{dfs_finish_order, Frame},
    *,
};

/// Partition of a graph's nodes into strongly connected components.
pub trait StronglyConnectedComponents: IndexedAdjacencyList + Transposable {
    /// Returns the strongly connected components of the graph.
    ///
    /// Every node belongs to exactly one group; an isolated node forms a
    /// group of size 1. Within a group, nodes appear in the discovery order
    /// of the second pass.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = DirectedGraph::new();
    /// for label in ["a", "b", "c", "d"] {
    ///     g.add_node(label);
    /// }
    /// g.add_edge("a", "b").unwrap();
    /// g.add_edge("b", "a").unwrap();
    /// g.add_edge("b", "d").unwrap();
    ///
    /// let sccs = g.strongly_connected_components();
    /// assert_eq!(sccs.len(), 3); // {a, b}, {c}, {d}
    /// ```
    fn strongly_connected_components(&self) -> Vec<Vec<&str>> {
        let finish = dfs_finish_order(self);
        let transpose = self.create_transpose();

        let mut states = TraversalStates::new(self.number_of_nodes());
        let mut components = Vec::new();

        for &root in finish.iter().rev() {
            if !states.is_not_started(root) {
                continue;
            }

            // one DFS on the transpose collects exactly one component
            let mut component = vec![root];
            let mut stack = vec![Frame::start(root)];
            states.mark_visiting(root);

            while let Some(frame) = stack.last_mut() {
                let u = frame.node;
                if frame.next < transpose.degree_of(u) {
                    let v = transpose.ith_neighbor(u, frame.next);
                    frame.next += 1;

                    if states.is_not_started(v) {
                        states.mark_visiting(v);
                        component.push(v);
                        stack.push(Frame::start(v));
                    }
                } else {
                    states.mark_visited(u);
                    stack.pop();
                }
            }

            components.push(self.labels_of(&component));
        }

        components
    }
}

impl<G: IndexedAdjacencyList + Transposable> StronglyConnectedComponents for G {}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn directed(nodes: &[&str], edges: &[(&str, &str)]) -> DirectedGraph {
        let mut g = DirectedGraph::new();
        for label in nodes {
            g.add_node(label);
        }
        for &(u, v) in edges {
            g.add_edge(u, v).unwrap();
        }
        g
    }

    /// Sorts the nodes in each component and the components lexicographically.
    fn sorted(components: Vec<Vec<&str>>) -> Vec<Vec<&str>> {
        components
            .into_iter()
            .map(|c| c.into_iter().sorted().collect_vec())
            .sorted()
            .collect_vec()
    }

    #[test]
    fn cycle_plus_isolated_node() {
        let g = directed(
            &["a", "b", "c", "d"],
            &[("a", "b"), ("b", "c"), ("c", "a")],
        );

        let sccs = g.strongly_connected_components();
        assert_eq!(sccs.len(), 2);

        let sccs = sorted(sccs);
        assert_eq!(sccs, vec![vec!["a", "b", "c"], vec!["d"]]);
    }

    #[test]
    fn every_node_in_exactly_one_group() {
        let g = directed(
            &["a", "b", "c", "d", "e", "f"],
            &[
                ("a", "b"),
                ("b", "a"),
                ("b", "c"),
                ("c", "d"),
                ("d", "e"),
                ("e", "c"),
                ("e", "f"),
            ],
        );

        let sccs = g.strongly_connected_components();
        let all: Vec<&str> = sccs.iter().flatten().copied().collect();
        assert_eq!(all.len(), g.len());
        assert_eq!(all.iter().collect::<HashSet<_>>().len(), g.len());

        let sccs = sorted(sccs);
        assert_eq!(sccs, vec![vec!["a", "b"], vec!["c", "d", "e"], vec!["f"]]);
    }

    #[test]
    fn directed_tree_is_all_singletons() {
        let g = directed(
            &["r", "x", "y", "z"],
            &[("r", "x"), ("r", "y"), ("y", "z")],
        );
        assert_eq!(g.strongly_connected_components().len(), 4);
    }

    #[test]
    fn weighted_graph_sccs() {
        let mut g = WeightedGraph::new();
        for label in ["a", "b", "c"] {
            g.add_node(label);
        }
        g.add_directed_edge("a", "b", 1.0).unwrap();
        g.add_directed_edge("b", "a", 2.0).unwrap();
        g.add_directed_edge("b", "c", 3.0).unwrap();

        let sccs = sorted(g.strongly_connected_components());
        assert_eq!(sccs, vec![vec!["a", "b"], vec!["c"]]);
    }

    #[test]
    fn partition_covers_random_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1234);
        let n = 200u32;

        for round in 0..5 {
            let mut g = DirectedGraph::new();
            for i in 0..n {
                g.add_node(&format!("n{i}"));
            }
            for _ in 0..(n * round) {
                let u = rng.random_range(0..n);
                let v = rng.random_range(0..n);
                g.add_edge(&format!("n{u}"), &format!("n{v}")).unwrap();
            }

            let sccs = g.strongly_connected_components();
            assert_eq!(
                sccs.iter().map(|c| c.len()).sum::<usize>(),
                n as usize
            );
            assert_eq!(
                sccs.iter().flatten().unique().count(),
                n as usize
            );
        }
    }
}
