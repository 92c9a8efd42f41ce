use log::debug;

use super::*;
use crate::utils::UnionFind;

/// One accepted edge of a minimum spanning tree, endpoints as labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpanningEdge<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub weight: f64,
}

/// Kruskal minimum spanning tree on weighted graphs.
pub trait MinimumSpanningTree: WeightedAdjacencyList {
    /// Computes a minimum spanning tree of the graph.
    ///
    /// All stored arcs are sorted by weight (the sort is stable, so equal
    /// weights keep insertion order) and greedily accepted whenever their
    /// endpoints are still in different [`UnionFind`] sets, stopping once
    /// `|V| - 1` edges are in. The second arc of an undirected edge always
    /// finds its endpoints already united and is rejected without any
    /// separate deduplication.
    ///
    /// If the graph is disconnected the result is a minimum spanning
    /// **forest** with fewer than `|V| - 1` edges; callers must check the
    /// length rather than assume full connectivity.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = WeightedGraph::new();
    /// for label in ["a", "b", "c"] {
    ///     g.add_node(label);
    /// }
    /// g.add_undirected_edge("a", "b", 1.0).unwrap();
    /// g.add_undirected_edge("b", "c", 2.0).unwrap();
    /// g.add_undirected_edge("a", "c", 3.0).unwrap();
    ///
    /// let mst = g.minimum_spanning_tree();
    /// assert_eq!(mst.len(), 2);
    /// assert_eq!(mst.iter().map(|e| e.weight).sum::<f64>(), 3.0);
    /// ```
    fn minimum_spanning_tree(&self) -> Vec<SpanningEdge<'_>> {
        let mut edges: Vec<WeightedEdge> = self.weighted_edges().collect();
        edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));

        let target = self.len().saturating_sub(1);
        let mut union_find = UnionFind::new(self.number_of_nodes());
        let mut tree = Vec::with_capacity(target);

        for edge in edges {
            if union_find.union(edge.from, edge.to) {
                tree.push(edge);
                if tree.len() == target {
                    break;
                }
            }
        }

        if tree.len() < target {
            debug!(
                "graph is disconnected: spanning forest has {} of {} possible edges",
                tree.len(),
                target
            );
        }

        tree.into_iter()
            .map(|edge| SpanningEdge {
                from: self.label_of(edge.from),
                to: self.label_of(edge.to),
                weight: edge.weight,
            })
            .collect()
    }
}

impl<G: WeightedAdjacencyList> MinimumSpanningTree for G {}
