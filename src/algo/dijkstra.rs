use std::{cmp::Ordering, collections::BinaryHeap};

use super::*;

/// Shortest distance from the Dijkstra source to one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShortestDistance<'a> {
    pub label: &'a str,
    pub distance: f64,
}

/// Min-heap entry ordered by `(distance, node)` ascending.
///
/// [`BinaryHeap`] is a max-heap, so the ordering is reversed; ties on the
/// distance fall back to the smaller node id, i.e. insertion order.
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    distance: f64,
    node: Node,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

/// Single-source shortest distances on weighted graphs.
pub trait ShortestPaths: WeightedAdjacencyList {
    /// Computes the shortest distance from `source` to every other node.
    ///
    /// Entries appear in node insertion order, the source itself excluded;
    /// unreachable nodes report `f64::INFINITY`. Stale heap entries are
    /// skipped on extraction instead of being decreased in place.
    ///
    /// All weights are assumed non-negative (guaranteed at insertion by
    /// [`WeightedGraph`](crate::repr::WeightedGraph) in debug builds);
    /// negative weights silently produce incorrect distances.
    ///
    /// Fails with [`GraphError::NodeNotFound`] if `source` is absent.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = WeightedGraph::new();
    /// for label in ["s", "a", "b"] {
    ///     g.add_node(label);
    /// }
    /// g.add_directed_edge("s", "a", 1.0).unwrap();
    /// g.add_directed_edge("s", "b", 4.0).unwrap();
    /// g.add_directed_edge("a", "b", 1.0).unwrap();
    ///
    /// let distances = g.dijkstra("s").unwrap();
    /// assert_eq!(distances[1].label, "b");
    /// assert_eq!(distances[1].distance, 2.0);
    /// ```
    fn dijkstra(&self, source: &str) -> Result<Vec<ShortestDistance<'_>>> {
        let start = self.require_node(source)?;

        let mut distance = vec![f64::INFINITY; self.len()];
        distance[start as usize] = 0.0;

        let mut states = TraversalStates::new(self.number_of_nodes());
        let mut queue = BinaryHeap::new();
        queue.push(HeapEntry {
            distance: 0.0,
            node: start,
        });

        while let Some(HeapEntry { distance: dist, node }) = queue.pop() {
            if states.is_visited(node) {
                // stale entry left over from a later relaxation
                continue;
            }
            states.mark_visited(node);

            for arc in self.weighted_edges_of(node) {
                let relaxed = dist + arc.weight;
                if relaxed < distance[arc.to as usize] {
                    distance[arc.to as usize] = relaxed;
                    queue.push(HeapEntry {
                        distance: relaxed,
                        node: arc.to,
                    });
                }
            }
        }

        Ok(self
            .vertices()
            .filter(|&u| u != start)
            .map(|u| ShortestDistance {
                label: self.label_of(u),
                distance: distance[u as usize],
            })
            .collect())
    }
}

impl<G: WeightedAdjacencyList> ShortestPaths for G {}

#[cfg(test)]
mod tests {
    use super::*;

    fn weighted(nodes: &[&str]) -> WeightedGraph {
        let mut g = WeightedGraph::new();
        for label in nodes {
            g.add_node(label);
        }
        g
    }

    fn distance_to<'a>(distances: &[ShortestDistance<'a>], label: &str) -> f64 {
        distances
            .iter()
            .find(|d| d.label == label)
            .map(|d| d.distance)
            .unwrap()
    }

    #[test]
    fn detour_beats_direct_edge() {
        let mut g = weighted(&["s", "a", "b"]);
        g.add_directed_edge("s", "a", 1.0).unwrap();
        g.add_directed_edge("s", "b", 4.0).unwrap();
        g.add_directed_edge("a", "b", 1.0).unwrap();

        let distances = g.dijkstra("s").unwrap();
        assert_eq!(distances.len(), 2);
        assert_eq!(distance_to(&distances, "a"), 1.0);
        assert_eq!(distance_to(&distances, "b"), 2.0);
    }

    #[test]
    fn unreachable_nodes_report_infinity() {
        let mut g = weighted(&["s", "a", "island"]);
        g.add_directed_edge("s", "a", 1.0).unwrap();

        let distances = g.dijkstra("s").unwrap();
        assert_eq!(distance_to(&distances, "island"), f64::INFINITY);
    }

    #[test]
    fn unknown_source() {
        let g = weighted(&["a"]);
        assert_eq!(
            g.dijkstra("nope").unwrap_err(),
            GraphError::NodeNotFound("nope".to_owned())
        );
    }

    #[test]
    fn undirected_edges_relax_both_ways() {
        let mut g = weighted(&["a", "b", "c"]);
        g.add_undirected_edge("a", "b", 2.0).unwrap();
        g.add_undirected_edge("b", "c", 3.0).unwrap();

        let from_c = g.dijkstra("c").unwrap();
        assert_eq!(distance_to(&from_c, "a"), 5.0);
        assert_eq!(distance_to(&from_c, "b"), 3.0);
    }

    #[test]
    fn source_is_excluded_and_order_is_stable() {
        let mut g = weighted(&["b", "s", "a"]);
        g.add_directed_edge("s", "a", 1.0).unwrap();
        g.add_directed_edge("s", "b", 1.0).unwrap();

        let labels: Vec<&str> = g.dijkstra("s").unwrap().iter().map(|d| d.label).collect();
        assert_eq!(labels, vec!["b", "a"]);
    }

    #[test]
    fn longer_path_with_stale_entries() {
        // b is enqueued at 10 first, then relaxed down to 3; the stale
        // 10-entry must be ignored when popped
        let mut g = weighted(&["s", "a", "b", "t"]);
        g.add_directed_edge("s", "b", 10.0).unwrap();
        g.add_directed_edge("s", "a", 1.0).unwrap();
        g.add_directed_edge("a", "b", 2.0).unwrap();
        g.add_directed_edge("b", "t", 1.0).unwrap();

        let distances = g.dijkstra("s").unwrap();
        assert_eq!(distance_to(&distances, "b"), 3.0);
        assert_eq!(distance_to(&distances, "t"), 4.0);
    }
}
