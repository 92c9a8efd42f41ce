/*!
Cycle detection for the directed and undirected variants.

Both implementations run the three-color DFS on an explicit stack. The
directed rule is the textbook one: a cycle exists iff some edge leads into a
node that is currently `Visiting` (a back edge to an active ancestor). The
undirected rule additionally has to ignore the arc leading straight back to
the DFS parent, and only that one arc: if two parallel edges connect the same
pair of nodes, the second one is a genuine cycle and is still reported.
*/

use super::{traversal::Frame, *};

impl CycleDetectable for DirectedGraph {
    fn detect_cycle(&self) -> bool {
        let mut states = TraversalStates::new(self.number_of_nodes());
        let mut stack: Vec<Frame> = Vec::new();

        for root in self.vertices() {
            if !states.is_not_started(root) {
                continue;
            }

            states.mark_visiting(root);
            stack.push(Frame::start(root));

            while let Some(frame) = stack.last_mut() {
                let u = frame.node;
                if frame.next < self.degree_of(u) {
                    let v = self.ith_neighbor(u, frame.next);
                    frame.next += 1;

                    if states.is_visiting(v) {
                        // back edge to an active ancestor
                        return true;
                    }
                    if states.is_not_started(v) {
                        states.mark_visiting(v);
                        stack.push(Frame::start(v));
                    }
                } else {
                    states.mark_visited(u);
                    stack.pop();
                }
            }
        }

        false
    }
}

/// A suspended undirected DFS visit; in addition to [`Frame`]'s cursor it
/// remembers the parent node and whether the single arc back to it has
/// already been skipped.
#[derive(Debug, Clone, Copy)]
struct ParentFrame {
    node: Node,
    next: NumNodes,
    parent: Option<Node>,
    parent_skipped: bool,
}

impl ParentFrame {
    fn start(node: Node, parent: Option<Node>) -> Self {
        Self {
            node,
            next: 0,
            parent,
            parent_skipped: false,
        }
    }
}

impl CycleDetectable for UndirectedGraph {
    fn detect_cycle(&self) -> bool {
        let mut states = TraversalStates::new(self.number_of_nodes());
        let mut stack: Vec<ParentFrame> = Vec::new();

        for root in self.vertices() {
            if !states.is_not_started(root) {
                continue;
            }

            states.mark_visiting(root);
            stack.push(ParentFrame::start(root, None));

            while let Some(frame) = stack.last_mut() {
                let u = frame.node;
                if frame.next < self.degree_of(u) {
                    let v = self.ith_neighbor(u, frame.next);
                    frame.next += 1;

                    // skip only the arc we came in through; a second parallel
                    // arc to the parent is a real cycle
                    if frame.parent == Some(v) && !frame.parent_skipped {
                        frame.parent_skipped = true;
                        continue;
                    }

                    if states.is_visiting(v) {
                        return true;
                    }
                    if states.is_not_started(v) {
                        states.mark_visiting(v);
                        stack.push(ParentFrame::start(v, Some(u)));
                    }
                } else {
                    states.mark_visited(u);
                    stack.pop();
                }
            }
        }

        false
    }
}
