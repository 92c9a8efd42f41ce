use thiserror::Error;

/// Failures surfaced by graph construction and algorithms.
///
/// Every failure is local and recoverable; no operation panics on bad caller
/// input that can only be detected at run time (unknown labels, cyclic input
/// to an acyclic-only algorithm). Capabilities that a variant does not support
/// are absent from its type instead of failing here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A label passed to an operation does not exist in the graph.
    #[error("node with label `{0}` not found in the graph")]
    NodeNotFound(String),

    /// Topological sort was requested on a graph with a cycle.
    #[error("graph contains a cycle")]
    CycleDetected,
}

pub type Result<T> = std::result::Result<T, GraphError>;
