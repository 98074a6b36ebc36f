use thiserror::Error;

/// Errors reported by the graph containers and the disjoint-set forest.
///
/// Every failure is detected by validation before any mutation happens,
/// so a failed operation leaves its structure unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A vertex with the same label is already in the graph.
    #[error("vertex is already in the graph")]
    DuplicateVertex,
    /// An edge endpoint or queried vertex is not in the graph.
    #[error("vertex is not in the graph")]
    UndefinedVertex,
    /// A disjoint-set operation named a label never registered via `make_set`.
    #[error("element is not registered in the disjoint-set")]
    UnknownElement,
}

pub type Result<T> = std::result::Result<T, GraphError>;
