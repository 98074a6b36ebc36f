//! Containers for directed and weighted undirected graphs over labeled vertices.
//!
//! # Labels and `VertexId`
//!
//! Callers work with their own vertex labels.
//! Internally every label is interned into a [VertexId], which is
//! essentially a `usize` index into dense per-vertex storage.
//! Algorithm authors may feel free to copy and store these ids;
//! translation back to labels happens only at result boundaries.
//!
//! # Capability traits
//!
//! Rather than one fat graph interface, each concern has its own trait:
//! [QueryableGraph] for read access, [EdgeInsertable] and
//! [DualEdgeInsertable] for directed edges, [WeightedEdgeInsertable] and
//! [WeightedQueryableGraph] for the weighted variant.
//! Algorithms bound themselves to the smallest trait they need.

mod vertex;
pub use self::vertex::*;
mod r#trait;
pub use self::r#trait::*;
mod storage;
pub(crate) use self::storage::*;
mod directed;
pub use self::directed::*;
mod weighted;
pub use self::weighted::*;

pub use crate::error::{GraphError, Result};
