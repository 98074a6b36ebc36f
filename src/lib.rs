//! Labeled graphs and their classical algorithms.
//!
//! Graphs in this crate own a vertex set fixed at construction time.
//! Callers address vertices by their own labels (any `Hash + Eq + Clone`
//! type, typically string-like keys); internally every label is interned
//! into a dense [graph::VertexId] so that algorithms can keep their state
//! in plain arrays and copy ids around freely.
//!
//! Two container variants are provided:
//!
//! *   [graph::DirectedGraph], whose adjacency entries are bare neighbor
//!     ids, and
//! *   [graph::WeightedGraph], an undirected graph whose entries carry a
//!     weight and are stored symmetrically in both endpoint rows.
//!
//! On top of the containers live three algorithms, each an extension trait
//! implemented for every graph exposing the required queries:
//!
//! *   [algorithm::ShortestPaths] — single-source shortest paths (Dijkstra),
//! *   [algorithm::MinimumSpanningTree] — minimum spanning tree/forest
//!     (Kruskal, driven by a [disjoint_set::DisjointSet]),
//! *   [algorithm::StronglyConnected] — strongly connected components
//!     (Tarjan).

pub mod algorithm;
pub mod disjoint_set;
mod error;
pub use self::error::*;
pub mod graph;
