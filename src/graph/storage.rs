use crate::graph::*;
use ahash::RandomState;
use bimap::BiHashMap;
use std::hash::Hash;

/// Shared vertex registry and adjacency storage backing every graph variant.
///
/// Labels are interned into dense [VertexId]s.
/// One adjacency row per vertex, entries kept in insertion order;
/// the entry type `A` is variant-specific.
#[derive(Clone)]
pub(crate) struct AdjacencyStorage<V, A>
where
    V: Hash + Eq + Clone,
{
    labels: BiHashMap<VertexId, V, RandomState, RandomState>,
    rows: Vec<Vec<A>>,
}

impl<V, A> AdjacencyStorage<V, A>
where
    V: Hash + Eq + Clone,
{
    pub(crate) fn new() -> Self {
        Self {
            labels: BiHashMap::with_hashers(RandomState::new(), RandomState::new()),
            rows: vec![],
        }
    }

    /// Interns a fresh label and opens its empty adjacency row.
    pub(crate) fn add_vertex(&mut self, vert: V) -> Result<VertexId> {
        if self.labels.contains_right(&vert) {
            return Err(GraphError::DuplicateVertex);
        }
        let vid = VertexId::new(self.rows.len());
        self.labels.insert(vid, vert);
        self.rows.push(vec![]);
        Ok(vid)
    }

    /// Id of a label that must already be present.
    pub(crate) fn resolve(&self, vert: &V) -> Result<VertexId> {
        self.id(vert).ok_or(GraphError::UndefinedVertex)
    }

    pub(crate) fn id(&self, vert: &V) -> Option<VertexId> {
        self.labels.get_by_right(vert).copied()
    }

    pub(crate) fn label(&self, vid: &VertexId) -> Option<&V> {
        self.labels.get_by_left(vid)
    }

    pub(crate) fn vertex_size(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn iter_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.rows.len()).map(VertexId::new)
    }

    pub(crate) fn row(&self, vid: &VertexId) -> &[A] {
        &self.rows[vid.to_raw()]
    }

    pub(crate) fn push_entry(&mut self, vid: VertexId, entry: A) {
        self.rows[vid.to_raw()].push(entry);
    }
}
