use crate::graph::*;
use std::hash::Hash;

/// A directed graph over caller-supplied vertex labels.
///
/// The vertex set is fixed up front: labels arrive through [DirectedGraph::new]
/// or [DirectedGraph::add_vertex] and are never removed.
/// Adjacency entries are bare neighbor ids kept in insertion order, so
/// traversals visit successors exactly in the order edges were added.
#[derive(Clone)]
pub struct DirectedGraph<V>
where
    V: Hash + Eq + Clone,
{
    storage: AdjacencyStorage<V, VertexId>,
}

impl<V> DirectedGraph<V>
where
    V: Hash + Eq + Clone,
{
    /// Creates a graph owning the given vertex set.
    ///
    /// Fails with [GraphError::DuplicateVertex] if any label repeats.
    pub fn new<I>(vertices: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
    {
        let mut res = Self {
            storage: AdjacencyStorage::new(),
        };
        for vert in vertices {
            res.add_vertex(vert)?;
        }
        Ok(res)
    }

    /// Adds one vertex with an empty adjacency row.
    pub fn add_vertex(&mut self, vert: V) -> Result<()> {
        self.storage.add_vertex(vert)?;
        Ok(())
    }

    /// Adds many edges at once, each pair applied as one [EdgeInsertable::add_edge].
    pub fn add_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = (V, V)>,
    {
        for (source, sink) in edges {
            self.add_edge(&source, &sink)?;
        }
        Ok(())
    }

    /// Iterates over the successor labels of `vert` in insertion order.
    ///
    /// Fails with [GraphError::UndefinedVertex] if `vert` is absent.
    pub fn get_neighbors(&self, vert: &V) -> Result<Box<dyn Iterator<Item = &V> + '_>> {
        let vid = self.storage.resolve(vert)?;
        let it = self
            .storage
            .row(&vid)
            .iter()
            .map(|nid| self.storage.label(nid).unwrap());
        Ok(Box::new(it))
    }
}

impl<V> Default for DirectedGraph<V>
where
    V: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self {
            storage: AdjacencyStorage::new(),
        }
    }
}

impl<V> QueryableGraph for DirectedGraph<V>
where
    V: Hash + Eq + Clone,
{
    type Vertex = V;

    fn vertex_size(&self) -> usize {
        self.storage.vertex_size()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.storage.iter_ids())
    }

    fn vertex_by_id(&self, vid: &VertexId) -> Option<&Self::Vertex> {
        self.storage.label(vid)
    }

    fn id_by_vertex(&self, vert: &Self::Vertex) -> Option<VertexId> {
        self.storage.id(vert)
    }

    fn out_neighbors(&self, vid: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.storage.row(vid).iter().copied())
    }
}

impl<V> EdgeInsertable for DirectedGraph<V>
where
    V: Hash + Eq + Clone,
{
    fn add_edge(&mut self, source: &Self::Vertex, sink: &Self::Vertex) -> Result<()> {
        let src = self.storage.resolve(source)?;
        let snk = self.storage.resolve(sink)?;
        self.storage.push_entry(src, snk);
        Ok(())
    }
}

impl<V> DualEdgeInsertable for DirectedGraph<V> where V: Hash + Eq + Clone {}

impl<V> std::fmt::Debug for DirectedGraph<V>
where
    V: Hash + Eq + Clone + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "DirectedGraph {{")?;
        for vid in self.storage.iter_ids() {
            writeln!(f, "{:?}:", self.storage.label(&vid).unwrap())?;
            for nid in self.storage.row(&vid) {
                writeln!(f, "  -> {:?}", self.storage.label(nid).unwrap())?;
            }
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}
