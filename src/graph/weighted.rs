use crate::graph::*;
use ahash::RandomState;
use std::collections::HashSet;
use std::hash::Hash;

/// One canonical undirected edge as reported by
/// [WeightedQueryableGraph::get_edges].
///
/// `source` is whichever endpoint was encountered first while scanning
/// vertices in id order; for an undirected edge the roles are otherwise
/// interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedEdge<V, W> {
    pub source: V,
    pub sink: V,
    pub weight: W,
}

/// An undirected graph with weighted edges over caller-supplied labels.
///
/// Each call to `add_edge(a, b, w)` appends the `(neighbor, weight)` pair
/// to both endpoint rows, modeling a single undirected edge as two
/// directional views.
#[derive(Clone)]
pub struct WeightedGraph<V, W>
where
    V: Hash + Eq + Clone,
    W: Copy,
{
    storage: AdjacencyStorage<V, (VertexId, W)>,
}

impl<V, W> WeightedGraph<V, W>
where
    V: Hash + Eq + Clone,
    W: Copy,
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

    /// Iterates over `(neighbor label, weight)` pairs of `vert` in insertion
    /// order.
    ///
    /// Fails with [GraphError::UndefinedVertex] if `vert` is absent.
    pub fn get_neighbors(
        &self,
        vert: &V,
    ) -> Result<Box<dyn Iterator<Item = (&V, W)> + '_>> {
        let vid = self.storage.resolve(vert)?;
        let it = self
            .storage
            .row(&vid)
            .iter()
            .map(|(nid, w)| (self.storage.label(nid).unwrap(), *w));
        Ok(Box::new(it))
    }
}

impl<V, W> Default for WeightedGraph<V, W>
where
    V: Hash + Eq + Clone,
    W: Copy,
{
    fn default() -> Self {
        Self {
            storage: AdjacencyStorage::new(),
        }
    }
}

impl<V, W> QueryableGraph for WeightedGraph<V, W>
where
    V: Hash + Eq + Clone,
    W: Copy,
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
        Box::new(self.storage.row(vid).iter().map(|(nid, _)| *nid))
    }
}

impl<V, W> WeightedEdgeInsertable for WeightedGraph<V, W>
where
    V: Hash + Eq + Clone,
    W: Copy,
{
    type Weight = W;

    fn add_edge(&mut self, a: &Self::Vertex, b: &Self::Vertex, weight: W) -> Result<()> {
        let aid = self.storage.resolve(a)?;
        let bid = self.storage.resolve(b)?;
        self.storage.push_entry(aid, (bid, weight));
        self.storage.push_entry(bid, (aid, weight));
        Ok(())
    }
}

impl<V, W> WeightedQueryableGraph for WeightedGraph<V, W>
where
    V: Hash + Eq + Clone,
    W: Copy,
{
    type Weight = W;

    fn out_weighted_neighbors(
        &self,
        vid: &VertexId,
    ) -> Box<dyn Iterator<Item = (VertexId, W)> + '_> {
        Box::new(self.storage.row(vid).iter().copied())
    }

    fn get_edges(&self) -> Vec<WeightedEdge<V, W>>
    where
        W: Ord,
    {
        let mut seen: HashSet<(VertexId, VertexId), RandomState> =
            HashSet::with_hasher(RandomState::new());
        let mut edges = vec![];
        for vid in self.storage.iter_ids() {
            for (nid, weight) in self.storage.row(&vid) {
                let key = if vid <= *nid { (vid, *nid) } else { (*nid, vid) };
                if seen.insert(key) {
                    edges.push(WeightedEdge {
                        source: self.storage.label(&vid).unwrap().clone(),
                        sink: self.storage.label(nid).unwrap().clone(),
                        weight: *weight,
                    });
                }
            }
        }
        // stable sort: equal weights keep their encounter order
        edges.sort_by(|x, y| x.weight.cmp(&y.weight));
        edges
    }
}

impl<V, W> std::fmt::Debug for WeightedGraph<V, W>
where
    V: Hash + Eq + Clone + std::fmt::Debug,
    W: Copy + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "WeightedGraph {{")?;
        for vid in self.storage.iter_ids() {
            writeln!(f, "{:?}:", self.storage.label(&vid).unwrap())?;
            for (nid, w) in self.storage.row(&vid) {
                writeln!(f, "  -- {:?} -> {:?}", w, self.storage.label(nid).unwrap())?;
            }
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}
