use crate::disjoint_set::DisjointSet;
use crate::graph::*;

/// Minimum spanning tree by Kruskal's algorithm.
///
/// There is no connectivity precondition: on a disconnected graph the
/// result is a minimum spanning forest, one tree per component.
pub trait MinimumSpanningTree
where
    Self: WeightedQueryableGraph + Sized,
{
    /// Selects a minimum spanning forest, cheapest edges first.
    ///
    /// Every vertex is registered in `sets` (callers normally pass a fresh
    /// [DisjointSet]); an edge is accepted iff its endpoints are still in
    /// different sets, so accepted edges never close a cycle.
    /// Ties in weight follow the canonical order of
    /// [WeightedQueryableGraph::get_edges].
    fn kruskal(
        &self,
        sets: &mut DisjointSet<Self::Vertex>,
    ) -> Result<Vec<WeightedEdge<Self::Vertex, Self::Weight>>>
    where
        Self::Weight: Ord,
    {
        for vid in self.iter_vertices() {
            sets.make_set(self.vertex_by_id(&vid).unwrap().clone());
        }
        let mut forest = vec![];
        for edge in self.get_edges() {
            let root_a = sets.find(&edge.source)?;
            let root_b = sets.find(&edge.sink)?;
            if root_a != root_b {
                sets.merge(&edge.source, &edge.sink)?;
                forest.push(edge);
            }
        }
        Ok(forest)
    }
}

impl<G: WeightedQueryableGraph> MinimumSpanningTree for G {}
