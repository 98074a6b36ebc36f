use crate::graph::*;
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Add;

/// Single-source shortest paths by Dijkstra's algorithm.
///
/// Precondition: all edge weights are non-negative.
/// This is documented, not checked; negative weights produce unspecified
/// results.
pub trait ShortestPaths
where
    Self: WeightedQueryableGraph + Sized,
{
    /// Computes shortest distances and predecessors from `source` to every
    /// reachable vertex.
    ///
    /// The queue is keyed by vertex with its best-known distance as
    /// priority; relaxation lowers the priority in place, so with
    /// non-negative weights a settled vertex never re-enters the queue and
    /// no separate visited set is needed.
    ///
    /// Fails with [GraphError::UndefinedVertex] if `source` is not a vertex
    /// of the graph.
    fn dijkstra(
        &self,
        source: &Self::Vertex,
    ) -> Result<ShortestPathTree<Self::Vertex, Self::Weight>>
    where
        Self::Weight: Ord + Add<Output = Self::Weight> + Default,
    {
        let src = self
            .id_by_vertex(source)
            .ok_or(GraphError::UndefinedVertex)?;
        let n = self.vertex_size();
        let mut dist: Vec<Option<Self::Weight>> = vec![None; n];
        let mut prev: Vec<Option<VertexId>> = vec![None; n];
        let mut queue: KeyedPriorityQueue<VertexId, Reverse<Self::Weight>, RandomState> =
            KeyedPriorityQueue::with_capacity_and_hasher(n, RandomState::new());

        let zero = Self::Weight::default();
        dist[src.to_raw()] = Some(zero);
        queue.push(src, Reverse(zero));

        while let Some((vert, Reverse(d))) = queue.pop() {
            for (succ, weight) in self.out_weighted_neighbors(&vert) {
                let relaxed = d + weight;
                let improves = match dist[succ.to_raw()] {
                    None => true,
                    Some(cur) => relaxed < cur,
                };
                if improves {
                    dist[succ.to_raw()] = Some(relaxed);
                    prev[succ.to_raw()] = Some(vert);
                    // insert-or-decrease-key
                    queue.push(succ, Reverse(relaxed));
                }
            }
        }

        let mut distances = HashMap::with_capacity_and_hasher(n, RandomState::new());
        let mut predecessors = HashMap::with_hasher(RandomState::new());
        for vid in self.iter_vertices() {
            if let Some(d) = dist[vid.to_raw()] {
                distances.insert(self.vertex_by_id(&vid).unwrap().clone(), d);
            }
            if let Some(p) = prev[vid.to_raw()] {
                predecessors.insert(
                    self.vertex_by_id(&vid).unwrap().clone(),
                    self.vertex_by_id(&p).unwrap().clone(),
                );
            }
        }
        Ok(ShortestPathTree {
            source: source.clone(),
            distances,
            predecessors,
        })
    }
}

impl<G: WeightedQueryableGraph> ShortestPaths for G {}

/// Distances and predecessors computed by [ShortestPaths::dijkstra].
///
/// Vertices missing from the distance map are unreachable from the source;
/// `None` stands in for an infinite distance.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<V, W>
where
    V: Hash + Eq + Clone,
{
    source: V,
    distances: HashMap<V, W, RandomState>,
    predecessors: HashMap<V, V, RandomState>,
}

impl<V, W> ShortestPathTree<V, W>
where
    V: Hash + Eq + Clone,
{
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Shortest distance from the source, or `None` if `vert` is
    /// unreachable.
    /// The source itself is at distance zero.
    pub fn distance(&self, vert: &V) -> Option<W>
    where
        W: Copy,
    {
        self.distances.get(vert).copied()
    }

    /// Previous vertex on a shortest path from the source to `vert`.
    ///
    /// `None` for the source itself and for unreachable vertices.
    pub fn predecessor(&self, vert: &V) -> Option<&V> {
        self.predecessors.get(vert)
    }

    /// Reconstructs a shortest path from the source to `vert` by walking
    /// predecessors backwards, or `None` if `vert` is unreachable.
    pub fn path_to(&self, vert: &V) -> Option<Vec<V>> {
        if !self.distances.contains_key(vert) {
            return None;
        }
        let mut path = vec![vert.clone()];
        let mut cur = vert;
        while let Some(p) = self.predecessors.get(cur) {
            path.push(p.clone());
            cur = p;
        }
        path.reverse();
        Some(path)
    }

    /// Iterates over `(vertex, distance)` pairs of all reached vertices.
    pub fn iter_distances(&self) -> Box<dyn Iterator<Item = (&V, &W)> + '_> {
        Box::new(self.distances.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn single_vertex_graph() {
        let g: WeightedGraph<&str, u32> = WeightedGraph::new(["0"]).unwrap();
        let tree = g.dijkstra(&"0").unwrap();
        assert_eq!(tree.distance(&"0"), Some(0));
        assert_eq!(tree.predecessor(&"0"), None);
        assert_eq!(tree.path_to(&"0"), Some(vec!["0"]));
    }

    #[test]
    fn indirect_path_beats_direct_edge() {
        let mut g = WeightedGraph::new(["0", "1", "2", "3"]).unwrap();
        g.add_edge(&"0", &"1", 33u32).unwrap();
        g.add_edge(&"1", &"2", 12).unwrap();
        g.add_edge(&"0", &"2", 3).unwrap();
        let tree = g.dijkstra(&"0").unwrap();
        assert_eq!(tree.distance(&"0"), Some(0));
        assert_eq!(tree.distance(&"1"), Some(15));
        assert_eq!(tree.distance(&"2"), Some(3));
        // "3" sits in its own component
        assert_eq!(tree.distance(&"3"), None);
        assert_eq!(tree.predecessor(&"3"), None);
        assert_eq!(tree.path_to(&"3"), None);
        assert_eq!(tree.path_to(&"1"), Some(vec!["0", "2", "1"]));
    }

    #[test]
    fn undefined_source_fails() {
        let g: WeightedGraph<&str, u32> = WeightedGraph::new(["0"]).unwrap();
        assert_eq!(g.dijkstra(&"9").unwrap_err(), GraphError::UndefinedVertex);
    }

    #[test]
    fn repeated_runs_agree() {
        let mut g = WeightedGraph::new(["a", "b", "c"]).unwrap();
        g.add_edge(&"a", &"b", 1u32).unwrap();
        g.add_edge(&"b", &"c", 2).unwrap();
        let first = g.dijkstra(&"a").unwrap();
        let second = g.dijkstra(&"a").unwrap();
        for v in ["a", "b", "c"] {
            assert_eq!(first.distance(&v), second.distance(&v));
        }
    }

    #[derive(Debug, Clone)]
    struct RandomWeightedGraph {
        size: usize,
        edges: Vec<(usize, usize, u32)>,
    }

    impl quickcheck::Arbitrary for RandomWeightedGraph {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            let size = 1 + usize::arbitrary(g) % 12;
            let count = usize::arbitrary(g) % 24;
            let edges = (0..count)
                .map(|_| {
                    (
                        usize::arbitrary(g) % size,
                        usize::arbitrary(g) % size,
                        u8::arbitrary(g) as u32,
                    )
                })
                .collect();
            Self { size, edges }
        }
    }

    /// Bellman-Ford-style oracle: relax every undirected edge |V| times.
    fn relaxation_oracle(graph: &RandomWeightedGraph, source: usize) -> Vec<Option<u32>> {
        let mut dist = vec![None; graph.size];
        dist[source] = Some(0u32);
        for _ in 0..graph.size {
            for (a, b, w) in graph.edges.iter() {
                for (from, to) in [(*a, *b), (*b, *a)] {
                    if let Some(d) = dist[from] {
                        let relaxed = d + w;
                        if dist[to].map_or(true, |cur| relaxed < cur) {
                            dist[to] = Some(relaxed);
                        }
                    }
                }
            }
        }
        dist
    }

    #[quickcheck]
    fn distances_match_relaxation_oracle(random: RandomWeightedGraph) {
        let mut g = WeightedGraph::new(0..random.size).unwrap();
        for (a, b, w) in random.edges.iter() {
            g.add_edge(a, b, *w).unwrap();
        }
        let tree = g.dijkstra(&0).unwrap();
        let oracle = relaxation_oracle(&random, 0);
        for v in 0..random.size {
            assert_eq!(tree.distance(&v), oracle[v]);
        }
    }

    #[quickcheck]
    fn predecessor_chains_add_up(random: RandomWeightedGraph) {
        let mut g = WeightedGraph::new(0..random.size).unwrap();
        for (a, b, w) in random.edges.iter() {
            g.add_edge(a, b, *w).unwrap();
        }
        let tree = g.dijkstra(&0).unwrap();
        for v in 0..random.size {
            let Some(path) = tree.path_to(&v) else {
                continue;
            };
            assert_eq!(path.first(), Some(&0));
            assert_eq!(path.last(), Some(&v));
            // every hop must be an actual edge and distances must be the
            // running sum of hop weights
            let mut total = 0u32;
            for hop in path.windows(2) {
                let weight = g
                    .get_neighbors(&hop[0])
                    .unwrap()
                    .filter(|(n, _)| **n == hop[1])
                    .map(|(_, w)| w)
                    .min()
                    .unwrap();
                total += weight;
            }
            assert_eq!(tree.distance(&v), Some(total));
        }
    }
}
