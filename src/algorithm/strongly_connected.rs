use crate::graph::*;

/// Strongly connected components by Tarjan's algorithm.
pub trait StronglyConnected
where
    Self: QueryableGraph + Sized,
{
    /// Partitions the vertex set into strongly connected components.
    ///
    /// Roots are taken in vertex-iteration order and successors in
    /// adjacency-insertion order, so the traversal is deterministic.
    /// Components are emitted as each root closes, which is reverse
    /// topological order of the condensed graph.
    /// Runs in O(|V| + |E|) with an explicit work stack, so deep graphs do
    /// not exhaust the native call stack.
    fn tarjan(&self) -> Vec<Vec<Self::Vertex>> {
        let mut state = TarjanState::new(self.vertex_size());
        let mut components = vec![];
        for root in self.iter_vertices() {
            if state.indices[root.to_raw()].is_none() {
                strong_connect(self, root, &mut state, &mut components);
            }
        }
        components
    }
}

impl<G: QueryableGraph> StronglyConnected for G {}

struct TarjanState {
    indices: Vec<Option<usize>>,
    low: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<VertexId>,
    next_index: usize,
}

impl TarjanState {
    fn new(n: usize) -> Self {
        Self {
            indices: vec![None; n],
            low: vec![0; n],
            on_stack: vec![false; n],
            stack: vec![],
            next_index: 0,
        }
    }

    fn open(&mut self, vert: VertexId) {
        let v = vert.to_raw();
        self.indices[v] = Some(self.next_index);
        self.low[v] = self.next_index;
        self.next_index += 1;
        self.stack.push(vert);
        self.on_stack[v] = true;
    }
}

/// One DFS from `root`, resumable frames of `(vertex, successor cursor)` on
/// an explicit work stack.
fn strong_connect<G>(
    graph: &G,
    root: VertexId,
    state: &mut TarjanState,
    components: &mut Vec<Vec<G::Vertex>>,
) where
    G: QueryableGraph,
{
    let mut work: Vec<(VertexId, Box<dyn Iterator<Item = VertexId> + '_>)> = vec![];
    state.open(root);
    work.push((root, graph.out_neighbors(&root)));

    loop {
        let (vert, step) = match work.last_mut() {
            None => break,
            Some((vert, succs)) => (*vert, succs.next()),
        };
        let v = vert.to_raw();
        match step {
            Some(succ) => {
                let s = succ.to_raw();
                if state.indices[s].is_none() {
                    state.open(succ);
                    work.push((succ, graph.out_neighbors(&succ)));
                } else if state.on_stack[s] {
                    state.low[v] = state.low[v].min(state.indices[s].unwrap());
                }
                // successors already popped off the stack sit in a closed
                // component and are ignored
            }
            None => {
                work.pop();
                if let Some((parent, _)) = work.last() {
                    let p = parent.to_raw();
                    state.low[p] = state.low[p].min(state.low[v]);
                }
                if state.low[v] == state.indices[v].unwrap() {
                    // vert is a component root: unwind the traversal stack
                    // down to it, inclusive
                    let mut component = vec![];
                    loop {
                        let popped = state.stack.pop().unwrap();
                        state.on_stack[popped.to_raw()] = false;
                        component.push(graph.vertex_by_id(&popped).unwrap().clone());
                        if popped == vert {
                            break;
                        }
                    }
                    components.push(component);
                }
            }
        }
    }
}
