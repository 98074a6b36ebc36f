/// ID for vertices, which are essentially `usize`.
///
/// Ids are handed out densely in insertion order, so a graph with `n`
/// vertices uses exactly the ids `0..n`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }
}
