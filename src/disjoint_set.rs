//! A union-find forest over labeled elements.
//!
//! Labels are interned into dense slots; parent links and ranks live in
//! plain arrays, so path compression is a sequence of index writes rather
//! than pointer surgery.

use crate::error::*;
use ahash::RandomState;
use bimap::BiHashMap;
use std::hash::Hash;

/// A disjoint-set forest tracking a partition of labeled elements.
///
/// `find` performs path compression and `merge` unions by rank, giving the
/// usual near-constant amortized cost per operation.
/// Note that compression makes even `find` a mutating call; concurrent
/// readers need external synchronization.
#[derive(Clone)]
pub struct DisjointSet<V>
where
    V: Hash + Eq + Clone,
{
    slots: BiHashMap<usize, V, RandomState, RandomState>,
    parents: Vec<usize>,
    ranks: Vec<u8>,
}

impl<V> DisjointSet<V>
where
    V: Hash + Eq + Clone,
{
    pub fn new() -> Self {
        Self {
            slots: BiHashMap::with_hashers(RandomState::new(), RandomState::new()),
            parents: vec![],
            ranks: vec![],
        }
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn contains(&self, elem: &V) -> bool {
        self.slots.contains_right(elem)
    }

    /// Registers `elem` as a singleton set.
    ///
    /// Re-registering an existing label is a no-op, not an error.
    pub fn make_set(&mut self, elem: V) {
        if self.slots.contains_right(&elem) {
            return;
        }
        let slot = self.parents.len();
        self.slots.insert(slot, elem);
        self.parents.push(slot);
        self.ranks.push(0);
    }

    /// Returns the representative label of the set containing `elem`,
    /// compressing the path walked along the way.
    ///
    /// Two labels belong to the same set iff `find` returns the same
    /// representative for both.
    /// Fails with [GraphError::UnknownElement] if `elem` was never
    /// registered.
    pub fn find(&mut self, elem: &V) -> Result<V> {
        let slot = self.slot_of(elem)?;
        let root = self.find_root(slot);
        Ok(self.slots.get_by_left(&root).unwrap().clone())
    }

    /// Merges the sets containing `a` and `b`, linking their roots by rank.
    ///
    /// Merging two members of the same set (including `a == b`) is a no-op.
    /// Fails with [GraphError::UnknownElement] if either label was never
    /// registered.
    pub fn merge(&mut self, a: &V, b: &V) -> Result<()> {
        let slot_a = self.slot_of(a)?;
        let slot_b = self.slot_of(b)?;
        let root_a = self.find_root(slot_a);
        let root_b = self.find_root(slot_b);
        if root_a == root_b {
            return Ok(());
        }
        if self.ranks[root_a] < self.ranks[root_b] {
            self.parents[root_a] = root_b;
        } else if self.ranks[root_a] > self.ranks[root_b] {
            self.parents[root_b] = root_a;
        } else {
            self.parents[root_b] = root_a;
            self.ranks[root_a] = self.ranks[root_a].saturating_add(1);
        }
        Ok(())
    }

    fn slot_of(&self, elem: &V) -> Result<usize> {
        self.slots
            .get_by_right(elem)
            .copied()
            .ok_or(GraphError::UnknownElement)
    }

    /// Two-pass iterative find: locate the root, then repoint every visited
    /// slot directly at it.
    fn find_root(&mut self, mut slot: usize) -> usize {
        let mut root = slot;
        while self.parents[root] != root {
            root = self.parents[root];
        }
        while self.parents[slot] != slot {
            let up = self.parents[slot];
            self.parents[slot] = root;
            slot = up;
        }
        root
    }
}

impl<V> Default for DisjointSet<V>
where
    V: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn singleton_is_its_own_representative() {
        let mut sets = DisjointSet::new();
        sets.make_set("A");
        assert_eq!(sets.find(&"A").unwrap(), "A");
    }

    #[test]
    fn make_set_is_idempotent() {
        let mut sets = DisjointSet::new();
        sets.make_set("A");
        sets.make_set("B");
        sets.merge(&"A", &"B").unwrap();
        sets.make_set("A");
        assert_eq!(sets.len(), 2);
        assert_eq!(sets.find(&"A").unwrap(), sets.find(&"B").unwrap());
    }

    #[test]
    fn merged_labels_share_a_representative() {
        let mut sets = DisjointSet::new();
        sets.make_set("A");
        sets.make_set("B");
        sets.make_set("C");
        sets.merge(&"A", &"B").unwrap();
        assert_eq!(sets.find(&"A").unwrap(), sets.find(&"B").unwrap());
        assert_ne!(sets.find(&"A").unwrap(), sets.find(&"C").unwrap());
        // repeated queries after compression keep answering the same
        assert_eq!(sets.find(&"A").unwrap(), sets.find(&"B").unwrap());
    }

    #[test]
    fn merge_is_idempotent() {
        let mut sets = DisjointSet::new();
        sets.make_set("A");
        sets.make_set("B");
        sets.merge(&"A", &"B").unwrap();
        let snapshot = (sets.find(&"A").unwrap(), sets.find(&"B").unwrap());
        sets.merge(&"A", &"B").unwrap();
        assert_eq!(
            snapshot,
            (sets.find(&"A").unwrap(), sets.find(&"B").unwrap())
        );
    }

    #[test]
    fn merging_an_element_with_itself() {
        let mut sets = DisjointSet::new();
        sets.make_set("A");
        sets.merge(&"A", &"A").unwrap();
        assert_eq!(sets.find(&"A").unwrap(), "A");
    }

    #[test]
    fn unregistered_labels_fail() {
        let mut sets: DisjointSet<&str> = DisjointSet::new();
        sets.make_set("A");
        assert_eq!(sets.find(&"Z").unwrap_err(), GraphError::UnknownElement);
        assert_eq!(
            sets.merge(&"A", &"Z").unwrap_err(),
            GraphError::UnknownElement
        );
        assert_eq!(
            sets.merge(&"Z", &"A").unwrap_err(),
            GraphError::UnknownElement
        );
    }

    #[test]
    fn equal_rank_merge_raises_survivor_rank() {
        // two rank-1 trees merge into one rank-2 tree rooted at the first root
        let mut sets = DisjointSet::new();
        for v in 0..4usize {
            sets.make_set(v);
        }
        sets.merge(&0, &1).unwrap();
        sets.merge(&2, &3).unwrap();
        sets.merge(&0, &2).unwrap();
        for v in 0..4usize {
            assert_eq!(sets.find(&v).unwrap(), 0);
        }
    }

    #[derive(Debug, Clone)]
    struct MergeOps {
        size: usize,
        merges: Vec<(usize, usize)>,
    }

    impl quickcheck::Arbitrary for MergeOps {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            let size = 1 + usize::arbitrary(g) % 24;
            let count = usize::arbitrary(g) % 48;
            let merges = (0..count)
                .map(|_| (usize::arbitrary(g) % size, usize::arbitrary(g) % size))
                .collect();
            Self { size, merges }
        }
    }

    /// Naive oracle: every element carries its class label, merges relabel
    /// the whole class.
    struct RelabelOracle {
        classes: Vec<usize>,
    }

    impl RelabelOracle {
        fn new(size: usize) -> Self {
            Self {
                classes: (0..size).collect(),
            }
        }

        fn merge(&mut self, a: usize, b: usize) {
            let from = self.classes[b];
            let to = self.classes[a];
            for class in self.classes.iter_mut() {
                if *class == from {
                    *class = to;
                }
            }
        }

        fn same(&self, a: usize, b: usize) -> bool {
            self.classes[a] == self.classes[b]
        }
    }

    #[quickcheck]
    fn partition_matches_relabeling_oracle(ops: MergeOps) {
        let mut trial = DisjointSet::new();
        let mut oracle = RelabelOracle::new(ops.size);
        for v in 0..ops.size {
            trial.make_set(v);
        }
        for (a, b) in ops.merges.iter() {
            trial.merge(a, b).unwrap();
            oracle.merge(*a, *b);
        }
        for a in 0..ops.size {
            for b in 0..ops.size {
                let same = trial.find(&a).unwrap() == trial.find(&b).unwrap();
                assert_eq!(same, oracle.same(a, b));
            }
        }
    }
}
