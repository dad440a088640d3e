//! Disjoint Set Union (DSU) / Union-Find over arbitrary hashable elements.

use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexSet;

use crate::error::{Error, Result};

/// Union by rank with path compression. Elements must be registered with
/// [`UnionFind::make`] before they can be queried.
#[derive(Clone, Debug)]
pub struct UnionFind<T>
where
    T: Clone + Eq + Hash + Debug,
{
    elements: IndexSet<T>,
    parent: Vec<usize>,
    rank: Vec<usize>,
    sets: usize,
}

impl<T> Default for UnionFind<T>
where
    T: Clone + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> UnionFind<T>
where
    T: Clone + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: IndexSet::with_capacity(capacity),
            parent: Vec::with_capacity(capacity),
            rank: Vec::with_capacity(capacity),
            sets: 0,
        }
    }

    /// Registers `item` as a singleton set. Returns false if it was already registered.
    pub fn make(&mut self, item: T) -> bool {
        let (index, inserted) = self.elements.insert_full(item);
        if inserted {
            self.parent.push(index);
            self.rank.push(0);
            self.sets += 1;
        }
        inserted
    }

    /// Canonical representative of the set containing `item`.
    pub fn find(&mut self, item: &T) -> Result<T> {
        let index = self.index_of(item)?;
        let root = self.root(index);
        Ok(self.elements[root].clone())
    }

    /// Merges the sets of `a` and `b`. Returns false when they already share a set.
    pub fn union(&mut self, a: &T, b: &T) -> Result<bool> {
        let i = self.index_of(a)?;
        let j = self.index_of(b)?;
        Ok(self.link(i, j))
    }

    pub fn same_set(&mut self, a: &T, b: &T) -> Result<bool> {
        let i = self.index_of(a)?;
        let j = self.index_of(b)?;
        Ok(self.root(i) == self.root(j))
    }

    /// Number of registered elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of disjoint sets currently tracked.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    fn index_of(&self, item: &T) -> Result<usize> {
        self.elements
            .get_index_of(item)
            .ok_or_else(|| Error::unknown_node(item))
    }

    /// Walks up to the root, then repoints every node on the path at it.
    fn root(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = i;
        while node != root {
            node = std::mem::replace(&mut self.parent[node], root);
        }
        root
    }

    fn link(&mut self, i: usize, j: usize) -> bool {
        let (mut high, mut low) = (self.root(i), self.root(j));
        if high == low {
            return false;
        }
        if self.rank[high] < self.rank[low] {
            std::mem::swap(&mut high, &mut low);
        }
        self.parent[low] = high;
        if self.rank[high] == self.rank[low] {
            self.rank[high] += 1;
        }
        self.sets -= 1;
        true
    }
}
