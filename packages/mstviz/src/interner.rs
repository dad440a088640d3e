//! Node interner mapping user keys to dense `NodeId`s.

use crate::core::{NodeId, NodeKey};
use indexmap::IndexSet;

/// Insertion-ordered key set. The position of a key is its `NodeId`;
/// re-interning an existing key returns the id it already has.
#[derive(Clone, Debug)]
pub struct NodeInterner<K>
where
    K: NodeKey,
{
    keys: IndexSet<K>,
}

impl<K> Default for NodeInterner<K>
where
    K: NodeKey,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> NodeInterner<K>
where
    K: NodeKey,
{
    pub fn new() -> Self {
        Self {
            keys: IndexSet::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: IndexSet::with_capacity(capacity),
        }
    }

    pub fn intern(&mut self, key: K) -> NodeId {
        let (index, _) = self.keys.insert_full(key);
        NodeId(index)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Key of an id handed out by this interner. Panics on a foreign id.
    pub fn get(&self, id: NodeId) -> &K {
        &self.keys[id.0]
    }

    pub fn get_id(&self, key: &K) -> Option<NodeId> {
        self.keys.get_index_of(key).map(NodeId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &K)> {
        self.keys.iter().enumerate().map(|(i, k)| (NodeId(i), k))
    }

    /// Id of the smallest key by `Ord`, if any.
    pub fn min_id(&self) -> Option<NodeId> {
        self.iter().min_by(|(_, a), (_, b)| a.cmp(b)).map(|(id, _)| id)
    }
}
