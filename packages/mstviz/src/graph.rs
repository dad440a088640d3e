//! Graph: weighted undirected simple graph (nodes + edges).
//!
//! Each undirected edge is stored once, with an adjacency list per node pointing
//! back into the edge table. Self-loops and parallel edges are rejected when the
//! graph is built, so every runner can rely on the simple-graph invariants.

use std::collections::HashMap;

use serde::Serialize;

use crate::core::{EdgeId, NodeId, NodeKey, Weight, sum_weights};
use crate::error::{Error, Result};
use crate::interner::NodeInterner;
use crate::union_find::UnionFind;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EdgeRecord<W> {
    pub u: NodeId,
    pub v: NodeId,
    pub weight: W,
}

impl<W> EdgeRecord<W> {
    pub fn new(u: NodeId, v: NodeId, weight: W) -> Self {
        EdgeRecord { u, v, weight }
    }

    /// The endpoint opposite to `node`.
    pub fn other(&self, node: NodeId) -> NodeId {
        if self.u == node { self.v } else { self.u }
    }
}

fn pair(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b { (a, b) } else { (b, a) }
}

#[derive(Clone, Debug)]
pub struct Graph<K, W>
where
    K: NodeKey,
{
    nodes: NodeInterner<K>,
    edges: Vec<EdgeRecord<W>>,
    adjacency: Vec<Vec<EdgeId>>,
    pairs: HashMap<(NodeId, NodeId), EdgeId>,
}

impl<K, W> Default for Graph<K, W>
where
    K: NodeKey,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, W> Graph<K, W>
where
    K: NodeKey,
    W: Weight,
{
    pub fn new() -> Self {
        Self::with_node_capacity(0)
    }

    pub fn with_node_capacity(capacity: usize) -> Self {
        Self {
            nodes: NodeInterner::with_capacity(capacity),
            edges: Vec::new(),
            adjacency: Vec::with_capacity(capacity),
            pairs: HashMap::new(),
        }
    }

    /// Builds a graph from weighted edges; endpoints become nodes in first-seen order.
    pub fn from_edges<UK, EI>(edges_iter: EI) -> Result<Self>
    where
        UK: Into<K>,
        EI: IntoIterator<Item = (UK, UK, W)>,
    {
        Self::from_nodes_and_edges(std::iter::empty::<K>(), edges_iter)
    }

    /// Registers `nodes_iter` first (isolated nodes included), then the edges.
    pub fn from_nodes_and_edges<UK, UN, NI, EI>(nodes_iter: NI, edges_iter: EI) -> Result<Self>
    where
        UN: Into<K>,
        UK: Into<K>,
        NI: IntoIterator<Item = UN>,
        EI: IntoIterator<Item = (UK, UK, W)>,
    {
        let mut graph = Self::new();
        for key in nodes_iter {
            graph.add_node(key.into());
        }
        for (from_key, to_key, weight) in edges_iter {
            graph.add_edge(from_key.into(), to_key.into(), weight)?;
        }
        Ok(graph)
    }

    pub fn add_node(&mut self, key: K) -> NodeId {
        let id = self.nodes.intern(key);
        if id.0 == self.adjacency.len() {
            self.adjacency.push(Vec::new());
        }
        id
    }

    /// Adds an undirected edge by key, registering missing endpoints.
    pub fn add_edge(&mut self, a: K, b: K, weight: W) -> Result<EdgeId> {
        if a == b {
            return Err(Error::SelfLoop(format!("{a:?}")));
        }
        let a = self.add_node(a);
        let b = self.add_node(b);
        self.add_edge_by_id(a, b, weight)
    }

    pub fn add_edge_by_id(&mut self, a: NodeId, b: NodeId, weight: W) -> Result<EdgeId> {
        for id in [a, b] {
            if id.0 >= self.order() {
                return Err(Error::unknown_node(&id));
            }
        }
        if a == b {
            return Err(Error::SelfLoop(format!("{:?}", self.node_key(a))));
        }
        if weight.partial_cmp(&weight).is_none() {
            return Err(Error::IncomparableWeight(format!("{weight:?}")));
        }
        if self.pairs.contains_key(&pair(a, b)) {
            return Err(Error::ParallelEdge(
                format!("{:?}", self.node_key(a)),
                format!("{:?}", self.node_key(b)),
            ));
        }

        let id = EdgeId(self.edges.len());
        self.edges.push(EdgeRecord::new(a, b, weight));
        self.adjacency[a.0].push(id);
        self.adjacency[b.0].push(id);
        self.pairs.insert(pair(a, b), id);
        Ok(id)
    }

    /// Number of nodes.
    pub fn order(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_id(&self, key: &K) -> Option<NodeId> {
        self.nodes.get_id(key)
    }

    pub fn node_key(&self, id: NodeId) -> &K {
        self.nodes.get(id)
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.order()).map(NodeId)
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &K)> {
        self.nodes.iter()
    }

    /// Node with the smallest key by `Ord`.
    pub fn min_node(&self) -> Option<NodeId> {
        self.nodes.min_id()
    }

    pub fn edge(&self, id: EdgeId) -> &EdgeRecord<W> {
        &self.edges[id.0]
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &EdgeRecord<W>)> {
        self.edges.iter().enumerate().map(|(i, e)| (EdgeId(i), e))
    }

    pub fn edge_between(&self, a: NodeId, b: NodeId) -> Option<EdgeId> {
        self.pairs.get(&pair(a, b)).copied()
    }

    /// Edges touching `v`, in insertion order.
    pub fn incident_edges(&self, v: NodeId) -> &[EdgeId] {
        &self.adjacency[v.0]
    }

    /// Sum of every edge weight in the graph.
    pub fn total_weight(&self) -> W {
        sum_weights(self.edges.iter().map(|e| e.weight))
    }

    pub fn component_count(&self) -> usize {
        let mut uf = UnionFind::with_capacity(self.order());
        for id in self.node_ids() {
            uf.make(id);
        }
        for edge in &self.edges {
            // endpoints were registered above
            let _ = uf.union(&edge.u, &edge.v);
        }
        uf.set_count()
    }

    /// True for a non-empty graph whose nodes all lie in one component.
    pub fn is_connected(&self) -> bool {
        !self.is_empty() && self.component_count() == 1
    }

    /// Replaces every edge weight with `f(id, edge)`. All new weights are
    /// computed first; if any is incomparable the graph is left untouched.
    pub fn reweight<F>(&mut self, mut f: F) -> Result<()>
    where
        F: FnMut(EdgeId, &EdgeRecord<W>) -> W,
    {
        let weights: Vec<W> = self.edges().map(|(id, edge)| f(id, edge)).collect();
        if let Some(bad) = weights.iter().find(|w| w.partial_cmp(w).is_none()) {
            return Err(Error::IncomparableWeight(format!("{bad:?}")));
        }
        for (edge, weight) in self.edges.iter_mut().zip(weights) {
            edge.weight = weight;
        }
        Ok(())
    }
}
