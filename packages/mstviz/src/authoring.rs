//! Graph authoring helpers: random graphs, random weights and the
//! `(u,v,w),(u,v,w)` edge-list notation.

use std::ops::RangeInclusive;

use rand::Rng;
use rand::seq::index;
use serde::{Deserialize, Serialize};

use crate::core::NodeKey;
use crate::error::{Error, Result};
use crate::graph::Graph;

const EDGE_LIST_FORMAT: &str = "use (u,v) or (u,v,weight), e.g. (1,2,19),(2,3,15)";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomGraphConfig {
    pub min_nodes: usize,
    pub max_nodes: usize,
    /// Extra edge attempts per node, on top of the connecting chain.
    pub extra_edge_ratio: f64,
    pub min_weight: i64,
    pub max_weight: i64,
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self {
            min_nodes: 5,
            max_nodes: 27,
            extra_edge_ratio: 0.5,
            min_weight: 1,
            max_weight: 100,
        }
    }
}

impl RandomGraphConfig {
    /// Fixed node count, other settings default.
    pub fn with_nodes(nodes: usize) -> Self {
        Self {
            min_nodes: nodes,
            max_nodes: nodes,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_nodes == 0 {
            return Err(Error::InvalidConfig("min_nodes must be at least 1".into()));
        }
        if self.min_nodes > self.max_nodes {
            return Err(Error::InvalidConfig(format!(
                "node range {}..={} is empty",
                self.min_nodes, self.max_nodes
            )));
        }
        if !(self.extra_edge_ratio >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "extra_edge_ratio must be non-negative, got {}",
                self.extra_edge_ratio
            )));
        }
        if self.min_weight > self.max_weight {
            return Err(Error::InvalidConfig(format!(
                "weight range {}..={} is empty",
                self.min_weight, self.max_weight
            )));
        }
        Ok(())
    }

    pub fn weight_range(&self) -> RangeInclusive<i64> {
        self.min_weight..=self.max_weight
    }
}

/// Connected random graph on nodes `0..n`: a chain through every node plus
/// `floor(n * extra_edge_ratio)` attempts at extra edges between distinct nodes.
pub fn random_graph<R>(rng: &mut R, config: &RandomGraphConfig) -> Result<Graph<usize, i64>>
where
    R: Rng + ?Sized,
{
    config.validate()?;
    let n = rng.gen_range(config.min_nodes..=config.max_nodes);
    let weights = config.weight_range();

    let mut graph = Graph::with_node_capacity(n);
    for i in 0..n {
        graph.add_node(i);
    }
    for i in 1..n {
        graph.add_edge(i - 1, i, rng.gen_range(weights.clone()))?;
    }

    let extra = (n as f64 * config.extra_edge_ratio) as usize;
    if n >= 2 {
        for _ in 0..extra {
            let pick = index::sample(rng, n, 2);
            let (u, v) = (pick.index(0), pick.index(1));
            let (Some(a), Some(b)) = (graph.node_id(&u), graph.node_id(&v)) else {
                continue;
            };
            if graph.edge_between(a, b).is_none() {
                graph.add_edge_by_id(a, b, rng.gen_range(weights.clone()))?;
            }
        }
    }

    tracing::debug!(nodes = graph.order(), edges = graph.size(), "random graph generated");
    Ok(graph)
}

/// Overwrites every edge weight with a uniform draw from `range`.
pub fn assign_random_weights<K, R>(
    graph: &mut Graph<K, i64>,
    rng: &mut R,
    range: RangeInclusive<i64>,
) -> Result<()>
where
    K: NodeKey,
    R: Rng + ?Sized,
{
    if range.is_empty() {
        return Err(Error::InvalidConfig(format!(
            "weight range {}..={} is empty",
            range.start(),
            range.end()
        )));
    }
    graph.reweight(|_, _| rng.gen_range(range.clone()))
}

pub type ParsedEdge = (usize, usize, Option<i64>);

/// Parses `(u,v)` / `(u,v,w)` tuples separated by commas. Whitespace is ignored,
/// nodes must lie in `0..order` and weights must be positive.
pub fn parse_edge_list(text: &str, order: usize) -> Result<Vec<ParsedEdge>> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Ok(Vec::new());
    }
    let inner = compact
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| Error::Parse(EDGE_LIST_FORMAT.into()))?;

    inner
        .split("),(")
        .map(|tuple| parse_tuple(tuple, order))
        .collect()
}

fn parse_tuple(tuple: &str, order: usize) -> Result<ParsedEdge> {
    let parts: Vec<&str> = tuple.split(',').collect();
    if parts.len() != 2 && parts.len() != 3 {
        return Err(Error::Parse(EDGE_LIST_FORMAT.into()));
    }

    let node = |s: &str| -> Result<usize> {
        let node: usize = s.parse().map_err(|_| Error::Parse(EDGE_LIST_FORMAT.into()))?;
        if node >= order {
            return Err(Error::NodeOutOfRange { node, order });
        }
        Ok(node)
    };
    let u = node(parts[0])?;
    let v = node(parts[1])?;

    let weight = match parts.get(2) {
        Some(raw) => {
            let w: i64 = raw
                .parse()
                .map_err(|_| Error::Parse(EDGE_LIST_FORMAT.into()))?;
            if w <= 0 {
                return Err(Error::NonPositiveWeight(raw.to_string()));
            }
            Some(w)
        }
        None => None,
    };
    Ok((u, v, weight))
}

/// Graph on nodes `0..order` from parsed edges; unweighted edges get `default_weight`.
pub fn graph_from_edge_list(
    order: usize,
    edges: &[ParsedEdge],
    default_weight: i64,
) -> Result<Graph<usize, i64>> {
    Graph::from_nodes_and_edges(
        0..order,
        edges
            .iter()
            .map(|&(u, v, w)| (u, v, w.unwrap_or(default_weight))),
    )
}
