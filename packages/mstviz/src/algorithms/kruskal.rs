use std::cmp::Ordering;
use std::time::Instant;

use crate::{
    Algorithm, Coverage, Decision, EdgeId, Error, Graph, MstAlgorithm, MstResult, NodeKey,
    Result, Run, RunStats, Trace, UnionFind, Weight,
};

use super::log_completion;

/// Kruskal's algorithm. Every edge gets exactly one accept/reject step; the
/// scan never stops early, so rejections after the tree is complete still show up.
#[derive(Copy, Clone, Debug, Default)]
pub struct Kruskal;

impl<K, W> MstAlgorithm<K, W> for Kruskal
where
    K: NodeKey,
    W: Weight,
{
    fn algorithm(&self) -> Algorithm {
        Algorithm::Kruskal
    }

    fn run(&self, graph: &Graph<K, W>) -> Result<Run<K, W>> {
        kruskal_mst(graph)
    }
}

pub fn kruskal_mst<K, W>(graph: &Graph<K, W>) -> Result<Run<K, W>>
where
    K: NodeKey,
    W: Weight,
{
    if graph.is_empty() {
        return Err(Error::EmptyGraph);
    }
    let started = Instant::now();
    let mut comparisons = 0;

    let mut edges: Vec<(EdgeId, W)> = graph.edges().map(|(id, e)| (id, e.weight)).collect();

    // Stable: equal weights keep insertion order.
    edges.sort_by(|a, b| {
        comparisons += 1;
        a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal)
    });

    let mut uf = UnionFind::with_capacity(graph.order());
    for id in graph.node_ids() {
        uf.make(id);
    }

    let mut trace = Trace::with_capacity(Algorithm::Kruskal, None, edges.len());
    let mut iterations = 0;

    for (eid, w) in edges {
        iterations += 1;
        comparisons += 1;

        let edge = graph.edge(eid);
        let decision = if uf.union(&edge.u, &edge.v)? {
            Decision::Accepted
        } else {
            Decision::Rejected
        };
        trace.record(
            eid,
            graph.node_key(edge.u).clone(),
            graph.node_key(edge.v).clone(),
            w,
            decision,
        );
    }

    // Isolated nodes count as single-node trees of the forest.
    let coverage = Coverage {
        reached: graph.order(),
        total: graph.order(),
        components: uf.set_count(),
    };
    let result = MstResult::from_trace(&trace, coverage);
    log_completion(&trace, &result);

    Ok(Run {
        trace,
        result,
        stats: RunStats {
            iterations,
            edge_comparisons: comparisons,
            elapsed: started.elapsed(),
        },
    })
}
