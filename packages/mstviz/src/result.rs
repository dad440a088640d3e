//! MST results and the per-run bundle handed to the presentation layer.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::core::{NodeKey, Weight};
use crate::trace::{Algorithm, Trace};

/// How much of the graph a run spanned.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Coverage {
    /// Nodes covered by the accepted edges' tree(s), isolated nodes included for Kruskal.
    pub reached: usize,
    /// Nodes in the graph.
    pub total: usize,
    /// Connected components of the graph.
    pub components: usize,
}

/// Reportable condition: the result is a forest or a single component's tree,
/// not a spanning tree of the whole graph.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DisconnectedGraph {
    pub reached: usize,
    pub total: usize,
    pub components: usize,
}

impl fmt::Display for DisconnectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reached < self.total {
            write!(
                f,
                "graph is disconnected: tree reaches {} of {} nodes ({} components)",
                self.reached, self.total, self.components
            )
        } else {
            write!(
                f,
                "graph is disconnected: spanning forest of {} components over {} nodes",
                self.components, self.total
            )
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MstResult<K, W> {
    pub edges: Vec<(K, K, W)>,
    pub total_weight: W,
    pub coverage: Coverage,
}

impl<K, W> MstResult<K, W>
where
    K: NodeKey,
    W: Weight,
{
    /// Collects the accepted steps of a completed trace.
    pub fn from_trace(trace: &Trace<K, W>, coverage: Coverage) -> Self {
        Self {
            edges: trace
                .accepted()
                .map(|s| (s.from.clone(), s.to.clone(), s.weight))
                .collect(),
            total_weight: trace.total_weight(),
            coverage,
        }
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// One tree touching every node of the graph.
    pub fn is_spanning_tree(&self) -> bool {
        let c = self.coverage;
        c.total > 0 && c.reached == c.total && c.components == 1
    }

    /// The accepted edges form a forest covering every node (one tree per component).
    pub fn spans_all_nodes(&self) -> bool {
        self.coverage.reached == self.coverage.total
    }

    pub fn warning(&self) -> Option<DisconnectedGraph> {
        let c = self.coverage;
        (c.components > 1 || c.reached < c.total).then_some(DisconnectedGraph {
            reached: c.reached,
            total: c.total,
            components: c.components,
        })
    }
}

/// Counters collected while a runner executes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub iterations: usize,
    pub edge_comparisons: usize,
    pub elapsed: Duration,
}

/// Everything one run produced. Owned by the caller once the runner returns.
#[derive(Clone, Debug, Serialize)]
pub struct Run<K, W> {
    pub trace: Trace<K, W>,
    pub result: MstResult<K, W>,
    pub stats: RunStats,
}

impl<K, W> Run<K, W>
where
    K: NodeKey,
    W: Weight,
{
    pub fn algorithm(&self) -> Algorithm {
        self.trace.algorithm()
    }
}
