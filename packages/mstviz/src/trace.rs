//! Trace: ordered log of the decisions one MST run made.
//!
//! A trace is built by exactly one runner, step by step, and handed to the
//! caller once the run completes. Steps are never reordered after recording:
//! `steps()[i].index == i` and the order is the order decisions were taken.

use std::fmt;

use serde::Serialize;

use crate::core::{EdgeId, NodeKey, Weight};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Kruskal,
    Prim,
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Kruskal => "Kruskal's",
            Algorithm::Prim => "Prim's",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Accepted,
    Rejected,
}

/// One recorded decision. For Prim, `from` is the already visited endpoint and
/// `to` the node the step adds to the tree.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Step<K, W> {
    pub index: usize,
    pub edge: EdgeId,
    pub from: K,
    pub to: K,
    pub weight: W,
    pub decision: Decision,
    /// Running total of accepted weights, this step included.
    pub total: W,
}

impl<K, W> Step<K, W> {
    pub fn is_accepted(&self) -> bool {
        self.decision == Decision::Accepted
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Trace<K, W> {
    algorithm: Algorithm,
    start: Option<K>,
    steps: Vec<Step<K, W>>,
}

impl<K, W> Trace<K, W>
where
    K: NodeKey,
    W: Weight,
{
    pub(crate) fn new(algorithm: Algorithm, start: Option<K>) -> Self {
        Self {
            algorithm,
            start,
            steps: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(algorithm: Algorithm, start: Option<K>, capacity: usize) -> Self {
        Self {
            algorithm,
            start,
            steps: Vec::with_capacity(capacity),
        }
    }

    /// Appends a decision, carrying the running total forward.
    pub(crate) fn record(
        &mut self,
        edge: EdgeId,
        from: K,
        to: K,
        weight: W,
        decision: Decision,
    ) -> &Step<K, W> {
        let total = match decision {
            Decision::Accepted => self.total_weight() + weight,
            Decision::Rejected => self.total_weight(),
        };
        let index = self.steps.len();
        tracing::debug!(
            algorithm = %self.algorithm,
            index,
            ?from,
            ?to,
            ?weight,
            ?decision,
            "step recorded"
        );
        self.steps.push(Step {
            index,
            edge,
            from,
            to,
            weight,
            decision,
            total,
        });
        &self.steps[index]
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Node the run grew from (Prim only).
    pub fn start(&self) -> Option<&K> {
        self.start.as_ref()
    }

    pub fn steps(&self) -> &[Step<K, W>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step<K, W>> {
        self.steps.iter()
    }

    /// The first `n` steps (all of them if `n` exceeds the length).
    pub fn prefix(&self, n: usize) -> &[Step<K, W>] {
        &self.steps[..n.min(self.steps.len())]
    }

    pub fn accepted(&self) -> impl Iterator<Item = &Step<K, W>> {
        self.steps.iter().filter(|s| s.is_accepted())
    }

    pub fn accepted_count(&self) -> usize {
        self.accepted().count()
    }

    pub fn rejected_count(&self) -> usize {
        self.len() - self.accepted_count()
    }

    pub fn total_weight(&self) -> W {
        self.steps.last().map_or_else(W::zero, |s| s.total)
    }
}

impl<'a, K, W> IntoIterator for &'a Trace<K, W> {
    type Item = &'a Step<K, W>;
    type IntoIter = std::slice::Iter<'a, Step<K, W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
