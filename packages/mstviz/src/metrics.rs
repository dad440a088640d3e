//! Reduction of completed runs into side-by-side comparison figures.
//!
//! Everything here is a pure function of the runs it is given: nothing is
//! cached and no trace is touched.

use std::cmp::Ordering;

use serde::Serialize;

use crate::core::{NodeKey, Weight};
use crate::graph::Graph;
use crate::result::Run;
use crate::trace::Algorithm;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunMetrics<W> {
    pub algorithm: Algorithm,
    pub total_weight: W,
    pub accepted_edges: usize,
    pub rejected_edges: usize,
    pub step_count: usize,
    pub iterations: usize,
    pub edge_comparisons: usize,
    pub elapsed_ms: f64,
    pub spanning_tree: bool,
    pub reached: usize,
}

/// Size and weight of the input graph, for the header rows of a comparison.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphSummary<W> {
    pub nodes: usize,
    pub edges: usize,
    pub total_weight: W,
    pub components: usize,
}

impl<W: Weight> GraphSummary<W> {
    pub fn of<K: NodeKey>(graph: &Graph<K, W>) -> Self {
        Self {
            nodes: graph.order(),
            edges: graph.size(),
            total_weight: graph.total_weight(),
            components: graph.component_count(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Comparison<W> {
    pub entries: Vec<RunMetrics<W>>,
    /// Indices into `entries`, lightest total first (ties keep input order).
    pub by_weight: Vec<usize>,
    /// Indices into `entries`, shortest trace first (ties keep input order).
    pub by_steps: Vec<usize>,
    /// All totals compare equal. Floating point totals are compared exactly.
    pub weights_agree: bool,
    pub graph: Option<GraphSummary<W>>,
}

impl<W: Weight> Comparison<W> {
    pub fn with_graph<K: NodeKey>(mut self, graph: &Graph<K, W>) -> Self {
        self.graph = Some(GraphSummary::of(graph));
        self
    }

    pub fn lightest(&self) -> Option<&RunMetrics<W>> {
        self.by_weight.first().map(|&i| &self.entries[i])
    }

    pub fn fewest_steps(&self) -> Option<&RunMetrics<W>> {
        self.by_steps.first().map(|&i| &self.entries[i])
    }

    pub fn get(&self, algorithm: Algorithm) -> Option<&RunMetrics<W>> {
        self.entries.iter().find(|m| m.algorithm == algorithm)
    }
}

pub fn summarize<K, W>(run: &Run<K, W>) -> RunMetrics<W>
where
    K: NodeKey,
    W: Weight,
{
    let accepted = run.trace.accepted_count();
    RunMetrics {
        algorithm: run.algorithm(),
        total_weight: run.result.total_weight,
        accepted_edges: accepted,
        rejected_edges: run.trace.len() - accepted,
        step_count: run.trace.len(),
        iterations: run.stats.iterations,
        edge_comparisons: run.stats.edge_comparisons,
        elapsed_ms: run.stats.elapsed.as_secs_f64() * 1000.0,
        spanning_tree: run.result.is_spanning_tree(),
        reached: run.result.coverage.reached,
    }
}

pub fn compare<K, W>(runs: &[&Run<K, W>]) -> Comparison<W>
where
    K: NodeKey,
    W: Weight,
{
    let entries: Vec<RunMetrics<W>> = runs.iter().map(|run| summarize(run)).collect();

    let mut by_weight: Vec<usize> = (0..entries.len()).collect();
    by_weight.sort_by(|&a, &b| {
        entries[a]
            .total_weight
            .partial_cmp(&entries[b].total_weight)
            .unwrap_or(Ordering::Equal)
    });

    let mut by_steps: Vec<usize> = (0..entries.len()).collect();
    by_steps.sort_by_key(|&i| entries[i].step_count);

    let weights_agree = entries
        .windows(2)
        .all(|pair| pair[0].total_weight == pair[1].total_weight);

    Comparison {
        entries,
        by_weight,
        by_steps,
        weights_agree,
        graph: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{kruskal_mst, prim_mst};

    fn triangle() -> Graph<&'static str, i32> {
        Graph::from_edges([("a", "b", 1), ("b", "c", 2), ("a", "c", 3)]).unwrap()
    }

    #[test]
    fn test_summarize_counts_decisions() {
        let graph = triangle();
        let run = kruskal_mst(&graph).unwrap();
        let metrics = summarize(&run);
        assert_eq!(metrics.algorithm, Algorithm::Kruskal);
        assert_eq!(metrics.total_weight, 3);
        assert_eq!(metrics.accepted_edges, 2);
        assert_eq!(metrics.rejected_edges, 1);
        assert_eq!(metrics.step_count, 3);
        assert_eq!(metrics.iterations, 3);
        assert!(metrics.spanning_tree);
        assert_eq!(metrics.reached, 3);
    }

    #[test]
    fn test_compare_orders_by_steps_and_weight() {
        let graph = triangle();
        let kruskal = kruskal_mst(&graph).unwrap();
        let prim = prim_mst(&graph, None).unwrap();

        let comparison = compare(&[&kruskal, &prim]).with_graph(&graph);
        assert!(comparison.weights_agree);
        assert_eq!(comparison.by_weight, vec![0, 1]);
        assert_eq!(comparison.by_steps, vec![1, 0]);
        assert_eq!(comparison.fewest_steps().unwrap().algorithm, Algorithm::Prim);
        assert_eq!(comparison.lightest().unwrap().algorithm, Algorithm::Kruskal);
        assert_eq!(comparison.get(Algorithm::Prim).unwrap().step_count, 2);

        let summary = comparison.graph.unwrap();
        assert_eq!(summary.nodes, 3);
        assert_eq!(summary.edges, 3);
        assert_eq!(summary.total_weight, 6);
        assert_eq!(summary.components, 1);
    }

    #[test]
    fn test_partial_prim_run_disagrees_with_forest() {
        let graph = Graph::<&str, i32>::from_edges([("a", "b", 1), ("c", "d", 2)]).unwrap();
        let kruskal = kruskal_mst(&graph).unwrap();
        let prim = prim_mst(&graph, None).unwrap();

        let comparison = compare(&[&kruskal, &prim]);
        assert!(!comparison.weights_agree);
        assert_eq!(comparison.by_weight, vec![1, 0]);
        assert!(!comparison.entries[0].spanning_tree);
        assert_eq!(comparison.entries[1].reached, 2);
    }

    #[test]
    fn test_compare_nothing() {
        let comparison = compare::<&str, i32>(&[]);
        assert!(comparison.entries.is_empty());
        assert!(comparison.weights_agree);
        assert!(comparison.lightest().is_none());
    }
}
