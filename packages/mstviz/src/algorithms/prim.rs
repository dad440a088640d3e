use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Instant;

use crate::{
    Algorithm, Coverage, Decision, EdgeId, Error, Graph, MstAlgorithm, MstResult, NodeId, NodeKey,
    Result, Run, RunStats, Trace, Weight,
};

use super::log_completion;

/// Prim's algorithm grown from `start`, or from the smallest node key when
/// `start` is `None`. Only the start node's component is spanned.
#[derive(Clone, Debug)]
pub struct Prim<K> {
    pub start: Option<K>,
}

impl<K> Default for Prim<K> {
    fn default() -> Self {
        Self { start: None }
    }
}

impl<K> Prim<K> {
    pub fn starting_at(start: K) -> Self {
        Self { start: Some(start) }
    }
}

impl<K, W> MstAlgorithm<K, W> for Prim<K>
where
    K: NodeKey,
    W: Weight,
{
    fn algorithm(&self) -> Algorithm {
        Algorithm::Prim
    }

    fn run(&self, graph: &Graph<K, W>) -> Result<Run<K, W>> {
        prim_mst(graph, self.start.as_ref())
    }
}

/// Frontier entry. Ordered by weight, then by when the visited endpoint joined
/// the tree, then by the unvisited endpoint's key.
struct Candidate<'g, K, W> {
    weight: W,
    rank: usize,
    key: &'g K,
    edge: EdgeId,
    from: NodeId,
    to: NodeId,
}

impl<K: Ord, W: PartialOrd> Ord for Candidate<'_, K, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Graph construction rejects incomparable weights.
        self.weight
            .partial_cmp(&other.weight)
            .unwrap_or(Ordering::Equal)
            .then(self.rank.cmp(&other.rank))
            .then_with(|| self.key.cmp(other.key))
            .then(self.edge.cmp(&other.edge))
    }
}

impl<K: Ord, W: PartialOrd> PartialOrd for Candidate<'_, K, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, W: PartialOrd> PartialEq for Candidate<'_, K, W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Ord, W: PartialOrd> Eq for Candidate<'_, K, W> {}

struct Growth<K, W> {
    trace: Trace<K, W>,
    reached: usize,
    stats: RunStats,
}

/// Grows one tree from `start`, marking every node it reaches in `visited`.
fn grow<K, W>(graph: &Graph<K, W>, start: NodeId, visited: &mut [bool]) -> Growth<K, W>
where
    K: NodeKey,
    W: Weight,
{
    let started = Instant::now();
    let mut trace = Trace::new(Algorithm::Prim, Some(graph.node_key(start).clone()));
    let mut best: Vec<Option<EdgeId>> = vec![None; graph.order()];
    let mut frontier = BinaryHeap::new();
    let mut iterations = 0;
    let mut comparisons = 0;
    let mut rank = 0;

    visited[start.0] = true;
    let mut reached = 1;
    let mut current = Some(start);

    loop {
        if let Some(node) = current.take() {
            for &eid in graph.incident_edges(node) {
                let edge = graph.edge(eid);
                let to = edge.other(node);
                if visited[to.0] {
                    continue;
                }
                // Replace only with a strictly lighter edge.
                let improves = match best[to.0] {
                    None => true,
                    Some(prev) => edge.weight < graph.edge(prev).weight,
                };
                if improves {
                    best[to.0] = Some(eid);
                    comparisons += 1;
                    frontier.push(Reverse(Candidate {
                        weight: edge.weight,
                        rank,
                        key: graph.node_key(to),
                        edge: eid,
                        from: node,
                        to,
                    }));
                }
            }
        }

        let Some(Reverse(candidate)) = frontier.pop() else {
            break;
        };
        iterations += 1;
        comparisons += 1;

        // Stale entries: node already in the tree, or a lighter edge replaced this one.
        if visited[candidate.to.0] || best[candidate.to.0] != Some(candidate.edge) {
            continue;
        }

        visited[candidate.to.0] = true;
        reached += 1;
        rank += 1;
        trace.record(
            candidate.edge,
            graph.node_key(candidate.from).clone(),
            candidate.key.clone(),
            candidate.weight,
            Decision::Accepted,
        );
        current = Some(candidate.to);
    }

    Growth {
        trace,
        reached,
        stats: RunStats {
            iterations,
            edge_comparisons: comparisons,
            elapsed: started.elapsed(),
        },
    }
}

fn finish<K, W>(graph: &Graph<K, W>, growth: Growth<K, W>, components: usize) -> Run<K, W>
where
    K: NodeKey,
    W: Weight,
{
    let coverage = Coverage {
        reached: growth.reached,
        total: graph.order(),
        components,
    };
    let result = MstResult::from_trace(&growth.trace, coverage);
    log_completion(&growth.trace, &result);
    Run {
        trace: growth.trace,
        result,
        stats: growth.stats,
    }
}

pub fn prim_mst<K, W>(graph: &Graph<K, W>, start: Option<&K>) -> Result<Run<K, W>>
where
    K: NodeKey,
    W: Weight,
{
    if graph.is_empty() {
        return Err(Error::EmptyGraph);
    }
    let start = match start {
        Some(key) => graph
            .node_id(key)
            .ok_or_else(|| Error::UnknownStartNode(format!("{key:?}")))?,
        None => graph.min_node().ok_or(Error::EmptyGraph)?,
    };

    let mut visited = vec![false; graph.order()];
    let growth = grow(graph, start, &mut visited);
    let components = if growth.reached == graph.order() {
        1
    } else {
        graph.component_count()
    };
    Ok(finish(graph, growth, components))
}

/// Completes a spanning forest: runs Prim from the smallest unvisited node
/// until every node is covered. Returns one run per component, in that order.
pub fn prim_forest<K, W>(graph: &Graph<K, W>) -> Result<Vec<Run<K, W>>>
where
    K: NodeKey,
    W: Weight,
{
    if graph.is_empty() {
        return Err(Error::EmptyGraph);
    }

    let components = graph.component_count();
    let mut visited = vec![false; graph.order()];
    let mut runs = Vec::with_capacity(components);

    loop {
        let next = graph
            .nodes()
            .filter(|(id, _)| !visited[id.0])
            .min_by(|(_, a), (_, b)| a.cmp(b))
            .map(|(id, _)| id);
        let Some(start) = next else {
            break;
        };
        let growth = grow(graph, start, &mut visited);
        runs.push(finish(graph, growth, components));
    }

    Ok(runs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys<'a>(run: &'a Run<&'static str, i32>) -> Vec<(&'a str, &'a str)> {
        run.trace.iter().map(|s| (s.from, s.to)).collect()
    }

    #[test]
    fn test_grows_from_smallest_key_by_default() {
        let graph = Graph::<&str, i32>::from_edges([
            ("c", "d", 1),
            ("a", "b", 4),
            ("b", "c", 2),
            ("a", "d", 3),
        ])
        .unwrap();
        let run = prim_mst(&graph, None).unwrap();
        assert_eq!(run.trace.start(), Some(&"a"));
        assert_eq!(keys(&run), vec![("a", "d"), ("d", "c"), ("c", "b")]);
        assert_eq!(run.result.total_weight, 6);
        assert!(run.result.is_spanning_tree());
        assert!(run.trace.iter().all(|s| s.decision == Decision::Accepted));
    }

    #[test]
    fn test_explicit_start() {
        let graph =
            Graph::<&str, i32>::from_edges([("a", "b", 1), ("b", "c", 5), ("a", "c", 2)]).unwrap();
        let run = Prim::starting_at("c").run(&graph).unwrap();
        assert_eq!(run.trace.start(), Some(&"c"));
        assert_eq!(keys(&run), vec![("c", "a"), ("a", "b")]);
        assert_eq!(run.result.total_weight, 3);
    }

    #[test]
    fn test_ties_on_same_endpoint_prefer_smaller_key() {
        // b and c both hang off a at weight 1; the smaller key goes first.
        let graph =
            Graph::<&str, i32>::from_edges([("a", "c", 1), ("a", "b", 1), ("b", "d", 1)]).unwrap();
        let run = prim_mst(&graph, None).unwrap();
        assert_eq!(keys(&run), vec![("a", "b"), ("a", "c"), ("b", "d")]);
    }

    #[test]
    fn test_ties_prefer_endpoint_visited_first_over_smaller_key() {
        // c and d tie at weight 5; d hangs off a, which joined before b.
        let graph =
            Graph::<&str, i32>::from_edges([("a", "b", 1), ("b", "c", 5), ("a", "d", 5)]).unwrap();
        let run = prim_mst(&graph, None).unwrap();
        assert_eq!(keys(&run), vec![("a", "b"), ("a", "d"), ("b", "c")]);
    }

    #[test]
    fn test_lighter_edge_replaces_candidate() {
        let graph =
            Graph::<&str, i32>::from_edges([("a", "c", 9), ("a", "b", 1), ("b", "c", 2)]).unwrap();
        let run = prim_mst(&graph, None).unwrap();
        assert_eq!(keys(&run), vec![("a", "b"), ("b", "c")]);
        assert_eq!(run.result.total_weight, 3);
        assert_eq!(run.trace.steps()[1].edge, EdgeId(2));
    }

    #[test]
    fn test_equal_edge_does_not_replace_candidate() {
        let graph =
            Graph::<&str, i32>::from_edges([("a", "b", 1), ("a", "c", 2), ("b", "c", 2)]).unwrap();
        let run = prim_mst(&graph, None).unwrap();
        assert_eq!(keys(&run), vec![("a", "b"), ("a", "c")]);
    }

    #[test]
    fn test_disconnected_graph_spans_start_component_only() {
        let graph = Graph::<&str, i32>::from_nodes_and_edges(
            ["A", "B", "C", "D", "E"],
            [("A", "B", 1), ("C", "D", 2), ("D", "E", 1)],
        )
        .unwrap();
        let run = prim_mst(&graph, Some(&"C")).unwrap();
        assert_eq!(run.trace.len(), 2);
        assert_eq!(run.result.coverage.reached, 3);
        assert_eq!(run.result.coverage.total, 5);
        assert_eq!(run.result.coverage.components, 2);
        assert!(!run.result.spans_all_nodes());
        assert!(run.result.warning().is_some());
    }

    #[test]
    fn test_forest_completion() {
        let graph = Graph::<&str, i32>::from_nodes_and_edges(
            ["D", "C", "B", "A"],
            [("A", "B", 1), ("C", "D", 2)],
        )
        .unwrap();
        let runs = prim_forest(&graph).unwrap();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].trace.start(), Some(&"A"));
        assert_eq!(runs[1].trace.start(), Some(&"C"));
        let total: i32 = runs.iter().map(|r| r.result.total_weight).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_edgeless_graph() {
        let graph = Graph::<&str, i32>::from_nodes_and_edges(["A", "B"], Vec::<(&str, &str, i32)>::new())
            .unwrap();
        let run = prim_mst(&graph, None).unwrap();
        assert!(run.trace.is_empty());
        assert_eq!(run.result.total_weight, 0);
        assert_eq!(run.result.coverage.components, 2);
        assert_eq!(run.result.coverage.reached, 1);
        assert_eq!(prim_forest(&graph).unwrap().len(), 2);
    }

    #[test]
    fn test_unknown_start_node() {
        let graph = Graph::<&str, i32>::from_edges([("a", "b", 1)]).unwrap();
        assert_eq!(
            prim_mst(&graph, Some(&"z")).unwrap_err(),
            Error::UnknownStartNode("\"z\"".to_string())
        );
    }

    #[test]
    fn test_empty_graph() {
        let graph = Graph::<&str, i32>::new();
        assert_eq!(prim_mst(&graph, None).unwrap_err(), Error::EmptyGraph);
        assert_eq!(prim_mst(&graph, Some(&"a")).unwrap_err(), Error::EmptyGraph);
        assert_eq!(prim_forest(&graph).unwrap_err(), Error::EmptyGraph);
    }
}
