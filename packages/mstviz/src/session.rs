//! Explicit per-graph run context.
//!
//! A session borrows one graph and keeps the last run of each algorithm so a
//! presentation layer can compare them. Clearing drops the runs; nothing is
//! carried from one run to the next.

use crate::algorithms::{Kruskal, Prim};
use crate::core::{NodeKey, Weight};
use crate::error::Result;
use crate::graph::Graph;
use crate::metrics::{Comparison, compare};
use crate::result::Run;
use crate::traits::MstAlgorithm;
use crate::trace::Algorithm;

pub struct Session<'g, K, W>
where
    K: NodeKey,
{
    graph: &'g Graph<K, W>,
    kruskal: Option<Run<K, W>>,
    prim: Option<Run<K, W>>,
}

impl<'g, K, W> Session<'g, K, W>
where
    K: NodeKey,
    W: Weight,
{
    pub fn new(graph: &'g Graph<K, W>) -> Self {
        Self {
            graph,
            kruskal: None,
            prim: None,
        }
    }

    pub fn graph(&self) -> &'g Graph<K, W> {
        self.graph
    }

    /// Runs `algorithm` and stores the result in its slot, replacing the previous run.
    /// On error the previous run is kept.
    pub fn run<A>(&mut self, algorithm: &A) -> Result<&Run<K, W>>
    where
        A: MstAlgorithm<K, W>,
    {
        let run = algorithm.run(self.graph)?;
        let slot = match algorithm.algorithm() {
            Algorithm::Kruskal => &mut self.kruskal,
            Algorithm::Prim => &mut self.prim,
        };
        Ok(slot.insert(run))
    }

    pub fn run_kruskal(&mut self) -> Result<&Run<K, W>> {
        self.run(&Kruskal)
    }

    pub fn run_prim(&mut self, start: Option<K>) -> Result<&Run<K, W>> {
        self.run(&Prim { start })
    }

    pub fn last(&self, algorithm: Algorithm) -> Option<&Run<K, W>> {
        match algorithm {
            Algorithm::Kruskal => self.kruskal.as_ref(),
            Algorithm::Prim => self.prim.as_ref(),
        }
    }

    /// Metrics for whichever runs exist, Kruskal first.
    pub fn comparison(&self) -> Option<Comparison<W>> {
        let runs: Vec<&Run<K, W>> = self.kruskal.iter().chain(self.prim.iter()).collect();
        if runs.is_empty() {
            return None;
        }
        Some(compare(&runs).with_graph(self.graph))
    }

    pub fn clear(&mut self) {
        self.kruskal = None;
        self.prim = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_runs_are_kept_per_algorithm() {
        let graph =
            Graph::<&str, i32>::from_edges([("a", "b", 1), ("b", "c", 2), ("a", "c", 3)]).unwrap();
        let mut session = Session::new(&graph);
        assert!(session.comparison().is_none());

        assert_eq!(session.run_kruskal().unwrap().trace.len(), 3);
        assert_eq!(session.run_prim(Some("b")).unwrap().trace.start(), Some(&"b"));

        let comparison = session.comparison().unwrap();
        assert_eq!(comparison.entries.len(), 2);
        assert!(comparison.weights_agree);
        assert_eq!(comparison.graph.as_ref().unwrap().total_weight, 6);

        session.clear();
        assert!(session.last(Algorithm::Kruskal).is_none());
        assert!(session.last(Algorithm::Prim).is_none());
        assert!(session.comparison().is_none());
    }

    #[test]
    fn test_failed_run_keeps_previous() {
        let graph = Graph::<&str, i32>::from_edges([("a", "b", 1)]).unwrap();
        let mut session = Session::new(&graph);
        session.run_prim(None).unwrap();
        assert_eq!(
            session.run_prim(Some("z")).unwrap_err(),
            Error::UnknownStartNode("\"z\"".to_string())
        );
        assert_eq!(
            session.last(Algorithm::Prim).unwrap().trace.start(),
            Some(&"a")
        );
    }
}
