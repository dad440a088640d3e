//! Capability traits shared by the MST runners.

use crate::core::{NodeKey, Weight};
use crate::error::Result;
use crate::graph::Graph;
use crate::result::Run;
use crate::trace::Algorithm;

/// A runner that turns a graph into a fully recorded [`Run`].
///
/// Runners borrow the graph read-only and build a fresh trace on every call,
/// so the same graph can be handed to several runners, in any order.
pub trait MstAlgorithm<K, W>
where
    K: NodeKey,
    W: Weight,
{
    fn algorithm(&self) -> Algorithm;

    fn run(&self, graph: &Graph<K, W>) -> Result<Run<K, W>>;
}
