pub mod kruskal;
pub mod prim;

pub use kruskal::*;
pub use prim::*;

use crate::{MstResult, NodeKey, Trace, Weight};

fn log_completion<K, W>(trace: &Trace<K, W>, result: &MstResult<K, W>)
where
    K: NodeKey,
    W: Weight,
{
    tracing::info!(
        algorithm = %trace.algorithm(),
        steps = trace.len(),
        accepted = result.edge_count(),
        total_weight = ?result.total_weight,
        "run completed"
    );
    if let Some(warning) = result.warning() {
        tracing::warn!(algorithm = %trace.algorithm(), "{warning}");
    }
}
