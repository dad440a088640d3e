//! Identifiers and the numeric traits shared by every module.

use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;

/// Typed node/edge identifiers, dense and assigned in insertion order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodeId(pub usize);

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct EdgeId(pub usize);

/// Anything usable as a node label: map key, totally ordered, printable in errors.
pub trait NodeKey: Clone + Eq + Hash + Ord + Debug {}

impl<T> NodeKey for T where T: Clone + Eq + Hash + Ord + Debug {}

/// Minimal numeric weight trait
pub trait Weight:
    Copy + PartialOrd + std::ops::Add<Output = Self> + Debug + Send + Sync + 'static
{
    fn zero() -> Self;
}

impl Weight for f32 {
    fn zero() -> Self {
        0.0
    }
}
impl Weight for f64 {
    fn zero() -> Self {
        0.0
    }
}

impl Weight for i32 {
    fn zero() -> Self {
        0
    }
}
impl Weight for i64 {
    fn zero() -> Self {
        0
    }
}

impl Weight for u32 {
    fn zero() -> Self {
        0
    }
}
impl Weight for u64 {
    fn zero() -> Self {
        0
    }
}

/// Sums an iterator of weights, starting from `W::zero()`.
pub fn sum_weights<W: Weight>(weights: impl IntoIterator<Item = W>) -> W {
    weights.into_iter().fold(W::zero(), |acc, w| acc + w)
}
