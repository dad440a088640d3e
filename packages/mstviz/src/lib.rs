pub mod algorithms;
pub mod animation;
pub mod authoring;
pub mod core;
pub mod error;
pub mod graph;
pub mod interner;
pub mod latex;
pub mod metrics;
pub mod result;
pub mod session;
pub mod trace;
pub mod traits;
pub mod union_find;

pub use crate::core::*;
pub use algorithms::*;
pub use animation::*;
pub use authoring::*;
pub use error::{Error, Result};
pub use graph::*;
pub use interner::*;
pub use latex::*;
pub use metrics::*;
pub use result::*;
pub use session::*;
pub use trace::*;
pub use traits::*;
pub use union_find::*;
