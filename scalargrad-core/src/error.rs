use crate::node::{GraphId, NodeId};
use thiserror::Error;

/// Custom error type for the ScalarGrad engine.
///
/// The arithmetic itself is total, so every variant here is structural misuse:
/// handing one graph a handle or table that was minted by another.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalarGradError {
    #[error("Node {node} does not belong to graph {graph}")]
    ForeignNode { node: NodeId, graph: GraphId },

    #[error("Gradient table for graph {actual} used with graph {expected}")]
    GradientTableMismatch { expected: GraphId, actual: GraphId },
}
