use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;

use super::{add_op, neg_op};

/// `a - b`, built as `a + (-b)`.
///
/// There is no derivative rule here: the gradient with respect to `b` comes out
/// of the chain rule through the intermediate negation node, so this records
/// two nodes.
pub fn sub_op(graph: &mut Graph, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
    let negated = neg_op(graph, b)?;
    add_op(graph, a, negated)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
