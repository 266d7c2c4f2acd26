use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;

/// `a * b`.
///
/// Product rule: d/da = b and d/db = a, taken from the operand values at the
/// moment this node is built.
pub fn mul_op(graph: &mut Graph, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
    let a_value = graph.value(a)?;
    let b_value = graph.value(b)?;
    graph.make_node(a_value * b_value, [(a, b_value), (b, a_value)])
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
