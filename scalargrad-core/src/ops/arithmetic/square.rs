use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;

/// `a * a`, with d/da = 2a.
///
/// Unlike `mul_op(a, a)` this records a single operand slot.
pub fn square_op(graph: &mut Graph, a: NodeId) -> Result<NodeId, ScalarGradError> {
    let a_value = graph.value(a)?;
    graph.make_node(a_value * a_value, [(a, 2.0 * a_value)])
}
