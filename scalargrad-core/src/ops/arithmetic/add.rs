use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;

/// `a + b`.
///
/// d/da = 1 and d/db = 1: the incoming gradient reaches both operands unscaled.
pub fn add_op(graph: &mut Graph, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
    let value = graph.value(a)? + graph.value(b)?;
    graph.make_node(value, [(a, 1.0), (b, 1.0)])
}
