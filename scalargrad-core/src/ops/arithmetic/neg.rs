use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;

/// `-a`, with d/da = -1.
pub fn neg_op(graph: &mut Graph, a: NodeId) -> Result<NodeId, ScalarGradError> {
    let value = -graph.value(a)?;
    graph.make_node(value, [(a, -1.0)])
}
