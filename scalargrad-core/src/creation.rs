use crate::graph::Graph;
use crate::node::NodeId;

/// Records a leaf holding `value`.
///
/// Leaves have no operands. They are both the constants of an expression and
/// the independent inputs whose gradients a caller reads after a backward pass.
pub fn constant_op(graph: &mut Graph, value: f64) -> NodeId {
    graph.push_leaf(value)
}

/// Records one leaf per value, in order.
pub fn constants(graph: &mut Graph, values: &[f64]) -> Vec<NodeId> {
    values.iter().map(|&v| constant_op(graph, v)).collect()
}
