// Builder methods on Graph, delegating to the `ops` functions.

use crate::creation::constant_op;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::{add_op, mul_op, neg_op, square_op, sub_op};

impl Graph {
    /// See [`constant_op`].
    pub fn constant(&mut self, value: f64) -> NodeId {
        constant_op(self, value)
    }

    /// See [`add_op`].
    pub fn add(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
        add_op(self, a, b)
    }

    /// See [`mul_op`].
    pub fn mul(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
        mul_op(self, a, b)
    }

    /// See [`sub_op`].
    pub fn sub(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
        sub_op(self, a, b)
    }

    /// See [`neg_op`].
    pub fn neg(&mut self, a: NodeId) -> Result<NodeId, ScalarGradError> {
        neg_op(self, a)
    }

    /// See [`square_op`].
    pub fn square(&mut self, a: NodeId) -> Result<NodeId, ScalarGradError> {
        square_op(self, a)
    }
}
