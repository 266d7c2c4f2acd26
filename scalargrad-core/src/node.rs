//! Core data structures for the computation graph.
//!
//! A [`Node`] is the immutable construction record of one scalar result: its
//! forward value and the local partial derivative with respect to each direct
//! operand. Nodes are addressed through [`NodeId`] handles minted by the owning
//! [`Graph`](crate::graph::Graph), never by value.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for generating unique graph IDs.
static GRAPH_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Unique identifier of one graph (arena).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphId(u64);

impl GraphId {
    pub(crate) fn next() -> Self {
        GraphId(GRAPH_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle to a node inside a [`Graph`](crate::graph::Graph).
///
/// Two nodes with the same value are still distinct handles. The index is the
/// node's position in construction order, which makes every operand index
/// strictly smaller than the index of the node built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) graph: GraphId,
    pub(crate) index: usize,
}

impl NodeId {
    /// The graph this handle was minted by.
    pub fn graph(&self) -> GraphId {
        self.graph
    }

    /// Position in construction order.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.graph, self.index)
    }
}

/// d(node)/d(operand), evaluated when the node was built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalPartial {
    pub operand: NodeId,
    pub partial: f64,
}

/// Immutable construction record of a scalar result.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    value: f64,
    partials: Vec<LocalPartial>,
}

impl Node {
    pub(crate) fn new(value: f64, partials: Vec<LocalPartial>) -> Self {
        Node { value, partials }
    }

    /// Forward value, fixed at construction.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// One entry per operand slot. Empty for leaves.
    pub fn partials(&self) -> &[LocalPartial] {
        &self.partials
    }

    pub fn is_leaf(&self) -> bool {
        self.partials.is_empty()
    }
}
