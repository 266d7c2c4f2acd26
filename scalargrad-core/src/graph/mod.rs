//! The node arena.
//!
//! A [`Graph`] owns every node of one computation together with the gradient
//! accumulators written by backward passes. Nodes reference their operands by
//! [`NodeId`], and an operand always exists before the node built from it,
//! so the graph is acyclic by construction and needs no reference counting.

use crate::autograd::backward::{self, Propagation};
use crate::autograd::Gradients;
use crate::error::ScalarGradError;
use crate::node::{GraphId, LocalPartial, Node, NodeId};

mod op_methods;

#[derive(Debug)]
pub struct Graph {
    id: GraphId,
    nodes: Vec<Node>,
    gradients: Gradients,
    propagation: Propagation,
}

impl Graph {
    /// Creates an empty graph using [`Propagation::ReverseSweep`].
    pub fn new() -> Self {
        Self::with_propagation(Propagation::default())
    }

    /// Creates an empty graph whose backward passes use `propagation`.
    pub fn with_propagation(propagation: Propagation) -> Self {
        let id = GraphId::next();
        Graph {
            id,
            nodes: Vec::new(),
            gradients: Gradients::new(id, 0),
            propagation,
        }
    }

    pub fn id(&self) -> GraphId {
        self.id
    }

    pub fn propagation(&self) -> Propagation {
        self.propagation
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Records a new node and returns its handle.
    ///
    /// `partials` pairs each direct operand with d(value)/d(operand). The only
    /// check is that every operand was minted by this graph. The same operand
    /// may appear more than once and each entry contributes separately.
    pub fn make_node(
        &mut self,
        value: f64,
        partials: impl IntoIterator<Item = (NodeId, f64)>,
    ) -> Result<NodeId, ScalarGradError> {
        let partials = partials
            .into_iter()
            .map(|(operand, partial)| -> Result<LocalPartial, ScalarGradError> {
                self.check_owned(operand)?;
                Ok(LocalPartial { operand, partial })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let id = NodeId {
            graph: self.id,
            index: self.nodes.len(),
        };
        self.nodes.push(Node::new(value, partials));
        Ok(id)
    }

    /// A leaf cannot reference a foreign operand, so this never fails.
    pub(crate) fn push_leaf(&mut self, value: f64) -> NodeId {
        let id = NodeId {
            graph: self.id,
            index: self.nodes.len(),
        };
        self.nodes.push(Node::new(value, Vec::new()));
        id
    }

    /// Construction record of `id`.
    pub fn node(&self, id: NodeId) -> Result<&Node, ScalarGradError> {
        self.check_owned(id)?;
        Ok(&self.nodes[id.index])
    }

    /// Forward value of `id`.
    pub fn value(&self, id: NodeId) -> Result<f64, ScalarGradError> {
        self.node(id).map(Node::value)
    }

    /// Gradient accumulated at `id` by the backward passes run so far.
    ///
    /// Exactly 0.0 before any pass.
    pub fn gradient(&self, id: NodeId) -> Result<f64, ScalarGradError> {
        self.check_owned(id)?;
        Ok(self.gradients.wrt(id).unwrap_or(0.0))
    }

    /// The graph's own gradient table.
    pub fn gradients(&self) -> &Gradients {
        &self.gradients
    }

    /// Adds `seed * d(output)/d(node)` into the accumulator of every node
    /// reachable from `output`.
    ///
    /// Accumulators are never reset here: a second pass over a shared subgraph
    /// adds on top of the first. Call [`Graph::zero_grad`] in between, or build
    /// a fresh graph per independent gradient computation.
    pub fn propagate(&mut self, output: NodeId, seed: f64) -> Result<(), ScalarGradError> {
        self.check_owned(output)?;
        log::debug!(
            "backward: graph {} from node {} (seed {}, {} nodes, {:?})",
            self.id,
            output,
            seed,
            self.nodes.len(),
            self.propagation
        );
        let accumulators = self.gradients.accumulators_mut(self.nodes.len());
        backward::propagate(self.propagation, &self.nodes, output.index, seed, accumulators);
        Ok(())
    }

    /// `propagate(output, 1.0)`: afterwards `gradient(x)` is d(output)/d(x).
    pub fn backward(&mut self, output: NodeId) -> Result<(), ScalarGradError> {
        self.propagate(output, 1.0)
    }

    /// Runs a backward pass into a caller-owned table, leaving the graph's
    /// own accumulators untouched.
    pub fn propagate_into(
        &self,
        output: NodeId,
        seed: f64,
        gradients: &mut Gradients,
    ) -> Result<(), ScalarGradError> {
        self.check_owned(output)?;
        gradients.check_graph(self.id)?;
        let accumulators = gradients.accumulators_mut(self.nodes.len());
        backward::propagate(self.propagation, &self.nodes, output.index, seed, accumulators);
        Ok(())
    }

    /// A zeroed table for use with [`Graph::propagate_into`].
    pub fn new_gradients(&self) -> Gradients {
        Gradients::new(self.id, self.nodes.len())
    }

    /// Resets every accumulator to 0.0.
    pub fn zero_grad(&mut self) {
        self.gradients.zero();
    }

    /// Hands back the current accumulators and installs a zeroed table.
    pub fn take_gradients(&mut self) -> Gradients {
        let fresh = self.new_gradients();
        std::mem::replace(&mut self.gradients, fresh)
    }

    fn check_owned(&self, id: NodeId) -> Result<(), ScalarGradError> {
        if id.graph != self.id {
            return Err(ScalarGradError::ForeignNode {
                node: id,
                graph: self.id,
            });
        }
        Ok(())
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
