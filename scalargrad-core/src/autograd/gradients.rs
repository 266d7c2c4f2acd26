use crate::error::ScalarGradError;
use crate::node::{GraphId, NodeId};

/// Accumulated gradients for the nodes of one graph.
///
/// This is the backward-pass scratch state, kept apart from the immutable
/// construction record so that several independent passes can run over the
/// same graph, each into its own table.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    graph: GraphId,
    /// Indexed by node index. Nodes past the end have gradient 0.0.
    accumulators: Vec<f64>,
}

impl Gradients {
    pub(crate) fn new(graph: GraphId, len: usize) -> Self {
        Gradients {
            graph,
            accumulators: vec![0.0; len],
        }
    }

    /// The graph this table belongs to.
    pub fn graph(&self) -> GraphId {
        self.graph
    }

    /// Gradient accumulated at `id`.
    ///
    /// Returns `None` if `id` belongs to a different graph.
    pub fn wrt(&self, id: NodeId) -> Option<f64> {
        if id.graph != self.graph {
            return None;
        }
        Some(self.accumulators.get(id.index).copied().unwrap_or(0.0))
    }

    /// Gradients for a list of nodes, in order. Foreign ids read as 0.0.
    pub fn wrt_many(&self, ids: &[NodeId]) -> Vec<f64> {
        ids.iter().map(|&id| self.wrt(id).unwrap_or(0.0)).collect()
    }

    /// Resets every accumulator to 0.0.
    pub fn zero(&mut self) {
        self.accumulators.iter_mut().for_each(|g| *g = 0.0);
    }

    pub(crate) fn check_graph(&self, expected: GraphId) -> Result<(), ScalarGradError> {
        if self.graph != expected {
            return Err(ScalarGradError::GradientTableMismatch {
                expected,
                actual: self.graph,
            });
        }
        Ok(())
    }

    /// Mutable accumulators covering at least `len` nodes.
    pub(crate) fn accumulators_mut(&mut self, len: usize) -> &mut [f64] {
        if self.accumulators.len() < len {
            self.accumulators.resize(len, 0.0);
        }
        &mut self.accumulators
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_table_is_zero() {
        let graph = GraphId::next();
        let table = Gradients::new(graph, 3);
        let id = NodeId { graph, index: 2 };
        assert_eq!(table.wrt(id), Some(0.0));
    }

    #[test]
    fn test_foreign_id_is_none() {
        let table = Gradients::new(GraphId::next(), 1);
        let other = NodeId {
            graph: GraphId::next(),
            index: 0,
        };
        assert_eq!(table.wrt(other), None);
        assert_eq!(table.wrt_many(&[other]), vec![0.0]);
    }

    #[test]
    fn test_grows_on_demand() {
        let graph = GraphId::next();
        let mut table = Gradients::new(graph, 1);
        table.accumulators_mut(4)[3] += 2.5;
        assert_eq!(table.wrt(NodeId { graph, index: 3 }), Some(2.5));

        table.zero();
        assert_eq!(table.wrt(NodeId { graph, index: 3 }), Some(0.0));
    }

    #[test]
    fn test_check_graph() {
        let graph = GraphId::next();
        let other = GraphId::next();
        let table = Gradients::new(graph, 0);
        assert!(table.check_graph(graph).is_ok());
        assert_eq!(
            table.check_graph(other),
            Err(ScalarGradError::GradientTableMismatch {
                expected: other,
                actual: graph
            })
        );
    }
}
