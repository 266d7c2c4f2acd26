//! Training loop.
//!
//! Every epoch builds a brand-new [`Graph`]: one leaf per parameter, then the
//! loss expression, then one backward pass. Nodes are never reused across
//! epochs, so accumulated gradients cannot carry over from a previous step.

use crate::error::OptimError;
use crate::parameter::Parameter;
use crate::Optimizer;
use scalargrad_core::{constants, Graph, NodeId, ScalarGradError};

/// Training loop settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainConfig {
    pub epochs: usize,
    /// Log progress every `log_every` epochs. 0 disables progress logging.
    pub log_every: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            epochs: 1000,
            log_every: 100,
        }
    }
}

/// Loss observed at each epoch, before that epoch's update.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrainReport {
    pub losses: Vec<f64>,
}

impl TrainReport {
    pub fn final_loss(&self) -> Option<f64> {
        self.losses.last().copied()
    }
}

#[derive(Debug)]
pub struct Trainer<O: Optimizer> {
    optimizer: O,
    config: TrainConfig,
}

impl<O: Optimizer> Trainer<O> {
    pub fn new(optimizer: O, config: TrainConfig) -> Self {
        Trainer { optimizer, config }
    }

    pub fn optimizer(&self) -> &O {
        &self.optimizer
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    /// Runs one epoch: fresh graph, forward, backward, update.
    ///
    /// `loss_fn` receives the graph and one leaf per parameter (same order) and
    /// returns the scalar loss node. Returns the loss before the update.
    pub fn step<F>(&mut self, params: &mut [Parameter], loss_fn: &F, epoch: usize) -> Result<f64, OptimError>
    where
        F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, ScalarGradError>,
    {
        let values: Vec<f64> = params.iter().map(Parameter::value).collect();
        let mut graph = Graph::new();
        let leaves = constants(&mut graph, &values);

        let loss = loss_fn(&mut graph, &leaves)?;
        let loss_value = graph.value(loss)?;
        if !loss_value.is_finite() {
            return Err(OptimError::NonFiniteLoss {
                epoch,
                loss: loss_value,
            });
        }

        graph.backward(loss)?;
        for (param, &leaf) in params.iter_mut().zip(leaves.iter()) {
            param.set_grad(Some(graph.gradient(leaf)?));
        }
        self.optimizer.step(params)?;
        Ok(loss_value)
    }

    /// Runs `config.epochs` epochs of [`Trainer::step`].
    pub fn fit<F>(&mut self, params: &mut [Parameter], loss_fn: F) -> Result<TrainReport, OptimError>
    where
        F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, ScalarGradError>,
    {
        let mut report = TrainReport {
            losses: Vec::with_capacity(self.config.epochs),
        };
        log::debug!(
            "Trainer: fitting {} parameters for {} epochs",
            params.len(),
            self.config.epochs
        );

        for epoch in 0..self.config.epochs {
            let loss = self.step(params, &loss_fn, epoch)?;
            report.losses.push(loss);

            if self.config.log_every > 0 && epoch % self.config.log_every == 0 {
                log::info!("epoch {}: loss={} params={:?}", epoch, loss, params);
            }
        }
        Ok(report)
    }
}
