use crate::error::OptimError;
use crate::parameter::Parameter;
use crate::Optimizer;

/// Implements stochastic gradient descent (optionally with momentum).
///
/// Updates each parameter `p` with gradient `g` according to:
/// `v = momentum * v + g`, then `p = p - lr * v`.
/// With `momentum == 0` this is plain gradient descent, `p = p - lr * g`.
#[derive(Debug, Clone)]
pub struct SgdOptimizer {
    lr: f64,
    momentum: f64,
    /// One velocity per parameter slot, created on the first step.
    velocity: Vec<f64>,
}

impl SgdOptimizer {
    /// Creates a new `SgdOptimizer`.
    ///
    /// # Arguments
    ///
    /// * `lr`: The learning rate. Must be positive and finite.
    /// * `momentum`: Momentum factor in `[0, 1)`.
    pub fn new(lr: f64, momentum: f64) -> Result<Self, OptimError> {
        if !(lr > 0.0 && lr.is_finite()) {
            return Err(OptimError::InvalidLearningRate(lr));
        }
        if !(0.0..1.0).contains(&momentum) {
            return Err(OptimError::InvalidMomentum(momentum));
        }
        Ok(SgdOptimizer {
            lr,
            momentum,
            velocity: Vec::new(),
        })
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self, params: &mut [Parameter]) -> Result<(), OptimError> {
        if self.velocity.is_empty() {
            self.velocity = vec![0.0; params.len()];
        } else if self.velocity.len() != params.len() {
            return Err(OptimError::StateLengthMismatch {
                expected: self.velocity.len(),
                actual: params.len(),
            });
        }

        log::debug!(
            "SgdOptimizer: step over {} parameters (lr={}, momentum={})",
            params.len(),
            self.lr,
            self.momentum
        );
        for (param, velocity) in params.iter_mut().zip(self.velocity.iter_mut()) {
            let Some(grad) = param.grad() else {
                log::warn!("SgdOptimizer: no gradient for parameter '{}', skipping update.", param.name());
                continue;
            };
            *velocity = self.momentum * *velocity + grad;
            param.set_value(param.value() - self.lr * *velocity);
            log::trace!("SgdOptimizer: updated '{}' to {}", param.name(), param.value());
        }
        Ok(())
    }
}
