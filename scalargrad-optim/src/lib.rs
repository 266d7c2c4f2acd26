//! # scalargrad-optim
//!
//! Gradient-descent training on top of `scalargrad-core`: learnable
//! [`Parameter`]s, the [`Optimizer`] trait with [`SgdOptimizer`], and a
//! [`Trainer`] that rebuilds a fresh graph every epoch so gradients never
//! leak from one step into the next.

pub mod error;
pub mod parameter;
pub mod sgd;
pub mod trainer;

pub use error::OptimError;
pub use parameter::Parameter;
pub use sgd::SgdOptimizer;
pub use trainer::{TrainConfig, TrainReport, Trainer};

/// Trait for optimization algorithms.
/// Optimizers update parameter values from their gradients.
pub trait Optimizer {
    /// Performs a single optimization step (parameter update).
    ///
    /// Parameters whose gradient is `None` are left unchanged.
    fn step(&mut self, params: &mut [Parameter]) -> Result<(), OptimError>;

    /// Clears the gradients of `params`.
    fn zero_grad(&self, params: &mut [Parameter]) {
        for param in params {
            param.set_grad(None);
        }
    }
}
