use scalargrad_core::ScalarGradError;
use thiserror::Error;

/// Errors raised by optimizers and the training loop.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum OptimError {
    #[error("Invalid learning rate: {0} (must be positive and finite)")]
    InvalidLearningRate(f64),

    #[error("Invalid momentum: {0} (must be in [0, 1))")]
    InvalidMomentum(f64),

    #[error("Loss became NaN or infinite at epoch {epoch}: {loss}")]
    NonFiniteLoss { epoch: usize, loss: f64 },

    #[error("Optimizer state holds {expected} entries but {actual} parameters were given")]
    StateLengthMismatch { expected: usize, actual: usize },

    #[error(transparent)]
    Graph(#[from] ScalarGradError),
}
