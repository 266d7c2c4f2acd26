//! Backward pass machinery: propagation strategies, gradient tables and
//! numerical gradient checking.

pub mod backward;
pub mod grad_check;
pub mod gradients;

pub use backward::Propagation;
pub use grad_check::{check_grad, numerical_gradient, GradCheckError};
pub use gradients::Gradients;
