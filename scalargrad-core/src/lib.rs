//! # scalargrad-core - Scalar reverse-mode automatic differentiation
//!
//! Builds a computation graph of scalar nodes from a small closed set of
//! operations and computes the exact gradient of one output with respect to
//! every node in a single backward pass.
//!
//! ## Quick Start
//!
//! ```
//! use scalargrad_core::{Graph, ScalarGradError};
//!
//! # fn main() -> Result<(), ScalarGradError> {
//! let mut graph = Graph::new();
//! let a = graph.constant(5.0);
//! let b = graph.constant(3.0);
//!
//! // x = a*b + a, y = a*b + x, z = x*y
//! let ab = graph.mul(a, b)?;
//! let x = graph.add(ab, a)?;
//! let ab = graph.mul(a, b)?;
//! let y = graph.add(ab, x)?;
//! let z = graph.mul(x, y)?;
//! assert_eq!(graph.value(z)?, 700.0);
//!
//! graph.backward(z)?;
//! assert_eq!(graph.gradient(a)?, 280.0);
//! assert_eq!(graph.gradient(b)?, 375.0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Supported Operations
//!
//! | Operation | Value | Local partials |
//! |-----------|-------|----------------|
//! | [`constant_op`] | `v` | none |
//! | [`add_op`](ops::add_op) | `a + b` | `1`, `1` |
//! | [`mul_op`](ops::mul_op) | `a * b` | `b`, `a` |
//! | [`neg_op`](ops::neg_op) | `-a` | `-1` |
//! | [`square_op`](ops::square_op) | `a * a` | `2a` |
//! | [`sub_op`](ops::sub_op) | `a - b` | built as `a + (-b)` |
//!
//! ## Architecture
//!
//! - **[`Graph`]**: arena owning the nodes of one computation plus their gradient accumulators.
//! - **[`NodeId`]**: handle to a node. Identity is the handle, not the value.
//! - **[`Gradients`]**: side table of accumulated gradients, for passes that should not
//!   touch the graph's own accumulators.
//! - **[`check_grad`]**: validates backward-pass gradients against central differences.

pub mod autograd;
pub mod creation;
pub mod error;
pub mod graph;
pub mod node;
pub mod ops;
pub mod utils;

pub use autograd::{check_grad, numerical_gradient, GradCheckError, Gradients, Propagation};
pub use creation::{constant_op, constants};
pub use error::ScalarGradError;
pub use graph::Graph;
pub use node::{GraphId, LocalPartial, Node, NodeId};
