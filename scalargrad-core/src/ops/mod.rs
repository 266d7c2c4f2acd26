//! # Scalar Operations Module (`ops`)
//!
//! Every operation is an `xxx_op` function that reads the forward values of its
//! operands, computes its own value, and records the closed-form local partial
//! derivative with respect to each operand in a new node. Those partials are
//! constants for the backward pass: they are evaluated once, at construction.
//!
//! The set is closed over total real arithmetic (no division, no logarithm),
//! so the only error an operation can return is a structural one: an operand
//! handle minted by another graph.
//!
//! - [`arithmetic`]: add, sub, mul, neg, square.
//! - [`creation`](crate::creation): constants / leaves.

pub mod arithmetic;

pub use arithmetic::{add_op, mul_op, neg_op, square_op, sub_op};
