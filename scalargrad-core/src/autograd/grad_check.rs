use crate::creation::constants;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: f(x+h/2): {value_plus:?}, f(x-h/2): {value_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        value_plus: f64,
        value_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Finite difference step must be positive and finite, got {0:?}")]
    InvalidStep(f64),
    #[error("Tolerance must be non-negative and finite, got {0:?}")]
    InvalidTolerance(f64),
    #[error("Graph error during gradient check: {0}")]
    Graph(#[from] ScalarGradError),
}

/// Builds a fresh graph with one leaf per entry of `point` and evaluates `func`.
fn evaluate<F>(func: &F, point: &[f64]) -> Result<f64, ScalarGradError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, ScalarGradError>,
{
    let mut graph = Graph::new();
    let leaves = constants(&mut graph, point);
    let output = func(&mut graph, &leaves)?;
    graph.value(output)
}

/// Central-difference estimate of the gradient of `func` at `point`.
///
/// Each partial is `(f(x + h/2) - f(x - h/2)) / h`, with every evaluation run on
/// a freshly built graph.
pub fn numerical_gradient<F>(func: F, point: &[f64], h: f64) -> Result<Vec<f64>, GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, ScalarGradError>,
{
    if !(h > 0.0 && h.is_finite()) {
        return Err(GradCheckError::InvalidStep(h));
    }
    let mut perturbed = point.to_vec();
    let mut grads = Vec::with_capacity(point.len());

    for i in 0..point.len() {
        perturbed[i] = point[i] + h / 2.0;
        let value_plus = evaluate(&func, &perturbed)?;
        perturbed[i] = point[i] - h / 2.0;
        let value_minus = evaluate(&func, &perturbed)?;
        perturbed[i] = point[i];

        let numerical = (value_plus - value_minus) / h;
        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                value_plus,
                value_minus,
            });
        }
        grads.push(numerical);
    }
    Ok(grads)
}

/// Checks backward-pass gradients of `func` against central differences.
///
/// `func` receives a fresh graph and one leaf per entry of `point`, and returns
/// the scalar output node. Every leaf must agree within `tolerance` (absolute).
pub fn check_grad<F>(func: F, point: &[f64], h: f64, tolerance: f64) -> Result<(), GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, ScalarGradError>,
{
    if !(tolerance >= 0.0 && tolerance.is_finite()) {
        return Err(GradCheckError::InvalidTolerance(tolerance));
    }
    let mut graph = Graph::new();
    let leaves = constants(&mut graph, point);
    let output = func(&mut graph, &leaves)?;
    graph.backward(output)?;

    let numerical = numerical_gradient(&func, point, h)?;

    for (i, (&leaf, &numerical_grad)) in leaves.iter().zip(numerical.iter()).enumerate() {
        let analytical_grad = graph.gradient(leaf)?;
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }
        let difference = (analytical_grad - numerical_grad).abs();
        log::trace!(
            "grad check input {}: analytical {} numerical {}",
            i,
            analytical_grad,
            numerical_grad
        );
        if difference > tolerance {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }
    Ok(())
}
