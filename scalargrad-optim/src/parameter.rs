use rand::Rng;
use std::fmt;

/// A learnable scalar living outside any graph.
///
/// Every training step seeds a fresh leaf with `value` and reads the leaf's
/// gradient back into `grad`. Only optimizers write `value`.
#[derive(Clone, PartialEq)]
pub struct Parameter {
    name: String,
    value: f64,
    grad: Option<f64>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Parameter {
            name: name.into(),
            value,
            grad: None,
        }
    }

    /// Initialised uniformly in `[0, 1)`.
    pub fn uniform<R: Rng + ?Sized>(name: impl Into<String>, rng: &mut R) -> Self {
        Self::new(name, rng.gen::<f64>())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn grad(&self) -> Option<f64> {
        self.grad
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    pub fn set_grad(&mut self, grad: Option<f64>) {
        self.grad = grad;
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameter({}={}, grad={:?})", self.name, self.value, self.grad)
    }
}
