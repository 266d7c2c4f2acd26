//! Solves "Adam is 24 years older than Belle, but in six years Adam will be
//! three times older than Belle" by gradient descent on the squared error.
//!
//! Run with `RUST_LOG=info cargo run -p scalargrad-optim --example age_problem`.

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::{Graph, NodeId, ScalarGradError};
use scalargrad_optim::{OptimError, Parameter, SgdOptimizer, TrainConfig, Trainer};

// Keep in sync with the copy in tests/age_problem.rs.
fn age_error(graph: &mut Graph, v: &[NodeId]) -> Result<NodeId, ScalarGradError> {
    let (adam, belle) = (v[0], v[1]);

    // Adam - 24 = Belle
    let twenty_four = graph.constant(24.0);
    let first_left = graph.sub(adam, twenty_four)?;
    let first_error = graph.sub(first_left, belle)?;
    let first_square_error = graph.square(first_error)?;

    // Adam + 6 = (Belle + 6) * 3
    let six = graph.constant(6.0);
    let second_left = graph.add(adam, six)?;
    let six = graph.constant(6.0);
    let belle_later = graph.add(belle, six)?;
    let three = graph.constant(3.0);
    let second_right = graph.mul(belle_later, three)?;
    let second_error = graph.sub(second_left, second_right)?;
    let second_square_error = graph.square(second_error)?;

    graph.add(first_square_error, second_square_error)
}

fn main() -> Result<(), OptimError> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(3);
    let mut params = vec![
        Parameter::uniform("adam", &mut rng),
        Parameter::uniform("belle", &mut rng),
    ];

    let mut trainer = Trainer::new(SgdOptimizer::new(0.01, 0.0)?, TrainConfig::default());
    let report = trainer.fit(&mut params, age_error)?;

    println!(
        "sqrErr={:?} adam={:.4} belle={:.4}",
        report.final_loss(),
        params[0].value(),
        params[1].value()
    );
    Ok(())
}
