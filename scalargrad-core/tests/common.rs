use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scalargrad_core::{constants, Graph, NodeId, ScalarGradError};

/// One builder call in a randomly generated expression. Operands index into
/// the list of leaves followed by every earlier step's output.
#[derive(Debug, Clone, Copy)]
#[allow(dead_code)]
pub enum Step {
    Add(usize, usize),
    Mul(usize, usize),
    Sub(usize, usize),
    Neg(usize),
    Square(usize),
}

/// Replays `recipe` on `leaves` and returns the last step's node.
#[allow(dead_code)]
pub fn replay(graph: &mut Graph, leaves: &[NodeId], recipe: &[Step]) -> Result<NodeId, ScalarGradError> {
    let mut available = leaves.to_vec();
    for step in recipe {
        let next = match *step {
            Step::Add(a, b) => graph.add(available[a], available[b])?,
            Step::Mul(a, b) => graph.mul(available[a], available[b])?,
            Step::Sub(a, b) => graph.sub(available[a], available[b])?,
            Step::Neg(a) => graph.neg(available[a])?,
            Step::Square(a) => graph.square(available[a])?,
        };
        available.push(next);
    }
    Ok(*available.last().unwrap_or(&leaves[0]))
}

/// Random recipe over `point.len()` leaves.
///
/// Products are only drawn between operands whose magnitude stays small at
/// `point`, which keeps values (and finite-difference error) bounded.
#[allow(dead_code)]
pub fn random_recipe(seed: u64, point: &[f64], steps: usize) -> Vec<Step> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut values = point.to_vec();
    let mut recipe = Vec::with_capacity(steps);

    while recipe.len() < steps {
        let a = rng.gen_range(0..values.len());
        let b = rng.gen_range(0..values.len());
        let (step, value) = match rng.gen_range(0..5) {
            0 => (Step::Add(a, b), values[a] + values[b]),
            1 if values[a].abs() < 4.0 && values[b].abs() < 4.0 => {
                (Step::Mul(a, b), values[a] * values[b])
            }
            2 => (Step::Sub(a, b), values[a] - values[b]),
            3 => (Step::Neg(a), -values[a]),
            4 if values[a].abs() < 4.0 => (Step::Square(a), values[a] * values[a]),
            _ => continue,
        };
        values.push(value);
        recipe.push(step);
    }
    recipe
}

/// Leaves for `point` followed by the replayed recipe, on a fresh graph.
#[allow(dead_code)]
pub fn build(graph: &mut Graph, point: &[f64], recipe: &[Step]) -> Result<(Vec<NodeId>, NodeId), ScalarGradError> {
    let leaves = constants(graph, point);
    let output = replay(graph, &leaves, recipe)?;
    Ok((leaves, output))
}
