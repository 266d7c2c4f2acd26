use approx::assert_abs_diff_eq;
use scalargrad_core::utils::testing::{check_scalar_near, check_slice_near};
use scalargrad_core::{
    check_grad, numerical_gradient, GradCheckError, Graph, NodeId, Propagation, ScalarGradError,
};

mod common;
use common::{build, random_recipe, replay};

const H: f64 = 1e-4;

/// x = a*b + a, y = a*b + x, z = x*y
fn scenario(graph: &mut Graph, v: &[NodeId]) -> Result<NodeId, ScalarGradError> {
    let (a, b) = (v[0], v[1]);
    let ab = graph.mul(a, b)?;
    let x = graph.add(ab, a)?;
    let ab = graph.mul(a, b)?;
    let y = graph.add(ab, x)?;
    graph.mul(x, y)
}

#[test]
fn test_concrete_scenario_matches_numerical_estimate() -> Result<(), GradCheckError> {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut graph = Graph::new();
    let a = graph.constant(5.0);
    let b = graph.constant(3.0);
    let z = scenario(&mut graph, &[a, b])?;
    assert_eq!(graph.value(z)?, 700.0);

    graph.backward(z)?;

    let estimate = numerical_gradient(scenario, &[5.0, 3.0], H)?;
    assert_abs_diff_eq!(graph.gradient(a)?, estimate[0], epsilon = 1e-4);
    assert_abs_diff_eq!(graph.gradient(b)?, estimate[1], epsilon = 1e-4);
    Ok(())
}

#[test]
fn test_scenario_grad_check() -> Result<(), GradCheckError> {
    check_grad(scenario, &[5.0, 3.0], H, 1e-4)?;
    check_grad(scenario, &[-1.5, 0.25], H, 1e-4)
}

#[test]
fn test_fan_in_accumulates_every_path() -> Result<(), ScalarGradError> {
    // a feeds three downstream expressions: out = a*b + a + a^2
    let mut graph = Graph::new();
    let a = graph.constant(2.0);
    let b = graph.constant(-3.0);
    let ab = graph.mul(a, b)?;
    let sq = graph.square(a)?;
    let partial = graph.add(ab, a)?;
    let out = graph.add(partial, sq)?;

    graph.backward(out)?;

    // b + 1 + 2a
    check_scalar_near(graph.gradient(a)?, -3.0 + 1.0 + 4.0, 1e-12);
    check_scalar_near(graph.gradient(b)?, 2.0, 1e-12);
    Ok(())
}

#[test]
fn test_random_graphs_match_central_differences() -> Result<(), GradCheckError> {
    let point = [0.7, -1.3, 0.4];
    for seed in 0..25 {
        let recipe = random_recipe(seed, &point, 20);

        let mut graph = Graph::new();
        let (leaves, output) = build(&mut graph, &point, &recipe)?;
        graph.backward(output)?;
        let analytical: Vec<f64> = leaves
            .iter()
            .map(|&leaf| graph.gradient(leaf))
            .collect::<Result<_, _>>()?;

        let numerical = numerical_gradient(
            |g: &mut Graph, v: &[NodeId]| replay(g, v, &recipe),
            &point,
            H,
        )?;

        for (i, (an, num)) in analytical.iter().zip(numerical.iter()).enumerate() {
            let tolerance = 1e-4 * num.abs().max(1.0);
            assert!(
                (an - num).abs() <= tolerance,
                "seed {} leaf {}: autodiff={}, numerical={}, recipe={:?}",
                seed,
                i,
                an,
                num,
                recipe
            );
        }
    }
    Ok(())
}

#[test]
fn test_strategies_agree_on_random_graphs() -> Result<(), ScalarGradError> {
    let point = [1.1, 0.2, -0.9, 2.0];
    for seed in 100..120 {
        let recipe = random_recipe(seed, &point, 15);

        let mut sweep = Graph::with_propagation(Propagation::ReverseSweep);
        let (sweep_leaves, sweep_out) = build(&mut sweep, &point, &recipe)?;
        sweep.backward(sweep_out)?;

        let mut worklist = Graph::with_propagation(Propagation::Worklist);
        let (work_leaves, work_out) = build(&mut worklist, &point, &recipe)?;
        worklist.backward(work_out)?;

        let expected = sweep.gradients().wrt_many(&sweep_leaves);
        let actual = worklist.gradients().wrt_many(&work_leaves);
        let tolerance = 1e-9 * expected.iter().fold(1.0_f64, |m, g| m.max(g.abs()));
        check_slice_near(&actual, &expected, tolerance);
    }
    Ok(())
}

#[test]
fn test_independent_seeds_on_shared_graph() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let a = graph.constant(3.0);
    let b = graph.constant(4.0);
    let p = graph.mul(a, b)?;
    let s = graph.sub(a, b)?;

    // Second pass from a different output adds into the same accumulators.
    graph.backward(p)?;
    graph.backward(s)?;
    check_scalar_near(graph.gradient(a)?, 4.0 + 1.0, 1e-12);
    check_scalar_near(graph.gradient(b)?, 3.0 - 1.0, 1e-12);

    // Separate tables keep the passes apart.
    let mut dp = graph.new_gradients();
    let mut ds = graph.new_gradients();
    graph.propagate_into(p, 1.0, &mut dp)?;
    graph.propagate_into(s, 1.0, &mut ds)?;
    assert_eq!(dp.wrt_many(&[a, b]), vec![4.0, 3.0]);
    assert_eq!(ds.wrt_many(&[a, b]), vec![1.0, -1.0]);
    Ok(())
}
