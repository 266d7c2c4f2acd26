//! Reverse-mode gradient propagation.
//!
//! Both strategies distribute a seed gradient from an output node to every
//! ancestor by the chain rule: an operand receives `incoming * partial` along
//! each edge, and contributions from several paths are summed. Neither one
//! recurses, so graph depth does not touch the call stack.

use crate::node::Node;

/// How a backward pass walks the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Propagation {
    /// Single sweep over node indices in reverse construction order.
    ///
    /// Construction order is already topological, so every node has received
    /// all of its contributions before it forwards anything. Work is linear in
    /// the number of edges.
    #[default]
    ReverseSweep,
    /// Explicit stack of pending `(node, incoming)` pairs.
    ///
    /// A node is processed once per path that reaches it, so shared
    /// sub-expressions stacked on top of each other cost exponential work.
    Worklist,
}

/// Accumulates d(output)/d(node) * `seed` into `accumulators` for every node
/// reachable from `output`.
///
/// `nodes` is the arena in construction order and `accumulators` must cover at
/// least `output + 1` entries.
pub(crate) fn propagate(
    strategy: Propagation,
    nodes: &[Node],
    output: usize,
    seed: f64,
    accumulators: &mut [f64],
) {
    match strategy {
        Propagation::ReverseSweep => reverse_sweep(nodes, output, seed, accumulators),
        Propagation::Worklist => worklist(nodes, output, seed, accumulators),
    }
}

fn reverse_sweep(nodes: &[Node], output: usize, seed: f64, accumulators: &mut [f64]) {
    let mut adjoints = vec![0.0; output + 1];
    // Nodes never reached must not forward anything: 0.0 * inf is NaN.
    let mut reached = vec![false; output + 1];
    adjoints[output] = seed;
    reached[output] = true;

    for index in (0..=output).rev() {
        if !reached[index] {
            continue;
        }
        let incoming = adjoints[index];
        accumulators[index] += incoming;

        for local in nodes[index].partials() {
            let operand = local.operand.index;
            adjoints[operand] += incoming * local.partial;
            reached[operand] = true;
        }
        log::trace!("sweep: node {} adjoint {}", index, incoming);
    }
}

fn worklist(nodes: &[Node], output: usize, seed: f64, accumulators: &mut [f64]) {
    let mut pending = vec![(output, seed)];
    let mut visits = 0usize;

    while let Some((index, incoming)) = pending.pop() {
        visits += 1;
        accumulators[index] += incoming;
        for local in nodes[index].partials() {
            pending.push((local.operand.index, incoming * local.partial));
        }
    }
    log::trace!("worklist: {} node visits from output {}", visits, output);
}
