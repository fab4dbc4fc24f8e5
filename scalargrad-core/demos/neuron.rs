//! A single tanh neuron, `out = tanh(w1*x1 + w2*x2 + b)`, differentiated with
//! respect to its inputs and parameters.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use scalargrad_core::Graph;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = StdRng::seed_from_u64(42);
    let init = Normal::new(0.0, 1.0)?;

    let graph = Graph::new();
    let x1 = graph.leaf_with_label(2.0, "x1");
    let x2 = graph.leaf_with_label(0.0, "x2");
    let w1 = graph.leaf_with_label(init.sample(&mut rng), "w1");
    let w2 = graph.leaf_with_label(init.sample(&mut rng), "w2");
    let b = graph.leaf_with_label(6.881_373_587_019_543, "b");

    let n = (x1 * w1 + x2 * w2 + b).with_label("n");
    let out = n.tanh().with_label("out");
    out.backward();

    println!("graph holds {} nodes", graph.len());
    for v in out.topological_order() {
        println!(
            "{:>4} {:>5} {}",
            v.label().unwrap_or_default(),
            v.op().name(),
            v
        );
    }
    Ok(())
}
