use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scalargrad_core::{AutogradError, Value};

/// One step of a randomly generated expression. Operands index into the
/// values produced so far (inputs first, then earlier steps).
#[derive(Debug, Clone, Copy)]
pub enum Step {
    Add(usize, usize),
    Sub(usize, usize),
    Mul(usize, usize),
    /// `a / (1 + b^2)`, so the denominator never reaches zero.
    SafeDiv(usize, usize),
    /// `tanh(a)^2`.
    BoundedSquare(usize),
    Tanh(usize),
    /// `exp(tanh(a))`, bounded so long chains stay finite.
    BoundedExp(usize),
    /// `relu(a + offset)`.
    ShiftedRelu(usize, f64),
    Scale(usize, f64),
}

/// Deterministic random expression over `inputs` leaves.
#[allow(dead_code)]
pub fn random_recipe(seed: u64, inputs: usize, steps: usize) -> Vec<Step> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut recipe = Vec::with_capacity(steps);
    for i in 0..steps {
        let available = inputs + i;
        let a = rng.gen_range(0..available);
        let b = rng.gen_range(0..available);
        let step = match rng.gen_range(0..9) {
            0 => Step::Add(a, b),
            1 => Step::Sub(a, b),
            2 => Step::Mul(a, b),
            3 => Step::SafeDiv(a, b),
            4 => Step::BoundedSquare(a),
            5 => Step::Tanh(a),
            6 => Step::BoundedExp(a),
            // offsets keep the kink away from typical values
            7 => Step::ShiftedRelu(a, if rng.gen_bool(0.5) { 3.5 } else { -3.5 }),
            _ => Step::Scale(a, rng.gen_range(-2.0..2.0)),
        };
        recipe.push(step);
    }
    recipe
}

/// Builds the expression described by `recipe` on top of `leaves`.
#[allow(dead_code)]
pub fn build<'g>(recipe: &[Step], leaves: &[Value<'g>]) -> Result<Value<'g>, AutogradError> {
    let mut values: Vec<Value<'g>> = leaves.to_vec();
    for step in recipe {
        let next = match *step {
            Step::Add(a, b) => values[a] + values[b],
            Step::Sub(a, b) => values[a] - values[b],
            Step::Mul(a, b) => values[a] * values[b],
            Step::SafeDiv(a, b) => values[a] / (values[b].pow(2)? + 1.0),
            Step::BoundedSquare(a) => values[a].tanh().pow(2.0)?,
            Step::Tanh(a) => values[a].tanh(),
            Step::BoundedExp(a) => values[a].tanh().exp(),
            Step::ShiftedRelu(a, offset) => (values[a] + offset).relu(),
            Step::Scale(a, k) => k * values[a],
        };
        values.push(next);
    }
    Ok(*values.last().expect("recipe over at least one leaf"))
}

/// Random leaf values in `[-1, 1)`.
#[allow(dead_code)]
pub fn random_inputs(seed: u64, count: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(-1.0..1.0)).collect()
}
