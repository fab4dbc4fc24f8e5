// scalargrad-core/src/ops/arithmetic/div.rs

use crate::error::AutogradError;
use crate::ops::arithmetic::mul::product;
use crate::ops::arithmetic::pow::powf;
use crate::value::{Operand, Value};

/// Divides two scalars, \( z = a / b \), as `mul(a, pow(b, -1))`.
///
/// A node `b` goes through a `pow` node with exponent `-1`. A bare number `b`
/// is inverted before promotion, so only a leaf holding `1 / b` is added.
/// Division by zero is not checked and yields IEEE infinities or NaN.
///
/// # Errors
/// Returns `AutogradError::GraphMismatch` if `b` is a node of a different graph.
/// The check runs before the reciprocal is built.
pub fn div_op<'g>(a: Value<'g>, b: impl Into<Operand<'g>>) -> Result<Value<'g>, AutogradError> {
    match b.into() {
        Operand::Scalar(k) => Ok(product(a, a.graph().leaf(k.powi(-1)))),
        Operand::Node(b) if !a.same_graph(&b) => Err(AutogradError::graph_mismatch("div_op")),
        Operand::Node(b) => Ok(product(a, powf(b, -1.0))),
    }
}

/// Computes \( z = k / a \) for a constant `k`, as `mul(pow(a, -1), k)`.
pub(crate) fn rdiv(k: f64, a: Value<'_>) -> Value<'_> {
    let reciprocal = powf(a, -1.0);
    product(reciprocal, a.graph().leaf(k))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
