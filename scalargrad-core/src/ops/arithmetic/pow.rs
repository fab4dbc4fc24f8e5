// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::error::AutogradError;
use crate::node::Op;
use crate::ops::apply_unary_op;
use crate::value::{Operand, Value};

/// Raises a scalar to a constant power, \( z = a^k \).
///
/// Only the base is differentiable. The exponent is stored in the node's
/// [`Op::Pow`] tag and the backward rule is
/// \\[ \frac{dL}{da} = \frac{dL}{dz} \cdot k \, a^{k-1} \\]
///
/// # Errors
/// Returns `AutogradError::UnsupportedOperand` if `exponent` is a graph node.
/// The check runs before anything is appended to the graph.
pub fn pow_op<'g>(
    base: Value<'g>,
    exponent: impl Into<Operand<'g>>,
) -> Result<Value<'g>, AutogradError> {
    match exponent.into() {
        Operand::Scalar(k) => Ok(powf(base, k)),
        Operand::Node(node) => Err(AutogradError::unsupported_operand(
            "pow_op",
            format!(
                "exponent must be a numeric constant, got graph node {}",
                node.id()
            ),
        )),
    }
}

/// Infallible form of [`pow_op`] for a known constant exponent.
pub(crate) fn powf(base: Value<'_>, exponent: f64) -> Value<'_> {
    apply_unary_op(
        base,
        |x| x.powf(exponent),
        |[id]| Op::Pow {
            base: [id],
            exponent,
        },
    )
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
