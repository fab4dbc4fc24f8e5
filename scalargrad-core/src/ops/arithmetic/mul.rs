// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::error::AutogradError;
use crate::node::{Node, Op};
use crate::ops::apply_binary_op;
use crate::value::{Operand, Value};

/// Multiplies two scalars, \( z = a \cdot b \).
///
/// A bare number for `b` is promoted into a new leaf.
///
/// The backward rule uses the product rule:
/// \\[ \frac{dL}{da} = \frac{dL}{dz} \cdot b, \quad \frac{dL}{db} = \frac{dL}{dz} \cdot a \\]
///
/// # Errors
/// Returns `AutogradError::GraphMismatch` if `b` is a node of a different graph.
pub fn mul_op<'g>(a: Value<'g>, b: impl Into<Operand<'g>>) -> Result<Value<'g>, AutogradError> {
    apply_binary_op(a, b.into(), |x, y| x * y, Op::Mul, "mul_op")
}

/// `mul(a, b)` for two nodes already known to share a graph.
pub(crate) fn product<'g>(a: Value<'g>, b: Value<'g>) -> Value<'g> {
    debug_assert!(a.same_graph(&b));
    a.graph()
        .push(Node::new(a.data() * b.data(), Op::Mul([a.id(), b.id()])))
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
