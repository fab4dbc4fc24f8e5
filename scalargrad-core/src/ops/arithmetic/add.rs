// scalargrad-core/src/ops/arithmetic/add.rs

use crate::error::AutogradError;
use crate::node::{Node, Op};
use crate::ops::apply_binary_op;
use crate::value::{Operand, Value};

/// Adds two scalars, \( z = a + b \).
///
/// `b` may be another node of the same graph or a bare number, which is
/// promoted into a new leaf. Backward passes `dL/dz` through unchanged to both
/// operands.
///
/// # Errors
/// Returns `AutogradError::GraphMismatch` if `b` is a node of a different graph.
pub fn add_op<'g>(a: Value<'g>, b: impl Into<Operand<'g>>) -> Result<Value<'g>, AutogradError> {
    apply_binary_op(a, b.into(), |x, y| x + y, Op::Add, "add_op")
}

/// `add(a, b)` for two nodes already known to share a graph.
pub(crate) fn sum<'g>(a: Value<'g>, b: Value<'g>) -> Value<'g> {
    debug_assert!(a.same_graph(&b));
    a.graph()
        .push(Node::new(a.data() + b.data(), Op::Add([a.id(), b.id()])))
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
