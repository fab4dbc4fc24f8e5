// scalargrad-core/src/ops/arithmetic/sub.rs

use crate::error::AutogradError;
use crate::ops::arithmetic::add::sum;
use crate::ops::arithmetic::neg_op;
use crate::value::{Operand, Value};

/// Subtracts two scalars, \( z = a - b \), as `add(a, neg(b))`.
///
/// A node `b` is negated through the graph (a `-1` leaf and a `mul` node). A
/// bare number `b` is negated before promotion, so only a leaf holding `-b` is
/// added.
///
/// # Errors
/// Returns `AutogradError::GraphMismatch` if `b` is a node of a different graph.
/// The check runs before the negation is built.
pub fn sub_op<'g>(a: Value<'g>, b: impl Into<Operand<'g>>) -> Result<Value<'g>, AutogradError> {
    match b.into() {
        Operand::Scalar(k) => Ok(sum(a, a.graph().leaf(-k))),
        Operand::Node(b) if !a.same_graph(&b) => Err(AutogradError::graph_mismatch("sub_op")),
        Operand::Node(b) => Ok(sum(a, neg_op(b))),
    }
}

/// Computes \( z = k - a \) for a constant `k`, as `add(neg(a), k)`.
pub(crate) fn rsub(k: f64, a: Value<'_>) -> Value<'_> {
    let negated = neg_op(a);
    sum(negated, a.graph().leaf(k))
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
