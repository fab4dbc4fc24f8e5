// scalargrad-core/src/ops/math_elem/exp.rs

use crate::node::Op;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// Computes \( z = e^{a} \).
///
/// The derivative of the exponential is the exponential itself, so the
/// backward rule reuses the node's own data:
/// \\[ \frac{dL}{da} = \frac{dL}{dz} \cdot z \\]
///
/// Overflow is not checked; large inputs produce `f64::INFINITY`.
pub fn exp_op(a: Value<'_>) -> Value<'_> {
    apply_unary_op(a, f64::exp, Op::Exp)
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
