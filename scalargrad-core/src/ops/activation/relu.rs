// scalargrad-core/src/ops/activation/relu.rs

use crate::node::Op;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// Applies the rectified linear unit, \( z = \max(0, a) \).
///
/// The subgradient at zero is 0: the backward rule only passes `dL/dz`
/// through when the output is strictly positive.
///
/// NaN inputs stay NaN in the forward value. They receive no gradient,
/// since `NaN > 0` is false.
pub fn relu_op(a: Value<'_>) -> Value<'_> {
    apply_unary_op(a, relu, Op::Relu)
}

fn relu(x: f64) -> f64 {
    if x > 0.0 || x.is_nan() {
        x
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
