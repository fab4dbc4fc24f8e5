// scalargrad-core/src/ops/activation/tanh.rs

use crate::node::Op;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// Applies the hyperbolic tangent, \( z = \tanh(a) \).
///
/// The forward value comes from `f64::tanh`, which saturates to ±1 instead of
/// overflowing for large inputs. The backward rule is expressed through the
/// output:
/// \\[ \frac{dL}{da} = \frac{dL}{dz} \cdot (1 - z^2) \\]
pub fn tanh_op(a: Value<'_>) -> Value<'_> {
    apply_unary_op(a, f64::tanh, Op::Tanh)
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
