// scalargrad-core/src/ops/arithmetic/neg.rs

use crate::ops::arithmetic::mul::product;
use crate::value::Value;

/// Negates a scalar, \( z = -a \).
///
/// Negation has no node kind of its own: it is `mul(a, -1)`, so it appends a
/// promoted `-1` leaf and a `mul` node, and the gradient flows through the
/// multiplication rule.
pub fn neg_op(a: Value<'_>) -> Value<'_> {
    let minus_one = a.graph().leaf(-1.0);
    product(a, minus_one)
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
