//! # Scalar Operations Module (`ops`)
//!
//! Every operation here is both a forward evaluator and a graph builder: it
//! computes the result's `data` from its operands and appends a new node whose
//! [`Op`] tag records the operands as parents. The matching backward rule lives
//! in [`crate::autograd::backward_op`] and is selected by that tag.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** each operation has an `xxx_op` function that the
//!   operator overloads and `Value` methods call. The binary ops (`add`, `mul`,
//!   `pow`, `sub`, `div`) return `Result<Value, AutogradError>`; the unary ops
//!   (`neg`, `exp`, `tanh`, `relu`) cannot fail and return a `Value`.
//! - **Primitives vs. derived ops:** `add`, `mul`, `pow`, `exp`, `tanh` and `relu`
//!   create nodes with their own tag. `neg`, `sub` and `div` are compositions of
//!   primitives and produce exactly the nodes the composition would.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, mul, pow and the derived neg, sub, div.
//! - [`math_elem`]: exp.
//! - [`activation`]: tanh, relu.

use crate::error::AutogradError;
use crate::node::{Node, NodeId, Op};
use crate::value::{Operand, Value};

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

pub use activation::{relu_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use math_elem::exp_op;

/// Helper for binary primitives.
///
/// Promotes `rhs` into a node of `lhs`'s graph, evaluates `forward` on the two
/// data values, and appends the node built by `make_op` from the operand ids.
/// Nothing is allocated when `rhs` belongs to another graph.
pub(crate) fn apply_binary_op<'g, F, B>(
    lhs: Value<'g>,
    rhs: Operand<'g>,
    forward: F,
    make_op: B,
    op_name: &str,
) -> Result<Value<'g>, AutogradError>
where
    F: Fn(f64, f64) -> f64,
    B: FnOnce([NodeId; 2]) -> Op,
{
    let graph = lhs.graph();
    let rhs = rhs.into_value(graph, op_name)?;
    let data = forward(lhs.data(), rhs.data());
    Ok(graph.push(Node::new(data, make_op([lhs.id(), rhs.id()]))))
}

/// Helper for unary primitives. Unary ops cannot fail.
pub(crate) fn apply_unary_op<'g, F, B>(input: Value<'g>, forward: F, make_op: B) -> Value<'g>
where
    F: Fn(f64) -> f64,
    B: FnOnce([NodeId; 1]) -> Op,
{
    let data = forward(input.data());
    input.graph().push(Node::new(data, make_op([input.id()])))
}
