use crate::error::AutogradError;
use crate::ops::arithmetic::div::rdiv;
use crate::ops::arithmetic::sub::rsub;
use crate::ops::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::value::Value;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

// --- Identity ---

/// Two handles are equal when they point at the same node of the same graph.
/// Nodes with equal data are still distinct nodes.
impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.same_graph(other) && self.id == other.id
    }
}

impl Eq for Value<'_> {}

impl Hash for Value<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.graph, state);
        self.id.hash(state);
    }
}

// --- Formatting ---

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={}, grad={})", self.data(), self.grad())
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.graph.node(self.id);
        f.debug_struct("Value")
            .field("id", &self.id)
            .field("data", &node.data)
            .field("grad", &node.grad)
            .field("op", &node.op.name())
            .field("label", &node.label)
            .finish()
    }
}

// --- std::ops ---
//
// Operators cannot return `Result`, so they panic on the one failure the
// fallible `_op` functions can report: operands from two different graphs.

fn expect_same_graph<T>(result: Result<T, AutogradError>) -> T {
    result.unwrap_or_else(|err| panic!("{}", err))
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        /// # Panics
        /// Panics if the operands belong to different graphs.
        impl<'g> $trait<Value<'g>> for Value<'g> {
            type Output = Value<'g>;

            fn $method(self, rhs: Value<'g>) -> Value<'g> {
                expect_same_graph($op_fn(self, rhs))
            }
        }

        impl<'g> $trait<f64> for Value<'g> {
            type Output = Value<'g>;

            fn $method(self, rhs: f64) -> Value<'g> {
                expect_same_graph($op_fn(self, rhs))
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

impl<'g> Neg for Value<'g> {
    type Output = Value<'g>;

    fn neg(self) -> Value<'g> {
        neg_op(self)
    }
}

// Scalar on the left. The node stays the first operand for the commutative
// ops, matching `a + k` and `a * k`.

impl<'g> Add<Value<'g>> for f64 {
    type Output = Value<'g>;

    fn add(self, rhs: Value<'g>) -> Value<'g> {
        rhs + self
    }
}

impl<'g> Mul<Value<'g>> for f64 {
    type Output = Value<'g>;

    fn mul(self, rhs: Value<'g>) -> Value<'g> {
        rhs * self
    }
}

impl<'g> Sub<Value<'g>> for f64 {
    type Output = Value<'g>;

    fn sub(self, rhs: Value<'g>) -> Value<'g> {
        rsub(self, rhs)
    }
}

impl<'g> Div<Value<'g>> for f64 {
    type Output = Value<'g>;

    fn div(self, rhs: Value<'g>) -> Value<'g> {
        rdiv(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::Graph;
    use approx::assert_relative_eq;
    use std::collections::HashSet;

    #[test]
    fn test_operators_build_expected_values() {
        let graph = Graph::new();
        let a = graph.leaf(6.0);
        let b = graph.leaf(2.0);
        assert_relative_eq!((a + b).data(), 8.0);
        assert_relative_eq!((a - b).data(), 4.0);
        assert_relative_eq!((a * b).data(), 12.0);
        assert_relative_eq!((a / b).data(), 3.0);
        assert_relative_eq!((-a).data(), -6.0);
        assert_relative_eq!((a + 1.0).data(), 7.0);
        assert_relative_eq!((1.0 + a).data(), 7.0);
        assert_relative_eq!((2.0 * a).data(), 12.0);
        assert_relative_eq!((10.0 - a).data(), 4.0);
        assert_relative_eq!((3.0 / a).data(), 0.5);
    }

    #[test]
    fn test_reversed_operators_gradients() {
        let graph = Graph::new();
        let a = graph.leaf(4.0);
        let y = 2.0 / a + (1.0 - a) * 3.0;
        y.backward();
        // d/da (2/a) = -2/a^2, d/da 3(1-a) = -3
        assert_relative_eq!(a.grad(), -2.0 / 16.0 - 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_identity_not_value_equality() {
        let graph = Graph::new();
        let a = graph.leaf(1.0);
        let b = graph.leaf(1.0);
        assert_ne!(a, b);
        assert_eq!(a, a);
        let set: HashSet<_> = [a, b, a].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display_and_debug() {
        let graph = Graph::new();
        let a = graph.leaf_with_label(2.0, "a");
        assert_eq!(a.to_string(), "Value(data=2, grad=0)");
        let debug = format!("{:?}", a);
        assert!(debug.contains("op: \"none\""));
        assert!(debug.contains("label: Some(\"a\")"));
    }

    #[test]
    #[should_panic(expected = "different graphs")]
    fn test_operator_panics_on_foreign_operand() {
        let graph = Graph::new();
        let other = Graph::new();
        let _ = graph.leaf(1.0) * other.leaf(2.0);
    }
}
