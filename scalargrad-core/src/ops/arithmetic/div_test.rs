use crate::autograd::grad_check::{check_grad, GradCheckConfig};
use crate::error::AutogradError;
use crate::graph::Graph;
use crate::ops::arithmetic::div::rdiv;
use crate::ops::arithmetic::{div_op, mul_op, pow_op};
use approx::assert_relative_eq;

#[test]
fn test_div_forward_and_backward() -> Result<(), AutogradError> {
    let graph = Graph::new();
    let a = graph.leaf(6.0);
    let b = graph.leaf(4.0);
    let c = div_op(a, b)?;
    c.backward();
    assert_relative_eq!(c.data(), 1.5);
    assert_relative_eq!(a.grad(), 0.25);
    assert_relative_eq!(b.grad(), -6.0 / 16.0);
    Ok(())
}

#[test]
fn test_div_matches_primitive_composition() -> Result<(), AutogradError> {
    let derived = Graph::new();
    let a = derived.leaf(-2.0);
    let b = derived.leaf(0.8);
    let c = div_op(a, b)?;
    c.backward();

    let primitive = Graph::new();
    let a2 = primitive.leaf(-2.0);
    let b2 = primitive.leaf(0.8);
    let inv_b2 = pow_op(b2, -1.0)?;
    let c2 = mul_op(a2, inv_b2)?;
    c2.backward();

    // two leaves, pow, mul
    assert_eq!(derived.len(), 4);
    assert_eq!(derived.len(), primitive.len());
    assert_relative_eq!(c.data(), c2.data());
    assert_relative_eq!(a.grad(), a2.grad());
    assert_relative_eq!(b.grad(), b2.grad());
    Ok(())
}

#[test]
fn test_div_by_scalar() -> Result<(), AutogradError> {
    let graph = Graph::new();
    let a = graph.leaf(3.0);
    let c = div_op(a, 2.0)?;
    c.backward();
    assert_relative_eq!(c.data(), 1.5);
    assert_relative_eq!(a.grad(), 0.5);
    assert_eq!(graph.len(), 3);
    Ok(())
}

#[test]
fn test_rdiv() {
    let graph = Graph::new();
    let a = graph.leaf(2.0);
    let c = rdiv(1.0, a);
    c.backward();
    assert_relative_eq!(c.data(), 0.5);
    assert_relative_eq!(a.grad(), -0.25);
    // a, pow, 1.0 leaf, mul
    assert_eq!(graph.len(), 4);
}

#[test]
fn test_div_by_zero_propagates_infinity() -> Result<(), AutogradError> {
    let graph = Graph::new();
    let a = graph.leaf(1.0);
    let b = graph.leaf(0.0);
    let c = div_op(a, b)?;
    assert!(c.data().is_infinite());
    Ok(())
}

#[test]
fn test_div_grad_check() {
    let result = check_grad(
        |xs| div_op(xs[0], xs[1]),
        &[1.2, -0.9],
        &GradCheckConfig::default(),
    );
    assert!(result.is_ok(), "Div grad check failed: {:?}", result.err());
}
