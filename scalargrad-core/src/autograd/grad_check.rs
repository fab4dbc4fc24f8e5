use crate::error::AutogradError;
use crate::graph::Graph;
use crate::value::Value;
use log::{debug, warn};
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(AutogradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

impl From<AutogradError> for GradCheckError {
    fn from(err: AutogradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Step size and tolerances for [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Perturbation applied on each side of an input for the central difference.
    pub epsilon: f64,
    pub abs_tolerance: f64,
    /// Scaled by the larger magnitude of the two gradients.
    pub rel_tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            abs_tolerance: 1e-4,
            rel_tolerance: 1e-4,
        }
    }
}

/// Checks analytical gradients against numerical gradients using finite differences.
///
/// `func` receives one leaf per entry of `inputs` and builds the expression to
/// differentiate. It is first run on a fresh graph and differentiated with
/// `backward()`. Then, for each input \( x_i \), it is re-evaluated (forward
/// only, on fresh graphs) at \( x_i \pm \epsilon \) to get
/// \\[ \frac{f(x_i + \epsilon) - f(x_i - \epsilon)}{2\epsilon} \\]
/// The two gradients must agree within
/// `abs_tolerance + rel_tolerance * max(|analytical|, |numerical|)`.
///
/// Returns the analytical gradients, in input order, on success.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    config: &GradCheckConfig,
) -> Result<Vec<f64>, GradCheckError>
where
    F: for<'g> Fn(&[Value<'g>]) -> Result<Value<'g>, AutogradError>,
{
    // --- 1. Forward and backward pass for analytical gradients ---
    let analytical_grads = {
        let graph = Graph::new();
        let leaves: Vec<Value<'_>> = inputs.iter().map(|&x| graph.leaf(x)).collect();
        let output = func(leaves.as_slice())?;
        output.backward();
        leaves.iter().map(|leaf| leaf.grad()).collect::<Vec<f64>>()
    };
    debug!(
        "check_grad: {} inputs, analytical grads {:?}",
        inputs.len(),
        analytical_grads
    );

    // --- 2. Central differences, one input at a time ---
    for (input_index, &analytical_grad) in analytical_grads.iter().enumerate() {
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let loss_plus = evaluate_perturbed(&func, inputs, input_index, config.epsilon)?;
        let loss_minus = evaluate_perturbed(&func, inputs, input_index, -config.epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * config.epsilon);

        if !numerical_grad.is_finite() {
            warn!(
                "check_grad: non-finite numerical gradient for input {} (loss+ {}, loss- {})",
                input_index, loss_plus, loss_minus
            );
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        let tolerance = config.abs_tolerance
            + config.rel_tolerance * analytical_grad.abs().max(numerical_grad.abs());
        if difference > tolerance {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }

    Ok(analytical_grads)
}

/// Runs `func` forward on a fresh graph with input `index` shifted by `delta`.
fn evaluate_perturbed<F>(
    func: &F,
    inputs: &[f64],
    index: usize,
    delta: f64,
) -> Result<f64, GradCheckError>
where
    F: for<'g> Fn(&[Value<'g>]) -> Result<Value<'g>, AutogradError>,
{
    let graph = Graph::new();
    let leaves: Vec<Value<'_>> = inputs
        .iter()
        .enumerate()
        .map(|(i, &x)| graph.leaf(if i == index { x + delta } else { x }))
        .collect();
    Ok(func(leaves.as_slice())?.data())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_grad_returns_analytical_grads() {
        let grads = check_grad(
            |xs| Ok(xs[0] * xs[1] + xs[0]),
            &[3.0, -2.0],
            &GradCheckConfig::default(),
        )
        .expect("grad check should pass");
        assert_eq!(grads.len(), 2);
        approx::assert_relative_eq!(grads[0], -1.0, epsilon = 1e-12);
        approx::assert_relative_eq!(grads[1], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_check_grad_propagates_forward_errors() {
        let result = check_grad(|xs| xs[0].pow(xs[1]), &[2.0, 3.0], &GradCheckConfig::default());
        match result {
            Err(GradCheckError::ForwardPassError(AutogradError::UnsupportedOperand { .. })) => {}
            other => panic!("Expected ForwardPassError, got {:?}", other),
        }
    }

    #[test]
    fn test_check_grad_detects_detached_constant() {
        // Reading `data()` into a constant cuts that path out of the graph:
        // the forward value is x*x but backward only sees one factor.
        let result = check_grad(
            |xs| Ok(xs[0] * xs[0].data()),
            &[0.5],
            &GradCheckConfig::default(),
        );
        match result {
            Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                ..
            }) => {
                assert_eq!(input_index, 0);
                approx::assert_relative_eq!(analytical_grad, 0.5, epsilon = 1e-12);
                approx::assert_relative_eq!(numerical_grad, 1.0, epsilon = 1e-6);
            }
            other => panic!("Expected GradientMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_check_grad_reports_non_finite_analytical_grad() {
        let result = check_grad(|xs| xs[0].pow(0.5), &[0.0], &GradCheckConfig::default());
        assert!(matches!(
            result,
            Err(GradCheckError::AnalyticalGradNaNOrInfinite { input_index: 0, .. })
        ));
    }
}
