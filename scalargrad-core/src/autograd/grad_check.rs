use crate::error::ScalarGradError;
use crate::number::Number;
use approx::relative_eq;
use num_traits::{Float, ToPrimitive};
use std::fmt::Debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64, // Use f64 for reporting regardless of T
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),

    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ScalarGradError),

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

fn as_f64<T: ToPrimitive>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` receives one leaf [`Number`] per entry of `inputs` and must return
/// the terminal node of the expression under test. The analytical gradients
/// come from a single backward pass seeded with 1; the numerical gradient for
/// input `i` is `(f(x_i + eps) - f(x_i - eps)) / (2 * eps)` with all other
/// inputs held fixed.
///
/// A mismatch is reported only if the absolute difference exceeds `tolerance`
/// *and* the relative comparison fails, so large-magnitude gradients are not
/// penalized by the absolute test.
pub fn check_grad<T, F>(
    func: F,
    inputs: &[T],
    epsilon: T,
    tolerance: T,
) -> Result<(), GradCheckError>
where
    T: Float + Debug + 'static,
    F: Fn(&[Number<T>]) -> Result<Number<T>, ScalarGradError>,
{
    // --- 1. Analytical gradients from one forward + backward pass ---
    let leaves: Vec<Number<T>> = inputs.iter().map(|&v| Number::new(v)).collect();
    let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
    output.backward().map_err(GradCheckError::BackwardPassError)?;
    let analytical_grads: Vec<T> = leaves.iter().map(|leaf| leaf.grad()).collect();

    let two = T::one() + T::one();

    // --- 2. Perturb each input and compare ---
    for (i, &original) in inputs.iter().enumerate() {
        let eval_at = |perturbed_value: T| -> Result<T, GradCheckError> {
            let mut values = inputs.to_vec();
            values[i] = perturbed_value;
            let leaves: Vec<Number<T>> = values.iter().map(|&v| Number::new(v)).collect();
            let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
            Ok(output.value())
        };

        let loss_plus = eval_at(original + epsilon)?;
        let loss_minus = eval_at(original - epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (two * epsilon);
        let analytical_grad = analytical_grads[i];

        if numerical_grad.is_nan() || numerical_grad.is_infinite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus: as_f64(loss_plus),
                loss_minus: as_f64(loss_minus),
            });
        }
        if analytical_grad.is_nan() || analytical_grad.is_infinite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: as_f64(analytical_grad),
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        if difference > tolerance {
            let relative_ok = relative_eq!(
                as_f64(analytical_grad),
                as_f64(numerical_grad),
                max_relative = as_f64(tolerance)
            );
            if !relative_ok {
                return Err(GradCheckError::GradientMismatch {
                    input_index: i,
                    analytical_grad: as_f64(analytical_grad),
                    numerical_grad: as_f64(numerical_grad),
                    difference: as_f64(difference),
                });
            }
        }
    }

    Ok(())
}
