// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::Operation;
use crate::error::ScalarGradError;
use crate::number::Number;
use num_traits::{Float, ToPrimitive};
use std::fmt::Debug;
use std::rc::Rc;

// --- Forward Operation ---

/// Exponentiates two graph nodes: `a ^ b`.
///
/// The forward pass accepts any operands `powf` accepts; a negative base with
/// a non-integer exponent yields NaN, as with plain floats. The derivative
/// with respect to the exponent needs `ln(a)` and therefore a strictly
/// positive base; [`PowOp::partial_wrt_b`] fails fast with
/// [`ScalarGradError::NonPositiveBase`] otherwise.
pub fn pow<T>(a: &Number<T>, b: &Number<T>) -> Result<Number<T>, ScalarGradError>
where
    T: Float + Debug + 'static,
{
    let value = a.value().powf(b.value());
    let op = PowOp {
        a: a.clone(),
        b: b.clone(),
    };
    Ok(Number::from_op(value, Rc::new(op)))
}

// --- Operation node ---

/// Creator node for exponentiation:
/// d(a^b)/da = b * a^(b-1), d(a^b)/db = a^b * ln(a).
#[derive(Debug)]
pub(crate) struct PowOp<T: Float + Debug + 'static> {
    a: Number<T>,
    b: Number<T>,
}

impl<T> Operation<T> for PowOp<T>
where
    T: Float + Debug + 'static,
{
    fn operands(&self) -> (&Number<T>, &Number<T>) {
        (&self.a, &self.b)
    }

    fn partial_wrt_a(&self) -> Result<T, ScalarGradError> {
        let a = self.a.value();
        let b = self.b.value();
        Ok(b * a.powf(b - T::one()))
    }

    fn partial_wrt_b(&self) -> Result<T, ScalarGradError> {
        let a = self.a.value();
        if a <= T::zero() {
            return Err(ScalarGradError::NonPositiveBase {
                base: a.to_f64().unwrap_or(f64::NAN),
            });
        }
        let b = self.b.value();
        Ok(a.powf(b) * a.ln())
    }

    fn symbol(&self) -> &'static str {
        "**"
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pow_forward() {
        let a = Number::new(2.0_f64);
        let b = Number::new(3.0_f64);
        let result = pow(&a, &b).unwrap();
        assert_eq!(result.value(), 8.0);

        let half = pow(&Number::new(9.0_f64), &Number::new(0.5_f64)).unwrap();
        assert_relative_eq!(half.value(), 3.0);
    }

    #[test]
    fn test_pow_partials() {
        let op = PowOp {
            a: Number::new(2.0_f64),
            b: Number::new(3.0_f64),
        };
        // b * a^(b-1) = 3 * 4 = 12
        assert_relative_eq!(op.partial_wrt_a().unwrap(), 12.0);
        // a^b * ln(a) = 8 * ln 2
        assert_relative_eq!(op.partial_wrt_b().unwrap(), 8.0 * 2.0_f64.ln());
    }

    #[test]
    fn test_pow_partial_wrt_b_rejects_non_positive_base() {
        let zero_base = PowOp {
            a: Number::new(0.0_f64),
            b: Number::new(2.0_f64),
        };
        assert_eq!(
            zero_base.partial_wrt_b(),
            Err(ScalarGradError::NonPositiveBase { base: 0.0 })
        );

        let negative_base = PowOp {
            a: Number::new(-3.0_f64),
            b: Number::new(2.0_f64),
        };
        assert_eq!(
            negative_base.partial_wrt_b(),
            Err(ScalarGradError::NonPositiveBase { base: -3.0 })
        );
    }

    #[test]
    fn test_pow_backward() {
        let a = Number::new(2.0_f64);
        let b = Number::new(3.0_f64);
        let result = pow(&a, &b).unwrap();
        result.backward().unwrap();
        assert_relative_eq!(a.grad(), 12.0);
        assert_relative_eq!(b.grad(), 8.0 * 2.0_f64.ln());
    }

    #[test]
    fn test_pow_backward_surfaces_domain_error() {
        let a = Number::new(-2.0_f64);
        let b = Number::new(3.0_f64);
        let result = pow(&a, &b).unwrap();
        // Forward works fine for an integer exponent, but the backward pass
        // needs ln(a) and must fail fast.
        assert_eq!(result.value(), -8.0);
        assert_eq!(
            result.backward().unwrap_err(),
            ScalarGradError::NonPositiveBase { base: -2.0 }
        );
    }
}
