// scalargrad-core/src/ops/arithmetic/div.rs

use crate::autograd::Operation;
use crate::error::ScalarGradError;
use crate::number::Number;
use num_traits::Float;
use std::fmt::Debug;
use std::rc::Rc;

// --- Forward Operation ---

/// Divides two graph nodes: `a / b`.
///
/// Fails with [`ScalarGradError::DivisionByZero`] if `b` is zero.
pub fn div<T>(a: &Number<T>, b: &Number<T>) -> Result<Number<T>, ScalarGradError>
where
    T: Float + Debug + 'static,
{
    if b.value() == T::zero() {
        return Err(ScalarGradError::DivisionByZero);
    }
    let value = a.value() / b.value();
    let op = DivOp {
        a: a.clone(),
        b: b.clone(),
    };
    Ok(Number::from_op(value, Rc::new(op)))
}

// --- Operation node ---

/// Creator node for division: d(a / b)/da = 1/b, d(a / b)/db = -a/b².
///
/// A successful forward pass guarantees `b != 0`; the partials still check,
/// so derivative evaluation on a corrupted graph fails loudly instead of
/// producing infinities.
#[derive(Debug)]
pub(crate) struct DivOp<T: Float + Debug + 'static> {
    a: Number<T>,
    b: Number<T>,
}

impl<T> Operation<T> for DivOp<T>
where
    T: Float + Debug + 'static,
{
    fn operands(&self) -> (&Number<T>, &Number<T>) {
        (&self.a, &self.b)
    }

    fn partial_wrt_a(&self) -> Result<T, ScalarGradError> {
        let b = self.b.value();
        if b == T::zero() {
            return Err(ScalarGradError::DivisionByZero);
        }
        Ok(T::one() / b)
    }

    fn partial_wrt_b(&self) -> Result<T, ScalarGradError> {
        let b = self.b.value();
        if b == T::zero() {
            return Err(ScalarGradError::DivisionByZero);
        }
        Ok(-self.a.value() / (b * b))
    }

    fn symbol(&self) -> &'static str {
        "/"
    }
}

// --- Tests ---
