// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::autograd::Operation;
use crate::error::ScalarGradError;
use crate::number::Number;
use num_traits::Float;
use std::fmt::Debug;
use std::rc::Rc;

// --- Forward Operation ---

/// Multiplies two graph nodes: `a * b`.
pub fn mul<T>(a: &Number<T>, b: &Number<T>) -> Result<Number<T>, ScalarGradError>
where
    T: Float + Debug + 'static,
{
    let value = a.value() * b.value();
    let op = MulOp {
        a: a.clone(),
        b: b.clone(),
    };
    Ok(Number::from_op(value, Rc::new(op)))
}

// --- Operation node ---

/// Creator node for multiplication: d(a * b)/da = b, d(a * b)/db = a.
#[derive(Debug)]
pub(crate) struct MulOp<T: Float + Debug + 'static> {
    a: Number<T>,
    b: Number<T>,
}

impl<T> Operation<T> for MulOp<T>
where
    T: Float + Debug + 'static,
{
    fn operands(&self) -> (&Number<T>, &Number<T>) {
        (&self.a, &self.b)
    }

    fn partial_wrt_a(&self) -> Result<T, ScalarGradError> {
        Ok(self.b.value())
    }

    fn partial_wrt_b(&self) -> Result<T, ScalarGradError> {
        Ok(self.a.value())
    }

    fn symbol(&self) -> &'static str {
        "*"
    }
}

// --- Tests ---
