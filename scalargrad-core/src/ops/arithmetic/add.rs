// scalargrad-core/src/ops/arithmetic/add.rs

use crate::autograd::Operation;
use crate::error::ScalarGradError;
use crate::number::Number;
use num_traits::Float;
use std::fmt::Debug;
use std::rc::Rc;

// --- Forward Operation ---

/// Adds two graph nodes: `a + b`.
///
/// Returns a new [`Number`] whose creator is an [`AddOp`] capturing both
/// operand handles for the backward pass.
pub fn add<T>(a: &Number<T>, b: &Number<T>) -> Result<Number<T>, ScalarGradError>
where
    T: Float + Debug + 'static,
{
    let value = a.value() + b.value();
    let op = AddOp {
        a: a.clone(),
        b: b.clone(),
    };
    Ok(Number::from_op(value, Rc::new(op)))
}

// --- Operation node ---

/// Creator node for addition: d(a + b)/da = 1, d(a + b)/db = 1.
#[derive(Debug)]
pub(crate) struct AddOp<T: Float + Debug + 'static> {
    a: Number<T>,
    b: Number<T>,
}

impl<T> Operation<T> for AddOp<T>
where
    T: Float + Debug + 'static,
{
    fn operands(&self) -> (&Number<T>, &Number<T>) {
        (&self.a, &self.b)
    }

    fn partial_wrt_a(&self) -> Result<T, ScalarGradError> {
        Ok(T::one())
    }

    fn partial_wrt_b(&self) -> Result<T, ScalarGradError> {
        Ok(T::one())
    }

    fn symbol(&self) -> &'static str {
        "+"
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_forward() {
        let a = Number::new(2.0_f64);
        let b = Number::new(3.5_f64);
        let result = add(&a, &b).unwrap();
        assert_eq!(result.value(), 5.5);
        assert!(!result.is_leaf());
    }

    #[test]
    fn test_add_partials() {
        let op = AddOp {
            a: Number::new(2.0_f64),
            b: Number::new(3.5_f64),
        };
        assert_eq!(op.partial_wrt_a().unwrap(), 1.0);
        assert_eq!(op.partial_wrt_b().unwrap(), 1.0);
    }

    #[test]
    fn test_add_backward() {
        let a = Number::new(2.0_f64);
        let b = Number::new(3.5_f64);
        let result = add(&a, &b).unwrap();
        result.backward().unwrap();
        assert_eq!(a.grad(), 1.0);
        assert_eq!(b.grad(), 1.0);
    }

    #[test]
    fn test_add_with_shared_operand() {
        // x + x routes the upstream gradient twice into the same leaf
        let x = Number::new(4.0_f64);
        let result = add(&x, &x).unwrap();
        result.backward().unwrap();
        assert_eq!(x.grad(), 2.0);
    }
}
