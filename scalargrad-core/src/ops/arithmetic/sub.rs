// scalargrad-core/src/ops/arithmetic/sub.rs

use crate::autograd::Operation;
use crate::error::ScalarGradError;
use crate::number::Number;
use num_traits::Float;
use std::fmt::Debug;
use std::rc::Rc;

// --- Forward Operation ---

/// Subtracts two graph nodes: `a - b`.
pub fn sub<T>(a: &Number<T>, b: &Number<T>) -> Result<Number<T>, ScalarGradError>
where
    T: Float + Debug + 'static,
{
    let value = a.value() - b.value();
    let op = SubOp {
        a: a.clone(),
        b: b.clone(),
    };
    Ok(Number::from_op(value, Rc::new(op)))
}

// --- Operation node ---

/// Creator node for subtraction: d(a - b)/da = 1, d(a - b)/db = -1.
#[derive(Debug)]
pub(crate) struct SubOp<T: Float + Debug + 'static> {
    a: Number<T>,
    b: Number<T>,
}

impl<T> Operation<T> for SubOp<T>
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
        Ok(-T::one())
    }

    fn symbol(&self) -> &'static str {
        "-"
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_forward() {
        let a = Number::new(2.0_f64);
        let b = Number::new(3.5_f64);
        let result = sub(&a, &b).unwrap();
        assert_eq!(result.value(), -1.5);
    }

    #[test]
    fn test_sub_partials() {
        let op = SubOp {
            a: Number::new(2.0_f64),
            b: Number::new(3.5_f64),
        };
        assert_eq!(op.partial_wrt_a().unwrap(), 1.0);
        assert_eq!(op.partial_wrt_b().unwrap(), -1.0);
    }

    #[test]
    fn test_sub_backward() {
        let a = Number::new(2.0_f64);
        let b = Number::new(3.5_f64);
        let result = sub(&a, &b).unwrap();
        result.backprop(4.0).unwrap();
        assert_eq!(a.grad(), 4.0);
        assert_eq!(b.grad(), -4.0);
    }

    #[test]
    fn test_sub_self_cancels() {
        // x - x: the two paths contribute +1 and -1, summing to 0
        let x = Number::new(7.0_f64);
        let result = sub(&x, &x).unwrap();
        assert_eq!(result.value(), 0.0);
        result.backward().unwrap();
        assert_eq!(x.grad(), 0.0);
    }
}
