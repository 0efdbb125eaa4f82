//! Operator-overload sugar for [`Number`].
//!
//! The fallible graph-builder methods on [`Number`] (and the free functions in
//! [`crate::ops::arithmetic`]) are the primary API; these impls only wrap them
//! for ergonomic expression building. Like the method wrappers elsewhere in
//! the workspace they panic if the underlying operation fails, which for
//! division means a zero divisor and is unreachable for add/sub/mul.

use super::Number;
use crate::ops::arithmetic;
use num_traits::Float;
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

impl<'a, 'b, T: Float + Debug + 'static> Add<&'b Number<T>> for &'a Number<T> {
    type Output = Number<T>;

    fn add(self, rhs: &'b Number<T>) -> Number<T> {
        arithmetic::add(self, rhs).unwrap_or_else(|e| panic!("Number addition failed: {:?}", e))
    }
}

impl<'a, 'b, T: Float + Debug + 'static> Sub<&'b Number<T>> for &'a Number<T> {
    type Output = Number<T>;

    fn sub(self, rhs: &'b Number<T>) -> Number<T> {
        arithmetic::sub(self, rhs).unwrap_or_else(|e| panic!("Number subtraction failed: {:?}", e))
    }
}

impl<'a, 'b, T: Float + Debug + 'static> Mul<&'b Number<T>> for &'a Number<T> {
    type Output = Number<T>;

    fn mul(self, rhs: &'b Number<T>) -> Number<T> {
        arithmetic::mul(self, rhs)
            .unwrap_or_else(|e| panic!("Number multiplication failed: {:?}", e))
    }
}

impl<'a, 'b, T: Float + Debug + 'static> Div<&'b Number<T>> for &'a Number<T> {
    type Output = Number<T>;

    /// # Panics
    /// Panics on division by zero; use [`Number::div`] for a fallible variant.
    fn div(self, rhs: &'b Number<T>) -> Number<T> {
        arithmetic::div(self, rhs).unwrap_or_else(|e| panic!("Number division failed: {:?}", e))
    }
}

// Literal scalars on the right-hand side are auto-wrapped as leaves.

impl<'a, T: Float + Debug + 'static> Add<T> for &'a Number<T> {
    type Output = Number<T>;

    fn add(self, rhs: T) -> Number<T> {
        self + &Number::new(rhs)
    }
}

impl<'a, T: Float + Debug + 'static> Sub<T> for &'a Number<T> {
    type Output = Number<T>;

    fn sub(self, rhs: T) -> Number<T> {
        self - &Number::new(rhs)
    }
}

impl<'a, T: Float + Debug + 'static> Mul<T> for &'a Number<T> {
    type Output = Number<T>;

    fn mul(self, rhs: T) -> Number<T> {
        self * &Number::new(rhs)
    }
}

impl<'a, T: Float + Debug + 'static> Div<T> for &'a Number<T> {
    type Output = Number<T>;

    /// # Panics
    /// Panics on division by zero.
    fn div(self, rhs: T) -> Number<T> {
        self / &Number::new(rhs)
    }
}

// --- Tests ---
