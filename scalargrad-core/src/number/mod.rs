use crate::autograd::Operation;
use crate::error::ScalarGradError;
use crate::ops::arithmetic;
use num_traits::Float;
use std::cell::RefCell;
use std::fmt;
use std::fmt::Debug;
use std::rc::Rc;

mod ops_impls;

/// Internal node state shared by every handle to the same graph node.
pub(crate) struct NumberData<T> {
    /// Forward value, fixed at creation.
    pub(crate) value: T,
    /// Accumulated dF/d(this node); zero until a backward pass runs.
    pub(crate) grad: T,
    /// The operation that produced this node, `None` for leaves. Set once at
    /// creation and never mutated afterwards.
    pub(crate) creator: Option<Rc<dyn Operation<T>>>,
}

/// A scalar node in the computation graph.
///
/// `Number` uses `Rc<RefCell<NumberData>>` internally to allow for:
/// 1.  **Shared ownership:** the same node can feed several downstream
///     operations (diamond-shaped graphs) through cheap handle clones.
/// 2.  **Interior mutability:** `grad` is accumulated through immutable
///     handles during the backward pass.
///
/// The graph is single-threaded by design; `Rc`/`RefCell` rather than
/// `Arc`/`RwLock` because concurrent mutation is not supported.
pub struct Number<T: Float + Debug + 'static> {
    pub(crate) data: Rc<RefCell<NumberData<T>>>,
}

impl<T: Float + Debug + 'static> Clone for Number<T> {
    /// Clones the handle, not the node: both handles address the same
    /// value/gradient state.
    fn clone(&self) -> Self {
        Number {
            data: Rc::clone(&self.data),
        }
    }
}

impl<T: Float + Debug + 'static> Number<T> {
    /// Creates a leaf node (no creator) with the given value and zero gradient.
    pub fn new(value: T) -> Self {
        Number {
            data: Rc::new(RefCell::new(NumberData {
                value,
                grad: T::zero(),
                creator: None,
            })),
        }
    }

    /// Creates a derived node recording the operation that produced it.
    pub(crate) fn from_op(value: T, creator: Rc<dyn Operation<T>>) -> Self {
        Number {
            data: Rc::new(RefCell::new(NumberData {
                value,
                grad: T::zero(),
                creator: Some(creator),
            })),
        }
    }

    /// Returns the forward value of this node.
    pub fn value(&self) -> T {
        self.data.borrow().value
    }

    /// Returns the gradient accumulated at this node so far.
    pub fn grad(&self) -> T {
        self.data.borrow().grad
    }

    /// Returns true if this node is an input (has no creator operation).
    pub fn is_leaf(&self) -> bool {
        self.data.borrow().creator.is_none()
    }

    /// Returns true if both handles address the same graph node.
    pub fn same_node(&self, other: &Number<T>) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    /// Accumulates `grad` into this node and pushes it further toward the
    /// leaves through the creator operation, if any.
    ///
    /// Accumulation is by summation, never overwrite, so a node reached via
    /// multiple paths ends up with the sum of all path contributions. Call
    /// [`Number::null_gradients`] before reusing the graph with a new seed.
    pub fn backprop(&self, grad: T) -> Result<(), ScalarGradError> {
        let creator = {
            let mut node = self.data.borrow_mut();
            node.grad = node.grad + grad;
            node.creator.clone()
        };
        match creator {
            Some(op) => op.backprop(grad),
            None => Ok(()),
        }
    }

    /// Runs a backward pass from this node, seeding it with dF/dF = 1.
    pub fn backward(&self) -> Result<(), ScalarGradError> {
        log::debug!("backward: seeding terminal node (value {:?}) with grad 1", self.value());
        self.backprop(T::one())
    }

    /// Resets the gradient of this node and of every ancestor reachable
    /// through its creator chain.
    pub fn null_gradients(&self) {
        let creator = {
            let mut node = self.data.borrow_mut();
            node.grad = T::zero();
            node.creator.clone()
        };
        if let Some(op) = creator {
            op.null_gradients();
        }
    }

    // --- Graph-builder API ---
    // One fallible method per operator; the std::ops overloads in `ops_impls`
    // are sugar layered on top of these.

    /// `self + other`, recorded in the graph.
    pub fn add(&self, other: &Number<T>) -> Result<Number<T>, ScalarGradError> {
        arithmetic::add(self, other)
    }

    /// `self - other`, recorded in the graph.
    pub fn sub(&self, other: &Number<T>) -> Result<Number<T>, ScalarGradError> {
        arithmetic::sub(self, other)
    }

    /// `self * other`, recorded in the graph.
    pub fn mul(&self, other: &Number<T>) -> Result<Number<T>, ScalarGradError> {
        arithmetic::mul(self, other)
    }

    /// `self / other`, recorded in the graph. Fails with
    /// [`ScalarGradError::DivisionByZero`] if `other` is zero.
    pub fn div(&self, other: &Number<T>) -> Result<Number<T>, ScalarGradError> {
        arithmetic::div(self, other)
    }

    /// `self ^ other`, recorded in the graph. The derivative with respect to
    /// the exponent requires a positive base; see
    /// [`ScalarGradError::NonPositiveBase`].
    pub fn pow(&self, other: &Number<T>) -> Result<Number<T>, ScalarGradError> {
        arithmetic::pow(self, other)
    }
}

impl<T: Float + Debug + 'static> From<T> for Number<T> {
    /// Wraps a literal scalar as a leaf node.
    fn from(value: T) -> Self {
        Number::new(value)
    }
}

impl<T: Float + Debug + 'static> Debug for Number<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.data.borrow();
        let mut builder = f.debug_struct("Number");
        builder.field("value", &node.value).field("grad", &node.grad);
        match &node.creator {
            Some(op) => builder.field("creator", &op.symbol()),
            None => builder.field("creator", &"leaf"),
        };
        builder.finish()
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_construction() {
        let x = Number::new(3.5_f64);
        assert_eq!(x.value(), 3.5);
        assert_eq!(x.grad(), 0.0);
        assert!(x.is_leaf());
    }

    #[test]
    fn test_from_literal() {
        let x: Number<f32> = Number::from(2.0_f32);
        assert_eq!(x.value(), 2.0);
        assert!(x.is_leaf());
    }

    #[test]
    fn test_clone_shares_node() {
        let x = Number::new(1.0_f64);
        let y = x.clone();
        assert!(x.same_node(&y));
        x.backprop(2.0).unwrap();
        assert_eq!(y.grad(), 2.0);
    }

    #[test]
    fn test_backprop_accumulates_on_leaf() {
        let x = Number::new(1.0_f64);
        x.backprop(2.0).unwrap();
        x.backprop(3.0).unwrap();
        assert_eq!(x.grad(), 5.0, "gradients must sum, not overwrite");
    }

    #[test]
    fn test_derived_node_records_creator() {
        let x = Number::new(2.0_f64);
        let y = Number::new(3.0_f64);
        let z = x.mul(&y).unwrap();
        assert!(!z.is_leaf());
        assert_eq!(z.value(), 6.0);
    }

    #[test]
    fn test_null_gradients_resets_chain() {
        let x = Number::new(2.0_f64);
        let y = Number::new(3.0_f64);
        let z = x.mul(&y).unwrap();
        z.backward().unwrap();
        assert_eq!(x.grad(), 3.0);
        z.null_gradients();
        assert_eq!(z.grad(), 0.0);
        assert_eq!(x.grad(), 0.0);
        assert_eq!(y.grad(), 0.0);
    }

    #[test]
    fn test_backward_with_custom_seed() {
        let x = Number::new(2.0_f64);
        let y = Number::new(3.0_f64);
        let z = x.mul(&y).unwrap();
        z.backprop(10.0).unwrap();
        assert_eq!(x.grad(), 30.0);
        assert_eq!(y.grad(), 20.0);
    }

    #[test]
    fn test_debug_format_mentions_creator_symbol() {
        let x = Number::new(2.0_f64);
        let z = x.mul(&x).unwrap();
        let rendered = format!("{:?}", z);
        assert!(rendered.contains("\"*\""), "got {rendered}");
        let rendered_leaf = format!("{:?}", x);
        assert!(rendered_leaf.contains("leaf"), "got {rendered_leaf}");
    }
}
