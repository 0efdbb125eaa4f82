use crate::error::ScalarGradError;
use crate::number::Number;
use num_traits::Float;
use std::fmt::Debug;

pub mod grad_check;

pub use grad_check::{check_grad, GradCheckError};

/// Defines the interface for an operation node in the computation graph.
///
/// Every non-leaf [`Number`] holds an `Rc<dyn Operation>` describing the
/// arithmetic step that produced it. The implementing struct (one per
/// arithmetic variant: add, sub, mul, div, pow) captures clones of both
/// operand handles at forward time, so the partial derivatives always see the
/// operand values used by the forward pass.
///
/// Operands are exposed through [`Operation::operands`] as an explicit pair
/// rather than discovered by reflection, which makes graph traversal
/// statically enumerable.
pub trait Operation<T: Float + Debug + 'static>: Debug {
    /// Returns the `(a, b)` operand handles captured during the forward pass.
    ///
    /// The order **must** match the order in which [`Operation::partial_wrt_a`]
    /// and [`Operation::partial_wrt_b`] differentiate.
    fn operands(&self) -> (&Number<T>, &Number<T>);

    /// Local derivative of the forward formula with respect to the left
    /// operand, evaluated at the captured operand values: d(op)/da.
    fn partial_wrt_a(&self) -> Result<T, ScalarGradError>;

    /// Local derivative with respect to the right operand: d(op)/db.
    fn partial_wrt_b(&self) -> Result<T, ScalarGradError>;

    /// Display symbol for this operation ("+", "-", "*", "/", "**").
    fn symbol(&self) -> &'static str;

    /// Propagates an upstream derivative through this operation.
    ///
    /// `grad` is dF/d(output of this operation), where F is the terminal node
    /// on which `backprop` was originally invoked. The chain rule gives
    /// dF/da = d(op)/da * grad and dF/db = d(op)/db * grad; each is forwarded
    /// to the corresponding operand's own `backprop`, which accumulates it and
    /// continues toward the leaves.
    fn backprop(&self, grad: T) -> Result<(), ScalarGradError> {
        log::trace!("backprop through '{}' with upstream grad {:?}", self.symbol(), grad);
        let (a, b) = self.operands();
        // Evaluate both local derivatives before touching either operand, so a
        // domain failure in one partial leaves this operation's subtree
        // untouched.
        let partial_a = self.partial_wrt_a()?;
        let partial_b = self.partial_wrt_b()?;
        a.backprop(partial_a * grad)?;
        b.backprop(partial_b * grad)
    }

    /// Recursively resets the gradient of every [`Number`] reachable from this
    /// operation's operands. Used to clear a previously accumulated graph
    /// before reusing it with a new seed.
    fn null_gradients(&self) {
        let (a, b) = self.operands();
        a.null_gradients();
        b.null_gradients();
    }
}
