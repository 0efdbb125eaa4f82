// Declare the main modules of the crate
pub mod autograd;
pub mod error;
pub mod number;
pub mod ops;

// Re-export the node type so it is reachable as `scalargrad_core::Number`
pub use number::Number;
// Re-export traits required by public functions/structs
pub use num_traits;

pub use error::ScalarGradError;
