use thiserror::Error;

/// Custom error type for the ScalarGrad core.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Division by zero error")]
    DivisionByZero,

    #[error("Power derivative requires a positive base for the ln(a) term, got base = {base}")]
    NonPositiveBase { base: f64 },
    // NotImplemented and UsageError from the original taxonomy have no variants here:
    // operation variants are concrete structs behind a trait, and operands are
    // captured when the forward result is constructed, so neither state is
    // representable.
}
