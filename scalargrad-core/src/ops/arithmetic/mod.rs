// scalargrad-core/src/ops/arithmetic/mod.rs

pub mod add;
pub mod div;
pub mod mul;
pub mod pow;
pub mod sub;

pub use add::add;
pub use div::div;
pub use mul::mul;
pub use pow::pow;
pub use sub::sub;
