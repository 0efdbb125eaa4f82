//! Builds a small expression graph, runs a backward pass, and prints the
//! gradients of each input. Run with `RUST_LOG=trace` to watch the gradient
//! flow through each operation.

use scalargrad_core::{Number, ScalarGradError};

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();

    let x = Number::new(3.0_f64);
    let y = Number::new(4.0_f64);

    // f = (x + y) * x, using the fallible graph-builder API
    let f = x.add(&y)?.mul(&x)?;
    println!("f(x=3, y=4) = {}", f.value());

    f.backward()?;
    println!("df/dx = {}", x.grad());
    println!("df/dy = {}", y.grad());

    // Reuse the same graph with a different seed after clearing gradients.
    f.null_gradients();
    f.backprop(2.0)?;
    println!("with seed 2: df/dx = {}, df/dy = {}", x.grad(), y.grad());

    // The operator sugar builds the same graph shape.
    let g = &(&x + &y) * &x;
    println!("sugar: g = {}", g.value());

    Ok(())
}
