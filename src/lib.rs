//! A dense 2-D matrix abstraction with broadcasting arithmetic, and a
//! minimal single-layer perceptron trained on top of it.

pub mod matrix;
pub mod neural;
pub mod prelude;
pub mod random;
