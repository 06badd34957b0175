use log::info;

use crate::matrix::{
    ops::{Dot, Transpose},
    Matrix,
};
use crate::prelude::*;
use crate::random::{RandomSource, ThreadRandom};

/// Single-layer perceptron over three inputs, trained by additive
/// gradient-style weight adjustment.
#[derive(Debug, Clone)]
pub struct Perceptron {
    iterations: usize,
    iterations_per_log: Option<usize>,
    weights: Matrix,
}

impl Perceptron {
    /// Initializes a perceptron with weights drawn from the thread-local
    /// generator.
    pub fn create(iterations: usize) -> Self {
        Self::create_with(iterations, &mut ThreadRandom)
    }

    /// Initializes a perceptron with weights drawn from an explicit source,
    /// remapped to be uniform in [-1, 1].
    pub fn create_with(iterations: usize, source: &mut dyn RandomSource) -> Self {
        let weights = Matrix::random_with(3, 1, source)
            .unwrap()
            .apply(|x| 2.0 * x - 1.0);
        Self::with_weights(iterations, weights)
    }

    /// Wraps a fixed iteration count around explicit starting weights.
    pub fn with_weights(iterations: usize, weights: Matrix) -> Self {
        Self {
            iterations,
            iterations_per_log: None,
            weights,
        }
    }

    /// Logs the mean squared error every `iterations_per_log` iterations
    /// while training.
    pub fn with_log(mut self, iterations_per_log: Option<usize>) -> Self {
        self.iterations_per_log = iterations_per_log;
        self
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    fn sigmoid(x: &Matrix) -> Matrix {
        x.apply(|n| 1.0 / (1.0 + (-n).exp()))
    }

    // The derivative is expressed in terms of the sigmoid output itself:
    // d/dx sigmoid(x) = n * (1 - n) where n = sigmoid(x).
    fn sigmoid_derivative(x: &Matrix) -> Matrix {
        x.apply(|n| n * (1.0 - n))
    }

    /// Runs the input through the layer, producing one activation per row.
    ///
    /// The input's column count must equal the weight matrix's row count.
    pub fn predict(&self, input: &Matrix) -> Result<Matrix> {
        Ok(Self::sigmoid(&input.dot(&self.weights)?))
    }

    /// Adjusts the weights over the fixed iteration count.
    ///
    /// Each iteration predicts, takes the prediction error against `output`,
    /// scales it by the sigmoid derivative, and adds the transposed-input
    /// projection of that gradient back onto the weights. The loop runs to
    /// completion; there is no convergence check. A shape error aborts the
    /// call, leaving the weights at the last completed iteration's value.
    pub fn train(&mut self, input: &Matrix, output: &Matrix) -> Result<()> {
        for i in 0..self.iterations {
            let predicted = self.predict(input)?;
            let error = (output - &predicted)?;
            let gradient = (&error * &Self::sigmoid_derivative(&predicted))?;
            let adjustment = input.transpose().dot(&gradient)?;

            self.weights = (&self.weights + &adjustment)?;

            if self.iterations_per_log.is_some_and(|ipl| i % ipl == 0) {
                let mse = self.mean_squared_error(input, output)?;
                info!("iteration {i} error: {mse}");
            }
        }
        Ok(())
    }

    /// Mean squared prediction error against `output`.
    pub fn mean_squared_error(&self, input: &Matrix, output: &Matrix) -> Result<f64> {
        let predicted = self.predict(input)?;
        if predicted.dim() != output.dim() {
            return Err(Error::IncompatibleShape {
                op: BinaryOp::Combine,
                lhs_rows: predicted.rows(),
                lhs_columns: predicted.cols(),
                rhs_rows: output.rows(),
                rhs_columns: output.cols(),
            });
        }

        let mut sum = 0.0;
        for i in 0..predicted.rows() {
            for j in 0..predicted.cols() {
                let diff = predicted[(i, j)] - output[(i, j)];
                sum += diff * diff;
            }
        }
        Ok(sum / (output.rows() * output.cols()) as f64)
    }
}
