use crate::prelude::*;
use crate::random::{RandomSource, ThreadRandom};
use std::ops::Index;

mod fmt;
pub mod ops;

/// Dense, immutable 2-D matrix of `f64` values.
///
/// Stored row-major as a flat buffer. Every operation returns a new
/// matrix; an instance never changes after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    dim: (usize, usize),
}

/// Tie-breaking strategy for [`Matrix::round_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoundMode {
    /// Ties round away from zero.
    #[default]
    HalfUp,
    /// Ties round toward zero.
    HalfDown,
    /// Ties round to the even neighbor.
    HalfEven,
    /// Ties round to the odd neighbor.
    HalfOdd,
}

impl Matrix {
    /// Creates a matrix of the given size filled with random values in [0, 1],
    /// drawn from the thread-local generator.
    pub fn random(rows: i64, columns: i64) -> Result<Self> {
        Self::random_with(rows, columns, &mut ThreadRandom)
    }

    /// Creates a matrix of the given size filled with random values in [0, 1],
    /// drawn from an explicit source.
    ///
    /// Each cell is sampled over 100,000,001 discrete points.
    pub fn random_with(rows: i64, columns: i64, source: &mut dyn RandomSource) -> Result<Self> {
        let (rows, columns) = Self::validate(rows, columns)?;

        let mut data = Vec::with_capacity(rows * columns);
        for _ in 0..rows * columns {
            data.push(source.generate_range(0, 100_000_000) as f64 * 1e-8);
        }

        Ok(Self {
            data,
            dim: (rows, columns),
        })
    }

    /// Creates a matrix from nested row-major values.
    ///
    /// The column count is established by the first row; every other row
    /// must match it.
    pub fn from_vec(values: Vec<Vec<f64>>) -> Result<Self> {
        let rows = values.len();
        let columns = values.first().map_or(0, Vec::len);

        for (row, value) in values.iter().enumerate() {
            if value.len() != columns {
                return Err(Error::MalformedInput {
                    row,
                    columns,
                    length: value.len(),
                });
            }
        }

        if rows == 0 || columns == 0 {
            return Ok(Self {
                data: Vec::new(),
                dim: (rows, columns),
            });
        }

        let mut data = Vec::with_capacity(rows * columns);
        for value in values {
            data.extend(value);
        }

        Ok(Self {
            data,
            dim: (rows, columns),
        })
    }

    /// Creates a matrix from a rectangular array, widening integer elements.
    pub fn from_array<T, const R: usize, const C: usize>(arr: [[T; C]; R]) -> Self
    where
        T: Into<f64>,
    {
        let mut data = Vec::with_capacity(R * C);
        for row in arr {
            for x in row {
                data.push(x.into());
            }
        }

        Self { data, dim: (R, C) }
    }

    /// Creates a matrix of the given size with every cell equal to `value`.
    pub fn filled<T: Into<f64>>(rows: i64, columns: i64, value: T) -> Result<Self> {
        let (rows, columns) = Self::validate(rows, columns)?;
        Ok(Self {
            data: vec![value.into(); rows * columns],
            dim: (rows, columns),
        })
    }

    fn validate(rows: i64, columns: i64) -> Result<(usize, usize)> {
        if rows < 0 {
            return Err(Error::InvalidShape {
                axis: Axis::Rows,
                value: rows,
            });
        }
        if columns < 0 {
            return Err(Error::InvalidShape {
                axis: Axis::Columns,
                value: columns,
            });
        }
        Ok((rows as usize, columns as usize))
    }

    pub fn dim(&self) -> (usize, usize) {
        self.dim
    }

    pub fn rows(&self) -> usize {
        self.dim.0
    }

    pub fn cols(&self) -> usize {
        self.dim.1
    }

    /// Returns a new matrix with `f` applied to every element.
    pub fn apply<F: Fn(f64) -> f64>(&self, f: F) -> Self {
        Self {
            data: self.data.iter().map(|&x| f(x)).collect(),
            dim: self.dim,
        }
    }

    /// Rounds every element to `precision` decimal digits, ties away from zero.
    pub fn round(&self, precision: u32) -> Self {
        self.round_with(precision, RoundMode::HalfUp)
    }

    /// Rounds every element to `precision` decimal digits with an explicit
    /// tie-breaking mode.
    pub fn round_with(&self, precision: u32, mode: RoundMode) -> Self {
        self.apply(|x| round_value(x, precision, mode))
    }

    /// Builds a matrix of the requested shape by indexing this matrix
    /// cyclically: target cell `(i, j)` reads `(i % rows, j % cols)`.
    ///
    /// The source must be non-empty whenever the target shape is non-empty.
    pub fn broadcast(&self, rows: usize, columns: usize) -> Self {
        let mut data = Vec::with_capacity(rows * columns);
        for i in 0..rows {
            for j in 0..columns {
                data.push(self[(i % self.rows(), j % self.cols())]);
            }
        }

        Self {
            data,
            dim: (rows, columns),
        }
    }

    /// Consumes the matrix into nested row-major values.
    ///
    /// Any matrix with a zero dimension converts to no rows at all.
    pub fn to_vec(self) -> Vec<Vec<f64>> {
        self.as_vec()
    }

    /// Copies the matrix out as nested row-major values.
    pub fn as_vec(&self) -> Vec<Vec<f64>> {
        if self.data.is_empty() {
            return Vec::new();
        }
        (0..self.rows())
            .map(|i| self.data[i * self.cols()..(i + 1) * self.cols()].to_vec())
            .collect()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;
    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.data[i * self.cols() + j]
    }
}

fn round_value(value: f64, precision: u32, mode: RoundMode) -> f64 {
    let scale = 10f64.powi(precision as i32);
    let scaled = value * scale;
    let tie = (scaled - scaled.trunc()).abs() == 0.5;

    let rounded = match mode {
        RoundMode::HalfDown if tie => scaled.trunc(),
        RoundMode::HalfEven if tie => scaled.round_ties_even(),
        RoundMode::HalfOdd if tie => {
            let toward_zero = scaled.trunc();
            if (toward_zero as i64) % 2 != 0 {
                toward_zero
            } else {
                toward_zero + scaled.signum()
            }
        }
        // f64::round already breaks ties away from zero.
        _ => scaled.round(),
    };

    rounded / scale
}
