use super::Matrix;
use crate::prelude::*;
use std::ops::{Add, Mul, Sub};

pub trait Dot<I> {
    type Output;
    fn dot(self, rhs: I) -> Result<Self::Output>;
}

pub trait Transpose {
    fn transpose(&self) -> Self;
}

impl Transpose for Matrix {
    fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.rows() * self.cols());
        for i in 0..self.cols() {
            for j in 0..self.rows() {
                data.push(self[(j, i)]);
            }
        }

        Matrix {
            data,
            dim: (self.cols(), self.rows()),
        }
    }
}

impl Matrix {
    /// Combines two matrices element-wise after reconciling their shapes.
    ///
    /// Matching shapes combine directly. Otherwise, when this matrix's
    /// column count equals the other's row count, both operands are
    /// broadcast to `(rhs.rows, self.cols)` and combined. Anything else is
    /// an incompatible pair.
    pub fn broadcast_and_apply<F>(&self, rhs: &Matrix, f: F) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.dim != rhs.dim {
            if self.cols() == rhs.rows() {
                let lhs = self.broadcast(rhs.rows(), self.cols());
                let rhs = rhs.broadcast(lhs.rows(), lhs.cols());
                return lhs.broadcast_and_apply(&rhs, f);
            }
            return Err(Error::IncompatibleShape {
                op: BinaryOp::Combine,
                lhs_rows: self.rows(),
                lhs_columns: self.cols(),
                rhs_rows: rhs.rows(),
                rhs_columns: rhs.cols(),
            });
        }

        let data = self
            .data
            .iter()
            .zip(&rhs.data)
            .map(|(&l, &r)| f(l, r))
            .collect();

        Ok(Matrix {
            data,
            dim: self.dim,
        })
    }
}

impl Dot<&Matrix> for &Matrix {
    type Output = Matrix;
    fn dot(self, rhs: &Matrix) -> Result<Self::Output> {
        if self.cols() != rhs.rows() {
            return Err(Error::IncompatibleShape {
                op: BinaryOp::Dot,
                lhs_rows: self.rows(),
                lhs_columns: self.cols(),
                rhs_rows: rhs.rows(),
                rhs_columns: rhs.cols(),
            });
        }

        let mut data = Vec::with_capacity(self.rows() * rhs.cols());
        for i in 0..self.rows() {
            for j in 0..rhs.cols() {
                let mut sum = 0.0;
                for k in 0..self.cols() {
                    sum += self[(i, k)] * rhs[(k, j)];
                }
                data.push(sum);
            }
        }

        Ok(Matrix {
            data,
            dim: (self.rows(), rhs.cols()),
        })
    }
}

/// Adds two matrices element-wise through the broadcasting rules.
impl Add for &Matrix {
    type Output = Result<Matrix>;
    fn add(self, rhs: Self) -> Self::Output {
        self.broadcast_and_apply(rhs, |l, r| l + r)
    }
}

/// Subtracts two matrices element-wise through the broadcasting rules.
impl Sub for &Matrix {
    type Output = Result<Matrix>;
    fn sub(self, rhs: Self) -> Self::Output {
        self.broadcast_and_apply(rhs, |l, r| l - r)
    }
}

/// Multiplies two matrices element-wise through the broadcasting rules.
/// This is not matrix multiplication; see [`Dot`].
impl Mul for &Matrix {
    type Output = Result<Matrix>;
    fn mul(self, rhs: Self) -> Self::Output {
        self.broadcast_and_apply(rhs, |l, r| l * r)
    }
}

#[cfg(test)]
mod tests {
    use crate::matrix::{
        ops::{Dot, Transpose},
        Matrix,
    };
    use crate::prelude::*;

    #[test]
    fn matrix_transpose() {
        let matrix = Matrix::from_array([[1, 2, 3], [4, 5, 6]]).transpose();

        assert_eq!(matrix.dim(), (3, 2));
        assert_eq!(
            matrix.to_vec(),
            [[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]]
        );
    }

    #[test]
    fn transpose_is_self_inverse() {
        let matrix = Matrix::from_array([[1.5, -2.0, 0.25], [4.0, 0.0, -8.5]]);
        assert_eq!(matrix.transpose().transpose(), matrix);

        let empty = Matrix::filled(0, 3, 0).unwrap();
        assert_eq!(empty.transpose().dim(), (3, 0));
        assert_eq!(empty.transpose().transpose(), empty);
    }

    #[test]
    fn square_matrix_multiplication() {
        let m1 = Matrix::from_array([[1, 2], [3, 4]]);
        let m2 = Matrix::from_array([[3, 2], [1, 3]]);

        let m3 = m1.dot(&m2).unwrap();

        assert_eq!(m3, Matrix::from_array([[5, 8], [13, 18]]));
        assert_eq!(m3.dim(), (2, 2));
    }

    #[test]
    fn filled_matrix_multiplication() {
        let m1 = Matrix::filled(2, 3, 1).unwrap();
        let m2 = Matrix::filled(3, 3, 2).unwrap();
        assert_eq!(m1.dot(&m2), Ok(Matrix::filled(2, 3, 6).unwrap()));

        let m1 = Matrix::filled(2, 4, 1).unwrap();
        let m2 = Matrix::filled(4, 5, 2).unwrap();
        assert_eq!(m1.dot(&m2), Ok(Matrix::filled(2, 5, 8).unwrap()));
    }

    #[test]
    fn zero_dimension_dot_product() {
        let m1 = Matrix::filled(0, 1, 1).unwrap();
        let m2 = Matrix::filled(1, 0, 2).unwrap();
        assert_eq!(m1.dot(&m2), Ok(Matrix::filled(0, 0, 0).unwrap()));

        // A zero-length inner dimension still produces a fully-shaped
        // zero-filled result.
        let m1 = Matrix::filled(1, 0, 1).unwrap();
        let m2 = Matrix::filled(0, 1, 2).unwrap();
        assert_eq!(m1.dot(&m2), Ok(Matrix::filled(1, 1, 0).unwrap()));
    }

    #[test]
    fn matrix_multiplication_error() {
        let m1 = Matrix::filled(3, 2, 1).unwrap();
        let m2 = Matrix::filled(3, 3, 1).unwrap();

        let err = m1.dot(&m2).unwrap_err();
        assert_eq!(
            err,
            Error::IncompatibleShape {
                op: BinaryOp::Dot,
                lhs_rows: 3,
                lhs_columns: 2,
                rhs_rows: 3,
                rhs_columns: 3,
            }
        );
        assert_eq!(
            err.to_string(),
            "cannot compute dot product of a 3x2 matrix with a 3x3 matrix"
        );
    }

    #[test]
    fn matrix_addition() {
        let m1 = Matrix::from_array([[1, 2], [3, 4], [5, 6]]);
        let m2 = Matrix::from_array([[1, 2], [3, 4], [2, 1]]);

        let m3 = &m1 + &m2;
        assert_eq!(m3.unwrap(), Matrix::from_array([[2, 4], [6, 8], [7, 7]]));
    }

    #[test]
    fn matrix_subtraction() {
        let m1 = Matrix::from_array([[1, 2], [3, 4]]);
        let m2 = Matrix::from_array([[0, 2], [1, 1]]);

        let m3 = &m1 - &m2;
        assert_eq!(m3.unwrap(), Matrix::from_array([[1, 0], [2, 3]]));
    }

    #[test]
    fn matrix_elementwise_multiplication() {
        let m1 = Matrix::from_array([[1, 2], [3, 4]]);
        let m2 = Matrix::from_array([[2, 2], [0, -1]]);

        let m3 = &m1 * &m2;
        assert_eq!(m3.unwrap(), Matrix::from_array([[2, 4], [0, -4]]));
    }

    #[test]
    fn broadcasting_aligns_inner_dimensions() {
        // (2,3) + (3,1): both operands broadcast to (3,3), rows of the left
        // and columns of the right replicating cyclically.
        let m1 = Matrix::from_array([[1, 2, 3], [4, 5, 6]]);
        let m2 = Matrix::from_array([[10], [20], [30]]);

        let m3 = (&m1 + &m2).unwrap();
        assert_eq!(
            m3,
            Matrix::from_array([[11, 12, 13], [24, 25, 26], [31, 32, 33]])
        );
    }

    #[test]
    fn square_matrices_combine_directly() {
        // Equal square shapes also satisfy the inner-dimension rule;
        // combination stays element-wise.
        let m1 = Matrix::from_array([[1, 2], [3, 4]]);
        let m2 = Matrix::from_array([[10, 20], [30, 40]]);

        let m3 = (&m1 + &m2).unwrap();
        assert_eq!(m3, Matrix::from_array([[11, 22], [33, 44]]));
    }

    #[test]
    fn broadcasting_error() {
        let m1 = Matrix::filled(3, 2, 1).unwrap();
        let m2 = Matrix::filled(3, 3, 1).unwrap();

        let err = m1.broadcast_and_apply(&m2, |l, r| l + r).unwrap_err();
        assert_eq!(
            err,
            Error::IncompatibleShape {
                op: BinaryOp::Combine,
                lhs_rows: 3,
                lhs_columns: 2,
                rhs_rows: 3,
                rhs_columns: 3,
            }
        );
        assert_eq!(
            err.to_string(),
            "cannot combine a 3x2 matrix with a 3x3 matrix"
        );

        // The operators surface the same failure.
        assert_eq!((&m1 + &m2).unwrap_err(), err);
        assert_eq!((&m1 - &m2).unwrap_err(), err);
        assert_eq!((&m1 * &m2).unwrap_err(), err);
    }
}
