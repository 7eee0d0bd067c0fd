use alloc::vec::Vec;

use crate::error::MathError;
use crate::traits::Scalar;

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Transpose: `(M×N) → (N×M)`, element `[j, i] = original [i, j]`.
    ///
    /// ```
    /// use matvec::Matrix;
    /// let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    /// let t = m.transpose();
    /// assert_eq!((t.nrows(), t.ncols()), (3, 2));
    /// assert_eq!(t[(1, 0)], 2.0);
    /// ```
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.nrows * self.ncols);
        for j in 0..self.ncols {
            for i in 0..self.nrows {
                data.push(self.data[i * self.ncols + j]);
            }
        }
        Matrix {
            data,
            nrows: self.ncols,
            ncols: self.nrows,
        }
    }

    /// The `(M−1)×(N−1)` matrix with `row` and `col` removed.
    ///
    /// Fails with [`MathError::NoMinor`] for a single-row or single-column
    /// matrix, and with [`MathError::PositionOutOfRange`] for bad indices.
    ///
    /// ```
    /// use matvec::Matrix;
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// let minor = m.minor_matrix(0, 0).unwrap();
    /// assert_eq!((minor.nrows(), minor.ncols()), (1, 1));
    /// assert_eq!(minor[(0, 0)], 4.0);
    /// ```
    pub fn minor_matrix(&self, row: usize, col: usize) -> Result<Self, MathError> {
        if self.nrows == 1 || self.ncols == 1 {
            return Err(MathError::NoMinor {
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        self.position_check(row, col)?;

        let mut data = Vec::with_capacity((self.nrows - 1) * (self.ncols - 1));
        for i in (0..self.nrows).filter(|&i| i != row) {
            for j in (0..self.ncols).filter(|&j| j != col) {
                data.push(self.data[i * self.ncols + j]);
            }
        }
        Ok(Matrix {
            data,
            nrows: self.nrows - 1,
            ncols: self.ncols - 1,
        })
    }

    /// Reduce to upper-triangle form by column-wise elimination.
    ///
    /// For each pivot column, the first row at or below the diagonal with a
    /// nonzero entry in that column is *added* into the pivot row when the
    /// pivot slot is zero (not swapped with it; row addition keeps the
    /// determinant unchanged, but the reduced matrix differs from textbook
    /// row-echelon output). Columns with no such row are skipped. Entries
    /// below each pivot are then eliminated by subtracting a multiple of
    /// the pivot row. Zero tests are exact.
    ///
    /// ```
    /// use matvec::Matrix;
    /// let m = Matrix::from_rows(&[[2.0, 1.0], [4.0, 5.0]]).unwrap();
    /// let u = m.upper_triangle();
    /// assert_eq!(u, Matrix::from_rows(&[[2.0, 1.0], [0.0, 3.0]]).unwrap());
    /// ```
    pub fn upper_triangle(&self) -> Self {
        let mut result = self.clone();

        for j in 0..result.ncols - 1 {
            let pivot_row = match result.find_nonzero_row(j, j) {
                Some(row) => row,
                None => continue,
            };

            if pivot_row != j {
                for k in 0..result.ncols {
                    let add = result.data[pivot_row * result.ncols + k];
                    result.data[j * result.ncols + k] =
                        result.data[j * result.ncols + k] + add;
                }
            }

            for i in j + 1..result.nrows {
                if result.data[i * result.ncols + j] != T::zero() {
                    let multiplier = result.data[i * result.ncols + j]
                        / result.data[j * result.ncols + j];
                    for k in 0..result.ncols {
                        let sub = result.data[j * result.ncols + k] * multiplier;
                        result.data[i * result.ncols + k] =
                            result.data[i * result.ncols + k] - sub;
                    }
                }
            }
        }

        result
    }

    /// Determinant, as the diagonal product of the upper-triangle form.
    ///
    /// Fails with [`MathError::NotSquare`] for a rectangular matrix.
    /// Returns early once a zero diagonal entry is multiplied in; the
    /// product is the same either way.
    ///
    /// ```
    /// use matvec::Matrix;
    /// let m = Matrix::from_rows(&[[2.0, 1.0], [4.0, 5.0]]).unwrap();
    /// assert_eq!(m.determinant().unwrap(), 6.0);
    /// ```
    pub fn determinant(&self) -> Result<T, MathError> {
        self.square_check()?;

        let triangle = self.upper_triangle();
        let mut result = T::one();
        for i in 0..triangle.nrows {
            result = result * triangle.data[i * triangle.ncols + i];
            if result == T::zero() {
                return Ok(T::zero());
            }
        }
        Ok(result)
    }

    /// Matrix of cofactors: entry `(i, j)` is the determinant of the minor
    /// at `(i, j)`, negated when `i + j` is odd.
    ///
    /// Fails with [`MathError::NotSquare`] for a rectangular matrix; a 1×1
    /// matrix fails through its minor with [`MathError::NoMinor`].
    ///
    /// ```
    /// use matvec::Matrix;
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// let c = m.complements_matrix().unwrap();
    /// assert_eq!(c, Matrix::from_rows(&[[4.0, -3.0], [-2.0, 1.0]]).unwrap());
    /// ```
    pub fn complements_matrix(&self) -> Result<Self, MathError> {
        self.square_check()?;

        let mut result = Self::zeros(self.nrows, self.ncols, T::zero())?;
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                let det = self.minor_matrix(i, j)?.determinant()?;
                result.data[i * self.ncols + j] = if (i + j) % 2 == 1 {
                    T::zero() - det
                } else {
                    det
                };
            }
        }
        Ok(result)
    }

    /// Inverse, as the transposed cofactor matrix divided by the
    /// determinant.
    ///
    /// Fails with [`MathError::Singular`] when the determinant is exactly
    /// zero. The comparison is strict equality with no epsilon tolerance;
    /// callers wanting a tolerance should test
    /// [`determinant`](Matrix::determinant) themselves first.
    ///
    /// ```
    /// use matvec::Matrix;
    /// let m = Matrix::from_rows(&[[4.0, 6.0], [2.0, 4.0]]).unwrap();
    /// let inv = m.inverse().unwrap();
    /// assert_eq!(inv, Matrix::from_rows(&[[1.0, -1.5], [-0.5, 1.0]]).unwrap());
    /// ```
    pub fn inverse(&self) -> Result<Self, MathError> {
        let det = self.determinant()?;
        if det == T::zero() {
            return Err(MathError::Singular);
        }
        Ok(self.complements_matrix()?.transpose() / det)
    }

    fn square_check(&self) -> Result<(), MathError> {
        if !self.is_square() {
            return Err(MathError::NotSquare {
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        Ok(())
    }

    /// First row at or below `from_row` with a nonzero entry in `col`.
    fn find_nonzero_row(&self, from_row: usize, col: usize) -> Option<usize> {
        (from_row..self.nrows).find(|&i| self.data[i * self.ncols + col] != T::zero())
    }
}
