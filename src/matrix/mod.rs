mod linalg;
mod ops;
mod util;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::error::MathError;
use crate::traits::Scalar;
use crate::vector::Vector;

/// Dynamically-sized heap-allocated dense matrix.
///
/// Row-major `Vec<T>` storage; dimensions are set at runtime and are always
/// at least 1×1. The checked accessors [`at`](Matrix::at) /
/// [`at_mut`](Matrix::at_mut) are the fallible access path; indexing with
/// `m[(row, col)]` performs the same bounds check and panics on violation.
///
/// # Examples
///
/// ```
/// use matvec::Matrix;
///
/// let m = Matrix::from_rows(&[[1.0_f64, 2.0], [3.0, 4.0]]).unwrap();
/// assert_eq!(m.nrows(), 2);
/// assert_eq!(m[(0, 1)], 2.0);
///
/// let id = Matrix::diagonal(3, 1.0).unwrap();
/// assert_eq!(id[(0, 0)], 1.0);
/// assert_eq!(id[(0, 1)], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Create an `n x n` matrix with `diag` on the main diagonal and zeros
    /// elsewhere.
    ///
    /// Fails with [`MathError::ZeroSize`] when `n == 0`.
    ///
    /// ```
    /// use matvec::Matrix;
    /// let m = Matrix::diagonal(2, 5.0).unwrap();
    /// assert_eq!(m[(1, 1)], 5.0);
    /// assert_eq!(m[(1, 0)], 0.0);
    /// ```
    pub fn diagonal(n: usize, diag: T) -> Result<Self, MathError> {
        let mut m = Self::zeros(n, n, T::zero())?;
        for i in 0..n {
            m.data[i * n + i] = diag;
        }
        Ok(m)
    }

    /// Create an `nrows x ncols` matrix filled with zeros.
    ///
    /// The `_zero` parameter is only used for type inference. Fails with
    /// [`MathError::ZeroSize`] when either extent is zero.
    ///
    /// ```
    /// use matvec::Matrix;
    /// let m = Matrix::zeros(2, 3, 0.0_f64).unwrap();
    /// assert_eq!(m.ncols(), 3);
    /// assert_eq!(m[(1, 2)], 0.0);
    /// ```
    pub fn zeros(nrows: usize, ncols: usize, _zero: T) -> Result<Self, MathError> {
        if nrows == 0 || ncols == 0 {
            return Err(MathError::ZeroSize);
        }
        Ok(Self {
            data: vec![T::zero(); nrows * ncols],
            nrows,
            ncols,
        })
    }

    /// Create a matrix from nested rows.
    ///
    /// Every row must have the first row's length, or construction fails
    /// with [`MathError::RaggedRow`]. An empty outer sequence or an empty
    /// first row fails with [`MathError::ZeroSize`].
    ///
    /// ```
    /// use matvec::Matrix;
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(m.nrows(), 2);
    /// assert_eq!(m[(0, 1)], 2.0);
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, MathError> {
        if rows.is_empty() {
            return Err(MathError::ZeroSize);
        }
        let ncols = rows[0].as_ref().len();
        if ncols == 0 {
            return Err(MathError::ZeroSize);
        }

        let mut data = Vec::with_capacity(rows.len() * ncols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != ncols {
                return Err(MathError::RaggedRow {
                    row: i,
                    expected: ncols,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            nrows: rows.len(),
            ncols,
        })
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// Fails with [`MathError::ZeroSize`] when either extent is zero.
    ///
    /// ```
    /// use matvec::Matrix;
    /// let m = Matrix::from_fn(3, 3, |i, j| if i == j { 1.0_f64 } else { 0.0 }).unwrap();
    /// assert_eq!(m[(0, 0)], 1.0);
    /// assert_eq!(m[(0, 1)], 0.0);
    /// ```
    pub fn from_fn(
        nrows: usize,
        ncols: usize,
        f: impl Fn(usize, usize) -> T,
    ) -> Result<Self, MathError> {
        if nrows == 0 || ncols == 0 {
            return Err(MathError::ZeroSize);
        }
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Create a `1 x N` matrix from a vector's elements as its single row.
    ///
    /// ```
    /// use matvec::{Matrix, Vector};
    /// let m = Matrix::from_row(&Vector::xyz(1.0, 2.0, 3.0));
    /// assert_eq!((m.nrows(), m.ncols()), (1, 3));
    /// assert_eq!(m[(0, 2)], 3.0);
    /// ```
    pub fn from_row(v: &Vector<T>) -> Self {
        Self {
            data: v.as_slice().to_vec(),
            nrows: 1,
            ncols: v.len(),
        }
    }

    /// Create an `N x 1` matrix from a vector's elements as its single column.
    ///
    /// ```
    /// use matvec::{Matrix, Vector};
    /// let m = Matrix::from_column(&Vector::xyz(1.0, 2.0, 3.0));
    /// assert_eq!((m.nrows(), m.ncols()), (3, 1));
    /// assert_eq!(m[(2, 0)], 3.0);
    /// ```
    pub fn from_column(v: &Vector<T>) -> Self {
        Self {
            data: v.as_slice().to_vec(),
            nrows: v.len(),
            ncols: 1,
        }
    }
}

impl<T: Scalar> Default for Matrix<T> {
    /// The 3×3 identity matrix.
    fn default() -> Self {
        let mut data = vec![T::zero(); 9];
        for i in 0..3 {
            data[i * 3 + i] = T::one();
        }
        Self {
            data,
            nrows: 3,
            ncols: 3,
        }
    }
}

// ── Access ──────────────────────────────────────────────────────────

impl<T> Matrix<T> {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Checked element access.
    ///
    /// Fails with [`MathError::PositionOutOfRange`] when either index is
    /// out of range.
    ///
    /// ```
    /// use matvec::Matrix;
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(*m.at(1, 0).unwrap(), 3.0);
    /// assert!(m.at(2, 0).is_err());
    /// ```
    pub fn at(&self, row: usize, col: usize) -> Result<&T, MathError> {
        self.position_check(row, col)?;
        Ok(&self.data[row * self.ncols + col])
    }

    /// Checked mutable element access.
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T, MathError> {
        self.position_check(row, col)?;
        Ok(&mut self.data[row * self.ncols + col])
    }

    /// View the entire matrix as a flat slice in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// View the entire matrix as a mutable flat slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// View row `i` as a slice.
    ///
    /// Panics if `i` is out of range.
    #[inline]
    pub fn row_slice(&self, i: usize) -> &[T] {
        let start = i * self.ncols;
        &self.data[start..start + self.ncols]
    }

    /// Iterate over all elements in row-major order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over all elements in row-major order.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    fn position_check(&self, row: usize, col: usize) -> Result<(), MathError> {
        if row >= self.nrows || col >= self.ncols {
            return Err(MathError::PositionOutOfRange {
                row,
                col,
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        Ok(())
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.at(row, col) {
            Ok(x) => x,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        match self.at_mut(row, col) {
            Ok(x) => x,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Matrix<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// ── Sizing ──────────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Set the row count, truncating or zero-padding at the bottom.
    ///
    /// Allocates a fresh grid, copies the overlapping rows, and replaces
    /// the storage. Fails with [`MathError::ZeroSize`] when `nrows == 0`,
    /// leaving the matrix unmodified.
    ///
    /// ```
    /// use matvec::Matrix;
    /// let mut m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// m.set_nrows(3).unwrap();
    /// assert_eq!(m[(1, 1)], 4.0);
    /// assert_eq!(m[(2, 0)], 0.0);
    /// ```
    pub fn set_nrows(&mut self, nrows: usize) -> Result<(), MathError> {
        if nrows == 0 {
            return Err(MathError::ZeroSize);
        }
        let mut data = vec![T::zero(); nrows * self.ncols];
        for i in 0..nrows.min(self.nrows) {
            for j in 0..self.ncols {
                data[i * self.ncols + j] = self.data[i * self.ncols + j];
            }
        }
        self.data = data;
        self.nrows = nrows;
        Ok(())
    }

    /// Set the column count, truncating or zero-padding at the right.
    ///
    /// ```
    /// use matvec::Matrix;
    /// let mut m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// m.set_ncols(1).unwrap();
    /// assert_eq!((m.nrows(), m.ncols()), (2, 1));
    /// assert_eq!(m[(1, 0)], 3.0);
    /// ```
    pub fn set_ncols(&mut self, ncols: usize) -> Result<(), MathError> {
        if ncols == 0 {
            return Err(MathError::ZeroSize);
        }
        let mut data = vec![T::zero(); self.nrows * ncols];
        for i in 0..self.nrows {
            for j in 0..ncols.min(self.ncols) {
                data[i * ncols + j] = self.data[i * self.ncols + j];
            }
        }
        self.data = data;
        self.ncols = ncols;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros() {
        let m = Matrix::zeros(3, 4, 0.0_f64).unwrap();
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.ncols(), 4);
        for i in 0..3 {
            for j in 0..4 {
                assert_eq!(m[(i, j)], 0.0);
            }
        }
    }

    #[test]
    fn zero_extent_rejected() {
        assert_eq!(Matrix::zeros(0, 3, 0.0), Err(MathError::ZeroSize));
        assert_eq!(Matrix::zeros(3, 0, 0.0), Err(MathError::ZeroSize));
        assert_eq!(Matrix::diagonal(0, 1.0), Err(MathError::ZeroSize));
        assert_eq!(
            Matrix::from_fn(0, 2, |_, _| 0.0),
            Err(MathError::ZeroSize)
        );
    }

    #[test]
    fn diagonal() {
        let m = Matrix::diagonal(3, 5.0).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 5.0 } else { 0.0 };
                assert_eq!(m[(i, j)], expected);
            }
        }
    }

    #[test]
    fn default_is_3x3_identity() {
        let m = Matrix::<f64>::default();
        assert_eq!(m, Matrix::diagonal(3, 1.0).unwrap());
    }

    #[test]
    fn from_rows() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(m.nrows(), 2);
        assert_eq!(m.ncols(), 2);
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m[(1, 0)], 3.0);
    }

    #[test]
    fn from_rows_ragged() {
        let rows: [&[f64]; 2] = [&[1.0, 2.0], &[3.0]];
        assert_eq!(
            Matrix::from_rows(&rows),
            Err(MathError::RaggedRow {
                row: 1,
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn from_rows_empty() {
        let rows: [&[f64]; 0] = [];
        assert_eq!(Matrix::from_rows(&rows), Err(MathError::ZeroSize));

        let rows: [&[f64]; 1] = [&[]];
        assert_eq!(Matrix::from_rows(&rows), Err(MathError::ZeroSize));
    }

    #[test]
    fn from_fn() {
        let m = Matrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64).unwrap();
        assert_eq!(m[(0, 0)], 0.0);
        assert_eq!(m[(1, 1)], 4.0);
        assert_eq!(m[(2, 2)], 8.0);
    }

    #[test]
    fn from_vector() {
        let v = Vector::xyz(1.0, 2.0, 3.0);

        let row = Matrix::from_row(&v);
        assert_eq!((row.nrows(), row.ncols()), (1, 3));
        assert_eq!(row[(0, 1)], 2.0);

        let col = Matrix::from_column(&v);
        assert_eq!((col.nrows(), col.ncols()), (3, 1));
        assert_eq!(col[(1, 0)], 2.0);

        assert_eq!(row.transpose(), col);
    }

    #[test]
    fn checked_access() {
        let mut m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(*m.at(1, 1).unwrap(), 4.0);
        assert_eq!(
            m.at(2, 0),
            Err(MathError::PositionOutOfRange {
                row: 2,
                col: 0,
                nrows: 2,
                ncols: 2
            })
        );
        assert!(m.at(0, 2).is_err());

        *m.at_mut(0, 0).unwrap() = 9.0;
        assert_eq!(m[(0, 0)], 9.0);
        assert!(m.at_mut(0, 5).is_err());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_out_of_bounds_panics() {
        let m = Matrix::zeros(2, 2, 0.0_f64).unwrap();
        let _ = m[(0, 2)];
    }

    #[test]
    fn index_mut() {
        let mut m = Matrix::zeros(2, 2, 0.0_f64).unwrap();
        m[(0, 1)] = 5.0;
        assert_eq!(m[(0, 1)], 5.0);
    }

    #[test]
    fn iteration() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let sum: f64 = m.iter().sum();
        assert_eq!(sum, 10.0);
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.row_slice(1), &[3.0, 4.0]);
    }

    #[test]
    fn set_nrows_grow_and_shrink() {
        let mut m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        m.set_nrows(3).unwrap();
        assert_eq!((m.nrows(), m.ncols()), (3, 2));
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(1, 1)], 4.0);
        assert_eq!(m[(2, 0)], 0.0);
        assert_eq!(m[(2, 1)], 0.0);

        m.set_nrows(1).unwrap();
        assert_eq!((m.nrows(), m.ncols()), (1, 2));
        assert_eq!(m[(0, 1)], 2.0);

        assert_eq!(m.set_nrows(0), Err(MathError::ZeroSize));
        assert_eq!(m.nrows(), 1);
    }

    #[test]
    fn set_ncols_grow_and_shrink() {
        let mut m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        m.set_ncols(3).unwrap();
        assert_eq!((m.nrows(), m.ncols()), (2, 3));
        assert_eq!(m[(1, 0)], 3.0);
        assert_eq!(m[(0, 2)], 0.0);
        assert_eq!(m[(1, 2)], 0.0);

        m.set_ncols(1).unwrap();
        assert_eq!((m.nrows(), m.ncols()), (2, 1));
        assert_eq!(m[(1, 0)], 3.0);

        assert_eq!(m.set_ncols(0), Err(MathError::ZeroSize));
        assert_eq!(m.ncols(), 1);
    }

    #[test]
    fn is_square() {
        assert!(Matrix::zeros(3, 3, 0.0_f64).unwrap().is_square());
        assert!(!Matrix::zeros(2, 3, 0.0_f64).unwrap().is_square());
    }

    #[test]
    fn clone_eq() {
        let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let b = a.clone();
        assert_eq!(a, b);

        // Equality is dimension-aware
        let row = Matrix::from_rows(&[[1.0, 2.0, 3.0, 4.0]]).unwrap();
        assert_ne!(a, row);
    }
}
