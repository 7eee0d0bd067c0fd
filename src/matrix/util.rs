use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::MathError;
use crate::traits::Scalar;
use crate::vector::Vector;

use super::Matrix;

// ── Row / Column extraction ─────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Extract row `i` as a [`Vector`].
    ///
    /// Fails with [`MathError::IndexOutOfRange`] when `i >= nrows`.
    ///
    /// ```
    /// use matvec::Matrix;
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// let r = m.row(1).unwrap();
    /// assert_eq!(r[0], 3.0);
    /// assert_eq!(r[1], 4.0);
    /// ```
    pub fn row(&self, i: usize) -> Result<Vector<T>, MathError> {
        if i >= self.nrows {
            return Err(MathError::IndexOutOfRange {
                pos: i,
                len: self.nrows,
            });
        }
        Vector::from_slice(self.row_slice(i))
    }

    /// Extract column `j` as a [`Vector`].
    ///
    /// Fails with [`MathError::IndexOutOfRange`] when `j >= ncols`.
    ///
    /// ```
    /// use matvec::Matrix;
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// let c = m.col(1).unwrap();
    /// assert_eq!(c[0], 2.0);
    /// assert_eq!(c[1], 4.0);
    /// ```
    pub fn col(&self, j: usize) -> Result<Vector<T>, MathError> {
        if j >= self.ncols {
            return Err(MathError::IndexOutOfRange {
                pos: j,
                len: self.ncols,
            });
        }
        let mut data = Vec::with_capacity(self.nrows);
        for i in 0..self.nrows {
            data.push(self.data[i * self.ncols + j]);
        }
        Vector::from_slice(&data)
    }
}

// ── Text surface ────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    /// One bracketed, space-separated row per line: `[a b c]`, with a
    /// newline between rows and none trailing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.nrows {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for j in 0..self.ncols {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.data[i * self.ncols + j])?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

impl<T: Scalar + FromStr> Matrix<T> {
    /// Read up to `nrows * ncols` whitespace-separated numbers into the
    /// elements in row-major order. Returns how many were assigned;
    /// elements without input are left unmodified.
    ///
    /// ```
    /// use matvec::Matrix;
    /// let mut m = Matrix::zeros(2, 2, 0.0_f64).unwrap();
    /// assert_eq!(m.read_from_str("1 2\n3 4"), 4);
    /// assert_eq!(m[(1, 0)], 3.0);
    /// ```
    pub fn read_from_str(&mut self, s: &str) -> usize {
        let mut tokens = s.split_whitespace();
        let mut assigned = 0;
        for slot in self.data.iter_mut() {
            match tokens.next().and_then(|t| t.parse().ok()) {
                Some(value) => {
                    *slot = value;
                    assigned += 1;
                }
                None => break,
            }
        }
        assigned
    }
}
