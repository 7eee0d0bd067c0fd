use alloc::vec;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::MathError;
use crate::traits::Scalar;

use super::Matrix;

// ── Fallible named arithmetic ───────────────────────────────────────
//
// These methods are the contract; the operator impls below delegate to
// them and panic with the same message on a shape violation.

impl<T: Scalar> Matrix<T> {
    /// Element-wise sum.
    ///
    /// Fails with [`MathError::ShapeMismatch`] unless the dimensions are
    /// identical.
    ///
    /// ```
    /// use matvec::Matrix;
    /// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]).unwrap();
    /// let c = a.try_add(&b).unwrap();
    /// assert_eq!(c[(1, 1)], 12.0);
    /// ```
    pub fn try_add(&self, rhs: &Self) -> Result<Self, MathError> {
        self.shape_check(rhs)?;
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a + b)
            .collect();
        Ok(Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        })
    }

    /// Element-wise difference.
    ///
    /// Fails with [`MathError::ShapeMismatch`] unless the dimensions are
    /// identical.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self, MathError> {
        self.shape_check(rhs)?;
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a - b)
            .collect();
        Ok(Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        })
    }

    /// Matrix product `(M×N) * (N×P) → (M×P)` into a freshly sized result.
    ///
    /// Fails with [`MathError::InnerShapeMismatch`] unless
    /// `self.ncols == rhs.nrows`.
    ///
    /// ```
    /// use matvec::Matrix;
    /// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]).unwrap();
    /// let c = a.try_mul(&b).unwrap();
    /// assert_eq!(c[(0, 0)], 19.0);
    /// ```
    pub fn try_mul(&self, rhs: &Self) -> Result<Self, MathError> {
        if self.ncols != rhs.nrows {
            return Err(MathError::InnerShapeMismatch {
                left: (self.nrows, self.ncols),
                right: (rhs.nrows, rhs.ncols),
            });
        }
        let m = self.nrows;
        let n = self.ncols;
        let p = rhs.ncols;
        let mut data = vec![T::zero(); m * p];
        for i in 0..m {
            for k in 0..n {
                let a_ik = self.data[i * n + k];
                for j in 0..p {
                    data[i * p + j] = data[i * p + j] + a_ik * rhs.data[k * p + j];
                }
            }
        }
        Ok(Matrix {
            data,
            nrows: m,
            ncols: p,
        })
    }

    fn shape_check(&self, rhs: &Self) -> Result<(), MathError> {
        if self.nrows != rhs.nrows || self.ncols != rhs.ncols {
            return Err(MathError::ShapeMismatch {
                left: (self.nrows, self.ncols),
                right: (rhs.nrows, rhs.ncols),
            });
        }
        Ok(())
    }
}

fn unwrap_op<T>(result: Result<T, MathError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("{}", e),
    }
}

// ── Element-wise addition ───────────────────────────────────────────

impl<T: Scalar> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        unwrap_op(self.try_add(rhs))
    }
}

impl<T: Scalar> Add for Matrix<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<T: Scalar> Add<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self + rhs
    }
}

impl<T: Scalar> Add<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: Matrix<T>) -> Matrix<T> {
        self + &rhs
    }
}

impl<T: Scalar> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        *self = unwrap_op(self.try_add(rhs));
    }
}

impl<T: Scalar> AddAssign for Matrix<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.add_assign(&rhs);
    }
}

// ── Element-wise subtraction ────────────────────────────────────────

impl<T: Scalar> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        unwrap_op(self.try_sub(rhs))
    }
}

impl<T: Scalar> Sub for Matrix<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self - rhs
    }
}

impl<T: Scalar> Sub<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: Matrix<T>) -> Matrix<T> {
        self - &rhs
    }
}

impl<T: Scalar> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        *self = unwrap_op(self.try_sub(rhs));
    }
}

impl<T: Scalar> SubAssign for Matrix<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.sub_assign(&rhs);
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        let data = self.data.iter().map(|&x| T::zero() - x).collect();
        Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> Neg for Matrix<T> {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

// ── Matrix multiplication ───────────────────────────────────────────

impl<T: Scalar> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        unwrap_op(self.try_mul(rhs))
    }
}

impl<T: Scalar> Mul for Matrix<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self * rhs
    }
}

impl<T: Scalar> Mul<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        self * &rhs
    }
}

impl<T: Scalar> MulAssign<&Matrix<T>> for Matrix<T> {
    /// The receiver is replaced only after the product is fully built.
    fn mul_assign(&mut self, rhs: &Matrix<T>) {
        *self = unwrap_op(self.try_mul(rhs));
    }
}

impl<T: Scalar> MulAssign for Matrix<T> {
    fn mul_assign(&mut self, rhs: Self) {
        self.mul_assign(&rhs);
    }
}

// ── Scalar multiplication and division ──────────────────────────────

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        let data = self.data.iter().map(|&x| x * rhs).collect();
        Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        &self * rhs
    }
}

impl<T: Scalar> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        for x in self.data.iter_mut() {
            *x = *x * rhs;
        }
    }
}

impl<T: Scalar> Div<T> for &Matrix<T> {
    type Output = Matrix<T>;

    /// Implemented as multiplication by the reciprocal of `rhs`.
    fn div(self, rhs: T) -> Matrix<T> {
        self * (T::one() / rhs)
    }
}

impl<T: Scalar> Div<T> for Matrix<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        &self / rhs
    }
}

impl<T: Scalar> DivAssign<T> for Matrix<T> {
    fn div_assign(&mut self, rhs: T) {
        self.mul_assign(T::one() / rhs);
    }
}

// ── scalar * matrix (concrete impls) ────────────────────────────────

macro_rules! impl_scalar_mul_matrix {
    ($($t:ty),*) => {
        $(
            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul_matrix!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

#[cfg(test)]
mod tests {
    use super::*;

    fn a2() -> Matrix<f64> {
        Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap()
    }

    fn b2() -> Matrix<f64> {
        Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]).unwrap()
    }

    #[test]
    fn add_sub() {
        let c = &a2() + &b2();
        assert_eq!(c, Matrix::from_rows(&[[6.0, 8.0], [10.0, 12.0]]).unwrap());

        let d = &b2() - &a2();
        assert_eq!(d, Matrix::from_rows(&[[4.0, 4.0], [4.0, 4.0]]).unwrap());
    }

    #[test]
    fn add_shape_mismatch() {
        let wide = Matrix::zeros(2, 3, 0.0_f64).unwrap();
        assert_eq!(
            a2().try_add(&wide),
            Err(MathError::ShapeMismatch {
                left: (2, 2),
                right: (2, 3)
            })
        );
        assert!(a2().try_sub(&wide).is_err());
    }

    #[test]
    #[should_panic(expected = "shape mismatch")]
    fn add_operator_panics_on_mismatch() {
        let wide = Matrix::zeros(2, 3, 0.0_f64).unwrap();
        let _ = &a2() + &wide;
    }

    #[test]
    fn assign_forms() {
        let mut m = a2();
        m += &b2();
        assert_eq!(m[(0, 0)], 6.0);
        m -= &b2();
        assert_eq!(m, a2());
    }

    #[test]
    fn neg() {
        let m = Matrix::from_rows(&[[1.0, -2.0], [3.0, -4.0]]).unwrap();
        let n = -&m;
        assert_eq!(n, Matrix::from_rows(&[[-1.0, 2.0], [-3.0, 4.0]]).unwrap());
        assert_eq!(-m, n);
    }

    #[test]
    fn matrix_multiply() {
        let c = &a2() * &b2();
        assert_eq!(c, Matrix::from_rows(&[[19.0, 22.0], [43.0, 50.0]]).unwrap());
    }

    #[test]
    fn matrix_multiply_non_square() {
        let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        let b = Matrix::from_rows(&[[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]]).unwrap();
        let c = a.try_mul(&b).unwrap();
        assert_eq!((c.nrows(), c.ncols()), (2, 2));
        assert_eq!(c[(0, 0)], 58.0);
        assert_eq!(c[(0, 1)], 64.0);
        assert_eq!(c[(1, 0)], 139.0);
        assert_eq!(c[(1, 1)], 154.0);
    }

    #[test]
    fn multiply_inner_mismatch() {
        let a = Matrix::zeros(2, 3, 0.0_f64).unwrap();
        let b = Matrix::zeros(2, 2, 0.0_f64).unwrap();
        assert_eq!(
            a.try_mul(&b),
            Err(MathError::InnerShapeMismatch {
                left: (2, 3),
                right: (2, 2)
            })
        );
    }

    #[test]
    fn multiply_assign_replaces_receiver() {
        let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        let b = Matrix::from_rows(&[[1.0], [1.0], [1.0]]).unwrap();
        let mut m = a.clone();
        m *= &b;
        assert_eq!((m.nrows(), m.ncols()), (2, 1));
        assert_eq!(m[(0, 0)], 6.0);
        assert_eq!(m[(1, 0)], 15.0);
    }

    #[test]
    fn identity_multiply() {
        let id = Matrix::diagonal(2, 1.0).unwrap();
        assert_eq!(&a2() * &id, a2());
        assert_eq!(&id * &a2(), a2());
    }

    #[test]
    fn scalar_multiply() {
        let m = &a2() * 3.0;
        assert_eq!(m, Matrix::from_rows(&[[3.0, 6.0], [9.0, 12.0]]).unwrap());
        assert_eq!(3.0 * &a2(), m);

        let mut n = a2();
        n *= 2.0;
        assert_eq!(n[(1, 1)], 8.0);
    }

    #[test]
    fn scalar_divide() {
        let m = Matrix::from_rows(&[[2.0, 4.0], [6.0, 8.0]]).unwrap();
        assert_eq!(&m / 2.0, a2());

        let mut n = m;
        n /= 2.0;
        assert_eq!(n, a2());
    }

    #[test]
    fn ref_variants() {
        let a = a2();
        let b = b2();
        let sum1 = &a + &b;
        let sum2 = a.clone() + &b;
        let sum3 = &a + b.clone();
        let sum4 = a.clone() + b.clone();
        assert_eq!(sum1, sum2);
        assert_eq!(sum1, sum3);
        assert_eq!(sum1, sum4);
    }
}
