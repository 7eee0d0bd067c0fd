use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};
use core::str::FromStr;

use crate::traits::{FloatScalar, Scalar};

/// Complex number with exact field-wise equality.
///
/// Operators return new values; the `*Assign` forms mutate in place. Plain
/// scalars promote to a complex number with zero imaginary part on either
/// side of an operator.
///
/// # Examples
///
/// ```
/// use matvec::Complex;
///
/// let a = Complex::new(5.0, 2.0);
/// let b = a - 8.0;
/// assert_eq!(b, Complex::new(-3.0, 2.0));
/// assert_eq!(Complex::new(3.0, 4.0).abs().re(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex<T> {
    re: T,
    im: T,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Complex<T> {
    /// Create a complex number `re + im*i`.
    #[inline]
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    /// Real part.
    #[inline]
    pub fn re(&self) -> T {
        self.re
    }

    /// Imaginary part.
    #[inline]
    pub fn im(&self) -> T {
        self.im
    }

    /// The `(re, im)` pair.
    #[inline]
    pub fn into_pair(self) -> (T, T) {
        (self.re, self.im)
    }
}

impl<T: Scalar> Default for Complex<T> {
    /// The zero complex number `0 + 0i`.
    fn default() -> Self {
        Self::new(T::zero(), T::zero())
    }
}

impl<T: Scalar> From<T> for Complex<T> {
    /// Promote a real value into `re + 0i`.
    fn from(re: T) -> Self {
        Self::new(re, T::zero())
    }
}

impl<T: Scalar> From<(T, T)> for Complex<T> {
    fn from((re, im): (T, T)) -> Self {
        Self::new(re, im)
    }
}

// ── Queries ─────────────────────────────────────────────────────────

impl<T: Scalar> Complex<T> {
    /// Conjugate: `re - im*i`.
    ///
    /// ```
    /// use matvec::Complex;
    /// assert_eq!(Complex::new(2.0, 3.0).conjugate(), Complex::new(2.0, -3.0));
    /// ```
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.re, T::zero() - self.im)
    }

    /// Integer power via repeated squaring.
    ///
    /// `pow(0)` returns `1 + 0i`.
    ///
    /// ```
    /// use matvec::Complex;
    /// let i = Complex::new(0.0, 1.0);
    /// assert_eq!(i.pow(2), Complex::new(-1.0, 0.0));
    /// assert_eq!(i.pow(4), Complex::new(1.0, 0.0));
    /// ```
    pub fn pow(&self, mut n: u32) -> Self {
        let mut result = Self::new(T::one(), T::zero());
        let mut base = *self;
        while n > 0 {
            if n & 1 == 1 {
                result = result * base;
            }
            base = base * base;
            n >>= 1;
        }
        result
    }
}

impl<T: FloatScalar> Complex<T> {
    /// Absolute value, as a complex number with zero imaginary part.
    ///
    /// The real part is the Euclidean magnitude `sqrt(re² + im²)`.
    ///
    /// ```
    /// use matvec::Complex;
    /// assert_eq!(Complex::new(3.0, 4.0).abs(), Complex::new(5.0, 0.0));
    /// ```
    pub fn abs(&self) -> Self {
        Self::new((self.re * self.re + self.im * self.im).sqrt(), T::zero())
    }
}

// ── Arithmetic ──────────────────────────────────────────────────────

impl<T: Scalar> Add for Complex<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl<T: Scalar> Sub for Complex<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl<T: Scalar> Mul for Complex<T> {
    type Output = Self;

    /// `(a+bi)(c+di) = (ac - bd) + (ad + bc)i`.
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl<T: Scalar> Div for Complex<T> {
    type Output = Self;

    /// `(a+bi)/(c+di) = ((ac + bd) + (bc - ad)i) / (c² + d²)`.
    ///
    /// Both components are computed from the original operand fields.
    /// Division by zero follows the element type's own semantics.
    fn div(self, rhs: Self) -> Self {
        let denominator = rhs.re * rhs.re + rhs.im * rhs.im;
        Self::new(
            (self.re * rhs.re + self.im * rhs.im) / denominator,
            (self.im * rhs.re - self.re * rhs.im) / denominator,
        )
    }
}

impl<T: Scalar> AddAssign for Complex<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Complex<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> MulAssign for Complex<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> DivAssign for Complex<T> {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

// ── Mixed scalar forms: complex op scalar ───────────────────────────

impl<T: Scalar> Add<T> for Complex<T> {
    type Output = Self;
    fn add(self, rhs: T) -> Self {
        self + Self::from(rhs)
    }
}

impl<T: Scalar> Sub<T> for Complex<T> {
    type Output = Self;
    fn sub(self, rhs: T) -> Self {
        self - Self::from(rhs)
    }
}

impl<T: Scalar> Mul<T> for Complex<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        self * Self::from(rhs)
    }
}

impl<T: Scalar> Div<T> for Complex<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        self / Self::from(rhs)
    }
}

// ── scalar op complex (concrete impls) ──────────────────────────────

macro_rules! impl_scalar_complex_ops {
    ($($t:ty),*) => {
        $(
            impl Add<Complex<$t>> for $t {
                type Output = Complex<$t>;
                fn add(self, rhs: Complex<$t>) -> Complex<$t> {
                    Complex::from(self) + rhs
                }
            }

            impl Sub<Complex<$t>> for $t {
                type Output = Complex<$t>;
                fn sub(self, rhs: Complex<$t>) -> Complex<$t> {
                    Complex::from(self) - rhs
                }
            }

            impl Mul<Complex<$t>> for $t {
                type Output = Complex<$t>;
                fn mul(self, rhs: Complex<$t>) -> Complex<$t> {
                    Complex::from(self) * rhs
                }
            }

            impl Div<Complex<$t>> for $t {
                type Output = Complex<$t>;
                fn div(self, rhs: Complex<$t>) -> Complex<$t> {
                    Complex::from(self) / rhs
                }
            }
        )*
    };
}

impl_scalar_complex_ops!(f32, f64, i8, i16, i32, i64, i128);

// ── Text surface ────────────────────────────────────────────────────

impl<T: Scalar + PartialOrd + fmt::Display> fmt::Display for Complex<T> {
    /// `5` for a real-only value, `5i` for imaginary-only, `(5+2i)` or
    /// `(5-2i)` when both parts are nonzero.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im == T::zero() {
            return write!(f, "{}", self.re);
        }
        if self.re == T::zero() {
            return write!(f, "{}i", self.im);
        }
        if self.im > T::zero() {
            write!(f, "({}+{}i)", self.re, self.im)
        } else {
            write!(f, "({}{}i)", self.re, self.im)
        }
    }
}

impl<T: Scalar + FromStr> Complex<T> {
    /// Read up to two whitespace-separated numbers into the real then the
    /// imaginary part. Returns how many parts were assigned; parts without
    /// input are left unmodified.
    ///
    /// ```
    /// use matvec::Complex;
    /// let mut c = Complex::new(0.0, 7.0);
    /// assert_eq!(c.read_from_str("3.5"), 1);
    /// assert_eq!(c, Complex::new(3.5, 7.0));
    /// ```
    pub fn read_from_str(&mut self, s: &str) -> usize {
        let mut tokens = s.split_whitespace();
        let mut assigned = 0;
        for part in [&mut self.re, &mut self.im] {
            match tokens.next().and_then(|t| t.parse().ok()) {
                Some(value) => {
                    *part = value;
                    assigned += 1;
                }
                None => break,
            }
        }
        assigned
    }
}
