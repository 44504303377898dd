//! Operator impls for [`Matrix`].
//!
//! `+` and `-` are elementwise and go through the [`Apply`] engine; `*` is the linear-algebra
//! product when the right-hand side is a matrix or vector, and elementwise scaling when it is a
//! scalar.

use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{traits::Number, Apply, Matrix, Vector};

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[col][row]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[col][row]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T, const R: usize, const C: usize> Eq for Matrix<T, R, C> where T: Eq {}

/// Matrices order lexicographically over their column-major element sequence.
impl<T, const R: usize, const C: usize> PartialOrd for Matrix<T, R, C>
where
    T: PartialOrd + Copy,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if R == 0 || C == 0 {
            return Some(Ordering::Equal);
        }
        let (a, b) = self.compare(*other);
        a.partial_cmp(&b)
    }
}

impl<T, const R: usize, const C: usize> Ord for Matrix<T, R, C>
where
    T: Ord + Copy,
{
    fn cmp(&self, other: &Self) -> Ordering {
        if R == 0 || C == 0 {
            return Ordering::Equal;
        }
        let (a, b) = self.compare(*other);
        a.cmp(&b)
    }
}

impl<T, const R: usize, const C: usize> Neg for Matrix<T, R, C>
where
    T: Neg + Copy,
{
    type Output = Matrix<T::Output, R, C>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

impl<T, const R: usize, const C: usize> Add for Matrix<T, R, C>
where
    T: Add + Copy,
{
    type Output = Matrix<T::Output, R, C>;

    fn add(self, rhs: Self) -> Self::Output {
        (self, rhs).apply(T::add)
    }
}

impl<T, const R: usize, const C: usize> Sub for Matrix<T, R, C>
where
    T: Sub + Copy,
{
    type Output = Matrix<T::Output, R, C>;

    fn sub(self, rhs: Self) -> Self::Output {
        (self, rhs).apply(T::sub)
    }
}

impl<T, const R: usize, const C: usize> AddAssign for Matrix<T, R, C>
where
    T: Add<Output = T> + Copy,
{
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T, const R: usize, const C: usize> SubAssign for Matrix<T, R, C>
where
    T: Sub<Output = T> + Copy,
{
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// Matrix * Column Vector.
impl<T, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Self::Output {
        Vector::from_fn(|row| (0..C).fold(T::ZERO, |acc, col| acc + self[(row, col)] * rhs[col]))
    }
}

/// Matrix * Matrix.
impl<T, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>> for Matrix<T, M, N>
where
    T: Number,
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Self::Output {
        Matrix::from_fn(|i, j| (0..N).fold(T::ZERO, |acc, k| acc + self[(i, k)] * rhs[(k, j)]))
    }
}

/// Matrix * Scalar.
impl<T, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: T) -> Self::Output {
        (self, rhs).apply(T::mul)
    }
}

/// Matrix / Scalar.
impl<T, const R: usize, const C: usize> Div<T> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Matrix<T, R, C>;

    fn div(self, rhs: T) -> Self::Output {
        (self, rhs).apply(T::div)
    }
}

impl<T, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C>
where
    T: Number,
{
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T, const R: usize, const C: usize> DivAssign<T> for Matrix<T, R, C>
where
    T: Number,
{
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

// Scalar * Matrix, for the built-in numeric types (a generic `T` cannot appear as the `impl`'s
// self type here).
macro_rules! scalar_lhs {
    ($($t:ty),+) => {
        $(
            impl<const R: usize, const C: usize> Mul<Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;

                #[inline]
                fn mul(self, rhs: Matrix<$t, R, C>) -> Self::Output {
                    (self, rhs).apply(<$t as Mul>::mul)
                }
            }
        )+
    };
}
scalar_lhs!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, f32, f64);

impl<T, const R: usize, const C: usize> approx::AbsDiffEq for Matrix<T, R, C>
where
    T: approx::AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.iter().zip(b).all(|(a, b)| T::abs_diff_eq(a, b, epsilon)))
    }
}

impl<T, const R: usize, const C: usize> approx::RelativeEq for Matrix<T, R, C>
where
    T: approx::RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.0.iter().zip(&other.0).all(|(a, b)| {
            a.iter()
                .zip(b)
                .all(|(a, b)| T::relative_eq(a, b, epsilon, max_relative))
        })
    }
}

impl<T, const R: usize, const C: usize> approx::UlpsEq for Matrix<T, R, C>
where
    T: approx::UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.0.iter().zip(&other.0).all(|(a, b)| {
            a.iter()
                .zip(b)
                .all(|(a, b)| T::ulps_eq(a, b, epsilon, max_ulps))
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec2, Mat2f, Matrix};

    #[test]
    fn elementwise() {
        let a = Matrix::from_rows([[1, 2], [3, 4]]);
        let b = Matrix::from_rows([[10, 20], [30, 40]]);
        assert_eq!(a + b, Matrix::from_rows([[11, 22], [33, 44]]));
        assert_eq!(b - a, Matrix::from_rows([[9, 18], [27, 36]]));
        assert_eq!(-a, Matrix::from_rows([[-1, -2], [-3, -4]]));
    }

    #[test]
    fn scaling() {
        let a = Matrix::from_rows([[1, 2], [3, 4]]);
        assert_eq!(a * 2, Matrix::from_rows([[2, 4], [6, 8]]));
        assert_eq!(2 * a, a * 2);
        assert_eq!((a * 2) / 2, a);
    }

    #[test]
    fn assign_forms_match_binary_forms() {
        let a = Matrix::from_rows([[1, 2], [3, 4]]);
        let b = Matrix::from_rows([[10, 20], [30, 40]]);

        let mut m = a;
        m += b;
        assert_eq!(m, a + b);
        m -= b;
        assert_eq!(m, a);
        m *= 3;
        assert_eq!(m, a * 3);
        m /= 3;
        assert_eq!(m, a);
    }

    #[test]
    fn identity_is_mul_neutral() {
        let m = Mat2f::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m * Mat2f::IDENTITY, m);
        assert_eq!(Mat2f::IDENTITY * m, m);
        assert_eq!(Mat2f::IDENTITY * vec2(5.0, 6.0), vec2(5.0, 6.0));
    }

    #[test]
    fn approx_eq() {
        let m = Mat2f::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        approx::assert_abs_diff_eq!(m, m);
        assert!(approx::abs_diff_ne!(m, m * 1.001));
    }
}
