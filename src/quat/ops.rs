//! Operator impls for [`Quat`].
//!
//! `+`, `-` and the scalar `*`/`/` are componentwise; `*` between two quaternions is the Hamilton
//! product.

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{traits::Number, Apply, Quat};

impl<T, U> PartialEq<Quat<U>> for Quat<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &Quat<U>) -> bool {
        self.vec == other.vec
    }
}

impl<T: Eq> Eq for Quat<T> {}

/// Quaternions order lexicographically over their `x, y, z, w` components.
impl<T> PartialOrd for Quat<T>
where
    T: PartialOrd + Copy,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.vec.partial_cmp(&other.vec)
    }
}

impl<T> Ord for Quat<T>
where
    T: Ord + Copy,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.vec.cmp(&other.vec)
    }
}

impl<T> Neg for Quat<T>
where
    T: Neg + Copy,
{
    type Output = Quat<T::Output>;

    fn neg(self) -> Self::Output {
        Quat::from_vec(-self.vec)
    }
}

impl<T> Add for Quat<T>
where
    T: Add + Copy,
{
    type Output = Quat<T::Output>;

    fn add(self, rhs: Self) -> Self::Output {
        (self, rhs).apply(T::add)
    }
}

impl<T> Sub for Quat<T>
where
    T: Sub + Copy,
{
    type Output = Quat<T::Output>;

    fn sub(self, rhs: Self) -> Self::Output {
        (self, rhs).apply(T::sub)
    }
}

/// The [Hamilton product], composing two rotations (the right-hand side is applied first).
///
/// [Hamilton product]: https://en.wikipedia.org/wiki/Quaternion#Hamilton_product
impl<T> Mul for Quat<T>
where
    T: Number,
{
    type Output = Quat<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        let (a, b) = (self, rhs);
        Quat::from_components(
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        )
    }
}

/// Quat * Scalar.
impl<T> Mul<T> for Quat<T>
where
    T: Mul + Copy,
{
    type Output = Quat<T::Output>;

    fn mul(self, rhs: T) -> Self::Output {
        (self, rhs).apply(T::mul)
    }
}

/// Quat / Scalar.
impl<T> Div<T> for Quat<T>
where
    T: Div + Copy,
{
    type Output = Quat<T::Output>;

    fn div(self, rhs: T) -> Self::Output {
        (self, rhs).apply(T::div)
    }
}

impl<T> AddAssign for Quat<T>
where
    T: Add<Output = T> + Copy,
{
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T> SubAssign for Quat<T>
where
    T: Sub<Output = T> + Copy,
{
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T> MulAssign for Quat<T>
where
    T: Number,
{
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T> MulAssign<T> for Quat<T>
where
    T: Mul<Output = T> + Copy,
{
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T> DivAssign<T> for Quat<T>
where
    T: Div<Output = T> + Copy,
{
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

impl<T> AbsDiffEq for Quat<T>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.vec.abs_diff_eq(&other.vec, epsilon)
    }
}

impl<T> RelativeEq for Quat<T>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.vec.relative_eq(&other.vec, epsilon, max_relative)
    }
}

impl<T> UlpsEq for Quat<T>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.vec.ulps_eq(&other.vec, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Quat, Quatf};

    #[test]
    fn componentwise() {
        let a = Quat::from_components(1, 2, 3, 4);
        let b = Quat::from_components(10, 20, 30, 40);
        assert_eq!(a + b, Quat::from_components(11, 22, 33, 44));
        assert_eq!(b - a, Quat::from_components(9, 18, 27, 36));
        assert_eq!(-a, Quat::from_components(-1, -2, -3, -4));
        assert_eq!(a * 2, Quat::from_components(2, 4, 6, 8));
        assert_eq!(b / 10, Quat::from_components(1, 2, 3, 4));
    }

    #[test]
    fn hamilton_product() {
        // i * j == k, j * k == i, k * i == j, and i² == j² == k² == -1.
        let i = Quat::from_components(1, 0, 0, 0);
        let j = Quat::from_components(0, 1, 0, 0);
        let k = Quat::from_components(0, 0, 1, 0);
        let one = Quat::from_components(0, 0, 0, 1);
        assert_eq!(i * j, k);
        assert_eq!(j * k, i);
        assert_eq!(k * i, j);
        assert_eq!(j * i, -k);
        assert_eq!(i * i, -one);
        assert_eq!(j * j, -one);
        assert_eq!(k * k, -one);
    }

    #[test]
    fn assign_forms_match_binary_forms() {
        let a = Quat::from_components(1.0, 2.0, 3.0, 4.0);
        let b = Quat::from_components(0.5, -1.0, 2.0, 1.0);

        let mut q = a;
        q += b;
        assert_eq!(q, a + b);
        q -= b;
        assert_eq!(q, a);
        q *= b;
        assert_eq!(q, a * b);
        q *= 2.0;
        assert_eq!(q, (a * b) * 2.0);
        q /= 2.0;
        assert_eq!(q, a * b);
    }

    #[test]
    fn ordering() {
        let a = Quat::from_components(1, 2, 3, 4);
        let b = Quat::from_components(1, 2, 4, 0);
        assert!(a < b);
        assert!(b > a);
        assert_eq!(a.compare(b), (3, 4));

        let mut qs = [b, a];
        qs.sort();
        assert_eq!(qs, [a, b]);
    }

    #[test]
    fn approx_eq() {
        let q = Quatf::IDENTITY;
        approx::assert_abs_diff_eq!(q, q);
        assert!(approx::abs_diff_ne!(q, q * 1.5));
    }
}
