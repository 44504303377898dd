//! Operator impls for [`Vector`].
//!
//! Every binary operator comes in four flavors: vector-vector (elementwise), vector-scalar and
//! scalar-vector (the scalar is broadcast), and the compound-assignment forms of the first two.
//! All of them funnel through the [`Apply`] engine.

use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr,
    ShrAssign, Sub, SubAssign,
};
use std::slice::SliceIndex;

use crate::{Apply, Vector};

impl<T, I, const N: usize> Index<I> for Vector<T, N>
where
    I: SliceIndex<[T]>,
{
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, I, const N: usize> IndexMut<I> for Vector<T, N>
where
    I: SliceIndex<[T]>,
{
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq, const N: usize> Eq for Vector<T, N> {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

impl<T, U, const N: usize> PartialEq<[U]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<&[U]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &&[U]) -> bool {
        self.0.eq(other)
    }
}

/// Vectors order lexicographically, like tuples and arrays of their elements.
impl<T, const N: usize> PartialOrd for Vector<T, N>
where
    T: PartialOrd + Copy,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if N == 0 {
            return Some(Ordering::Equal);
        }
        let (a, b) = self.compare(*other);
        a.partial_cmp(&b)
    }
}

impl<T, const N: usize> Ord for Vector<T, N>
where
    T: Ord + Copy,
{
    fn cmp(&self, other: &Self) -> Ordering {
        if N == 0 {
            return Ordering::Equal;
        }
        let (a, b) = self.compare(*other);
        a.cmp(&b)
    }
}

impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg + Copy,
{
    type Output = Vector<T::Output, N>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

impl<T, const N: usize> Not for Vector<T, N>
where
    T: Not + Copy,
{
    type Output = Vector<T::Output, N>;

    #[inline]
    fn not(self) -> Self::Output {
        self.map(T::not)
    }
}

macro_rules! elementwise {
    ( $($op:ident :: $method:ident, $assign:ident :: $assign_method:ident;)+ ) => {
        $(
            impl<T, const N: usize> $op for Vector<T, N>
            where
                T: $op + Copy,
            {
                type Output = Vector<T::Output, N>;

                #[inline]
                fn $method(self, rhs: Self) -> Self::Output {
                    (self, rhs).apply(T::$method)
                }
            }

            impl<T, const N: usize> $op<T> for Vector<T, N>
            where
                T: $op + Copy,
            {
                type Output = Vector<T::Output, N>;

                #[inline]
                fn $method(self, rhs: T) -> Self::Output {
                    (self, rhs).apply(T::$method)
                }
            }

            impl<T, const N: usize> $assign for Vector<T, N>
            where
                T: $op<Output = T> + Copy,
            {
                #[inline]
                fn $assign_method(&mut self, rhs: Self) {
                    *self = $op::$method(*self, rhs);
                }
            }

            impl<T, const N: usize> $assign<T> for Vector<T, N>
            where
                T: $op<Output = T> + Copy,
            {
                #[inline]
                fn $assign_method(&mut self, rhs: T) {
                    *self = $op::$method(*self, rhs);
                }
            }
        )+
    };
}

elementwise! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
    Rem::rem, RemAssign::rem_assign;
    BitAnd::bitand, BitAndAssign::bitand_assign;
    BitOr::bitor, BitOrAssign::bitor_assign;
    BitXor::bitxor, BitXorAssign::bitxor_assign;
    Shl::shl, ShlAssign::shl_assign;
    Shr::shr, ShrAssign::shr_assign;
}

// `impl Add<Vector<T, N>> for T` is not allowed for a generic `T`, so the scalar-on-the-left
// forms are provided for the built-in numeric types only.
macro_rules! scalar_lhs {
    (int: $($t:ty),+) => {
        $(
            scalar_lhs!($t: Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem);
            scalar_lhs!($t: BitAnd::bitand, BitOr::bitor, BitXor::bitxor, Shl::shl, Shr::shr);
        )+
    };
    (float: $($t:ty),+) => {
        $(
            scalar_lhs!($t: Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem);
        )+
    };
    ( $t:ty: $($op:ident :: $method:ident),+ ) => {
        $(
            impl<const N: usize> $op<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn $method(self, rhs: Vector<$t, N>) -> Self::Output {
                    (self, rhs).apply(<$t as $op>::$method)
                }
            }
        )+
    };
}

scalar_lhs!(int: u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);
scalar_lhs!(float: f32, f64);

impl<T, const N: usize> approx::AbsDiffEq for Vector<T, N>
where
    T: approx::AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| T::abs_diff_eq(a, b, epsilon))
    }
}

impl<T, const N: usize> approx::RelativeEq for Vector<T, N>
where
    T: approx::RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| T::relative_eq(a, b, epsilon, max_relative))
    }
}

impl<T, const N: usize> approx::UlpsEq for Vector<T, N>
where
    T: approx::UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| T::ulps_eq(a, b, epsilon, max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, Vec2f};

    #[test]
    fn arithmetic() {
        assert_eq!(vec2(1, 2) + vec2(30, 40), vec2(31, 42));
        assert_eq!(vec2(1, 2) - vec2(30, 40), vec2(-29, -38));
        assert_eq!(vec2(2, 3) * vec2(4, 5), vec2(8, 15));
        assert_eq!(vec2(8, 15) / vec2(4, 5), vec2(2, 3));
        assert_eq!(vec2(9, 15) % vec2(4, 4), vec2(1, 3));
        assert_eq!(-vec2(1, -2), vec2(-1, 2));
    }

    #[test]
    fn scalar_broadcast() {
        assert_eq!(vec2(1, 2) + 10, vec2(11, 12));
        assert_eq!(10 + vec2(1, 2), vec2(11, 12));
        assert_eq!(vec2(1, 2) - 1, vec2(0, 1));
        assert_eq!(10 - vec2(1, 2), vec2(9, 8));
        assert_eq!(vec2(1, 2) * 3, vec2(3, 6));
        assert_eq!(3 * vec2(1, 2), vec2(3, 6));
        assert_eq!(vec2(10, 20) / 10, vec2(1, 2));
        assert_eq!(20 / vec2(10, 20), vec2(2, 1));
        assert_eq!(vec2(0.5, 1.0) * 2.0, vec2(1.0, 2.0));
    }

    #[test]
    fn bitwise() {
        assert_eq!(vec2(0b110, 0b011) & vec2(0b010, 0b001), vec2(0b010, 0b001));
        assert_eq!(vec2(0b110, 0b011) | 0b001, vec2(0b111, 0b011));
        assert_eq!(vec2(0b110, 0b011) ^ vec2(0b010, 0b001), vec2(0b100, 0b010));
        assert_eq!(vec2(1, 2) << 4, vec2(16, 32));
        assert_eq!(vec2(16, 32) >> vec2(4, 5), vec2(1, 1));
        assert_eq!(!vec2(true, false), vec2(false, true));
    }

    #[test]
    fn assign_forms_match_binary_forms() {
        let mut v = vec3(1, 2, 3);
        v += vec3(10, 20, 30);
        assert_eq!(v, vec3(1, 2, 3) + vec3(10, 20, 30));
        v -= 1;
        assert_eq!(v, vec3(10, 21, 32));
        v *= 2;
        assert_eq!(v, vec3(20, 42, 64));
        v /= vec3(2, 2, 2);
        assert_eq!(v, vec3(10, 21, 32));
        v %= 10;
        assert_eq!(v, vec3(0, 1, 2));
        v <<= 2;
        assert_eq!(v, vec3(0, 4, 8));
        v >>= 1;
        assert_eq!(v, vec3(0, 2, 4));
        v ^= vec3(1, 1, 1);
        assert_eq!(v, vec3(1, 3, 5));
        v &= 3;
        assert_eq!(v, vec3(1, 3, 1));
        v |= 4;
        assert_eq!(v, vec3(5, 7, 5));
    }

    #[test]
    fn ranged_indexing() {
        let v = vec3(1, 2, 3);
        assert_eq!(v[1..], [2, 3]);
        assert_eq!(v[..2], [1, 2]);
    }

    #[test]
    fn approx_eq() {
        approx::assert_abs_diff_eq!(vec2(1.0, 2.0), vec2(1.0, 2.0 + 1e-9));
        approx::assert_relative_eq!(Vec2f::X, Vec2f::X);
        assert!(approx::abs_diff_ne!(vec2(1.0, 2.0), vec2(1.0, 2.1)));
    }
}
