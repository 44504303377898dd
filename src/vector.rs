use std::{array, fmt, slice};

use crate::{
    traits::{Number, Sqrt},
    Mat2, Matrix, MinMax, One, Trig, Zero,
};

mod ops;
mod view;

/// A 1-dimensional vector.
pub type Vec1<T> = Vector<T, 1>;
/// A 1-dimensional vector with [`f32`] elements.
pub type Vec1f = Vec1<f32>;
/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;

/// An `N`-element column vector storing elements of type `T`.
///
/// # Construction
///
/// - The freestanding [`vec1`], [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors
///   from provided values.
/// - [`Vector::splat`] copies one value into every element.
/// - [`Vector::from_fn`] invokes a closure with the index of each element.
/// - Vectors convert [`From`] arrays of the same length, and back.
/// - [`Vector::ZERO`] is the all-zeroes vector; `Vector::X`, `Vector::Y`, `Vector::Z` and
///   `Vector::W` are the unit axes for dimensions up to 4.
///
/// # Element Access
///
/// - For vectors with up to 4 dimensions, elements can be accessed as fields `x`, `y`, `z`, `w`
///   (with color aliases `r`, `g`, `b`, `a`).
/// - The [`Index`] and [`IndexMut`] impls work just like on arrays.
/// - [`Vector::as_array`], [`Vector::as_slice`] and [`Vector::into_array`] expose the storage
///   directly; [`bytemuck::Zeroable`] and [`bytemuck::Pod`] allow safe transmutation when `T`
///   allows it.
/// - Components can be iterated with [`IntoIterator`] or [`Vector::iter`].
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 1> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self(array::from_fn(|_| elem))
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// This is also how a vector is converted to a different element type:
    /// `v.map(|e| e as f64)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut iter = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| iter.next().unwrap())
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns an iterator over references to the elements.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Left-folds the elements into a single value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// let digits = vec3(1, 2, 3).fold(0, |acc, d| acc * 10 + d);
    /// assert_eq!(digits, 123);
    /// ```
    pub fn fold<A, F>(self, init: A, f: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        self.0.into_iter().fold(init, f)
    }

    /// Returns the sum of all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// assert_eq!(vec3(1, 2, 3).sum(), 6);
    /// ```
    pub fn sum(self) -> T
    where
        T: Number,
    {
        self.fold(T::ZERO, |acc, e| acc + e)
    }

    /// Returns the product of all elements.
    pub fn product(self) -> T
    where
        T: Number,
    {
        self.fold(T::ONE, |acc, e| acc * e)
    }

    /// Returns the smallest element.
    ///
    /// # Panics
    ///
    /// Panics if `N` is zero.
    pub fn min_element(self) -> T
    where
        T: MinMax,
    {
        self.0.into_iter().reduce(T::min).unwrap()
    }

    /// Returns the largest element.
    ///
    /// # Panics
    ///
    /// Panics if `N` is zero.
    pub fn max_element(self) -> T
    where
        T: MinMax,
    {
        self.0.into_iter().reduce(T::max).unwrap()
    }

    /// Returns the first pair of corresponding elements of `self` and `other` that differ, or the
    /// pair of last elements if all are equal.
    ///
    /// This is the primitive behind the lexicographic [`PartialOrd`]/[`Ord`] impls: `self < other`
    /// exactly when the returned pair is ordered `(smaller, larger)`.
    ///
    /// # Panics
    ///
    /// Panics if `N` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// assert_eq!(vec3(1, 2, 3).compare(vec3(1, 5, 0)), (2, 5));
    /// assert_eq!(vec3(1, 2, 3).compare(vec3(1, 2, 3)), (3, 3));
    /// assert!(vec3(1, 2, 3) < vec3(1, 2, 4));
    /// ```
    pub fn compare(self, other: Self) -> (T, T)
    where
        T: PartialEq + Copy,
    {
        for i in 0..N {
            if self[i] != other[i] {
                return (self[i], other[i]);
            }
        }
        (self[N - 1], other[N - 1])
    }

    /// Returns the squared length of this [`Vector`].
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// ```
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// The zero vector has no defined direction; normalizing it yields NaN components.
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        self / self.length()
    }

    /// Returns the squared distance between the points `self` and `other`.
    pub fn distance2(self, other: Self) -> T
    where
        T: Number,
    {
        (other - self).length2()
    }

    /// Returns the distance between the points `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// assert_eq!(vec2(1.0, 1.0).distance(vec2(4.0, 5.0)), 5.0);
    /// ```
    pub fn distance(self, other: Self) -> T
    where
        T: Number + Sqrt,
    {
        (other - self).length()
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// Geometrically, the dot product provides information about the relative angle of the two
    /// vectors: it is positive when the angle between them is less than 90°, zero at exactly 90°,
    /// and negative beyond that.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.into_array()
            .into_iter()
            .zip(other.into_array())
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Computes the smallest positive angle between `self` and `other`, in radians.
    ///
    /// Both `self` and `other` must have non-zero length for the result to be meaningful.
    pub fn abs_angle_to(self, other: Self) -> T
    where
        T: Number + Trig + Sqrt,
    {
        (self.dot(other) / (self.length() * other.length())).acos()
    }

    /// Linearly interpolates between `self` (at `t = 0`) and `other` (at `t = 1`).
    ///
    /// `t` is not clamped; values outside `[0, 1]` extrapolate.
    pub fn lerp(self, other: Self, t: T) -> Self
    where
        T: Number,
    {
        self * (T::ONE - t) + other * t
    }

    /// Normalized linear interpolation: [`lerp`][Self::lerp] followed by
    /// [`normalize`][Self::normalize].
    pub fn nlerp(self, other: Self, t: T) -> Self
    where
        T: Number + Sqrt,
    {
        self.lerp(other, t).normalize()
    }

    /// Spherical linear interpolation between `self` and `other`.
    ///
    /// Interpolates at a constant angular rate between the directions of the two vectors. When the
    /// directions coincide, the angle between them is zero and `self` is returned unchanged.
    pub fn slerp(self, other: Self, t: T) -> Self
    where
        T: Number + Trig + Sqrt + MinMax,
    {
        let cos_theta = self
            .normalize()
            .dot(other.normalize())
            .clamp(-T::ONE, T::ONE);
        let theta = cos_theta.acos();
        if theta == T::ZERO {
            return self;
        }
        let sin_theta = theta.sin();
        self * ((theta * (T::ONE - t)).sin() / sin_theta)
            + other * ((theta * t).sin() / sin_theta)
    }

    /// Element-wise minimum between `self` and `other`.
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].min(other[i]))
    }

    /// Element-wise maximum between `self` and `other`.
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].max(other[i]))
    }

    /// Element-wise range clamp of the elements in `self` between `min` and `max`.
    pub fn clamp(self, min: Self, max: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].clamp(min[i], max[i]))
    }

    /// Computes the outer product of `self` and `other`: the `N`×`M` matrix whose entry at
    /// `(r, c)` is `self[r] * other[c]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// let m = vec2(1, 2).outer(vec3(3, 4, 5));
    /// assert_eq!(m, Matrix::from_rows([
    ///     [3, 4, 5],
    ///     [6, 8, 10],
    /// ]));
    /// ```
    pub fn outer<const M: usize>(self, other: Vector<T, M>) -> Matrix<T, N, M>
    where
        T: Number,
    {
        Matrix::from_fn(|r, c| self[r] * other[c])
    }
}

impl<const N: usize> Vector<bool, N> {
    /// Returns `true` if any element is `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// assert!(less(vec2(1, 5), 3).any());
    /// assert!(!less(vec2(4, 5), 3).any());
    /// ```
    pub fn any(self) -> bool {
        self.0.into_iter().any(|b| b)
    }

    /// Returns `true` if every element is `true`.
    pub fn all(self) -> bool {
        self.0.into_iter().all(|b| b)
    }
}

impl<T> Vector<T, 1> {
    /// Removes the last element of this vector, yielding a vector with zero elements.
    pub fn truncate(self) -> Vector<T, 0> {
        [].into()
    }

    /// Appends another value to the vector, yielding a vector with 2 dimensions.
    pub fn extend(self, value: T) -> Vector<T, 2> {
        let [x] = self.into_array();
        [x, value].into()
    }
}

impl<T> Vector<T, 2> {
    /// Removes the last element of this vector, yielding a vector with a single element.
    pub fn truncate(self) -> Vector<T, 1> {
        let [x, ..] = self.into_array();
        [x].into()
    }

    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        [x, y, value].into()
    }

    /// Rotates `self` clockwise in the 2D plane.
    ///
    /// This operation assumes that the Y axis points up, and the X axis points to the right.
    pub fn rotate_clockwise(self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        Mat2::rotation_clockwise(radians) * self
    }

    /// Rotates `self` counterclockwise in the 2D plane.
    ///
    /// This operation assumes that the Y axis points up, and the X axis points to the right.
    pub fn rotate_counterclockwise(self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        Mat2::rotation_counterclockwise(radians) * self
    }

    /// Computes the (signed) clockwise rotation in radians needed to align `self` with `other`.
    ///
    /// This operation assumes that the Y axis points up, and the X axis points to the right. If
    /// the Y axis points *down*, swap the arguments to make the method work correctly.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// use std::f32::consts::TAU;
    ///
    /// assert_approx_eq!(Vec2f::Y.signed_angle_to(Vec2f::X), TAU / 4.0);
    /// assert_approx_eq!(Vec2f::X.signed_angle_to(Vec2f::Y), -TAU / 4.0);
    /// ```
    pub fn signed_angle_to(self, other: Self) -> T
    where
        T: Number + Trig,
    {
        -self.cross(other).atan2(self.dot(other))
    }

    /// Computes the 2D cross product of `self` and `other`.
    ///
    /// This is the Z coordinate of the 3D cross product of the two vectors embedded into 3-space
    /// with Z=0 (also known as the *perpendicular dot product*); the other two coordinates of
    /// that product are always zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// assert_eq!(Vec2f::X.cross(Vec2f::Y), 1.0);
    /// assert_eq!(Vec2f::Y.cross(Vec2f::X), -1.0);
    /// ```
    pub fn cross(self, other: Self) -> T
    where
        T: Number,
    {
        self.x * other.y - self.y * other.x
    }

    /// Computes the cross product of `self` (embedded at Z=0) with a vector pointing `z` along
    /// the Z axis, yielding `self` rotated 90° clockwise and scaled by `z`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// assert_eq!(Vec2f::X.cross_scalar(1.0), -Vec2f::Y);
    /// ```
    pub fn cross_scalar(self, z: T) -> Self
    where
        T: Number,
    {
        vec2(self.y * z, -self.x * z)
    }

    /// Computes the cross product of a vector pointing `z` along the Z axis with `other`,
    /// yielding `other` rotated 90° counterclockwise and scaled by `z`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// assert_eq!(Vec2::scalar_cross(1.0, Vec2f::X), Vec2f::Y);
    /// ```
    pub fn scalar_cross(z: T, other: Self) -> Self
    where
        T: Number,
    {
        vec2(-z * other.y, z * other.x)
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, ..] = self.into_array();
        [x, y].into()
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        [x, y, z, value].into()
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and `other`. Its direction
    /// depends on the order of the arguments: swapping them will invert the direction of the
    /// resulting vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// let x = Vec3f::X;
    /// let y = Vec3f::Y;
    /// let z = Vec3f::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, ..] = self.into_array();
        [x, y, z].into()
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Vector<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugViaDisplay<D>(D);
        impl<D: fmt::Display> fmt::Debug for DebugViaDisplay<D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(&DebugViaDisplay(elem));
        }
        tup.finish()
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

/// Constructs a [`Vec1`] from its single element.
#[inline]
pub const fn vec1<T>(x: T) -> Vec1<T> {
    Vector([x])
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vec3f::X.x, 1.0);
        assert_eq!(Vec3f::X[0], 1.0);
        assert_eq!(Vec3f::X[1], 0.0);
        assert_eq!(Vec3f::X.y, 0.0);
        assert_eq!(Vec3f::Y.y, 1.0);
        assert_eq!(Vec4f::W.w, 1.0);

        let mut v = vec2(0, 1);
        assert_eq!(v.x, 0);
        assert_eq!(v.g, 1);
        v.r = 777;
        assert_eq!(v.x, 777);
        assert_eq!(v[0], 777);
        v.y = 9;
        assert_eq!(v.g, 9);
        assert_eq!(v[1], 9);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec4f::W), "(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
    }

    #[test]
    fn rotate() {
        assert_approx_eq!(Vec2f::Y.rotate_clockwise(TAU / 4.0), Vec2f::X);
        assert_approx_eq!(Vec2f::Y.rotate_clockwise(TAU / 2.0), -Vec2f::Y);
        assert_approx_eq!(Vec2f::X.rotate_counterclockwise(TAU / 4.0), Vec2f::Y);
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(vec3(1, 3, -5).dot(vec3(1, 3, -5)), 35);

        assert_eq!(Vec2f::X.dot(Vec2f::X), 1.0);
        assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
    }

    #[test]
    fn cross_3d() {
        assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
        assert_eq!(Vec3f::Y.cross(Vec3f::X), -Vec3f::Z);
        assert_eq!(Vec3f::Y.cross(Vec3f::Z), Vec3f::X);
        assert_eq!(vec3(1.0, 0.0, 0.0).cross(vec3(0.0, 1.0, 0.0)), vec3(0.0, 0.0, 1.0));
    }

    #[test]
    fn cross_2d() {
        assert_eq!(vec2(2, 0).cross(vec2(0, 3)), 6);
        assert_eq!(vec2(0, 3).cross(vec2(2, 0)), -6);

        // Scalar forms behave like embedding the scalar as the Z component.
        assert_eq!(Vec2f::X.cross_scalar(2.0), vec2(0.0, -2.0));
        assert_eq!(Vec2::scalar_cross(2.0, Vec2f::X), vec2(0.0, 2.0));
        // cross(v, s) followed by cross(s, v) scales by s² without net rotation.
        let v = vec2(3.0, -1.0);
        assert_eq!(Vec2::scalar_cross(2.0, v.cross_scalar(2.0)), v * 4.0);
    }

    #[test]
    fn abs_angle() {
        assert_approx_eq!(Vec3f::Y.abs_angle_to(Vec3f::X), TAU / 4.0);
        assert_approx_eq!(Vec3f::Y.abs_angle_to(Vec3f::Y), 0.0);
        assert_approx_eq!(Vec3f::Y.abs_angle_to(-Vec3f::Y), TAU / 2.0);
        assert_approx_eq!(vec2(0.0, 2.0).abs_angle_to(vec2(-3.0, 0.0)), TAU / 4.0);
    }

    #[test]
    fn signed_angle() {
        assert_approx_eq!(Vec2f::Y.signed_angle_to(Vec2f::X), TAU / 4.0);
        assert_approx_eq!(Vec2f::X.signed_angle_to(Vec2f::Y), -TAU / 4.0);
        assert_approx_eq!(Vec2f::Y.signed_angle_to(Vec2f::Y), 0.0);
    }

    #[test]
    fn reductions() {
        assert_eq!(vec4(1, 2, 3, 4).sum(), 10);
        assert_eq!(vec4(1, 2, 3, 4).product(), 24);
        assert_eq!(vec3(5, -2, 3).min_element(), -2);
        assert_eq!(vec3(5, -2, 3).max_element(), 5);
        assert_eq!(vec3(1, 2, 3).fold(0, |acc, e| acc + e * e), 14);

        assert!(vec2(false, true).any());
        assert!(!vec2(false, false).any());
        assert!(vec2(true, true).all());
        assert!(!vec2(true, false).all());
    }

    #[test]
    fn lexicographic_order() {
        assert!(vec3(1, 2, 3) < vec3(1, 2, 4));
        assert!(vec3(1, 2, 3) < vec3(2, 0, 0));
        assert!(vec3(1, 2, 3) > vec3(1, 1, 9));
        assert!(vec3(1, 2, 3) <= vec3(1, 2, 3));
        assert!(vec3(1, 2, 3) >= vec3(1, 2, 3));

        let mut vs = [vec2(2, 1), vec2(1, 3), vec2(1, 2), vec2(2, 0)];
        vs.sort();
        assert_eq!(vs, [vec2(1, 2), vec2(1, 3), vec2(2, 0), vec2(2, 1)]);

        // Matches sorting by the tuple representation.
        let mut tuples = vs.map(|v| (v.x, v.y));
        tuples.sort();
        assert_eq!(tuples, [(1, 2), (1, 3), (2, 0), (2, 1)]);
    }

    #[test]
    fn interpolation() {
        assert_eq!(vec2(0.0, 10.0).lerp(vec2(10.0, 20.0), 0.5), vec2(5.0, 15.0));
        assert_eq!(vec2(0.0, 10.0).lerp(vec2(10.0, 20.0), 0.0), vec2(0.0, 10.0));

        assert_approx_eq!(vec2(2.0f32, 0.0).nlerp(vec2(0.0, 2.0), 0.5), vec2(0.5f32.sqrt(), 0.5f32.sqrt()));

        // slerp moves at a constant angular rate.
        let a = Vec2f::X;
        let b = Vec2f::Y;
        assert_approx_eq!(a.slerp(b, 0.5), vec2(0.5f32.sqrt(), 0.5f32.sqrt()));
        assert_approx_eq!(a.slerp(b, 0.0), a);
        assert_approx_eq!(a.slerp(b, 1.0), b);
        // Degenerate case: no angle between the endpoints.
        assert_eq!(a.slerp(a, 0.7), a);
    }

    #[test]
    fn iteration() {
        let v = vec3(1, 2, 3);
        assert_eq!(v.into_iter().collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(v.iter().copied().max(), Some(3));

        let mut v = vec2(1, 2);
        for e in &mut v {
            *e *= 10;
        }
        assert_eq!(v, vec2(10, 20));
    }
}
