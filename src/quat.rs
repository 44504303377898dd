mod ops;
mod view;

use std::fmt;

use crate::{
    traits::Float,
    vec3, vec4, Matrix, Mat3, MinMax, Number, One, Sqrt, Trig, Vector, Zero,
};

/// A quaternion with [`f32`] components.
pub type Quatf = Quat<f32>;

/// A quaternion consisting of 3 imaginary numbers and a real number.
///
/// The `x`, `y` and `z` components are the coefficients of the imaginary units *i*, *j* and *k*;
/// `w` is the real part. Unit-length quaternions ("*versors*") are commonly used to represent
/// rotations in 3D space.
///
/// Storage and component access work like a 4-dimensional vector, but [`Quat`] is a distinct type
/// because its `*` operator is the [Hamilton product], not elementwise multiplication.
///
/// [Hamilton product]: https://en.wikipedia.org/wiki/Quaternion#Hamilton_product
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Quat<T> {
    vec: Vector<T, 4>,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity.
    ///
    /// This is a unit quaternion that will not change a vector it is multiplied with.
    pub const IDENTITY: Self = Self {
        vec: vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
    };
}

impl<T> Quat<T> {
    /// Creates a quaternion from a 4-dimensional [`Vector`].
    ///
    /// The `x`, `y`, and `z` coordinates correspond to the `i`, `j`, and `k` imaginary parts, while
    /// the `w` component corresponds to the real number part of the quaternion.
    pub fn from_vec(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }

    pub fn from_components(x: T, y: T, z: T, w: T) -> Self {
        Self {
            vec: [x, y, z, w].into(),
        }
    }

    /// Creates a quaternion from its imaginary part and its real part.
    pub fn from_parts(imag: Vector<T, 3>, real: T) -> Self {
        Self {
            vec: imag.extend(real),
        }
    }

    /// Returns the components of this quaternion as a 4-dimensional [`Vector`], in `x, y, z, w`
    /// order.
    pub fn into_vec(self) -> Vector<T, 4> {
        self.vec
    }

    /// Returns the imaginary part of this quaternion (the coefficients of *i*, *j* and *k*).
    pub fn xyz(self) -> Vector<T, 3> {
        self.vec.truncate()
    }

    fn one_half() -> T
    where
        T: Number,
    {
        T::ONE / (T::ONE + T::ONE)
    }

    /// Creates a quaternion that rotates by `radians` around `axis`.
    ///
    /// `axis` must have length 1 for the result to be a valid rotation.
    pub fn from_axis_angle(axis: Vector<T, 3>, radians: T) -> Self
    where
        T: Number + Trig,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_parts(axis * sin, cos)
    }

    pub fn from_rotation_x(radians: T) -> Self
    where
        T: Trig + Number,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_components(sin, T::ZERO, T::ZERO, cos)
    }

    pub fn from_rotation_y(radians: T) -> Self
    where
        T: Trig + Number,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_components(T::ZERO, sin, T::ZERO, cos)
    }

    pub fn from_rotation_z(radians: T) -> Self
    where
        T: Trig + Number,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_components(T::ZERO, T::ZERO, sin, cos)
    }

    /// Creates a quaternion representing a rotation around the X, Y, and Z axis, in sequence.
    #[doc(alias = "euler")]
    pub fn from_rotation_xyz(x: T, y: T, z: T) -> Self
    where
        T: Number + Trig,
    {
        Self::from_rotation_x(x) * Self::from_rotation_y(y) * Self::from_rotation_z(z)
    }

    /// Returns the squared length of this quaternion.
    ///
    /// If the squared length is not equal to one, multiplying a vector with this quaternion will
    /// scale the vector in addition to rotating it. When using quaternions to model rotations, it
    /// is advisable to ensure that quaternions are always of length one.
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.vec.length2()
    }

    /// Returns the length of this quaternion.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.vec.length()
    }

    /// Returns a normalized copy of this quaternion (whose length equals one).
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        Self {
            vec: self.vec.normalize(),
        }
    }

    /// Computes the dot product of the components of `self` and `other`.
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.vec.dot(other.vec)
    }

    /// Returns the conjugate of this quaternion (the imaginary part negated).
    ///
    /// For unit quaternions, the conjugate equals the [`inverse`][Self::inverse] and represents
    /// the opposite rotation.
    pub fn conjugate(self) -> Self
    where
        T: Number,
    {
        Self::from_parts(-self.xyz(), self.w)
    }

    /// Returns the multiplicative inverse of this quaternion.
    ///
    /// `q * q.inverse()` is the identity quaternion (up to rounding error). The zero quaternion
    /// has no inverse; for floats, all components of the result are NaN.
    pub fn inverse(self) -> Self
    where
        T: Number,
    {
        self.conjugate() / self.length2()
    }

    /// Left-folds the components into a single value, in `x, y, z, w` order.
    pub fn fold<A, F>(self, init: A, f: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        self.vec.fold(init, f)
    }

    /// Returns the first pair of corresponding components of `self` and `other` that differ, in
    /// `x, y, z, w` order, or the pair of `w` components if all are equal.
    pub fn compare(self, other: Self) -> (T, T)
    where
        T: PartialEq + Copy,
    {
        self.vec.compare(other.vec)
    }

    /// Returns the rotation angle, in radians.
    ///
    /// `self` must be a unit quaternion.
    pub fn angle(self) -> T
    where
        T: Number + Trig + Sqrt,
    {
        self.xyz().length().atan2(self.w) * (T::ONE + T::ONE)
    }

    /// Returns the normalized rotation axis.
    ///
    /// For a rotation by zero radians the axis is undefined, and all components of the result are
    /// NaN.
    pub fn axis(self) -> Vector<T, 3>
    where
        T: Number + Sqrt,
    {
        self.xyz().normalize()
    }

    /// Returns the direction the X axis points in after rotating by `self`.
    ///
    /// `self` must be a unit quaternion.
    pub fn x_dir(self) -> Vector<T, 3>
    where
        T: Number,
    {
        let two = T::ONE + T::ONE;
        let Self { vec } = self;
        vec3(
            vec.w * vec.w + vec.x * vec.x - vec.y * vec.y - vec.z * vec.z,
            two * (vec.x * vec.y + vec.z * vec.w),
            two * (vec.z * vec.x - vec.y * vec.w),
        )
    }

    /// Returns the direction the Y axis points in after rotating by `self`.
    ///
    /// `self` must be a unit quaternion.
    pub fn y_dir(self) -> Vector<T, 3>
    where
        T: Number,
    {
        let two = T::ONE + T::ONE;
        let Self { vec } = self;
        vec3(
            two * (vec.x * vec.y - vec.z * vec.w),
            vec.w * vec.w - vec.x * vec.x + vec.y * vec.y - vec.z * vec.z,
            two * (vec.y * vec.z + vec.x * vec.w),
        )
    }

    /// Returns the direction the Z axis points in after rotating by `self`.
    ///
    /// `self` must be a unit quaternion.
    pub fn z_dir(self) -> Vector<T, 3>
    where
        T: Number,
    {
        let two = T::ONE + T::ONE;
        let Self { vec } = self;
        vec3(
            two * (vec.z * vec.x + vec.y * vec.w),
            two * (vec.y * vec.z - vec.x * vec.w),
            vec.w * vec.w - vec.x * vec.x - vec.y * vec.y + vec.z * vec.z,
        )
    }

    /// Rotates a 3-dimensional vector by `self`.
    ///
    /// `self` must be a unit quaternion.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// use std::f32::consts::TAU;
    ///
    /// let q = Quat::from_rotation_z(TAU / 4.0);
    /// assert_approx_eq!(q.rotate(Vec3f::X), Vec3f::Y);
    /// ```
    pub fn rotate(self, v: Vector<T, 3>) -> Vector<T, 3>
    where
        T: Number,
    {
        self.x_dir() * v.x + self.y_dir() * v.y + self.z_dir() * v.z
    }

    /// Returns the 3x3 rotation matrix that rotates vectors the same way as `self`.
    ///
    /// `self` must be a unit quaternion.
    pub fn rotation_matrix(self) -> Mat3<T>
    where
        T: Number,
    {
        Matrix::from_columns([self.x_dir(), self.y_dir(), self.z_dir()])
    }

    /// Computes the quaternion exponential *e*^`self`.
    pub fn exp(self) -> Self
    where
        T: Number + Trig + Sqrt + Float,
    {
        let v = self.xyz();
        let vv = v.length();
        let coeff = if vv == T::ZERO { T::ZERO } else { vv.sin() / vv };
        Self::from_parts(v * coeff, vv.cos()) * self.w.exp()
    }

    /// Computes the natural logarithm of `self`.
    pub fn ln(self) -> Self
    where
        T: Number + Trig + Sqrt + Float,
    {
        let v = self.xyz();
        let vv = v.length();
        let qq = self.length();
        let coeff = if vv == T::ZERO {
            T::ZERO
        } else {
            (self.w / qq).acos() / vv
        };
        Self::from_parts(v * coeff, qq.ln())
    }

    /// Raises `self` to the power `exp`.
    ///
    /// For unit quaternions, `q.powf(t)` scales the rotation angle of `q` by `t`.
    pub fn powf(self, exp: T) -> Self
    where
        T: Number + Trig + Sqrt + Float,
    {
        (self.ln() * exp).exp()
    }

    /// Linearly interpolates the components of `self` (at `t = 0`) and `other` (at `t = 1`).
    ///
    /// The result is generally not a unit quaternion even when both inputs are; use
    /// [`nlerp`][Self::nlerp] or [`slerp`][Self::slerp] to interpolate rotations.
    pub fn lerp(self, other: Self, t: T) -> Self
    where
        T: Number,
    {
        Self {
            vec: self.vec.lerp(other.vec, t),
        }
    }

    /// Normalized linear interpolation between the rotations `self` and `other`.
    ///
    /// Cheaper than [`slerp`][Self::slerp], and commonly a good enough approximation, but does not
    /// advance the rotation at a constant rate as `t` changes.
    pub fn nlerp(self, other: Self, t: T) -> Self
    where
        T: Number + Sqrt + MinMax + PartialOrd,
    {
        let other = if self.dot(other) < T::ZERO { -other } else { other };
        self.lerp(other, t).normalize()
    }

    /// Spherical linear interpolation between the rotations `self` and `other`.
    ///
    /// Rotates at a constant angular rate from `self` (at `t = 0`) to `other` (at `t = 1`),
    /// following the shorter of the two arcs between them. When the inputs represent the same
    /// rotation, `self` is returned unchanged.
    pub fn slerp(self, other: Self, t: T) -> Self
    where
        T: Number + Trig + Sqrt + MinMax + PartialOrd,
    {
        let other = if self.dot(other) < T::ZERO { -other } else { other };
        Self {
            vec: self.vec.slerp(other.vec, t),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quat")?;
        self.vec.fmt(f)
    }
}

impl<T> From<[T; 4]> for Quat<T> {
    #[inline]
    fn from(components: [T; 4]) -> Self {
        Self {
            vec: components.into(),
        }
    }
}

impl<T> From<Vector<T, 4>> for Quat<T> {
    #[inline]
    fn from(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }
}

impl<T> From<Quat<T>> for Vector<T, 4> {
    #[inline]
    fn from(quat: Quat<T>) -> Self {
        quat.vec
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use crate::{assert_approx_eq, vec4, Vec3f};

    use super::*;

    #[test]
    fn identity_rotates_nothing() {
        assert_eq!(Quatf::IDENTITY.rotate(Vec3f::X), Vec3f::X);
        assert_eq!(Quatf::IDENTITY.rotate(vec3(1.0, -2.0, 3.0)), vec3(1.0, -2.0, 3.0));
        assert_eq!(Quatf::IDENTITY.rotation_matrix(), Mat3::IDENTITY);
    }

    #[test]
    fn axis_rotations() {
        let q = Quat::from_rotation_z(TAU / 4.0);
        assert_approx_eq!(q.rotate(Vec3f::X), Vec3f::Y);
        assert_approx_eq!(q.rotate(Vec3f::Y), -Vec3f::X);
        assert_approx_eq!(q.rotate(Vec3f::Z), Vec3f::Z);

        let q = Quat::from_rotation_x(TAU / 4.0);
        assert_approx_eq!(q.rotate(Vec3f::Y), Vec3f::Z);

        let q = Quat::from_rotation_y(TAU / 4.0);
        assert_approx_eq!(q.rotate(Vec3f::Z), Vec3f::X);

        // The `*_dir` accessors are the images of the basis vectors.
        let q = Quat::from_rotation_xyz(0.3, -1.2, 0.7);
        assert_approx_eq!(q.x_dir(), q.rotate(Vec3f::X));
        assert_approx_eq!(q.y_dir(), q.rotate(Vec3f::Y));
        assert_approx_eq!(q.z_dir(), q.rotate(Vec3f::Z));
    }

    #[test]
    fn axis_angle() {
        let q = Quat::from_axis_angle(Vec3f::Z, 1.0);
        assert_approx_eq!(q, Quat::from_rotation_z(1.0));
        assert_approx_eq!(q.angle(), 1.0);
        assert_approx_eq!(q.axis(), Vec3f::Z);

        let axis = vec3(1.0, 2.0, -0.5).normalize();
        let q = Quat::from_axis_angle(axis, 0.8);
        assert_approx_eq!(q.angle(), 0.8);
        assert_approx_eq!(q.axis(), axis);
        assert_approx_eq!(q.length(), 1.0);
    }

    #[test]
    fn composition() {
        // Hamilton product composes rotations right-to-left.
        let a = Quat::from_rotation_x(0.4);
        let b = Quat::from_rotation_y(-0.9);
        let v = vec3(0.5, 1.5, -2.0);
        assert_approx_eq!((a * b).rotate(v), a.rotate(b.rotate(v)));

        assert_approx_eq!(a * Quatf::IDENTITY, a);
        assert_approx_eq!(Quatf::IDENTITY * a, a);
    }

    #[test]
    fn conjugate_and_inverse() {
        let q = Quat::from_rotation_xyz(0.1, 0.2, 0.3);
        assert_approx_eq!(q * q.conjugate(), Quatf::IDENTITY);
        assert_approx_eq!(q * q.inverse(), Quatf::IDENTITY);

        // For non-unit quaternions only `inverse` undoes the product.
        let q = q * 3.0;
        assert_approx_eq!(q * q.inverse(), Quatf::IDENTITY);
    }

    #[test]
    fn rotation_matrix_matches_rotate() {
        let q = Quat::from_rotation_xyz(1.1, 0.4, -0.6);
        let m = q.rotation_matrix();
        let v = vec3(0.3, -2.0, 1.0);
        assert_approx_eq!(m * v, q.rotate(v));
    }

    #[test]
    fn exp_ln() {
        let q = Quat::from_rotation_xyz(0.4, -0.2, 0.9);
        assert_approx_eq!(q.ln().exp(), q);

        // powf scales the rotation angle.
        let q = Quat::from_rotation_z(0.8f32);
        assert_approx_eq!(q.powf(2.0), Quat::from_rotation_z(1.6), epsilon = 1e-5);
        assert_approx_eq!(q.powf(0.5), Quat::from_rotation_z(0.4), epsilon = 1e-5);

        // Real quaternions have a zero imaginary part; the undefined direction contributes
        // nothing instead of NaN.
        let real = Quat::from_components(0.0, 0.0, 0.0, 2.0f32);
        assert_approx_eq!(real.exp(), Quat::from_components(0.0, 0.0, 0.0, 2.0f32.exp()));
        assert_approx_eq!(real.ln(), Quat::from_components(0.0, 0.0, 0.0, 2.0f32.ln()));
    }

    #[test]
    fn interpolation() {
        let a = Quatf::IDENTITY;
        let b = Quat::from_rotation_z(1.0);
        assert_approx_eq!(a.slerp(b, 0.0), a);
        assert_approx_eq!(a.slerp(b, 1.0), b);
        assert_approx_eq!(a.slerp(b, 0.5), Quat::from_rotation_z(0.5));
        assert_approx_eq!(a.nlerp(b, 0.5), Quat::from_rotation_z(0.5), epsilon = 1e-3);

        // Interpolation takes the shorter arc even when the endpoint is negated.
        assert_approx_eq!(a.slerp(-b, 0.5), Quat::from_rotation_z(0.5));

        // Degenerate case: both endpoints represent the same rotation.
        assert_eq!(b.slerp(b, 0.3), b);
    }

    #[test]
    fn component_access() {
        let mut q = Quat::from_components(1, 2, 3, 4);
        assert_eq!(q.x, 1);
        assert_eq!(q.y, 2);
        assert_eq!(q.z, 3);
        assert_eq!(q.w, 4);
        q.w = 7;
        assert_eq!(q.into_vec(), vec4(1, 2, 3, 7));
        assert_eq!(q.xyz(), vec3(1, 2, 3));
    }
}
