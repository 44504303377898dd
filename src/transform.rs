//! Factories for 4x4 homogeneous transformation matrices.
//!
//! The projection factories are parameterized over the two conventions that vary between graphics
//! APIs: which way the camera looks along the Z axis ([`FwdAxis`]) and the depth range of the
//! clip volume ([`ZRange`]). OpenGL-style projections use [`FwdAxis::NegZ`] with
//! [`ZRange::NegOneToOne`]; Vulkan/Direct3D-style projections use [`ZRange::ZeroToOne`].

use crate::{vec4, Mat4, Matrix, Number, Quat, Sqrt, Trig, Vector};

/// The direction the camera looks along the Z axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FwdAxis {
    /// A right-handed view space: the camera looks towards -Z.
    NegZ,
    /// A left-handed view space: the camera looks towards +Z.
    PosZ,
}

/// The Z range of the clip volume a projection matrix maps the view frustum onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZRange {
    /// Depth values on the near plane map to -1, values on the far plane to +1 (OpenGL).
    NegOneToOne,
    /// Depth values on the near plane map to 0, values on the far plane to +1 (Vulkan,
    /// Direct3D, Metal).
    ZeroToOne,
}

/// Creates a matrix that translates points by `translation`.
///
/// # Examples
///
/// ```
/// # use linmat::*;
/// let m = translation_matrix(vec3(1.0, 2.0, 3.0));
/// assert_eq!(m * vec4(5.0, 5.0, 5.0, 1.0), vec4(6.0, 7.0, 8.0, 1.0));
/// // Directions (w = 0) are unaffected.
/// assert_eq!(m * vec4(5.0, 5.0, 5.0, 0.0), vec4(5.0, 5.0, 5.0, 0.0));
/// ```
pub fn translation_matrix<T: Number>(translation: Vector<T, 3>) -> Mat4<T> {
    Matrix::from_columns([
        Vector::<T, 4>::X,
        Vector::<T, 4>::Y,
        Vector::<T, 4>::Z,
        translation.extend(T::ONE),
    ])
}

/// Creates a matrix that scales each axis by the corresponding component of `scaling`.
pub fn scaling_matrix<T: Number>(scaling: Vector<T, 3>) -> Mat4<T> {
    Matrix::from_diagonal(scaling.extend(T::ONE))
}

/// Creates a matrix that rotates points the same way as the unit quaternion `q`.
pub fn rotation_matrix<T: Number>(q: Quat<T>) -> Mat4<T> {
    Matrix::from_columns([
        q.x_dir().extend(T::ZERO),
        q.y_dir().extend(T::ZERO),
        q.z_dir().extend(T::ZERO),
        vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
    ])
}

/// Creates a rigid-body transformation matrix that rotates by `q` and then translates by `p`.
///
/// Equivalent to `translation_matrix(p) * rotation_matrix(q)`.
pub fn pose_matrix<T: Number>(q: Quat<T>, p: Vector<T, 3>) -> Mat4<T> {
    Matrix::from_columns([
        q.x_dir().extend(T::ZERO),
        q.y_dir().extend(T::ZERO),
        q.z_dir().extend(T::ZERO),
        p.extend(T::ONE),
    ])
}

/// Creates a view matrix for a camera at `eye` looking at `center`.
///
/// `view_y_dir` is the approximate up direction used to orient the camera around its view axis;
/// it does not need to be orthogonal to the view direction, but must not be parallel to it.
pub fn lookat_matrix<T: Number + Sqrt>(
    eye: Vector<T, 3>,
    center: Vector<T, 3>,
    view_y_dir: Vector<T, 3>,
    fwd: FwdAxis,
) -> Mat4<T> {
    let f = (center - eye).normalize();
    let z = match fwd {
        FwdAxis::PosZ => f,
        FwdAxis::NegZ => -f,
    };
    let x = view_y_dir.cross(z).normalize();
    let y = z.cross(x);
    Matrix::from_columns([
        vec4(x.x, y.x, z.x, T::ZERO),
        vec4(x.y, y.y, z.y, T::ZERO),
        vec4(x.z, y.z, z.z, T::ZERO),
        vec4(-x.dot(eye), -y.dot(eye), -z.dot(eye), T::ONE),
    ])
}

/// Creates a projection matrix for a view frustum with the given bounds on the near plane.
///
/// `x0..x1` and `y0..y1` are the extents of the frustum where it intersects the near plane;
/// `near` and `far` are the distances of the near and far clipping planes (both positive).
pub fn frustum_matrix<T: Number>(
    x0: T,
    x1: T,
    y0: T,
    y1: T,
    near: T,
    far: T,
    fwd: FwdAxis,
    z_range: ZRange,
) -> Mat4<T> {
    let two = T::ONE + T::ONE;
    let s = match fwd {
        FwdAxis::PosZ => T::ONE,
        FwdAxis::NegZ => -T::ONE,
    };
    let o = match z_range {
        ZRange::NegOneToOne => near,
        ZRange::ZeroToOne => T::ZERO,
    };
    Matrix::from_columns([
        vec4(two * near / (x1 - x0), T::ZERO, T::ZERO, T::ZERO),
        vec4(T::ZERO, two * near / (y1 - y0), T::ZERO, T::ZERO),
        vec4(
            -s * (x0 + x1) / (x1 - x0),
            -s * (y0 + y1) / (y1 - y0),
            s * (far + o) / (far - near),
            s,
        ),
        vec4(
            T::ZERO,
            T::ZERO,
            -(near + o) * far / (far - near),
            T::ZERO,
        ),
    ])
}

/// Creates a perspective projection matrix from a vertical field of view.
///
/// `fovy` is the full vertical field of view in radians; `aspect` is the width of the viewport
/// divided by its height.
pub fn perspective_matrix<T: Number + Trig>(
    fovy: T,
    aspect: T,
    near: T,
    far: T,
    fwd: FwdAxis,
    z_range: ZRange,
) -> Mat4<T> {
    let one_half = T::ONE / (T::ONE + T::ONE);
    let y = near * (fovy * one_half).tan();
    let x = y * aspect;
    frustum_matrix(-x, x, -y, y, near, far, fwd, z_range)
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, vec3, vec4, Mat4f, Quat, Vec3f};

    use super::*;

    #[test]
    fn translation_and_scaling() {
        let m = translation_matrix(vec3(1.0, -2.0, 3.0));
        assert_eq!(m * vec4(0.0, 0.0, 0.0, 1.0), vec4(1.0, -2.0, 3.0, 1.0));

        let m = scaling_matrix(vec3(2.0, 3.0, 4.0));
        assert_eq!(m * vec4(1.0, 1.0, 1.0, 1.0), vec4(2.0, 3.0, 4.0, 1.0));

        // Transforms compose right-to-left.
        let m = translation_matrix(vec3(1.0, 0.0, 0.0)) * scaling_matrix(vec3(2.0, 2.0, 2.0));
        assert_eq!(m * vec4(1.0, 0.0, 0.0, 1.0), vec4(3.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn pose() {
        let q = Quat::from_rotation_z(0.7);
        let p = vec3(1.0, 2.0, 3.0);
        assert_approx_eq!(pose_matrix(q, p), translation_matrix(p) * rotation_matrix(q));

        let v = vec3(0.5, -1.0, 2.0);
        let out = pose_matrix(q, p) * v.extend(1.0);
        assert_approx_eq!(out.truncate(), q.rotate(v) + p);
    }

    #[test]
    fn rotation_matrix_agrees_with_quat() {
        let q = Quat::from_rotation_xyz(0.3, -0.8, 1.4);
        let v = vec3(1.0, 2.0, -0.5);
        let out = rotation_matrix(q) * v.extend(0.0);
        assert_approx_eq!(out.truncate(), q.rotate(v));
        assert_eq!(out.w, 0.0);
    }

    #[test]
    fn lookat() {
        // A camera at the origin looking down -Z with +Y up is the identity view.
        let m = lookat_matrix(Vec3f::ZERO, -Vec3f::Z, Vec3f::Y, FwdAxis::NegZ);
        assert_approx_eq!(m, Mat4f::IDENTITY);

        // The eye always maps to the view-space origin.
        let eye = vec3(1.0, 2.0, 3.0);
        let m = lookat_matrix(eye, vec3(-4.0, 0.0, 1.0), Vec3f::Y, FwdAxis::NegZ);
        assert_approx_eq!(m * eye.extend(1.0), vec4(0.0, 0.0, 0.0, 1.0));

        // The view direction maps onto the configured forward axis.
        let m = lookat_matrix(eye, eye + Vec3f::X, Vec3f::Y, FwdAxis::PosZ);
        let dir = m * Vec3f::X.extend(0.0);
        assert_approx_eq!(dir, vec4(0.0, 0.0, 1.0, 0.0));
    }

    #[test]
    fn frustum_depth_range() {
        let (n, f) = (0.1, 100.0);

        let m = frustum_matrix(-1.0, 1.0, -1.0, 1.0, n, f, FwdAxis::NegZ, ZRange::NegOneToOne);
        let near = m * vec4(0.0, 0.0, -n, 1.0);
        let far = m * vec4(0.0, 0.0, -f, 1.0);
        assert_approx_eq!(near.z / near.w, -1.0);
        assert_approx_eq!(far.z / far.w, 1.0, epsilon = 1e-3);

        let m = frustum_matrix(-1.0, 1.0, -1.0, 1.0, n, f, FwdAxis::NegZ, ZRange::ZeroToOne);
        let near = m * vec4(0.0, 0.0, -n, 1.0);
        let far = m * vec4(0.0, 0.0, -f, 1.0);
        assert_approx_eq!(near.z / near.w, 0.0);
        assert_approx_eq!(far.z / far.w, 1.0, epsilon = 1e-3);

        let m = frustum_matrix(-1.0, 1.0, -1.0, 1.0, n, f, FwdAxis::PosZ, ZRange::NegOneToOne);
        let near = m * vec4(0.0, 0.0, n, 1.0);
        let far = m * vec4(0.0, 0.0, f, 1.0);
        assert_approx_eq!(near.z / near.w, -1.0);
        assert_approx_eq!(far.z / far.w, 1.0, epsilon = 1e-3);
    }

    #[test]
    fn perspective() {
        // A point on the edge of the field of view projects to the edge of the clip volume.
        let fovy = std::f32::consts::FRAC_PI_2;
        let m = perspective_matrix(fovy, 1.0, 0.1, 100.0, FwdAxis::NegZ, ZRange::NegOneToOne);
        let v = m * vec4(0.0, 5.0, -5.0, 1.0);
        assert_approx_eq!(v.y / v.w, 1.0, epsilon = 1e-4);
        let v = m * vec4(-5.0, 0.0, -5.0, 1.0);
        assert_approx_eq!(v.x / v.w, -1.0, epsilon = 1e-4);
    }
}
