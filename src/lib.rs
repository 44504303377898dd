//! Small fixed-size linear algebra: vectors, matrices and quaternions.
//!
//! # Motivation
//!
//! This library covers the sizes that actually occur in geometry and graphics code — vectors of 1
//! to 4 elements, matrices of up to 4 rows and columns, and quaternions — and nothing beyond
//! them. Restricting the scope this way keeps the API small and the error messages readable:
//!
//! - Dimensions are const generics, so shape mismatches are compile errors, not runtime panics.
//! - There is a single, column-major, unpadded data layout for matrices and vectors (with
//!   [`bytemuck`] impls for safe transmutation to byte buffers).
//! - Everything is generic over the element type, but non-[`Copy`] numeric types (eg. "big
//!   decimals") are out of scope.
//!
//! # Structure
//!
//! At the center sits the [`Apply`] trait: the componentwise application engine. It is
//! implemented for tuples of 1 to 3 arguments that mix *one shape* ([`Vector`], [`Matrix`] or
//! [`Quat`]) with broadcast scalars, and maps a scalar function over the components of the
//! compound arguments:
//!
//! ```
//! # use linmat::*;
//! assert_eq!(zip(vec3(1, 2, 3), 10, |a, b| a * b), vec3(10, 20, 30));
//! ```
//!
//! Three layers are built on top of it:
//!
//! - the operator impls in [`Vector`], [`Matrix`] and [`Quat`] (elementwise where mathematics
//!   has no other opinion; `*` is the matrix product for matrices and the Hamilton product for
//!   quaternions),
//! - the scalar math function families ([`abs`], [`sqrt`], [`lerp`], [`less`], [`select`], …),
//!   each accepting any legal argument-shape combination,
//! - the named algebraic operations ([`Vector::dot`], [`Matrix::invert`], [`Quat::slerp`], …)
//!   and the homogeneous transform factories ([`perspective_matrix`], [`lookat_matrix`], …).

mod apply;
mod funcs;
mod matrix;
mod quat;
mod traits;
mod transform;
mod vector;

pub use apply::*;
pub use funcs::*;
pub use matrix::*;
pub use quat::*;
pub use traits::*;
pub use transform::*;
pub use vector::*;

/// Asserts that two values are approximately equal, with an absolute per-component tolerance.
///
/// The tolerance defaults to `1e-5` and can be overridden with
/// `assert_approx_eq!(a, b, epsilon = ...)`.
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        ::approx::assert_abs_diff_eq!($lhs, $rhs, epsilon = 1e-5)
    };
    ($lhs:expr, $rhs:expr, epsilon = $eps:expr $(,)?) => {
        ::approx::assert_abs_diff_eq!($lhs, $rhs, epsilon = $eps)
    };
}
