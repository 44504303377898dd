//! Shape-generic elementwise application.
//!
//! This module is the machinery behind almost every componentwise operation in
//! the crate: a function over scalars is applied to the corresponding
//! components of one, two or three same-shaped arguments, where any argument
//! may also be a bare scalar that gets broadcast to every component.
//!
//! The legal argument patterns form a closed set, enumerated as [`Apply`]
//! impls on argument *tuples*:
//!
//! - every compound argument must have the exact same shape (same `N` for
//!   vectors, same `R`×`C` for matrices, or all quaternions), and
//! - at least one argument must be compound (a tuple of bare scalars is not a
//!   pattern — call the function directly instead).
//!
//! Anything else (a `Vec2` next to a `Vec3`, a vector next to a matrix, only
//! scalars) has no impl and fails to compile. The result has the shape of the
//! compound arguments and the element type returned by the function.
//!
//! Matrices apply per column, recursing into the vector patterns. Applying to
//! quaternions treats them as their four `x, y, z, w` components but yields a
//! [`Quat`] again, never a plain 4-vector.

use std::array;

use crate::{Matrix, Quat, Vector};

/// An argument tuple that a scalar function can be applied to elementwise.
///
/// `F` is the scalar function; the tuple decides shape and broadcasting. See
/// the [module docs][self] for the set of implemented patterns.
pub trait Apply<F>: Sized {
    /// The compound shape produced by the application.
    type Output;

    /// Applies `f` to each component of the arguments in `self`.
    fn apply(self, f: F) -> Self::Output;
}

/// Applies a scalar function to an argument tuple elementwise.
///
/// # Examples
///
/// ```
/// # use linmat::*;
/// // vector ∘ vector
/// assert_eq!(apply(|a, b| a + b, (vec2(1, 2), vec2(30, 40))), vec2(31, 42));
/// // scalar broadcast
/// assert_eq!(apply(|s, v| s - v, (10, vec3(1, 2, 3))), vec3(9, 8, 7));
/// // ternary
/// let v = apply(|a, b, c| a * b + c, (vec2(1, 2), vec2(3, 4), 10));
/// assert_eq!(v, vec2(13, 18));
/// ```
pub fn apply<F, A: Apply<F>>(f: F, args: A) -> A::Output {
    args.apply(f)
}

/// Applies a unary scalar function to every component of `a`.
///
/// # Examples
///
/// ```
/// # use linmat::*;
/// assert_eq!(map(vec3(1, 2, 3), |x| x * 10), vec3(10, 20, 30));
/// ```
pub fn map<F, A>(a: A, f: F) -> <(A,) as Apply<F>>::Output
where
    (A,): Apply<F>,
{
    (a,).apply(f)
}

/// Applies a binary scalar function to the corresponding components of `a`
/// and `b`; either may be a bare scalar.
///
/// # Examples
///
/// ```
/// # use linmat::*;
/// assert_eq!(zip(vec2(6, 8), vec2(3, 2), |a, b| a / b), vec2(2, 4));
/// assert_eq!(zip(vec2(6, 8), 2, |a, b| a / b), vec2(3, 4));
/// ```
pub fn zip<F, A, B>(a: A, b: B, f: F) -> <(A, B) as Apply<F>>::Output
where
    (A, B): Apply<F>,
{
    (a, b).apply(f)
}

/// Applies a ternary scalar function componentwise; any argument may be a
/// bare scalar.
pub fn zip3<F, A, B, C>(a: A, b: B, c: C, f: F) -> <(A, B, C) as Apply<F>>::Output
where
    (A, B, C): Apply<F>,
{
    (a, b, c).apply(f)
}

// ---- Vector patterns (the base case) ----

impl<T, U, F, const N: usize> Apply<F> for (Vector<T, N>,)
where
    T: Copy,
    F: FnMut(T) -> U,
{
    type Output = Vector<U, N>;

    fn apply(self, mut f: F) -> Self::Output {
        Vector::from_fn(|i| f(self.0[i]))
    }
}

impl<T, U, F, const N: usize> Apply<F> for (Vector<T, N>, Vector<T, N>)
where
    T: Copy,
    F: FnMut(T, T) -> U,
{
    type Output = Vector<U, N>;

    fn apply(self, mut f: F) -> Self::Output {
        Vector::from_fn(|i| f(self.0[i], self.1[i]))
    }
}

impl<T, U, F, const N: usize> Apply<F> for (Vector<T, N>, T)
where
    T: Copy,
    F: FnMut(T, T) -> U,
{
    type Output = Vector<U, N>;

    fn apply(self, mut f: F) -> Self::Output {
        Vector::from_fn(|i| f(self.0[i], self.1))
    }
}

impl<T, U, F, const N: usize> Apply<F> for (T, Vector<T, N>)
where
    T: Copy,
    F: FnMut(T, T) -> U,
{
    type Output = Vector<U, N>;

    fn apply(self, mut f: F) -> Self::Output {
        Vector::from_fn(|i| f(self.0, self.1[i]))
    }
}

impl<T, U, F, const N: usize> Apply<F> for (Vector<T, N>, Vector<T, N>, Vector<T, N>)
where
    T: Copy,
    F: FnMut(T, T, T) -> U,
{
    type Output = Vector<U, N>;

    fn apply(self, mut f: F) -> Self::Output {
        Vector::from_fn(|i| f(self.0[i], self.1[i], self.2[i]))
    }
}

impl<T, U, F, const N: usize> Apply<F> for (Vector<T, N>, Vector<T, N>, T)
where
    T: Copy,
    F: FnMut(T, T, T) -> U,
{
    type Output = Vector<U, N>;

    fn apply(self, mut f: F) -> Self::Output {
        Vector::from_fn(|i| f(self.0[i], self.1[i], self.2))
    }
}

impl<T, U, F, const N: usize> Apply<F> for (Vector<T, N>, T, Vector<T, N>)
where
    T: Copy,
    F: FnMut(T, T, T) -> U,
{
    type Output = Vector<U, N>;

    fn apply(self, mut f: F) -> Self::Output {
        Vector::from_fn(|i| f(self.0[i], self.1, self.2[i]))
    }
}

impl<T, U, F, const N: usize> Apply<F> for (T, Vector<T, N>, Vector<T, N>)
where
    T: Copy,
    F: FnMut(T, T, T) -> U,
{
    type Output = Vector<U, N>;

    fn apply(self, mut f: F) -> Self::Output {
        Vector::from_fn(|i| f(self.0, self.1[i], self.2[i]))
    }
}

impl<T, U, F, const N: usize> Apply<F> for (Vector<T, N>, T, T)
where
    T: Copy,
    F: FnMut(T, T, T) -> U,
{
    type Output = Vector<U, N>;

    fn apply(self, mut f: F) -> Self::Output {
        Vector::from_fn(|i| f(self.0[i], self.1, self.2))
    }
}

impl<T, U, F, const N: usize> Apply<F> for (T, Vector<T, N>, T)
where
    T: Copy,
    F: FnMut(T, T, T) -> U,
{
    type Output = Vector<U, N>;

    fn apply(self, mut f: F) -> Self::Output {
        Vector::from_fn(|i| f(self.0, self.1[i], self.2))
    }
}

impl<T, U, F, const N: usize> Apply<F> for (T, T, Vector<T, N>)
where
    T: Copy,
    F: FnMut(T, T, T) -> U,
{
    type Output = Vector<U, N>;

    fn apply(self, mut f: F) -> Self::Output {
        Vector::from_fn(|i| f(self.0, self.1, self.2[i]))
    }
}

// ---- Matrix patterns (one level of recursion into the vector patterns) ----

impl<T, U, F, const R: usize, const C: usize> Apply<F> for (Matrix<T, R, C>,)
where
    T: Copy,
    F: FnMut(T) -> U,
{
    type Output = Matrix<U, R, C>;

    fn apply(self, mut f: F) -> Self::Output {
        Matrix::from_columns(array::from_fn(|j| (self.0.column(j),).apply(&mut f)))
    }
}

impl<T, U, F, const R: usize, const C: usize> Apply<F> for (Matrix<T, R, C>, Matrix<T, R, C>)
where
    T: Copy,
    F: FnMut(T, T) -> U,
{
    type Output = Matrix<U, R, C>;

    fn apply(self, mut f: F) -> Self::Output {
        Matrix::from_columns(array::from_fn(|j| {
            (self.0.column(j), self.1.column(j)).apply(&mut f)
        }))
    }
}

impl<T, U, F, const R: usize, const C: usize> Apply<F> for (Matrix<T, R, C>, T)
where
    T: Copy,
    F: FnMut(T, T) -> U,
{
    type Output = Matrix<U, R, C>;

    fn apply(self, mut f: F) -> Self::Output {
        Matrix::from_columns(array::from_fn(|j| (self.0.column(j), self.1).apply(&mut f)))
    }
}

impl<T, U, F, const R: usize, const C: usize> Apply<F> for (T, Matrix<T, R, C>)
where
    T: Copy,
    F: FnMut(T, T) -> U,
{
    type Output = Matrix<U, R, C>;

    fn apply(self, mut f: F) -> Self::Output {
        Matrix::from_columns(array::from_fn(|j| (self.0, self.1.column(j)).apply(&mut f)))
    }
}

impl<T, U, F, const R: usize, const C: usize> Apply<F>
    for (Matrix<T, R, C>, Matrix<T, R, C>, Matrix<T, R, C>)
where
    T: Copy,
    F: FnMut(T, T, T) -> U,
{
    type Output = Matrix<U, R, C>;

    fn apply(self, mut f: F) -> Self::Output {
        Matrix::from_columns(array::from_fn(|j| {
            (self.0.column(j), self.1.column(j), self.2.column(j)).apply(&mut f)
        }))
    }
}

impl<T, U, F, const R: usize, const C: usize> Apply<F>
    for (Matrix<T, R, C>, Matrix<T, R, C>, T)
where
    T: Copy,
    F: FnMut(T, T, T) -> U,
{
    type Output = Matrix<U, R, C>;

    fn apply(self, mut f: F) -> Self::Output {
        Matrix::from_columns(array::from_fn(|j| {
            (self.0.column(j), self.1.column(j), self.2).apply(&mut f)
        }))
    }
}

impl<T, U, F, const R: usize, const C: usize> Apply<F>
    for (Matrix<T, R, C>, T, Matrix<T, R, C>)
where
    T: Copy,
    F: FnMut(T, T, T) -> U,
{
    type Output = Matrix<U, R, C>;

    fn apply(self, mut f: F) -> Self::Output {
        Matrix::from_columns(array::from_fn(|j| {
            (self.0.column(j), self.1, self.2.column(j)).apply(&mut f)
        }))
    }
}

impl<T, U, F, const R: usize, const C: usize> Apply<F>
    for (T, Matrix<T, R, C>, Matrix<T, R, C>)
where
    T: Copy,
    F: FnMut(T, T, T) -> U,
{
    type Output = Matrix<U, R, C>;

    fn apply(self, mut f: F) -> Self::Output {
        Matrix::from_columns(array::from_fn(|j| {
            (self.0, self.1.column(j), self.2.column(j)).apply(&mut f)
        }))
    }
}

impl<T, U, F, const R: usize, const C: usize> Apply<F> for (Matrix<T, R, C>, T, T)
where
    T: Copy,
    F: FnMut(T, T, T) -> U,
{
    type Output = Matrix<U, R, C>;

    fn apply(self, mut f: F) -> Self::Output {
        Matrix::from_columns(array::from_fn(|j| {
            (self.0.column(j), self.1, self.2).apply(&mut f)
        }))
    }
}

impl<T, U, F, const R: usize, const C: usize> Apply<F> for (T, Matrix<T, R, C>, T)
where
    T: Copy,
    F: FnMut(T, T, T) -> U,
{
    type Output = Matrix<U, R, C>;

    fn apply(self, mut f: F) -> Self::Output {
        Matrix::from_columns(array::from_fn(|j| {
            (self.0, self.1.column(j), self.2).apply(&mut f)
        }))
    }
}

impl<T, U, F, const R: usize, const C: usize> Apply<F> for (T, T, Matrix<T, R, C>)
where
    T: Copy,
    F: FnMut(T, T, T) -> U,
{
    type Output = Matrix<U, R, C>;

    fn apply(self, mut f: F) -> Self::Output {
        Matrix::from_columns(array::from_fn(|j| {
            (self.0, self.1, self.2.column(j)).apply(&mut f)
        }))
    }
}

// ---- Quat patterns (flat x,y,z,w application, quaternion identity kept) ----

impl<T, U, F> Apply<F> for (Quat<T>,)
where
    T: Copy,
    F: FnMut(T) -> U,
{
    type Output = Quat<U>;

    fn apply(self, f: F) -> Self::Output {
        Quat::from_vec((self.0.into_vec(),).apply(f))
    }
}

impl<T, U, F> Apply<F> for (Quat<T>, Quat<T>)
where
    T: Copy,
    F: FnMut(T, T) -> U,
{
    type Output = Quat<U>;

    fn apply(self, f: F) -> Self::Output {
        Quat::from_vec((self.0.into_vec(), self.1.into_vec()).apply(f))
    }
}

impl<T, U, F> Apply<F> for (Quat<T>, T)
where
    T: Copy,
    F: FnMut(T, T) -> U,
{
    type Output = Quat<U>;

    fn apply(self, f: F) -> Self::Output {
        Quat::from_vec((self.0.into_vec(), self.1).apply(f))
    }
}

impl<T, U, F> Apply<F> for (T, Quat<T>)
where
    T: Copy,
    F: FnMut(T, T) -> U,
{
    type Output = Quat<U>;

    fn apply(self, f: F) -> Self::Output {
        Quat::from_vec((self.0, self.1.into_vec()).apply(f))
    }
}

impl<T, U, F> Apply<F> for (Quat<T>, Quat<T>, Quat<T>)
where
    T: Copy,
    F: FnMut(T, T, T) -> U,
{
    type Output = Quat<U>;

    fn apply(self, f: F) -> Self::Output {
        Quat::from_vec((self.0.into_vec(), self.1.into_vec(), self.2.into_vec()).apply(f))
    }
}

impl<T, U, F> Apply<F> for (Quat<T>, Quat<T>, T)
where
    T: Copy,
    F: FnMut(T, T, T) -> U,
{
    type Output = Quat<U>;

    fn apply(self, f: F) -> Self::Output {
        Quat::from_vec((self.0.into_vec(), self.1.into_vec(), self.2).apply(f))
    }
}

impl<T, U, F> Apply<F> for (Quat<T>, T, Quat<T>)
where
    T: Copy,
    F: FnMut(T, T, T) -> U,
{
    type Output = Quat<U>;

    fn apply(self, f: F) -> Self::Output {
        Quat::from_vec((self.0.into_vec(), self.1, self.2.into_vec()).apply(f))
    }
}

impl<T, U, F> Apply<F> for (T, Quat<T>, Quat<T>)
where
    T: Copy,
    F: FnMut(T, T, T) -> U,
{
    type Output = Quat<U>;

    fn apply(self, f: F) -> Self::Output {
        Quat::from_vec((self.0, self.1.into_vec(), self.2.into_vec()).apply(f))
    }
}

impl<T, U, F> Apply<F> for (Quat<T>, T, T)
where
    T: Copy,
    F: FnMut(T, T, T) -> U,
{
    type Output = Quat<U>;

    fn apply(self, f: F) -> Self::Output {
        Quat::from_vec((self.0.into_vec(), self.1, self.2).apply(f))
    }
}

impl<T, U, F> Apply<F> for (T, Quat<T>, T)
where
    T: Copy,
    F: FnMut(T, T, T) -> U,
{
    type Output = Quat<U>;

    fn apply(self, f: F) -> Self::Output {
        Quat::from_vec((self.0, self.1.into_vec(), self.2).apply(f))
    }
}

impl<T, U, F> Apply<F> for (T, T, Quat<T>)
where
    T: Copy,
    F: FnMut(T, T, T) -> U,
{
    type Output = Quat<U>;

    fn apply(self, f: F) -> Self::Output {
        Quat::from_vec((self.0, self.1, self.2.into_vec()).apply(f))
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, Matrix, Quat};

    use super::*;

    #[test]
    fn vector_patterns() {
        assert_eq!(map(vec3(1, 2, 3), |x| x + 1), vec3(2, 3, 4));
        assert_eq!(zip(vec2(1, 2), vec2(10, 20), |a, b| a * b), vec2(10, 40));
        assert_eq!(zip(vec2(1, 2), 10, |a, b| a * b), vec2(10, 20));
        assert_eq!(zip(10, vec2(1, 2), |a, b| a - b), vec2(9, 8));
        assert_eq!(
            zip3(vec2(1, 2), vec2(3, 4), vec2(5, 6), |a, b, c| a + b + c),
            vec2(9, 12)
        );
        assert_eq!(zip3(vec2(1, 2), 3, 4, |a, b, c| a * b + c), vec2(7, 10));
        assert_eq!(zip3(2, vec2(1, 2), 4, |a, b, c| a * b + c), vec2(6, 8));
        assert_eq!(zip3(2, 3, vec2(1, 2), |a, b, c| a * b + c), vec2(7, 8));
    }

    #[test]
    fn changes_element_type() {
        assert_eq!(map(vec2(1, -2), |x| x > 0), vec2(true, false));
    }

    #[test]
    fn matrix_recurses_per_column() {
        let m = Matrix::from_rows([[1, 2], [3, 4]]);
        assert_eq!(map(m, |x| x * 2), Matrix::from_rows([[2, 4], [6, 8]]));
        assert_eq!(
            zip(m, 10, |a, b| a * b),
            Matrix::from_rows([[10, 20], [30, 40]])
        );
        assert_eq!(zip(m, m, |a, b| a + b), Matrix::from_rows([[2, 4], [6, 8]]));
    }

    #[test]
    fn quat_keeps_its_type() {
        let q = Quat::from_components(1, 2, 3, 4);
        let doubled: Quat<i32> = zip(q, 2, |a, b| a * b);
        assert_eq!(doubled, Quat::from_components(2, 4, 6, 8));

        let sum: Quat<i32> = zip(q, q, |a, b| a + b);
        assert_eq!(sum, Quat::from_components(2, 4, 6, 8));
    }

    #[test]
    fn broadcast_positions() {
        let q = Quat::from_components(1, 2, 3, 4);
        assert_eq!(zip(10, q, |a, b| a - b), Quat::from_components(9, 8, 7, 6));
        assert_eq!(
            zip3(q, 10, 100, |a, b, c| a * b + c),
            Quat::from_components(110, 120, 130, 140)
        );
    }
}
