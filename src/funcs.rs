//! Named elementwise function families.
//!
//! Every function here is a thin wrapper that routes the corresponding scalar
//! operation through [`apply`], so each one accepts the full set of argument
//! patterns the engine supports: any compound shape, with bare scalars
//! broadcast into any binary/ternary argument position. None of them add
//! behavior beyond the underlying scalar function.
//!
//! The unary wrappers follow Rust naming where it differs from the classic
//! math-library names (`ln` for the natural logarithm).

use std::ops::Rem;

use crate::{
    apply,
    traits::{Abs, Float, MinMax, Number, Sqrt, Trig},
    Apply, Matrix, Quat, Vector,
};

macro_rules! unary_fns {
    ($($(#[$attr:meta])* $name:ident: $bound:ident),+ $(,)?) => {
        $(
            $(#[$attr])*
            pub fn $name<T, A>(a: A) -> <(A,) as Apply<fn(T) -> T>>::Output
            where
                T: $bound,
                (A,): Apply<fn(T) -> T>,
            {
                apply(T::$name as fn(T) -> T, (a,))
            }
        )+
    };
}

unary_fns! {
    /// Componentwise absolute value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// assert_eq!(abs(vec3(-1, 2, -3)), vec3(1, 2, 3));
    /// ```
    abs: Abs,
    /// Componentwise square root.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// assert_eq!(sqrt(vec2(4.0, 9.0)), vec2(2.0, 3.0));
    /// ```
    sqrt: Sqrt,
    /// Componentwise floor.
    floor: Float,
    /// Componentwise ceiling.
    ceil: Float,
    /// Componentwise rounding, half-way cases away from zero.
    round: Float,
    /// Componentwise `eˣ`.
    exp: Float,
    /// Componentwise natural logarithm.
    ln: Float,
    /// Componentwise base-10 logarithm.
    log10: Float,
    /// Componentwise sine (radians).
    sin: Trig,
    /// Componentwise cosine (radians).
    cos: Trig,
    /// Componentwise tangent (radians).
    tan: Trig,
    /// Componentwise arcsine.
    asin: Trig,
    /// Componentwise arccosine.
    acos: Trig,
    /// Componentwise arctangent.
    atan: Trig,
    /// Componentwise hyperbolic sine.
    sinh: Float,
    /// Componentwise hyperbolic cosine.
    cosh: Float,
    /// Componentwise hyperbolic tangent.
    tanh: Float,
}

/// Componentwise floating-point remainder.
///
/// # Examples
///
/// ```
/// # use linmat::*;
/// assert_eq!(fmod(vec2(7.0, -7.0), 4.0), vec2(3.0, -3.0));
/// ```
pub fn fmod<T, A, B>(a: A, b: B) -> <(A, B) as Apply<fn(T, T) -> T>>::Output
where
    T: Rem<Output = T>,
    (A, B): Apply<fn(T, T) -> T>,
{
    apply(T::rem as fn(T, T) -> T, (a, b))
}

/// Componentwise power `a^b`.
pub fn pow<T, A, B>(a: A, b: B) -> <(A, B) as Apply<fn(T, T) -> T>>::Output
where
    T: Float,
    (A, B): Apply<fn(T, T) -> T>,
{
    apply(T::powf as fn(T, T) -> T, (a, b))
}

/// Componentwise four-quadrant arctangent of `y/x`.
pub fn atan2<T, A, B>(y: A, x: B) -> <(A, B) as Apply<fn(T, T) -> T>>::Output
where
    T: Trig,
    (A, B): Apply<fn(T, T) -> T>,
{
    apply(T::atan2 as fn(T, T) -> T, (y, x))
}

/// Componentwise magnitude of `a` with the sign of `b`.
pub fn copysign<T, A, B>(a: A, b: B) -> <(A, B) as Apply<fn(T, T) -> T>>::Output
where
    T: Float,
    (A, B): Apply<fn(T, T) -> T>,
{
    apply(T::copysign as fn(T, T) -> T, (a, b))
}

/// Componentwise minimum.
///
/// # Examples
///
/// ```
/// # use linmat::*;
/// assert_eq!(min(vec3(1, 5, 3), vec3(4, 2, 3)), vec3(1, 2, 3));
/// assert_eq!(min(vec3(1, 5, 3), 2), vec3(1, 2, 2));
/// ```
pub fn min<T, A, B>(a: A, b: B) -> <(A, B) as Apply<fn(T, T) -> T>>::Output
where
    T: MinMax,
    (A, B): Apply<fn(T, T) -> T>,
{
    apply(T::min as fn(T, T) -> T, (a, b))
}

/// Componentwise maximum.
pub fn max<T, A, B>(a: A, b: B) -> <(A, B) as Apply<fn(T, T) -> T>>::Output
where
    T: MinMax,
    (A, B): Apply<fn(T, T) -> T>,
{
    apply(T::max as fn(T, T) -> T, (a, b))
}

/// Componentwise clamp of `x` between `lo` and `hi`.
///
/// # Examples
///
/// ```
/// # use linmat::*;
/// assert_eq!(clamp(vec3(-5, 2, 9), 0, 4), vec3(0, 2, 4));
/// ```
pub fn clamp<T, A, B, C>(x: A, lo: B, hi: C) -> <(A, B, C) as Apply<fn(T, T, T) -> T>>::Output
where
    T: MinMax,
    (A, B, C): Apply<fn(T, T, T) -> T>,
{
    apply(T::clamp as fn(T, T, T) -> T, (x, lo, hi))
}

/// Componentwise linear interpolation `a*(1-t) + b*t`.
///
/// `t` is *not* clamped to `[0, 1]`; values outside that range extrapolate.
///
/// # Examples
///
/// ```
/// # use linmat::*;
/// assert_eq!(lerp(vec2(0.0, 10.0), vec2(1.0, 20.0), 0.5), vec2(0.5, 15.0));
/// assert_eq!(lerp(0.0, 10.0f32, vec2(0.0, 2.0)), vec2(0.0, 20.0));
/// ```
pub fn lerp<T, A, B, C>(a: A, b: B, t: C) -> <(A, B, C) as Apply<fn(T, T, T) -> T>>::Output
where
    T: Number,
    (A, B, C): Apply<fn(T, T, T) -> T>,
{
    apply(
        (|a, b, t| a * (T::ONE - t) + b * t) as fn(T, T, T) -> T,
        (a, b, t),
    )
}

macro_rules! relational_fns {
    ($($(#[$attr:meta])* $name:ident($a:ident, $b:ident): $bound:ident => $expr:expr),+ $(,)?) => {
        $(
            $(#[$attr])*
            pub fn $name<T, A, B>(a: A, b: B) -> <(A, B) as Apply<fn(T, T) -> bool>>::Output
            where
                T: $bound,
                (A, B): Apply<fn(T, T) -> bool>,
            {
                apply((|$a: T, $b: T| $expr) as fn(T, T) -> bool, (a, b))
            }
        )+
    };
}

relational_fns! {
    /// Componentwise `==`, producing a `bool`-element shape.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// assert_eq!(equal(vec3(1, 2, 3), vec3(1, 0, 3)), vec3(true, false, true));
    /// ```
    equal(a, b): PartialEq => a == b,
    /// Componentwise `!=`.
    nequal(a, b): PartialEq => a != b,
    /// Componentwise `<`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// assert_eq!(less(vec2(1, 5), 3), vec2(true, false));
    /// ```
    less(a, b): PartialOrd => a < b,
    /// Componentwise `>`.
    greater(a, b): PartialOrd => a > b,
    /// Componentwise `<=`.
    lequal(a, b): PartialOrd => a <= b,
    /// Componentwise `>=`.
    gequal(a, b): PartialOrd => a >= b,
}

/// Shapes supporting componentwise selection by a boolean mask of the same
/// shape.
///
/// This cannot go through [`Apply`] because the mask's element type (`bool`)
/// differs from the value element type, which the engine's patterns keep
/// uniform.
pub trait Select: Sized {
    /// The same shape with `bool` elements.
    type Mask;

    fn select(mask: Self::Mask, on_true: Self, on_false: Self) -> Self;
}

impl<T: Copy, const N: usize> Select for Vector<T, N> {
    type Mask = Vector<bool, N>;

    fn select(mask: Self::Mask, on_true: Self, on_false: Self) -> Self {
        Vector::from_fn(|i| if mask[i] { on_true[i] } else { on_false[i] })
    }
}

impl<T: Copy, const R: usize, const C: usize> Select for Matrix<T, R, C> {
    type Mask = Matrix<bool, R, C>;

    fn select(mask: Self::Mask, on_true: Self, on_false: Self) -> Self {
        Matrix::from_fn(|r, c| {
            if mask[(r, c)] {
                on_true[(r, c)]
            } else {
                on_false[(r, c)]
            }
        })
    }
}

impl<T: Copy> Select for Quat<T> {
    type Mask = Quat<bool>;

    fn select(mask: Self::Mask, on_true: Self, on_false: Self) -> Self {
        Quat::from_vec(Vector::select(
            mask.into_vec(),
            on_true.into_vec(),
            on_false.into_vec(),
        ))
    }
}

/// Componentwise selection: where `mask` holds `true`, take the component of
/// `on_true`, else the component of `on_false`.
///
/// # Examples
///
/// ```
/// # use linmat::*;
/// let picked = select(vec3(true, false, true), vec3(1, 2, 3), vec3(40, 50, 60));
/// assert_eq!(picked, vec3(1, 50, 3));
/// ```
pub fn select<V: Select>(mask: V::Mask, on_true: V, on_false: V) -> V {
    V::select(mask, on_true, on_false)
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, Matrix};

    use super::*;

    #[test]
    fn unary_on_all_shapes() {
        assert_eq!(abs(vec2(-1, 2)), vec2(1, 2));
        assert_eq!(
            abs(Matrix::from_rows([[-1, 2], [3, -4]])),
            Matrix::from_rows([[1, 2], [3, 4]])
        );
        assert_eq!(
            abs(Quat::from_components(-1, 2, -3, 4)),
            Quat::from_components(1, 2, 3, 4)
        );
    }

    #[test]
    fn binary_broadcast() {
        assert_eq!(pow(vec2(2.0f32, 3.0), 2.0), vec2(4.0, 9.0));
        assert_eq!(fmod(vec2(7, 9), vec2(4, 5)), vec2(3, 4));
        assert_eq!(min(3, vec2(1, 5)), vec2(1, 3));
        assert_eq!(max(3, vec2(1, 5)), vec2(3, 5));
    }

    #[test]
    fn clamp_and_lerp() {
        assert_eq!(clamp(vec3(-5, 2, 9), 0, 4), vec3(0, 2, 4));
        assert_eq!(clamp(vec3(-5, 2, 9), vec3(0, 3, 0), vec3(4, 4, 4)), vec3(0, 3, 4));
        assert_eq!(lerp(vec2(0.0, 0.0), vec2(2.0, 4.0), 0.25), vec2(0.5, 1.0));
        // Not clamped: t outside [0, 1] extrapolates.
        assert_eq!(lerp(0.0f32, 1.0, vec2(-1.0, 2.0)), vec2(-1.0, 2.0));
    }

    #[test]
    fn relational() {
        assert_eq!(equal(vec2(1, 2), vec2(1, 3)), vec2(true, false));
        assert_eq!(nequal(vec2(1, 2), vec2(1, 3)), vec2(false, true));
        assert_eq!(less(vec2(1, 5), 3), vec2(true, false));
        assert_eq!(greater(vec2(1, 5), 3), vec2(false, true));
        assert_eq!(lequal(vec2(1, 3), 3), vec2(true, true));
        assert_eq!(gequal(vec2(1, 3), 3), vec2(false, true));
    }

    #[test]
    fn select_shapes() {
        let m = select(
            Matrix::from_rows([[true, false]]),
            Matrix::from_rows([[1, 2]]),
            Matrix::from_rows([[8, 9]]),
        );
        assert_eq!(m, Matrix::from_rows([[1, 9]]));

        let q = select(
            Quat::from_components(true, false, true, false),
            Quat::from_components(1, 1, 1, 1),
            Quat::from_components(0, 0, 0, 0),
        );
        assert_eq!(q, Quat::from_components(1, 0, 1, 0));
    }
}
