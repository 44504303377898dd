use std::ops;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

macro_rules! zero_one {
    (int: $($t:ty),+) => {
        $(
            impl Zero for $t {
                const ZERO: Self = 0;
            }
            impl One for $t {
                const ONE: Self = 1;
            }
        )+
    };
    (float: $($t:ty),+) => {
        $(
            impl Zero for $t {
                const ZERO: Self = 0.0;
            }
            impl One for $t {
                const ONE: Self = 1.0;
            }
        )+
    };
}
zero_one!(int: u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);
zero_one!(float: f32, f64);

/// A trait for numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Types that support the trigonometric functions.
pub trait Trig: Sized + Copy {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn atan2(self, other: Self) -> Self;

    /// Computes sine and cosine of `self` at once.
    fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that have an absolute value.
pub trait Abs {
    fn abs(self) -> Self;
}

/// The remaining floating-point math operations: rounding, exponentials,
/// logarithms, hyperbolic functions, powers, and sign transfer.
///
/// Only implemented by [`f32`] and [`f64`].
pub trait Float: Sized + Copy {
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    /// Rounds half-way cases away from zero.
    fn round(self) -> Self;
    fn exp(self) -> Self;
    /// The natural logarithm.
    fn ln(self) -> Self;
    fn log10(self) -> Self;
    fn sinh(self) -> Self;
    fn cosh(self) -> Self;
    fn tanh(self) -> Self;
    fn powf(self, exp: Self) -> Self;
    /// Returns a value with the magnitude of `self` and the sign of `sign`.
    fn copysign(self, sign: Self) -> Self;
}

macro_rules! float_impls {
    ($($t:ty),+) => {
        $(
            impl Trig for $t {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn tan(self) -> Self {
                    self.tan()
                }

                fn asin(self) -> Self {
                    self.asin()
                }

                fn acos(self) -> Self {
                    self.acos()
                }

                fn atan(self) -> Self {
                    self.atan()
                }

                fn atan2(self, other: Self) -> Self {
                    self.atan2(other)
                }

                fn sin_cos(self) -> (Self, Self) {
                    self.sin_cos()
                }
            }

            impl Sqrt for $t {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl Abs for $t {
                fn abs(self) -> Self {
                    self.abs()
                }
            }

            impl Float for $t {
                fn floor(self) -> Self {
                    self.floor()
                }

                fn ceil(self) -> Self {
                    self.ceil()
                }

                fn round(self) -> Self {
                    self.round()
                }

                fn exp(self) -> Self {
                    self.exp()
                }

                fn ln(self) -> Self {
                    self.ln()
                }

                fn log10(self) -> Self {
                    self.log10()
                }

                fn sinh(self) -> Self {
                    self.sinh()
                }

                fn cosh(self) -> Self {
                    self.cosh()
                }

                fn tanh(self) -> Self {
                    self.tanh()
                }

                fn powf(self, exp: Self) -> Self {
                    self.powf(exp)
                }

                fn copysign(self, sign: Self) -> Self {
                    self.copysign(sign)
                }
            }
        )+
    };
}
float_impls!(f32, f64);

macro_rules! signed_abs {
    ($($t:ty),+) => {
        $(
            impl Abs for $t {
                fn abs(self) -> Self {
                    self.abs()
                }
            }
        )+
    };
}
signed_abs!(i8, i16, i32, i64, i128);

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and [`f32::max`] functions
/// ([`f64::min`] and [`f64::max`] respectively). Built-in integer types implement it in terms of
/// [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

macro_rules! ord_min_max {
    ($($types:ty),+) => {
        $(
            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}
ord_min_max!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

impl MinMax for f32 {
    fn min(self, other: Self) -> Self {
        self.min(other)
    }

    fn max(self, other: Self) -> Self {
        self.max(other)
    }
}
impl MinMax for f64 {
    fn min(self, other: Self) -> Self {
        self.min(other)
    }

    fn max(self, other: Self) -> Self {
        self.max(other)
    }
}
