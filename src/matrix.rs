use std::{
    array, fmt, iter,
    mem::{self, ManuallyDrop, MaybeUninit},
};

use crate::{MinMax, Number, One, Trig, Vector, Zero};

mod ops;

/// A 1x1 matrix.
pub type Mat1<T> = Matrix<T, 1, 1>;
/// A 1x1 matrix with [`f32`] elements.
pub type Mat1f = Mat1<f32>;
/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;

/// A matrix with 2 rows and 3 columns.
pub type Mat2x3<T> = Matrix<T, 2, 3>;
/// A matrix with 2 rows and 4 columns.
pub type Mat2x4<T> = Matrix<T, 2, 4>;
/// A matrix with 3 rows and 2 columns.
pub type Mat3x2<T> = Matrix<T, 3, 2>;
/// A matrix with 3 rows and 4 columns.
pub type Mat3x4<T> = Matrix<T, 3, 4>;
/// A matrix with 4 rows and 2 columns.
pub type Mat4x2<T> = Matrix<T, 4, 2>;
/// A matrix with 4 rows and 3 columns.
pub type Mat4x3<T> = Matrix<T, 4, 3>;

/// A column-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// # Construction
///
/// There are several ways to create a [`Matrix`]:
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] allow filling a matrix with raw elements,
///   as well as creating them from an array of row or column vectors.
/// - [`Matrix::from_fn`] will create each element by invoking a closure with its row and column.
/// - [`Matrix::splat`] copies one value into every element.
/// - For square matrices (where `R` equals `C`), [`Matrix::from_diagonal`] can be used to create a
///   matrix with a specified diagonal and zero outside of its diagonal.
/// - [`Matrix::rotation_clockwise`] and [`Matrix::rotation_counterclockwise`] allow creating 2D
///   rotation matrices from a rotation angle.
///
/// Additionally, some associated constants for commonly used matrices are defined:
///
/// - [`Matrix::ZERO`] is a matrix with every element set to 0.
/// - [`Matrix::IDENTITY`] is a square matrix with 1 on its diagonal and 0 everywhere else.
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of `(usize, usize)`. The
/// first element of the tuple is the *row* (Y coordinate), the second is the *column* (X
/// coordinate), matching common mathematical notation. Indices are 0-based.
///
/// ```
/// # use linmat::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`] and
/// [`Matrix::get_mut`] return [`Option`]s instead and can be used for checked indexing. Whole
/// columns and rows can be copied out with [`Matrix::column`] and [`Matrix::row`].
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; R]; C]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The smallest dimension of the matrix (`R` or `C`).
    const MIN_DIMENSION: usize = if R > C { C } else { R };

    /// Creates a new [`Matrix`] in which the elements are wrapped in [`MaybeUninit`].
    const fn new_uninit() -> Matrix<MaybeUninit<T>, R, C> {
        // FIXME: make `pub` once libstd settles on how to do these
        // Safety: `uninit` is a valid value for the `MaybeUninit<T>` elements
        unsafe { MaybeUninit::<Matrix<MaybeUninit<T>, R, C>>::uninit().assume_init() }
    }

    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self {
        Matrix::from_columns(rows).transpose()
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        Self(columns.map(|col| col.into().into_array()))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// This mirrors [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|col| array::from_fn(|row| cb(row, col))))
    }

    /// Creates a matrix with each element initialized to `elem`.
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([[elem; R]; C])
    }

    /// Applies a closure to each element, returning a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// let mat = mat.map(|i| i * 2);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  2,  4],
    ///     [ 6,  8, 10],
    /// ]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(|v| f(v))))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R> {
        let mut out = Matrix::<T, C, R>::new_uninit();
        for (c, column) in self.0.into_iter().enumerate() {
            for (r, elem) in column.into_iter().enumerate() {
                out.0[r][c] = MaybeUninit::new(elem);
            }
        }
        // Safety: the loop above writes to each element.
        unsafe { out.assume_init() }
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(col).and_then(|col| col.get(row))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(col).and_then(|col| col.get_mut(row))
    }

    /// Copies the column at index `col` out of the matrix.
    ///
    /// # Panics
    ///
    /// Panics if `col` is not less than `C`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.column(1), vec2(1, 4));
    /// assert_eq!(mat.row(1), vec3(3, 4, 5));
    /// ```
    #[inline]
    pub fn column(&self, col: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        self.0[col].into()
    }

    /// Copies the row at index `row` out of the matrix.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not less than `R`.
    #[inline]
    pub fn row(&self, row: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        Vector::from_fn(|col| self.0[col][row])
    }

    /// Replaces the column at index `col`.
    ///
    /// # Panics
    ///
    /// Panics if `col` is not less than `C`.
    pub fn set_column<U: Into<Vector<T, R>>>(&mut self, col: usize, column: U) {
        self.0[col] = column.into().into_array();
    }

    /// Converts this matrix into an array of its column vectors.
    pub fn into_columns(self) -> [Vector<T, R>; C] {
        self.0.map(Vector::from)
    }

    /// Left-folds all elements into a single value, visiting column 0 top to bottom, then
    /// column 1, and so on (column-major order).
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// let mat = Matrix::from_columns([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// let digits = mat.fold(0, |acc, d| acc * 10 + d);
    /// assert_eq!(digits, 1234);
    /// ```
    pub fn fold<A, F>(self, init: A, f: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        self.0.into_iter().flatten().fold(init, f)
    }

    /// Returns the sum of all elements.
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
    /// Panics if the matrix has no elements.
    pub fn min_element(self) -> T
    where
        T: MinMax,
    {
        self.0.into_iter().flatten().reduce(T::min).unwrap()
    }

    /// Returns the largest element.
    ///
    /// # Panics
    ///
    /// Panics if the matrix has no elements.
    pub fn max_element(self) -> T
    where
        T: MinMax,
    {
        self.0.into_iter().flatten().reduce(T::max).unwrap()
    }

    /// Returns the first pair of corresponding elements of `self` and `other` that differ, in
    /// column-major order, or the pair of last elements if all are equal.
    ///
    /// The lexicographic [`PartialOrd`]/[`Ord`] impls are derived from this, so matrices order
    /// like their flattened column-major element sequences.
    ///
    /// # Panics
    ///
    /// Panics if the matrix has no elements.
    pub fn compare(self, other: Self) -> (T, T)
    where
        T: PartialEq + Copy,
    {
        for col in 0..C {
            for row in 0..R {
                if self[(row, col)] != other[(row, col)] {
                    return (self[(row, col)], other[(row, col)]);
                }
            }
        }
        (self[(R - 1, C - 1)], other[(R - 1, C - 1)])
    }

    /// Returns a matrix with the contents of `self`, but a potentially different size.
    ///
    /// Elements not present in `self` will be initialized with [`T::ZERO`][`Zero::ZERO`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2, 3],
    /// ]);
    /// let resized = mat.resize::<2, 2>();
    /// assert_eq!(resized, Matrix::from_rows([
    ///     [1, 2],
    ///     [0, 0],
    /// ]));
    /// ```
    pub fn resize<const R2: usize, const C2: usize>(mut self) -> Matrix<T, R2, C2>
    where
        T: Zero,
    {
        Matrix::from_fn(|row, col| {
            if col < C && row < R {
                mem::replace(&mut self[(row, col)], T::ZERO)
            } else {
                T::ZERO
            }
        })
    }

    /// Returns `self`, but with the element at `(row, col)` replaced with `elem`, without dropping
    /// the old element at that position.
    const fn with_leaky_elem(self, row: usize, col: usize, elem: T) -> Self {
        unsafe {
            // Leaks whatever was at `(col,row)` before.
            union UnWrapper<T, const R: usize, const C: usize> {
                wrapped: ManuallyDrop<Matrix<ManuallyDrop<T>, R, C>>,
                unwrapped: ManuallyDrop<Matrix<T, R, C>>,
            }

            let mut wrapped = ManuallyDrop::into_inner(
                UnWrapper {
                    unwrapped: ManuallyDrop::new(self),
                }
                .wrapped,
            );
            wrapped.0[col][row] = ManuallyDrop::new(elem);

            ManuallyDrop::into_inner(
                UnWrapper {
                    wrapped: ManuallyDrop::new(wrapped),
                }
                .unwrapped,
            )
        }
    }
}

impl<const R: usize, const C: usize> Matrix<bool, R, C> {
    /// Returns `true` if any element is `true`.
    pub fn any(self) -> bool {
        self.0.into_iter().flatten().any(|b| b)
    }

    /// Returns `true` if every element is `true`.
    pub fn all(self) -> bool {
        self.0.into_iter().flatten().all(|b| b)
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug, const R: usize, const C: usize>(
            &'a Matrix<T, R, C>,
            usize,
        );
        impl<'a, T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for FormatRow<'a, T, R, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for col in 0..C {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", self.0[(self.1, col)])?;
                }
                write!(f, "]")?;
                Ok(())
            }
        }

        let mut list = f.debug_list();
        for row in 0..R {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}

impl<T: Zero, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = unsafe {
        // Because `[T::ZERO; N]` requires `T` to be `Copy`, we use this gross hack to duplicate
        // `T::ZERO` without that `Copy` bound.
        let mut mat = Self::new_uninit();
        let mut col = 0;
        while col < C {
            let mut row = 0;
            while row < R {
                mat.0[col][row] = MaybeUninit::new(T::ZERO);
                row += 1;
            }
            col += 1;
        }

        // Safety: the loop above has initialized every element.
        mat.assume_init()
    };
}

impl<T, const R: usize, const C: usize> Matrix<MaybeUninit<T>, R, C> {
    /// Removes the [`MaybeUninit`] wrapper from each matrix element.
    ///
    /// See [`MaybeUninit::assume_init`] for details about the safety invariant the caller needs to
    /// uphold.
    const unsafe fn assume_init(self) -> Matrix<T, R, C> {
        // FIXME: make `pub` after libstd figures out how to do these types of functions

        // Safety: `MaybeUninit<T>` and `T` have the same layout.
        union UnWrapper<T, const R: usize, const C: usize> {
            uninit: ManuallyDrop<Matrix<MaybeUninit<T>, R, C>>,
            init: ManuallyDrop<Matrix<T, R, C>>,
        }

        ManuallyDrop::into_inner(
            UnWrapper {
                uninit: ManuallyDrop::new(self),
            }
            .init,
        )
    }
}

impl<T: Zero + One, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else.
    ///
    /// Multiplying any vector with this matrix returns the vector unchanged.
    pub const IDENTITY: Self = {
        let mut this = Self::ZERO;
        let mut i = 0;
        while i < Self::MIN_DIMENSION {
            this = this.with_leaky_elem(i, i, T::ONE);
            i += 1;
        }
        this
    };
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Returns a [`Vector`] holding the diagonal elements of this square matrix.
    ///
    /// *Note*: This method is restricted to square matrices due to limitations in Rust's const
    /// generics.
    pub fn into_diagonal(self) -> Vector<T, N>
    where
        T: Copy,
    {
        array::from_fn(|i| self[(i, i)]).into()
    }

    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// *Note*: This method is intentionally restricted to square matrices to allow type inference
    /// of the created [`Matrix`]. To create a non-square matrix from its diagonal, use
    /// [`Matrix::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero,
    {
        let mut iter = diag.into().into_array().into_iter();
        let mut this = Self::ZERO;
        for i in 0..N {
            this[(i, i)] = iter.next().unwrap();
        }
        this
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag.trace(), 1 + 2 + 3);
    ///
    /// assert_eq!(Mat3f::IDENTITY.trace(), 3.0);
    /// ```
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self[(i, i)])
    }
}

impl<T: Number> Matrix<T, 1, 1> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[inline]
    pub fn determinant(&self) -> T {
        self[(0, 0)]
    }

    /// Returns the [adjugate] of the matrix (the transpose of its cofactor matrix).
    ///
    /// Multiplying a matrix with its adjugate yields the determinant times the identity matrix.
    ///
    /// [adjugate]: https://en.wikipedia.org/wiki/Adjugate_matrix
    #[inline]
    pub fn adjugate(&self) -> Self {
        Matrix::from_columns([[T::ONE]])
    }

    /// Inverts this 1x1 matrix.
    ///
    /// # Panics
    ///
    /// This method will panic if `self` is not invertible (ie. if its [`determinant()`] is zero).
    ///
    /// [`determinant()`]: Self::determinant
    pub fn invert(&self) -> Self {
        let det = self.determinant();
        if det == T::ZERO {
            panic!("attempt to invert a non-invertible matrix");
        }

        Matrix::from_columns([[T::ONE / det]])
    }
}

impl<T: Number> Matrix<T, 2, 2> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[inline]
    pub fn determinant(&self) -> T {
        self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]
    }

    /// Returns the [adjugate] of the matrix (the transpose of its cofactor matrix).
    ///
    /// Multiplying a matrix with its adjugate yields the determinant times the identity matrix.
    ///
    /// [adjugate]: https://en.wikipedia.org/wiki/Adjugate_matrix
    pub fn adjugate(&self) -> Self {
        let [[a, c], [b, d]] = self.0;
        Matrix::from_columns([[d, -c], [-b, a]])
    }

    /// Inverts this 2x2 matrix.
    ///
    /// # Panics
    ///
    /// This method will panic if `self` is not invertible (ie. if its [`determinant()`] is zero).
    ///
    /// [`determinant()`]: Self::determinant
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// assert_eq!(Mat2::<i32>::IDENTITY.invert(), Mat2::<i32>::IDENTITY);
    /// assert_eq!(Mat2f::IDENTITY.invert(), Mat2f::IDENTITY);
    /// ```
    pub fn invert(&self) -> Self {
        let det = self.determinant();
        if det == T::ZERO {
            panic!("attempt to invert a non-invertible matrix");
        }

        self.adjugate() * (T::ONE / det)
    }

    /// Creates a 2x2 rotation matrix for a clockwise rotation in the XY plane.
    pub fn rotation_clockwise(radians: T) -> Self
    where
        T: Trig,
    {
        Self::rotation_counterclockwise(-radians)
    }

    /// Creates a 2x2 rotation matrix for a counterclockwise rotation in the XY plane.
    pub fn rotation_counterclockwise(radians: T) -> Self
    where
        T: Trig,
    {
        let (sin, cos) = radians.sin_cos();
        Self::from_columns([[cos, sin], [-sin, cos]])
    }
}

impl<T: Number> Matrix<T, 3, 3> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let [[a, d, g], [b, e, h], [c, f, i]] = self.0;
        a * e * i + b * f * g + c * d * h - c * e * g - b * d * i - a * f * h
    }

    /// Returns the [adjugate] of the matrix (the transpose of its cofactor matrix).
    ///
    /// Multiplying a matrix with its adjugate yields the determinant times the identity matrix.
    ///
    /// [adjugate]: https://en.wikipedia.org/wiki/Adjugate_matrix
    pub fn adjugate(&self) -> Self {
        let [[a, d, g], [b, e, h], [c, f, i]] = self.0;
        Matrix::from_rows([
            [e * i - f * h, c * h - b * i, b * f - c * e],
            [f * g - d * i, a * i - c * g, c * d - a * f],
            [d * h - e * g, b * g - a * h, a * e - b * d],
        ])
    }

    /// Inverts this 3x3 matrix.
    ///
    /// # Panics
    ///
    /// This method will panic if `self` is not invertible (ie. if its [`determinant()`] is zero).
    ///
    /// [`determinant()`]: Self::determinant
    pub fn invert(&self) -> Self {
        let det = self.determinant();
        if det == T::ZERO {
            panic!("attempt to invert a non-invertible matrix");
        }

        self.adjugate() * (T::ONE / det)
    }
}

impl<T: Number> Matrix<T, 4, 4> {
    // 2x2 subfactors shared by the 4x4 determinant and adjugate: `s` from the left two columns,
    // `c` from the right two.
    #[allow(clippy::type_complexity)]
    fn subfactors(&self) -> ([T; 6], [T; 6]) {
        #[rustfmt::skip]
        let [
            [m00, m10, m20, m30],
            [m01, m11, m21, m31],
            [m02, m12, m22, m32],
            [m03, m13, m23, m33],
        ] = self.0;

        let s = [
            m00 * m11 - m10 * m01,
            m00 * m12 - m10 * m02,
            m00 * m13 - m10 * m03,
            m01 * m12 - m11 * m02,
            m01 * m13 - m11 * m03,
            m02 * m13 - m12 * m03,
        ];
        let c = [
            m20 * m31 - m30 * m21,
            m20 * m32 - m30 * m22,
            m20 * m33 - m30 * m23,
            m21 * m32 - m31 * m22,
            m21 * m33 - m31 * m23,
            m22 * m33 - m32 * m23,
        ];
        (s, c)
    }

    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let ([s0, s1, s2, s3, s4, s5], [c0, c1, c2, c3, c4, c5]) = self.subfactors();
        s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0
    }

    /// Returns the [adjugate] of the matrix (the transpose of its cofactor matrix).
    ///
    /// Multiplying a matrix with its adjugate yields the determinant times the identity matrix.
    ///
    /// [adjugate]: https://en.wikipedia.org/wiki/Adjugate_matrix
    pub fn adjugate(&self) -> Self {
        #[rustfmt::skip]
        let [
            [m00, m10, m20, m30],
            [m01, m11, m21, m31],
            [m02, m12, m22, m32],
            [m03, m13, m23, m33],
        ] = self.0;
        let ([s0, s1, s2, s3, s4, s5], [c0, c1, c2, c3, c4, c5]) = self.subfactors();

        Matrix::from_rows([
            [
                m11 * c5 - m12 * c4 + m13 * c3,
                -m01 * c5 + m02 * c4 - m03 * c3,
                m31 * s5 - m32 * s4 + m33 * s3,
                -m21 * s5 + m22 * s4 - m23 * s3,
            ],
            [
                -m10 * c5 + m12 * c2 - m13 * c1,
                m00 * c5 - m02 * c2 + m03 * c1,
                -m30 * s5 + m32 * s2 - m33 * s1,
                m20 * s5 - m22 * s2 + m23 * s1,
            ],
            [
                m10 * c4 - m11 * c2 + m13 * c0,
                -m00 * c4 + m01 * c2 - m03 * c0,
                m30 * s4 - m31 * s2 + m33 * s0,
                -m20 * s4 + m21 * s2 - m23 * s0,
            ],
            [
                -m10 * c3 + m11 * c1 - m12 * c0,
                m00 * c3 - m01 * c1 + m02 * c0,
                -m30 * s3 + m31 * s1 - m32 * s0,
                m20 * s3 - m21 * s1 + m22 * s0,
            ],
        ])
    }

    /// Inverts this 4x4 matrix.
    ///
    /// # Panics
    ///
    /// This method will panic if `self` is not invertible (ie. if its [`determinant()`] is zero).
    ///
    /// [`determinant()`]: Self::determinant
    pub fn invert(&self) -> Self {
        let det = self.determinant();
        if det == T::ZERO {
            panic!("attempt to invert a non-invertible matrix");
        }

        self.adjugate() * (T::ONE / det)
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T, const R: usize, const C: usize> From<[[T; R]; C]> for Matrix<T, R, C> {
    /// Creates a matrix from its column-major array representation.
    #[inline]
    fn from(columns: [[T; R]; C]) -> Self {
        Self(columns)
    }
}

impl<T, const R: usize, const C: usize> From<Matrix<T, R, C>> for [[T; R]; C] {
    /// Returns the column-major array representation of the matrix.
    #[inline]
    fn from(mat: Matrix<T, R, C>) -> Self {
        mat.0
    }
}

/// Iterates over the column vectors of the matrix.
impl<T, const R: usize, const C: usize> IntoIterator for Matrix<T, R, C> {
    type Item = Vector<T, R>;
    type IntoIter = iter::Map<array::IntoIter<[T; R], C>, fn([T; R]) -> Vector<T, R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter().map(Vector::from)
    }
}
