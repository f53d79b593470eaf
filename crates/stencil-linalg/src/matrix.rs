use std::{array, fmt};

use crate::{Number, One, Zero};

mod blueprints;
mod ops;

pub use blueprints::*;

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

/// A column-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// # Construction
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] fill a matrix with raw elements.
/// - [`Matrix::from_fn`] creates each element by invoking a closure with its row and column.
/// - [`Matrix::ZERO`], [`Matrix::identity`] and [`Matrix::from_diagonal`] create common matrices.
/// - Any matrix [`BluePrint`] can be instantiated through [`stencil::Build`] or the blueprint
///   factory:
///
/// ```
/// use stencil::{BluePrintFactory, Build};
/// use stencil_linalg::*;
///
/// let mut m = Mat3::<i32>::build(&BluePrintFactory::<Mat3<i32>>::identity());
/// assert_eq!(m.trace(), 3);
///
/// m.configure(&BluePrintFactory::<Mat3<i32>>::constant(2));
/// assert_eq!(m.trace(), 6);
/// ```
///
/// # Element Access
///
/// [`Matrix`] implements [`Index`] and [`IndexMut`] for `(row, column)` tuples. Indices are
/// 0-based and indexing out of bounds panics. [`Matrix::get`] and [`Matrix::get_mut`] return
/// [`Option`]s instead.
///
/// [`BluePrint`]: stencil::BluePrint
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; R]; C]);

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a [`Matrix`] from an array of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use stencil_linalg::*;
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
    pub fn from_rows(rows: [[T; C]; R]) -> Self {
        Matrix::from_columns(rows).transpose()
    }

    /// Creates a [`Matrix`] from an array of columns.
    pub fn from_columns(columns: [[T; R]; C]) -> Self {
        Self(columns)
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use stencil_linalg::*;
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

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(&mut f)))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use stencil_linalg::*;
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
        let mut columns = self.0.map(|column| column.map(Some));
        Matrix::from_fn(|row, col| {
            columns[row][col]
                .take()
                .expect("each element is moved exactly once")
        })
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(col).and_then(|col| col.get(row))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(col).and_then(|col| col.get_mut(row))
    }

    /// Returns an iterator over all elements in column-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.0.iter().flatten()
    }

    /// Returns an iterator over all elements and their `(row, column)` position.
    pub fn indexed_iter_mut(&mut self) -> impl Iterator<Item = ((usize, usize), &mut T)> + '_ {
        self.0.iter_mut().enumerate().flat_map(|(col, column)| {
            column
                .iter_mut()
                .enumerate()
                .map(move |(row, elem)| ((row, col), elem))
        })
    }

    /// Overwrites every element with a clone of `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        for column in &mut self.0 {
            column.fill(value.clone());
        }
    }
}

impl<T: Zero, const R: usize, const C: usize> Matrix<T, R, C> {
    const ZERO_COLUMN: [T; R] = [T::ZERO; R];

    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([Self::ZERO_COLUMN; C]);
}

impl<T: Zero + One, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Returns the identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else. Non-square matrices get
    /// ones on the diagonal of their largest square submatrix.
    pub fn identity() -> Self {
        Self::from_fn(|row, col| if row == col { T::ONE } else { T::ZERO })
    }
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use stencil_linalg::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal(diag: [T; N]) -> Self
    where
        T: Zero + Copy,
    {
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }

    /// Returns the diagonal elements of this square matrix.
    pub fn into_diagonal(self) -> [T; N]
    where
        T: Copy,
    {
        array::from_fn(|i| self[(i, i)])
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self[(i, i)])
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

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Natural writing order: one list entry per row.
        let mut list = f.debug_list();
        for row in 0..R {
            let row: [&T; C] = array::from_fn(|col| &self[(row, col)]);
            list.entry(&row);
        }
        list.finish()
    }
}
