//! Blueprints for fixed-size matrices.

use std::{fmt, marker::PhantomData};

use stencil::{BluePrint, BluePrintFactory};

use crate::{Matrix, One, Zero};

/// Blueprint for the identity matrix.
///
/// Created by [`MatrixBluePrints::identity`].
pub struct Identity<T, const R: usize, const C: usize>(PhantomData<fn() -> T>);

impl<T, const R: usize, const C: usize> Identity<T, R, C> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T, const R: usize, const C: usize> Default for Identity<T, R, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const R: usize, const C: usize> Clone for Identity<T, R, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const R: usize, const C: usize> Copy for Identity<T, R, C> {}

impl<T, const R: usize, const C: usize> fmt::Debug for Identity<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity<{R}x{C}>")
    }
}

impl<T: Zero + One, const R: usize, const C: usize> BluePrint for Identity<T, R, C> {
    type Base = Matrix<T, R, C>;

    fn instantiate(&self) -> Matrix<T, R, C> {
        Matrix::identity()
    }

    fn apply(&self, object: &mut Matrix<T, R, C>) {
        for ((row, col), elem) in object.indexed_iter_mut() {
            *elem = if row == col { T::ONE } else { T::ZERO };
        }
    }
}

/// Blueprint for a matrix with every element set to the same value.
///
/// Created by [`MatrixBluePrints::constant`] and [`MatrixBluePrints::zeros`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constant<T, const R: usize, const C: usize> {
    value: T,
}

impl<T, const R: usize, const C: usize> Constant<T, R, C> {
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T: Clone, const R: usize, const C: usize> BluePrint for Constant<T, R, C> {
    type Base = Matrix<T, R, C>;

    fn instantiate(&self) -> Matrix<T, R, C> {
        Matrix::from_fn(|_, _| self.value.clone())
    }

    fn apply(&self, object: &mut Matrix<T, R, C>) {
        object.fill(self.value.clone());
    }
}

/// Blueprint for a square matrix with the given diagonal and zeros elsewhere.
///
/// Created by [`SquareMatrixBluePrints::diagonal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Diagonal<T, const N: usize> {
    diagonal: [T; N],
}

impl<T, const N: usize> Diagonal<T, N> {
    pub const fn new(diagonal: [T; N]) -> Self {
        Self { diagonal }
    }
}

impl<T: Zero + Copy, const N: usize> BluePrint for Diagonal<T, N> {
    type Base = Matrix<T, N, N>;

    fn instantiate(&self) -> Matrix<T, N, N> {
        Matrix::from_diagonal(self.diagonal)
    }

    fn apply(&self, object: &mut Matrix<T, N, N>) {
        for ((row, col), elem) in object.indexed_iter_mut() {
            *elem = if row == col {
                self.diagonal[row]
            } else {
                T::ZERO
            };
        }
    }
}

/// Matrix blueprint constructors, available on [`BluePrintFactory<Matrix<T, R, C>>`].
///
/// ```
/// use stencil::{BluePrintBase, BluePrintFactory};
/// use stencil_linalg::{Mat3f, MatrixBluePrints};
///
/// let identity = BluePrintFactory::<Mat3f>::identity();
/// assert_eq!(identity.implement_instantiate::<Mat3f>(), Mat3f::identity());
/// ```
pub trait MatrixBluePrints<T, const R: usize, const C: usize> {
    /// Returns a blueprint for the identity matrix.
    fn identity() -> Identity<T, R, C>
    where
        T: Zero + One,
    {
        Identity::new()
    }

    /// Returns a blueprint for a matrix filled with `value`.
    fn constant(value: T) -> Constant<T, R, C>
    where
        T: Clone,
    {
        Constant::new(value)
    }

    /// Returns a blueprint for the zero matrix.
    fn zeros() -> Constant<T, R, C>
    where
        T: Zero + Clone,
    {
        Constant::new(T::ZERO)
    }
}

impl<T, const R: usize, const C: usize> MatrixBluePrints<T, R, C>
    for BluePrintFactory<Matrix<T, R, C>>
{
}

/// Blueprint constructors for square matrices, available on
/// [`BluePrintFactory<Matrix<T, N, N>>`].
pub trait SquareMatrixBluePrints<T, const N: usize> {
    /// Returns a blueprint for a square matrix with the given diagonal.
    fn diagonal(diagonal: [T; N]) -> Diagonal<T, N>
    where
        T: Zero + Copy,
    {
        Diagonal::new(diagonal)
    }
}

impl<T, const N: usize> SquareMatrixBluePrints<T, N> for BluePrintFactory<Matrix<T, N, N>> {}

#[cfg(test)]
mod tests {
    use stencil::{assert_blueprint, BluePrintBase, Build};

    use crate::{Mat2, Mat3, Mat3f, Mat4};

    use super::*;

    assert_blueprint!(Identity<f32, 3, 3> => Mat3f);
    assert_blueprint!(Constant<u8, 2, 5> => Matrix<u8, 2, 5>);
    assert_blueprint!(Diagonal<i16, 4> => Mat4<i16>);

    #[test]
    fn identity() {
        let bp = BluePrintFactory::<Mat3<i32>>::identity();
        assert_eq!(bp.implement_instantiate::<Mat3<i32>>(), Mat3::identity());

        let mut m = Matrix::from_fn(|row, col| (row * 3 + col) as i32);
        bp.implement_apply(&mut m);
        assert_eq!(m, Mat3::identity());
        assert_eq!(format!("{:?}", bp), "Identity<3x3>");
    }

    #[test]
    fn constant() {
        let bp = BluePrintFactory::<Matrix<u8, 2, 3>>::constant(9);
        assert_eq!(bp.value(), &9);
        let m = Matrix::build(&bp);
        assert!(m.iter().all(|&e| e == 9));

        let mut zeros = Mat2::<u64>::identity();
        zeros.configure(&BluePrintFactory::<Mat2<u64>>::zeros());
        assert_eq!(zeros, Mat2::ZERO);
    }

    #[rustfmt::skip]
    #[test]
    fn diagonal() {
        let bp = BluePrintFactory::<Mat3<i32>>::diagonal([1, 2, 3]);
        let mut m = Mat3::build(&BluePrintFactory::<Mat3<i32>>::constant(-1));
        m.configure(&bp);
        assert_eq!(m, Matrix::from_rows([
            [1, 0, 0],
            [0, 2, 0],
            [0, 0, 3],
        ]));
        assert_eq!(m, bp.implement_instantiate::<Mat3<i32>>());
    }
}
