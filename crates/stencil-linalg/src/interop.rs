//! Interoperability with [`nalgebra`].
//!
//! [`Matrix`] converts to and from `nalgebra`'s statically sized [`SMatrix`] with [`From`], and
//! [`DIdentity`] is a blueprint for `nalgebra`'s dynamically sized [`DMatrix`], whose shape is only
//! known at runtime.

use std::{fmt, marker::PhantomData};

use nalgebra::{DMatrix, RealField, SMatrix, Scalar};
use stencil::{BluePrint, BluePrintFactory};

use crate::Matrix;

impl<T: Scalar, const R: usize, const C: usize> From<Matrix<T, R, C>> for SMatrix<T, R, C> {
    fn from(m: Matrix<T, R, C>) -> Self {
        SMatrix::from_fn(|row, col| m[(row, col)].clone())
    }
}

impl<T: Scalar, const R: usize, const C: usize> From<SMatrix<T, R, C>> for Matrix<T, R, C> {
    fn from(m: SMatrix<T, R, C>) -> Self {
        Matrix::from_fn(|row, col| m[(row, col)].clone())
    }
}

/// Blueprint for a `rows` x `cols` identity [`DMatrix`].
///
/// [`apply`][BluePrint::apply] resizes the target in place if its shape differs.
pub struct DIdentity<T> {
    rows: usize,
    cols: usize,
    elem: PhantomData<fn() -> T>,
}

impl<T> DIdentity<T> {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            elem: PhantomData,
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

impl<T> Clone for DIdentity<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DIdentity<T> {}

impl<T> fmt::Debug for DIdentity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DIdentity<{}x{}>", self.rows, self.cols)
    }
}

impl<T: RealField> BluePrint for DIdentity<T> {
    type Base = DMatrix<T>;

    fn instantiate(&self) -> DMatrix<T> {
        DMatrix::identity(self.rows, self.cols)
    }

    fn apply(&self, object: &mut DMatrix<T>) {
        if object.shape() != self.shape() {
            log::trace!(
                "resizing matrix from {:?} to {:?}",
                object.shape(),
                self.shape()
            );
            object.resize_mut(self.rows, self.cols, T::zero());
        }
        object.fill_with_identity();
    }
}

/// Blueprint constructors for [`DMatrix`], available on [`BluePrintFactory<DMatrix<T>>`].
pub trait DMatrixBluePrints<T> {
    /// Returns a blueprint for a `rows` x `cols` identity matrix.
    fn identity(rows: usize, cols: usize) -> DIdentity<T>
    where
        T: RealField,
    {
        DIdentity::new(rows, cols)
    }
}

impl<T> DMatrixBluePrints<T> for BluePrintFactory<DMatrix<T>> {}

#[cfg(test)]
mod tests {
    use stencil::{BluePrintBase, Build};

    use crate::Mat2;

    use super::*;

    #[test]
    fn smatrix_roundtrip() {
        let m = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let s: SMatrix<f64, 2, 2> = m.into();
        assert_eq!(s[(0, 1)], 2.0);
        assert_eq!(Mat2::from(s), m);
    }

    #[test]
    fn dmatrix_identity() {
        let bp = BluePrintFactory::<DMatrix<f64>>::identity(3, 2);
        let fresh = bp.implement_instantiate::<DMatrix<f64>>();
        assert_eq!(fresh.shape(), (3, 2));
        assert_eq!(fresh, DMatrix::identity(3, 2));

        assert_eq!(format!("{:?}", bp), "DIdentity<3x2>");

        let mut existing = DMatrix::from_element(5, 5, 9.0);
        existing.configure(&bp);
        assert_eq!(existing, fresh);
    }
}
