//! Matrices and arrays constructed from [`stencil`] blueprints.
//!
//! This crate provides two containers and a set of blueprints for each:
//!
//! - [`Matrix`], a fixed-size, column-major matrix using const generics for its dimensions.
//!   Blueprints: [`Identity`], [`Constant`], [`Diagonal`], created through [`MatrixBluePrints`]
//!   and [`SquareMatrixBluePrints`].
//! - [`Array`], a heap-allocated array of dynamic length. Blueprints: [`Fill`] and [`Sequence`],
//!   created through [`ArrayBluePrints`].
//!
//! Every blueprint can both create a fresh container and overwrite an existing one in place:
//!
//! ```
//! use stencil::{BluePrintBase, BluePrintFactory};
//! use stencil_linalg::*;
//!
//! let fill = BluePrintFactory::<Array<i32>>::fill(3, 7);
//!
//! let fresh = fill.implement_instantiate::<Array<i32>>();
//! assert_eq!(fresh, [7, 7, 7]);
//!
//! let mut existing = Array::from([1, 2, 3, 4, 5]);
//! fill.implement_apply::<Array<i32>>(&mut existing);
//! assert_eq!(existing, fresh);
//! ```
//!
//! # Features
//!
//! * `nalgebra`: conversions between [`Matrix`] and `nalgebra`'s statically sized matrices, and
//!   blueprints for `nalgebra`'s dynamically sized matrices.

mod array;
mod matrix;
#[cfg(feature = "nalgebra")]
pub mod interop;
mod traits;

pub use array::*;
pub use matrix::*;
pub use traits::*;
