//! Static-dispatch blueprints.
//!
//! A *blueprint* is a small value describing how to build or reconfigure a value of some *base*
//! type: "a 3x3 identity matrix", "an array of 16 sevens", "the default settings". Any number of
//! unrelated blueprint types can target the same base type, and generic code accepts all of them
//! through a single trait bound without boxing or virtual calls.
//!
//! # Overview
//!
//! - [`BluePrint`] is the capability contract. A type becomes a blueprint by declaring its
//!   [`Base`][BluePrint::Base] type and implementing [`instantiate`][BluePrint::instantiate]
//!   (produce a fresh value) and [`apply`][BluePrint::apply] (overwrite an existing value in
//!   place).
//! - [`BluePrintBase`] is implemented for every blueprint. It provides the forwarding methods
//!   [`implement_instantiate`][BluePrintBase::implement_instantiate] and
//!   [`implement_apply`][BluePrintBase::implement_apply], which generic code calls instead of the
//!   contract methods. [`Adapter`] is a value wrapper exposing the same two methods.
//! - [`Build`] gives every type `T::build(&blueprint)` and `value.configure(&blueprint)`.
//! - [`BluePrintFactory`] is an uninhabited type that hosts "make me a blueprint" helpers for a
//!   base type. Crates owning a base type attach their own helpers to it with extension traits.
//!
//! # Example
//!
//! ```
//! use stencil::{BluePrint, BluePrintBase, Build};
//!
//! struct Margins {
//!     left: u32,
//!     right: u32,
//! }
//!
//! struct DefaultMargins;
//!
//! impl BluePrint for DefaultMargins {
//!     type Base = Margins;
//!
//!     fn instantiate(&self) -> Margins {
//!         Margins { left: 8, right: 8 }
//!     }
//!
//!     fn apply(&self, margins: &mut Margins) {
//!         margins.left = 8;
//!         margins.right = 8;
//!     }
//! }
//!
//! let fresh = DefaultMargins.implement_instantiate::<Margins>();
//! assert_eq!(fresh.left, 8);
//!
//! let mut existing = Margins { left: 0, right: 100 };
//! existing.configure(&DefaultMargins);
//! assert_eq!(existing.right, 8);
//!
//! let built = Margins::build(&DefaultMargins);
//! assert_eq!((built.left, built.right), (8, 8));
//! ```
//!
//! # Environment Variables
//!
//! * `RUST_LOG`: read by [`init_logger!`] and overrides the default log filter.

use log::LevelFilter;

mod adapter;
mod contract;
pub mod factory;

pub use adapter::*;
pub use contract::*;
pub use factory::BluePrintFactory;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_CRATE_NAME")), log_level)
        .filter(Some("stencil_linalg"), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// If `cfg!(debug_assertions)` is enabled, the calling crate and the `stencil` crates will log at
/// *trace* level. Otherwise, they will log at *debug* level. `RUST_LOG` is applied on top.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
