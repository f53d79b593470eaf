//! Blueprint factories and general-purpose blueprints.
//!
//! [`BluePrintFactory<Base>`] is a namespace for functions that create blueprints targeting
//! `Base`. It has no values. The generic helpers defined here work for any base type; crates that
//! own a base type add more specific helpers by implementing an extension trait for
//! `BluePrintFactory<TheirType>`:
//!
//! ```
//! use stencil::{BluePrint, BluePrintFactory, Build};
//!
//! pub struct Widget {
//!     margin: u32,
//! }
//!
//! pub struct Margin(u32);
//!
//! impl BluePrint for Margin {
//!     type Base = Widget;
//!     fn instantiate(&self) -> Widget {
//!         Widget { margin: self.0 }
//!     }
//!     fn apply(&self, widget: &mut Widget) {
//!         widget.margin = self.0;
//!     }
//! }
//!
//! pub trait WidgetBluePrints {
//!     fn margin(margin: u32) -> Margin {
//!         Margin(margin)
//!     }
//! }
//!
//! impl WidgetBluePrints for BluePrintFactory<Widget> {}
//!
//! let widget = Widget::build(&BluePrintFactory::<Widget>::margin(4));
//! assert_eq!(widget.margin, 4);
//! ```

use std::{convert::Infallible, fmt, marker::PhantomData};

use crate::BluePrint;

/// Uninhabited host for blueprint constructors targeting `Base`.
///
/// No value of this type can ever exist, so it can only be used to name associated functions:
///
/// ```compile_fail
/// let factory = stencil::BluePrintFactory::<Vec<u8>> {};
/// ```
///
/// ```compile_fail
/// let factory: stencil::BluePrintFactory<Vec<u8>> = Default::default();
/// ```
#[allow(dead_code)]
pub struct BluePrintFactory<Base: ?Sized> {
    never: Infallible,
    base: PhantomData<fn() -> Base>,
}

impl<Base> BluePrintFactory<Base> {
    /// Returns a blueprint that clones `value`.
    ///
    /// [`apply`][BluePrint::apply] uses [`Clone::clone_from`], so types like [`Vec`] and
    /// [`String`] keep their allocation when it is large enough.
    ///
    /// ```
    /// use stencil::{BluePrintBase, BluePrintFactory};
    ///
    /// let bp = BluePrintFactory::cloned(String::from("hello"));
    /// let mut s = String::with_capacity(64);
    /// bp.implement_apply(&mut s);
    /// assert_eq!(s, "hello");
    /// assert!(s.capacity() >= 64);
    /// ```
    pub fn cloned(value: Base) -> Cloned<Base>
    where
        Base: Clone,
    {
        Cloned(value)
    }

    /// Returns a blueprint that produces [`Default::default()`].
    ///
    /// The default value is created once and [`apply`][BluePrint::apply] clones it into the
    /// target with [`Clone::clone_from`], so an existing [`Vec`] is truncated rather than
    /// replaced.
    pub fn defaulted() -> Cloned<Base>
    where
        Base: Default + Clone,
    {
        Cloned(Base::default())
    }

    /// Returns a blueprint built from a pair of closures.
    ///
    /// `make` creates new instances, `reset` reconfigures an existing one in place. Both have to
    /// agree on the resulting state.
    ///
    /// ```
    /// use stencil::{BluePrintBase, BluePrintFactory};
    ///
    /// let bp = BluePrintFactory::from_fns(
    ///     || vec![1, 2, 3],
    ///     |v: &mut Vec<i32>| {
    ///         v.clear();
    ///         v.extend([1, 2, 3]);
    ///     },
    /// );
    /// assert_eq!(bp.implement_instantiate::<Vec<i32>>(), [1, 2, 3]);
    ///
    /// let mut v = vec![0; 10];
    /// bp.implement_apply(&mut v);
    /// assert_eq!(v, [1, 2, 3]);
    /// ```
    pub fn from_fns<M, R>(make: M, reset: R) -> FromFns<M, R, Base>
    where
        M: Fn() -> Base,
        R: Fn(&mut Base),
    {
        FromFns {
            make,
            reset,
            base: PhantomData,
        }
    }
}

/// Blueprint cloning a stored value. Created by [`BluePrintFactory::cloned`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cloned<T>(T);

impl<T> Cloned<T> {
    /// Returns the value instances are cloned from.
    pub fn value(&self) -> &T {
        &self.0
    }
}

impl<T: Clone> BluePrint for Cloned<T> {
    type Base = T;

    fn instantiate(&self) -> T {
        self.0.clone()
    }

    fn apply(&self, object: &mut T) {
        object.clone_from(&self.0);
    }
}

/// Blueprint invoking a pair of closures. Created by [`BluePrintFactory::from_fns`].
#[derive(Clone, Copy)]
pub struct FromFns<M, R, T> {
    make: M,
    reset: R,
    base: PhantomData<fn() -> T>,
}

impl<M, R, T> fmt::Debug for FromFns<M, R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FromFns<{}>", std::any::type_name::<T>())
    }
}

impl<M, R, T> BluePrint for FromFns<M, R, T>
where
    M: Fn() -> T,
    R: Fn(&mut T),
{
    type Base = T;

    fn instantiate(&self) -> T {
        (self.make)()
    }

    fn apply(&self, object: &mut T) {
        (self.reset)(object);
    }
}
