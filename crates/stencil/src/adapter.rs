use std::ops::Deref;

use crate::BluePrint;

/// Forwarding methods available on every [`BluePrint`].
///
/// Generic code calls [`implement_instantiate`] and [`implement_apply`] rather than the contract
/// methods themselves. The base type is named explicitly at the call site, so a call only compiles
/// when the blueprint really targets that type:
///
/// ```
/// use stencil::{BluePrint, BluePrintBase};
///
/// struct Answer;
///
/// impl BluePrint for Answer {
///     type Base = u64;
///     fn instantiate(&self) -> u64 { 42 }
///     fn apply(&self, object: &mut u64) { *object = 42; }
/// }
///
/// assert_eq!(Answer.implement_instantiate::<u64>(), 42);
/// ```
///
/// ```compile_fail
/// use stencil::{BluePrint, BluePrintBase};
///
/// struct Answer;
///
/// impl BluePrint for Answer {
///     type Base = u64;
///     fn instantiate(&self) -> u64 { 42 }
///     fn apply(&self, object: &mut u64) { *object = 42; }
/// }
///
/// let wrong: i32 = Answer.implement_instantiate::<i32>();
/// ```
///
/// The methods are named differently from the contract methods on purpose. A type can only gain
/// them by implementing [`BluePrint`] in full, so there is no way to "inherit" a do-nothing
/// `instantiate` or `apply` from here:
///
/// ```compile_fail
/// use stencil::BluePrintBase;
///
/// struct Incomplete;
///
/// let _ = Incomplete.implement_instantiate::<u64>();
/// ```
///
/// This trait is implemented for all blueprints and cannot be implemented manually.
///
/// [`implement_instantiate`]: BluePrintBase::implement_instantiate
/// [`implement_apply`]: BluePrintBase::implement_apply
pub trait BluePrintBase: BluePrint {
    /// Creates a new `Base` by calling [`BluePrint::instantiate`].
    #[inline]
    fn implement_instantiate<Base>(&self) -> Base
    where
        Self: BluePrint<Base = Base>,
    {
        self.instantiate()
    }

    /// Configures `object` by calling [`BluePrint::apply`].
    #[inline]
    fn implement_apply<Base>(&self, object: &mut Base)
    where
        Self: BluePrint<Base = Base>,
    {
        self.apply(object)
    }
}

impl<B: BluePrint + ?Sized> BluePrintBase for B {}

/// A blueprint value bound to the blueprint contract.
///
/// The `B: BluePrint` bound lives on the type itself, so naming `Adapter<X>` for some `X` that is
/// not a blueprint is rejected wherever it appears, not just when a method is called:
///
/// ```compile_fail
/// struct NotABluePrint;
///
/// fn takes(_: stencil::Adapter<NotABluePrint>) {}
/// ```
///
/// The wrapper is `#[repr(transparent)]` and adds no state to `B`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Adapter<B: BluePrint>(B);

impl<B: BluePrint> Adapter<B> {
    /// Binds `blueprint` to the contract.
    #[inline]
    pub const fn new(blueprint: B) -> Self {
        Self(blueprint)
    }

    /// Returns a reference to the wrapped blueprint.
    #[inline]
    pub fn blueprint(&self) -> &B {
        &self.0
    }

    /// Unwraps the blueprint.
    #[inline]
    pub fn into_inner(self) -> B {
        self.0
    }

    /// Creates a new `Base` from the wrapped blueprint.
    ///
    /// See [`BluePrintBase::implement_instantiate`].
    #[inline]
    pub fn implement_instantiate<Base>(&self) -> Base
    where
        B: BluePrint<Base = Base>,
    {
        self.0.instantiate()
    }

    /// Configures `object` using the wrapped blueprint.
    ///
    /// See [`BluePrintBase::implement_apply`].
    #[inline]
    pub fn implement_apply<Base>(&self, object: &mut Base)
    where
        B: BluePrint<Base = Base>,
    {
        self.0.apply(object)
    }
}

impl<B: BluePrint> From<B> for Adapter<B> {
    fn from(blueprint: B) -> Self {
        Self::new(blueprint)
    }
}

impl<B: BluePrint> Deref for Adapter<B> {
    type Target = B;

    fn deref(&self) -> &B {
        &self.0
    }
}

/// Construction and reconfiguration of any type from a matching blueprint.
///
/// Implemented for every sized type. The blueprint parameter is bounded on
/// `BluePrint<Base = Self>`, so these entry points never compete with other generic functions
/// that happen to accept "any `T`".
///
/// ```
/// use stencil::{BluePrintFactory, Build};
///
/// let names = Vec::<String>::build(&BluePrintFactory::cloned(vec!["a".to_string()]));
/// assert_eq!(names, ["a"]);
/// ```
pub trait Build: Sized {
    /// Creates a value of this type from `blueprint`.
    fn build<B>(blueprint: &B) -> Self
    where
        B: BluePrint<Base = Self> + ?Sized,
    {
        blueprint.implement_instantiate::<Self>()
    }

    /// Reconfigures `self` in place according to `blueprint`.
    fn configure<B>(&mut self, blueprint: &B) -> &mut Self
    where
        B: BluePrint<Base = Self> + ?Sized,
    {
        blueprint.implement_apply::<Self>(self);
        self
    }
}

impl<T> Build for T {}

/// Creates a new value from `blueprint`.
#[inline]
pub fn instantiate<B: BluePrint + ?Sized>(blueprint: &B) -> B::Base {
    blueprint.implement_instantiate()
}

/// Reconfigures `object` according to `blueprint`.
#[inline]
pub fn apply<B: BluePrint + ?Sized>(blueprint: &B, object: &mut B::Base) {
    blueprint.implement_apply(object)
}
