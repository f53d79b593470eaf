//! The blueprint capability contract.

use std::{rc::Rc, sync::Arc};

/// A recipe that can produce or reconfigure values of its [`Base`][Self::Base] type.
///
/// Implementing this trait is the only way for a type to be accepted where a blueprint is
/// expected. All three members are required, and the compiler rejects implementations that omit
/// one or get a signature wrong:
///
/// ```compile_fail
/// struct NoBase;
///
/// impl stencil::BluePrint for NoBase {
///     fn instantiate(&self) -> u32 { 0 }
///     fn apply(&self, _: &mut u32) {}
/// }
/// ```
///
/// ```compile_fail
/// struct NoInstantiate;
///
/// impl stencil::BluePrint for NoInstantiate {
///     type Base = u32;
///     fn apply(&self, _: &mut u32) {}
/// }
/// ```
///
/// ```compile_fail
/// struct NoApply;
///
/// impl stencil::BluePrint for NoApply {
///     type Base = u32;
///     fn instantiate(&self) -> u32 { 0 }
/// }
/// ```
///
/// `apply` has to mutate its argument in place. Returning a value, or taking the argument by value,
/// is a signature mismatch:
///
/// ```compile_fail
/// struct ApplyReturns;
///
/// impl stencil::BluePrint for ApplyReturns {
///     type Base = u32;
///     fn instantiate(&self) -> u32 { 0 }
///     fn apply(&self, object: &mut u32) -> u32 { *object }
/// }
/// ```
///
/// ```compile_fail
/// struct ApplyByValue;
///
/// impl stencil::BluePrint for ApplyByValue {
///     type Base = u32;
///     fn instantiate(&self) -> u32 { 0 }
///     fn apply(&self, object: u32) {}
/// }
/// ```
///
/// # Effects
///
/// [`instantiate`][Self::instantiate] must not touch any existing value of the base type.
/// [`apply`][Self::apply] reconfigures its argument according to the blueprint's recipe, in place:
/// it reuses the argument's storage and never swaps in a freshly built value. State the recipe does
/// not cover may be left as it was. Both take `&self`, so a blueprint can be used any number of
/// times.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not satisfy the blueprint contract",
    label = "`{Self}` is not a `BluePrint`",
    note = "a blueprint declares `type Base`, `fn instantiate(&self) -> Self::Base` and \
            `fn apply(&self, object: &mut Self::Base)`"
)]
pub trait BluePrint {
    /// The type produced by [`instantiate`][Self::instantiate] and configured by
    /// [`apply`][Self::apply].
    type Base;

    /// Creates a new value according to this blueprint.
    fn instantiate(&self) -> Self::Base;

    /// Reconfigures `object` in place according to this blueprint.
    fn apply(&self, object: &mut Self::Base);
}

impl<B: BluePrint + ?Sized> BluePrint for &B {
    type Base = B::Base;

    #[inline]
    fn instantiate(&self) -> Self::Base {
        (**self).instantiate()
    }

    #[inline]
    fn apply(&self, object: &mut Self::Base) {
        (**self).apply(object)
    }
}

macro_rules! forward_smart_pointer {
    ($($ptr:ident),+) => {
        $(
            impl<B: BluePrint + ?Sized> BluePrint for $ptr<B> {
                type Base = B::Base;

                #[inline]
                fn instantiate(&self) -> Self::Base {
                    (**self).instantiate()
                }

                #[inline]
                fn apply(&self, object: &mut Self::Base) {
                    (**self).apply(object)
                }
            }
        )+
    };
}
forward_smart_pointer!(Box, Rc, Arc);

/// Compile-time check that `B` is a [`BluePrint`].
///
/// Evaluating this in a constant context turns a contract violation into an error at that exact
/// spot. [`assert_blueprint!`] wraps it for use at item level.
pub const fn assert_blueprint<B: BluePrint + ?Sized>() {}

/// Compile-time check that `B` is a [`BluePrint`] whose base type is `Base`.
pub const fn assert_blueprint_of<B, Base>()
where
    B: BluePrint<Base = Base> + ?Sized,
{
}

/// Statically asserts that a type satisfies the [`BluePrint`] contract.
///
/// Place this next to the type definition so a broken blueprint is reported where it is
/// declared, not at some distant generic call site. The second form additionally pins the
/// [`Base`][BluePrint::Base] type.
///
/// ```
/// struct Zeroes;
///
/// impl stencil::BluePrint for Zeroes {
///     type Base = [u8; 4];
///
///     fn instantiate(&self) -> [u8; 4] {
///         [0; 4]
///     }
///
///     fn apply(&self, object: &mut [u8; 4]) {
///         object.fill(0);
///     }
/// }
///
/// stencil::assert_blueprint!(Zeroes);
/// stencil::assert_blueprint!(Zeroes => [u8; 4]);
/// ```
///
/// ```compile_fail
/// struct NotABluePrint;
///
/// stencil::assert_blueprint!(NotABluePrint);
/// ```
///
/// ```compile_fail
/// struct Zeroes;
///
/// impl stencil::BluePrint for Zeroes {
///     type Base = [u8; 4];
///     fn instantiate(&self) -> [u8; 4] { [0; 4] }
///     fn apply(&self, object: &mut [u8; 4]) { object.fill(0); }
/// }
///
/// stencil::assert_blueprint!(Zeroes => Vec<u8>);
/// ```
#[macro_export]
macro_rules! assert_blueprint {
    ($ty:ty $(,)?) => {
        const _: () = $crate::assert_blueprint::<$ty>();
    };
    ($ty:ty => $base:ty $(,)?) => {
        const _: () = $crate::assert_blueprint_of::<$ty, $base>();
    };
}
