use std::{
    fmt,
    ops::{Deref, DerefMut},
};

mod blueprints;

pub use blueprints::*;

/// A heap-allocated, dynamically sized array.
///
/// [`Array`] dereferences to a slice, so all slice methods are available. Its length can only be
/// changed by reconfiguring it with a blueprint (or by converting it back into a [`Vec`]), which
/// keeps the existing allocation whenever it is large enough:
///
/// ```
/// use stencil::{BluePrintFactory, Build};
/// use stencil_linalg::{Array, ArrayBluePrints};
///
/// let mut a = Array::build(&BluePrintFactory::<Array<u8>>::fill(4, 7));
/// assert_eq!(a, [7, 7, 7, 7]);
///
/// a.configure(&BluePrintFactory::<Array<u8>>::sequence(3, 1, 2));
/// assert_eq!(a, [1, 3, 5]);
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Array<T>(Vec<T>);

impl<T> Array<T> {
    /// Creates an empty array.
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn from_vec(vec: Vec<T>) -> Self {
        Self(vec)
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Returns the number of elements the array can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.0.capacity()
    }

    /// Grants blueprints in this crate access to the backing storage.
    pub(crate) fn storage_mut(&mut self) -> &mut Vec<T> {
        &mut self.0
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T> From<Vec<T>> for Array<T> {
    fn from(vec: Vec<T>) -> Self {
        Self(vec)
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T> {
    fn from(array: [T; N]) -> Self {
        Self(array.into())
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for Array<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.0[..] == other[..]
    }
}

impl<T: PartialEq<U>, U> PartialEq<[U]> for Array<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.0[..] == other[..]
    }
}

impl<T: fmt::Debug> fmt::Debug for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.0).finish()
    }
}
