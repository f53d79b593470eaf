//! Blueprints for dynamically sized arrays.
//!
//! [`apply`][BluePrint::apply] on these blueprints reuses the target's allocation: the array is
//! cleared and refilled in place, growing only if its capacity is too small.

use std::iter;

use stencil::{BluePrint, BluePrintFactory};

use crate::{Array, Number, Zero};

fn log_resize(from: usize, to: usize) {
    if from != to {
        log::trace!("resizing array from {from} to {to} elements");
    }
}

/// Blueprint for an array of `len` copies of a value.
///
/// Created by [`ArrayBluePrints::fill`] and [`ArrayBluePrints::zeros`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fill<T> {
    len: usize,
    value: T,
}

impl<T> Fill<T> {
    pub const fn new(len: usize, value: T) -> Self {
        Self { len, value }
    }

    /// Returns the length of the arrays produced by this blueprint.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether this blueprint produces empty arrays.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T: Clone> BluePrint for Fill<T> {
    type Base = Array<T>;

    fn instantiate(&self) -> Array<T> {
        Array::from_vec(vec![self.value.clone(); self.len])
    }

    fn apply(&self, object: &mut Array<T>) {
        log_resize(object.len(), self.len);
        let storage = object.storage_mut();
        storage.clear();
        storage.resize(self.len, self.value.clone());
    }
}

/// Blueprint for an arithmetic progression `start, start + step, start + 2 * step, ...` of `len`
/// elements.
///
/// Created by [`ArrayBluePrints::sequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sequence<T> {
    len: usize,
    start: T,
    step: T,
}

impl<T> Sequence<T> {
    pub const fn new(len: usize, start: T, step: T) -> Self {
        Self { len, start, step }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T: Number> Sequence<T> {
    fn elements(&self) -> impl Iterator<Item = T> {
        // Exactly `len - 1` additions, so the last element is the largest value ever computed.
        let rest = itertools::repeat_n(self.step, self.len.saturating_sub(1)).scan(
            self.start,
            |acc, step| {
                *acc = *acc + step;
                Some(*acc)
            },
        );
        iter::once(self.start).chain(rest).take(self.len)
    }
}

impl<T: Number> BluePrint for Sequence<T> {
    type Base = Array<T>;

    fn instantiate(&self) -> Array<T> {
        self.elements().collect()
    }

    fn apply(&self, object: &mut Array<T>) {
        log_resize(object.len(), self.len);
        let storage = object.storage_mut();
        storage.clear();
        storage.extend(self.elements());
    }
}

/// Array blueprint constructors, available on [`BluePrintFactory<Array<T>>`].
pub trait ArrayBluePrints<T> {
    /// Returns a blueprint for an array of `len` elements, each set to `value`.
    fn fill(len: usize, value: T) -> Fill<T>
    where
        T: Clone,
    {
        Fill::new(len, value)
    }

    /// Returns a blueprint for an array of `len` zeros.
    fn zeros(len: usize) -> Fill<T>
    where
        T: Zero + Clone,
    {
        Fill::new(len, T::ZERO)
    }

    /// Returns a blueprint for an arithmetic progression.
    fn sequence(len: usize, start: T, step: T) -> Sequence<T>
    where
        T: Number,
    {
        Sequence::new(len, start, step)
    }
}

impl<T> ArrayBluePrints<T> for BluePrintFactory<Array<T>> {}

#[cfg(test)]
mod tests {
    use stencil::{assert_blueprint, BluePrintBase, Build};

    use super::*;

    assert_blueprint!(Fill<String> => Array<String>);
    assert_blueprint!(Sequence<f64> => Array<f64>);

    #[test]
    fn fill() {
        let bp = BluePrintFactory::<Array<i32>>::fill(5, 7);
        assert_eq!(bp.len(), 5);
        assert_eq!(bp.value(), &7);
        assert_eq!(bp.implement_instantiate::<Array<i32>>(), [7; 5]);

        let mut shorter = Array::from([1, 2]);
        shorter.configure(&bp);
        assert_eq!(shorter, [7; 5]);

        let mut longer = Array::from([0; 9]);
        let capacity = longer.capacity();
        longer.configure(&bp);
        assert_eq!(longer, [7; 5]);
        assert_eq!(longer.capacity(), capacity);
    }

    #[test]
    fn zeros() {
        let a = Array::build(&BluePrintFactory::<Array<f32>>::zeros(3));
        assert_eq!(a, [0.0; 3]);
        let none = BluePrintFactory::<Array<u8>>::zeros(0);
        assert!(none.is_empty());
        assert!(!BluePrintFactory::<Array<u8>>::zeros(1).is_empty());
        assert!(Array::build(&none).is_empty());
    }

    #[test]
    fn sequence() {
        let bp = BluePrintFactory::<Array<u32>>::sequence(4, 10, 5);
        assert_eq!(bp.len(), 4);
        assert!(!bp.is_empty());
        assert_eq!(Array::build(&bp), [10, 15, 20, 25]);

        let mut a = Array::from([1; 64]);
        a.configure(&bp);
        assert_eq!(a, [10, 15, 20, 25]);

        let near_max = BluePrintFactory::<Array<u8>>::sequence(2, 250, 5);
        assert_eq!(Array::build(&near_max), [250, 255]);

        let empty = BluePrintFactory::<Array<u32>>::sequence(0, 1, 1);
        assert!(empty.is_empty());
        a.configure(&empty);
        assert!(a.is_empty());
    }
}
