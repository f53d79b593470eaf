use std::ops;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric element types that support basic arithmetic operations.
///
/// Unlike a signed-number trait, this does not require [`ops::Neg`], so unsigned integers are
/// valid matrix and array elements.
pub trait Number:
    Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

macro_rules! zero_one {
    ($zero:literal, $one:literal => $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }

            impl One for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
zero_one!(0, 1 => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
zero_one!(0.0, 1.0 => f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn sum<T: Number>(values: &[T]) -> T {
        values.iter().fold(T::ZERO, |acc, &v| acc + v)
    }

    #[test]
    fn unsigned_is_number() {
        assert_eq!(sum::<u8>(&[1, 2, 3]), 6);
        assert_eq!(sum::<f64>(&[]), 0.0);
        assert_eq!(<usize as One>::ONE, 1);
    }
}
