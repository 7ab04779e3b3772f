use std::ops;

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

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

/// A trait for numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
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
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Floating-point element types usable as vector components.
///
/// Besides the rounding and power functions needed by the element-wise vector operations, this
/// trait provides [`Real::sample_unit`], the hook used by [`Vector::random_with`] to draw a
/// component from an injected random number generator.
///
/// [`Vector::random_with`]: crate::Vector::random_with
pub trait Real: Number + Sqrt + PartialOrd {
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    fn abs(self) -> Self;
    fn powf(self, exponent: Self) -> Self;

    /// Draws a value uniformly distributed in `[0, 1)` from `rng`.
    fn sample_unit(rng: &mut fastrand::Rng) -> Self;
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
zero_one!(0, 1 => u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);
zero_one!(0.0, 1.0 => f32, f64);

macro_rules! real {
    ($($types:ident),+) => {
        $(
            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl Real for $types {
                fn floor(self) -> Self {
                    self.floor()
                }

                fn ceil(self) -> Self {
                    self.ceil()
                }

                fn abs(self) -> Self {
                    self.abs()
                }

                fn powf(self, exponent: Self) -> Self {
                    self.powf(exponent)
                }

                fn sample_unit(rng: &mut fastrand::Rng) -> Self {
                    rng.$types()
                }
            }
        )+
    };
}
real!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_unit_range() {
        let mut rng = fastrand::Rng::with_seed(0x5eed);
        for _ in 0..10_000 {
            let a = <f32 as Real>::sample_unit(&mut rng);
            let b = <f64 as Real>::sample_unit(&mut rng);
            assert!((0.0..1.0).contains(&a), "{a}");
            assert!((0.0..1.0).contains(&b), "{b}");
        }
    }

    #[test]
    fn rounding() {
        assert_eq!(Real::floor(-1.5f32), -2.0);
        assert_eq!(Real::ceil(-1.5f64), -1.0);
        assert_eq!(Real::abs(-0.25f32), 0.25);
        assert_eq!(Real::powf(2.0f64, 3.0), 8.0);
    }
}
