//! Implementations of `std::ops`.
//!
//! Only the by-value arithmetic operators are provided. [`Vector`] has no `IndexMut` and no
//! `*Assign` operators.

use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

// More general impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

impl<T, U, const N: usize> PartialEq<[U]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<&[U]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.0.eq(other)
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Element-wise addition.
impl<T, const N: usize> Add<Vector<T, N>> for Vector<T, N>
where
    T: Add,
{
    type Output = Vector<T::Output, N>;

    fn add(self, rhs: Vector<T, N>) -> Self::Output {
        self.zip(rhs).map(|(l, r)| l + r)
    }
}

/// Vector-Scalar addition.
impl<T, const N: usize> Add<T> for Vector<T, N>
where
    T: Add + Copy,
{
    type Output = Vector<T::Output, N>;

    fn add(self, rhs: T) -> Self::Output {
        self.map(|elem| elem + rhs)
    }
}

/// Element-wise subtraction.
impl<T, const N: usize> Sub<Vector<T, N>> for Vector<T, N>
where
    T: Sub,
{
    type Output = Vector<T::Output, N>;

    fn sub(self, rhs: Vector<T, N>) -> Self::Output {
        self.zip(rhs).map(|(l, r)| l - r)
    }
}

/// Vector-Scalar subtraction.
impl<T, const N: usize> Sub<T> for Vector<T, N>
where
    T: Sub + Copy,
{
    type Output = Vector<T::Output, N>;

    fn sub(self, rhs: T) -> Self::Output {
        self.map(|elem| elem - rhs)
    }
}

/// Element-wise multiplication.
impl<T, const N: usize> Mul<Vector<T, N>> for Vector<T, N>
where
    T: Mul + Copy,
{
    type Output = Vector<T::Output, N>;

    fn mul(self, rhs: Vector<T, N>) -> Self::Output {
        Vector::zip(self, rhs).map(|(a, b)| a * b)
    }
}

// NB: every operator exists both element-wise and with a scalar right-hand side. This rules out a
// more generic implementation `Mul<U> for Vector<T, N> where T: Mul<U>`.

/// Vector-Scalar multiplication (scaling).
impl<T, const N: usize> Mul<T> for Vector<T, N>
where
    T: Mul + Copy,
{
    type Output = Vector<T::Output, N>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

/// Element-wise division.
impl<T, const N: usize> Div<Vector<T, N>> for Vector<T, N>
where
    T: Div + Copy,
{
    type Output = Vector<T::Output, N>;

    fn div(self, rhs: Vector<T, N>) -> Self::Output {
        Vector::zip(self, rhs).map(|(a, b)| a / b)
    }
}

/// Vector-Scalar division (scaling).
impl<T, const N: usize> Div<T> for Vector<T, N>
where
    T: Div + Copy,
{
    type Output = Vector<T::Output, N>;

    fn div(self, rhs: T) -> Self::Output {
        self.map(|elem| elem / rhs)
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn elementwise() {
        assert_eq!((vec2(1.0, 2.0) + vec2(3.0, 4.0)).to_array(), [4.0, 6.0]);
        assert_eq!(vec3(1, 2, 3) - vec3(3, 2, 1), [-2, 0, 2]);
        assert_eq!(vec3(1, 2, 3) * vec3(3, 2, 1), [3, 4, 3]);
        assert_eq!(vec2(1.0, 9.0) / vec2(4.0, 3.0), [0.25, 3.0]);
        assert_eq!(-vec2(1, -1), [-1, 1]);
    }

    #[test]
    fn scalar() {
        let v = vec4(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v + 1.0, v.fadd(1.0));
        assert_eq!(v - 1.0, v.fsubtract(1.0));
        assert_eq!(v * 3.0, v.fmultiply(3.0));
        assert_eq!(v / 2.0, v.fdivide(2.0));
    }

    #[test]
    fn add_negation_is_zero() {
        let mut rng = fastrand::Rng::with_seed(0xD1CE);
        for _ in 0..100 {
            let v = Vec3f::random_with(&mut rng) * 100.0 - 50.0;
            assert_eq!(v + v.negate(), Vec3f::ZERO);
        }
    }
}
