//! Vectors whose dimension is only known at run time.

use std::fmt;

use crate::{
    error::{Error, Result},
    traits::{Number, Real, Sqrt},
    Vec2, Vec3, Vec4, MAX_DIM, MIN_DIM,
};

/// A [`Vector`][crate::Vector] with 2, 3 or 4 components, selected at run time.
///
/// This is what dynamic swizzles and [`VectorType`][crate::VectorType] produce. It offers the same
/// operations as the statically sized vectors, but binary operations check the dimensions of their
/// operands and fail with [`Error::OperandLengthMismatch`] if they differ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyVector<T> {
    Vec2(Vec2<T>),
    Vec3(Vec3<T>),
    Vec4(Vec4<T>),
}

/// Applies an expression to the wrapped vector, rewrapping the result in the same variant.
macro_rules! each {
    ($this:expr, $v:ident => $body:expr) => {
        match $this {
            AnyVector::Vec2($v) => AnyVector::Vec2($body),
            AnyVector::Vec3($v) => AnyVector::Vec3($body),
            AnyVector::Vec4($v) => AnyVector::Vec4($body),
        }
    };
}

/// Applies an expression to the wrapped vector, returning its result unchanged.
macro_rules! with {
    ($this:expr, $v:ident => $body:expr) => {
        match $this {
            AnyVector::Vec2($v) => $body,
            AnyVector::Vec3($v) => $body,
            AnyVector::Vec4($v) => $body,
        }
    };
}

impl<T> AnyVector<T> {
    /// Creates a vector with as many components as `components` has elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dimension`] if `components` does not have between [`MIN_DIM`] and
    /// [`MAX_DIM`] elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn_linalg::*;
    /// let v = AnyVector::from_slice(&[1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(v, AnyVector::Vec3(vec3(1.0, 2.0, 3.0)));
    /// assert!(AnyVector::from_slice(&[1.0]).is_err());
    /// ```
    pub fn from_slice(components: &[T]) -> Result<Self>
    where
        T: Copy,
    {
        match *components {
            [x, y] => Ok(Self::Vec2([x, y].into())),
            [x, y, z] => Ok(Self::Vec3([x, y, z].into())),
            [x, y, z, w] => Ok(Self::Vec4([x, y, z, w].into())),
            _ => Err(Error::Dimension {
                requested: components.len(),
                min: MIN_DIM,
                max: MAX_DIM,
            }),
        }
    }

    /// Returns the number of components.
    pub fn dim(&self) -> usize {
        with!(self, v => v.dim())
    }

    /// Returns the components as a slice, in construction order.
    pub fn as_slice(&self) -> &[T] {
        with!(self, v => v.as_slice())
    }

    /// Returns the components as a [`Vec`], in construction order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Copy,
    {
        self.as_slice().to_vec()
    }

    /// Applies a closure to each element, returning a new vector of the same dimension.
    pub fn map<F, U>(self, f: F) -> AnyVector<U>
    where
        F: FnMut(T) -> U,
    {
        each!(self, v => v.map(f))
    }

    /// Looks up the swizzle `name` and applies it to `self`.
    ///
    /// See [`Vector::swizzle`][crate::Vector::swizzle].
    pub fn swizzle(&self, name: &str) -> Result<Value<T>>
    where
        T: Copy,
    {
        with!(self, v => v.swizzle(name))
    }

    fn zip_with<F>(self, other: Self, mut f: F) -> Result<Self>
    where
        F: FnMut(T, T) -> T,
    {
        match (self, other) {
            (Self::Vec2(a), Self::Vec2(b)) => Ok(Self::Vec2(a.zip(b).map(|(a, b)| f(a, b)))),
            (Self::Vec3(a), Self::Vec3(b)) => Ok(Self::Vec3(a.zip(b).map(|(a, b)| f(a, b)))),
            (Self::Vec4(a), Self::Vec4(b)) => Ok(Self::Vec4(a.zip(b).map(|(a, b)| f(a, b)))),
            (a, b) => Err(Error::OperandLengthMismatch {
                expected: a.dim(),
                found: b.dim(),
            }),
        }
    }
}

impl<T: Number> AnyVector<T> {
    /// Element-wise addition.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OperandLengthMismatch`] if `other` has a different dimension.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn_linalg::*;
    /// let a = AnyVector::from(vec2(1.0, 1.0));
    /// assert_eq!(a.try_add(vec2(3.0, 4.0).into()), Ok(vec2(4.0, 5.0).into()));
    /// assert_eq!(
    ///     a.try_add(vec3(1.0, 1.0, 1.0).into()),
    ///     Err(Error::OperandLengthMismatch { expected: 2, found: 3 }),
    /// );
    /// ```
    pub fn try_add(self, other: Self) -> Result<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Element-wise subtraction.
    pub fn try_subtract(self, other: Self) -> Result<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Element-wise multiplication.
    pub fn try_multiply(self, other: Self) -> Result<Self> {
        self.zip_with(other, |a, b| a * b)
    }

    /// Element-wise division.
    pub fn try_divide(self, other: Self) -> Result<Self> {
        self.zip_with(other, |a, b| a / b)
    }

    /// Computes the dot product between `self` and `other`.
    pub fn try_dot(self, other: Self) -> Result<T> {
        Ok(self.try_multiply(other)?.sum())
    }

    pub fn fadd(self, scalar: T) -> Self {
        each!(self, v => v.fadd(scalar))
    }

    pub fn fsubtract(self, scalar: T) -> Self {
        each!(self, v => v.fsubtract(scalar))
    }

    pub fn fmultiply(self, scalar: T) -> Self {
        each!(self, v => v.fmultiply(scalar))
    }

    pub fn fdivide(self, scalar: T) -> Self {
        each!(self, v => v.fdivide(scalar))
    }

    pub fn negate(self) -> Self {
        each!(self, v => v.negate())
    }

    pub fn pow2(self) -> Self {
        each!(self, v => v.pow2())
    }

    pub fn pow3(self) -> Self {
        each!(self, v => v.pow3())
    }

    pub fn sum(&self) -> T {
        with!(self, v => v.sum())
    }

    pub fn product(&self) -> T {
        with!(self, v => v.product())
    }

    pub fn magnitude(&self) -> T
    where
        T: Sqrt,
    {
        with!(self, v => v.magnitude())
    }

    pub fn normalize(self) -> Self
    where
        T: Sqrt,
    {
        each!(self, v => v.normalize())
    }
}

impl<T: Real> AnyVector<T> {
    pub fn floor(self) -> Self {
        each!(self, v => v.floor())
    }

    pub fn ceil(self) -> Self {
        each!(self, v => v.ceil())
    }

    pub fn abs(self) -> Self {
        each!(self, v => v.abs())
    }

    pub fn pow(self, exponent: T) -> Self {
        each!(self, v => v.pow(exponent))
    }
}

impl<T> From<Vec2<T>> for AnyVector<T> {
    fn from(v: Vec2<T>) -> Self {
        Self::Vec2(v)
    }
}

impl<T> From<Vec3<T>> for AnyVector<T> {
    fn from(v: Vec3<T>) -> Self {
        Self::Vec3(v)
    }
}

impl<T> From<Vec4<T>> for AnyVector<T> {
    fn from(v: Vec4<T>) -> Self {
        Self::Vec4(v)
    }
}

/// Formats the wrapped vector, eg. `[Vec3 (1, 2, 3)]`.
impl<T: fmt::Display> fmt::Display for AnyVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        with!(self, v => fmt::Display::fmt(v, f))
    }
}

/// A scalar or a vector.
///
/// Dynamic swizzles produce a [`Value::Scalar`] when selecting a single component and a
/// [`Value::Vector`] otherwise. The convenience constructor [`Vector::from_values`] accepts a list
/// of values and concatenates their components.
///
/// [`Vector::from_values`]: crate::Vector::from_values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<T> {
    Scalar(T),
    Vector(AnyVector<T>),
}

impl<T> Value<T> {
    /// Returns the number of components this value contributes when flattened.
    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Vector(v) => v.dim(),
        }
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn as_scalar(&self) -> Option<&T> {
        match self {
            Self::Scalar(s) => Some(s),
            Self::Vector(_) => None,
        }
    }

    pub fn as_vector(&self) -> Option<&AnyVector<T>> {
        match self {
            Self::Scalar(_) => None,
            Self::Vector(v) => Some(v),
        }
    }

    /// Returns the components of this value, in order.
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::Scalar(s) => std::slice::from_ref(s),
            Self::Vector(v) => v.as_slice(),
        }
    }
}

impl<T: Real> From<T> for Value<T> {
    fn from(scalar: T) -> Self {
        Self::Scalar(scalar)
    }
}

impl<T> From<AnyVector<T>> for Value<T> {
    fn from(v: AnyVector<T>) -> Self {
        Self::Vector(v)
    }
}

impl<T> From<Vec2<T>> for Value<T> {
    fn from(v: Vec2<T>) -> Self {
        Self::Vector(v.into())
    }
}

impl<T> From<Vec3<T>> for Value<T> {
    fn from(v: Vec3<T>) -> Self {
        Self::Vector(v.into())
    }
}

impl<T> From<Vec4<T>> for Value<T> {
    fn from(v: Vec4<T>) -> Self {
        Self::Vector(v.into())
    }
}

impl<T: fmt::Display> fmt::Display for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(s) => fmt::Display::fmt(s, f),
            Self::Vector(v) => fmt::Display::fmt(v, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::*;

    #[test]
    fn from_slice() {
        assert_eq!(
            AnyVector::from_slice(&[1.0, 2.0]),
            Ok(AnyVector::Vec2(vec2(1.0, 2.0)))
        );
        assert_eq!(
            AnyVector::from_slice(&[1.0, 2.0, 3.0, 4.0]).map(|v| v.dim()),
            Ok(4)
        );
        for len in [0, 1, 5] {
            assert_eq!(
                AnyVector::from_slice(&vec![0.0f32; len]),
                Err(Error::Dimension {
                    requested: len,
                    min: 2,
                    max: 4
                })
            );
        }
    }

    #[test]
    fn mismatched_operands() {
        let a = AnyVector::from(vec2(1.0, 1.0));
        let b = AnyVector::from(vec3(1.0, 1.0, 1.0));
        let mismatch = Err(Error::OperandLengthMismatch {
            expected: 2,
            found: 3,
        });
        assert_eq!(a.try_add(b), mismatch);
        assert_eq!(a.try_subtract(b), mismatch);
        assert_eq!(a.try_multiply(b), mismatch);
        assert_eq!(a.try_divide(b), mismatch);
        assert_eq!(
            b.try_dot(a),
            Err(Error::OperandLengthMismatch {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn matches_static_ops() {
        let a = vec4(1.0, -2.0, 3.5, 0.25);
        let b = vec4(0.5, 4.0, -1.0, 2.0);
        let (da, db) = (AnyVector::from(a), AnyVector::from(b));
        assert_eq!(da.try_add(db), Ok((a + b).into()));
        assert_eq!(da.try_subtract(db), Ok((a - b).into()));
        assert_eq!(da.try_multiply(db), Ok((a * b).into()));
        assert_eq!(da.try_divide(db), Ok((a / b).into()));
        assert_eq!(da.try_dot(db), Ok(a.dot(b)));
        assert_eq!(da.fadd(2.0), a.fadd(2.0).into());
        assert_eq!(da.floor(), a.floor().into());
        assert_eq!(da.abs(), a.abs().into());
        assert_eq!(da.pow3(), a.pow3().into());
        assert_eq!(da.sum(), a.sum());
        assert_eq!(da.product(), a.product());
        assert_relative_eq!(da.normalize().magnitude(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn fmt() {
        assert_eq!(AnyVector::from(vec3(1, 2, 3)).to_string(), "[Vec3 (1, 2, 3)]");
        assert_eq!(Value::Scalar(0.5).to_string(), "0.5");
    }

    #[test]
    fn value_components() {
        assert_eq!(Value::from(2.0).as_slice(), &[2.0]);
        assert_eq!(Value::from(vec3(1.0, 2.0, 3.0)).as_slice(), &[1.0, 2.0, 3.0]);
        assert_eq!(Value::from(vec2(1.0, 2.0)).len(), 2);
        assert_eq!(Value::from(1.0).as_scalar(), Some(&1.0));
        assert!(Value::from(1.0).as_vector().is_none());
    }
}
