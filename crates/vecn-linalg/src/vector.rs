use std::{array, fmt};

use crate::{
    error::{Error, Result},
    traits::{Number, Real, Sqrt},
    Zero,
};

mod approx_eq;
mod ops;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;

/// An immutable `N`-element vector storing elements of type `T`.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::splat`] creates a vector by copying the given value into each element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation, and from slices with
///   [`Vector::try_from_slice`].
/// - [`Vector::from_values`] and the [`vector!`][crate::vector] macro concatenate scalars and
///   smaller vectors.
/// - [`Vector::random`] and [`Vector::random_with`] draw each element from `[0, 1)`.
/// - [`Vector::ZERO`] is a vector containing all-zeroes.
///
/// # Element Access
///
/// A vector never changes after construction; every operation returns a new value. Elements can
/// be read in a few different ways:
///
/// - Swizzle methods generated from the `xyzw`, `rgba` and `stpq` alias tables, for vectors of up
///   to 4 dimensions: `v.x()`, `v.bgr()`, `v.st()`, `v.xxyy()`.
/// - [`Vector::swizzle`] looks up any swizzle name at run time, including the numeric `0123`
///   names.
/// - The [`Index`] impl can be used just like on arrays.
/// - [`Vector::to_array`], [`Vector::as_array`], [`Vector::as_slice`] and [`Vector::into_array`]
///   return the elements in construction order.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow safe transmutation when
///   the element type `T` also allows this.
///
/// [`Index`]: std::ops::Index
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    ///
    /// This uses [`T::ZERO`][Zero::ZERO] as the value for all elements.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T, const N: usize> Vector<T, N> {
    /// The number of components of this vector type.
    pub const DIM: usize = N;

    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn_linalg::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self(array::from_fn(|_| elem))
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn_linalg::*;
    /// let v = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Creates a vector from a slice of exactly `N` elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Arity`] if `slice` does not contain exactly `N` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn_linalg::*;
    /// assert_eq!(Vec3f::try_from_slice(&[1.0, 2.0, 3.0]), Ok(vec3(1.0, 2.0, 3.0)));
    /// assert!(Vec3f::try_from_slice(&[1.0, 2.0]).is_err());
    /// ```
    pub fn try_from_slice(slice: &[T]) -> Result<Self>
    where
        T: Copy,
    {
        <[T; N]>::try_from(slice).map(Self).map_err(|_| Error::Arity {
            expected: N,
            found: slice.len(),
        })
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn_linalg::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn_linalg::*;
    /// let a = vec3(1, 2, 3);
    /// let b = vec3("1", "2", "3");
    /// let v = a.zip(b);
    /// assert_eq!(v, vec3((1, "1"), (2, "2"), (3, "3")));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut other = other.0.into_iter();
        Vector(self.0.map(|elem| (elem, other.next().unwrap())))
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).as_array(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).as_slice(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a copy of the elements, in the order they were constructed in.
    ///
    /// This is the layout expected by uniform and vertex attribute uploads.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn_linalg::*;
    /// assert_eq!(vec4(1.0, 2.0, 3.0, 4.0).xyz().to_array(), [1.0, 2.0, 3.0]);
    /// ```
    #[inline]
    pub fn to_array(&self) -> [T; N]
    where
        T: Copy,
    {
        self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// There is an equivalent [`From`] impl that can also be used, but this method is often shorter
    /// and requires no type annotation.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns the number of components (`N`).
    #[inline]
    pub const fn dim(&self) -> usize {
        N
    }
}

/// Scalar operations.
///
/// These are also available as operators with a scalar right-hand side (`v + 1.0`, `v * 2.0`).
impl<T: Number, const N: usize> Vector<T, N> {
    /// Adds `scalar` to every element.
    pub fn fadd(self, scalar: T) -> Self {
        self.map(|elem| elem + scalar)
    }

    /// Subtracts `scalar` from every element.
    pub fn fsubtract(self, scalar: T) -> Self {
        self.map(|elem| elem - scalar)
    }

    /// Multiplies every element with `scalar`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn_linalg::*;
    /// assert_eq!(vec3(1.0, -2.0, 0.5).fmultiply(2.0), vec3(2.0, -4.0, 1.0));
    /// ```
    pub fn fmultiply(self, scalar: T) -> Self {
        self.map(|elem| elem * scalar)
    }

    /// Divides every element by `scalar`.
    pub fn fdivide(self, scalar: T) -> Self {
        self.map(|elem| elem / scalar)
    }

    /// Negates every element.
    ///
    /// Equivalent to the unary `-` operator.
    pub fn negate(self) -> Self {
        self.map(|elem| -elem)
    }

    /// Squares every element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn_linalg::*;
    /// assert_eq!(vec3(2.0, 2.0, 2.0).pow2(), [4.0, 4.0, 4.0]);
    /// ```
    pub fn pow2(self) -> Self {
        self.map(|elem| elem * elem)
    }

    /// Cubes every element.
    pub fn pow3(self) -> Self {
        self.map(|elem| elem * elem * elem)
    }

    /// Returns the sum of all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn_linalg::*;
    /// assert_eq!(vec4(1, 2, 3, 4).sum(), 10);
    /// ```
    pub fn sum(&self) -> T {
        self.0.iter().fold(T::ZERO, |acc, &elem| acc + elem)
    }

    /// Returns the product of all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn_linalg::*;
    /// assert_eq!(vec4(1, 2, 3, 4).product(), 24);
    /// ```
    pub fn product(&self) -> T {
        self.0.iter().fold(T::ONE, |acc, &elem| acc * elem)
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// This is the [`sum`][Vector::sum] of the element-wise product, so the operation is
    /// commutative.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn_linalg::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// assert_eq!(vec3(1.0, 0.0, 0.0).dot(vec3(0.0, 1.0, 0.0)), 0.0);
    /// ```
    pub fn dot(self, other: Self) -> T {
        (self * other).sum()
    }

    /// Returns the squared magnitude of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn_linalg::*;
    /// assert_eq!(vec2(4, 0).magnitude_squared(), 16);
    /// ```
    pub fn magnitude_squared(&self) -> T {
        self.dot(*self)
    }

    /// Returns the Euclidean length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn_linalg::*;
    /// assert_eq!(vec2(3.0, 4.0).magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> T
    where
        T: Sqrt,
    {
        self.magnitude_squared().sqrt()
    }

    /// Divides this vector by its magnitude, resulting in a unit vector.
    ///
    /// Normalizing a zero vector divides by zero, and yields NaN elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn_linalg::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    ///
    /// assert!(Vec2f::ZERO.normalize().x().is_nan());
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Sqrt,
    {
        self.fdivide(self.magnitude())
    }
}

impl<T: Real, const N: usize> Vector<T, N> {
    /// Rounds every element down.
    pub fn floor(self) -> Self {
        self.map(T::floor)
    }

    /// Rounds every element up.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn_linalg::*;
    /// assert_eq!(vec2(-1.5, 0.25).ceil(), vec2(-1.0, 1.0));
    /// ```
    pub fn ceil(self) -> Self {
        self.map(T::ceil)
    }

    /// Computes the absolute value of every element.
    pub fn abs(self) -> Self {
        self.map(T::abs)
    }

    /// Raises every element to the power `exponent`.
    ///
    /// Prefer [`Vector::pow2`] and [`Vector::pow3`] for squares and cubes.
    pub fn pow(self, exponent: T) -> Self {
        self.map(|elem| elem.powf(exponent))
    }

    /// Creates a vector with each element drawn uniformly from `[0, 1)`, using the thread-local
    /// random number generator.
    ///
    /// Use [`Vector::random_with`] to supply a (possibly seeded) generator instead.
    pub fn random() -> Self {
        Self::random_with(&mut fastrand::Rng::new())
    }

    /// Creates a vector with each element drawn uniformly from `[0, 1)` by `rng`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn_linalg::*;
    /// let mut rng = fastrand::Rng::with_seed(7);
    /// let v = Vec4f::random_with(&mut rng);
    /// assert!(v.as_slice().iter().all(|c| (0.0..1.0).contains(c)));
    ///
    /// // The same seed produces the same vector.
    /// assert_eq!(v, Vec4f::random_with(&mut fastrand::Rng::with_seed(7)));
    /// ```
    pub fn random_with(rng: &mut fastrand::Rng) -> Self {
        Self::from_fn(|_| T::sample_unit(rng))
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

/// Formats the vector as `[VecN (c0, c1, ...)]`.
impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Vec{N} (")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(elem, f)?;
        }
        f.write_str(")]")
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn access() {
        let v = vec4(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[3], 4.0);
        assert_eq!(v.dim(), 4);
        assert_eq!(Vec3f::DIM, 3);
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(<[f32; 4]>::from(v), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", vec4(0.0, 0.0, 0.0, 1.0)), "[Vec4 (0, 0, 0, 1)]");
        assert_eq!(format!("{}", vec2(1.5, -2.0)), "[Vec2 (1.5, -2)]");
        assert_eq!(format!("{:?}", vec4(0.0, 0.0, 0.0, 1.0)), "(0.0, 0.0, 0.0, 1.0)");
    }

    #[test]
    fn arity() {
        assert_eq!(
            Vec2f::try_from_slice(&[1.0, 2.0, 3.0]),
            Err(Error::Arity {
                expected: 2,
                found: 3
            })
        );
        assert_eq!(Vec2f::try_from_slice(&[1.0, 2.0]), Ok(vec2(1.0, 2.0)));
    }

    #[test]
    fn magnitude() {
        assert_eq!(vec2(3.0, 4.0).magnitude(), 5.0);
        assert_eq!(vec3(2.0, 3.0, 6.0).magnitude(), 7.0);
        assert_relative_eq!(
            vec4(1.0, -2.0, 3.0, 0.5).normalize().magnitude(),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(vec3(1, 3, -5).dot(vec3(1, 3, -5)), 35);
        assert_eq!(vec3(1.0, 0.0, 0.0).dot(vec3(0.0, 1.0, 0.0)), 0.0);
    }

    #[test]
    fn unary() {
        let v = vec4(-1.5, 0.5, 2.0, -3.0);
        assert_eq!(v.floor(), [-2.0, 0.0, 2.0, -3.0]);
        assert_eq!(v.ceil(), [-1.0, 1.0, 2.0, -3.0]);
        assert_eq!(v.abs(), [1.5, 0.5, 2.0, 3.0]);
        assert_eq!(v.negate(), -v);
        assert_eq!(v.pow2(), [2.25, 0.25, 4.0, 9.0]);
        assert_eq!(v.pow3(), [-3.375, 0.125, 8.0, -27.0]);
        assert_relative_eq!(vec2(4.0, 9.0).pow(0.5), vec2(2.0, 3.0));
        assert_eq!(vec3(2.0, 2.0, 2.0).pow2().to_array(), [4.0, 4.0, 4.0]);
    }

    #[test]
    fn reductions() {
        let v = vec4(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.sum(), 10.0);
        assert_eq!(v.product(), 24.0);
        assert_eq!(Vec3f::ZERO.sum(), 0.0);
    }

    #[test]
    fn scalar_ops() {
        let v = vec3(1.0, 2.0, 4.0);
        assert_eq!(v.fadd(1.0), [2.0, 3.0, 5.0]);
        assert_eq!(v.fsubtract(1.0), [0.0, 1.0, 3.0]);
        assert_eq!(v.fmultiply(2.0), [2.0, 4.0, 8.0]);
        assert_eq!(v.fdivide(2.0), [0.5, 1.0, 2.0]);
        assert_eq!(v.fmultiply(1.0), v);
    }

    #[test]
    fn normalize_zero_is_nan() {
        let n = Vec3f::ZERO.normalize();
        assert!(n.as_slice().iter().all(|c| c.is_nan()));
    }

    #[test]
    fn random() {
        let mut rng = fastrand::Rng::with_seed(0x3024b6663d843ca2);
        for _ in 0..1000 {
            let v = Vec4f::random_with(&mut rng);
            assert!(v.as_slice().iter().all(|c| (0.0..1.0).contains(c)), "{v}");
        }
        let v = Vector::<f64, 3>::random();
        assert!(v.as_slice().iter().all(|c| (0.0..1.0).contains(c)), "{v}");
    }

    #[test]
    fn pod() {
        let vs = [vec2(1.0f32, 2.0), vec2(3.0, 4.0)];
        let flat: &[f32] = bytemuck::cast_slice(&vs);
        assert_eq!(flat, &[1.0, 2.0, 3.0, 4.0]);
    }
}
