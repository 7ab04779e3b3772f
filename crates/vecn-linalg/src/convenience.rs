//! Flattening vector construction from scalars and smaller vectors.

use crate::{error::Result, Value, Vector};

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Creates a vector by concatenating the components of `values`.
    ///
    /// Values are flattened left to right: a [`Value::Vector`] contributes all of its components
    /// in order, a [`Value::Scalar`] contributes itself. This mirrors GLSL constructors like
    /// `vec4(v.xy, 0.0, 1.0)`.
    ///
    /// The [`vector!`][crate::vector] macro is a shorter way to call this.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Arity`][crate::Error::Arity] if the flattened values do not have exactly `N`
    /// components.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn_linalg::*;
    /// let v = Vec3f::from_values(&[vec2(1.0, 2.0).into(), Value::from(3.0)]).unwrap();
    /// assert_eq!(v, vec3(1.0, 2.0, 3.0));
    ///
    /// assert_eq!(
    ///     Vec3f::from_values(&[vec3(1.0, 2.0, 3.0).into(), Value::from(4.0)]),
    ///     Err(Error::Arity { expected: 3, found: 4 }),
    /// );
    /// ```
    pub fn from_values(values: &[Value<T>]) -> Result<Self> {
        let components = values
            .iter()
            .flat_map(Value::as_slice)
            .copied()
            .collect::<Vec<_>>();
        Self::try_from_slice(&components)
    }
}

/// Returns a constructor for `Vector<T, N>` that accepts any mix of scalars and vectors.
///
/// This is [`Vector::from_values`] as a standalone function value, for callers that want to pass
/// the constructor around.
///
/// # Examples
///
/// ```
/// # use vecn_linalg::*;
/// let make = convenience::<f32, 4>();
/// let color = make(&[vec3(0.5, 0.25, 1.0).into(), Value::from(1.0)]).unwrap();
/// assert_eq!(color, vec4(0.5, 0.25, 1.0, 1.0));
/// assert!(make(&[color.xy().into()]).is_err());
/// ```
pub fn convenience<T: Copy, const N: usize>() -> impl Fn(&[Value<T>]) -> Result<Vector<T, N>> {
    Vector::from_values
}

/// Creates a [`Vector`] from a list of scalars and vectors.
///
/// `vector![N; a, b, ...]` converts every argument into a [`Value`] and calls
/// [`Vector::from_values`], so it evaluates to a `Result<Vector<_, N>>`.
///
/// # Examples
///
/// ```
/// # use vecn_linalg::*;
/// let v = vector![3; vec2(1.0, 2.0), 3.0].unwrap();
/// assert_eq!(v, vec3(1.0, 2.0, 3.0));
///
/// let rgba = vector![4; v.bgr(), 1.0].unwrap();
/// assert_eq!(rgba, [3.0, 2.0, 1.0, 1.0]);
///
/// assert!(vector![2; 1.0, 2.0, 3.0].is_err());
/// ```
#[macro_export]
macro_rules! vector {
    ($n:literal; $($arg:expr),* $(,)?) => {
        $crate::Vector::<_, $n>::from_values(&[$($crate::Value::from($arg)),*])
    };
}
