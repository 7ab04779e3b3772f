use std::fmt;

use crate::{
    alias::AliasRegistry,
    error::{Error, Result},
    swizzle::{swizzle_table, SwizzleTable},
    traits::Real,
    AnyVector, Vec2, Vec3, Vec4,
};

/// Describes a vector type whose dimension is chosen at run time.
///
/// Statically sized code should use [`Vector<T, N>`][crate::Vector] directly. A [`VectorType`]
/// is useful when the dimension comes from data, eg. a shader attribute description: it validates
/// the dimension once, and then constructs [`AnyVector`]s of that dimension.
///
/// # Examples
///
/// ```
/// # use vecn_linalg::*;
/// let ty = VectorType::new(3).unwrap();
/// assert_eq!(ty.to_string(), "Vec3");
/// assert_eq!(ty.fields(), ['x', 'y', 'z']);
///
/// let v = ty.construct(&[1.0, 2.0, 3.0]).unwrap();
/// assert_eq!(v.swizzle("zy").unwrap(), Value::from(vec2(3.0, 2.0)));
///
/// assert!(VectorType::new(5).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct VectorType {
    dim: usize,
    swizzles: &'static SwizzleTable,
}

impl VectorType {
    /// Returns the vector type with `dim` components.
    ///
    /// This generates the swizzle table for `dim` if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dimension`] if `dim` is outside of
    /// [`MIN_DIM`][crate::MIN_DIM]`..=`[`MAX_DIM`][crate::MAX_DIM].
    pub fn new(dim: usize) -> Result<Self> {
        Ok(Self {
            dim,
            swizzles: swizzle_table(dim)?,
        })
    }

    /// Returns the number of components of vectors of this type.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the canonical component names, in component order.
    pub fn fields(&self) -> Vec<char> {
        AliasRegistry::DEFAULT
            .primary()
            .map(|table| table.chars().take(self.dim).collect())
            .unwrap_or_default()
    }

    /// Returns the swizzle table shared by all vectors of this type.
    pub fn swizzles(&self) -> &'static SwizzleTable {
        self.swizzles
    }

    /// Creates a vector of this type from its components.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Arity`] if `components` does not contain exactly [`VectorType::dim`]
    /// elements.
    pub fn construct<T: Copy>(&self, components: &[T]) -> Result<AnyVector<T>> {
        if components.len() != self.dim {
            return Err(Error::Arity {
                expected: self.dim,
                found: components.len(),
            });
        }
        AnyVector::from_slice(components)
    }

    /// Creates a vector of this type with every component drawn uniformly from `[0, 1)`.
    pub fn random<T: Real>(&self) -> AnyVector<T> {
        self.random_with(&mut fastrand::Rng::new())
    }

    /// Creates a vector of this type with every component drawn uniformly from `[0, 1)` by `rng`.
    pub fn random_with<T: Real>(&self, rng: &mut fastrand::Rng) -> AnyVector<T> {
        match self.dim {
            2 => AnyVector::Vec2(Vec2::random_with(rng)),
            3 => AnyVector::Vec3(Vec3::random_with(rng)),
            _ => AnyVector::Vec4(Vec4::random_with(rng)),
        }
    }
}

impl PartialEq for VectorType {
    fn eq(&self, other: &Self) -> bool {
        self.dim == other.dim
    }
}

impl Eq for VectorType {}

/// Formats the type name, eg. `Vec3`.
impl fmt::Display for VectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec{}", self.dim)
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn dimensions() {
        for dim in MIN_DIM..=MAX_DIM {
            let ty = VectorType::new(dim).unwrap();
            assert_eq!(ty.dim(), dim);
            assert_eq!(ty.swizzles().dim(), dim);
            assert_eq!(ty, VectorType::new(dim).unwrap());
        }
        assert_eq!(VectorType::new(4).unwrap().fields(), ['x', 'y', 'z', 'w']);
        assert_eq!(VectorType::new(2).unwrap().to_string(), "Vec2");
    }

    #[test]
    fn unsupported_dimensions() {
        for dim in [0, 1, 5, 100] {
            assert_eq!(
                VectorType::new(dim).unwrap_err(),
                Error::Dimension {
                    requested: dim,
                    min: 2,
                    max: 4
                }
            );
        }
    }

    #[test]
    fn construct() {
        let ty = VectorType::new(2).unwrap();
        assert_eq!(ty.construct(&[1.0, 2.0]), Ok(vec2(1.0, 2.0).into()));
        assert_eq!(
            ty.construct(&[1.0, 2.0, 3.0]),
            Err(Error::Arity {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn random() {
        let mut rng = fastrand::Rng::with_seed(0x3024b6663d843ca2);
        for dim in MIN_DIM..=MAX_DIM {
            let ty = VectorType::new(dim).unwrap();
            let v = ty.random_with::<f32>(&mut rng);
            assert_eq!(v.dim(), dim);
            assert!(v.as_slice().iter().all(|c| (0.0..1.0).contains(c)), "{v}");
            assert_eq!(ty.random::<f64>().dim(), dim);
        }
    }
}
