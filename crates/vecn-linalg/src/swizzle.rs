//! GLSL-style swizzling.
//!
//! A *swizzle* reads an ordered selection of a vector's components, where every component may be
//! selected any number of times: `v.yx()` swaps the components of a 2D vector, `v.xxx()` repeats
//! the first component three times, and `v.bgr()` reverses the color channels of an RGB vector.
//!
//! For a vector with `N` components and every table of the [`AliasRegistry`], all names of length
//! 1 to `N` are generated. Names of length 1 yield the component itself, longer names yield a new
//! vector with as many components as the name has characters.
//!
//! Swizzles are available in two forms:
//!
//! - As methods on [`Vector`], generated at compile time for the `xyzw`, `rgba` and `stpq` tables.
//! - Through [`Vector::swizzle`], which looks the name up in a [`SwizzleTable`] at run time. This
//!   also covers the `0123` index table, whose names cannot be method names.
//!
//! # Name collisions
//!
//! When two alias tables produce the same name, the table registered *first* wins and the later
//! definition is skipped. The built-in tables use disjoint characters, so this only matters for
//! custom registries passed to [`SwizzleTable::generate`].
//!
//! # Limits
//!
//! The number of names grows as `N^k` per table for names of length `k`, so generation is bounded
//! by [`MAX_DIM`]: a 4D vector has 4 + 16 + 64 + 256 = 340 names per alias table.

use std::{
    collections::{hash_map::Entry, HashMap},
    sync::OnceLock,
};

use itertools::Itertools;
use tinyvec::ArrayVec;
use vecn_macros::swizzles;

use crate::{
    alias::AliasRegistry,
    error::{Error, Result},
    vec2, vec3, vec4, AnyVector, Value, Vector, MAX_DIM, MIN_DIM,
};

swizzles!(2, ["xyzw", "rgba", "stpq"]);
swizzles!(3, ["xyzw", "rgba", "stpq"]);
swizzles!(4, ["xyzw", "rgba", "stpq"]);

/// Component indices selected by a swizzle, in selection order.
pub type Indices = ArrayVec<[u8; MAX_DIM]>;

/// Lookup table from swizzle name to the component indices it selects.
#[derive(Debug, Clone)]
pub struct SwizzleTable {
    dim: usize,
    entries: Vec<(String, Indices)>,
    by_name: HashMap<String, usize>,
}

impl SwizzleTable {
    /// Generates the swizzle table for vectors with `dim` components from `registry`.
    ///
    /// Names are produced table by table, in registration order, and within each table by
    /// increasing length and then in lexicographic order of the selected indices. If a name was
    /// already produced by an earlier table, the earlier definition is kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dimension`] if `dim` is 0, larger than [`MAX_DIM`], or larger than one of
    /// the registry's alias tables.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn_linalg::{alias::AliasRegistry, swizzle::SwizzleTable};
    /// let table = SwizzleTable::generate(2, &AliasRegistry::DEFAULT).unwrap();
    /// assert_eq!(table.len(), 4 * (2 + 4));
    /// assert_eq!(table.get("yx").unwrap().as_slice(), &[1, 0]);
    /// assert_eq!(table.get("10").unwrap().as_slice(), &[1, 0]);
    /// assert!(table.get("xz").is_none());
    /// ```
    pub fn generate(dim: usize, registry: &AliasRegistry) -> Result<Self> {
        let max = MAX_DIM.min(registry.max_dim());
        if dim == 0 || dim > max {
            return Err(Error::Dimension {
                requested: dim,
                min: 1,
                max,
            });
        }
        Ok(Self::build(dim, registry))
    }

    fn build(dim: usize, registry: &AliasRegistry) -> Self {
        let mut entries = Vec::new();
        let mut by_name = HashMap::new();
        for table in registry.tables() {
            let chars = table.chars().collect::<Vec<_>>();
            for len in 1..=dim {
                for indices in itertools::repeat_n(0..dim, len).multi_cartesian_product() {
                    let name = indices.iter().map(|&i| chars[i]).collect::<String>();
                    match by_name.entry(name) {
                        Entry::Occupied(entry) => {
                            log::trace!(
                                "skipping swizzle '{}' from alias table '{}' (already defined)",
                                entry.key(),
                                table.name(),
                            );
                        }
                        Entry::Vacant(entry) => {
                            let indices = indices.iter().map(|&i| i as u8).collect::<Indices>();
                            entries.push((entry.key().clone(), indices));
                            entry.insert(entries.len() - 1);
                        }
                    }
                }
            }
        }

        log::debug!("generated {} swizzles for Vec{dim}", entries.len());
        Self {
            dim,
            entries,
            by_name,
        }
    }

    /// Returns the number of components of the vectors this table applies to.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the number of swizzle names in this table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the component indices selected by the swizzle `name`.
    pub fn get(&self, name: &str) -> Option<&Indices> {
        self.by_name.get(name).map(|&i| &self.entries[i].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Iterates over all swizzle names, in generation order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Iterates over all swizzle names and their component indices, in generation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Indices)> + '_ {
        self.entries.iter().map(|(name, indices)| (name.as_str(), indices))
    }
}

/// Returns the swizzle table of the built-in alias tables for vectors with `dim` components.
///
/// Each table is generated on first use and shared afterwards.
///
/// # Errors
///
/// Returns [`Error::Dimension`] if `dim` is outside of [`MIN_DIM`]`..=`[`MAX_DIM`].
pub fn swizzle_table(dim: usize) -> Result<&'static SwizzleTable> {
    static TABLES: [OnceLock<SwizzleTable>; MAX_DIM - MIN_DIM + 1] =
        [OnceLock::new(), OnceLock::new(), OnceLock::new()];

    if !(MIN_DIM..=MAX_DIM).contains(&dim) {
        return Err(Error::Dimension {
            requested: dim,
            min: MIN_DIM,
            max: MAX_DIM,
        });
    }
    Ok(TABLES[dim - MIN_DIM].get_or_init(|| SwizzleTable::build(dim, &AliasRegistry::DEFAULT)))
}

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Looks up the swizzle `name` and applies it to `self`.
    ///
    /// Unlike the generated accessor methods, this accepts names from every alias table, including
    /// the numeric `0123` table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSwizzleName`] if `name` does not select components of this vector,
    /// and [`Error::Dimension`] if `N` is not a supported dimension.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn_linalg::*;
    /// let v = vec3(1.0, 2.0, 3.0);
    /// assert_eq!(v.swizzle("z").unwrap(), Value::Scalar(3.0));
    /// assert_eq!(v.swizzle("210").unwrap(), Value::from(vec3(3.0, 2.0, 1.0)));
    /// assert_eq!(v.swizzle("bg").unwrap(), Value::from(v.bg()));
    /// assert!(v.swizzle("xw").is_err());
    /// ```
    pub fn swizzle(&self, name: &str) -> Result<Value<T>> {
        let table = swizzle_table(N)?;
        let indices = table.get(name).ok_or_else(|| Error::InvalidSwizzleName {
            name: name.to_string(),
            dim: N,
        })?;
        Ok(self.select(indices))
    }

    fn select(&self, indices: &[u8]) -> Value<T> {
        let c = |i: u8| self[usize::from(i)];
        match *indices {
            [i] => Value::Scalar(c(i)),
            [i, j] => Value::Vector(AnyVector::Vec2(vec2(c(i), c(j)))),
            [i, j, k] => Value::Vector(AnyVector::Vec3(vec3(c(i), c(j), c(k)))),
            [i, j, k, l] => Value::Vector(AnyVector::Vec4(vec4(c(i), c(j), c(k), c(l)))),
            _ => unreachable!("swizzles select between 1 and {MAX_DIM} components"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::{alias::AliasTable, Vec2, Vec3, Vec4};

    #[test]
    fn table_sizes() {
        for (dim, per_table) in [(2, 2 + 4), (3, 3 + 9 + 27), (4, 4 + 16 + 64 + 256)] {
            let table = swizzle_table(dim).unwrap();
            assert_eq!(table.dim(), dim);
            assert_eq!(table.len(), 4 * per_table);
            assert_eq!(table.names().collect::<HashSet<_>>().len(), table.len());
        }
    }

    #[test]
    fn unsupported_dims() {
        for dim in [0, 1, 5, 6] {
            assert!(matches!(
                swizzle_table(dim),
                Err(Error::Dimension { requested, .. }) if requested == dim
            ));
        }
        assert!(SwizzleTable::generate(5, &AliasRegistry::DEFAULT).is_err());
        assert_eq!(SwizzleTable::generate(1, &AliasRegistry::DEFAULT).unwrap().len(), 4);
    }

    #[test]
    fn generation_order() {
        let table = swizzle_table(2).unwrap();
        let names = table.names().take(8).collect::<Vec<_>>();
        assert_eq!(names, ["x", "y", "xx", "xy", "yx", "yy", "r", "g"]);
        assert_eq!(table.names().last(), Some("11"));
    }

    #[test]
    fn generated_methods_match_table() {
        fn check(dim: usize, generated: &[&str]) {
            let table = swizzle_table(dim).unwrap();
            let identifiers = table
                .names()
                .filter(|name| name.chars().all(|c| c.is_ascii_alphabetic()))
                .collect::<Vec<_>>();
            assert_eq!(identifiers, generated);
        }
        check(2, Vec2::<f32>::SWIZZLE_NAMES);
        check(3, Vec3::<f32>::SWIZZLE_NAMES);
        check(4, Vec4::<f32>::SWIZZLE_NAMES);
    }

    #[test]
    fn first_registered_wins() {
        let registry = AliasRegistry::new(vec![
            AliasTable::new("first", "xyzw"),
            AliasTable::new("second", "yxwz"),
        ]);
        let table = SwizzleTable::generate(2, &registry).unwrap();
        // every name of the second table was already produced by the first one
        assert_eq!(table.len(), 2 + 4);
        assert_eq!(table.get("y").unwrap().as_slice(), &[1]);
        assert_eq!(table.get("xy").unwrap().as_slice(), &[0, 1]);
    }

    #[test]
    fn short_alias_table() {
        let registry = AliasRegistry::new(vec![
            AliasTable::POSITION,
            AliasTable::new("short", "uv"),
        ]);
        assert_eq!(
            SwizzleTable::generate(3, &registry).unwrap_err(),
            Error::Dimension {
                requested: 3,
                min: 1,
                max: 2
            }
        );
        assert_eq!(SwizzleTable::generate(2, &registry).unwrap().len(), 2 * 6);
    }

    #[test]
    fn dynamic_swizzle() {
        let v = vec4(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.swizzle("w"), Ok(Value::Scalar(4.0)));
        assert_eq!(v.swizzle("3"), Ok(Value::Scalar(4.0)));
        assert_eq!(v.swizzle("xyz"), Ok(Value::from(vec3(1.0, 2.0, 3.0))));
        assert_eq!(v.swizzle("qpts"), Ok(Value::from(vec4(4.0, 3.0, 2.0, 1.0))));
        assert_eq!(v.swizzle("0000"), Ok(Value::from(Vec4::splat(1.0))));

        for name in ["", "xyzwx", "xr", "v", "04"] {
            assert_eq!(
                v.swizzle(name),
                Err(Error::InvalidSwizzleName {
                    name: name.to_string(),
                    dim: 4
                })
            );
        }
        assert_eq!(
            vec2(1.0, 2.0).swizzle("z"),
            Err(Error::InvalidSwizzleName {
                name: "z".to_string(),
                dim: 2
            })
        );
    }

    #[test]
    fn generated_methods() {
        let v = vec4(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.x(), 1.0);
        assert_eq!(v.a(), 4.0);
        assert_eq!(v.p(), 3.0);
        assert_eq!(v.xyz().to_array(), [1.0, 2.0, 3.0]);
        assert_eq!(v.wzyx(), [4.0, 3.0, 2.0, 1.0]);
        assert_eq!(v.rgb().bgr(), [3.0, 2.0, 1.0]);
        assert_eq!(v.xy().yx(), vec2(v.y(), v.x()));
        assert_eq!(v.ss(), [1.0, 1.0]);
        assert_eq!(vec3(5, 6, 7).yyy(), [6, 6, 6]);
    }

    #[test]
    fn swizzles_read_current_values() {
        let v = vec3(1.0, 2.0, 3.0);
        let w = v + 1.0;
        assert_eq!(v.zx(), [3.0, 1.0]);
        assert_eq!(w.zx(), [4.0, 2.0]);
    }
}
