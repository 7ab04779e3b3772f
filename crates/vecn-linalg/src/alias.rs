//! Component naming domains.
//!
//! An [`AliasTable`] assigns one character to every component position. All tables of an
//! [`AliasRegistry`] name the *same* components: `v.x`, `v.r`, `v.s` and `v.0` all refer to the
//! first component of `v`. The registry is plain static configuration, consumed by the swizzle
//! generator in [`crate::swizzle`].

use std::borrow::Cow;

/// An ordered sequence of component names, one character per component position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasTable {
    name: &'static str,
    chars: &'static str,
}

impl AliasTable {
    /// Position names: `x`, `y`, `z`, `w`.
    pub const POSITION: Self = Self::new("position", "xyzw");
    /// Color channel names: `r`, `g`, `b`, `a`.
    pub const COLOR: Self = Self::new("color", "rgba");
    /// Texture coordinate names: `s`, `t`, `p`, `q`.
    pub const TEXTURE: Self = Self::new("texture", "stpq");
    /// Plain index names: `0`, `1`, `2`, `3`.
    pub const INDEX: Self = Self::new("index", "0123");

    /// Creates an alias table called `name`, where the `i`th character of `chars` names the `i`th
    /// component.
    pub const fn new(name: &'static str, chars: &'static str) -> Self {
        Self { name, chars }
    }

    /// Returns the descriptive name of this table (eg. `"color"`).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the component names as a string.
    pub fn as_str(&self) -> &'static str {
        self.chars
    }

    /// Iterates over the component names in position order.
    pub fn chars(&self) -> impl Iterator<Item = char> {
        self.chars.chars()
    }

    /// Returns the number of component positions this table can name.
    pub fn len(&self) -> usize {
        self.chars.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns the name of the component at `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn_linalg::alias::AliasTable;
    /// assert_eq!(AliasTable::COLOR.char_at(2), Some('b'));
    /// assert_eq!(AliasTable::COLOR.char_at(4), None);
    /// ```
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.chars().nth(index)
    }

    /// Returns the component position named by `c` in this table.
    pub fn position(&self, c: char) -> Option<usize> {
        self.chars.chars().position(|ch| ch == c)
    }

    /// Returns whether every name in this table can be used as (part of) a Rust identifier.
    ///
    /// Only such tables get generated accessor methods; the others are reachable through
    /// [`Vector::swizzle`][crate::Vector::swizzle].
    pub fn is_identifier(&self) -> bool {
        self.chars.chars().all(|c| c.is_ascii_alphabetic() || c == '_')
    }
}

/// An ordered list of [`AliasTable`]s.
///
/// Registration order matters when two tables produce the same swizzle name: the table registered
/// first wins, and the later definition is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRegistry {
    tables: Cow<'static, [AliasTable]>,
}

impl AliasRegistry {
    /// The registry used for all built-in vector types: position, color, texture coordinate and
    /// index names, in that order.
    pub const DEFAULT: Self = Self {
        tables: Cow::Borrowed(&[
            AliasTable::POSITION,
            AliasTable::COLOR,
            AliasTable::TEXTURE,
            AliasTable::INDEX,
        ]),
    };

    /// Creates a registry from a list of tables, in registration order.
    pub fn new(tables: Vec<AliasTable>) -> Self {
        Self {
            tables: Cow::Owned(tables),
        }
    }

    /// Returns the registered tables, in registration order.
    pub fn tables(&self) -> &[AliasTable] {
        &self.tables
    }

    /// Returns the first registered table, whose names are the canonical component names.
    pub fn primary(&self) -> Option<&AliasTable> {
        self.tables.first()
    }

    /// Returns the largest dimension every table of this registry can name.
    pub fn max_dim(&self) -> usize {
        self.tables.iter().map(AliasTable::len).min().unwrap_or(0)
    }

    /// Resolves a single component name to its position.
    ///
    /// If several tables use the character `c`, the first registered one decides.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn_linalg::alias::AliasRegistry;
    /// let registry = AliasRegistry::DEFAULT;
    /// assert_eq!(registry.component('y'), Some(1));
    /// assert_eq!(registry.component('a'), Some(3));
    /// assert_eq!(registry.component('2'), Some(2));
    /// assert_eq!(registry.component('m'), None);
    /// ```
    pub fn component(&self, c: char) -> Option<usize> {
        self.tables.iter().find_map(|table| table.position(c))
    }
}

impl Default for AliasRegistry {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_DIM;

    #[test]
    fn default_tables_cover_max_dim() {
        assert_eq!(AliasRegistry::DEFAULT.max_dim(), MAX_DIM);
        assert_eq!(AliasRegistry::DEFAULT.primary(), Some(&AliasTable::POSITION));
        for table in AliasRegistry::DEFAULT.tables() {
            assert_eq!(table.len(), MAX_DIM, "{}", table.name());
        }
    }

    #[test]
    fn identifiers() {
        assert!(AliasTable::POSITION.is_identifier());
        assert!(AliasTable::COLOR.is_identifier());
        assert!(AliasTable::TEXTURE.is_identifier());
        assert!(!AliasTable::INDEX.is_identifier());
    }

    #[test]
    fn first_registered_wins() {
        let registry = AliasRegistry::new(vec![
            AliasTable::new("a", "abcd"),
            AliasTable::new("b", "dcba"),
        ]);
        assert_eq!(registry.component('a'), Some(0));
        assert_eq!(registry.component('d'), Some(3));
    }
}
