// crates/resource-l10n-core/src/core/arguments.rs
// ============================================================================
// Module: Placeholder Arguments
// Description: Named argument bag consumed by placeholder substitution.
// Purpose: Carry preformatted values keyed by placeholder name.
// Dependencies: std
// ============================================================================

//! ## Overview
//! An [`ArgumentBag`] maps placeholder names (without braces) to display
//! text. Values are formatted with [`fmt::Display`] when inserted. A key may
//! also be present with an absent value, which substitutes as an empty
//! segment. Keys are kept sorted so iteration is deterministic.
//!
//! The [`l10n_args!`](crate::l10n_args) macro builds a bag from
//! `name = value` pairs.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Named placeholder arguments.
///
/// # Invariants
/// - Each key appears once; inserting an existing key replaces its value.
/// - Iteration order is the lexicographic order of keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentBag {
    /// Placeholder name to formatted value (`None` for absent values).
    values: BTreeMap<String, Option<String>>,
}

impl ArgumentBag {
    /// Creates an empty bag.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Inserts a displayable value under `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl fmt::Display) -> &mut Self {
        self.values.insert(key.into(), Some(value.to_string()));
        self
    }

    /// Inserts `key` with an absent value.
    pub fn insert_absent(&mut self, key: impl Into<String>) -> &mut Self {
        self.values.insert(key.into(), None);
        self
    }

    /// Builder form of [`ArgumentBag::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder form accepting an optional value.
    #[must_use]
    pub fn with_optional<V: fmt::Display>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.insert(key, value),
            None => self.insert_absent(key),
        };
        self
    }

    /// Returns the value stored for `key`.
    ///
    /// The outer `Option` reports whether the key exists; the inner one
    /// whether its value is present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.values.get(key).map(Option::as_deref)
    }

    /// Returns true when `key` was supplied.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Iterates over supplied keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    /// Number of supplied keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true when no keys were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ArgumentBag
where
    K: Into<String>,
    V: fmt::Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = Self::new();
        for (key, value) in iter {
            bag.insert(key, value);
        }
        bag
    }
}

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Builds an [`ArgumentBag`] from named arguments.
///
/// ```
/// use resource_l10n_core::l10n_args;
///
/// let args = l10n_args!(name = "Foo", count = 3);
/// assert_eq!(args.get("name"), Some(Some("Foo")));
/// assert_eq!(args.get("count"), Some(Some("3")));
/// ```
#[macro_export]
macro_rules! l10n_args {
    ($( $name:ident = $value:expr ),* $(,)?) => {{
        #[allow(unused_mut, reason = "Empty argument lists never insert.")]
        let mut bag = $crate::ArgumentBag::new();
        $(
            bag.insert(stringify!($name), &$value);
        )*
        bag
    }};
}
