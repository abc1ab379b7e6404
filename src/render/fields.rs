//! String-keyed field lookup used by the named dialect.

use core::borrow::Borrow;
use core::fmt::Display;

use crate::render::{Arg, Args};
use crate::types::alloc_type::{BTreeMap, String, ToString};

/// A value whose fields can be looked up by name.
///
/// Records usually bind their fields at compile time through
/// [`impl_fields!`](crate::impl_fields); maps and [`Args`] implement it directly.
///
/// # Examples
///
/// ```
/// use falta::Fields;
///
/// struct Circle {
///     radius: f64,
/// }
///
/// impl Fields for Circle {
///     fn field(&self, name: &str) -> Option<String> {
///         match name {
///             "Radius" => Some(self.radius.to_string()),
///             _ => None,
///         }
///     }
/// }
///
/// assert_eq!(Circle { radius: -1.0 }.field("Radius").as_deref(), Some("-1"));
/// ```
pub trait Fields {
    /// Whether this input carries positional values.
    ///
    /// Only such inputs can back a [`Dialect::Positional`](crate::Dialect) factory.
    const POSITIONAL: bool = false;

    /// Returns the rendered value of `name`, or `None` if there is no such field.
    fn field(&self, name: &str) -> Option<String>;

    /// Returns the values consumed by the positional dialect.
    ///
    /// Only [`Args`] provides them.
    #[inline]
    fn positional(&self) -> &[Arg] {
        &[]
    }
}

impl<T: Fields + ?Sized> Fields for &T {
    const POSITIONAL: bool = T::POSITIONAL;

    #[inline]
    fn field(&self, name: &str) -> Option<String> {
        (**self).field(name)
    }

    #[inline]
    fn positional(&self) -> &[Arg] {
        (**self).positional()
    }
}

/// Positional arguments double as a record whose fields are named `0`, `1`, ...
impl Fields for Args {
    const POSITIONAL: bool = true;

    fn field(&self, name: &str) -> Option<String> {
        let index: usize = name.parse().ok()?;
        self.get(index).map(ToString::to_string)
    }

    #[inline]
    fn positional(&self) -> &[Arg] {
        self.as_slice()
    }
}

impl<K, V> Fields for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: Display,
{
    #[inline]
    fn field(&self, name: &str) -> Option<String> {
        self.get(name).map(ToString::to_string)
    }
}

#[cfg(feature = "std")]
impl<K, V, S> Fields for std::collections::HashMap<K, V, S>
where
    K: Borrow<str> + Eq + core::hash::Hash,
    V: Display,
    S: core::hash::BuildHasher,
{
    #[inline]
    fn field(&self, name: &str) -> Option<String> {
        self.get(name).map(ToString::to_string)
    }
}

/// Top-level object members are fields; strings render without quotes.
#[cfg(feature = "serde")]
impl Fields for serde_json::Value {
    fn field(&self, name: &str) -> Option<String> {
        match self.get(name)? {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Convenience record for factories that take a string-keyed map.
///
/// Build one with the [`m!`](crate::m) macro.
pub type M = BTreeMap<String, Arg>;
