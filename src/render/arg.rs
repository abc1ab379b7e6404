//! Dynamically typed argument values.
//!
//! Positional rendering needs to know *what* each argument is to apply verbs
//! like `%d` or `%q`, and named rendering needs something displayable to put in
//! a field. [`Arg`] covers both.

use core::fmt::{self, Display};

use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::alloc_type::{Cow, String, ToString};

/// A single rendering argument.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Str(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Char(char),
}

impl Arg {
    /// Captures any displayable value as a string argument.
    #[inline]
    pub fn display<D: Display + ?Sized>(value: &D) -> Self {
        Self::Str(value.to_string())
    }

    /// Name of the argument's type as it appears in printf diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Float(_) => "float64",
            Self::Bool(_) => "bool",
            Self::Char(_) => "int32",
        }
    }

    #[inline]
    pub(crate) fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(v) => Display::fmt(v, f),
            Self::Uint(v) => Display::fmt(v, f),
            Self::Float(v) => Display::fmt(v, f),
            Self::Bool(v) => Display::fmt(v, f),
            Self::Char(v) => Display::fmt(v, f),
        }
    }
}

macro_rules! arg_from {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Arg {
                #[inline]
                fn from(value: $source) -> Self {
                    Self::$variant(value as $target)
                }
            }
        )+
    };
}

arg_from!(Int as i64: i8, i16, i32, i64, isize);
arg_from!(Uint as u64: u8, u16, u32, u64, usize);
arg_from!(Float as f64: f32, f64);

impl From<bool> for Arg {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<char> for Arg {
    #[inline]
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<&str> for Arg {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

impl From<String> for Arg {
    #[inline]
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for Arg {
    #[inline]
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<Cow<'_, str>> for Arg {
    #[inline]
    fn from(value: Cow<'_, str>) -> Self {
        Self::Str(value.into_owned())
    }
}

/// An ordered list of positional arguments.
///
/// Most argument lists are short, so the first few live inline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args(SmallVec<[Arg; 4]>);

impl Args {
    #[inline]
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// Appends an argument, returning the list for chaining.
    #[inline]
    pub fn with<A: Into<Arg>>(mut self, arg: A) -> Self {
        self.0.push(arg.into());
        self
    }

    #[inline]
    pub fn push<A: Into<Arg>>(&mut self, arg: A) {
        self.0.push(arg.into());
    }

    #[inline]
    pub fn as_slice(&self) -> &[Arg] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<A: Into<Arg>> FromIterator<A> for Args {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<A: Into<Arg>, const N: usize> From<[A; N]> for Args {
    fn from(values: [A; N]) -> Self {
        values.into_iter().collect()
    }
}

impl core::ops::Deref for Args {
    type Target = [Arg];

    #[inline]
    fn deref(&self) -> &[Arg] {
        &self.0
    }
}
