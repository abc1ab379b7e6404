//! Errors reported by the library itself.
//!
//! [`ConfigError`] covers programmer mistakes that are detected while a factory
//! is being declared or an instance is being annotated. [`RenderError`] covers
//! failures that depend on the data handed to a factory at the call site.

use core::fmt::{self, Display};

use crate::render::Dialect;
use crate::types::alloc_type::String;

/// A factory or annotation was configured incorrectly.
///
/// These are bugs in the calling program rather than runtime conditions. Factories
/// are normally declared once at startup, so most callers simply `expect` them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// The named-dialect format spec could not be parsed.
    InvalidTemplate {
        /// Byte offset of the offending action in the spec.
        offset: usize,
        reason: &'static str,
    },
    /// Two factories with different rendering dialects were combined.
    DialectMismatch { left: Dialect, right: Dialect },
    /// A fixed message or annotation contains substitution syntax.
    ForbiddenVerbs { text: String },
    /// A positional factory was declared over an input without positional values.
    PositionalInput,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTemplate { offset, reason } => {
                write!(f, "falta: invalid template at byte {offset}: {reason}")
            },
            Self::DialectMismatch { left, right } => write!(
                f,
                "falta: {left} factories can only be extended by other {left} factories, got {right}"
            ),
            Self::ForbiddenVerbs { text } => {
                write!(f, "falta: string \"{text}\" has substitution verbs")
            },
            Self::PositionalInput => {
                f.write_str("falta: positional factories render from positional arguments")
            },
        }
    }
}

impl core::error::Error for ConfigError {}

/// A factory could not render its message from the input it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RenderError {
    /// A placeholder referenced a field the input does not expose.
    MissingField { field: String },
}

impl Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => {
                write!(f, "falta: cannot execute template: no field \"{field}\" in input")
            },
        }
    }
}

impl core::error::Error for RenderError {}
