//! Factories, the errors they produce, and the library's own error types.
//!
//! # Examples
//!
//! ```
//! use falta::{Args, Factory};
//!
//! let timeout = Factory::newf("request to %s timed out after %dms");
//! let err = timeout.format(&Args::new().with("billing").with(250));
//!
//! assert_eq!(err.to_string(), "request to billing timed out after 250ms");
//! assert!(timeout.is(&err));
//! assert!(timeout.is(&timeout.archetype()));
//! ```

pub mod alloc_type;
pub mod error;
pub mod factory;
pub mod falta;
pub mod spec;

pub use self::falta::{Cause, Falta};
pub use error::{ConfigError, RenderError};
pub use factory::Factory;
pub use spec::Spec;

/// Result alias for operations that fail with a [`Falta`].
pub type FaltaResult<T> = Result<T, Falta>;
