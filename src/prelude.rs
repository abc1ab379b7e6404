//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use falta::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`args!`], [`falta!`], [`m!`], [`impl_fields!`]
//! - **Types**: [`Factory`], [`Falta`], [`Args`], [`M`]
//! - **Traits**: [`ResultExt`], [`ErrorIdentityExt`], [`Fields`]
//!
//! # Examples
//!
//! ```
//! use falta::prelude::*;
//!
//! fn read_config(missing: &Factory, path: &str) -> FaltaResult<String> {
//!     std::fs::read_to_string(path).or_falta_with(|| falta!(missing, path))
//! }
//!
//! let missing = Factory::newf("config %q unavailable");
//! let err = read_config(&missing, "nowhere.toml").unwrap_err();
//! assert!(err.produced_by(&missing));
//! ```

// Macros
pub use crate::{args, falta, impl_fields, m};

// Core types
pub use crate::render::{Arg, Args, Fields, M};
pub use crate::types::{Factory, Falta, FaltaResult};

// Identity
pub use crate::identity::is_match;

// Traits
pub use crate::traits::{ErrorIdentityExt, ResultExt};
