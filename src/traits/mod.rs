//! Extension traits that bring factory identity to plain `Result`s and errors.
//!
//! - [`ResultExt`]: wrap the error of any `Result` with a [`Falta`](crate::Falta)
//! - [`ErrorIdentityExt`]: identity checks as methods on any error type
//! - [`IntoFalta`]: a ready instance or a closure that builds one
//!
//! # Examples
//!
//! ```
//! use falta::traits::{ErrorIdentityExt, ResultExt};
//! use falta::{Args, Factory};
//!
//! let parse_failed = Factory::newf("cannot parse %s");
//! let result = "x1".parse::<u32>().or_falta(&parse_failed.format(&Args::from(["x1"])));
//!
//! let err = result.unwrap_err();
//! assert!(err.produced_by(&parse_failed));
//! ```

pub mod identity_ext;
pub mod into_falta;
pub mod result_ext;

pub use identity_ext::ErrorIdentityExt;
pub use into_falta::IntoFalta;
pub use result_ext::ResultExt;
