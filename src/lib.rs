//! Reusable, parameterized error factories with stable identity.
//!
//! A [`Factory`] is declared once with a format spec. Invoking it renders a
//! [`Falta`] whose message comes from the arguments, while its identity comes
//! from the spec, so downstream code recognises the error without matching on
//! text. Instances can be wrapped around a cause, annotated with context, and
//! factories can be combined with [`Factory::extend`].
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `falta::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Named Templates
//!
//! ```
//! use falta::{impl_fields, Factory};
//!
//! struct Circle {
//!     radius: f64,
//! }
//!
//! impl_fields!(Circle { "Radius" => radius });
//!
//! let invalid = Factory::<Circle>::new("invalid circle: radius ({{.Radius}}) <= 0").unwrap();
//!
//! let err = invalid.error(&Circle { radius: -1.0 }).unwrap();
//! assert_eq!(err.to_string(), "invalid circle: radius (-1) <= 0");
//! assert!(invalid.is(&err));
//! ```
//!
//! ## Printf-Style Factories
//!
//! ```
//! use falta::{falta, is_match, Factory};
//!
//! let described = Factory::newf("the %s is %s");
//!
//! let err = falta!(described, "dog", "black");
//! assert_eq!(err.message(), "the dog is black");
//!
//! // Identity survives wrapping and annotation.
//! let io = std::io::Error::other("disk full");
//! let wrapped = err.annotate("while saving").unwrap().wrap(io);
//! assert_eq!(wrapped.message(), "the dog is black: while saving: disk full");
//! assert!(is_match(&wrapped, &described.archetype()));
//! ```
//!
//! ## Capturing Errors at Scope Exit
//!
//! ```
//! use falta::{falta, Factory, Falta};
//!
//! fn parse_port(factory: &Factory, raw: &str) -> Result<u16, Falta> {
//!     falta!(factory, raw).capture_with(|| {
//!         let port: u16 = raw.trim().parse()?;
//!         Ok::<_, std::num::ParseIntError>(port)
//!     })
//! }
//!
//! let bad_port = Factory::newf("bad port %q");
//! assert_eq!(parse_port(&bad_port, "8080").unwrap(), 8080);
//! let err = parse_port(&bad_port, "http").unwrap_err();
//! assert!(bad_port.is(&err));
//! ```
#![cfg_attr(not(any(feature = "std", test)), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Identity comparison across error chains
pub mod identity;
/// Input building and rendering macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Positional and named rendering strategies
pub mod render;
/// Extension traits for results and errors
pub mod traits;
/// Factories, error instances and the library's own errors
pub mod types;

/// Async extensions for capturing errors (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Tower integration - Layer and Service implementations (requires `tower` feature)
#[cfg(feature = "tower")]
pub mod tower;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use identity::{is_match, sources, Sources};
pub use render::{Arg, Args, Dialect, Fields, M};
pub use traits::{ErrorIdentityExt, IntoFalta, ResultExt};
pub use types::{Cause, ConfigError, Factory, Falta, FaltaResult, RenderError, Spec};

#[doc(hidden)]
pub mod __private {
    pub use crate::types::alloc_type::{String, ToString};
}
