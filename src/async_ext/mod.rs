//! Async extensions for falta.
//!
//! [`FutureCaptureExt::capture`] is the async counterpart of
//! [`Falta::capture_with`](crate::Falta::capture_with): any error the future
//! resolves to is wrapped with the given instance, exactly once.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! falta = { version = "0.3", features = ["async"] }
//! ```

mod capture_future;
mod future_ext;

pub use capture_future::CaptureFuture;
pub use future_ext::FutureCaptureExt;
