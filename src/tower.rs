//! Tower integration for falta.
//!
//! [`CaptureLayer`] wraps every error a service produces with a fixed
//! [`Falta`], so callers can recognise failures of that service by identity.
//!
//! # Feature Flag
//!
//! Requires the `tower` feature:
//!
//! ```toml
//! [dependencies]
//! falta = { version = "0.3", features = ["tower"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use falta::tower::CaptureLayer;
//! use tower::ServiceBuilder;
//!
//! static UPSTREAM: LazyLock<Factory> = LazyLock::new(|| Factory::newf("upstream %s failed"));
//!
//! let service = ServiceBuilder::new()
//!     .layer(CaptureLayer::new(falta!(UPSTREAM, "billing")))
//!     .service(my_service);
//! ```

use core::error::Error;
use core::task::{Context, Poll};

use tower::{Layer, Service};

use crate::async_ext::CaptureFuture;
use crate::types::Falta;

/// A Tower [`Layer`] that wraps service errors with a [`Falta`].
#[derive(Clone, Debug)]
pub struct CaptureLayer {
    falta: Falta,
}

impl CaptureLayer {
    #[inline]
    pub const fn new(falta: Falta) -> Self {
        Self { falta }
    }

    /// Returns the instance errors are wrapped with.
    #[inline]
    pub const fn falta(&self) -> &Falta {
        &self.falta
    }
}

impl<S> Layer<S> for CaptureLayer {
    type Service = CaptureService<S>;

    #[inline]
    fn layer(&self, inner: S) -> Self::Service {
        CaptureService { inner, falta: self.falta.clone() }
    }
}

/// A Tower [`Service`] that wraps errors with a [`Falta`].
///
/// Created by [`CaptureLayer`] or [`ServiceCaptureExt::capture_errors`].
#[derive(Clone, Debug)]
pub struct CaptureService<S> {
    inner: S,
    falta: Falta,
}

impl<S> CaptureService<S> {
    #[inline]
    pub const fn new(inner: S, falta: Falta) -> Self {
        Self { inner, falta }
    }

    #[inline]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    #[inline]
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }

    #[inline]
    pub const fn falta(&self) -> &Falta {
        &self.falta
    }
}

impl<S, Request> Service<Request> for CaptureService<S>
where
    S: Service<Request>,
    S::Error: Error + Send + Sync + 'static,
{
    type Response = S::Response;
    type Error = Falta;
    type Future = CaptureFuture<S::Future, Falta>;

    #[inline]
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(|e| self.falta.wrap(e))
    }

    #[inline]
    fn call(&mut self, request: Request) -> Self::Future {
        CaptureFuture::new(self.inner.call(request), self.falta.clone())
    }
}

/// Extension trait for wrapping services with a [`Falta`] identity.
pub trait ServiceCaptureExt<Request>: Service<Request> + Sized {
    fn capture_errors(self, falta: Falta) -> CaptureService<Self> {
        CaptureService::new(self, falta)
    }
}

impl<S, Request> ServiceCaptureExt<Request> for S where S: Service<Request> {}
