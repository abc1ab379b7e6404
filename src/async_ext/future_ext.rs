//! Extension trait for `Future<Output = Result<T, E>>`.

use core::error::Error;
use core::future::Future;

use crate::types::Falta;

use super::capture_future::CaptureFuture;

/// Captures the error of an async operation with a [`Falta`] identity.
///
/// # Examples
///
/// ```rust
/// use falta::async_ext::FutureCaptureExt;
/// use falta::{Args, Factory};
///
/// async fn example() {
///     let sync_failed = Factory::newf("sync %s failed");
///     let result = async { Err::<(), _>(std::io::Error::other("timeout")) }
///         .capture(sync_failed.format(&Args::from(["inbox"])))
///         .await;
///
///     let err = result.unwrap_err();
///     assert_eq!(err.message(), "sync inbox failed: timeout");
///     assert!(sync_failed.is(&err));
/// }
/// ```
pub trait FutureCaptureExt<T, E>: Future<Output = Result<T, E>> + Sized
where
    E: Error + Send + Sync + 'static,
{
    /// Wraps the future's error with `falta`.
    fn capture(self, falta: Falta) -> CaptureFuture<Self, Falta> {
        CaptureFuture::new(self, falta)
    }

    /// Wraps the future's error with a lazily built `Falta`.
    ///
    /// The closure only runs when the future resolves to an error.
    fn capture_with<F>(self, f: F) -> CaptureFuture<Self, F>
    where
        F: FnOnce() -> Falta;
}

impl<Fut, T, E> FutureCaptureExt<T, E> for Fut
where
    Fut: Future<Output = Result<T, E>>,
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn capture_with<F>(self, f: F) -> CaptureFuture<Self, F>
    where
        F: FnOnce() -> Falta,
    {
        CaptureFuture::new(self, f)
    }
}
