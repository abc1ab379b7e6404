//! Future wrapper that captures errors with a [`Falta`] identity.

use core::error::Error;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::traits::IntoFalta;
use crate::types::Falta;

pin_project! {
    /// Wraps the error of an inner future with a [`Falta`].
    ///
    /// When built from a closure, the instance is only built if the inner
    /// future resolves to an error.
    ///
    /// # Cancel Safety
    ///
    /// `CaptureFuture` is cancel-safe if the inner future is cancel-safe.
    #[must_use = "futures do nothing unless polled"]
    pub struct CaptureFuture<Fut, C> {
        #[pin]
        future: Fut,
        falta: Option<C>,
    }
}

impl<Fut, C> CaptureFuture<Fut, C> {
    #[inline]
    pub fn new(future: Fut, falta: C) -> Self {
        Self { future, falta: Some(falta) }
    }
}

impl<Fut, C, T, E> Future for CaptureFuture<Fut, C>
where
    Fut: Future<Output = Result<T, E>>,
    C: IntoFalta,
    E: Error + Send + Sync + 'static,
{
    type Output = Result<T, Falta>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|res| {
            res.map_err(|err| {
                let falta = this
                    .falta
                    .take()
                    .expect("CaptureFuture polled after completion; this is a bug");
                falta.into_falta().wrap(err)
            })
        })
    }
}

impl<Fut, C, T, E> FusedFuture for CaptureFuture<Fut, C>
where
    Fut: FusedFuture<Output = Result<T, E>>,
    C: IntoFalta,
    E: Error + Send + Sync + 'static,
{
    fn is_terminated(&self) -> bool {
        self.falta.is_none() || self.future.is_terminated()
    }
}
