use crate::types::Falta;

/// Conversion into a [`Falta`], either directly or by calling a builder.
///
/// Lets wrappers such as [`CaptureFuture`](crate::async_ext::CaptureFuture)
/// hold either a ready instance or a closure that builds one on failure.
///
/// # Examples
///
/// ```
/// use falta::traits::IntoFalta;
/// use falta::Factory;
///
/// let closed = Factory::newf("channel closed");
/// let eager = closed.archetype().into_falta();
/// let lazy = (|| closed.archetype()).into_falta();
/// assert_eq!(eager.message(), lazy.message());
/// ```
pub trait IntoFalta {
    fn into_falta(self) -> Falta;
}

impl IntoFalta for Falta {
    #[inline]
    fn into_falta(self) -> Falta {
        self
    }
}

impl<F> IntoFalta for F
where
    F: FnOnce() -> Falta,
{
    #[inline]
    fn into_falta(self) -> Falta {
        self()
    }
}
