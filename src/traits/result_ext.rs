//! Extension trait for wrapping `Result` errors with a [`Falta`].

use core::error::Error;

use crate::types::Falta;

/// Adds [`Falta`] wrapping to `Result` types without `.map_err()` boilerplate.
///
/// # Examples
///
/// ```
/// use falta::traits::ResultExt;
/// use falta::{Args, Factory, Falta};
///
/// let load_failed = Factory::newf("loading %s");
///
/// fn load(factory: &Factory, path: &str) -> Result<String, Falta> {
///     std::fs::read_to_string(path).or_falta_with(|| factory.format(&Args::from([path])))
/// }
///
/// let err = load(&load_failed, "missing.toml").unwrap_err();
/// assert!(err.message().starts_with("loading missing.toml: "));
/// ```
pub trait ResultExt<T, E> {
    /// Wraps the error with `falta`.
    fn or_falta(self, falta: &Falta) -> Result<T, Falta>;

    /// Wraps the error with a lazily built `Falta`.
    ///
    /// The closure only runs when the `Result` is an `Err`.
    fn or_falta_with<F>(self, f: F) -> Result<T, Falta>
    where
        F: FnOnce() -> Falta;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn or_falta(self, falta: &Falta) -> Result<T, Falta> {
        falta.capture(self)
    }

    #[inline]
    fn or_falta_with<F>(self, f: F) -> Result<T, Falta>
    where
        F: FnOnce() -> Falta,
    {
        self.map_err(|err| f().wrap(err))
    }
}
