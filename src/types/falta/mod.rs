//! The error value produced by a [`Factory`](crate::Factory).
//!
//! A [`Falta`] carries three things:
//! - the producing factory's [`Spec`], which is its identity
//! - the rendered message
//! - an optional wrapped cause
//!
//! Every transformation ([`wrap`](Falta::wrap), [`annotate`](Falta::annotate))
//! returns a new value and keeps the identity, so callers can add context freely
//! and still recognise the error downstream.

use core::error::Error;

use crate::identity::{role_of, same_object, sources, Identity, Sources};
use crate::render::has_substitutions;
use crate::types::alloc_type::{format, Arc, Box, String};
use crate::types::{ConfigError, Spec};

mod traits;

/// Shared, thread-safe handle to a wrapped cause.
pub type Cause = Arc<dyn Error + Send + Sync + 'static>;

/// An identity-tagged error instance.
#[must_use]
#[derive(Debug, Clone)]
pub struct Falta {
    spec: Spec,
    message: String,
    cause: Option<Cause>,
}

impl Falta {
    #[inline]
    pub(crate) fn from_parts(spec: Spec, message: String) -> Self {
        Self { spec, message, cause: None }
    }

    /// Creates a standalone error whose message is also its identity.
    ///
    /// The message is fixed text, so substitution syntax is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use falta::Falta;
    ///
    /// let err = Falta::from_message("queue is full").unwrap();
    /// assert_eq!(err.message(), "queue is full");
    /// assert!(Falta::from_message("queue %s is full").is_err());
    /// ```
    pub fn from_message(message: &str) -> Result<Self, ConfigError> {
        reject_substitutions(message)?;
        Ok(Self::from_parts(Spec::new(message), message.into()))
    }

    /// The identity of the factory that produced this error.
    #[inline]
    pub fn spec(&self) -> &Spec {
        &self.spec
    }

    /// The rendered message, including any annotations and wrapped causes.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The wrapped cause, if any.
    #[inline]
    pub fn unwrap_cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Returns true if this is a factory's zero-argument instance.
    pub fn is_archetype(&self) -> bool {
        self.cause.is_none() && self.message == self.spec.as_str()
    }

    /// Returns this error followed by every error it transitively wraps.
    #[inline]
    pub fn chain(&self) -> Sources<'_> {
        sources(self)
    }

    /// Wraps `cause`, appending its message to this one.
    ///
    /// # Examples
    ///
    /// ```
    /// use falta::{Args, Factory};
    ///
    /// let read_failed = Factory::newf("cannot read %s");
    /// let io = std::io::Error::other("permission denied");
    /// let err = read_failed.format(&Args::from(["config.toml"])).wrap(io);
    ///
    /// assert_eq!(err.message(), "cannot read config.toml: permission denied");
    /// assert!(read_failed.is(&err));
    /// assert!(err.unwrap_cause().is_some());
    /// ```
    pub fn wrap<E>(&self, cause: E) -> Falta
    where
        E: Error + Send + Sync + 'static,
    {
        self.wrap_shared(Arc::new(cause))
    }

    /// Wraps an already boxed cause.
    pub fn wrap_boxed(&self, cause: Box<dyn Error + Send + Sync + 'static>) -> Falta {
        self.wrap_shared(Arc::from(cause))
    }

    /// Wraps a shared cause without re-allocating it.
    ///
    /// Keep a clone of `cause` to later check that an error wraps this very value.
    pub fn wrap_shared(&self, cause: Cause) -> Falta {
        Self {
            spec: self.spec.clone(),
            message: format!("{}: {}", self.message, cause),
            cause: Some(cause),
        }
    }

    /// Appends context to the message, keeping identity and cause.
    ///
    /// `text` must not contain substitution syntax (`%v`, `{{...}}`).
    ///
    /// # Examples
    ///
    /// ```
    /// use falta::{Args, Factory};
    ///
    /// let invalid = Factory::newf("invalid %s");
    /// let err = invalid.format(&Args::from(["port"])).annotate("expected 1-65535").unwrap();
    ///
    /// assert_eq!(err.message(), "invalid port: expected 1-65535");
    /// assert!(invalid.is(&err));
    /// ```
    pub fn annotate(&self, text: &str) -> Result<Falta, ConfigError> {
        reject_substitutions(text)?;
        Ok(self.annotate_unchecked(text))
    }

    pub(crate) fn annotate_unchecked(&self, text: &str) -> Falta {
        Self {
            spec: self.spec.clone(),
            message: format!("{}: {}", self.message, text),
            cause: self.cause.clone(),
        }
    }

    /// Returns true if `other` belongs to this error's identity or causal family.
    ///
    /// Holds when `other`'s chain contains this error's cause (the same object, or
    /// an error with a related identity), another instance of a related factory,
    /// or a factory that produced this error.
    pub fn is(&self, other: &(dyn Error + 'static)) -> bool {
        let causal = self.cause.as_deref().is_some_and(|cause| {
            let cause: &(dyn Error + 'static) = cause;
            let cause_identity = role_of(cause);
            sources(other).any(|link| {
                same_object(link, cause)
                    || matches!(
                        (role_of(link), cause_identity),
                        (Some(a), Some(b)) if a.admits(b) || b.admits(a)
                    )
            })
        });

        let this = Identity::Instance(&self.spec);
        causal || sources(other).any(|link| role_of(link).is_some_and(|link| this.admits(link)))
    }

    /// Wraps the error of `result` with this instance, exactly once.
    ///
    /// `Ok` values pass through untouched.
    pub fn capture<T, E>(&self, result: Result<T, E>) -> Result<T, Falta>
    where
        E: Error + Send + Sync + 'static,
    {
        result.map_err(|err| self.wrap(err))
    }

    /// Runs `scope` and wraps any error escaping it with this instance.
    ///
    /// Every early return inside `scope` (including `?`) is covered, without each
    /// return site having to wrap.
    ///
    /// # Examples
    ///
    /// ```
    /// use falta::{Args, Factory, Falta};
    ///
    /// let open_failed = Factory::newf("open: cannot open file %s");
    ///
    /// fn open(factory: &Factory, name: &str) -> Result<std::fs::File, Falta> {
    ///     factory.format(&Args::from([name])).capture_with(|| {
    ///         let file = std::fs::File::open(name)?;
    ///         Ok::<_, std::io::Error>(file)
    ///     })
    /// }
    ///
    /// let err = open(&open_failed, "does-not-exist.txt").unwrap_err();
    /// assert!(open_failed.is(&err));
    /// ```
    pub fn capture_with<T, E, F>(&self, scope: F) -> Result<T, Falta>
    where
        E: Error + Send + Sync + 'static,
        F: FnOnce() -> Result<T, E>,
    {
        self.capture(scope())
    }

    /// Replaces an error held in `slot` with this instance wrapping it.
    ///
    /// An `Ok` slot is left untouched.
    pub fn capture_slot<T>(&self, slot: &mut Result<T, Falta>) {
        if let Err(err) = slot {
            *err = self.wrap(err.clone());
        }
    }

    /// Emits this error as a single `tracing` event.
    #[cfg(feature = "tracing")]
    pub fn trace(&self) {
        tracing::error!(spec = %self.spec, message = %self.message, "falta");
    }
}

fn reject_substitutions(text: &str) -> Result<(), ConfigError> {
    if has_substitutions(text) {
        #[cfg(feature = "tracing")]
        tracing::debug!(text, "rejected text with substitution syntax");
        return Err(ConfigError::ForbiddenVerbs { text: text.into() });
    }
    Ok(())
}
