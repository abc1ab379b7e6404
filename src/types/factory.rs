//! Error factories.
//!
//! A [`Factory`] is declared once with a format spec and produces [`Falta`]
//! instances that all share its identity, whatever message they render.

use core::fmt::{self, Debug, Display};
use core::marker::PhantomData;

use crate::render::{printf, Args, Dialect, Fields, Template};
use crate::types::{ConfigError, Falta, RenderError, Spec};

#[derive(Clone)]
enum Renderer {
    Positional,
    Named(Template),
}

impl Renderer {
    fn dialect(&self) -> Dialect {
        match self {
            Self::Positional => Dialect::Positional,
            Self::Named(_) => Dialect::Named,
        }
    }
}

/// A reusable, parameterized error template.
///
/// `T` is the input the factory renders from: [`Args`] for printf-style
/// factories, or any [`Fields`] record for named templates. A factory is
/// immutable once created and can be shared freely across threads.
///
/// # Examples
///
/// ```
/// use falta::{impl_fields, Factory};
///
/// struct Circle {
///     radius: f64,
/// }
///
/// impl_fields!(Circle { "Radius" => radius });
///
/// let invalid = Factory::<Circle>::new("invalid circle: radius ({{.Radius}}) <= 0").unwrap();
/// let err = invalid.error(&Circle { radius: -1.0 }).unwrap();
///
/// assert_eq!(err.to_string(), "invalid circle: radius (-1) <= 0");
/// assert!(invalid.is(&err));
/// ```
///
/// # Comparing against errors
///
/// `Factory` is generic over its input, so it is not itself a
/// [`core::error::Error`]. Its error-valued handle is [`Factory::spec`]: pass
/// that wherever a `&dyn Error` target is expected.
///
/// ```
/// use falta::{args, is_match, Factory};
///
/// let closed = Factory::newf("connection %s closed");
/// let err = closed.format(&args!["db-1"]);
///
/// assert!(is_match(&err, closed.spec()));
/// assert!(is_match(closed.spec(), &err));
/// ```
pub struct Factory<T: ?Sized = Args> {
    spec: Spec,
    renderer: Renderer,
    _input: PhantomData<fn(&T)>,
}

impl Factory<Args> {
    /// Creates a printf-style factory.
    ///
    /// Positional specs have no syntax to reject: malformed verbs surface as
    /// inline markers in the rendered message instead.
    pub fn newf(spec: &str) -> Self {
        Self::from_parts(Spec::new(spec), Renderer::Positional)
    }

    /// Renders positional arguments without failing.
    ///
    /// An empty list yields the [archetype](Self::archetype). For a named
    /// template over `Args`, fields that are out of range render as `<no value>`.
    pub fn format(&self, args: &Args) -> Falta {
        if args.is_empty() {
            return self.archetype();
        }
        let message = match &self.renderer {
            Renderer::Positional => printf::render(self.spec.as_str(), args),
            Renderer::Named(template) => template.render_lossy(args),
        };
        Falta::from_parts(self.spec.clone(), message)
    }
}

impl<T: Fields + ?Sized> Factory<T> {
    /// Creates a named-template factory, validating the template syntax.
    pub fn new(spec: &str) -> Result<Self, ConfigError> {
        Self::with_dialect(spec, Dialect::Named)
    }

    /// Creates a factory for the given dialect.
    ///
    /// The positional dialect needs an input that carries positional values,
    /// such as [`Args`]; any other input is refused with
    /// [`ConfigError::PositionalInput`].
    pub fn with_dialect(spec: &str, dialect: Dialect) -> Result<Self, ConfigError> {
        let renderer = match dialect {
            Dialect::Positional if !T::POSITIONAL => {
                #[cfg(feature = "tracing")]
                tracing::debug!(spec, "refused positional factory over a record input");
                return Err(ConfigError::PositionalInput);
            },
            Dialect::Positional => Renderer::Positional,
            Dialect::Named => Renderer::Named(Template::parse(spec).inspect_err(|_err| {
                #[cfg(feature = "tracing")]
                tracing::debug!(spec, error = %_err, "rejected falta template");
            })?),
        };
        Ok(Self::from_parts(Spec::new(spec), renderer))
    }

    /// Constructs an error by rendering `input` into this factory's spec.
    ///
    /// Fails if a named placeholder has no matching field in `input`. A
    /// positional factory given no arguments yields its archetype.
    pub fn error(&self, input: &T) -> Result<Falta, RenderError> {
        let message = match &self.renderer {
            Renderer::Positional if input.positional().is_empty() => return Ok(self.archetype()),
            Renderer::Positional => printf::render(self.spec.as_str(), input.positional()),
            Renderer::Named(template) => template.render(input)?,
        };
        Ok(Falta::from_parts(self.spec.clone(), message))
    }

    /// Combines two factories into one whose spec is both specs joined by a space.
    ///
    /// Instances of the combined factory match `self`, `other` and the combined
    /// factory. Both factories must use the same dialect.
    ///
    /// # Examples
    ///
    /// ```
    /// use falta::{m, Factory, M};
    ///
    /// let unavailable = Factory::<M>::new("service unavailable: [code={{.code}}]").unwrap();
    /// let because = Factory::<M>::new("because {{.reason}}").unwrap();
    /// let both = unavailable.extend(&because).unwrap();
    ///
    /// let err = both.error(&m! { "code" => 503, "reason" => "down" }).unwrap();
    /// assert_eq!(err.message(), "service unavailable: [code=503] because down");
    /// assert!(unavailable.is(&err));
    /// assert!(because.is(&err));
    /// ```
    pub fn extend(&self, other: &Self) -> Result<Self, ConfigError> {
        let (left, right) = (self.dialect(), other.dialect());
        if left != right {
            #[cfg(feature = "tracing")]
            tracing::debug!(%left, %right, "refused to extend falta factory");
            return Err(ConfigError::DialectMismatch { left, right });
        }

        let spec = self.spec.concat(&other.spec);
        let renderer = match self.renderer {
            Renderer::Positional => Renderer::Positional,
            Renderer::Named(_) => Renderer::Named(Template::parse(spec.as_str())?),
        };
        Ok(Self::from_parts(spec, renderer))
    }
}

impl<T: ?Sized> Factory<T> {
    #[inline]
    fn from_parts(spec: Spec, renderer: Renderer) -> Self {
        Self { spec, renderer, _input: PhantomData }
    }

    /// The identity shared by this factory and every error it produces.
    ///
    /// [`Spec`] implements [`core::error::Error`], so this is the handle to use
    /// when comparing the factory itself against errors.
    #[inline]
    pub fn spec(&self) -> &Spec {
        &self.spec
    }

    #[inline]
    pub fn dialect(&self) -> Dialect {
        self.renderer.dialect()
    }

    /// The zero-argument instance: its message is the raw spec.
    ///
    /// Useful as a sentinel when only the factory's identity matters.
    #[inline]
    pub fn archetype(&self) -> Falta {
        Falta::from_parts(self.spec.clone(), self.spec.as_str().into())
    }

    /// Returns true if `err`, or any error it wraps, was produced by this factory.
    #[inline]
    pub fn is(&self, err: &(dyn core::error::Error + 'static)) -> bool {
        self.spec.is(err)
    }
}

impl<T: ?Sized> Clone for Factory<T> {
    fn clone(&self) -> Self {
        Self::from_parts(self.spec.clone(), self.renderer.clone())
    }
}

impl<T: ?Sized> Debug for Factory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Factory")
            .field("spec", &self.spec.as_str())
            .field("dialect", &self.dialect())
            .finish()
    }
}

impl<T: ?Sized> Display for Factory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.spec, f)
    }
}

impl<T: ?Sized> AsRef<Spec> for Factory<T> {
    #[inline]
    fn as_ref(&self) -> &Spec {
        &self.spec
    }
}
