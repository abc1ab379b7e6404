//! Ergonomic macros for building inputs and rendering factories.
//!
//! - [`macro@crate::args`] - Builds [`Args`](crate::Args) from heterogeneous values.
//! - [`macro@crate::falta`] - Renders a positional factory in one call.
//! - [`macro@crate::m`] - Builds an [`M`](crate::M) map literal for named factories.
//! - [`macro@crate::impl_fields`] - Binds a struct's fields to template names at
//!   compile time.
//!
//! # Examples
//!
//! ```
//! use falta::{falta, m, Factory, M};
//!
//! let busy = Factory::newf("worker %d busy with %s");
//! let err = falta!(busy, 3, "compaction");
//! assert_eq!(err.message(), "worker 3 busy with compaction");
//!
//! let quota = Factory::<M>::new("quota exceeded for {{.tenant}}").unwrap();
//! let err = quota.error(&m! { "tenant" => "acme" }).unwrap();
//! assert_eq!(err.message(), "quota exceeded for acme");
//! ```

/// Builds an [`Args`](crate::Args) list, converting each value with `Into<Arg>`.
///
/// # Examples
///
/// ```
/// use falta::{args, Arg};
///
/// let args = args!["dog", 3, true];
/// assert_eq!(args.as_slice(), &[Arg::from("dog"), Arg::Int(3), Arg::Bool(true)]);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::Args::new()
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::Args::new()$(.with($arg))+
    };
}

/// Renders a positional factory with the given arguments.
///
/// With no arguments this yields the factory's archetype. Rendering positional
/// factories never fails, so the result is a [`Falta`](crate::Falta) directly.
///
/// # Examples
///
/// ```
/// use falta::{falta, Factory};
///
/// let not_found = Factory::newf("the %s is %s");
/// assert_eq!(falta!(not_found, "dog", "black").to_string(), "the dog is black");
/// assert!(falta!(not_found).is_archetype());
/// ```
#[macro_export]
macro_rules! falta {
    ($factory:expr $(,)?) => {
        $factory.archetype()
    };
    ($factory:expr, $($arg:expr),+ $(,)?) => {
        $factory.format(&$crate::args![$($arg),+])
    };
}

/// Builds an [`M`](crate::M) from `key => value` pairs.
///
/// # Examples
///
/// ```
/// use falta::{m, Arg};
///
/// let fields = m! { "code" => 503, "reason" => "down" };
/// assert_eq!(fields["code"], Arg::Int(503));
/// ```
#[macro_export]
macro_rules! m {
    () => {
        $crate::M::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::M::new();
        $(
            map.insert(::core::convert::Into::into($key), $crate::Arg::from($value));
        )+
        map
    }};
}

/// Implements [`Fields`](crate::Fields) for a struct by naming its fields.
///
/// Each `"Name" => field` pair exposes `self.field` (rendered with `Display`) to
/// templates as `{{.Name}}`.
///
/// # Examples
///
/// ```
/// use falta::{impl_fields, Factory};
///
/// struct Upload {
///     name: String,
///     size: u64,
/// }
///
/// impl_fields!(Upload { "Name" => name, "Size" => size });
///
/// let too_large = Factory::<Upload>::new("{{.Name}} is {{.Size}} bytes").unwrap();
/// let err = too_large.error(&Upload { name: "a.bin".into(), size: 9 }).unwrap();
/// assert_eq!(err.message(), "a.bin is 9 bytes");
/// ```
#[macro_export]
macro_rules! impl_fields {
    ($type:ty { $($name:literal => $field:ident),* $(,)? }) => {
        impl $crate::Fields for $type {
            fn field(&self, name: &str) -> ::core::option::Option<$crate::__private::String> {
                match name {
                    $(
                        $name => ::core::option::Option::Some(
                            $crate::__private::ToString::to_string(&self.$field),
                        ),
                    )*
                    _ => ::core::option::Option::None,
                }
            }
        }
    };
}
