//! Identity comparison across error chains.
//!
//! Errors are compared by *who produced them*, never by their rendered text.
//! [`is_match`] is the generic entry point: it walks the first error's source
//! chain and reports whether any link is the target itself, shares the target's
//! factory identity, or wraps the target's cause (or is wrapped by it).
//!
//! # Examples
//!
//! ```
//! use falta::{is_match, Args, Factory};
//!
//! let closed = Factory::newf("connection %s closed");
//! let io = std::io::Error::other("reset by peer");
//! let err = closed.error(&Args::from(["db-1"])).unwrap().wrap(io);
//!
//! assert!(is_match(&err, closed.spec()));
//! assert!(is_match(closed.spec(), &err));
//! ```

use core::error::Error;

use crate::types::{Falta, Spec};

/// Iterator over an error and its transitive sources.
#[derive(Clone)]
pub struct Sources<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Sources<'a> {
    type Item = &'a (dyn Error + 'static);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl core::iter::FusedIterator for Sources<'_> {}

/// Returns an iterator starting at `err` and following [`Error::source`].
#[inline]
pub fn sources<'a>(err: &'a (dyn Error + 'static)) -> Sources<'a> {
    Sources { next: Some(err) }
}

/// The factory identity carried by `err`, if it is a [`Falta`] or a [`Spec`].
#[inline]
pub fn identity_of<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a Spec> {
    role_of(err).map(Identity::spec)
}

/// An identity together with the role of the value carrying it.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Identity<'a> {
    /// Carried by a [`Falta`].
    Instance(&'a Spec),
    /// A bare factory [`Spec`].
    Factory(&'a Spec),
}

impl<'a> Identity<'a> {
    #[inline]
    pub(crate) fn spec(self) -> &'a Spec {
        match self {
            Self::Instance(spec) | Self::Factory(spec) => spec,
        }
    }

    /// Returns true if `other` belongs to the kind this identity stands for.
    ///
    /// Between a factory and an instance only the instance's keys are searched,
    /// so an extended factory never claims instances of a single parent. Two
    /// values in the same role are related when either text is among the
    /// other's keys.
    pub(crate) fn admits(self, other: Identity<'a>) -> bool {
        match (self, other) {
            (Self::Factory(factory), Identity::Instance(instance))
            | (Self::Instance(instance), Identity::Factory(factory)) => {
                instance.descends_from(factory)
            },
            (Self::Instance(a), Identity::Instance(b)) | (Self::Factory(a), Identity::Factory(b)) => {
                a.descends_from(b) || b.descends_from(a)
            },
        }
    }
}

/// The identity of `err` tagged with its role.
#[inline]
pub(crate) fn role_of<'a>(err: &'a (dyn Error + 'static)) -> Option<Identity<'a>> {
    match err.downcast_ref::<Falta>() {
        Some(falta) => Some(Identity::Instance(falta.spec())),
        None => err.downcast_ref::<Spec>().map(Identity::Factory),
    }
}

/// Returns true if `a` and `b` are the same object.
#[inline]
pub(crate) fn same_object(a: &(dyn Error + 'static), b: &(dyn Error + 'static)) -> bool {
    core::ptr::addr_eq(a as *const dyn Error, b as *const dyn Error)
}

/// Returns true if the two errors belong to the same identity or causal family.
///
/// Any link of `err`'s chain matches `target` when it:
///
/// - is `target` itself,
/// - carries an identity related to `target`'s (a factory matches an instance
///   only when the instance was produced by it or by an extension of it),
/// - is a [`Falta`] for which [`Falta::is`] holds against `target`,
/// - is a [`Spec`] for which [`Spec::is`] holds against `target`, or
/// - is matched by `target`, when `target` is a [`Falta`].
///
/// The last rule keeps the answer consistent when the arguments are swapped.
pub fn is_match(err: &(dyn Error + 'static), target: &(dyn Error + 'static)) -> bool {
    let target_identity = role_of(target);
    let target_falta = target.downcast_ref::<Falta>();

    sources(err).any(|link| {
        if same_object(link, target) {
            return true;
        }
        if let (Some(a), Some(b)) = (role_of(link), target_identity) {
            if a.admits(b) || b.admits(a) {
                return true;
            }
        }
        link.downcast_ref::<Falta>().is_some_and(|f| f.is(target))
            || link.downcast_ref::<Spec>().is_some_and(|spec| spec.is(target))
            || target_falta.is_some_and(|f| f.is(link))
    })
}
