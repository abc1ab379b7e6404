use core::error::Error;

use crate::types::Factory;

/// Identity checks available as methods on any error.
pub trait ErrorIdentityExt: Error + Sized + 'static {
    /// See [`is_match`](crate::is_match).
    #[inline]
    fn is_match(&self, target: &(dyn Error + 'static)) -> bool {
        crate::identity::is_match(self, target)
    }

    /// Returns true if this error, or any error it wraps, came from `factory`.
    #[inline]
    fn produced_by<T: ?Sized>(&self, factory: &Factory<T>) -> bool {
        factory.is(self)
    }
}

impl<E: Error + 'static> ErrorIdentityExt for E {}
