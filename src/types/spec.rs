//! The identity key shared by a factory and every error it produces.

use core::fmt::{self, Display};

use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::identity::{role_of, sources, Identity};
use crate::types::alloc_type::{Arc, String};

/// A factory's format spec, used as its identity.
///
/// The keys of a spec are its own text followed by its lineage: the texts of
/// every factory it was extended from. A factory matches an error when the
/// factory's text is among the keys of the error's spec, so an extended
/// factory's errors match each parent while a parent's errors do not match
/// the extended factory.
///
/// `Spec` implements [`core::error::Error`] (displaying the raw format spec), so
/// a factory's identity can be passed wherever an error is expected and compared
/// against instances without constructing one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Spec {
    text: Arc<str>,
    lineage: SmallVec<[Arc<str>; 2]>,
}

impl Spec {
    #[inline]
    pub(crate) fn new(text: &str) -> Self {
        Self { text: Arc::from(text), lineage: SmallVec::new() }
    }

    /// The raw format spec.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Texts of the specs this one was extended from.
    pub fn lineage(&self) -> impl Iterator<Item = &str> {
        self.lineage.iter().map(|s| &**s)
    }

    /// The spec's own text followed by its lineage.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        core::iter::once(self.as_str()).chain(self.lineage())
    }

    /// Returns true if `key` is this spec's text or part of its lineage.
    pub fn contains(&self, key: &str) -> bool {
        self.keys().any(|k| k == key)
    }

    /// Returns true if `ancestor`'s text is among this spec's keys.
    ///
    /// This holds for the spec itself and for every spec it was extended from,
    /// never the other way round.
    #[inline]
    pub fn descends_from(&self, ancestor: &Spec) -> bool {
        self.contains(&ancestor.text)
    }

    /// Combines two specs: the text is space-joined and the lineage covers both.
    pub(crate) fn concat(&self, other: &Spec) -> Self {
        let mut text = String::with_capacity(self.text.len() + other.text.len() + 1);
        text.push_str(&self.text);
        text.push(' ');
        text.push_str(&other.text);

        let mut lineage: SmallVec<[Arc<str>; 2]> = SmallVec::new();
        for key in [self, other]
            .into_iter()
            .flat_map(|spec| core::iter::once(&spec.text).chain(spec.lineage.iter()))
        {
            if **key != *text && !lineage.contains(key) {
                lineage.push(Arc::clone(key));
            }
        }

        Self { text: Arc::from(text), lineage }
    }

    /// Returns true if any error in `err`'s source chain was produced by the
    /// factory this spec identifies, or by an extension of it.
    ///
    /// # Examples
    ///
    /// ```
    /// use falta::{Args, Factory};
    ///
    /// let not_found = Factory::newf("user %d not found");
    /// let err = not_found.error(&Args::from([42])).unwrap();
    ///
    /// assert!(not_found.spec().is(&err));
    /// ```
    pub fn is(&self, err: &(dyn core::error::Error + 'static)) -> bool {
        let factory = Identity::Factory(self);
        sources(err).any(|e| role_of(e).is_some_and(|link| factory.admits(link)))
    }

    /// Matches `err` by comparing its rendered message with the raw spec text.
    ///
    /// This is the loose comparison older releases applied implicitly. Any error
    /// whose message happens to equal the spec matches, so prefer [`Spec::is`].
    pub fn matches_text(&self, err: &dyn core::error::Error) -> bool {
        use core::fmt::Write;

        struct TextCmp<'a> {
            rest: &'a str,
            equal: bool,
        }

        impl Write for TextCmp<'_> {
            fn write_str(&mut self, s: &str) -> fmt::Result {
                match self.rest.strip_prefix(s) {
                    Some(rest) => self.rest = rest,
                    None => self.equal = false,
                }
                Ok(())
            }
        }

        let mut cmp = TextCmp { rest: &self.text, equal: true };
        let _ = write!(cmp, "{err}");
        cmp.equal && cmp.rest.is_empty()
    }
}

impl Display for Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl core::error::Error for Spec {}

#[cfg(feature = "serde")]
impl Serialize for Spec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let lineage: SmallVec<[&str; 2]> = self.lineage().collect();
        let mut state = serializer.serialize_struct("Spec", 2)?;
        state.serialize_field("text", self.as_str())?;
        state.serialize_field("lineage", lineage.as_slice())?;
        state.end()
    }
}
