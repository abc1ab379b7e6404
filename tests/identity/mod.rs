use std::error::Error;
use std::fmt;
use std::io;
use std::sync::Arc;

use falta::traits::ErrorIdentityExt;
use falta::{args, is_match, sources, Cause, Factory};

/// A foreign error type that wraps another error, like most library errors do.
#[derive(Debug)]
struct Outer {
    inner: Box<dyn Error + Send + Sync>,
}

impl fmt::Display for Outer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "outer: {}", self.inner)
    }
}

impl Error for Outer {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.inner)
    }
}

#[test]
fn is_match_is_symmetric_for_wrapped_causes() {
    let closed = Factory::newf("connection %s closed");
    let cause: Cause = Arc::new(io::Error::other("reset by peer"));
    let err = closed.format(&args!["db-1"]).wrap_shared(cause.clone());

    assert!(is_match(&err, &*cause));
    assert!(is_match(&*cause, &err));
}

#[test]
fn is_match_is_symmetric_for_factory_identity() {
    let closed = Factory::newf("connection %s closed");
    let a = closed.format(&args!["db-1"]);
    let b = closed.format(&args!["db-2"]).annotate("during shutdown").unwrap();

    assert!(is_match(&a, &b));
    assert!(is_match(&b, &a));
    assert!(is_match(&a, &closed.archetype()));
    assert!(is_match(&closed.archetype(), &a));
}

#[test]
fn factory_spec_is_the_error_valued_handle() {
    let closed = Factory::newf("connection %s closed");
    let reset = Factory::newf("connection reset");
    let target: &(dyn Error + 'static) = closed.spec();
    let err = Outer { inner: Box::new(closed.format(&args!["db-1"])) };

    assert!(is_match(&err, target));
    assert!(is_match(target, &err));
    assert!(!is_match(&err, reset.spec()));
    assert!(!is_match(reset.spec(), &err));
}

#[test]
fn is_match_finds_identity_behind_foreign_wrappers() {
    let closed = Factory::newf("connection %s closed");
    let err = Outer { inner: Box::new(closed.format(&args!["db-1"])) };

    assert!(is_match(&err, &closed.archetype()));
    assert!(is_match(&closed.archetype(), &err) == is_match(&err, &closed.archetype()));
    assert!(err.produced_by(&closed));
}

#[test]
fn is_match_on_unrelated_errors_is_false() {
    let closed = Factory::newf("connection %s closed");
    let err = closed.format(&args!["db-1"]).wrap(io::Error::other("reset"));
    let stranger = io::Error::other("reset");

    // Equal text is not identity.
    assert!(!is_match(&err, &stranger));
    assert!(!is_match(&stranger, &err));
}

#[test]
fn plain_errors_match_only_themselves() {
    let a = io::Error::other("a");
    let b = io::Error::other("a");

    assert!(is_match(&a, &a));
    assert!(!is_match(&a, &b));
    assert!(a.is_match(&a));
}

#[test]
fn sources_walks_the_whole_chain() {
    let outer = Factory::newf("request failed");
    let inner = Factory::newf("pool exhausted");
    let err = outer.archetype().wrap(inner.archetype().wrap(io::Error::other("timeout")));

    let messages: Vec<_> = sources(&err).map(|e| e.to_string()).collect();
    assert_eq!(
        messages,
        [
            "request failed: pool exhausted: timeout",
            "pool exhausted: timeout",
            "timeout",
        ]
    );
    assert_eq!(err.chain().count(), 3);
}

#[test]
fn deep_chains_stay_linear() {
    let step = Factory::newf("step %d");
    let mut err = step.format(&args![0]);
    for i in 1..64 {
        err = step.format(&args![i]).wrap(err);
    }
    let other = Factory::newf("unrelated");

    assert_eq!(err.chain().count(), 64);
    assert!(step.is(&err));
    assert!(!is_match(&err, &other.archetype()));
}
