use std::error::Error;
use std::io;
use std::sync::Arc;

use falta::{args, Cause, ConfigError, Factory, Falta};

fn io_cause(msg: &str) -> Cause {
    Arc::new(io::Error::other(msg.to_string()))
}

#[test]
fn wrap_appends_cause_and_keeps_identity() {
    let read_failed = Factory::newf("cannot read %s");
    let cause = io_cause("permission denied");

    let err = read_failed.format(&args!["config.toml"]).wrap_shared(cause.clone());

    assert_eq!(err.message(), "cannot read config.toml: permission denied");
    assert!(read_failed.is(&err));
    assert!(err.is(&*cause));
    assert!(Arc::ptr_eq(err.unwrap_cause().unwrap(), &cause));
}

#[test]
fn wrap_does_not_touch_the_receiver() {
    let read_failed = Factory::newf("cannot read %s");
    let base = read_failed.format(&args!["a.txt"]);

    let _wrapped = base.wrap(io::Error::other("gone"));

    assert_eq!(base.message(), "cannot read a.txt");
    assert!(base.unwrap_cause().is_none());
}

#[test]
fn wrapped_falta_cause_matches_by_identity() {
    let query_failed = Factory::newf("query %q failed");
    let pool_exhausted = Factory::newf("pool exhausted after %d waits");

    let cause = pool_exhausted.format(&args![3]);
    let err = query_failed.format(&args!["select 1"]).wrap(cause);

    assert!(query_failed.is(&err));
    assert!(pool_exhausted.is(&err));
    // A different instance of the cause's factory is in the same causal family.
    assert!(err.is(&pool_exhausted.archetype()));
}

#[test]
fn boxed_causes_are_kept() {
    let parse_failed = Factory::newf("cannot parse %s");
    let cause: Box<dyn Error + Send + Sync> = "x".parse::<u8>().unwrap_err().into();

    let err = parse_failed.format(&args!["x"]).wrap_boxed(cause);

    assert_eq!(err.message(), "cannot parse x: invalid digit found in string");
    assert_eq!(err.source().unwrap().to_string(), "invalid digit found in string");
}

#[test]
fn annotate_appends_text() {
    let invalid = Factory::newf("invalid %s");
    let err = invalid.format(&args!["port"]);

    let annotated = err.annotate("expected 1-65535").unwrap();

    assert_eq!(annotated.message(), format!("{}: expected 1-65535", err.message()));
    assert_eq!(invalid.is(&annotated), invalid.is(&err));
    assert_eq!(annotated.spec(), err.spec());
}

#[test]
fn annotate_keeps_the_cause() {
    let invalid = Factory::newf("invalid %s");
    let cause = io_cause("eof");
    let err = invalid.format(&args!["header"]).wrap_shared(cause.clone());

    let annotated = err.annotate("while reading request").unwrap();

    assert_eq!(annotated.message(), "invalid header: eof: while reading request");
    assert!(Arc::ptr_eq(annotated.unwrap_cause().unwrap(), &cause));
    assert!(annotated.is(&*cause));
}

#[test]
fn annotate_rejects_substitution_syntax() {
    let invalid = Factory::newf("invalid %s").archetype();

    for text in ["retry %d", "see {{.doc}}", "%v"] {
        assert_eq!(
            invalid.annotate(text).unwrap_err(),
            ConfigError::ForbiddenVerbs { text: text.into() }
        );
    }
    assert!(invalid.annotate("100% done").is_ok());
}

#[test]
fn from_message_uses_text_as_identity() {
    let full = Falta::from_message("queue is full").unwrap();
    let again = Falta::from_message("queue is full").unwrap();
    let other = Falta::from_message("queue is empty").unwrap();

    assert!(full.is(&again));
    assert!(!full.is(&other));
    assert!(full.is_archetype());
    assert!(Falta::from_message("queue %s is full").is_err());
}

#[test]
fn capture_slot_leaves_ok_untouched() {
    let scope = Factory::newf("sync %s").format(&args!["inbox"]);
    let mut slot: Result<u32, Falta> = Ok(7);

    scope.capture_slot(&mut slot);

    assert_eq!(slot.unwrap(), 7);
}

#[test]
fn capture_slot_wraps_exactly_once() {
    let sync_failed = Factory::newf("sync %s");
    let timed_out = Factory::newf("timed out");
    let scope = sync_failed.format(&args!["inbox"]);

    let mut slot: Result<u32, Falta> = Err(timed_out.archetype());
    scope.capture_slot(&mut slot);

    let err = slot.unwrap_err();
    assert_eq!(err.message(), "sync inbox: timed out");
    assert_eq!(err.chain().count(), 2);
    assert!(sync_failed.is(&err) && timed_out.is(&err));
}

#[test]
fn capture_with_covers_early_returns() {
    let load_failed = Factory::newf("load %s");

    fn load(factory: &Factory, raw: &str) -> Result<u16, Falta> {
        factory.format(&args![raw]).capture_with(|| {
            if raw.is_empty() {
                return Err(io::Error::other("empty input"));
            }
            let port = raw.parse::<u16>().map_err(io::Error::other)?;
            Ok(port)
        })
    }

    assert_eq!(load(&load_failed, "80").unwrap(), 80);

    let empty = load(&load_failed, "").unwrap_err();
    assert_eq!(empty.message(), "load : empty input");

    let bad = load(&load_failed, "eighty").unwrap_err();
    assert!(load_failed.is(&bad));
    assert_eq!(bad.chain().count(), 2);
}

#[test]
fn capture_passes_ok_through() {
    let scope = Factory::newf("never used").archetype();
    let ok: Result<&str, io::Error> = Ok("fine");

    assert_eq!(scope.capture(ok).unwrap(), "fine");
}

#[test]
fn alternate_display_lists_the_chain() {
    let outer = Factory::newf("request %d failed");
    let inner = Factory::newf("upstream closed");

    let err = outer
        .format(&args![9])
        .wrap(inner.archetype().wrap(io::Error::other("reset")));

    assert_eq!(err.to_string(), "request 9 failed: upstream closed: reset");
    assert_eq!(
        format!("{err:#}"),
        "request 9 failed: upstream closed: reset\n  \
         caused by: upstream closed: reset\n  \
         caused by: reset"
    );
}
