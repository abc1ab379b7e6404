use std::sync::LazyLock;
use std::thread;

use falta::{args, m, Factory, Falta, M};

static NOT_FOUND: LazyLock<Factory> = LazyLock::new(|| Factory::newf("user %d not found"));

static QUOTA: LazyLock<Factory<M>> =
    LazyLock::new(|| Factory::new("quota exceeded for {{.tenant}}").expect("valid template"));

#[test]
fn factories_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<Factory>();
    assert_send_sync::<Factory<M>>();
    assert_send_sync::<Falta>();
}

#[test]
fn shared_factories_render_independently() {
    let results: Vec<(Falta, Falta)> = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                s.spawn(move || {
                    let tenant = format!("tenant-{i}");
                    let quota = QUOTA.error(&m! { "tenant" => tenant }).unwrap();
                    (NOT_FOUND.format(&args![i]), quota)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (i, (missing, quota)) in results.iter().enumerate() {
        assert_eq!(missing.message(), format!("user {i} not found"));
        assert_eq!(quota.message(), format!("quota exceeded for tenant-{i}"));
        assert!(NOT_FOUND.is(missing));
        assert!(QUOTA.is(quota));
    }
}

#[test]
fn errors_cross_threads_with_identity_intact() {
    let err = thread::spawn(|| NOT_FOUND.format(&args![7]).wrap(std::io::Error::other("gone")))
        .join()
        .unwrap();

    assert!(NOT_FOUND.is(&err));
    assert_eq!(err.message(), "user 7 not found: gone");
}
