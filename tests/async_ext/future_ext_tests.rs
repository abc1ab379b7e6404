//! Tests for the FutureCaptureExt trait.

use std::io;
use std::sync::atomic::{AtomicU32, Ordering};

use falta::async_ext::{CaptureFuture, FutureCaptureExt};
use falta::{args, Factory, Falta};

#[test]
fn capture_future_is_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    assert_send::<CaptureFuture<std::future::Ready<Result<(), io::Error>>, Falta>>();
    assert_sync::<CaptureFuture<std::future::Ready<Result<(), io::Error>>, Falta>>();
}

#[tokio::test]
async fn capture_passes_ok_through() {
    let sync_failed = Factory::newf("sync %s failed");

    let result = async { Ok::<_, io::Error>(42) }
        .capture(sync_failed.format(&args!["inbox"]))
        .await;

    assert_eq!(result.unwrap(), 42);
}

#[tokio::test]
async fn capture_wraps_errors_once() {
    let sync_failed = Factory::newf("sync %s failed");

    let result = async { Err::<(), _>(io::Error::other("timeout")) }
        .capture(sync_failed.format(&args!["inbox"]))
        .await;

    let err = result.unwrap_err();
    assert_eq!(err.message(), "sync inbox failed: timeout");
    assert_eq!(err.chain().count(), 2);
    assert!(sync_failed.is(&err));
}

#[tokio::test]
async fn capture_with_does_not_evaluate_on_success() {
    let call_count = AtomicU32::new(0);
    let sync_failed = Factory::newf("sync %s failed");

    let result = async { Ok::<_, io::Error>(1) }
        .capture_with(|| {
            call_count.fetch_add(1, Ordering::SeqCst);
            sync_failed.format(&args!["inbox"])
        })
        .await;

    assert_eq!(result.unwrap(), 1);
    assert_eq!(call_count.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn capture_with_evaluates_on_error() {
    let call_count = AtomicU32::new(0);
    let sync_failed = Factory::newf("sync %s failed");

    let result = async { Err::<(), _>(io::Error::other("refused")) }
        .capture_with(|| {
            call_count.fetch_add(1, Ordering::SeqCst);
            sync_failed.format(&args!["outbox"])
        })
        .await;

    assert_eq!(call_count.load(Ordering::SeqCst), 1);
    assert_eq!(result.unwrap_err().message(), "sync outbox failed: refused");
}

#[tokio::test]
async fn nested_captures_keep_every_identity() {
    let fetch_failed = Factory::newf("fetch %s failed");
    let sync_failed = Factory::newf("sync failed");

    let fetch = async { Err::<(), _>(io::Error::other("503")) }
        .capture(fetch_failed.format(&args!["feed"]));
    let err = fetch.capture(sync_failed.archetype()).await.unwrap_err();

    assert_eq!(err.message(), "sync failed: fetch feed failed: 503");
    assert!(fetch_failed.is(&err));
    assert!(sync_failed.is(&err));
}

#[tokio::test]
async fn captured_errors_cross_tasks() {
    static LOOKUP_FAILED: std::sync::LazyLock<Factory> =
        std::sync::LazyLock::new(|| Factory::newf("lookup %d failed"));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            tokio::spawn(async move {
                async { Err::<(), _>(io::Error::other("missing")) }
                    .capture(LOOKUP_FAILED.format(&args![i]))
                    .await
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let err = handle.await.unwrap().unwrap_err();
        assert_eq!(err.message(), format!("lookup {i} failed: missing"));
        assert!(LOOKUP_FAILED.is(&err));
    }
}
