//! Integration tests for the process-wide capture configuration
//!
//! Every test here swaps the global config, so they share one lock and live
//! in their own test binary.

use paw_result::prelude::*;
use paw_result::{Capture, CaptureConfig, Level};
use std::sync::{Mutex, MutexGuard, PoisonError};

static GLOBAL: Mutex<()> = Mutex::new(());

fn lock() -> MutexGuard<'static, ()> {
    GLOBAL.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Install `config` for the duration of `f`, then restore the previous one
fn with_config<R>(config: CaptureConfig, f: impl FnOnce() -> R) -> R {
    let original = paw_result::config();
    paw_result::set_config(config);
    let result = f();
    paw_result::set_config((*original).clone());
    result
}

#[test]
fn test_global_config_roundtrip() {
    let _guard = lock();
    let original = paw_result::config();

    with_config(CaptureConfig::default().with_level(Level::Trace), || {
        assert_eq!(paw_result::config().level, Level::Trace);
    });

    assert_eq!(*paw_result::config(), *original);
}

#[test]
fn test_safe_honors_global_limit() {
    let _guard = lock();

    let fault = with_config(CaptureConfig::silent().with_max_message_len(Some(2)), || {
        safe::<u8, _>(|| panic!("abcdef")).unwrap_err()
    });
    assert_eq!(fault.message(), "ab…");

    let fault = with_config(CaptureConfig::silent().with_max_message_len(None), || {
        safe_try(|| Err::<u8, _>("abcdef")).unwrap_err()
    });
    assert_eq!(fault.message(), "abcdef");
}

#[test]
fn test_safe_async_reads_global_limit() {
    let _guard = lock();

    let fault = with_config(CaptureConfig::silent().with_max_message_len(Some(4)), || {
        futures::executor::block_on(safe_async::<u8, _, _>(|| async { panic!("overflowing") }))
    })
    .unwrap_err();
    assert_eq!(fault.message(), "over…");
}

#[test]
fn test_capture_global_snapshots_config() {
    let _guard = lock();

    let pinned = with_config(CaptureConfig::silent().with_max_message_len(Some(1)), Capture::global);
    let fault = pinned.run::<u8, _>(|| panic!("xyz")).unwrap_err();
    assert_eq!(fault.message(), "x…");
}
