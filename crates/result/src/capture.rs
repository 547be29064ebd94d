//! Unwind boundaries that turn panics into [`Fault`] values

use std::fmt::Display;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use futures::FutureExt;

use crate::config::{self, CaptureConfig, Level};
use crate::fault::Fault;

/// Runs computations inside an unwind boundary with a fixed configuration.
///
/// The free functions ([`safe`], [`safe_async`], ...) use the process-wide
/// configuration; build a `Capture` directly to pin one.
///
/// Closures and futures are wrapped in [`AssertUnwindSafe`]. State shared
/// with a computation that panicked may be left half-updated.
///
/// Capturing does not touch the panic hook. The default hook still prints
/// `thread '...' panicked at` to stderr for every captured panic; install a
/// quieter hook with [`std::panic::set_hook`] if that output is unwanted.
#[derive(Debug, Clone)]
pub struct Capture {
    config: Arc<CaptureConfig>,
}

impl Default for Capture {
    fn default() -> Self {
        Self::global()
    }
}

impl Capture {
    /// Create a capture boundary with an explicit configuration
    #[must_use]
    pub fn new(config: CaptureConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Create a capture boundary from the process-wide configuration
    #[must_use]
    pub fn global() -> Self {
        Self {
            config: config::config(),
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    /// Run `f`, mapping a panic to `Err(Fault)`
    pub fn run<T, F>(&self, f: F) -> Result<T, Fault>
    where
        F: FnOnce() -> T,
    {
        panic::catch_unwind(AssertUnwindSafe(f))
            .map_err(|payload| self.record(Fault::from_panic(payload)))
    }

    /// Run a fallible `f`, mapping both a panic and a returned `Err` to `Fault`
    pub fn run_try<T, E, F>(&self, f: F) -> Result<T, Fault>
    where
        E: Display,
        F: FnOnce() -> Result<T, E>,
    {
        self.run(f)?
            .map_err(|e| self.record(Fault::error(e.to_string())))
    }

    /// Build a future with `f` and await it, mapping a panic in either step
    /// to `Err(Fault)`
    pub async fn run_async<T, F, Fut>(&self, f: F) -> Result<T, Fault>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let future = self.run(f)?;
        AssertUnwindSafe(future)
            .catch_unwind()
            .await
            .map_err(|payload| self.record(Fault::from_panic(payload)))
    }

    /// Async counterpart of [`Capture::run_try`]
    pub async fn run_try_async<T, E, F, Fut>(&self, f: F) -> Result<T, Fault>
    where
        E: Display,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.run_async(f)
            .await?
            .map_err(|e| self.record(Fault::error(e.to_string())))
    }

    fn record(&self, fault: Fault) -> Fault {
        let fault = match self.config.max_message_len {
            Some(max) => fault.truncated(max),
            None => fault,
        };

        if self.config.trace {
            macro_rules! emit {
                ($level:ident) => {
                    tracing::$level!(
                        target: "paw_result::capture",
                        kind = %fault.kind(),
                        message = fault.message(),
                        "captured fault"
                    )
                };
            }

            match self.config.level {
                Level::Trace => emit!(trace),
                Level::Debug => emit!(debug),
                Level::Info => emit!(info),
                Level::Warn => emit!(warn),
                Level::Error => emit!(error),
            }
        }

        fault
    }
}

/// Run `f`; a panic becomes `Err(Fault)`.
///
/// ```rust
/// use paw_result::safe;
///
/// assert_eq!(safe(|| 42), Ok(42));
/// let fault = safe(|| -> i32 { panic!("boom") }).unwrap_err();
/// assert_eq!(fault.message(), "boom");
/// ```
pub fn safe<T, F>(f: F) -> Result<T, Fault>
where
    F: FnOnce() -> T,
{
    Capture::global().run(f)
}

/// Run `f`; a panic is passed through `handler` into the error type
pub fn safe_with<T, E, F, H>(f: F, handler: H) -> Result<T, E>
where
    F: FnOnce() -> T,
    H: FnOnce(Fault) -> E,
{
    safe(f).map_err(handler)
}

/// Run a fallible `f`; a panic or a returned `Err` becomes `Err(Fault)`
pub fn safe_try<T, E, F>(f: F) -> Result<T, Fault>
where
    E: Display,
    F: FnOnce() -> Result<T, E>,
{
    Capture::global().run_try(f)
}

/// Build and await a future; a panic in either step becomes `Err(Fault)`.
/// The returned future never panics.
pub async fn safe_async<T, F, Fut>(f: F) -> Result<T, Fault>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    Capture::global().run_async(f).await
}

/// [`safe_async`] with an error handler
pub async fn safe_async_with<T, E, F, Fut, H>(f: F, handler: H) -> Result<T, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
    H: FnOnce(Fault) -> E,
{
    safe_async(f).await.map_err(handler)
}

/// Async counterpart of [`safe_try`]
pub async fn safe_try_async<T, E, F, Fut>(f: F) -> Result<T, Fault>
where
    E: Display,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    Capture::global().run_try_async(f).await
}

/// Await an already-built future; equivalent to `safe_async(|| future)`
pub async fn from_future<T, Fut>(future: Fut) -> Result<T, Fault>
where
    Fut: Future<Output = T>,
{
    safe_async(|| future).await
}

/// [`from_future`] with an error handler
pub async fn from_future_with<T, E, Fut, H>(future: Fut, handler: H) -> Result<T, E>
where
    Fut: Future<Output = T>,
    H: FnOnce(Fault) -> E,
{
    safe_async_with(|| future, handler).await
}
