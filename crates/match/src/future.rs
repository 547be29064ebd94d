//! Dispatch on how a future settles

use std::fmt::Display;
use std::future::Future;

use paw_result::{Fault, ResultExt, from_future, safe_try_async};

/// Await `future`; run `resolved` with its output or `rejected` with the
/// captured panic
pub async fn match_future<T, U, Fut, R, J>(future: Fut, resolved: R, rejected: J) -> U
where
    Fut: Future<Output = T>,
    R: FnOnce(T) -> U,
    J: FnOnce(Fault) -> U,
{
    from_future(future).await.match_with(resolved, rejected)
}

/// Like [`match_future`], but a returned `Err` is also routed to `rejected`
pub async fn match_try_future<T, E, U, Fut, R, J>(future: Fut, resolved: R, rejected: J) -> U
where
    E: Display,
    Fut: Future<Output = Result<T, E>>,
    R: FnOnce(T) -> U,
    J: FnOnce(Fault) -> U,
{
    safe_try_async(|| future).await.match_with(resolved, rejected)
}
