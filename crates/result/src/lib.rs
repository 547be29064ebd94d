//! # PAW Result
//!
//! Combinators and capture boundaries for fallible computations.
//!
//! `std::result::Result` is already the two-variant container; this crate adds
//! what it is missing:
//!
//! | need                        | where                                    |
//! |-----------------------------|------------------------------------------|
//! | construct                   | [`ok`], [`err`], [`from_nullable`]       |
//! | map / map error / flat map  | `Result::map`, `map_err`, `and_then`     |
//! | side effects                | [`ResultExt::tap`], [`ResultExt::tap_err`] |
//! | two-armed dispatch          | [`ResultExt::match_with`]                |
//! | unwrap without `Debug`      | [`ResultExt::unwrap_or_raise`], [`ResultExt::unwrap_err_or_raise`] |
//! | panic → value               | [`safe`], [`safe_with`], [`safe_try`]    |
//! | async panic → value         | [`safe_async`], [`safe_try_async`], [`from_future`] |
//! | aggregate                   | [`combine`], [`CombineTuple`], [`partition`], [`successes`], [`errors`] |
//!
//! ## Quick Start
//!
//! ```rust
//! use paw_result::prelude::*;
//!
//! let length = safe(|| "Hello, World!".to_string())
//!     .map(|s| s.to_uppercase())
//!     .and_then(|s| ok::<_, Fault>(s.len()))
//!     .tap(|n| tracing::debug!(n, "measured"))
//!     .unwrap_or(0);
//! assert_eq!(length, 13);
//! ```
//!
//! Panics are captured with `catch_unwind`, so they are only recoverable in
//! builds with `panic = "unwind"`.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod capture;
mod collect;
mod config;
mod ext;
mod fault;

pub use capture::{
    Capture, from_future, from_future_with, safe, safe_async, safe_async_with, safe_try,
    safe_try_async, safe_with,
};
pub use collect::{CombineTuple, combine, err, errors, from_nullable, ok, partition, successes};
pub use config::{
    CaptureConfig, DEFAULT_MAX_MESSAGE_LEN, Level, ParseLevelError, config, set_config,
};
pub use ext::ResultExt;
pub use fault::{Fault, FaultKind, OPAQUE_PAYLOAD};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        CombineTuple, Fault, FaultKind, ResultExt, combine, err, errors, from_future,
        from_nullable, ok, partition, safe, safe_async, safe_try, safe_try_async, safe_with,
        successes,
    };
}
