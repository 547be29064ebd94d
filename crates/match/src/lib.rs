//! # PAW Match
//!
//! Dispatch helpers for values whose shape is only known at runtime: guard
//! lists, literal and range tables, string and regex routes, tagged JSON
//! messages, HTTP status classes.
//!
//! Where a lookup can fail, the helpers return [`MatchResult`] instead of
//! panicking.
//!
//! ```rust
//! use paw_match::{StatusHandlers, StringMatcher};
//!
//! let route = StringMatcher::new()
//!     .exact("/pricing", |_| "pricing")
//!     .otherwise(|_| "not found");
//! assert_eq!(route.apply("/pricing"), Ok("pricing"));
//!
//! let retry = StatusHandlers::new()
//!     .server_error(|_| true)
//!     .fallback(|_| false);
//! assert_eq!(retry.dispatch(503_u16), Some(true));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod environment;
mod error;
mod future;
mod matcher;
mod shape;
mod status;
mod string;
mod tag;

pub use environment::{ENV_VAR, Environment};
pub use error::{MatchError, MatchResult};
pub use future::{match_future, match_try_future};
pub use matcher::Matcher;
pub use shape::{SliceShape, match_nullable, match_slice};
pub use status::{StatusClass, StatusHandlers};
pub use string::StringMatcher;
pub use tag::{TagTable, Tagged};
