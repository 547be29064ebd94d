//! [`Fault`]: a captured panic or flattened error, carried as a value

use std::any::Any;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message used when a panic payload is neither `&str` nor `String`
pub const OPAQUE_PAYLOAD: &str = "opaque panic payload";

/// How a [`Fault`] came to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaultKind {
    /// The computation unwound
    Panic,
    /// The computation returned an `Err` that was flattened into a fault
    Error,
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaultKind::Panic => write!(f, "panic"),
            FaultKind::Error => write!(f, "error"),
        }
    }
}

/// Error produced by the capture boundaries when no error handler is given.
///
/// `Display` prints the message only, so a fault raised from
/// `panic!("boom")` renders as `boom`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct Fault {
    kind: FaultKind,
    message: String,
}

impl Fault {
    /// Create a fault of kind [`FaultKind::Panic`]
    pub fn panic(message: impl Into<String>) -> Self {
        Self {
            kind: FaultKind::Panic,
            message: message.into(),
        }
    }

    /// Create a fault of kind [`FaultKind::Error`]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FaultKind::Error,
            message: message.into(),
        }
    }

    /// Decode a payload returned by `catch_unwind`.
    ///
    /// A payload raised by [`Fault::raise`] comes back unchanged, kind
    /// included.
    #[must_use]
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Self>() {
            Ok(fault) => return *fault,
            Err(payload) => payload,
        };
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast_ref::<&'static str>() {
                Some(message) => (*message).to_string(),
                None => OPAQUE_PAYLOAD.to_string(),
            },
        };
        Self::panic(message)
    }

    /// Unwind with this fault as the panic payload.
    ///
    /// A capture boundary further up the stack recovers it as-is.
    #[track_caller]
    pub fn raise(self) -> ! {
        std::panic::panic_any(self)
    }

    /// What produced this fault
    #[inline]
    #[must_use]
    pub fn kind(&self) -> FaultKind {
        self.kind
    }

    /// The panic text or the error's `Display`
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check if the fault came from an unwinding panic
    #[inline]
    #[must_use]
    pub fn is_panic(&self) -> bool {
        self.kind == FaultKind::Panic
    }

    /// Consume the fault, keeping only its message
    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }

    /// Keep at most `max` bytes of the message, cut on a char boundary.
    ///
    /// A cut message gets `…` appended after the kept bytes, so it ends up
    /// at most `max + 3` bytes long.
    #[must_use]
    pub fn truncated(mut self, max: usize) -> Self {
        if self.message.len() > max {
            let mut end = max;
            while !self.message.is_char_boundary(end) {
                end -= 1;
            }
            self.message.truncate(end);
            self.message.push('…');
        }
        self
    }
}
