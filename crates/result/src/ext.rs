//! Extension methods for `std::result::Result`

use std::fmt::Display;

/// Methods `std::result::Result` lacks: side-effect taps, two-armed
/// dispatch, and unwrapping that needs no `Debug` bound.
pub trait ResultExt<T, E>: Sized {
    /// Call `f` with the success value, then return `self` unchanged
    fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T);

    /// Call `f` with the error, then return `self` unchanged
    fn tap_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E);

    /// Run exactly one of the two arms and return its output
    fn match_with<U, OkF, ErrF>(self, on_ok: OkF, on_err: ErrF) -> U
    where
        OkF: FnOnce(T) -> U,
        ErrF: FnOnce(E) -> U;

    /// Return the success value, or panic with the error's `Display` as the
    /// panic payload.
    ///
    /// Only the message survives: a [`Fault`](crate::Fault) of kind `Error`
    /// caught again comes back as kind `Panic`. Use
    /// [`Fault::raise`](crate::Fault::raise) to unwind with the fault itself.
    #[track_caller]
    fn unwrap_or_raise(self) -> T
    where
        E: Display;

    /// Return the error, or panic when called on `Ok`
    #[track_caller]
    fn unwrap_err_or_raise(self) -> E;

    /// Log the error at warn level, then return `self` unchanged
    fn trace_err(self, what: &str) -> Self
    where
        E: Display;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        self.inspect(f)
    }

    #[inline]
    fn tap_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        self.inspect_err(f)
    }

    #[inline]
    fn match_with<U, OkF, ErrF>(self, on_ok: OkF, on_err: ErrF) -> U
    where
        OkF: FnOnce(T) -> U,
        ErrF: FnOnce(E) -> U,
    {
        match self {
            Ok(value) => on_ok(value),
            Err(error) => on_err(error),
        }
    }

    #[track_caller]
    fn unwrap_or_raise(self) -> T
    where
        E: Display,
    {
        match self {
            Ok(value) => value,
            Err(error) => std::panic::panic_any(error.to_string()),
        }
    }

    #[track_caller]
    fn unwrap_err_or_raise(self) -> E {
        match self {
            Ok(_) => panic!("called unwrap_err_or_raise on an Ok result"),
            Err(error) => error,
        }
    }

    fn trace_err(self, what: &str) -> Self
    where
        E: Display,
    {
        self.inspect_err(|error| tracing::warn!(error = %error, "{what} failed"))
    }
}
