//! # Layer 3: Raise/return adapters
//!
//! Two calling conventions for the same fallible function:
//!
//! ```text
//! raising:  Fn(A) -> T                 may unwind with a SystemError payload
//! result:   Fn(A) -> ErrorCodeOr<T>    never unwinds for that fault
//! ```
//!
//! [`to_result`] and [`to_raising`] translate between them. Functions with
//! several inputs take them as a tuple.
//!
//! ## Usage
//!
//! ```ignore
//! use error_or::{raise, to_raising, to_result, Errc};
//!
//! fn checked(v: i32) -> i32 {
//!     if v == 0 { raise(Errc::InvalidArgument) }
//!     v
//! }
//!
//! let wrapped = to_result(checked);
//! assert_eq!(*wrapped(0).error(), Errc::InvalidArgument);
//! assert_eq!(to_raising(wrapped)(5), 5);
//! ```

use std::panic::{self, AssertUnwindSafe};

use crate::code::ErrorCode;
use crate::container::{ErrorCodeOr, ErrorOr};

/// The structured fault: a raised error carrying a system-level code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{code}")]
pub struct SystemError {
    code: ErrorCode,
}

impl SystemError {
    #[inline]
    pub fn new(code: impl Into<ErrorCode>) -> Self {
        Self { code: code.into() }
    }

    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.code
    }
}

impl From<ErrorCode> for SystemError {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        Self { code }
    }
}

/// Raise a [`SystemError`] carrying `code`.
///
/// Unwinds with the `SystemError` as the payload so that [`to_result`] can
/// recover the code. The panic hook is not invoked, so nothing is printed;
/// an uncaught fault ends the thread silently.
pub fn raise(code: impl Into<ErrorCode>) -> ! {
    panic::resume_unwind(Box::new(SystemError::new(code)))
}

/// Wrap a raising function into one that returns [`ErrorCodeOr`].
///
/// A `SystemError` unwinding out of `f` becomes the error alternative.
/// Any other panic is resumed unchanged.
///
/// # Panics
///
/// Resumes foreign panics. A `SystemError` with a zero code is a caller bug
/// and panics as a falsy error alternative.
pub fn to_result<A, T, F>(f: F) -> impl Fn(A) -> ErrorCodeOr<T>
where
    F: Fn(A) -> T,
{
    move |args| match panic::catch_unwind(AssertUnwindSafe(|| f(args))) {
        Ok(value) => ErrorOr::with_value(value),
        Err(payload) => match payload.downcast::<SystemError>() {
            Ok(fault) => {
                tracing::debug!(code = %fault.code(), "system fault translated into error result");
                ErrorOr::with_error(fault.code())
            }
            Err(payload) => panic::resume_unwind(payload),
        },
    }
}

/// Wrap a result-returning function into one that raises [`SystemError`].
///
/// # Panics
///
/// Raises `SystemError` when `g` returns an error alternative.
pub fn to_raising<A, T, G>(g: G) -> impl Fn(A) -> T
where
    G: Fn(A) -> ErrorCodeOr<T>,
{
    move |args| match g(args).into_result() {
        Ok(value) => value,
        Err(code) => {
            tracing::trace!(code = %code, "raising error result as system fault");
            raise(code)
        }
    }
}
