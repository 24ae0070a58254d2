//! Raise/return adapters.

use std::panic::{self, AssertUnwindSafe};

use error_or::prelude::*;

fn checked_sqrt(x: f64) -> f64 {
    if x < 0.0 {
        raise(Errc::InvalidArgument);
    }
    x.sqrt()
}

fn parse_port(raw: &str) -> ErrorCodeOr<u16> {
    match raw.parse() {
        Ok(port) => ErrorOr::with_value(port),
        Err(_) => ErrorOr::with_error(Errc::InvalidArgument.into()),
    }
}

// =============================================================================
// to_result
// =============================================================================

#[test]
fn test_to_result_passes_values_through() {
    let sqrt = to_result(checked_sqrt);
    let c = sqrt(16.0);
    assert!(c.ok());
    assert_eq!(*c.value(), 4.0);
}

#[test]
fn test_to_result_translates_system_fault() {
    let sqrt = to_result(checked_sqrt);
    let c = sqrt(-1.0);
    assert!(c.is_err());
    assert_eq!(*c.error(), Errc::InvalidArgument);
    assert_eq!(c.error().value(), 22);
}

#[test]
fn test_to_result_with_tuple_arguments() {
    let divide = to_result(|(a, b): (i32, i32)| {
        if b == 0 {
            raise(Errc::ArgumentOutOfDomain);
        }
        a / b
    });
    assert_eq!(*divide((9, 3)).value(), 3);
    assert_eq!(*divide((9, 0)).error(), Errc::ArgumentOutOfDomain);
}

#[test]
fn test_to_result_resumes_foreign_panic() {
    let failing = to_result(|_: ()| -> i32 { panic!("not a system fault") });
    let payload = panic::catch_unwind(AssertUnwindSafe(|| failing(()))).unwrap_err();
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"not a system fault"));
}

#[test]
fn test_to_result_resumes_foreign_payload_type() {
    let failing = to_result(|code: u8| -> i32 { panic::panic_any(code) });
    let payload = panic::catch_unwind(AssertUnwindSafe(|| failing(7))).unwrap_err();
    assert_eq!(payload.downcast_ref::<u8>(), Some(&7));
}

// =============================================================================
// to_raising
// =============================================================================

#[test]
fn test_to_raising_returns_values() {
    let port = to_raising(parse_port);
    assert_eq!(port("8080"), 8080);
}

#[test]
fn test_to_raising_raises_system_error() {
    let port = to_raising(parse_port);
    let payload = panic::catch_unwind(AssertUnwindSafe(|| port("http"))).unwrap_err();
    let fault = payload.downcast::<SystemError>().unwrap();
    assert_eq!(fault.code(), Errc::InvalidArgument);
}

#[test]
fn test_round_trip_behaves_like_wrapped_function() {
    let sqrt = to_raising(to_result(checked_sqrt));
    assert_eq!(sqrt(9.0), checked_sqrt(9.0));

    let raised = panic::catch_unwind(AssertUnwindSafe(|| sqrt(-4.0))).unwrap_err();
    let fault = raised.downcast_ref::<SystemError>().unwrap();
    assert_eq!(fault.code(), Errc::InvalidArgument);

    let port = to_result(to_raising(parse_port));
    assert_eq!(port("443"), parse_port("443"));
    assert_eq!(port("x"), parse_port("x"));
}

#[test]
fn test_zero_is_invalid_argument() {
    fn nonzero(v: i32) -> i32 {
        if v == 0 {
            raise(Errc::InvalidArgument);
        }
        v
    }

    let wrapped = to_result(nonzero);
    assert_eq!(*wrapped(0).error(), Errc::InvalidArgument);
    assert_eq!(wrapped(5).release_value(), 5);

    let raising = to_raising(to_result(nonzero));
    assert_eq!(raising(5), 5);
    let payload = panic::catch_unwind(AssertUnwindSafe(|| raising(0))).unwrap_err();
    let fault = payload.downcast_ref::<SystemError>().unwrap();
    assert_eq!(fault.code(), ErrorCode::from(Errc::InvalidArgument));
}

// =============================================================================
// SystemError
// =============================================================================

#[test]
fn test_system_error_display_and_source() {
    let fault = SystemError::new(Errc::InvalidArgument);
    assert_eq!(fault.to_string(), "Invalid argument");

    let boxed: Box<dyn std::error::Error> = Box::new(fault);
    assert!(boxed.source().is_none());
}

#[test]
fn test_raise_carries_code() {
    let payload = panic::catch_unwind(|| raise(Errc::TimedOut)).unwrap_err();
    let fault = payload.downcast_ref::<SystemError>().unwrap();
    assert_eq!(fault.code(), ErrorCode::from(Errc::TimedOut));
}
