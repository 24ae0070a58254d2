//! Swap, assignment and transfer of `ErrorOr`.

use std::cell::Cell;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::panic::{self, AssertUnwindSafe};

use error_or::prelude::*;
use error_or::{swap, IsPresent, StrongSwap};

fn invalid() -> ErrorCode {
    Errc::InvalidArgument.into()
}

fn refused() -> ErrorCode {
    Errc::ConnectionRefused.into()
}

thread_local! {
    static TICKET_EXCHANGES: Cell<usize> = const { Cell::new(0) };
}

/// Carries its own exchange, which counts how often it runs.
#[derive(Debug, Clone, PartialEq, SwapCaps)]
#[swap_caps(exchange = Ticket::exchange_ids)]
struct Ticket {
    id: u32,
}

impl Ticket {
    fn exchange_ids(a: &mut Self, b: &mut Self) {
        TICKET_EXCHANGES.with(|n| n.set(n.get() + 1));
        std::mem::swap(&mut a.id, &mut b.id);
    }
}

/// A copy that refuses when armed.
#[derive(Debug, PartialEq, SwapCaps)]
#[swap_caps(clone)]
struct Fragile {
    armed: bool,
    payload: u32,
}

impl Clone for Fragile {
    fn clone(&self) -> Self {
        if self.armed {
            panic!("clone refused");
        }
        Fragile { armed: false, payload: self.payload }
    }
}

/// Outside the strong tier: its drop may panic.
#[derive(Debug, PartialEq, SwapCaps)]
#[swap_caps(drop_may_panic)]
struct Noisy(u8);

// =============================================================================
// Swap
// =============================================================================

#[test]
fn test_swap_value_with_error() {
    let mut a: ErrorCodeOr<String> = ErrorOr::with_value("left".to_string());
    let mut b: ErrorCodeOr<String> = ErrorOr::with_error(invalid());
    a.swap(&mut b);
    assert_eq!(*a.error(), Errc::InvalidArgument);
    assert_eq!(b.value(), "left");

    // Twice is the identity
    a.swap(&mut b);
    assert_eq!(a.value(), "left");
    assert_eq!(*b.error(), Errc::InvalidArgument);
}

/// Swap twice and check both containers are back where they started.
fn assert_involution<T>(a: ErrorCodeOr<T>, b: ErrorCodeOr<T>)
where
    T: SwapCaps + Clone + PartialEq + Debug,
    StrongSwap<ErrorCode, T>: IsPresent,
{
    let (mut x, mut y) = (a.clone(), b.clone());
    x.swap(&mut y);
    assert_eq!(x, b);
    assert_eq!(y, a);
    swap(&mut x, &mut y);
    assert_eq!(x, a);
    assert_eq!(y, b);
}

#[test]
fn test_swap_is_an_involution() {
    let value = |v: i32| ErrorCodeOr::<i32>::with_value(v);
    let error = |e: Errc| ErrorCodeOr::<i32>::with_error(e.into());
    let cases = [
        (value(1), value(2)),
        (value(1), error(Errc::TimedOut)),
        (error(Errc::InvalidArgument), value(2)),
        (error(Errc::InvalidArgument), error(Errc::ConnectionRefused)),
    ];
    for (a, b) in cases {
        assert_involution(a, b);
    }

    let tuple = |t: (u8, String)| ErrorCodeOr::<(u8, String)>::with_value(t);
    assert_involution(tuple((1, "a".into())), tuple((2, "b".into())));
    assert_involution(tuple((1, "a".into())), ErrorOr::with_error(invalid()));
}

#[test]
fn test_swap_involution_with_custom_exchange() {
    let ticket = |id: u32| ErrorCodeOr::<Ticket>::with_value(Ticket { id });
    let error = |e: Errc| ErrorCodeOr::<Ticket>::with_error(e.into());
    let cases = [
        (ticket(1), ticket(2)),
        (ticket(1), error(Errc::TimedOut)),
        (error(Errc::InvalidArgument), ticket(2)),
        (error(Errc::InvalidArgument), error(Errc::ConnectionRefused)),
    ];
    for (a, b) in cases {
        assert_involution(a, b);
    }
}

#[test]
fn test_swap_same_alternative() {
    let mut a: ErrorCodeOr<i32> = ErrorOr::with_value(1);
    let mut b: ErrorCodeOr<i32> = ErrorOr::with_value(2);
    swap(&mut a, &mut b);
    assert_eq!((*a.value(), *b.value()), (2, 1));

    let mut a: ErrorCodeOr<i32> = ErrorOr::with_error(invalid());
    let mut b: ErrorCodeOr<i32> = ErrorOr::with_error(refused());
    swap(&mut a, &mut b);
    assert_eq!(*a.error(), Errc::ConnectionRefused);
    assert_eq!(*b.error(), Errc::InvalidArgument);
}

#[test]
fn test_swap_uses_custom_exchange_for_values_only() {
    let before = TICKET_EXCHANGES.with(Cell::get);

    let mut a: ErrorCodeOr<Ticket> = ErrorOr::with_value(Ticket { id: 1 });
    let mut b: ErrorCodeOr<Ticket> = ErrorOr::with_value(Ticket { id: 2 });
    a.swap(&mut b);
    assert_eq!(a.value().id, 2);
    assert_eq!(b.value().id, 1);
    assert_eq!(TICKET_EXCHANGES.with(Cell::get), before + 1);

    // Crossing alternatives relocates, no exchange involved
    let mut c: ErrorCodeOr<Ticket> = ErrorOr::with_error(invalid());
    a.swap(&mut c);
    assert!(a.is_err());
    assert_eq!(c.value().id, 2);
    assert_eq!(TICKET_EXCHANGES.with(Cell::get), before + 1);
}

#[test]
fn test_swap_nested_containers() {
    let inner: ErrorCodeOr<u8> = ErrorOr::with_value(3);
    let mut a: ErrorCodeOr<ErrorCodeOr<u8>> = ErrorOr::with_value(inner);
    let mut b: ErrorCodeOr<ErrorCodeOr<u8>> = ErrorOr::with_error(invalid());
    a.swap(&mut b);
    assert!(a.is_err());
    assert_eq!(*b.value().value(), 3);
}

// =============================================================================
// Assignment
// =============================================================================

#[test]
fn test_tuple_payload_swap_and_assign() {
    let mut c: ErrorCodeOr<(u8, u8)> = ErrorOr::with_value((1, 2));
    c.assign_value((3, 4));
    assert_eq!(*c.value(), (3, 4));

    let mut other: ErrorCodeOr<(u8, u8)> = ErrorOr::with_error(invalid());
    c.swap(&mut other);
    assert!(c.is_err());
    assert_eq!(*other.value(), (3, 4));
}

#[test]
fn test_map_payload_swap_and_assign() {
    let mut a: ErrorCodeOr<HashMap<String, i32>> =
        ErrorOr::with_value(HashMap::from([("port".to_string(), 80)]));
    let mut b: ErrorCodeOr<HashMap<String, i32>> =
        ErrorOr::with_value(HashMap::from([("port".to_string(), 443)]));
    a.swap(&mut b);
    assert_eq!(a.value()["port"], 443);
    assert_eq!(b.value()["port"], 80);

    a.assign_error(refused());
    assert_eq!(*a.error(), Errc::ConnectionRefused);
    a.assign_cloned(&b);
    assert_eq!(a.value()["port"], 80);
}

#[test]
fn test_array_and_result_payloads() {
    let mut a: ErrorCodeOr<[u8; 4]> = ErrorOr::with_value([1, 2, 3, 4]);
    a.assign_value([9; 4]);
    assert_eq!(*a.value(), [9; 4]);

    let mut r: ErrorCodeOr<Result<u8, String>> = ErrorOr::with_value(Ok(1));
    r.assign_value(Err("late".to_string()));
    assert_eq!(*r.value(), Err("late".to_string()));

    let mut m: ErrorCodeOr<BTreeMap<u32, Vec<u8>>> = ErrorOr::default();
    m.value_mut().insert(1, vec![7]);
    let mut n: ErrorCodeOr<BTreeMap<u32, Vec<u8>>> = ErrorOr::with_error(invalid());
    m.swap(&mut n);
    assert_eq!(n.value()[&1], [7]);
}

#[test]
fn test_assign_all_alternative_pairs() {
    let mut c: ErrorCodeOr<String> = ErrorOr::with_value("a".to_string());

    c.assign(ErrorOr::with_value("b".to_string()));
    assert_eq!(c.value(), "b");

    c.assign(ErrorOr::with_error(invalid()));
    assert_eq!(*c.error(), Errc::InvalidArgument);

    c.assign(ErrorOr::with_error(refused()));
    assert_eq!(*c.error(), Errc::ConnectionRefused);

    c.assign(ErrorOr::with_value("c".to_string()));
    assert_eq!(c.value(), "c");
}

#[test]
fn test_assign_value_and_error() {
    let mut c: ErrorCodeOr<i32> = ErrorOr::with_error(invalid());
    c.assign_value(10);
    assert_eq!(*c.value(), 10);

    c.assign_error(refused());
    assert_eq!(*c.error(), Errc::ConnectionRefused);
}

#[test]
fn test_assign_falsy_error_leaves_target_untouched() {
    let mut c: ErrorCodeOr<i32> = ErrorOr::with_value(10);
    let result = panic::catch_unwind(AssertUnwindSafe(|| c.assign_error(ErrorCode::success())));
    assert!(result.is_err());
    assert_eq!(*c.value(), 10);
}

#[test]
fn test_assign_from_compatible_instantiation() {
    let mut c: ErrorCodeOr<i64> = ErrorOr::with_value(0);
    c.assign_from(ErrorCodeOr::<i32>::with_value(-4));
    assert_eq!(*c.value(), -4i64);

    c.assign_from(ErrorCodeOr::<i32>::with_error(invalid()));
    assert!(c.is_err());
}

#[test]
fn test_assign_cloned() {
    let source: ErrorCodeOr<Vec<u8>> = ErrorOr::with_value(vec![1, 2]);
    let mut c: ErrorCodeOr<Vec<u8>> = ErrorOr::with_error(invalid());
    c.assign_cloned(&source);
    assert_eq!(c, source);
}

#[test]
fn test_assign_cloned_is_all_or_nothing() {
    let mut target: ErrorCodeOr<Fragile> =
        ErrorOr::with_value(Fragile { armed: false, payload: 1 });
    let source: ErrorCodeOr<Fragile> = ErrorOr::with_value(Fragile { armed: true, payload: 2 });

    let result = panic::catch_unwind(AssertUnwindSafe(|| target.assign_cloned(&source)));
    assert!(result.is_err());
    assert_eq!(target.value().payload, 1);

    // Same guarantee when the target holds the other alternative
    let mut target: ErrorCodeOr<Fragile> = ErrorOr::with_error(refused());
    let result = panic::catch_unwind(AssertUnwindSafe(|| target.assign_cloned(&source)));
    assert!(result.is_err());
    assert_eq!(*target.error(), Errc::ConnectionRefused);
}

// =============================================================================
// Replace (every instantiation)
// =============================================================================

#[test]
fn test_replace_hands_back_previous_state() {
    let mut c: ErrorCodeOr<Noisy> = ErrorOr::with_value(Noisy(1));
    let previous = c.replace(ErrorOr::with_error(invalid()));
    assert_eq!(*previous.value(), Noisy(1));
    assert_eq!(*c.error(), Errc::InvalidArgument);

    let previous = c.replace(ErrorOr::with_value(Noisy(2)));
    assert!(previous.is_err());
    assert_eq!(*c.value(), Noisy(2));
}

// =============================================================================
// Transfer
// =============================================================================

#[test]
fn test_transfer_moves_when_take_cannot_panic() {
    let mut source: ErrorCodeOr<String> = ErrorOr::with_value("buffer".to_string());
    let moved = ErrorCodeOr::<String>::transfer_from(&mut source);
    assert_eq!(moved.value(), "buffer");
    // Source keeps its alternative, emptied
    assert!(source.ok());
    assert_eq!(source.value(), "");
}

#[test]
fn test_transfer_copies_error_code() {
    let mut source: ErrorCodeOr<String> = ErrorOr::with_error(invalid());
    let moved = ErrorCodeOr::<String>::transfer_from(&mut source);
    assert_eq!(*moved.error(), Errc::InvalidArgument);
    // ErrorCode has no empty state, so the source stays a truthy error
    assert_eq!(*source.error(), Errc::InvalidArgument);
}

#[test]
fn test_transfer_copies_without_cheap_take() {
    let mut source: ErrorCodeOr<Fragile> =
        ErrorOr::with_value(Fragile { armed: false, payload: 8 });
    let copy = ErrorCodeOr::<Fragile>::transfer_from(&mut source);
    assert_eq!(copy.value().payload, 8);
    assert_eq!(source.value().payload, 8);
}

#[test]
fn test_transfer_converts_value() {
    let mut source: ErrorCodeOr<u16> = ErrorOr::with_value(80);
    let wide = ErrorCodeOr::<u64>::transfer_from(&mut source);
    assert_eq!(*wide.value(), 80u64);
}
