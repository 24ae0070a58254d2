//! # Layer 2: The value-or-error container
//!
//! `ErrorOr<E, T>` holds exactly one live alternative: an error `E` or a
//! value `T`. The alternative and its discriminant live in one private enum,
//! so they can never disagree.
//!
//! ## Tiers
//!
//! The capability probe decides, once per instantiation, how far mutation
//! can be trusted:
//!
//! ```text
//! StrongSwap<E, T> = Present   swap, assign, assign_value, assign_error,
//!                              assign_from, assign_cloned
//! any instantiation            replace (relocates, hands the old state back)
//! ```
//!
//! Everything else (construction, access, release, equality) is available
//! for every instantiation.

use core::fmt;
use core::hash::{Hash, Hasher};

use crate::code::{Errc, ErrorCode};
use crate::primitives::{And, IsPresent};
use crate::probe::{StrongSwap, SwapCaps, Transfer, TransferPolicy, transfer};
use crate::truthy::Truthy;

#[derive(Clone)]
enum Slot<E, T> {
    Error(E),
    Value(T),
}

/// A value of type `T`, or an error of type `E` explaining why there is none.
#[derive(Clone)]
pub struct ErrorOr<E, T> {
    slot: Slot<E, T>,
}

/// Container whose error alternative is a system-level [`ErrorCode`].
pub type ErrorCodeOr<T> = ErrorOr<ErrorCode, T>;

/// [`ErrorCodeOr`] owning its value on the heap.
#[cfg(feature = "alloc")]
pub type ErrorCodeOrBox<T> = ErrorCodeOr<alloc::boxed::Box<T>>;

/// Container whose error alternative is a portable condition.
pub type ErrorConditionOr<T> = ErrorOr<Errc, T>;

/// [`ErrorConditionOr`] owning its value on the heap.
#[cfg(feature = "alloc")]
pub type ErrorConditionOrBox<T> = ErrorConditionOr<alloc::boxed::Box<T>>;

// =============================================================================
// Construction
// =============================================================================

impl<E, T> ErrorOr<E, T> {
    /// Success container holding `value`.
    #[inline]
    pub const fn with_value(value: T) -> Self {
        Self { slot: Slot::Value(value) }
    }

    /// Failure container holding `error`.
    ///
    /// # Panics
    ///
    /// If `error` is falsy: a container cannot carry "no error" as its error.
    #[inline]
    #[track_caller]
    pub fn with_error(error: E) -> Self
    where
        E: Truthy,
    {
        assert!(
            error.is_truthy(),
            "ErrorOr::with_error: error alternative constructed from a falsy error"
        );
        Self { slot: Slot::Error(error) }
    }

    /// Converting construction from a compatible container.
    ///
    /// The alternative is preserved; a value is converted with `T::from`.
    #[inline]
    pub fn convert<U>(other: ErrorOr<E, U>) -> Self
    where
        T: From<U>,
    {
        match other.slot {
            Slot::Error(error) => Self { slot: Slot::Error(error) },
            Slot::Value(value) => Self::with_value(T::from(value)),
        }
    }

    /// Move-construct from a container that stays valid.
    ///
    /// Both containers keep their alternative. The payload is moved out of
    /// `other` (leaving its `Default` behind) when the probe says that cannot
    /// panic or there is no copy, and cloned otherwise. See
    /// [`transfer`](crate::probe::transfer).
    pub fn transfer_from<U>(other: &mut ErrorOr<E, U>) -> Self
    where
        T: From<U>,
        E: SwapCaps,
        U: SwapCaps,
        Transfer<E>: TransferPolicy<E>,
        Transfer<U>: TransferPolicy<U>,
    {
        match &mut other.slot {
            Slot::Error(error) => Self { slot: Slot::Error(transfer(error)) },
            Slot::Value(value) => Self::with_value(T::from(transfer(value))),
        }
    }
}

impl<E, T: Default> Default for ErrorOr<E, T> {
    /// Success container holding `T::default()`.
    #[inline]
    fn default() -> Self {
        Self::with_value(T::default())
    }
}

/// Success container whose value is collected from `iter`.
impl<E, T, A> FromIterator<A> for ErrorOr<E, T>
where
    T: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self::with_value(iter.into_iter().collect())
    }
}

// =============================================================================
// Observation
// =============================================================================

impl<E, T> ErrorOr<E, T> {
    /// Whether the value alternative is live.
    #[inline]
    pub const fn ok(&self) -> bool {
        matches!(self.slot, Slot::Value(_))
    }

    /// Whether the error alternative is live.
    #[inline]
    pub const fn is_err(&self) -> bool {
        !self.ok()
    }

    /// # Panics
    ///
    /// If the container holds a value.
    #[inline]
    #[track_caller]
    pub fn error(&self) -> &E {
        match &self.slot {
            Slot::Error(error) => error,
            Slot::Value(_) => panic!("ErrorOr::error called on a container holding a value"),
        }
    }

    /// # Panics
    ///
    /// If the container holds an error.
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T {
        match &self.slot {
            Slot::Value(value) => value,
            Slot::Error(_) => panic!("ErrorOr::value called on a container holding an error"),
        }
    }

    /// # Panics
    ///
    /// If the container holds an error.
    #[inline]
    #[track_caller]
    pub fn value_mut(&mut self) -> &mut T {
        match &mut self.slot {
            Slot::Value(value) => value,
            Slot::Error(_) => panic!("ErrorOr::value_mut called on a container holding an error"),
        }
    }

    /// Move the error out.
    ///
    /// # Panics
    ///
    /// If the container holds a value.
    #[inline]
    #[track_caller]
    pub fn release_error(self) -> E {
        match self.slot {
            Slot::Error(error) => error,
            Slot::Value(_) => panic!("ErrorOr::release_error called on a container holding a value"),
        }
    }

    /// Move the value out.
    ///
    /// # Panics
    ///
    /// If the container holds an error.
    #[inline]
    #[track_caller]
    pub fn release_value(self) -> T {
        match self.slot {
            Slot::Value(value) => value,
            Slot::Error(_) => panic!("ErrorOr::release_value called on a container holding an error"),
        }
    }

    #[inline]
    pub fn as_result(&self) -> Result<&T, &E> {
        match &self.slot {
            Slot::Value(value) => Ok(value),
            Slot::Error(error) => Err(error),
        }
    }

    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self.slot {
            Slot::Value(value) => Ok(value),
            Slot::Error(error) => Err(error),
        }
    }
}

impl<E, T> From<&ErrorOr<E, T>> for bool {
    #[inline]
    fn from(container: &ErrorOr<E, T>) -> bool {
        container.ok()
    }
}

impl<E, T> From<ErrorOr<E, T>> for Result<T, E> {
    #[inline]
    fn from(container: ErrorOr<E, T>) -> Self {
        container.into_result()
    }
}

impl<E: Truthy, T> From<Result<T, E>> for ErrorOr<E, T> {
    /// # Panics
    ///
    /// If the `Err` holds a falsy error.
    #[track_caller]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::with_value(value),
            Err(error) => Self::with_error(error),
        }
    }
}

// =============================================================================
// Mutation
// =============================================================================

impl<E, T> ErrorOr<E, T> {
    /// Put `other` in place and hand the previous state back.
    ///
    /// Available for every instantiation. Nothing is dropped inside the
    /// container, so a panicking drop of the old state happens in the caller.
    #[inline]
    #[must_use = "the previous state is returned to be dropped by the caller"]
    pub fn replace(&mut self, other: Self) -> Self {
        core::mem::replace(self, other)
    }
}

impl<E, T> ErrorOr<E, T>
where
    E: SwapCaps,
    T: SwapCaps,
    StrongSwap<E, T>: IsPresent,
{
    /// Exchange the contents of two containers.
    ///
    /// Same alternative: the payload type's own exchange. Different
    /// alternatives: both alternatives are relocated together with their
    /// discriminants.
    ///
    /// Payloads whose drop may panic stay outside this tier:
    ///
    /// ```compile_fail
    /// use error_or::{ErrorCodeOr, ErrorOr, SwapCaps};
    ///
    /// #[derive(SwapCaps)]
    /// #[swap_caps(drop_may_panic)]
    /// struct Flusher(u8);
    ///
    /// let mut a: ErrorCodeOr<Flusher> = ErrorOr::with_value(Flusher(1));
    /// let mut b: ErrorCodeOr<Flusher> = ErrorOr::with_value(Flusher(2));
    /// a.swap(&mut b);
    /// ```
    pub fn swap(&mut self, other: &mut Self) {
        match (&mut self.slot, &mut other.slot) {
            (Slot::Value(a), Slot::Value(b)) => T::exchange(a, b),
            (Slot::Error(a), Slot::Error(b)) => E::exchange(a, b),
            // Bitwise relocation cannot unwind.
            (this, that) => core::mem::swap(this, that),
        }
    }

    /// Copy-and-swap assignment from another container.
    ///
    /// The incoming state is already built; after the swap the temporary
    /// holds the old state and drops it.
    #[inline]
    pub fn assign(&mut self, other: Self) {
        let mut incoming = other;
        incoming.swap(self);
    }

    #[inline]
    pub fn assign_value(&mut self, value: T) {
        self.assign(Self::with_value(value));
    }

    /// # Panics
    ///
    /// If `error` is falsy. `self` is left untouched.
    #[inline]
    #[track_caller]
    pub fn assign_error(&mut self, error: E)
    where
        E: Truthy,
    {
        self.assign(Self::with_error(error));
    }

    /// Assignment from a compatible container.
    #[inline]
    pub fn assign_from<U>(&mut self, other: ErrorOr<E, U>)
    where
        T: From<U>,
    {
        self.assign(Self::convert(other));
    }

    /// Copy assignment.
    ///
    /// If cloning `other` panics, `self` is left untouched.
    #[inline]
    pub fn assign_cloned(&mut self, other: &Self)
    where
        E: Clone,
        T: Clone,
    {
        self.assign(other.clone());
    }
}

/// Exchange the contents of two containers. See [`ErrorOr::swap`].
#[inline]
pub fn swap<E, T>(a: &mut ErrorOr<E, T>, b: &mut ErrorOr<E, T>)
where
    E: SwapCaps,
    T: SwapCaps,
    StrongSwap<E, T>: IsPresent,
{
    a.swap(b);
}

// Containers nest: an ErrorOr is itself a payload. Whole-container
// exchange is a relocation.
impl<E: SwapCaps, T: SwapCaps> SwapCaps for ErrorOr<E, T> {
    type CustomExchange = crate::Absent;
    type ExchangeNoPanic = crate::Present;
    type TakeNoPanic = crate::Absent;
    type Cloneable = And<E::Cloneable, T::Cloneable>;
    type DropNoPanic = And<E::DropNoPanic, T::DropNoPanic>;
}

// =============================================================================
// Comparison and formatting
// =============================================================================

impl<E1, T1, E2, T2> PartialEq<ErrorOr<E2, T2>> for ErrorOr<E1, T1>
where
    E1: PartialEq<E2>,
    T1: PartialEq<T2>,
{
    fn eq(&self, other: &ErrorOr<E2, T2>) -> bool {
        match (&self.slot, &other.slot) {
            (Slot::Value(a), Slot::Value(b)) => a == b,
            (Slot::Error(a), Slot::Error(b)) => a == b,
            _ => false,
        }
    }
}

impl<E: Eq, T: Eq> Eq for ErrorOr<E, T> {}

impl<E: Hash, T: Hash> Hash for ErrorOr<E, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ok().hash(state);
        match &self.slot {
            Slot::Value(value) => value.hash(state),
            Slot::Error(error) => error.hash(state),
        }
    }
}

impl<E: fmt::Debug, T: fmt::Debug> fmt::Debug for ErrorOr<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Slot::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Slot::Error(error) => f.debug_tuple("Error").field(error).finish(),
        }
    }
}
