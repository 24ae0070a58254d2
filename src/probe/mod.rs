//! # Layer 1: Capability Probe
//!
//! Compile-time facts about a payload type's exchange, transfer and drop
//! behavior. The container consults them once per instantiation to pick
//! its swap/assign tier.
//!
//! ## Facts
//!
//! | Fact              | Meaning                                                    |
//! |-------------------|------------------------------------------------------------|
//! | `CustomExchange`  | a type-specific exchange replaces the three-step fallback  |
//! | `ExchangeNoPanic` | [`SwapCaps::exchange`] cannot panic                        |
//! | `TakeNoPanic`     | moving out of a place (leaving `Default`) cannot panic     |
//! | `Cloneable`       | a copy (`Clone`) exists                                    |
//! | `DropNoPanic`     | dropping a value cannot panic                              |
//!
//! Moves themselves are bitwise in Rust and cannot unwind, so there is no
//! fact for them.
//!
//! ## Usage
//!
//! ```ignore
//! use error_or::SwapCaps;
//!
//! #[derive(SwapCaps)]
//! #[swap_caps(exchange = Token::exchange_ids, drop_may_panic)]
//! struct Token { id: u64 }
//!
//! assert!(!error_or::probe::facts::<Token>().strong);
//! ```

pub mod transfer;
mod std_impls;

pub mod detect;

use crate::primitives::{And, Bool, Present};

pub use transfer::{transfer, CopyOut, MoveOut, Transfer, TransferPolicy};

/// Per-type capability facts.
///
/// Implemented for std types by this crate and for user types with
/// `#[derive(SwapCaps)]`. Every fact is a type-level [`Bool`], so bounds
/// like `T::ExchangeNoPanic: IsPresent` are checked by the compiler.
pub trait SwapCaps: Sized {
    /// `exchange` is type-specific rather than the three-step fallback.
    type CustomExchange: Bool;
    /// `exchange` cannot panic.
    type ExchangeNoPanic: Bool;
    /// Moving out of a borrowed place, leaving `Default` behind, cannot panic.
    type TakeNoPanic: Bool;
    /// A copy exists.
    type Cloneable: Bool;
    /// Drop cannot panic.
    type DropNoPanic: Bool;

    /// Exchange two values in place.
    ///
    /// Defaults to the generic three-step exchange.
    #[inline]
    fn exchange(a: &mut Self, b: &mut Self) {
        core::mem::swap(a, b);
    }
}

/// Exchange cannot panic.
pub type NothrowSwappable<T> = <T as SwapCaps>::ExchangeNoPanic;

/// What one payload must guarantee for the container's strong tier.
pub type StrongPayload<T> = And<<T as SwapCaps>::ExchangeNoPanic, <T as SwapCaps>::DropNoPanic>;

/// Strong tier of `ErrorOr<E, T>`: both payloads qualify.
pub type StrongSwap<E, T> = And<StrongPayload<E>, StrongPayload<T>>;

/// Runtime view of the probe's answers for one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapFacts {
    /// Some exchange exists (type-specific or the three-step fallback).
    pub swappable: bool,
    /// The exchange that would be used cannot panic.
    pub nothrow_swappable: bool,
    /// The exchange is type-specific.
    pub custom_exchange: bool,
    /// The type qualifies for the container's strong swap/assign tier.
    pub strong: bool,
}

/// Facts for a `SwapCaps` type, usable in generic code.
///
/// Every `SwapCaps` type is swappable: the default `exchange` is the
/// three-step fallback.
pub const fn facts<T: SwapCaps>() -> SwapFacts {
    SwapFacts {
        swappable: <<T::CustomExchange as Bool>::Or<Present> as Bool>::VALUE,
        nothrow_swappable: <NothrowSwappable<T> as Bool>::VALUE,
        custom_exchange: <T::CustomExchange as Bool>::VALUE,
        strong: <StrongPayload<T> as Bool>::VALUE,
    }
}

/// Whether `ErrorOr<E, T>` gets the strong swap/assign tier.
pub const fn is_strong<E: SwapCaps, T: SwapCaps>() -> bool {
    <StrongSwap<E, T> as Bool>::VALUE
}
