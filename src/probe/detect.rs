//! Autoref-based probing for concrete types.
//!
//! This module implements the "Inherent Const Fallback" pattern:
//!
//! 1. Define a fallback trait with a default const
//! 2. Implement the fallback for `Detect<X>` for all X
//! 3. Implement an inherent const for `Detect<X>` where X has the capability
//!
//! When resolving `Detect::<Concrete>::CONST` the compiler prefers the
//! inherent const when its bounds hold and otherwise finds the trait const.
//! That gives the probe its lookup order: a type-specific `SwapCaps`
//! exchange first, then the three-step fallback for any sized type.
//!
//! ## Limitation
//!
//! This only works for **concrete types** known at the call site.
//! In generic code use [`facts`](super::facts) with a `SwapCaps` bound.

use core::marker::PhantomData;

use super::SwapCaps;
use crate::primitives::Bool;

/// Detection wrapper type.
#[doc(hidden)]
pub struct Detect<T: ?Sized>(PhantomData<T>);

/// Fallback for unsized types: nothing to exchange.
#[doc(hidden)]
pub trait SizedFallback {
    const IS_SWAPPABLE: bool = false;
}
impl<T: ?Sized> SizedFallback for Detect<T> {}
impl<T> Detect<T> {
    pub const IS_SWAPPABLE: bool = true;
}

/// Fallback for types without `SwapCaps`: the three-step exchange.
#[doc(hidden)]
pub trait CapsFallback {
    const EXCHANGE_NO_PANIC: bool = true;
    const CUSTOM_EXCHANGE: bool = false;
    const DROP_NO_PANIC: bool = true;
}
impl<T: ?Sized> CapsFallback for Detect<T> {}
impl<T: SwapCaps> Detect<T> {
    pub const EXCHANGE_NO_PANIC: bool = <T::ExchangeNoPanic as Bool>::VALUE;
    pub const CUSTOM_EXCHANGE: bool = <T::CustomExchange as Bool>::VALUE;
    pub const DROP_NO_PANIC: bool = <T::DropNoPanic as Bool>::VALUE;
}

/// Generate fallback trait + inherent const for a std trait.
macro_rules! impl_detect {
    ($Trait:ident) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$Trait Fallback>] { const [<IS_ $Trait:upper>]: bool = false; }
            impl<T: ?Sized> [<$Trait Fallback>] for Detect<T> {}
            impl<T: $Trait> Detect<T> { pub const [<IS_ $Trait:upper>]: bool = true; }
        }
    };
}

// Used by #[derive(SwapCaps)] to fill in `Cloneable` for non-generic types.
impl_detect!(Clone);

/// Probe any concrete type, whether or not it implements `SwapCaps`.
///
/// Expands to a [`SwapFacts`](crate::probe::SwapFacts) constant expression.
///
/// # Usage
/// ```ignore
/// use error_or::swap_probe;
///
/// assert!(swap_probe!(String).nothrow_swappable);
/// assert!(!swap_probe!(str).swappable);
/// ```
#[macro_export]
macro_rules! swap_probe {
    ($ty:ty) => {{
        #[allow(unused_imports)]
        use $crate::probe::detect::{CapsFallback, SizedFallback};
        const SWAPPABLE: bool = $crate::probe::detect::Detect::<$ty>::IS_SWAPPABLE;
        const NO_PANIC: bool = $crate::probe::detect::Detect::<$ty>::EXCHANGE_NO_PANIC;
        const DROP_NO_PANIC: bool = $crate::probe::detect::Detect::<$ty>::DROP_NO_PANIC;
        $crate::probe::SwapFacts {
            swappable: SWAPPABLE,
            nothrow_swappable: SWAPPABLE && NO_PANIC,
            custom_exchange: SWAPPABLE && $crate::probe::detect::Detect::<$ty>::CUSTOM_EXCHANGE,
            strong: SWAPPABLE && NO_PANIC && DROP_NO_PANIC,
        }
    }};
}
