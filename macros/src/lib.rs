//! Procedural macros for the error-or capability probe
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(SwapCaps)]` | struct/enum | Answer the probe's facts for a user type |
//! | `define_std_swap_caps!()` | - | Internal: std impls from the type table |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(SwapCaps)]
//! #[swap_caps(exchange = Pool::exchange_slots, exchange_may_panic)]
//! struct Pool { slots: Vec<u32> }
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Three-tier: inner / common / user)
// =============================================================================

mod inner;
mod common;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Generate `SwapCaps` impls for primitives and std types.
///
/// Only meant to be invoked once, inside the main crate.
#[proc_macro]
pub fn define_std_swap_caps(_input: TokenStream) -> TokenStream {
    inner::std_types::expand_std_swap_caps().into()
}

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Derive macro to implement `SwapCaps`.
///
/// # Options
///
/// ```ignore
/// #[swap_caps(exchange = path)]      // type-specific exchange fn(&mut Self, &mut Self)
/// #[swap_caps(exchange_may_panic)]   // that exchange can panic
/// #[swap_caps(take)]                 // Default exists and cannot panic
/// #[swap_caps(clone)]                // a copy exists (auto-detected for concrete types)
/// #[swap_caps(drop_may_panic)]       // a Drop impl can panic
/// #[swap_caps(drop_no_panic)]        // dropping cannot panic, fields unchecked
/// ```
///
/// Without a drop override, `DropNoPanic` is the conjunction of every
/// field type's answer.
///
/// # Usage
/// ```ignore
/// #[derive(Clone, SwapCaps)]
/// struct Reading { celsius: f64, label: String }
///
/// assert!(error_or::probe::facts::<Reading>().strong);
/// ```
#[proc_macro_derive(SwapCaps, attributes(swap_caps))]
pub fn derive_swap_caps(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_swap_caps(input).into()
}
