#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library and the raise/return adapters
// - alloc: enables alloc types in no_std

//! # error-or
//!
//! A value-or-error container whose mutation guarantees are chosen at compile
//! time from the capabilities of its payload types.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Type-level Bool (Present / Absent), IsPresent, SelectBool      |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Capability Probe                                        |
//! |  - SwapCaps facts, std impls, #[derive(SwapCaps)], swap_probe!    |
//! |  - Transfer policy (move if it cannot panic, else copy)           |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: ErrorOr<E, T>                                           |
//! |  - strong tier: swap / assign when StrongSwap<E, T> = Present     |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Adapters (std)                                          |
//! |  - to_result / to_raising over SystemError                        |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use error_or::prelude::*;
//!
//! fn parse_port(raw: &str) -> ErrorCodeOr<u16> {
//!     match raw.parse() {
//!         Ok(port) => ErrorOr::with_value(port),
//!         Err(_) => ErrorOr::with_error(Errc::InvalidArgument.into()),
//!     }
//! }
//!
//! let mut a = parse_port("8080");
//! let mut b = parse_port("http");
//! a.swap(&mut b);
//! assert!(!a.ok() && b.ok());
//! ```

// Allow `::error_or` to work inside the crate itself
extern crate self as error_or;

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Capability Probe
// =============================================================================
pub mod probe;

pub mod truthy;
pub mod code;

// =============================================================================
// Layer 2: Container
// =============================================================================
pub mod container;

// =============================================================================
// Layer 3: Adapters
// =============================================================================
#[cfg(feature = "std")]
pub mod convert;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use primitives::bool::{Absent, Bool, IsPresent, Present};
pub use probe::{SwapCaps, SwapFacts, StrongSwap};
pub use truthy::Truthy;
pub use code::{Category, Errc, ErrorCode};
pub use container::{swap, ErrorCodeOr, ErrorConditionOr, ErrorOr};
#[cfg(feature = "alloc")]
pub use container::{ErrorCodeOrBox, ErrorConditionOrBox};
#[cfg(feature = "std")]
pub use convert::{raise, to_raising, to_result, SystemError};

// Re-export proc-macros
pub use macros::SwapCaps;

/// Common items.
pub mod prelude {
    pub use crate::code::{Errc, ErrorCode};
    pub use crate::container::{ErrorCodeOr, ErrorConditionOr, ErrorOr};
    pub use crate::probe::SwapCaps;
    pub use crate::truthy::Truthy;
    pub use macros::SwapCaps;
    #[cfg(feature = "std")]
    pub use crate::convert::{raise, to_raising, to_result, SystemError};
}
