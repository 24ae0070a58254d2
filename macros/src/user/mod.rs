//! User-facing macro implementations
//!
//! | Macro                  | Usage     | Purpose                         |
//! |------------------------|-----------|---------------------------------|
//! | `#[derive(SwapCaps)]`  | on a type | Answer the probe's facts        |

mod swap_caps;

pub use swap_caps::expand_derive_swap_caps;
