//! # Layer 0: Primitives
//!
//! - `bool.rs`: Type-level boolean logic (Present/Absent).

pub mod bool;

// Re-export key types at this level
pub use bool::{And, Absent, Bool, If, IsPresent, Not, Or, Present, SelectBool};
