//! `SwapCaps` for primitives and std types.
//!
//! The impls are generated from the type table in
//! `macros/src/inner/std_types.rs`.

macros::define_std_swap_caps!();
