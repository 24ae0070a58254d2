// Internal macros: code generated for the main crate itself
//
// - std_types: SwapCaps impls for primitives and std types

pub mod std_types;
