//! Type-level boolean logic.
//!
//! Core types: `Present` (true), `Absent` (false), `Bool` trait.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Type-level conditional: If<Then, Else> (General Type Selector)
    type If<Then, Else>;

    /// Logical AND
    type And<Other: Bool>: Bool;

    /// Logical OR
    type Or<Other: Bool>: Bool;

    /// Logical NOT
    type Not: Bool;
}

/// Type-level True.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Present;

/// Type-level False.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type If<Then, Else> = Then;
    type And<Other: Bool> = Other;
    type Or<Other: Bool> = Present;
    type Not = Absent;
}

impl Bool for Absent {
    const VALUE: bool = false;
    type If<Then, Else> = Else;
    type And<Other: Bool> = Absent;
    type Or<Other: Bool> = Other;
    type Not = Present;
}

/// Bound satisfied only by `Present`.
///
/// Used in where clauses to require that a derived fact holds:
///
/// ```ignore
/// impl<E, T> ErrorOr<E, T> where StrongSwap<E, T>: IsPresent { ... }
/// ```
pub trait IsPresent: Bool {}

impl IsPresent for Present {}

/// Convert const bool to type-level Bool.
pub trait SelectBool<const B: bool> {
    type Out: Bool;
}

impl SelectBool<true> for () {
    type Out = Present;
}

impl SelectBool<false> for () {
    type Out = Absent;
}

/// Conditional Type Alias
pub type If<const C: bool, T, E> = <<() as SelectBool<C>>::Out as Bool>::If<T, E>;

/// `A && B` at the type level.
pub type And<A, B> = <A as Bool>::And<B>;

/// `A || B` at the type level.
pub type Or<A, B> = <A as Bool>::Or<B>;

/// `!A` at the type level.
pub type Not<A> = <A as Bool>::Not;
