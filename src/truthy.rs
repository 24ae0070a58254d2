//! Truthiness of error descriptors.
//!
//! An error alternative must describe an actual failure. `Truthy` is how the
//! container asks; a falsy descriptor (zero code, `None`, empty message) is
//! the "no error" sentinel and never becomes an error alternative.

/// Whether an error descriptor represents an actual failure.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

macro_rules! impl_truthy_int {
    ($($int:ident),* $(,)?) => {
        $(
            impl Truthy for $int {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }

            ::paste::paste! {
                impl Truthy for core::num::[<NonZero $int:camel>] {
                    #[inline]
                    fn is_truthy(&self) -> bool {
                        true
                    }
                }
            }
        )*
    };
}

impl_truthy_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl<T> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.is_some()
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

#[cfg(feature = "alloc")]
impl<T: Truthy + ?Sized> Truthy for alloc::boxed::Box<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

#[cfg(feature = "alloc")]
impl Truthy for alloc::string::String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

#[cfg(feature = "std")]
impl Truthy for std::io::Error {
    /// An `io::Error` always describes a failure.
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}
