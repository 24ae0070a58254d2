//! Move-if-no-panic transfer out of a borrowed place.
//!
//! Moving a payload out of `&mut T` needs something to leave behind. When
//! the probe says that cannot panic (or there is no copy to fall back on)
//! the value is taken and `Default` is left in place. Otherwise the value
//! is cloned and the source keeps its content.
//!
//! The choice is made once per type:
//!
//! ```text
//! TakeNoPanic || !Cloneable  =>  MoveOut   (core::mem::take)
//! otherwise                  =>  CopyOut   (Clone::clone)
//! ```

use super::SwapCaps;
use crate::primitives::{Bool, Not, Or};

/// Transfer by taking the value and leaving `Default` behind.
#[derive(Debug)]
pub struct MoveOut;

/// Transfer by cloning; the source is untouched.
#[derive(Debug)]
pub struct CopyOut;

/// A strategy for producing an owned `T` from a place that must stay valid.
pub trait TransferPolicy<T> {
    fn transfer(src: &mut T) -> T;
}

impl<T: Default> TransferPolicy<T> for MoveOut {
    #[inline]
    fn transfer(src: &mut T) -> T {
        core::mem::take(src)
    }
}

impl<T: Clone> TransferPolicy<T> for CopyOut {
    #[inline]
    fn transfer(src: &mut T) -> T {
        src.clone()
    }
}

/// The policy the probe selects for `T`.
pub type Transfer<T> = <Or<<T as SwapCaps>::TakeNoPanic, Not<<T as SwapCaps>::Cloneable>> as Bool>::If<
    MoveOut,
    CopyOut,
>;

/// Produce an owned `T` from `src` using the policy selected for `T`.
#[inline]
pub fn transfer<T>(src: &mut T) -> T
where
    T: SwapCaps,
    Transfer<T>: TransferPolicy<T>,
{
    <Transfer<T> as TransferPolicy<T>>::transfer(src)
}
