//! Conversion trait for root values handed to [`chain`](crate::chain()).
//!
//! Both a plain reference and an `Option` of one are accepted, so a chain
//! can start from a value that is itself already absent.

use crate::types::ChainValue;

/// Types that can seed a chain.
///
/// Implemented for `&T` (always a value) and `Option<&T>` (possibly absent
/// from the start). For an `Option<T>` field or local, pass `opt.as_ref()`.
///
/// # Examples
///
/// ```
/// use option_rail::chain;
///
/// struct User { id: u32 }
///
/// let user = User { id: 1 };
/// let from_ref = chain(&user);
/// assert!(from_ref.get().is_some());
///
/// let from_none = chain(None::<&User>);
/// assert!(from_none.get().is_none());
/// ```
pub trait IntoChainValue<'a, T: ?Sized> {
    /// Converts `self` into the proxy's value slot.
    fn into_chain_value(self) -> ChainValue<'a, T>;
}

impl<'a, T: ?Sized> IntoChainValue<'a, T> for &'a T {
    #[inline]
    fn into_chain_value(self) -> ChainValue<'a, T> {
        Some(self)
    }
}

impl<'a, T: ?Sized> IntoChainValue<'a, T> for Option<&'a T> {
    #[inline]
    fn into_chain_value(self) -> ChainValue<'a, T> {
        self
    }
}
