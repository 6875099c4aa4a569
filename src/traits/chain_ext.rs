//! Extension trait for starting a chain directly from a value.
//!
//! `value.chain()` reads better than `chain(&value)` in the middle of an
//! expression; both build the same root proxy.

use crate::types::ChainProxy;

/// Adds a `.chain()` entry point to every type.
///
/// The receiver is borrowed for the lifetime of the chain. Note that calling
/// this on an `Option<T>` wraps the `Option` itself; start from
/// `opt.as_ref()` via [`chain`](crate::chain()) to treat `None` as an absent
/// root instead.
///
/// # Examples
///
/// ```
/// use option_rail::ChainExt;
///
/// struct Server { port: u16 }
///
/// let server = Server { port: 8080 };
/// let port = server.chain().attr(|s| &s.port);
/// assert_eq!(port.get(), Some(&8080));
/// ```
pub trait ChainExt {
    /// Wraps `self` in a root proxy with `present = false`.
    fn chain(&self) -> ChainProxy<'_, Self>;
}

impl<T: ?Sized> ChainExt for T {
    #[inline]
    fn chain(&self) -> ChainProxy<'_, T> {
        ChainProxy::new(self)
    }
}
