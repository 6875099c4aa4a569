//! The chain proxy type and its value alias.
//!
//! # Examples
//!
//! ```
//! use option_rail::ChainProxy;
//!
//! struct User { name: String }
//!
//! let user = User { name: "ada".into() };
//! let proxy = ChainProxy::new(&user).attr(|u| &u.name);
//! assert!(proxy.is_present());
//! ```

pub mod chain_proxy;

pub use chain_proxy::*;

/// The value slot carried by a proxy: a borrowed value, or `None` once the
/// chain has gone absent.
///
/// `None` is the absence marker; there is no separate sentinel type.
pub type ChainValue<'a, T> = Option<&'a T>;
