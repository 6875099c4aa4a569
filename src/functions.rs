//! Free-function entry points: construct a chain, extract its value.
//!
//! These mirror the method surface on [`ChainProxy`] for callers who prefer
//! `get_value(proxy, default)` over `proxy.get_value(default)`.

use crate::traits::IntoChainValue;
use crate::types::{ChainProxy, ChainValue};

/// Wraps a value for null-safe attribute traversal.
///
/// Accepts a plain reference or an `Option` of one; an absent root is legal
/// and every traversal on it yields an absent proxy. The root proxy's
/// presence flag starts `false` either way.
///
/// # Examples
///
/// ```
/// use option_rail::chain;
///
/// struct Engine { horsepower: u32 }
/// struct Car { engine: Option<Engine> }
///
/// let car = Car { engine: Some(Engine { horsepower: 200 }) };
/// let hp = chain(&car)
///     .try_attr(|c| c.engine.as_ref())
///     .attr(|e| &e.horsepower);
/// assert_eq!(hp.get(), Some(&200));
/// ```
#[inline]
pub fn chain<'a, T, V>(value: V) -> ChainProxy<'a, T>
where
    T: ?Sized,
    V: IntoChainValue<'a, T>,
{
    ChainProxy::new(value)
}

/// Terminal extraction with an optional default.
///
/// Returns `default` when the proxy is not present and a default was
/// supplied; otherwise the held value as-is, `None` included.
///
/// # Examples
///
/// ```
/// use option_rail::{chain, get_value};
///
/// struct User { nickname: Option<String> }
///
/// let user = User { nickname: None };
/// let nick = chain(&user).try_attr(|u| u.nickname.as_ref());
///
/// assert_eq!(get_value(nick, None), None);
/// let fallback = String::from("anonymous");
/// assert_eq!(get_value(nick, Some(&fallback)), Some(&fallback));
/// ```
#[inline]
pub fn get_value<'a, T: ?Sized>(
    proxy: ChainProxy<'a, T>,
    default: ChainValue<'a, T>,
) -> ChainValue<'a, T> {
    proxy.get_value(default)
}
