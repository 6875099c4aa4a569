//! Null-safe chain proxy over borrowed values.
//!
//! This module provides [`ChainProxy`], a wrapper that carries:
//! - the value produced by the last traversal step (or `None` once the chain
//!   has gone absent)
//! - a presence flag recording whether that last step resolved
//!
//! Traversal is total: stepping through a missing or absent attribute never
//! panics or errors, it simply produces an absent proxy that stays absent for
//! the rest of the chain.

use core::fmt;

use crate::traits::IntoChainValue;
use crate::types::ChainValue;

/// Proxy over a borrowed value that defers the "is there a value" decision to
/// the end of an attribute chain.
///
/// A proxy is two words (`Option<&T>` plus a `bool`) and is `Copy`; every
/// traversal step returns a fresh proxy and leaves the original untouched.
///
/// The presence flag reflects the *last traversal step*, not the held value's
/// own truthiness: a resolved `0`, `""` or `false` is still present. A root
/// proxy built by [`chain`](crate::chain()) starts with `present = false` even
/// when it wraps a real value, because no traversal has happened yet.
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
///
/// assert!(hp.is_present());
/// assert_eq!(hp.get(), Some(&200));
///
/// let wreck = Car { engine: None };
/// let hp = chain(&wreck)
///     .try_attr(|c| c.engine.as_ref())
///     .attr(|e| &e.horsepower);
///
/// assert!(!hp.is_present());
/// assert_eq!(hp.get(), None);
/// ```
#[must_use]
pub struct ChainProxy<'a, T: ?Sized> {
    pub(crate) value: ChainValue<'a, T>,
    pub(crate) present: bool,
}

impl<'a, T: ?Sized> ChainProxy<'a, T> {
    /// Creates a root proxy from anything convertible to a chain value
    /// (a plain reference or an `Option` of one).
    ///
    /// The presence flag starts `false` regardless of the wrapped value;
    /// presence becomes meaningful after the first traversal step.
    #[inline]
    pub fn new<V>(value: V) -> Self
    where
        V: IntoChainValue<'a, T>,
    {
        Self {
            value: value.into_chain_value(),
            present: false,
        }
    }

    /// Creates a proxy that holds nothing.
    ///
    /// Every traversal on it yields another absent proxy.
    #[inline]
    pub const fn absent() -> Self {
        Self {
            value: None,
            present: false,
        }
    }

    /// Steps the chain through an attribute that always exists.
    ///
    /// The accessor runs only when the held value is non-absent; the
    /// resulting proxy is present exactly in that case. On an absent proxy
    /// the accessor is skipped and absence carries forward.
    ///
    /// # Examples
    ///
    /// ```
    /// use option_rail::chain;
    ///
    /// struct User { name: String }
    ///
    /// let user = User { name: "ada".into() };
    /// let name = chain(&user).attr(|u| &u.name);
    /// assert_eq!(name.get().map(String::as_str), Some("ada"));
    /// ```
    #[inline]
    pub fn attr<U: ?Sized, F>(self, accessor: F) -> ChainProxy<'a, U>
    where
        F: FnOnce(&'a T) -> &'a U,
    {
        let next = match self.value {
            Some(value) => ChainProxy {
                value: Some(accessor(value)),
                present: true,
            },
            None => ChainProxy::absent(),
        };
        trace_step::<U>(next.present);
        next
    }

    /// Steps the chain through an attribute that may be missing or absent.
    ///
    /// Absent input, or an accessor returning `None`, both yield an absent
    /// proxy; the two cases are deliberately indistinguishable downstream.
    ///
    /// # Examples
    ///
    /// ```
    /// use option_rail::chain;
    ///
    /// struct User { nickname: Option<String> }
    ///
    /// let user = User { nickname: None };
    /// let nick = chain(&user).try_attr(|u| u.nickname.as_ref());
    /// assert!(!nick.is_present());
    /// ```
    #[inline]
    pub fn try_attr<U: ?Sized, F>(self, accessor: F) -> ChainProxy<'a, U>
    where
        F: FnOnce(&'a T) -> Option<&'a U>,
    {
        let next = match self.value.and_then(accessor) {
            Some(value) => ChainProxy {
                value: Some(value),
                present: true,
            },
            None => ChainProxy::absent(),
        };
        trace_step::<U>(next.present);
        next
    }

    /// Returns whether the last traversal step resolved to a value.
    ///
    /// This is the boolean coercion of the proxy: it answers "did the whole
    /// path resolve", never "is the resolved value truthy".
    #[inline]
    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Returns the held value as-is.
    ///
    /// An absent chain returns `None`; a root proxy returns its wrapped
    /// value even though its presence flag is still `false`.
    #[inline]
    pub fn get(self) -> ChainValue<'a, T> {
        self.value
    }

    /// Returns the resolved value, or `default` when the proxy is not
    /// present.
    ///
    /// Unlike [`get_value`](Self::get_value) the default here is
    /// unconditional, so callers can supply any value as the fallback.
    ///
    /// # Examples
    ///
    /// ```
    /// use option_rail::chain;
    ///
    /// struct User { nickname: Option<u32> }
    ///
    /// let user = User { nickname: None };
    /// let id = chain(&user).try_attr(|u| u.nickname.as_ref()).get_or(&7);
    /// assert_eq!(*id, 7);
    /// ```
    #[inline]
    pub fn get_or(self, default: &'a T) -> &'a T {
        match self.value {
            Some(value) if self.present => value,
            _ => default,
        }
    }

    /// Terminal extraction with an optional default.
    ///
    /// If the proxy is not present and a default was supplied, the default is
    /// returned; otherwise the held value comes back as-is, `None` included.
    /// Passing `None` as the default is the same as supplying no default,
    /// which is indistinguishable from an absent result anyway; use
    /// [`get_or`](Self::get_or) when the fallback must be unconditional.
    #[inline]
    pub fn get_value(self, default: ChainValue<'a, T>) -> ChainValue<'a, T> {
        if !self.present && default.is_some() {
            default
        } else {
            self.value
        }
    }
}

impl<'a, T: ?Sized> Clone for ChainProxy<'a, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: ?Sized> Copy for ChainProxy<'a, T> {}

impl<'a, T: ?Sized> Default for ChainProxy<'a, T> {
    #[inline]
    fn default() -> Self {
        Self::absent()
    }
}

/// Boolean coercion: a proxy converts to its presence flag.
impl<T: ?Sized> From<ChainProxy<'_, T>> for bool {
    #[inline]
    fn from(proxy: ChainProxy<'_, T>) -> bool {
        proxy.present
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for ChainProxy<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainProxy")
            .field("value", &self.value)
            .field("present", &self.present)
            .finish()
    }
}

/// Diagnostic rendering of the held value and presence flag. Not a contract
/// surface; the format may change.
impl<T: ?Sized + fmt::Debug> fmt::Display for ChainProxy<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "value={:?}, present={}", self.value, self.present)
    }
}

#[cfg(feature = "serde")]
impl<T: ?Sized + serde::Serialize> serde::Serialize for ChainProxy<'_, T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ChainProxy", 2)?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("present", &self.present)?;
        state.end()
    }
}

#[cfg(feature = "tracing")]
#[inline]
fn trace_step<U: ?Sized>(resolved: bool) {
    tracing::trace!(
        target: "option_rail",
        step = core::any::type_name::<U>(),
        resolved,
        "chain traversal"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
fn trace_step<U: ?Sized>(_resolved: bool) {}
