//! Ergonomic macro for spelling out an attribute path in one place.
//!
//! - [`macro@crate::chain`] - Expands a `root => field.path` expression into
//!   a root proxy followed by one traversal step per field. A field marked
//!   with `?` is an `Option` and steps through
//!   [`try_attr`](crate::ChainProxy::try_attr); an unmarked field steps
//!   through [`attr`](crate::ChainProxy::attr).
//!
//! # Examples
//!
//! ```
//! use option_rail::chain;
//!
//! struct Engine { horsepower: u32 }
//! struct Car { engine: Option<Engine> }
//!
//! let car = Car { engine: Some(Engine { horsepower: 200 }) };
//!
//! let hp = chain!(&car => engine?.horsepower);
//! assert_eq!(hp.get(), Some(&200));
//!
//! let wreck = Car { engine: None };
//! let hp = chain!(&wreck => engine?.horsepower);
//! assert!(!hp.is_present());
//! ```

/// Builds a chain from a root value and a field path.
///
/// # Syntax
///
/// - `chain!(root)` - Root proxy only, same as [`chain(root)`](crate::chain()).
/// - `chain!(root => a.b?.c)` - Traverses `a`, then the `Option` field `b`,
///   then `c`. Each `?` marks an `Option` field that is stepped with
///   [`try_attr`](crate::ChainProxy::try_attr); plain fields are stepped with
///   [`attr`](crate::ChainProxy::attr).
///
/// The whole path is total: a `None` anywhere makes the rest of the chain
/// absent instead of panicking.
///
/// # Examples
///
/// ```
/// use option_rail::chain;
///
/// struct Profile { bio: Option<String> }
/// struct User { profile: Option<Profile> }
///
/// let user = User {
///     profile: Some(Profile { bio: None }),
/// };
///
/// let bio = chain!(&user => profile?.bio?);
/// assert!(!bio.is_present());
/// assert_eq!(bio.get_or(&"no bio".to_string()), "no bio");
/// ```
#[macro_export]
macro_rules! chain {
    ($root:expr) => {
        $crate::chain($root)
    };
    ($root:expr => $($path:tt)+) => {
        $crate::chain!(@step $crate::chain($root), $($path)+)
    };
    (@step $proxy:expr, $field:ident ? . $($rest:tt)+) => {
        $crate::chain!(@step $proxy.try_attr(|v| v.$field.as_ref()), $($rest)+)
    };
    (@step $proxy:expr, $field:ident ?) => {
        $proxy.try_attr(|v| v.$field.as_ref())
    };
    (@step $proxy:expr, $field:ident . $($rest:tt)+) => {
        $crate::chain!(@step $proxy.attr(|v| &v.$field), $($rest)+)
    };
    (@step $proxy:expr, $field:ident) => {
        $proxy.attr(|v| &v.$field)
    };
}
