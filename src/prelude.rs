//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use option_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`chain!`](crate::chain!)
//! - **Functions**: [`chain`](crate::chain()), [`get_value`](crate::get_value)
//! - **Types**: [`ChainProxy`], [`ChainValue`]
//! - **Traits**: [`ChainExt`], [`IntoChainValue`]
//!
//! # Examples
//!
//! ```
//! use option_rail::prelude::*;
//!
//! struct Profile { bio: Option<String> }
//! struct User { profile: Option<Profile> }
//!
//! let user = User {
//!     profile: Some(Profile { bio: Some("hello".into()) }),
//! };
//!
//! let bio = chain!(&user => profile?.bio?);
//! assert!(bio.is_present());
//! assert_eq!(bio.get().map(String::as_str), Some("hello"));
//! ```

// `chain` the macro and `chain` the function share a name on purpose;
// this brings in both namespaces.
pub use crate::chain;

// Functions
pub use crate::functions::get_value;

// Core types
pub use crate::types::{ChainProxy, ChainValue};

// Traits
pub use crate::traits::{ChainExt, IntoChainValue};
