//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `option_rail::*` or pick focused pieces as needed.
//!
//! OptionRail wraps a value in a [`ChainProxy`] so a whole attribute path can
//! be traversed without checking each step: an absent or missing attribute
//! anywhere along the way makes the rest of the chain absent instead of
//! failing, and the "is there a value" decision is deferred to the end.
//!
//! # Examples
//!
//! ## Basic Chain
//!
//! ```
//! use option_rail::{chain, get_value};
//!
//! struct Engine { horsepower: u32 }
//! struct Car { engine: Option<Engine> }
//!
//! let car = Car { engine: Some(Engine { horsepower: 200 }) };
//!
//! let hp = chain(&car)
//!     .try_attr(|c| c.engine.as_ref())
//!     .attr(|e| &e.horsepower);
//!
//! assert!(hp.is_present());
//! assert_eq!(get_value(hp, None), Some(&200));
//! ```
//!
//! ## Absent Paths Never Fail
//!
//! ```
//! use option_rail::chain;
//!
//! struct Car { engine: Option<u32> }
//!
//! let wreck = Car { engine: None };
//! let hp = chain(&wreck)
//!     .try_attr(|c| c.engine.as_ref())
//!     .attr(|p| p);
//!
//! assert!(!hp.is_present());
//! assert_eq!(hp.get_or(&0), &0);
//! ```
//!
//! ## Path Macro
//!
//! ```
//! use option_rail::chain;
//!
//! struct Profile { bio: Option<String> }
//! struct User { profile: Option<Profile> }
//!
//! let user = User {
//!     profile: Some(Profile { bio: Some("hello".into()) }),
//! };
//!
//! let bio = chain!(&user => profile?.bio?);
//! assert_eq!(bio.get().map(String::as_str), Some("hello"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

/// Free-function entry points (`chain`, `get_value`)
pub mod functions;
/// The `chain!` path macro
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Traits for seeding and extending chains
pub mod traits;
/// ChainProxy and the chain value alias
pub mod types;

pub use functions::{chain, get_value};
pub use traits::*;
pub use types::{ChainProxy, ChainValue};
