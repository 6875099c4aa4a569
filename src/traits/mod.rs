//! Traits for seeding and extending chains.

pub mod chain_ext;
pub mod into_chain_value;

pub use chain_ext::ChainExt;
pub use into_chain_value::IntoChainValue;
