pub mod chain_ext;
pub mod into_chain_value;
