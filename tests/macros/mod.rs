pub mod chain_macro;
