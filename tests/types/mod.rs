
#[cfg(feature = "serde")]
pub mod serde_state;
