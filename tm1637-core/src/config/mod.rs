//! Configuration types
//!
//! Board-agnostic driver configuration, optionally stored as postcard
//! binary data.

pub mod hardware;
pub mod types;

pub use hardware::*;
pub use types::*;
