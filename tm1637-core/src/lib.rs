//! Board-agnostic core logic for the TM1637 display driver
//!
//! This crate contains everything that does not touch the bus lines:
//!
//! - Segment encoding (digits, characters, text scrolling)
//! - Display state cache (segment buffer, brightness, enable, colon)
//! - The public display trait implemented by the driver
//! - Configuration types and defaults

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod encoding;
pub mod state;
pub mod traits;
