//! TM1637 Line Abstraction Layer
//!
//! This crate defines the line-level traits the TM1637 driver is written
//! against. Chip-specific crates implement them on top of their GPIO
//! peripherals so the protocol code never touches registers directly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  tm1637-drivers (protocol + facade)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tm1637-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  tm1637-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`gpio::FlexPin`] - Lines that switch between driving and sampling
//!
//! Line operations are infallible: a bit-banged two-wire bus has no
//! error path at the pin level.

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

// Re-export key traits at crate root for convenience
pub use gpio::{FlexPin, InputPin, OutputPin, PinDirection};
