//! TM1637 display driver
//!
//! Bit-banged driver for 4-digit 7-segment modules built on the TM1637
//! LED controller. The layers, bottom up:
//!
//! - `transport`: raw clock/data line primitives with settling delays
//! - `frame`: start/stop framing, LSB-first bytes, ACK sampling
//! - [`Tm1637`]: the public driver, implementing
//!   [`SegmentDisplay`](tm1637_core::traits::SegmentDisplay)
//!
//! Frame primitives are private to this crate. Callers only see complete
//! start/stop-bracketed operations.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

mod frame;
#[cfg(test)]
mod mock;
pub mod tm1637;
mod transport;

pub use tm1637::Tm1637;
pub use tm1637_core::traits::{SegmentDisplay, SegmentDisplayExt};
