//! TM1637 Two-Wire Protocol
//!
//! This crate defines the wire-level vocabulary of the TM1637 LED controller:
//! the command bytes, the bit order, and the acknowledge bit. It contains no
//! pin handling; the driver crate turns these values into line transitions.
//!
//! # Protocol Overview
//!
//! Every transfer is a frame bracketed by a start and a stop condition:
//! ```text
//!  CLK ‾‾‾‾‾‾‾\_/‾\_/‾\_ … _/‾\_/‾\_/‾‾‾‾‾‾‾
//!  DIO ‾‾‾\___X b0 X b1 X … X b7 X ACK X__/‾‾‾
//!        START                          STOP
//! ```
//!
//! - START: DIO falls while CLK is high
//! - Bytes: 8 data bits, least-significant first, latched on CLK rising edge
//! - ACK: the chip pulls DIO low during the 9th clock
//! - STOP: DIO rises while CLK is high
//!
//! Unlike I2C there is no device address: the first byte of a frame is a
//! command byte (see [`Command`]).

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod wire;

pub use command::{Addressing, Command, DataMode, COLON_BIT, POSITION_COUNT};
pub use wire::{Ack, FrameState, LsbBits};
