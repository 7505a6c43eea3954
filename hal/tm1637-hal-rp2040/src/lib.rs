//! RP2040 bindings for the TM1637 display driver
//!
//! This crate provides RP2040-specific implementations of the
//! `tm1637-hal` line traits, plus board-level helpers:
//!
//! - [`FlexLine`]: a GPIO that switches between output and input
//! - GPIO allocation and `"gpioN"` pin strings for config-driven pin
//!   assignment
//! - [`display`]: claim both lines and initialise a driver in one call

#![no_std]

pub mod gpio;
pub mod line;

pub use embassy_time::Delay;
pub use gpio::{claim_lines, display_config, parse_pin_string, GpioAllocator, PinError, GPIO_COUNT};
pub use line::FlexLine;

use embassy_rp::gpio::Pin;
use embassy_rp::Peri;
use tm1637_core::config::DisplayConfig;
use tm1637_drivers::Tm1637;

/// Driver type for an RP2040 board
pub type Display<'d> = Tm1637<FlexLine<'d>, FlexLine<'d>, Delay>;

/// Claim the configured lines and initialise the display
///
/// `clock` and `data` must be the peripherals for `config.clock.pin` and
/// `config.data.pin`; the allocator records them so other config-driven
/// users cannot take them.
pub fn display<'d>(
    allocator: &mut GpioAllocator,
    clock: Peri<'d, impl Pin>,
    data: Peri<'d, impl Pin>,
    config: DisplayConfig,
) -> Result<Display<'d>, PinError> {
    claim_lines(allocator, &config)?;

    let clock = FlexLine::new(clock, config.clock.pull_up);
    let data = FlexLine::new(data, config.data.pull_up);

    Ok(Tm1637::new(clock, data, Delay, config))
}
