//! GPIO allocation and pin strings
//!
//! Tracks which GPIO pins are in use so a display config cannot claim a
//! pin that something else on the board already drives.

use heapless::FnvIndexSet;
use tm1637_core::config::{ConfigError, DisplayConfig, PinConfig};

/// Maximum number of GPIO pins on RP2040
pub const GPIO_COUNT: usize = 30;

/// Error when claiming a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin,
    /// Pin already taken
    AlreadyTaken,
    /// Configuration rejected before any pin was taken
    Config(ConfigError),
}

impl From<ConfigError> for PinError {
    fn from(err: ConfigError) -> Self {
        PinError::Config(err)
    }
}

/// GPIO allocator to track pin usage
pub struct GpioAllocator {
    allocated: FnvIndexSet<u8, 32>,
}

impl Default for GpioAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl GpioAllocator {
    /// Create an empty allocator
    pub fn new() -> Self {
        Self {
            allocated: FnvIndexSet::new(),
        }
    }

    /// Allocate a GPIO pin
    pub fn allocate(&mut self, pin: u8) -> Result<(), PinError> {
        if usize::from(pin) >= GPIO_COUNT {
            return Err(PinError::InvalidPin);
        }
        match self.allocated.insert(pin) {
            Ok(true) => Ok(()),
            // Capacity covers all GPIO_COUNT pins, so a full set also
            // means this pin is already in it
            Ok(false) | Err(_) => Err(PinError::AlreadyTaken),
        }
    }

    /// Release a GPIO pin
    pub fn release(&mut self, pin: u8) {
        self.allocated.remove(&pin);
    }

    /// Check if a pin is allocated
    pub fn is_allocated(&self, pin: u8) -> bool {
        self.allocated.contains(&pin)
    }

    /// Number of allocated pins
    pub fn allocated_count(&self) -> usize {
        self.allocated.len()
    }
}

/// Claim the clock and data pins of a display config
///
/// Either both pins are claimed or neither is.
pub fn claim_lines(allocator: &mut GpioAllocator, config: &DisplayConfig) -> Result<(), PinError> {
    config.validate()?;

    allocator.allocate(config.clock.pin)?;
    if let Err(err) = allocator.allocate(config.data.pin) {
        allocator.release(config.clock.pin);
        return Err(err);
    }

    #[cfg(feature = "defmt")]
    defmt::debug!(
        "tm1637: claimed clk=gpio{} dio=gpio{}",
        config.clock.pin,
        config.data.pin
    );
    Ok(())
}

/// Parse a pin string from config
///
/// Supports formats:
/// - "gpio11" -> pin 11
/// - "^gpio4" -> pin 4 with pull-up
pub fn parse_pin_string(s: &str) -> Option<PinConfig> {
    let s = s.trim();

    let (s, pull_up) = match s.strip_prefix('^') {
        Some(rest) => (rest, true),
        None => (s, false),
    };

    let pin: u8 = s.strip_prefix("gpio")?.parse().ok()?;
    if usize::from(pin) >= GPIO_COUNT {
        return None;
    }

    Some(PinConfig { pin, pull_up })
}

/// Build a display config from clock and data pin strings
///
/// Timing and brightness keep their defaults.
pub fn display_config(clock: &str, data: &str) -> Result<DisplayConfig, PinError> {
    let clock = parse_pin_string(clock).ok_or(PinError::InvalidPin)?;
    let data = parse_pin_string(data).ok_or(PinError::InvalidPin)?;

    let config = DisplayConfig {
        clock,
        data,
        ..DisplayConfig::default()
    };
    config.validate()?;
    Ok(config)
}
