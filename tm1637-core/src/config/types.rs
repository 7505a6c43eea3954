//! Driver configuration
//!
//! Defaults match a TM1637 module on a slow 8-bit MCU; the bit delay can
//! usually stay at a few microseconds since the chip latches data on the
//! clock's rising edge.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::hardware::{PinConfig, DEFAULT_CLOCK_PIN, DEFAULT_DATA_PIN};

/// Settling delay between line transitions (µs)
pub const DEFAULT_BIT_DELAY_US: u32 = 3;

/// Brightness applied at initialisation (0-7)
pub const DEFAULT_BRIGHTNESS: u8 = 7;

/// Delay between text scroll frames (ms)
pub const DEFAULT_SCROLL_DELAY_MS: u32 = 100;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Clock and data assigned to the same pin
    SharedPin,
    /// Buffer too small for the encoded config
    Serialize,
    /// Stored bytes are not a valid config
    Deserialize,
}

/// Complete driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Clock line
    pub clock: PinConfig,
    /// Data line
    pub data: PinConfig,
    /// Settling delay between line transitions (µs)
    pub bit_delay_us: u32,
    /// Initial brightness (truncated to 0-7)
    pub brightness: u8,
    /// Delay between scroll frames (ms)
    pub scroll_delay_ms: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CLOCK_PIN, DEFAULT_DATA_PIN)
    }
}

impl DisplayConfig {
    /// Default timing on the given clock and data pins
    pub const fn new(clock_pin: u8, data_pin: u8) -> Self {
        Self {
            clock: PinConfig::new(clock_pin),
            data: PinConfig::new(data_pin),
            bit_delay_us: DEFAULT_BIT_DELAY_US,
            brightness: DEFAULT_BRIGHTNESS,
            scroll_delay_ms: DEFAULT_SCROLL_DELAY_MS,
        }
    }

    /// Override the bit delay
    pub const fn with_bit_delay_us(mut self, us: u32) -> Self {
        self.bit_delay_us = us;
        self
    }

    /// Override the initial brightness
    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    /// Override the scroll delay
    pub const fn with_scroll_delay_ms(mut self, ms: u32) -> Self {
        self.scroll_delay_ms = ms;
        self
    }

    /// Check the line assignment
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.clock.pin == self.data.pin {
            return Err(ConfigError::SharedPin);
        }
        Ok(())
    }

    /// Serialize with postcard into `buf`, returning the used part
    #[cfg(feature = "serde")]
    pub fn to_bytes<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Serialize)
    }

    /// Deserialize from postcard bytes and validate
    #[cfg(feature = "serde")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;
        config.validate()?;
        Ok(config)
    }
}
