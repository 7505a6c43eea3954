//! Line pin configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default clock pin
pub const DEFAULT_CLOCK_PIN: u8 = 1;

/// Default data pin
pub const DEFAULT_DATA_PIN: u8 = 0;

/// Pin configuration for one bus line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// GPIO pin number
    pub pin: u8,
    /// Enable internal pull-up (useful on DIO while the chip drives ACK)
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            pull_up: false,
        }
    }

    /// Create a pin with pull-up enabled
    pub const fn with_pullup(pin: u8) -> Self {
        Self { pin, pull_up: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_builders() {
        assert_eq!(PinConfig::new(4), PinConfig { pin: 4, pull_up: false });
        assert!(PinConfig::with_pullup(4).pull_up);
        assert_eq!(PinConfig::default().pin, 0);
    }
}
