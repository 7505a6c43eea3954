//! Bidirectional GPIO line

use embassy_rp::gpio::{Flex, Pin, Pull};
use embassy_rp::Peri;
use tm1637_hal::{FlexPin, InputPin, OutputPin, PinDirection};

/// GPIO line backed by an embassy `Flex` pin
///
/// Starts as an input. The driver latches the output level before
/// switching direction so the line never glitches low.
pub struct FlexLine<'d> {
    pin: Flex<'d>,
    direction: PinDirection,
}

impl<'d> FlexLine<'d> {
    /// Wrap a pin, optionally enabling the internal pull-up
    pub fn new(pin: Peri<'d, impl Pin>, pull_up: bool) -> Self {
        let mut pin = Flex::new(pin);
        pin.set_pull(if pull_up { Pull::Up } else { Pull::None });
        pin.set_as_input();
        Self {
            pin,
            direction: PinDirection::Input,
        }
    }
}

impl OutputPin for FlexLine<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

impl InputPin for FlexLine<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

impl FlexPin for FlexLine<'_> {
    fn set_direction(&mut self, direction: PinDirection) {
        match direction {
            PinDirection::Output => self.pin.set_as_output(),
            PinDirection::Input => self.pin.set_as_input(),
        }
        self.direction = direction;
    }

    fn direction(&self) -> PinDirection {
        self.direction
    }
}
