//! GPIO line abstractions
//!
//! Provides traits for the two lines of the TM1637 bus. The clock line is
//! only ever driven; the data line is driven for command bits and released
//! to the chip for the acknowledge bit.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;
}

/// Digital input pin
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Direction of a [`FlexPin`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinDirection {
    /// The pin drives the line
    Output,
    /// The pin is released and samples the line
    Input,
}

/// Pin that can switch between driving and sampling the line
///
/// The output level set with [`OutputPin`] is retained while the pin is
/// an input and takes effect again once it is switched back to output.
pub trait FlexPin: OutputPin + InputPin {
    /// Switch the pin direction
    fn set_direction(&mut self, direction: PinDirection);

    /// Current pin direction
    fn direction(&self) -> PinDirection;

    /// Shorthand for `set_direction(PinDirection::Output)`
    fn set_as_output(&mut self) {
        self.set_direction(PinDirection::Output);
    }

    /// Shorthand for `set_direction(PinDirection::Input)`
    fn set_as_input(&mut self) {
        self.set_direction(PinDirection::Input);
    }
}
