//! Line transport
//!
//! Owns the clock and data lines plus the delay source. Primitives change
//! line state only; the frame layer inserts [`LineTransport::settle`] where
//! the wire timing needs it.

use embedded_hal::delay::DelayNs;
use tm1637_hal::{FlexPin, PinDirection};

/// One of the two bus lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum Line {
    Clock,
    Data,
}

pub(crate) struct LineTransport<CLK, DIO, D> {
    clock: CLK,
    data: DIO,
    delay: D,
    bit_delay_us: u32,
}

impl<CLK, DIO, D> LineTransport<CLK, DIO, D>
where
    CLK: FlexPin,
    DIO: FlexPin,
    D: DelayNs,
{
    pub(crate) fn new(clock: CLK, data: DIO, delay: D, bit_delay_us: u32) -> Self {
        Self {
            clock,
            data,
            delay,
            bit_delay_us,
        }
    }

    /// Put both lines in the idle state: outputs, driven high
    pub(crate) fn configure(&mut self) {
        // Latch high before enabling the drivers so the bus never dips
        self.drive_high(Line::Clock);
        self.drive_high(Line::Data);
        self.set_direction(Line::Clock, PinDirection::Output);
        self.set_direction(Line::Data, PinDirection::Output);
        self.settle();
    }

    pub(crate) fn drive_high(&mut self, line: Line) {
        match line {
            Line::Clock => self.clock.set_high(),
            Line::Data => self.data.set_high(),
        }
    }

    pub(crate) fn drive_low(&mut self, line: Line) {
        match line {
            Line::Clock => self.clock.set_low(),
            Line::Data => self.data.set_low(),
        }
    }

    pub(crate) fn drive(&mut self, line: Line, high: bool) {
        if high {
            self.drive_high(line);
        } else {
            self.drive_low(line);
        }
    }

    pub(crate) fn set_direction(&mut self, line: Line, direction: PinDirection) {
        match line {
            Line::Clock => self.clock.set_direction(direction),
            Line::Data => self.data.set_direction(direction),
        }
    }

    pub(crate) fn read(&self, line: Line) -> bool {
        match line {
            Line::Clock => self.clock.is_high(),
            Line::Data => self.data.is_high(),
        }
    }

    /// Wait the configured bit delay
    pub(crate) fn settle(&mut self) {
        self.delay.delay_us(self.bit_delay_us);
    }

    /// Block for `ms` milliseconds
    pub(crate) fn pause_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    pub(crate) fn release(self) -> (CLK, DIO, D) {
        (self.clock, self.data, self.delay)
    }
}
