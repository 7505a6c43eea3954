//! Frame protocol
//!
//! Start/stop conditions, byte transmission and ACK sampling on top of the
//! line transport. A [`Frame`] guard is the only way to write bytes; it
//! sends the stop condition when dropped, so a frame can never be left
//! open.

use embedded_hal::delay::DelayNs;
use tm1637_hal::{FlexPin, PinDirection};
use tm1637_protocol::{Ack, FrameState, LsbBits};

use crate::transport::{Line, LineTransport};

pub(crate) struct Bus<CLK, DIO, D> {
    transport: LineTransport<CLK, DIO, D>,
    state: FrameState,
    missed_acks: u32,
}

impl<CLK, DIO, D> Bus<CLK, DIO, D>
where
    CLK: FlexPin,
    DIO: FlexPin,
    D: DelayNs,
{
    pub(crate) fn new(transport: LineTransport<CLK, DIO, D>) -> Self {
        Self {
            transport,
            state: FrameState::Idle,
            missed_acks: 0,
        }
    }

    pub(crate) fn configure(&mut self) {
        self.transport.configure();
        self.state = FrameState::Idle;
    }

    pub(crate) fn state(&self) -> FrameState {
        self.state
    }

    /// Bytes the chip did not acknowledge since construction
    pub(crate) fn missed_acks(&self) -> u32 {
        self.missed_acks
    }

    /// Open a frame: DIO falls while CLK is high
    pub(crate) fn start(&mut self) -> Frame<'_, CLK, DIO, D> {
        self.transport.drive_high(Line::Clock);
        self.transport.drive_high(Line::Data);
        self.transport.settle();
        self.transport.drive_low(Line::Data);
        self.state = FrameState::Framed;
        Frame { bus: self }
    }

    /// Single-byte frame
    pub(crate) fn command(&mut self, value: u8) -> Ack {
        let mut frame = self.start();
        frame.write(value)
    }

    pub(crate) fn pause_ms(&mut self, ms: u32) {
        self.transport.pause_ms(ms);
    }

    pub(crate) fn release(self) -> (CLK, DIO, D) {
        self.transport.release()
    }

    fn write_byte(&mut self, value: u8) -> Ack {
        self.state = FrameState::Transmitting;

        for bit in LsbBits::new(value) {
            self.transport.drive_low(Line::Clock);
            self.transport.drive(Line::Data, bit);
            self.transport.settle();
            self.transport.drive_high(Line::Clock);
            self.transport.settle();
        }

        // 9th clock: the chip pulls DIO low to acknowledge
        self.transport.drive_low(Line::Clock);
        self.transport.set_direction(Line::Data, PinDirection::Input);
        self.transport.settle();

        let ack = Ack::from_line(self.transport.read(Line::Data));

        self.transport.settle();
        self.transport.drive_high(Line::Clock);
        self.transport.settle();
        self.transport.drive_low(Line::Clock);
        self.transport.set_direction(Line::Data, PinDirection::Output);

        self.state = FrameState::Framed;

        if !ack.is_acknowledged() {
            self.missed_acks = self.missed_acks.wrapping_add(1);
            #[cfg(feature = "defmt")]
            defmt::debug!("tm1637: no ACK for byte {=u8:x}", value);
        }
        ack
    }

    /// Close the frame: DIO rises while CLK is high
    fn stop(&mut self) {
        self.transport.drive_low(Line::Clock);
        self.transport.settle();
        self.transport.drive_low(Line::Data);
        self.transport.settle();
        self.transport.drive_high(Line::Clock);
        self.transport.settle();
        self.transport.drive_high(Line::Data);
        self.state = FrameState::Idle;
    }
}

/// An open frame on the bus
pub(crate) struct Frame<'a, CLK, DIO, D>
where
    CLK: FlexPin,
    DIO: FlexPin,
    D: DelayNs,
{
    bus: &'a mut Bus<CLK, DIO, D>,
}

impl<CLK, DIO, D> Frame<'_, CLK, DIO, D>
where
    CLK: FlexPin,
    DIO: FlexPin,
    D: DelayNs,
{
    /// Transmit one byte, LSB first, and sample the ACK
    pub(crate) fn write(&mut self, value: u8) -> Ack {
        #[cfg(feature = "defmt")]
        defmt::trace!("tm1637: byte {=u8:x}", value);
        self.bus.write_byte(value)
    }

    /// Send the stop condition
    pub(crate) fn end(self) {}
}

impl<CLK, DIO, D> Drop for Frame<'_, CLK, DIO, D>
where
    CLK: FlexPin,
    DIO: FlexPin,
    D: DelayNs,
{
    fn drop(&mut self) {
        self.bus.stop();
    }
}
