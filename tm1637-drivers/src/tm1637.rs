//! TM1637 4-digit display driver
//!
//! # Write sequence
//!
//! A segment write that changes what the chip shows goes out as three
//! frames:
//!
//! ```text
//! [0x44]              data command: write, fixed address
//! [0xC0 | pos, segs]  address + segment byte
//! [0x80 | 0x08 | b]   display control: on, brightness b
//! ```
//!
//! Writes that would not change the display skip the first two frames.
//! The control frame is always sent so brightness and enable changes are
//! picked up on the next write.

use embedded_hal::delay::DelayNs;
use tm1637_core::config::DisplayConfig;
use tm1637_core::encoding::scroll_frames;
use tm1637_core::state::{Brightness, DisplayState, Position, SegmentWrite};
use tm1637_core::traits::{SegmentDisplay, SegmentDisplayExt};
use tm1637_hal::FlexPin;
use tm1637_protocol::{Command, FrameState};

use crate::frame::Bus;
use crate::transport::LineTransport;

/// Driver for one TM1637 chip
///
/// Owns the clock line, data line and delay source for its lifetime.
/// Call [`Tm1637::release`] to get them back.
pub struct Tm1637<CLK, DIO, D> {
    bus: Bus<CLK, DIO, D>,
    state: DisplayState,
    config: DisplayConfig,
}

impl<CLK, DIO, D> Tm1637<CLK, DIO, D>
where
    CLK: FlexPin,
    DIO: FlexPin,
    D: DelayNs,
{
    /// Initialise the bus and clear the display
    ///
    /// Both lines become outputs idling high. The display is enabled at
    /// the configured brightness.
    ///
    /// The cache starts blank, so clearing only rewrites position 1. A chip
    /// that kept power across an MCU reset still shows its old digits on
    /// the other positions until they are written.
    pub fn new(clock: CLK, data: DIO, delay: D, config: DisplayConfig) -> Self {
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "tm1637: init clk={} dio={} brightness={}",
            config.clock.pin,
            config.data.pin,
            config.brightness
        );

        let mut bus = Bus::new(LineTransport::new(clock, data, delay, config.bit_delay_us));
        bus.configure();

        let mut state = DisplayState::new(Brightness::truncating(config.brightness));
        state.set_enabled(true);

        let mut driver = Self { bus, state, config };
        driver.clear();
        driver
    }

    /// Cached display state
    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Active configuration
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Bytes the chip did not acknowledge
    pub fn missed_acks(&self) -> u32 {
        self.bus.missed_acks()
    }

    /// Current bus framing state
    pub fn frame_state(&self) -> FrameState {
        self.bus.state()
    }

    /// Give back the lines and delay source
    pub fn release(self) -> (CLK, DIO, D) {
        self.bus.release()
    }

    fn transmit(&mut self, write: SegmentWrite) {
        #[cfg(feature = "defmt")]
        defmt::trace!(
            "tm1637: pos {} <- {=u8:x}",
            write.position.get(),
            write.segments
        );

        self.bus.command(Command::write_fixed().encode());

        let mut frame = self.bus.start();
        frame.write(Command::address(write.position.get()).encode());
        frame.write(write.segments);
        frame.end();

        self.state.commit(write);
    }

    fn refresh_control(&mut self) {
        let command = self.state.control_command();
        self.bus.command(command.encode());
    }
}

impl<CLK, DIO, D> SegmentDisplay for Tm1637<CLK, DIO, D>
where
    CLK: FlexPin,
    DIO: FlexPin,
    D: DelayNs,
{
    fn display_segments(&mut self, position: u8, segments: u8) {
        let position = Position::wrapping(position);
        if let Some(write) = self.state.plan_segments(position, segments) {
            self.transmit(write);
        }
        self.refresh_control();
    }

    fn display_colon(&mut self, on: bool) {
        let write = self.state.plan_colon(on);
        self.transmit(write);
        self.refresh_control();
    }

    fn display_text(&mut self, text: &str) {
        let pause = self.config.scroll_delay_ms;
        for frame in scroll_frames(text) {
            self.display_frame(frame);
            self.bus.pause_ms(pause);
        }
    }

    fn clear(&mut self) {
        self.display_colon(false);
        for position in Position::ALL {
            self.display_segments(position.get(), 0x00);
        }
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.state.set_brightness(brightness);
        self.refresh_control();
    }

    fn enable(&mut self, on: bool) {
        self.state.set_enabled(on);
        self.refresh_control();
    }
}
