//! Wire-level TM1637 mock for tests
//!
//! The two mock lines share one [`Wire`]. Every level change is decoded
//! the way the chip would see it: start and stop conditions, data bits on
//! rising clock edges, and the ACK slot after the 8th bit. The mock
//! answers ACKs and counts virtual delay time instead of blocking.

use core::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use tm1637_hal::{FlexPin, InputPin, OutputPin, PinDirection};

use crate::transport::Line;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Receiving data bits
    Bits(u8),
    /// 8 bits in, waiting for the 9th clock
    AckSlot,
    /// 9th clock high, chip still holding DIO
    AckClocked,
}

struct LineState {
    latch: bool,
    direction: PinDirection,
}

struct WireLog {
    clock: LineState,
    data: LineState,
    chip_ack: bool,
    in_frame: bool,
    phase: Phase,
    shift: u8,
    current: Vec<u8>,
    frames: Vec<Vec<u8>>,
    violations: usize,
    elapsed_ns: u64,
}

impl WireLog {
    fn new() -> Self {
        Self {
            clock: LineState {
                latch: false,
                direction: PinDirection::Input,
            },
            data: LineState {
                latch: false,
                direction: PinDirection::Input,
            },
            chip_ack: true,
            in_frame: false,
            phase: Phase::Bits(0),
            shift: 0,
            current: Vec::new(),
            frames: Vec::new(),
            violations: 0,
            elapsed_ns: 0,
        }
    }

    fn clock_level(&self) -> bool {
        match self.clock.direction {
            PinDirection::Output => self.clock.latch,
            PinDirection::Input => true,
        }
    }

    fn data_level(&self) -> bool {
        match self.data.direction {
            PinDirection::Output => self.data.latch,
            PinDirection::Input => {
                let chip_holds = self.in_frame
                    && self.chip_ack
                    && matches!(self.phase, Phase::AckSlot | Phase::AckClocked);
                !chip_holds
            }
        }
    }

    fn line(&mut self, line: Line) -> &mut LineState {
        match line {
            Line::Clock => &mut self.clock,
            Line::Data => &mut self.data,
        }
    }

    /// Apply a change to one line and decode the resulting edges
    fn update(&mut self, line: Line, change: impl FnOnce(&mut LineState)) {
        let clock_before = self.clock_level();
        let data_before = self.data_level();

        change(self.line(line));

        let clock_after = self.clock_level();
        if clock_after != clock_before {
            if clock_after {
                self.clock_rising();
            } else if self.phase == Phase::AckClocked {
                self.phase = Phase::Bits(0);
            }
        }

        let data_after = self.data_level();
        if data_after != data_before && clock_after {
            if data_after {
                self.stop_condition();
            } else {
                self.start_condition();
            }
        }
    }

    fn clock_rising(&mut self) {
        if !self.in_frame {
            return;
        }
        let data_output = self.data.direction == PinDirection::Output;
        match self.phase {
            Phase::Bits(n) if data_output => {
                if self.data.latch {
                    self.shift |= 1 << n;
                }
                self.phase = if n == 7 { Phase::AckSlot } else { Phase::Bits(n + 1) };
            }
            Phase::AckSlot => {
                if data_output {
                    // Host kept driving DIO through the ACK slot
                    self.violations += 1;
                }
                self.current.push(self.shift);
                self.shift = 0;
                self.phase = Phase::AckClocked;
            }
            _ => self.violations += 1,
        }
    }

    fn start_condition(&mut self) {
        if self.in_frame {
            // Repeated start without stop
            self.violations += 1;
        }
        self.in_frame = true;
        self.phase = Phase::Bits(0);
        self.shift = 0;
        self.current.clear();
    }

    fn stop_condition(&mut self) {
        if !self.in_frame {
            return;
        }
        // The stop sequence itself clocks one partial bit
        match self.phase {
            Phase::Bits(0) | Phase::Bits(1) => {}
            _ => self.violations += 1,
        }
        self.in_frame = false;
        self.phase = Phase::Bits(0);
        self.shift = 0;
        let frame = core::mem::take(&mut self.current);
        self.frames.push(frame);
    }
}

/// Shared bus observed by the mock lines
#[derive(Clone)]
pub struct Wire {
    log: Rc<RefCell<WireLog>>,
}

impl Wire {
    pub fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(WireLog::new())),
        }
    }

    /// Clock line, data line and delay bound to this wire
    pub fn parts(&self) -> (WireClock, WireData, WireDelay) {
        (
            WireLine {
                wire: self.clone(),
                line: Line::Clock,
            },
            WireLine {
                wire: self.clone(),
                line: Line::Data,
            },
            WireDelay { wire: self.clone() },
        )
    }

    /// Completed frames, oldest first
    pub fn frames(&self) -> Vec<Vec<u8>> {
        self.log.borrow().frames.clone()
    }

    /// Frames carrying segment data (address command + data byte)
    pub fn data_frames(&self) -> Vec<Vec<u8>> {
        self.frames()
            .into_iter()
            .filter(|frame| frame.first().is_some_and(|b| b & 0xC0 == 0xC0))
            .collect()
    }

    /// Forget recorded frames and elapsed time
    pub fn clear(&self) {
        let mut log = self.log.borrow_mut();
        log.frames.clear();
        log.violations = 0;
        log.elapsed_ns = 0;
    }

    pub fn set_chip_ack(&self, ack: bool) {
        self.log.borrow_mut().chip_ack = ack;
    }

    pub fn in_frame(&self) -> bool {
        self.log.borrow().in_frame
    }

    /// Protocol errors seen so far
    pub fn violations(&self) -> usize {
        self.log.borrow().violations
    }

    pub fn elapsed_us(&self) -> u64 {
        self.log.borrow().elapsed_ns / 1000
    }
}

/// One mock line
pub struct WireLine {
    wire: Wire,
    line: Line,
}

pub type WireClock = WireLine;
pub type WireData = WireLine;

impl OutputPin for WireLine {
    fn set_high(&mut self) {
        self.wire
            .log
            .borrow_mut()
            .update(self.line, |state| state.latch = true);
    }

    fn set_low(&mut self) {
        self.wire
            .log
            .borrow_mut()
            .update(self.line, |state| state.latch = false);
    }

    fn is_set_high(&self) -> bool {
        let mut log = self.wire.log.borrow_mut();
        log.line(self.line).latch
    }
}

impl InputPin for WireLine {
    fn is_high(&self) -> bool {
        let log = self.wire.log.borrow();
        match self.line {
            Line::Clock => log.clock_level(),
            Line::Data => log.data_level(),
        }
    }
}

impl FlexPin for WireLine {
    fn set_direction(&mut self, direction: PinDirection) {
        self.wire
            .log
            .borrow_mut()
            .update(self.line, |state| state.direction = direction);
    }

    fn direction(&self) -> PinDirection {
        let mut log = self.wire.log.borrow_mut();
        log.line(self.line).direction
    }
}

/// Virtual-time delay
pub struct WireDelay {
    wire: Wire,
}

impl DelayNs for WireDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.wire.log.borrow_mut().elapsed_ns += u64::from(ns);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec;

    #[test]
    fn test_decodes_hand_driven_frame() {
        let wire = Wire::new();
        let (mut clock, mut data, _delay) = wire.parts();

        clock.set_high();
        data.set_high();
        clock.set_as_output();
        data.set_as_output();

        // Start
        data.set_low();
        // 0x05, LSB first
        for bit in [true, false, true, false, false, false, false, false] {
            clock.set_low();
            data.set_state(bit);
            clock.set_high();
        }
        clock.set_low();
        data.set_as_input();
        assert!(data.is_low(), "chip should hold ACK");
        clock.set_high();
        clock.set_low();
        data.set_as_output();
        // Stop
        data.set_low();
        clock.set_high();
        data.set_high();

        assert_eq!(wire.frames(), vec![vec![0x05]]);
        assert_eq!(wire.violations(), 0);
    }

    #[test]
    fn test_flags_driven_ack_slot() {
        let wire = Wire::new();
        let (mut clock, mut data, _delay) = wire.parts();
        clock.set_high();
        data.set_high();
        clock.set_as_output();
        data.set_as_output();

        data.set_low();
        for _ in 0..8 {
            clock.set_low();
            clock.set_high();
        }
        // 9th clock without releasing DIO
        clock.set_low();
        clock.set_high();

        assert_eq!(wire.violations(), 1);
    }
}
