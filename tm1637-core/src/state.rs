//! Display state cache
//!
//! Mirrors what the chip currently shows so the driver can skip writes
//! that would not change anything. The cache holds the bytes exactly as
//! they were transmitted, including the colon bit at position 1.

use tm1637_protocol::{Command, COLON_BIT, POSITION_COUNT};

use crate::encoding::{Frame, BLANK};

/// Position that carries the colon segment
pub const COLON_POSITION: Position = Position(1);

/// A digit position, always in 0-3
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Position(u8);

impl Position {
    /// All positions, left to right
    pub const ALL: [Position; POSITION_COUNT] = [Position(0), Position(1), Position(2), Position(3)];

    /// Wrap an arbitrary index onto the 4 positions
    pub const fn wrapping(index: u8) -> Self {
        Position(index % POSITION_COUNT as u8)
    }

    /// Position index (0-3)
    pub const fn get(self) -> u8 {
        self.0
    }

    const fn slot(self) -> usize {
        self.0 as usize
    }
}

/// Display brightness, always in 0-7
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Brightness(u8);

impl Brightness {
    /// Brightest level
    pub const MAX: Brightness = Brightness(7);

    /// Truncate a raw value to the 3-bit brightness range
    pub const fn truncating(value: u8) -> Self {
        Brightness(value & 0x07)
    }

    /// Brightness level (0-7)
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::MAX
    }
}

/// A segment byte that has to go out on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentWrite {
    /// Target position
    pub position: Position,
    /// Byte to transmit, colon bit included
    pub segments: u8,
}

/// Cached chip state
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayState {
    /// Last transmitted byte per position
    segments: Frame,
    brightness: Brightness,
    enabled: bool,
    colon: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new(Brightness::MAX)
    }
}

impl DisplayState {
    /// Create a blank, disabled state
    pub const fn new(brightness: Brightness) -> Self {
        Self {
            segments: [BLANK; POSITION_COUNT],
            brightness,
            enabled: false,
            colon: false,
        }
    }

    /// Cached bytes for all positions
    pub fn segments(&self) -> Frame {
        self.segments
    }

    /// Cached byte at a position
    pub fn segment(&self, position: Position) -> u8 {
        self.segments[position.slot()]
    }

    /// Current brightness
    pub fn brightness(&self) -> Brightness {
        self.brightness
    }

    /// Check if the display is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Check if the colon is shown
    pub fn colon(&self) -> bool {
        self.colon
    }

    /// Byte to transmit for raw segments at a position
    ///
    /// The colon bit is folded in at [`COLON_POSITION`] while the colon
    /// is on.
    pub fn wire_byte(&self, position: Position, raw: u8) -> u8 {
        if self.colon && position == COLON_POSITION {
            raw | COLON_BIT
        } else {
            raw
        }
    }

    /// Plan a segment write
    ///
    /// Returns `None` when the chip already shows the resulting byte.
    pub fn plan_segments(&self, position: Position, raw: u8) -> Option<SegmentWrite> {
        let segments = self.wire_byte(position, raw);
        if segments == self.segment(position) {
            return None;
        }
        Some(SegmentWrite { position, segments })
    }

    /// Update the colon flag and plan the rewrite of the colon position
    ///
    /// The rewrite is unconditional: the base segments may be unchanged
    /// while the overlay changes.
    pub fn plan_colon(&mut self, on: bool) -> SegmentWrite {
        self.colon = on;
        let base = self.segment(COLON_POSITION) & !COLON_BIT;
        SegmentWrite {
            position: COLON_POSITION,
            segments: if on { base | COLON_BIT } else { base },
        }
    }

    /// Record a transmitted write
    pub fn commit(&mut self, write: SegmentWrite) {
        self.segments[write.position.slot()] = write.segments;
    }

    /// Set brightness (truncated to 0-7)
    pub fn set_brightness(&mut self, value: u8) {
        self.brightness = Brightness::truncating(value);
    }

    /// Set the enabled flag
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Display control command reflecting brightness and enable
    pub fn control_command(&self) -> Command {
        Command::display(self.brightness.get(), self.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_wraps() {
        assert_eq!(Position::wrapping(0).get(), 0);
        assert_eq!(Position::wrapping(3).get(), 3);
        assert_eq!(Position::wrapping(4).get(), 0);
        assert_eq!(Position::wrapping(7).get(), 3);
        assert_eq!(Position::wrapping(255).get(), 3);
    }

    #[test]
    fn test_brightness_truncates() {
        assert_eq!(Brightness::truncating(7).get(), 7);
        assert_eq!(Brightness::truncating(8).get(), 0);
        assert_eq!(Brightness::truncating(0x0F).get(), 7);
        assert_eq!(Brightness::default(), Brightness::MAX);
    }

    #[test]
    fn test_plan_and_commit() {
        let mut state = DisplayState::default();
        let pos = Position::wrapping(2);

        let write = state.plan_segments(pos, 0x6D).unwrap();
        assert_eq!(write.segments, 0x6D);
        state.commit(write);
        assert_eq!(state.segment(pos), 0x6D);

        // Same value again is a no-op
        assert_eq!(state.plan_segments(pos, 0x6D), None);
    }

    #[test]
    fn test_blank_on_fresh_state_is_noop() {
        let state = DisplayState::default();
        for pos in Position::ALL {
            assert_eq!(state.plan_segments(pos, BLANK), None);
        }
    }

    #[test]
    fn test_colon_only_at_position_one() {
        let mut state = DisplayState::default();
        let write = state.plan_colon(true);
        state.commit(write);

        assert_eq!(state.wire_byte(Position::wrapping(1), 0x06), 0x86);
        assert_eq!(state.wire_byte(Position::wrapping(0), 0x06), 0x06);
        assert_eq!(state.wire_byte(Position::wrapping(2), 0x06), 0x06);
    }

    #[test]
    fn test_colon_keeps_base_segments() {
        let mut state = DisplayState::default();
        let write = state.plan_segments(COLON_POSITION, 0x5B).unwrap();
        state.commit(write);

        let on = state.plan_colon(true);
        assert_eq!(on.position, COLON_POSITION);
        assert_eq!(on.segments, 0xDB);
        state.commit(on);
        assert!(state.colon());

        let off = state.plan_colon(false);
        assert_eq!(off.segments, 0x5B);
        state.commit(off);
        assert!(!state.colon());
    }

    #[test]
    fn test_colon_rewrite_is_forced() {
        let mut state = DisplayState::default();
        let first = state.plan_colon(true);
        state.commit(first);
        // Same request again still produces a write
        let second = state.plan_colon(true);
        assert_eq!(first, second);
    }

    #[test]
    fn test_segment_write_with_colon_on() {
        let mut state = DisplayState::default();
        let write = state.plan_colon(true);
        state.commit(write);

        // Base unchanged, colon already on the wire
        assert_eq!(state.plan_segments(COLON_POSITION, BLANK), None);
        let write = state.plan_segments(COLON_POSITION, 0x06).unwrap();
        assert_eq!(write.segments, 0x86);
    }

    #[test]
    fn test_control_command() {
        let mut state = DisplayState::default();
        assert_eq!(state.control_command().encode(), 0x87);

        state.set_enabled(true);
        assert_eq!(state.control_command().encode(), 0x8F);

        state.set_brightness(10);
        assert_eq!(state.brightness().get(), 2);
        assert_eq!(state.control_command().encode(), 0x8A);
    }
}
