//! Display trait for 4-digit 7-segment modules

use crate::encoding::{digit_to_segments, Frame};
use crate::state::Position;

/// Trait for a 4-position segment display
///
/// All operations are infallible. Out-of-range input is normalised:
/// positions wrap modulo 4, digits above 9 blank the position, and
/// brightness is truncated to 0-7.
pub trait SegmentDisplay {
    /// Show raw segments at a position
    fn display_segments(&mut self, position: u8, segments: u8);

    /// Show a digit (0-9) at a position; other values blank it
    fn display_digit(&mut self, position: u8, digit: u8) {
        self.display_segments(position, digit_to_segments(digit));
    }

    /// Show or hide the colon
    fn display_colon(&mut self, on: bool);

    /// Scroll text across the display
    fn display_text(&mut self, text: &str);

    /// Blank all positions and the colon
    fn clear(&mut self);

    /// Set brightness (0-7)
    fn set_brightness(&mut self, brightness: u8);

    /// Turn the display on or off
    fn enable(&mut self, on: bool);

    /// Turn the display on
    fn on(&mut self) {
        self.enable(true);
    }

    /// Turn the display off
    fn off(&mut self) {
        self.enable(false);
    }
}

/// Helper trait for whole-display updates
pub trait SegmentDisplayExt: SegmentDisplay {
    /// Show a full frame, left to right
    fn display_frame(&mut self, frame: Frame) {
        for (position, segments) in Position::ALL.into_iter().zip(frame) {
            self.display_segments(position.get(), segments);
        }
    }

    /// Show four digits, left to right
    fn display_digits(&mut self, digits: [u8; 4]) {
        self.display_frame(digits.map(digit_to_segments));
    }
}

// Blanket implementation for all SegmentDisplay types
impl<T: SegmentDisplay> SegmentDisplayExt for T {}
