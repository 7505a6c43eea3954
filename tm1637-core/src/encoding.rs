//! Segment encoding
//!
//! Segment bit layout of one digit position:
//!
//! ```text
//!        -- 0x01 --
//!       |          |
//!     0x20       0x02
//!       |          |
//!        -- 0x40 --
//!       |          |
//!     0x10       0x04
//!       |          |
//!        -- 0x08 --
//! ```
//!
//! Bit 7 (0x80) is the colon overlay and is never produced by the tables
//! in this module.

use core::str::Chars;

use tm1637_protocol::POSITION_COUNT;

/// Individual segment bits
pub mod seg {
    /// Top
    pub const A: u8 = 0x01;
    /// Upper right
    pub const B: u8 = 0x02;
    /// Lower right
    pub const C: u8 = 0x04;
    /// Bottom
    pub const D: u8 = 0x08;
    /// Lower left
    pub const E: u8 = 0x10;
    /// Upper left
    pub const F: u8 = 0x20;
    /// Middle
    pub const G: u8 = 0x40;
}

/// All segments off
pub const BLANK: u8 = 0x00;

/// Segment patterns for digits 0-9
pub const DIGITS: [u8; 10] = [
    0x3F, // 0
    0x06, // 1
    0x5B, // 2
    0x4F, // 3
    0x66, // 4
    0x6D, // 5
    0x7D, // 6
    0x07, // 7
    0x7F, // 8
    0x6F, // 9
];

/// One frame of the 4-position display
pub type Frame = [u8; POSITION_COUNT];

/// Segment pattern for a digit value
///
/// Values of 10 and above blank the position.
pub const fn digit_to_segments(digit: u8) -> u8 {
    if digit < 10 {
        DIGITS[digit as usize]
    } else {
        BLANK
    }
}

/// Segment pattern approximating a character
///
/// Characters without a usable glyph map to [`BLANK`].
pub const fn char_to_segments(c: char) -> u8 {
    match c {
        '0'..='9' => DIGITS[c as usize - '0' as usize],
        '-' => seg::G,
        '_' => seg::D,
        'A' => 0x77,
        'B' => DIGITS[8],
        'C' => 0x39,
        'D' => DIGITS[0],
        'E' => 0x79,
        'F' => 0x71,
        'G' => DIGITS[6],
        'H' => 0x76,
        'I' => DIGITS[1],
        'J' => 0x0F,
        'L' => 0x38,
        'O' => DIGITS[0],
        'P' => 0x73,
        'R' => DIGITS[0],
        'S' => 0x6C,
        'U' => 0x3D,
        'd' => 0x5E,
        'h' => 0x74,
        'o' => 0x5C,
        'r' => 0x50,
        'u' => seg::C | seg::D | seg::E,
        _ => BLANK,
    }
}

/// Sliding-window frames for scrolling text across the display
///
/// A text of `L` characters yields `L + 4` frames. Each frame shifts the
/// previous one a position to the left and appends the next character, or
/// a blank once the text is exhausted, so the text enters on the right and
/// leaves on the left.
#[derive(Debug, Clone)]
pub struct ScrollFrames<'a> {
    chars: Chars<'a>,
    window: Frame,
    remaining: usize,
}

impl<'a> ScrollFrames<'a> {
    /// Create the frame sequence for `text`
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars(),
            window: [BLANK; POSITION_COUNT],
            remaining: text.chars().count() + POSITION_COUNT,
        }
    }
}

impl Iterator for ScrollFrames<'_> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let incoming = self.chars.next().map_or(BLANK, char_to_segments);
        self.window.rotate_left(1);
        self.window[POSITION_COUNT - 1] = incoming;
        Some(self.window)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ScrollFrames<'_> {}

/// Shorthand for [`ScrollFrames::new`]
pub fn scroll_frames(text: &str) -> ScrollFrames<'_> {
    ScrollFrames::new(text)
}
