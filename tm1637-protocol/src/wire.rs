//! Bit order, acknowledge and frame state

/// Acknowledge bit sampled after each byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ack {
    /// The chip pulled DIO low
    Acknowledged,
    /// DIO stayed high
    Missing,
}

impl Ack {
    /// Interpret the sampled DIO level (low = acknowledged)
    pub const fn from_line(high: bool) -> Self {
        if high {
            Ack::Missing
        } else {
            Ack::Acknowledged
        }
    }

    /// Check if the byte was acknowledged
    pub const fn is_acknowledged(self) -> bool {
        matches!(self, Ack::Acknowledged)
    }
}

/// Bus state between start and stop conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameState {
    /// No frame open
    #[default]
    Idle,
    /// Start condition sent, between bytes
    Framed,
    /// Mid-byte
    Transmitting,
}

/// Iterator over the bits of a byte in wire order (least-significant first)
#[derive(Debug, Clone)]
pub struct LsbBits {
    value: u8,
    index: u8,
}

impl LsbBits {
    /// Create an iterator over `value`
    pub const fn new(value: u8) -> Self {
        Self { value, index: 0 }
    }
}

impl Iterator for LsbBits {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.index >= 8 {
            return None;
        }
        let bit = (self.value >> self.index) & 0x01 != 0;
        self.index += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (8 - self.index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LsbBits {}
