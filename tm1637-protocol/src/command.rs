//! TM1637 command bytes
//!
//! Three command families share the byte space, selected by the two
//! high bits:
//! - `0b01xx_xxxx` data command: write/read, address mode, test mode
//! - `0b10xx_xxxx` display control: brightness and on/off
//! - `0b11xx_xxxx` address command: display register to write next

/// Command family prefixes
pub mod cmd {
    /// Data command
    pub const SET_DATA: u8 = 0x40;
    /// Display control command
    pub const SET_DISPLAY: u8 = 0x80;
    /// Address command
    pub const SET_ADDRESS: u8 = 0xC0;
}

/// Data command flags (OR with [`cmd::SET_DATA`])
pub mod data {
    /// Write data to the display registers
    pub const WRITE: u8 = 0x00;
    /// Read the key scan data
    pub const READ_KEYS: u8 = 0x02;
    /// Automatic address increment
    pub const AUTO_INCREMENT: u8 = 0x00;
    /// Fixed address
    pub const FIXED_ADDRESS: u8 = 0x04;
    /// Normal mode
    pub const NORMAL: u8 = 0x00;
    /// Test mode
    pub const TEST: u8 = 0x10;
}

/// Display control flags (OR with [`cmd::SET_DISPLAY`])
pub mod display {
    /// Display off
    pub const OFF: u8 = 0x00;
    /// Display on
    pub const ON: u8 = 0x08;
    /// Brightness occupies the low three bits
    pub const BRIGHTNESS_MASK: u8 = 0x07;
}

/// Number of digit positions wired on a 4-digit module
pub const POSITION_COUNT: usize = 4;

/// Segment bit that lights the colon (wired to position 1)
pub const COLON_BIT: u8 = 0x80;

/// Transfer direction of a data command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataMode {
    /// Host writes display registers
    Write,
    /// Host reads key scan data
    ReadKeys,
}

/// Address handling of a data command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Addressing {
    /// Address increments after each data byte
    AutoIncrement,
    /// Every data byte goes to the addressed register
    Fixed,
}

/// A single TM1637 command byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Data command
    Data {
        /// Write or key read
        mode: DataMode,
        /// Fixed or auto-increment addressing
        addressing: Addressing,
        /// Test mode flag
        test: bool,
    },
    /// Select the display register for the following data byte
    Address(u8),
    /// Display control
    Display {
        /// Brightness, truncated to 0-7 on encode
        brightness: u8,
        /// Display on
        on: bool,
    },
}

impl Command {
    /// Data command used for per-position segment writes
    pub const fn write_fixed() -> Self {
        Command::Data {
            mode: DataMode::Write,
            addressing: Addressing::Fixed,
            test: false,
        }
    }

    /// Address command for a digit position (wrapped to 0-3)
    pub const fn address(position: u8) -> Self {
        Command::Address(position % POSITION_COUNT as u8)
    }

    /// Display control command
    pub const fn display(brightness: u8, on: bool) -> Self {
        Command::Display { brightness, on }
    }

    /// Encode to the byte sent on the wire
    pub const fn encode(self) -> u8 {
        match self {
            Command::Data {
                mode,
                addressing,
                test,
            } => {
                let mut byte = cmd::SET_DATA;
                if let DataMode::ReadKeys = mode {
                    byte |= data::READ_KEYS;
                }
                if let Addressing::Fixed = addressing {
                    byte |= data::FIXED_ADDRESS;
                }
                if test {
                    byte |= data::TEST;
                }
                byte
            }
            Command::Address(position) => cmd::SET_ADDRESS | (position & 0x0F),
            Command::Display { brightness, on } => {
                let flag = if on { display::ON } else { display::OFF };
                cmd::SET_DISPLAY | flag | (brightness & display::BRIGHTNESS_MASK)
            }
        }
    }

    /// Decode a command byte
    ///
    /// Returns `None` for bytes without a command prefix (segment data).
    pub const fn decode(byte: u8) -> Option<Self> {
        match byte & 0xC0 {
            cmd::SET_DATA => Some(Command::Data {
                mode: if byte & data::READ_KEYS != 0 {
                    DataMode::ReadKeys
                } else {
                    DataMode::Write
                },
                addressing: if byte & data::FIXED_ADDRESS != 0 {
                    Addressing::Fixed
                } else {
                    Addressing::AutoIncrement
                },
                test: byte & data::TEST != 0,
            }),
            cmd::SET_DISPLAY => Some(Command::Display {
                brightness: byte & display::BRIGHTNESS_MASK,
                on: byte & display::ON != 0,
            }),
            cmd::SET_ADDRESS => Some(Command::Address(byte & 0x0F)),
            _ => None,
        }
    }
}

impl From<Command> for u8 {
    fn from(command: Command) -> u8 {
        command.encode()
    }
}
