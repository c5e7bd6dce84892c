use std::fmt;

/// Fatal conditions surfaced by the virtual machine.
///
/// None of these are recoverable for the running program; the host decides
/// whether to halt, reset, or report. No instruction mutates state partially:
/// a handler that fails reports the error before any of its effects are
/// committed.
#[derive(Debug)]
pub enum Error {
    /// The program counter addressed memory outside the valid range
    FetchOutOfBounds(u16),
    /// The fetched instruction word matches no defined handler
    InvalidOpcode(u16),
    /// A call was attempted with the stack already at capacity
    StackOverflow,
    /// A return was attempted with an empty stack
    StackUnderflow,
    /// A key-test instruction referenced a key index outside 0x0..=0xF
    InvalidKey(u8),
    /// The ROM does not fit in memory at its load address
    RomTooLarge(usize),
    /// The ROM byte source failed to read
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::FetchOutOfBounds(pc) => {
                write!(f, "instruction fetch at {:#05X} is out of bounds", pc)
            }
            Error::InvalidOpcode(word) => write!(f, "invalid opcode {:#06X}", word),
            Error::StackOverflow => write!(f, "call stack overflow"),
            Error::StackUnderflow => write!(f, "return with an empty call stack"),
            Error::InvalidKey(key) => write!(f, "invalid key index {:#04X}", key),
            Error::RomTooLarge(len) => write!(f, "ROM of {} bytes does not fit in memory", len),
            Error::Io(err) => write!(f, "failed to read ROM: {}", err),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
