use std::io;

use thiserror::Error;

/// Everything that can stop the machine from loading or completing a cycle.
///
/// Load failures (`Io`, `RomTooLarge`) only happen while constructing a machine.
/// The rest are returned from `Chip8::cycle` and leave it to the driver to decide
/// whether to halt.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unable to read ROM: {0}")]
    Io(#[from] io::Error),

    #[error("ROM is too large ({size} bytes), max size is {max} bytes")]
    RomTooLarge { size: usize, max: usize },

    #[error("memory access out of bounds at address {address:#06X}")]
    OutOfBounds { address: usize },

    #[error("stack overflow: subroutine call at {pc:#06X} exceeds the stack depth")]
    StackOverflow { pc: u16 },

    #[error("stack underflow: return at {pc:#06X} with an empty call stack")]
    StackUnderflow { pc: u16 },

    #[error("bad jump at {pc:#06X}: {target:#06X} is odd or outside program memory")]
    BadJump { target: u16, pc: u16 },
}

impl Error {
    /// Whether this error came from loading a ROM rather than running one
    pub fn is_load_error(&self) -> bool {
        matches!(self, Error::Io(_) | Error::RomTooLarge { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
