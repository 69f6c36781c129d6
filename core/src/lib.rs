pub use chip8::{Chip8, Step};
pub use error::{Error, Result};
pub use frame::FrameBuffer;
pub use instruction::Instruction;
pub use keypad::{KeyState, Keypad, KEYPAD_LAYOUT};
pub use opcode::Opcode;
pub use operations::Flow;

mod chip8;
pub mod constants;
mod error;
mod frame;
mod instruction;
mod keypad;
pub mod memory;
mod opcode;
mod operations;
pub mod registers;
mod state;
mod timer;
