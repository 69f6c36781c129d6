use std::time::Instant;

use crate::frame::FrameBuffer;
use crate::memory::MemoryBank;
use crate::registers::RegisterFile;
use crate::timer::Timers;

/// A snapshot of the Chip8 internal state
///
/// ## CPU
/// - `registers` V0..VF, I, the program counter and the call stack
/// - `timers` the 60Hz delay and sound timers
///
/// ## Memory
/// - 4096 bytes of addressable memory
/// - a 64x32 frame buffer holding the contents of the next frame to be drawn
///
/// ## Output
/// - `draw_flag` is raised by any instruction that changes the frame buffer.
///   It's lowered again at the start of every cycle.
#[derive(Clone)]
pub struct State {
    pub registers: RegisterFile,
    pub memory: MemoryBank,
    pub frame_buffer: FrameBuffer,
    pub timers: Timers,
    pub draw_flag: bool,
}

impl State {
    pub fn new(now: Instant) -> Self {
        State {
            registers: RegisterFile::new(),
            memory: MemoryBank::new(),
            frame_buffer: FrameBuffer::new(),
            timers: Timers::new(now),
            draw_flag: false,
        }
    }

    /// Vx
    pub fn v(&self, x: u8) -> u8 {
        self.registers.v[x as usize]
    }

    pub fn set_v(&mut self, x: u8, value: u8) {
        self.registers.v[x as usize] = value;
    }
}
