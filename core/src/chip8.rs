use std::io::Read;
use std::time::Instant;

use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::INSTRUCTION_SIZE;
use crate::error::Result;
use crate::frame::FrameBuffer;
use crate::instruction::Instruction;
use crate::keypad::Keypad;
use crate::memory::MemoryBank;
use crate::opcode::Opcode;
use crate::operations::{self, Flow};
use crate::registers::RegisterFile;
use crate::state::State;

/// How a cycle went, when it didn't fail
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// An instruction ran normally
    Executed,
    /// FX0A found no held key; the same instruction runs again next cycle
    AwaitingKey,
    /// The opcode isn't part of the instruction set; it was skipped over
    UnknownOpcode(Opcode),
}

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - a random number generator for CXKK
///  - how many unknown opcodes have been skipped
///
/// Supplies interfaces for:
/// - loading roms
/// - advancing the CPU one instruction at a time
/// - inspecting its frame buffer for rendering by some display
///
/// Nothing here sleeps or paces itself. The caller decides how often to `cycle` and passes in
/// the current time so the 60Hz timers can follow the wall clock.
pub struct Chip8 {
    state: State,
    rng: StdRng,
    unknown_opcodes: u64,
}

impl Chip8 {
    /// A machine with empty program memory
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// A machine whose random numbers are reproducible
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Chip8 {
            state: State::new(Instant::now()),
            rng,
            unknown_opcodes: 0,
        }
    }

    /// A machine with `rom` loaded at 0x200
    pub fn with_rom(rom: &[u8]) -> Result<Self> {
        let mut chip8 = Self::new();
        chip8.load_rom(rom)?;
        Ok(chip8)
    }

    /// A machine with a rom read from some source loaded at 0x200
    pub fn from_reader(reader: &mut dyn Read) -> Result<Self> {
        let mut chip8 = Self::new();
        chip8.state.memory.load_from(reader)?;
        Ok(chip8)
    }

    /// Load a rom into program memory
    ///
    /// # Arguments
    /// * `rom` the raw bytes of a ROM; at most 3584 of them
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<()> {
        self.state.memory.load(rom)
    }

    /// Advances the CPU by a single cycle
    /// - lowers the draw flag
    /// - counts the timers down if enough time has passed since they last ticked
    /// - gets, decodes and executes the next opcode
    /// - moves the program counter on unless the instruction says otherwise
    ///
    /// # Arguments
    /// * `keypad` which keys are held right now
    /// * `now` the current time
    pub fn cycle(&mut self, keypad: &dyn Keypad, now: Instant) -> Result<Step> {
        self.state.draw_flag = false;
        self.state.timers.update(now);

        let pc = self.state.registers.pc;
        let op = self.get_op()?;
        let instruction = Instruction::from(op);
        trace!(
            "{:04X} {} {:?} v{:02X?} i{:04X}",
            pc,
            op,
            instruction,
            self.state.registers.v,
            self.state.registers.i
        );

        let flow = self.execute(instruction, keypad)?;
        self.advance(flow);

        let step = match (instruction, flow) {
            (Instruction::Unknown(op), _) => {
                self.unknown_opcodes += 1;
                warn!("skipping unknown opcode {} at {:04X}", op, pc);
                Step::UnknownOpcode(op)
            }
            (Instruction::Sys { addr }, _) => {
                debug!("ignoring machine code call to {:03X} at {:04X}", addr, pc);
                Step::Executed
            }
            (_, Flow::Wait) => Step::AwaitingKey,
            _ => Step::Executed,
        };
        Ok(step)
    }

    /// Executes a decoded instruction without fetching or moving the program counter
    pub fn execute(&mut self, instruction: Instruction, keypad: &dyn Keypad) -> Result<Flow> {
        operations::execute(&mut self.state, instruction, keypad, &mut self.rng)
    }

    /// Gets the opcode currently pointed at by the pc.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    fn get_op(&self) -> Result<Opcode> {
        let word = self
            .state
            .memory
            .read_word(self.state.registers.pc as usize)?;
        Ok(Opcode::from(word))
    }

    fn advance(&mut self, flow: Flow) {
        let pc = &mut self.state.registers.pc;
        match flow {
            Flow::Next => *pc += INSTRUCTION_SIZE,
            Flow::Skip => *pc += 2 * INSTRUCTION_SIZE,
            Flow::Jump(addr) => *pc = addr,
            Flow::Wait => {}
        }
    }

    /// Returns the FrameBuffer if the display should be redrawn
    pub fn get_frame(&self) -> Option<&FrameBuffer> {
        if self.state.draw_flag {
            Some(&self.state.frame_buffer)
        } else {
            None
        }
    }

    /// Whether the last cycle changed the frame buffer
    pub fn draw_flag(&self) -> bool {
        self.state.draw_flag
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    pub fn registers(&self) -> &RegisterFile {
        &self.state.registers
    }

    pub fn registers_mut(&mut self) -> &mut RegisterFile {
        &mut self.state.registers
    }

    pub fn memory(&self) -> &MemoryBank {
        &self.state.memory
    }

    pub fn delay_timer(&self) -> u8 {
        self.state.timers.delay
    }

    /// Whether the buzzer would be sounding
    pub fn sound_active(&self) -> bool {
        self.state.timers.sound_active()
    }

    /// How many unknown opcodes have been skipped so far
    pub fn unknown_opcodes(&self) -> u64 {
        self.unknown_opcodes
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
