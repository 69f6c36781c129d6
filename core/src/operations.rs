use rand::{Rng, RngCore};

use crate::constants::{
    INSTRUCTION_SIZE, MEMORY_SIZE, PROGRAM_START, SPRITE_HEIGHT, SPRITE_SHEET_ADDR,
};
use crate::error::{Error, Result};
use crate::instruction::Instruction;
use crate::keypad::Keypad;
use crate::state::State;

/// What happens to the program counter once an instruction has executed
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    /// pc += 2
    Next,
    /// pc += 4
    Skip,
    /// pc = addr
    Jump(u16),
    /// pc is left alone so the same instruction runs again next cycle
    Wait,
}

impl Flow {
    /// pc = target, as long as target is an even address in program memory
    fn jump_to(state: &State, target: u16) -> Result<Flow> {
        let in_program = (PROGRAM_START..MEMORY_SIZE as u16).contains(&target);
        if !in_program || target % INSTRUCTION_SIZE != 0 {
            return Err(Error::BadJump {
                target,
                pc: state.registers.pc,
            });
        }
        Ok(Flow::Jump(target))
    }

    fn skip_if(condition: bool) -> Flow {
        if condition {
            Flow::Skip
        } else {
            Flow::Next
        }
    }
}

/// Executes a single instruction against the state.
///
/// # Arguments
/// * `keypad` answers whether a key is currently held
/// * `rng` the source of random bytes for CXKK
pub fn execute(
    state: &mut State,
    instruction: Instruction,
    keypad: &dyn Keypad,
    rng: &mut dyn RngCore,
) -> Result<Flow> {
    use Instruction::*;

    let flow = match instruction {
        Clear => clr(state),
        Return => rts(state)?,
        Sys { .. } => Flow::Next,
        Jump { addr } => jump(state, addr)?,
        Call { addr } => call(state, addr)?,
        SkipIfEqual { x, kk } => ske(state, x, kk),
        SkipIfNotEqual { x, kk } => skne(state, x, kk),
        SkipIfRegistersEqual { x, y } => skre(state, x, y),
        Load { x, kk } => load(state, x, kk),
        Add { x, kk } => add(state, x, kk),
        Move { x, y } => mv(state, x, y),
        Or { x, y } => or(state, x, y),
        And { x, y } => and(state, x, y),
        Xor { x, y } => xor(state, x, y),
        AddRegisters { x, y } => addr(state, x, y),
        Sub { x, y } => sub(state, x, y),
        ShiftRight { x } => shr(state, x),
        SubReversed { x, y } => subn(state, x, y),
        ShiftLeft { x } => shl(state, x),
        SkipIfRegistersNotEqual { x, y } => skrne(state, x, y),
        LoadIndex { addr } => loadi(state, addr),
        JumpOffset { addr } => jumpi(state, addr)?,
        Random { x, kk } => rand(state, x, kk, rng.gen()),
        Draw { x, y, n } => draw(state, x, y, n)?,
        SkipIfKeyHeld { x } => skpr(state, x, keypad),
        SkipIfKeyNotHeld { x } => skup(state, x, keypad),
        LoadDelay { x } => moved(state, x),
        WaitForKey { x } => keyd(state, x, keypad),
        SetDelay { x } => loads(state, x),
        SetSound { x } => ld(state, x),
        AddIndex { x } => addi(state, x),
        LoadGlyph { x } => ldspr(state, x),
        StoreBcd { x } => bcd(state, x)?,
        StoreRegisters { x } => stor(state, x)?,
        LoadRegisters { x } => read(state, x)?,
        Unknown(_) => Flow::Next,
    };
    Ok(flow)
}

/// clear
pub fn clr(state: &mut State) -> Flow {
    state.frame_buffer.clear();
    state.draw_flag = true;
    Flow::Next
}

/// PC = STACK.pop() + 2
pub fn rts(state: &mut State) -> Result<Flow> {
    let caller = state.registers.pop()?;
    Flow::jump_to(state, caller.wrapping_add(INSTRUCTION_SIZE))
}

/// PC = addr
pub fn jump(state: &State, addr: u16) -> Result<Flow> {
    Flow::jump_to(state, addr)
}

/// STACK.push(PC); PC = addr
/// The target is checked before anything is pushed
pub fn call(state: &mut State, addr: u16) -> Result<Flow> {
    let flow = Flow::jump_to(state, addr)?;
    let pc = state.registers.pc;
    state.registers.push(pc)?;
    Ok(flow)
}

/// if Vx == kk then pc += 2
pub fn ske(state: &State, x: u8, kk: u8) -> Flow {
    Flow::skip_if(state.v(x) == kk)
}

/// if Vx != kk then pc += 2
pub fn skne(state: &State, x: u8, kk: u8) -> Flow {
    Flow::skip_if(state.v(x) != kk)
}

/// if Vx == Vy then pc += 2
pub fn skre(state: &State, x: u8, y: u8) -> Flow {
    Flow::skip_if(state.v(x) == state.v(y))
}

/// Vx = kk
pub fn load(state: &mut State, x: u8, kk: u8) -> Flow {
    state.set_v(x, kk);
    Flow::Next
}

/// Vx += kk
/// Add kk to Vx; allow for overflow but implicitly drop it
pub fn add(state: &mut State, x: u8, kk: u8) -> Flow {
    state.set_v(x, state.v(x).wrapping_add(kk));
    Flow::Next
}

/// Vx = Vy
pub fn mv(state: &mut State, x: u8, y: u8) -> Flow {
    state.set_v(x, state.v(y));
    Flow::Next
}

/// Vx |= Vy
pub fn or(state: &mut State, x: u8, y: u8) -> Flow {
    state.set_v(x, state.v(x) | state.v(y));
    Flow::Next
}

/// Vx &= Vy
pub fn and(state: &mut State, x: u8, y: u8) -> Flow {
    state.set_v(x, state.v(x) & state.v(y));
    Flow::Next
}

/// Vx ^= Vy
pub fn xor(state: &mut State, x: u8, y: u8) -> Flow {
    state.set_v(x, state.v(x) ^ state.v(y));
    Flow::Next
}

// VF is written last in the arithmetic operations below so that when x is 0xF the
// flag wins over the result.

/// Vx += Vy; VF = overflow
pub fn addr(state: &mut State, x: u8, y: u8) -> Flow {
    let (res, over) = state.v(x).overflowing_add(state.v(y));
    state.set_v(x, res);
    state.registers.set_flag(over);
    Flow::Next
}

/// Vx -= Vy; VF = !underflow
pub fn sub(state: &mut State, x: u8, y: u8) -> Flow {
    let (res, under) = state.v(x).overflowing_sub(state.v(y));
    state.set_v(x, res);
    state.registers.set_flag(!under);
    Flow::Next
}

/// Vx /= 2; VF = underflow
pub fn shr(state: &mut State, x: u8) -> Flow {
    let vx = state.v(x);
    state.set_v(x, vx >> 1);
    state.registers.set_flag(vx & 0x1 == 0x1);
    Flow::Next
}

/// Vx = Vy - Vx; VF = !underflow
pub fn subn(state: &mut State, x: u8, y: u8) -> Flow {
    let (res, under) = state.v(y).overflowing_sub(state.v(x));
    state.set_v(x, res);
    state.registers.set_flag(!under);
    Flow::Next
}

/// Vx *= 2; VF = overflow
pub fn shl(state: &mut State, x: u8) -> Flow {
    let vx = state.v(x);
    state.set_v(x, vx << 1);
    state.registers.set_flag(vx & 0x80 == 0x80);
    Flow::Next
}

/// if Vx != Vy then pc += 2
pub fn skrne(state: &State, x: u8, y: u8) -> Flow {
    Flow::skip_if(state.v(x) != state.v(y))
}

/// I = addr
pub fn loadi(state: &mut State, addr: u16) -> Flow {
    state.registers.i = addr;
    Flow::Next
}

/// PC = V0 + addr
pub fn jumpi(state: &State, addr: u16) -> Result<Flow> {
    Flow::jump_to(state, u16::from(state.v(0x0)) + addr)
}

/// Vx = random_byte & kk
pub fn rand(state: &mut State, x: u8, kk: u8, random_byte: u8) -> Flow {
    state.set_v(x, random_byte & kk);
    Flow::Next
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory i..i+n at position Vx, Vy on the FrameBuffer with wrapping.
/// Sets VF if any pixels were erased
pub fn draw(state: &mut State, x: u8, y: u8, n: u8) -> Result<Flow> {
    let (px, py) = (state.v(x) as usize, state.v(y) as usize);
    let sprite = state
        .memory
        .slice(state.registers.i as usize, n as usize)?;
    let collision = state.frame_buffer.draw_sprite(px, py, sprite);
    state.registers.set_flag(collision);
    state.draw_flag = true;
    Ok(Flow::Next)
}

/// if Vx.pressed then pc += 2
pub fn skpr(state: &State, x: u8, keypad: &dyn Keypad) -> Flow {
    Flow::skip_if(keypad.is_key_held(state.v(x)))
}

/// if !Vx.pressed then pc += 2
pub fn skup(state: &State, x: u8, keypad: &dyn Keypad) -> Flow {
    Flow::skip_if(!keypad.is_key_held(state.v(x)))
}

/// Vx = DT
pub fn moved(state: &mut State, x: u8) -> Flow {
    state.set_v(x, state.timers.delay);
    Flow::Next
}

/// await keypress for Vx
/// Scans keys 0..F in order; if none are held the pc stays put and this runs again
pub fn keyd(state: &mut State, x: u8, keypad: &dyn Keypad) -> Flow {
    match (0x0..=0xF).find(|&key| keypad.is_key_held(key)) {
        Some(key) => {
            state.set_v(x, key);
            Flow::Next
        }
        None => Flow::Wait,
    }
}

/// DT = Vx
pub fn loads(state: &mut State, x: u8) -> Flow {
    state.timers.delay = state.v(x);
    Flow::Next
}

/// ST = Vx
pub fn ld(state: &mut State, x: u8) -> Flow {
    state.timers.sound = state.v(x);
    Flow::Next
}

/// I += Vx
pub fn addi(state: &mut State, x: u8) -> Flow {
    state.registers.i = state.registers.i.wrapping_add(u16::from(state.v(x)));
    Flow::Next
}

/// I = Vx * 5
/// Set I to the memory address of the sprite for the low nibble of Vx
/// See constants::SPRITE_SHEET for more details
pub fn ldspr(state: &mut State, x: u8) -> Flow {
    let digit = u16::from(state.v(x) & 0xF);
    state.registers.i = SPRITE_SHEET_ADDR + digit * SPRITE_HEIGHT;
    Flow::Next
}

/// mem[I..I+3] = bcd(Vx)
/// Store BCD repr of Vx in memory starting at address i
pub fn bcd(state: &mut State, x: u8) -> Result<Flow> {
    let vx = state.v(x);
    let digits = [vx / 100, vx / 10 % 10, vx % 10];
    state
        .memory
        .slice_mut(state.registers.i as usize, 3)?
        .copy_from_slice(&digits);
    Ok(Flow::Next)
}

/// mem[I..=I+x] = V0..=Vx
/// Fill memory starting at address i with V0..=Vx
pub fn stor(state: &mut State, x: u8) -> Result<Flow> {
    let count = x as usize + 1;
    state
        .memory
        .slice_mut(state.registers.i as usize, count)?
        .copy_from_slice(&state.registers.v[..count]);
    Ok(Flow::Next)
}

/// V0..=Vx = mem[I..=I+x]
/// Fill V0..=Vx with memory starting at address i
pub fn read(state: &mut State, x: u8) -> Result<Flow> {
    let count = x as usize + 1;
    let bytes = state.memory.slice(state.registers.i as usize, count)?;
    state.registers.v[..count].copy_from_slice(bytes);
    Ok(Flow::Next)
}
