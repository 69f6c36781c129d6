use crate::opcode::Opcode;

/// A decoded Chip-8 instruction.
///
/// `x` and `y` name the registers Vx and Vy, `kk` is an immediate byte, `n` an immediate
/// nibble and `addr` a 12-bit address.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// 00E0: clear the display
    Clear,
    /// 00EE: return from a subroutine
    Return,
    /// 0NNN: call a machine code routine; ignored
    Sys { addr: u16 },
    /// 1NNN: PC = addr
    Jump { addr: u16 },
    /// 2NNN: STACK.push(PC); PC = addr
    Call { addr: u16 },
    /// 3XKK: if Vx == kk skip
    SkipIfEqual { x: u8, kk: u8 },
    /// 4XKK: if Vx != kk skip
    SkipIfNotEqual { x: u8, kk: u8 },
    /// 5XY0: if Vx == Vy skip
    SkipIfRegistersEqual { x: u8, y: u8 },
    /// 6XKK: Vx = kk
    Load { x: u8, kk: u8 },
    /// 7XKK: Vx += kk, VF untouched
    Add { x: u8, kk: u8 },
    /// 8XY0: Vx = Vy
    Move { x: u8, y: u8 },
    /// 8XY1: Vx |= Vy
    Or { x: u8, y: u8 },
    /// 8XY2: Vx &= Vy
    And { x: u8, y: u8 },
    /// 8XY3: Vx ^= Vy
    Xor { x: u8, y: u8 },
    /// 8XY4: Vx += Vy; VF = carry
    AddRegisters { x: u8, y: u8 },
    /// 8XY5: Vx -= Vy; VF = !borrow
    Sub { x: u8, y: u8 },
    /// 8XY6: Vx >>= 1; VF = shifted out bit
    ShiftRight { x: u8 },
    /// 8XY7: Vx = Vy - Vx; VF = !borrow
    SubReversed { x: u8, y: u8 },
    /// 8XYE: Vx <<= 1; VF = shifted out bit
    ShiftLeft { x: u8 },
    /// 9XY0: if Vx != Vy skip
    SkipIfRegistersNotEqual { x: u8, y: u8 },
    /// ANNN: I = addr
    LoadIndex { addr: u16 },
    /// BNNN: PC = V0 + addr
    JumpOffset { addr: u16 },
    /// CXKK: Vx = random & kk
    Random { x: u8, kk: u8 },
    /// DXYN: draw an n row sprite from mem[I..I+n] at (Vx, Vy)
    Draw { x: u8, y: u8, n: u8 },
    /// EX9E: if key Vx is held skip
    SkipIfKeyHeld { x: u8 },
    /// EXA1: if key Vx isn't held skip
    SkipIfKeyNotHeld { x: u8 },
    /// FX07: Vx = DT
    LoadDelay { x: u8 },
    /// FX0A: wait until a key is held and put it in Vx
    WaitForKey { x: u8 },
    /// FX15: DT = Vx
    SetDelay { x: u8 },
    /// FX18: ST = Vx
    SetSound { x: u8 },
    /// FX1E: I += Vx
    AddIndex { x: u8 },
    /// FX29: I = address of the glyph for digit Vx
    LoadGlyph { x: u8 },
    /// FX33: mem[I..I+3] = bcd(Vx)
    StoreBcd { x: u8 },
    /// FX55: mem[I..=I+x] = V0..=Vx
    StoreRegisters { x: u8 },
    /// FX65: V0..=Vx = mem[I..=I+x]
    LoadRegisters { x: u8 },
    /// Any bit pattern that isn't part of the instruction set
    Unknown(Opcode),
}

impl Instruction {
    /// Selects the Instruction encoded by an Opcode. Every opcode decodes to something.
    pub fn decode(op: Opcode) -> Instruction {
        use Instruction::*;

        let (x, y, n, kk, addr) = (op.x(), op.y(), op.n(), op.kk(), op.addr());
        match op.nibbles() {
            (0x0, 0x0, 0xE, 0x0) => Clear,
            (0x0, 0x0, 0xE, 0xE) => Return,
            (0x0, ..) => Sys { addr },
            (0x1, ..) => Jump { addr },
            (0x2, ..) => Call { addr },
            (0x3, ..) => SkipIfEqual { x, kk },
            (0x4, ..) => SkipIfNotEqual { x, kk },
            (0x5, .., 0x0) => SkipIfRegistersEqual { x, y },
            (0x6, ..) => Load { x, kk },
            (0x7, ..) => Add { x, kk },
            (0x8, .., 0x0) => Move { x, y },
            (0x8, .., 0x1) => Or { x, y },
            (0x8, .., 0x2) => And { x, y },
            (0x8, .., 0x3) => Xor { x, y },
            (0x8, .., 0x4) => AddRegisters { x, y },
            (0x8, .., 0x5) => Sub { x, y },
            (0x8, .., 0x6) => ShiftRight { x },
            (0x8, .., 0x7) => SubReversed { x, y },
            (0x8, .., 0xE) => ShiftLeft { x },
            (0x9, .., 0x0) => SkipIfRegistersNotEqual { x, y },
            (0xA, ..) => LoadIndex { addr },
            (0xB, ..) => JumpOffset { addr },
            (0xC, ..) => Random { x, kk },
            (0xD, ..) => Draw { x, y, n },
            (0xE, _, 0x9, 0xE) => SkipIfKeyHeld { x },
            (0xE, _, 0xA, 0x1) => SkipIfKeyNotHeld { x },
            (0xF, _, 0x0, 0x7) => LoadDelay { x },
            (0xF, _, 0x0, 0xA) => WaitForKey { x },
            (0xF, _, 0x1, 0x5) => SetDelay { x },
            (0xF, _, 0x1, 0x8) => SetSound { x },
            (0xF, _, 0x1, 0xE) => AddIndex { x },
            (0xF, _, 0x2, 0x9) => LoadGlyph { x },
            (0xF, _, 0x3, 0x3) => StoreBcd { x },
            (0xF, _, 0x5, 0x5) => StoreRegisters { x },
            (0xF, _, 0x6, 0x5) => LoadRegisters { x },
            _ => Unknown(op),
        }
    }
}

impl From<Opcode> for Instruction {
    fn from(op: Opcode) -> Self {
        Instruction::decode(op)
    }
}
