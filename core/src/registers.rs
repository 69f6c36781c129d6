use crate::constants::{PROGRAM_START, STACK_DEPTH};
use crate::error::{Error, Result};

/// # Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) doubles as the carry, borrow and collision flag
/// - (i) a 16-bit memory address register, only checked when dereferenced
///
/// Counter
/// - (pc) a 16-bit program counter, starting at 0x200
///
/// Stack
/// - 16 return addresses and an 8-bit stack pointer (sp) counting how many are in use
#[derive(Clone, Debug, PartialEq)]
pub struct RegisterFile {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub stack: [u16; STACK_DEPTH],
}

impl RegisterFile {
    pub fn new() -> Self {
        RegisterFile {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            stack: [0; STACK_DEPTH],
        }
    }

    pub fn set_flag(&mut self, set: bool) {
        self.v[0xF] = u8::from(set);
    }

    /// STACK.push(addr)
    pub fn push(&mut self, addr: u16) -> Result<()> {
        let pc = self.pc;
        let slot = self
            .stack
            .get_mut(self.sp as usize)
            .ok_or(Error::StackOverflow { pc })?;
        *slot = addr;
        self.sp += 1;
        Ok(())
    }

    /// STACK.pop()
    /// An sp past the top of the stack is reported as an overflow
    pub fn pop(&mut self) -> Result<u16> {
        let pc = self.pc;
        let sp = self.sp.checked_sub(1).ok_or(Error::StackUnderflow { pc })?;
        let addr = *self
            .stack
            .get(sp as usize)
            .ok_or(Error::StackOverflow { pc })?;
        self.sp = sp;
        Ok(addr)
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_program() {
        let r = RegisterFile::new();
        assert_eq!(r.pc, 0x200);
        assert_eq!(r.sp, 0);
        assert_eq!(r.i, 0);
    }

    #[test]
    fn test_push_then_pop() {
        let mut r = RegisterFile::new();
        r.push(0x0ABC).unwrap();
        r.push(0x0DEF).unwrap();
        assert_eq!(r.sp, 2);
        assert_eq!(r.pop().unwrap(), 0x0DEF);
        assert_eq!(r.pop().unwrap(), 0x0ABC);
        assert_eq!(r.sp, 0);
    }

    #[test]
    fn test_push_overflows_at_depth_16() {
        let mut r = RegisterFile::new();
        for addr in 0..16 {
            r.push(addr * 2).unwrap();
        }
        assert!(matches!(r.push(0x300), Err(Error::StackOverflow { pc: 0x200 })));
        assert_eq!(r.sp, 16);
    }

    #[test]
    fn test_pop_underflows_when_empty() {
        let mut r = RegisterFile::new();
        assert!(matches!(r.pop(), Err(Error::StackUnderflow { pc: 0x200 })));
        assert_eq!(r.sp, 0);
    }

    #[test]
    fn test_flag_is_vf() {
        let mut r = RegisterFile::new();
        r.set_flag(true);
        assert_eq!(r.v[0xF], 0x1);
        r.set_flag(false);
        assert_eq!(r.v[0xF], 0x0);
    }

    #[test]
    fn test_corrupt_stack_pointer_is_an_error() {
        let mut r = RegisterFile::new();
        r.sp = 17;
        assert!(matches!(r.push(0x300), Err(Error::StackOverflow { pc: 0x200 })));
        assert!(matches!(r.pop(), Err(Error::StackOverflow { pc: 0x200 })));
        assert_eq!(r.sp, 17);
    }
}
