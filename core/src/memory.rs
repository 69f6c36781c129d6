use std::io::Read;

use crate::constants::{MAX_ROM_SIZE, MEMORY_SIZE, PROGRAM_START, SPRITE_SHEET, SPRITE_SHEET_ADDR};
use crate::error::{Error, Result};

/// # Memory
/// 4096 bytes of flat, byte-addressable memory.
///
/// ```text
/// 0x000-0x04F  sprite sheet (hex digits 0..F)
/// 0x050-0x1FF  unused (historically the interpreter itself)
/// 0x200-0xFFF  program
/// ```
///
/// Every access is bounds checked; nothing wraps around the end of memory.
#[derive(Clone)]
pub struct MemoryBank {
    bytes: [u8; MEMORY_SIZE],
}

impl MemoryBank {
    /// Zeroed memory with the sprite sheet resident
    pub fn new() -> Self {
        let mut bytes = [0; MEMORY_SIZE];
        let font = SPRITE_SHEET_ADDR as usize;
        bytes[font..font + SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);
        MemoryBank { bytes }
    }

    /// Copy a ROM into memory starting at 0x200
    ///
    /// # Arguments
    /// * `rom` the raw program image; no header, at most 3584 bytes
    pub fn load(&mut self, rom: &[u8]) -> Result<()> {
        if rom.len() > MAX_ROM_SIZE {
            return Err(Error::RomTooLarge {
                size: rom.len(),
                max: MAX_ROM_SIZE,
            });
        }
        let start = PROGRAM_START as usize;
        self.bytes[start..start + rom.len()].copy_from_slice(rom);
        Ok(())
    }

    /// Read a whole ROM from some source and load it
    pub fn load_from(&mut self, reader: &mut dyn Read) -> Result<()> {
        // read one byte past the limit so an oversized ROM is noticed
        let mut rom = Vec::with_capacity(MAX_ROM_SIZE);
        reader
            .take(MAX_ROM_SIZE as u64 + 1)
            .read_to_end(&mut rom)?;
        self.load(&rom)
    }

    pub fn read_byte(&self, addr: usize) -> Result<u8> {
        self.bytes
            .get(addr)
            .copied()
            .ok_or(Error::OutOfBounds { address: addr })
    }

    pub fn write_byte(&mut self, addr: usize, value: u8) -> Result<()> {
        let byte = self
            .bytes
            .get_mut(addr)
            .ok_or(Error::OutOfBounds { address: addr })?;
        *byte = value;
        Ok(())
    }

    /// Read the big-endian word at `addr..addr+2`
    pub fn read_word(&self, addr: usize) -> Result<u16> {
        let word = self.slice(addr, 2)?;
        Ok(u16::from(word[0]) << 8 | u16::from(word[1]))
    }

    /// A read-only view of `addr..addr+len`
    pub fn slice(&self, addr: usize, len: usize) -> Result<&[u8]> {
        let end = Self::end_of(addr, len)?;
        Ok(&self.bytes[addr..end])
    }

    /// A writable view of `addr..addr+len`
    pub fn slice_mut(&mut self, addr: usize, len: usize) -> Result<&mut [u8]> {
        let end = Self::end_of(addr, len)?;
        Ok(&mut self.bytes[addr..end])
    }

    /// Reports the first address that doesn't exist if the range runs off the end
    fn end_of(addr: usize, len: usize) -> Result<usize> {
        let end = addr.saturating_add(len);
        if end > MEMORY_SIZE {
            Err(Error::OutOfBounds {
                address: addr.max(MEMORY_SIZE),
            })
        } else {
            Ok(end)
        }
    }
}

impl Default for MemoryBank {
    fn default() -> Self {
        Self::new()
    }
}
