use std::time::Duration;

/// Width of the display in pixels
pub const DISPLAY_WIDTH: usize = 64;

/// Height of the display in pixels
pub const DISPLAY_HEIGHT: usize = 32;

/// Bytes of addressable memory
pub const MEMORY_SIZE: usize = 4096;

/// 0x200 is where ROMs are loaded into memory and where execution starts
pub const PROGRAM_START: u16 = 0x200;

/// Everything from `PROGRAM_START` to the end of memory is available to a ROM
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

/// Number of return addresses the stack can hold
pub const STACK_DEPTH: usize = 16;

/// Every instruction is two bytes wide
pub const INSTRUCTION_SIZE: u16 = 2;

/// Timers count down at 60Hz regardless of how quickly instructions are issued
pub const TIMER_INTERVAL: Duration = Duration::from_nanos(1_000_000_000 / 60);

/// Address of the first glyph in the sprite sheet
pub const SPRITE_SHEET_ADDR: u16 = 0x000;

/// Each glyph in the sprite sheet is 5 rows tall
pub const SPRITE_HEIGHT: u16 = 5;

/// # Sprite Sheet
/// The hexadecimal digits 0..F drawn as 4x5 sprites.
/// Each row only uses the high nibble of its byte.
///
/// ```text
/// 0xF0 -> 1111 ....
/// 0x90 -> 1..1 ....
/// 0x90 -> 1..1 ....
/// 0x90 -> 1..1 ....
/// 0xF0 -> 1111 ....
/// ```
#[rustfmt::skip]
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
