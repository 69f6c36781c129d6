//! Runs small hand-assembled programs from start to finish without a display.

use std::time::Instant;

use c8_core::{Chip8, KeyState, Step};

/// Cycles until the program counter parks on `halt` (a jump to itself)
fn run_until(chip8: &mut Chip8, keys: &KeyState, halt: u16) -> Vec<u16> {
    let mut trace = Vec::new();
    for _ in 0..1000 {
        let pc = chip8.registers().pc;
        trace.push(pc);
        if pc == halt {
            return trace;
        }
        chip8.cycle(keys, Instant::now()).unwrap();
    }
    panic!("program never reached {:04X}", halt);
}

#[test]
fn counts_with_a_subroutine() {
    #[rustfmt::skip]
    let rom = [
        0x22, 0x08, // 0x200: call 0x208
        0x31, 0x0A, // 0x202: skip if V1 == 10
        0x12, 0x00, // 0x204: jump 0x200
        0x12, 0x06, // 0x206: halt
        0x71, 0x01, // 0x208: V1 += 1
        0x00, 0xEE, // 0x20A: return
    ];
    let mut chip8 = Chip8::with_rom(&rom).unwrap();
    let trace = run_until(&mut chip8, &KeyState::new(), 0x206);

    assert_eq!(chip8.registers().v[0x1], 10);
    assert_eq!(chip8.registers().sp, 0);
    assert!(trace.iter().all(|&pc| pc % 2 == 0 && pc >= 0x200 && pc < 0x1000));
}

#[test]
fn draws_a_font_glyph() {
    #[rustfmt::skip]
    let rom = [
        0x60, 0x00, // 0x200: V0 = 0
        0xF0, 0x29, // 0x202: I = glyph(V0)
        0xD0, 0x05, // 0x204: draw 5 rows at (V0, V0)
        0x12, 0x06, // 0x206: halt
    ];
    let mut chip8 = Chip8::with_rom(&rom).unwrap();
    run_until(&mut chip8, &KeyState::new(), 0x206);

    let picture = chip8.frame_buffer().to_string();
    let rows: Vec<&str> = picture.lines().take(6).map(|row| &row[..6]).collect();
    assert_eq!(
        rows,
        vec!["####..", "#..#..", "#..#..", "#..#..", "####..", "......"]
    );
    assert_eq!(chip8.registers().v[0xF], 0);
}

#[test]
fn drawing_twice_erases_and_collides() {
    #[rustfmt::skip]
    let rom = [
        0xA0, 0x00, // 0x200: I = 0
        0xD0, 0x05, // 0x202: draw
        0xD0, 0x05, // 0x204: draw again
        0x12, 0x06, // 0x206: halt
    ];
    let mut chip8 = Chip8::with_rom(&rom).unwrap();
    run_until(&mut chip8, &KeyState::new(), 0x206);

    assert!(chip8.frame_buffer().is_blank());
    assert_eq!(chip8.registers().v[0xF], 1);
}

#[test]
fn stores_decimal_digits_and_reads_them_back() {
    #[rustfmt::skip]
    let rom = [
        0x60, 0xEA, // 0x200: V0 = 234
        0xA3, 0x00, // 0x202: I = 0x300
        0xF0, 0x33, // 0x204: mem[I..I+3] = bcd(V0)
        0xF2, 0x65, // 0x206: V0..=V2 = mem[I..=I+2]
        0x12, 0x08, // 0x208: halt
    ];
    let mut chip8 = Chip8::with_rom(&rom).unwrap();
    run_until(&mut chip8, &KeyState::new(), 0x208);

    assert_eq!(chip8.registers().v[..3], [2, 3, 4]);
    assert_eq!(chip8.memory().slice(0x300, 3).unwrap(), &[2, 3, 4]);
}

#[test]
fn waits_for_a_key_then_draws_it() {
    #[rustfmt::skip]
    let rom = [
        0xF0, 0x0A, // 0x200: V0 = next key
        0xF0, 0x29, // 0x202: I = glyph(V0)
        0x61, 0x05, // 0x204: V1 = 5
        0xD1, 0x15, // 0x206: draw 5 rows at (V1, V1)
        0x12, 0x08, // 0x208: halt
    ];
    let mut chip8 = Chip8::with_rom(&rom).unwrap();
    let mut keys = KeyState::new();

    for _ in 0..3 {
        assert_eq!(chip8.cycle(&keys, Instant::now()).unwrap(), Step::AwaitingKey);
        assert_eq!(chip8.registers().pc, 0x200);
    }

    keys.press(0xA);
    run_until(&mut chip8, &keys, 0x208);

    assert_eq!(chip8.registers().v[0x0], 0xA);
    // top row of the A glyph is 0xF0
    for x in 5..9 {
        assert_eq!(chip8.frame_buffer().get(x, 5), Some(true));
    }
    assert_eq!(chip8.frame_buffer().get(9, 5), Some(false));
}

#[test]
fn oversized_rom_never_starts() {
    let rom = vec![0x12; 3585];
    let err = Chip8::with_rom(&rom).err().unwrap();
    assert!(err.is_load_error());
}
