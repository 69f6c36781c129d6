use std::fs;
use std::time::Instant;

use anyhow::{anyhow, Context};
use log::{error, info};
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;

use c8_core::{Chip8, KeyState};
use c8_display::Display;

use crate::config::Config;
use crate::keymap::keymap;

pub fn run(config: &Config) -> anyhow::Result<()> {
    // Load ROM
    let rom = fs::read(&config.rom)
        .with_context(|| format!("unable to open ROM {}", config.rom.display()))?;
    let mut chip8 = match config.seed {
        Some(seed) => Chip8::seeded(seed),
        None => Chip8::new(),
    };
    chip8
        .load_rom(&rom)
        .with_context(|| format!("unable to load ROM {}", config.rom.display()))?;
    info!("loaded {} byte ROM {}", rom.len(), config.rom.display());

    // Get SDL2 context
    let sdl = sdl2::init().map_err(|e| anyhow!(e))?;
    let mut display = Display::new(&sdl, config.scale)?;
    let mut events = sdl.event_pump().map_err(|e| anyhow!(e))?;
    let mut keys = KeyState::new();

    // Set initial timing
    let cycle_time = config.cycle_time();
    let mut last_cycle = Instant::now();

    // Whether or not the configured clock speed should be respected
    let mut fast_forward = false;

    'event: loop {
        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                // Key up events go elsewhere once the window loses focus
                Event::Window {
                    win_event: WindowEvent::FocusLost,
                    ..
                } => keys.release_all(),
                Event::KeyDown {
                    keycode: Some(key),
                    repeat,
                    ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => keys.press(kc),
                    (Keycode::Space, _) => fast_forward = true,
                    (Keycode::Return, _) if !repeat => dump_registers(&chip8),
                    (Keycode::Escape, _) => break 'event,
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => keys.release(kc),
                    (Keycode::Space, _) => fast_forward = false,
                    _ => continue,
                },
                _ => continue,
            };
        }

        // Update state
        if let Err(e) = chip8.cycle(&keys, Instant::now()) {
            error!("halting at {:04X}", chip8.registers().pc);
            dump_registers(&chip8);
            return Err(e).context("machine halted");
        }

        // If the draw flag is set render the current frame
        if let Some(frame) = chip8.get_frame() {
            display.render(frame)?;
        }

        // Handle timing
        let current_time = Instant::now();
        let elapsed_cycle_time = current_time - last_cycle;
        if !fast_forward && cycle_time > elapsed_cycle_time {
            std::thread::sleep(cycle_time - elapsed_cycle_time);
        }
        last_cycle = Instant::now();
    }

    info!(
        "exiting; {} unknown opcodes skipped",
        chip8.unknown_opcodes()
    );
    Ok(())
}

/// Logs the registers; bound to the return key
fn dump_registers(chip8: &Chip8) {
    let registers = chip8.registers();
    for (n, v) in registers.v.iter().enumerate() {
        info!("V[{:X}] = {:02X}", n, v);
    }
    info!(
        "I = {:04X} pc = {:04X} sp = {} delay = {}",
        registers.i,
        registers.pc,
        registers.sp,
        chip8.delay_timer()
    );
}
