use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Instructions per second when nothing else is asked for
pub const DEFAULT_SPEED: u32 = 500;

/// Size multiplier for each Chip-8 pixel
pub const DEFAULT_SCALE: usize = 10;

/// Runs a Chip-8 ROM in a window
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Path to the ROM file to run
    pub rom: PathBuf,

    /// Instructions per second
    #[arg(short, long, default_value_t = DEFAULT_SPEED, value_parser = clap::value_parser!(u32).range(1..))]
    pub speed: u32,

    /// Window pixels per Chip-8 pixel
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    pub scale: usize,

    /// Seed for the random number generator, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Config {
    /// How long a single instruction should take at the configured speed
    pub fn cycle_time(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.speed))
    }
}
