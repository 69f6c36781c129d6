use std::time::Instant;

use crate::constants::TIMER_INTERVAL;

/// # Timers
/// Two 8-bit timers (delay & sound) that count down towards 0 at 60Hz.
///
/// Counting is driven by wall-clock time rather than by the number of executed
/// instructions. The current time is always passed in so callers (and tests)
/// decide what "now" is.
#[derive(Copy, Clone, Debug)]
pub struct Timers {
    pub delay: u8,
    pub sound: u8,
    last_tick: Instant,
}

impl Timers {
    pub fn new(now: Instant) -> Self {
        Timers {
            delay: 0,
            sound: 0,
            last_tick: now,
        }
    }

    /// Decrements each nonzero timer by one if a full 60Hz interval has passed since the last
    /// decrement.
    pub fn update(&mut self, now: Instant) {
        if self.delay == 0 && self.sound == 0 {
            return;
        }
        if now.saturating_duration_since(self.last_tick) < TIMER_INTERVAL {
            return;
        }
        self.delay = self.delay.saturating_sub(1);
        self.sound = self.sound.saturating_sub(1);
        self.last_tick = now;
    }

    /// The buzzer would sound for as long as the sound timer is nonzero
    pub fn sound_active(&self) -> bool {
        self.sound > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_idle_timers_dont_tick() {
        let start = Instant::now();
        let mut timers = Timers::new(start);
        timers.update(start + ms(100));
        assert_eq!(timers.delay, 0);
    }

    #[test]
    fn test_waits_for_a_full_interval() {
        let start = Instant::now();
        let mut timers = Timers::new(start);
        timers.delay = 10;
        timers.update(start + ms(16));
        assert_eq!(timers.delay, 10);
        timers.update(start + ms(17));
        assert_eq!(timers.delay, 9);
    }

    #[test]
    fn test_ticks_at_most_once_per_interval() {
        let start = Instant::now();
        let mut timers = Timers::new(start);
        timers.delay = 10;
        // a long stall still only counts as a single tick
        timers.update(start + ms(500));
        assert_eq!(timers.delay, 9);
        // the window restarts from the last tick
        timers.update(start + ms(510));
        timers.update(start + ms(517));
        assert_eq!(timers.delay, 8);
    }

    #[test]
    fn test_never_goes_below_zero() {
        let start = Instant::now();
        let mut timers = Timers::new(start);
        timers.delay = 1;
        timers.sound = 3;
        for n in 1..10 {
            timers.update(start + ms(17 * n));
        }
        assert_eq!(timers.delay, 0);
        assert_eq!(timers.sound, 0);
        assert!(!timers.sound_active());
    }

    #[test]
    fn test_time_going_backwards_is_ignored() {
        let start = Instant::now() + ms(1000);
        let mut timers = Timers::new(start);
        timers.delay = 5;
        timers.update(start - ms(500));
        assert_eq!(timers.delay, 5);
    }
}
