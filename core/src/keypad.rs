/// # Keypad
/// Chip-8 input is generated with a hexadecimal keypad laid out as a 4x4 grid.
///
/// ```text
/// |1|2|3|C|
/// |4|5|6|D|
/// |7|8|9|E|
/// |A|0|B|F|
/// ```
///
/// Front ends map physical keys onto this grid position by position.
pub const KEYPAD_LAYOUT: [[u8; 4]; 4] = [
    [0x1, 0x2, 0x3, 0xC],
    [0x4, 0x5, 0x6, 0xD],
    [0x7, 0x8, 0x9, 0xE],
    [0xA, 0x0, 0xB, 0xF],
];

/// The only thing the machine needs from its environment: whether a key is held right now.
pub trait Keypad {
    /// # Arguments
    /// * `key` the key 0x0..=0xF; anything larger is never held
    fn is_key_held(&self, key: u8) -> bool;
}

/// A keypad whose state is updated by pressing and releasing keys
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct KeyState {
    held: [bool; 16],
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pressed status of key; keys above 0xF are ignored
    pub fn press(&mut self, key: u8) {
        if let Some(held) = self.held.get_mut(key as usize) {
            *held = true;
        }
    }

    /// Unset the pressed status of key
    pub fn release(&mut self, key: u8) {
        if let Some(held) = self.held.get_mut(key as usize) {
            *held = false;
        }
    }

    pub fn release_all(&mut self) {
        self.held = [false; 16];
    }
}

impl Keypad for KeyState {
    fn is_key_held(&self, key: u8) -> bool {
        self.held.get(key as usize).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_covers_every_key_once() {
        let mut keys: Vec<u8> = KEYPAD_LAYOUT.iter().flatten().copied().collect();
        keys.sort_unstable();
        assert_eq!(keys, (0x0..=0xF).collect::<Vec<u8>>());
    }

    #[test]
    fn test_press_and_release() {
        let mut keys = KeyState::new();
        keys.press(0xE);
        assert!(keys.is_key_held(0xE));
        assert!(!keys.is_key_held(0x1));
        keys.release(0xE);
        assert!(!keys.is_key_held(0xE));
    }

    #[test]
    fn test_release_all() {
        let mut keys = KeyState::new();
        keys.press(0x0);
        keys.press(0xF);
        keys.release_all();
        assert_eq!(keys, KeyState::new());
    }

    #[test]
    fn test_out_of_range_keys_are_never_held() {
        let mut keys = KeyState::new();
        keys.press(0x10);
        assert!(!keys.is_key_held(0x10));
        assert!(!keys.is_key_held(0xFF));
    }
}
