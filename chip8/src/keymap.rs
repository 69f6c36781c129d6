use sdl2::keyboard::Keycode;

use c8_core::KEYPAD_LAYOUT;

/// The left 4 alphanumeric columns, position for position with the keypad.
/// ```text
/// |1|2|3|C|      |1|2|3|4|
/// |4|5|6|D|  ->  |Q|W|E|R|
/// |7|8|9|E|  ->  |A|S|D|F|
/// |A|0|B|F|      |Z|X|C|V|
/// ```
const QWERTY_LAYOUT: [[Keycode; 4]; 4] = [
    [Keycode::Num1, Keycode::Num2, Keycode::Num3, Keycode::Num4],
    [Keycode::Q, Keycode::W, Keycode::E, Keycode::R],
    [Keycode::A, Keycode::S, Keycode::D, Keycode::F],
    [Keycode::Z, Keycode::X, Keycode::C, Keycode::V],
];

/// # Keymap
/// The Chip-8 key a physical key stands for, if any
pub fn keymap(key: Keycode) -> Option<u8> {
    QWERTY_LAYOUT
        .iter()
        .flatten()
        .zip(KEYPAD_LAYOUT.iter().flatten())
        .find(|(physical, _)| **physical == key)
        .map(|(_, logical)| *logical)
}
