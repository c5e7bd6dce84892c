use sdl2::keyboard::Keycode;

/// Maps a host keycode onto the hexadecimal keypad, or `None` for keys the
/// machine doesn't know about.
///
/// The keypad occupies the left-hand block of a QWERTY board, row for row:
/// ```text
/// keypad         host
/// |1|2|3|C|      |1|2|3|4|
/// |4|5|6|D|      |Q|W|E|R|
/// |7|8|9|E|      |A|S|D|F|
/// |A|0|B|F|      |Z|X|C|V|
/// ```
pub fn keymap(key: Keycode) -> Option<u8> {
    match key {
        Keycode::Num1 => Some(0x1),
        Keycode::Num2 => Some(0x2),
        Keycode::Num3 => Some(0x3),
        Keycode::Num4 => Some(0xC),
        Keycode::Q => Some(0x4),
        Keycode::W => Some(0x5),
        Keycode::E => Some(0x6),
        Keycode::R => Some(0xD),
        Keycode::A => Some(0x7),
        Keycode::S => Some(0x8),
        Keycode::D => Some(0x9),
        Keycode::F => Some(0xE),
        Keycode::Z => Some(0xA),
        Keycode::X => Some(0x0),
        Keycode::C => Some(0xB),
        Keycode::V => Some(0xF),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keymap_covers_every_key_once() {
        let host_keys = [
            Keycode::Num1,
            Keycode::Num2,
            Keycode::Num3,
            Keycode::Num4,
            Keycode::Q,
            Keycode::W,
            Keycode::E,
            Keycode::R,
            Keycode::A,
            Keycode::S,
            Keycode::D,
            Keycode::F,
            Keycode::Z,
            Keycode::X,
            Keycode::C,
            Keycode::V,
        ];
        let mut seen = [false; 16];
        for key in host_keys.iter() {
            let kc = keymap(*key).unwrap();
            assert!(!seen[kc as usize]);
            seen[kc as usize] = true;
        }
        assert!(seen.iter().all(|&mapped| mapped));
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        assert_eq!(keymap(Keycode::Escape), None);
    }
}
