use crate::input::Key;

/// Translates a browser `KeyboardEvent.key` value into a `Key`.
///
/// Letters are case-insensitive so that a held Shift does not produce a
/// different key identity for the same physical key. Returns `None` for keys
/// the scene does not track.
pub fn translate_key_name(name: &str) -> Option<Key> {
    let key = match name {
        "Escape" | "Esc" => Key::Escape,
        "Enter" => Key::Enter,
        "Tab" => Key::Tab,
        "Backspace" => Key::Backspace,
        " " | "Space" | "Spacebar" => Key::Space,

        "ArrowUp" | "Up" => Key::ArrowUp,
        "ArrowDown" | "Down" => Key::ArrowDown,
        "ArrowLeft" | "Left" => Key::ArrowLeft,
        "ArrowRight" | "Right" => Key::ArrowRight,

        "Shift" => Key::Shift,
        "Control" => Key::Control,
        "Alt" => Key::Alt,
        "Meta" => Key::Meta,

        _ => {
            let mut chars = name.chars();
            let (Some(c), None) = (chars.next(), chars.next()) else {
                return None;
            };
            return map_char(c);
        }
    };
    Some(key)
}

fn map_char(c: char) -> Option<Key> {
    let k = match c.to_ascii_lowercase() {
        'a' => Key::A,
        'b' => Key::B,
        'c' => Key::C,
        'd' => Key::D,
        'e' => Key::E,
        'f' => Key::F,
        'g' => Key::G,
        'h' => Key::H,
        'i' => Key::I,
        'j' => Key::J,
        'k' => Key::K,
        'l' => Key::L,
        'm' => Key::M,
        'n' => Key::N,
        'o' => Key::O,
        'p' => Key::P,
        'q' => Key::Q,
        'r' => Key::R,
        's' => Key::S,
        't' => Key::T,
        'u' => Key::U,
        'v' => Key::V,
        'w' => Key::W,
        'x' => Key::X,
        'y' => Key::Y,
        'z' => Key::Z,

        '0' => Key::Digit0,
        '1' => Key::Digit1,
        '2' => Key::Digit2,
        '3' => Key::Digit3,
        '4' => Key::Digit4,
        '5' => Key::Digit5,
        '6' => Key::Digit6,
        '7' => Key::Digit7,
        '8' => Key::Digit8,
        '9' => Key::Digit9,

        _ => return None,
    };
    Some(k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_ignore_case() {
        assert_eq!(translate_key_name("w"), Some(Key::W));
        assert_eq!(translate_key_name("W"), Some(Key::W));
    }

    #[test]
    fn named_keys() {
        assert_eq!(translate_key_name("ArrowLeft"), Some(Key::ArrowLeft));
        assert_eq!(translate_key_name(" "), Some(Key::Space));
        assert_eq!(translate_key_name("7"), Some(Key::Digit7));
    }

    #[test]
    fn unknown_names_are_dropped() {
        assert_eq!(translate_key_name("F13"), None);
        assert_eq!(translate_key_name("é"), None);
        assert_eq!(translate_key_name(""), None);
    }
}
