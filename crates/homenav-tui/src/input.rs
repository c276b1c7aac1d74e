//! Crossterm key events to the core key model.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use homenav_core::{Key, KeyInput, Modifiers};

pub fn to_key_input(event: &KeyEvent) -> KeyInput {
    let key = match event.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        _ => Key::Other,
    };

    let m = event.modifiers;
    KeyInput {
        key,
        modifiers: Modifiers {
            control: m.contains(KeyModifiers::CONTROL),
            command: m.intersects(KeyModifiers::SUPER | KeyModifiers::META),
            alt: m.contains(KeyModifiers::ALT),
            shift: m.contains(KeyModifiers::SHIFT),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_keys() {
        let input = to_key_input(&KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE));
        assert_eq!(input, KeyInput::new(Key::Char('r')));

        let input = to_key_input(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(input.key, Key::Escape);

        let input = to_key_input(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(input.key, Key::Enter);
    }

    #[test]
    fn test_unrouted_keys_are_other() {
        for code in [KeyCode::Tab, KeyCode::Backspace, KeyCode::Up, KeyCode::F(5)] {
            let input = to_key_input(&KeyEvent::new(code, KeyModifiers::NONE));
            assert_eq!(input.key, Key::Other);
        }
    }

    #[test]
    fn test_modifiers() {
        let input = to_key_input(&KeyEvent::new(KeyCode::Char('h'), KeyModifiers::CONTROL));
        assert!(input.modifiers.control);
        assert!(input.is_chord());

        let input = to_key_input(&KeyEvent::new(KeyCode::Char('k'), KeyModifiers::SUPER));
        assert!(input.modifiers.command);

        let input = to_key_input(&KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT));
        assert!(input.modifiers.shift);
        assert!(!input.is_chord());
    }
}
