use dioxus::prelude::{Key, Modifiers};

/// Keyboard actions handled while the player has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Shortcut {
    TogglePlayback,
    ToggleMute,
    ToggleFullscreen,
}

pub(super) fn shortcut_for_key(key: &Key, modifiers: Modifiers) -> Option<Shortcut> {
    if modifiers.intersects(Modifiers::CONTROL | Modifiers::META | Modifiers::ALT) {
        return None;
    }

    match key {
        Key::MediaPlayPause => Some(Shortcut::TogglePlayback),
        Key::Character(text) => match text.as_str() {
            " " | "k" | "K" => Some(Shortcut::TogglePlayback),
            "m" | "M" => Some(Shortcut::ToggleMute),
            "f" | "F" => Some(Shortcut::ToggleFullscreen),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(text: &str) -> Key {
        Key::Character(text.to_string())
    }

    #[test]
    fn maps_player_keys() {
        let none = Modifiers::empty();
        assert_eq!(shortcut_for_key(&key(" "), none), Some(Shortcut::TogglePlayback));
        assert_eq!(shortcut_for_key(&key("k"), none), Some(Shortcut::TogglePlayback));
        assert_eq!(shortcut_for_key(&key("M"), none), Some(Shortcut::ToggleMute));
        assert_eq!(shortcut_for_key(&key("f"), none), Some(Shortcut::ToggleFullscreen));
        assert_eq!(
            shortcut_for_key(&Key::MediaPlayPause, none),
            Some(Shortcut::TogglePlayback)
        );
        assert_eq!(shortcut_for_key(&key("x"), none), None);
        assert_eq!(shortcut_for_key(&Key::Enter, none), None);
    }

    #[test]
    fn shift_is_allowed_but_other_modifiers_are_not() {
        assert_eq!(
            shortcut_for_key(&key("F"), Modifiers::SHIFT),
            Some(Shortcut::ToggleFullscreen)
        );
        assert_eq!(shortcut_for_key(&key("f"), Modifiers::CONTROL), None);
        assert_eq!(shortcut_for_key(&key("m"), Modifiers::META), None);
        assert_eq!(shortcut_for_key(&key(" "), Modifiers::ALT), None);
    }
}
