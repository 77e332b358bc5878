//! Key mapping from terminal events to game actions.
//!
//! Terminal keys are first named with DOM-style key codes (`ArrowLeft`,
//! `KeyC`, `Space`, `Digit1`, ...) so that the same strings work in a
//! [`KeyBindings`] config, then looked up in a [`KeyMap`].

use arrayvec::ArrayVec;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::KeyBindings;
use crate::types::GameAction;

/// Key that always toggles pause.
pub const PAUSE_CODE: &str = "Escape";

/// Key that restarts the game unless a gameplay binding claims it.
pub const RESTART_CODE: &str = "KeyR";

/// DOM-style code for a terminal key, or `None` for keys with no stable name.
pub fn key_code_name(key: &KeyEvent) -> Option<String> {
    let name = match key.code {
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Insert => "Insert".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => {
            format!("Key{}", c.to_ascii_uppercase())
        }
        KeyCode::Char(c) if c.is_ascii_digit() => format!("Digit{}", c),
        KeyCode::Char(c) => match c {
            '-' => "Minus",
            '=' => "Equal",
            '[' => "BracketLeft",
            ']' => "BracketRight",
            ';' => "Semicolon",
            '\'' => "Quote",
            ',' => "Comma",
            '.' => "Period",
            '/' => "Slash",
            '\\' => "Backslash",
            '`' => "Backquote",
            _ => return None,
        }
        .to_string(),
        _ => return None,
    };
    Some(name)
}

/// Bound key codes for the six gameplay actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    bindings: ArrayVec<(String, GameAction), 6>,
}

impl KeyMap {
    pub fn new(keys: &KeyBindings) -> Self {
        let actions = [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::SoftDrop,
            GameAction::Rotate,
            GameAction::HardDrop,
            GameAction::Hold,
        ];
        let bindings = keys
            .entries()
            .into_iter()
            .zip(actions)
            .map(|((_, code), action)| (code.to_string(), action))
            .collect();
        Self { bindings }
    }

    /// Action bound to a DOM-style key code.
    ///
    /// Gameplay bindings take precedence, then `Escape` (pause) and `KeyR`
    /// (restart).
    pub fn action_for(&self, code: &str) -> Option<GameAction> {
        if let Some((_, action)) = self.bindings.iter().find(|(bound, _)| bound == code) {
            return Some(*action);
        }
        match code {
            PAUSE_CODE => Some(GameAction::TogglePause),
            RESTART_CODE => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Map a terminal key event to a game action.
    pub fn handle_key_event(&self, key: KeyEvent) -> Option<GameAction> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return None;
        }
        let code = key_code_name(&key)?;
        let action = self.action_for(&code);
        log::trace!("key {} -> {:?}", code, action);
        action
    }

    /// Key code bound to a gameplay action.
    pub fn code_for(&self, action: GameAction) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(_, bound)| *bound == action)
            .map(|(code, _)| code.as_str())
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new(&KeyBindings::default())
    }
}

/// Check if key should quit the game.
///
/// `q` quits unless it is bound to a gameplay action; Ctrl-C always quits.
pub fn should_quit(map: &KeyMap, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        && map.action_for("KeyQ").is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_key_code_names() {
        assert_eq!(key_code_name(&key(KeyCode::Left)).as_deref(), Some("ArrowLeft"));
        assert_eq!(key_code_name(&key(KeyCode::Char(' '))).as_deref(), Some("Space"));
        assert_eq!(key_code_name(&key(KeyCode::Char('c'))).as_deref(), Some("KeyC"));
        assert_eq!(key_code_name(&key(KeyCode::Char('C'))).as_deref(), Some("KeyC"));
        assert_eq!(key_code_name(&key(KeyCode::Char('7'))).as_deref(), Some("Digit7"));
        assert_eq!(key_code_name(&key(KeyCode::Esc)).as_deref(), Some("Escape"));
        assert_eq!(key_code_name(&key(KeyCode::F(5))).as_deref(), Some("F5"));
        assert_eq!(key_code_name(&key(KeyCode::Char('é'))), None);
    }

    #[test]
    fn test_default_bindings() {
        let map = KeyMap::default();
        assert_eq!(map.handle_key_event(key(KeyCode::Left)), Some(GameAction::MoveLeft));
        assert_eq!(map.handle_key_event(key(KeyCode::Right)), Some(GameAction::MoveRight));
        assert_eq!(map.handle_key_event(key(KeyCode::Down)), Some(GameAction::SoftDrop));
        assert_eq!(map.handle_key_event(key(KeyCode::Up)), Some(GameAction::Rotate));
        assert_eq!(
            map.handle_key_event(key(KeyCode::Char(' '))),
            Some(GameAction::HardDrop)
        );
        assert_eq!(map.handle_key_event(key(KeyCode::Char('c'))), Some(GameAction::Hold));
        assert_eq!(map.handle_key_event(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_host_keys() {
        let map = KeyMap::default();
        assert_eq!(
            map.handle_key_event(key(KeyCode::Esc)),
            Some(GameAction::TogglePause)
        );
        assert_eq!(
            map.handle_key_event(key(KeyCode::Char('r'))),
            Some(GameAction::Restart)
        );
    }

    #[test]
    fn test_custom_bindings() {
        let keys = KeyBindings {
            left: "KeyA".to_string(),
            right: "KeyD".to_string(),
            soft_drop: "KeyS".to_string(),
            rotate: "KeyW".to_string(),
            hard_drop: "Digit0".to_string(),
            hold: "KeyR".to_string(),
        };
        let map = KeyMap::new(&keys);
        assert_eq!(map.handle_key_event(key(KeyCode::Char('a'))), Some(GameAction::MoveLeft));
        assert_eq!(
            map.handle_key_event(key(KeyCode::Char('0'))),
            Some(GameAction::HardDrop)
        );
        // A gameplay binding shadows the restart key
        assert_eq!(map.handle_key_event(key(KeyCode::Char('r'))), Some(GameAction::Hold));
        assert_eq!(map.handle_key_event(key(KeyCode::Left)), None);
        assert_eq!(map.code_for(GameAction::Rotate), Some("KeyW"));
    }

    #[test]
    fn test_control_chords_are_ignored() {
        let map = KeyMap::default();
        assert_eq!(
            map.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        let map = KeyMap::default();
        assert!(should_quit(&map, key(KeyCode::Char('q'))));
        assert!(should_quit(
            &map,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
        assert!(!should_quit(&map, key(KeyCode::Char('x'))));
    }

    #[test]
    fn test_bound_q_does_not_quit() {
        let keys = KeyBindings {
            hold: "KeyQ".to_string(),
            ..KeyBindings::default()
        };
        let map = KeyMap::new(&keys);
        assert!(!should_quit(&map, key(KeyCode::Char('q'))));
        assert_eq!(map.handle_key_event(key(KeyCode::Char('q'))), Some(GameAction::Hold));
    }
}
