use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::session::SessionIntent;

/// User command produced by a keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    TogglePause,
}

impl From<Command> for SessionIntent {
    fn from(command: Command) -> Self {
        match command {
            Command::Quit => SessionIntent::Quit,
            Command::TogglePause => SessionIntent::TogglePause,
        }
    }
}

/// Maps a key event to a command. Unbound keys yield `None`.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Raw mode swallows SIGINT, so Ctrl+C has to be handled as a key.
    if is_ctrl_char(key, 'c') {
        return Some(Command::Quit);
    }
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }

    match key.code {
        KeyCode::Char(ch) => command_for_char(ch),
        _ => None,
    }
}

/// 'q'/'Q' quits, 'p'/'P' toggles pause.
pub fn command_for_char(ch: char) -> Option<Command> {
    match ch.to_ascii_lowercase() {
        'q' => Some(Command::Quit),
        'p' => Some(Command::TogglePause),
        _ => None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn letters_are_case_insensitive() {
        for ch in ['q', 'Q'] {
            assert_eq!(
                command_for_key(press(KeyCode::Char(ch), KeyModifiers::NONE)),
                Some(Command::Quit)
            );
        }
        assert_eq!(
            command_for_key(press(KeyCode::Char('P'), KeyModifiers::SHIFT)),
            Some(Command::TogglePause)
        );
    }

    #[test]
    fn ctrl_c_quits() {
        assert_eq!(
            command_for_key(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(command_for_key(press(KeyCode::Char('x'), KeyModifiers::NONE)), None);
        assert_eq!(command_for_key(press(KeyCode::Esc, KeyModifiers::NONE)), None);
        assert_eq!(command_for_key(press(KeyCode::Char('p'), KeyModifiers::CONTROL)), None);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut key = press(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(command_for_key(key), None);
    }
}
