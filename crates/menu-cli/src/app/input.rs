use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use menu_core::Action;

pub fn map_key(key: KeyEvent) -> Option<Action> {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => Some(Action::Back),
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Action::Quit),
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => Some(Action::JumpToEnd),
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => Some(Action::JumpToStart),
        (KeyCode::Enter, _) => Some(Action::Descend),
        (KeyCode::Up, _) => Some(Action::MoveUp),
        (KeyCode::Down, _) => Some(Action::MoveDown),
        (KeyCode::PageUp, _) => Some(Action::PageUp),
        (KeyCode::PageDown, _) => Some(Action::PageDown),
        (KeyCode::Home, _) => Some(Action::ToggleHelp),
        _ => None,
    }
}
