//! Key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Presentation-level commands decoded from key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    CursorNext,
    CursorPrev,
    /// Pick up or put down the item under the cursor
    ToggleSelect,
    /// Place the selected item into the category at this zero-based column
    AssignTo(usize),
    CheckAnswers,
    Reset,
    /// The main button: check answers, or play again once scored
    Primary,
    ShowInfo,
    CloseInfo,
    Quit,
}

pub fn command_for_key(key: KeyEvent, info_open: bool) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Command::Quit);
    }

    // The info sheet is modal
    if info_open {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('i') => Some(Command::CloseInfo),
            KeyCode::Char('q') => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Down | KeyCode::Right | KeyCode::Tab | KeyCode::Char('j') => {
            Some(Command::CursorNext)
        }
        KeyCode::Up | KeyCode::Left | KeyCode::BackTab | KeyCode::Char('k') => {
            Some(Command::CursorPrev)
        }
        KeyCode::Char(' ') => Some(Command::ToggleSelect),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| usize::try_from(d).ok())
            .map(|d| Command::AssignTo(d - 1)),
        KeyCode::Char('c') => Some(Command::CheckAnswers),
        KeyCode::Char('r') => Some(Command::Reset),
        KeyCode::Enter => Some(Command::Primary),
        KeyCode::Char('i') => Some(Command::ShowInfo),
        KeyCode::Char('q') => Some(Command::Quit),
        _ => None,
    }
}
