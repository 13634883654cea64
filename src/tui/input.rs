//! Input handling for the TUI application.
//!
//! This module maps terminal key events to application messages. The same
//! key means different things depending on which region has focus: in the
//! text field every printable key is text, while in the list `q` quits.

use bubbletea_rs::event::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;
use super::state::Focus;

/// Maps a key event to an application message for the focused region.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message(key: &KeyMsg, focus: Focus) -> Option<AppMsg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.key {
            KeyCode::Char('c') => Some(AppMsg::Quit),
            _ => None,
        };
    }

    match key.key {
        KeyCode::Tab => return Some(AppMsg::FocusNext),
        KeyCode::Esc if focus != Focus::List => return Some(AppMsg::FocusList),
        _ => {}
    }

    match focus {
        Focus::Text => map_text_key(key.key),
        Focus::Rating => map_rating_key(key.key),
        Focus::List => map_list_key(key.key),
    }
}

const fn map_text_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Enter => Some(AppMsg::Submit),
        KeyCode::Backspace => Some(AppMsg::Backspace),
        KeyCode::Char(character) => Some(AppMsg::InsertChar(character)),
        _ => None,
    }
}

const fn map_rating_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Enter => Some(AppMsg::Submit),
        KeyCode::Right | KeyCode::Char('l' | '+') => Some(AppMsg::RatingNext),
        KeyCode::Left | KeyCode::Char('h' | '-') => Some(AppMsg::RatingPrevious),
        KeyCode::Char(digit) if digit.is_ascii_digit() => Some(AppMsg::RatingDigit(digit)),
        _ => None,
    }
}

const fn map_list_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::Char('e') | KeyCode::Enter => Some(AppMsg::EditSelected),
        KeyCode::Char('d') | KeyCode::Delete => Some(AppMsg::DeleteSelected),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        KeyCode::Esc => Some(AppMsg::EscapePressed),
        _ => None,
    }
}
