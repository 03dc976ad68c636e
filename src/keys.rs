//! Input handling for the directory view.
//!
//! Terminal events are decoded into high-level application events. The
//! search input is always focused, like the original single-input layout:
//! printable characters edit the term, while navigation keys drive the
//! list cursor.

use crossterm::event::{
    Event,
    KeyCode,
    KeyEvent,
    KeyEventKind,
    KeyModifiers,
    MouseButton,
    MouseEvent,
    MouseEventKind,
};

/// One step of list cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMotion {
    /// One row up
    Up,
    /// One row down
    Down,
    /// One viewport up
    PageUp,
    /// One viewport down
    PageDown,
    /// First row
    Home,
    /// Last row
    End,
}

/// High-level application events decoded from terminal input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Append a character to the search term
    SearchPush(char),
    /// Delete the last grapheme of the search term
    SearchPop,
    /// Clear the search term
    SearchClear,
    /// Move the list cursor
    Move(ListMotion),
    /// Select the record under the list cursor
    SelectCursor,
    /// Left mouse click at a terminal cell
    Click {
        /// Zero-based terminal column
        column: u16,
        /// Zero-based terminal row
        row: u16,
    },
    /// The terminal was resized; the next draw adapts
    Resize,
    /// Exit the application
    Quit,
}

/// Decode a terminal event.
///
/// Returns `None` for events the view ignores.
pub fn decode_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) => decode_key(key),
        Event::Mouse(mouse) => decode_mouse(mouse),
        Event::Resize(_, _) => Some(AppEvent::Resize),
        _ => None,
    }
}

fn decode_key(key: KeyEvent) -> Option<AppEvent> {
    // Windows terminals report both press and release.
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(AppEvent::Quit)
        },
        KeyCode::Esc => Some(AppEvent::SearchClear),
        KeyCode::Backspace => Some(AppEvent::SearchPop),
        KeyCode::Enter => Some(AppEvent::SelectCursor),
        KeyCode::Up => Some(AppEvent::Move(ListMotion::Up)),
        KeyCode::Down => Some(AppEvent::Move(ListMotion::Down)),
        KeyCode::PageUp => Some(AppEvent::Move(ListMotion::PageUp)),
        KeyCode::PageDown => Some(AppEvent::Move(ListMotion::PageDown)),
        KeyCode::Home => Some(AppEvent::Move(ListMotion::Home)),
        KeyCode::End => Some(AppEvent::Move(ListMotion::End)),
        KeyCode::Char(c)
            if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(AppEvent::SearchPush(c))
        },
        _ => None,
    }
}

fn decode_mouse(mouse: MouseEvent) -> Option<AppEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            Some(AppEvent::Click { column: mouse.column, row: mouse.row })
        },
        MouseEventKind::ScrollUp => Some(AppEvent::Move(ListMotion::Up)),
        MouseEventKind::ScrollDown => Some(AppEvent::Move(ListMotion::Down)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;

    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn printable_characters_edit_the_search_term() {
        assert_eq!(
            decode_event(key(KeyCode::Char('a'), KeyModifiers::NONE)),
            Some(AppEvent::SearchPush('a'))
        );
        // Shifted characters arrive uppercased and still count as input.
        assert_eq!(
            decode_event(key(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(AppEvent::SearchPush('A'))
        );
    }

    #[test]
    fn control_chords_do_not_reach_the_search_term() {
        assert_eq!(
            decode_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(AppEvent::Quit)
        );
        assert_eq!(decode_event(key(KeyCode::Char('x'), KeyModifiers::CONTROL)), None);
    }

    #[test]
    fn navigation_keys_move_the_cursor() {
        assert_eq!(
            decode_event(key(KeyCode::Up, KeyModifiers::NONE)),
            Some(AppEvent::Move(ListMotion::Up))
        );
        assert_eq!(
            decode_event(key(KeyCode::End, KeyModifiers::NONE)),
            Some(AppEvent::Move(ListMotion::End))
        );
        assert_eq!(
            decode_event(key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(AppEvent::SelectCursor)
        );
    }

    #[test]
    fn release_events_are_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(decode_event(release), None);
    }
}
