//! Terminal event translation

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::{Input, SelectorState};
use super::view::{ScreenLayout, row_to_index};

/// Map a terminal event onto selector input; `None` for everything unbound
pub fn translate(event: &Event, layout: &ScreenLayout, state: &SelectorState) -> Option<Input> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => translate_key(key),
        Event::Mouse(mouse) => translate_mouse(mouse, layout, state),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent) -> Option<Input> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Input::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Input::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Input::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Input::Down),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Input::Confirm),
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| Input::Digit(d as u8)),
        _ => None,
    }
}

fn translate_mouse(mouse: &MouseEvent, layout: &ScreenLayout, state: &SelectorState) -> Option<Input> {
    match mouse.kind {
        MouseEventKind::ScrollUp => Some(Input::Up),
        MouseEventKind::ScrollDown => Some(Input::Down),
        MouseEventKind::Down(MouseButton::Left) => {
            row_to_index(layout, state, mouse.row).map(Input::Pick)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::ProfileEntry;
    use crate::selector::view::layout;
    use ratatui::layout::Rect;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn mouse(kind: MouseEventKind, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 3,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn screen(count: usize) -> (ScreenLayout, SelectorState) {
        let state = SelectorState::new((0..count).map(|i| ProfileEntry::new(format!("p{i}"))).collect());
        (layout(Rect::new(0, 0, 80, 24), &state), state)
    }

    #[test]
    fn test_quit_aliases() {
        let (l, s) = screen(2);
        for event in [
            key(KeyCode::Char('q'), KeyModifiers::NONE),
            key(KeyCode::Esc, KeyModifiers::NONE),
            key(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            assert_eq!(translate(&event, &l, &s), Some(Input::Quit));
        }
        assert_eq!(translate(&key(KeyCode::Char('c'), KeyModifiers::NONE), &l, &s), None);
        assert_eq!(translate(&key(KeyCode::Char('k'), KeyModifiers::CONTROL), &l, &s), None);
    }

    #[test]
    fn test_navigation_keys() {
        let (l, s) = screen(2);
        let none = KeyModifiers::NONE;
        assert_eq!(translate(&key(KeyCode::Up, none), &l, &s), Some(Input::Up));
        assert_eq!(translate(&key(KeyCode::Char('k'), none), &l, &s), Some(Input::Up));
        assert_eq!(translate(&key(KeyCode::Down, none), &l, &s), Some(Input::Down));
        assert_eq!(translate(&key(KeyCode::Char('j'), none), &l, &s), Some(Input::Down));
        assert_eq!(translate(&key(KeyCode::Enter, none), &l, &s), Some(Input::Confirm));
        assert_eq!(translate(&key(KeyCode::Char(' '), none), &l, &s), Some(Input::Confirm));
    }

    #[test]
    fn test_digits() {
        let (l, s) = screen(2);
        assert_eq!(
            translate(&key(KeyCode::Char('7'), KeyModifiers::NONE), &l, &s),
            Some(Input::Digit(7))
        );
        assert_eq!(translate(&key(KeyCode::Char('0'), KeyModifiers::NONE), &l, &s), None);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut event = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        let (l, s) = screen(1);
        assert_eq!(translate(&Event::Key(event), &l, &s), None);
    }

    #[test]
    fn test_mouse_wheel_and_click() {
        let (l, s) = screen(3);
        assert_eq!(translate(&mouse(MouseEventKind::ScrollUp, 0), &l, &s), Some(Input::Up));
        assert_eq!(translate(&mouse(MouseEventKind::ScrollDown, 0), &l, &s), Some(Input::Down));
        assert_eq!(
            translate(&mouse(MouseEventKind::Down(MouseButton::Left), 5), &l, &s),
            Some(Input::Pick(1))
        );
        assert_eq!(translate(&mouse(MouseEventKind::Down(MouseButton::Left), 1), &l, &s), None);
        assert_eq!(translate(&mouse(MouseEventKind::Down(MouseButton::Right), 5), &l, &s), None);
        assert_eq!(translate(&mouse(MouseEventKind::Moved, 5), &l, &s), None);
    }

    #[test]
    fn test_other_events_ignored() {
        let (l, s) = screen(1);
        assert_eq!(translate(&Event::Resize(80, 24), &l, &s), None);
        assert_eq!(translate(&Event::FocusGained, &l, &s), None);
    }
}
