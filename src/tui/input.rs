//! Keyboard and mouse dispatch

use crate::app::App;
use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;
use std::time::Instant;

/// Handle a key press
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Left | KeyCode::Char('h') => app.move_focus(-1),
        KeyCode::Right | KeyCode::Char('l') => app.move_focus(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_focus_rows(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_focus_rows(1),
        KeyCode::Enter | KeyCode::Char(' ') => app.select_focused(),
        _ => {}
    }
}

/// Handle a mouse event.
///
/// Movement drives the icon tooltips, left click selects, the wheel scrolls.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, now: Instant) {
    let position = Position::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            app.pointer_moved(Some(position), now);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            app.pointer_moved(Some(position), now);
            app.click(position);
        }
        MouseEventKind::ScrollUp => app.scroll_by(-1),
        MouseEventKind::ScrollDown => app.scroll_by(1),
        _ => {}
    }
}
