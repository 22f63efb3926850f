//! Key and mouse mapping from terminal events to game actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::pointer::to_coord;
use crate::types::{BoardLayout, GameAction, Phase};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::Start),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(GameAction::AdvanceLevel),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
        _ => None,
    }
}

/// Map a mouse event to a game action.
///
/// Only the left button press counts; drags, releases and scrolling are
/// ignored. On the menu and final screens a click anywhere starts a game,
/// otherwise it selects the tile under the pointer.
pub fn handle_mouse_event(
    mouse: MouseEvent,
    layout: &BoardLayout,
    phase: Phase,
) -> Option<GameAction> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => match phase {
            Phase::Menu | Phase::GameComplete => Some(GameAction::Start),
            _ => Some(GameAction::Select(to_coord(layout, mouse.column, mouse.row))),
        },
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
