use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use memory_match::core::Session;
use memory_match::input::{handle_key_event, handle_mouse_event, should_quit, to_coord};
use memory_match::term::{GameView, Viewport};
use memory_match::types::{Coord, GameAction, Phase};

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn click_on_drawn_tile_selects_it() {
    let view = GameView::default();
    let vp = Viewport::new(100, 30);
    let layout = view.board_layout(vp, 4);

    for row in 0..4 {
        for col in 0..4 {
            let c = Coord::new(row, col);
            let (x, y) = layout.tile_origin(c);
            // Any cell inside the tile, including the far corner.
            let far = (x + layout.tile_w - 1, y + layout.tile_h - 1);
            assert_eq!(to_coord(&layout, x as u16, y as u16), c);
            assert_eq!(to_coord(&layout, far.0 as u16, far.1 as u16), c);
            assert_eq!(
                handle_mouse_event(click(x as u16 + 1, y as u16), &layout, Phase::Playing),
                Some(GameAction::Select(c))
            );
        }
    }
}

#[test]
fn click_outside_board_is_rejected_by_session() {
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let layout = view.board_layout(vp, 4);

    let mut s = Session::new(1).unwrap();
    s.start(0.0);
    s.tick(3.0);

    let action = handle_mouse_event(click(0, 0), &layout, s.phase()).unwrap();
    let GameAction::Select(c) = action else {
        panic!("expected a selection");
    };
    assert!(c.row < 0 && c.col < 0);
    assert_eq!(s.apply_action(action, 3.1), Ok(false));
    assert_eq!(s.engine().selected_tile(), None);
}

#[test]
fn keys_drive_lifecycle() {
    let mut s = Session::new(1).unwrap();
    let start = handle_key_event(KeyEvent::from(KeyCode::Enter)).unwrap();
    assert_eq!(s.apply_action(start, 0.0), Ok(true));

    let restart = handle_key_event(KeyEvent::from(KeyCode::Char('r'))).unwrap();
    assert_eq!(s.apply_action(restart, 0.5), Ok(true));
    assert_eq!(s.phase().as_str(), "menu");
}

#[test]
fn quit_keys_are_not_actions() {
    for key in [
        KeyEvent::from(KeyCode::Char('q')),
        KeyEvent::from(KeyCode::Esc),
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    ] {
        assert!(should_quit(key));
        assert_eq!(handle_key_event(key), None);
    }
}

#[test]
fn click_on_menu_starts_the_game() {
    let view = GameView::default();
    let layout = view.board_layout(Viewport::new(80, 24), 4);

    let mut s = Session::new(2).unwrap();
    let action = handle_mouse_event(click(40, 12), &layout, s.phase()).unwrap();
    assert_eq!(action, GameAction::Start);
    assert_eq!(s.apply_action(action, 0.0), Ok(true));
    assert_eq!(s.phase().as_str(), "countdown");

    // Clicks during the countdown land on tiles and are refused.
    let action = handle_mouse_event(click(40, 12), &layout, s.phase()).unwrap();
    assert!(matches!(action, GameAction::Select(_)));
    assert_eq!(s.apply_action(action, 1.0), Ok(false));
}
