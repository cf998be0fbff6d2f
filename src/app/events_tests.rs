//! Tests for keyboard event handling

use super::*;
use crate::test_utils::test_helpers::*;
use ratatui::crossterm::event::KeyEventState;

fn press(app: &mut App, code: KeyCode, now: Instant) {
    app.handle_event(Event::Key(key(code)), now);
}

fn type_text(app: &mut App, text: &str, now: Instant) {
    for c in text.chars() {
        press(app, KeyCode::Char(c), now);
    }
}

#[test]
fn test_typing_debounces_into_one_lookup() {
    let start = Instant::now();
    let (mut app, mut worker) = connected_app();

    type_text(&mut app, "so", start);
    app.tick(after(start, 100));
    type_text(&mut app, "fa", after(start, 200));
    app.tick(after(start, 400));
    assert!(worker.sent().is_empty());

    app.tick(after(start, 500));

    let sent = worker.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].query, "sofa");
    assert_eq!(app.query(), "sofa");
}

#[test]
fn test_response_shows_panel() {
    let start = Instant::now();
    let (mut app, mut worker) = connected_app();
    type_text(&mut app, "di", start);
    app.tick(after(start, DEBOUNCE_MS));
    let request = worker.sent().remove(0);

    worker.answer(request.request_id, furniture());
    app.tick(after(start, DEBOUNCE_MS + 50));

    assert!(app.controller.is_visible());
    assert_eq!(app.controller.suggestions().len(), 3);
}

#[test]
fn test_clearing_input_hides_panel_without_lookup() {
    let start = Instant::now();
    let (mut app, mut worker) = connected_app();
    type_text(&mut app, "d", start);
    app.tick(after(start, DEBOUNCE_MS));
    let request_id = worker.sent()[0].request_id;
    worker.answer(request_id, furniture());
    app.tick(after(start, DEBOUNCE_MS));
    assert!(app.controller.is_visible());

    press(&mut app, KeyCode::Backspace, after(start, 400));

    assert_eq!(app.query(), "");
    assert!(!app.controller.is_visible());
    app.tick(after(start, 2000));
    assert!(worker.sent().is_empty());
}

#[test]
fn test_ctrl_m_keeps_search_input_on_one_line() {
    let start = Instant::now();
    let (mut app, mut worker) = connected_app();

    type_text(&mut app, "so", start);
    app.handle_event(
        Event::Key(key_with_mods(KeyCode::Char('m'), KeyModifiers::CONTROL)),
        start,
    );
    type_text(&mut app, "fa", start);
    app.tick(after(start, DEBOUNCE_MS));

    assert_eq!(app.textarea.lines().len(), 1);
    assert_eq!(app.query(), "sofa");
    let sent = worker.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].query, "sofa");
}

#[test]
fn test_cursor_movement_does_not_trigger_lookup() {
    let start = Instant::now();
    let (mut app, mut worker) = connected_app();
    app.set_query("lamp");

    press(&mut app, KeyCode::Left, start);
    press(&mut app, KeyCode::Home, start);
    app.tick(after(start, 1000));

    assert!(worker.sent().is_empty());
}

#[test]
fn test_enter_on_focused_suggestion_submits_it() {
    let start = Instant::now();
    let (mut app, worker) = connected_app();
    type_text(&mut app, "ab", start);
    worker.answer(1, furniture());
    app.tick(start);

    press(&mut app, KeyCode::Down, start);
    press(&mut app, KeyCode::Enter, start);

    assert_eq!(app.query(), "abc");
    assert!(!app.controller.is_visible());
    assert!(app.should_quit());
    assert_eq!(
        app.submitted_url().map(|u| u.as_str()),
        Some("http://shop.local/items/?query=abc")
    );
}

#[test]
fn test_enter_without_focus_submits_typed_text() {
    let start = Instant::now();
    let (mut app, worker) = connected_app();
    type_text(&mut app, "ab", start);
    worker.answer(1, furniture());
    app.tick(start);

    press(&mut app, KeyCode::Enter, start);

    assert_eq!(app.query(), "ab");
    assert!(!app.controller.is_visible());
    assert_eq!(
        app.submitted_url().map(|u| u.as_str()),
        Some("http://shop.local/items/?query=ab")
    );
}

#[test]
fn test_escape_closes_panel_then_quits() {
    let start = Instant::now();
    let (mut app, worker) = connected_app();
    type_text(&mut app, "ab", start);
    worker.answer(1, furniture());
    app.tick(start);

    press(&mut app, KeyCode::Esc, start);
    assert!(!app.controller.is_visible());
    assert_eq!(app.query(), "ab");
    assert!(!app.should_quit());

    press(&mut app, KeyCode::Esc, start);
    assert!(app.should_quit());
    assert!(app.submitted_url().is_none());
}

#[test]
fn test_arrow_keys_move_focus() {
    let start = Instant::now();
    let (mut app, worker) = connected_app();
    type_text(&mut app, "ab", start);
    worker.answer(1, furniture());
    app.tick(start);

    press(&mut app, KeyCode::Up, start);
    assert_eq!(app.controller.focus().get(), Some(2));
    press(&mut app, KeyCode::Down, start);
    assert_eq!(app.controller.focus().get(), Some(0));
}

#[test]
fn test_ctrl_c_quits() {
    let mut app = test_app();
    app.handle_event(
        Event::Key(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Instant::now(),
    );
    assert!(app.should_quit());
    assert_eq!(app.query(), "");
}

#[test]
fn test_key_release_is_ignored() {
    let mut app = test_app();
    let release = KeyEvent {
        code: KeyCode::Char('x'),
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };

    app.handle_event(Event::Key(release), Instant::now());

    assert_eq!(app.query(), "");
}
