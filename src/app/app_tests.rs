use crate::app::app::HELP_TEXT;
use crate::app::{App, AppEvent, AppMode, RenderState};
use crate::config::Config;
use crate::error::TokenizeError;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
}

#[test]
fn test_app_starts_editing() {
    let app = App::default();
    assert_eq!(app.mode(), AppMode::Editing);
    assert!(app.outcome().is_none());
}

#[test]
fn test_app_handle_event_quit() {
    let mut app = App::default();
    app.handle_event(AppEvent::Quit);
    assert_eq!(app.mode(), AppMode::Quit);
}

#[test]
fn test_app_handle_event_help() {
    let mut app = App::default();
    app.handle_event(AppEvent::Help);
    assert_eq!(app.output_text(), HELP_TEXT);
}

#[test]
fn test_typing_then_ctrl_t_tokenizes() {
    let mut app = App::default();
    type_text(&mut app, "a~b");
    app.handle_key(ctrl('t'));

    let tokens = app.outcome().unwrap().as_ref().unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(app.status(), "2 tokens");
    assert!(app.output_text().starts_with("Phase 1 Output:\n"));
}

#[test]
fn test_missing_delimiter_shows_error() {
    let mut app = App::default();
    app.set_input("no delimiter here");
    app.handle_event(AppEvent::Tokenize);

    assert_eq!(
        app.outcome(),
        Some(&Err(TokenizeError::MissingDelimiter('~')))
    );
    assert_eq!(app.output_text(), "Error: No delimiter found.");
    assert!(app.get_render_state().is_error);
}

#[test]
fn test_new_tokenize_replaces_previous_outcome() {
    let mut app = App::default();
    app.set_input("x~y~z");
    app.tokenize();
    app.set_input("only~one");
    app.tokenize();

    let tokens = app.outcome().unwrap().as_ref().unwrap();
    let values: Vec<&str> = tokens.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(values, vec!["only", "one"]);
}

#[test]
fn test_configured_delimiter_is_used() {
    let config = Config {
        delimiter: '|',
        ..Config::default()
    };
    let mut app = App::new(&config);
    app.set_input("a|b");
    app.tokenize();
    assert_eq!(app.outcome().unwrap().as_ref().unwrap().len(), 2);

    app.set_input("a~b");
    app.tokenize();
    assert!(app.outcome().unwrap().is_err());
}

#[test]
fn test_command_deck_quit() {
    let mut app = App::default();
    app.handle_key(key(KeyCode::Esc));
    assert_eq!(app.mode(), AppMode::Command);
    type_text(&mut app, ":q");
    assert_eq!(app.get_render_state().command_line.as_deref(), Some(":q"));
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.mode(), AppMode::Quit);
}

#[test]
fn test_command_deck_tokenize_and_clear() {
    let mut app = App::default();
    app.set_input("one~two");
    app.handle_key(key(KeyCode::Esc));
    type_text(&mut app, ":t");
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.mode(), AppMode::Editing);
    assert!(app.outcome().is_some());

    app.handle_key(key(KeyCode::Esc));
    type_text(&mut app, ":clear");
    app.handle_key(key(KeyCode::Enter));
    assert!(app.outcome().is_none());
    assert!(app.buffer().is_empty());
}

#[test]
fn test_command_deck_escape_cancels() {
    let mut app = App::default();
    app.handle_key(key(KeyCode::Esc));
    type_text(&mut app, ":q");
    app.handle_key(key(KeyCode::Esc));
    assert_eq!(app.mode(), AppMode::Editing);
    assert!(app.buffer().is_empty());
}

#[test]
fn test_invalid_command_sets_status() {
    let mut app = App::default();
    app.handle_key(key(KeyCode::Esc));
    type_text(&mut app, "bogus");
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.status(), "Unknown command: bogus");
}

#[test]
fn test_load_missing_file_sets_status() {
    let mut app = App::default();
    app.handle_event(AppEvent::LoadFile("/nonexistent/tokenscope.txt".to_string()));
    assert!(app.status().starts_with("File not found"));
    assert!(app.buffer().is_empty());
}

#[test]
fn test_tab_switches_to_viewing_and_scrolls() {
    let mut app = App::default();
    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.mode(), AppMode::Viewing);
    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Up));
    assert_eq!(app.get_render_state().scroll, 1);
    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.mode(), AppMode::Editing);
}

#[test]
fn test_enter_inserts_newline_in_editing() {
    let mut app = App::default();
    type_text(&mut app, "a");
    app.handle_key(key(KeyCode::Enter));
    type_text(&mut app, "b");
    assert_eq!(app.buffer().text(), "a\nb");
    assert_eq!(app.get_render_state().cursor, (1, 1));
}

#[test]
fn test_paste_into_editing() {
    let mut app = App::default();
    app.handle_paste("pasted~text");
    assert_eq!(app.buffer().text(), "pasted~text");
}

#[test]
fn test_app_get_render_state_initial() {
    let app = App::default();
    let state: RenderState = app.get_render_state();
    assert_eq!(state.mode, AppMode::Editing);
    assert_eq!(state.input, "");
    assert_eq!(state.command_line, None);
    assert!(!state.is_error);
}
