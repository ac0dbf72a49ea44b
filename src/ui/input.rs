use crate::ui::app::{App, Screen};
use crate::ui::setup::SetupIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    let finished = match app.screen() {
        Screen::Setup(_) => None,
        Screen::Quiz(quiz) => Some(quiz.final_score().is_some()),
    };
    match finished {
        None => handle_setup_key(app, key),
        Some(true) => handle_finished_key(app, key),
        Some(false) => handle_quiz_key(app, key),
    }
}

fn handle_setup_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.request_quit(),
        KeyCode::Up | KeyCode::BackTab => app.dispatch_setup(SetupIntent::FocusPrev),
        KeyCode::Down | KeyCode::Tab => app.dispatch_setup(SetupIntent::FocusNext),
        KeyCode::Left | KeyCode::Char('-') => app.dispatch_setup(SetupIntent::Decrement),
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
            app.dispatch_setup(SetupIntent::Increment)
        }
        KeyCode::Enter => app.start_quiz(),
        _ => {}
    }
}

fn handle_quiz_key(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Esc) {
        app.return_to_setup();
        return;
    }
    if matches!(key.code, KeyCode::Enter) {
        app.submit();
        return;
    }

    let Some(quiz) = app.quiz_mut() else {
        return;
    };
    match key.code {
        KeyCode::Char(ch) if ch.is_ascii_digit() => quiz.type_digit(ch),
        KeyCode::Backspace | KeyCode::Delete => quiz.delete_digit(),
        KeyCode::Up => quiz.move_keypad(-1, 0),
        KeyCode::Down => quiz.move_keypad(1, 0),
        KeyCode::Left => quiz.move_keypad(0, -1),
        KeyCode::Right => quiz.move_keypad(0, 1),
        KeyCode::Char(' ') => {
            quiz.press_keypad();
        }
        _ => {}
    }
}

/// After the last answer only "New Game" is live.
fn handle_finished_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            app.return_to_setup()
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
