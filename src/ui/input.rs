use crate::ui::app::App;
use crate::ui::form::{FormFocus, FormIntent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key event to form intents.
///
/// Ctrl+Q and Ctrl+C always quit. While the error dialog is open only the
/// acknowledge keys do anything. Esc quits only when no dialog is in the
/// way.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.form().error_visible() {
        if matches!(
            key.code,
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')
        ) {
            app.dispatch(FormIntent::DismissError);
        }
        return;
    }

    if key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }

    let on_group = matches!(
        app.form().focus,
        FormFocus::FromGroup | FormFocus::ToGroup
    );

    let intent = match key.code {
        KeyCode::Tab | KeyCode::Down => FormIntent::FocusNext,
        KeyCode::BackTab | KeyCode::Up => FormIntent::FocusPrev,
        KeyCode::Left if on_group => FormIntent::MoveCursor(-1),
        KeyCode::Right if on_group => FormIntent::MoveCursor(1),
        KeyCode::Enter if on_group => FormIntent::SelectFocused,
        KeyCode::Enter => FormIntent::Submit,
        KeyCode::Char(' ') if on_group => FormIntent::SelectFocused,
        KeyCode::Backspace => FormIntent::Backspace,
        KeyCode::Char('u') if has_ctrl(key) => FormIntent::ClearInput,
        KeyCode::Char(c) if on_group && ('1'..='4').contains(&c) => {
            FormIntent::SelectIndex(c as usize - '1' as usize)
        }
        KeyCode::Char(c) if !has_ctrl(key) => FormIntent::TypeChar(c),
        _ => return,
    };
    app.dispatch(intent);
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn has_ctrl(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
}
