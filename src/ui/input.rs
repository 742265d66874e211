use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::generator::GeneratorIntent;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || matches!(key.code, KeyCode::Esc) {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Enter => app.submit(),
        KeyCode::Tab => app.dispatch(GeneratorIntent::FocusNext),
        KeyCode::BackTab => app.dispatch(GeneratorIntent::FocusPrev),
        KeyCode::Down => app.dispatch(GeneratorIntent::FocusNext),
        KeyCode::Up => app.dispatch(GeneratorIntent::FocusPrev),
        KeyCode::Left => app.dispatch(GeneratorIntent::StepLength(-1)),
        KeyCode::Right => app.dispatch(GeneratorIntent::StepLength(1)),
        KeyCode::PageDown => app.dispatch(GeneratorIntent::Scroll(10)),
        KeyCode::PageUp => app.dispatch(GeneratorIntent::Scroll(-10)),
        KeyCode::Backspace => app.dispatch(GeneratorIntent::Backspace),
        KeyCode::Char(ch) => {
            if !key.modifiers.contains(KeyModifiers::CONTROL) {
                app.dispatch(GeneratorIntent::Input(ch));
            }
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
