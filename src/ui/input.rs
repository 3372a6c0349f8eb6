use crate::content::AnalysisTask;
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

const PAGE: i32 = 10;

pub fn handle_key(app: &mut App<'_>, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.results_dialog().is_visible() {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.close_results(),
            KeyCode::Up => app.scroll_results(-1),
            KeyCode::Down => app.scroll_results(1),
            KeyCode::Char('d') | KeyCode::Char('D') => app.dismiss_error(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.request_quit(),
        KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('r') => app.load(),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Esc => app.dismiss_error(),
        KeyCode::Char('1') => {
            app.open_results(AnalysisTask::FifteenthChar);
        }
        KeyCode::Char('2') => {
            app.open_results(AnalysisTask::EveryFifteenthChar);
        }
        KeyCode::Char('3') => {
            app.open_results(AnalysisTask::WordCount);
        }
        KeyCode::Up => app.scroll_content(-1),
        KeyCode::Down => app.scroll_content(1),
        KeyCode::PageUp => app.scroll_content(-PAGE),
        KeyCode::PageDown => app.scroll_content(PAGE),
        KeyCode::Home => app.scroll_content_to_top(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, target: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&target))
}
