//! Key handling and rendering of the terminal front end.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use pagescan::content::{AnalysisTask, ContentState};
use pagescan::ui::app::{App, SessionControl};
use pagescan::ui::input::handle_key;
use pagescan::ui::render::draw;
use parking_lot::Mutex;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::collections::HashMap;
use tokio::sync::watch;

/// Records calls and publishes whatever state the test sets.
struct RecordingSession {
    tx: watch::Sender<ContentState>,
    calls: Mutex<Vec<&'static str>>,
}

impl RecordingSession {
    fn new(state: ContentState) -> Self {
        Self {
            tx: watch::channel(state).0,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().clone()
    }
}

impl SessionControl for RecordingSession {
    fn load_content(&self) {
        self.calls.lock().push("load");
        self.tx.send_replace(ContentState {
            loading_fifteenth: true,
            loading_every_fifteenth: true,
            loading_word_count: true,
            ..ContentState::default()
        });
    }

    fn clear_error(&self) {
        self.calls.lock().push("clear_error");
        self.tx.send_modify(|state| state.error = None);
    }

    fn subscribe(&self) -> watch::Receiver<ContentState> {
        self.tx.subscribe()
    }
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn finished() -> ContentState {
    ContentState {
        fifteenth_char: Some('l'),
        every_fifteenth_chars: vec!['l', 'h', 't'],
        word_counts: HashMap::from([("hello".to_string(), 2), ("tc".to_string(), 2)]),
        content: Some("Hello world hello TC world. This is a test string for TC".to_string()),
        ..ContentState::default()
    }
}

fn render(app: &App<'_>) -> String {
    render_sized(app, 100, 30)
}

fn render_sized(app: &App<'_>, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn l_starts_a_load() {
    let session = RecordingSession::new(ContentState::default());
    let mut app = App::new(&session, "http://example.com");

    handle_key(&mut app, press(KeyCode::Char('l')));

    assert_eq!(session.calls(), vec!["load"]);
    assert!(app.state().is_loading());
}

#[test]
fn key_release_is_ignored() {
    let session = RecordingSession::new(ContentState::default());
    let mut app = App::new(&session, "http://example.com");

    let mut key = press(KeyCode::Char('l'));
    key.kind = KeyEventKind::Release;
    handle_key(&mut app, key);

    assert!(session.calls().is_empty());
}

#[test]
fn d_dismisses_error_only_when_present() {
    let session = RecordingSession::new(finished());
    let mut app = App::new(&session, "http://example.com");
    handle_key(&mut app, press(KeyCode::Char('d')));
    assert!(session.calls().is_empty());

    session.tx.send_modify(|state| state.error = Some("Network error".to_string()));
    app.sync();
    handle_key(&mut app, press(KeyCode::Char('d')));
    assert_eq!(session.calls(), vec!["clear_error"]);
    assert_eq!(app.state().error, None);
}

#[test]
fn number_keys_open_finished_results() {
    let session = RecordingSession::new(finished());
    let mut app = App::new(&session, "http://example.com");

    handle_key(&mut app, press(KeyCode::Char('3')));
    assert_eq!(app.results_dialog().task(), Some(AnalysisTask::WordCount));

    handle_key(&mut app, press(KeyCode::Esc));
    assert!(!app.results_dialog().is_visible());
    assert!(!app.should_quit());
}

#[test]
fn buttons_stay_disabled_while_loading() {
    let session = RecordingSession::new(ContentState::default());
    let mut app = App::new(&session, "http://example.com");
    handle_key(&mut app, press(KeyCode::Char('l')));

    for key in ['1', '2', '3'] {
        handle_key(&mut app, press(KeyCode::Char(key)));
        assert!(!app.results_dialog().is_visible());
    }
}

#[test]
fn q_and_ctrl_c_quit() {
    let session = RecordingSession::new(ContentState::default());
    let mut app = App::new(&session, "http://example.com");
    handle_key(&mut app, press(KeyCode::Char('q')));
    assert!(app.should_quit());

    let mut app = App::new(&session, "http://example.com");
    handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

#[test]
fn q_inside_popup_only_closes_it() {
    let session = RecordingSession::new(finished());
    let mut app = App::new(&session, "http://example.com");
    handle_key(&mut app, press(KeyCode::Char('1')));
    handle_key(&mut app, press(KeyCode::Char('q')));
    assert!(!app.results_dialog().is_visible());
    assert!(!app.should_quit());
}

#[test]
fn screen_shows_content_results_and_error() {
    let session = RecordingSession::new(ContentState {
        error: Some("Error in Word Count: boom".to_string()),
        ..finished()
    });
    let app = App::new(&session, "http://example.com");
    let screen = render(&app);

    assert!(screen.contains("http://example.com"));
    assert!(screen.contains("Hello world hello TC"));
    assert!(screen.contains("Error in Word Count: boom"));
    assert!(screen.contains("[1] 15th Character"));
    assert!(screen.contains("[3] Word Count"));
}

#[test]
fn popup_lists_word_counts() {
    let session = RecordingSession::new(finished());
    let mut app = App::new(&session, "http://example.com");
    handle_key(&mut app, press(KeyCode::Char('3')));
    let screen = render(&app);

    assert!(screen.contains("hello: 2"));
    assert!(screen.contains("tc: 2"));
}

#[test]
fn idle_screen_prompts_for_load() {
    let session = RecordingSession::new(ContentState::default());
    let app = App::new(&session, "http://example.com");
    assert!(render(&app).contains("Press L to load the page"));
}

#[test]
fn single_line_page_scrolls_to_its_end() {
    let session = RecordingSession::new(ContentState {
        content: Some(format!("{}ENDMARK", "word ".repeat(2000))),
        ..finished()
    });
    let mut app = App::new(&session, "http://example.com");
    app.set_viewport(Rect::new(0, 0, 80, 30));
    assert!(!render_sized(&app, 80, 30).contains("ENDMARK"));

    for _ in 0..50 {
        handle_key(&mut app, press(KeyCode::PageDown));
    }

    assert!(app.content_scroll() > 0);
    assert!(render_sized(&app, 80, 30).contains("ENDMARK"));

    // Already at the bottom: further paging stays put.
    let bottom = app.content_scroll();
    handle_key(&mut app, press(KeyCode::PageDown));
    assert_eq!(app.content_scroll(), bottom);
}

#[test]
fn long_strided_list_scrolls_inside_popup() {
    let mut chars = vec!['x'; 600];
    chars.push('Z');
    let session = RecordingSession::new(ContentState {
        every_fifteenth_chars: chars,
        ..finished()
    });
    let mut app = App::new(&session, "http://example.com");
    app.set_viewport(Rect::new(0, 0, 80, 30));
    handle_key(&mut app, press(KeyCode::Char('2')));
    assert!(!render_sized(&app, 80, 30).contains("Z"));

    for _ in 0..200 {
        handle_key(&mut app, press(KeyCode::Down));
    }

    assert!(app.results_dialog().scroll() > 1);
    assert!(render_sized(&app, 80, 30).contains("Z"));
}
