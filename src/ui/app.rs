use crate::analysis::TextAnalyzer;
use crate::content::{AnalysisTask, ContentState};
use crate::coordinator::AnalysisCoordinator;
use crate::fetch::ContentFetcher;
use crate::mvi::Reducer;
use crate::ui::layout::{content_viewport, results_viewport, scroll_limit};
use crate::ui::render::{content_paragraph, results_paragraph};
use crate::ui::results::{result_lines, ResultsDialogState, ResultsIntent, ResultsReducer};
use ratatui::layout::Rect;
use tokio::sync::watch;

const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// What the screen needs from whoever owns the content session.
pub trait SessionControl {
    fn load_content(&self);
    fn clear_error(&self);
    fn subscribe(&self) -> watch::Receiver<ContentState>;
}

impl<F: ContentFetcher, A: TextAnalyzer> SessionControl for AnalysisCoordinator<F, A> {
    fn load_content(&self) {
        let _session = AnalysisCoordinator::load_content(self);
    }

    fn clear_error(&self) {
        AnalysisCoordinator::clear_error(self);
    }

    fn subscribe(&self) -> watch::Receiver<ContentState> {
        AnalysisCoordinator::subscribe(self)
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App<'a> {
    session: &'a dyn SessionControl,
    updates: watch::Receiver<ContentState>,
    state: ContentState,
    url: String,
    should_quit: bool,
    results_dialog: ResultsDialogState,
    content_scroll: u16,
    spinner: usize,
    /// Screen area of the last draw; scroll limits are measured against it.
    viewport: Rect,
}

impl<'a> App<'a> {
    pub fn new(session: &'a dyn SessionControl, url: impl Into<String>) -> Self {
        let mut updates = session.subscribe();
        let state = updates.borrow_and_update().clone();
        Self {
            session,
            updates,
            state,
            url: url.into(),
            should_quit: false,
            results_dialog: ResultsDialogState::default(),
            content_scroll: 0,
            spinner: 0,
            viewport: Rect::default(),
        }
    }

    pub fn state(&self) -> &ContentState {
        &self.state
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Pull the latest session state if it moved since the last look.
    pub fn sync(&mut self) -> bool {
        if !self.updates.has_changed().unwrap_or(false) {
            return false;
        }
        self.state = self.updates.borrow_and_update().clone();
        true
    }

    pub fn on_tick(&mut self) {
        if self.state.is_loading() {
            self.spinner = (self.spinner + 1) % SPINNER.len();
        }
        self.sync();
    }

    pub fn spinner_frame(&self) -> char {
        SPINNER[self.spinner]
    }

    pub fn load(&mut self) {
        tracing::info!(url = %self.url, "Load requested");
        dispatch_mvi!(self, results_dialog, ResultsReducer, ResultsIntent::Close);
        self.content_scroll = 0;
        self.session.load_content();
        self.sync();
    }

    pub fn dismiss_error(&mut self) {
        if self.state.error.is_some() {
            self.session.clear_error();
            self.sync();
        }
    }

    /// A task's button is enabled once it has stopped loading and produced something.
    pub fn is_task_enabled(&self, task: AnalysisTask) -> bool {
        !self.state.is_task_loading(task) && self.state.has_result(task)
    }

    /// Returns false when the task has nothing to show yet.
    pub fn open_results(&mut self, task: AnalysisTask) -> bool {
        if !self.is_task_enabled(task) {
            return false;
        }
        dispatch_mvi!(self, results_dialog, ResultsReducer, ResultsIntent::Open { task });
        true
    }

    pub fn close_results(&mut self) {
        dispatch_mvi!(self, results_dialog, ResultsReducer, ResultsIntent::Close);
    }

    pub fn results_dialog(&self) -> &ResultsDialogState {
        &self.results_dialog
    }

    pub fn scroll_results(&mut self, delta: i32) {
        let Some(task) = self.results_dialog.task() else {
            return;
        };
        if delta < 0 {
            dispatch_mvi!(self, results_dialog, ResultsReducer, ResultsIntent::ScrollUp);
        } else if delta > 0 {
            let max = self.results_scroll_limit(task);
            dispatch_mvi!(
                self,
                results_dialog,
                ResultsReducer,
                ResultsIntent::ScrollDown { max }
            );
        }
    }

    pub fn content_scroll(&self) -> u16 {
        self.content_scroll
    }

    pub fn scroll_content(&mut self, delta: i32) {
        let max = i64::from(self.content_scroll_limit());
        let next = (i64::from(self.content_scroll) + i64::from(delta)).clamp(0, max);
        self.content_scroll = u16::try_from(next).unwrap_or(u16::MAX);
    }

    /// Record the screen size so scrolling stops at the last wrapped row.
    pub fn set_viewport(&mut self, area: Rect) {
        if self.viewport == area {
            return;
        }
        self.viewport = area;
        self.content_scroll = self.content_scroll.min(self.content_scroll_limit());
    }

    fn content_scroll_limit(&self) -> u16 {
        let Some(content) = self.state.content.as_deref() else {
            return 0;
        };
        let viewport = content_viewport(self.viewport, self.state.error.is_some());
        scroll_limit(&content_paragraph(content), viewport)
    }

    fn results_scroll_limit(&self, task: AnalysisTask) -> u16 {
        let viewport = results_viewport(self.viewport, self.state.error.is_some());
        scroll_limit(&results_paragraph(result_lines(&self.state, task)), viewport)
    }

    pub fn scroll_content_to_top(&mut self) {
        self.content_scroll = 0;
    }
}
